// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Environment resolution
//!
//! The origin is injected at startup instead of being sniffed from ambient
//! state, which keeps [`EnvironmentResolver::resolve`] pure.

use std::time::Duration;

use gg_config::{ClientConfig, EnvironmentPolicy};
use serde::Serialize;
use url::Url;

/// Where the client is being served from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    origin: Url,
}

impl ExecutionContext {
    pub fn new(origin: Url) -> Self {
        Self { origin }
    }

    pub fn parse(origin: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(origin)?))
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }
}

/// Class of origin a strategy is chosen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EnvironmentClass {
    /// A development machine where the operator runs the backend
    Local,
    /// Any other (deployed or public) host
    Deployed,
}

impl EnvironmentClass {
    /// Banner shown by the front end
    pub fn status_label(self) -> &'static str {
        match self {
            EnvironmentClass::Local => "LOCAL CONNECTION",
            EnvironmentClass::Deployed => "ONLINE",
        }
    }
}

/// Parameters governing one analysis attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    pub environment: EnvironmentClass,
    pub endpoint: Url,
    pub timeout: Duration,
    pub fallback_on_failure: bool,
    pub skip_remote_call: bool,
    pub demo_delay: Duration,
}

impl Strategy {
    fn from_policy(environment: EnvironmentClass, policy: &EnvironmentPolicy) -> Self {
        Self {
            environment,
            endpoint: policy.service_url.clone(),
            timeout: policy.timeout(),
            fallback_on_failure: policy.fallback_on_failure,
            skip_remote_call: policy.skip_remote_call,
            demo_delay: policy.demo_delay(),
        }
    }
}

/// Maps an [`ExecutionContext`] to a [`Strategy`] using configured policy
#[derive(Debug, Clone)]
pub struct EnvironmentResolver {
    local_hosts: Vec<String>,
    local: EnvironmentPolicy,
    remote: EnvironmentPolicy,
}

impl EnvironmentResolver {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            local_hosts: config.local_hosts.iter().map(|h| normalize_host(h)).collect(),
            local: config.local.clone(),
            remote: config.remote.clone(),
        }
    }

    /// Local when the origin host is one of the configured development hosts
    pub fn classify(&self, context: &ExecutionContext) -> EnvironmentClass {
        let is_local = context
            .origin()
            .host_str()
            .map(normalize_host)
            .is_some_and(|host| self.local_hosts.contains(&host));

        if is_local {
            EnvironmentClass::Local
        } else {
            EnvironmentClass::Deployed
        }
    }

    pub fn resolve(&self, context: &ExecutionContext) -> Strategy {
        match self.classify(context) {
            EnvironmentClass::Local => Strategy::from_policy(EnvironmentClass::Local, &self.local),
            EnvironmentClass::Deployed => {
                Strategy::from_policy(EnvironmentClass::Deployed, &self.remote)
            }
        }
    }
}

/// Lowercase and strip IPv6 brackets so `[::1]` and `::1` compare equal
fn normalize_host(host: &str) -> String {
    host.trim_start_matches('[').trim_end_matches(']').to_ascii_lowercase()
}

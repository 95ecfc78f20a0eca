// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Strongly typed view of the merged configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_LOCAL_SERVICE_URL: &str = "http://localhost:8000/analyze";
pub const DEFAULT_REMOTE_SERVICE_URL: &str = "https://your-render-name.onrender.com/analyze";
pub const DEFAULT_LOCAL_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_LOCAL_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "::1"];

/// Client configuration after all layers are merged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ClientConfig {
    /// Origin hosts treated as a local development machine
    pub local_hosts: Vec<String>,
    /// User agent sent with every analysis request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Policy applied when served from a local development host
    pub local: EnvironmentPolicy,
    /// Policy applied everywhere else
    pub remote: EnvironmentPolicy,
}

/// How analysis requests behave in one class of environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct EnvironmentPolicy {
    pub service_url: Url,
    pub timeout_ms: u64,
    pub fallback_on_failure: bool,
    #[serde(default)]
    pub skip_remote_call: bool,
    /// Pause before showing a result when the remote call is skipped
    #[serde(default)]
    pub demo_delay_ms: u64,
}

impl EnvironmentPolicy {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn demo_delay(&self) -> Duration {
        Duration::from_millis(self.demo_delay_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            local_hosts: DEFAULT_LOCAL_HOSTS.iter().map(|h| h.to_string()).collect(),
            user_agent: None,
            local: EnvironmentPolicy {
                service_url: static_url(DEFAULT_LOCAL_SERVICE_URL),
                timeout_ms: DEFAULT_LOCAL_TIMEOUT_MS,
                fallback_on_failure: true,
                skip_remote_call: false,
                demo_delay_ms: 0,
            },
            remote: EnvironmentPolicy {
                service_url: static_url(DEFAULT_REMOTE_SERVICE_URL),
                timeout_ms: DEFAULT_REMOTE_TIMEOUT_MS,
                fallback_on_failure: true,
                skip_remote_call: false,
                demo_delay_ms: 0,
            },
        }
    }
}

fn static_url(raw: &'static str) -> Url {
    Url::parse(raw).expect("built-in service URL must parse")
}

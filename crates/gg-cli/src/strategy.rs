// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only
#![allow(clippy::disallowed_methods)] // CLI commands intentionally print to stdout/stderr

//! `gitgrade strategy`

use anyhow::Result;
use clap::Args;
use gg_core::{EnvironmentResolver, ExecutionContext};

use crate::render;
use crate::Cli;

#[derive(Args, Clone, Debug)]
pub struct StrategyArgs {
    /// Print the strategy as JSON
    #[arg(long)]
    pub json: bool,
}

impl StrategyArgs {
    pub fn run(&self, cli: &Cli) -> Result<()> {
        let resolved = cli.load_config()?;
        let resolver = EnvironmentResolver::new(&resolved.config);
        let strategy = resolver.resolve(&ExecutionContext::new(cli.origin.clone()));

        if self.json {
            let doc = serde_json::json!({
                "origin": cli.origin,
                "environment": strategy.environment,
                "system-status": strategy.environment.status_label(),
                "endpoint": strategy.endpoint,
                "timeout-ms": strategy.timeout.as_millis() as u64,
                "fallback-on-failure": strategy.fallback_on_failure,
                "skip-remote-call": strategy.skip_remote_call,
                "demo-delay-ms": strategy.demo_delay.as_millis() as u64,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        } else {
            print!("{}", render::strategy(&cli.origin, &strategy));
        }
        Ok(())
    }
}

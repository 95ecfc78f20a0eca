// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only
#![allow(clippy::disallowed_methods)] // CLI commands intentionally print to stdout/stderr

//! `gitgrade analyze`

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use gg_core::{AnalysisOrchestrator, EnvironmentResolver, ExecutionContext};
use gg_domain_types::{AnalysisRequest, RequestStatus};
use gg_rest_client::{RestClient, DEFAULT_USER_AGENT};

use crate::render;
use crate::Cli;

/// Exit status for input rejected before any request is made
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Args, Clone, Debug)]
pub struct AnalyzeArgs {
    /// Repository URL or `owner/name` identifier
    pub url: String,

    /// Print the view model as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    pub async fn run(&self, cli: &Cli) -> Result<ExitCode> {
        let resolved = cli.load_config()?;
        let config = &resolved.config;

        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let client = RestClient::with_user_agent(user_agent)?;
        let resolver = EnvironmentResolver::new(config);
        let orchestrator =
            AnalysisOrchestrator::new(client, resolver, ExecutionContext::new(cli.origin.clone()));

        let strategy = orchestrator.strategy();
        tracing::info!(
            origin = %cli.origin,
            environment = %strategy.environment,
            endpoint = %strategy.endpoint,
            "strategy resolved"
        );

        let request = match AnalysisRequest::new(&self.url) {
            Ok(request) => request,
            Err(err) => {
                eprintln!("error: {err}");
                return Ok(ExitCode::from(EXIT_INVALID_INPUT));
            }
        };

        if !self.json {
            eprintln!("SCANNING...");
        }
        let view = orchestrator.analyze(request).await;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&render::report(&strategy, &view))?);
        } else {
            print!("{}", render::text(&strategy, &view));
        }

        Ok(match view.status() {
            RequestStatus::Succeeded => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        })
    }
}

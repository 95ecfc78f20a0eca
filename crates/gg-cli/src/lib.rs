// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::path::PathBuf;

use clap::Subcommand;
use gg_logging::CliLoggingArgs;
use url::Url;

pub mod analyze;
pub mod config_commands;
pub mod render;
pub mod strategy;

pub use clap::Parser;

/// Origin assumed when neither `--origin` nor `GITGRADE_ORIGIN` is given
pub const DEFAULT_ORIGIN: &str = "http://localhost";

#[derive(clap::Parser)]
#[command(
    name = "gitgrade",
    about = "GitGrade - AI-style repository scoring",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Configuration file (defaults to the user config file when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override a configuration key, e.g. `--set remote.timeout-ms=5000`
    #[arg(
        long = "set",
        value_name = "KEY=VALUE",
        value_parser = gg_config::env::parse_key_value,
        global = true
    )]
    pub set: Vec<(String, String)>,

    /// Origin the client is served from; decides local vs deployed policy
    #[arg(long, env = "GITGRADE_ORIGIN", default_value = DEFAULT_ORIGIN, global = true)]
    pub origin: Url,

    #[command(flatten)]
    pub logging: CliLoggingArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a repository and print its score
    Analyze(analyze::AnalyzeArgs),
    /// Show the strategy that would be used for the current origin
    Strategy(strategy::StrategyArgs),
    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        subcommand: config_commands::ConfigCommands,
    },
}

impl Cli {
    /// `--set` pairs in the shape the config loader expects
    pub fn flag_sets(&self) -> Vec<(&str, &str)> {
        self.set.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    pub fn load_config(&self) -> anyhow::Result<gg_config::Resolved> {
        gg_config::load_all(self.config.as_deref(), &self.flag_sets())
    }
}

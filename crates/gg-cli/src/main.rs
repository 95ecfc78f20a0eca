// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::process::ExitCode;

use anyhow::Result;
use gg_cli::{Cli, Commands, Parser};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    cli.logging.init("gitgrade")?;

    match &cli.command {
        Commands::Analyze(args) => args.run(&cli).await,
        Commands::Strategy(args) => args.run(&cli).map(|()| ExitCode::SUCCESS),
        Commands::Config { subcommand } => subcommand.run(&cli).map(|()| ExitCode::SUCCESS),
    }
}

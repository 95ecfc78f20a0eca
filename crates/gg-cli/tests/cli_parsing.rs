// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use clap::CommandFactory;
use gg_cli::config_commands::ConfigCommands;
use gg_cli::{Cli, Commands, Parser, DEFAULT_ORIGIN};
use gg_logging::CliLogLevel;

#[test]
fn analyze_with_global_flags() {
    let cli = Cli::try_parse_from([
        "gitgrade",
        "analyze",
        "https://github.com/o/r",
        "--json",
        "--origin",
        "https://gitgrade.vercel.app",
        "--set",
        "remote.timeout-ms=5000",
        "--set",
        "remote.fallback-on-failure=false",
        "--log-level",
        "debug",
    ])
    .unwrap();

    let Commands::Analyze(args) = &cli.command else {
        panic!("expected analyze command");
    };
    assert_eq!(args.url, "https://github.com/o/r");
    assert!(args.json);
    assert_eq!(cli.origin.host_str(), Some("gitgrade.vercel.app"));
    assert_eq!(
        cli.flag_sets(),
        vec![
            ("remote.timeout-ms", "5000"),
            ("remote.fallback-on-failure", "false")
        ]
    );
    assert_eq!(cli.logging.log_level, Some(CliLogLevel::Debug));
}

#[test]
fn origin_flag_defaults_to_localhost() {
    let cmd = Cli::command();
    let origin = cmd
        .get_arguments()
        .find(|arg| arg.get_id() == "origin")
        .expect("origin argument");
    let defaults: Vec<_> = origin.get_default_values().iter().map(|v| v.to_str()).collect();
    assert_eq!(defaults, vec![Some(DEFAULT_ORIGIN)]);
    assert_eq!(origin.get_env(), Some(std::ffi::OsStr::new("GITGRADE_ORIGIN")));

    let cli = Cli::try_parse_from(["gitgrade", "--origin", DEFAULT_ORIGIN, "strategy"]).unwrap();
    assert_eq!(cli.origin.as_str(), format!("{DEFAULT_ORIGIN}/"));
    assert!(cli.set.is_empty());
}

#[test]
fn set_requires_key_value() {
    assert!(Cli::try_parse_from(["gitgrade", "--set", "no-equals", "strategy"]).is_err());
    assert!(Cli::try_parse_from(["gitgrade", "--set", "=5", "strategy"]).is_err());
}

#[test]
fn invalid_origin_is_rejected() {
    assert!(Cli::try_parse_from(["gitgrade", "--origin", "not a url", "strategy"]).is_err());
}

#[test]
fn analyze_requires_a_url_argument() {
    assert!(Cli::try_parse_from(["gitgrade", "analyze"]).is_err());
}

#[test]
fn config_show_with_key_and_origin() {
    let cli =
        Cli::try_parse_from(["gitgrade", "config", "show", "remote", "--show-origin"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            subcommand: ConfigCommands::Show {
                key: Some(ref key),
                show_origin: true
            }
        } if key == "remote"
    ));
}

// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only
#![allow(clippy::disallowed_methods)] // CLI commands intentionally print to stdout/stderr

//! Configuration inspection commands
use anyhow::Result;
use clap::Subcommand;
use gg_config::{Resolved, Scope};
use serde_json::Value as J;

use crate::Cli;

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration values
    Show {
        /// Show only this dotted key, e.g. `remote.timeout-ms`
        key: Option<String>,
        /// Show which layer set each value
        #[arg(long)]
        show_origin: bool,
    },
}

impl ConfigCommands {
    pub fn run(&self, cli: &Cli) -> Result<()> {
        match self {
            ConfigCommands::Show { key, show_origin } => {
                let resolved = cli.load_config()?;
                if let Some(file) = &resolved.file {
                    tracing::debug!(file = %file.display(), "config file in use");
                }
                let lines = show_lines(&resolved, key.as_deref(), *show_origin);
                if lines.is_empty() {
                    anyhow::bail!(
                        "Configuration key '{}' not found",
                        key.as_deref().unwrap_or_default()
                    );
                }
                for line in lines {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

/// Sorted `key=value` lines for every leaf under `filter` (or all leaves)
pub fn show_lines(resolved: &Resolved, filter: Option<&str>, show_origin: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let (root, prefix) = match filter {
        Some(key) => match get_nested(&resolved.json, key) {
            Some(value) => (value, key),
            None => return lines,
        },
        None => (&resolved.json, ""),
    };
    collect_leaves(root, prefix, resolved, show_origin, &mut lines);
    lines.sort();
    lines
}

fn get_nested<'a>(json: &'a J, path: &str) -> Option<&'a J> {
    path.split('.').try_fold(json, |cur, part| cur.get(part))
}

fn collect_leaves(
    json: &J,
    prefix: &str,
    resolved: &Resolved,
    show_origin: bool,
    lines: &mut Vec<String>,
) {
    match json {
        J::Object(obj) => {
            for (key, value) in obj {
                let full_key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_leaves(value, &full_key, resolved, show_origin, lines);
            }
        }
        J::Null => {}
        value => match resolved.winner.get(prefix).filter(|_| show_origin) {
            Some(scope) => lines.push(format!("{prefix}={value} (from {})", format_scope(*scope))),
            None => lines.push(format!("{prefix}={value}")),
        },
    }
}

fn format_scope(scope: Scope) -> &'static str {
    match scope {
        Scope::Defaults => "defaults",
        Scope::File => "config file",
        Scope::Env => "environment",
        Scope::Flags => "command line",
    }
}

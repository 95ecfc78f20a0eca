// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Configuration file discovery

use std::path::PathBuf;

/// Overrides the directory holding `config.toml`
pub const CONFIG_HOME_VAR: &str = "GITGRADE_HOME";

/// Where the user configuration file lives when `--config` is not given
///
/// `$GITGRADE_HOME/config.toml` if set, otherwise the platform config
/// directory (`~/.config/gitgrade/config.toml` on Linux).
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os(CONFIG_HOME_VAR) {
        return Some(PathBuf::from(home).join("config.toml"));
    }
    dirs::config_dir().map(|dir| dir.join("gitgrade").join("config.toml"))
}

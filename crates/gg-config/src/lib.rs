// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Layered configuration for the GitGrade client
//!
//! Layers are merged as JSON and only then deserialized into
//! [`ClientConfig`], so every layer may set any subset of keys.
//!
//! Precedence order: defaults < config file < `GG_*` environment < `--set` flags

pub mod env;
pub mod loader;
pub mod merge;
pub mod paths;
pub mod types;

pub use types::*;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;
use serde_json::Value as J;

/// Where a configuration value came from
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    Defaults,
    File,
    Env,
    Flags,
}

/// Final configuration together with the layer that set each key
#[derive(Debug, Clone)]
pub struct Resolved {
    pub config: ClientConfig,
    pub json: J,
    /// Dotted key path to the last layer that set it
    pub winner: BTreeMap<String, Scope>,
    /// Config file that took part in the merge, if any
    pub file: Option<PathBuf>,
}

/// Load and merge all configuration layers
///
/// An explicit `config_file` must exist. Without one the user config file is
/// read only when present.
pub fn load_all(config_file: Option<&Path>, flag_sets: &[(&str, &str)]) -> Result<Resolved> {
    let file = match config_file {
        Some(path) => Some(path.to_path_buf()),
        None => paths::user_config_path().filter(|p| p.exists()),
    };

    let defaults = serde_json::to_value(ClientConfig::default())?;
    let file_layer = file.as_deref().map(loader::read_layer_from_file).transpose()?;
    let env_layer = env::env_overlay()?;
    let flags_layer = env::flags_overlay(flag_sets);

    let layers = [
        (Some(defaults), Scope::Defaults),
        (file_layer, Scope::File),
        (Some(env_layer), Scope::Env),
        (Some(flags_layer), Scope::Flags),
    ];

    let mut json = serde_json::json!({});
    let mut winner = BTreeMap::new();
    for (layer, scope) in layers {
        if let Some(layer) = layer {
            record_layer_provenance(&layer, scope, &mut winner, "");
            merge::merge_two_json(&mut json, layer);
        }
    }

    let config: ClientConfig = loader::extract(&json)?;
    tracing::debug!(
        file = ?file,
        overridden = winner.values().filter(|s| **s != Scope::Defaults).count(),
        "configuration loaded"
    );

    Ok(Resolved {
        config,
        json,
        winner,
        file,
    })
}

fn record_layer_provenance(
    layer: &J,
    scope: Scope,
    winner: &mut BTreeMap<String, Scope>,
    prefix: &str,
) {
    match layer {
        J::Object(obj) => {
            for (k, v) in obj {
                let pfx = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                record_layer_provenance(v, scope, winner, &pfx);
            }
        }
        J::Null => {}
        _ => {
            winner.insert(prefix.to_string(), scope);
        }
    }
}

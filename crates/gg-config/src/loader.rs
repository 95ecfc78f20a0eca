// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! TOML loading and typed extraction

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value as J;

/// Parse a TOML document into JSON so it can be merged with other layers
pub fn parse_toml_to_json(toml_str: &str) -> Result<J> {
    let value: toml::Value = toml_str.parse()?;
    Ok(serde_json::to_value(value)?)
}

/// Read one configuration file
pub fn read_layer_from_file(path: &Path) -> Result<J> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    parse_toml_to_json(&content).with_context(|| format!("parsing config file {}", path.display()))
}

/// Deserialize merged JSON into a typed view, naming the offending key on failure
pub fn extract<T: DeserializeOwned>(root: &J) -> Result<T> {
    serde_path_to_error::deserialize(root.clone())
        .map_err(|e| anyhow::anyhow!("invalid configuration at '{}': {}", e.path(), e.inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;

    #[test]
    fn toml_tables_become_nested_objects() {
        let json = parse_toml_to_json(
            r#"
            local-hosts = ["localhost"]
            [remote]
            timeout-ms = 30000
            "#,
        )
        .unwrap();
        assert_eq!(json["local-hosts"][0], "localhost");
        assert_eq!(json["remote"]["timeout-ms"], 30000);
    }

    #[test]
    fn extraction_error_names_the_key() {
        let mut json = serde_json::to_value(ClientConfig::default()).unwrap();
        json["remote"]["timeout-ms"] = serde_json::json!("soon");
        let err = extract::<ClientConfig>(&json).unwrap_err().to_string();
        assert!(err.contains("remote.timeout-ms"), "{err}");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut json = serde_json::to_value(ClientConfig::default()).unwrap();
        json["remote"]["retries"] = serde_json::json!(3);
        assert!(extract::<ClientConfig>(&json).is_err());
    }
}

// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Environment variable and command-line overlays

use anyhow::Result;
use serde_json::Value as J;

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "GG";

/// Top-level keys whose environment value is a comma-separated list
const LIST_KEYS: [&str; 1] = ["local-hosts"];

/// Top-level keys kept as strings even when the value parses as a number or boolean
const STRING_KEYS: [&str; 1] = ["user-agent"];

/// Build an overlay from `GG_*` variables
///
/// `__` separates nesting levels and `_` inside a segment becomes `-`, so
/// `GG_REMOTE__TIMEOUT_MS=5000` sets `remote.timeout-ms`. Numbers and
/// booleans are parsed except for string-typed keys, and
/// `GG_LOCAL_HOSTS=localhost,dev.box` yields a list.
pub fn env_overlay() -> Result<J> {
    let mut source = config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",");
    for key in LIST_KEYS {
        source = source.with_list_parse_key(&key.replace('-', "_"));
    }
    let built = config::Config::builder().add_source(source).build()?;

    let overlay = serde_json::to_value(built.try_deserialize::<serde_json::Map<String, J>>()?)?;
    let mut overlay = kebab_keys(overlay);
    coerce_env_types(&mut overlay);
    Ok(overlay)
}

/// Undo type guesses that do not fit the target field
fn coerce_env_types(overlay: &mut J) {
    let Some(obj) = overlay.as_object_mut() else {
        return;
    };
    for key in STRING_KEYS {
        if let Some(value) = obj.get_mut(key) {
            if value.is_number() || value.is_boolean() {
                *value = J::String(value.to_string());
            }
        }
    }
    for key in LIST_KEYS {
        let Some(value) = obj.get_mut(key) else {
            continue;
        };
        *value = match std::mem::take(value) {
            J::Array(items) => J::Array(items.into_iter().map(scalar_to_string).collect()),
            J::String(raw) => J::Array(
                raw.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(|item| J::String(item.to_string()))
                    .collect(),
            ),
            J::Null => J::Null,
            other => J::Array(vec![scalar_to_string(other)]),
        };
    }
}

fn scalar_to_string(value: J) -> J {
    match value {
        J::Number(_) | J::Bool(_) => J::String(value.to_string()),
        other => other,
    }
}

/// Rewrite object keys from `snake_case` to `kebab-case`, recursively
fn kebab_keys(value: J) -> J {
    match value {
        J::Object(map) => J::Object(
            map.into_iter()
                .map(|(k, v)| (k.replace('_', "-"), kebab_keys(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Build an overlay from `key=value` pairs given on the command line
///
/// Values that parse as JSON (`5000`, `false`, `["a","b"]`) keep their type;
/// anything else is taken as a string.
pub fn flags_overlay(kv_pairs: &[(&str, &str)]) -> J {
    let mut root = serde_json::json!({});
    for (k, v) in kv_pairs {
        let value = serde_json::from_str(v).unwrap_or_else(|_| J::String(v.to_string()));
        crate::merge::insert_dotted(&mut root, k, value);
    }
    root
}

/// Split a `key=value` flag
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_keep_json_types() {
        let overlay = flags_overlay(&[
            ("remote.timeout-ms", "5000"),
            ("remote.fallback-on-failure", "false"),
            ("local.service-url", "http://127.0.0.1:9000/analyze"),
            ("local-hosts", r#"["dev.box"]"#),
        ]);
        assert_eq!(overlay["remote"]["timeout-ms"], 5000);
        assert_eq!(overlay["remote"]["fallback-on-failure"], false);
        assert_eq!(overlay["local"]["service-url"], "http://127.0.0.1:9000/analyze");
        assert_eq!(overlay["local-hosts"], serde_json::json!(["dev.box"]));
    }

    #[test]
    fn env_keys_become_kebab_case() {
        let overlay = kebab_keys(serde_json::json!({"remote": {"timeout_ms": 5}, "user_agent": "x"}));
        assert_eq!(overlay, serde_json::json!({"remote": {"timeout-ms": 5}, "user-agent": "x"}));
    }

    #[test]
    fn env_values_are_coerced_to_field_types() {
        let mut overlay = serde_json::json!({
            "user-agent": 12345,
            "local-hosts": "localhost, dev.box",
            "remote": {"timeout-ms": 5},
        });
        coerce_env_types(&mut overlay);
        assert_eq!(overlay["user-agent"], "12345");
        assert_eq!(overlay["local-hosts"], serde_json::json!(["localhost", "dev.box"]));
        assert_eq!(overlay["remote"]["timeout-ms"], 5);

        let mut overlay = serde_json::json!({"local-hosts": ["dev.box", 8080]});
        coerce_env_types(&mut overlay);
        assert_eq!(overlay["local-hosts"], serde_json::json!(["dev.box", "8080"]));
    }

    #[test]
    fn key_value_parsing() {
        assert_eq!(
            parse_key_value("remote.timeout-ms=10"),
            Ok(("remote.timeout-ms".to_string(), "10".to_string()))
        );
        assert_eq!(
            parse_key_value("user-agent=a=b"),
            Ok(("user-agent".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }
}

// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

// Environment variables are process-wide, so every test here holds ENV_LOCK
// while its variables are set.

use std::sync::Mutex;

use gg_config::{load_all, Resolved, Scope};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Load configuration with `vars` set, removing them again before returning
fn load_with_env(
    config_file: Option<&std::path::Path>,
    vars: &[(&str, &str)],
) -> anyhow::Result<Resolved> {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for (key, value) in vars {
        std::env::set_var(key, value);
    }
    let resolved = load_all(config_file, &[]);
    for (key, _) in vars {
        std::env::remove_var(key);
    }
    resolved
}

#[test]
fn gg_variables_override_file_values() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[remote]\ntimeout-ms = 30000\n").unwrap();

    let resolved = load_with_env(
        Some(&path),
        &[
            ("GG_REMOTE__TIMEOUT_MS", "5000"),
            ("GG_LOCAL__SKIP_REMOTE_CALL", "true"),
        ],
    )
    .unwrap();

    assert_eq!(resolved.config.remote.timeout_ms, 5000);
    assert!(resolved.config.local.skip_remote_call);
    assert_eq!(resolved.winner.get("remote.timeout-ms"), Some(&Scope::Env));
}

#[test]
fn local_hosts_accepts_comma_separated_list() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let resolved =
        load_with_env(Some(&path), &[("GG_LOCAL_HOSTS", "localhost,dev.box")]).unwrap();
    assert_eq!(resolved.config.local_hosts, vec!["localhost", "dev.box"]);
    assert_eq!(resolved.winner.get("local-hosts"), Some(&Scope::Env));

    let resolved = load_with_env(Some(&path), &[("GG_LOCAL_HOSTS", "dev.box")]).unwrap();
    assert_eq!(resolved.config.local_hosts, vec!["dev.box"]);
}

#[test]
fn numeric_user_agent_stays_a_string() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let resolved = load_with_env(Some(&path), &[("GG_USER_AGENT", "12345")]).unwrap();
    assert_eq!(resolved.config.user_agent.as_deref(), Some("12345"));
}

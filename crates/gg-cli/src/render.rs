// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Rendering of views and strategies
//!
//! Rendering never inspects the view beyond its accessors; there is no error
//! branch other than the failure message the view carries.

use std::fmt::Write as _;

use gg_core::{EnvironmentClass, Strategy, ViewModel};
use gg_domain_types::MAX_SCORE;
use serde::Serialize;

/// Machine-readable output of `gitgrade analyze --json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Report<'a> {
    pub environment: EnvironmentClass,
    pub system_status: &'static str,
    #[serde(flatten)]
    pub view: &'a ViewModel,
}

pub fn report<'a>(strategy: &Strategy, view: &'a ViewModel) -> Report<'a> {
    Report {
        environment: strategy.environment,
        system_status: strategy.environment.status_label(),
        view,
    }
}

pub fn banner(environment: EnvironmentClass) -> String {
    format!("SYSTEM STATUS: {}", environment.status_label())
}

/// Human-readable rendering of a terminal view
pub fn text(strategy: &Strategy, view: &ViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", banner(strategy.environment));
    let _ = writeln!(out);

    if let Some(result) = view.result() {
        let _ = writeln!(out, "SCORE: {}/{}", result.score, MAX_SCORE);
        let _ = writeln!(out);
        let _ = writeln!(out, "SUMMARY");
        let _ = writeln!(out, "{}", result.summary);
        if !result.roadmap.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "ROADMAP");
            for (i, step) in result.roadmap.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", i + 1, step);
            }
        }
    } else if let Some(message) = view.error_message() {
        let _ = writeln!(out, "{message}");
    }

    out
}

/// Human-readable rendering of a resolved strategy
pub fn strategy(origin: &url::Url, strategy: &Strategy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", banner(strategy.environment));
    let _ = writeln!(out, "origin:              {origin}");
    let _ = writeln!(out, "environment:         {}", strategy.environment);
    let _ = writeln!(out, "endpoint:            {}", strategy.endpoint);
    let _ = writeln!(out, "timeout:             {} ms", strategy.timeout.as_millis());
    let _ = writeln!(out, "fallback-on-failure: {}", strategy.fallback_on_failure);
    let _ = writeln!(out, "skip-remote-call:    {}", strategy.skip_remote_call);
    if strategy.skip_remote_call {
        let _ = writeln!(out, "demo-delay:          {} ms", strategy.demo_delay.as_millis());
    }
    out
}

// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Request lifecycle states

use serde::{Deserialize, Serialize};

/// Lifecycle of a single analysis request as seen by the front end
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RequestStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is being processed; submission is disabled
    InFlight,
    /// A result is available (remote or substituted)
    Succeeded,
    /// The request failed and no result was substituted
    Failed,
}

impl RequestStatus {
    /// Whether this status ends a request
    pub fn is_terminal(self) -> bool {
        matches!(self, RequestStatus::Succeeded | RequestStatus::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_succeeded_and_failed_are_terminal() {
        assert!(!RequestStatus::Idle.is_terminal());
        assert!(!RequestStatus::InFlight.is_terminal());
        assert!(RequestStatus::Succeeded.is_terminal());
        assert!(RequestStatus::Failed.is_terminal());
    }

    #[test]
    fn status_serializes_kebab_case() {
        assert_eq!(RequestStatus::InFlight.to_string(), "in-flight");
        assert_eq!(
            serde_json::to_string(&RequestStatus::InFlight).unwrap(),
            "\"in-flight\""
        );
    }
}

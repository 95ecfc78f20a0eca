// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! The single value handed to the front end
//!
//! Constructors are the only way to build a [`ViewModel`], so a result is
//! present exactly when the status is `Succeeded`, and an error message only
//! when the request failed without a substituted result.

use gg_domain_types::{AnalysisResult, RequestStatus};
use serde::Serialize;

/// Message shown when a request fails and no fallback is configured
pub const FAILURE_MESSAGE: &str = "Analysis failed. Please try again later.";

/// Where a successful result came from; diagnostics only, never shown as an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum Outcome {
    /// Decoded from the analysis service
    Remote,
    /// Substituted after the remote call failed
    Fallback { reason: String },
    /// Substituted without attempting the remote call
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ViewModel {
    sequence: u64,
    status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<Outcome>,
}

impl ViewModel {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn in_flight(sequence: u64) -> Self {
        Self {
            sequence,
            status: RequestStatus::InFlight,
            ..Self::default()
        }
    }

    pub fn succeeded(sequence: u64, result: AnalysisResult, outcome: Outcome) -> Self {
        Self {
            sequence,
            status: RequestStatus::Succeeded,
            result: Some(result),
            error_message: None,
            outcome: Some(outcome),
        }
    }

    pub fn failed(sequence: u64, message: impl Into<String>) -> Self {
        Self {
            sequence,
            status: RequestStatus::Failed,
            result: None,
            error_message: Some(message.into()),
            outcome: None,
        }
    }

    /// Request sequence number this view belongs to; 0 before any request
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_consistent(&self) -> bool {
        let result_ok = self.result.is_some() == (self.status == RequestStatus::Succeeded);
        let error_ok = self.error_message.is_none() || self.status == RequestStatus::Failed;
        result_ok && error_ok
    }
}

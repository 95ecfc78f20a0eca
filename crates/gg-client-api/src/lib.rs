// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Client API abstraction for the GitGrade analysis service
//!
//! The orchestration core talks to the service only through [`AnalysisApi`],
//! so the REST client and in-memory test doubles are interchangeable.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use gg_domain_types::AnalysisResult;
use gg_rest_api_contract::AnalyzeRequest;
use url::Url;

/// Ways a single analysis call can fail
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("No response within {0:?}")]
    Timeout(Duration),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Server returned status {status}")]
    Server { status: u16, detail: Option<String> },
}

impl AnalysisError {
    /// Short stable label used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Network(_) => "network",
            AnalysisError::Timeout(_) => "timeout",
            AnalysisError::Decode(_) => "decode",
            AnalysisError::Server { .. } => "server",
        }
    }
}

pub type AnalysisApiResult<T> = Result<T, AnalysisError>;

/// A backend able to score a repository
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Issue exactly one analysis call against `endpoint`
    async fn analyze(
        &self,
        endpoint: &Url,
        request: &AnalyzeRequest,
    ) -> AnalysisApiResult<AnalysisResult>;
}

#[async_trait]
impl<T: AnalysisApi + ?Sized> AnalysisApi for Arc<T> {
    async fn analyze(
        &self,
        endpoint: &Url,
        request: &AnalyzeRequest,
    ) -> AnalysisApiResult<AnalysisResult> {
        (**self).analyze(endpoint, request).await
    }
}

// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! REST client for the GitGrade analysis service
//!
//! Sends `POST <endpoint>` with `{"url": ...}` and decodes the scored
//! response. The client performs exactly one attempt per call and leaves
//! deadlines to the caller; it implements [`AnalysisApi`] so the
//! orchestration core can drive it without knowing about HTTP.

pub mod client;
pub mod error;

pub use client::*;
pub use error::*;

use async_trait::async_trait;
use gg_client_api::{AnalysisApi, AnalysisApiResult};
use gg_domain_types::AnalysisResult;
use gg_rest_api_contract::AnalyzeRequest;
use url::Url;

#[async_trait]
impl AnalysisApi for client::RestClient {
    async fn analyze(
        &self,
        endpoint: &Url,
        request: &AnalyzeRequest,
    ) -> AnalysisApiResult<AnalysisResult> {
        self.analyze(endpoint, request).await.map_err(Into::into)
    }
}

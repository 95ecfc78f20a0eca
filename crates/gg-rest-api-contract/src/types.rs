// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Request and response bodies for `POST <endpoint>`

use gg_domain_types::{AnalysisRequest, AnalysisResult};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body sent to the analysis endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1))]
    pub url: String,
}

impl From<&AnalysisRequest> for AnalyzeRequest {
    fn from(request: &AnalysisRequest) -> Self {
        Self {
            url: request.repository_url().to_string(),
        }
    }
}

/// Body returned by the analysis endpoint on success
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AnalyzeResponse {
    #[validate(range(max = 100))]
    pub score: u8,
    pub summary: String,
    pub roadmap: Vec<String>,
}

impl From<AnalyzeResponse> for AnalysisResult {
    fn from(response: AnalyzeResponse) -> Self {
        Self {
            score: response.score,
            summary: response.summary,
            roadmap: response.roadmap,
        }
    }
}

/// Error body the scoring service returns alongside a non-2xx status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

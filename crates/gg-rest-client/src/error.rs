// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! REST client error types

use gg_client_api::AnalysisError;
use gg_rest_api_contract::ApiContractError;
use reqwest::StatusCode;

pub type RestClientResult<T> = Result<T, RestClientError>;

#[derive(Debug, thiserror::Error)]
pub enum RestClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(ApiContractError),

    #[error("Invalid response body: {0}")]
    Contract(#[from] ApiContractError),

    #[error("Server error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    ServerError {
        status: StatusCode,
        detail: Option<String>,
    },
}

impl From<RestClientError> for AnalysisError {
    fn from(err: RestClientError) -> Self {
        match err {
            RestClientError::Http(e) if e.is_decode() => AnalysisError::Decode(e.to_string()),
            RestClientError::Http(e) => AnalysisError::Network(e.to_string()),
            RestClientError::InvalidRequest(e) | RestClientError::Contract(e) => {
                AnalysisError::Decode(e.to_string())
            }
            RestClientError::ServerError { status, detail } => AnalysisError::Server {
                status: status.as_u16(),
                detail,
            },
        }
    }
}

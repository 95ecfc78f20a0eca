// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Validation helpers for contract types

use gg_domain_types::AnalysisResult;
use validator::Validate;

use crate::error::ApiContractError;
use crate::types::*;

/// Validate an outgoing analyze request
pub fn validate_analyze_request(request: &AnalyzeRequest) -> Result<(), ApiContractError> {
    request.validate()?;
    Ok(())
}

/// Decode a 2xx response body into a trusted result
///
/// The body must be JSON of the documented shape and the score must lie in
/// `0..=100`. Unknown extra fields are ignored.
pub fn decode_analyze_response(body: &str) -> Result<AnalysisResult, ApiContractError> {
    let response: AnalyzeResponse = serde_json::from_str(body)?;
    response.validate()?;
    Ok(response.into())
}

/// Pull the `detail` message out of an error body, if there is one
pub fn decode_error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.detail)
}

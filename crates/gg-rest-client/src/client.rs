// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Main REST client implementation

use gg_domain_types::AnalysisResult;
use gg_rest_api_contract::{
    decode_analyze_response, decode_error_detail, validate_analyze_request, AnalyzeRequest,
};
use reqwest::{Client as HttpClient, Response};
use url::Url;

use crate::error::{RestClientError, RestClientResult};

pub const DEFAULT_USER_AGENT: &str = concat!("gitgrade/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the analysis endpoint
#[derive(Debug, Clone)]
pub struct RestClient {
    http_client: HttpClient,
}

impl RestClient {
    /// Create a client with the default user agent
    pub fn new() -> RestClientResult<Self> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    pub fn with_user_agent(user_agent: &str) -> RestClientResult<Self> {
        let http_client = HttpClient::builder().user_agent(user_agent).build()?;
        Ok(Self { http_client })
    }

    /// Submit a repository for analysis
    ///
    /// One POST, no retry, no deadline of its own. A request that fails
    /// contract validation is rejected without touching the network.
    pub async fn analyze(
        &self,
        endpoint: &Url,
        request: &AnalyzeRequest,
    ) -> RestClientResult<AnalysisResult> {
        validate_analyze_request(request).map_err(RestClientError::InvalidRequest)?;
        tracing::debug!(endpoint = %endpoint, repository = %request.url, "POST analyze");
        let response = self.http_client.post(endpoint.clone()).json(request).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> RestClientResult<AnalysisResult> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            Ok(decode_analyze_response(&text)?)
        } else {
            Err(RestClientError::ServerError {
                status,
                detail: decode_error_detail(&text),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_user_agent_names_the_client() {
        assert!(DEFAULT_USER_AGENT.starts_with("gitgrade/"));
    }

    #[test]
    fn client_builds_with_custom_user_agent() {
        assert!(RestClient::with_user_agent("gitgrade-test/1.0").is_ok());
    }
}

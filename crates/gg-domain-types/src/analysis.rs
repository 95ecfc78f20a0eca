// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Analysis request and result types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest score an analysis can report
pub const MAX_SCORE: u8 = 100;

/// Score reported by the fallback result
pub const FALLBACK_SCORE: u8 = 92;

/// Summary reported by the fallback result
pub const FALLBACK_SUMMARY: &str = "The repository demonstrates exceptional code quality with a modular architecture. It effectively utilizes type hinting for maintainability and includes comprehensive documentation. The project structure follows industry best practices for scalability.";

/// Roadmap reported by the fallback result
pub const FALLBACK_ROADMAP: [&str; 3] = [
    "Implement rigorous CI/CD pipelines for automated linting and testing.",
    "Increase unit test coverage to 95% to ensure edge-case reliability.",
    "Containerize the application to standardize development and production environments.",
];

/// Rejections that happen before a request is ever sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Repository URL must not be empty")]
    EmptyRepositoryUrl,
}

/// A validated request to analyze one repository
///
/// The identifier is trimmed on construction and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    repository_url: String,
}

impl AnalysisRequest {
    pub fn new(repository_url: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = repository_url.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyRepositoryUrl);
        }
        Ok(Self {
            repository_url: trimmed.to_string(),
        })
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }
}

/// Outcome of an analysis: a quality score, a summary and a remediation roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    pub summary: String,
    pub roadmap: Vec<String>,
}

impl AnalysisResult {
    /// The fixed result shown whenever the backend is bypassed or unavailable
    pub fn fallback() -> Self {
        Self {
            score: FALLBACK_SCORE,
            summary: FALLBACK_SUMMARY.to_string(),
            roadmap: FALLBACK_ROADMAP.iter().map(|step| step.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_rejects_empty_and_blank_identifiers() {
        assert_eq!(
            AnalysisRequest::new(""),
            Err(ValidationError::EmptyRepositoryUrl)
        );
        assert_eq!(
            AnalysisRequest::new("  \t\n"),
            Err(ValidationError::EmptyRepositoryUrl)
        );
    }

    #[test]
    fn request_trims_identifier() {
        let request = AnalysisRequest::new("  https://github.com/owner/repo \n").unwrap();
        assert_eq!(request.repository_url(), "https://github.com/owner/repo");
    }

    #[test]
    fn fallback_matches_published_constant() {
        let fallback = AnalysisResult::fallback();
        assert_eq!(fallback.score, 92);
        assert!(fallback.summary.starts_with("The repository demonstrates"));
        assert_eq!(fallback.roadmap.len(), 3);
        assert_eq!(
            fallback.roadmap[2],
            "Containerize the application to standardize development and production environments."
        );
    }

    #[test]
    fn result_uses_wire_field_names() {
        let json = serde_json::to_value(AnalysisResult {
            score: 77,
            summary: "x".into(),
            roadmap: vec!["a".into(), "b".into()],
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"score": 77, "summary": "x", "roadmap": ["a", "b"]})
        );
    }
}

//! Matching Service client — the boundary to the upstream scorer that
//! produces match records for a job.
//!
//! The scoring algorithm itself lives upstream. This module only requests a
//! match run and decodes the resulting set. Failed calls are not retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::matches::MatchSet;

const MATCH_PATH: &str = "/api/match";

#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Matching service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Matching service URL is not configured")]
    NotConfigured,
}

#[derive(Debug, Serialize)]
struct MatchRunRequest<'a> {
    job_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    resume_ids: Option<&'a [String]>,
}

/// FastAPI-style error body.
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    detail: String,
}

/// Source of match sets. Carried in `AppState` as `Arc<dyn MatchingService>`.
#[async_trait]
pub trait MatchingService: Send + Sync {
    /// Runs matching for `job_id`, optionally restricted to `resume_ids`.
    async fn fetch_matches(
        &self,
        job_id: &str,
        resume_ids: Option<&[String]>,
    ) -> Result<MatchSet, MatchingError>;
}

/// HTTP client for the upstream `POST /api/match` endpoint.
#[derive(Clone)]
pub struct HttpMatchingService {
    client: Client,
    match_url: String,
}

impl HttpMatchingService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, MatchingError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            match_url: build_match_url(base_url),
        })
    }
}

#[async_trait]
impl MatchingService for HttpMatchingService {
    async fn fetch_matches(
        &self,
        job_id: &str,
        resume_ids: Option<&[String]>,
    ) -> Result<MatchSet, MatchingError> {
        let response = self
            .client
            .post(&self.match_url)
            .json(&MatchRunRequest { job_id, resume_ids })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Matching service returned {}: {}", status, body);
            return Err(MatchingError::Status {
                status: status.as_u16(),
                message: error_message(body),
            });
        }

        let set: MatchSet = response.json().await?;
        debug!(
            job_id = %set.job_id,
            matches = set.matches.len(),
            "Received match set from matching service"
        );
        Ok(set)
    }
}

/// Stand-in used when no upstream URL is configured.
pub struct UnconfiguredMatchingService;

#[async_trait]
impl MatchingService for UnconfiguredMatchingService {
    async fn fetch_matches(
        &self,
        _job_id: &str,
        _resume_ids: Option<&[String]>,
    ) -> Result<MatchSet, MatchingError> {
        Err(MatchingError::NotConfigured)
    }
}

fn build_match_url(base_url: &str) -> String {
    format!("{}{MATCH_PATH}", base_url.trim_end_matches('/'))
}

/// Pulls `detail` out of a JSON error body, falling back to the raw text.
fn error_message(body: String) -> String {
    serde_json::from_str::<UpstreamErrorBody>(&body)
        .map(|e| e.detail)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_match_url_trims_trailing_slash() {
        assert_eq!(
            build_match_url("http://matcher:8000/"),
            "http://matcher:8000/api/match"
        );
        assert_eq!(
            build_match_url("http://matcher:8000"),
            "http://matcher:8000/api/match"
        );
    }

    #[test]
    fn test_error_message_prefers_detail() {
        assert_eq!(
            error_message(r#"{"detail": "Job not found"}"#.to_string()),
            "Job not found"
        );
        assert_eq!(error_message("Bad Gateway".to_string()), "Bad Gateway");
    }

    #[test]
    fn test_request_omits_absent_resume_ids() {
        let body = serde_json::to_value(MatchRunRequest {
            job_id: "job-1",
            resume_ids: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "job_id": "job-1" }));
    }

    #[tokio::test]
    async fn test_unconfigured_service_refuses() {
        let result = UnconfiguredMatchingService.fetch_matches("job-1", None).await;
        assert!(matches!(result, Err(MatchingError::NotConfigured)));
    }
}

use anyhow::{Context, Result, anyhow};
use std::time::Duration;

use super::models::{FeedbackResult, InterviewRequest};

/// HTTP client for the interview scoring service.
///
/// One request per submission: no retries, no timeouts, no cancellation.
/// A submission stays in flight until the service responds or the
/// transport fails, and the wizard keeps its finish control disabled for
/// that whole window.
#[derive(Clone)]
pub struct ScoringClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl ScoringClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(2)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent("interview-cli/0.1")
            .build()
            .expect("Failed to build HTTP client");

        Self {
            endpoint: endpoint.into(),
            http_client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit an interview and parse the returned feedback.
    pub async fn submit(&self, request: &InterviewRequest) -> Result<FeedbackResult> {
        log::info!(
            "Submitting interview for candidate: {}",
            request.profile.name
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .with_context(|| format!("Failed to reach scoring service at {}", self.endpoint))?;

        log::debug!("Scoring service responded with {}", response.status());

        if !response.status().is_success() {
            return Err(anyhow!("Scoring service returned {}", response.status()));
        }

        let feedback: FeedbackResult = response
            .json()
            .await
            .context("Failed to parse scoring service response")?;

        log::info!("Received feedback for {}", request.profile.name);
        Ok(feedback)
    }
}

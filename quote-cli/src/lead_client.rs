//! HTTP delivery of leads.

use std::time::Duration;

use async_trait::async_trait;
use quote_core::lead::LeadPayload;
use quote_core::{LeadSubmitter, SubmissionError};
use tracing::{debug, info};

/// Posts lead payloads as JSON to a single endpoint.
pub struct HttpLeadSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpLeadSubmitter {
    pub fn new(
        endpoint: &str,
        timeout: Duration,
    ) -> Result<Self, SubmissionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmissionError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LeadSubmitter for HttpLeadSubmitter {
    async fn submit_lead(
        &self,
        payload: &LeadPayload,
    ) -> Result<(), SubmissionError> {
        debug!(endpoint = %self.endpoint, "posting lead");

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    SubmissionError::Encoding(e.to_string())
                } else {
                    SubmissionError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Rejected(status.as_u16()));
        }

        info!(endpoint = %self.endpoint, status = status.as_u16(), "lead accepted");
        Ok(())
    }
}

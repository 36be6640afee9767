use async_trait::async_trait;
use thiserror::Error;

use super::LeadPayload;

/// Why a lead could not be delivered.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The endpoint answered with a non-success status.
    #[error("lead endpoint returned status {0}")]
    Rejected(u16),

    /// The request never completed (connection refused, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),

    #[error("could not encode lead payload: {0}")]
    Encoding(String),
}

/// Delivers a lead somewhere it will be followed up.
///
/// Implementations report failure instead of retrying; the caller chooses a
/// fallback.
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    async fn submit_lead(
        &self,
        payload: &LeadPayload,
    ) -> Result<(), SubmissionError>;
}

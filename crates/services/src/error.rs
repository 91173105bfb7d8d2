//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `SynthesisService`.
///
/// The drill orchestration degrades all of these to "no audio"; they are
/// typed so tests and future callers can tell the failure modes apart.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthesisError {
    #[error("nothing to speak")]
    EmptyText,
    #[error("speech synthesis failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors emitted by `RecognitionService` when the service call itself
/// fails. "No speech detected" is not an error; the port reports it as
/// `Ok(None)`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecognitionError {
    #[error("speech recognition failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("unreadable recognition reply: {0}")]
    Malformed(#[from] serde_json::Error),
}

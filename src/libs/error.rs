//! Error taxonomy for the report pipeline.
//!
//! Three failure classes cover the whole run: a remote endpoint answering
//! with a non-success status, a worklog entry missing a required nested
//! group, and a delivery step that could not hand the finished report off.
//! The variants map onto the process exit codes via [`ReportError::exit_code`].

use reqwest::StatusCode;
use thiserror::Error;

/// Process exit code for a failed retrieval or normalization step.
pub const EXIT_RETRIEVAL_FAILURE: i32 = 1;

/// Process exit code for a failed delivery step.
pub const EXIT_DELIVERY_FAILURE: i32 = 2;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A network call returned a non-success HTTP status.
    #[error("request to {endpoint} returned unexpected http code: {status}")]
    RequestFailure { endpoint: &'static str, status: StatusCode },

    /// A worklog entry lacks a nested group the report columns depend on.
    #[error("worklog entry for {issue_key} is missing its {group} group")]
    MissingField { issue_key: String, group: &'static str },

    /// Mail submission or FTP upload failed; the local report file is kept.
    #[error("delivery failed: {0}")]
    DeliveryFailure(String),
}

impl ReportError {
    /// Maps the failure class to the documented process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::RequestFailure { .. } | ReportError::MissingField { .. } => EXIT_RETRIEVAL_FAILURE,
            ReportError::DeliveryFailure(_) => EXIT_DELIVERY_FAILURE,
        }
    }
}

//! API client modules for the remote worklog and issue services.
//!
//! Two clients cover the pipeline's network surface: the Tempo servlet that
//! serves the raw worklog document and the Jira REST API used for optional
//! label enrichment. Both are thin authenticated GET wrappers; any
//! non-success status surfaces as [`ReportError::RequestFailure`] carrying
//! the originating endpoint and status code.
//!
//! [`ReportError::RequestFailure`]: crate::libs::error::ReportError

use std::time::Duration;

pub mod jira;
pub mod tempo;

// Re-export configuration structs for easier access from other modules
pub use jira::JiraConfig;
pub use tempo::TempoConfig;

/// Request timeout applied to every outbound call.
///
/// A hung remote endpoint would otherwise stall the whole run indefinitely.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

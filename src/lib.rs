//! # Tempo Worklog
//!
//! A command-line utility that retrieves Tempo worklog records from Jira
//! for a date range, optionally enriches them with issue labels, renders a
//! semicolon-delimited UTF-16 CSV report and delivers it by email or FTP.
//!
//! ## Features
//!
//! - **Worklog Retrieval**: fetches the Tempo servlet document for a date
//!   range with an optional project filter
//! - **Label Enrichment**: per-issue label lookup through the Jira REST API
//! - **Report Generation**: fixed 12-column CSV with spreadsheet-friendly
//!   sanitization and UTF-16 encoding
//! - **Delivery**: per-recipient email with the report attached, or upload
//!   into a remote FTP directory created on demand
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tempo_worklog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;

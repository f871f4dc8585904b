//! Worklog data model and record normalization.
//!
//! The Tempo servlet answers with an XML document of `worklog` entries,
//! each carrying nested `user_details` and `issue_details` groups. This
//! module deserializes that document, flattens every entry into a
//! [`WorklogRecord`] and derives the computed report fields: the `MMYY`
//! billing period, the full month name, and the sanitized text fields that
//! keep the semicolon-delimited output intact.
//!
//! Repeated nested groups follow last-wins semantics, made explicit here by
//! collecting the groups into a `Vec` and taking the final element. An
//! entry missing a required group fails the run with
//! [`ReportError::MissingField`] rather than producing an undefined value.

use crate::libs::error::ReportError;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Deserialize;

/// Date format used by the Tempo servlet for `work_date` values.
pub const WORK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw worklog document as served by the Tempo servlet.
#[derive(Debug, Deserialize)]
pub struct WorklogDocument {
    #[serde(rename = "worklog", default)]
    pub worklogs: Vec<RawWorklog>,
}

/// One raw worklog entry before normalization.
#[derive(Debug, Deserialize)]
pub struct RawWorklog {
    pub issue_key: String,
    pub issue_summary: String,
    pub hours: String,
    pub work_date: String,
    #[serde(default)]
    pub user_details: Vec<UserDetails>,
    #[serde(default)]
    pub issue_details: Vec<IssueDetails>,
}

#[derive(Debug, Deserialize)]
pub struct UserDetails {
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct IssueDetails {
    pub type_name: String,
    pub status_name: String,
    pub project_key: String,
    pub project_name: String,
}

/// One normalized unit of logged time, immutable once constructed and
/// consumed exactly once by the report writer.
#[derive(Debug, Clone, PartialEq)]
pub struct WorklogRecord {
    pub issue_key: String,
    pub issue_summary: String,
    pub hours: String,
    pub work_date: String,
    pub full_name: String,
    pub period: String,
    pub month: String,
    pub issue_type: String,
    pub issue_status: String,
    pub project_key: String,
    pub project_name: String,
    pub issue_labels: Option<String>,
}

/// Parses the raw XML document held in memory.
pub fn parse(document: &str) -> Result<WorklogDocument> {
    Ok(quick_xml::de::from_str(document)?)
}

/// Derives the `MMYY` billing period from a work date.
pub fn period(date: NaiveDate) -> String {
    date.format("%m%y").to_string()
}

/// Derives the full month name from a work date.
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Replaces the output delimiter and literal tabs in a summary so the field
/// count of a report row never changes. Idempotent.
pub fn sanitize_summary(summary: &str) -> String {
    summary.replace(';', ",").replace('\t', " ")
}

/// Swaps the decimal point for a comma so the hours field survives the
/// semicolon-delimited format in spreadsheet locales expecting `3,5`.
pub fn sanitize_hours(hours: &str) -> String {
    hours.replace('.', ",")
}

impl WorklogRecord {
    /// Normalizes one raw entry into a report record.
    ///
    /// `issue_labels` is `None` unless enrichment was requested; the caller
    /// resolves labels before construction so records stay immutable.
    pub fn from_raw(raw: &RawWorklog, issue_labels: Option<String>) -> Result<Self> {
        let user = raw.user_details.last().ok_or_else(|| ReportError::MissingField {
            issue_key: raw.issue_key.clone(),
            group: "user_details",
        })?;
        let issue = raw.issue_details.last().ok_or_else(|| ReportError::MissingField {
            issue_key: raw.issue_key.clone(),
            group: "issue_details",
        })?;

        let work_date = NaiveDate::parse_from_str(&raw.work_date, WORK_DATE_FORMAT)?;

        Ok(Self {
            issue_key: raw.issue_key.clone(),
            issue_summary: sanitize_summary(&raw.issue_summary),
            hours: sanitize_hours(&raw.hours),
            work_date: raw.work_date.clone(),
            full_name: user.full_name.clone(),
            period: period(work_date),
            month: month_name(work_date),
            issue_type: issue.type_name.clone(),
            issue_status: issue.status_name.clone(),
            project_key: issue.project_key.clone(),
            project_name: issue.project_name.clone(),
            issue_labels,
        })
    }
}

//! Report writer for the delimited worklog file.
//!
//! The report is a semicolon-delimited text file with a fixed 12-column
//! header, encoded as UTF-16LE with a byte-order mark so full names in any
//! script survive the spreadsheet import. Writing always truncates an
//! existing file at the destination path.

use crate::libs::worklog::WorklogRecord;
use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Field delimiter of the report rows.
pub const CSV_DELIMITER: u8 = b';';

/// Report columns, in output order.
pub const COLUMNS: [&str; 12] = [
    "Issue Key",
    "Issue Summary",
    "Hours",
    "Work date",
    "Full Name",
    "Period",
    "Month",
    "Issue Type",
    "Issue Status",
    "Project Key",
    "Project Name",
    "Issue labels",
];

/// Builds the conventional report file name for a date range.
pub fn report_file_name(project_key: &str, date_from: NaiveDate, date_to: NaiveDate) -> String {
    format!(
        "tempo-worklog_{}_{}_{}.csv",
        project_key,
        date_from.format("%Y-%m-%d"),
        date_to.format("%Y-%m-%d")
    )
}

/// Serializes normalized records into the delimited report file.
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the header row plus one row per record, in record order.
    pub fn write(&self, records: &[WorklogRecord]) -> Result<()> {
        let mut buf = Vec::new();
        {
            let mut wtr = csv::WriterBuilder::new().delimiter(CSV_DELIMITER).from_writer(&mut buf);

            wtr.write_record(&COLUMNS)?;
            for record in records {
                wtr.write_record(&[
                    record.issue_key.as_str(),
                    record.issue_summary.as_str(),
                    record.hours.as_str(),
                    record.work_date.as_str(),
                    record.full_name.as_str(),
                    record.period.as_str(),
                    record.month.as_str(),
                    record.issue_type.as_str(),
                    record.issue_status.as_str(),
                    record.project_key.as_str(),
                    record.project_name.as_str(),
                    record.issue_labels.as_deref().unwrap_or(""),
                ])?;
            }
            wtr.flush()?;
        }

        let text = String::from_utf8(buf)?;
        fs::write(&self.path, encode_utf16le(&text))?;
        Ok(())
    }
}

/// Encodes text as UTF-16LE prefixed with a byte-order mark.
fn encode_utf16le(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + text.len() * 2);
    bytes.extend_from_slice(&[0xFF, 0xFE]);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

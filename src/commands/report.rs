//! Worklog report command.
//!
//! Runs the whole pipeline for one invocation: fetch the raw worklog
//! document for the date range, normalize every entry (optionally enriched
//! with issue labels), write the delimited report file and hand it to the
//! delivery dispatcher.

use crate::api::{jira::Jira, tempo::Tempo};
use crate::libs::{
    config::Config,
    delivery::{Dispatcher, FtpTarget},
    messages::Message,
    report::{report_file_name, ReportWriter},
    worklog::{self, WorklogRecord},
};
use crate::{msg_error, msg_error_anyhow, msg_info, msg_print};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Start date (yyyy-mm-dd), defaults to the first day of the previous month
    #[arg(short = 'b', long)]
    begin_date: Option<NaiveDate>,

    /// End date (yyyy-mm-dd), defaults to the last day of the previous month
    #[arg(short = 'e', long)]
    end_date: Option<NaiveDate>,

    /// Only include worklogs of this project key
    #[arg(short = 'k', long, default_value = "")]
    project_key: String,

    /// Destination FTP host
    #[arg(short = 'f', long)]
    ftp_host: Option<String>,

    /// Destination FTP directory, slash-separated
    #[arg(short = 'd', long)]
    ftp_dir: Option<String>,

    /// FTP username
    #[arg(short = 'u', long)]
    ftp_user: Option<String>,

    /// FTP password
    #[arg(short = 'p', long)]
    ftp_password: Option<String>,

    /// Recipient email address, may be given multiple times
    #[arg(short = 'r', long = "recipient")]
    recipients: Vec<String>,

    /// Include issue labels in the report
    #[arg(short = 'l', long)]
    labels: bool,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;

    let (default_from, default_to) = previous_month_range(Local::now().date_naive());
    let date_from = args.begin_date.unwrap_or(default_from);
    let date_to = args.end_date.unwrap_or(default_to);

    let tempo_config = config.tempo.clone().ok_or_else(|| msg_error_anyhow!(Message::TempoConfigNotFound))?;
    let tempo = Tempo::new(&tempo_config)?;

    msg_print!(Message::RequestingWorklogs);
    let document = tempo.fetch_worklogs(date_from, date_to, &args.project_key).await?;
    let document = worklog::parse(&document)?;

    let jira = match args.labels {
        true => {
            let jira_config = config.jira.clone().ok_or_else(|| msg_error_anyhow!(Message::JiraConfigNotFound))?;
            Some(Jira::new(&jira_config)?)
        }
        false => None,
    };

    let mut records: Vec<WorklogRecord> = Vec::with_capacity(document.worklogs.len());
    for raw in &document.worklogs {
        msg_print!(Message::FetchingWorklog(raw.issue_key.clone()));

        // Label lookups are non-fatal; the record proceeds without labels.
        let issue_labels = match &jira {
            Some(jira) => match jira.issue_labels(&raw.issue_key).await {
                Ok(labels) => Some(labels),
                Err(e) => {
                    msg_error!(Message::LabelsFetchFailed(e.to_string()));
                    None
                }
            },
            None => None,
        };

        records.push(WorklogRecord::from_raw(raw, issue_labels)?);
    }
    if records.is_empty() {
        msg_info!(Message::NoWorklogsFound);
    }

    let file_name = report_file_name(&args.project_key, date_from, date_to);
    msg_print!(Message::SavingReport(file_name.clone()));
    let writer = ReportWriter::new(&file_name);
    writer.write(&records)?;

    let ftp_target = args.ftp_host.as_ref().map(|host| FtpTarget {
        host: host.clone(),
        dir: args.ftp_dir.clone().unwrap_or_default(),
        user: args.ftp_user.clone().unwrap_or_default(),
        password: args.ftp_password.clone().unwrap_or_default(),
    });

    Dispatcher::new(config.smtp.clone()).deliver(writer.path(), &args.recipients, ftp_target.as_ref(), date_from, date_to)?;

    Ok(())
}

/// First and last day of the month preceding `today`.
pub fn previous_month_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first_of_current = today.with_day(1).expect("day 1 exists in every month");
    let last_of_previous = first_of_current.pred_opt().expect("a day precedes every month start");
    let first_of_previous = last_of_previous.with_day(1).expect("day 1 exists in every month");
    (first_of_previous, last_of_previous)
}

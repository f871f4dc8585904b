//! Display implementation for application messages.
//!
//! All user-facing text lives in this one match so wording stays consistent
//! and every message variant has an explicit formatting decision.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigModuleTempo => "Tempo settings".to_string(),
            Message::ConfigModuleJira => "Jira settings".to_string(),
            Message::ConfigModuleSmtp => "SMTP settings".to_string(),
            Message::PromptTempoApiUrl => "Enter the Jira base URL for the Tempo servlet".to_string(),
            Message::PromptTempoApiToken => "Enter the Tempo API token (leave empty to use TEMPO_API_TOKEN)".to_string(),
            Message::PromptJiraApiUrl => "Enter the Jira base URL".to_string(),
            Message::PromptJiraApiToken => "Enter the Jira API token (leave empty to use JIRA_API_TOKEN)".to_string(),
            Message::PromptSmtpServer => "Enter the SMTP server host".to_string(),
            Message::PromptSmtpPort => "Enter the SMTP server port".to_string(),
            Message::PromptSmtpSender => "Enter the sender email address".to_string(),
            Message::TempoConfigNotFound => "Tempo configuration not found, run 'tempo-worklog init' first".to_string(),
            Message::JiraConfigNotFound => "Jira configuration not found, run 'tempo-worklog init' to use --labels".to_string(),
            Message::SmtpConfigNotFound => "SMTP configuration not found, run 'tempo-worklog init' to send email".to_string(),

            // === WORKLOG RETRIEVAL MESSAGES ===
            Message::RequestingWorklogs => "requesting for tempo worklogs...".to_string(),
            Message::RequestReturned(status) => format!("request returned {}", status),
            Message::FetchingWorklog(issue_key) => format!("fetching worklog for {}", issue_key),
            Message::LabelsFetchFailed(error) => format!("failed to get issue labels: {}", error),
            Message::NoWorklogsFound => "no worklogs found for the requested range".to_string(),

            // === REPORT MESSAGES ===
            Message::SavingReport(file) => format!("saving \"{}\"...", file),

            // === DELIVERY MESSAGES ===
            Message::SendingEmail(recipient) => format!("sending report to {}", recipient),
            Message::EmailSent(recipient) => format!("report sent to {}", recipient),
            Message::EmailSendFailed(recipient, error) => format!("failed to send report to {}: {}", recipient, error),
            Message::UploadingToFtp(host) => format!("uploading report to {}", host),
            Message::FtpUploadComplete(path) => format!("report uploaded to {}", path),
            Message::ReportNotDelivered(file) => format!("no delivery target given, \"{}\" kept locally", file),
            Message::LocalReportRemoved(file) => format!("removed local file \"{}\"", file),
        };

        write!(f, "{}", text)
    }
}

use super::REQUEST_TIMEOUT;
use crate::libs::{config::ConfigModule, error::ReportError, messages::Message};
use crate::msg_print;
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const WORKLOG_URL: &str = "plugins/servlet/tempo-getWorklog/";
const ENDPOINT: &str = "tempo worklogs";

/// Fixed output-format and detail-inclusion options sent with every worklog
/// request.
///
/// These were process-wide constants in earlier deployments; as a value
/// object owned by the client they can be substituted in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct WorklogFlags {
    pub format: &'static str,
    pub use_external_hours: bool,
    pub add_issue_details: bool,
    pub add_user_details: bool,
    pub add_issue_summary: bool,
    pub add_billing_info: bool,
}

impl Default for WorklogFlags {
    fn default() -> Self {
        Self {
            format: "xml",
            use_external_hours: false,
            add_issue_details: true,
            add_user_details: true,
            add_issue_summary: true,
            add_billing_info: false,
        }
    }
}

/// Client for the Tempo worklog servlet.
pub struct Tempo {
    client: Client,
    config: TempoConfig,
    flags: WorklogFlags,
}

impl Tempo {
    pub fn new(config: &TempoConfig) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            config: config.clone(),
            flags: WorklogFlags::default(),
        })
    }

    pub fn with_flags(mut self, flags: WorklogFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Retrieves the raw worklog document for the given date range.
    ///
    /// An empty `project_key` requests worklogs across all projects. Any
    /// non-success status is fatal for the run: there is no report to build
    /// without the primary document.
    pub async fn fetch_worklogs(&self, date_from: NaiveDate, date_to: NaiveDate, project_key: &str) -> Result<String> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), WORKLOG_URL);

        let mut query: Vec<(&str, String)> = vec![
            ("dateFrom", date_from.format("%Y-%m-%d").to_string()),
            ("dateTo", date_to.format("%Y-%m-%d").to_string()),
            ("format", self.flags.format.to_string()),
            ("useExternalHours", self.flags.use_external_hours.to_string()),
            ("addIssueDetails", self.flags.add_issue_details.to_string()),
            ("addUserDetails", self.flags.add_user_details.to_string()),
            ("addIssueSummary", self.flags.add_issue_summary.to_string()),
            ("addBillingInfo", self.flags.add_billing_info.to_string()),
            ("tempoApiToken", self.config.api_token.clone()),
        ];
        if !project_key.is_empty() {
            query.push(("projectKey", project_key.to_string()));
        }

        let res = self.client.get(&url).query(&query).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ReportError::RequestFailure { endpoint: ENDPOINT, status }.into());
        }
        msg_print!(Message::RequestReturned(status.as_u16().to_string()));

        Ok(res.text().await?)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TempoConfig {
    /// Jira base URL hosting the Tempo servlet.
    pub api_url: String,
    /// Tempo API token passed as a query parameter.
    pub api_token: String,
}

impl TempoConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "tempo".to_string(),
            name: "Tempo".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: "".to_string(),
            api_token: "".to_string(),
        });
        msg_print!(Message::ConfigModuleTempo);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTempoApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            api_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTempoApiToken.to_string())
                .allow_empty(true)
                .default(config.api_token)
                .interact_text()?,
        })
    }
}

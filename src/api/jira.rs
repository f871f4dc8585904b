use super::REQUEST_TIMEOUT;
use crate::libs::{config::ConfigModule, error::ReportError, messages::Message};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const ISSUE_URL: &str = "rest/api/latest/issue";
const ENDPOINT: &str = "jira issue labels";

#[derive(Deserialize, Debug)]
struct IssueResponse {
    #[serde(default)]
    fields: IssueFields,
}

#[derive(Deserialize, Debug, Default)]
struct IssueFields {
    #[serde(default)]
    labels: Vec<String>,
}

/// Client for the Jira issue endpoint used for label enrichment.
pub struct Jira {
    client: Client,
    config: JiraConfig,
}

impl Jira {
    pub fn new(config: &JiraConfig) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            config: config.clone(),
        })
    }

    /// Fetches the labels of a single issue, comma-joined.
    ///
    /// An issue without a labels field yields an empty string. A
    /// non-success status surfaces as `RequestFailure`; callers treat that
    /// as non-fatal per record, since one issue's labels are not worth an
    /// otherwise complete report.
    pub async fn issue_labels(&self, issue_key: &str) -> Result<String> {
        let url = format!("{}/{}/{}", self.config.api_url.trim_end_matches('/'), ISSUE_URL, issue_key);

        let res = self
            .client
            .get(&url)
            .query(&[("fields", "labels")])
            .bearer_auth(&self.config.api_token)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ReportError::RequestFailure { endpoint: ENDPOINT, status }.into());
        }

        let issue = res.json::<IssueResponse>().await?;
        Ok(issue.fields.labels.join(", "))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JiraConfig {
    /// Jira base URL.
    pub api_url: String,
    /// Bearer token for the REST API.
    pub api_token: String,
}

impl JiraConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "jira".to_string(),
            name: "Jira".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: "".to_string(),
            api_token: "".to_string(),
        });
        msg_print!(Message::ConfigModuleJira);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptJiraApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            api_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptJiraApiToken.to_string())
                .allow_empty(true)
                .default(config.api_token)
                .interact_text()?,
        })
    }
}

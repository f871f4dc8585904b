//! Configuration management for the reporting utility.
//!
//! Settings are stored as JSON in the platform application-data directory
//! and are split into optional per-service sections: the Tempo servlet used
//! for worklog retrieval, the Jira REST API used for label enrichment, and
//! the SMTP account used for email delivery. Each section can be configured
//! independently through the interactive `init` wizard.
//!
//! Secrets (API tokens, the SMTP password) may live in the file, but an
//! environment variable always wins: `TEMPO_API_TOKEN`, `JIRA_API_TOKEN`
//! and `SMTP_PASSWORD` override whatever the file contains. Combined with
//! dotenv support this keeps tokens out of the configuration file entirely
//! when desired.

use super::data_storage::DataStorage;
use crate::api::jira::JiraConfig;
use crate::api::tempo::TempoConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default SMTP submission port.
pub const DEFAULT_SMTP_PORT: u16 = 465;

/// Represents a configurable module shown in the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// SMTP account used for email delivery of finished reports.
///
/// The password is optional in the file; `SMTP_PASSWORD` in the environment
/// takes precedence either way.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SmtpConfig {
    /// SMTP server host name.
    pub server: String,

    /// SMTP submission port.
    pub port: u16,

    /// Sender address, also used as the login for authentication.
    pub sender: String,

    /// Account password. Prefer the `SMTP_PASSWORD` environment variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl SmtpConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "smtp".to_string(),
            name: "SMTP".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            server: "".to_string(),
            port: DEFAULT_SMTP_PORT,
            sender: "".to_string(),
            password: None,
        });
        msg_print!(Message::ConfigModuleSmtp);
        Ok(Self {
            server: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSmtpServer.to_string())
                .default(config.server)
                .interact_text()?,
            port: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSmtpPort.to_string())
                .default(config.port)
                .interact_text()?,
            sender: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSmtpSender.to_string())
                .default(config.sender)
                .interact_text()?,
            password: config.password,
        })
    }
}

/// Root configuration object.
///
/// Every section is optional so users only configure the services they use:
/// FTP-only deployments never touch SMTP settings, and label enrichment is
/// not forced on runs that never pass `--labels`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Tempo worklog servlet connection parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<TempoConfig>,

    /// Jira REST API connection parameters for label enrichment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraConfig>,

    /// SMTP account for email delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when absent,
    /// and applies environment-variable overrides for secrets.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let mut config = if config_file_path.exists() {
            let config_str = fs::read_to_string(config_file_path)?;
            serde_json::from_str(&config_str)?
        } else {
            Config::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON, overwriting any
    /// existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Deletes the configuration file if it exists.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Overrides file-based secrets with their environment counterparts.
    pub fn apply_env(&mut self) {
        if let Some(tempo) = &mut self.tempo {
            if let Ok(token) = env::var("TEMPO_API_TOKEN") {
                tempo.api_token = token;
            }
        }
        if let Some(jira) = &mut self.jira {
            if let Ok(token) = env::var("JIRA_API_TOKEN") {
                jira.api_token = token;
            }
        }
        if let Some(smtp) = &mut self.smtp {
            if let Ok(password) = env::var("SMTP_PASSWORD") {
                smtp.password = Some(password);
            }
        }
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents the available modules, pre-fills existing values as
    /// defaults, and returns the updated configuration ready for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![TempoConfig::module(), JiraConfig::module(), SmtpConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "tempo" => config.tempo = Some(TempoConfig::init(&config.tempo)?),
                "jira" => config.jira = Some(JiraConfig::init(&config.jira)?),
                "smtp" => config.smtp = Some(SmtpConfig::init(&config.smtp)?),
                _ => {}
            }
        }

        Ok(config)
    }
}

//! Delivery dispatch for the finished report file.
//!
//! Two mutually exclusive delivery modes exist: email to one or more
//! recipients over an authenticated STARTTLS SMTP session, or upload into a
//! remote FTP directory whose path is created component by component when
//! missing. A non-empty recipient list takes priority when both targets are
//! supplied; with neither, the run keeps the local file and reports that
//! nothing was delivered.
//!
//! Each recipient gets an independent send. A failed recipient is logged
//! and the remaining sends still run, but the run then fails with
//! `DeliveryFailure` and the local file is kept so the artifact survives
//! for manual delivery. The local file is removed only after a fully
//! successful delivery.

use crate::libs::config::SmtpConfig;
use crate::libs::error::ReportError;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_error_anyhow, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message as Email, SmtpTransport, Transport};
use std::fs;
use std::path::Path;
use suppaftp::FtpStream;

const FTP_PORT: u16 = 21;

/// FTP destination for report upload.
#[derive(Debug, Clone, PartialEq)]
pub struct FtpTarget {
    pub host: String,
    pub dir: String,
    pub user: String,
    pub password: String,
}

/// Delivery mode selected from the supplied destination arguments.
#[derive(Debug, PartialEq)]
pub enum DeliveryMode<'a> {
    Email(&'a [String]),
    Ftp(&'a FtpTarget),
    None,
}

/// Picks the delivery mode; a non-empty recipient list wins over FTP.
pub fn select_mode<'a>(recipients: &'a [String], ftp: Option<&'a FtpTarget>) -> DeliveryMode<'a> {
    if !recipients.is_empty() {
        DeliveryMode::Email(recipients)
    } else if let Some(target) = ftp.filter(|target| !target.host.is_empty()) {
        DeliveryMode::Ftp(target)
    } else {
        DeliveryMode::None
    }
}

/// Splits a slash-separated remote directory path into its components.
pub fn remote_dirs(dir: &str) -> Vec<&str> {
    dir.split('/').filter(|part| !part.is_empty()).collect()
}

/// Directory surface of the remote session used by the upload path walk.
pub trait RemoteFs {
    /// Lists the entry names of the current remote directory.
    fn names(&mut self) -> Result<Vec<String>>;
    fn mkdir(&mut self, dir: &str) -> Result<()>;
    fn cwd(&mut self, dir: &str) -> Result<()>;
}

impl RemoteFs for FtpStream {
    fn names(&mut self) -> Result<Vec<String>> {
        Ok(self.nlst(None)?)
    }

    fn mkdir(&mut self, dir: &str) -> Result<()> {
        FtpStream::mkdir(self, dir)?;
        Ok(())
    }

    fn cwd(&mut self, dir: &str) -> Result<()> {
        FtpStream::cwd(self, dir)?;
        Ok(())
    }
}

/// Walks the remote path component by component from the current directory,
/// creating each level that does not already exist.
pub fn ensure_remote_path(remote: &mut impl RemoteFs, dir: &str) -> Result<()> {
    for component in remote_dirs(dir) {
        if remote.names()?.iter().any(|name| name == component) {
            remote.cwd(component)?;
        } else {
            remote.mkdir(component)?;
            remote.cwd(component)?;
        }
    }
    Ok(())
}

/// Sends the produced report off-process and removes the local artifact on
/// success.
pub struct Dispatcher {
    smtp: Option<SmtpConfig>,
}

impl Dispatcher {
    pub fn new(smtp: Option<SmtpConfig>) -> Self {
        Self { smtp }
    }

    /// Delivers the report file, returning whether a delivery happened.
    ///
    /// `Ok(false)` means no delivery target was supplied and the file was
    /// kept; any transport failure maps to `DeliveryFailure`.
    pub fn deliver(
        &self,
        file: &Path,
        recipients: &[String],
        ftp: Option<&FtpTarget>,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<bool> {
        match select_mode(recipients, ftp) {
            DeliveryMode::Email(recipients) => {
                let smtp = self.smtp.as_ref().ok_or_else(|| msg_error_anyhow!(Message::SmtpConfigNotFound))?;

                let mut failed = 0usize;
                for recipient in recipients {
                    msg_print!(Message::SendingEmail(recipient.clone()));
                    match send_email(smtp, file, recipient, date_from, date_to) {
                        Ok(()) => msg_success!(Message::EmailSent(recipient.clone())),
                        Err(e) => {
                            failed += 1;
                            msg_error!(Message::EmailSendFailed(recipient.clone(), e.to_string()));
                        }
                    }
                }
                if failed > 0 {
                    return Err(ReportError::DeliveryFailure(format!(
                        "{} of {} recipients failed, local file kept",
                        failed,
                        recipients.len()
                    ))
                    .into());
                }

                remove_local(file)?;
                Ok(true)
            }
            DeliveryMode::Ftp(target) => {
                msg_print!(Message::UploadingToFtp(target.host.clone()));
                upload_ftp(file, target).map_err(|e| ReportError::DeliveryFailure(e.to_string()))?;
                msg_success!(Message::FtpUploadComplete(format!("{}/{}", target.host, target.dir)));

                remove_local(file)?;
                Ok(true)
            }
            DeliveryMode::None => {
                msg_warning!(Message::ReportNotDelivered(file.display().to_string()));
                Ok(false)
            }
        }
    }
}

/// Composes and submits one message with the report attached.
fn send_email(smtp: &SmtpConfig, file: &Path, recipient: &str, date_from: NaiveDate, date_to: NaiveDate) -> Result<()> {
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report.csv".to_string());
    let content = fs::read(file)?;

    let attachment = Attachment::new(file_name).body(content, ContentType::parse("application/octet-stream")?);
    let email = Email::builder()
        .from(smtp.sender.parse()?)
        .to(recipient.parse()?)
        .subject(format!(
            "Tempo worklog report from {} to {}",
            date_from.format("%Y-%m-%d"),
            date_to.format("%Y-%m-%d")
        ))
        .multipart(MultiPart::mixed().singlepart(attachment))?;

    let mailer = SmtpTransport::starttls_relay(&smtp.server)?
        .port(smtp.port)
        .credentials(Credentials::new(smtp.sender.clone(), smtp.password.clone().unwrap_or_default()))
        .build();
    mailer.send(&email)?;
    Ok(())
}

/// Uploads the file into the remote directory, creating missing path
/// components from the root down.
fn upload_ftp(file: &Path, target: &FtpTarget) -> Result<()> {
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report.csv".to_string());

    let mut ftp = FtpStream::connect(format!("{}:{}", target.host, FTP_PORT))?;
    ftp.login(&target.user, &target.password)?;
    ftp.cwd("/")?;
    ensure_remote_path(&mut ftp, &target.dir)?;

    let mut reader = fs::File::open(file)?;
    ftp.put_file(&file_name, &mut reader)?;
    ftp.quit()?;
    Ok(())
}

fn remove_local(file: &Path) -> Result<()> {
    fs::remove_file(file)?;
    msg_debug!(Message::LocalReportRemoved(file.display().to_string()));
    Ok(())
}

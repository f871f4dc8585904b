#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptSelectModules,
    ConfigModuleTempo,
    ConfigModuleJira,
    ConfigModuleSmtp,
    PromptTempoApiUrl,
    PromptTempoApiToken,
    PromptJiraApiUrl,
    PromptJiraApiToken,
    PromptSmtpServer,
    PromptSmtpPort,
    PromptSmtpSender,
    TempoConfigNotFound,
    JiraConfigNotFound,
    SmtpConfigNotFound,

    // === WORKLOG RETRIEVAL MESSAGES ===
    RequestingWorklogs,
    RequestReturned(String),   // status
    FetchingWorklog(String),   // issue key
    LabelsFetchFailed(String), // error message
    NoWorklogsFound,

    // === REPORT MESSAGES ===
    SavingReport(String), // file name

    // === DELIVERY MESSAGES ===
    SendingEmail(String),            // recipient
    EmailSent(String),               // recipient
    EmailSendFailed(String, String), // recipient, error
    UploadingToFtp(String),          // host
    FtpUploadComplete(String),       // remote path
    ReportNotDelivered(String),      // file name
    LocalReportRemoved(String),      // file name
}

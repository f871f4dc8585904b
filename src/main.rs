use tempo_worklog::commands::Cli;
use tempo_worklog::libs::error::ReportError;
use tempo_worklog::libs::messages::macros::is_debug_mode;
use tempo_worklog::msg_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // In debug mode the msg_* macros route through tracing instead of the
    // plain console.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    if let Err(e) = Cli::menu().await {
        msg_error!(e);
        let code = e.downcast_ref::<ReportError>().map(ReportError::exit_code).unwrap_or(1);
        std::process::exit(code);
    }
}

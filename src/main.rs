//! Contact Assistant - Main entry point
//!
//! Runs the interactive address book on stdin/stdout. Logs go to stderr so
//! they never interleave with the session.

use anyhow::Result;
use contact_assistant::repositories::{DirectoryRepository, JsonFileRepository};
use contact_assistant::session::{Clock, Session, SystemClock};
use contact_assistant::Config;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, stdout carries the session)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting contact assistant with address book: {}",
        config.contacts_file.display()
    );

    let repository =
        Arc::new(JsonFileRepository::new(&config.contacts_file)) as Arc<dyn DirectoryRepository>;
    let clock = Arc::new(SystemClock) as Arc<dyn Clock>;

    let mut session = Session::start(repository, clock).await;

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    if let Err(e) = session.run(stdin, stdout).await {
        error!("Session ended with an error: {}", e);
        return Err(e.into());
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}

//! Assistant Bot - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so
//! they never interleave with the conversation.

use anyhow::Result;
use assistant_bot::{cli, Config, Session};
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first: it carries the fallback log level
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        today = %config.today(),
        pinned = config.today.is_some(),
        "Starting assistant bot"
    );

    let mut session = Session::new(config.suggestion_threshold);
    if let Err(e) = cli::run(&mut session, &config, BufReader::new(stdin()), stdout()).await {
        error!("Input loop failed: {}", e);
        return Err(e);
    }

    info!("Assistant bot shutdown complete");
    Ok(())
}

//! Address Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr.

use address_book::{Assistant, Config, JsonFileStore};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let store = JsonFileStore::new(config.book_path.clone());
    let assistant = match Assistant::open(store) {
        Ok(assistant) => assistant,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e).with_context(|| {
                format!("cannot read {}", config.book_path.display())
            });
        }
    };
    let mut assistant = assistant.with_lookahead_days(config.lookahead_days);

    let stdin = std::io::stdin();
    assistant.run(stdin.lock(), std::io::stdout())?;

    info!("Session closed");
    Ok(())
}

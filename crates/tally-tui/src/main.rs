//! Terminal shell for Tally.
//!
//! Presents the friend list, the add-friend form, and the split-bill
//! form, and forwards key events into `tally-core`. All behavioral
//! rules live in the core; this binary only renders state and maps
//! keystrokes to session operations.

mod app;
mod ui;

use anyhow::Result;
use tally_core::config::TallyConfig;
use tracing_subscriber::EnvFilter;

use crate::app::App;

fn main() -> Result<()> {
    init_tracing()?;

    let config = TallyConfig::load_or_default();
    tracing::info!(
        "[Main] Starting with {} seeded friends",
        config.friends.len()
    );

    App::new(&config).run()
}

/// Sends tracing output to a log file so it never corrupts the
/// alternate-screen TUI. Filter via RUST_LOG as usual.
fn init_tracing() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .map(|dir| dir.join("tally"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::never(log_dir, "tally.log");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(appender)
        .with_ansi(false)
        .init();
    Ok(())
}

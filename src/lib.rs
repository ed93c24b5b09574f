// Quotefix - one-shot patcher for a mangled UI label
// Patches a single hardcoded line in template-import-dialog.tsx

pub mod error;
pub mod patch;
pub mod utils;

use anyhow::Result;
use tracing::info;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize the patcher with default settings
pub fn init() -> Result<()> {
    init_with_logger(true)
}

/// Initialize the patcher with custom logger configuration
///
/// @param ansi_colors - Whether to enable ANSI color codes in logs
/// Logs always go to stderr so the single confirmation line on stdout
/// stays machine-clean.
pub fn init_with_logger(ansi_colors: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    info!("Initializing quotefix v{}", version());

    Ok(())
}

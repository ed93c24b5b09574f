use anyhow::{Context, Result};
use std::env;
use tracing::info;

use quotefix::patch::patch_substring_in_file;

/// Target file, relative to the directory the tool is launched from.
const TARGET: &str = "template-import-dialog.tsx";

// Needle and replacement are byte-identical; the run is a confirmed no-op
// rewrite. Do not "fix" one of them by guessing at quote characters.
const NEEDLE: &str = "Переименовать новый шаблон (добавить \"(импорт)\")";
const REPLACEMENT: &str = "Переименовать новый шаблон (добавить \"(импорт)\")";

fn main() -> Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "quotefix=debug");
    }

    quotefix::init().context("Failed to initialize quotefix")?;

    info!("Starting fix-quotes-final v{}", quotefix::version());

    let outcome = patch_substring_in_file(TARGET, NEEDLE, REPLACEMENT)
        .with_context(|| format!("Failed to patch {}", TARGET))?;

    info!(
        "Processed {} occurrence(s), changes made: {}",
        outcome.replacements, outcome.changes_made
    );

    println!("Fixed quotes in {}", TARGET);

    Ok(())
}

use anyhow::{Context, Result};
use std::env;
use tracing::info;

use quotefix::patch::patch_line_in_file;

/// Target file, relative to the directory the tool is launched from.
const TARGET: &str = "template-import-dialog.tsx";

/// Zero-based index of the mangled label (line 339 of the dialog).
const LINE_INDEX: usize = 338;

/// The corrected label, verbatim, with its own terminator.
const REPLACEMENT: &str =
    "                                    Переименовать новый шаблон (добавить \"(импорт)\")\n";

fn main() -> Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "quotefix=debug");
    }

    quotefix::init().context("Failed to initialize quotefix")?;

    info!("Starting fix-quotes v{}", quotefix::version());

    patch_line_in_file(TARGET, LINE_INDEX, REPLACEMENT)
        .with_context(|| format!("Failed to patch {}", TARGET))?;

    println!("Fixed quotes in {}", TARGET);

    Ok(())
}

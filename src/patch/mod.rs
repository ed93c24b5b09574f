pub mod line;
pub mod substring;

pub use line::{patch_line_in_file, replace_line};
pub use substring::{patch_substring_in_file, substitute, PatchOutcome};

use similar::{ChangeTag, TextDiff};
use tracing::debug;

/// Log a line-level summary of an applied edit at debug level
pub(crate) fn log_diff_summary(old: &str, new: &str) {
    if old == new {
        return;
    }

    let diff = TextDiff::from_lines(old, new);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => debug!("- {}", change.value().trim_end()),
            ChangeTag::Insert => debug!("+ {}", change.value().trim_end()),
            ChangeTag::Equal => {}
        }
    }
}

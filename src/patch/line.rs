use std::path::Path;
use tracing::debug;

use crate::error::{PatchError, PatchResult};
use crate::utils::fs::{read_file_to_string, write_file_sync};

/// Replace the line at `index` (zero-based) with `replacement`, verbatim.
///
/// Lines are physical lines: each keeps its own terminator, and the
/// replacement must carry its own. Every other line passes through byte
/// for byte. Fails with [`PatchError::LineOutOfRange`] when the index is
/// not within the file's line count.
pub fn replace_line(content: &str, index: usize, replacement: &str) -> PatchResult<String> {
    let mut lines: Vec<&str> = content.split_inclusive('\n').collect();

    if index >= lines.len() {
        return Err(PatchError::line_out_of_range(index, lines.len()));
    }

    lines[index] = replacement;
    Ok(lines.concat())
}

/// Replace one physical line of a file in place.
///
/// Not idempotent under re-numbering: if the file's line count changes
/// between runs, the fixed index may point at an unrelated line.
pub fn patch_line_in_file(
    path: impl AsRef<Path>,
    index: usize,
    replacement: &str,
) -> PatchResult<()> {
    let path = path.as_ref();

    let content = read_file_to_string(path)?;
    let patched = replace_line(&content, index, replacement)?;

    super::log_diff_summary(&content, &patched);
    write_file_sync(path, &patched)?;

    debug!("Replaced line {} of {}", index + 1, path.display());
    Ok(())
}

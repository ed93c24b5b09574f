use std::path::Path;
use tracing::{debug, warn};

use crate::error::PatchResult;
use crate::utils::fs::{read_file_to_string, write_file_sync};

/// Result of a substring patch
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    /// Number of needle occurrences replaced
    pub replacements: usize,
    /// Whether the written content differs from the original
    pub changes_made: bool,
}

/// Replace every exact occurrence of `needle` with `replacement`.
///
/// Returns the new content and the number of occurrences replaced. Zero
/// occurrences is not an error; the content comes back unchanged.
pub fn substitute(content: &str, needle: &str, replacement: &str) -> (String, usize) {
    let occurrences = content.matches(needle).count();
    (content.replace(needle, replacement), occurrences)
}

/// Replace every occurrence of `needle` in a file, in place.
///
/// The file is rewritten even when nothing matched, mirroring a plain
/// read-replace-write cycle. `changes_made` is decided by comparing
/// content, so an identical needle and replacement reports a no-op.
pub fn patch_substring_in_file(
    path: impl AsRef<Path>,
    needle: &str,
    replacement: &str,
) -> PatchResult<PatchOutcome> {
    let path = path.as_ref();

    let content = read_file_to_string(path)?;
    let (patched, replacements) = substitute(&content, needle, replacement);
    let changes_made = patched != content;

    if replacements == 0 {
        warn!("Needle not found in {}; rewriting unchanged", path.display());
    } else if !changes_made {
        warn!(
            "Needle and replacement are identical; {} occurrence(s) in {} left as-is",
            replacements,
            path.display()
        );
    }

    super::log_diff_summary(&content, &patched);
    write_file_sync(path, &patched)?;

    debug!(
        "Replaced {} occurrence(s) in {}",
        replacements,
        path.display()
    );
    Ok(PatchOutcome {
        replacements,
        changes_made,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_substitute_replaces_every_occurrence() {
        let (result, count) = substitute("foo bar foo baz foo", "foo", "qux");
        assert_eq!(result, "qux bar qux baz qux");
        assert_eq!(count, 3);
        assert_eq!(result.matches("foo").count(), 0);
        assert_eq!(result.matches("qux").count(), 3);
    }

    #[test]
    fn test_substitute_absent_needle_is_identity() {
        let (result, count) = substitute("nothing to see here", "needle", "thread");
        assert_eq!(result, "nothing to see here");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_substitute_is_idempotent() {
        let once = substitute("foo bar foo", "foo", "qux").0;
        let twice = substitute(&once, "foo", "qux").0;
        assert_eq!(once, twice);
    }

    #[test]
    fn test_identical_needle_and_replacement_is_noop() {
        let input = "Переименовать новый шаблон (добавить \"(импорт)\")\nelse\n";
        let needle = "Переименовать новый шаблон (добавить \"(импорт)\")";
        let (result, count) = substitute(input, needle, needle);
        assert_eq!(result, input);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_patch_file_reports_changes() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("dialog.tsx");

        std::fs::write(&file_path, "label: old text\nother: old text\n").unwrap();
        let outcome = patch_substring_in_file(&file_path, "old text", "new text").unwrap();

        assert_eq!(outcome.replacements, 2);
        assert!(outcome.changes_made);
        assert_eq!(
            std::fs::read_to_string(&file_path).unwrap(),
            "label: new text\nother: new text\n"
        );
    }

    #[test]
    fn test_patch_file_absent_needle_rewrites_unchanged() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("dialog.tsx");

        std::fs::write(&file_path, "unrelated content\n").unwrap();
        let outcome = patch_substring_in_file(&file_path, "needle", "thread").unwrap();

        assert_eq!(outcome.replacements, 0);
        assert!(!outcome.changes_made);
        assert_eq!(
            std::fs::read_to_string(&file_path).unwrap(),
            "unrelated content\n"
        );
    }

    #[test]
    fn test_patch_file_degenerate_pair_is_noop() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("dialog.tsx");

        let original = "keep\nthe same\nkeep\n";
        std::fs::write(&file_path, original).unwrap();
        let outcome = patch_substring_in_file(&file_path, "keep", "keep").unwrap();

        assert_eq!(outcome.replacements, 2);
        assert!(!outcome.changes_made);
        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), original);
    }
}

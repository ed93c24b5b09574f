use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{map_io_err, PatchResult};

/// Read a file's contents as string
pub fn read_file_to_string(path: impl AsRef<Path>) -> PatchResult<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).map_err(map_io_err(path))
}

/// Write string content to a file, replacing the previous contents entirely.
///
/// This is a plain overwrite: no temp file, no rename, no backup. A crash
/// mid-write can leave the file truncated.
pub fn write_file_sync(path: impl AsRef<Path>, content: &str) -> PatchResult<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to file: {}", content.len(), path.display());

    fs::write(path, content).map_err(map_io_err(path))
}

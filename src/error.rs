use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the quotefix patcher
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("line index {index} out of range ({line_count} lines)")]
    LineOutOfRange { index: usize, line_count: usize },
}

impl PatchError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Create a new line-out-of-range error
    pub fn line_out_of_range(index: usize, line_count: usize) -> Self {
        Self::LineOutOfRange { index, line_count }
    }
}

impl From<std::io::Error> for PatchError {
    fn from(error: std::io::Error) -> Self {
        PatchError::io_error(error, None::<PathBuf>)
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> PatchError {
    let path = path.into();
    move |err| PatchError::io_error(err, Some(path))
}

/// Crate-level error types for deepwiki-relink diagnostics.
use std::path::PathBuf;

/// Every error names the path it happened on so the diagnostic is useful
/// without rerunning under a debugger.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The exported pages directory does not exist or is not a directory.
    #[error("pages directory not found: {}", path.display())]
    DirectoryMissing {
        /// Directory that was expected to hold the exported pages.
        path: PathBuf,
    },

    /// The link-line pattern failed to compile.
    #[error("invalid link pattern: {0}")]
    InvalidPattern(
        /// The wrapped regex compilation error.
        #[from]
        regex::Error,
    ),

    /// Listing the pages directory failed part way through.
    #[error("cannot list {}: {source}", path.display())]
    ListFailed {
        /// Directory being listed.
        path: PathBuf,
        /// The underlying walk error.
        source: walkdir::Error,
    },

    /// A page could not be read, or was not valid UTF-8.
    #[error("cannot read {}: {source}", path.display())]
    ReadFailed {
        /// Page that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A rewritten page could not be written back.
    #[error("cannot write {}: {source}", path.display())]
    WriteFailed {
        /// Page that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

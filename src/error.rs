//! Error types for digest formatting.

use thiserror::Error;

/// Errors from rendering a digest into caller-provided storage.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Destination buffer cannot hold the formatted digest
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Needed size
        needed: usize,
        /// Actual size
        got: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

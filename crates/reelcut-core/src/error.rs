//! Error types for Reelcut.

use thiserror::Error;

/// Main error type for cut-list operations.
///
/// A rejected insertion is not represented here: overlap is the expected,
/// frequent outcome of [`crate::CutList::add_section`] and is reported
/// through its boolean return value instead.
#[derive(Error, Debug)]
pub enum CutError {
    #[error("cut list has no sections")]
    Empty,

    #[error("no positive framerate is set")]
    InvalidFramerate,

    #[error("malformed cut list: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for cut-list operations.
pub type Result<T> = std::result::Result<T, CutError>;

//! Typed errors for the transcode pipeline.
//!
//! Only genuinely fatal conditions live here. Malformed trace lines are
//! skipped at the format boundary and an unterminated trailing transaction
//! is closed implicitly with a warning; neither is an error.

use thiserror::Error;

/// Errors produced while re-framing a trace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    /// A transaction closed with zero payload bits; there is nothing to
    /// re-chunk and the group arithmetic would be undefined.
    #[error("transaction #{index} has an empty payload")]
    EmptyTransaction {
        /// Zero-based ordinal of the offending transaction in the trace.
        index: usize,
    },
}

/// Result type alias using [`TranscodeError`].
pub type Result<T> = std::result::Result<T, TranscodeError>;

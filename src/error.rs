//! Error types for sked.

use thiserror::Error;

/// Result type for sked operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sked operations.
///
/// Heuristic misses inside the pipeline are not errors - unresolvable
/// date or time phrases degrade to sentinels and carried context. These
/// variants are reserved for the request boundary and collaborator
/// failures.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid input provided at the boundary (missing text, malformed record).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An annotation backend failed to produce output.
    #[error("Annotation failed: {0}")]
    Annotation(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Document store access failed.
    #[error("Store error: {0}")]
    Store(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create an annotation error.
    pub fn annotation(msg: impl Into<String>) -> Self {
        Error::Annotation(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Create a store error.
    pub fn store(msg: impl Into<String>) -> Self {
        Error::Store(msg.into())
    }
}

//! Crate-wide error type.
//!
//! Entity constructors and mutators reject invalid input at the boundary;
//! the scheduler itself never errors — it degrades to an empty plan on
//! degenerate input. Storage surfaces malformed documents instead of
//! silently defaulting fields.

use thiserror::Error;

/// Errors produced by entity validation, topic lookup, and persistence.
#[derive(Debug, Error)]
pub enum Error {
    /// A value violates an entity invariant (range, sign, emptiness).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A persisted document is structurally invalid.
    #[error("malformed data: {0}")]
    MalformedData(String),

    /// An underlying filesystem operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

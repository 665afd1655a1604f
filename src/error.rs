//! Error types for fixedrec
//!
//! Provides a unified error type for all store operations.

use thiserror::Error;

/// Result type alias using FixedRecError
pub type Result<T> = std::result::Result<T, FixedRecError>;

/// Unified error type for fixedrec operations
#[derive(Debug, Error)]
pub enum FixedRecError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Layout Errors
    // -------------------------------------------------------------------------
    /// File length is not a multiple of the record width
    #[error("Size inconsistency: file length {len} is not a multiple of {width}")]
    SizeInconsistency { len: u64, width: u64 },

    /// A short read at the tail of the file
    #[error("Corrupt record at position {position}: only {bytes_read} bytes present")]
    CorruptRecord { position: u64, bytes_read: usize },

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    /// Position outside `1..=max`
    #[error("Position {position} out of range (valid: 1..={max})")]
    PositionOutOfRange { position: u64, max: u64 },

    #[error("Store is empty")]
    EmptyStore,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    // -------------------------------------------------------------------------
    // Configuration / Access Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store is locked: {0}")]
    Locked(String),
}

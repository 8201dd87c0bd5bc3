//! Error types for the PDF writer.
//!
//! This module defines all error types that can occur while building and
//! serializing a document.

/// Result type alias for PDF writer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during PDF generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A construction parameter was empty or malformed
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending parameter
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Header version is not of the form `<major>.<minor>`
    #[error("Invalid PDF header version: '{0}'")]
    InvalidHeader(String),

    /// Number of recorded offsets differs from the number of allocated objects
    #[error("Offset ledger holds {recorded} entries but {allocated} object numbers were allocated")]
    LedgerMismatch {
        /// Entries in the offset ledger
        recorded: usize,
        /// Object numbers handed out by the allocator
        allocated: u32,
    },

    /// Object numbers in the ledger are not exactly `1..=N`
    #[error("Object numbers are not dense: expected {expected}, found {found}")]
    IdentityGap {
        /// Object number expected at this position
        expected: u32,
        /// Object number actually recorded
        found: u32,
    },

    /// A recorded offset does not land on the object's `obj` marker
    #[error("Cross-reference offset {offset} does not point at object {id}")]
    MisplacedOffset {
        /// Object number
        id: u32,
        /// Recorded byte offset
        offset: usize,
    },

    /// `startxref` does not point at the `xref` keyword
    #[error("startxref offset {offset} does not point at 'xref' in {len}-byte output")]
    StartXrefOutOfBounds {
        /// Computed startxref offset
        offset: usize,
        /// Total output length
        len: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

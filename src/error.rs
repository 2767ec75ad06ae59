//! Error types for the adaptive coder.

use thiserror::Error;

/// Error variants for adaptive encode/decode operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Symbol value cannot be represented in the configured raw width.
    ///
    /// Truncating instead would silently shrink the alphabet and break the
    /// round-trip property, so this is always surfaced to the caller.
    #[error("symbol {symbol} does not fit in {raw_width} raw bits")]
    SymbolOutOfRange {
        /// The offending symbol value.
        symbol: u16,
        /// The configured escape payload width.
        raw_width: u32,
    },

    /// The bit source ran dry in the middle of a code walk or raw payload.
    #[error("bit source exhausted mid-code")]
    IncompleteCode,

    /// Requested raw escape payload width outside the supported range.
    #[error("unsupported raw width: {0}")]
    InvalidRawWidth(u32),

    /// A structural invariant of the code tree does not hold.
    ///
    /// Indicates an implementation bug or a desynchronized input stream;
    /// decoding must not continue past it.
    #[error("code tree invariant violated: {0}")]
    InvariantViolation(&'static str),

    /// An I/O error occurred during encoding or decoding.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for adaptive coding operations.
pub type Result<T> = std::result::Result<T, Error>;

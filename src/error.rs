//! yEnc encoder error types

use thiserror::Error;

/// Errors surfaced by the encoder and its glue layers
///
/// Encoding itself cannot fail for any byte value; every variant here comes
/// from sizing the output, validating caller-supplied parameters, or reading
/// input for the chunked encoder.
#[derive(Error, Debug)]
pub enum YencError {
    /// Explicit length is negative or larger than the supplied buffer
    #[error("Invalid length: {declared} (buffer holds {actual} bytes)")]
    InvalidLength {
        /// Length passed by the caller
        declared: i64,
        /// Actual length of the buffer
        actual: usize,
    },

    /// Output buffer could not be sized or grown
    #[error("Allocation failure: could not reserve {requested} bytes")]
    AllocationFailure {
        /// Number of bytes that was requested (saturated at `usize::MAX` on overflow)
        requested: usize,
    },

    /// Line length outside the range allowed by the yEnc draft
    #[error("Invalid line length: {0} (must be 1-997)")]
    InvalidLineLength(usize),

    /// Chunk size of zero passed to the chunked encoder
    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(usize),

    /// IO error while reading input for the chunked encoder
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using YencError
pub type Result<T> = std::result::Result<T, YencError>;

//! Error types for cloud-ta.
//!
//! Indicator kernels never fail on short or empty input: they return their
//! documented sentinel series instead. The variants below only cover inputs
//! that fall outside the calling contract.

use thiserror::Error;

/// The main error type for cloud-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Parallel input series (high/low/close) have different lengths.
    #[error("length mismatch: {description}")]
    LengthMismatch {
        /// Which series disagreed and their lengths.
        description: String,
    },

    /// A pre-allocated output buffer is shorter than the input series.
    #[error("output buffer too small for {indicator}: required {required} elements, got {actual}")]
    BufferTooSmall {
        /// The number of elements the buffer must hold.
        required: usize,
        /// The number of elements the buffer holds.
        actual: usize,
        /// Name of the indicator that was writing into the buffer.
        indicator: &'static str,
    },

    /// Failed to convert a numeric value to the series element type.
    ///
    /// This occurs when a period (`usize`) or a threshold (`f64`) cannot be
    /// represented by the element type via `NumCast::from()`.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the cloud-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the spike distorter.

use thiserror::Error;

/// Result type for simulator operations.
pub type SpikeResult<T> = Result<T, SpikeError>;

/// Everything that can go wrong between user input and a finished pass.
///
/// All variants are caused by the caller's input; none are transient, so
/// nothing here is worth retrying.
#[derive(Debug, Error)]
pub enum SpikeError {
    /// Input contained a character other than `0` or `1`.
    #[error("invalid symbol {found:?} at position {position}: only 0s and 1s allowed")]
    InvalidSymbol { position: usize, found: char },

    /// A numeric parameter was outside its allowed range.
    #[error("invalid {name} {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A replayed draw sequence did not have one draw per symbol.
    #[error("expected {expected} random draws, got {actual}")]
    DrawCountMismatch { expected: usize, actual: usize },

    /// Original and corrupted signals differ in length.
    #[error("signal length mismatch: original has {original} symbols, corrupted has {corrupted}")]
    LengthMismatch { original: usize, corrupted: usize },

    /// WAV encoding failed.
    #[error("WAV encoding failed: {0}")]
    Wav(#[from] hound::Error),
}

impl SpikeError {
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: f64,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

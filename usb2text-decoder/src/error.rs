//! Report tokenizer error types

use thiserror::Error;

/// Reasons a textual report line could not be turned into a [`HidReport`].
///
/// None of these are fatal to a decoding run: the line is dropped and the
/// decoder state is left untouched.
///
/// [`HidReport`]: crate::report::HidReport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Fewer than 3 byte segments (modifier, reserved, first key)
    #[error("Report too short: {len} segment(s), need at least 3")]
    TooShort { len: usize },

    /// A segment that is not a 1-2 digit hex byte
    #[error("Invalid hex byte at segment {index}: {segment:?}")]
    InvalidHex { index: usize, segment: String },
}

//! Error types shared by every puzzle operation.
//!
//! Messages name the failing rule only. They never echo the PIN, the
//! water or the domain secret.

use std::io;

use thiserror::Error;

/// The operating system could not provide entropy.
#[derive(Debug, Error)]
#[error("operating system entropy source failed")]
pub struct EntropyError(#[source] pub(crate) io::Error);

/// Why a selector could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorDefect {
    /// The plant's trailing digit is 0 or greater than the maximum PIN length.
    PinLength,
    /// The plant is too short to hold the checksum and mask.
    ShortPlant,
    /// The position run contains something other than ASCII digits.
    NonDigit,
    /// The position run ends before every declared width is consumed.
    Truncated,
    /// Digits remain after every declared width is consumed.
    TrailingDigits,
    /// A decoded position points past the end of the plant.
    OutOfBounds,
}

impl std::fmt::Display for SelectorDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            SelectorDefect::PinLength => "pin length digit out of range",
            SelectorDefect::ShortPlant => "plant too short for metadata",
            SelectorDefect::NonDigit => "position run contains a non-digit",
            SelectorDefect::Truncated => "position run shorter than declared widths",
            SelectorDefect::TrailingDigits => "position run longer than declared widths",
            SelectorDefect::OutOfBounds => "position outside the plant",
        };
        f.write_str(reason)
    }
}

/// Errors surfaced by [`PinPuzzle`](crate::PinPuzzle) and its inputs.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The puzzle configuration is invalid (key length, attempt bound).
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The PIN is empty, non-numeric or too long.
    #[error("invalid pin: {0}")]
    InvalidPin(&'static str),

    /// A caller-supplied key cannot be carried by an instruction.
    #[error("invalid key: {0}")]
    InvalidKey(&'static str),

    /// No seed produced a valid construction within the attempt bound.
    #[error("no valid construction found after {attempts} attempts")]
    EncodingExhausted { attempts: usize },

    /// The selector's checksum does not match the recomputed plant.
    #[error("selector checksum does not match")]
    ChecksumMismatch,

    /// The selector is structurally inconsistent with the plant.
    #[error("malformed selector: {0}")]
    MalformedSelector(SelectorDefect),

    /// The textual instruction is not three non-empty `.`-separated fields.
    #[error("malformed instruction text")]
    MalformedInstruction,

    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

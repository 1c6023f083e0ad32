//! PIN puzzle: split a PIN into selector, seed and water.
//!
//! # Encoding
//!
//! A random seed and the water are mixed with the domain secret into a
//! [`Plant`]. The plant is kept only if its last digit equals the PIN
//! length, every PIN digit can be assigned a distinct position in it,
//! and its trailing mask already describes the decimal width of each
//! position. The selector is then the 8-digit checksum in front of the
//! mask followed by the positions written back to back.
//!
//! Seeds are drawn until one is accepted or the configured attempt bound
//! runs out.
//!
//! # Decoding
//!
//! The plant is regrown from the instruction, the checksum compared, the
//! position run cut up using the mask, and each position read off the
//! plant.
//!
//! # Security scope
//!
//! This is not threshold secret sharing and not authenticated
//! encryption. The checksum detects corrupted selectors; it is not an
//! authentication tag. Anyone holding the domain secret and all three
//! components can read the PIN.

mod config;
mod decoder;
mod encoder;
mod esm;
mod instruction;
mod locator;
mod plant;

pub use config::{DEFAULT_MAX_ATTEMPTS, MAX_KEY_LEN, MIN_KEY_LEN, PuzzleConfig};
pub use instruction::{Instruction, SEPARATOR};
pub use plant::{CHECKSUM_LEN, MAX_PIN_LEN, Plant};

use crate::error::PuzzleError;

/// A configured puzzle. Encoding and decoding only read the
/// configuration, so one instance may be shared across threads.
#[derive(Clone, Debug)]
pub struct PinPuzzle {
    config: PuzzleConfig,
}

impl PinPuzzle {
    pub fn new(config: PuzzleConfig) -> Self {
        Self { config }
    }

    /// Shorthand for [`PuzzleConfig::new`] followed by [`PinPuzzle::new`].
    ///
    /// # Errors
    ///
    /// [`PuzzleError::Configuration`] if `key_length` is outside 3..=16.
    pub fn construct(
        domain_secret: impl Into<String>,
        key_length: usize,
        numeric_key: bool,
    ) -> Result<Self, PuzzleError> {
        Ok(Self::new(PuzzleConfig::new(
            domain_secret,
            key_length,
            numeric_key,
        )?))
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Regrows the plant an instruction was built on.
    pub fn plant(&self, seed: &str, water: &str) -> Plant {
        Plant::grow(self.config.domain_secret(), seed, water)
    }
}

/// Trims surrounding whitespace and checks for 1..=8 ASCII digits.
pub(crate) fn validate_pin(pin: &str) -> Result<&str, PuzzleError> {
    let pin = pin.trim();

    if pin.is_empty() {
        return Err(PuzzleError::InvalidPin("empty"));
    }

    if !pin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PuzzleError::InvalidPin("not a numeric string"));
    }

    if pin.len() > MAX_PIN_LEN {
        return Err(PuzzleError::InvalidPin("longer than 8 digits"));
    }

    Ok(pin)
}

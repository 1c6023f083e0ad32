//! Configuration shared read-only by every operation of one puzzle.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;

/// Shortest generated water.
pub const MIN_KEY_LEN: usize = 3;
/// Longest generated water.
pub const MAX_KEY_LEN: usize = 16;

/// Default bound on seeds tried per encoding.
///
/// An eight-digit PIN is accepted by roughly one plant in several
/// thousand, so the bound sits far above that to make exhaustion
/// practically unreachable for any PIN.
pub const DEFAULT_MAX_ATTEMPTS: usize = 500_000;

/// Settings for a [`PinPuzzle`](crate::PinPuzzle).
///
/// Built through [`PuzzleConfig::new`] or deserialized; both paths run the
/// same validation, so a held value is always valid.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct PuzzleConfig {
    /// Secret mixed into every plant. The only input an observer of an
    /// instruction cannot recover.
    domain_secret: String,

    /// Length of generated water (3..=16).
    key_length: usize,

    /// Generate decimal-only water instead of alphanumeric.
    numeric_key: bool,

    /// Seeds tried before an encoding reports exhaustion.
    max_attempts: usize,
}

#[derive(Deserialize)]
struct RawConfig {
    domain_secret: String,
    #[serde(default = "default_key_length")]
    key_length: usize,
    #[serde(default)]
    numeric_key: bool,
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,
}

fn default_key_length() -> usize {
    MAX_KEY_LEN
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl TryFrom<RawConfig> for PuzzleConfig {
    type Error = PuzzleError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        PuzzleConfig::new(raw.domain_secret, raw.key_length, raw.numeric_key)?
            .with_max_attempts(raw.max_attempts)
    }
}

impl PuzzleConfig {
    /// Creates a configuration with the default attempt bound.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::Configuration`] if `key_length` is outside
    /// [`MIN_KEY_LEN`]..=[`MAX_KEY_LEN`].
    pub fn new(
        domain_secret: impl Into<String>,
        key_length: usize,
        numeric_key: bool,
    ) -> Result<Self, PuzzleError> {
        let config = Self {
            domain_secret: domain_secret.into(),
            key_length,
            numeric_key,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        };
        config.validate()?;

        Ok(config)
    }

    /// Replaces the attempt bound.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::Configuration`] if `max_attempts` is zero.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Result<Self, PuzzleError> {
        self.max_attempts = max_attempts;
        self.validate()?;

        Ok(self)
    }

    pub(crate) fn validate(&self) -> Result<(), PuzzleError> {
        if !(MIN_KEY_LEN..=MAX_KEY_LEN).contains(&self.key_length) {
            return Err(PuzzleError::Configuration(format!(
                "key length {} outside {MIN_KEY_LEN}..={MAX_KEY_LEN}",
                self.key_length
            )));
        }

        if self.max_attempts == 0 {
            return Err(PuzzleError::Configuration(
                "attempt bound must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn domain_secret(&self) -> &str {
        &self.domain_secret
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }

    pub fn numeric_key(&self) -> bool {
        self.numeric_key
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl fmt::Debug for PuzzleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PuzzleConfig")
            .field("domain_secret", &"<redacted>")
            .field("key_length", &self.key_length)
            .field("numeric_key", &self.numeric_key)
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}

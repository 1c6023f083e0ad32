//! Random number generation module
//!
//! Cryptographically secure randomness for seeds and generated water.
//!
//! It is built around a ChaCha20-based deterministic random bit generator
//! (DRBG) seeded from the operating system, plus the [`SecretSource`]
//! trait through which the puzzle draws every random value it needs.

pub(crate) mod chacha20;
mod csprng;
mod secret;

/// Cryptographically secure pseudorandom number generator.
pub use csprng::Csprng;

/// Source of seeds and key material for encoding.
pub use secret::{ALPHANUMERIC_ALPHABET, SecretSource};

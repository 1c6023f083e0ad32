//! PIN puzzle: split a short numeric PIN into three opaque parts
//!
//! A PIN is turned into an [`Instruction`] made of a *selector*, a *seed*
//! and a *water* (key). None of the three reveals the PIN on its own;
//! together, and with the domain secret the puzzle was configured with,
//! they reconstruct it exactly.
//!
//! # Module overview
//!
//! - `hash`
//!   SHA-512, the digest every plant is grown from, plus a hex renderer.
//!
//! - `rng`
//!   A ChaCha20-based CSPRNG seeded from the operating system, and the
//!   [`SecretSource`] trait through which encoding draws seeds and water.
//!   Any generator implementing `fill_bytes` can be plugged in.
//!
//! - `puzzle`
//!   Configuration, the instruction record, and the encode/decode
//!   algorithm:
//!   - the *plant*, the decimal digits of the digest of
//!     `domain_secret ‖ seed ‖ water`
//!   - position search, which assigns each PIN digit a distinct index in
//!     the plant holding that digit
//!   - the Embedded Selector Mask, the plant's own trailing digits, which
//!     must already describe the width of each position
//!   - a bounded seed search (sequential or across worker threads)
//!
//! - `error`
//!   [`PuzzleError`], one variant per outcome a caller can act on.
//!
//! # Example
//!
//! ```no_run
//! use pinpuzzle::PinPuzzle;
//!
//! let puzzle = PinPuzzle::construct("my-domain-secret", 8, false)?;
//!
//! let inst = puzzle.encode("4821", None)?;
//! let stored = inst.to_string();
//!
//! let restored = stored.parse()?;
//! assert_eq!(puzzle.decode(&restored)?, "4821");
//! # Ok::<(), pinpuzzle::PuzzleError>(())
//! ```
//!
//! # Scope
//!
//! This is not k-of-n secret sharing and not authenticated encryption.
//! The selector checksum detects corruption; it does not authenticate.
//! No claim is made against an adversary who knows the domain secret and
//! can search the seed space.
//!
//! The library emits `tracing` events (attempt rejections at `trace`,
//! successes at `debug`, exhaustion and checksum failures at `warn`) and
//! never installs a subscriber. PINs, water and the domain secret are
//! never logged.

mod error;
mod os;

pub mod hash;
pub mod puzzle;
pub mod rng;

pub use error::{EntropyError, PuzzleError, SelectorDefect};
pub use puzzle::{Instruction, PinPuzzle, Plant, PuzzleConfig};
pub use rng::{Csprng, SecretSource};

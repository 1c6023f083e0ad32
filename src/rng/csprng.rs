//! ChaCha20-based CSPRNG
//!
//! - relies on the operating system for initial entropy
//! - uses ChaCha20 as a deterministic random bit generator (DRBG)
//! - provides forward secrecy via rekeying after every request

use crate::error::EntropyError;
use crate::os::sys_random;
use crate::rng::chacha20;
use crate::rng::secret::SecretSource;

/// Cryptographically secure pseudorandom number generator.
///
/// Internally it maintains a secret key, a nonce and a block counter.
/// After generating output the generator rekeys itself, so compromise of
/// the current state does not reveal past outputs.
pub struct Csprng {
    /// Internal ChaCha20 key (256-bit)
    key: [u8; 32],

    /// Nonce value (96-bit, fixed to zero for DRBG usage)
    nonce: [u8; 12],

    /// Block counter
    counter: u32,
}

impl Csprng {
    /// Creates a new CSPRNG using entropy provided by the operating system.
    pub fn from_os() -> Result<Self, EntropyError> {
        let mut seed = [0u8; 32];
        sys_random(&mut seed)?;

        Ok(Self::from_seed(seed))
    }

    /// Creates a new CSPRNG from a caller-provided seed.
    ///
    /// Identical seeds produce identical output streams. The seed must be
    /// uniformly random and unpredictable unless reproducibility is the
    /// goal (tests, benchmarks).
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills the provided buffer with cryptographically secure random bytes.
    ///
    /// Randomness is generated in 64-byte blocks and the generator rekeys
    /// once the buffer is filled.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(64) {
            let block = chacha20::block(&self.key, self.counter, &self.nonce);
            self.counter = self.counter.wrapping_add(1);

            chunk.copy_from_slice(&block[..chunk.len()]);
        }

        self.rekey();
    }

    /// Returns a uniformly distributed `u64`.
    pub fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);

        u64::from_le_bytes(buf)
    }

    /// Returns an `i64` spanning the full signed range.
    pub fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }

    /// Returns a uniformly distributed value in `0..bound`, or `None` when
    /// `bound` is zero.
    ///
    /// Draws at or above the largest multiple of `bound` are rejected, so
    /// no value is favoured.
    pub fn below(&mut self, bound: u64) -> Option<u64> {
        if bound == 0 {
            return None;
        }

        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let draw = self.next_u64();
            if draw < zone {
                return Some(draw % bound);
            }
        }
    }

    /// Replaces the key with the first half of a fresh keystream block.
    fn rekey(&mut self) {
        let block = chacha20::block(&self.key, self.counter, &self.nonce);

        self.counter = self.counter.wrapping_add(1);
        self.key.copy_from_slice(&block[..32]);
    }
}

impl SecretSource for Csprng {
    fn fill_bytes(&mut self, out: &mut [u8]) {
        Csprng::fill_bytes(self, out);
    }
}

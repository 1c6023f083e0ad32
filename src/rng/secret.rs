//! Random secrets in the textual shapes an instruction carries.

/// The 64 symbols generated water is drawn from.
///
/// A random byte masked with `0x3f` indexes this table directly, so every
/// symbol is equally likely. The `.` separator is deliberately absent.
pub const ALPHANUMERIC_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Largest multiple of ten that fits in a byte; bytes at or above it are
/// rejected so decimal digits stay uniform.
const DIGIT_REJECT_FROM: u8 = 250;

/// A cryptographically secure source of seeds and key material.
///
/// Only [`fill_bytes`](SecretSource::fill_bytes) is required; the textual
/// generators are derived from it. Implement this to plug a different
/// generator (an HSM, a deterministic test stream) into encoding.
pub trait SecretSource {
    /// Fills `out` with uniformly random bytes.
    fn fill_bytes(&mut self, out: &mut [u8]);

    /// Returns `len` symbols drawn from [`ALPHANUMERIC_ALPHABET`].
    fn alphanumeric_secret(&mut self, len: usize) -> String {
        let mut raw = vec![0u8; len];
        self.fill_bytes(&mut raw);

        let secret = raw
            .iter()
            .map(|b| ALPHANUMERIC_ALPHABET[(b & 63) as usize] as char)
            .collect();

        raw.fill(0);
        secret
    }

    /// Returns a zero-padded decimal string of exactly `len` digits,
    /// uniform over `0..10^len`.
    fn numeric_secret(&mut self, len: usize) -> String {
        let mut secret = String::with_capacity(len);
        let mut pool = [0u8; 32];

        while secret.len() < len {
            self.fill_bytes(&mut pool);

            for &b in pool.iter().filter(|&&b| b < DIGIT_REJECT_FROM) {
                if secret.len() == len {
                    break;
                }
                secret.push((b'0' + b % 10) as char);
            }
        }

        pool.fill(0);
        secret
    }

    /// Returns an integer spanning the full signed 64-bit range.
    fn signed_integer(&mut self) -> i64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);

        i64::from_le_bytes(buf)
    }
}

//! The digit-only digest every encoding and decoding works against.

use crate::hash::{sha512, to_hex};

/// Length of the checksum slice preceding the mask.
pub const CHECKSUM_LEN: usize = 8;

/// Characters at the very end of the mask that carry the PIN length.
pub(crate) const MASK_HEAD_LEN: usize = 1;

/// Longest PIN the mask can describe.
pub const MAX_PIN_LEN: usize = 8;

/// The decimal digits of `SHA-512(domain_secret ‖ seed ‖ water)` rendered
/// as lowercase hex, in order.
///
/// Identical inputs always grow an identical plant. A plant is never
/// stored; both sides recompute it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plant(Vec<u8>);

impl Plant {
    pub fn grow(domain_secret: &str, seed: &str, water: &str) -> Self {
        let mut soil =
            Vec::with_capacity(domain_secret.len() + seed.len() + water.len());
        soil.extend_from_slice(domain_secret.as_bytes());
        soil.extend_from_slice(seed.as_bytes());
        soil.extend_from_slice(water.as_bytes());

        let digits = to_hex(&sha512(&soil))
            .bytes()
            .filter(u8::is_ascii_digit)
            .collect();

        soil.fill(0);
        Plant(digits)
    }

    /// The plant as ASCII digits.
    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value of the digit at `index`.
    pub fn digit(&self, index: usize) -> Option<u8> {
        self.0.get(index).map(|d| d - b'0')
    }

    /// The PIN length declared by the final digit, if it is in `1..=8`.
    pub fn declared_pin_len(&self) -> Option<usize> {
        let last = *self.0.last()?;
        let len = (last - b'0') as usize;

        (1..=MAX_PIN_LEN).contains(&len).then_some(len)
    }

    /// Splits the tail into `(checksum, mask)` for a PIN of `pin_len`
    /// digits. `None` when the plant is too short to hold both.
    pub(crate) fn metadata(&self, pin_len: usize) -> Option<(&[u8], &[u8])> {
        let mask_len = pin_len + MASK_HEAD_LEN;
        let start = self.0.len().checked_sub(CHECKSUM_LEN + mask_len)?;

        Some(self.0[start..].split_at(CHECKSUM_LEN))
    }
}

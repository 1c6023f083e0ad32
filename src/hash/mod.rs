//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-512 with a pure-Rust implementation, which is
//! the digest behind every plant.

pub mod sha512;

/// Re-export of the SHA-512 convenience function.
pub use sha512::core::sha512;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Renders a digest as lowercase hexadecimal text.
pub fn to_hex(digest: &[u8]) -> String {
    let mut out = String::with_capacity(digest.len() * 2);

    for byte in digest {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }

    out
}

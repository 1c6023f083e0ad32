//! SHA-512 core hashing functions
//!
//! This module implements the core logic of the SHA-512 cryptographic hash
//! function as defined in FIPS 180-4: the compression function over
//! 1024-bit blocks and the padded, whole-message digest.

use super::H512_INIT;
use super::computations::all_rounds;

const BLOCK_LEN: usize = 128;

/// Compresses a single 1024-bit message block into `state`.
///
/// Input words are interpreted as big-endian, as required by SHA-512.
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *slot = u64::from_be_bytes(word);
    }

    all_rounds(state, w);
}

/// Computes the SHA-512 hash of the given input.
///
/// # Notes
/// - Message length is encoded as a 128-bit big-endian integer (in bits).
/// - The internal state is serialized in big-endian.
pub fn sha512(input: &[u8]) -> [u8; 64] {
    let mut state = H512_INIT;
    let mut block = [0u8; BLOCK_LEN];

    let mut chunks = input.chunks_exact(BLOCK_LEN);
    for chunk in &mut chunks {
        block.copy_from_slice(chunk);
        compress(&block, &mut state);
    }

    let rem = chunks.remainder();
    block = [0u8; BLOCK_LEN];
    block[..rem.len()].copy_from_slice(rem);
    block[rem.len()] = 0x80;

    // No room left for the 128-bit length field
    if rem.len() > 111 {
        compress(&block, &mut state);
        block = [0u8; BLOCK_LEN];
    }

    let bit_len = (input.len() as u128) << 3;
    block[112..].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, &mut state);

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(state) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    out
}

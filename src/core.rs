//! Salsa20 core permutation and block function.
//!
//! This module provides a low-level, dependency-free implementation of the
//! Salsa20/20 block function as specified by Bernstein's Salsa20 paper.
//!
//! It is designed to be used as a cryptographic primitive inside larger
//! constructions (stream encryption, scrypt-style KDFs), and therefore:
//! - avoids heap allocations
//! - runs in constant time (no data-dependent branches)
//! - exposes only minimal, explicit APIs
//!
//! This module **does not** perform encryption by itself. It only generates
//! a single 64-byte Salsa20 keystream block for a given key, nonce, and
//! block counter. Bulk keystream application lives in [`crate::stream`].

/// Salsa20 block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Salsa20 key size in bytes (256-bit keys only).
pub const KEY_SIZE: usize = 32;

/// Size of the combined nonce/counter block in bytes.
///
/// The first 8 bytes hold the fixed per-stream nonce; the last 8 bytes hold
/// the little-endian 64-bit block counter.
pub const NONCE_SIZE: usize = 16;

/// Salsa20 constant words.
///
/// These values correspond to the ASCII string:
/// `"expand 32-byte k"` encoded as little-endian `u32` words, as defined
/// in the Salsa20 specification.
///
/// They are public, fixed, and non-secret, and define the Salsa20
/// permutation domain.
const SIGMA: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Performs one Salsa20 quarter round.
///
/// A quarter round mixes four 32-bit words of the internal state using
/// addition modulo 2³², XOR, and fixed left rotations:
///
/// ```text
/// b ^= (a + d) <<< 7
/// c ^= (b + a) <<< 9
/// d ^= (c + b) <<< 13
/// a ^= (d + c) <<< 18
/// ```
///
/// This operation is the fundamental source of diffusion and non-linearity
/// in Salsa20. The function is branchless and runs in constant time.
#[inline(always)]
pub(crate) fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

/// Applies the four column quarter rounds.
///
/// The four index sets are disjoint, so the quarter rounds are independent
/// of each other.
#[inline(always)]
pub(crate) fn column_round(state: &mut [u32; 16]) {
    quarter_round(state, 0, 4, 8, 12);
    quarter_round(state, 5, 9, 13, 1);
    quarter_round(state, 10, 14, 2, 6);
    quarter_round(state, 15, 3, 7, 11);
}

/// Applies the four row quarter rounds.
#[inline(always)]
pub(crate) fn row_round(state: &mut [u32; 16]) {
    quarter_round(state, 0, 1, 2, 3);
    quarter_round(state, 5, 6, 7, 4);
    quarter_round(state, 10, 11, 8, 9);
    quarter_round(state, 15, 12, 13, 14);
}

/// Applies the full Salsa20 permutation (20 rounds).
///
/// The permutation consists of 10 double rounds, each performing:
/// - 4 column quarter rounds
/// - 4 row quarter rounds
///
/// This results in a total of 20 rounds, which is the standard and
/// conservative security setting for Salsa20.
pub(crate) fn rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        column_round(state);
        row_round(state);
    }
}

/// Builds the initial 16-word Salsa20 state.
///
/// # State layout
///
/// ```text
/// sigma0   key0     key1     key2
/// key3     sigma1   nonce0   nonce1
/// ctr_lo   ctr_hi   sigma2   key4
/// key5     key6     key7     sigma3
/// ```
///
/// All words are decoded little-endian. The counter occupies the last
/// 8 bytes of the nonce block, low word first.
pub(crate) fn initial_state(key: &[u8; 32], nonce: &[u8; 16]) -> [u32; 16] {
    let mut state = [0u32; 16];

    state[0] = SIGMA[0];
    state[5] = SIGMA[1];
    state[10] = SIGMA[2];
    state[15] = SIGMA[3];

    // Key (256-bit, as little-endian words)
    state[1..5]
        .iter_mut()
        .zip(key[..16].chunks_exact(4))
        .for_each(|(s, k)| *s = u32::from_le_bytes(k.try_into().unwrap()));
    state[11..15]
        .iter_mut()
        .zip(key[16..].chunks_exact(4))
        .for_each(|(s, k)| *s = u32::from_le_bytes(k.try_into().unwrap()));

    // Nonce words at 6..8, counter words at 8..10
    state[6..10]
        .iter_mut()
        .zip(nonce.chunks_exact(4))
        .for_each(|(s, n)| *s = u32::from_le_bytes(n.try_into().unwrap()));

    state
}

/// Generates a single 64-byte Salsa20 keystream block.
///
/// # Parameters
/// - `key`: 256-bit secret key (32 bytes)
/// - `nonce`: 16-byte nonce/counter block (8-byte nonce followed by the
///   little-endian 64-bit block counter)
///
/// # Returns
/// A 64-byte keystream block that can be XORed with plaintext or ciphertext.
///
/// # Security Notes
/// - This function does **not** perform encryption or authentication.
/// - It never mutates the nonce/counter block; callers generating more than
///   one block must advance the counter themselves or use
///   [`crate::xor_key_stream`].
/// - Reusing the same `(key, nonce, counter)` tuple is catastrophic for
///   security and must be prevented by the caller.
pub fn keystream_block(key: &[u8; 32], nonce: &[u8; 16]) -> [u8; 64] {
    let mut state = initial_state(key, nonce);

    // Preserve original state for feed-forward
    let original = state;

    rounds(&mut state);

    // Add original state (feed-forward); without it the block function
    // would be an invertible permutation rather than a PRF.
    state.iter_mut().zip(&original).for_each(|(s, o)| {
        *s = s.wrapping_add(*o);
    });

    // Serialize output as little-endian bytes
    let mut out = [0u8; 64];
    out.chunks_exact_mut(4)
        .zip(&state)
        .for_each(|(chunk, word)| {
            chunk.copy_from_slice(&word.to_le_bytes());
        });

    out
}

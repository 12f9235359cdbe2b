//! Salsa20 bulk keystream application.
//!
//! This module drives the block function from [`crate::core`] across inputs
//! of arbitrary length, threading the 64-bit block counter through the
//! caller-owned nonce/counter buffer so that a stream can be continued
//! across multiple calls without ever reusing keystream.
//!
//! The full-block loop amortizes the part of the first permutation round
//! that does not depend on the low counter word, since that is the only
//! state word changing from one block to the next. This is a pure
//! performance device; the output is bit-identical to calling
//! [`crate::keystream_block`] once per 64-byte chunk.

use crate::core::{column_round, initial_state, keystream_block, quarter_round, row_round};

/// XORs input data with the Salsa20 keystream.
///
/// Encryption and decryption are the same operation. The last 8 bytes of
/// `nonce` are interpreted as the little-endian 64-bit block counter and are
/// advanced in place by one per consumed 64-byte block, including the final
/// partial block if `input.len()` is not a multiple of 64. A subsequent call
/// with the same buffers therefore continues the same logical keystream.
///
/// Continuing a stream is only well defined when every call before the last
/// processes a multiple of 64 bytes: after a partial block the counter has
/// moved past the partially consumed block, so the unused tail of that
/// block's keystream is discarded, never reused.
///
/// # Parameters
/// - `key`: 256-bit secret key (32 bytes)
/// - `nonce`: 16-byte nonce/counter block, counter advanced in place
/// - `input`: Plaintext or ciphertext input
/// - `output`: Output buffer, at least as long as `input`; bytes past
///   `input.len()` are left untouched
///
/// # Panics
///
/// - If `output` is shorter than `input`. This is a caller bug, not an
///   operational condition.
/// - If the 64-bit block counter would wrap around during the call.
///   Wrapping silently would restart the keystream from block zero and
///   destroy confidentiality, so exhaustion is fatal; the only cure is a
///   fresh nonce.
///
/// # Security Notes
/// - The caller must ensure `(key, nonce)` uniqueness per stream.
/// - This function performs no authentication.
pub fn xor_key_stream(key: &[u8; 32], nonce: &mut [u8; 16], input: &[u8], output: &mut [u8]) {
    assert!(
        output.len() >= input.len(),
        "salsa20: output buffer smaller than input"
    );

    let rem = input.len() % 64;
    let full = input.len() - rem;

    if full > 0 {
        xor_full_blocks(key, nonce, &input[..full], &mut output[..full]);
    }

    if rem > 0 {
        let keystream = keystream_block(key, nonce);

        for i in 0..rem {
            output[full + i] = input[full + i] ^ keystream[i];
        }

        // The partial block consumed a counter value; move past it so a
        // caller continuing the stream can never reuse its keystream.
        advance_counter(nonce);
    }
}

/// Encrypts all full 64-byte blocks of `input` into `output`.
///
/// `input` and `output` must have equal length, a multiple of 64. The final
/// counter value is written back into `nonce[8..16]` once all blocks are
/// processed.
fn xor_full_blocks(key: &[u8; 32], nonce: &mut [u8; 16], input: &[u8], output: &mut [u8]) {
    let mut initial = initial_state(key, nonce);
    let mut ctr_lo = initial[8];
    let mut ctr_hi = initial[9];

    // Three of the four column quarter rounds of the first round never read
    // the low counter word. The rounds on (10, 14, 2, 6) and (15, 3, 7, 11)
    // are constant for the whole call; the one on (5, 9, 13, 1) reads the
    // high counter word and is redone only when that word changes.
    let mut seeded = initial;
    quarter_round(&mut seeded, 5, 9, 13, 1);
    quarter_round(&mut seeded, 10, 14, 2, 6);
    quarter_round(&mut seeded, 15, 3, 7, 11);

    for (src, dst) in input.chunks_exact(64).zip(output.chunks_exact_mut(64)) {
        // Complete the first round with the quarter round that depends on
        // the low counter word, then run the remaining 19 rounds.
        let mut x = seeded;
        x[8] = ctr_lo;
        quarter_round(&mut x, 0, 4, 8, 12);
        row_round(&mut x);

        for _ in 0..9 {
            column_round(&mut x);
            row_round(&mut x);
        }

        // Feed-forward add of the initial state (with the current counter),
        // then XOR the keystream into the output, word by word.
        initial[8] = ctr_lo;
        for (i, (s, d)) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)).enumerate() {
            let ks = x[i].wrapping_add(initial[i]).to_le_bytes();

            d[0] = s[0] ^ ks[0];
            d[1] = s[1] ^ ks[1];
            d[2] = s[2] ^ ks[2];
            d[3] = s[3] ^ ks[3];
        }

        ctr_lo = ctr_lo.wrapping_add(1);
        if ctr_lo == 0 {
            ctr_hi = ctr_hi.wrapping_add(1);
            if ctr_hi == 0 {
                panic!("salsa20: block counter overflow");
            }

            // The high counter word changed: redo the first-round quarter
            // round that reads it, from the unmixed initial words.
            initial[9] = ctr_hi;
            seeded[1] = initial[1];
            seeded[5] = initial[5];
            seeded[9] = ctr_hi;
            seeded[13] = initial[13];
            quarter_round(&mut seeded, 5, 9, 13, 1);
        }
    }

    // Put the counter back once all full blocks are done
    nonce[8..12].copy_from_slice(&ctr_lo.to_le_bytes());
    nonce[12..16].copy_from_slice(&ctr_hi.to_le_bytes());
}

/// Advances the 64-bit block counter stored in `nonce[8..16]` by one.
fn advance_counter(nonce: &mut [u8; 16]) {
    let mut lo = u32::from_le_bytes(nonce[8..12].try_into().unwrap());
    let mut hi = u32::from_le_bytes(nonce[12..16].try_into().unwrap());

    lo = lo.wrapping_add(1);
    if lo == 0 {
        hi = hi.wrapping_add(1);
        if hi == 0 {
            panic!("salsa20: block counter overflow");
        }
    }

    nonce[8..12].copy_from_slice(&lo.to_le_bytes());
    nonce[12..16].copy_from_slice(&hi.to_le_bytes());
}

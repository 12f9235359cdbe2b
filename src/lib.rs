//! Salsa20/20 stream cipher
//!
//! This crate provides a low-level implementation of the Salsa20 stream
//! cipher: the 20-round core permutation, the 64-byte block function, and
//! bulk keystream application over byte buffers of arbitrary length.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a high-level cryptographic API. The implementation is
//! dependency-free, explicit in its semantics, and suitable for
//! security-critical code.
//!
//! # Module overview
//!
//! - `core`
//!   The Salsa20 primitive itself: the quarter-round mixing function, the
//!   double-round permutation, and the generation of a single 64-byte
//!   keystream block from a key, nonce, and block counter.
//!
//! - `stream`
//!   Bulk encryption/decryption: XORs the keystream into a message of
//!   arbitrary length, advancing the 64-bit block counter held in the
//!   caller-owned nonce buffer so a stream can be resumed across calls.
//!
//! # Usage
//!
//! ```rust
//! use salsa20_stream::xor_key_stream;
//!
//! let key = [0u8; 32];
//! let mut nonce = [0u8; 16]; // 8-byte nonce || 8-byte block counter
//!
//! let plaintext = b"attack at dawn";
//! let mut ciphertext = [0u8; 14];
//! xor_key_stream(&key, &mut nonce, plaintext, &mut ciphertext);
//!
//! // Decryption is the same operation with the same starting counter.
//! let mut nonce = [0u8; 16];
//! let mut recovered = [0u8; 14];
//! xor_key_stream(&key, &mut nonce, &ciphertext, &mut recovered);
//! assert_eq!(&recovered, plaintext);
//! ```
//!
//! # Design goals
//!
//! - No heap allocations (one 64-byte stack scratch block at most)
//! - No data-dependent branches in the core arithmetic
//! - Minimal and explicit API surface
//! - Bit-exact little-endian encoding, interoperable with any conforming
//!   Salsa20 implementation
//!
//! # What this crate does not do
//!
//! Key and nonce generation, nonce uniqueness enforcement, authentication,
//! and key derivation (HSalsa20/XSalsa20) are deliberately out of scope.
//! Misuse of a stream cipher is a security bug, not a recoverable error:
//! undersized buffers and counter exhaustion panic rather than returning.

mod core;
mod stream;

pub use crate::core::{BLOCK_SIZE, KEY_SIZE, NONCE_SIZE, keystream_block};
pub use crate::stream::xor_key_stream;

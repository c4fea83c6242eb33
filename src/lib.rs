//! # dragoncrypt - lightweight authenticated stream cipher
//!
//! This crate implements the dragoncrypt cipher: a byte-oriented stream
//! cipher built on a 64-bit xorshift keystream, with a rolling keyed MAC
//! that doubles as feedback into the keystream. The 8-byte MAC trailer
//! appended to every ciphertext authenticates the message, and because the
//! MAC feeds back into the keystream, a single corrupted bit garbles the
//! remainder of the message and fails verification.
//!
//! This is a lightweight construction for integrity-checked obfuscation of
//! small messages, not a modern AEAD; do not use it where an attacker with
//! serious resources is in the threat model.
//!
//! ## Message format
//!
//! Format 1 ([`FORMAT_VERSION`]): a fresh random IV of caller-chosen length
//! is prepended to the plaintext before encryption, so the IV travels
//! encrypted in the body and is covered by the trailer:
//!
//! ```text
//! ciphertext = encrypt(iv || plaintext) || trailer
//! len(ciphertext) = iv_len + len(plaintext) + TAG_SIZE
//! ```
//!
//! The IV length is an agreement between encrypting and decrypting sides;
//! it is not recorded in the ciphertext. Decrypting with a different
//! `iv_len` fails with [`Error::AuthenticationFailed`].
//!
//! ## Usage
//!
//! ```rust
//! use dragoncrypt::{encrypt, decrypt};
//!
//! let key = 0x0123_4567_89AB_CDEFu64;
//! let plaintext = b"Hello, world!";
//!
//! // Encrypt with a 12-byte random IV
//! let ciphertext = encrypt(plaintext, key, 12)?;
//!
//! // Decrypt with the same key and IV length
//! let decrypted = decrypt(&ciphertext, key, 12)?;
//! assert_eq!(decrypted, plaintext);
//! # Ok::<(), dragoncrypt::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

extern crate alloc;

mod core;
mod envelope;
mod error;
#[cfg(feature = "std")]
mod stream;
mod utils;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
#[cfg(feature = "std")]
pub use error::StreamError;
#[cfg(feature = "std")]
pub use stream::{decrypt_stream, encrypt_stream};

use alloc::vec::Vec;

/// Size in bytes of the MAC trailer appended to every ciphertext.
pub const TAG_SIZE: usize = ::core::mem::size_of::<u64>();

/// Version of the message format produced and accepted by this crate.
///
/// Not serialized into the ciphertext; a layout change bumps this constant
/// and is a breaking wire change.
pub const FORMAT_VERSION: u32 = 1;

/// Encrypts `plaintext` under `key`, prepending a fresh random IV.
///
/// # Arguments
///
/// * `plaintext` - The data to encrypt
/// * `key` - 64-bit key; must be chosen uniformly at random
/// * `iv_len` - Number of random IV bytes drawn for this message; more
///   bytes give stronger protection against keystream reuse
///
/// # Returns
///
/// A ciphertext of exactly `plaintext.len() + iv_len + TAG_SIZE` bytes, or
/// [`Error::RandomSource`] if the OS random source fails.
///
/// # Security
///
/// - The same `iv_len` MUST be supplied at decryption time
/// - An `iv_len` of zero makes the keystream identical for every message
///   under a given key; use a nonzero length for anything transmitted more
///   than once
///
/// # Example
///
/// ```rust
/// use dragoncrypt::encrypt;
///
/// let ciphertext = encrypt(b"secret message", 42, 12)?;
/// assert_eq!(ciphertext.len(), 14 + 12 + dragoncrypt::TAG_SIZE);
/// # Ok::<(), dragoncrypt::Error>(())
/// ```
pub fn encrypt(plaintext: &[u8], key: u64, iv_len: usize) -> Result<Vec<u8>> {
    envelope::seal(plaintext, key, iv_len)
}

/// Decrypts `ciphertext`, verifies the MAC trailer, and strips the IV.
///
/// # Arguments
///
/// * `ciphertext` - Output of [`encrypt`]
/// * `key` - 64-bit key (must match encryption)
/// * `iv_len` - IV length agreed at encryption time
///
/// # Returns
///
/// The original plaintext on success. Fails with
/// [`Error::CiphertextTooShort`] when the input cannot hold the IV and
/// trailer (checked before any cipher work), and with
/// [`Error::AuthenticationFailed`] when the trailer does not verify -
/// tampering, a wrong key, or a wrong `iv_len`.
///
/// # Security
///
/// - No plaintext is returned when verification fails
/// - Trailer comparison is performed in constant time
///
/// # Example
///
/// ```rust
/// use dragoncrypt::{encrypt, decrypt, Error};
///
/// let ciphertext = encrypt(b"secret message", 42, 12)?;
/// let plaintext = decrypt(&ciphertext, 42, 12)?;
/// assert_eq!(plaintext, b"secret message");
///
/// // Wrong key: the trailer check fails.
/// assert_eq!(decrypt(&ciphertext, 43, 12), Err(Error::AuthenticationFailed));
/// # Ok::<(), dragoncrypt::Error>(())
/// ```
pub fn decrypt(ciphertext: &[u8], key: u64, iv_len: usize) -> Result<Vec<u8>> {
    envelope::open(ciphertext, key, iv_len)
}

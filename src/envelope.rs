//! IV framing around the raw cipher.
//!
//! Canonical layout (format 1): a fresh IV is prepended to the plaintext
//! and the whole thing runs through the raw cipher, so the IV travels
//! encrypted inside the body and the trailer authenticates it together
//! with the message:
//!
//! ```text
//! ciphertext = encrypt_raw(iv || plaintext)     // body || 8-byte trailer
//! len(ciphertext) = iv_len + len(plaintext) + TAG_SIZE
//! ```
//!
//! The IV length is an out-of-band agreement between the two sides, not
//! self-describing in the ciphertext. To keep a mismatched agreement from
//! silently returning misaligned plaintext, the working key binds the IV
//! length: decrypting with the wrong `iv_len` changes the whole keystream
//! and fails authentication.

use crate::core::{decrypt_raw, encrypt_raw};
use crate::error::{Error, Result};
use crate::utils::xorshift;
use crate::TAG_SIZE;
use alloc::vec::Vec;
use rand::rngs::OsRng;
use rand::RngCore;

/// Odd mixing constant (2^64 / golden ratio); keeps `iv_len = 0` from
/// degenerating into the raw key.
const IV_LEN_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derive the working key for a given IV length agreement.
#[inline]
fn mix_key(key: u64, iv_len: usize) -> u64 {
    key ^ xorshift((iv_len as u64).wrapping_add(IV_LEN_MIX))
}

/// Seal with a caller-supplied IV. Split out so vector tests can pin the IV;
/// production callers go through [`seal`], which draws a fresh one.
pub(crate) fn seal_with_iv(plaintext: &[u8], key: u64, iv: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(iv.len() + plaintext.len());
    framed.extend_from_slice(iv);
    framed.extend_from_slice(plaintext);
    encrypt_raw(&framed, mix_key(key, iv.len()))
}

/// Encrypt `plaintext`, prepending `iv_len` bytes drawn from the OS random
/// source. Output length is exactly `plaintext.len() + iv_len + TAG_SIZE`.
pub(crate) fn seal(plaintext: &[u8], key: u64, iv_len: usize) -> Result<Vec<u8>> {
    let mut iv = alloc::vec![0u8; iv_len];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|_| Error::RandomSource)?;
    Ok(seal_with_iv(plaintext, key, &iv))
}

/// Decrypt a sealed buffer, verify the trailer, and strip the IV prefix.
///
/// Inputs shorter than `iv_len + TAG_SIZE` are rejected as malformed before
/// any cipher work runs.
pub(crate) fn open(ciphertext: &[u8], key: u64, iv_len: usize) -> Result<Vec<u8>> {
    let min_len = iv_len
        .checked_add(TAG_SIZE)
        .ok_or(Error::CiphertextTooShort)?;
    if ciphertext.len() < min_len {
        return Err(Error::CiphertextTooShort);
    }

    let mut framed = decrypt_raw(ciphertext, mix_key(key, iv_len))?;
    framed.drain(..iv_len);
    Ok(framed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_open_roundtrip() {
        let key = 0xDEAD_BEEF_CAFE_F00D;
        for iv_len in [0usize, 1, 12, 16, 64] {
            let sealed = seal(b"hello", key, iv_len).unwrap();
            assert_eq!(sealed.len(), 5 + iv_len + TAG_SIZE);
            assert_eq!(open(&sealed, key, iv_len).unwrap(), b"hello");
        }
    }

    #[test]
    fn test_iv_freshness() {
        // Same plaintext and key, two seals: the random IV must make the
        // ciphertexts differ.
        let a = seal(b"repeat", 1, 16).unwrap();
        let b = seal(b"repeat", 1, 16).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_wrong_iv_len_is_authentication_failure() {
        let sealed = seal(b"agreement matters", 3, 12).unwrap();
        assert_eq!(open(&sealed, 3, 11), Err(Error::AuthenticationFailed));
        assert_eq!(open(&sealed, 3, 13), Err(Error::AuthenticationFailed));
    }

    #[test]
    fn test_too_short_is_malformed_not_tampered() {
        // 12 + TAG_SIZE - 1 bytes: one short of the minimum framing size.
        let short = alloc::vec![0u8; 12 + TAG_SIZE - 1];
        assert_eq!(open(&short, 1, 12), Err(Error::CiphertextTooShort));
        assert_eq!(open(&[], 1, 0), Err(Error::CiphertextTooShort));
    }

    #[test]
    fn test_mix_key_separates_iv_lengths() {
        let key = 0x55;
        assert_ne!(mix_key(key, 0), key);
        assert_ne!(mix_key(key, 0), mix_key(key, 1));
        assert_ne!(mix_key(key, 12), mix_key(key, 16));
    }
}

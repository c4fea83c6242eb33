//! Core dragoncrypt cipher: xorshift keystream with a rolling keyed MAC.
//!
//! Every plaintext byte is XORed with the low 8 bits of an advancing
//! 64-bit xorshift state; the same byte is folded into a MAC accumulator
//! whose value is then mixed back into the keystream state. The trailer
//! therefore authenticates the whole message, and a single flipped
//! ciphertext bit garbles every byte that follows it.

use crate::error::{Error, Result};
use crate::utils::{ct_eq, xorshift};
use crate::TAG_SIZE;
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Inner and outer whitening pads mixed into the MAC key.
const IPAD: u64 = 0x4613_A6F6_B459_51C6;
const OPAD: u64 = 0x29E8_FF49_49B2_863D;

/// Per-call cipher state. Nothing is shared between calls, so concurrent
/// encryptions and decryptions under the same key are safe.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct CipherState {
    /// Keystream state; advanced once per byte and re-mixed with the MAC.
    seed: u64,
    /// Rolling MAC accumulator, whitened with IPAD at init and OPAD at the
    /// end.
    mac: u64,
    /// Outer pad, precomputed from the key for finalization.
    opad: u64,
}

impl CipherState {
    fn new(key: u64) -> Self {
        Self {
            seed: key,
            mac: xorshift(key ^ IPAD),
            opad: key ^ OPAD,
        }
    }

    /// Fold a plaintext byte into the MAC and mix the MAC back into the
    /// keystream. The shift amount keeps the byte inside the 64-bit word.
    #[inline]
    fn absorb(&mut self, plain: u8) {
        self.mac ^= u64::from(plain) << (self.seed % ((TAG_SIZE as u64) * 8 - 8));
        self.mac = xorshift(self.mac);
        self.seed ^= self.mac;
    }

    /// Encrypt a single byte, updating the MAC over the plaintext.
    #[inline]
    fn encrypt_byte(&mut self, plain: u8) -> u8 {
        self.seed = xorshift(self.seed);
        let out = plain ^ (self.seed as u8);
        self.absorb(plain);
        out
    }

    /// Decrypt a single byte, updating the MAC over the recovered plaintext.
    #[inline]
    fn decrypt_byte(&mut self, cipher: u8) -> u8 {
        self.seed = xorshift(self.seed);
        let out = cipher ^ (self.seed as u8);
        self.absorb(out);
        out
    }

    /// Finalize the MAC into the trailer value.
    fn finalize(&mut self) -> u64 {
        xorshift(self.mac ^ self.opad)
    }
}

/// Encrypt `input` under `key`, appending the little-endian trailer.
///
/// No IV framing; callers wanting distinct ciphertexts for repeated
/// plaintexts go through the envelope layer.
pub(crate) fn encrypt_raw(input: &[u8], key: u64) -> Vec<u8> {
    let mut state = CipherState::new(key);

    let mut output = Vec::with_capacity(input.len() + TAG_SIZE);
    for &byte in input {
        output.push(state.encrypt_byte(byte));
    }
    output.extend_from_slice(&state.finalize().to_le_bytes());
    output
}

/// Decrypt `input` under `key` and verify the trailer.
///
/// Returns [`Error::CiphertextTooShort`] when the input cannot even hold a
/// trailer, and [`Error::AuthenticationFailed`] when the recomputed MAC does
/// not match. The trailer comparison is constant-time.
pub(crate) fn decrypt_raw(input: &[u8], key: u64) -> Result<Vec<u8>> {
    if input.len() < TAG_SIZE {
        return Err(Error::CiphertextTooShort);
    }
    let (body, trailer) = input.split_at(input.len() - TAG_SIZE);

    let mut state = CipherState::new(key);
    let mut output = Vec::with_capacity(body.len());
    for &byte in body {
        output.push(state.decrypt_byte(byte));
    }

    if !ct_eq(&state.finalize().to_le_bytes(), trailer) {
        return Err(Error::AuthenticationFailed);
    }
    Ok(output)
}

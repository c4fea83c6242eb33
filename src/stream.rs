//! Stream helpers over [`std::io::Read`] and [`std::io::Write`].
//!
//! The trailer sits at the end of the message, so decryption cannot hand
//! out verified plaintext incrementally anyway; these helpers read the
//! input to end, run the envelope operation, and write the result.

use crate::error::StreamError;
use crate::{decrypt, encrypt};
use std::io::{Read, Write};

/// Encrypt everything readable from `input` and write the sealed message
/// to `output`. Returns the number of ciphertext bytes written.
///
/// # Example
///
/// ```rust
/// use dragoncrypt::{encrypt_stream, decrypt_stream};
///
/// let key = 7u64;
/// let mut sealed = Vec::new();
/// let written = encrypt_stream(&mut &b"streamed"[..], &mut sealed, key, 12)?;
/// assert_eq!(written, sealed.len());
///
/// let mut recovered = Vec::new();
/// decrypt_stream(&mut sealed.as_slice(), &mut recovered, key, 12)?;
/// assert_eq!(recovered, b"streamed");
/// # Ok::<(), dragoncrypt::StreamError>(())
/// ```
pub fn encrypt_stream<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    key: u64,
    iv_len: usize,
) -> Result<usize, StreamError> {
    let mut plaintext = Vec::new();
    input.read_to_end(&mut plaintext)?;

    let ciphertext = encrypt(&plaintext, key, iv_len)?;
    output.write_all(&ciphertext)?;
    Ok(ciphertext.len())
}

/// Decrypt everything readable from `input`, verify the trailer, and write
/// the recovered plaintext to `output`. Returns the number of plaintext
/// bytes written. Nothing is written when verification fails.
pub fn decrypt_stream<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    key: u64,
    iv_len: usize,
) -> Result<usize, StreamError> {
    let mut ciphertext = Vec::new();
    input.read_to_end(&mut ciphertext)?;

    let plaintext = decrypt(&ciphertext, key, iv_len)?;
    output.write_all(&plaintext)?;
    Ok(plaintext.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, TAG_SIZE};

    #[test]
    fn test_stream_roundtrip() {
        let key = 0xFEED_FACE_0000_0001;
        let message = b"a message long enough to be worth streaming".to_vec();

        let mut sealed = Vec::new();
        let written = encrypt_stream(&mut message.as_slice(), &mut sealed, key, 16).unwrap();
        assert_eq!(written, message.len() + 16 + TAG_SIZE);
        assert_eq!(written, sealed.len());

        let mut recovered = Vec::new();
        let read = decrypt_stream(&mut sealed.as_slice(), &mut recovered, key, 16).unwrap();
        assert_eq!(read, message.len());
        assert_eq!(recovered, message);
    }

    #[test]
    fn test_stream_tamper_writes_nothing() {
        let key = 11;
        let mut sealed = Vec::new();
        encrypt_stream(&mut &b"do not leak"[..], &mut sealed, key, 8).unwrap();
        let last = sealed.len() - 1;
        sealed[last] ^= 0x80;

        let mut recovered = Vec::new();
        let err = decrypt_stream(&mut sealed.as_slice(), &mut recovered, key, 8).unwrap_err();
        assert!(matches!(
            err,
            StreamError::Cipher(Error::AuthenticationFailed)
        ));
        assert!(recovered.is_empty());
    }

    #[test]
    fn test_stream_truncated_input_is_malformed() {
        let mut recovered = Vec::new();
        let err = decrypt_stream(&mut &[0u8; 4][..], &mut recovered, 1, 0).unwrap_err();
        assert!(matches!(err, StreamError::Cipher(Error::CiphertextTooShort)));
    }
}

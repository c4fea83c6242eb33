//! Error types for dragoncrypt operations.

use core::fmt;

/// Result type alias for dragoncrypt operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during encryption or decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The trailer did not match the MAC recomputed during decryption.
    ///
    /// The ciphertext was tampered with, corrupted, or produced with a
    /// different key or IV length. Retrying the same input cannot succeed.
    AuthenticationFailed,

    /// Ciphertext shorter than the minimum framing size (`iv_len + TAG_SIZE`).
    ///
    /// Rejected before any cipher work; distinct from a failed
    /// authentication check so callers can tell bad usage from tampering.
    CiphertextTooShort,

    /// The operating system's random source failed while drawing an IV.
    RandomSource,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AuthenticationFailed => write!(f, "authentication trailer verification failed"),
            Error::CiphertextTooShort => {
                write!(f, "ciphertext shorter than the minimum framing size")
            }
            Error::RandomSource => write!(f, "random source failed while generating an IV"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Errors from the stream helpers: either a cipher error or an I/O error.
#[cfg(feature = "std")]
#[derive(Debug)]
pub enum StreamError {
    /// Encryption or decryption failed.
    Cipher(Error),
    /// Reading the input or writing the output failed.
    Io(std::io::Error),
}

#[cfg(feature = "std")]
impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Cipher(e) => write!(f, "{e}"),
            StreamError::Io(e) => write!(f, "stream I/O failed: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Cipher(e) => Some(e),
            StreamError::Io(e) => Some(e),
        }
    }
}

#[cfg(feature = "std")]
impl From<Error> for StreamError {
    fn from(e: Error) -> Self {
        StreamError::Cipher(e)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for StreamError {
    fn from(e: std::io::Error) -> Self {
        StreamError::Io(e)
    }
}

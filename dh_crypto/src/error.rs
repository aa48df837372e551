//! Error types for key agreement and encoding.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The secure random source could not supply the private exponent bytes.
    #[error("secure random source unavailable: {0}")]
    EntropySourceUnavailable(#[from] rand::Error),

    /// Peer public value has the wrong length or is not below the modulus.
    #[error("malformed peer public value: {0}")]
    MalformedPeerValue(String),

    /// Base64 or fixed-width conversion failed.
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("invalid group parameters: {0}")]
    InvalidParameters(&'static str),

    #[error("private exponent must be non-zero")]
    InvalidPrivateExponent,
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::Encoding(err.to_string())
    }
}

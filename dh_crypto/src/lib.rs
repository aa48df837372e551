//! Two-party Diffie-Hellman key agreement over a fixed 768-bit safe-prime
//! group.
//!
//! Each [`KeyAgreementParty`] draws a private exponent, publishes
//! `g^x mod p` as a 96-byte big-endian value and combines the peer's value
//! into an identical 96-byte shared secret. The secret is raw group output;
//! run it through a KDF before using it as a symmetric key.
//!
//! Illustrative code: exponentiation is not constant time and public values
//! are not authenticated.

pub mod crypto;
pub mod error;

pub use crypto::diffie_hellman_algorithm::{KeyAgreementParty, PublicValue, SharedSecret};
pub use crypto::group_parameters::GroupParameters;
pub use crypto::key_exchange_traits::KeyExchangeAlgorithm;
pub use error::{Error, Result};

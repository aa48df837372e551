//! Key agreement primitives and their wire encoding.

pub mod diffie_hellman_algorithm;
pub mod encoding;
pub mod group_parameters;
pub mod key_exchange_traits;

// Re-export main components for easier access from outside the crypto module.
pub use self::diffie_hellman_algorithm::{KeyAgreementParty, PublicValue, SharedSecret};
pub use self::group_parameters::GroupParameters;
pub use self::key_exchange_traits::KeyExchangeAlgorithm;

use crate::error::Result;

/// One side of a two-party key agreement.
///
/// Implementors own their secret; only the public value ever leaves them.
pub trait KeyExchangeAlgorithm {
    type PublicValue: AsRef<[u8]>;
    type SharedSecret: AsRef<[u8]>;

    /// Value to hand to the peer. Repeated calls return identical bytes.
    fn public_value(&self) -> Self::PublicValue;

    /// Combines the peer's encoded public value with our own secret.
    fn compute_shared_secret(&self, peer_public_value: &[u8]) -> Result<Self::SharedSecret>;
}

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::crypto::encoding::{decode_base64, encode_base64, fixed_bytes_to_int, int_to_fixed_bytes};
use crate::crypto::group_parameters::GroupParameters;
use crate::crypto::key_exchange_traits::KeyExchangeAlgorithm;
use crate::error::{Error, Result};

/// Fixed-width big-endian `g^x mod p`, safe to send to the peer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicValue(Vec<u8>);

impl PublicValue {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        encode_base64(&self.0)
    }

    /// Parses base64 text, possibly wrapped over several lines. The width
    /// and range are checked later against the group by
    /// `compute_shared_secret`.
    pub fn from_base64(text: &str) -> Result<Self> {
        Ok(Self(decode_base64(text)?))
    }
}

impl AsRef<[u8]> for PublicValue {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for PublicValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Fixed-width big-endian `peer^x mod p`. Never transmitted.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(Vec<u8>);

impl SharedSecret {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        encode_base64(&self.0)
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret({} bytes)", self.0.len())
    }
}

/// One participant of a Diffie-Hellman exchange over a fixed group.
///
/// # Security
///
/// The private exponent is only as good as the random source it was drawn
/// from. [`KeyAgreementParty::new`] uses the operating system CSPRNG;
/// [`KeyAgreementParty::with_rng`] requires a [`CryptoRng`]. Feeding a
/// predictable generator breaks the exchange completely and cannot be
/// detected at run time.
///
/// Exponentiation goes through `BigUint::modpow`, which is not constant
/// time. Timing of [`KeyAgreementParty::compute_shared_secret`] may leak
/// information about the private exponent.
///
/// Public values are not authenticated: an active attacker who can replace
/// them in transit can run a separate exchange with each side.
pub struct KeyAgreementParty<'a> {
    params: &'a GroupParameters,
    private_exponent: BigUint,
    public_value: PublicValue,
}

impl<'a> KeyAgreementParty<'a> {
    /// Draws a fresh private exponent from the operating system CSPRNG.
    pub fn new(params: &'a GroupParameters) -> Result<Self> {
        Self::with_rng(params, &mut OsRng)
    }

    /// Draws `params.exponent_bytes()` bytes from `rng` as a big-endian
    /// private exponent. Fails if the source cannot deliver; there is no
    /// fallback generator.
    pub fn with_rng<R: RngCore + CryptoRng>(params: &'a GroupParameters, rng: &mut R) -> Result<Self> {
        let mut exponent_bytes = vec![0u8; params.exponent_bytes()];

        let private_exponent = loop {
            rng.try_fill_bytes(&mut exponent_bytes)?;
            let candidate = BigUint::from_bytes_be(&exponent_bytes);
            if !candidate.is_zero() {
                break candidate;
            }
            log::warn!("Drew an all-zero private exponent, drawing again");
        };
        exponent_bytes.fill(0);

        Self::from_exponent(params, private_exponent)
    }

    /// Builds a party around a known exponent. Only meant for test vectors.
    #[doc(hidden)]
    pub fn from_private_exponent(params: &'a GroupParameters, private_exponent: BigUint) -> Result<Self> {
        if private_exponent.is_zero() {
            return Err(Error::InvalidPrivateExponent);
        }
        Self::from_exponent(params, private_exponent)
    }

    fn from_exponent(params: &'a GroupParameters, private_exponent: BigUint) -> Result<Self> {
        let public = params.generator().modpow(&private_exponent, params.modulus());
        let public_value = PublicValue(int_to_fixed_bytes(&public, params.byte_len())?);

        log::debug!(
            "Created key agreement party: {}-bit exponent, {}-byte public value",
            private_exponent.bits(),
            public_value.0.len()
        );

        Ok(Self {
            params,
            private_exponent,
            public_value,
        })
    }

    pub fn params(&self) -> &GroupParameters {
        self.params
    }

    fn decode_peer_value(&self, peer_public_value: &[u8]) -> Result<BigUint> {
        let width = self.params.byte_len();
        if peer_public_value.len() != width {
            log::warn!(
                "Rejecting peer public value of {} bytes, expected {}",
                peer_public_value.len(),
                width
            );
            return Err(Error::MalformedPeerValue(format!(
                "expected {} bytes, got {}",
                width,
                peer_public_value.len()
            )));
        }

        let value = fixed_bytes_to_int(peer_public_value);
        if &value >= self.params.modulus() {
            log::warn!("Rejecting peer public value that is not below the modulus");
            return Err(Error::MalformedPeerValue(
                "value is not below the group modulus".to_string(),
            ));
        }
        Ok(value)
    }
}

impl KeyExchangeAlgorithm for KeyAgreementParty<'_> {
    type PublicValue = PublicValue;
    type SharedSecret = SharedSecret;

    fn public_value(&self) -> PublicValue {
        self.public_value.clone()
    }

    fn compute_shared_secret(&self, peer_public_value: &[u8]) -> Result<SharedSecret> {
        let peer = self.decode_peer_value(peer_public_value)?;
        let secret = peer.modpow(&self.private_exponent, self.params.modulus());

        log::debug!("Derived {}-byte shared secret", self.params.byte_len());
        Ok(SharedSecret(int_to_fixed_bytes(&secret, self.params.byte_len())?))
    }
}

impl fmt::Debug for KeyAgreementParty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyAgreementParty")
            .field("modulus_bits", &self.params.bit_len())
            .field("public_value", &self.public_value)
            .finish_non_exhaustive()
    }
}

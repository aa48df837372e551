use num_bigint::BigUint;
use num_traits::One;

use crate::error::{Error, Result};

/// 768-bit safe prime (`(p-1)/2` is also prime), big-endian.
pub const MODP_768_PRIME: [u8; 96] = [
    0xde, 0x5d, 0xba, 0xce, 0x4c, 0xef, 0x23, 0x81, 0x53, 0x41, 0x9d, 0x79,
    0xcb, 0x58, 0x6c, 0x77, 0x15, 0x0a, 0x71, 0x7d, 0x11, 0x30, 0x45, 0xc9,
    0x02, 0x41, 0x3d, 0x28, 0xa5, 0x2d, 0x3e, 0x25, 0x1b, 0xdf, 0x0d, 0xf3,
    0xd1, 0x20, 0x99, 0x2e, 0xdb, 0x7d, 0x48, 0x23, 0x4e, 0xbc, 0x37, 0xbc,
    0x59, 0x7c, 0x1b, 0xa4, 0x64, 0xaa, 0x19, 0x79, 0x02, 0x1e, 0x93, 0xcf,
    0x18, 0x28, 0x43, 0x3b, 0xd1, 0xd1, 0xc8, 0xaa, 0xf8, 0x06, 0x0c, 0x0d,
    0x39, 0xda, 0xba, 0x46, 0xe0, 0xc2, 0x74, 0x63, 0xc8, 0x40, 0x04, 0x1a,
    0x5f, 0x19, 0xda, 0x21, 0x17, 0xb4, 0xae, 0xe3, 0xea, 0x26, 0x21, 0x5b,
];

pub const MODP_768_GENERATOR: u32 = 2;

/// 600 bits of private exponent against the 768-bit modulus.
pub const MODP_768_EXPONENT_BYTES: usize = 75;

/// Modulus `p`, generator `g` and the private exponent size for one group.
///
/// Built once and shared by reference between every party using the group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupParameters {
    p: BigUint,
    g: BigUint,
    exponent_bytes: usize,
}

impl GroupParameters {
    /// Checks only basic sanity of the values. Primality of `p` is the
    /// caller's responsibility.
    pub fn new(p: BigUint, g: BigUint, exponent_bytes: usize) -> Result<Self> {
        if p <= BigUint::from(3u32) {
            return Err(Error::InvalidParameters("modulus must be greater than 3"));
        }
        if !p.bit(0) {
            return Err(Error::InvalidParameters("modulus must be odd"));
        }
        if g <= BigUint::one() || g >= &p - BigUint::one() {
            return Err(Error::InvalidParameters("generator must be in the range (1, p-1)"));
        }
        if exponent_bytes == 0 {
            return Err(Error::InvalidParameters("private exponent size must be non-zero"));
        }
        Ok(Self { p, g, exponent_bytes })
    }

    /// The fixed 768-bit group used on the wire.
    pub fn modp_768() -> Self {
        Self {
            p: BigUint::from_bytes_be(&MODP_768_PRIME),
            g: BigUint::from(MODP_768_GENERATOR),
            exponent_bytes: MODP_768_EXPONENT_BYTES,
        }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    pub fn generator(&self) -> &BigUint {
        &self.g
    }

    pub fn exponent_bytes(&self) -> usize {
        self.exponent_bytes
    }

    pub fn bit_len(&self) -> u64 {
        self.p.bits()
    }

    /// Width of every encoded public value and shared secret.
    pub fn byte_len(&self) -> usize {
        ((self.p.bits() + 7) / 8) as usize
    }

    /// For a safe prime, `g` generates a subgroup of order at least `(p-1)/2`
    /// exactly when `g^((p-1)/2) mod p != 1`.
    pub fn generator_has_large_order(&self) -> bool {
        let half_order = (&self.p - BigUint::one()) >> 1;
        !self.g.modpow(&half_order, &self.p).is_one()
    }
}

impl Default for GroupParameters {
    fn default() -> Self {
        Self::modp_768()
    }
}

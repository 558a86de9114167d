//! ElGamal keys (`1.3.14.7.2.1.1`)
//!
//! Domain parameters travel as `SEQUENCE { G, P }`, generator first. The
//! private key is `INTEGER x` and the public key `INTEGER y = G^x mod P`.

use std::fmt;

use keyseal_algorithms::encoding::{DerReader, DerWriter};
use keyseal_algorithms::math::random_nonzero_below;
use keyseal_api::{Error, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::{integer_der, parse_integer_der, read_positive, PrivateKeyStrategy, PublicKeyStrategy};
use crate::asn1::{oid, AlgorithmIdentifier};
use crate::curves::CurveRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalParameters {
    p: BigUint,
    g: BigUint,
}

impl ElGamalParameters {
    /// `p` must be odd and `g` must lie in `(1, p - 1)`
    pub fn new(p: BigUint, g: BigUint) -> Result<Self> {
        let one = BigUint::one();
        if p.bits() < 16 || !p.bit(0) {
            return Err(Error::invalid_key("ElGamal parameters", "p must be an odd prime"));
        }
        if g <= one || g >= &p - 1u32 {
            return Err(Error::invalid_key("ElGamal parameters", "g out of range"));
        }
        Ok(Self { p, g })
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn g(&self) -> &BigUint {
        &self.g
    }

    pub fn to_der(&self) -> Vec<u8> {
        let mut w = DerWriter::new();
        w.write_sequence(|w| {
            w.write_biguint(&self.g);
            w.write_biguint(&self.p);
        });
        w.into_bytes()
    }

    pub fn from_der(der: &[u8]) -> Result<Self> {
        let mut r = DerReader::new(der);
        let mut seq = r.read_sequence()?;
        r.finish("ElGamal parameters")?;
        let g = read_positive(&mut seq, "ElGamal g")?;
        let p = read_positive(&mut seq, "ElGamal p")?;
        seq.finish("ElGamal parameters")?;
        Self::new(p, g)
    }

    fn from_algorithm(algorithm: &AlgorithmIdentifier) -> Result<Self> {
        let params = algorithm.parameters.as_deref().ok_or_else(|| {
            Error::malformed("ElGamal AlgorithmIdentifier", "missing domain parameters")
        })?;
        Self::from_der(params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalPublicKey {
    params: ElGamalParameters,
    y: BigUint,
}

#[derive(Clone, PartialEq, Eq)]
pub struct ElGamalPrivateKey {
    public: ElGamalPublicKey,
    x: BigUint,
}

impl fmt::Debug for ElGamalPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElGamalPrivateKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl ElGamalPublicKey {
    pub fn new(params: ElGamalParameters, y: BigUint) -> Result<Self> {
        if y.is_zero() || y >= params.p {
            return Err(Error::invalid_key("ElGamal public key", "y out of range"));
        }
        Ok(Self { params, y })
    }

    pub fn parameters(&self) -> &ElGamalParameters {
        &self.params
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

impl ElGamalPrivateKey {
    /// Draw `x` uniformly from `[1, p - 1)`
    pub fn generate<R: RngCore + CryptoRng>(params: ElGamalParameters, rng: &mut R) -> Result<Self> {
        let bound = &params.p - 1u32;
        let x = random_nonzero_below(rng, &bound, "ElGamal key generation")?;
        Self::from_scalar(params, x)
    }

    pub fn from_scalar(params: ElGamalParameters, x: BigUint) -> Result<Self> {
        if x.is_zero() || x >= &params.p - 1u32 {
            return Err(Error::invalid_key("ElGamal private key", "x out of range"));
        }
        let y = params.g.modpow(&x, &params.p);
        let public = ElGamalPublicKey::new(params, y)?;
        Ok(Self { public, x })
    }

    pub fn public_key(&self) -> &ElGamalPublicKey {
        &self.public
    }

    pub fn x(&self) -> &BigUint {
        &self.x
    }
}

impl PrivateKeyStrategy for ElGamalPrivateKey {
    fn algorithm_identifier(&self, _: &CurveRegistry) -> Result<AlgorithmIdentifier> {
        Ok(AlgorithmIdentifier::new(oid::ELGAMAL, Some(self.public.params.to_der())))
    }

    fn private_key_der(&self, _: &CurveRegistry) -> Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(integer_der(&self.x)))
    }

    fn from_private_key_der(
        algorithm: &AlgorithmIdentifier,
        der: &[u8],
        _: &CurveRegistry,
    ) -> Result<Self> {
        let params = ElGamalParameters::from_algorithm(algorithm)?;
        Self::from_scalar(params, parse_integer_der(der, "ElGamal private key")?)
    }
}

impl PublicKeyStrategy for ElGamalPublicKey {
    fn algorithm_identifier(&self, _: &CurveRegistry) -> Result<AlgorithmIdentifier> {
        Ok(AlgorithmIdentifier::new(oid::ELGAMAL, Some(self.params.to_der())))
    }

    fn public_key_bits(&self) -> Result<Vec<u8>> {
        Ok(integer_der(&self.y))
    }

    fn from_public_key_bits(
        algorithm: &AlgorithmIdentifier,
        bits: &[u8],
        _: &CurveRegistry,
    ) -> Result<Self> {
        let params = ElGamalParameters::from_algorithm(algorithm)?;
        Self::new(params, parse_integer_der(bits, "ElGamal public key")?)
    }
}

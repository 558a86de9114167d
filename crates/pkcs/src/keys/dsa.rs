//! DSA keys over caller-supplied domain parameters

use std::fmt;

use keyseal_algorithms::encoding::{DerReader, DerWriter};
use keyseal_algorithms::math::random_nonzero_below;
use keyseal_api::{Error, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::{integer_der, mismatch, parse_integer_der, read_positive, PrivateKeyStrategy, PublicKeyStrategy};
use crate::asn1::{oid, AlgorithmIdentifier};
use crate::curves::CurveRegistry;

/// `Dss-Parms ::= SEQUENCE { p, q, g }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsaParameters {
    p: BigUint,
    q: BigUint,
    g: BigUint,
}

impl DsaParameters {
    /// Check `q | p - 1` and that `g` generates the order-`q` subgroup
    pub fn new(p: BigUint, q: BigUint, g: BigUint) -> Result<Self> {
        let one = BigUint::one();
        if q <= one || p <= q || !((&p - 1u32) % &q).is_zero() {
            return Err(Error::invalid_key("DSA parameters", "q does not divide p-1"));
        }
        if g <= one || g >= p || g.modpow(&q, &p) != one {
            return Err(Error::invalid_key("DSA parameters", "g does not have order q"));
        }
        Ok(Self { p, q, g })
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn q(&self) -> &BigUint {
        &self.q
    }

    pub fn g(&self) -> &BigUint {
        &self.g
    }

    pub fn to_der(&self) -> Vec<u8> {
        let mut w = DerWriter::new();
        w.write_sequence(|w| {
            w.write_biguint(&self.p);
            w.write_biguint(&self.q);
            w.write_biguint(&self.g);
        });
        w.into_bytes()
    }

    pub fn from_der(der: &[u8]) -> Result<Self> {
        let mut r = DerReader::new(der);
        let mut seq = r.read_sequence()?;
        r.finish("DSA parameters")?;
        let p = read_positive(&mut seq, "DSA p")?;
        let q = read_positive(&mut seq, "DSA q")?;
        let g = read_positive(&mut seq, "DSA g")?;
        seq.finish("DSA parameters")?;
        Self::new(p, q, g)
    }

    fn from_algorithm(algorithm: &AlgorithmIdentifier) -> Result<Self> {
        let params = algorithm
            .parameters
            .as_deref()
            .ok_or_else(|| Error::malformed("DSA AlgorithmIdentifier", "missing domain parameters"))?;
        Self::from_der(params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsaPublicKey {
    params: DsaParameters,
    y: BigUint,
}

#[derive(Clone, PartialEq, Eq)]
pub struct DsaPrivateKey {
    public: DsaPublicKey,
    x: BigUint,
}

impl fmt::Debug for DsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DsaPrivateKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl DsaPublicKey {
    /// `y` must lie in `(1, p)`
    pub fn new(params: DsaParameters, y: BigUint) -> Result<Self> {
        if y <= BigUint::one() || y >= params.p {
            return Err(Error::invalid_key("DSA public key", "y out of range"));
        }
        Ok(Self { params, y })
    }

    pub fn parameters(&self) -> &DsaParameters {
        &self.params
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

impl DsaPrivateKey {
    /// Draw `x` uniformly from `[1, q)`
    pub fn generate<R: RngCore + CryptoRng>(params: DsaParameters, rng: &mut R) -> Result<Self> {
        let x = random_nonzero_below(rng, &params.q, "DSA key generation")?;
        Self::from_scalar(params, x)
    }

    /// Build a key from `x`, which must lie in `[1, q)`
    pub fn from_scalar(params: DsaParameters, x: BigUint) -> Result<Self> {
        if x.is_zero() || x >= params.q {
            return Err(Error::invalid_key("DSA private key", "x out of range"));
        }
        let y = params.g.modpow(&x, &params.p);
        let public = DsaPublicKey::new(params, y)?;
        Ok(Self { public, x })
    }

    pub fn public_key(&self) -> &DsaPublicKey {
        &self.public
    }

    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// OpenSSL `DSAPrivateKey ::= SEQUENCE { 0, p, q, g, y, x }`
    pub fn to_openssl_der(&self) -> Zeroizing<Vec<u8>> {
        let params = &self.public.params;
        let mut w = DerWriter::new();
        w.write_sequence(|w| {
            w.write_uint(0);
            w.write_biguint(&params.p);
            w.write_biguint(&params.q);
            w.write_biguint(&params.g);
            w.write_biguint(&self.public.y);
            w.write_biguint(&self.x);
        });
        Zeroizing::new(w.into_bytes())
    }

    pub fn from_openssl_der(der: &[u8]) -> Result<Self> {
        let mut r = DerReader::new(der);
        let mut seq = r.read_sequence()?;
        r.finish("DSA private key")?;
        let version = seq.read_u64()?;
        if version != 0 {
            return Err(Error::malformed("DSA private key", format!("unknown version {version}")));
        }
        let p = read_positive(&mut seq, "DSA p")?;
        let q = read_positive(&mut seq, "DSA q")?;
        let g = read_positive(&mut seq, "DSA g")?;
        let y = read_positive(&mut seq, "DSA y")?;
        let x = read_positive(&mut seq, "DSA x")?;
        seq.finish("DSA private key")?;

        let key = Self::from_scalar(DsaParameters::new(p, q, g)?, x)?;
        if key.public.y != y {
            return Err(mismatch("DSA private key", "y"));
        }
        Ok(key)
    }
}

impl PrivateKeyStrategy for DsaPrivateKey {
    fn algorithm_identifier(&self, _: &CurveRegistry) -> Result<AlgorithmIdentifier> {
        Ok(AlgorithmIdentifier::new(oid::DSA, Some(self.public.params.to_der())))
    }

    fn private_key_der(&self, _: &CurveRegistry) -> Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(integer_der(&self.x)))
    }

    fn from_private_key_der(
        algorithm: &AlgorithmIdentifier,
        der: &[u8],
        _: &CurveRegistry,
    ) -> Result<Self> {
        let params = DsaParameters::from_algorithm(algorithm)?;
        Self::from_scalar(params, parse_integer_der(der, "DSA private key")?)
    }
}

impl PublicKeyStrategy for DsaPublicKey {
    fn algorithm_identifier(&self, _: &CurveRegistry) -> Result<AlgorithmIdentifier> {
        Ok(AlgorithmIdentifier::new(oid::DSA, Some(self.params.to_der())))
    }

    fn public_key_bits(&self) -> Result<Vec<u8>> {
        Ok(integer_der(&self.y))
    }

    fn from_public_key_bits(
        algorithm: &AlgorithmIdentifier,
        bits: &[u8],
        _: &CurveRegistry,
    ) -> Result<Self> {
        let params = DsaParameters::from_algorithm(algorithm)?;
        Self::new(params, parse_integer_der(bits, "DSA public key")?)
    }
}

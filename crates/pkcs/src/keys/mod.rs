//! Typed keys and the per-algorithm container strategies
//!
//! Every algorithm plugs into the PKCS#8 and SPKI codecs through
//! [`PrivateKeyStrategy`] and [`PublicKeyStrategy`]: one half writes the
//! `AlgorithmIdentifier` and the inner key bytes, the other rebuilds a key
//! from them. [`PrivateKey`] and [`PublicKey`] are the sum types the codec
//! dispatches over.

pub mod dsa;
pub mod ec;
pub mod elgamal;
pub mod gost;
pub mod rsa;

use std::fmt;

use const_oid::ObjectIdentifier;
use keyseal_algorithms::encoding::{der, DerReader, DerWriter};
use keyseal_api::{Error, Result};
use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::asn1::{oid, AlgorithmIdentifier};
use crate::curves::CurveRegistry;

pub use dsa::{DsaParameters, DsaPrivateKey, DsaPublicKey};
pub use ec::{EcPrivateKey, EcPublicKey};
pub use elgamal::{ElGamalParameters, ElGamalPrivateKey, ElGamalPublicKey};
pub use keyseal_sign::{GostPrivateKey, GostPublicKey};
pub use rsa::{RsaPrivateKey, RsaPublicKey};

/// Key algorithms the codec understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyAlgorithm {
    Rsa,
    Dsa,
    Ecdsa,
    Sm2,
    Gost,
    ElGamal,
}

impl KeyAlgorithm {
    /// The `AlgorithmIdentifier` OID; ECDSA and SM2 share `id-ecPublicKey`
    pub fn oid(self) -> ObjectIdentifier {
        match self {
            Self::Rsa => oid::RSA_ENCRYPTION,
            Self::Dsa => oid::DSA,
            Self::Ecdsa | Self::Sm2 => oid::EC_PUBLIC_KEY,
            Self::Gost => oid::GOST_R3410_2001,
            Self::ElGamal => oid::ELGAMAL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Rsa => "RSA",
            Self::Dsa => "DSA",
            Self::Ecdsa => "ECDSA",
            Self::Sm2 => "SM2",
            Self::Gost => "GOST",
            Self::ElGamal => "ElGamal",
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a private key is laid out inside a PKCS#8 container
pub trait PrivateKeyStrategy: Sized {
    /// `AlgorithmIdentifier` naming the algorithm and its domain parameters
    fn algorithm_identifier(&self, curves: &CurveRegistry) -> Result<AlgorithmIdentifier>;

    /// Contents of the `privateKey` OCTET STRING
    fn private_key_der(&self, curves: &CurveRegistry) -> Result<Zeroizing<Vec<u8>>>;

    /// Rebuild the key from the identifier parameters and inner bytes
    fn from_private_key_der(
        algorithm: &AlgorithmIdentifier,
        der: &[u8],
        curves: &CurveRegistry,
    ) -> Result<Self>;
}

/// How a public key is laid out inside a SubjectPublicKeyInfo
pub trait PublicKeyStrategy: Sized {
    fn algorithm_identifier(&self, curves: &CurveRegistry) -> Result<AlgorithmIdentifier>;

    /// Contents of the `subjectPublicKey` BIT STRING
    fn public_key_bits(&self) -> Result<Vec<u8>>;

    fn from_public_key_bits(
        algorithm: &AlgorithmIdentifier,
        bits: &[u8],
        curves: &CurveRegistry,
    ) -> Result<Self>;
}

/// A private key of any supported algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivateKey {
    Rsa(RsaPrivateKey),
    Dsa(DsaPrivateKey),
    /// ECDSA or SM2, told apart by the curve
    Ec(EcPrivateKey),
    Gost(GostPrivateKey),
    ElGamal(ElGamalPrivateKey),
}

/// A public key of any supported algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    Rsa(RsaPublicKey),
    Dsa(DsaPublicKey),
    Ec(EcPublicKey),
    Gost(GostPublicKey),
    ElGamal(ElGamalPublicKey),
}

impl PrivateKey {
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            Self::Rsa(_) => KeyAlgorithm::Rsa,
            Self::Dsa(_) => KeyAlgorithm::Dsa,
            Self::Ec(key) => key.public_key().algorithm(),
            Self::Gost(_) => KeyAlgorithm::Gost,
            Self::ElGamal(_) => KeyAlgorithm::ElGamal,
        }
    }

    /// The matching public key
    pub fn public_key(&self) -> PublicKey {
        match self {
            Self::Rsa(key) => PublicKey::Rsa(key.public_key().clone()),
            Self::Dsa(key) => PublicKey::Dsa(key.public_key().clone()),
            Self::Ec(key) => PublicKey::Ec(key.public_key().clone()),
            Self::Gost(key) => PublicKey::Gost(key.public_key().clone()),
            Self::ElGamal(key) => PublicKey::ElGamal(key.public_key().clone()),
        }
    }

    pub(crate) fn algorithm_identifier(&self, curves: &CurveRegistry) -> Result<AlgorithmIdentifier> {
        match self {
            Self::Rsa(key) => key.algorithm_identifier(curves),
            Self::Dsa(key) => key.algorithm_identifier(curves),
            Self::Ec(key) => key.algorithm_identifier(curves),
            Self::Gost(key) => key.algorithm_identifier(curves),
            Self::ElGamal(key) => key.algorithm_identifier(curves),
        }
    }

    pub(crate) fn private_key_der(&self, curves: &CurveRegistry) -> Result<Zeroizing<Vec<u8>>> {
        match self {
            Self::Rsa(key) => key.private_key_der(curves),
            Self::Dsa(key) => key.private_key_der(curves),
            Self::Ec(key) => key.private_key_der(curves),
            Self::Gost(key) => key.private_key_der(curves),
            Self::ElGamal(key) => key.private_key_der(curves),
        }
    }

    /// Dispatch on the identifier OID
    pub(crate) fn from_private_key_der(
        algorithm: &AlgorithmIdentifier,
        der: &[u8],
        curves: &CurveRegistry,
    ) -> Result<Self> {
        let id = &algorithm.oid;
        if *id == oid::RSA_ENCRYPTION {
            RsaPrivateKey::from_private_key_der(algorithm, der, curves).map(Self::Rsa)
        } else if *id == oid::DSA {
            DsaPrivateKey::from_private_key_der(algorithm, der, curves).map(Self::Dsa)
        } else if *id == oid::EC_PUBLIC_KEY {
            EcPrivateKey::from_private_key_der(algorithm, der, curves).map(Self::Ec)
        } else if *id == oid::GOST_R3410_2001 {
            GostPrivateKey::from_private_key_der(algorithm, der, curves).map(Self::Gost)
        } else if *id == oid::ELGAMAL {
            ElGamalPrivateKey::from_private_key_der(algorithm, der, curves).map(Self::ElGamal)
        } else {
            tracing::debug!(oid = %id, "unknown private key algorithm");
            Err(Error::unsupported("private key algorithm", id.to_string()))
        }
    }
}

impl PublicKey {
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            Self::Rsa(_) => KeyAlgorithm::Rsa,
            Self::Dsa(_) => KeyAlgorithm::Dsa,
            Self::Ec(key) => key.algorithm(),
            Self::Gost(_) => KeyAlgorithm::Gost,
            Self::ElGamal(_) => KeyAlgorithm::ElGamal,
        }
    }

    pub(crate) fn algorithm_identifier(&self, curves: &CurveRegistry) -> Result<AlgorithmIdentifier> {
        match self {
            Self::Rsa(key) => key.algorithm_identifier(curves),
            Self::Dsa(key) => key.algorithm_identifier(curves),
            Self::Ec(key) => key.algorithm_identifier(curves),
            Self::Gost(key) => key.algorithm_identifier(curves),
            Self::ElGamal(key) => key.algorithm_identifier(curves),
        }
    }

    pub(crate) fn public_key_bits(&self) -> Result<Vec<u8>> {
        match self {
            Self::Rsa(key) => key.public_key_bits(),
            Self::Dsa(key) => key.public_key_bits(),
            Self::Ec(key) => key.public_key_bits(),
            Self::Gost(key) => key.public_key_bits(),
            Self::ElGamal(key) => key.public_key_bits(),
        }
    }

    pub(crate) fn from_public_key_bits(
        algorithm: &AlgorithmIdentifier,
        bits: &[u8],
        curves: &CurveRegistry,
    ) -> Result<Self> {
        let id = &algorithm.oid;
        if *id == oid::RSA_ENCRYPTION {
            RsaPublicKey::from_public_key_bits(algorithm, bits, curves).map(Self::Rsa)
        } else if *id == oid::DSA {
            DsaPublicKey::from_public_key_bits(algorithm, bits, curves).map(Self::Dsa)
        } else if *id == oid::EC_PUBLIC_KEY {
            EcPublicKey::from_public_key_bits(algorithm, bits, curves).map(Self::Ec)
        } else if *id == oid::GOST_R3410_2001 {
            GostPublicKey::from_public_key_bits(algorithm, bits, curves).map(Self::Gost)
        } else if *id == oid::ELGAMAL {
            ElGamalPublicKey::from_public_key_bits(algorithm, bits, curves).map(Self::ElGamal)
        } else {
            tracing::debug!(oid = %id, "unknown public key algorithm");
            Err(Error::unsupported("public key algorithm", id.to_string()))
        }
    }
}

macro_rules! impl_from_key {
    ($enum:ident, $variant:ident, $ty:ty) => {
        impl From<$ty> for $enum {
            fn from(key: $ty) -> Self {
                Self::$variant(key)
            }
        }
    };
}

impl_from_key!(PrivateKey, Rsa, RsaPrivateKey);
impl_from_key!(PrivateKey, Dsa, DsaPrivateKey);
impl_from_key!(PrivateKey, Ec, EcPrivateKey);
impl_from_key!(PrivateKey, Gost, GostPrivateKey);
impl_from_key!(PrivateKey, ElGamal, ElGamalPrivateKey);
impl_from_key!(PublicKey, Rsa, RsaPublicKey);
impl_from_key!(PublicKey, Dsa, DsaPublicKey);
impl_from_key!(PublicKey, Ec, EcPublicKey);
impl_from_key!(PublicKey, Gost, GostPublicKey);
impl_from_key!(PublicKey, ElGamal, ElGamalPublicKey);

/// Read an INTEGER that must be strictly positive
pub(crate) fn read_positive(r: &mut DerReader<'_>, context: &'static str) -> Result<BigUint> {
    der::positive(r.read_bigint()?, context)
}

/// DER of a lone INTEGER
pub(crate) fn integer_der(value: &BigUint) -> Vec<u8> {
    let mut w = DerWriter::new();
    w.write_biguint(value);
    w.into_bytes()
}

/// Parse a lone positive INTEGER with nothing after it
pub(crate) fn parse_integer_der(bytes: &[u8], context: &'static str) -> Result<BigUint> {
    let mut r = DerReader::new(bytes);
    let value = read_positive(&mut r, context)?;
    r.finish(context)?;
    Ok(value)
}

/// Explain a parameter mismatch
pub(crate) fn mismatch(context: &'static str, what: &str) -> Error {
    Error::invalid_key(context, format!("{what} does not match the private key"))
}

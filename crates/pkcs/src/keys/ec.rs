//! ECDSA and SM2 keys on registered named curves (SEC1 / RFC 5915)

use std::fmt;
use std::sync::Arc;

use const_oid::ObjectIdentifier;
use keyseal_algorithms::encoding::{tag, DerReader, DerWriter};
use keyseal_algorithms::math::{random_nonzero_below, to_padded_bytes};
use keyseal_algorithms::{AffinePoint, Curve};
use keyseal_api::{Error, Result};
use keyseal_params::curves::sm2::SM2_P256;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::{mismatch, KeyAlgorithm, PrivateKeyStrategy, PublicKeyStrategy};
use crate::asn1::{oid, oid_parameters, AlgorithmIdentifier};
use crate::curves::CurveRegistry;

/// `ECPrivateKey` version
const SEC1_VERSION: u64 = 1;

/// Fields of `SEQUENCE { version, privateKey, [0] curve OPTIONAL, [1] publicKey OPTIONAL }`
///
/// GOST keys reuse the same layout with raw `X || Y` in the public key field.
pub(crate) struct Sec1Fields<'a> {
    pub scalar: &'a [u8],
    pub curve: Option<ObjectIdentifier>,
    pub public: Option<&'a [u8]>,
}

impl<'a> Sec1Fields<'a> {
    pub fn encode(&self) -> Zeroizing<Vec<u8>> {
        let mut w = DerWriter::new();
        w.write_sequence(|w| {
            w.write_uint(SEC1_VERSION);
            w.write_octet_string(self.scalar);
            if let Some(curve) = &self.curve {
                w.write_context(0, |w| w.write_oid(curve));
            }
            if let Some(public) = self.public {
                w.write_context(1, |w| w.write_bit_string(public));
            }
        });
        Zeroizing::new(w.into_bytes())
    }

    pub fn decode(der: &'a [u8], context: &'static str) -> Result<Self> {
        let mut r = DerReader::new(der);
        let mut seq = r.read_sequence()?;
        r.finish(context)?;
        let version = seq.read_u64()?;
        if version != SEC1_VERSION {
            return Err(Error::malformed(context, format!("unknown version {version}")));
        }
        let scalar = seq.read_octet_string()?;
        let curve = match seq.read_optional_context(0)? {
            Some(mut inner) => {
                if inner.peek_tag() != Some(tag::OBJECT_IDENTIFIER) {
                    return Err(Error::unsupported(context, "explicit curve parameters"));
                }
                let curve = inner.read_oid()?;
                inner.finish(context)?;
                Some(curve)
            }
            None => None,
        };
        let public = match seq.read_optional_context(1)? {
            Some(mut inner) => {
                let bits = inner.read_bit_string()?;
                inner.finish(context)?;
                Some(bits)
            }
            None => None,
        };
        seq.finish(context)?;
        Ok(Self {
            scalar,
            curve,
            public,
        })
    }
}

/// Resolve the curve named by the identifier parameters, or by `fallback`
/// when the identifier carries none
pub(crate) fn resolve_curve(
    algorithm: &AlgorithmIdentifier,
    fallback: Option<ObjectIdentifier>,
    curves: &CurveRegistry,
    context: &'static str,
) -> Result<Arc<Curve>> {
    let named = match algorithm.parameters.as_deref() {
        Some([tag::OBJECT_IDENTIFIER, ..]) => Some(algorithm.parameters_oid(context)?),
        Some([tag::SEQUENCE, ..]) => {
            return Err(Error::unsupported(context, "explicit curve parameters"))
        }
        _ if algorithm.has_null_parameters() => None,
        _ => return Err(Error::malformed(context, "curve parameters must be an OID")),
    };
    match named.or(fallback) {
        Some(curve) => curves.require(&curve),
        None => Err(Error::malformed(context, "no curve named")),
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct EcPublicKey {
    curve: Arc<Curve>,
    point: AffinePoint,
}

impl fmt::Debug for EcPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcPublicKey")
            .field("curve", &self.curve.name())
            .field("point", &self.point)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct EcPrivateKey {
    public: EcPublicKey,
    d: BigUint,
}

impl fmt::Debug for EcPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcPrivateKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl EcPublicKey {
    /// Wrap a point after checking it lies in the curve's prime-order subgroup
    pub fn from_point(curve: Arc<Curve>, point: AffinePoint) -> Result<Self> {
        if !curve.is_on_curve(&point) || !point.in_subgroup(&curve) {
            return Err(Error::invalid_key("EC public key", "point is not on the curve"));
        }
        Ok(Self { curve, point })
    }

    /// Decode a SEC1 point, compressed or not
    pub fn from_sec1_bytes(curve: Arc<Curve>, bytes: &[u8]) -> Result<Self> {
        let point = curve.decode_point(bytes)?;
        Self::from_point(curve, point)
    }

    /// Uncompressed SEC1 encoding
    pub fn to_sec1_bytes(&self) -> Result<Vec<u8>> {
        self.curve.encode_point(&self.point)
    }

    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// SM2 on the SM2 curve, ECDSA elsewhere
    pub fn algorithm(&self) -> KeyAlgorithm {
        if self.curve.name() == SM2_P256.name {
            KeyAlgorithm::Sm2
        } else {
            KeyAlgorithm::Ecdsa
        }
    }
}

impl EcPrivateKey {
    pub fn generate<R: RngCore + CryptoRng>(curve: Arc<Curve>, rng: &mut R) -> Result<Self> {
        let d = random_nonzero_below(rng, curve.order(), "EC key generation")?;
        Self::from_scalar(curve, d)
    }

    /// Build a key from `d`, which must lie in `[1, q)`
    pub fn from_scalar(curve: Arc<Curve>, d: BigUint) -> Result<Self> {
        curve.check_scalar(&d, "EC private key")?;
        let point = curve.mul_base(&d);
        let public = EcPublicKey::from_point(curve, point)?;
        Ok(Self { public, d })
    }

    pub fn public_key(&self) -> &EcPublicKey {
        &self.public
    }

    pub fn curve(&self) -> &Arc<Curve> {
        &self.public.curve
    }

    pub fn scalar(&self) -> &BigUint {
        &self.d
    }

    /// Scalar padded to the curve's byte width
    pub fn to_bytes(&self) -> Result<Zeroizing<Vec<u8>>> {
        to_padded_bytes(&self.d, self.curve().point_size()).map(Zeroizing::new)
    }

    /// RFC 5915 `ECPrivateKey`, with the curve OID when `curve` is given
    pub fn to_sec1_der(&self, curve: Option<ObjectIdentifier>) -> Result<Zeroizing<Vec<u8>>> {
        let scalar = self.to_bytes()?;
        let public = self.public.to_sec1_bytes()?;
        Ok(Sec1Fields {
            scalar: &scalar,
            curve,
            public: Some(&public),
        }
        .encode())
    }

    /// Parse RFC 5915 `ECPrivateKey`
    ///
    /// `curve` overrides the `[0]` field, which is required otherwise. A
    /// `[1]` public key, when present, must match the one derived from the
    /// scalar.
    pub fn from_sec1_der(
        der: &[u8],
        curve: Option<Arc<Curve>>,
        curves: &CurveRegistry,
    ) -> Result<Self> {
        let fields = Sec1Fields::decode(der, "EC private key")?;
        let curve = match (curve, fields.curve) {
            (Some(curve), _) => curve,
            (None, Some(named)) => curves.require(&named)?,
            (None, None) => return Err(Error::malformed("EC private key", "no curve named")),
        };
        if fields.scalar.len() > curve.point_size() {
            return Err(Error::invalid_key("EC private key", "scalar too long"));
        }
        let key = Self::from_scalar(curve, BigUint::from_bytes_be(fields.scalar))?;
        if let Some(public) = fields.public {
            let embedded = EcPublicKey::from_sec1_bytes(Arc::clone(key.curve()), public)?;
            if embedded != key.public {
                return Err(mismatch("EC private key", "embedded public key"));
            }
        }
        Ok(key)
    }
}

impl PrivateKeyStrategy for EcPrivateKey {
    fn algorithm_identifier(&self, curves: &CurveRegistry) -> Result<AlgorithmIdentifier> {
        self.public.algorithm_identifier(curves)
    }

    fn private_key_der(&self, _: &CurveRegistry) -> Result<Zeroizing<Vec<u8>>> {
        self.to_sec1_der(None)
    }

    fn from_private_key_der(
        algorithm: &AlgorithmIdentifier,
        der: &[u8],
        curves: &CurveRegistry,
    ) -> Result<Self> {
        let inner = Sec1Fields::decode(der, "EC private key")?;
        let curve = resolve_curve(algorithm, inner.curve, curves, "EC AlgorithmIdentifier")?;
        Self::from_sec1_der(der, Some(curve), curves)
    }
}

impl PublicKeyStrategy for EcPublicKey {
    fn algorithm_identifier(&self, curves: &CurveRegistry) -> Result<AlgorithmIdentifier> {
        let named = curves.require_oid(&self.curve)?;
        Ok(AlgorithmIdentifier::new(
            oid::EC_PUBLIC_KEY,
            Some(oid_parameters(&named)),
        ))
    }

    fn public_key_bits(&self) -> Result<Vec<u8>> {
        self.to_sec1_bytes()
    }

    fn from_public_key_bits(
        algorithm: &AlgorithmIdentifier,
        bits: &[u8],
        curves: &CurveRegistry,
    ) -> Result<Self> {
        let curve = resolve_curve(algorithm, None, curves, "EC AlgorithmIdentifier")?;
        Self::from_sec1_bytes(curve, bits)
    }
}

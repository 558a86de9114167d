//! GOST R 34.10 signatures
//!
//! Keys are bound to a shared [`Curve`]. Signing reduces the digest, read as a
//! big-endian integer, modulo the group order `q` (a zero residue becomes 1)
//! and then draws nonces until all three rejection conditions pass:
//!
//! - `k = rand mod q` is nonzero
//! - `r = (k*G).x mod q` is nonzero
//! - `s = (r*d + k*e) mod q` is nonzero
//!
//! The draw loop is capped at [`MAX_SIGN_ATTEMPTS`]; a source that keeps
//! producing rejected values yields [`Error::RandomSourceExhausted`].

use core::fmt;
use std::sync::Arc;

use keyseal_algorithms::math::{mod_inverse, random_bytes, to_padded_bytes};
use keyseal_algorithms::{AffinePoint, Curve};
use keyseal_api::{DigestSigner, DigestVerifier, Error, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace, warn};

use crate::common::SignatureComponents;

/// Nonce draws allowed per signature or key generation
pub const MAX_SIGN_ATTEMPTS: usize = 64;

/// A GOST public key: a curve point other than infinity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GostPublicKey {
    curve: Arc<Curve>,
    point: AffinePoint,
}

/// A GOST private key with its derived public key
#[derive(Clone)]
pub struct GostPrivateKey {
    public: GostPublicKey,
    d: BigUint,
}

impl PartialEq for GostPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.d == other.d && self.public.curve == other.public.curve
    }
}

impl Eq for GostPrivateKey {}

impl fmt::Debug for GostPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GostPrivateKey")
            .field("curve", &self.public.curve.name())
            .field("public", &self.public.point)
            .finish_non_exhaustive()
    }
}

/// Digest as an integer mod q, never zero
fn reduce_digest(digest: &[u8], q: &BigUint) -> BigUint {
    let e = BigUint::from_bytes_be(digest) % q;
    if e.is_zero() {
        BigUint::one()
    } else {
        e
    }
}

/// Draw `point_size` bytes and reduce them mod q
fn draw_scalar<R: RngCore + ?Sized>(rng: &mut R, curve: &Curve) -> Result<BigUint> {
    let raw = random_bytes(rng, curve.point_size())?;
    Ok(BigUint::from_bytes_be(&raw) % curve.order())
}

impl GostPrivateKey {
    /// Generate a key, redrawing zero scalars
    pub fn generate<R: RngCore + CryptoRng>(curve: Arc<Curve>, rng: &mut R) -> Result<Self> {
        for attempt in 1..=MAX_SIGN_ATTEMPTS {
            let d = draw_scalar(rng, &curve)?;
            if d.is_zero() {
                trace!(attempt, "rejected zero private scalar");
                continue;
            }
            debug!(curve = curve.name(), "generated GOST key");
            return Self::from_scalar(curve, d);
        }
        warn!(curve = curve.name(), "random source exhausted during key generation");
        Err(Error::RandomSourceExhausted {
            context: "GOST key generation",
            attempts: MAX_SIGN_ATTEMPTS,
        })
    }

    /// Build a key from a scalar, reducing it mod q and rejecting zero
    pub fn from_scalar(curve: Arc<Curve>, scalar: BigUint) -> Result<Self> {
        let d = scalar % curve.order();
        if d.is_zero() {
            return Err(Error::invalid_key("GOST private key", "scalar is zero modulo q"));
        }
        let point = curve.mul_base(&d);
        let public = GostPublicKey::from_point(curve, point)?;
        Ok(Self { public, d })
    }

    /// Decode the big-endian scalar, which must be exactly `point_size` bytes
    pub fn from_bytes(curve: Arc<Curve>, raw: &[u8]) -> Result<Self> {
        let width = curve.point_size();
        if raw.len() != width {
            return Err(Error::invalid_key(
                "GOST private key",
                format!("expected {width} bytes, got {}", raw.len()),
            ));
        }
        let k = BigUint::from_bytes_be(raw);
        if k.is_zero() {
            return Err(Error::invalid_key("GOST private key", "scalar is zero"));
        }
        Self::from_scalar(curve, k)
    }

    /// Big-endian scalar padded to `point_size` bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        to_padded_bytes(&self.d, self.public.curve.point_size())
    }

    pub fn public_key(&self) -> &GostPublicKey {
        &self.public
    }

    pub fn curve(&self) -> &Arc<Curve> {
        &self.public.curve
    }

    /// Private scalar `d`
    pub fn scalar(&self) -> &BigUint {
        &self.d
    }

    /// Sign a digest, returning the raw `(r, s)` pair
    pub fn sign_components<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        digest: &[u8],
    ) -> Result<SignatureComponents> {
        let curve = &self.public.curve;
        let q = curve.order();
        let e = reduce_digest(digest, q);

        for attempt in 1..=MAX_SIGN_ATTEMPTS {
            let k = draw_scalar(rng, curve)?;
            if k.is_zero() {
                trace!(attempt, "rejected zero nonce");
                continue;
            }
            let r = curve.mul_base(&k).x() % q;
            if r.is_zero() {
                trace!(attempt, "rejected nonce with r = 0");
                continue;
            }
            let s = (&self.d * &r + &k * &e) % q;
            if s.is_zero() {
                trace!(attempt, "rejected nonce with s = 0");
                continue;
            }
            return Ok(SignatureComponents { r, s });
        }

        warn!(curve = curve.name(), "random source exhausted during signing");
        Err(Error::RandomSourceExhausted {
            context: "GOST sign",
            attempts: MAX_SIGN_ATTEMPTS,
        })
    }

    /// Sign and encode as `r || s`, each padded to the point size
    pub fn sign_bytes<R: RngCore + ?Sized>(&self, rng: &mut R, digest: &[u8]) -> Result<Vec<u8>> {
        self.sign_components(rng, digest)?
            .to_fixed(self.public.curve.point_size())
    }

    /// Sign and encode as DER `SEQUENCE { r, s }`
    pub fn sign_asn1<R: RngCore + ?Sized>(&self, rng: &mut R, digest: &[u8]) -> Result<Vec<u8>> {
        Ok(self.sign_components(rng, digest)?.to_der())
    }
}

impl GostPublicKey {
    /// Wrap a point after checking it lies on the curve
    pub fn from_point(curve: Arc<Curve>, point: AffinePoint) -> Result<Self> {
        if !curve.is_on_curve(&point) {
            return Err(Error::invalid_key("GOST public key", "point is not on the curve"));
        }
        Ok(Self { curve, point })
    }

    /// Decode `X || Y`, each coordinate `point_size` bytes
    pub fn from_bytes(curve: Arc<Curve>, raw: &[u8]) -> Result<Self> {
        let point = curve.decode_coordinates(raw)?;
        Ok(Self { curve, point })
    }

    /// `X || Y`, each padded to the point size
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.curve.encode_coordinates(&self.point)
    }

    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// Check `(r, s)` over `digest`
    ///
    /// Out-of-range components are a rejection, not an error.
    pub fn verify_components(&self, digest: &[u8], sig: &SignatureComponents) -> bool {
        let curve = &self.curve;
        let q = curve.order();
        if sig.r.is_zero() || &sig.r >= q || sig.s.is_zero() || &sig.s >= q {
            return false;
        }

        let e = reduce_digest(digest, q);
        let v = match mod_inverse(&e, q) {
            Some(v) => v,
            None => return false,
        };
        let z1 = (&sig.s * &v) % q;
        let z2 = (q - (&sig.r * &v) % q) % q;

        let c = curve.add(&curve.mul_base(&z1), &curve.mul(&self.point, &z2));
        if c.is_identity() {
            return false;
        }
        c.x() % q == sig.r
    }

    /// Verify an `r || s` signature
    pub fn verify_bytes(&self, digest: &[u8], signature: &[u8]) -> Result<bool> {
        let sig = SignatureComponents::from_fixed(signature, self.curve.point_size())?;
        Ok(self.verify_components(digest, &sig))
    }

    /// Verify a DER `SEQUENCE { r, s }` signature
    pub fn verify_asn1(&self, digest: &[u8], signature: &[u8]) -> Result<bool> {
        let sig = SignatureComponents::from_der(signature)?;
        Ok(self.verify_components(digest, &sig))
    }
}

impl DigestSigner for GostPrivateKey {
    type Signature = SignatureComponents;

    fn sign_digest<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        digest: &[u8],
    ) -> Result<Self::Signature> {
        self.sign_components(rng, digest)
    }
}

impl DigestVerifier for GostPublicKey {
    type Signature = SignatureComponents;

    fn verify_digest(&self, digest: &[u8], signature: &Self::Signature) -> Result<bool> {
        Ok(self.verify_components(digest, signature))
    }
}

#[cfg(test)]
mod tests;

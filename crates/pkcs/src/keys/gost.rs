//! GOST R 34.10 keys in PKCS#8 and SPKI
//!
//! The identifier is `1.2.643.2.2.19` with the curve OID as its
//! parameters. The inner private key reuses the SEC1 layout with the scalar
//! padded to the curve width and the public key as raw `X || Y`; the SPKI
//! bit string is `X || Y` as well.

use std::sync::Arc;

use keyseal_api::Result;
use keyseal_sign::{GostPrivateKey, GostPublicKey};
use zeroize::Zeroizing;

use super::ec::{resolve_curve, Sec1Fields};
use super::{mismatch, PrivateKeyStrategy, PublicKeyStrategy};
use crate::asn1::{oid, oid_parameters, AlgorithmIdentifier};
use crate::curves::CurveRegistry;

fn identifier(curve: &keyseal_algorithms::Curve, curves: &CurveRegistry) -> Result<AlgorithmIdentifier> {
    let named = curves.require_oid(curve)?;
    Ok(AlgorithmIdentifier::new(
        oid::GOST_R3410_2001,
        Some(oid_parameters(&named)),
    ))
}

impl PrivateKeyStrategy for GostPrivateKey {
    fn algorithm_identifier(&self, curves: &CurveRegistry) -> Result<AlgorithmIdentifier> {
        identifier(self.curve(), curves)
    }

    fn private_key_der(&self, curves: &CurveRegistry) -> Result<Zeroizing<Vec<u8>>> {
        let named = curves.require_oid(self.curve())?;
        let scalar = Zeroizing::new(self.to_bytes()?);
        let public = self.public_key().to_bytes()?;
        Ok(Sec1Fields {
            scalar: &scalar,
            curve: Some(named),
            public: Some(&public),
        }
        .encode())
    }

    fn from_private_key_der(
        algorithm: &AlgorithmIdentifier,
        der: &[u8],
        curves: &CurveRegistry,
    ) -> Result<Self> {
        let fields = Sec1Fields::decode(der, "GOST private key")?;
        let curve = resolve_curve(algorithm, fields.curve, curves, "GOST AlgorithmIdentifier")?;
        let key = GostPrivateKey::from_bytes(Arc::clone(&curve), fields.scalar)?;
        if let Some(public) = fields.public {
            if GostPublicKey::from_bytes(curve, public)? != *key.public_key() {
                return Err(mismatch("GOST private key", "embedded public key"));
            }
        }
        Ok(key)
    }
}

impl PublicKeyStrategy for GostPublicKey {
    fn algorithm_identifier(&self, curves: &CurveRegistry) -> Result<AlgorithmIdentifier> {
        identifier(self.curve(), curves)
    }

    fn public_key_bits(&self) -> Result<Vec<u8>> {
        self.to_bytes()
    }

    fn from_public_key_bits(
        algorithm: &AlgorithmIdentifier,
        bits: &[u8],
        curves: &CurveRegistry,
    ) -> Result<Self> {
        let curve = resolve_curve(algorithm, None, curves, "GOST AlgorithmIdentifier")?;
        GostPublicKey::from_bytes(curve, bits)
    }
}

//! Named-curve registry
//!
//! Maps curve parameter sets to their object identifiers in both
//! directions. A [`CurveRegistryBuilder`] collects registrations, then
//! [`build`](CurveRegistryBuilder::build) freezes them into an immutable
//! [`CurveRegistry`] that is shared by `Arc` and read without locking.
//!
//! ```
//! use keyseal_pkcs::curves::{default_curves, CurveRegistryBuilder};
//! use keyseal_params::curves::nist::NIST_P256;
//!
//! let registry = default_curves().unwrap();
//! let oid = "1.2.840.10045.3.1.7".parse().unwrap();
//! assert_eq!(registry.curve_from_oid(&oid).unwrap().name(), "P-256");
//!
//! let custom = CurveRegistryBuilder::new()
//!     .register_params(&NIST_P256, "1.2.840.10045.3.1.7")
//!     .unwrap()
//!     .build();
//! assert_eq!(custom.len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use const_oid::ObjectIdentifier;
use keyseal_algorithms::Curve;
use keyseal_api::{Error, Result};
use keyseal_params::curves::{gost, nist, sm2, CurveParams};
use keyseal_params::oids;
use once_cell::sync::Lazy;
use tracing::debug;

/// Curves and OIDs registered by [`CurveRegistryBuilder::with_defaults`]
pub const DEFAULT_CURVES: [(&CurveParams, &str); 14] = [
    (&gost::GOST_R3410_2001_TEST, oids::GOST_2001_TEST_PARAMSET),
    (&gost::GOST_R3410_2001_CRYPTOPRO_A, oids::GOST_2001_CRYPTOPRO_A_PARAMSET),
    (&gost::GOST_R3410_2001_CRYPTOPRO_B, oids::GOST_2001_CRYPTOPRO_B_PARAMSET),
    (&gost::GOST_R3410_2001_CRYPTOPRO_C, oids::GOST_2001_CRYPTOPRO_C_PARAMSET),
    (&gost::GOST_R3410_2001_CRYPTOPRO_XCHA, oids::GOST_2001_CRYPTOPRO_XCHA_PARAMSET),
    (&gost::GOST_R3410_2001_CRYPTOPRO_XCHB, oids::GOST_2001_CRYPTOPRO_XCHB_PARAMSET),
    (&gost::GOST_R3410_2012_256_A, oids::TC26_GOST_3410_12_256_PARAMSET_A),
    (&gost::GOST_R3410_2012_512_A, oids::TC26_GOST_3410_12_512_PARAMSET_A),
    (&gost::GOST_R3410_2012_512_B, oids::TC26_GOST_3410_12_512_PARAMSET_B),
    (&gost::GOST_R3410_2012_512_C, oids::TC26_GOST_3410_12_512_PARAMSET_C),
    (&sm2::SM2_P256, oids::SM2_P256),
    (&nist::NIST_P256, oids::SECP256R1),
    (&nist::NIST_P384, oids::SECP384R1),
    (&nist::NIST_P521, oids::SECP521R1),
];

/// Collects curve registrations before the registry is frozen
#[derive(Debug, Default)]
pub struct CurveRegistryBuilder {
    entries: Vec<(ObjectIdentifier, Arc<Curve>)>,
}

impl CurveRegistryBuilder {
    /// An empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preloaded with every curve in [`DEFAULT_CURVES`]
    pub fn with_defaults() -> Result<Self> {
        DEFAULT_CURVES
            .iter()
            .try_fold(Self::new(), |builder, (params, oid)| {
                builder.register_params(params, oid)
            })
    }

    /// Register `curve` under `oid`
    ///
    /// Registering an OID or a curve name twice is an invalid-parameter
    /// error; registrations are never silently replaced.
    pub fn register(mut self, curve: Arc<Curve>, oid: ObjectIdentifier) -> Result<Self> {
        if self.entries.iter().any(|(o, _)| *o == oid) {
            return Err(Error::param(
                "curve registration",
                format!("OID {oid} is already registered"),
            ));
        }
        if self.entries.iter().any(|(_, c)| c.name() == curve.name()) {
            return Err(Error::param(
                "curve registration",
                format!("curve {} is already registered", curve.name()),
            ));
        }
        self.entries.push((oid, curve));
        Ok(self)
    }

    /// Build a curve from constant parameters and register it under a dotted OID
    pub fn register_params(self, params: &CurveParams, oid: &str) -> Result<Self> {
        let oid = ObjectIdentifier::new(oid)
            .map_err(|e| Error::param("curve registration", e.to_string()))?;
        let curve = Curve::from_params(params)?;
        self.register(Arc::new(curve), oid)
    }

    /// Freeze the registrations
    pub fn build(self) -> CurveRegistry {
        let mut by_oid = HashMap::with_capacity(self.entries.len());
        let mut by_name = HashMap::with_capacity(self.entries.len());
        for (oid, curve) in self.entries {
            by_name.insert(curve.name(), oid);
            by_oid.insert(oid, curve);
        }
        debug!(curves = by_oid.len(), "curve registry frozen");
        CurveRegistry { by_oid, by_name }
    }
}

/// Immutable OID ↔ curve table
#[derive(Debug)]
pub struct CurveRegistry {
    by_oid: HashMap<ObjectIdentifier, Arc<Curve>>,
    by_name: HashMap<&'static str, ObjectIdentifier>,
}

impl CurveRegistry {
    /// The curve registered under `oid`
    pub fn curve_from_oid(&self, oid: &ObjectIdentifier) -> Option<Arc<Curve>> {
        self.by_oid.get(oid).cloned()
    }

    /// The OID of `curve`, matched on name and domain parameters
    pub fn oid_from_curve(&self, curve: &Curve) -> Option<ObjectIdentifier> {
        let oid = self.by_name.get(curve.name())?;
        match self.by_oid.get(oid) {
            Some(registered) if **registered == *curve => Some(*oid),
            _ => None,
        }
    }

    /// Look a curve up by its parameter-set name
    pub fn curve_by_name(&self, name: &str) -> Option<Arc<Curve>> {
        self.by_name
            .get(name)
            .and_then(|oid| self.by_oid.get(oid))
            .cloned()
    }

    /// Like [`curve_from_oid`](Self::curve_from_oid), as an unsupported-algorithm error
    pub fn require(&self, oid: &ObjectIdentifier) -> Result<Arc<Curve>> {
        self.curve_from_oid(oid).ok_or_else(|| {
            debug!(%oid, "unknown named curve");
            Error::unsupported("named curve", oid.to_string())
        })
    }

    /// Like [`oid_from_curve`](Self::oid_from_curve), as an unsupported-algorithm error
    pub fn require_oid(&self, curve: &Curve) -> Result<ObjectIdentifier> {
        self.oid_from_curve(curve)
            .ok_or_else(|| Error::unsupported("named curve", curve.name()))
    }

    pub fn len(&self) -> usize {
        self.by_oid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_oid.is_empty()
    }

    /// All registrations, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&ObjectIdentifier, &Arc<Curve>)> {
        self.by_oid.iter()
    }
}

static DEFAULT: Lazy<Result<Arc<CurveRegistry>>> =
    Lazy::new(|| CurveRegistryBuilder::with_defaults().map(|b| Arc::new(b.build())));

/// The process-wide registry of [`DEFAULT_CURVES`], built on first use
pub fn default_curves() -> Result<Arc<CurveRegistry>> {
    (*DEFAULT).clone()
}

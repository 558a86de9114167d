//! Shared fixtures and helpers for the keyseal integration tests and benches

pub mod fixtures;

use std::sync::Arc;

use keyseal_algorithms::Curve;
use keyseal_pkcs::keys::{DsaParameters, ElGamalParameters};
use keyseal_pkcs::KeyCodec;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// RFC 2409 second Oakley group, used with `g = 2` for ElGamal
pub const MODP_1024: &str = "ffffffffffffffffc90fdaa22168c234c4c6628b80dc1cd129024e088a67cc74020bbea63b139b22514a08798e3404ddef9519b3cd3a431b302b0a6df25f14374fe1356d6d51c245e485b576625e7ec6f44c42e9a637ed6b0bff5cb6f406b7edee386bfb5a899fa5ae9f24117c4b1fe649286651ece65381ffffffffffffffff";

/// A codec over the default registries
pub fn codec() -> KeyCodec {
    KeyCodec::with_defaults().expect("default registries")
}

/// Deterministic RNG so failures reproduce
pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

pub fn big(hex_str: &str) -> BigUint {
    BigUint::from_bytes_be(&hex::decode(hex_str).expect("hex"))
}

pub fn curve(name: &str) -> Arc<Curve> {
    codec()
        .curves()
        .curve_by_name(name)
        .unwrap_or_else(|| panic!("curve {name} not registered"))
}

/// The domain parameters of the OpenSSL DSA fixture
pub fn dsa_params() -> DsaParameters {
    match codec()
        .parse_pem_public_key(fixtures::DSA_SPKI)
        .expect("DSA fixture")
    {
        keyseal_pkcs::PublicKey::Dsa(key) => key.parameters().clone(),
        other => panic!("expected a DSA key, got {:?}", other.algorithm()),
    }
}

pub fn elgamal_params() -> ElGamalParameters {
    ElGamalParameters::new(big(MODP_1024), BigUint::from(2u32)).expect("Oakley group")
}

/// Names of every curve in the default registry
pub fn curve_names() -> Vec<String> {
    codec()
        .curves()
        .iter()
        .map(|(_, curve)| curve.name().to_string())
        .collect()
}

//! Key containers for the keyseal library
//!
//! - [`curves`]: the OID ↔ named-curve registry
//! - [`cipher`]: content-encryption suites, looked up by name or OID
//! - [`pbe`]: PBES2 (PBKDF2 or Scrypt), PBES1 and the PKCS#12 scheme
//! - [`keys`]: RSA, DSA, ECDSA, SM2, GOST and ElGamal keys and their
//!   per-algorithm container layouts
//! - [`codec`]: PKCS#1, PKCS#8, encrypted PKCS#8, SPKI and traditional
//!   containers behind [`KeyCodec`]
//! - [`pem`]: PEM framing and legacy `DEK-Info` encryption
//!
//! Both registries are built once and frozen; a [`KeyCodec`] shares them by
//! `Arc` and can be used from any number of threads.

#![forbid(unsafe_code)]

pub mod asn1;
pub mod cipher;
pub mod codec;
pub mod curves;
pub mod keys;
pub mod pbe;
pub mod pem;

pub use asn1::AlgorithmIdentifier;
pub use cipher::{default_ciphers, CipherRegistry, CipherRegistryBuilder, PbeCipher};
pub use codec::KeyCodec;
pub use curves::{default_curves, CurveRegistry, CurveRegistryBuilder};
pub use keys::{KeyAlgorithm, PrivateKey, PublicKey};
pub use pbe::{EncryptionOpts, KdfOpts, PbeOpts};
pub use pem::PemBlock;

//! Primitives for the keyseal library
//!
//! This crate holds everything below the key-container codec:
//!
//! - BER→DER normalization and a strict DER reader/writer
//! - the GOST 28147-89 block cipher, adapters for the RustCrypto block
//!   ciphers, the CBC/CFB/OFB modes over them and GCM
//! - short Weierstrass curve arithmetic over arbitrary-precision integers
//! - big-integer helpers and probabilistic primality testing
//! - hash dispatch and the password KDFs (PBKDF1, PBKDF2, Scrypt, the PKCS#12
//!   KDF and OpenSSL's `EVP_BytesToKey`)

#![forbid(unsafe_code)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Authenticated encryption
pub mod aead;
pub use aead::Gcm;

// Block ciphers and modes
pub mod block;
pub use block::{BlockCipher, Cbc, Cfb, CipherAlgorithm, Gost28147, Ofb};

// ASN.1 encodings
pub mod encoding;
pub use encoding::{ber_to_der, DerReader, DerWriter};

// Elliptic curve arithmetic
pub mod ec;
pub use ec::{AffinePoint, Curve};

// Hash dispatch
pub mod hash;
pub use hash::HashAlgorithm;

// Password-based key derivation
pub mod kdf;
pub use kdf::PasswordKdf;

// Big-integer helpers
pub mod math;

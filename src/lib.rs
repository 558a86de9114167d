//! # keyseal
//!
//! Private and public key containers for RSA, DSA, ECDSA, SM2, GOST R 34.10
//! and ElGamal keys, with password protection.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! keyseal = "0.3"
//! ```
//!
//! ## Features
//!
//! - `algorithms`: BER/DER, GOST 28147-89 and the other block ciphers, curve
//!   arithmetic and the password KDFs
//! - `sign`: GOST R 34.10 signatures
//! - `pkcs`: PKCS#1, PKCS#8, encrypted PKCS#8, SPKI and PEM containers
//! - `full` (default): all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`keyseal-api`]: error type and the seam traits
//! - [`keyseal-params`]: curve domain parameters, S-boxes and OIDs
//! - [`keyseal-algorithms`]: primitives below the codec
//! - [`keyseal-sign`]: GOST R 34.10 signatures
//! - [`keyseal-pkcs`]: registries, keys and the container codec
//!
//! ## Example
//!
//! ```
//! use keyseal::prelude::*;
//! use keyseal::pkcs::keys::EcPrivateKey;
//! use rand_chacha::rand_core::SeedableRng;
//!
//! let codec = KeyCodec::with_defaults()?;
//! let curve = codec.curves().curve_by_name("P-256").expect("registered");
//! let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
//! let key = PrivateKey::Ec(EcPrivateKey::generate(curve, &mut rng)?);
//!
//! let pem = codec.encrypted_private_key_to_pem(&key, b"secret", &PbeOpts::default(), &mut rng)?;
//! let back = codec.parse_pem_private_key(&pem, Some(b"secret".as_slice()))?;
//! assert_eq!(back.algorithm(), KeyAlgorithm::Ecdsa);
//! # Ok::<(), keyseal::api::Error>(())
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use keyseal_api as api;
pub use keyseal_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use keyseal_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use keyseal_sign as sign;

#[cfg(feature = "pkcs")]
pub use keyseal_pkcs as pkcs;

// Key generation and signing take a `rand` RNG; key bytes come back `Zeroizing`
#[cfg(feature = "pkcs")]
pub use rand;
pub use zeroize;

/// Common imports for keyseal users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, ErrorKind, Result, ResultExt};

    // Seam traits
    pub use crate::api::{BlockCipher, CipherAlgorithm, DigestSigner, DigestVerifier};
    pub use zeroize::Zeroizing;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{ber_to_der, Gost28147, HashAlgorithm, PasswordKdf};

    #[cfg(feature = "sign")]
    pub use crate::sign::{GostPrivateKey, GostPublicKey, SignatureComponents};

    #[cfg(feature = "pkcs")]
    pub use crate::pkcs::{
        default_ciphers, default_curves, CipherRegistry, CurveRegistry, KeyAlgorithm, KeyCodec,
        PbeOpts, PemBlock, PrivateKey, PublicKey,
    };
}

//! Public API traits and error types for the keyseal library
//!
//! This crate provides the shared error type used by every keyseal crate and
//! the small set of traits that separate the codec layer from the primitives
//! it drives (block ciphers and digest signers).

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result, ResultExt};

pub use traits::{BlockCipher, CipherAlgorithm, DigestSigner, DigestVerifier};

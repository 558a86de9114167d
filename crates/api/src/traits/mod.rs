//! Trait definitions for the keyseal primitives

pub mod block;
pub mod signature;

pub use block::{BlockCipher, CipherAlgorithm};
pub use signature::{DigestSigner, DigestVerifier};

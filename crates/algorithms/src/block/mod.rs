//! Block cipher implementations and modes of operation
//!
//! GOST 28147-89 is implemented here; AES, DES/3DES and SM4 come from the
//! RustCrypto crates and are exposed through the same [`BlockCipher`] trait
//! by the adapters module, so every mode works over any of them.

pub mod adapters;
pub mod gost28147;
pub mod modes;

pub use keyseal_api::traits::{BlockCipher, CipherAlgorithm};

pub use adapters::{
    Aes128Block, Aes192Block, Aes256Block, DesBlock, RustCryptoBlock, Sm4Block, TdesEde3Block,
};
pub use gost28147::Gost28147;
pub use modes::{Cbc, Cfb, Ofb};

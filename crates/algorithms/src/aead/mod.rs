//! Authenticated encryption
//!
//! Only GCM is needed by the key-container schemes; it runs over the same
//! [`BlockCipher`](crate::block::BlockCipher) adapters as the classic modes.

pub mod gcm;

pub use gcm::{Gcm, GCM_NONCE_SIZE, GCM_TAG_SIZE};

//! Constants for symmetric ciphers

pub mod gost28147;

/// GOST 28147-89 key size in bytes
pub const GOST28147_KEY_SIZE: usize = 32;

/// GOST 28147-89 block size in bytes
pub const GOST28147_BLOCK_SIZE: usize = 8;

/// DES key size in bytes
pub const DES_KEY_SIZE: usize = 8;

/// Triple-DES (EDE3) key size in bytes
pub const DES_EDE3_KEY_SIZE: usize = 24;

/// DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES and SM4 block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// SM4 key size in bytes
pub const SM4_KEY_SIZE: usize = 16;

/// GCM nonce size in bytes
pub const GCM_NONCE_SIZE: usize = 12;

/// GCM tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;

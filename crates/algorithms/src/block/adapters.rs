//! RustCrypto block ciphers behind the [`BlockCipher`] trait

use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, BlockEncrypt, BlockSizeUser, KeyInit, KeySizeUser};

use super::BlockCipher;
use crate::error::{validate, Error, Result};

/// Wraps any RustCrypto block cipher
#[derive(Clone)]
pub struct RustCryptoBlock<C> {
    inner: C,
}

/// AES-128
pub type Aes128Block = RustCryptoBlock<aes::Aes128>;
/// AES-192
pub type Aes192Block = RustCryptoBlock<aes::Aes192>;
/// AES-256
pub type Aes256Block = RustCryptoBlock<aes::Aes256>;
/// Single DES
pub type DesBlock = RustCryptoBlock<des::Des>;
/// Three-key triple DES (EDE)
pub type TdesEde3Block = RustCryptoBlock<des::TdesEde3>;
/// SM4
pub type Sm4Block = RustCryptoBlock<sm4::Sm4>;

impl<C: KeyInit> RustCryptoBlock<C> {
    /// Key the cipher, failing with a construction error on a bad key size
    pub fn new(key: &[u8]) -> Result<Self> {
        let inner = C::new_from_slice(key).map_err(|_| {
            Error::construction(
                "block cipher key",
                format!("expected {} bytes, got {}", C::key_size(), key.len()),
            )
        })?;
        Ok(Self { inner })
    }

    /// Key size in bytes
    pub fn key_size() -> usize {
        <C as KeySizeUser>::key_size()
    }
}

impl<C: BlockEncrypt + BlockDecrypt> BlockCipher for RustCryptoBlock<C> {
    fn block_size(&self) -> usize {
        <C as BlockSizeUser>::block_size()
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("cipher block", block.len(), self.block_size())?;
        self.inner.encrypt_block(GenericArray::from_mut_slice(block));
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("cipher block", block.len(), self.block_size())?;
        self.inner.decrypt_block(GenericArray::from_mut_slice(block));
        Ok(())
    }
}

//! Cipher Block Chaining (CBC) mode implementation
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the initialization vector.
//! Follows NIST SP 800-38A. Input must already be padded to whole blocks.

use zeroize::Zeroizing;

use super::super::BlockCipher;
use crate::error::{validate, Error, Result};

/// CBC mode over any block cipher
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    iv: Zeroizing<Vec<u8>>,
}

impl<B: BlockCipher> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be exactly one block long.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("CBC initialization vector", iv.len(), cipher.block_size())?;

        Ok(Self {
            cipher,
            iv: Zeroizing::new(iv.to_vec()),
        })
    }

    /// Encrypts a message using CBC mode
    ///
    /// The plaintext must be a multiple of the block size.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        if plaintext.len() % block_size != 0 {
            return Err(Error::InvalidLength {
                context: "CBC plaintext",
                expected: (plaintext.len() / block_size + 1) * block_size,
                actual: plaintext.len(),
            });
        }

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut prev_block = Zeroizing::new(self.iv.to_vec());

        for chunk in plaintext.chunks(block_size) {
            let mut block = Zeroizing::new(chunk.to_vec());

            // XOR with previous ciphertext block (or IV for the first block)
            for (b, p) in block.iter_mut().zip(prev_block.iter()) {
                *b ^= p;
            }

            self.cipher.encrypt_block(&mut block)?;

            ciphertext.extend_from_slice(&block);
            prev_block.copy_from_slice(&block);
        }

        Ok(ciphertext)
    }

    /// Decrypts a message using CBC mode
    ///
    /// A ciphertext that is not a whole number of blocks is a decryption
    /// failure.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        if ciphertext.len() % block_size != 0 {
            return Err(Error::decryption(
                "CBC ciphertext",
                format!(
                    "length {} is not a multiple of the {}-byte block",
                    ciphertext.len(),
                    block_size
                ),
            ));
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev_block = Zeroizing::new(self.iv.to_vec());

        for chunk in ciphertext.chunks(block_size) {
            let mut block = Zeroizing::new(chunk.to_vec());
            self.cipher.decrypt_block(&mut block)?;

            for (b, p) in block.iter_mut().zip(prev_block.iter()) {
                *b ^= p;
            }

            plaintext.extend_from_slice(&block);
            prev_block.copy_from_slice(chunk);
        }

        Ok(plaintext)
    }
}

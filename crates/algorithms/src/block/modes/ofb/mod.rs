//! Output Feedback (OFB) mode
//!
//! The keystream is the iterated encryption of the IV, independent of the
//! data, so encryption and decryption are the same operation.

use zeroize::Zeroizing;

use super::super::BlockCipher;
use crate::error::{validate, Result};

/// OFB mode over any block cipher
pub struct Ofb<B: BlockCipher> {
    cipher: B,
    iv: Zeroizing<Vec<u8>>,
}

impl<B: BlockCipher> Ofb<B> {
    /// Creates a new OFB mode instance; the IV must be one block long
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("OFB initialization vector", iv.len(), cipher.block_size())?;

        Ok(Self {
            cipher,
            iv: Zeroizing::new(iv.to_vec()),
        })
    }

    /// XOR `data` with the keystream
    pub fn apply_keystream(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut register = Zeroizing::new(self.iv.to_vec());
        let mut out = Vec::with_capacity(data.len());

        for chunk in data.chunks(self.cipher.block_size()) {
            self.cipher.encrypt_block(&mut register)?;
            out.extend(chunk.iter().zip(register.iter()).map(|(d, k)| d ^ k));
        }

        Ok(out)
    }

    /// Encrypt a message of any length
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream(plaintext)
    }

    /// Decrypt a message of any length
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.apply_keystream(ciphertext)
    }
}

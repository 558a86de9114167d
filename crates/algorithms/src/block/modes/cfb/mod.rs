//! Cipher Feedback (CFB) mode with full-block feedback
//!
//! The keystream for each block is the encryption of the previous
//! ciphertext block (the IV for the first). This is also the "gamming with
//! feedback" mode of GOST 28147-89. A trailing partial block is allowed.

use zeroize::Zeroizing;

use super::super::BlockCipher;
use crate::error::{validate, Result};

/// CFB mode over any block cipher
pub struct Cfb<B: BlockCipher> {
    cipher: B,
    iv: Zeroizing<Vec<u8>>,
}

impl<B: BlockCipher> Cfb<B> {
    /// Creates a new CFB mode instance; the IV must be one block long
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("CFB initialization vector", iv.len(), cipher.block_size())?;

        Ok(Self {
            cipher,
            iv: Zeroizing::new(iv.to_vec()),
        })
    }

    /// Encrypt a message of any length
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut register = Zeroizing::new(self.iv.to_vec());
        let mut out = Vec::with_capacity(plaintext.len());

        for chunk in plaintext.chunks(self.cipher.block_size()) {
            self.cipher.encrypt_block(&mut register)?;
            let start = out.len();
            out.extend(chunk.iter().zip(register.iter()).map(|(p, k)| p ^ k));
            register[..chunk.len()].copy_from_slice(&out[start..]);
        }

        Ok(out)
    }

    /// Decrypt a message of any length
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut register = Zeroizing::new(self.iv.to_vec());
        let mut out = Vec::with_capacity(ciphertext.len());

        for chunk in ciphertext.chunks(self.cipher.block_size()) {
            self.cipher.encrypt_block(&mut register)?;
            out.extend(chunk.iter().zip(register.iter()).map(|(c, k)| c ^ k));
            register[..chunk.len()].copy_from_slice(chunk);
        }

        Ok(out)
    }
}

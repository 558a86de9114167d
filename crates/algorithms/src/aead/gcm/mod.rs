//! Galois/Counter Mode (GCM) over any 128-bit block cipher
//!
//! NIST SP 800-38D. Used by the password-based encryption schemes for
//! AES-GCM and SM4-GCM; the output is the ciphertext followed by the tag.

pub mod ghash;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::block::BlockCipher;
use crate::error::{Error, Result};
pub use ghash::{process_ghash, GHash};

/// Block size required of the underlying cipher
pub const GCM_BLOCK_SIZE: usize = 16;
/// Full tag length in bytes
pub const GCM_TAG_SIZE: usize = 16;
/// Nonce length that takes the fast J0 path
pub const GCM_NONCE_SIZE: usize = 12;

/// GCM instance bound to one key and one nonce
pub struct Gcm<B: BlockCipher> {
    cipher: B,
    h: Zeroizing<[u8; GCM_BLOCK_SIZE]>,
    j0: Zeroizing<[u8; GCM_BLOCK_SIZE]>,
    tag_len: usize,
}

impl<B: BlockCipher> Gcm<B> {
    /// Create a GCM instance with the full 16-byte tag
    pub fn new(cipher: B, nonce: &[u8]) -> Result<Self> {
        Self::new_with_tag_len(cipher, nonce, GCM_TAG_SIZE)
    }

    /// Create a GCM instance with a truncated tag of 12..=16 bytes
    pub fn new_with_tag_len(cipher: B, nonce: &[u8], tag_len: usize) -> Result<Self> {
        if cipher.block_size() != GCM_BLOCK_SIZE {
            return Err(Error::construction(
                "GCM",
                format!("needs a 16-byte block cipher, got {}", cipher.block_size()),
            ));
        }
        if nonce.is_empty() {
            return Err(Error::construction("GCM", "empty nonce"));
        }
        if !(12..=GCM_TAG_SIZE).contains(&tag_len) {
            return Err(Error::construction(
                "GCM",
                format!("tag length {tag_len} outside 12..=16"),
            ));
        }

        let mut h = Zeroizing::new([0u8; GCM_BLOCK_SIZE]);
        cipher.encrypt_block(&mut h[..])?;

        let mut j0 = Zeroizing::new([0u8; GCM_BLOCK_SIZE]);
        if nonce.len() == GCM_NONCE_SIZE {
            j0[..GCM_NONCE_SIZE].copy_from_slice(nonce);
            j0[GCM_BLOCK_SIZE - 1] = 1;
        } else {
            *j0 = process_ghash(&h, &[], nonce)?;
        }

        Ok(Self {
            cipher,
            h,
            j0,
            tag_len,
        })
    }

    /// Tag length in bytes
    pub fn tag_len(&self) -> usize {
        self.tag_len
    }

    /// Encrypt `plaintext`, returning ciphertext || tag
    pub fn internal_encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        let aad = aad.unwrap_or(&[]);
        let mut out = self.ctr(plaintext)?;
        let tag = self.tag(aad, &out)?;
        out.extend_from_slice(&tag[..self.tag_len]);
        Ok(out)
    }

    /// Check the trailing tag and decrypt
    ///
    /// A short input or a tag mismatch is a decryption failure; no plaintext
    /// is released in either case.
    pub fn internal_decrypt(&self, ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        if ciphertext.len() < self.tag_len {
            return Err(Error::decryption(
                "GCM",
                format!("input shorter than the {}-byte tag", self.tag_len),
            ));
        }
        let aad = aad.unwrap_or(&[]);
        let (body, received) = ciphertext.split_at(ciphertext.len() - self.tag_len);

        let expected = self.tag(aad, body)?;
        if !bool::from(expected[..self.tag_len].ct_eq(received)) {
            return Err(Error::decryption("GCM", "authentication tag mismatch"));
        }

        self.ctr(body)
    }

    fn tag(&self, aad: &[u8], ciphertext: &[u8]) -> Result<[u8; GCM_BLOCK_SIZE]> {
        let mut s = process_ghash(&self.h, aad, ciphertext)?;
        let mut ek = *self.j0;
        self.cipher.encrypt_block(&mut ek)?;
        for (a, b) in s.iter_mut().zip(ek.iter()) {
            *a ^= b;
        }
        Ok(s)
    }

    // GCTR starting at inc32(J0)
    fn ctr(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut counter = *self.j0;
        let mut out = Vec::with_capacity(input.len());
        for chunk in input.chunks(GCM_BLOCK_SIZE) {
            inc32(&mut counter);
            let mut ks = Zeroizing::new(counter);
            self.cipher.encrypt_block(&mut ks[..])?;
            out.extend(chunk.iter().zip(ks.iter()).map(|(p, k)| p ^ k));
        }
        Ok(out)
    }
}

fn inc32(block: &mut [u8; GCM_BLOCK_SIZE]) {
    let mut tail = [0u8; 4];
    tail.copy_from_slice(&block[12..]);
    let next = u32::from_be_bytes(tail).wrapping_add(1);
    block[12..].copy_from_slice(&next.to_be_bytes());
}

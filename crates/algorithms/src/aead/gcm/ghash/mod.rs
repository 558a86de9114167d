//! GHASH universal hash over GF(2^128)
//!
//! Bit order follows NIST SP 800-38D: the first byte's most significant bit
//! is the coefficient of x^0, so the block `80 00 .. 00` is the identity.

use zeroize::Zeroize;

use crate::error::Result;

const BLOCK: usize = 16;

/// Reduction constant R = 11100001 || 0^120
const R: u128 = 0xe1 << 120;

/// Incremental GHASH state keyed by the hash subkey H
pub struct GHash {
    h: u128,
    y: u128,
}

impl GHash {
    /// Start a GHASH computation under subkey `h`
    pub fn new(h: &[u8; BLOCK]) -> Self {
        Self {
            h: u128::from_be_bytes(*h),
            y: 0,
        }
    }

    /// Multiply two field elements
    ///
    /// Runs a fixed 128 iterations and selects with masks instead of
    /// branching on key bits.
    pub fn gf_multiply(x: &[u8; BLOCK], y: &[u8; BLOCK]) -> [u8; BLOCK] {
        Self::mul(u128::from_be_bytes(*x), u128::from_be_bytes(*y)).to_be_bytes()
    }

    fn mul(x: u128, y: u128) -> u128 {
        let mut z = 0u128;
        let mut v = y;
        for i in 0..128 {
            let bit = (x >> (127 - i)) & 1;
            z ^= v & 0u128.wrapping_sub(bit);
            let carry = v & 1;
            v = (v >> 1) ^ (R & 0u128.wrapping_sub(carry));
        }
        z
    }

    /// Absorb `data`, zero-padding the final partial block
    pub fn update(&mut self, data: &[u8]) {
        for chunk in data.chunks(BLOCK) {
            let mut block = [0u8; BLOCK];
            block[..chunk.len()].copy_from_slice(chunk);
            self.y = Self::mul(self.y ^ u128::from_be_bytes(block), self.h);
            block.zeroize();
        }
    }

    /// Fold in the bit lengths of the two inputs and return the digest
    pub fn finalize(mut self, aad_len: usize, data_len: usize) -> [u8; BLOCK] {
        let lengths = ((aad_len as u128 * 8) << 64) | (data_len as u128 * 8);
        self.y = Self::mul(self.y ^ lengths, self.h);
        self.y.to_be_bytes()
    }
}

impl Drop for GHash {
    fn drop(&mut self) {
        self.h.zeroize();
        self.y.zeroize();
    }
}

/// GHASH(H, A, C) in one call
pub fn process_ghash(h: &[u8; BLOCK], aad: &[u8], ciphertext: &[u8]) -> Result<[u8; BLOCK]> {
    let mut ghash = GHash::new(h);
    ghash.update(aad);
    ghash.update(ciphertext);
    Ok(ghash.finalize(aad.len(), ciphertext.len()))
}

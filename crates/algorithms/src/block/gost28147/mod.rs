//! GOST 28147-89 block cipher
//!
//! A 32-round Feistel network over 64-bit blocks with a 256-bit key. The
//! round function adds a key word to one half, substitutes each nibble
//! through a caller-supplied S-box and rotates the result left by 11 bits.
//!
//! Key words and block halves are read little-endian, matching the byte
//! order of RFC 5830 implementations. The S-box is expanded once at
//! construction into four byte-indexed tables so a round costs four lookups.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Error, Result};
use keyseal_params::symmetric::gost28147::{SBOX_CRYPTOPRO_A, SBOX_TC26_Z};
use keyseal_params::symmetric::{GOST28147_BLOCK_SIZE, GOST28147_KEY_SIZE};

/// Key word order for the 32 encryption rounds
const ENCRYPT_SCHEDULE: [usize; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, //
    0, 1, 2, 3, 4, 5, 6, 7, //
    0, 1, 2, 3, 4, 5, 6, 7, //
    7, 6, 5, 4, 3, 2, 1, 0,
];

/// Key word order for the 32 decryption rounds
const DECRYPT_SCHEDULE: [usize; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, //
    7, 6, 5, 4, 3, 2, 1, 0, //
    7, 6, 5, 4, 3, 2, 1, 0, //
    7, 6, 5, 4, 3, 2, 1, 0,
];

/// GOST 28147-89 cipher instance
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Gost28147 {
    key: [u32; 8],
    // tables[0] substitutes the most significant byte of the round input
    tables: [[u8; 256]; 4],
}

impl CipherAlgorithm for Gost28147 {
    const KEY_SIZE: usize = GOST28147_KEY_SIZE;
    const BLOCK_SIZE: usize = GOST28147_BLOCK_SIZE;

    fn name() -> &'static str {
        "GOST28147-89"
    }
}

impl Gost28147 {
    /// Create a cipher from a 32-byte key and an 8×16 substitution box
    ///
    /// Fails with a construction error if the key is not exactly 32 bytes,
    /// the S-box does not have exactly 8 rows, or any S-box entry does not
    /// fit in four bits.
    pub fn new(key: &[u8], sbox: &[[u8; 16]]) -> Result<Self> {
        if key.len() != GOST28147_KEY_SIZE {
            return Err(Error::construction(
                "GOST 28147-89 key",
                format!("expected {} bytes, got {}", GOST28147_KEY_SIZE, key.len()),
            ));
        }
        if sbox.len() != 8 {
            return Err(Error::construction(
                "GOST 28147-89 S-box",
                format!("expected 8 rows, got {}", sbox.len()),
            ));
        }
        if sbox.iter().flatten().any(|&v| v > 0x0f) {
            return Err(Error::construction(
                "GOST 28147-89 S-box",
                "entries must be 4-bit values",
            ));
        }

        let mut words = [0u32; 8];
        for (word, chunk) in words.iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        Ok(Self {
            key: words,
            tables: expand_sbox(sbox),
        })
    }

    /// Create a cipher using the id-tc26-gost-28147-param-Z S-box
    pub fn with_param_z(key: &[u8]) -> Result<Self> {
        Self::new(key, &SBOX_TC26_Z)
    }

    /// Create a cipher using the CryptoPro-A S-box
    pub fn with_cryptopro_a(key: &[u8]) -> Result<Self> {
        Self::new(key, &SBOX_CRYPTOPRO_A)
    }

    /// Encrypt the first block of `src` into the first block of `dst`
    ///
    /// # Panics
    ///
    /// Panics if either buffer is shorter than one block. Distinct `dst` and
    /// `src` borrows cannot overlap; use [`encrypt_in_place`](Self::encrypt_in_place)
    /// to encrypt a buffer onto itself.
    pub fn encrypt(&self, dst: &mut [u8], src: &[u8]) {
        assert!(src.len() >= GOST28147_BLOCK_SIZE, "gost28147: input not full block");
        assert!(dst.len() >= GOST28147_BLOCK_SIZE, "gost28147: output not full block");
        let out = self.crypt(load_block(src), &ENCRYPT_SCHEDULE);
        dst[..GOST28147_BLOCK_SIZE].copy_from_slice(&out);
    }

    /// Decrypt the first block of `src` into the first block of `dst`
    ///
    /// # Panics
    ///
    /// Panics if either buffer is shorter than one block.
    pub fn decrypt(&self, dst: &mut [u8], src: &[u8]) {
        assert!(src.len() >= GOST28147_BLOCK_SIZE, "gost28147: input not full block");
        assert!(dst.len() >= GOST28147_BLOCK_SIZE, "gost28147: output not full block");
        let out = self.crypt(load_block(src), &DECRYPT_SCHEDULE);
        dst[..GOST28147_BLOCK_SIZE].copy_from_slice(&out);
    }

    /// Encrypt the first block of `block` onto itself
    ///
    /// # Panics
    ///
    /// Panics if `block` is shorter than one block.
    pub fn encrypt_in_place(&self, block: &mut [u8]) {
        assert!(block.len() >= GOST28147_BLOCK_SIZE, "gost28147: input not full block");
        let out = self.crypt(load_block(block), &ENCRYPT_SCHEDULE);
        block[..GOST28147_BLOCK_SIZE].copy_from_slice(&out);
    }

    /// Decrypt the first block of `block` onto itself
    ///
    /// # Panics
    ///
    /// Panics if `block` is shorter than one block.
    pub fn decrypt_in_place(&self, block: &mut [u8]) {
        assert!(block.len() >= GOST28147_BLOCK_SIZE, "gost28147: input not full block");
        let out = self.crypt(load_block(block), &DECRYPT_SCHEDULE);
        block[..GOST28147_BLOCK_SIZE].copy_from_slice(&out);
    }

    /// Round function: substitute, then rotate left by 11
    #[inline(always)]
    fn f(&self, x: u32) -> u32 {
        let y = (self.tables[0][(x >> 24) as usize & 0xff] as u32) << 24
            | (self.tables[1][(x >> 16) as usize & 0xff] as u32) << 16
            | (self.tables[2][(x >> 8) as usize & 0xff] as u32) << 8
            | self.tables[3][x as usize & 0xff] as u32;
        y.rotate_left(11)
    }

    fn crypt(&self, (mut n1, mut n2): (u32, u32), schedule: &[usize; 32]) -> [u8; 8] {
        for (round, &k) in schedule.iter().enumerate() {
            if round % 2 == 0 {
                n2 ^= self.f(n1.wrapping_add(self.key[k]));
            } else {
                n1 ^= self.f(n2.wrapping_add(self.key[k]));
            }
        }

        // The final swap is folded into the output order
        let mut out = [0u8; 8];
        out[..4].copy_from_slice(&n2.to_le_bytes());
        out[4..].copy_from_slice(&n1.to_le_bytes());
        out
    }
}

impl BlockCipher for Gost28147 {
    fn block_size(&self) -> usize {
        GOST28147_BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("GOST 28147-89 block", block.len(), GOST28147_BLOCK_SIZE)?;
        self.encrypt_in_place(block);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("GOST 28147-89 block", block.len(), GOST28147_BLOCK_SIZE)?;
        self.decrypt_in_place(block);
        Ok(())
    }
}

/// Expand 8 rows of 4-bit substitutions into four byte tables
///
/// Row `i` substitutes nibble `i` of the round input, so the table for the
/// top byte combines rows 7 (high nibble) and 6 (low nibble).
fn expand_sbox(sbox: &[[u8; 16]]) -> [[u8; 256]; 4] {
    let mut tables = [[0u8; 256]; 4];
    for i in 0..256 {
        let (hi, lo) = (i >> 4, i & 0x0f);
        tables[0][i] = sbox[7][hi] << 4 | sbox[6][lo];
        tables[1][i] = sbox[5][hi] << 4 | sbox[4][lo];
        tables[2][i] = sbox[3][hi] << 4 | sbox[2][lo];
        tables[3][i] = sbox[1][hi] << 4 | sbox[0][lo];
    }
    tables
}

#[inline(always)]
fn load_block(src: &[u8]) -> (u32, u32) {
    let n1 = u32::from_le_bytes([src[0], src[1], src[2], src[3]]);
    let n2 = u32::from_le_bytes([src[4], src[5], src[6], src[7]]);
    (n1, n2)
}

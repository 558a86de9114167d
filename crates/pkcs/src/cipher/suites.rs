//! Built-in cipher suites

use std::sync::Arc;

use const_oid::ObjectIdentifier;
use keyseal_algorithms::block::modes::{pkcs7_pad, pkcs7_unpad};
use keyseal_algorithms::block::{
    Aes128Block, Aes192Block, Aes256Block, BlockCipher, Cbc, Cfb, DesBlock, Gost28147, Ofb,
    Sm4Block, TdesEde3Block,
};
use keyseal_algorithms::encoding::{tag, DerReader, DerWriter};
use keyseal_algorithms::Gcm;
use keyseal_api::{Error, Result};
use keyseal_params::oids;
use keyseal_params::symmetric::gost28147::{SBOX_CRYPTOPRO_A, SBOX_TC26_Z};
use keyseal_params::symmetric::{GCM_NONCE_SIZE, GCM_TAG_SIZE, GOST28147_BLOCK_SIZE, GOST28147_KEY_SIZE};

use super::PbeCipher;
use crate::asn1::oid;

/// Block ciphers available to [`BlockSuite`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAlgorithm {
    Des,
    TdesEde3,
    Aes128,
    Aes192,
    Aes256,
    Sm4,
}

impl BlockAlgorithm {
    pub fn key_size(self) -> usize {
        match self {
            Self::Des => 8,
            Self::TdesEde3 => 24,
            Self::Aes128 | Self::Sm4 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    pub fn block_size(self) -> usize {
        match self {
            Self::Des | Self::TdesEde3 => 8,
            _ => 16,
        }
    }

    /// Key the cipher
    pub fn instantiate(self, key: &[u8]) -> Result<Box<dyn BlockCipher>> {
        if key.len() != self.key_size() {
            return Err(Error::construction(
                "cipher key",
                format!("expected {} bytes, got {}", self.key_size(), key.len()),
            ));
        }
        Ok(match self {
            Self::Des => Box::new(DesBlock::new(key)?),
            Self::TdesEde3 => Box::new(TdesEde3Block::new(key)?),
            Self::Aes128 => Box::new(Aes128Block::new(key)?),
            Self::Aes192 => Box::new(Aes192Block::new(key)?),
            Self::Aes256 => Box::new(Aes256Block::new(key)?),
            Self::Sm4 => Box::new(Sm4Block::new(key)?),
        })
    }
}

/// Modes a [`BlockSuite`] can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    /// CBC with PKCS#7 padding
    Cbc,
    Cfb,
    Ofb,
    /// GCM with a 12-byte nonce and 16-byte tag appended to the ciphertext
    Gcm,
}

/// A block cipher in one mode under one OID
#[derive(Debug, Clone)]
pub struct BlockSuite {
    name: &'static str,
    oid: ObjectIdentifier,
    block: BlockAlgorithm,
    mode: CipherMode,
}

impl BlockSuite {
    pub fn new(name: &'static str, oid: ObjectIdentifier, block: BlockAlgorithm, mode: CipherMode) -> Self {
        Self {
            name,
            oid,
            block,
            mode,
        }
    }

    pub fn block(&self) -> BlockAlgorithm {
        self.block
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }
}

impl PbeCipher for BlockSuite {
    fn name(&self) -> &str {
        self.name
    }

    fn oid(&self) -> ObjectIdentifier {
        self.oid
    }

    fn key_size(&self) -> usize {
        self.block.key_size()
    }

    fn iv_size(&self) -> usize {
        match self.mode {
            CipherMode::Gcm => GCM_NONCE_SIZE,
            _ => self.block.block_size(),
        }
    }

    fn is_block_chaining(&self) -> bool {
        self.mode == CipherMode::Cbc
    }

    fn encrypt_with_iv(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = self.block.instantiate(key)?;
        match self.mode {
            CipherMode::Cbc => {
                Cbc::new(cipher, iv)?.encrypt(&pkcs7_pad(plaintext, self.block.block_size()))
            }
            CipherMode::Cfb => Cfb::new(cipher, iv)?.encrypt(plaintext),
            CipherMode::Ofb => Ofb::new(cipher, iv)?.encrypt(plaintext),
            CipherMode::Gcm => Gcm::new(cipher, iv)?.internal_encrypt(plaintext, None),
        }
    }

    fn decrypt_with_iv(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let cipher = self.block.instantiate(key)?;
        match self.mode {
            CipherMode::Cbc => {
                let padded = Cbc::new(cipher, iv)?.decrypt(ciphertext)?;
                pkcs7_unpad(&padded, self.block.block_size())
            }
            CipherMode::Cfb => Cfb::new(cipher, iv)?.decrypt(ciphertext),
            CipherMode::Ofb => Ofb::new(cipher, iv)?.decrypt(ciphertext),
            CipherMode::Gcm => Gcm::new(cipher, iv)?.internal_decrypt(ciphertext, None),
        }
    }

    fn encode_parameters(&self, iv: &[u8]) -> Vec<u8> {
        let mut w = DerWriter::new();
        match self.mode {
            // GCMParameters ::= SEQUENCE { aes-nonce OCTET STRING, aes-ICVlen INTEGER }
            CipherMode::Gcm => w.write_sequence(|w| {
                w.write_octet_string(iv);
                w.write_uint(GCM_TAG_SIZE as u64);
            }),
            _ => w.write_octet_string(iv),
        }
        w.into_bytes()
    }

    fn decode_parameters(&self, parameters: Option<&[u8]>) -> Result<Vec<u8>> {
        let raw = parameters.ok_or_else(|| Error::malformed(self.name, "missing cipher parameters"))?;
        let mut r = DerReader::new(raw);
        let iv = match (self.mode, r.peek_tag()) {
            // Some writers store the bare nonce; the full tag is implied
            (CipherMode::Gcm, Some(tag::SEQUENCE)) => {
                let mut seq = r.read_sequence()?;
                let nonce = seq.read_octet_string()?;
                if !seq.is_empty() {
                    let icv_len = seq.read_u64()?;
                    if icv_len != GCM_TAG_SIZE as u64 {
                        return Err(Error::unsupported(
                            "GCM tag length",
                            icv_len.to_string(),
                        ));
                    }
                }
                seq.finish("GCM parameters")?;
                nonce
            }
            _ => r.read_octet_string()?,
        };
        r.finish("cipher parameters")?;
        if self.mode != CipherMode::Gcm && iv.len() != self.iv_size() {
            return Err(Error::malformed(
                self.name,
                format!("IV must be {} bytes, got {}", self.iv_size(), iv.len()),
            ));
        }
        Ok(iv.to_vec())
    }
}

/// S-box parameter sets for GOST 28147-89
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GostSbox {
    /// id-tc26-gost-28147-param-Z
    Tc26Z,
    /// id-Gost28147-89-CryptoPro-A-ParamSet
    CryptoProA,
}

impl GostSbox {
    pub fn oid(self) -> ObjectIdentifier {
        match self {
            Self::Tc26Z => oid::GOST28147_PARAM_Z,
            Self::CryptoProA => oid::GOST28147_CRYPTOPRO_A,
        }
    }

    pub fn from_oid(param_set: &ObjectIdentifier) -> Result<Self> {
        if *param_set == oid::GOST28147_PARAM_Z {
            Ok(Self::Tc26Z)
        } else if *param_set == oid::GOST28147_CRYPTOPRO_A {
            Ok(Self::CryptoProA)
        } else {
            Err(Error::unsupported("GOST 28147-89 S-box", param_set.to_string()))
        }
    }

    fn cipher(self, key: &[u8]) -> Result<Gost28147> {
        match self {
            Self::Tc26Z => Gost28147::new(key, &SBOX_TC26_Z),
            Self::CryptoProA => Gost28147::new(key, &SBOX_CRYPTOPRO_A),
        }
    }
}

/// GOST 28147-89 in CFB mode
///
/// Parameters are `SEQUENCE { iv OCTET STRING, encryptionParamSet OID }`;
/// the S-box named there is used on decryption whatever the suite's own
/// S-box is.
#[derive(Debug, Clone)]
pub struct Gost28147Suite {
    sbox: GostSbox,
}

impl Gost28147Suite {
    pub fn new(sbox: GostSbox) -> Self {
        Self { sbox }
    }

    fn read_parameters(&self, parameters: Option<&[u8]>) -> Result<(Vec<u8>, GostSbox)> {
        let raw = parameters
            .ok_or_else(|| Error::malformed("GOST 28147-89 parameters", "missing parameters"))?;
        let mut r = DerReader::new(raw);
        let mut seq = r.read_sequence()?;
        let iv = seq.read_octet_string()?;
        let sbox = GostSbox::from_oid(&seq.read_oid()?)?;
        seq.finish("GOST 28147-89 parameters")?;
        r.finish("GOST 28147-89 parameters")?;
        if iv.len() != GOST28147_BLOCK_SIZE {
            return Err(Error::malformed(
                "GOST 28147-89 parameters",
                format!("IV must be {GOST28147_BLOCK_SIZE} bytes, got {}", iv.len()),
            ));
        }
        Ok((iv.to_vec(), sbox))
    }
}

impl PbeCipher for Gost28147Suite {
    fn name(&self) -> &str {
        "GOST28147-CFB"
    }

    fn oid(&self) -> ObjectIdentifier {
        oid::GOST28147_89
    }

    fn key_size(&self) -> usize {
        GOST28147_KEY_SIZE
    }

    fn iv_size(&self) -> usize {
        GOST28147_BLOCK_SIZE
    }

    fn encrypt_with_iv(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        Cfb::new(self.sbox.cipher(key)?, iv)?.encrypt(plaintext)
    }

    fn decrypt_with_iv(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        Cfb::new(self.sbox.cipher(key)?, iv)?.decrypt(ciphertext)
    }

    fn encode_parameters(&self, iv: &[u8]) -> Vec<u8> {
        let mut w = DerWriter::new();
        w.write_sequence(|w| {
            w.write_octet_string(iv);
            w.write_oid(&self.sbox.oid());
        });
        w.into_bytes()
    }

    fn decode_parameters(&self, parameters: Option<&[u8]>) -> Result<Vec<u8>> {
        self.read_parameters(parameters).map(|(iv, _)| iv)
    }

    fn decrypt(&self, key: &[u8], parameters: Option<&[u8]>, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let (iv, sbox) = self.read_parameters(parameters)?;
        Cfb::new(sbox.cipher(key)?, &iv)?.decrypt(ciphertext)
    }
}

pub(super) fn builtin() -> Result<Vec<Arc<dyn PbeCipher>>> {
    use BlockAlgorithm as B;
    use CipherMode as M;

    let table: [(&'static str, &str, BlockAlgorithm, CipherMode); 18] = [
        ("DES-CBC", oids::DES_CBC, B::Des, M::Cbc),
        ("DES-EDE3-CBC", oids::DES_EDE3_CBC, B::TdesEde3, M::Cbc),
        ("AES-128-CBC", oids::AES128_CBC, B::Aes128, M::Cbc),
        ("AES-128-CFB", oids::AES128_CFB, B::Aes128, M::Cfb),
        ("AES-128-OFB", oids::AES128_OFB, B::Aes128, M::Ofb),
        ("AES-128-GCM", oids::AES128_GCM, B::Aes128, M::Gcm),
        ("AES-192-CBC", oids::AES192_CBC, B::Aes192, M::Cbc),
        ("AES-192-CFB", oids::AES192_CFB, B::Aes192, M::Cfb),
        ("AES-192-OFB", oids::AES192_OFB, B::Aes192, M::Ofb),
        ("AES-192-GCM", oids::AES192_GCM, B::Aes192, M::Gcm),
        ("AES-256-CBC", oids::AES256_CBC, B::Aes256, M::Cbc),
        ("AES-256-CFB", oids::AES256_CFB, B::Aes256, M::Cfb),
        ("AES-256-OFB", oids::AES256_OFB, B::Aes256, M::Ofb),
        ("AES-256-GCM", oids::AES256_GCM, B::Aes256, M::Gcm),
        ("SM4-CBC", oids::SM4_CBC, B::Sm4, M::Cbc),
        ("SM4-CFB", oids::SM4_CFB, B::Sm4, M::Cfb),
        ("SM4-OFB", oids::SM4_OFB, B::Sm4, M::Ofb),
        ("SM4-GCM", oids::SM4_GCM, B::Sm4, M::Gcm),
    ];

    let mut suites = Vec::with_capacity(table.len() + 1);
    for (name, dotted, block, mode) in table {
        let oid = ObjectIdentifier::new(dotted)
            .map_err(|e| Error::param("cipher registration", e.to_string()))?;
        suites.push(Arc::new(BlockSuite::new(name, oid, block, mode)) as Arc<dyn PbeCipher>);
    }
    suites.push(Arc::new(Gost28147Suite::new(GostSbox::Tc26Z)));
    Ok(suites)
}

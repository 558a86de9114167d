//! PEM envelopes (RFC 7468) and legacy OpenSSL header encryption
//!
//! A block is `-----BEGIN <label>-----`, optional RFC 1421 `Name: value`
//! headers followed by a blank line, base64 body in 64-column lines, and
//! the matching `-----END <label>-----`.
//!
//! Legacy encrypted blocks carry `Proc-Type: 4,ENCRYPTED` and
//! `DEK-Info: <cipher>,<hex IV>`. The key comes from `EVP_BytesToKey` with
//! MD5, one iteration, and the first eight IV bytes as salt.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use keyseal_algorithms::kdf::EvpBytesToKey;
use keyseal_algorithms::math::random_bytes;
use keyseal_algorithms::PasswordKdf;
use keyseal_api::{Error, Result};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::cipher::{CipherRegistry, PbeCipher};

/// Labels the codec reads and writes
pub mod label {
    pub const PRIVATE_KEY: &str = "PRIVATE KEY";
    pub const ENCRYPTED_PRIVATE_KEY: &str = "ENCRYPTED PRIVATE KEY";
    pub const PUBLIC_KEY: &str = "PUBLIC KEY";
    pub const RSA_PRIVATE_KEY: &str = "RSA PRIVATE KEY";
    pub const RSA_PUBLIC_KEY: &str = "RSA PUBLIC KEY";
    pub const DSA_PRIVATE_KEY: &str = "DSA PRIVATE KEY";
    pub const EC_PRIVATE_KEY: &str = "EC PRIVATE KEY";
    pub const SM2_PRIVATE_KEY: &str = "SM2 PRIVATE KEY";
}

/// Ciphers a `DEK-Info` header may name
pub const LEGACY_CIPHERS: [&str; 5] = [
    "DES-CBC",
    "DES-EDE3-CBC",
    "AES-128-CBC",
    "AES-192-CBC",
    "AES-256-CBC",
];

const LINE_WIDTH: usize = 64;
const PROC_TYPE: &str = "Proc-Type";
const DEK_INFO: &str = "DEK-Info";
const ENCRYPTED: &str = "4,ENCRYPTED";
const SALT_SIZE: usize = 8;

/// One PEM block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PemBlock {
    pub label: String,
    /// Headers in file order
    pub headers: Vec<(String, String)>,
    pub contents: Vec<u8>,
}

impl PemBlock {
    pub fn new(label: impl Into<String>, contents: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            headers: Vec::new(),
            contents,
        }
    }

    /// Value of the first header called `name`, compared case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the block carries legacy `Proc-Type: 4,ENCRYPTED`
    pub fn is_encrypted(&self) -> bool {
        self.header(PROC_TYPE)
            .map_or(false, |v| v.replace(' ', "").eq_ignore_ascii_case(ENCRYPTED))
    }

    pub fn encode(&self) -> String {
        let body = STANDARD.encode(&self.contents);
        let mut out = String::with_capacity(body.len() + body.len() / LINE_WIDTH + 64);
        out.push_str("-----BEGIN ");
        out.push_str(&self.label);
        out.push_str("-----\n");
        for (name, value) in &self.headers {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        if !self.headers.is_empty() {
            out.push('\n');
        }
        let mut rest = body.as_str();
        while !rest.is_empty() {
            let (line, tail) = rest.split_at(rest.len().min(LINE_WIDTH));
            out.push_str(line);
            out.push('\n');
            rest = tail;
        }
        out.push_str("-----END ");
        out.push_str(&self.label);
        out.push_str("-----\n");
        out
    }

    /// Parse the first block in `text`; anything around it is ignored
    pub fn decode(text: &str) -> Result<Self> {
        let mut lines = text.lines().map(str::trim);
        loop {
            match lines.next() {
                Some(line) => {
                    if let Some(label) = boundary(line, "BEGIN") {
                        return Self::decode_body(label, &mut lines);
                    }
                }
                None => return Err(Error::malformed("PEM", "no BEGIN line")),
            }
        }
    }

    /// Parse every block in `text`, in order
    pub fn decode_all(text: &str) -> Result<Vec<Self>> {
        let mut blocks = Vec::new();
        let mut lines = text.lines().map(str::trim);
        while let Some(line) = lines.next() {
            if let Some(label) = boundary(line, "BEGIN") {
                blocks.push(Self::decode_body(label, &mut lines)?);
            }
        }
        Ok(blocks)
    }

    fn decode_body<'a>(label: &str, lines: &mut impl Iterator<Item = &'a str>) -> Result<Self> {
        let mut headers: Vec<(String, String)> = Vec::new();
        let mut body = String::new();
        let mut in_headers = true;
        for line in lines {
            if let Some(end) = boundary(line, "END") {
                if end != label {
                    return Err(Error::malformed(
                        "PEM",
                        format!("BEGIN {label} closed by END {end}"),
                    ));
                }
                let contents = STANDARD
                    .decode(body.as_bytes())
                    .map_err(|e| Error::malformed("PEM", format!("bad base64: {e}")))?;
                return Ok(Self {
                    label: label.to_string(),
                    headers,
                    contents,
                });
            }
            if in_headers {
                if line.is_empty() {
                    in_headers = false;
                    continue;
                }
                if let Some((name, value)) = line.split_once(':') {
                    headers.push((name.trim().to_string(), value.trim().to_string()));
                    continue;
                }
                in_headers = false;
            }
            body.push_str(line);
        }
        Err(Error::malformed("PEM", format!("missing END {label}")))
    }
}

/// Label of a `-----BEGIN x-----` or `-----END x-----` line
fn boundary<'a>(line: &'a str, kind: &str) -> Option<&'a str> {
    line.strip_prefix("-----")?
        .strip_prefix(kind)?
        .strip_prefix(' ')?
        .strip_suffix("-----")
}

fn legacy_cipher(ciphers: &CipherRegistry, name: &str) -> Result<Arc<dyn PbeCipher>> {
    let cipher = ciphers.lookup(name)?;
    if !cipher.is_block_chaining() || !LEGACY_CIPHERS.contains(&cipher.name()) {
        return Err(Error::unsupported("PEM DEK-Info", name.to_string()));
    }
    Ok(cipher)
}

fn legacy_key(password: &[u8], iv: &[u8], key_size: usize) -> Result<Zeroizing<Vec<u8>>> {
    EvpBytesToKey::pem().derive(password, &iv[..SALT_SIZE], key_size)
}

/// Wrap `der` in a legacy encrypted block under `cipher`
pub fn encrypt_block<R: RngCore + CryptoRng>(
    ciphers: &CipherRegistry,
    label: &str,
    der: &[u8],
    password: &[u8],
    cipher: &str,
    rng: &mut R,
) -> Result<PemBlock> {
    let suite = legacy_cipher(ciphers, cipher)?;
    let iv = random_bytes(rng, suite.iv_size())?;
    let key = legacy_key(password, &iv, suite.key_size())?;
    let contents = suite.encrypt_with_iv(&key, &iv, der)?;
    debug!(cipher = suite.name(), label, "legacy PEM encryption");
    Ok(PemBlock {
        label: label.to_string(),
        headers: vec![
            (PROC_TYPE.to_string(), ENCRYPTED.to_string()),
            (
                DEK_INFO.to_string(),
                format!("{},{}", suite.name(), hex::encode_upper(&iv)),
            ),
        ],
        contents,
    })
}

/// Decrypt a legacy encrypted block
///
/// Unencrypted blocks are returned as they are.
pub fn decrypt_block(
    ciphers: &CipherRegistry,
    block: &PemBlock,
    password: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    if !block.is_encrypted() {
        return Ok(Zeroizing::new(block.contents.clone()));
    }
    let info = block
        .header(DEK_INFO)
        .ok_or_else(|| Error::malformed("PEM", "encrypted block without DEK-Info"))?;
    let (name, iv_hex) = info
        .split_once(',')
        .ok_or_else(|| Error::malformed("PEM DEK-Info", "expected <cipher>,<iv>"))?;
    let suite = legacy_cipher(ciphers, name.trim())?;
    let iv = hex::decode(iv_hex.trim())
        .map_err(|e| Error::malformed("PEM DEK-Info", format!("bad IV: {e}")))?;
    if iv.len() != suite.iv_size() {
        return Err(Error::malformed(
            "PEM DEK-Info",
            format!("IV must be {} bytes", suite.iv_size()),
        ));
    }
    let key = legacy_key(password, &iv, suite.key_size())?;
    suite
        .decrypt_with_iv(&key, &iv, &block.contents)
        .map(Zeroizing::new)
}

//! OpenSSL `EVP_BytesToKey`, the KDF behind legacy encrypted PEM

use zeroize::Zeroizing;

use super::{check_iterations, check_key_len, PasswordKdf};
use crate::error::Result;
use crate::hash::HashAlgorithm;

/// `D_i = H^count(D_{i-1} || password || salt)`, concatenated until long enough
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvpBytesToKey {
    hash: HashAlgorithm,
    iterations: u32,
}

impl EvpBytesToKey {
    pub fn new(hash: HashAlgorithm, iterations: u32) -> Result<Self> {
        check_iterations("EVP_BytesToKey", iterations)?;
        Ok(Self { hash, iterations })
    }

    /// The MD5, single-iteration form every PEM writer uses
    pub fn pem() -> Self {
        Self {
            hash: HashAlgorithm::Md5,
            iterations: 1,
        }
    }

    /// Derive a key and IV together, as `openssl enc` does
    pub fn derive_key_iv(
        &self,
        password: &[u8],
        salt: &[u8],
        key_len: usize,
        iv_len: usize,
    ) -> Result<(Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>)> {
        let mut material = self.derive(password, salt, key_len + iv_len)?;
        let iv = Zeroizing::new(material.split_off(key_len));
        Ok((material, iv))
    }
}

impl PasswordKdf for EvpBytesToKey {
    fn name(&self) -> String {
        format!("EVP_BytesToKey-{}", self.hash)
    }

    fn derive(&self, password: &[u8], salt: &[u8], key_len: usize) -> Result<Zeroizing<Vec<u8>>> {
        check_key_len("EVP_BytesToKey", key_len)?;
        let mut out = Zeroizing::new(Vec::with_capacity(key_len + self.hash.output_size()));
        let mut prev: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::new());
        while out.len() < key_len {
            let mut d = Zeroizing::new(self.hash.digest_parts(&[&prev, password, salt]));
            for _ in 1..self.iterations {
                d = Zeroizing::new(self.hash.digest(&d));
            }
            out.extend_from_slice(&d);
            prev = d;
        }
        out.truncate(key_len);
        Ok(out)
    }
}

//! The PKCS#12 key derivation function (RFC 7292 appendix B.2)

use zeroize::Zeroizing;

use super::{check_iterations, check_key_len, PasswordKdf};
use crate::error::{Error, Result};
use crate::hash::HashAlgorithm;

/// Diversifier selecting what the PKCS#12 KDF output is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Pkcs12KeyId {
    Key = 1,
    Iv = 2,
    Mac = 3,
}

/// Encode a UTF-8 password as the NUL-terminated BMPString PKCS#12 expects
pub fn bmp_password(password: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let text = core::str::from_utf8(password)
        .map_err(|_| Error::param("PKCS#12 password", "password is not valid UTF-8"))?;
    let mut out = Zeroizing::new(Vec::with_capacity(2 * password.len() + 2));
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out.extend_from_slice(&[0, 0]);
    Ok(out)
}

/// PKCS#12 KDF; `derive` expects the password already in BMPString form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pkcs12Kdf {
    hash: HashAlgorithm,
    iterations: u32,
    id: Pkcs12KeyId,
}

impl Pkcs12Kdf {
    pub fn new(hash: HashAlgorithm, iterations: u32, id: Pkcs12KeyId) -> Result<Self> {
        check_iterations("PKCS#12 KDF", iterations)?;
        Ok(Self {
            hash,
            iterations,
            id,
        })
    }

    /// Same hash and iteration count, different diversifier
    pub fn with_id(self, id: Pkcs12KeyId) -> Self {
        Self { id, ..self }
    }
}

/// Repeat `data` to fill a whole number of `v`-byte blocks
fn stretch(data: &[u8], v: usize) -> Zeroizing<Vec<u8>> {
    if data.is_empty() {
        return Zeroizing::new(Vec::new());
    }
    let len = v * ((data.len() + v - 1) / v);
    Zeroizing::new(data.iter().copied().cycle().take(len).collect())
}

impl PasswordKdf for Pkcs12Kdf {
    fn name(&self) -> String {
        format!("PKCS12-KDF-{}", self.hash)
    }

    fn derive(&self, password: &[u8], salt: &[u8], key_len: usize) -> Result<Zeroizing<Vec<u8>>> {
        check_key_len("PKCS#12 KDF", key_len)?;
        let u = self.hash.output_size();
        let v = self.hash.block_size();

        let diversifier = vec![self.id as u8; v];
        let mut input = stretch(salt, v);
        input.extend_from_slice(&stretch(password, v));

        let mut out = Zeroizing::new(Vec::with_capacity(key_len + u));
        loop {
            let mut a = Zeroizing::new(self.hash.digest_parts(&[&diversifier, &input]));
            for _ in 1..self.iterations {
                a = Zeroizing::new(self.hash.digest(&a));
            }
            out.extend_from_slice(&a);
            if out.len() >= key_len {
                break;
            }

            // I_j = (I_j + B + 1) mod 2^(8v) for every v-byte block of I
            let b: Vec<u8> = a.iter().copied().cycle().take(v).collect();
            for block in input.chunks_mut(v) {
                let mut carry = 1u16;
                for (x, y) in block.iter_mut().rev().zip(b.iter().rev()) {
                    let sum = *x as u16 + *y as u16 + carry;
                    *x = sum as u8;
                    carry = sum >> 8;
                }
            }
        }
        out.truncate(key_len);
        Ok(out)
    }
}

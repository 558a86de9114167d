//! PBKDF1 (RFC 8018 section 5.1), used by the PBES1 schemes

use zeroize::Zeroizing;

use super::{check_iterations, check_key_len, PasswordKdf};
use crate::error::{Error, Result};
use crate::hash::HashAlgorithm;

/// PBKDF1: `T_1 = H(P || S)`, `T_i = H(T_{i-1})`, output truncated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf1 {
    hash: HashAlgorithm,
    iterations: u32,
}

impl Pbkdf1 {
    pub fn new(hash: HashAlgorithm, iterations: u32) -> Result<Self> {
        check_iterations("PBKDF1", iterations)?;
        Ok(Self { hash, iterations })
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl PasswordKdf for Pbkdf1 {
    fn name(&self) -> String {
        format!("PBKDF1-{}", self.hash)
    }

    fn derive(&self, password: &[u8], salt: &[u8], key_len: usize) -> Result<Zeroizing<Vec<u8>>> {
        check_key_len("PBKDF1", key_len)?;
        if key_len > self.hash.output_size() {
            return Err(Error::param(
                "PBKDF1",
                format!("cannot derive {key_len} bytes from {}", self.hash),
            ));
        }
        let mut t = Zeroizing::new(self.hash.digest_parts(&[password, salt]));
        for _ in 1..self.iterations {
            t = Zeroizing::new(self.hash.digest(&t));
        }
        t.truncate(key_len);
        Ok(t)
    }
}

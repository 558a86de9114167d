//! Password-Based Key Derivation Function 2 (PBKDF2)
//!
//! RFC 8018 section 5.2 with an HMAC PRF. The iteration itself is done by the
//! `pbkdf2` crate; this module picks the digest at runtime from the PRF
//! named in the container.

use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use super::{check_iterations, check_key_len, PasswordKdf};
use crate::error::Result;
use crate::hash::HashAlgorithm;

/// PBKDF2 over HMAC with a runtime-selected hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2 {
    prf: HashAlgorithm,
    iterations: u32,
}

impl Pbkdf2 {
    /// Rejects a zero iteration count
    pub fn new(prf: HashAlgorithm, iterations: u32) -> Result<Self> {
        check_iterations("PBKDF2", iterations)?;
        Ok(Self { prf, iterations })
    }

    /// Hash underlying the HMAC PRF
    pub fn prf(&self) -> HashAlgorithm {
        self.prf
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl PasswordKdf for Pbkdf2 {
    fn name(&self) -> String {
        format!("PBKDF2-{}", self.prf)
    }

    fn derive(&self, password: &[u8], salt: &[u8], key_len: usize) -> Result<Zeroizing<Vec<u8>>> {
        check_key_len("PBKDF2", key_len)?;
        let mut out = Zeroizing::new(vec![0u8; key_len]);
        let rounds = self.iterations;
        match self.prf {
            HashAlgorithm::Md5 => ::pbkdf2::pbkdf2_hmac::<Md5>(password, salt, rounds, &mut out),
            HashAlgorithm::Sha1 => ::pbkdf2::pbkdf2_hmac::<Sha1>(password, salt, rounds, &mut out),
            HashAlgorithm::Sha224 => {
                ::pbkdf2::pbkdf2_hmac::<Sha224>(password, salt, rounds, &mut out)
            }
            HashAlgorithm::Sha256 => {
                ::pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, rounds, &mut out)
            }
            HashAlgorithm::Sha384 => {
                ::pbkdf2::pbkdf2_hmac::<Sha384>(password, salt, rounds, &mut out)
            }
            HashAlgorithm::Sha512 => {
                ::pbkdf2::pbkdf2_hmac::<Sha512>(password, salt, rounds, &mut out)
            }
        }
        Ok(out)
    }
}

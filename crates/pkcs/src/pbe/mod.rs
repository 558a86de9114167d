//! Password-based encryption of private-key containers
//!
//! PBES2 pairs a KDF (PBKDF2 or Scrypt) with any suite in the
//! [`CipherRegistry`]. The legacy single-OID schemes (PBES1 over PBKDF1 and
//! the PKCS#12 triple-DES scheme) are supported for reading and writing
//! keys produced by older tools.

mod pbes1;
mod pbes2;

use keyseal_algorithms::HashAlgorithm;
use keyseal_api::{Error, Result};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::asn1::{oid, AlgorithmIdentifier};
use crate::cipher::CipherRegistry;

pub use pbes1::LegacyPbe;
pub use pbes2::{KdfParams, Pbes2Params};

/// PBKDF2 settings used when encrypting
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pbkdf2Opts {
    pub salt_size: usize,
    pub iteration_count: u32,
    pub prf: HashAlgorithm,
}

impl Default for Pbkdf2Opts {
    fn default() -> Self {
        Self {
            salt_size: 16,
            iteration_count: 10_000,
            prf: HashAlgorithm::Sha256,
        }
    }
}

/// Scrypt settings used when encrypting
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScryptOpts {
    pub salt_size: usize,
    pub cost_n: u64,
    pub block_size_r: u32,
    pub parallelization_p: u32,
}

impl Default for ScryptOpts {
    fn default() -> Self {
        Self {
            salt_size: 16,
            cost_n: 16384,
            block_size_r: 8,
            parallelization_p: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KdfOpts {
    Pbkdf2(Pbkdf2Opts),
    Scrypt(ScryptOpts),
}

impl Default for KdfOpts {
    fn default() -> Self {
        Self::Pbkdf2(Pbkdf2Opts::default())
    }
}

/// PBES2 settings: a cipher suite name and the KDF that keys it
///
/// ```
/// use keyseal_pkcs::pbe::{EncryptionOpts, KdfOpts, ScryptOpts};
///
/// let opts = EncryptionOpts {
///     cipher: "SM4-GCM".into(),
///     kdf: KdfOpts::Scrypt(ScryptOpts { cost_n: 1024, ..Default::default() }),
/// };
/// assert_eq!(EncryptionOpts::default().cipher, "AES-256-CBC");
/// # drop(opts);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncryptionOpts {
    pub cipher: String,
    pub kdf: KdfOpts,
}

impl Default for EncryptionOpts {
    fn default() -> Self {
        Self {
            cipher: "AES-256-CBC".to_string(),
            kdf: KdfOpts::default(),
        }
    }
}

/// Settings for the single-OID legacy schemes
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegacyPbeOpts {
    pub scheme: LegacyPbe,
    pub salt_size: usize,
    pub iteration_count: u32,
}

impl Default for LegacyPbeOpts {
    fn default() -> Self {
        Self {
            scheme: LegacyPbe::Sha1TripleDesCbc,
            salt_size: 8,
            iteration_count: 2048,
        }
    }
}

/// Which password-based scheme protects an encrypted container
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PbeOpts {
    Pbes2(EncryptionOpts),
    Legacy(LegacyPbeOpts),
}

impl Default for PbeOpts {
    fn default() -> Self {
        Self::Pbes2(EncryptionOpts::default())
    }
}

impl From<EncryptionOpts> for PbeOpts {
    fn from(opts: EncryptionOpts) -> Self {
        Self::Pbes2(opts)
    }
}

impl From<LegacyPbeOpts> for PbeOpts {
    fn from(opts: LegacyPbeOpts) -> Self {
        Self::Legacy(opts)
    }
}

/// Encrypt `plaintext` under `password`
///
/// Returns the encryption `AlgorithmIdentifier` (scheme, KDF parameters and
/// cipher parameters) together with the ciphertext.
pub fn encrypt<R: RngCore + CryptoRng>(
    ciphers: &CipherRegistry,
    opts: &PbeOpts,
    password: &[u8],
    plaintext: &[u8],
    rng: &mut R,
) -> Result<(AlgorithmIdentifier, Vec<u8>)> {
    match opts {
        PbeOpts::Pbes2(opts) => pbes2::encrypt(ciphers, opts, password, plaintext, rng),
        PbeOpts::Legacy(opts) => pbes1::encrypt(ciphers, opts, password, plaintext, rng),
    }
}

/// Decrypt `ciphertext` with the scheme named by `algorithm`
pub fn decrypt(
    ciphers: &CipherRegistry,
    algorithm: &AlgorithmIdentifier,
    password: &[u8],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    if algorithm.oid == oid::PBES2 {
        return pbes2::decrypt(ciphers, algorithm, password, ciphertext);
    }
    match LegacyPbe::from_oid(&algorithm.oid) {
        Some(scheme) => pbes1::decrypt(ciphers, scheme, algorithm, password, ciphertext),
        None => {
            debug!(oid = %algorithm.oid, "unknown password-based encryption scheme");
            Err(Error::unsupported(
                "password-based encryption",
                algorithm.oid.to_string(),
            ))
        }
    }
}

/// Narrow a DER INTEGER to the `u32` the KDFs take
fn to_u32(value: u64, context: &'static str) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::malformed(context, "value does not fit in 32 bits"))
}

fn check_salt_size(context: &'static str, salt_size: usize) -> Result<()> {
    if salt_size == 0 {
        return Err(Error::param(context, "salt size must be positive"));
    }
    Ok(())
}

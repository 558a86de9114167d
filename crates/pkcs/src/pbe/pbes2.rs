//! PBES2 (RFC 8018 §6.2) with PBKDF2 or Scrypt

use const_oid::ObjectIdentifier;
use keyseal_algorithms::encoding::{tag, DerReader, DerWriter};
use keyseal_algorithms::kdf::{PasswordKdf, Pbkdf2, Scrypt};
use keyseal_algorithms::math::random_bytes;
use keyseal_algorithms::HashAlgorithm;
use keyseal_api::{Error, Result};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use super::{check_salt_size, to_u32, EncryptionOpts, KdfOpts};
use crate::asn1::{oid, AlgorithmIdentifier};
use crate::cipher::CipherRegistry;

const CONTEXT: &str = "PBES2 parameters";

/// Key derivation half of the PBES2 parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KdfParams {
    Pbkdf2 {
        salt: Vec<u8>,
        iterations: u32,
        key_length: Option<u32>,
        prf: HashAlgorithm,
    },
    Scrypt {
        salt: Vec<u8>,
        cost_n: u64,
        block_size_r: u32,
        parallelization_p: u32,
        key_length: Option<u32>,
    },
}

impl KdfParams {
    fn key_length(&self) -> Option<u32> {
        match self {
            Self::Pbkdf2 { key_length, .. } | Self::Scrypt { key_length, .. } => *key_length,
        }
    }

    fn salt(&self) -> &[u8] {
        match self {
            Self::Pbkdf2 { salt, .. } | Self::Scrypt { salt, .. } => salt,
        }
    }

    /// Instantiate the KDF these parameters describe
    pub fn kdf(&self) -> Result<Box<dyn PasswordKdf>> {
        Ok(match *self {
            Self::Pbkdf2 { iterations, prf, .. } => Box::new(Pbkdf2::new(prf, iterations)?),
            Self::Scrypt {
                cost_n,
                block_size_r,
                parallelization_p,
                ..
            } => Box::new(Scrypt::new(cost_n, block_size_r, parallelization_p)?),
        })
    }

    fn encode(&self, w: &mut DerWriter) {
        match self {
            // prf DEFAULT hmacWithSHA1 is left out when it applies
            Self::Pbkdf2 {
                salt,
                iterations,
                key_length,
                prf,
            } => w.write_sequence(|w| {
                w.write_oid(&oid::PBKDF2);
                w.write_sequence(|w| {
                    w.write_octet_string(salt);
                    w.write_uint(u64::from(*iterations));
                    if let Some(len) = key_length {
                        w.write_uint(u64::from(*len));
                    }
                    if *prf != HashAlgorithm::Sha1 {
                        AlgorithmIdentifier::with_null(prf_oid(*prf)).encode(w);
                    }
                });
            }),
            Self::Scrypt {
                salt,
                cost_n,
                block_size_r,
                parallelization_p,
                key_length,
            } => w.write_sequence(|w| {
                w.write_oid(&oid::SCRYPT);
                w.write_sequence(|w| {
                    w.write_octet_string(salt);
                    w.write_uint(*cost_n);
                    w.write_uint(u64::from(*block_size_r));
                    w.write_uint(u64::from(*parallelization_p));
                    if let Some(len) = key_length {
                        w.write_uint(u64::from(*len));
                    }
                });
            }),
        }
    }

    fn decode(r: &mut DerReader<'_>) -> Result<Self> {
        let kdf = AlgorithmIdentifier::decode(r)?;
        let mut params = kdf.parameters_reader(CONTEXT)?;
        let mut seq = params.read_sequence()?;
        params.finish(CONTEXT)?;
        let salt = seq.read_octet_string()?.to_vec();

        let decoded = if kdf.oid == oid::PBKDF2 {
            let iterations = to_u32(seq.read_u64()?, "PBKDF2 iteration count")?;
            let key_length = match seq.peek_tag() {
                Some(tag::INTEGER) => Some(to_u32(seq.read_u64()?, "PBKDF2 key length")?),
                _ => None,
            };
            let prf = if seq.is_empty() {
                HashAlgorithm::Sha1
            } else {
                let prf = AlgorithmIdentifier::decode(&mut seq)?;
                if !prf.has_null_parameters() {
                    return Err(Error::malformed(CONTEXT, "PRF parameters must be NULL"));
                }
                hash_from_prf_oid(&prf.oid)?
            };
            Self::Pbkdf2 {
                salt,
                iterations,
                key_length,
                prf,
            }
        } else if kdf.oid == oid::SCRYPT {
            let cost_n = seq.read_u64()?;
            let block_size_r = to_u32(seq.read_u64()?, "scrypt block size")?;
            let parallelization_p = to_u32(seq.read_u64()?, "scrypt parallelization")?;
            let key_length = if seq.is_empty() {
                None
            } else {
                Some(to_u32(seq.read_u64()?, "scrypt key length")?)
            };
            Self::Scrypt {
                salt,
                cost_n,
                block_size_r,
                parallelization_p,
                key_length,
            }
        } else {
            debug!(oid = %kdf.oid, "unknown PBES2 key derivation function");
            return Err(Error::unsupported("PBES2 key derivation", kdf.oid.to_string()));
        };
        seq.finish(CONTEXT)?;
        Ok(decoded)
    }
}

/// `PBES2-params ::= SEQUENCE { keyDerivationFunc, encryptionScheme }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pbes2Params {
    pub kdf: KdfParams,
    pub encryption_scheme: AlgorithmIdentifier,
}

impl Pbes2Params {
    pub fn to_der(&self) -> Vec<u8> {
        let mut w = DerWriter::new();
        w.write_sequence(|w| {
            self.kdf.encode(w);
            self.encryption_scheme.encode(w);
        });
        w.into_bytes()
    }

    pub fn from_der(der: &[u8]) -> Result<Self> {
        let mut r = DerReader::new(der);
        let mut seq = r.read_sequence()?;
        r.finish(CONTEXT)?;
        let kdf = KdfParams::decode(&mut seq)?;
        let encryption_scheme = AlgorithmIdentifier::decode(&mut seq)?;
        seq.finish(CONTEXT)?;
        Ok(Self {
            kdf,
            encryption_scheme,
        })
    }
}

/// HMAC PRF identifiers accepted in PBKDF2 parameters
pub(crate) fn prf_oid(hash: HashAlgorithm) -> ObjectIdentifier {
    match hash {
        HashAlgorithm::Md5 => oid::HMAC_WITH_MD5,
        HashAlgorithm::Sha1 => oid::HMAC_WITH_SHA1,
        HashAlgorithm::Sha224 => oid::HMAC_WITH_SHA224,
        HashAlgorithm::Sha256 => oid::HMAC_WITH_SHA256,
        HashAlgorithm::Sha384 => oid::HMAC_WITH_SHA384,
        HashAlgorithm::Sha512 => oid::HMAC_WITH_SHA512,
    }
}

pub(crate) fn hash_from_prf_oid(prf: &ObjectIdentifier) -> Result<HashAlgorithm> {
    HashAlgorithm::ALL
        .into_iter()
        .find(|hash| prf_oid(*hash) == *prf)
        .ok_or_else(|| {
            debug!(oid = %prf, "unknown PBKDF2 PRF");
            Error::unsupported("PBKDF2 PRF", prf.to_string())
        })
}

pub(super) fn encrypt<R: RngCore + CryptoRng>(
    ciphers: &CipherRegistry,
    opts: &EncryptionOpts,
    password: &[u8],
    plaintext: &[u8],
    rng: &mut R,
) -> Result<(AlgorithmIdentifier, Vec<u8>)> {
    let cipher = ciphers.lookup(&opts.cipher)?;
    let kdf = match &opts.kdf {
        KdfOpts::Pbkdf2(o) => {
            check_salt_size("PBKDF2 options", o.salt_size)?;
            KdfParams::Pbkdf2 {
                salt: random_bytes(rng, o.salt_size)?,
                iterations: o.iteration_count,
                key_length: None,
                prf: o.prf,
            }
        }
        KdfOpts::Scrypt(o) => {
            check_salt_size("scrypt options", o.salt_size)?;
            KdfParams::Scrypt {
                salt: random_bytes(rng, o.salt_size)?,
                cost_n: o.cost_n,
                block_size_r: o.block_size_r,
                parallelization_p: o.parallelization_p,
                key_length: None,
            }
        }
    };

    let derive = kdf.kdf()?;
    debug!(kdf = %derive.name(), cipher = cipher.name(), "PBES2 encryption");
    let key = derive.derive(password, kdf.salt(), cipher.key_size())?;
    let (ciphertext, cipher_params) = cipher.encrypt(rng, &key, plaintext)?;

    let params = Pbes2Params {
        kdf,
        encryption_scheme: AlgorithmIdentifier::new(cipher.oid(), Some(cipher_params)),
    };
    Ok((
        AlgorithmIdentifier::new(oid::PBES2, Some(params.to_der())),
        ciphertext,
    ))
}

pub(super) fn decrypt(
    ciphers: &CipherRegistry,
    algorithm: &AlgorithmIdentifier,
    password: &[u8],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let raw = algorithm
        .parameters
        .as_deref()
        .ok_or_else(|| Error::malformed(CONTEXT, "missing parameters"))?;
    let params = Pbes2Params::from_der(raw)?;
    let cipher = ciphers.by_oid(&params.encryption_scheme.oid)?;

    if let Some(len) = params.kdf.key_length() {
        if len as usize != cipher.key_size() {
            return Err(Error::malformed(
                CONTEXT,
                format!(
                    "keyLength {len} does not match {} ({} bytes)",
                    cipher.name(),
                    cipher.key_size()
                ),
            ));
        }
    }

    let derive = params.kdf.kdf()?;
    debug!(kdf = %derive.name(), cipher = cipher.name(), "PBES2 decryption");
    let key = derive.derive(password, params.kdf.salt(), cipher.key_size())?;
    cipher
        .decrypt(&key, params.encryption_scheme.parameters.as_deref(), ciphertext)
        .map(Zeroizing::new)
}

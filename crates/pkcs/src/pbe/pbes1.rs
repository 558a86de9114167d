//! Single-OID schemes: PBES1 (RFC 8018 §6.1) and PKCS#12 triple-DES

use const_oid::ObjectIdentifier;
use keyseal_algorithms::encoding::DerWriter;
use keyseal_algorithms::kdf::{bmp_password, PasswordKdf, Pbkdf1, Pkcs12Kdf, Pkcs12KeyId};
use keyseal_algorithms::math::random_bytes;
use keyseal_algorithms::HashAlgorithm;
use keyseal_api::{Error, Result};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use super::{check_salt_size, to_u32, LegacyPbeOpts};
use crate::asn1::{oid, AlgorithmIdentifier};
use crate::cipher::CipherRegistry;

const CONTEXT: &str = "PBE parameters";

/// PBES1 salts are always eight bytes
const PBES1_SALT_SIZE: usize = 8;

/// Legacy password-based encryption schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegacyPbe {
    /// pbeWithMD5AndDES-CBC
    Md5DesCbc,
    /// pbeWithSHA1AndDES-CBC
    Sha1DesCbc,
    /// pbeWithSHAAnd3-KeyTripleDES-CBC
    Sha1TripleDesCbc,
}

impl LegacyPbe {
    pub fn oid(self) -> ObjectIdentifier {
        match self {
            Self::Md5DesCbc => oid::PBE_MD5_DES_CBC,
            Self::Sha1DesCbc => oid::PBE_SHA1_DES_CBC,
            Self::Sha1TripleDesCbc => oid::PBE_SHA1_3DES_CBC,
        }
    }

    pub fn from_oid(scheme: &ObjectIdentifier) -> Option<Self> {
        [Self::Md5DesCbc, Self::Sha1DesCbc, Self::Sha1TripleDesCbc]
            .into_iter()
            .find(|s| s.oid() == *scheme)
    }

    fn cipher_name(self) -> &'static str {
        match self {
            Self::Md5DesCbc | Self::Sha1DesCbc => "DES-CBC",
            Self::Sha1TripleDesCbc => "DES-EDE3-CBC",
        }
    }

    fn hash(self) -> HashAlgorithm {
        match self {
            Self::Md5DesCbc => HashAlgorithm::Md5,
            Self::Sha1DesCbc | Self::Sha1TripleDesCbc => HashAlgorithm::Sha1,
        }
    }

    /// Derive the cipher key and IV
    fn derive(
        self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        key_len: usize,
        iv_len: usize,
    ) -> Result<(Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>)> {
        match self {
            Self::Md5DesCbc | Self::Sha1DesCbc => {
                let kdf = Pbkdf1::new(self.hash(), iterations)?;
                let mut key = kdf.derive(password, salt, key_len + iv_len)?;
                let iv = Zeroizing::new(key.split_off(key_len));
                Ok((key, iv))
            }
            Self::Sha1TripleDesCbc => {
                let password = bmp_password(password)?;
                let kdf = Pkcs12Kdf::new(self.hash(), iterations, Pkcs12KeyId::Key)?;
                let key = kdf.derive(&password, salt, key_len)?;
                let iv = kdf.with_id(Pkcs12KeyId::Iv).derive(&password, salt, iv_len)?;
                Ok((key, iv))
            }
        }
    }
}

/// `PBEParameter ::= SEQUENCE { salt OCTET STRING, iterationCount INTEGER }`
fn encode_parameters(salt: &[u8], iterations: u32) -> Vec<u8> {
    let mut w = DerWriter::new();
    w.write_sequence(|w| {
        w.write_octet_string(salt);
        w.write_uint(u64::from(iterations));
    });
    w.into_bytes()
}

fn decode_parameters(algorithm: &AlgorithmIdentifier) -> Result<(Vec<u8>, u32)> {
    let mut r = algorithm.parameters_reader(CONTEXT)?;
    let mut seq = r.read_sequence()?;
    r.finish(CONTEXT)?;
    let salt = seq.read_octet_string()?.to_vec();
    let iterations = to_u32(seq.read_u64()?, "PBE iteration count")?;
    seq.finish(CONTEXT)?;
    Ok((salt, iterations))
}

pub(super) fn encrypt<R: RngCore + CryptoRng>(
    ciphers: &CipherRegistry,
    opts: &LegacyPbeOpts,
    password: &[u8],
    plaintext: &[u8],
    rng: &mut R,
) -> Result<(AlgorithmIdentifier, Vec<u8>)> {
    check_salt_size("PBE options", opts.salt_size)?;
    if opts.scheme != LegacyPbe::Sha1TripleDesCbc && opts.salt_size != PBES1_SALT_SIZE {
        return Err(Error::param(
            "PBE options",
            format!("PBES1 salt must be {PBES1_SALT_SIZE} bytes"),
        ));
    }
    let cipher = ciphers.lookup(opts.scheme.cipher_name())?;
    debug!(scheme = ?opts.scheme, cipher = cipher.name(), "legacy PBE encryption");

    let salt = random_bytes(rng, opts.salt_size)?;
    let (key, iv) = opts.scheme.derive(
        password,
        &salt,
        opts.iteration_count,
        cipher.key_size(),
        cipher.iv_size(),
    )?;
    let ciphertext = cipher.encrypt_with_iv(&key, &iv, plaintext)?;
    Ok((
        AlgorithmIdentifier::new(
            opts.scheme.oid(),
            Some(encode_parameters(&salt, opts.iteration_count)),
        ),
        ciphertext,
    ))
}

pub(super) fn decrypt(
    ciphers: &CipherRegistry,
    scheme: LegacyPbe,
    algorithm: &AlgorithmIdentifier,
    password: &[u8],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let (salt, iterations) = decode_parameters(algorithm)?;
    let cipher = ciphers.lookup(scheme.cipher_name())?;
    debug!(?scheme, cipher = cipher.name(), "legacy PBE decryption");
    let (key, iv) = scheme.derive(password, &salt, iterations, cipher.key_size(), cipher.iv_size())?;
    cipher
        .decrypt_with_iv(&key, &iv, ciphertext)
        .map(Zeroizing::new)
}

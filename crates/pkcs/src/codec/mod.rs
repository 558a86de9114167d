//! Key container codec
//!
//! [`KeyCodec`] holds the curve and cipher registries and turns typed keys
//! into PKCS#8, encrypted PKCS#8, SubjectPublicKeyInfo and the traditional
//! per-algorithm containers (PKCS#1, SEC1, OpenSSL DSA), in DER or PEM.
//!
//! Parsing runs the input through [`ber_to_der`] first, so BER from older
//! writers is accepted, and rejects anything left over after the outer
//! structure.
//!
//! ```
//! use keyseal_pkcs::codec::KeyCodec;
//! use keyseal_pkcs::keys::{EcPrivateKey, PrivateKey};
//! use rand::SeedableRng;
//!
//! let codec = KeyCodec::with_defaults().unwrap();
//! let curve = codec.curves().curve_by_name("P-256").unwrap();
//! let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
//! let key = PrivateKey::from(EcPrivateKey::generate(curve, &mut rng).unwrap());
//!
//! let der = codec.marshal_private_key(&key).unwrap();
//! assert_eq!(codec.parse_private_key(&der).unwrap(), key);
//! ```

use std::fmt;
use std::sync::Arc;

use keyseal_algorithms::encoding::{tag, DerReader, DerWriter};
use keyseal_algorithms::ber_to_der;
use keyseal_api::{Error, Result, ResultExt};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::asn1::AlgorithmIdentifier;
use crate::cipher::{default_ciphers, CipherRegistry};
use crate::curves::{default_curves, CurveRegistry};
use crate::keys::{
    DsaPrivateKey, EcPrivateKey, KeyAlgorithm, PrivateKey, PublicKey, RsaPrivateKey, RsaPublicKey,
};
use crate::pbe::{self, PbeOpts};
use crate::pem::{self, label, PemBlock};

/// `PrivateKeyInfo` version; 1 is RFC 5958 `OneAsymmetricKey`
const PKCS8_V1: u64 = 0;
const PKCS8_V2: u64 = 1;

/// Marshals and parses key containers against a pair of frozen registries
#[derive(Clone)]
pub struct KeyCodec {
    curves: Arc<CurveRegistry>,
    ciphers: Arc<CipherRegistry>,
}

impl fmt::Debug for KeyCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyCodec")
            .field("curves", &self.curves.len())
            .field("ciphers", &self.ciphers.len())
            .finish()
    }
}

impl KeyCodec {
    pub fn new(curves: Arc<CurveRegistry>, ciphers: Arc<CipherRegistry>) -> Self {
        Self { curves, ciphers }
    }

    /// A codec over the process-wide default registries
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(default_curves()?, default_ciphers()?))
    }

    pub fn curves(&self) -> &Arc<CurveRegistry> {
        &self.curves
    }

    pub fn ciphers(&self) -> &Arc<CipherRegistry> {
        &self.ciphers
    }

    /// PKCS#8 `PrivateKeyInfo`
    pub fn marshal_private_key(&self, key: &PrivateKey) -> Result<Zeroizing<Vec<u8>>> {
        let algorithm = key.algorithm_identifier(&self.curves)?;
        let inner = key.private_key_der(&self.curves)?;
        let mut w = DerWriter::new();
        w.write_sequence(|w| {
            w.write_uint(PKCS8_V1);
            algorithm.encode(w);
            w.write_octet_string(&inner);
        });
        trace!(algorithm = %key.algorithm(), "marshalled PKCS#8 private key");
        Ok(Zeroizing::new(w.into_bytes()))
    }

    /// Parse PKCS#8 `PrivateKeyInfo` or `OneAsymmetricKey`
    ///
    /// Attributes and a v2 public key are skipped; the public key is always
    /// rederived from the private material.
    pub fn parse_private_key(&self, input: &[u8]) -> Result<PrivateKey> {
        const CONTEXT: &str = "PKCS#8 private key";
        let der = Zeroizing::new(ber_to_der(input)?);
        let mut r = DerReader::new(&der);
        let mut seq = r.read_sequence()?;
        r.finish(CONTEXT)?;

        let version = seq.read_u64()?;
        if version != PKCS8_V1 && version != PKCS8_V2 {
            return Err(Error::malformed(CONTEXT, format!("unknown version {version}")));
        }
        let algorithm = AlgorithmIdentifier::decode(&mut seq)?;
        let inner = seq.read_octet_string()?;
        seq.read_optional_context(0)?;
        if version == PKCS8_V2 && seq.peek_tag() == Some(tag::context_primitive(1)) {
            seq.read_tlv()?;
        }
        seq.finish(CONTEXT)?;

        PrivateKey::from_private_key_der(&algorithm, inner, &self.curves)
    }

    /// `EncryptedPrivateKeyInfo` around the PKCS#8 encoding of `key`
    pub fn marshal_encrypted_private_key<R: RngCore + CryptoRng>(
        &self,
        key: &PrivateKey,
        password: &[u8],
        opts: &PbeOpts,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let plain = self.marshal_private_key(key)?;
        let (algorithm, ciphertext) = pbe::encrypt(&self.ciphers, opts, password, &plain, rng)?;
        let mut w = DerWriter::new();
        w.write_sequence(|w| {
            algorithm.encode(w);
            w.write_octet_string(&ciphertext);
        });
        Ok(w.into_bytes())
    }

    /// Decrypt and parse `EncryptedPrivateKeyInfo`
    ///
    /// Plaintext that does not parse as a container is reported as a
    /// decryption failure: with CBC a wrong password can still leave valid
    /// padding behind.
    pub fn parse_encrypted_private_key(&self, input: &[u8], password: &[u8]) -> Result<PrivateKey> {
        const CONTEXT: &str = "encrypted PKCS#8 private key";
        let der = ber_to_der(input)?;
        let mut r = DerReader::new(&der);
        let mut seq = r.read_sequence()?;
        r.finish(CONTEXT)?;
        let algorithm = AlgorithmIdentifier::decode(&mut seq)?;
        let ciphertext = seq.read_octet_string()?;
        seq.finish(CONTEXT)?;

        let plain = pbe::decrypt(&self.ciphers, &algorithm, password, ciphertext)?;
        self.parse_private_key(&plain)
            .inspect_err(|e| debug!(context = CONTEXT, "decrypted payload rejected: {e}"))
            .malformed_as_decryption(CONTEXT)
    }

    /// `SubjectPublicKeyInfo`
    pub fn marshal_public_key(&self, key: &PublicKey) -> Result<Vec<u8>> {
        let algorithm = key.algorithm_identifier(&self.curves)?;
        let bits = key.public_key_bits()?;
        let mut w = DerWriter::new();
        w.write_sequence(|w| {
            algorithm.encode(w);
            w.write_bit_string(&bits);
        });
        Ok(w.into_bytes())
    }

    pub fn parse_public_key(&self, input: &[u8]) -> Result<PublicKey> {
        const CONTEXT: &str = "SubjectPublicKeyInfo";
        let der = ber_to_der(input)?;
        let mut r = DerReader::new(&der);
        let mut seq = r.read_sequence()?;
        r.finish(CONTEXT)?;
        let algorithm = AlgorithmIdentifier::decode(&mut seq)?;
        let bits = seq.read_bit_string()?;
        seq.finish(CONTEXT)?;
        PublicKey::from_public_key_bits(&algorithm, bits, &self.curves)
    }

    /// The algorithm's own container and its PEM label
    ///
    /// RSA is PKCS#1, ECDSA and SM2 are SEC1 with the curve named, DSA is
    /// the OpenSSL six-integer layout. GOST and ElGamal only exist inside
    /// PKCS#8.
    pub fn marshal_traditional_private_key(
        &self,
        key: &PrivateKey,
    ) -> Result<(&'static str, Zeroizing<Vec<u8>>)> {
        match key {
            PrivateKey::Rsa(key) => Ok((label::RSA_PRIVATE_KEY, key.to_pkcs1_der())),
            PrivateKey::Dsa(key) => Ok((label::DSA_PRIVATE_KEY, key.to_openssl_der())),
            PrivateKey::Ec(key) => {
                let named = self.curves.require_oid(key.curve())?;
                let pem_label = match key.public_key().algorithm() {
                    KeyAlgorithm::Sm2 => label::SM2_PRIVATE_KEY,
                    _ => label::EC_PRIVATE_KEY,
                };
                Ok((pem_label, key.to_sec1_der(Some(named))?))
            }
            PrivateKey::Gost(_) | PrivateKey::ElGamal(_) => Err(Error::unsupported(
                "traditional private key",
                key.algorithm().name(),
            )),
        }
    }

    /// Parse the traditional container a PEM label names
    pub fn parse_traditional_private_key(&self, pem_label: &str, input: &[u8]) -> Result<PrivateKey> {
        let der = Zeroizing::new(ber_to_der(input)?);
        match pem_label {
            label::RSA_PRIVATE_KEY => RsaPrivateKey::from_pkcs1_der(&der).map(PrivateKey::Rsa),
            label::DSA_PRIVATE_KEY => DsaPrivateKey::from_openssl_der(&der).map(PrivateKey::Dsa),
            label::EC_PRIVATE_KEY | label::SM2_PRIVATE_KEY => {
                EcPrivateKey::from_sec1_der(&der, None, &self.curves).map(PrivateKey::Ec)
            }
            other => Err(unknown_label(other)),
        }
    }

    /// PKCS#1 `RSAPublicKey`
    pub fn marshal_rsa_public_key(&self, key: &RsaPublicKey) -> Vec<u8> {
        key.to_pkcs1_der()
    }

    pub fn parse_rsa_public_key(&self, input: &[u8]) -> Result<RsaPublicKey> {
        RsaPublicKey::from_pkcs1_der(&ber_to_der(input)?)
    }

    /// `PRIVATE KEY` PEM
    pub fn private_key_to_pem(&self, key: &PrivateKey) -> Result<Zeroizing<String>> {
        let der = self.marshal_private_key(key)?;
        Ok(Zeroizing::new(
            PemBlock::new(label::PRIVATE_KEY, der.to_vec()).encode(),
        ))
    }

    /// `ENCRYPTED PRIVATE KEY` PEM
    pub fn encrypted_private_key_to_pem<R: RngCore + CryptoRng>(
        &self,
        key: &PrivateKey,
        password: &[u8],
        opts: &PbeOpts,
        rng: &mut R,
    ) -> Result<String> {
        let der = self.marshal_encrypted_private_key(key, password, opts, rng)?;
        Ok(PemBlock::new(label::ENCRYPTED_PRIVATE_KEY, der).encode())
    }

    /// Traditional PEM (`RSA PRIVATE KEY` and friends), unencrypted
    pub fn traditional_private_key_to_pem(&self, key: &PrivateKey) -> Result<Zeroizing<String>> {
        let (pem_label, der) = self.marshal_traditional_private_key(key)?;
        Ok(Zeroizing::new(PemBlock::new(pem_label, der.to_vec()).encode()))
    }

    /// Traditional PEM encrypted with `DEK-Info` under one of
    /// [`LEGACY_CIPHERS`](crate::pem::LEGACY_CIPHERS)
    pub fn encrypted_traditional_private_key_to_pem<R: RngCore + CryptoRng>(
        &self,
        key: &PrivateKey,
        password: &[u8],
        cipher: &str,
        rng: &mut R,
    ) -> Result<String> {
        let (pem_label, der) = self.marshal_traditional_private_key(key)?;
        Ok(pem::encrypt_block(&self.ciphers, pem_label, &der, password, cipher, rng)?.encode())
    }

    /// `PUBLIC KEY` PEM
    pub fn public_key_to_pem(&self, key: &PublicKey) -> Result<String> {
        let der = self.marshal_public_key(key)?;
        Ok(PemBlock::new(label::PUBLIC_KEY, der).encode())
    }

    /// Parse the first private key block in `text`, whatever its label
    ///
    /// `password` is required for `ENCRYPTED PRIVATE KEY` and for blocks
    /// with legacy encryption headers.
    pub fn parse_pem_private_key(&self, text: &str, password: Option<&[u8]>) -> Result<PrivateKey> {
        let block = PemBlock::decode(text)?;
        let need_password = || {
            password.ok_or_else(|| Error::param("PEM private key", "encrypted block needs a password"))
        };
        match block.label.as_str() {
            label::ENCRYPTED_PRIVATE_KEY => {
                self.parse_encrypted_private_key(&block.contents, need_password()?)
            }
            label::PRIVATE_KEY if !block.is_encrypted() => self.parse_private_key(&block.contents),
            label::PRIVATE_KEY => {
                let der = pem::decrypt_block(&self.ciphers, &block, need_password()?)?;
                self.parse_private_key(&der)
                    .malformed_as_decryption("PEM private key")
            }
            other if block.is_encrypted() => {
                let der = pem::decrypt_block(&self.ciphers, &block, need_password()?)?;
                self.parse_traditional_private_key(other, &der)
                    .malformed_as_decryption("PEM private key")
            }
            other => self.parse_traditional_private_key(other, &block.contents),
        }
    }

    /// Parse the first public key block: `PUBLIC KEY` or `RSA PUBLIC KEY`
    pub fn parse_pem_public_key(&self, text: &str) -> Result<PublicKey> {
        let block = PemBlock::decode(text)?;
        match block.label.as_str() {
            label::PUBLIC_KEY => self.parse_public_key(&block.contents),
            label::RSA_PUBLIC_KEY => self.parse_rsa_public_key(&block.contents).map(PublicKey::Rsa),
            other => Err(unknown_label(other)),
        }
    }
}

fn unknown_label(pem_label: &str) -> Error {
    debug!(label = pem_label, "unknown PEM label");
    Error::unsupported("PEM label", pem_label)
}

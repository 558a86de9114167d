//! Content-encryption cipher registry
//!
//! Each suite is a [`PbeCipher`]: a fixed key size, an IV (or nonce) size,
//! and the DER parameters that carry the IV inside an `AlgorithmIdentifier`.
//! Suites are looked up by name (`AES-256-CBC`, case and dashes ignored) or
//! by OID. The registry is frozen once built, the same way as the curve
//! registry.

mod suites;

use std::collections::HashMap;
use std::sync::Arc;

use const_oid::ObjectIdentifier;
use keyseal_algorithms::math::random_bytes;
use keyseal_api::{Error, Result};
use once_cell::sync::Lazy;
use rand::RngCore;
use tracing::{debug, trace};

pub use suites::{BlockAlgorithm, BlockSuite, CipherMode, Gost28147Suite, GostSbox};

/// A symmetric cipher usable as a PBES2 encryption scheme
pub trait PbeCipher: Send + Sync {
    /// Canonical name, e.g. `AES-256-CBC`
    fn name(&self) -> &str;

    fn oid(&self) -> ObjectIdentifier;

    fn key_size(&self) -> usize;

    /// IV or nonce size drawn by [`encrypt`](Self::encrypt)
    fn iv_size(&self) -> usize;

    /// Whether the suite carries its IV in a way legacy PEM headers can express
    fn is_block_chaining(&self) -> bool {
        false
    }

    /// Encrypt with an explicit IV
    fn encrypt_with_iv(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt with an explicit IV
    ///
    /// Bad padding, a failed tag check or a ciphertext length the mode
    /// cannot have produced are decryption failures.
    fn decrypt_with_iv(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// DER parameters carrying `iv`
    fn encode_parameters(&self, iv: &[u8]) -> Vec<u8>;

    /// Recover the IV and any mode settings from DER parameters
    fn decode_parameters(&self, parameters: Option<&[u8]>) -> Result<Vec<u8>>;

    /// Encrypt under a fresh random IV; returns `(ciphertext, parameters)`
    fn encrypt(
        &self,
        rng: &mut dyn RngCore,
        key: &[u8],
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        let iv = random_bytes(rng, self.iv_size())?;
        let ciphertext = self.encrypt_with_iv(key, &iv, plaintext)?;
        Ok((ciphertext, self.encode_parameters(&iv)))
    }

    /// Decrypt using the IV recorded in `parameters`
    fn decrypt(&self, key: &[u8], parameters: Option<&[u8]>, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let iv = self.decode_parameters(parameters)?;
        self.decrypt_with_iv(key, &iv, ciphertext)
    }
}

/// Lookup key for cipher names: upper case, no dashes or underscores
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Collects cipher suites before the registry is frozen
#[derive(Default)]
pub struct CipherRegistryBuilder {
    suites: Vec<Arc<dyn PbeCipher>>,
}

impl CipherRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preloaded with the built-in suites
    pub fn with_defaults() -> Result<Self> {
        suites::builtin()?
            .into_iter()
            .try_fold(Self::new(), |builder, suite| builder.register(suite))
    }

    /// Add a suite; a name or OID already present is an invalid-parameter error
    pub fn register(mut self, suite: Arc<dyn PbeCipher>) -> Result<Self> {
        let key = normalize(suite.name());
        if self.suites.iter().any(|s| normalize(s.name()) == key) {
            return Err(Error::param(
                "cipher registration",
                format!("cipher {} is already registered", suite.name()),
            ));
        }
        if self.suites.iter().any(|s| s.oid() == suite.oid()) {
            return Err(Error::param(
                "cipher registration",
                format!("OID {} is already registered", suite.oid()),
            ));
        }
        self.suites.push(suite);
        Ok(self)
    }

    pub fn build(self) -> CipherRegistry {
        let mut by_name = HashMap::with_capacity(self.suites.len());
        let mut by_oid = HashMap::with_capacity(self.suites.len());
        for suite in self.suites {
            by_name.insert(normalize(suite.name()), Arc::clone(&suite));
            by_oid.insert(suite.oid(), suite);
        }
        debug!(ciphers = by_oid.len(), "cipher registry frozen");
        CipherRegistry { by_name, by_oid }
    }
}

/// Immutable name/OID → suite table
pub struct CipherRegistry {
    by_name: HashMap<String, Arc<dyn PbeCipher>>,
    by_oid: HashMap<ObjectIdentifier, Arc<dyn PbeCipher>>,
}

impl CipherRegistry {
    /// Resolve a cipher name or a dotted OID string
    pub fn lookup(&self, identifier: &str) -> Result<Arc<dyn PbeCipher>> {
        if let Ok(oid) = ObjectIdentifier::new(identifier) {
            if let Some(suite) = self.by_oid.get(&oid) {
                return Ok(Arc::clone(suite));
            }
        }
        match self.by_name.get(&normalize(identifier)) {
            Some(suite) => {
                trace!(cipher = suite.name(), "resolved cipher by name");
                Ok(Arc::clone(suite))
            }
            None => Err(Error::unsupported("cipher lookup", identifier)),
        }
    }

    pub fn by_oid(&self, oid: &ObjectIdentifier) -> Result<Arc<dyn PbeCipher>> {
        self.by_oid.get(oid).cloned().ok_or_else(|| {
            debug!(%oid, "unknown cipher OID");
            Error::unsupported("cipher lookup", oid.to_string())
        })
    }

    /// Canonical names of every registered suite, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.by_oid.values().map(|s| s.name().to_string()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.by_oid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_oid.is_empty()
    }
}

static DEFAULT: Lazy<Result<Arc<CipherRegistry>>> =
    Lazy::new(|| CipherRegistryBuilder::with_defaults().map(|b| Arc::new(b.build())));

/// The process-wide registry of built-in suites
pub fn default_ciphers() -> Result<Arc<CipherRegistry>> {
    (*DEFAULT).clone()
}

//! Password-based key derivation
//!
//! Every KDF here implements [`PasswordKdf`], so the encryption schemes above
//! this crate can hold one behind a trait object once its parameters have
//! been read out of an `AlgorithmIdentifier`.
//!
//! ```
//! use keyseal_algorithms::kdf::{PasswordKdf, Pbkdf2};
//! use keyseal_algorithms::HashAlgorithm;
//!
//! let kdf = Pbkdf2::new(HashAlgorithm::Sha256, 4096).unwrap();
//! let key = kdf.derive(b"password", b"salt", 32).unwrap();
//! assert_eq!(key.len(), 32);
//! ```

use zeroize::Zeroizing;

use crate::error::{Error, Result};

pub mod evp;
pub mod pbkdf1;
pub mod pbkdf2;
pub mod pkcs12;
pub mod scrypt;

pub use self::evp::EvpBytesToKey;
pub use self::pbkdf1::Pbkdf1;
pub use self::pbkdf2::Pbkdf2;
pub use self::pkcs12::{bmp_password, Pkcs12Kdf, Pkcs12KeyId};
pub use self::scrypt::Scrypt;

/// Derives a symmetric key from a password and salt
pub trait PasswordKdf: Send + Sync {
    /// Short algorithm name, e.g. `PBKDF2-SHA256`
    fn name(&self) -> String;

    /// Derive exactly `key_len` bytes
    fn derive(&self, password: &[u8], salt: &[u8], key_len: usize) -> Result<Zeroizing<Vec<u8>>>;
}

/// Largest iteration count accepted by the iterated KDFs
///
/// Containers carry their own iteration count, so an unbounded value would let
/// a hostile file stall the caller.
pub const MAX_ITERATIONS: u32 = 10_000_000;

/// Largest scrypt working set (`128 * r * N` and `128 * r * p`), 256 MiB
pub const SCRYPT_MAX_MEMORY: u64 = 256 * 1024 * 1024;

pub(crate) fn check_iterations(context: &'static str, iterations: u32) -> Result<()> {
    if iterations == 0 {
        return Err(Error::param(context, "iteration count must be positive"));
    }
    if iterations > MAX_ITERATIONS {
        return Err(Error::param(
            context,
            format!("iteration count {iterations} exceeds {MAX_ITERATIONS}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_key_len(context: &'static str, key_len: usize) -> Result<()> {
    if key_len == 0 {
        return Err(Error::param(context, "derived key length must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests;

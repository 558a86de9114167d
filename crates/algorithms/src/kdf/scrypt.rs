//! Scrypt (RFC 7914) over the `scrypt` crate

use zeroize::Zeroizing;

use super::{check_key_len, PasswordKdf, SCRYPT_MAX_MEMORY};
use crate::error::{Error, Result};

/// The `scrypt` crate validates the length it stores in `Params` against its
/// own PHC limits; the raw derivation honours the output buffer instead.
const PARAMS_LEN: usize = 32;

/// Scrypt with cost `N = 2^log_n`, block size `r` and parallelism `p`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scrypt {
    log_n: u8,
    r: u32,
    p: u32,
}

impl Scrypt {
    /// `cost_n` must be a power of two greater than one, and the working set
    /// must stay within [`SCRYPT_MAX_MEMORY`]
    pub fn new(cost_n: u64, r: u32, p: u32) -> Result<Self> {
        if cost_n < 2 || !cost_n.is_power_of_two() {
            return Err(Error::param("scrypt", "cost N must be a power of two above 1"));
        }
        if r == 0 || p == 0 {
            return Err(Error::param("scrypt", "block size and parallelism must be positive"));
        }
        let block = 128 * u128::from(r);
        let memory = block * u128::from(cost_n);
        let ceiling = u128::from(SCRYPT_MAX_MEMORY);
        if memory > ceiling || block * u128::from(p) > ceiling {
            return Err(Error::param(
                "scrypt",
                format!("N={cost_n} r={r} p={p} needs more than {SCRYPT_MAX_MEMORY} bytes"),
            ));
        }
        let log_n = cost_n.trailing_zeros() as u8;
        ::scrypt::Params::new(log_n, r, p, PARAMS_LEN)
            .map_err(|e| Error::param("scrypt", e.to_string()))?;
        Ok(Self { log_n, r, p })
    }

    /// Cost parameter N
    pub fn cost(&self) -> u64 {
        1u64 << self.log_n
    }

    pub fn block_size(&self) -> u32 {
        self.r
    }

    pub fn parallelization(&self) -> u32 {
        self.p
    }
}

impl PasswordKdf for Scrypt {
    fn name(&self) -> String {
        String::from("SCRYPT")
    }

    fn derive(&self, password: &[u8], salt: &[u8], key_len: usize) -> Result<Zeroizing<Vec<u8>>> {
        check_key_len("scrypt", key_len)?;
        let params = ::scrypt::Params::new(self.log_n, self.r, self.p, PARAMS_LEN)
            .map_err(|e| Error::param("scrypt", e.to_string()))?;
        let mut out = Zeroizing::new(vec![0u8; key_len]);
        ::scrypt::scrypt(password, salt, &params, &mut out)
            .map_err(|e| Error::param("scrypt", e.to_string()))?;
        Ok(out)
    }
}

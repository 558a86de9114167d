//! PKCS#7 padding

use subtle::{Choice, ConstantTimeEq};

use crate::error::{Error, Result};

/// Pad `data` to a multiple of `block_size` (always adds 1..=block_size bytes)
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let pad = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + pad);
    out.extend_from_slice(data);
    out.resize(data.len() + pad, pad as u8);
    out
}

/// Strip PKCS#7 padding
///
/// The pad bytes are compared without early exit. Any inconsistency is a
/// decryption failure: it is what a wrong key usually looks like.
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    if data.is_empty() || data.len() % block_size != 0 {
        return Err(Error::decryption(
            "PKCS#7 padding",
            "data is not a whole number of blocks",
        ));
    }

    let pad = data[data.len() - 1] as usize;
    if pad == 0 || pad > block_size {
        return Err(Error::decryption("PKCS#7 padding", "invalid padding"));
    }

    let mut valid = Choice::from(1u8);
    for b in &data[data.len() - pad..] {
        valid &= b.ct_eq(&(pad as u8));
    }
    if !bool::from(valid) {
        return Err(Error::decryption("PKCS#7 padding", "invalid padding"));
    }

    Ok(data[..data.len() - pad].to_vec())
}

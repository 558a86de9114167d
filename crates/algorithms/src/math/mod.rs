//! Big-integer helpers shared by the curve, signature and key code

pub mod prime;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::RngCore;

use crate::error::{Error, Result};

/// Upper bound on rejection-sampling draws before the source is declared exhausted
pub const MAX_SAMPLING_ATTEMPTS: usize = 64;

/// Big-endian bytes of `value`, left-padded with zeros to exactly `len`
pub fn to_padded_bytes(value: &BigUint, len: usize) -> Result<Vec<u8>> {
    let bytes = value.to_bytes_be();
    if value.is_zero() {
        return Ok(vec![0u8; len]);
    }
    if bytes.len() > len {
        return Err(Error::invalid_key(
            "integer encoding",
            format!("value needs {} bytes, field is {}", bytes.len(), len),
        ));
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    Ok(out)
}

/// Inverse of `a` modulo `m`, if it exists
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() {
        return None;
    }
    let a = BigInt::from(a % m);
    let m = BigInt::from(m.clone());
    let egcd = a.extended_gcd(&m);
    if !egcd.gcd.is_one() {
        return None;
    }
    egcd.x.mod_floor(&m).to_biguint()
}

/// Square root of `a` modulo an odd prime `p` (Tonelli-Shanks)
///
/// Returns `None` when `a` is a quadratic non-residue.
pub fn sqrt_mod(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a = a % p;
    if a.is_zero() {
        return Some(BigUint::zero());
    }
    let p_minus_one = p - 1u32;
    let half = &p_minus_one >> 1u32;
    if !a.modpow(&half, p).is_one() {
        return None;
    }
    if p.bit(1) {
        return Some(a.modpow(&((p + 1u32) >> 2u32), p));
    }

    let s = p_minus_one.trailing_zeros()?;
    let q = &p_minus_one >> s;
    let mut z = BigUint::from(2u32);
    while z.modpow(&half, p) != p_minus_one {
        z += 1u32;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + 1u32) >> 1u32), p);
    while !t.is_one() {
        let mut i = 0u64;
        let mut t2 = t.clone();
        while !t2.is_one() {
            t2 = &t2 * &t2 % p;
            i += 1;
            if i == m {
                return None;
            }
        }
        let b = c.modpow(&(BigUint::one() << (m - i - 1)), p);
        m = i;
        c = &b * &b % p;
        t = t * &c % p;
        r = r * &b % p;
    }
    Some(r)
}

/// Fill a fresh buffer from `rng`, surfacing source failures as errors
pub fn random_bytes<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    rng.try_fill_bytes(&mut buf)?;
    Ok(buf)
}

/// Uniform integer in `[1, bound)` by rejection sampling
///
/// Draws as many bytes as `bound` occupies, masks the excess top bits and
/// retries out-of-range or zero values, giving up after
/// [`MAX_SAMPLING_ATTEMPTS`] draws.
pub fn random_nonzero_below<R: RngCore + ?Sized>(
    rng: &mut R,
    bound: &BigUint,
    context: &'static str,
) -> Result<BigUint> {
    if bound <= &BigUint::one() {
        return Err(Error::param(context, "bound must exceed one"));
    }
    let bits = bound.bits();
    let len = ((bits + 7) / 8) as usize;
    let excess = (len as u64 * 8 - bits) as u32;

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let mut buf = random_bytes(rng, len)?;
        buf[0] &= 0xffu8 >> excess;
        let candidate = BigUint::from_bytes_be(&buf);
        if !candidate.is_zero() && &candidate < bound {
            return Ok(candidate);
        }
    }
    Err(Error::RandomSourceExhausted {
        context,
        attempts: MAX_SAMPLING_ATTEMPTS,
    })
}

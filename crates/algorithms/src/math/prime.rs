//! Probabilistic primality testing and prime generation

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::RngCore;

use super::random_bytes;
use crate::error::{Error, Result};

/// Odd primes below 256, for trial division before Miller-Rabin
const SMALL_PRIMES: [u32; 53] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Miller-Rabin rounds used by [`generate_prime`]
pub const MILLER_RABIN_ROUNDS: usize = 32;

/// Miller-Rabin test with `rounds` random bases
pub fn is_probable_prime<R: RngCore + ?Sized>(
    n: &BigUint,
    rounds: usize,
    rng: &mut R,
) -> Result<bool> {
    let two = BigUint::from(2u32);
    if n < &two {
        return Ok(false);
    }
    if n == &two {
        return Ok(true);
    }
    if n.is_even() {
        return Ok(false);
    }
    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if n == &p {
            return Ok(true);
        }
        if (n % &p).is_zero() {
            return Ok(false);
        }
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;
    let len = ((n.bits() + 7) / 8) as usize;
    let span = n - 3u32;

    'witness: for _ in 0..rounds {
        let a = BigUint::from_bytes_be(&random_bytes(rng, len)?) % &span + &two;
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return Ok(false);
    }
    Ok(true)
}

/// Random prime of exactly `bits` bits with the top two bits set
///
/// Setting both top bits makes the product of two such primes exactly
/// `2 * bits` long.
pub fn generate_prime<R: RngCore + ?Sized>(rng: &mut R, bits: u64) -> Result<BigUint> {
    if bits < 16 {
        return Err(Error::param("prime generation", "at least 16 bits required"));
    }
    let len = ((bits + 7) / 8) as usize;
    let excess = (len as u64 * 8 - bits) as u32;
    let max_attempts = 100 * bits as usize;

    for _ in 0..max_attempts {
        let mut buf = random_bytes(rng, len)?;
        buf[0] &= 0xffu8 >> excess;
        let mut candidate = BigUint::from_bytes_be(&buf);
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(bits - 2, true);
        candidate.set_bit(0, true);
        if is_probable_prime(&candidate, MILLER_RABIN_ROUNDS, rng)? {
            return Ok(candidate);
        }
    }
    Err(Error::RandomSourceExhausted {
        context: "prime generation",
        attempts: max_attempts,
    })
}

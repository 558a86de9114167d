//! Validation utilities shared by the keyseal crates

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidLength {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate key material that must have an exact byte width
#[inline(always)]
pub fn key_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::invalid_key(
            context,
            format!("expected {expected} bytes, got {actual}"),
        ));
    }
    Ok(())
}

/// Validate that no bytes remain after a decoded structure
#[inline(always)]
pub fn no_trailing(context: &'static str, remaining: usize) -> Result<()> {
    if remaining != 0 {
        return Err(Error::malformed(
            context,
            format!("{remaining} trailing bytes after structure"),
        ));
    }
    Ok(())
}

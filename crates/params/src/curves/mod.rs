//! Elliptic curve domain parameters
//!
//! All curves here are short Weierstrass curves `y^2 = x^3 + a*x + b (mod p)`.

pub mod gost;
pub mod nist;
pub mod sm2;

/// Domain parameters of a named curve
///
/// Every field element is big-endian and zero-padded to `point_size` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Canonical parameter-set name
    pub name: &'static str,
    /// Field prime
    pub p: &'static [u8],
    /// Curve coefficient a
    pub a: &'static [u8],
    /// Curve coefficient b
    pub b: &'static [u8],
    /// Prime order of the base point subgroup
    pub q: &'static [u8],
    /// Base point x-coordinate
    pub x: &'static [u8],
    /// Base point y-coordinate
    pub y: &'static [u8],
    /// Group cofactor
    pub cofactor: u32,
    /// Byte width of a field element or scalar
    pub point_size: usize,
}

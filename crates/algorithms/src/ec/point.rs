//! Curve points in affine and Jacobian coordinates

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// A point on a short Weierstrass curve in affine coordinates
///
/// The point at infinity is represented by the `identity` flag; its
/// coordinates are meaningless and kept at zero.
#[derive(Clone, Debug)]
pub struct AffinePoint {
    pub(crate) identity: bool,
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        if self.identity || other.identity {
            return self.identity == other.identity;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for AffinePoint {}

impl AffinePoint {
    /// Build a point from coordinates without checking the curve equation
    ///
    /// Use [`Curve::point`](super::Curve::point) for untrusted input.
    pub fn new_unchecked(x: BigUint, y: BigUint) -> Self {
        Self {
            identity: false,
            x,
            y,
        }
    }

    /// The point at infinity
    pub fn identity() -> Self {
        Self {
            identity: true,
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }

    /// Check if this is the point at infinity
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    /// Affine x-coordinate
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Affine y-coordinate
    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

/// Jacobian point `(X, Y, Z)` standing for `(X/Z^2, Y/Z^3)`; `Z = 0` is infinity
#[derive(Clone, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) z: BigUint,
}

impl ProjectivePoint {
    pub(crate) fn identity() -> Self {
        Self {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    pub(crate) fn from_affine(point: &AffinePoint) -> Self {
        if point.identity {
            return Self::identity();
        }
        Self {
            x: point.x.clone(),
            y: point.y.clone(),
            z: BigUint::one(),
        }
    }
}

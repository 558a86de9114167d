//! Short Weierstrass curve arithmetic over arbitrary-precision integers
//!
//! A [`Curve`] is built from a [`CurveParams`] constant and carries the field
//! prime, coefficients, subgroup order and generator as big integers. All
//! arithmetic is variable-time; it serves key validation, public key
//! derivation and the signature engine, none of which run on secret-dependent
//! branches that an observer outside the process can time.

mod point;

pub use point::AffinePoint;
use point::ProjectivePoint;

use keyseal_params::curves::CurveParams;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::math::{sqrt_mod, to_padded_bytes};

/// SEC1 prefix of an uncompressed point
pub const SEC1_UNCOMPRESSED: u8 = 0x04;

/// An elliptic curve `y^2 = x^3 + a*x + b` over a prime field
///
/// Equality compares the name as well as the domain parameters, so two
/// parameter sets that share a curve stay distinct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    name: &'static str,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    q: BigUint,
    generator: AffinePoint,
    cofactor: u32,
    point_size: usize,
}

impl Curve {
    /// Lift a parameter constant into a usable curve
    ///
    /// Rejects parameters whose field prime is too small or even, whose
    /// coefficients are not reduced, or whose generator is not on the curve.
    pub fn from_params(params: &CurveParams) -> Result<Self> {
        let p = BigUint::from_bytes_be(params.p);
        let a = BigUint::from_bytes_be(params.a);
        let b = BigUint::from_bytes_be(params.b);
        let q = BigUint::from_bytes_be(params.q);
        let gx = BigUint::from_bytes_be(params.x);
        let gy = BigUint::from_bytes_be(params.y);

        if p <= BigUint::from(3u32) || !p.bit(0) {
            return Err(Error::construction("curve", "field prime must be an odd prime"));
        }
        if a >= p || b >= p || gx >= p || gy >= p {
            return Err(Error::construction("curve", "parameters not reduced modulo p"));
        }
        if q.is_zero() || params.cofactor == 0 {
            return Err(Error::construction("curve", "zero order or cofactor"));
        }
        let width = params.point_size as u64 * 8;
        if width < p.bits() || width < q.bits() {
            return Err(Error::construction("curve", "point size narrower than field or order"));
        }

        let curve = Self {
            name: params.name,
            p,
            a,
            b,
            q,
            generator: AffinePoint::new_unchecked(gx, gy),
            cofactor: params.cofactor,
            point_size: params.point_size,
        };
        if !curve.is_on_curve(&curve.generator) {
            return Err(Error::construction("curve", "generator is not on the curve"));
        }
        Ok(curve)
    }

    /// Canonical parameter-set name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field prime
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient a
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Prime order of the generator
    pub fn order(&self) -> &BigUint {
        &self.q
    }

    /// Group cofactor
    pub fn cofactor(&self) -> u32 {
        self.cofactor
    }

    /// Byte width of a coordinate or scalar
    pub fn point_size(&self) -> usize {
        self.point_size
    }

    /// Base point
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Whether `point` satisfies the curve equation
    ///
    /// The point at infinity is a group element but has no coordinates, so
    /// it is reported as not on the curve.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        if point.identity || point.x >= self.p || point.y >= self.p {
            return false;
        }
        let lhs = self.mul_mod(&point.y, &point.y);
        let x2 = self.mul_mod(&point.x, &point.x);
        let rhs = (self.mul_mod(&x2, &point.x) + self.mul_mod(&self.a, &point.x) + &self.b) % &self.p;
        lhs == rhs
    }

    /// Build a checked point from big-endian coordinates
    pub fn point(&self, x: &[u8], y: &[u8]) -> Result<AffinePoint> {
        let point = AffinePoint::new_unchecked(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y));
        if !self.is_on_curve(&point) {
            return Err(Error::invalid_key("curve point", "point is not on the curve"));
        }
        Ok(point)
    }

    /// `X || Y`, each coordinate padded to the point size
    pub fn encode_coordinates(&self, point: &AffinePoint) -> Result<Vec<u8>> {
        if point.identity {
            return Err(Error::invalid_key("curve point", "cannot encode the point at infinity"));
        }
        let mut out = to_padded_bytes(&point.x, self.point_size)?;
        out.extend_from_slice(&to_padded_bytes(&point.y, self.point_size)?);
        Ok(out)
    }

    /// SEC1 uncompressed encoding `04 || X || Y`
    pub fn encode_point(&self, point: &AffinePoint) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(1 + 2 * self.point_size);
        out.push(SEC1_UNCOMPRESSED);
        out.extend_from_slice(&self.encode_coordinates(point)?);
        Ok(out)
    }

    /// Decode a SEC1 point, compressed (`02`/`03`) or uncompressed (`04`)
    pub fn decode_point(&self, bytes: &[u8]) -> Result<AffinePoint> {
        let n = self.point_size;
        match bytes.first() {
            Some(&SEC1_UNCOMPRESSED) if bytes.len() == 1 + 2 * n => {
                self.point(&bytes[1..1 + n], &bytes[1 + n..])
            }
            Some(&prefix @ (0x02 | 0x03)) if bytes.len() == 1 + n => {
                let x = BigUint::from_bytes_be(&bytes[1..]);
                if x >= self.p {
                    return Err(Error::invalid_key("curve point", "x-coordinate out of range"));
                }
                let x2 = self.mul_mod(&x, &x);
                let rhs = (self.mul_mod(&x2, &x) + self.mul_mod(&self.a, &x) + &self.b) % &self.p;
                let mut y = sqrt_mod(&rhs, &self.p)
                    .ok_or_else(|| Error::invalid_key("curve point", "x has no matching y"))?;
                if y.bit(0) != (prefix == 0x03) {
                    y = (&self.p - &y) % &self.p;
                }
                Ok(AffinePoint::new_unchecked(x, y))
            }
            _ => Err(Error::invalid_key(
                "curve point",
                format!("bad SEC1 point encoding of {} bytes", bytes.len()),
            )),
        }
    }

    /// Split `X || Y` into a checked point
    pub fn decode_coordinates(&self, bytes: &[u8]) -> Result<AffinePoint> {
        let n = self.point_size;
        if bytes.len() != 2 * n {
            return Err(Error::invalid_key(
                "curve point",
                format!("expected {} coordinate bytes, got {}", 2 * n, bytes.len()),
            ));
        }
        self.point(&bytes[..n], &bytes[n..])
    }

    /// Point addition
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> AffinePoint {
        let sum = self.add_projective(
            &ProjectivePoint::from_affine(lhs),
            &ProjectivePoint::from_affine(rhs),
        );
        self.to_affine(&sum)
    }

    /// Point doubling
    pub fn double(&self, point: &AffinePoint) -> AffinePoint {
        self.to_affine(&self.double_projective(&ProjectivePoint::from_affine(point)))
    }

    /// Additive inverse
    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        if point.identity {
            return AffinePoint::identity();
        }
        AffinePoint::new_unchecked(point.x.clone(), (&self.p - &point.y) % &self.p)
    }

    /// Scalar multiplication `k * point`
    pub fn mul(&self, point: &AffinePoint, k: &BigUint) -> AffinePoint {
        let base = ProjectivePoint::from_affine(point);
        let mut acc = ProjectivePoint::identity();
        for i in (0..k.bits()).rev() {
            acc = self.double_projective(&acc);
            if k.bit(i) {
                acc = self.add_projective(&acc, &base);
            }
        }
        self.to_affine(&acc)
    }

    /// Scalar multiplication with the generator
    pub fn mul_base(&self, k: &BigUint) -> AffinePoint {
        self.mul(&self.generator, k)
    }

    /// Check that a scalar lies in `[1, q)`
    pub fn check_scalar(&self, k: &BigUint, context: &'static str) -> Result<()> {
        if k.is_zero() {
            return Err(Error::invalid_key(context, "scalar is zero"));
        }
        if k >= &self.q {
            return Err(Error::invalid_key(context, "scalar not below the group order"));
        }
        Ok(())
    }

    fn mul_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    fn sub_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a >= b {
            a - b
        } else {
            a + &self.p - b
        }
    }

    fn to_affine(&self, point: &ProjectivePoint) -> AffinePoint {
        if point.is_identity() {
            return AffinePoint::identity();
        }
        // p is prime, so z^(p-2) is the inverse of z
        let z_inv = point.z.modpow(&(&self.p - 2u32), &self.p);
        let z_inv2 = self.mul_mod(&z_inv, &z_inv);
        let z_inv3 = self.mul_mod(&z_inv2, &z_inv);
        AffinePoint::new_unchecked(
            self.mul_mod(&point.x, &z_inv2),
            self.mul_mod(&point.y, &z_inv3),
        )
    }

    fn double_projective(&self, pt: &ProjectivePoint) -> ProjectivePoint {
        if pt.is_identity() || pt.y.is_zero() {
            return ProjectivePoint::identity();
        }
        let y2 = self.mul_mod(&pt.y, &pt.y);
        let s = self.mul_mod(&(&pt.x * 4u32), &y2);
        let z2 = self.mul_mod(&pt.z, &pt.z);
        let z4 = self.mul_mod(&z2, &z2);
        let m = (self.mul_mod(&pt.x, &pt.x) * 3u32 + self.mul_mod(&self.a, &z4)) % &self.p;

        let x3 = self.sub_mod(&self.mul_mod(&m, &m), &((&s * 2u32) % &self.p));
        let y4_8 = (self.mul_mod(&y2, &y2) * 8u32) % &self.p;
        let y3 = self.sub_mod(&self.mul_mod(&m, &self.sub_mod(&s, &x3)), &y4_8);
        let z3 = self.mul_mod(&(&pt.y * 2u32), &pt.z);
        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    fn add_projective(&self, p1: &ProjectivePoint, p2: &ProjectivePoint) -> ProjectivePoint {
        if p1.is_identity() {
            return p2.clone();
        }
        if p2.is_identity() {
            return p1.clone();
        }
        let z1z1 = self.mul_mod(&p1.z, &p1.z);
        let z2z2 = self.mul_mod(&p2.z, &p2.z);
        let u1 = self.mul_mod(&p1.x, &z2z2);
        let u2 = self.mul_mod(&p2.x, &z1z1);
        let s1 = self.mul_mod(&p1.y, &self.mul_mod(&z2z2, &p2.z));
        let s2 = self.mul_mod(&p2.y, &self.mul_mod(&z1z1, &p1.z));

        if u1 == u2 {
            if s1 != s2 {
                return ProjectivePoint::identity();
            }
            return self.double_projective(p1);
        }

        let h = self.sub_mod(&u2, &u1);
        let r = self.sub_mod(&s2, &s1);
        let h2 = self.mul_mod(&h, &h);
        let h3 = self.mul_mod(&h2, &h);
        let u1h2 = self.mul_mod(&u1, &h2);

        let x3 = self.sub_mod(
            &self.sub_mod(&self.mul_mod(&r, &r), &h3),
            &((&u1h2 * 2u32) % &self.p),
        );
        let y3 = self.sub_mod(
            &self.mul_mod(&r, &self.sub_mod(&u1h2, &x3)),
            &self.mul_mod(&s1, &h3),
        );
        let z3 = self.mul_mod(&self.mul_mod(&h, &p1.z), &p2.z);
        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

impl AffinePoint {
    /// Whether this point has order dividing `curve.order()`
    pub fn in_subgroup(&self, curve: &Curve) -> bool {
        curve.mul(self, curve.order()).is_identity()
    }
}

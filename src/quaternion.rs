// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Quaternion arithmetic.
//!
//! A quaternion is a point in R^4 written `a + xi + yj + zk`.  Addition
//! is vector addition in R^4, and multiplication is the (non-commutative)
//! Hamilton product.  Every operation here returns a fresh value; the
//! handful of `*_self` methods and the assignment operators are the
//! in-place versions of the same formulas and produce identical results.
//!
//! The product and quotient are written out term by term.  Rearranging
//! them changes the floating point rounding, and the rendered images
//! depend on that rounding.

use num::{One, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A quaternion `a + xi + yj + zk` with double precision components.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Quaternion {
    /// The real part.
    pub a: f64,
    /// The `i` component.
    pub x: f64,
    /// The `j` component.
    pub y: f64,
    /// The `k` component.
    pub z: f64,
}

impl Quaternion {
    /// Builds a quaternion from its four components.
    pub fn new(a: f64, x: f64, y: f64, z: f64) -> Quaternion {
        Quaternion { a, x, y, z }
    }

    /// The square of the Euclidean norm in R^4.
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.a * self.a + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// The Euclidean norm in R^4.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// The Hamilton product `self * q`.  Identical to the `*` operator.
    #[inline]
    pub fn hamilton(&self, q: &Quaternion) -> Quaternion {
        let a = self.a * q.a - self.x * q.x - self.y * q.y - self.z * q.z;
        let x = self.a * q.x + self.x * q.a + self.y * q.z - self.z * q.y;
        let y = self.a * q.y - self.x * q.z + self.y * q.a + self.z * q.x;
        let z = self.a * q.z + self.x * q.y - self.y * q.x + self.z * q.a;
        Quaternion::new(a, x, y, z)
    }

    /// `self * self`, without the redundant products of the general case.
    #[inline]
    pub fn square(&self) -> Quaternion {
        let a = self.a * self.a - self.x * self.x - self.y * self.y - self.z * self.z;
        let two_a = 2.0 * self.a;
        Quaternion::new(a, two_a * self.x, two_a * self.y, two_a * self.z)
    }

    /// In-place `square`.
    pub fn square_self(&mut self) {
        *self = self.square();
    }

    /// `self * self * self`.  The vector part of a cube stays parallel to
    /// the vector part of the input, so only two scale factors are needed.
    #[inline]
    pub fn cube(&self) -> Quaternion {
        let rsq = self.a * self.a;
        let vsq = self.x * self.x + self.y * self.y + self.z * self.z;
        let factor = 3.0 * rsq - vsq;
        Quaternion::new(
            (rsq - 3.0 * vsq) * self.a,
            factor * self.x,
            factor * self.y,
            factor * self.z,
        )
    }

    /// In-place `cube`.
    pub fn cube_self(&mut self) {
        *self = self.cube();
    }

    /// Negates the three imaginary components.
    #[inline]
    pub fn conjugate(&self) -> Quaternion {
        Quaternion::new(self.a, -self.x, -self.y, -self.z)
    }

    /// In-place `conjugate`.
    pub fn conjugate_self(&mut self) {
        *self = self.conjugate();
    }

    /// The multiplicative inverse, `conjugate / norm_sq`.  Not defined for
    /// the zero quaternion; the result is then NaN.
    #[inline]
    pub fn reciprocal(&self) -> Quaternion {
        let factor = 1.0 / self.norm_sq();
        Quaternion::new(
            factor * self.a,
            -factor * self.x,
            -factor * self.y,
            -factor * self.z,
        )
    }

    /// In-place `reciprocal`.
    pub fn reciprocate(&mut self) {
        *self = self.reciprocal();
    }

    /// Scales to unit norm.  Not defined for the zero quaternion.
    pub fn normalize(&self) -> Quaternion {
        *self * (1.0 / self.norm())
    }
}

/// The metric induced by the quaternion norm.
#[inline]
pub fn dist(p: &Quaternion, q: &Quaternion) -> f64 {
    let da = p.a - q.a;
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    let dz = p.z - q.z;
    (da * da + dx * dx + dy * dy + dz * dz).sqrt()
}

impl Add for Quaternion {
    type Output = Quaternion;
    fn add(self, q: Quaternion) -> Quaternion {
        Quaternion::new(self.a + q.a, self.x + q.x, self.y + q.y, self.z + q.z)
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;
    fn sub(self, q: Quaternion) -> Quaternion {
        Quaternion::new(self.a - q.a, self.x - q.x, self.y - q.y, self.z - q.z)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;
    fn neg(self) -> Quaternion {
        Quaternion::new(-self.a, -self.x, -self.y, -self.z)
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;
    fn mul(self, q: Quaternion) -> Quaternion {
        self.hamilton(&q)
    }
}

/// `p / q == p * q.reciprocal()`, expanded as `p * conj(q)` scaled by
/// `1 / |q|^2`.
impl Div for Quaternion {
    type Output = Quaternion;
    fn div(self, q: Quaternion) -> Quaternion {
        let a = self.a * q.a + self.x * q.x + self.y * q.y + self.z * q.z;
        let x = -self.a * q.x + self.x * q.a - self.y * q.z + self.z * q.y;
        let y = -self.a * q.y + self.x * q.z + self.y * q.a - self.z * q.x;
        let z = -self.a * q.z - self.x * q.y + self.y * q.x + self.z * q.a;
        let factor = 1.0 / q.norm_sq();
        Quaternion::new(a * factor, x * factor, y * factor, z * factor)
    }
}

// Real scalars act on the real part for addition and subtraction, and on
// every component for multiplication and division.

impl Add<f64> for Quaternion {
    type Output = Quaternion;
    fn add(self, r: f64) -> Quaternion {
        Quaternion::new(self.a + r, self.x, self.y, self.z)
    }
}

impl Sub<f64> for Quaternion {
    type Output = Quaternion;
    fn sub(self, r: f64) -> Quaternion {
        Quaternion::new(self.a - r, self.x, self.y, self.z)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;
    fn mul(self, r: f64) -> Quaternion {
        Quaternion::new(r * self.a, r * self.x, r * self.y, r * self.z)
    }
}

impl Div<f64> for Quaternion {
    type Output = Quaternion;
    fn div(self, r: f64) -> Quaternion {
        let factor = 1.0 / r;
        Quaternion::new(
            self.a * factor,
            self.x * factor,
            self.y * factor,
            self.z * factor,
        )
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, q: Quaternion) {
        *self = *self + q;
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, q: Quaternion) {
        *self = *self - q;
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, q: Quaternion) {
        *self = self.hamilton(&q);
    }
}

impl DivAssign for Quaternion {
    fn div_assign(&mut self, q: Quaternion) {
        *self = *self / q;
    }
}

impl AddAssign<f64> for Quaternion {
    fn add_assign(&mut self, r: f64) {
        self.a += r;
    }
}

impl SubAssign<f64> for Quaternion {
    fn sub_assign(&mut self, r: f64) {
        self.a -= r;
    }
}

impl MulAssign<f64> for Quaternion {
    fn mul_assign(&mut self, r: f64) {
        *self = *self * r;
    }
}

impl DivAssign<f64> for Quaternion {
    fn div_assign(&mut self, r: f64) {
        *self = *self / r;
    }
}

impl Zero for Quaternion {
    fn zero() -> Quaternion {
        Quaternion::new(0.0, 0.0, 0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.a == 0.0 && self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl One for Quaternion {
    fn one() -> Quaternion {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::{Distribution, Uniform};
    use rand::prelude::*;

    /// Relative closeness, measured against the larger of the two norms.
    fn close(p: &Quaternion, q: &Quaternion, tolerance: f64) -> bool {
        let scale = p.norm().max(q.norm()).max(1.0);
        dist(p, q) <= tolerance * scale
    }

    fn samples() -> Vec<Quaternion> {
        let mut points = vec![
            Quaternion::new(2.0, 0.0, 0.0, 0.0),
            Quaternion::new(-0.5, 0.0, 0.0, 0.0),
            Quaternion::new(0.0, 1.0, 0.0, 0.0),
            Quaternion::new(0.0, 0.3, -1.2, 0.7),
            Quaternion::new(1.0, 2.0, 3.0, 4.0),
            Quaternion::new(-0.25, 0.5, 0.125, -2.0),
        ];
        let range = Uniform::new_inclusive(-3.0_f64, 3.0);
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            points.push(Quaternion::new(
                range.sample(&mut rng),
                range.sample(&mut rng),
                range.sample(&mut rng),
                range.sample(&mut rng),
            ));
        }
        points
    }

    #[test]
    fn product_matches_basis_rules() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        let minus_one = Quaternion::new(-1.0, 0.0, 0.0, 0.0);
        assert_eq!(i * i, minus_one);
        assert_eq!(j * j, minus_one);
        assert_eq!(k * k, minus_one);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, -k);
    }

    #[test]
    fn product_is_not_commutative() {
        let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q = Quaternion::new(-2.0, 0.5, 1.0, 3.0);
        assert_ne!(p * q, q * p);
        assert_eq!(p * q, p.hamilton(&q));
    }

    #[test]
    fn distance_is_symmetric() {
        for p in samples().iter() {
            let q = Quaternion::new(p.z, -p.a, 0.5 * p.x, p.y + 1.0);
            assert_eq!(dist(p, &q), dist(&q, p));
            assert_eq!(dist(p, p), 0.0);
        }
    }

    #[test]
    fn square_agrees_with_product() {
        for p in samples().iter() {
            assert!(close(&p.square(), &(*p * *p), 1e-12), "{:?}", p);
        }
    }

    #[test]
    fn cube_agrees_with_product() {
        for p in samples().iter() {
            let cube = p.cube();
            assert!(close(&cube, &(*p * *p * *p), 1e-12), "{:?}", p);
            assert!(close(&cube, &(p.square() * *p), 1e-12), "{:?}", p);
        }
    }

    #[test]
    fn division_round_trips() {
        let points = samples();
        for (p, q) in points.iter().zip(points.iter().rev()) {
            assert!(close(&((*p / *q) * *q), p, 1e-10), "{:?} / {:?}", p, q);
        }
    }

    #[test]
    fn division_agrees_with_reciprocal() {
        let p = Quaternion::new(1.0, -2.0, 0.5, 3.0);
        let q = Quaternion::new(0.25, 1.0, -1.5, 2.0);
        assert!(close(&(p / q), &(p * q.reciprocal()), 1e-14));
    }

    #[test]
    fn reciprocal_is_inverse() {
        for p in samples().iter() {
            assert!(close(&(p.reciprocal() * *p), &Quaternion::one(), 1e-12));
            assert!(close(&(*p * p.reciprocal()), &Quaternion::one(), 1e-12));
        }
    }

    #[test]
    fn scalars_touch_the_right_components() {
        let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(p + 1.0, Quaternion::new(2.0, 2.0, 3.0, 4.0));
        assert_eq!(p - 1.0, Quaternion::new(0.0, 2.0, 3.0, 4.0));
        assert_eq!(p * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(p / 2.0, Quaternion::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn norm_and_normalize() {
        let p = Quaternion::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(p.norm_sq(), 25.0);
        assert_eq!(p.norm(), 5.0);
        let unit = p.normalize();
        assert!((unit.norm() - 1.0).abs() < 1e-15);
        assert_eq!(unit, Quaternion::new(0.2, 0.4, 0.4, 0.8));
    }

    #[test]
    fn in_place_operations_match_pure_forms() {
        let p = Quaternion::new(0.7, -1.1, 0.4, 2.3);
        let q = Quaternion::new(-0.2, 0.9, 1.5, -0.6);

        let mut s = p;
        s.square_self();
        assert_eq!(s, p.square());

        let mut c = p;
        c.cube_self();
        assert_eq!(c, p.cube());

        let mut j = p;
        j.conjugate_self();
        assert_eq!(j, p.conjugate());

        let mut r = p;
        r.reciprocate();
        assert_eq!(r, p.reciprocal());

        let mut m = p;
        m *= q;
        assert_eq!(m, p * q);
        m /= q;
        assert_eq!(m, (p * q) / q);

        let mut t = p;
        t += q;
        t -= 0.5;
        t *= 3.0;
        t /= 2.0;
        t -= q;
        t += 1.0;
        assert_eq!(t, ((((p + q) - 0.5) * 3.0) / 2.0 - q) + 1.0);
    }

    #[test]
    fn zero_and_one() {
        assert!(Quaternion::zero().is_zero());
        assert!(!Quaternion::one().is_zero());
        assert_eq!(Quaternion::zero(), Quaternion::default());
        let p = Quaternion::new(3.0, -1.0, 0.5, 2.0);
        assert_eq!(p * Quaternion::one(), p);
        assert_eq!(p + Quaternion::zero(), p);
    }

    #[test]
    fn zero_reciprocal_is_not_finite() {
        let r = Quaternion::zero().reciprocal();
        assert!(r.a.is_nan());
        assert!(!(Quaternion::one() / Quaternion::zero()).norm_sq().is_finite());
    }
}

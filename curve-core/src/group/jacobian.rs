use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use ark_std::{One, Zero};

use super::AffinePoint;
use crate::curve::CurveConfig;
use crate::field::CurveField;

/// Jacobian point: `(X, Y, Z)` represents `(X / Z^2, Y / Z^3)`. Any point with `Z = 0` is
/// infinity; the canonical zero is `(1, 1, 0)`.
#[derive(Clone, Copy, Debug)]
pub struct JacobianPoint<P: CurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
}

impl<P: CurveConfig> JacobianPoint<P> {
    pub const fn new_unchecked(x: P::BaseField, y: P::BaseField, z: P::BaseField) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new_unchecked(
            P::BaseField::one(),
            P::BaseField::one(),
            P::BaseField::zero(),
        )
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.z.is_zero()
    }

    /// Normalizes to affine with a single inversion. Infinity maps to `(0, 0)`.
    pub fn to_affine(&self) -> AffinePoint<P> {
        if self.is_zero() {
            return AffinePoint::infinity();
        }
        let z_inv = self
            .z
            .inverse()
            .expect("finite Jacobian point has nonzero z");
        let z_inv2 = z_inv.square();
        AffinePoint::new_unchecked(self.x * z_inv2, self.y * z_inv2 * z_inv)
    }

    pub fn double(&self) -> Self {
        let mut p = *self;
        p.double_in_place();
        p
    }

    /// dbl-2007-bl for `a = 0`.
    pub fn double_in_place(&mut self) -> &mut Self {
        if self.is_zero() {
            return self;
        }
        let xx = self.x.square();
        let yy = self.y.square();
        let yyyy = yy.square();
        let zz = self.z.square();
        let s = ((self.x + yy).square() - xx - yyyy).double();
        let m = xx.double() + xx;

        self.z = (self.z + self.y).square() - yy - zz;
        self.x = m.square() - s.double();
        self.y = m * (s - self.x) - yyyy.double().double().double();
        self
    }

    pub fn add_full(&self, other: &Self) -> Self {
        let mut p = *self;
        p.add_full_assign(other);
        p
    }

    /// add-2007-bl. Falls back to doubling when both operands are the same point.
    pub fn add_full_assign(&mut self, other: &Self) -> &mut Self {
        if self.is_zero() {
            *self = *other;
            return self;
        }
        if other.is_zero() {
            return self;
        }

        let z1z1 = other.z.square();
        let z2z2 = self.z.square();
        let u1 = other.x * z2z2;
        let u2 = self.x * z1z1;
        let s1 = other.y * self.z * z2z2;
        let s2 = self.y * other.z * z1z1;

        if u1 == u2 && s1 == s2 {
            return self.double_in_place();
        }

        let h = u2 - u1;
        let i = h.double().square();
        let j = h * i;
        let r = (s2 - s1).double();
        let v = u1 * i;

        self.x = r.square() - j - v.double();
        self.y = r * (v - self.x) - (s1 * j).double();
        self.z = ((self.z + other.z).square() - z1z1 - z2z2) * h;
        self
    }

    pub fn add_mixed(&self, other: &AffinePoint<P>) -> Self {
        let mut p = *self;
        p.add_mixed_assign(other);
        p
    }

    /// madd-2007-bl, adding an affine point (`Z2 = 1`).
    pub fn add_mixed_assign(&mut self, other: &AffinePoint<P>) -> &mut Self {
        if other.is_infinity() {
            return self;
        }
        if self.is_zero() {
            *self = Self::from_affine(other);
            return self;
        }

        let z1z1 = self.z.square();
        let u2 = other.x * z1z1;
        let s2 = other.y * self.z * z1z1;

        if u2 == self.x && s2 == self.y {
            return self.double_in_place();
        }

        let h = u2 - self.x;
        let hh = h.square();
        let i = hh.double().double();
        let j = h * i;
        let r = (s2 - self.y).double();
        let v = self.x * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (self.y * j).double();
        self.z = (self.z + h).square() - z1z1 - hh;
        self.x = x3;
        self.y = y3;
        self
    }
}

impl<P: CurveConfig> Default for JacobianPoint<P> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Projective equality: `X1 Z2^2 = X2 Z1^2` and `Y1 Z2^3 = Y2 Z1^3`.
impl<P: CurveConfig> PartialEq for JacobianPoint<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => true,
            (false, false) => {
                let z1z1 = self.z.square();
                let z2z2 = other.z.square();
                self.x * z2z2 == other.x * z1z1
                    && self.y * (z2z2 * other.z) == other.y * (z1z1 * self.z)
            }
            _ => false,
        }
    }
}

impl<P: CurveConfig> Eq for JacobianPoint<P> {}

impl<P: CurveConfig> PartialEq<AffinePoint<P>> for JacobianPoint<P> {
    fn eq(&self, other: &AffinePoint<P>) -> bool {
        *self == Self::from_affine(other)
    }
}

impl<P: CurveConfig> Neg for JacobianPoint<P> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.y = -self.y;
        self
    }
}

impl<'a, P: CurveConfig> AddAssign<&'a Self> for JacobianPoint<P> {
    fn add_assign(&mut self, other: &'a Self) {
        self.add_full_assign(other);
    }
}

impl<P: CurveConfig> AddAssign for JacobianPoint<P> {
    fn add_assign(&mut self, other: Self) {
        self.add_full_assign(&other);
    }
}

impl<'a, P: CurveConfig> Add<&'a Self> for JacobianPoint<P> {
    type Output = Self;

    fn add(mut self, other: &'a Self) -> Self {
        self.add_full_assign(other);
        self
    }
}

impl<P: CurveConfig> Add for JacobianPoint<P> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self.add_full_assign(&other);
        self
    }
}

impl<'a, P: CurveConfig> AddAssign<&'a AffinePoint<P>> for JacobianPoint<P> {
    fn add_assign(&mut self, other: &'a AffinePoint<P>) {
        self.add_mixed_assign(other);
    }
}

impl<'a, P: CurveConfig> Add<&'a AffinePoint<P>> for JacobianPoint<P> {
    type Output = Self;

    fn add(mut self, other: &'a AffinePoint<P>) -> Self {
        self.add_mixed_assign(other);
        self
    }
}

impl<'a, P: CurveConfig> SubAssign<&'a Self> for JacobianPoint<P> {
    fn sub_assign(&mut self, other: &'a Self) {
        self.add_full_assign(&-*other);
    }
}

impl<'a, P: CurveConfig> Sub<&'a Self> for JacobianPoint<P> {
    type Output = Self;

    fn sub(mut self, other: &'a Self) -> Self {
        self -= other;
        self
    }
}

impl<P: CurveConfig> Sub for JacobianPoint<P> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= &other;
        self
    }
}

impl<P: CurveConfig> Sum for JacobianPoint<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl<P: CurveConfig> fmt::Display for JacobianPoint<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_affine())
    }
}

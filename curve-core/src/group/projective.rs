use std::ops::Neg;

use ark_std::{One, Zero};

use super::{AffinePoint, JacobianPoint};
use crate::curve::CurveConfig;
use crate::field::CurveField;

/// Homogeneous projective point: `(X, Y, Z)` represents `(X / Z, Y / Z)`. Infinity is any
/// point with `Z = 0`, canonically `(0, 1, 0)`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<P: CurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
}

impl<P: CurveConfig> ProjectivePoint<P> {
    pub const fn new_unchecked(x: P::BaseField, y: P::BaseField, z: P::BaseField) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new_unchecked(
            P::BaseField::zero(),
            P::BaseField::one(),
            P::BaseField::zero(),
        )
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.z.is_zero()
    }

    /// Jacobian `(X, Y, Z)` to `(X Z, Y, Z^3)`, no inversion needed. Jacobian infinity lands
    /// on `Z = 0`.
    pub fn from_jacobian(p: &JacobianPoint<P>) -> Self {
        Self::new_unchecked(p.x * p.z, p.y, p.z.square() * p.z)
    }

    pub fn to_affine(&self) -> AffinePoint<P> {
        if self.is_zero() {
            return AffinePoint::infinity();
        }
        let z_inv = self
            .z
            .inverse()
            .expect("finite projective point has nonzero z");
        AffinePoint::new_unchecked(self.x * z_inv, self.y * z_inv)
    }
}

impl<P: CurveConfig> Default for ProjectivePoint<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: CurveConfig> PartialEq for ProjectivePoint<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => true,
            (false, false) => {
                self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
            }
            _ => false,
        }
    }
}

impl<P: CurveConfig> Eq for ProjectivePoint<P> {}

impl<P: CurveConfig> Neg for ProjectivePoint<P> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.y = -self.y;
        self
    }
}

impl<P: CurveConfig> From<JacobianPoint<P>> for ProjectivePoint<P> {
    fn from(p: JacobianPoint<P>) -> Self {
        Self::from_jacobian(&p)
    }
}

impl<P: CurveConfig> From<AffinePoint<P>> for ProjectivePoint<P> {
    fn from(p: AffinePoint<P>) -> Self {
        if p.is_infinity() {
            Self::zero()
        } else {
            Self::new_unchecked(p.x, p.y, P::BaseField::one())
        }
    }
}

impl<P: CurveConfig> JacobianPoint<P> {
    pub fn to_projective(&self) -> ProjectivePoint<P> {
        ProjectivePoint::from_jacobian(self)
    }
}

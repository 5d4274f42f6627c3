use std::fmt;
use std::marker::PhantomData;
use std::ops::Neg;

use ark_std::{One, Zero};

use super::JacobianPoint;
use crate::curve::CurveConfig;
use crate::field::CurveField;
use crate::scalar_mul::scalar_mul;
use crate::utils::errors::CurveError;

/// Affine point on `y^2 = x^3 + b`. Infinity is encoded as `(0, 0)`, which is never a
/// curve point when `b != 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffinePoint<P: CurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    _params: PhantomData<P>,
}

impl<P: CurveConfig> AffinePoint<P> {
    /// Builds a point from coordinates, checking the curve equation.
    pub fn new(x: P::BaseField, y: P::BaseField) -> Result<Self, CurveError> {
        let point = Self::new_unchecked(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve)
        }
    }

    /// Builds a point without checking the curve equation. `(0, 0)` yields infinity.
    pub const fn new_unchecked(x: P::BaseField, y: P::BaseField) -> Self {
        Self {
            x,
            y,
            _params: PhantomData,
        }
    }

    pub fn infinity() -> Self {
        Self::new_unchecked(P::BaseField::zero(), P::BaseField::zero())
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Infinity counts as on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }
        self.y.square() == self.x.square() * self.x + P::COEFF_B
    }

    /// `[s]self` by plain double-and-add, see [`scalar_mul`].
    pub fn mul_bigint<S: AsRef<[u64]>>(&self, scalar: S) -> JacobianPoint<P> {
        scalar_mul(self, scalar)
    }

    pub fn to_jacobian(&self) -> JacobianPoint<P> {
        JacobianPoint::from(*self)
    }
}

impl<P: CurveConfig> Default for AffinePoint<P> {
    fn default() -> Self {
        Self::infinity()
    }
}

impl<P: CurveConfig> Neg for AffinePoint<P> {
    type Output = Self;

    fn neg(self) -> Self {
        if self.is_infinity() {
            self
        } else {
            Self::new_unchecked(self.x, -self.y)
        }
    }
}

impl<P: CurveConfig> From<JacobianPoint<P>> for AffinePoint<P> {
    fn from(p: JacobianPoint<P>) -> Self {
        p.to_affine()
    }
}

impl<P: CurveConfig> fmt::Display for AffinePoint<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinity() {
            write!(f, "O")
        } else {
            write!(f, "E([{},{}])", self.x, self.y)
        }
    }
}

impl<P: CurveConfig> JacobianPoint<P> {
    /// Lifts to the `z = 1` plane; infinity maps to `(1, 1, 0)`.
    pub fn from_affine(p: &AffinePoint<P>) -> Self {
        if p.is_infinity() {
            Self::zero()
        } else {
            Self::new_unchecked(p.x, p.y, P::BaseField::one())
        }
    }
}

impl<P: CurveConfig> From<AffinePoint<P>> for JacobianPoint<P> {
    fn from(p: AffinePoint<P>) -> Self {
        Self::from_affine(&p)
    }
}

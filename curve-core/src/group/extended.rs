use ark_std::{One, Zero};

use super::{AffinePoint, JacobianPoint};
use crate::curve::CurveConfig;
use crate::field::CurveField;

/// Extended Jacobian (XYZZ) coordinates: `(X, Y, ZZ, ZZZ)` with `ZZ^3 = ZZZ^2` represents
/// `(X / ZZ, Y / ZZZ)`. Infinity is `ZZ = 0`. Only used as a bucket accumulator, where
/// mixed additions are cheaper than in plain Jacobian form.
#[derive(Clone, Copy, Debug)]
pub struct ExtendedJacobianPoint<P: CurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub zz: P::BaseField,
    pub zzz: P::BaseField,
}

impl<P: CurveConfig> ExtendedJacobianPoint<P> {
    pub fn zero() -> Self {
        Self {
            x: P::BaseField::one(),
            y: P::BaseField::one(),
            zz: P::BaseField::zero(),
            zzz: P::BaseField::zero(),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.zz.is_zero()
    }

    /// dbl-2008-s-1 with an affine input.
    pub fn double_affine(q: &AffinePoint<P>) -> Self {
        if q.is_infinity() {
            return Self::zero();
        }
        let u = q.y.double();
        let v = u.square();
        let w = u * v;
        let s = q.x * v;
        let xx = q.x.square();
        let m = xx.double() + xx;

        let x = m.square() - s.double();
        let y = m * (s - x) - w * q.y;
        Self { x, y, zz: v, zzz: w }
    }

    /// madd-2008-s.
    pub fn add_mixed_assign(&mut self, q: &AffinePoint<P>) {
        if q.is_infinity() {
            return;
        }
        if self.is_zero() {
            self.x = q.x;
            self.y = q.y;
            self.zz = P::BaseField::one();
            self.zzz = P::BaseField::one();
            return;
        }

        let u2 = q.x * self.zz;
        let s2 = q.y * self.zzz;

        if u2 == self.x && s2 == self.y {
            *self = Self::double_affine(q);
            return;
        }

        let p = u2 - self.x;
        let r = s2 - self.y;
        let pp = p.square();
        let ppp = p * pp;
        let xpp = self.x * pp;

        let x3 = r.square() - ppp - xpp.double();
        self.y = r * (xpp - x3) - self.y * ppp;
        self.x = x3;
        self.zz *= pp;
        self.zzz *= ppp;
    }

    /// `(X ZZ^2, Y ZZZ^2, ZZZ)`, no inversion needed.
    pub fn to_jacobian(&self) -> JacobianPoint<P> {
        if self.is_zero() {
            return JacobianPoint::zero();
        }
        self.to_jacobian_unchecked()
    }

    /// Same as [`Self::to_jacobian`] without the infinity check; callers guarantee `ZZ != 0`.
    #[inline]
    pub fn to_jacobian_unchecked(&self) -> JacobianPoint<P> {
        JacobianPoint::new_unchecked(
            self.x * self.zz.square(),
            self.y * self.zzz.square(),
            self.zzz,
        )
    }

    pub fn to_affine(&self) -> AffinePoint<P> {
        if self.is_zero() {
            return AffinePoint::infinity();
        }
        let zzz_inv = self
            .zzz
            .inverse()
            .expect("finite XYZZ point has nonzero zzz");
        // ZZ^-1 = ZZ^2 / ZZZ^2 since ZZ^3 = ZZZ^2.
        let zz_inv = (self.zz * zzz_inv).square();
        AffinePoint::new_unchecked(self.x * zz_inv, self.y * zzz_inv)
    }
}

impl<P: CurveConfig> Default for ExtendedJacobianPoint<P> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Bn254G2Config;
    use crate::utils::test_utils::{random_g2_points, seeded_rng};

    type Xyzz = ExtendedJacobianPoint<Bn254G2Config>;
    type G2 = JacobianPoint<Bn254G2Config>;

    #[test]
    fn zero_and_first_insert() {
        let g = Bn254G2Config::generator();
        let mut bucket = Xyzz::zero();
        assert!(bucket.to_jacobian().is_zero());
        assert!(bucket.to_affine().is_infinity());

        bucket.add_mixed_assign(&AffinePoint::infinity());
        assert!(bucket.is_zero());

        bucket.add_mixed_assign(&g);
        assert_eq!(bucket.to_affine(), g);
        assert_eq!(bucket.to_jacobian_unchecked(), G2::from(g));
    }

    #[test]
    fn accumulation_matches_jacobian() {
        let mut rng = seeded_rng();
        let points = random_g2_points(10, &mut rng);
        let mut bucket = Xyzz::zero();
        let mut expected = G2::zero();
        for p in &points {
            bucket.add_mixed_assign(p);
            expected.add_mixed_assign(p);
        }
        assert_eq!(bucket.to_jacobian(), expected);
        assert_eq!(bucket.to_affine(), expected.to_affine());
    }

    #[test]
    fn doubling_and_cancellation() {
        let mut rng = seeded_rng();
        let p = random_g2_points(1, &mut rng)[0];

        let mut bucket = Xyzz::zero();
        bucket.add_mixed_assign(&p);
        bucket.add_mixed_assign(&p);
        assert_eq!(bucket.to_jacobian(), G2::from(p).double());
        assert_eq!(Xyzz::double_affine(&p).to_jacobian(), G2::from(p).double());

        let mut bucket = Xyzz::zero();
        bucket.add_mixed_assign(&p);
        bucket.add_mixed_assign(&-p);
        assert!(bucket.is_zero());
        assert!(bucket.to_jacobian().is_zero());
        // An emptied bucket restarts cleanly.
        bucket.add_mixed_assign(&p);
        assert_eq!(bucket.to_affine(), p);
    }
}

use std::fmt::Debug;

use ark_ff::PrimeField;

use crate::field::CurveField;
use crate::group::AffinePoint;

pub mod bn254;

pub use bn254::{Bn254G1Config, Bn254G2Config};

/// Static description of a short Weierstrass curve `y^2 = x^3 + b` (the `a = 0` case only).
pub trait CurveConfig: 'static + Copy + Clone + Debug + PartialEq + Eq + Send + Sync + Sized {
    /// Field the coordinates live in. For G2 this is the quadratic extension.
    type BaseField: CurveField;
    /// Field of the prime-order subgroup the scalars act on.
    type ScalarField: PrimeField;

    const COEFF_B: Self::BaseField;

    fn generator() -> AffinePoint<Self>;
}

/// Curves carrying an efficiently computable endomorphism `phi(x, y) = (beta * x, y)` that
/// acts on the prime-order subgroup as multiplication by `lambda`.
pub trait GlvConfig: CurveConfig {
    /// Cube root of unity `beta`, embedded in the base field.
    const ENDO_COEFF: Self::BaseField;
    /// Eigenvalue `lambda` of the endomorphism, little-endian `u64` limbs.
    const LAMBDA: &'static [u64];
}

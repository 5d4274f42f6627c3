//! Group law for `y^2 = x^3 + b` in affine, Jacobian and extended Jacobian (XYZZ)
//! coordinates, plus a homogeneous projective form for export. All formulas are the `a = 0`
//! specializations from the Explicit-Formulas Database and only touch the base field through
//! [`crate::field::CurveField`].

pub mod affine;
pub mod extended;
pub mod jacobian;
pub mod projective;

pub use affine::AffinePoint;
pub use extended::ExtendedJacobianPoint;
pub use jacobian::JacobianPoint;
pub use projective::ProjectivePoint;

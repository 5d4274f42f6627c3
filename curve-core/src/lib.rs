#![allow(non_snake_case)]
#![allow(type_alias_bounds)]
#![allow(clippy::assertions_on_result_states)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::len_without_is_empty)]

pub mod curve;
pub mod field;
pub mod group;
pub mod msm;
pub mod scalar_mul;
pub mod utils;

pub use curve::{Bn254G1Config, Bn254G2Config, CurveConfig, GlvConfig};
pub use field::CurveField;
pub use group::{AffinePoint, JacobianPoint, ProjectivePoint};
pub use msm::{
    multi_scalar_mul, multi_scalar_mul_field_elements, multi_scalar_mul_with_config, MsmConfig,
    WindowSelector, WindowWidth,
};
pub use scalar_mul::{
    endomorphism, glv_decompose, scalar_mul, scalar_mul_by_generator, scalar_mul_glv,
};
pub use utils::errors::CurveError;

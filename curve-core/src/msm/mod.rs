//! Pippenger bucket MSM. The scalar is cut into `c`-bit windows; each window is handled by
//! its own rayon task, which sorts points into `2^c - 1` XYZZ buckets and folds them with a
//! running sum. The per-window partials are then recombined with `c` doublings apiece.

use ark_ff::{BigInteger, PrimeField};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::curve::CurveConfig;
use crate::group::{AffinePoint, ExtendedJacobianPoint, JacobianPoint};
use crate::utils::errors::CurveError;
use crate::utils::math::Math;

mod window;

pub use window::{MsmConfig, WindowSelector, WindowWidth};

type ScalarBigInt<P> = <<P as CurveConfig>::ScalarField as PrimeField>::BigInt;

/// `sum_i [scalars[i]] points[i]` with the default window policy.
pub fn multi_scalar_mul<P: CurveConfig>(
    points: &[AffinePoint<P>],
    scalars: &[ScalarBigInt<P>],
) -> Result<JacobianPoint<P>, CurveError> {
    multi_scalar_mul_with_config(points, scalars, &MsmConfig::default())
}

#[tracing::instrument(skip_all)]
pub fn multi_scalar_mul_with_config<P: CurveConfig>(
    points: &[AffinePoint<P>],
    scalars: &[ScalarBigInt<P>],
    config: &MsmConfig,
) -> Result<JacobianPoint<P>, CurveError> {
    if points.len() != scalars.len() {
        return Err(CurveError::InvalidInput {
            points: points.len(),
            scalars: scalars.len(),
        });
    }
    if points.is_empty() {
        return Ok(JacobianPoint::zero());
    }

    let window = config.window_for(points.len());
    tracing::debug!(n = points.len(), c = window.bits(), "msm window");

    Ok(match window {
        WindowWidth::C4 => msm_window::<P, 4>(points, scalars),
        WindowWidth::C8 => msm_window::<P, 8>(points, scalars),
        WindowWidth::C10 => msm_window::<P, 10>(points, scalars),
        WindowWidth::C14 => msm_window::<P, 14>(points, scalars),
        WindowWidth::C16 => msm_window::<P, 16>(points, scalars),
        WindowWidth::C18 => msm_window::<P, 18>(points, scalars),
    })
}

/// Same as [`multi_scalar_mul`] for scalars still in field form.
#[tracing::instrument(skip_all)]
pub fn multi_scalar_mul_field_elements<P: CurveConfig>(
    points: &[AffinePoint<P>],
    scalars: &[P::ScalarField],
) -> Result<JacobianPoint<P>, CurveError> {
    if points.len() != scalars.len() {
        return Err(CurveError::InvalidInput {
            points: points.len(),
            scalars: scalars.len(),
        });
    }
    let scalars: Vec<_> = ark_std::cfg_iter!(scalars)
        .map(|s| s.into_bigint())
        .collect();
    multi_scalar_mul(points, &scalars)
}

fn msm_window<P: CurveConfig, const C: usize>(
    points: &[AffinePoint<P>],
    scalars: &[ScalarBigInt<P>],
) -> JacobianPoint<P> {
    let num_bits = P::ScalarField::MODULUS_BIT_SIZE as usize;
    let num_chunks = num_bits.div_ceil(C);
    let num_limbs = <ScalarBigInt<P> as BigInteger>::NUM_LIMBS;

    let partials: Vec<JacobianPoint<P>> = {
        let span = tracing::span!(tracing::Level::INFO, "bucket_accumulate", c = C, num_chunks);
        let _enter = span.enter();
        // Indexed collect keeps chunk order, so partials[k] belongs to window k.
        ark_std::cfg_into_iter!(0..num_chunks)
            .map(|chunk| {
                let selector = WindowSelector::new(chunk, C, num_limbs);
                bucket_accumulate::<P, C>(points, scalars, &selector)
            })
            .collect()
    };

    reduce_chunks(&partials, C)
}

/// Weighted bucket sum `sum_k k * B_k` for one window.
fn bucket_accumulate<P: CurveConfig, const C: usize>(
    points: &[AffinePoint<P>],
    scalars: &[ScalarBigInt<P>],
    selector: &WindowSelector,
) -> JacobianPoint<P> {
    // No bucket for a zero window.
    let mut buckets = vec![ExtendedJacobianPoint::<P>::zero(); C.pow2() - 1];
    for (point, scalar) in points.iter().zip(scalars) {
        let bits = selector.select(scalar.as_ref());
        if bits != 0 {
            buckets[bits as usize - 1].add_mixed_assign(point);
        }
    }

    // running_sum = sum_{j >= k} B_j, and total picks it up once per bucket.
    let mut running_sum = JacobianPoint::zero();
    let mut total = JacobianPoint::zero();
    for bucket in buckets.iter().rev() {
        if !bucket.is_zero() {
            running_sum.add_full_assign(&bucket.to_jacobian_unchecked());
        }
        total += &running_sum;
    }
    total
}

/// Horner recombination from the most significant window down.
#[tracing::instrument(skip_all)]
fn reduce_chunks<P: CurveConfig>(partials: &[JacobianPoint<P>], c: usize) -> JacobianPoint<P> {
    let Some((highest, rest)) = partials.split_last() else {
        return JacobianPoint::zero();
    };
    let mut total = *highest;
    for partial in rest.iter().rev() {
        for _ in 0..c {
            total.double_in_place();
        }
        total += partial;
    }
    total
}

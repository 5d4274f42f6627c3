//! Single-point scalar multiplication. None of this is constant time: callers must not feed
//! secret scalars without masking them first.

use ark_ff::BitIteratorBE;
use num_bigint::BigUint;
use num_integer::Integer;

use crate::curve::{CurveConfig, GlvConfig};
use crate::group::{AffinePoint, JacobianPoint};
use crate::utils::math::limb_bit;

/// `[s]P` by left-to-right double-and-add over the little-endian limbs of `s`.
pub fn scalar_mul<P: CurveConfig, S: AsRef<[u64]>>(
    point: &AffinePoint<P>,
    scalar: S,
) -> JacobianPoint<P> {
    let mut acc = JacobianPoint::zero();
    if point.is_infinity() {
        return acc;
    }
    for bit in BitIteratorBE::without_leading_zeros(scalar) {
        acc.double_in_place();
        if bit {
            acc.add_mixed_assign(point);
        }
    }
    acc
}

fn limbs_to_biguint(limbs: &[u64]) -> BigUint {
    let bytes: Vec<u8> = limbs.iter().flat_map(|limb| limb.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

/// Splits `s` as `s = s1 * lambda + s2` with `0 <= s2 < lambda`.
///
/// This is plain Euclidean division rather than a lattice reduction, so `s1` is only short
/// when `s` is bounded by the scalar field order (for BN254, `s1 < 2^63`).
pub fn glv_decompose<P: GlvConfig, S: AsRef<[u64]>>(scalar: S) -> (BigUint, BigUint) {
    let s = limbs_to_biguint(scalar.as_ref());
    let lambda = limbs_to_biguint(P::LAMBDA);
    s.div_rem(&lambda)
}

/// `phi(x, y) = (beta * x, y)`, which acts on the prime-order subgroup as `[lambda]`.
pub fn endomorphism<P: GlvConfig>(point: &AffinePoint<P>) -> AffinePoint<P> {
    if point.is_infinity() {
        return *point;
    }
    AffinePoint::new_unchecked(point.x * P::ENDO_COEFF, point.y)
}

/// `[s]P = [s1]phi(P) + [s2]P`, with both halves run through one shared doubling chain.
/// Only valid for `P` in the prime-order subgroup.
pub fn scalar_mul_glv<P: GlvConfig, S: AsRef<[u64]>>(
    point: &AffinePoint<P>,
    scalar: S,
) -> JacobianPoint<P> {
    let mut acc = JacobianPoint::zero();
    if point.is_infinity() {
        return acc;
    }
    let (s1, s2) = glv_decompose::<P, _>(scalar);
    let phi = endomorphism(point);
    let k1 = s1.to_u64_digits();
    let k2 = s2.to_u64_digits();

    let num_bits = s1.bits().max(s2.bits()) as usize;
    for i in (0..num_bits).rev() {
        acc.double_in_place();
        if limb_bit(&k1, i) {
            acc.add_mixed_assign(&phi);
        }
        if limb_bit(&k2, i) {
            acc.add_mixed_assign(point);
        }
    }
    acc
}

/// `[s]G` for the configured generator `G`.
pub fn scalar_mul_by_generator<P: GlvConfig, S: AsRef<[u64]>>(scalar: S) -> JacobianPoint<P> {
    scalar_mul_glv(&P::generator(), scalar)
}

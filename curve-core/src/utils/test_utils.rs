use ark_bn254::Fr;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_std::UniformRand;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use crate::curve::{Bn254G1Config, Bn254G2Config, CurveConfig};
use crate::group::{AffinePoint, JacobianPoint};
use crate::scalar_mul::scalar_mul;

pub fn seeded_rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x5eed)
}

/// Random points of the prime-order subgroup of G2, as `[s]G` for random `s`.
pub fn random_g2_points<R: RngCore>(n: usize, rng: &mut R) -> Vec<AffinePoint<Bn254G2Config>> {
    let g = ark_bn254::G2Affine::generator();
    let projective: Vec<_> = (0..n).map(|_| g * Fr::rand(rng)).collect();
    ark_bn254::G2Projective::normalize_batch(&projective)
        .into_iter()
        .map(AffinePoint::from)
        .collect()
}

pub fn random_g1_points<R: RngCore>(n: usize, rng: &mut R) -> Vec<AffinePoint<Bn254G1Config>> {
    let g = ark_bn254::G1Affine::generator();
    let projective: Vec<_> = (0..n).map(|_| g * Fr::rand(rng)).collect();
    ark_bn254::G1Projective::normalize_batch(&projective)
        .into_iter()
        .map(AffinePoint::from)
        .collect()
}

pub fn random_scalars<R: RngCore>(n: usize, rng: &mut R) -> Vec<<Fr as PrimeField>::BigInt> {
    (0..n).map(|_| Fr::rand(rng).into_bigint()).collect()
}

/// Reference MSM: one double-and-add per term, summed with full additions.
pub fn naive_msm<P: CurveConfig, S: AsRef<[u64]>>(
    points: &[AffinePoint<P>],
    scalars: &[S],
) -> JacobianPoint<P> {
    points
        .iter()
        .zip(scalars)
        .map(|(p, s)| scalar_mul(p, s))
        .sum()
}

//! BN254 instances: G2 over the quadratic extension `Fq2 = Fq[u] / (u^2 + 1)` and G1 over `Fq`.

use ark_bn254::{Fq, Fq2, Fr};
use ark_ec::short_weierstrass::SWCurveConfig;
use ark_ec::AffineRepr;
use ark_ff::MontFp;

use super::{CurveConfig, GlvConfig};
use crate::group::AffinePoint;

/// 36x^3 + 18x^2 + 6x + 1 for the BN parameter x = 4965661367192848881.
const BN254_GLV_LAMBDA: [u64; 3] = [0x8b17ea66b99c90dd, 0x5bfc41088d8daaa7, 0xb3c4d79d41a91758];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn254G2Config;

impl CurveConfig for Bn254G2Config {
    type BaseField = Fq2;
    type ScalarField = Fr;

    const COEFF_B: Fq2 = <ark_bn254::g2::Config as SWCurveConfig>::COEFF_B;

    fn generator() -> AffinePoint<Self> {
        ark_bn254::G2Affine::generator().into()
    }
}

impl GlvConfig for Bn254G2Config {
    // On the twist the same lambda pairs with beta^2, not beta.
    const ENDO_COEFF: Fq2 = Fq2::new(
        MontFp!("21888242871839275220042445260109153167277707414472061641714758635765020556616"),
        MontFp!("0"),
    );
    const LAMBDA: &'static [u64] = &BN254_GLV_LAMBDA;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn254G1Config;

impl CurveConfig for Bn254G1Config {
    type BaseField = Fq;
    type ScalarField = Fr;

    const COEFF_B: Fq = <ark_bn254::g1::Config as SWCurveConfig>::COEFF_B;

    fn generator() -> AffinePoint<Self> {
        ark_bn254::G1Affine::generator().into()
    }
}

impl GlvConfig for Bn254G1Config {
    const ENDO_COEFF: Fq =
        MontFp!("2203960485148121921418603742825762020974279258880205651966");
    const LAMBDA: &'static [u64] = &BN254_GLV_LAMBDA;
}

impl From<ark_bn254::G2Affine> for AffinePoint<Bn254G2Config> {
    fn from(p: ark_bn254::G2Affine) -> Self {
        if p.infinity {
            Self::infinity()
        } else {
            Self::new_unchecked(p.x, p.y)
        }
    }
}

impl From<AffinePoint<Bn254G2Config>> for ark_bn254::G2Affine {
    fn from(p: AffinePoint<Bn254G2Config>) -> Self {
        if p.is_infinity() {
            Self::identity()
        } else {
            Self::new_unchecked(p.x, p.y)
        }
    }
}

impl From<ark_bn254::G1Affine> for AffinePoint<Bn254G1Config> {
    fn from(p: ark_bn254::G1Affine) -> Self {
        if p.infinity {
            Self::infinity()
        } else {
            Self::new_unchecked(p.x, p.y)
        }
    }
}

impl From<AffinePoint<Bn254G1Config>> for ark_bn254::G1Affine {
    fn from(p: AffinePoint<Bn254G1Config>) -> Self {
        if p.is_infinity() {
            Self::identity()
        } else {
            Self::new_unchecked(p.x, p.y)
        }
    }
}

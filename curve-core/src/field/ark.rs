use ark_bn254::{Fq, Fq2};

use super::{CurveField, FieldOps};

macro_rules! impl_curve_field {
    ($field:ty, $num_bytes:expr) => {
        impl FieldOps for $field {}
        impl FieldOps<&$field, $field> for $field {}

        impl CurveField for $field {
            const NUM_BYTES: usize = $num_bytes;

            #[inline(always)]
            fn square(&self) -> Self {
                <Self as ark_ff::Field>::square(self)
            }

            #[inline(always)]
            fn double(&self) -> Self {
                <Self as ark_ff::AdditiveGroup>::double(self)
            }

            #[inline]
            fn inverse(&self) -> Option<Self> {
                <Self as ark_ff::Field>::inverse(self)
            }
        }
    };
}

impl_curve_field!(Fq, 32);
impl_curve_field!(Fq2, 64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::CurveError;
    use ark_std::{test_rng, One, UniformRand, Zero};

    #[test]
    fn field_capability_matches_arkworks() {
        let mut rng = test_rng();
        for _ in 0..16 {
            let a = Fq2::rand(&mut rng);
            assert_eq!(CurveField::square(&a), a * a);
            assert_eq!(CurveField::double(&a), a + a);
            if !a.is_zero() {
                assert_eq!(a * CurveField::inverse(&a).unwrap(), Fq2::one());
            }
        }
        assert!(CurveField::inverse(&Fq::zero()).is_none());
    }

    #[test]
    fn canonical_bytes_round_trip() {
        let mut rng = test_rng();
        let a = Fq2::rand(&mut rng);
        let bytes = a.to_bytes();
        assert_eq!(bytes.len(), <Fq2 as CurveField>::NUM_BYTES);
        assert_eq!(<Fq2 as CurveField>::from_bytes(&bytes).unwrap(), a);

        let b = Fq::rand(&mut rng);
        assert_eq!(<Fq as CurveField>::from_bytes(&b.to_bytes()).unwrap(), b);
    }

    #[test]
    fn rejects_bad_encodings() {
        assert_eq!(
            <Fq as CurveField>::from_bytes(&[0u8; 31]),
            Err(CurveError::InvalidFieldEncoding { expected: 32 })
        );
        // All-ones is larger than the BN254 base field modulus.
        assert!(<Fq as CurveField>::from_bytes(&[0xff; 32]).is_err());
    }
}

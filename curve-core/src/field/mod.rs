use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{One, UniformRand, Zero};

use crate::utils::errors::CurveError;

pub trait FieldOps<Rhs = Self, Output = Self>:
    Add<Rhs, Output = Output> + Sub<Rhs, Output = Output> + Mul<Rhs, Output = Output>
{
}

/// The field capability consumed by the group law. Curve coordinates live in a type
/// implementing this trait; the group code never looks past these operations.
pub trait CurveField:
    'static
    + Sized
    + Zero
    + One
    + Neg<Output = Self>
    + FieldOps<Self, Self>
    + for<'a> FieldOps<&'a Self, Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + Eq
    + Copy
    + Sync
    + Send
    + Display
    + Debug
    + Default
    + Hash
    + UniformRand
    + CanonicalSerialize
    + CanonicalDeserialize
{
    /// Number of bytes in the canonical encoding of one element.
    const NUM_BYTES: usize;

    fn square(&self) -> Self;
    fn double(&self) -> Self;
    fn inverse(&self) -> Option<Self>;

    /// Canonical fixed-length little-endian encoding.
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::NUM_BYTES);
        self.serialize_uncompressed(&mut bytes)
            .expect("serializing into a Vec cannot fail");
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CurveError> {
        if bytes.len() != Self::NUM_BYTES {
            return Err(CurveError::InvalidFieldEncoding {
                expected: Self::NUM_BYTES,
            });
        }
        Self::deserialize_uncompressed(bytes).map_err(|_| CurveError::InvalidFieldEncoding {
            expected: Self::NUM_BYTES,
        })
    }
}

pub mod ark;

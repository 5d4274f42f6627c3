use core::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("Invalid input length: {points} points but {scalars} scalars")]
    InvalidInput { points: usize, scalars: usize },
    #[error("Point is not on the curve")]
    NotOnCurve,
    #[error("Invalid field element encoding, expected {expected} canonical bytes")]
    InvalidFieldEncoding { expected: usize },
}

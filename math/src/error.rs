use num_bigint::BigUint;
use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = FieldError> = core::result::Result<T, E>;

/// Errors raised by field construction and element decoding.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("non-canonical value {value} >= modulus {modulus}")]
    NotCanonical { value: BigUint, modulus: BigUint },
    #[error("field modulus must be at least 2, got {0}")]
    InvalidModulus(BigUint),
}

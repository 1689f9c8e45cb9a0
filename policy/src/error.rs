use thiserror::Error;

use math::error::FieldError;

/// Result type specialized for policy operations.
pub type Result<T, E = PolicyError> = std::result::Result<T, E>;

/// Errors that can arise while building or serializing a threshold policy.
///
/// None of these are transient: they are either input-validation failures
/// surfaced to the caller or internal-consistency failures that must halt
/// artifact generation.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid threshold {threshold} for signer count {signer_count}")]
    InvalidThreshold {
        threshold: usize,
        signer_count: usize,
    },
    #[error("C({n},{k}) combinations exceed the configured ceiling {limit}")]
    CombinationLimitExceeded { n: usize, k: usize, limit: u128 },
    #[error("cannot interpolate an empty root set")]
    EmptyRootSet,
    #[error("polynomial does not vanish at root {index}: f(root) = {value}")]
    RootMismatch { index: usize, value: String },
    #[error("{actual} coefficients exceed the artifact layout maximum {max}")]
    CoefficientOverflow { actual: usize, max: usize },
    #[error("{actual} signature slots exceed the artifact layout maximum {max}")]
    TooManySigners { actual: usize, max: usize },
    #[error("coefficient {value} does not fit in {width} big-endian bytes")]
    CoefficientWidth { value: String, width: usize },
    #[error(transparent)]
    Field(#[from] FieldError),
}

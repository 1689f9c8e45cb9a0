//! Threshold-authorization policies as finite-field polynomials.
//!
//! An m-of-n policy over a signer set is encoded as the monic polynomial
//! whose roots are the subset sums of every authorized size-k subset. A
//! verifier (typically a zero-knowledge circuit) checks membership by
//! evaluating the polynomial at a candidate subset sum and testing for
//! zero, without learning the rest of the policy.
//!
//! The pipeline is [`engine::PolicyEngine::build`]:
//! combination generation → interpolation → self-check → commitment.
//! [`artifact::ProverArtifact`] then fixes the result into the padded,
//! fixed-width form the external proving toolchain consumes.
//!
//! All field arithmetic runs over an explicitly configured
//! [`math::PrimeField`]; [`config::bn254_fr`] provides the reference
//! deployment's modulus.

pub mod artifact;
pub mod combinations;
pub mod commitment;
pub mod config;
pub mod engine;
pub mod error;

pub use artifact::{ArtifactLayout, ProverArtifact, SignatureSlot, SignerProof};
pub use combinations::generate_combinations;
pub use commitment::{CommitmentScheme, ShakeCommitter};
pub use engine::{evaluate, interpolate, self_check, PolicyEngine, ThresholdPolicy};
pub use error::{PolicyError, Result};

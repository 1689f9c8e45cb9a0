use serde::Serialize;
use tracing::{debug, instrument};

use math::{
    field_element::{FieldElement, PrimeField},
    poly::Polynomial,
};

use crate::{
    combinations::generate_combinations,
    commitment::{CommitmentScheme, ShakeCommitter},
    config::DEFAULT_COMBINATION_LIMIT,
    error::{PolicyError, Result},
};

/// Build the monic polynomial whose roots are exactly `roots`.
///
/// Returns `m + 1` coefficients for `m` roots; padding to an external
/// fixed length is the artifact serializer's concern. An empty root
/// sequence is rejected: a policy with no authorized subset is a caller
/// error, not a degree-0 polynomial.
pub fn interpolate(field: &PrimeField, roots: &[FieldElement]) -> Result<Polynomial> {
    if roots.is_empty() {
        return Err(PolicyError::EmptyRootSet);
    }
    Ok(Polynomial::zerofier(field, roots))
}

/// Evaluate `polynomial` at `x` under the field arithmetic.
pub fn evaluate(field: &PrimeField, polynomial: &Polynomial, x: &FieldElement) -> FieldElement {
    polynomial.evaluate(field, x)
}

/// Verify that every root actually vanishes.
///
/// A nonzero evaluation means interpolation or field arithmetic is broken;
/// that is fatal for the publishing flow, which must not emit an
/// unverifiable artifact.
#[instrument(level = "debug", skip_all, fields(roots = roots.len()))]
pub fn self_check(
    field: &PrimeField,
    polynomial: &Polynomial,
    roots: &[FieldElement],
) -> Result<()> {
    for (index, root) in roots.iter().enumerate() {
        let value = polynomial.evaluate(field, root);
        if !value.is_zero() {
            return Err(PolicyError::RootMismatch {
                index,
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

/// A fully built threshold policy, immutable once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdPolicy {
    /// One subset sum per authorized size-k signer subset, in generation
    /// order.
    pub combinations: Vec<FieldElement>,
    /// The monic polynomial vanishing on every combination.
    pub polynomial: Polynomial,
    /// Binding commitment to the full coefficient vector.
    pub commitment: FieldElement,
}

/// Orchestrates the combination → interpolation → self-check → commitment
/// pipeline for one field configuration and one commitment scheme.
#[derive(Debug, Clone)]
pub struct PolicyEngine<C: CommitmentScheme = ShakeCommitter> {
    field: PrimeField,
    combination_limit: u128,
    committer: C,
}

impl PolicyEngine<ShakeCommitter> {
    pub fn new(field: PrimeField) -> Self {
        Self::with_committer(field, ShakeCommitter)
    }
}

impl<C: CommitmentScheme> PolicyEngine<C> {
    pub fn with_committer(field: PrimeField, committer: C) -> Self {
        PolicyEngine {
            field,
            combination_limit: DEFAULT_COMBINATION_LIMIT,
            committer,
        }
    }

    /// Replace the default ceiling on `C(n,k)`.
    pub fn combination_limit(mut self, limit: u128) -> Self {
        self.combination_limit = limit;
        self
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Commit to a polynomial with this engine's scheme.
    pub fn commit(&self, polynomial: &Polynomial) -> FieldElement {
        self.committer.commit(&self.field, polynomial)
    }

    /// Run the full pipeline for one `(signer set, threshold)` pair.
    ///
    /// Any failure aborts the flow; nothing here is worth retrying.
    #[instrument(level = "info", skip_all, fields(signers = signer_ids.len(), threshold))]
    pub fn build(
        &self,
        signer_ids: &[FieldElement],
        threshold: usize,
    ) -> Result<ThresholdPolicy> {
        let combinations =
            generate_combinations(&self.field, signer_ids, threshold, self.combination_limit)?;
        debug!(combinations = combinations.len(), "generated subset sums");

        let polynomial = interpolate(&self.field, &combinations)?;
        self_check(&self.field, &polynomial, &combinations)?;

        let commitment = self.committer.commit(&self.field, &polynomial);
        debug!(degree = polynomial.degree(), %commitment, "policy polynomial committed");

        Ok(ThresholdPolicy {
            combinations,
            polynomial,
            commitment,
        })
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;

    fn f97() -> PrimeField {
        PrimeField::new(BigUint::from(97u32)).unwrap()
    }

    fn engine() -> PolicyEngine {
        PolicyEngine::new(f97())
    }

    fn ids(field: &PrimeField, values: &[u64]) -> Vec<FieldElement> {
        values.iter().map(|&v| field.from_u64(v)).collect()
    }

    #[test]
    fn interpolate_rejects_empty_root_set() {
        let f = f97();
        assert!(matches!(
            interpolate(&f, &[]),
            Err(PolicyError::EmptyRootSet)
        ));
    }

    #[test]
    fn interpolate_single_root() {
        let f = f97();
        let poly = interpolate(&f, &[f.from_u64(3)]).unwrap();
        assert_eq!(poly.coefficients(), ids(&f, &[94, 1]).as_slice());
    }

    #[test]
    fn build_produces_vanishing_polynomial() {
        let e = engine();
        let f = e.field().clone();
        let policy = e.build(&ids(&f, &[3, 7, 11]), 2).unwrap();

        assert_eq!(policy.combinations, ids(&f, &[10, 14, 18]));
        assert_eq!(policy.polynomial.len(), 4);
        for combo in &policy.combinations {
            assert!(evaluate(&f, &policy.polynomial, combo).is_zero());
        }
        assert!(!evaluate(&f, &policy.polynomial, &f.from_u64(5)).is_zero());
    }

    #[test]
    fn build_commitment_matches_direct_commit() {
        let e = engine();
        let f = e.field().clone();
        let policy = e.build(&ids(&f, &[3, 7, 11]), 2).unwrap();
        assert_eq!(e.commit(&policy.polynomial), policy.commitment);
    }

    #[test]
    fn build_single_signer_policy() {
        let e = engine();
        let f = e.field().clone();
        let policy = e.build(&ids(&f, &[42]), 1).unwrap();
        assert_eq!(policy.combinations, ids(&f, &[42]));
        assert_eq!(policy.polynomial.coefficients(), ids(&f, &[55, 1]).as_slice());
    }

    #[test]
    fn build_rejects_bad_thresholds() {
        let e = engine();
        let f = e.field().clone();
        let signer_ids = ids(&f, &[3, 7, 11]);
        assert!(matches!(
            e.build(&signer_ids, 0),
            Err(PolicyError::InvalidThreshold { threshold: 0, signer_count: 3 })
        ));
        assert!(matches!(
            e.build(&signer_ids, 4),
            Err(PolicyError::InvalidThreshold { threshold: 4, signer_count: 3 })
        ));
    }

    #[test]
    fn build_respects_combination_limit() {
        let e = engine().combination_limit(2);
        let f = e.field().clone();
        assert!(matches!(
            e.build(&ids(&f, &[3, 7, 11]), 2),
            Err(PolicyError::CombinationLimitExceeded { n: 3, k: 2, limit: 2 })
        ));
    }

    #[test]
    fn self_check_flags_a_wrong_polynomial() {
        let f = f97();
        let roots = ids(&f, &[10, 14]);
        let mut coeffs = interpolate(&f, &roots).unwrap().coefficients().to_vec();
        coeffs[0] = f.add(&coeffs[0], &f.one());
        let broken = math::poly::Polynomial::new(coeffs);
        let err = self_check(&f, &broken, &roots).unwrap_err();
        assert!(matches!(err, PolicyError::RootMismatch { index: 0, .. }));
    }
}

use math::field_element::{FieldElement, PrimeField};

use crate::{
    config::validate_threshold_config,
    error::{PolicyError, Result},
};

/// `C(n,k)` with overflow detection; `None` means the count does not fit
/// in a `u128` and is certainly past any sane ceiling.
pub fn binomial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // Multiply before dividing: the running product of i+1 consecutive
        // binomials is always divisible by i+1, so this stays exact.
        acc = acc.checked_mul((n - i) as u128)?;
        acc /= i as u128 + 1;
    }
    Some(acc)
}

/// Lexicographic subset-sum iterator over index positions.
///
/// Holds `k` cursor indices into the signer slice and advances them in
/// place, so no sub-slices are allocated per combination. Emission order is
/// lexicographic over the index tuple, which makes repeated runs on the
/// same input byte-for-byte reproducible.
struct CombinationSums<'a> {
    field: &'a PrimeField,
    ids: &'a [FieldElement],
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a> CombinationSums<'a> {
    /// Callers must have validated `1 <= k <= ids.len()`.
    fn new(field: &'a PrimeField, ids: &'a [FieldElement], k: usize) -> Self {
        CombinationSums {
            field,
            ids,
            indices: (0..k).collect(),
            exhausted: false,
        }
    }

    fn advance(&mut self) {
        let n = self.ids.len();
        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.exhausted = true;
                return;
            }
            i -= 1;
            if self.indices[i] != i + n - k {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return;
            }
        }
    }
}

impl Iterator for CombinationSums<'_> {
    type Item = FieldElement;

    fn next(&mut self) -> Option<FieldElement> {
        if self.exhausted {
            return None;
        }
        let sum = self
            .indices
            .iter()
            .fold(self.field.zero(), |acc, &i| self.field.add(&acc, &self.ids[i]));
        self.advance();
        Some(sum)
    }
}

/// Produce every one of the `C(n,k)` sums of `k` distinct signer ids,
/// reduced mod P, in lexicographic order over input index positions.
///
/// `k == 1` returns the ids unchanged and `k == n` a single element, the
/// sum of all ids. Both guards run before any allocation proportional to
/// the combination count: a threshold outside `1..=n` is
/// [`PolicyError::InvalidThreshold`], and a count past `limit` is
/// [`PolicyError::CombinationLimitExceeded`].
pub fn generate_combinations(
    field: &PrimeField,
    signer_ids: &[FieldElement],
    threshold: usize,
    limit: u128,
) -> Result<Vec<FieldElement>> {
    let n = signer_ids.len();
    if !validate_threshold_config(threshold, n) {
        return Err(PolicyError::InvalidThreshold {
            threshold,
            signer_count: n,
        });
    }

    let exceeded = || PolicyError::CombinationLimitExceeded {
        n,
        k: threshold,
        limit,
    };
    let count = binomial(n as u64, threshold as u64).ok_or_else(exceeded)?;
    if count > limit {
        return Err(exceeded());
    }

    Ok(CombinationSums::new(field, signer_ids, threshold).collect())
}

use std::fmt;

use serde::Serialize;

use crate::field_element::{FieldElement, PrimeField};

/// A univariate polynomial over a [`PrimeField`].
///
/// Coefficients are stored constant-term first: `coeffs[d]` is the
/// coefficient of `x^d`. A polynomial built from roots via
/// [`Polynomial::zerofier`] is monic: its leading coefficient is 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Polynomial {
    coeffs: Vec<FieldElement>,
}

impl Polynomial {
    /// Wrap an explicit coefficient vector.
    pub fn new(coeffs: Vec<FieldElement>) -> Self {
        Polynomial { coeffs }
    }

    /// The unique monic polynomial vanishing exactly on `roots`.
    ///
    /// Built by iterative multiplication with `(x - r)`: starting from the
    /// degree-0 polynomial `[1]`, each root extends the coefficient vector
    /// by one, so `m` roots yield exactly `m + 1` coefficients. The empty
    /// root set gives the empty product `[1]`.
    ///
    /// Every intermediate value goes through the field context, so all
    /// stored coefficients are canonical in `[0, P)`.
    pub fn zerofier(field: &PrimeField, roots: &[FieldElement]) -> Self {
        let mut coeffs = vec![field.one()];
        for root in roots {
            let neg_root = field.neg(root);
            let mut next = Vec::with_capacity(coeffs.len() + 1);
            next.push(field.mul(&coeffs[0], &neg_root));
            for j in 1..coeffs.len() {
                next.push(field.add(&field.mul(&coeffs[j], &neg_root), &coeffs[j - 1]));
            }
            // New leading coefficient, carried from the old top.
            next.push(coeffs[coeffs.len() - 1].clone());
            coeffs = next;
        }
        Polynomial { coeffs }
    }

    /// Evaluate at `x`: `sum(coeffs[d] * x^d)` over the field, using the
    /// field's fast exponentiation per term.
    pub fn evaluate(&self, field: &PrimeField, x: &FieldElement) -> FieldElement {
        let mut acc = field.zero();
        for (degree, coeff) in self.coeffs.iter().enumerate() {
            let term = field.mul(coeff, &field.pow(x, degree as u64));
            acc = field.add(&acc, &term);
        }
        acc
    }

    pub fn coefficients(&self) -> &[FieldElement] {
        &self.coeffs
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the stored coefficient vector (no trailing-zero stripping).
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    pub fn leading_coefficient(&self) -> Option<&FieldElement> {
        self.coeffs.last()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, coeff) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coeff}")?;
        }
        write!(f, "]")
    }
}

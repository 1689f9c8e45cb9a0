use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Serialize, Serializer};

use crate::error::{FieldError, Result};

/// Arithmetic context for a prime field with an explicitly configured
/// modulus.
///
/// The modulus is a runtime parameter rather than a compiled-in constant so
/// the same engine can serve different curves and deployments. It may exceed
/// the width of any machine word (e.g. the 254-bit BN254 scalar field), so
/// values are held as [`BigUint`]s and every operation reduces its result
/// into `[0, modulus)` before it can be observed.
///
/// Primality is a contract with the caller and is not verified here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
    element_bytes: usize,
}

/// An element of a [`PrimeField`], canonical in `[0, modulus)`.
///
/// Elements are only constructible through [`PrimeField`] methods, which
/// keeps the canonical-range invariant in one place. Equality is value
/// equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement(BigUint);

impl PrimeField {
    /// Create a field context for the given modulus.
    ///
    /// Rejects moduli below 2; anything else is accepted as-is.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u8) {
            return Err(FieldError::InvalidModulus(modulus));
        }
        let element_bytes = modulus.bits().div_ceil(8) as usize;
        Ok(PrimeField {
            modulus,
            element_bytes,
        })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Fixed big-endian width of one serialized element.
    pub fn element_bytes(&self) -> usize {
        self.element_bytes
    }

    /// Construct an element from an already-canonical value.
    ///
    /// A value `>= modulus` is a programmer error and is rejected rather
    /// than silently truncated; use [`Self::reduce`] when reduction is
    /// intended.
    pub fn element(&self, value: BigUint) -> Result<FieldElement> {
        if value >= self.modulus {
            return Err(FieldError::NotCanonical {
                value,
                modulus: self.modulus.clone(),
            });
        }
        Ok(FieldElement(value))
    }

    /// Construct an element by explicit reduction modulo the field modulus.
    pub fn reduce(&self, value: BigUint) -> FieldElement {
        FieldElement(value % &self.modulus)
    }

    pub fn from_u64(&self, value: u64) -> FieldElement {
        self.reduce(BigUint::from(value))
    }

    /// Decode a big-endian byte string into a canonical element.
    pub fn from_bytes_be(&self, bytes: &[u8]) -> Result<FieldElement> {
        self.element(BigUint::from_bytes_be(bytes))
    }

    /// Encode an element as big-endian bytes, zero-padded to
    /// [`Self::element_bytes`].
    pub fn to_bytes_be(&self, element: &FieldElement) -> Vec<u8> {
        let raw = element.0.to_bytes_be();
        let mut out = vec![0u8; self.element_bytes - raw.len()];
        out.extend_from_slice(&raw);
        out
    }

    pub fn zero(&self) -> FieldElement {
        FieldElement(BigUint::zero())
    }

    pub fn one(&self) -> FieldElement {
        FieldElement(BigUint::one())
    }

    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        self.debug_check(a);
        self.debug_check(b);
        FieldElement((&a.0 + &b.0) % &self.modulus)
    }

    pub fn sub(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        self.debug_check(a);
        self.debug_check(b);
        // a + (P - b) keeps the intermediate non-negative.
        FieldElement((&a.0 + (&self.modulus - &b.0)) % &self.modulus)
    }

    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        self.debug_check(a);
        self.debug_check(b);
        FieldElement((&a.0 * &b.0) % &self.modulus)
    }

    pub fn neg(&self, a: &FieldElement) -> FieldElement {
        self.debug_check(a);
        if a.0.is_zero() {
            self.zero()
        } else {
            FieldElement(&self.modulus - &a.0)
        }
    }

    /// Compute `base^exp` by square-and-multiply.
    pub fn pow(&self, base: &FieldElement, exp: u64) -> FieldElement {
        self.debug_check(base);
        FieldElement(base.0.modpow(&BigUint::from(exp), &self.modulus))
    }

    /// Whether the element is canonical for this field.
    pub fn contains(&self, element: &FieldElement) -> bool {
        element.0 < self.modulus
    }

    #[inline]
    fn debug_check(&self, element: &FieldElement) {
        debug_assert!(
            self.contains(element),
            "element {} out of range for modulus {}",
            element,
            self.modulus
        );
    }
}

impl FieldElement {
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

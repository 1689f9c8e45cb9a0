use num_bigint::BigUint;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

use math::{
    field_element::{FieldElement, PrimeField},
    poly::Polynomial,
};

/// Deterministic, binding reduction of a coefficient vector to a single
/// field element.
///
/// A policy artifact must be produced with exactly one scheme; the consuming
/// circuit verifies against that scheme and mixing strategies breaks
/// verification. Deployments with a homomorphic curve-based vector
/// commitment plug it in behind this trait.
pub trait CommitmentScheme {
    fn commit(&self, field: &PrimeField, polynomial: &Polynomial) -> FieldElement;
}

/// Hash-based commitment: each coefficient is serialized as a fixed-width
/// big-endian block, the blocks are absorbed into a Shake256 XOF, and 64
/// bytes of output are reduced mod P.
///
/// The fixed block width makes the encoding of a coefficient vector
/// injective for a given field, and the modulus is absorbed first so the
/// commitment is bound to the field it was computed over. The 64-byte read
/// leaves the mod-P reduction bias negligible for any modulus up to 512
/// bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakeCommitter;

impl ShakeCommitter {
    const OUTPUT_BYTES: usize = 64;
}

impl CommitmentScheme for ShakeCommitter {
    fn commit(&self, field: &PrimeField, polynomial: &Polynomial) -> FieldElement {
        let mut hasher = Shake256::default();
        hasher.update(&field.modulus().to_bytes_be());
        for coeff in polynomial.coefficients() {
            hasher.update(&field.to_bytes_be(coeff));
        }
        let mut reader = hasher.finalize_xof();
        let mut output = vec![0u8; Self::OUTPUT_BYTES];
        reader.read(&mut output);
        field.reduce(BigUint::from_bytes_be(&output))
    }
}

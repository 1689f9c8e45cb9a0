use num_bigint::BigUint;

use math::field_element::PrimeField;

/// Default ceiling on `C(n,k)` enforced by combination generation.
///
/// The reference deployment caps the signer set at 8, i.e. at most
/// `C(8,4) = 70` combinations; the default leaves generous headroom while
/// still refusing runaway configurations before any allocation happens.
pub const DEFAULT_COMBINATION_LIMIT: u128 = 4096;

/// BN254 (alt_bn128) scalar-field modulus, base 10.
const BN254_FR_MODULUS: &[u8] =
    b"21888242871839275222246405745257275088548364400416034343698204186575808495617";

/// The scalar field of BN254, the curve the reference proving toolchain
/// operates over. Provided as an opt-in preset; the engine itself takes any
/// [`PrimeField`].
pub fn bn254_fr() -> PrimeField {
    let modulus = BigUint::parse_bytes(BN254_FR_MODULUS, 10)
        .expect("BN254 modulus literal is valid decimal");
    PrimeField::new(modulus).expect("BN254 modulus is a valid field modulus")
}

/// Check that a threshold configuration is usable: `1 <= threshold <= n`.
pub fn validate_threshold_config(threshold: usize, signer_count: usize) -> bool {
    threshold >= 1 && threshold <= signer_count
}

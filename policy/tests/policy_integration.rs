use num_bigint::BigUint;
use rand::Rng;

use math::field_element::{FieldElement, PrimeField};
use policy_core::{
    artifact::{ArtifactLayout, ProverArtifact, SignatureSlot, MESSAGE_HASH_BYTES},
    combinations::binomial,
    config::bn254_fr,
    engine::PolicyEngine,
    evaluate, self_check,
};

/// Default Anvil/Hardhat account addresses used by the reference
/// deployment, interpreted as field elements.
const SIGNER_ADDRESSES: [&[u8]; 8] = [
    b"f39fd6e51aad88f6f4ce6ab8827279cfffb92266",
    b"70997970c51812dc3a010c7d01b50e0d17dc79c8",
    b"3c44cdddb6a900fa2b585dd299e03d12fa4293bc",
    b"90f79bf6eb2c4f870365e785982e1f101e93b906",
    b"15d34aaf54267db7d7c367839aaf71a00a2c6a65",
    b"9965507d1a55bcc2695c58ba16fb37d819b0a4dc",
    b"976ea74026e726554db657fa54763abd0c3a0aa9",
    b"14dc79964da2c08b23698b3d3cc7ca32193d9955",
];

fn signer_ids(field: &PrimeField, count: usize) -> Vec<FieldElement> {
    SIGNER_ADDRESSES[..count]
        .iter()
        .map(|hex| {
            let value = BigUint::parse_bytes(hex, 16).expect("valid address hex");
            field.element(value).expect("addresses fit the scalar field")
        })
        .collect()
}

#[test]
fn two_of_three_policy_over_bn254() {
    let field = bn254_fr();
    let engine = PolicyEngine::new(field.clone());
    let ids = signer_ids(&field, 3);

    let policy = engine.build(&ids, 2).unwrap();
    assert_eq!(policy.combinations.len(), 3);
    assert_eq!(policy.polynomial.len(), 4);
    assert_eq!(policy.polynomial.leading_coefficient(), Some(&field.one()));

    // The first combination is the sum of the first two addresses.
    let expected = field.add(&ids[0], &ids[1]);
    assert_eq!(policy.combinations[0], expected);

    for combo in &policy.combinations {
        assert!(evaluate(&field, &policy.polynomial, combo).is_zero());
    }
    // An unauthorized pair (same signer twice) must not satisfy the policy.
    let forged = field.add(&ids[0], &ids[0]);
    assert!(!evaluate(&field, &policy.polynomial, &forged).is_zero());
}

#[test]
fn four_of_eight_policy_fills_the_reference_layout() {
    let field = bn254_fr();
    let engine = PolicyEngine::new(field.clone());
    let ids = signer_ids(&field, 8);

    let policy = engine.build(&ids, 4).unwrap();
    assert_eq!(policy.combinations.len() as u128, binomial(8, 4).unwrap());
    assert_eq!(policy.polynomial.len(), 71);
    self_check(&field, &policy.polynomial, &policy.combinations).unwrap();

    let artifact = ProverArtifact::assemble(
        &field,
        ArtifactLayout::reference(),
        &policy,
        [0x11; MESSAGE_HASH_BYTES],
        vec![],
    )
    .unwrap();
    assert_eq!(artifact.polynomial().len(), 71);
    assert_eq!(artifact.slots().len(), 8);
    assert!(artifact
        .slots()
        .iter()
        .all(|slot| matches!(slot, SignatureSlot::Empty)));
    assert_eq!(artifact.polynomial_bytes().unwrap().len(), 71 * 32);

    let toml = artifact.to_prover_toml();
    assert_eq!(toml.matches("should_calculate = 0").count(), 8);
}

#[test]
fn build_is_deterministic_for_random_signer_sets() {
    let field = bn254_fr();
    let engine = PolicyEngine::new(field.clone());
    let mut rng = rand::rng();

    let ids: Vec<FieldElement> = (0..5)
        .map(|_| field.from_u64(rng.random::<u64>()))
        .collect();

    let first = engine.build(&ids, 3).unwrap();
    let second = engine.build(&ids, 3).unwrap();
    assert_eq!(first.combinations, second.combinations);
    assert_eq!(first.polynomial, second.polynomial);
    assert_eq!(first.commitment, second.commitment);
}

#[test]
fn distinct_policies_commit_differently() {
    let field = bn254_fr();
    let engine = PolicyEngine::new(field.clone());
    let ids = signer_ids(&field, 4);

    let two_of_four = engine.build(&ids, 2).unwrap();
    let three_of_four = engine.build(&ids, 3).unwrap();
    assert_ne!(two_of_four.commitment, three_of_four.commitment);
}

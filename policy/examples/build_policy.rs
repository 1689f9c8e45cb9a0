use num_bigint::BigUint;

use policy_core::{config::bn254_fr, evaluate, PolicyEngine};

const SIGNERS: [&[u8]; 3] = [
    b"f39fd6e51aad88f6f4ce6ab8827279cfffb92266",
    b"70997970c51812dc3a010c7d01b50e0d17dc79c8",
    b"3c44cdddb6a900fa2b585dd299e03d12fa4293bc",
];
const THRESHOLD: usize = 2;

/// Build a 2-of-3 policy over the BN254 scalar field and show that every
/// authorized subset sum is a root of the published polynomial.
fn main() {
    let field = bn254_fr();
    let engine = PolicyEngine::new(field.clone());

    let signer_ids: Vec<_> = SIGNERS
        .iter()
        .map(|hex| {
            let value = BigUint::parse_bytes(hex, 16).expect("valid signer hex");
            field.element(value).expect("signer id fits the field")
        })
        .collect();

    let policy = engine
        .build(&signer_ids, THRESHOLD)
        .expect("policy construction should succeed");

    println!("threshold: {THRESHOLD} of {}", signer_ids.len());
    println!("combinations:");
    for combo in &policy.combinations {
        println!("  {combo}");
    }
    println!("polynomial ({} coefficients): {}", policy.polynomial.len(), policy.polynomial);
    println!("commitment: {}", policy.commitment);

    for (i, combo) in policy.combinations.iter().enumerate() {
        let value = evaluate(&field, &policy.polynomial, combo);
        assert!(value.is_zero(), "combination {i} must evaluate to zero");
    }
    println!("all {} combinations evaluate to zero", policy.combinations.len());
}

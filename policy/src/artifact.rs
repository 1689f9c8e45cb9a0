use math::field_element::{FieldElement, PrimeField};

use crate::{
    engine::ThresholdPolicy,
    error::{PolicyError, Result},
};

/// Byte width of one secp256k1 public-key coordinate.
pub const PUBKEY_COORD_BYTES: usize = 32;
/// Byte width of an ECDSA signature with the recovery id stripped.
pub const SIGNATURE_BYTES: usize = 64;
/// Byte width of the signed message hash.
pub const MESSAGE_HASH_BYTES: usize = 32;

/// The fixed-width contract with the external proving toolchain.
///
/// Different deployments choose different maximum signer-set sizes, so the
/// coefficient padding length, the per-coefficient byte width, and the
/// signature-slot count are all configuration rather than constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    /// Coefficient count the circuit's polynomial input is padded to.
    pub max_coefficients: usize,
    /// Big-endian byte width of one coefficient in the flat encoding.
    pub coefficient_bytes: usize,
    /// Number of signature slots the circuit expects.
    pub max_signers: usize,
}

impl ArtifactLayout {
    /// Layout of the reference deployment: up to 8 signers, so at most
    /// `C(8,4) + 1 = 71` coefficients, each one 32 bytes wide.
    pub fn reference() -> Self {
        ArtifactLayout {
            max_coefficients: 71,
            coefficient_bytes: 32,
            max_signers: 8,
        }
    }
}

/// Signature material for one participating signer, produced by the
/// external key-management collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerProof {
    pub pub_key_x: [u8; PUBKEY_COORD_BYTES],
    pub pub_key_y: [u8; PUBKEY_COORD_BYTES],
    pub signature: [u8; SIGNATURE_BYTES],
}

/// One of the circuit's fixed signature slots.
///
/// `Empty` replaces the source's inert shallow copies of the first real
/// entry; the serializer pattern-matches instead of trusting a sentinel
/// field, and only the wire format carries the `should_calculate` flag the
/// circuit expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureSlot {
    Active(SignerProof),
    Empty,
}

/// Everything the external proof-generation toolchain consumes for one
/// policy: the padded coefficient vector, the commitment, the message hash
/// and the per-signer signature slots.
#[derive(Debug, Clone)]
pub struct ProverArtifact {
    layout: ArtifactLayout,
    polynomial: Vec<FieldElement>,
    commitment: FieldElement,
    message_hash: [u8; MESSAGE_HASH_BYTES],
    slots: Vec<SignatureSlot>,
}

impl ProverArtifact {
    /// Pad a built policy and the collected signature material out to the
    /// layout's fixed widths.
    ///
    /// Exceeding either fixed width is an error: truncating live
    /// coefficients would publish a polynomial the circuit cannot verify.
    pub fn assemble(
        field: &PrimeField,
        layout: ArtifactLayout,
        policy: &ThresholdPolicy,
        message_hash: [u8; MESSAGE_HASH_BYTES],
        proofs: Vec<SignerProof>,
    ) -> Result<Self> {
        let coeffs = policy.polynomial.coefficients();
        if coeffs.len() > layout.max_coefficients {
            return Err(PolicyError::CoefficientOverflow {
                actual: coeffs.len(),
                max: layout.max_coefficients,
            });
        }
        if proofs.len() > layout.max_signers {
            return Err(PolicyError::TooManySigners {
                actual: proofs.len(),
                max: layout.max_signers,
            });
        }

        let mut polynomial = coeffs.to_vec();
        polynomial.resize(layout.max_coefficients, field.zero());

        let mut slots: Vec<SignatureSlot> =
            proofs.into_iter().map(SignatureSlot::Active).collect();
        slots.resize(layout.max_signers, SignatureSlot::Empty);

        Ok(ProverArtifact {
            layout,
            polynomial,
            commitment: policy.commitment.clone(),
            message_hash,
            slots,
        })
    }

    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    pub fn polynomial(&self) -> &[FieldElement] {
        &self.polynomial
    }

    pub fn commitment(&self) -> &FieldElement {
        &self.commitment
    }

    pub fn slots(&self) -> &[SignatureSlot] {
        &self.slots
    }

    /// Flat big-endian encoding of the padded coefficient vector, at
    /// `coefficient_bytes` per coefficient.
    pub fn polynomial_bytes(&self) -> Result<Vec<u8>> {
        let width = self.layout.coefficient_bytes;
        let mut out = Vec::with_capacity(self.polynomial.len() * width);
        for coeff in &self.polynomial {
            let raw = coeff.value().to_bytes_be();
            if raw.len() > width {
                return Err(PolicyError::CoefficientWidth {
                    value: coeff.to_string(),
                    width,
                });
            }
            out.resize(out.len() + (width - raw.len()), 0);
            out.extend_from_slice(&raw);
        }
        Ok(out)
    }

    /// Render the `Prover.toml` consumed by the proving toolchain.
    pub fn to_prover_toml(&self) -> String {
        let mut out = String::new();
        out.push_str("polynomial = [\n");
        for coeff in &self.polynomial {
            out.push_str(&format!("\t\"{coeff}\",\n"));
        }
        out.push_str("]\n");
        out.push_str(&format!("polynomial_commitment = \"{}\"\n", self.commitment));
        out.push_str(&format!(
            "safe_message_hash = [{}]\n",
            join_bytes(&self.message_hash)
        ));

        let zero_coord = [0u8; PUBKEY_COORD_BYTES];
        let zero_sig = [0u8; SIGNATURE_BYTES];
        for slot in &self.slots {
            out.push_str("\n[[signature_data]]\n");
            match slot {
                SignatureSlot::Active(proof) => {
                    out.push_str("should_calculate = 1\n");
                    out.push_str(&format!("pub_key_x = [{}]\n", join_bytes(&proof.pub_key_x)));
                    out.push_str(&format!("pub_key_y = [{}]\n", join_bytes(&proof.pub_key_y)));
                    out.push_str(&format!("signature = [{}]\n", join_bytes(&proof.signature)));
                }
                SignatureSlot::Empty => {
                    out.push_str("should_calculate = 0\n");
                    out.push_str(&format!("pub_key_x = [{}]\n", join_bytes(&zero_coord)));
                    out.push_str(&format!("pub_key_y = [{}]\n", join_bytes(&zero_coord)));
                    out.push_str(&format!("signature = [{}]\n", join_bytes(&zero_sig)));
                }
            }
        }
        out
    }

    /// Render the matching `Verifier.toml`.
    pub fn to_verifier_toml(&self) -> String {
        format!(
            "hashed_message = [{}]\nsetpub = []\n",
            join_bytes(&self.message_hash)
        )
    }
}

fn join_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

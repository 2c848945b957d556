//! Client-side proving and the verifier the state machine consumes.
//!
//! The prover holds the full witness (solution, guess, secret) and produces
//! a proof for declared public inputs; the verifier holds only the prepared
//! verifying key and the public inputs. The declared inputs are validated
//! against a native recomputation before proving, so an inconsistent
//! declaration surfaces as [`ProofError::InvalidWitness`] instead of an
//! unsatisfiable circuit deep inside the prover.

use std::time::Instant;

use ark_bn254::{Bn254, Fr};
use ark_groth16::{PreparedVerifyingKey, VerifyingKey};

use mastermind_core::{CODE_LENGTH, Code, ProofVerifier, PublicInputs, compute_hint};

use crate::circuit::{HintCircuit, groth16};
use crate::commitment::{Secret, commit, commitment_from_field, field_from_commitment};

/// Errors from proof generation and key handling.
#[derive(Debug, thiserror::Error)]
pub enum ProofError {
    /// The declared public inputs are inconsistent with the witness; no
    /// proof exists, so proving is refused up front.
    #[error("witness does not satisfy the declared public inputs: {0}")]
    InvalidWitness(String),

    #[error("circuit error: {0}")]
    CircuitError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// A serialized proof.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProofData {
    /// Compressed Groth16 proof bytes.
    pub bytes: Vec<u8>,
}

/// The private witness for one guess.
///
/// Held entirely by the proving party; none of it crosses the
/// `submit_answer` boundary.
#[derive(Clone, Debug)]
pub struct HintWitness {
    pub secret: Secret,
    pub solution: Code,
    pub guess: Code,
}

/// Computes the honest public inputs for a witness: both commitments and
/// the true hint.
pub fn public_inputs_for(witness: &HintWitness) -> Result<PublicInputs, ProofError> {
    let solution_commitment =
        commitment_from_field(&commit(&witness.secret, &witness.solution)?)?;
    let guess_commitment = commitment_from_field(&commit(&witness.secret, &witness.guess)?)?;
    let hint = compute_hint(&witness.solution, &witness.guess);
    Ok(PublicInputs {
        guess_commitment,
        solution_commitment,
        exact_matches: hint.exact,
        partial_matches: hint.partial,
    })
}

/// Encodes public inputs as the positional field-element vector the circuit
/// and verifier agree on: (guess commitment, solution commitment, exact,
/// partial). Offsets are part of the protocol.
pub fn public_input_fields(public_inputs: &PublicInputs) -> Result<Vec<Fr>, ProofError> {
    Ok(vec![
        field_from_commitment(&public_inputs.guess_commitment)?,
        field_from_commitment(&public_inputs.solution_commitment)?,
        Fr::from(u64::from(public_inputs.exact_matches)),
        Fr::from(u64::from(public_inputs.partial_matches)),
    ])
}

/// Proof generation oracle, client-side.
pub trait HintProver: Send + Sync {
    /// Produces a proof that `public_inputs` is the honest opening of the
    /// witness. Fails with [`ProofError::InvalidWitness`] when it is not.
    fn prove(
        &self,
        witness: &HintWitness,
        public_inputs: &PublicInputs,
    ) -> Result<ProofData, ProofError>;
}

/// Groth16 prover over the hint circuit.
pub struct Groth16HintProver {
    keys: groth16::Groth16Keys,
}

impl Groth16HintProver {
    pub fn new(keys: groth16::Groth16Keys) -> Self {
        Self { keys }
    }
}

impl HintProver for Groth16HintProver {
    fn prove(
        &self,
        witness: &HintWitness,
        public_inputs: &PublicInputs,
    ) -> Result<ProofData, ProofError> {
        let expected = public_inputs_for(witness)?;
        if expected != *public_inputs {
            return Err(ProofError::InvalidWitness(format!(
                "declared ({}, {}) with commitments {}/{}, witness computes ({}, {}) with {}/{}",
                public_inputs.exact_matches,
                public_inputs.partial_matches,
                public_inputs.guess_commitment,
                public_inputs.solution_commitment,
                expected.exact_matches,
                expected.partial_matches,
                expected.guess_commitment,
                expected.solution_commitment,
            )));
        }

        let circuit = HintCircuit::new(
            field_from_commitment(&public_inputs.guess_commitment)?,
            field_from_commitment(&public_inputs.solution_commitment)?,
            Fr::from(u64::from(public_inputs.exact_matches)),
            Fr::from(u64::from(public_inputs.partial_matches)),
            code_to_fields(&witness.solution),
            code_to_fields(&witness.guess),
            witness.secret.as_field(),
        );

        let started = Instant::now();
        let mut rng = rand::thread_rng();
        let proof = groth16::prove(circuit, &self.keys, &mut rng)?;
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generated hint proof"
        );

        Ok(ProofData {
            bytes: groth16::serialize_proof(&proof)?,
        })
    }
}

/// Groth16 verifier; this is the oracle [`mastermind_core::GameSession`]
/// delegates to.
///
/// Malformed proof bytes, non-canonical commitment encodings, and pairing
/// failures all verify as `false` (logged at warn level) rather than
/// erroring: from the state machine's point of view they are one and the
/// same invalid proof.
pub struct Groth16Verifier {
    pvk: PreparedVerifyingKey<Bn254>,
}

impl Groth16Verifier {
    pub fn new(verifying_key: &VerifyingKey<Bn254>) -> Self {
        Self {
            pvk: ark_groth16::prepare_verifying_key(verifying_key),
        }
    }
}

impl ProofVerifier for Groth16Verifier {
    fn verify(&self, proof: &[u8], public_inputs: &PublicInputs) -> bool {
        let proof = match groth16::deserialize_proof(proof) {
            Ok(proof) => proof,
            Err(err) => {
                tracing::warn!(%err, "rejecting malformed proof bytes");
                return false;
            }
        };

        let fields = match public_input_fields(public_inputs) {
            Ok(fields) => fields,
            Err(err) => {
                tracing::warn!(%err, "rejecting undecodable public inputs");
                return false;
            }
        };

        match groth16::verify(&proof, &fields, &self.pvk) {
            Ok(accepted) => accepted,
            Err(err) => {
                tracing::warn!(%err, "proof verification errored");
                false
            }
        }
    }
}

fn code_to_fields(code: &Code) -> [Fr; CODE_LENGTH] {
    code.pegs().map(|peg| Fr::from(u64::from(peg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn witness(solution: [u8; CODE_LENGTH], guess: [u8; CODE_LENGTH]) -> HintWitness {
        HintWitness {
            secret: Secret::from_u64(1234),
            solution: Code::new(solution).expect("valid solution"),
            guess: Code::new(guess).expect("valid guess"),
        }
    }

    #[test]
    fn honest_public_inputs_carry_the_true_hint() {
        let inputs = public_inputs_for(&witness([4, 1, 5, 2], [4, 1, 5, 3]))
            .expect("public inputs");
        assert_eq!(inputs.exact_matches, 3);
        assert_eq!(inputs.partial_matches, 0);
        assert_ne!(inputs.guess_commitment, inputs.solution_commitment);
    }

    #[test]
    fn identical_codes_share_one_commitment() {
        let inputs = public_inputs_for(&witness([4, 1, 5, 2], [4, 1, 5, 2]))
            .expect("public inputs");
        assert_eq!(inputs.guess_commitment, inputs.solution_commitment);
        assert_eq!(inputs.exact_matches, 4);
        assert_eq!(inputs.partial_matches, 0);
    }

    #[test]
    fn field_encoding_is_positional() {
        let inputs = public_inputs_for(&witness([1, 2, 3, 4], [4, 3, 2, 1]))
            .expect("public inputs");
        let fields = public_input_fields(&inputs).expect("field encoding");
        assert_eq!(fields.len(), 4);
        assert_eq!(
            fields[0],
            field_from_commitment(&inputs.guess_commitment).expect("decode")
        );
        assert_eq!(
            fields[1],
            field_from_commitment(&inputs.solution_commitment).expect("decode")
        );
        // Hint counts sit at fixed offsets 2 and 3; tampering tests rely on
        // these positions.
        assert_eq!(fields[2], Fr::from(0u64));
        assert_eq!(fields[3], Fr::from(4u64));
    }
}

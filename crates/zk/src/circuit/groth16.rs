//! Groth16 proving and verification on BN254.

use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, PreparedVerifyingKey, Proof, ProvingKey, VerifyingKey};
use ark_relations::r1cs::ConstraintSynthesizer;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::RngCore;

use crate::prover::ProofError;

/// Groth16 proving and verifying keys for the hint circuit.
///
/// Generated by a circuit-specific setup. The setup randomness must be
/// destroyed for soundness; production deployments replace this with a
/// multi-party ceremony.
#[derive(Clone)]
pub struct Groth16Keys {
    /// Proving key (held by the proving party).
    pub proving_key: ProvingKey<Bn254>,
    /// Verifying key (public).
    pub verifying_key: VerifyingKey<Bn254>,
}

impl Groth16Keys {
    /// Runs the circuit-specific setup.
    ///
    /// `circuit` should be the unassigned template instance; any instance
    /// works because the constraint shape is assignment-independent.
    pub fn generate<C, R>(circuit: C, rng: &mut R) -> Result<Self, ProofError>
    where
        C: ConstraintSynthesizer<Fr>,
        R: RngCore,
    {
        let params = Groth16::<Bn254>::generate_random_parameters_with_reduction(circuit, rng)
            .map_err(|e| ProofError::CircuitError(format!("Groth16 key generation failed: {e:?}")))?;

        Ok(Self {
            proving_key: params.clone(),
            verifying_key: params.vk,
        })
    }

    /// Prepares the verifying key for repeated verification.
    pub fn prepared_verifying_key(&self) -> PreparedVerifyingKey<Bn254> {
        ark_groth16::prepare_verifying_key(&self.verifying_key)
    }
}

/// Generates a proof for an assigned circuit instance.
pub fn prove<C, R>(circuit: C, keys: &Groth16Keys, rng: &mut R) -> Result<Proof<Bn254>, ProofError>
where
    C: ConstraintSynthesizer<Fr>,
    R: RngCore,
{
    Groth16::<Bn254>::create_random_proof_with_reduction(circuit, &keys.proving_key, rng)
        .map_err(|e| ProofError::CircuitError(format!("Groth16 proving failed: {e:?}")))
}

/// Verifies a proof against public inputs with a prepared verifying key.
pub fn verify(
    proof: &Proof<Bn254>,
    public_inputs: &[Fr],
    pvk: &PreparedVerifyingKey<Bn254>,
) -> Result<bool, ProofError> {
    Groth16::<Bn254>::verify_proof(pvk, proof, public_inputs)
        .map_err(|e| ProofError::CircuitError(format!("Groth16 verification failed: {e:?}")))
}

/// Serializes a proof with compressed points.
pub fn serialize_proof(proof: &Proof<Bn254>) -> Result<Vec<u8>, ProofError> {
    let mut bytes = Vec::new();
    proof
        .serialize_compressed(&mut bytes)
        .map_err(|e| ProofError::SerializationError(e.to_string()))?;
    Ok(bytes)
}

/// Deserializes a compressed proof.
pub fn deserialize_proof(bytes: &[u8]) -> Result<Proof<Bn254>, ProofError> {
    Proof::<Bn254>::deserialize_compressed(bytes)
        .map_err(|e| ProofError::SerializationError(e.to_string()))
}

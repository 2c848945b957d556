//! Poseidon commitments over BN254.
//!
//! A commitment is `Poseidon(secret, e0, .., e3)`: the secret scalar is
//! absorbed first, then the code elements in order. The same sponge
//! parameters back the native hash here and the circuit gadget in
//! [`crate::circuit::gadgets`]; the two must stay element-for-element in
//! sync, which `tests/poseidon_consistency.rs` checks.
//!
//! # Security Parameters
//!
//! - Field: BN254 scalar field (254-bit prime)
//! - Full rounds: 8, partial rounds: 57, alpha: 5, rate: 2
//! - Security level: 128 bits

use std::sync::OnceLock;

use ark_bn254::Fr;
use ark_crypto_primitives::sponge::{
    CryptographicSponge,
    poseidon::{PoseidonConfig, PoseidonSponge, find_poseidon_ark_and_mds},
};
use ark_ff::UniformRand;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use mastermind_core::proof::COMMITMENT_LENGTH;
use mastermind_core::{Code, Commitment};

use crate::prover::ProofError;

/// Cached Poseidon config (initialized once; recomputing the round constants
/// per hash is orders of magnitude slower).
static POSEIDON_CONFIG: OnceLock<PoseidonConfig<Fr>> = OnceLock::new();

/// Poseidon config shared by the native hash and the circuit gadget.
pub fn poseidon_config() -> &'static PoseidonConfig<Fr> {
    POSEIDON_CONFIG.get_or_init(|| {
        let (ark, mds) = find_poseidon_ark_and_mds::<Fr>(254, 2, 8, 57, 0);
        PoseidonConfig::new(8, 57, 5, mds, ark, 2, 1)
    })
}

/// The code-maker's secret scalar.
///
/// Entropy source for both the solution and guess commitments in a round.
/// Never transmitted; it only leaves this type as a circuit witness.
#[derive(Clone)]
pub struct Secret(Fr);

impl Secret {
    /// Builds a secret from a small integer (tests and fixtures).
    pub fn from_u64(value: u64) -> Self {
        Self(Fr::from(value))
    }

    /// Samples a uniformly random secret.
    pub fn random<R: rand::RngCore + ?Sized>(rng: &mut R) -> Self {
        Self(Fr::rand(rng))
    }

    pub(crate) fn as_field(&self) -> Fr {
        self.0
    }
}

impl core::fmt::Debug for Secret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Never leak the scalar through logs.
        f.write_str("Secret(..)")
    }
}

#[inline]
fn squeeze_single_element(sponge: &mut PoseidonSponge<Fr>) -> Result<Fr, ProofError> {
    sponge
        .squeeze_field_elements::<Fr>(1)
        .first()
        .copied()
        .ok_or_else(|| ProofError::CircuitError("Poseidon squeeze returned nothing".to_string()))
}

/// Commits to `code` under `secret`.
///
/// Deterministic, binding, hiding. Elements are absorbed one at a time so
/// the absorption schedule matches the circuit gadget exactly.
pub fn commit(secret: &Secret, code: &Code) -> Result<Fr, ProofError> {
    let mut sponge = PoseidonSponge::<Fr>::new(poseidon_config());
    sponge.absorb(&secret.as_field());
    for &peg in code.pegs() {
        sponge.absorb(&Fr::from(u64::from(peg)));
    }
    squeeze_single_element(&mut sponge)
}

/// Encodes a field element as the opaque commitment bytes the core carries.
pub fn commitment_from_field(value: &Fr) -> Result<Commitment, ProofError> {
    let mut bytes = Vec::with_capacity(COMMITMENT_LENGTH);
    value
        .serialize_compressed(&mut bytes)
        .map_err(|e| ProofError::SerializationError(e.to_string()))?;
    let bytes: [u8; COMMITMENT_LENGTH] = bytes.try_into().map_err(|_| {
        ProofError::SerializationError("commitment encoding has unexpected length".to_string())
    })?;
    Ok(Commitment::from_bytes(bytes))
}

/// Decodes commitment bytes back into a field element.
///
/// Fails on non-canonical byte patterns, which is what makes a forged
/// commitment byte-string unverifiable rather than ambiguous.
pub fn field_from_commitment(commitment: &Commitment) -> Result<Fr, ProofError> {
    Fr::deserialize_compressed(commitment.as_bytes().as_slice())
        .map_err(|e| ProofError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(pegs: [u8; 4]) -> Code {
        Code::new(pegs).expect("valid test code")
    }

    #[test]
    fn commit_is_deterministic() {
        let secret = Secret::from_u64(1234);
        let sequence = code([4, 1, 5, 2]);
        let first = commit(&secret, &sequence).expect("commit succeeds");
        let second = commit(&secret, &sequence).expect("commit succeeds");
        assert_eq!(first, second);
    }

    #[test]
    fn different_codes_commit_differently() {
        let secret = Secret::from_u64(1234);
        let a = commit(&secret, &code([4, 1, 5, 2])).expect("commit succeeds");
        let b = commit(&secret, &code([4, 1, 5, 3])).expect("commit succeeds");
        assert_ne!(a, b);
    }

    #[test]
    fn different_secrets_commit_differently() {
        let sequence = code([4, 1, 5, 2]);
        let a = commit(&Secret::from_u64(1234), &sequence).expect("commit succeeds");
        let b = commit(&Secret::from_u64(1235), &sequence).expect("commit succeeds");
        assert_ne!(a, b);
    }

    #[test]
    fn element_order_matters() {
        let secret = Secret::from_u64(9);
        let a = commit(&secret, &code([1, 2, 3, 4])).expect("commit succeeds");
        let b = commit(&secret, &code([4, 3, 2, 1])).expect("commit succeeds");
        assert_ne!(a, b);
    }

    #[test]
    fn field_round_trips_through_commitment_bytes() {
        let secret = Secret::from_u64(77);
        let digest = commit(&secret, &code([6, 6, 1, 2])).expect("commit succeeds");
        let encoded = commitment_from_field(&digest).expect("encode succeeds");
        let decoded = field_from_commitment(&encoded).expect("decode succeeds");
        assert_eq!(digest, decoded);
    }

    #[test]
    fn non_canonical_bytes_do_not_decode() {
        // 0xff.. exceeds the BN254 modulus, so canonical deserialization
        // must reject it.
        let forged = Commitment::from_bytes([0xff; COMMITMENT_LENGTH]);
        assert!(field_from_commitment(&forged).is_err());
    }
}

//! Groth16 proving backend for the proof-gated Mastermind protocol.
//!
//! This crate binds the pure rules in `mastermind-core` to a concrete proof
//! system:
//!
//! - [`commitment`]: Poseidon commitments over BN254 binding a secret scalar
//!   to a code sequence.
//! - [`circuit`]: the hint relation as an R1CS circuit (commitment openings,
//!   alphabet range checks, and the in-circuit hint engine), plus Groth16
//!   key generation, proving, and verification.
//! - [`prover`]: the client-side prover and the [`ProofVerifier`] seam the
//!   round state machine consumes.
//!
//! The public-input encoding is positional and fixed: (guess commitment,
//! solution commitment, exact matches, partial matches). Reordering any
//! field, or mutating one after proof generation, breaks verification.
//!
//! [`ProofVerifier`]: mastermind_core::ProofVerifier

pub mod circuit;
pub mod commitment;
pub mod prover;

pub use circuit::HintCircuit;
pub use circuit::groth16::Groth16Keys;
pub use commitment::{Secret, commit, commitment_from_field, field_from_commitment};
pub use prover::{
    Groth16HintProver, Groth16Verifier, HintProver, HintWitness, ProofData, ProofError,
    public_input_fields, public_inputs_for,
};

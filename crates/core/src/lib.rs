//! Pure protocol rules for the proof-gated Mastermind game.
//!
//! `mastermind-core` defines the canonical types (codes, hints, commitments,
//! public inputs) and the round state machine, with no cryptographic
//! dependencies. Proof systems plug in through the [`ProofVerifier`] trait;
//! the `mastermind-zk` crate provides the Groth16 implementation.
pub mod code;
pub mod config;
pub mod hint;
pub mod proof;
pub mod session;

pub use code::{CODE_LENGTH, COLOR_MAX, COLOR_MIN, Code, CodeError};
pub use config::GameConfig;
pub use hint::{Hint, compute_hint};
pub use proof::{Commitment, ProofVerifier, PublicInputs};
pub use session::{GameSession, RoundPhase, SubmitError, SubmitOutcome};

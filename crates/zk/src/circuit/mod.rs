//! The hint relation as an R1CS circuit, with Groth16 plumbing.
//!
//! - [`gadgets`]: Poseidon hashing, alphabet membership, and the in-circuit
//!   hint engine.
//! - [`hint_circuit`]: the [`HintCircuit`] constraint synthesizer.
//! - [`groth16`]: key generation, proving, verification, and proof
//!   (de)serialization.

pub mod gadgets;
pub mod groth16;
pub mod hint_circuit;

pub use hint_circuit::HintCircuit;

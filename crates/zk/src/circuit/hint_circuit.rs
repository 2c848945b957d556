//! The hint relation as a Groth16 circuit.
//!
//! ## Public Inputs (allocation order is the wire format)
//!
//! 1. `guess_commitment`: Poseidon(secret, guess)
//! 2. `solution_commitment`: Poseidon(secret, solution)
//! 3. `exact_matches`
//! 4. `partial_matches`
//!
//! ## Private Witnesses
//!
//! - `solution` and `guess` sequences (CODE_LENGTH elements each)
//! - `secret`: the code-maker's scalar, shared by both commitments
//!
//! ## Constraints
//!
//! - both commitment openings hash to the declared public digests
//! - every solution and guess element is a valid peg color
//! - the in-circuit hint engine over (solution, guess) equals the declared
//!   (exact, partial) pair
//!
//! A satisfying witness therefore cannot exist for a declared hint that
//! differs from the true hint of the committed codes; the verifier trusts
//! the declared counts on that basis alone.

use ark_bn254::Fr;
use ark_r1cs_std::alloc::AllocVar;
use ark_r1cs_std::eq::EqGadget;
use ark_r1cs_std::fields::fp::FpVar;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

use mastermind_core::CODE_LENGTH;

use super::gadgets::{enforce_peg_in_alphabet, hint_gadget, poseidon_hash_gadget};

/// Circuit instance for one guess.
///
/// Fields are `Option` so the same type serves key generation (no
/// assignments) and proving (all assignments present). The constraint shape
/// does not depend on the assignments: both passes of the hint gadget run
/// over every position unconditionally.
#[derive(Clone)]
pub struct HintCircuit {
    // Public inputs
    pub guess_commitment: Option<Fr>,
    pub solution_commitment: Option<Fr>,
    pub exact_matches: Option<Fr>,
    pub partial_matches: Option<Fr>,

    // Private witnesses
    pub solution: Option<[Fr; CODE_LENGTH]>,
    pub guess: Option<[Fr; CODE_LENGTH]>,
    pub secret: Option<Fr>,
}

impl HintCircuit {
    /// Creates a fully assigned instance for proving.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        guess_commitment: Fr,
        solution_commitment: Fr,
        exact_matches: Fr,
        partial_matches: Fr,
        solution: [Fr; CODE_LENGTH],
        guess: [Fr; CODE_LENGTH],
        secret: Fr,
    ) -> Self {
        Self {
            guess_commitment: Some(guess_commitment),
            solution_commitment: Some(solution_commitment),
            exact_matches: Some(exact_matches),
            partial_matches: Some(partial_matches),
            solution: Some(solution),
            guess: Some(guess),
            secret: Some(secret),
        }
    }

    /// Creates an unassigned instance for key generation.
    ///
    /// One trusted setup serves all proofs because the constraint shape is
    /// identical for every assignment.
    pub fn dummy() -> Self {
        Self {
            guess_commitment: None,
            solution_commitment: None,
            exact_matches: None,
            partial_matches: None,
            solution: None,
            guess: None,
            secret: None,
        }
    }
}

impl ConstraintSynthesizer<Fr> for HintCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        // Public inputs, in wire order.
        let guess_commitment_var = FpVar::new_input(cs.clone(), || {
            self.guess_commitment.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let solution_commitment_var = FpVar::new_input(cs.clone(), || {
            self.solution_commitment
                .ok_or(SynthesisError::AssignmentMissing)
        })?;
        let exact_var = FpVar::new_input(cs.clone(), || {
            self.exact_matches.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let partial_var = FpVar::new_input(cs.clone(), || {
            self.partial_matches
                .ok_or(SynthesisError::AssignmentMissing)
        })?;

        // Private witnesses.
        let secret_var = FpVar::new_witness(cs.clone(), || {
            self.secret.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let solution_vars = alloc_code_witness(cs.clone(), &self.solution)?;
        let guess_vars = alloc_code_witness(cs.clone(), &self.guess)?;

        // Every element lies in the declared alphabet.
        for peg in solution_vars.iter().chain(guess_vars.iter()) {
            enforce_peg_in_alphabet(peg)?;
        }

        // Commitment openings: Poseidon(secret, sequence) == declared digest.
        let solution_digest = poseidon_hash_gadget(
            cs.clone(),
            &preimage(&secret_var, &solution_vars),
        )?;
        solution_digest.enforce_equal(&solution_commitment_var)?;

        let guess_digest = poseidon_hash_gadget(cs, &preimage(&secret_var, &guess_vars))?;
        guess_digest.enforce_equal(&guess_commitment_var)?;

        // Declared hint equals the recomputed hint.
        let (computed_exact, computed_partial) = hint_gadget(&solution_vars, &guess_vars)?;
        computed_exact.enforce_equal(&exact_var)?;
        computed_partial.enforce_equal(&partial_var)?;

        Ok(())
    }
}

/// Allocates a code sequence as witness variables, element by element.
fn alloc_code_witness(
    cs: ConstraintSystemRef<Fr>,
    code: &Option<[Fr; CODE_LENGTH]>,
) -> Result<Vec<FpVar<Fr>>, SynthesisError> {
    (0..CODE_LENGTH)
        .map(|i| {
            FpVar::new_witness(cs.clone(), || {
                code.map(|elements| elements[i])
                    .ok_or(SynthesisError::AssignmentMissing)
            })
        })
        .collect()
}

/// Hash preimage layout: secret first, then the sequence in order.
fn preimage(secret: &FpVar<Fr>, code: &[FpVar<Fr>]) -> Vec<FpVar<Fr>> {
    let mut inputs = Vec::with_capacity(1 + code.len());
    inputs.push(secret.clone());
    inputs.extend_from_slice(code);
    inputs
}

//! R1CS gadgets for the hint relation.
//!
//! Three building blocks:
//! - Poseidon hashing, via the sponge's constraint-level counterpart so the
//!   permutation itself is constrained (same cached config as the native
//!   hash in [`crate::commitment`]).
//! - Alphabet membership, as a disjunction of equality checks over the
//!   finite color set. No comparison gadgets are involved.
//! - The in-circuit hint engine, mirroring
//!   [`mastermind_core::compute_hint`] constraint for constraint:
//!   consumption is modeled by conditionally selecting 0 into matched slots.

use ark_bn254::Fr;
use ark_crypto_primitives::sponge::constraints::CryptographicSpongeVar;
use ark_crypto_primitives::sponge::poseidon::constraints::PoseidonSpongeVar;
use ark_r1cs_std::boolean::Boolean;
use ark_r1cs_std::eq::EqGadget;
use ark_r1cs_std::fields::{FieldVar, fp::FpVar};
use ark_r1cs_std::select::CondSelectGadget;
use ark_relations::r1cs::{ConstraintSystemRef, SynthesisError};

use mastermind_core::{CODE_LENGTH, COLOR_MAX, COLOR_MIN};

use crate::commitment::poseidon_config;

/// Poseidon hash of `inputs`, absorbed one element at a time.
///
/// Must stay in lockstep with the native `commit()`: same config, same
/// absorption schedule. Validated by `tests/poseidon_consistency.rs`.
pub fn poseidon_hash_gadget(
    cs: ConstraintSystemRef<Fr>,
    inputs: &[FpVar<Fr>],
) -> Result<FpVar<Fr>, SynthesisError> {
    let mut sponge = PoseidonSpongeVar::new(cs, poseidon_config());
    for input in inputs {
        sponge.absorb(input)?;
    }
    let squeezed = sponge.squeeze_field_elements(1)?;
    squeezed
        .into_iter()
        .next()
        .ok_or(SynthesisError::Unsatisfiable)
}

/// Enforces that `value` is one of the valid peg colors.
///
/// The sentinel 0 is excluded, which the hint gadget relies on: a consumed
/// slot (zeroed) can never equal a live peg.
pub fn enforce_peg_in_alphabet(value: &FpVar<Fr>) -> Result<(), SynthesisError> {
    let mut is_valid = value.is_eq(&FpVar::constant(Fr::from(u64::from(COLOR_MIN))))?;
    for color in (COLOR_MIN + 1)..=COLOR_MAX {
        let matches_color = value.is_eq(&FpVar::constant(Fr::from(u64::from(color))))?;
        is_valid = &is_valid | &matches_color;
    }
    is_valid.enforce_equal(&Boolean::TRUE)
}

/// Computes (exact, partial) match counts in-circuit.
///
/// Pass 1 counts positional matches and consumes both sides; pass 2 pairs
/// surviving guess pegs with surviving solution pegs at other positions.
/// Both passes run unconditionally over every (i, j) pair; the selects make
/// consumption data-independent, so the constraint shape is fixed.
pub fn hint_gadget(
    solution: &[FpVar<Fr>],
    guess: &[FpVar<Fr>],
) -> Result<(FpVar<Fr>, FpVar<Fr>), SynthesisError> {
    debug_assert_eq!(solution.len(), CODE_LENGTH);
    debug_assert_eq!(guess.len(), CODE_LENGTH);

    let zero = FpVar::<Fr>::zero();
    let mut solution = solution.to_vec();
    let mut guess = guess.to_vec();

    let mut exact = FpVar::<Fr>::zero();
    for i in 0..CODE_LENGTH {
        let hit = guess[i].is_eq(&solution[i])?;
        exact += FpVar::from(hit.clone());
        guess[i] = FpVar::conditionally_select(&hit, &zero, &guess[i])?;
        solution[i] = FpVar::conditionally_select(&hit, &zero, &solution[i])?;
    }

    let mut partial = FpVar::<Fr>::zero();
    for i in 0..CODE_LENGTH {
        for j in 0..CODE_LENGTH {
            if i == j {
                continue;
            }
            let colors_match = guess[i].is_eq(&solution[j])?;
            let guess_live = guess[i].is_neq(&zero)?;
            let hit = &colors_match & &guess_live;
            partial += FpVar::from(hit.clone());
            guess[i] = FpVar::conditionally_select(&hit, &zero, &guess[i])?;
            solution[j] = FpVar::conditionally_select(&hit, &zero, &solution[j])?;
        }
    }

    Ok((exact, partial))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_r1cs_std::R1CSVar;
    use ark_r1cs_std::alloc::AllocVar;
    use ark_relations::r1cs::ConstraintSystem;

    fn alloc_pegs(
        cs: ConstraintSystemRef<Fr>,
        pegs: [u8; CODE_LENGTH],
    ) -> Vec<FpVar<Fr>> {
        pegs.iter()
            .map(|&peg| {
                FpVar::new_witness(cs.clone(), || Ok(Fr::from(u64::from(peg)))).expect("alloc peg")
            })
            .collect()
    }

    fn hint_counts(solution: [u8; CODE_LENGTH], guess: [u8; CODE_LENGTH]) -> (Fr, Fr) {
        let cs = ConstraintSystem::<Fr>::new_ref();
        let solution_vars = alloc_pegs(cs.clone(), solution);
        let guess_vars = alloc_pegs(cs.clone(), guess);
        let (exact, partial) = hint_gadget(&solution_vars, &guess_vars).expect("hint gadget");
        assert!(cs.is_satisfied().expect("satisfiability check"));
        (exact.value().expect("exact value"), partial.value().expect("partial value"))
    }

    #[test]
    fn gadget_matches_native_engine() {
        let cases = [
            [4, 1, 5, 2],
            [4, 1, 5, 3],
            [1, 1, 1, 1],
            [1, 2, 3, 4],
            [4, 3, 2, 1],
            [2, 2, 4, 4],
            [5, 5, 2, 3],
        ];
        for solution in cases {
            for guess in cases {
                let expected = mastermind_core::compute_hint(
                    &mastermind_core::Code::new(solution).expect("valid solution"),
                    &mastermind_core::Code::new(guess).expect("valid guess"),
                );
                let (exact, partial) = hint_counts(solution, guess);
                assert_eq!(exact, Fr::from(u64::from(expected.exact)), "exact for {solution:?} vs {guess:?}");
                assert_eq!(partial, Fr::from(u64::from(expected.partial)), "partial for {solution:?} vs {guess:?}");
            }
        }
    }

    #[test]
    fn alphabet_gadget_accepts_valid_colors() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        for color in COLOR_MIN..=COLOR_MAX {
            let value =
                FpVar::new_witness(cs.clone(), || Ok(Fr::from(u64::from(color)))).expect("alloc");
            enforce_peg_in_alphabet(&value).expect("gadget");
        }
        assert!(cs.is_satisfied().expect("satisfiability check"));
    }

    #[test]
    fn alphabet_gadget_rejects_sentinel_and_out_of_range() {
        for bad in [0u64, u64::from(COLOR_MAX) + 1, 255] {
            let cs = ConstraintSystem::<Fr>::new_ref();
            let value = FpVar::new_witness(cs.clone(), || Ok(Fr::from(bad))).expect("alloc");
            enforce_peg_in_alphabet(&value).expect("gadget");
            assert!(!cs.is_satisfied().expect("satisfiability check"), "{bad} should not satisfy");
        }
    }
}

//! Hint computation: exact and partial match counts with de-duplication.
//!
//! The hint engine is the heart of the proof relation; the in-circuit
//! version in `mastermind-zk` must mirror this function constraint for
//! constraint. Both passes consume matched positions by zeroing them, which
//! is what makes repeated colors count once per occurrence.

use crate::code::{CODE_LENGTH, Code};

/// Match counts for a guess against a hidden solution.
///
/// Invariant: `exact + partial <= CODE_LENGTH`, and `exact == CODE_LENGTH`
/// exactly when guess and solution agree at every position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hint {
    /// Pegs with the right color in the right position.
    pub exact: u8,
    /// Pegs with the right color in the wrong position, after exact matches
    /// are removed from consideration.
    pub partial: u8,
}

impl Hint {
    /// True when every position matched exactly.
    pub const fn is_winning(&self) -> bool {
        self.exact as usize == CODE_LENGTH
    }
}

/// Computes the hint for `guess` against `solution`.
///
/// Two passes over local copies:
///
/// 1. Exact pass: positions where guess and solution agree are counted and
///    consumed (set to 0) so they cannot also produce a partial match.
/// 2. Partial pass: each surviving guess peg scans the surviving solution
///    pegs at other positions; a color match consumes both sides so neither
///    is counted twice.
///
/// The 0 sentinel marks consumption and is excluded from the alphabet, so it
/// never matches. Final counts do not depend on the pass-2 scan order.
pub fn compute_hint(solution: &Code, guess: &Code) -> Hint {
    let mut solution = *solution.pegs();
    let mut guess = *guess.pegs();

    let mut exact = 0u8;
    for i in 0..CODE_LENGTH {
        if guess[i] == solution[i] {
            exact += 1;
            guess[i] = 0;
            solution[i] = 0;
        }
    }

    let mut partial = 0u8;
    for i in 0..CODE_LENGTH {
        for j in 0..CODE_LENGTH {
            if i != j && guess[i] == solution[j] && guess[i] > 0 {
                partial += 1;
                guess[i] = 0;
                solution[j] = 0;
            }
        }
    }

    Hint { exact, partial }
}

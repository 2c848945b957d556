//! The turn-bounded round state machine.
//!
//! A [`GameSession`] owns at most one active round and is the only writer of
//! its state. Every mutation flows through [`GameSession::start_new_game`]
//! or [`GameSession::submit_answer`]; accessors are side-effect-free, and a
//! rejected submission leaves the round untouched. Callers that need
//! cross-thread access wrap the session in their own serialization boundary
//! (mutex or transaction); the protocol itself is sequential.

use crate::code::CODE_LENGTH;
use crate::config::GameConfig;
use crate::hint::Hint;
use crate::proof::{Commitment, ProofVerifier, PublicInputs};

/// Lifecycle phase of the session, derived from the round state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundPhase {
    /// No round started yet, or the session was just created.
    AwaitingSolution,
    /// A round is accepting submissions.
    InProgress,
    /// The solution was matched exactly; terminal until a new round starts.
    Solved,
    /// The turn budget is exhausted; terminal until a new round starts.
    MaxTurnsReached,
}

/// Rejections surfaced by [`GameSession::submit_answer`].
///
/// All variants are synchronous and leave the round unchanged. `RoundSolved`
/// and `MaxTurnsReached` are terminal for the current round; `InvalidProof`
/// is recoverable and does not consume a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("no active round; start a new game first")]
    NoActiveRound,

    #[error("this round has been solved; start a new game")]
    RoundSolved,

    #[error("max turn reached")]
    MaxTurnsReached,

    #[error("incorrect proof")]
    InvalidProof,
}

/// Result of an accepted submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmitOutcome {
    /// The proven hint for this guess.
    pub hint: Hint,
    /// Turn count after this submission.
    pub turns: u32,
    /// Whether this submission solved the round.
    pub solved: bool,
}

/// One round bound to a single solution commitment.
#[derive(Clone, Copy, Debug)]
struct Round {
    solution_commitment: Commitment,
    turns: u32,
    is_solved: bool,
}

/// The round state machine, parameterized over the proof system.
///
/// The session trusts whoever calls [`start_new_game`](Self::start_new_game)
/// to be the legitimate code-maker for that commitment; provenance is out of
/// protocol. It never sees a solution, guess, or secret.
pub struct GameSession<V> {
    config: GameConfig,
    verifier: V,
    round: Option<Round>,
}

impl<V: ProofVerifier> GameSession<V> {
    pub fn new(config: GameConfig, verifier: V) -> Self {
        Self {
            config,
            verifier,
            round: None,
        }
    }

    /// Starts a round for `solution_commitment`, discarding any prior round.
    ///
    /// Always allowed: turns reset to 0 and the solved flag clears, so a
    /// proof bound to a previous commitment cannot carry over.
    pub fn start_new_game(&mut self, solution_commitment: Commitment) {
        self.round = Some(Round {
            solution_commitment,
            turns: 0,
            is_solved: false,
        });
    }

    /// Checks a submitted proof against the active round and advances it.
    ///
    /// Guard order: terminal states first, then proof checks. The proof is
    /// rejected without calling the verifier when the declared solution
    /// commitment is not the one this round was started with, or when the
    /// declared hint is arithmetically impossible. On success the turn
    /// counter increments and the round is marked solved exactly when every
    /// position matched.
    pub fn submit_answer(
        &mut self,
        proof: &[u8],
        public_inputs: &PublicInputs,
    ) -> Result<SubmitOutcome, SubmitError> {
        let round = self.round.as_mut().ok_or(SubmitError::NoActiveRound)?;

        if round.is_solved {
            return Err(SubmitError::RoundSolved);
        }
        if round.turns >= self.config.max_turns {
            return Err(SubmitError::MaxTurnsReached);
        }
        if public_inputs.solution_commitment != round.solution_commitment {
            return Err(SubmitError::InvalidProof);
        }

        let exact = public_inputs.exact_matches;
        let partial = public_inputs.partial_matches;
        if (exact as usize + partial as usize) > CODE_LENGTH {
            return Err(SubmitError::InvalidProof);
        }

        if !self.verifier.verify(proof, public_inputs) {
            return Err(SubmitError::InvalidProof);
        }

        // Only a verified hint consumes a turn.
        round.turns += 1;
        let hint = Hint { exact, partial };
        round.is_solved = hint.is_winning();

        Ok(SubmitOutcome {
            hint,
            turns: round.turns,
            solved: round.is_solved,
        })
    }

    /// Turns consumed in the active round (0 when no round is active).
    pub fn turns(&self) -> u32 {
        self.round.as_ref().map_or(0, |round| round.turns)
    }

    /// Commitment the active round is bound to.
    pub fn solution_commitment(&self) -> Option<&Commitment> {
        self.round.as_ref().map(|round| &round.solution_commitment)
    }

    /// Whether the active round has been solved.
    pub fn is_solved(&self) -> bool {
        self.round.as_ref().is_some_and(|round| round.is_solved)
    }

    /// Turn budget applied to rounds started by this session.
    pub fn max_turns(&self) -> u32 {
        self.config.max_turns
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> RoundPhase {
        match &self.round {
            None => RoundPhase::AwaitingSolution,
            Some(round) if round.is_solved => RoundPhase::Solved,
            Some(round) if round.turns >= self.config.max_turns => RoundPhase::MaxTurnsReached,
            Some(_) => RoundPhase::InProgress,
        }
    }
}

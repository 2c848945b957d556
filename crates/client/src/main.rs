//! Interactive Mastermind client.
//!
//! Runs both roles of the protocol in one process: a code maker that picks a
//! secret code and proves its hints, and a code breaker that reads guesses
//! from stdin and only trusts hints whose proofs verify against the
//! commitment published at round start.
//!
//! ```bash
//! cargo run -p mastermind-client
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use rand::Rng;
use tracing_subscriber::EnvFilter;

use mastermind_core::{
    CODE_LENGTH, COLOR_MAX, COLOR_MIN, Code, Commitment, GameConfig, GameSession, PublicInputs,
    SubmitError, SubmitOutcome,
};
use mastermind_zk::{
    Groth16HintProver, Groth16Keys, Groth16Verifier, HintCircuit, HintProver, HintWitness,
    ProofData, Secret, commit, commitment_from_field, public_inputs_for,
};

/// The code maker. Holds the solution and the secret blinding it, and turns
/// guesses into proven hints.
struct CodeMaker {
    secret: Secret,
    solution: Code,
    prover: Groth16HintProver,
}

impl CodeMaker {
    fn new(keys: Groth16Keys, rng: &mut impl rand::RngCore) -> Result<Self> {
        let secret = Secret::random(rng);
        let mut pegs = [0u8; CODE_LENGTH];
        for peg in &mut pegs {
            *peg = rng.gen_range(COLOR_MIN..=COLOR_MAX);
        }
        let solution = Code::new(pegs).context("generated solution out of range")?;

        Ok(Self {
            secret,
            solution,
            prover: Groth16HintProver::new(keys),
        })
    }

    fn solution_commitment(&self) -> Result<Commitment> {
        let digest = commit(&self.secret, &self.solution)?;
        Ok(commitment_from_field(&digest)?)
    }

    fn proven_hint(&self, guess: Code) -> Result<(ProofData, PublicInputs)> {
        let witness = HintWitness {
            secret: self.secret.clone(),
            solution: self.solution,
            guess,
        };
        let public_inputs = public_inputs_for(&witness)?;
        let proof = self.prover.prove(&witness, &public_inputs)?;
        Ok((proof, public_inputs))
    }
}

fn read_stdin_guess() -> Result<Code> {
    let stdin = io::stdin();
    loop {
        print!("guess> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("stdin closed before the round finished");
        }

        match parse_guess(line.trim()) {
            Ok(code) => return Ok(code),
            Err(reason) => println!("{reason}"),
        }
    }
}

fn parse_guess(input: &str) -> Result<Code, String> {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| format!("'{c}' is not a digit"))
        })
        .collect::<Result<_, _>>()?;

    let pegs: [u8; CODE_LENGTH] = digits.try_into().map_err(|digits: Vec<u8>| {
        format!(
            "a guess has {CODE_LENGTH} pegs, got {}; try e.g. 1234",
            digits.len()
        )
    })?;

    Code::new(pegs).map_err(|e| e.to_string())
}

fn print_hint(guess: &Code, outcome: &SubmitOutcome) {
    println!(
        "{guess}: {} exact, {} partial (turn {})",
        outcome.hint.exact, outcome.hint.partial, outcome.turns
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Welcome to proof-gated Mastermind!");
    println!("Colors are digits {COLOR_MIN}..{COLOR_MAX}; a guess is {CODE_LENGTH} of them.");

    let mut rng = rand::thread_rng();

    tracing::info!("running trusted setup, this takes a moment");
    let keys = Groth16Keys::generate(HintCircuit::dummy(), &mut rng)
        .context("trusted setup failed")?;
    let verifier = Groth16Verifier::new(&keys.verifying_key);

    let code_maker = CodeMaker::new(keys, &mut rng)?;
    let mut session = GameSession::new(GameConfig::default(), verifier);
    session.start_new_game(code_maker.solution_commitment()?);
    println!(
        "The code maker committed to a solution: {}",
        session
            .solution_commitment()
            .context("round just started")?
    );

    let mut won = false;
    while !won {
        let guess = read_stdin_guess()?;
        let (proof, public_inputs) = code_maker.proven_hint(guess)?;

        match session.submit_answer(&proof.bytes, &public_inputs) {
            Ok(outcome) => {
                print_hint(&guess, &outcome);
                won = outcome.solved;
            }
            Err(SubmitError::MaxTurnsReached) => break,
            Err(e) => bail!("the code maker cheated: {e}"),
        }

        if session.turns() == session.max_turns() && !won {
            break;
        }
    }

    if won {
        println!("You won in {} turns!", session.turns());
    } else {
        println!("Out of turns; the solution stays hidden. Game over.");
    }
    Ok(())
}

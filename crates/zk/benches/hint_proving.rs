//! Performance benchmarks for hint proving and verification.
//!
//! Run with: cargo bench --package mastermind-zk
//!
//! This will generate HTML reports in target/criterion/

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use mastermind_core::{Code, ProofVerifier};
use mastermind_zk::{
    Groth16HintProver, Groth16Keys, Groth16Verifier, HintCircuit, HintProver, HintWitness,
    Secret, commit, public_inputs_for,
};

fn witness() -> HintWitness {
    HintWitness {
        secret: Secret::from_u64(1234),
        solution: Code::new([4, 1, 5, 2]).unwrap(),
        guess: Code::new([4, 1, 5, 3]).unwrap(),
    }
}

fn bench_commitment(c: &mut Criterion) {
    let w = witness();

    c.bench_function("poseidon_commit", |b| {
        b.iter(|| {
            let digest = commit(black_box(&w.secret), black_box(&w.solution));
            black_box(digest)
        });
    });
}

fn bench_proving(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let keys = Groth16Keys::generate(HintCircuit::dummy(), &mut rng).unwrap();
    let prover = Groth16HintProver::new(keys);

    let w = witness();
    let public_inputs = public_inputs_for(&w).unwrap();

    let mut group = c.benchmark_group("groth16_prove");
    group.sample_size(10);
    group.bench_function("hint_proof", |b| {
        b.iter(|| {
            let proof = prover.prove(black_box(&w), black_box(&public_inputs)).unwrap();
            black_box(proof)
        });
    });
    group.finish();
}

fn bench_verification(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let keys = Groth16Keys::generate(HintCircuit::dummy(), &mut rng).unwrap();
    let verifier = Groth16Verifier::new(&keys.verifying_key);
    let prover = Groth16HintProver::new(keys);

    let w = witness();
    let public_inputs = public_inputs_for(&w).unwrap();
    let proof = prover.prove(&w, &public_inputs).unwrap();

    c.bench_function("groth16_verify", |b| {
        b.iter(|| {
            let accepted = verifier.verify(black_box(&proof.bytes), black_box(&public_inputs));
            black_box(accepted)
        });
    });
}

criterion_group!(benches, bench_commitment, bench_proving, bench_verification);
criterion_main!(benches);

//! Reproducibility checks for seeded sessions.

use montepi::prelude::*;

fn reference_config(seed: u64) -> PiConfig {
    PiConfig::builder()
        .seed(seed)
        .region(20, 280, 20, 280)
        .build()
}

fn batch_json(seed: u64, n: u64) -> String {
    let mut sim = Simulation::from_config(&reference_config(seed)).unwrap();
    let result = sim.run(n).unwrap();
    serde_json::to_string(result).unwrap()
}

// H0: Different random seeds produce identical batches
// Falsification: run seeds 42, 43, 44 and compare serialized samples
#[test]
fn h0_1_different_seeds_produce_different_batches() {
    let outputs: Vec<String> = [42, 43, 44].iter().map(|&s| batch_json(s, 500)).collect();

    assert_ne!(outputs[0], outputs[1], "Seed 42 and 43 produced identical output");
    assert_ne!(outputs[1], outputs[2], "Seed 43 and 44 produced identical output");
    assert_ne!(outputs[0], outputs[2], "Seed 42 and 44 produced identical output");
}

// H0: Same seed produces different batches across sessions
// Falsification: build 50 sessions with seed=42 and compare all outputs
#[test]
fn h0_2_same_seed_produces_identical_batches() {
    let first = batch_json(42, 500);
    for i in 1..50 {
        assert_eq!(first, batch_json(42, 500), "Run {i} diverged from run 0");
    }
}

// H0: History depends on something other than seed and batch sizes
// Falsification: replay a mixed sequence of batch sizes twice
#[test]
fn h0_3_history_replays_exactly() {
    let sizes = [1, 10, 1000, 37, 250];
    let replay = || {
        let mut sim = Simulation::from_config(&reference_config(2024)).unwrap();
        for n in sizes {
            sim.run(n).unwrap();
        }
        sim.history().clone()
    };

    let a = replay();
    let b = replay();
    assert_eq!(a, b);
    assert_eq!(a.len(), sizes.len());
    let recorded: Vec<u64> = a.iter().map(|e| e.batch_size).collect();
    assert_eq!(recorded, sizes);
}

// H0: A rejected run perturbs the random stream
// Falsification: interleave invalid runs and compare to a clean session
#[test]
fn h0_4_rejected_runs_do_not_consume_randomness() {
    let mut clean = Simulation::from_config(&reference_config(9)).unwrap();
    let mut noisy = Simulation::from_config(&reference_config(9)).unwrap();

    clean.run(100).unwrap();
    clean.run(100).unwrap();

    noisy.run(100).unwrap();
    assert!(noisy.run(0).is_err());
    noisy.run(100).unwrap();

    assert_eq!(clean.history(), noisy.history());
}

#[test]
fn seed_is_reported_for_replay() {
    let sim = Simulation::from_config(&reference_config(77)).unwrap();
    assert_eq!(sim.seed(), 77);

    let entropy = Simulation::from_config(&PiConfig::default()).unwrap();
    let mut replayed = Simulation::new(*entropy.region(), SimRng::new(entropy.seed())).unwrap();
    let mut original = entropy;
    assert_eq!(
        original.run(200).unwrap().estimate,
        replayed.run(200).unwrap().estimate
    );
}

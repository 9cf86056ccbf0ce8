//! Scramble determinism and replay integration tests.

use rust_cube::core::{CubeRng, CubeRngState};
use rust_cube::state::{CubeState, Grid};

// =============================================================================
// Determinism
// =============================================================================

/// A zero-length scramble is exactly a no-op.
#[test]
fn test_scramble_zero_equals_reset_output() {
    let mut cube = CubeState::new();
    let reset_grid = cube.reset();

    let mut rng = CubeRng::new(123);
    let scrambled_grid = cube.scramble(0, &mut rng);

    assert_eq!(scrambled_grid, reset_grid);
    assert_eq!(scrambled_grid, Grid::solved());
}

/// The same seed and count always produce the same position and log.
#[test]
fn test_same_seed_same_scramble() {
    let mut a = CubeState::new();
    let mut b = CubeState::new();

    let grid_a = a.scramble(100, &mut CubeRng::new(2024));
    let grid_b = b.scramble(100, &mut CubeRng::new(2024));

    assert_eq!(grid_a, grid_b);
    assert_eq!(a.history(), b.history());
}

/// Different seeds diverge.
#[test]
fn test_different_seeds_diverge() {
    let mut a = CubeState::new();
    let mut b = CubeState::new();

    a.scramble(100, &mut CubeRng::new(1));
    b.scramble(100, &mut CubeRng::new(2));

    let moves_a: Vec<_> = a.history().iter().map(|r| r.mv).collect();
    let moves_b: Vec<_> = b.history().iter().map(|r| r.mv).collect();
    assert_ne!(moves_a, moves_b);
}

// =============================================================================
// Replay
// =============================================================================

/// Replaying the recorded scramble moves on a fresh cube reproduces the
/// scrambled grid exactly.
#[test]
fn test_replay_reproduces_scramble() {
    let mut original = CubeState::new();
    let scrambled_grid = original.scramble(80, &mut CubeRng::new(55));

    let mut replay = CubeState::new();
    replay.reset();
    for record in original.history() {
        replay.apply(record.mv);
    }

    assert_eq!(replay.snapshot(), scrambled_grid);
    assert_eq!(replay.history(), original.history());
}

/// The move log serializes, so a host can persist a scramble and replay it
/// in a later session.
#[test]
fn test_persisted_log_replays() {
    let mut original = CubeState::new();
    let scrambled_grid = original.scramble(30, &mut CubeRng::new(9));

    let json = serde_json::to_string(original.history()).unwrap();
    let log: Vec<rust_cube::moves::MoveRecord> = serde_json::from_str(&json).unwrap();

    let mut replay = CubeState::new();
    for record in &log {
        replay.apply(record.mv);
    }

    assert_eq!(replay.snapshot(), scrambled_grid);
}

// =============================================================================
// RNG Checkpointing
// =============================================================================

/// Capturing the RNG mid-scramble and resuming from the checkpoint yields
/// the same final position as scrambling straight through.
#[test]
fn test_rng_checkpoint_resumes_scramble() {
    let mut straight = CubeState::new();
    let mut rng = CubeRng::new(4242);
    straight.scramble(20, &mut rng);

    let mut resumed = straight.clone();
    let checkpoint: CubeRngState = rng.state();

    let final_grid = straight.scramble(20, &mut rng);

    let mut restored_rng = CubeRng::from_state(&checkpoint);
    let resumed_grid = resumed.scramble(20, &mut restored_rng);

    assert_eq!(resumed_grid, final_grid);
}

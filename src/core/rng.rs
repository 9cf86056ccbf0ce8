//! Deterministic random number generation for scrambles.
//!
//! The engine never owns a randomness source; hosts construct a `CubeRng`
//! and pass it into [`CubeState::scramble`](crate::state::CubeState::scramble).
//! The same seed always produces the same scramble, which keeps replays,
//! tests, and daily-challenge style features reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG handed to the engine for scrambling.
///
/// Uses ChaCha8 for speed while keeping the stream position capturable in
/// O(1), so a host can checkpoint mid-scramble and resume.
#[derive(Clone, Debug)]
pub struct CubeRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl CubeRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Capture the current stream position for checkpointing.
    #[must_use]
    pub fn state(&self) -> CubeRngState {
        CubeRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a captured state.
    #[must_use]
    pub fn from_state(state: &CubeRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// The ChaCha8 word position makes capture O(1) regardless of how many
/// values have already been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

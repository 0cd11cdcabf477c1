//! Deterministic random number generation for reshuffles.
//!
//! ```
//! use memory_match::core::{GameRng, PlacementMode};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same layout
//! assert_eq!(
//!     a.positions(8, PlacementMode::Permutation),
//!     b.positions(8, PlacementMode::Permutation),
//! );
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::PlacementMode;

/// Seeded RNG used for card placement.
///
/// Uses ChaCha8 for speed with good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw 1-based display positions for `count` cards.
    ///
    /// With `PlacementMode::Permutation` the result is a uniform permutation
    /// of `1..=count`. With `PlacementMode::IndependentSlots` each entry is
    /// drawn independently from `1..=count`.
    pub fn positions(&mut self, count: u32, mode: PlacementMode) -> Vec<u32> {
        match mode {
            PlacementMode::Permutation => {
                let mut positions: Vec<u32> = (1..=count).collect();
                positions.shuffle(&mut self.inner);
                positions
            }
            PlacementMode::IndependentSlots => {
                (0..count).map(|_| self.inner.gen_range(1..=count)).collect()
            }
        }
    }
}

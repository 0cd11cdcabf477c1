//! Game state: counters and the processing flag.
//!
//! ## GameState
//!
//! Mutable bookkeeping owned by the controller:
//! - Moves (one per accepted flip)
//! - Matches (one per paired couple)
//! - Processing flag (set while a revealed pair resolves)
//!
//! ## GameStats
//!
//! Read-only summary handed to the presentation layer.

use serde::{Deserialize, Serialize};

/// Counters and the input lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Accepted flips since the last reshuffle.
    pub moves: u32,

    /// Pairs matched since the last reshuffle.
    pub matches: u32,

    /// True while a revealed pair is being resolved. Blocks all flips.
    pub processing: bool,
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an accepted flip.
    pub fn record_move(&mut self) {
        self.moves += 1;
    }

    /// Count a matched pair.
    pub fn record_match(&mut self) {
        self.matches += 1;
    }

    /// Zero both counters.
    ///
    /// The processing flag is left alone: a pair still resolving keeps the
    /// board locked until its delay elapses.
    pub fn reset_counters(&mut self) {
        self.moves = 0;
        self.matches = 0;
    }
}

/// Snapshot of progress for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub moves: u32,
    pub matches: u32,
    pub total_pairs: usize,
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.moves, 0);
        assert_eq!(state.matches, 0);
        assert!(!state.processing);
    }

    #[test]
    fn test_reset_counters_keeps_processing() {
        let mut state = GameState::new();
        state.record_move();
        state.record_move();
        state.record_match();
        state.processing = true;

        state.reset_counters();

        assert_eq!(state.moves, 0);
        assert_eq!(state.matches, 0);
        assert!(state.processing);
    }
}

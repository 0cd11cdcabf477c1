//! Game configuration.
//!
//! `GameConfig` carries every tunable the engine reads:
//! - Delays for pair resolution, placement stagger, announcements, touch guard
//! - The selector used to find the card container on the surface
//! - How reshuffles assign display positions
//! - An optional RNG seed for reproducible reshuffles
//!
//! Durations are stored in milliseconds so the config reads naturally from
//! JSON or TOML. Missing fields fall back to `GameConfig::default()`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How `reshuffle` assigns display positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// Uniform random permutation of `1..=n`. Every position used once.
    #[default]
    Permutation,
    /// Each card independently draws a position in `1..=n`.
    ///
    /// Duplicates are possible; cards sharing a position keep their
    /// relative mounted order on screen.
    IndependentSlots,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay before a revealed pair resolves and input unlocks. Also the
    /// delay between completing the board and the automatic reshuffle.
    pub resolution_delay_ms: u64,

    /// Delay between a reshuffle and the cards moving to their new positions.
    pub shuffle_delay_ms: u64,

    /// Selector for the card container on the surface.
    pub card_selector: String,

    /// How long an announcement stays in the live region.
    pub announcement_ttl_ms: u64,

    /// Window after a touch during which clicks are ignored.
    pub touch_guard_ms: u64,

    pub placement: PlacementMode,

    /// RNG seed. `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            resolution_delay_ms: 1000,
            shuffle_delay_ms: 400,
            card_selector: ".js-cards".to_string(),
            announcement_ttl_ms: 1000,
            touch_guard_ms: 500,
            placement: PlacementMode::Permutation,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay_ms = duration_ms(delay);
        self
    }

    #[must_use]
    pub fn with_shuffle_delay(mut self, delay: Duration) -> Self {
        self.shuffle_delay_ms = duration_ms(delay);
        self
    }

    #[must_use]
    pub fn with_card_selector(mut self, selector: impl Into<String>) -> Self {
        self.card_selector = selector.into();
        self
    }

    #[must_use]
    pub fn with_announcement_ttl(mut self, ttl: Duration) -> Self {
        self.announcement_ttl_ms = duration_ms(ttl);
        self
    }

    #[must_use]
    pub fn with_touch_guard(mut self, window: Duration) -> Self {
        self.touch_guard_ms = duration_ms(window);
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: PlacementMode) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn resolution_delay(&self) -> Duration {
        Duration::from_millis(self.resolution_delay_ms)
    }

    #[must_use]
    pub fn shuffle_delay(&self) -> Duration {
        Duration::from_millis(self.shuffle_delay_ms)
    }

    #[must_use]
    pub fn announcement_ttl(&self) -> Duration {
        Duration::from_millis(self.announcement_ttl_ms)
    }

    #[must_use]
    pub fn touch_guard(&self) -> Duration {
        Duration::from_millis(self.touch_guard_ms)
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

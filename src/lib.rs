//! # memory-match
//!
//! Engine for a memory-matching card game: a grid of face-down cards, two
//! flips per turn, pairs stay up, mismatches flip back, and a cleared board
//! reshuffles into a new game.
//!
//! ## Design Principles
//!
//! 1. **No rendering**: The engine never touches a screen. Every change is
//!    queued as a `GameEvent` for the presentation layer to apply.
//!
//! 2. **Explicit time**: Delayed transitions (flip-back, reshuffle, card
//!    placement) run on a logical clock advanced by the caller, so games are
//!    fully deterministic under test.
//!
//! 3. **Reject, don't fail**: Invalid flips are silent no-ops. Only startup
//!    returns errors.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{CardId, CardStatus, GameConfig, GameController};
//!
//! let config = GameConfig::new().with_seed(7);
//! let mut game = GameController::new(config, ["owl", "fox", "owl", "fox"]).unwrap();
//!
//! game.flip(CardId::new(0));
//! game.flip(CardId::new(1));
//! assert!(game.state().processing);
//!
//! game.advance(Duration::from_millis(1000));
//! assert_eq!(game.card(CardId::new(0)).unwrap().status, CardStatus::Hidden);
//! assert_eq!(game.state().moves, 2);
//! ```
//!
//! ## Modules
//!
//! - `core`: Cards, deck, counters, RNG, configuration
//! - `events`: Effects for the presentation layer
//! - `schedule`: Logical-clock timer queue
//! - `game`: Controller and input routing
//! - `surface`: Source of card elements at startup

pub mod core;
pub mod error;
pub mod events;
pub mod schedule;
pub mod game;
pub mod surface;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, CardStatus, Symbol,
    Deck, GameState, GameStats,
    GameRng, GameConfig, PlacementMode,
};

pub use crate::error::{GameError, Result};

pub use crate::events::{Announcement, AnnouncementId, GameEvent};

pub use crate::schedule::{Scheduler, Task, TimerId};

pub use crate::game::{GameController, InputEvent, InputResponse, Key};

pub use crate::surface::{CardSurface, StaticSurface};

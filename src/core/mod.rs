//! Core game types: cards, deck, state, RNG, configuration.
//!
//! Nothing here schedules work or talks to the presentation layer; the
//! controller in `game` composes these pieces.

pub mod card;
pub mod deck;
pub mod state;
pub mod rng;
pub mod config;

pub use card::{Card, CardId, CardStatus, Symbol};
pub use deck::{Deck, RevealedCards};
pub use state::{GameState, GameStats};
pub use rng::GameRng;
pub use config::{GameConfig, PlacementMode};

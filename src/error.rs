//! Error types for memory-match.
//!
//! Only startup can fail. Once a game is mounted, invalid player actions
//! (flipping a matched card, flipping while a pair resolves) are silently
//! rejected rather than reported.

use thiserror::Error;

/// Result type alias using `GameError`.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors that abort game startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cards container not found with selector: {selector}")]
    ContainerNotFound { selector: String },

    #[error("no cards found in the container")]
    NoCards,

    #[error("deck has an odd number of cards ({count})")]
    OddCardCount { count: usize },

    #[error("symbol {symbol:?} appears {count} times, expected exactly 2")]
    UnpairedSymbol { symbol: String, count: usize },

    #[error("too many cards, at most {max} supported")]
    TooManyCards { max: u32 },
}

impl GameError {
    /// Message shown to the player when startup fails, whatever the cause.
    pub const USER_MESSAGE: &'static str = "Failed to start the game. Please refresh the page.";
}

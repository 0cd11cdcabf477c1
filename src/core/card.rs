//! Cards: identity, symbol, and visibility status.
//!
//! A card's `CardId` is its index in the deck as mounted. It never changes,
//! even when a reshuffle moves the card to a new display `position`.

use serde::{Deserialize, Serialize};

/// Stable card identifier (index in the mounted deck).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the index into the deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identity token shared by exactly two cards in a deck.
///
/// The engine only compares symbols for equality; the presentation layer
/// decides what they look like (an animal picture, a glyph, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visibility status of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, waiting for its pair to be evaluated.
    Revealed,
    /// Paired. Terminal until the next reshuffle.
    Matched,
}

/// A single card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub status: CardStatus,
    /// 1-based display order. Not guaranteed unique, see `PlacementMode`.
    pub position: u32,
}

impl Card {
    /// Create a hidden card at its mounted position.
    pub fn new(id: CardId, symbol: impl Into<Symbol>) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            status: CardStatus::Hidden,
            position: id.0 + 1,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.status == CardStatus::Hidden
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.status == CardStatus::Revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.status == CardStatus::Matched
    }

    /// Accessible name for assistive technology.
    #[must_use]
    pub fn label(&self) -> String {
        match self.status {
            CardStatus::Matched => format!("Card matched: {}", self.symbol),
            CardStatus::Hidden | CardStatus::Revealed => format!("Card {}", self.position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(3);
        assert_eq!(id.index(), 3);
        assert_eq!(format!("{}", id), "Card(3)");
    }

    #[test]
    fn test_new_card_is_hidden() {
        let card = Card::new(CardId::new(0), "owl");
        assert!(card.is_hidden());
        assert_eq!(card.position, 1);
        assert_eq!(card.symbol.as_str(), "owl");
    }

    #[test]
    fn test_label_follows_status() {
        let mut card = Card::new(CardId::new(4), "fox");
        assert_eq!(card.label(), "Card 5");

        card.status = CardStatus::Revealed;
        assert_eq!(card.label(), "Card 5");

        card.status = CardStatus::Matched;
        assert_eq!(card.label(), "Card matched: fox");
    }
}

//! The deck: every card on the board, in mounted order.
//!
//! Backed by `im::Vector` so `GameController::snapshot` is O(1).

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::card::{Card, CardId, CardStatus, Symbol};
use crate::error::{GameError, Result};

/// Cards currently face up. Never more than two.
pub type RevealedCards = SmallVec<[CardId; 2]>;

/// Largest supported deck. Card IDs and 1-based positions must fit in `u32`.
pub const MAX_CARDS: u32 = u32::MAX;

/// Ordered, validated sequence of cards.
///
/// Guarantees: non-empty, even length, every symbol appears exactly twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Build a deck from symbols in mounted order.
    ///
    /// Card `i` gets `CardId(i)` and display position `i + 1`.
    pub fn from_symbols<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| card_id(i).map(|id| Card::new(id, symbol)))
            .collect::<Result<Vector<Card>>>()?;

        Self::validate(&cards)?;
        Ok(Self { cards })
    }

    fn validate(cards: &Vector<Card>) -> Result<()> {
        if cards.is_empty() {
            return Err(GameError::NoCards);
        }
        // Oversized decks already failed in `card_id`
        if cards.len() % 2 != 0 {
            return Err(GameError::OddCardCount { count: cards.len() });
        }

        let mut counts: FxHashMap<&Symbol, usize> = FxHashMap::default();
        for card in cards {
            *counts.entry(&card.symbol).or_insert(0) += 1;
        }

        // Report in deck order so the error is deterministic
        for card in cards {
            let count = counts[&card.symbol];
            if count != 2 {
                return Err(GameError::UnpairedSymbol {
                    symbol: card.symbol.to_string(),
                    count,
                });
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards as a `u32`. Validation keeps this lossless.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        u32::try_from(self.cards.len()).unwrap_or(MAX_CARDS)
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// All card IDs in mounted order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id)
    }

    /// Set a card's status. Returns the previous status, or `None` for an
    /// unknown card.
    pub fn set_status(&mut self, id: CardId, status: CardStatus) -> Option<CardStatus> {
        let card = self.cards.get_mut(id.index())?;
        let previous = card.status;
        card.status = status;
        Some(previous)
    }

    pub fn set_position(&mut self, id: CardId, position: u32) {
        if let Some(card) = self.cards.get_mut(id.index()) {
            card.position = position;
        }
    }

    /// Face-up cards in deck order.
    #[must_use]
    pub fn revealed(&self) -> RevealedCards {
        self.cards
            .iter()
            .filter(|c| c.is_revealed())
            .map(|c| c.id)
            .collect()
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Cheap structural copy of the cards.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Card> {
        self.cards.clone()
    }
}

fn card_id(index: usize) -> Result<CardId> {
    u32::try_from(index)
        .ok()
        .filter(|&id| id < MAX_CARDS)
        .map(CardId::new)
        .ok_or(GameError::TooManyCards { max: MAX_CARDS })
}

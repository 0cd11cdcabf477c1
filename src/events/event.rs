//! Game event types.

use serde::{Deserialize, Serialize};

use super::announce::{Announcement, AnnouncementId};
use crate::core::{CardId, CardStatus};

/// An effect for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A card changed visibility.
    CardStatusChanged {
        card: CardId,
        status: CardStatus,
        /// Accessible name after the change.
        label: String,
    },

    /// A card should move to a new display position.
    CardMoved { card: CardId, position: u32 },

    /// Move or match counters changed.
    CountersChanged { moves: u32, matches: u32 },

    /// Every card is matched.
    GameComplete { moves: u32 },

    /// Board stops accepting input while a pair resolves.
    InputLocked,

    /// Board accepts input again.
    InputUnlocked,

    /// Message for assistive technology.
    Announce(Announcement),

    /// An announcement should leave the live region.
    AnnouncementExpired { id: AnnouncementId },
}

impl GameEvent {
    /// Check if this event changes a card's status.
    #[must_use]
    pub fn is_status_change(&self) -> bool {
        matches!(self, GameEvent::CardStatusChanged { .. })
    }

    /// Card this event concerns, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            GameEvent::CardStatusChanged { card, .. } | GameEvent::CardMoved { card, .. } => {
                Some(*card)
            }
            _ => None,
        }
    }

    /// Accessible label carried by a status change.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            GameEvent::CardStatusChanged { label, .. } => Some(label.as_str()),
            _ => None,
        }
    }

    /// New display position carried by a move.
    #[must_use]
    pub fn position(&self) -> Option<u32> {
        match self {
            GameEvent::CardMoved { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Move count, from counter updates and game completion.
    #[must_use]
    pub fn moves(&self) -> Option<u32> {
        match self {
            GameEvent::CountersChanged { moves, .. } | GameEvent::GameComplete { moves } => {
                Some(*moves)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn matches(&self) -> Option<u32> {
        match self {
            GameEvent::CountersChanged { matches, .. } => Some(*matches),
            _ => None,
        }
    }

    /// Announcement this event publishes or retracts.
    #[must_use]
    pub fn announcement_id(&self) -> Option<AnnouncementId> {
        match self {
            GameEvent::Announce(announcement) => Some(announcement.id),
            GameEvent::AnnouncementExpired { id } => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_accessor() {
        let moved = GameEvent::CardMoved {
            card: CardId::new(2),
            position: 5,
        };
        assert_eq!(moved.card(), Some(CardId::new(2)));
        assert!(!moved.is_status_change());
        assert_eq!(GameEvent::InputLocked.card(), None);
    }

    #[test]
    fn test_payload_accessors() {
        let changed = GameEvent::CardStatusChanged {
            card: CardId::new(1),
            status: CardStatus::Matched,
            label: "Card matched: owl".to_string(),
        };
        assert_eq!(changed.label(), Some("Card matched: owl"));
        assert_eq!(changed.position(), None);

        let moved = GameEvent::CardMoved {
            card: CardId::new(1),
            position: 3,
        };
        assert_eq!(moved.position(), Some(3));
        assert_eq!(moved.label(), None);

        let counters = GameEvent::CountersChanged { moves: 4, matches: 2 };
        assert_eq!(counters.moves(), Some(4));
        assert_eq!(counters.matches(), Some(2));

        let complete = GameEvent::GameComplete { moves: 8 };
        assert_eq!(complete.moves(), Some(8));
        assert_eq!(complete.matches(), None);

        let announced = GameEvent::Announce(Announcement {
            id: AnnouncementId(5),
            message: "No match. Cards will flip back.".to_string(),
        });
        let expired = GameEvent::AnnouncementExpired { id: AnnouncementId(5) };
        assert_eq!(announced.announcement_id(), Some(AnnouncementId(5)));
        assert_eq!(expired.announcement_id(), Some(AnnouncementId(5)));
        assert_eq!(GameEvent::InputLocked.announcement_id(), None);
    }

    #[test]
    fn test_serde_tagging() {
        let event = GameEvent::CountersChanged { moves: 3, matches: 1 };
        let json = serde_json::to_string(&event).unwrap();

        assert_eq!(json, r#"{"type":"counters_changed","moves":3,"matches":1}"#);

        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}

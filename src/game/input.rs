//! Raw input routing.
//!
//! Front ends forward pointer and keyboard events here instead of calling
//! `flip` directly. Routing adds the behavior browsers need:
//!
//! - A touch is followed by a synthetic click on most devices. After a
//!   `TouchEnd`, clicks are ignored for `GameConfig::touch_guard`.
//! - Keyboard activation uses Enter or Space.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::controller::GameController;
use crate::core::CardId;

/// Keys the board reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Space,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            " " => Key::Space,
            _ => Key::Other,
        }
    }

    #[must_use]
    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// An input from the presentation layer.
///
/// Pointer events carry the card under the pointer, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Click { card: Option<CardId> },
    TouchEnd { card: Option<CardId> },
    Key { card: CardId, key: Key },
    /// Player asked for a new game.
    Reshuffle,
}

/// What the front end should do with the native event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputResponse {
    /// A card was flipped.
    pub flipped: bool,
    /// Suppress the platform's default handling.
    pub prevent_default: bool,
}

impl GameController {
    /// Route an input event.
    pub fn handle_input(&mut self, input: InputEvent) -> InputResponse {
        match input {
            InputEvent::TouchEnd { card } => {
                let guard = self.config().touch_guard_ms;
                self.touch_guard_until = Some(self.now().saturating_add(guard));

                let flipped = self.try_flip(card);
                InputResponse {
                    flipped,
                    prevent_default: flipped,
                }
            }
            InputEvent::Click { card } => {
                if self.touch_guarded() {
                    trace!(?card, "click ignored after touch");
                    return InputResponse::default();
                }
                InputResponse {
                    flipped: self.try_flip(card),
                    prevent_default: false,
                }
            }
            InputEvent::Key { card, key } => {
                if !key.activates() {
                    return InputResponse::default();
                }
                InputResponse {
                    flipped: self.try_flip(Some(card)),
                    prevent_default: true,
                }
            }
            InputEvent::Reshuffle => {
                self.reset();
                InputResponse::default()
            }
        }
    }

    fn touch_guarded(&self) -> bool {
        self.touch_guard_until.is_some_and(|until| self.now() < until)
    }

    fn try_flip(&mut self, card: Option<CardId>) -> bool {
        match card {
            Some(card) if self.can_flip(card) => self.flip(card),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("Escape"), Key::Other);
        assert!(Key::Space.activates());
        assert!(!Key::Other.activates());
    }
}

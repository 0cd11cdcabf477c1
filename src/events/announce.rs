//! Screen-reader announcements.
//!
//! Announcements are polite status messages. Each one lives in the live
//! region for `GameConfig::announcement_ttl` and is then retracted, so the
//! controller schedules an expiry for every announcement it makes.

use serde::{Deserialize, Serialize};

/// Identifier pairing an `Announce` with its later expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnouncementId(pub u64);

impl std::fmt::Display for AnnouncementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Announcement({})", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub message: String,
}

/// Builds announcements with fresh IDs.
#[derive(Clone, Debug, Default)]
pub struct Announcer {
    next_id: u64,
}

impl Announcer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a message with the next ID.
    pub fn announce(&mut self, message: impl Into<String>) -> Announcement {
        let id = AnnouncementId(self.next_id);
        self.next_id += 1;
        Announcement {
            id,
            message: message.into(),
        }
    }

    pub fn match_found(&mut self, matches: u32) -> Announcement {
        self.announce(format!("Match found! {matches} matches so far."))
    }

    pub fn no_match(&mut self) -> Announcement {
        self.announce("No match. Cards will flip back.")
    }

    pub fn all_matched(&mut self, moves: u32) -> Announcement {
        self.announce(format!("Congratulations! All cards matched in {moves} moves!"))
    }

    pub fn shuffled(&mut self) -> Announcement {
        self.announce("Cards shuffled! New game started.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let mut announcer = Announcer::new();

        let a = announcer.no_match();
        let b = announcer.shuffled();

        assert_eq!(a.id, AnnouncementId(0));
        assert_eq!(b.id, AnnouncementId(1));
    }

    #[test]
    fn test_messages() {
        let mut announcer = Announcer::new();

        assert_eq!(announcer.match_found(2).message, "Match found! 2 matches so far.");
        assert_eq!(
            announcer.all_matched(14).message,
            "Congratulations! All cards matched in 14 moves!"
        );
        assert_eq!(announcer.no_match().message, "No match. Cards will flip back.");
        assert_eq!(announcer.shuffled().message, "Cards shuffled! New game started.");
    }
}

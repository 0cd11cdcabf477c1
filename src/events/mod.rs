//! Effects the engine asks the presentation layer to apply.
//!
//! The controller never touches a screen. Each state change it makes is
//! queued as a `GameEvent`; the front end drains the queue and maps events to
//! whatever it renders with (CSS classes, widget state, a terminal).

mod announce;
mod event;

pub use announce::{Announcement, AnnouncementId, Announcer};
pub use event::GameEvent;

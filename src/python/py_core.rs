//! Value type bindings for Python.

use pyo3::prelude::*;

use crate::core::{CardStatus, GameStats};
use crate::events::GameEvent;

/// Python wrapper for GameStats.
#[pyclass(name = "GameStats")]
#[derive(Clone, Debug)]
pub struct PyGameStats(pub GameStats);

#[pymethods]
impl PyGameStats {
    #[getter]
    fn moves(&self) -> u32 {
        self.0.moves
    }

    #[getter]
    fn matches(&self) -> u32 {
        self.0.matches
    }

    #[getter]
    fn total_pairs(&self) -> usize {
        self.0.total_pairs
    }

    #[getter]
    fn is_complete(&self) -> bool {
        self.0.is_complete
    }

    fn __repr__(&self) -> String {
        format!(
            "GameStats(moves={}, matches={}, total_pairs={}, is_complete={})",
            self.0.moves, self.0.matches, self.0.total_pairs, self.0.is_complete
        )
    }
}

/// Python view of a GameEvent.
///
/// `kind` names the variant; the other fields are set when the variant
/// carries them.
#[pyclass(name = "GameEvent")]
#[derive(Clone, Debug)]
pub struct PyGameEvent(pub GameEvent);

#[pymethods]
impl PyGameEvent {
    #[getter]
    fn kind(&self) -> &'static str {
        match &self.0 {
            GameEvent::CardStatusChanged { .. } => "card_status_changed",
            GameEvent::CardMoved { .. } => "card_moved",
            GameEvent::CountersChanged { .. } => "counters_changed",
            GameEvent::GameComplete { .. } => "game_complete",
            GameEvent::InputLocked => "input_locked",
            GameEvent::InputUnlocked => "input_unlocked",
            GameEvent::Announce(_) => "announce",
            GameEvent::AnnouncementExpired { .. } => "announcement_expired",
        }
    }

    #[getter]
    fn card(&self) -> Option<u32> {
        self.0.card().map(|c| c.0)
    }

    #[getter]
    fn status(&self) -> Option<&'static str> {
        match &self.0 {
            GameEvent::CardStatusChanged { status, .. } => Some(status_name(*status)),
            _ => None,
        }
    }

    #[getter]
    fn label(&self) -> Option<String> {
        self.0.label().map(str::to_string)
    }

    #[getter]
    fn position(&self) -> Option<u32> {
        self.0.position()
    }

    #[getter]
    fn moves(&self) -> Option<u32> {
        self.0.moves()
    }

    #[getter]
    fn matches(&self) -> Option<u32> {
        self.0.matches()
    }

    #[getter]
    fn announcement_id(&self) -> Option<u64> {
        self.0.announcement_id().map(|id| id.0)
    }

    #[getter]
    fn message(&self) -> Option<String> {
        match &self.0 {
            GameEvent::Announce(announcement) => Some(announcement.message.clone()),
            _ => None,
        }
    }

    fn __repr__(&self) -> String {
        format!("GameEvent({:?})", self.0)
    }
}

pub(crate) fn status_name(status: CardStatus) -> &'static str {
    match status {
        CardStatus::Hidden => "hidden",
        CardStatus::Revealed => "revealed",
        CardStatus::Matched => "matched",
    }
}

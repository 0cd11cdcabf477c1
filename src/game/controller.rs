//! The game controller.
//!
//! Owns the deck, counters, RNG and timer queue, and applies the rules:
//!
//! - A hidden card may be flipped while no pair is resolving.
//! - The second revealed card locks the board and evaluates the pair.
//! - A match is recorded at once; a mismatch flips back after
//!   `resolution_delay`. Either way the board unlocks after that delay.
//! - Clearing the board schedules a reshuffle after `resolution_delay`.

use std::time::Duration;

use im::Vector;
use tracing::{debug, trace};

use crate::core::{
    Card, CardId, CardStatus, Deck, GameConfig, GameRng, GameState, GameStats, Symbol,
};
use crate::error::{GameError, Result};
use crate::events::{Announcement, Announcer, GameEvent};
use crate::schedule::{Scheduler, Task};
use crate::surface::CardSurface;

/// Single-threaded memory game engine.
///
/// All effects are queued as `GameEvent`s; call `drain_events` after each
/// input or clock advance and apply them to the screen.
#[derive(Debug)]
pub struct GameController {
    config: GameConfig,
    deck: Deck,
    state: GameState,
    rng: GameRng,
    scheduler: Scheduler,
    announcer: Announcer,
    events: Vec<GameEvent>,
    /// Clicks before this logical time are ignored (touch already handled).
    pub(super) touch_guard_until: Option<u64>,
}

impl GameController {
    /// Create a controller from card symbols in display order.
    pub fn new<I, S>(config: GameConfig, symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let deck = Deck::from_symbols(symbols)?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        debug!(
            cards = deck.len(),
            pairs = deck.pair_count(),
            seed = rng.seed(),
            "memory game initialized"
        );

        Ok(Self {
            config,
            deck,
            state: GameState::new(),
            rng,
            scheduler: Scheduler::new(),
            announcer: Announcer::new(),
            events: Vec::new(),
            touch_guard_until: None,
        })
    }

    /// Create a controller from the card container on a surface.
    ///
    /// Fails with `ContainerNotFound` if the surface has no container for
    /// `config.card_selector`, and `NoCards` if the container is empty.
    pub fn mount(config: GameConfig, surface: &impl CardSurface) -> Result<Self> {
        let symbols = surface
            .card_symbols(&config.card_selector)
            .ok_or_else(|| GameError::ContainerNotFound {
                selector: config.card_selector.clone(),
            })?;

        Self::new(config, symbols)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id)
    }

    /// O(1) copy of every card, for diffing or rendering.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Card> {
        self.deck.snapshot()
    }

    /// Current logical time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    /// Number of delayed transitions still pending.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending_count()
    }

    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats {
            moves: self.state.moves,
            matches: self.state.matches,
            total_pairs: self.deck.pair_count(),
            is_complete: self.deck.all_matched(),
        }
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Rules ===

    /// Check if `card` may be flipped now.
    ///
    /// True when the card exists, is neither revealed nor matched, and no
    /// pair is resolving.
    #[must_use]
    pub fn can_flip(&self, card: CardId) -> bool {
        !self.state.processing && self.deck.get(card).is_some_and(Card::is_hidden)
    }

    /// Flip a card face up.
    ///
    /// Returns false and changes nothing if `can_flip` is false.
    pub fn flip(&mut self, card: CardId) -> bool {
        if !self.can_flip(card) {
            trace!(%card, processing = self.state.processing, "flip rejected");
            return false;
        }

        self.set_status(card, CardStatus::Revealed);
        self.state.record_move();
        self.emit_counters();
        debug!(%card, moves = self.state.moves, "card flipped");

        let revealed = self.deck.revealed();
        if let &[first, second] = revealed.as_slice() {
            self.lock_input();
            self.evaluate(first, second);
        }

        true
    }

    /// Explicit restart requested by the player.
    ///
    /// Runs the reshuffle immediately, whether or not the board is cleared.
    pub fn reset(&mut self) {
        debug!("reset requested");
        self.reshuffle();
    }

    /// Advance the logical clock, firing every transition that falls due.
    ///
    /// Transitions scheduled by fired tasks also fire if they fall due
    /// within the same window.
    pub fn advance(&mut self, elapsed: Duration) {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let deadline = self.scheduler.now().saturating_add(elapsed_ms);

        while let Some(task) = self.scheduler.pop_due(deadline) {
            self.run_task(task);
        }
        self.scheduler.settle(deadline);
    }

    /// Advance the clock until no transitions remain.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.scheduler.next_due() {
            let wait = due.saturating_sub(self.scheduler.now());
            self.advance(Duration::from_millis(wait));
        }
    }

    fn evaluate(&mut self, first: CardId, second: CardId) {
        let matched = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => false,
        };

        self.scheduler.schedule(
            self.config.resolution_delay(),
            Task::ResolvePair {
                first,
                second,
                matched,
            },
        );

        if matched {
            self.set_status(first, CardStatus::Matched);
            self.set_status(second, CardStatus::Matched);
            self.state.record_match();
            self.emit_counters();
            debug!(%first, %second, matches = self.state.matches, "pair matched");

            let announcement = self.announcer.match_found(self.state.matches);
            self.announce(announcement);
            self.check_complete();
        } else {
            debug!(%first, %second, "pair mismatched");
            let announcement = self.announcer.no_match();
            self.announce(announcement);
        }
    }

    fn check_complete(&mut self) {
        if !self.deck.all_matched() {
            return;
        }

        let moves = self.state.moves;
        debug!(moves, "all cards matched");
        self.events.push(GameEvent::GameComplete { moves });

        let announcement = self.announcer.all_matched(moves);
        self.announce(announcement);
        self.scheduler
            .schedule(self.config.resolution_delay(), Task::Reshuffle);
    }

    /// Assign new positions, hide every card and zero the counters.
    ///
    /// Emits a status change for every card so labels follow the new
    /// positions. `CardMoved` events follow after the shuffle delay.
    fn reshuffle(&mut self) {
        let positions = self.rng.positions(self.deck.card_count(), self.config.placement);
        let ids: Vec<CardId> = self.deck.ids().collect();

        for (id, position) in ids.into_iter().zip(positions) {
            self.deck.set_position(id, position);
            self.set_status(id, CardStatus::Hidden);
        }

        self.state.reset_counters();
        self.emit_counters();
        debug!(placement = ?self.config.placement, "cards reshuffled");

        self.scheduler
            .schedule(self.config.shuffle_delay(), Task::PlaceCards);
        let announcement = self.announcer.shuffled();
        self.announce(announcement);
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::ResolvePair {
                first,
                second,
                matched,
            } => {
                if !matched {
                    for card in [first, second] {
                        if self.deck.get(card).is_some_and(Card::is_revealed) {
                            self.set_status(card, CardStatus::Hidden);
                        }
                    }
                }
                self.unlock_input();
            }
            Task::Reshuffle => {
                // A player reset may have restarted the board since this was queued
                if self.deck.all_matched() {
                    self.reshuffle();
                } else {
                    trace!("automatic reshuffle skipped, board not cleared");
                }
            }
            Task::PlaceCards => {
                let moves: Vec<GameEvent> = self
                    .deck
                    .iter()
                    .map(|card| GameEvent::CardMoved {
                        card: card.id,
                        position: card.position,
                    })
                    .collect();
                self.events.extend(moves);
            }
            Task::ExpireAnnouncement(id) => {
                self.events.push(GameEvent::AnnouncementExpired { id });
            }
        }
    }

    // === Effects ===

    fn set_status(&mut self, card: CardId, status: CardStatus) {
        if self.deck.set_status(card, status).is_none() {
            return;
        }
        if let Some(updated) = self.deck.get(card) {
            self.events.push(GameEvent::CardStatusChanged {
                card,
                status,
                label: updated.label(),
            });
        }
    }

    fn emit_counters(&mut self) {
        self.events.push(GameEvent::CountersChanged {
            moves: self.state.moves,
            matches: self.state.matches,
        });
    }

    fn lock_input(&mut self) {
        self.state.processing = true;
        self.events.push(GameEvent::InputLocked);
    }

    fn unlock_input(&mut self) {
        self.state.processing = false;
        self.events.push(GameEvent::InputUnlocked);
    }

    fn announce(&mut self, announcement: Announcement) {
        self.scheduler.schedule(
            self.config.announcement_ttl(),
            Task::ExpireAnnouncement(announcement.id),
        );
        self.events.push(GameEvent::Announce(announcement));
    }
}

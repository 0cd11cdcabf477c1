//! Game bindings for Python.

use std::time::Duration;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CardId, GameConfig, PlacementMode};
use crate::game::GameController;

use super::py_core::{status_name, PyGameEvent, PyGameStats};

/// Python wrapper for GameController.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    controller: GameController,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - symbols: Card symbols in display order (each exactly twice)
    /// - seed: RNG seed for reproducible reshuffles
    /// - resolution_delay_ms: Delay before a pair resolves
    /// - shuffle_delay_ms: Delay before reshuffled cards move
    /// - independent_slots: Use independent position draws on reshuffle
    #[new]
    #[pyo3(signature = (
        symbols,
        seed = None,
        resolution_delay_ms = 1000,
        shuffle_delay_ms = 400,
        independent_slots = false
    ))]
    fn new(
        symbols: Vec<String>,
        seed: Option<u64>,
        resolution_delay_ms: u64,
        shuffle_delay_ms: u64,
        independent_slots: bool,
    ) -> PyResult<Self> {
        let mut config = GameConfig::new()
            .with_resolution_delay(Duration::from_millis(resolution_delay_ms))
            .with_shuffle_delay(Duration::from_millis(shuffle_delay_ms));
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        if independent_slots {
            config = config.with_placement(PlacementMode::IndependentSlots);
        }

        let controller =
            GameController::new(config, symbols).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { controller })
    }

    fn can_flip(&self, card: u32) -> bool {
        self.controller.can_flip(CardId::new(card))
    }

    /// Flip a card. Returns False if the flip was rejected.
    fn flip(&mut self, card: u32) -> bool {
        self.controller.flip(CardId::new(card))
    }

    /// Start a new game immediately.
    fn reset(&mut self) {
        self.controller.reset();
    }

    /// Advance the logical clock by `ms` milliseconds.
    fn advance(&mut self, ms: u64) {
        self.controller.advance(Duration::from_millis(ms));
    }

    fn run_until_idle(&mut self) {
        self.controller.run_until_idle();
    }

    fn stats(&self) -> PyGameStats {
        PyGameStats(self.controller.stats())
    }

    /// Card statuses in deck order ("hidden", "revealed", "matched").
    fn statuses(&self) -> Vec<&'static str> {
        self.controller
            .deck()
            .iter()
            .map(|card| status_name(card.status))
            .collect()
    }

    /// Card display positions in deck order.
    fn positions(&self) -> Vec<u32> {
        self.controller.deck().iter().map(|card| card.position).collect()
    }

    #[getter]
    fn processing(&self) -> bool {
        self.controller.state().processing
    }

    #[getter]
    fn now(&self) -> u64 {
        self.controller.now()
    }

    fn drain_events(&mut self) -> Vec<PyGameEvent> {
        self.controller
            .drain_events()
            .into_iter()
            .map(PyGameEvent)
            .collect()
    }

    fn __repr__(&self) -> String {
        let stats = self.controller.stats();
        format!(
            "MemoryGame(cards={}, moves={}, matches={})",
            self.controller.deck().len(),
            stats.moves,
            stats.matches
        )
    }
}

//! Python bindings for the memory-match engine.
//!
//! Lets scripts drive a game headlessly: flip cards, advance the clock and
//! inspect the events a front end would receive.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MemoryGame(["cat", "dog", "cat", "dog"], seed=42)
//! game.flip(0)
//! game.flip(2)
//! assert game.stats().matches == 1
//!
//! game.advance(1000)
//! for event in game.drain_events():
//!     print(event.kind, event.card)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// memory_match: a memory-matching card game engine.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameStats>()?;
    m.add_class::<PyGameEvent>()?;
    m.add_class::<PyMemoryGame>()?;

    Ok(())
}

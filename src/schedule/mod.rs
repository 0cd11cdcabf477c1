//! Delayed transitions on a logical clock.
//!
//! The engine is single-threaded: every transition runs in response to an
//! input or to time passing. Work that happens "later" (a mismatched pair
//! flipping back, the post-game reshuffle) is queued here with a due time and
//! fired when the owner advances the clock.
//!
//! ## Ordering
//!
//! Tasks fire in due-time order. Tasks due at the same instant fire in the
//! order they were scheduled.
//!
//! Scheduled tasks cannot be cancelled. A front end driving real timers maps
//! each `advance` to elapsed wall time.

mod queue;

pub use queue::{Scheduler, Task, TimerId};

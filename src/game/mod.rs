//! The memory game: controller and input routing.
//!
//! `GameController` holds all state and applies the rules. `input` adds the
//! pointer/keyboard handling a front end needs on top of `flip`.

mod controller;
mod input;

pub use controller::GameController;
pub use input::{InputEvent, InputResponse, Key};

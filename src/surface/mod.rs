//! Where cards come from.
//!
//! The presentation layer owns the card elements and the symbols painted on
//! them. At startup the controller asks a `CardSurface` for the container
//! matching `GameConfig::card_selector` and reads the symbols of its cards in
//! display order.

use rustc_hash::FxHashMap;

use crate::core::Symbol;

/// Presentation-side source of card elements.
pub trait CardSurface {
    /// Symbols of the cards inside the container matching `selector`.
    ///
    /// Returns `None` if no such container exists. An existing container
    /// with no cards returns an empty vec.
    fn card_symbols(&self, selector: &str) -> Option<Vec<Symbol>>;
}

/// In-memory surface: named containers with fixed symbol lists.
///
/// Used by tests and headless front ends.
#[derive(Clone, Debug, Default)]
pub struct StaticSurface {
    containers: FxHashMap<String, Vec<Symbol>>,
}

impl StaticSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container with the given card symbols.
    #[must_use]
    pub fn with_container<I, S>(mut self, selector: impl Into<String>, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.containers
            .insert(selector.into(), symbols.into_iter().map(Into::into).collect());
        self
    }
}

impl CardSurface for StaticSurface {
    fn card_symbols(&self, selector: &str) -> Option<Vec<Symbol>> {
        self.containers.get(selector).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_surface_lookup() {
        let surface = StaticSurface::new().with_container(".js-cards", ["cat", "cat"]);

        assert_eq!(
            surface.card_symbols(".js-cards"),
            Some(vec![Symbol::from("cat"), Symbol::from("cat")])
        );
        assert_eq!(surface.card_symbols("#missing"), None);
    }

    #[test]
    fn test_empty_container_is_present() {
        let empty: [&str; 0] = [];
        let surface = StaticSurface::new().with_container(".js-cards", empty);

        assert_eq!(surface.card_symbols(".js-cards"), Some(vec![]));
    }
}

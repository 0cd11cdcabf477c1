//! Property-based tests for the flip/resolve rules.

use std::time::Duration;

use proptest::prelude::*;

use memory_match::{CardId, CardStatus, GameConfig, GameController, GameState, Symbol};

/// One step a player or the clock can take.
#[derive(Clone, Debug)]
enum Step {
    Flip(u32),
    Advance(u64),
    Reset,
}

/// Strategy: a paired deck of 1-8 pairs in random order.
fn deck_strategy() -> impl Strategy<Value = Vec<String>> {
    (1..=8usize)
        .prop_flat_map(|pairs| {
            let symbols: Vec<String> = (0..pairs)
                .flat_map(|i| [format!("s{i}"), format!("s{i}")])
                .collect();
            Just(symbols).prop_shuffle()
        })
}

/// Strategy: steps over a deck of up to 16 cards.
fn steps_strategy() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        prop_oneof![
            6 => (0..16u32).prop_map(Step::Flip),
            3 => (0..1500u64).prop_map(Step::Advance),
            1 => Just(Step::Reset),
        ],
        0..80,
    )
}

fn new_game(symbols: &[String], seed: u64) -> GameController {
    GameController::new(GameConfig::new().with_seed(seed), symbols.iter().cloned()).unwrap()
}

fn revealed_count(game: &GameController) -> usize {
    game.deck().iter().filter(|c| c.is_revealed()).count()
}

fn apply(game: &mut GameController, step: &Step) {
    match step {
        Step::Flip(card) => {
            game.flip(CardId::new(*card));
        }
        Step::Advance(ms) => game.advance(Duration::from_millis(*ms)),
        Step::Reset => game.reset(),
    }
}

proptest! {
    // 1. Never more than two cards face up
    #[test]
    fn at_most_two_revealed(symbols in deck_strategy(), steps in steps_strategy(), seed in any::<u64>()) {
        let mut game = new_game(&symbols, seed);
        for step in &steps {
            apply(&mut game, step);
            prop_assert!(revealed_count(&game) <= 2);
        }
    }

    // 2. Rejected flips leave the state untouched
    #[test]
    fn rejected_flip_is_noop(symbols in deck_strategy(), steps in steps_strategy(), target in 0..16u32) {
        let mut game = new_game(&symbols, 1);
        for step in &steps {
            apply(&mut game, step);
        }
        game.drain_events();

        let card = CardId::new(target);
        if !game.can_flip(card) {
            let before_cards = game.snapshot();
            let before_state: GameState = *game.state();

            prop_assert!(!game.flip(card));
            prop_assert_eq!(game.snapshot(), before_cards);
            prop_assert_eq!(*game.state(), before_state);
            prop_assert!(game.drain_events().is_empty());
        }
    }

    // 3. Flipping a card's partner right after it always matches
    #[test]
    fn equal_pair_matches(symbols in deck_strategy(), seed in any::<u64>()) {
        let mut game = new_game(&symbols, seed);
        let first = 0usize;
        let partner = symbols
            .iter()
            .enumerate()
            .position(|(i, s)| i != first && *s == symbols[first])
            .unwrap();

        let matches_before = game.state().matches;
        prop_assert!(game.flip(CardId::new(first as u32)));
        prop_assert!(game.flip(CardId::new(partner as u32)));

        prop_assert_eq!(game.card(CardId::new(first as u32)).unwrap().status, CardStatus::Matched);
        prop_assert_eq!(game.card(CardId::new(partner as u32)).unwrap().status, CardStatus::Matched);
        prop_assert_eq!(game.state().matches, matches_before + 1);
    }

    // 4. A differing pair flips back after the delay with two moves counted
    #[test]
    fn differing_pair_reverts(symbols in deck_strategy()) {
        let first = Symbol::new(symbols[0].clone());
        let other = symbols.iter().position(|s| Symbol::new(s.clone()) != first);
        prop_assume!(other.is_some());
        let other = other.unwrap() as u32;

        let mut game = new_game(&symbols, 5);
        game.flip(CardId::new(0));
        game.flip(CardId::new(other));
        game.advance(Duration::from_millis(1000));

        prop_assert_eq!(game.card(CardId::new(0)).unwrap().status, CardStatus::Hidden);
        prop_assert_eq!(game.card(CardId::new(other)).unwrap().status, CardStatus::Hidden);
        prop_assert_eq!(game.state().moves, 2);
        prop_assert_eq!(game.state().matches, 0);
    }

    // 5. Clearing the board reshuffles after the delay
    #[test]
    fn cleared_board_reshuffles(symbols in deck_strategy(), seed in any::<u64>()) {
        let mut game = new_game(&symbols, seed);

        let mut remaining: Vec<usize> = (0..symbols.len()).collect();
        while let Some(first) = remaining.pop() {
            let idx = remaining.iter().position(|&j| symbols[j] == symbols[first]).unwrap();
            let second = remaining.remove(idx);
            game.flip(CardId::new(first as u32));
            game.flip(CardId::new(second as u32));
            if !remaining.is_empty() {
                game.advance(Duration::from_millis(1000));
            }
        }

        prop_assert!(game.stats().is_complete);
        prop_assert_eq!(game.state().moves as usize, symbols.len());

        game.advance(Duration::from_millis(1000));

        prop_assert_eq!(game.state().moves, 0);
        prop_assert_eq!(game.state().matches, 0);
        prop_assert!(game.deck().iter().all(|c| c.status == CardStatus::Hidden));
    }

    // 6. Moves only ever count accepted flips
    #[test]
    fn moves_track_accepted_flips(symbols in deck_strategy(), steps in steps_strategy()) {
        let mut game = new_game(&symbols, 11);
        let mut expected = 0u32;
        for step in &steps {
            match step {
                Step::Flip(card) => {
                    if game.flip(CardId::new(*card)) {
                        expected += 1;
                    }
                }
                Step::Reset => {
                    game.reset();
                    expected = 0;
                }
                Step::Advance(ms) => {
                    let before = game.state().moves;
                    game.advance(Duration::from_millis(*ms));
                    if game.state().moves == 0 && before != 0 {
                        // Automatic reshuffle fired
                        expected = 0;
                    }
                }
            }
            prop_assert_eq!(game.state().moves, expected);
        }
    }
}

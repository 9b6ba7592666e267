//! Deterministic fixtures for tests.
//!
//! - Deck builders with known pair positions for [`MemoryGame::from_deck`]
//! - Small stories with chosen correct answers
//! - A session over an in-memory store
//!
//! [`MemoryGame::from_deck`]: crate::memory::MemoryGame::from_deck

use crate::config::AppConfig;
use crate::memory::{MemoryGame, Symbol};
use crate::persist::InMemoryStore;
use crate::session::AppSession;
use crate::story::{LocalizedText, Question, Story};

fn card(i: usize) -> Symbol {
    Symbol::new(format!("/card-{i}.svg"))
}

/// `n` pairs laid out as `A A B B C C ...`: tiles `2k` and `2k + 1` match.
pub fn paired_deck(n: usize) -> Vec<Symbol> {
    (0..n).flat_map(|i| [card(i), card(i)]).collect()
}

/// `n` pairs laid out as `A B C ... A B C ...`: tile `k` matches tile `k + n`.
///
/// With two or more pairs, tiles 0 and 1 never match.
pub fn alternating_deck(n: usize) -> Vec<Symbol> {
    (0..n).chain(0..n).map(card).collect()
}

/// Index of the tile holding the same symbol as `index`.
pub fn partner_of(game: &MemoryGame, index: usize) -> Option<usize> {
    let symbol = &game.tile(index)?.symbol;
    game.tiles()
        .iter()
        .position(|t| t.id != index && &t.symbol == symbol)
}

/// A story with one three-option question per entry of `correct`.
pub fn quiz_story(id: &str, correct: &[usize]) -> Story {
    let questions = correct
        .iter()
        .enumerate()
        .map(|(i, &correct_option)| Question {
            prompt: LocalizedText::new(format!("Frage {}?", i + 1), format!("سؤال {}؟", i + 1)),
            options: vec![
                LocalizedText::new("A", "أ"),
                LocalizedText::new("B", "ب"),
                LocalizedText::new("C", "ج"),
            ],
            correct_option,
        })
        .collect();

    Story {
        id: id.to_string(),
        title: LocalizedText::new(format!("Geschichte {id}"), format!("قصة {id}")),
        paragraphs: vec![LocalizedText::new("Es war einmal.", "كان يا ما كان.")],
        questions,
        illustration: None,
    }
}

/// A seeded session without disk access.
pub fn test_session() -> AppSession {
    AppSession::with_store(
        AppConfig::new().with_seed(7),
        Box::new(InMemoryStore::new()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryConfig;

    #[test]
    fn test_decks_are_valid_pairings() {
        for n in 1..=8 {
            assert!(MemoryGame::from_deck(MemoryConfig::default(), paired_deck(n)).is_ok());
            assert!(MemoryGame::from_deck(MemoryConfig::default(), alternating_deck(n)).is_ok());
        }
    }

    #[test]
    fn test_partner_of() {
        let game = MemoryGame::from_deck(MemoryConfig::default(), alternating_deck(8)).unwrap();
        assert_eq!(partner_of(&game, 0), Some(8));
        assert_eq!(partner_of(&game, 15), Some(7));
        assert_eq!(partner_of(&game, 16), None);
    }
}

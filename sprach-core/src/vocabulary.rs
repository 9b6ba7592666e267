//! Picture vocabulary browser.

use crate::locale::Locale;
use crate::memory::Symbol;
use crate::story::LocalizedText;
use serde::{Deserialize, Serialize};

/// One picture and the word it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub symbol: Symbol,
    pub word: LocalizedText,
    /// A short sentence using the word.
    #[serde(default)]
    pub example: Option<LocalizedText>,
}

impl VocabularyEntry {
    pub fn new(symbol: impl Into<Symbol>, word: LocalizedText) -> Self {
        Self {
            symbol: symbol.into(),
            word,
            example: None,
        }
    }

    pub fn with_example(mut self, example: LocalizedText) -> Self {
        self.example = Some(example);
        self
    }
}

/// A browsable deck of vocabulary entries with a cursor.
#[derive(Debug, Clone)]
pub struct VocabularyDeck {
    entries: Vec<VocabularyEntry>,
    current: usize,
}

impl Default for VocabularyDeck {
    fn default() -> Self {
        Self::new(default_entries())
    }
}

impl VocabularyDeck {
    pub fn new(entries: Vec<VocabularyEntry>) -> Self {
        Self {
            entries,
            current: 0,
        }
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&VocabularyEntry> {
        self.entries.get(self.current)
    }

    /// The current word in `locale`.
    pub fn word(&self, locale: Locale) -> Option<&str> {
        self.current().map(|e| e.word.get(locale))
    }

    /// Jump to an entry. Out-of-range indices leave the cursor unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Advance, wrapping to the first entry.
    pub fn next(&mut self) {
        if !self.entries.is_empty() {
            self.current = (self.current + 1) % self.entries.len();
        }
    }

    /// Step back, wrapping to the last entry.
    pub fn previous(&mut self) {
        if !self.entries.is_empty() {
            self.current = (self.current + self.entries.len() - 1) % self.entries.len();
        }
    }
}

fn entry(symbol: &str, de: &str, ar: &str, example_de: &str, example_ar: &str) -> VocabularyEntry {
    VocabularyEntry::new(symbol, LocalizedText::new(de, ar))
        .with_example(LocalizedText::new(example_de, example_ar))
}

/// The fruit and vegetable pictures of the memory deck.
pub fn default_entries() -> Vec<VocabularyEntry> {
    vec![
        entry("/Ananas.svg", "die Ananas", "أناناس", "Die Ananas ist süß.", "الأناناس حلو."),
        entry(
            "/Aubergine.svg",
            "die Aubergine",
            "باذنجان",
            "Die Aubergine ist lila.",
            "الباذنجان بنفسجي.",
        ),
        entry("/Banane.svg", "die Banane", "موز", "Die Banane ist gelb.", "الموز أصفر."),
        entry("/Apfel.svg", "der Apfel", "تفاح", "Der Apfel ist rot.", "التفاحة حمراء."),
        entry("/Gurke.svg", "die Gurke", "خيار", "Die Gurke ist grün.", "الخيار أخضر."),
        entry(
            "/Orange.svg",
            "die Orange",
            "برتقال",
            "Ich trinke Orangensaft.",
            "أشرب عصير البرتقال.",
        ),
        entry(
            "/Zitrone.svg",
            "die Zitrone",
            "ليمون",
            "Die Zitrone ist sauer.",
            "الليمون حامض.",
        ),
        entry("/Tomate.svg", "die Tomate", "طماطم", "Die Tomate ist rund.", "الطماطم مستديرة."),
    ]
}

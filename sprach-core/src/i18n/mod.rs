//! Translation lookup.
//!
//! Lookup is a pure function of `(locale, section, key)` with a defined
//! fallback chain:
//!
//! 1. the catalog entry for the locale,
//! 2. the static default table (home menu labels),
//! 3. the key itself.
//!
//! State machines never read a global locale. They are handed a
//! [`Translator`] (usually a [`LocalizedTranslator`]) by their host.

mod catalog;

pub use catalog::{Catalog, CatalogError};

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A group of translation keys, one per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Navbar,
    Login,
    About,
    Stories,
    Memory,
    Pictures,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Navbar,
        Section::Login,
        Section::About,
        Section::Stories,
        Section::Memory,
        Section::Pictures,
    ];

    /// Name used in the JSON tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Navbar => "navbar",
            Section::Login => "login",
            Section::About => "about",
            Section::Stories => "stories",
            Section::Memory => "memory",
            Section::Pictures => "pictures",
        }
    }

    pub fn from_name(name: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

/// Static defaults used when the catalog has no entry.
fn default_text(locale: Locale, section: Section, key: &str) -> Option<&'static str> {
    let text = match (section, key, locale) {
        (Section::Home, "memory", Locale::De) => "Memory Spiel",
        (Section::Home, "memory", Locale::Ar) => "لعبة الذاكرة",
        (Section::Home, "bilder", Locale::De) => "Bilder Erklärung",
        (Section::Home, "bilder", Locale::Ar) => "شرح الصور",
        (Section::Home, "stories", Locale::De) => "Geschichten",
        (Section::Home, "stories", Locale::Ar) => "القصص",
        _ => return None,
    };
    Some(text)
}

/// Look up `key` with the full fallback chain. Never fails.
pub fn translate<'a>(catalog: &'a Catalog, locale: Locale, section: Section, key: &'a str) -> &'a str {
    catalog
        .lookup(locale, section, key)
        .or_else(|| default_text(locale, section, key))
        .unwrap_or_else(|| {
            tracing::trace!(%locale, section = section.as_str(), key, "missing translation");
            key
        })
}

/// The translation capability handed to components.
pub trait Translator {
    /// Language the translator produces.
    fn locale(&self) -> Locale;

    /// Translated text for `key`, falling back as described in the module docs.
    fn translate(&self, section: Section, key: &str) -> String;
}

/// A [`Translator`] pairing a locale with a shared catalog.
#[derive(Debug, Clone)]
pub struct LocalizedTranslator {
    locale: Locale,
    catalog: Arc<Catalog>,
}

impl LocalizedTranslator {
    pub fn new(locale: Locale, catalog: Arc<Catalog>) -> Self {
        Self { locale, catalog }
    }

    /// A translator over the built-in catalog.
    pub fn builtin(locale: Locale) -> Self {
        Self::new(locale, Catalog::builtin())
    }

    /// Same catalog, different language.
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            catalog: Arc::clone(&self.catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Translator for LocalizedTranslator {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn translate(&self, section: Section, key: &str) -> String {
        translate(&self.catalog, self.locale, section, key).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_wins() {
        let mut catalog = Catalog::new();
        catalog.insert(Locale::De, Section::Home, "memory", "Gedächtnisspiel");
        assert_eq!(
            translate(&catalog, Locale::De, Section::Home, "memory"),
            "Gedächtnisspiel"
        );
    }

    #[test]
    fn test_home_defaults_used_when_missing() {
        let catalog = Catalog::new();
        assert_eq!(
            translate(&catalog, Locale::Ar, Section::Home, "bilder"),
            "شرح الصور"
        );
        assert_eq!(
            translate(&catalog, Locale::De, Section::Home, "stories"),
            "Geschichten"
        );
    }

    #[test]
    fn test_missing_key_returns_key() {
        let catalog = Catalog::new();
        assert_eq!(
            translate(&catalog, Locale::De, Section::Memory, "noSuchKey"),
            "noSuchKey"
        );
        // Defaults are section-specific.
        assert_eq!(
            translate(&catalog, Locale::De, Section::Memory, "memory"),
            "memory"
        );
    }

    #[test]
    fn test_translator_switches_locale() {
        let de = LocalizedTranslator::builtin(Locale::De);
        let ar = de.with_locale(Locale::Ar);
        assert_eq!(de.translate(Section::Stories, "next"), "Weiter");
        assert_eq!(ar.translate(Section::Stories, "next"), "التالي");
        assert_eq!(ar.locale(), Locale::Ar);
    }

    #[test]
    fn test_section_names_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_name(section.as_str()), Some(section));
        }
        assert_eq!(Section::from_name("unknown"), None);
    }
}

//! Translation tables.
//!
//! A [`Catalog`] maps `locale -> section -> key -> text`. The built-in catalog
//! is embedded from `locales/*.json` at compile time; hosts may build their
//! own from JSON with [`Catalog::load_json`].

use crate::i18n::Section;
use crate::locale::Locale;
use lazy_static::lazy_static;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use thiserror::Error;

/// Errors from catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON error in {locale} table: {source}")]
    Json {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown section '{section}' in {locale} table")]
    UnknownSection { locale: Locale, section: String },
}

type SectionTable = HashMap<String, String>;

const BUILTIN_DE: &str = include_str!("../../locales/de.json");
const BUILTIN_AR: &str = include_str!("../../locales/ar.json");

lazy_static! {
    static ref BUILTIN: Arc<Catalog> = Arc::new(Catalog::load_builtin().unwrap_or_else(|e| {
        tracing::error!(error = %e, "built-in translation catalog is invalid, using an empty one");
        Catalog::new()
    }));
}

/// Nested translation tables for every locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<(Locale, Section), SectionTable>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    fn load_builtin() -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.load_json(Locale::De, BUILTIN_DE)?;
        catalog.load_json(Locale::Ar, BUILTIN_AR)?;
        Ok(catalog)
    }

    /// Merge a JSON table of the form `{ "section": { "key": "text" } }`.
    ///
    /// Existing entries are overwritten. Unknown section names are rejected.
    pub fn load_json(&mut self, locale: Locale, json: &str) -> Result<(), CatalogError> {
        let parsed: HashMap<String, SectionTable> =
            serde_json::from_str(json).map_err(|source| CatalogError::Json { locale, source })?;

        for (name, entries) in parsed {
            let section =
                Section::from_name(&name).ok_or_else(|| CatalogError::UnknownSection {
                    locale,
                    section: name.clone(),
                })?;
            self.tables
                .entry((locale, section))
                .or_default()
                .extend(entries);
        }
        Ok(())
    }

    /// Add or replace a single entry.
    pub fn insert(
        &mut self,
        locale: Locale,
        section: Section,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.tables
            .entry((locale, section))
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Exact lookup without any fallback.
    pub fn lookup(&self, locale: Locale, section: Section, key: &str) -> Option<&str> {
        self.tables
            .get(&(locale, section))
            .and_then(|t| t.get(key))
            .map(String::as_str)
    }

    /// Number of entries for a locale.
    pub fn len(&self, locale: Locale) -> usize {
        self.tables
            .iter()
            .filter(|((l, _), _)| *l == locale)
            .map(|(_, t)| t.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(|t| t.is_empty())
    }

    /// Keys present for `reference` but missing for `other`, as `section.key`.
    pub fn missing_keys(&self, reference: Locale, other: Locale) -> Vec<String> {
        let mut missing = BTreeSet::new();
        for ((locale, section), table) in &self.tables {
            if *locale != reference {
                continue;
            }
            for key in table.keys() {
                if self.lookup(other, *section, key).is_none() {
                    missing.insert(format!("{}.{}", section.as_str(), key));
                }
            }
        }
        missing.into_iter().collect()
    }
}

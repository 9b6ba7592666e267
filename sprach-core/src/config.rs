//! Application configuration.

use crate::locale::{Locale, LocaleError};
use crate::memory::{MemoryConfig, DEFAULT_COUNTDOWN_SECS};
use crate::story::pager::DEFAULT_TRANSITION;
use crate::story::quiz::DEFAULT_FEEDBACK_DELAY;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors from reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Locale {
        var: &'static str,
        #[source]
        source: LocaleError,
    },

    #[error("{var} must be a positive whole number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

/// Configuration for an [`AppSession`](crate::session::AppSession).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Language shown at startup.
    pub locale: Locale,

    /// Where scores are stored. `None` keeps them in memory only.
    pub data_dir: Option<PathBuf>,

    /// Memory game time budget in seconds.
    pub countdown_secs: u32,

    /// How long a flipped pair stays visible.
    pub resolve_delay: Duration,

    /// How long quiz feedback is shown.
    pub feedback_delay: Duration,

    /// Duration of the A1 page slide.
    pub transition: Duration,

    /// Default `tracing` filter; `RUST_LOG` still wins.
    pub log_filter: String,

    /// Fixed shuffle seed, for reproducible boards.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            data_dir: None,
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            resolve_delay: Duration::from_secs(1),
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            transition: DEFAULT_TRANSITION,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the startup language.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Persist scores in this directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_countdown_secs(mut self, secs: u32) -> Self {
        self.countdown_secs = secs;
        self
    }

    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay = delay;
        self
    }

    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    pub fn with_transition(mut self, duration: Duration) -> Self {
        self.transition = duration;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Memory game settings derived from this configuration.
    pub fn memory_config(&self) -> MemoryConfig {
        MemoryConfig::default()
            .with_countdown_secs(self.countdown_secs)
            .with_resolve_delay(self.resolve_delay)
    }

    /// Read configuration from the environment.
    ///
    /// - `SPRACH_LOCALE`: `de` or `ar`
    /// - `SPRACH_DATA_DIR`: score directory
    /// - `SPRACH_COUNTDOWN_SECS`: memory game budget
    /// - `SPRACH_LOG`: default log filter
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(tag) = lookup("SPRACH_LOCALE") {
            config.locale = tag.parse().map_err(|source| ConfigError::Locale {
                var: "SPRACH_LOCALE",
                source,
            })?;
        }

        if let Some(dir) = lookup("SPRACH_DATA_DIR").filter(|d| !d.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(value) = lookup("SPRACH_COUNTDOWN_SECS") {
            config.countdown_secs = value
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidNumber {
                    var: "SPRACH_COUNTDOWN_SECS",
                    value,
                })?;
        }

        if let Some(filter) = lookup("SPRACH_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.countdown_secs, 60);
        assert_eq!(config.transition, Duration::from_millis(350));
        assert_eq!(config.feedback_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_reads_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SPRACH_LOCALE", "AR"),
            ("SPRACH_DATA_DIR", "/tmp/sprach"),
            ("SPRACH_COUNTDOWN_SECS", "90"),
            ("SPRACH_LOG", "sprach_core=debug"),
        ]))
        .unwrap();
        assert_eq!(config.locale, Locale::Ar);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/sprach")));
        assert_eq!(config.countdown_secs, 90);
        assert_eq!(config.log_filter, "sprach_core=debug");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("SPRACH_LOCALE", "fr")])),
            Err(ConfigError::Locale { var: "SPRACH_LOCALE", .. })
        ));
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("SPRACH_COUNTDOWN_SECS", "0")])),
            Err(ConfigError::InvalidNumber {
                var: "SPRACH_COUNTDOWN_SECS",
                value: "0".to_string()
            })
        );
    }

    #[test]
    fn test_builder_feeds_memory_config() {
        let config = AppConfig::new()
            .with_countdown_secs(30)
            .with_resolve_delay(Duration::from_millis(500));
        let memory = config.memory_config();
        assert_eq!(memory.countdown_secs, 30);
        assert_eq!(memory.resolve_delay, Duration::from_millis(500));
        assert_eq!(memory.symbols.len(), 8);
    }
}

//! Display languages and text direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for locale parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Unknown locale tag: '{0}'")]
    UnknownTag(String),
}

/// The active display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    De,
    Ar,
}

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// The value used for an HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Locale; 2] = [Locale::De, Locale::Ar];

    /// Two-letter tag (`de` / `ar`).
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::Ar => "ar",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::De => Direction::Ltr,
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == Direction::Rtl
    }

    /// The other language.
    pub fn toggle(&self) -> Locale {
        match self {
            Locale::De => Locale::Ar,
            Locale::Ar => Locale::De,
        }
    }

    /// Name of the language in that language, as shown on switch buttons.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::De => "Deutsch",
            Locale::Ar => "العربية",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de" => Ok(Locale::De),
            "ar" => Ok(Locale::Ar),
            _ => Err(LocaleError::UnknownTag(s.to_string())),
        }
    }
}

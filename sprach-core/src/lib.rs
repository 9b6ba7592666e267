//! Core of a German/Arabic language-learning app.
//!
//! This crate provides:
//! - A memory-matching game with a stopwatch, countdown and best time
//! - Story readers with comprehension quizzes (A1 pages and hard-level tests)
//! - Bilingual translation lookup with right-to-left support
//! - Picture vocabulary, a login/registration form and score persistence
//!
//! Every timed behaviour runs on virtual time: state machines own a
//! [`Timeline`](timeline::Timeline) and are advanced explicitly, or in wall-clock
//! time through [`runtime::spawn_clock`].
//!
//! # Quick Start
//!
//! ```ignore
//! use sprach_core::{AppConfig, AppSession, Clocked, Screen};
//! use std::time::Duration;
//!
//! let mut session = AppSession::new(AppConfig::from_env()?);
//! session.navigate(Screen::Memory)?;
//!
//! let game = session.memory_mut().unwrap();
//! game.select_tile(0);
//! game.select_tile(1);
//!
//! session.advance(Duration::from_secs(1))?;
//! ```

pub mod config;
pub mod forms;
pub mod i18n;
pub mod locale;
pub mod logging;
pub mod memory;
pub mod persist;
pub mod runtime;
pub mod session;
pub mod story;
pub mod testing;
pub mod timeline;
pub mod vocabulary;

// Primary public API
pub use config::{AppConfig, ConfigError};
pub use forms::{AuthForm, Field, FormError, FormMode, Submission};
pub use i18n::{Catalog, LocalizedTranslator, Section, Translator};
pub use locale::{Direction, Locale, LocaleError};
pub use logging::init_logging;
pub use memory::{GameStatus, MemoryConfig, MemoryError, MemoryEvent, MemoryGame, Selection};
pub use persist::{BestTimeStore, InMemoryStore, JsonFileStore, PersistError};
pub use runtime::{spawn_clock, ClockHandle};
pub use session::{AppSession, MenuEntry, Screen, ScreenState, SessionError};
pub use story::{Level, LocalizedText, Question, Story, StoryError, StoryPager, StoryQuiz};
pub use timeline::{Clocked, TaskHandle, Timeline};
pub use vocabulary::{VocabularyDeck, VocabularyEntry};

//! AppSession - the primary public API of the learning app.
//!
//! A session owns the configuration, the active language, the score store and
//! the state machine of the screen currently shown. Navigating away drops that
//! state machine together with its timeline, so no timer of a screen that is no
//! longer visible can fire.

use crate::config::AppConfig;
use crate::forms::AuthForm;
use crate::i18n::{LocalizedTranslator, Section, Translator};
use crate::locale::{Direction, Locale};
use crate::memory::{MemoryError, MemoryEvent, MemoryGame};
use crate::persist::{BestTimeStore, InMemoryStore, JsonFileStore, PersistError};
use crate::story::{stories, Level, StoryError, StoryPager, StoryQuiz};
use crate::timeline::Clocked;
use crate::vocabulary::VocabularyDeck;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from AppSession operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Memory game error: {0}")]
    Memory(#[from] MemoryError),

    #[error("Story error: {0}")]
    Story(#[from] StoryError),

    #[error("Persistence error: {0}")]
    Persist(#[from] PersistError),
}

/// The screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Login,
    About,
    Pictures,
    Memory,
    Stories,
    HardStories,
}

impl Screen {
    /// Key of the screen's label in the home section.
    pub fn key(&self) -> &'static str {
        match self {
            Screen::Home => "title",
            Screen::Login => "login",
            Screen::About => "about",
            Screen::Pictures => "bilder",
            Screen::Memory => "memory",
            Screen::Stories => "stories",
            Screen::HardStories => "hardStories",
        }
    }
}

/// Screens reachable from the home menu, in display order.
const MENU: [Screen; 6] = [
    Screen::Memory,
    Screen::Pictures,
    Screen::Stories,
    Screen::HardStories,
    Screen::Login,
    Screen::About,
];

/// A localized home menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub screen: Screen,
    pub label: String,
}

/// State of the active screen.
#[derive(Debug)]
pub enum ScreenState {
    Home,
    Login(AuthForm),
    About,
    Pictures(VocabularyDeck),
    Memory(MemoryGame),
    Stories(StoryPager),
    HardStories(StoryQuiz),
}

impl ScreenState {
    pub fn screen(&self) -> Screen {
        match self {
            ScreenState::Home => Screen::Home,
            ScreenState::Login(_) => Screen::Login,
            ScreenState::About => Screen::About,
            ScreenState::Pictures(_) => Screen::Pictures,
            ScreenState::Memory(_) => Screen::Memory,
            ScreenState::Stories(_) => Screen::Stories,
            ScreenState::HardStories(_) => Screen::HardStories,
        }
    }
}

/// A running app session.
pub struct AppSession {
    config: AppConfig,
    translator: LocalizedTranslator,
    store: Box<dyn BestTimeStore>,
    best_time: Option<u32>,
    state: ScreenState,
}

impl std::fmt::Debug for AppSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSession")
            .field("locale", &self.translator.locale())
            .field("best_time", &self.best_time)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl AppSession {
    /// Create a session. Scores go to the configured data directory, or stay
    /// in memory when there is none.
    pub fn new(config: AppConfig) -> Self {
        let store: Box<dyn BestTimeStore> = match &config.data_dir {
            Some(dir) => Box::new(JsonFileStore::in_dir(dir)),
            None => Box::new(InMemoryStore::new()),
        };
        Self::with_store(config, store)
    }

    /// Create a session over an explicit store.
    ///
    /// An unreadable store is logged and treated as empty.
    pub fn with_store(config: AppConfig, store: Box<dyn BestTimeStore>) -> Self {
        let best_time = match store.load_best_time() {
            Ok(best) => best,
            Err(e) => {
                warn!(error = %e, "could not read best time, starting without one");
                None
            }
        };
        let translator = LocalizedTranslator::builtin(config.locale);
        info!(locale = %config.locale, ?best_time, "session started");

        Self {
            config,
            translator,
            store,
            best_time,
            state: ScreenState::Home,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        self.translator.locale()
    }

    pub fn direction(&self) -> Direction {
        self.locale().direction()
    }

    pub fn translator(&self) -> &LocalizedTranslator {
        &self.translator
    }

    /// Translate a key in the active language.
    pub fn t(&self, section: Section, key: &str) -> String {
        self.translator.translate(section, key)
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ScreenState {
        &mut self.state
    }

    /// Best memory time known to this session.
    pub fn best_time(&self) -> Option<u32> {
        self.best_time
    }

    /// Localized entries of the home menu.
    pub fn home_menu(&self) -> Vec<MenuEntry> {
        MENU.iter()
            .map(|&screen| MenuEntry {
                screen,
                label: self.t(Section::Home, screen.key()),
            })
            .collect()
    }

    pub fn memory(&self) -> Option<&MemoryGame> {
        match &self.state {
            ScreenState::Memory(game) => Some(game),
            _ => None,
        }
    }

    pub fn memory_mut(&mut self) -> Option<&mut MemoryGame> {
        match &mut self.state {
            ScreenState::Memory(game) => Some(game),
            _ => None,
        }
    }

    pub fn pager_mut(&mut self) -> Option<&mut StoryPager> {
        match &mut self.state {
            ScreenState::Stories(pager) => Some(pager),
            _ => None,
        }
    }

    pub fn quiz_mut(&mut self) -> Option<&mut StoryQuiz> {
        match &mut self.state {
            ScreenState::HardStories(quiz) => Some(quiz),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut AuthForm> {
        match &mut self.state {
            ScreenState::Login(form) => Some(form),
            _ => None,
        }
    }

    pub fn vocabulary_mut(&mut self) -> Option<&mut VocabularyDeck> {
        match &mut self.state {
            ScreenState::Pictures(deck) => Some(deck),
            _ => None,
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Switch screens. The previous screen's state and timers are dropped and
    /// the new screen starts fresh, even when it is the same screen.
    pub fn navigate(&mut self, screen: Screen) -> Result<(), SessionError> {
        let state = self.build_state(screen)?;
        debug!(from = ?self.screen(), to = ?screen, "navigate");
        self.state = state;
        Ok(())
    }

    fn build_state(&self, screen: Screen) -> Result<ScreenState, SessionError> {
        let state = match screen {
            Screen::Home => ScreenState::Home,
            Screen::Login => ScreenState::Login(AuthForm::new()),
            Screen::About => ScreenState::About,
            Screen::Pictures => ScreenState::Pictures(VocabularyDeck::default()),
            Screen::Memory => {
                let config = self.config.memory_config();
                let game = match self.config.seed {
                    Some(seed) => MemoryGame::with_seed(config, seed)?,
                    None => MemoryGame::new(config)?,
                };
                ScreenState::Memory(game.with_best_time(self.best_time))
            }
            Screen::Stories => ScreenState::Stories(
                StoryPager::new(stories(Level::A1).to_vec())?
                    .with_transition(self.config.transition),
            ),
            Screen::HardStories => {
                let mut quiz = StoryQuiz::new(stories(Level::Hard).to_vec())?
                    .with_feedback_delay(self.config.feedback_delay);
                quiz.start_reading();
                ScreenState::HardStories(quiz)
            }
        };
        Ok(state)
    }

    /// Switch language. Screen state is untouched.
    pub fn set_locale(&mut self, locale: Locale) {
        if locale != self.locale() {
            self.translator = self.translator.with_locale(locale);
            debug!(%locale, "locale changed");
        }
    }

    pub fn toggle_locale(&mut self) -> Locale {
        let locale = self.locale().toggle();
        self.set_locale(locale);
        locale
    }

    /// Advance the active screen's timers.
    ///
    /// Returns the memory game events produced. A new best time is saved to
    /// the store; if that fails the error is returned, but the best time is
    /// still kept for this session.
    pub fn advance(&mut self, by: Duration) -> Result<Vec<MemoryEvent>, SessionError> {
        let events = match &mut self.state {
            ScreenState::Memory(game) => {
                game.advance(by);
                game.drain_events()
            }
            ScreenState::Stories(pager) => {
                pager.advance(by);
                Vec::new()
            }
            ScreenState::HardStories(quiz) => {
                quiz.advance(by);
                Vec::new()
            }
            ScreenState::Home
            | ScreenState::Login(_)
            | ScreenState::About
            | ScreenState::Pictures(_) => Vec::new(),
        };

        for event in &events {
            if let MemoryEvent::Won {
                seconds,
                new_best: true,
                ..
            } = event
            {
                self.record_best_time(*seconds)?;
            }
        }
        Ok(events)
    }

    fn record_best_time(&mut self, seconds: u32) -> Result<(), SessionError> {
        if self.best_time.is_some_and(|best| seconds >= best) {
            return Ok(());
        }
        self.best_time = Some(seconds);
        if let Err(e) = self.store.save_best_time(seconds) {
            warn!(error = %e, seconds, "could not save best time");
            return Err(e.into());
        }
        info!(seconds, "new best time");
        Ok(())
    }
}

impl Clocked for AppSession {
    fn advance(&mut self, by: Duration) {
        if let Err(e) = AppSession::advance(self, by) {
            warn!(error = %e, "session advance failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::GameStatus;

    fn session() -> AppSession {
        AppSession::with_store(
            AppConfig::new().with_seed(3),
            Box::new(InMemoryStore::new()),
        )
    }

    #[test]
    fn test_starts_at_home() {
        let session = session();
        assert_eq!(session.screen(), Screen::Home);
        assert_eq!(session.locale(), Locale::De);
        assert_eq!(session.best_time(), None);
    }

    #[test]
    fn test_home_menu_is_localized() {
        let mut session = session();
        let menu = session.home_menu();
        assert_eq!(menu.len(), 6);
        assert_eq!(menu[0].screen, Screen::Memory);
        assert_eq!(menu[0].label, "Memory Spiel");

        session.toggle_locale();
        assert_eq!(session.home_menu()[0].label, "لعبة الذاكرة");
        assert_eq!(session.direction(), Direction::Rtl);
    }

    #[test]
    fn test_navigate_builds_fresh_state() {
        let mut session = session();
        session.navigate(Screen::Memory).unwrap();
        session.memory_mut().unwrap().select_tile(0);
        assert_eq!(session.memory().unwrap().status(), GameStatus::Running);

        session.navigate(Screen::Memory).unwrap();
        assert_eq!(session.memory().unwrap().status(), GameStatus::Idle);

        session.navigate(Screen::HardStories).unwrap();
        assert!(session.memory().is_none());
        assert!(session.quiz_mut().unwrap().is_reading());
    }

    #[test]
    fn test_locale_switch_keeps_game() {
        let mut session = session();
        session.navigate(Screen::Memory).unwrap();
        session.memory_mut().unwrap().select_tile(0);
        session.set_locale(Locale::Ar);
        assert_eq!(session.memory().unwrap().status(), GameStatus::Running);
        assert_eq!(session.t(Section::Navbar, "home"), "الرئيسية");
    }

    #[test]
    fn test_unreadable_store_starts_empty() {
        struct Broken;
        impl BestTimeStore for Broken {
            fn load_best_time(&self) -> Result<Option<u32>, PersistError> {
                Err(PersistError::VersionMismatch {
                    expected: 1,
                    found: 2,
                })
            }
            fn save_best_time(&mut self, _: u32) -> Result<(), PersistError> {
                Err(PersistError::InvalidFormat("memory.bestTime".to_string()))
            }
        }

        let session = AppSession::with_store(AppConfig::new(), Box::new(Broken));
        assert_eq!(session.best_time(), None);
    }
}

//! Main application state and logic

use sprach_core::forms::Field;
use sprach_core::memory::{IgnoreReason, Selection};
use sprach_core::story::{PageAnswer, PageChange, PagerIgnore, QuizPhase};
use sprach_core::{AppSession, Screen, Section};
use tracing::warn;

use crate::ui::theme::Theme;

/// Tiles per row on the memory board.
pub const BOARD_COLUMNS: usize = 4;

/// Main application state
///
/// Everything that is not UI-only lives in the [`AppSession`].
pub struct App {
    pub theme: Theme,

    // Cursors
    pub menu_index: usize,
    pub tile_cursor: usize,
    pub question_cursor: usize,
    pub field_index: usize,

    status_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            menu_index: 0,
            tile_cursor: 0,
            question_cursor: 0,
            field_index: 0,
            status_message: None,
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn go_to(&mut self, session: &mut AppSession, screen: Screen) {
        match session.navigate(screen) {
            Ok(()) => {
                self.tile_cursor = 0;
                self.question_cursor = 0;
                self.field_index = 0;
                self.clear_status();
            }
            Err(e) => {
                warn!(error = %e, ?screen, "navigation failed");
                self.set_status(e.to_string());
            }
        }
    }

    pub fn go_home(&mut self, session: &mut AppSession) {
        self.go_to(session, Screen::Home);
    }

    pub fn menu_move(&mut self, session: &AppSession, delta: isize) {
        let len = session.home_menu().len() as isize;
        self.menu_index = (self.menu_index as isize + delta).rem_euclid(len) as usize;
    }

    pub fn menu_select(&mut self, session: &mut AppSession) {
        if let Some(entry) = session.home_menu().get(self.menu_index) {
            let screen = entry.screen;
            self.go_to(session, screen);
        }
    }

    pub fn toggle_locale(&mut self, session: &mut AppSession) {
        let locale = session.toggle_locale();
        self.set_status(locale.native_name());
    }

    // ========================================================================
    // Memory
    // ========================================================================

    /// Move the board cursor by whole cells, clamped to the board.
    pub fn move_tile_cursor(&mut self, session: &AppSession, dx: isize, dy: isize) {
        let Some(game) = session.memory() else {
            return;
        };
        let len = game.tiles().len();
        if len == 0 {
            return;
        }
        let rows = len.div_ceil(BOARD_COLUMNS);
        let col = (self.tile_cursor % BOARD_COLUMNS) as isize + dx;
        let row = (self.tile_cursor / BOARD_COLUMNS) as isize + dy;
        let col = col.clamp(0, BOARD_COLUMNS as isize - 1) as usize;
        let row = row.clamp(0, rows as isize - 1) as usize;
        self.tile_cursor = (row * BOARD_COLUMNS + col).min(len - 1);
    }

    pub fn flip_tile(&mut self, session: &mut AppSession) {
        let cursor = self.tile_cursor;
        let Some(game) = session.memory_mut() else {
            return;
        };
        let key = match game.select_tile(cursor) {
            Selection::Ignored(IgnoreReason::Expired) => Some("timeUp"),
            Selection::Ignored(IgnoreReason::Won) => Some("gameComplete"),
            _ => None,
        };
        match key {
            Some(key) => {
                let msg = session.t(Section::Memory, key);
                self.set_status(msg);
            }
            None => self.clear_status(),
        }
    }

    pub fn reset_memory(&mut self, session: &mut AppSession) {
        if let Some(game) = session.memory_mut() {
            game.reset();
            self.tile_cursor = 0;
            self.clear_status();
        }
    }

    // ========================================================================
    // Stories
    // ========================================================================

    pub fn move_question_cursor(&mut self, session: &mut AppSession, delta: isize) {
        let Some(pager) = session.pager_mut() else {
            return;
        };
        let len = pager.story().questions.len();
        if len == 0 {
            return;
        }
        self.question_cursor = (self.question_cursor as isize + delta).rem_euclid(len as isize) as usize;
    }

    /// Answer the question under the cursor (A1) or the current question (hard level).
    pub fn answer(&mut self, session: &mut AppSession, option: usize) {
        let question = self.question_cursor;
        if let Some(pager) = session.pager_mut() {
            let key = match pager.answer(question, option) {
                PageAnswer::Correct => "correct",
                PageAnswer::Wrong => "wrong",
                PageAnswer::Ignored(_) => return,
            };
            let msg = session.t(Section::Stories, key);
            self.set_status(msg);
            return;
        }

        if let Some(quiz) = session.quiz_mut() {
            let Some(current) = quiz.attempt().map(|a| a.current_question()) else {
                return;
            };
            // Feedback is rendered from the quiz state.
            quiz.answer_question(current, option);
            self.clear_status();
        }
    }

    pub fn turn_page(&mut self, session: &mut AppSession, forward: bool) {
        let Some(pager) = session.pager_mut() else {
            return;
        };
        let change = if forward {
            pager.next_page()
        } else {
            pager.previous_page()
        };
        match change {
            PageChange::Started(_) => {
                self.question_cursor = 0;
                self.clear_status();
            }
            PageChange::Ignored(PagerIgnore::Unanswered) => {
                let msg = session.t(Section::Stories, "answerAll");
                self.set_status(msg);
            }
            PageChange::Ignored(_) => {}
        }
    }

    /// Enter on the hard-level screen: start, restart or move on.
    pub fn quiz_confirm(&mut self, session: &mut AppSession) {
        let Some(quiz) = session.quiz_mut() else {
            return;
        };
        match quiz.phase() {
            QuizPhase::Reading => {
                quiz.start_quiz();
            }
            QuizPhase::Quizzing => {}
            QuizPhase::Results => {
                quiz.reset_quiz();
            }
        }
    }

    pub fn next_story(&mut self, session: &mut AppSession) {
        if let Some(quiz) = session.quiz_mut() {
            if quiz.next_story() {
                quiz.start_reading();
            }
        }
    }

    // ========================================================================
    // Pictures
    // ========================================================================

    pub fn browse_pictures(&mut self, session: &mut AppSession, forward: bool) {
        if let Some(deck) = session.vocabulary_mut() {
            if forward {
                deck.next();
            } else {
                deck.previous();
            }
        }
    }

    // ========================================================================
    // Login form
    // ========================================================================

    pub fn focused_field(&self, session: &mut AppSession) -> Option<Field> {
        let form = session.form_mut()?;
        form.fields().get(self.field_index).copied()
    }

    pub fn next_field(&mut self, session: &mut AppSession) {
        if let Some(form) = session.form_mut() {
            self.field_index = (self.field_index + 1) % form.fields().len();
        }
    }

    pub fn type_char(&mut self, session: &mut AppSession, c: char) {
        let Some(field) = self.focused_field(session) else {
            return;
        };
        if let Some(form) = session.form_mut() {
            form.push_char(field, c);
        }
    }

    pub fn backspace(&mut self, session: &mut AppSession) {
        let Some(field) = self.focused_field(session) else {
            return;
        };
        if let Some(form) = session.form_mut() {
            form.pop_char(field);
        }
    }

    pub fn toggle_form_mode(&mut self, session: &mut AppSession) {
        if let Some(form) = session.form_mut() {
            form.toggle_mode();
            self.field_index = 0;
            self.clear_status();
        }
    }

    pub fn submit_form(&mut self, session: &mut AppSession) {
        let Some(form) = session.form_mut() else {
            return;
        };
        let key = match form.submit() {
            Ok(_) => "submitted",
            Err(e) => e.key(),
        };
        let msg = session.t(Section::Login, key);
        self.set_status(msg);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

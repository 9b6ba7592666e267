//! Event handling for the TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sprach_core::{AppSession, Screen};

use crate::app::App;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, session: &mut AppSession, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            handle_key_event(app, session, key)
        }
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, session: &mut AppSession, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }
    match key.code {
        KeyCode::F(2) => {
            app.toggle_locale(session);
            return EventResult::NeedsRedraw;
        }
        KeyCode::Esc if session.screen() == Screen::Home => return EventResult::Quit,
        KeyCode::Esc => {
            app.go_home(session);
            return EventResult::NeedsRedraw;
        }
        _ => {}
    }

    // Route based on screen
    match session.screen() {
        Screen::Home => handle_home(app, session, key),
        Screen::Memory => handle_memory(app, session, key),
        Screen::Stories => handle_stories(app, session, key),
        Screen::HardStories => handle_hard_stories(app, session, key),
        Screen::Pictures => handle_pictures(app, session, key),
        Screen::Login => handle_login(app, session, key),
        Screen::About => EventResult::Continue,
    }
}

fn handle_home(app: &mut App, session: &mut AppSession, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => EventResult::Quit,
        KeyCode::Char('j') | KeyCode::Down => {
            app.menu_move(session, 1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.menu_move(session, -1);
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.menu_select(session);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_memory(app: &mut App, session: &mut AppSession, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.move_tile_cursor(session, -1, 0),
        KeyCode::Char('l') | KeyCode::Right => app.move_tile_cursor(session, 1, 0),
        KeyCode::Char('k') | KeyCode::Up => app.move_tile_cursor(session, 0, -1),
        KeyCode::Char('j') | KeyCode::Down => app.move_tile_cursor(session, 0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => app.flip_tile(session),
        KeyCode::Char('r') => app.reset_memory(session),
        _ => return EventResult::Continue,
    }
    EventResult::NeedsRedraw
}

fn handle_stories(app: &mut App, session: &mut AppSession, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => app.move_question_cursor(session, -1),
        KeyCode::Char('j') | KeyCode::Down => app.move_question_cursor(session, 1),
        KeyCode::Char('n') | KeyCode::Right => app.turn_page(session, true),
        KeyCode::Char('p') | KeyCode::Left => app.turn_page(session, false),
        KeyCode::Char(c @ '1'..='9') => app.answer(session, option_index(c)),
        _ => return EventResult::Continue,
    }
    EventResult::NeedsRedraw
}

fn handle_hard_stories(app: &mut App, session: &mut AppSession, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Enter => app.quiz_confirm(session),
        KeyCode::Char('n') => app.next_story(session),
        KeyCode::Char(c @ '1'..='9') => app.answer(session, option_index(c)),
        _ => return EventResult::Continue,
    }
    EventResult::NeedsRedraw
}

fn handle_pictures(app: &mut App, session: &mut AppSession, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => app.browse_pictures(session, true),
        KeyCode::Char('h') | KeyCode::Left => app.browse_pictures(session, false),
        _ => return EventResult::Continue,
    }
    EventResult::NeedsRedraw
}

/// Text input: every printable key goes into the focused field.
fn handle_login(app: &mut App, session: &mut AppSession, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.next_field(session),
        KeyCode::F(3) => app.toggle_form_mode(session),
        KeyCode::Enter => app.submit_form(session),
        KeyCode::Backspace => app.backspace(session),
        KeyCode::Char(c) => app.type_char(session, c),
        _ => return EventResult::Continue,
    }
    EventResult::NeedsRedraw
}

/// Keys `1`-`9` pick options 0-8.
fn option_index(c: char) -> usize {
    c.to_digit(10).map_or(0, |d| d as usize - 1)
}

//! App session navigation and score persistence.
//!
//! Run with: `cargo test -p sprach-core --test session_flow`

use sprach_core::memory::{GameStatus, MemoryEvent};
use sprach_core::persist::SCORE_FILE_NAME;
use sprach_core::testing::{partner_of, test_session};
use sprach_core::{
    AppConfig, AppSession, BestTimeStore, JsonFileStore, Locale, Screen, ScreenState, Section,
};
use std::time::Duration;
use tempfile::TempDir;

const SECOND: Duration = Duration::from_secs(1);

/// Play the active memory game to the end, one pair per second.
fn solve_memory(session: &mut AppSession) -> Vec<MemoryEvent> {
    let mut events = Vec::new();
    loop {
        let game = session.memory_mut().unwrap();
        let Some(first) = game.tiles().iter().position(|t| !t.is_matched) else {
            break;
        };
        let second = partner_of(game, first).unwrap();
        game.select_tile(first);
        game.select_tile(second);
        events.extend(session.advance(SECOND).unwrap());
    }
    events
}

#[test]
fn test_best_time_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::new().with_seed(11).with_data_dir(dir.path());

    let mut session = AppSession::new(config.clone());
    assert_eq!(session.best_time(), None);
    session.navigate(Screen::Memory).unwrap();
    let events = solve_memory(&mut session);

    assert!(events.contains(&MemoryEvent::Won {
        seconds: 8,
        moves: 8,
        new_best: true
    }));
    assert_eq!(session.best_time(), Some(8));
    assert!(dir.path().join(SCORE_FILE_NAME).exists());

    let restarted = AppSession::new(config);
    assert_eq!(restarted.best_time(), Some(8));
}

#[test]
fn test_slower_win_keeps_best_time() {
    let dir = TempDir::new().unwrap();
    JsonFileStore::in_dir(dir.path()).save_best_time(3).unwrap();

    let mut session = AppSession::new(AppConfig::new().with_seed(5).with_data_dir(dir.path()));
    session.navigate(Screen::Memory).unwrap();
    assert_eq!(session.memory().unwrap().best_time(), Some(3));

    let events = solve_memory(&mut session);
    assert!(events.iter().any(|e| matches!(
        e,
        MemoryEvent::Won {
            new_best: false,
            ..
        }
    )));
    assert_eq!(session.best_time(), Some(3));
    assert_eq!(
        JsonFileStore::in_dir(dir.path()).load_best_time().unwrap(),
        Some(3)
    );
}

#[test]
fn test_corrupt_score_file_starts_fresh() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(SCORE_FILE_NAME), "{ not json").unwrap();

    let session = AppSession::new(AppConfig::new().with_data_dir(dir.path()));
    assert_eq!(session.best_time(), None);
}

#[test]
fn test_win_never_overwrites_unreadable_score_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(SCORE_FILE_NAME);
    let newer = r#"{"version":2,"entries":{"memory.bestTime":4}}"#;
    std::fs::write(&path, newer).unwrap();

    let mut session = AppSession::new(AppConfig::new().with_seed(11).with_data_dir(dir.path()));
    session.navigate(Screen::Memory).unwrap();
    let mut done = vec![false; session.memory().unwrap().tiles().len()];
    let mut save_failed = false;
    for first in 0..done.len() {
        if done[first] {
            continue;
        }
        let game = session.memory_mut().unwrap();
        let second = partner_of(game, first).unwrap();
        game.select_tile(first);
        game.select_tile(second);
        done[first] = true;
        done[second] = true;
        save_failed |= session.advance(SECOND).is_err();
    }

    assert!(save_failed);
    assert_eq!(session.memory().unwrap().status(), GameStatus::Won);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), newer);
}

#[test]
fn test_leaving_memory_drops_pending_resolution() {
    let mut session = test_session();
    session.navigate(Screen::Memory).unwrap();
    {
        let game = session.memory_mut().unwrap();
        let partner = partner_of(game, 0);
        let other = (1..game.tiles().len())
            .find(|&i| Some(i) != partner)
            .unwrap();
        game.select_tile(0);
        game.select_tile(other);
        assert!(game.is_resolving());
    }

    session.navigate(Screen::Home).unwrap();
    assert!(matches!(session.state(), ScreenState::Home));
    assert!(session.advance(10 * SECOND).unwrap().is_empty());

    session.navigate(Screen::Memory).unwrap();
    let game = session.memory().unwrap();
    assert_eq!(game.status(), GameStatus::Idle);
    assert_eq!(game.pending_tasks(), 0);
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_locale_switch_keeps_screen_state() {
    let mut session = test_session();
    session.navigate(Screen::HardStories).unwrap();
    session.advance(SECOND).unwrap();

    assert_eq!(session.toggle_locale(), Locale::Ar);
    assert_eq!(session.screen(), Screen::HardStories);
    assert_eq!(session.t(Section::Stories, "next"), "التالي");
    match session.state() {
        ScreenState::HardStories(quiz) => assert_eq!(quiz.reading_progress(), 20),
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn test_home_menu_is_localized() {
    let mut session = test_session();
    let german: Vec<String> = session.home_menu().into_iter().map(|e| e.label).collect();
    session.set_locale(Locale::Ar);
    let arabic: Vec<String> = session.home_menu().into_iter().map(|e| e.label).collect();

    assert_eq!(german.len(), 6);
    assert_eq!(german[0], "Memory Spiel");
    assert_ne!(german, arabic);
}

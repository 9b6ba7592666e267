//! Memory game scenarios driven through virtual time.
//!
//! Run with: `cargo test -p sprach-core --test memory_game`

use proptest::prelude::*;
use sprach_core::memory::{GameStatus, IgnoreReason, MemoryConfig, MemoryEvent, MemoryGame, Selection};
use sprach_core::testing::{alternating_deck, paired_deck, partner_of};
use sprach_core::Clocked;
use std::time::Duration;

const SECOND: Duration = Duration::from_secs(1);

fn paired(n: usize) -> MemoryGame {
    MemoryGame::from_deck(MemoryConfig::default(), paired_deck(n)).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_full_game_is_won_and_clock_stops() {
    let mut game = MemoryGame::with_seed(MemoryConfig::default(), 3).unwrap();

    let mut done = vec![false; game.tiles().len()];
    for i in 0..game.tiles().len() {
        if done[i] {
            continue;
        }
        let j = partner_of(&game, i).unwrap();
        assert_eq!(game.select_tile(i), Selection::Flipped);
        assert_eq!(game.select_tile(j), Selection::PairFlipped);
        game.advance(SECOND);
        done[i] = true;
        done[j] = true;
    }

    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.moves(), 8);
    assert_eq!(game.matched_pairs(), 8);
    assert!(!game.clock().is_running);
    assert_eq!(game.pending_tasks(), 0);

    let elapsed = game.clock().elapsed_seconds;
    let countdown = game.clock().countdown_seconds;
    game.advance(10 * SECOND);
    assert_eq!(game.clock().elapsed_seconds, elapsed);
    assert_eq!(game.clock().countdown_seconds, countdown);

    let won = game
        .drain_events()
        .into_iter()
        .find(|e| matches!(e, MemoryEvent::Won { .. }));
    assert_eq!(
        won,
        Some(MemoryEvent::Won {
            seconds: 8,
            moves: 8,
            new_best: true
        })
    );
}

#[test]
fn test_mismatch_flips_back_after_delay() {
    let mut game = MemoryGame::from_deck(MemoryConfig::default(), alternating_deck(3)).unwrap();
    game.select_tile(0);
    game.select_tile(1);

    game.advance(Duration::from_millis(999));
    assert!(game.tile(0).unwrap().is_flipped);
    assert_eq!(game.select_tile(2), Selection::Ignored(IgnoreReason::Resolving));

    game.advance(Duration::from_millis(1));
    assert!(!game.tile(0).unwrap().is_flipped);
    assert!(!game.tile(1).unwrap().is_flipped);
    assert!(game.unresolved().is_empty());
    assert_eq!(game.moves(), 1);
}

#[test]
fn test_countdown_expires_after_sixty_ticks() {
    let mut game = paired(4);
    game.select_tile(0);

    game.advance(59 * SECOND);
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.clock().countdown_seconds, 1);

    game.advance(SECOND);
    assert_eq!(game.status(), GameStatus::Expired);
    assert_eq!(game.clock().countdown_seconds, 0);
    assert_eq!(game.pending_tasks(), 0);
    assert_eq!(game.select_tile(2), Selection::Ignored(IgnoreReason::Expired));
    assert!(game.drain_events().contains(&MemoryEvent::Expired));
}

#[test]
fn test_expiry_freezes_pending_pair() {
    let config = MemoryConfig::default().with_countdown_secs(1);
    let mut game = MemoryGame::from_deck(config, alternating_deck(2)).unwrap();
    game.select_tile(0);
    game.advance(Duration::from_millis(500));
    game.select_tile(1);

    game.advance(2 * SECOND);
    assert_eq!(game.status(), GameStatus::Expired);
    assert!(game.tile(0).unwrap().is_flipped);
    assert!(game.tile(1).unwrap().is_flipped);
    assert_eq!(game.pending_tasks(), 0);
}

#[test]
fn test_best_time_only_improves() {
    let mut game = paired(1).with_best_time(Some(5));
    game.advance(10 * SECOND);
    game.select_tile(0);
    game.advance(6 * SECOND);
    game.select_tile(1);
    game.advance(SECOND);

    // Won at 7 s: worse than 5 s.
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.best_time(), Some(5));

    game.reset();
    game.select_tile(0);
    game.advance(2 * SECOND);
    game.select_tile(1);
    game.advance(SECOND);
    assert_eq!(game.best_time(), Some(3));
}

#[test]
fn test_reset_cancels_everything() {
    let mut game = paired(2);
    game.select_tile(0);
    game.select_tile(2);
    assert!(game.pending_tasks() > 0);

    game.reset();
    assert_eq!(game.pending_tasks(), 0);
    assert_eq!(game.status(), GameStatus::Idle);
    assert_eq!(game.moves(), 0);
    assert!(game.tiles().iter().all(|t| !t.is_face_up()));
}

// =============================================================================
// Invariants
// =============================================================================

#[derive(Debug, Clone)]
enum Action {
    Select(usize),
    Wait(u64),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0usize..18).prop_map(Action::Select),
        1 => (0u64..3_000).prop_map(Action::Wait),
    ]
}

proptest! {
    #[test]
    fn prop_game_invariants_hold(seed in any::<u64>(), actions in prop::collection::vec(action(), 0..120)) {
        let mut game = MemoryGame::with_seed(MemoryConfig::default(), seed).unwrap();
        let mut matched = vec![false; game.tiles().len()];
        let mut pairs_flipped = 0u32;

        for action in actions {
            match action {
                Action::Select(i) => {
                    if game.select_tile(i) == Selection::PairFlipped {
                        pairs_flipped += 1;
                    }
                }
                Action::Wait(ms) => game.advance(Duration::from_millis(ms)),
            }

            prop_assert!(game.unresolved().len() <= 2);
            prop_assert_eq!(game.moves(), pairs_flipped);
            for (i, tile) in game.tiles().iter().enumerate() {
                if matched[i] {
                    prop_assert!(tile.is_matched, "tile {} lost its match", i);
                }
                matched[i] = tile.is_matched;
            }

            let clock = game.clock();
            prop_assert!(clock.countdown_seconds <= 60);
            prop_assert!(!(clock.is_running && clock.is_expired));
            match game.status() {
                GameStatus::Won | GameStatus::Expired => {
                    prop_assert!(!clock.is_running);
                }
                GameStatus::Running => {
                    prop_assert_eq!(clock.elapsed_seconds + clock.countdown_seconds, 60);
                }
                GameStatus::Idle => {}
            }
        }
    }
}

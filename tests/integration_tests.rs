//! Integration tests for knight-trail
//!
//! These cover the public engine API end to end: the opening move, cardinal
//! and intercardinal jumps, rejection of bad placements, terminal detection
//! and reset. Property tests check the legality rule and the move-index
//! invariant over random placement sequences.

use proptest::prelude::*;

use knight_trail::board::Point;
use knight_trail::constants::{HEIGHT, WIDTH};
use knight_trail::engine::GameEngine;
use knight_trail::position::{GameState, MoveError, Phase};
use knight_trail::protocol::TrailProtocol;

// =============================================================================
// Helper functions
// =============================================================================

/// Play a sequence of placements, panicking on the first rejection.
fn setup_trail(moves: &[Point]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &(x, y) in moves {
        if let Err(e) = engine.place_marker(x, y) {
            panic!("Illegal move ({x}, {y}) in setup: {e}");
        }
    }
    engine
}

/// Reference legality rule written directly from offsets.
fn expected_legal(state: &GameState, x: usize, y: usize) -> bool {
    if state.board.get(x, y).is_some() {
        return false;
    }
    let Some((lx, ly)) = state.last_position else {
        return true;
    };
    let (dx, dy) = (x as i64 - lx as i64, y as i64 - ly as i64);
    matches!(
        (dx, dy),
        (3, 0) | (-3, 0) | (0, 3) | (0, -3) | (2, 2) | (2, -2) | (-2, 2) | (-2, -2)
    )
}

/// Assert that the occupied cells hold exactly the indices 1..=move_count.
fn assert_contiguous(state: &GameState) {
    let mut indices: Vec<u32> = state.board.markers().map(|(_, index)| index).collect();
    indices.sort_unstable();
    let expected: Vec<u32> = (1..=state.move_count).collect();
    assert_eq!(indices, expected);
}

// =============================================================================
// End-to-end game
// =============================================================================

#[test]
fn test_end_to_end_game() {
    let mut engine = GameEngine::new();

    let state = engine.place_marker(0, 0).unwrap();
    assert_eq!(state.board.get(0, 0), Some(1));

    assert!(engine.is_legal_move(3, 0), "(3,0) is a cardinal jump from (0,0)");
    let state = engine.place_marker(3, 0).unwrap();
    assert_eq!(state.board.get(3, 0), Some(2));

    assert_eq!(engine.place_marker(3, 0), Err(MoveError::CellOccupied((3, 0))));

    assert!(engine.is_legal_move(5, 2), "(5,2) is an intercardinal jump from (3,0)");
    let state = engine.place_marker(5, 2).unwrap();
    assert_eq!(state.board.get(5, 2), Some(3));

    while !engine.is_game_over() {
        let (x, y) = engine.legal_moves()[0];
        engine.place_marker(x, y).unwrap();
        assert_contiguous(engine.state());
    }

    assert!(engine.is_game_over());
    assert_eq!(engine.phase(), Phase::GameOver);
    assert!(engine.legal_moves().is_empty());
    assert_eq!(engine.place_marker(9, 9), Err(MoveError::GameAlreadyOver));
}

// =============================================================================
// Legality
// =============================================================================

#[test]
fn test_first_move_anywhere() {
    let engine = GameEngine::new();
    for x in 0..WIDTH {
        for y in 0..HEIGHT {
            assert!(engine.is_legal_move(x, y), "({x}, {y}) should open the game");
        }
    }
}

#[test]
fn test_legal_moves_from_corner() {
    let engine = setup_trail(&[(0, 0)]);
    assert_eq!(engine.legal_moves(), vec![(0, 3), (2, 2), (3, 0)]);
}

#[test]
fn test_legal_moves_from_center() {
    let engine = setup_trail(&[(5, 5)]);
    assert_eq!(
        engine.legal_moves(),
        vec![(2, 5), (3, 3), (3, 7), (5, 2), (5, 8), (7, 3), (7, 7), (8, 5)]
    );
}

#[test]
fn test_occupied_target_not_legal() {
    // (0,0) -> (3,0) -> (3,3) -> (0,3): (0,0) is a cardinal jump but occupied
    let engine = setup_trail(&[(0, 0), (3, 0), (3, 3), (0, 3)]);
    assert!(!engine.is_legal_move(0, 0));
    assert_eq!(
        engine.state().place_marker(0, 0),
        Err(MoveError::CellOccupied((0, 0)))
    );
}

#[test]
fn test_out_of_bounds() {
    let mut engine = GameEngine::new();
    assert!(!engine.is_legal_move(WIDTH, 0));
    assert_eq!(engine.place_marker(WIDTH, 0), Err(MoveError::OutOfBounds((WIDTH, 0))));
    assert_eq!(engine.place_marker(0, HEIGHT), Err(MoveError::OutOfBounds((0, HEIGHT))));
    assert_eq!(engine.phase(), Phase::NotStarted);
}

// =============================================================================
// Terminal detection and reset
// =============================================================================

#[test]
fn test_small_board_dead_end() {
    // On 3x3 the centre has no jump target at all.
    let mut engine = GameEngine::with_size(3, 3);
    engine.place_marker(1, 1).unwrap();
    assert!(engine.is_game_over());
    assert_eq!(engine.state().move_count, 1);
}

#[test]
fn test_game_over_on_stuck_trail() {
    // 3x3: corners chain by intercardinal jumps, (0,0)->(2,2) then (0,0) is taken.
    let mut engine = GameEngine::with_size(3, 3);
    engine.place_marker(0, 0).unwrap();
    assert!(!engine.is_game_over());
    engine.place_marker(2, 2).unwrap();
    assert!(engine.is_game_over());
    assert_eq!(engine.place_marker(0, 2), Err(MoveError::GameAlreadyOver));
}

#[test]
fn test_reset_from_any_phase() {
    let mut engine = GameEngine::with_size(3, 3);
    let state = engine.reset();
    assert_eq!(state.phase(), Phase::NotStarted);

    engine.place_marker(0, 0).unwrap();
    engine.place_marker(2, 2).unwrap();
    assert_eq!(engine.phase(), Phase::GameOver);

    let state = engine.reset();
    assert_eq!(state.board.occupied_count(), 0);
    assert!(!state.started);
    assert!(!state.over);
    assert_eq!(state.last_position, None);
    assert_eq!(state.move_count, 0);
}

// =============================================================================
// Protocol session
// =============================================================================

#[test]
fn test_protocol_session() {
    let mut session = TrailProtocol::new();
    let input = "place 0 0\nlegal 3 0\nlegal 1 2\nplace 3 0\n7 hint\nlegal_moves\nquit\n";
    let mut output = Vec::new();
    session.run_with(input.as_bytes(), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    let responses: Vec<&str> = output.split("\n\n").filter(|r| !r.is_empty()).collect();

    assert_eq!(responses[0], "= 1");
    assert_eq!(responses[1], "= true");
    assert_eq!(responses[2], "= false");
    assert_eq!(responses[3], "= 2");
    assert!(responses[4].starts_with("=7 "));
    assert_eq!(responses[5], "= 1,2 3,3 5,2 6,0");
    assert_eq!(responses[6], "= ");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_legality_matches_offsets(moves in prop::collection::vec((0usize..12, 0usize..12), 0..40)) {
        let mut state = GameState::new();
        for (x, y) in moves {
            for cx in 0..WIDTH {
                for cy in 0..HEIGHT {
                    prop_assert_eq!(state.is_legal_move(cx, cy), expected_legal(&state, cx, cy));
                }
            }
            if let Ok(next) = state.place_marker(x, y) {
                state = next;
            }
        }
    }

    #[test]
    fn prop_rejection_never_mutates(moves in prop::collection::vec((0usize..12, 0usize..12), 0..60)) {
        let mut engine = GameEngine::new();
        for (x, y) in moves {
            let before = engine.state().clone();
            if engine.place_marker(x, y).is_err() {
                prop_assert_eq!(engine.state(), &before);
            }
        }
    }

    #[test]
    fn prop_move_indices_contiguous(moves in prop::collection::vec((0usize..10, 0usize..10), 0..60)) {
        let mut engine = GameEngine::new();
        let mut accepted = 0u32;
        for (x, y) in moves {
            if engine.place_marker(x, y).is_ok() {
                accepted += 1;
            }
        }
        let state = engine.state();
        prop_assert_eq!(state.move_count, accepted);
        prop_assert_eq!(state.board.occupied_count(), accepted as usize);
        let mut indices: Vec<u32> = state.board.markers().map(|(_, index)| index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (1..=accepted).collect::<Vec<_>>());
    }

    #[test]
    fn prop_over_iff_no_legal_move(moves in prop::collection::vec((0usize..10, 0usize..10), 1..80)) {
        let mut engine = GameEngine::new();
        for (x, y) in moves {
            let _ = engine.place_marker(x, y);
            let started = engine.state().started;
            prop_assert_eq!(engine.is_game_over(), started && engine.legal_moves().is_empty());
        }
    }
}

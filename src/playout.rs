//! Playouts and move hints.
//!
//! A playout places random legal markers until the trail is stuck. The
//! Warnsdorff hint picks the continuation with the fewest onward jumps,
//! which tends to produce long trails.

use fastrand::Rng;

use crate::board::Point;
use crate::position::GameState;

/// Choose a uniformly random legal move, or `None` when the game is over.
pub fn choose_random_move(state: &GameState, rng: &mut Rng) -> Option<Point> {
    if state.is_game_over() {
        return None;
    }
    let candidates = state.legal_moves();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.usize(..candidates.len())])
}

/// Play random legal moves from `state` until no legal move remains.
///
/// An unstarted game gets a random opening cell first.
pub fn random_playout(state: &GameState, rng: &mut Rng) -> GameState {
    let mut pos = state.clone();
    while let Some((x, y)) = choose_random_move(&pos, rng) {
        match pos.place_marker(x, y) {
            Ok(next) => pos = next,
            Err(_) => break,
        }
    }
    pos
}

/// Number of legal continuations after placing at `pt`.
fn onward_moves(state: &GameState, pt: Point) -> usize {
    match state.place_marker(pt.0, pt.1) {
        Ok(next) => next.legal_moves().len(),
        Err(_) => 0,
    }
}

/// Warnsdorff hint: the legal move with the fewest onward continuations.
///
/// Ties go to the first candidate in row-major order. Before the opening
/// move every empty cell is a candidate.
pub fn warnsdorff_move(state: &GameState) -> Option<Point> {
    if state.is_game_over() {
        return None;
    }
    state
        .legal_moves()
        .into_iter()
        .min_by_key(|&pt| onward_moves(state, pt))
}

/// Follow [`warnsdorff_move`] until the game ends.
pub fn warnsdorff_playout(state: &GameState) -> GameState {
    let mut pos = state.clone();
    while let Some((x, y)) = warnsdorff_move(&pos) {
        match pos.place_marker(x, y) {
            Ok(next) => pos = next,
            Err(_) => break,
        }
    }
    pos
}

/// Trail lengths reached by a batch of random playouts.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayoutStats {
    pub playouts: usize,
    pub mean: f64,
    pub best: u32,
    pub worst: u32,
}

/// Run `n` random playouts from `state` with a seeded generator.
pub fn playout_stats(state: &GameState, n: usize, seed: u64) -> PlayoutStats {
    let mut rng = Rng::with_seed(seed);
    let mut total = 0u64;
    let mut best = 0u32;
    let mut worst = u32::MAX;

    for _ in 0..n {
        let finished = random_playout(state, &mut rng);
        total += finished.move_count as u64;
        best = best.max(finished.move_count);
        worst = worst.min(finished.move_count);
    }

    PlayoutStats {
        playouts: n,
        mean: if n == 0 { 0.0 } else { total as f64 / n as f64 },
        best,
        worst: if n == 0 { 0 } else { worst },
    }
}

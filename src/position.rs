//! Game state representation and marker placement.
//!
//! This module provides the core rules of the trail puzzle:
//! - Board state as an immutable snapshot ([`GameState`])
//! - Move legality (cardinal jumps of 3, intercardinal jumps of 2)
//! - Terminal-state detection after each placement
//!
//! Every transition returns a new [`GameState`] and leaves the old one
//! untouched, so a rejected move can never corrupt the position.

use crate::board::{Board, Point};
use crate::constants::{CARDINAL_STEP, DIAGONAL_STEP};

/// Result of attempting to place a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates outside the board
    OutOfBounds(Point),
    /// Cell already holds a marker
    CellOccupied(Point),
    /// Cell is not a cardinal or intercardinal jump from the last marker
    IllegalMove(Point),
    /// No legal move remains; only a reset continues play
    GameAlreadyOver,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfBounds((x, y)) => write!(f, "illegal move: ({x}, {y}) is off the board"),
            MoveError::CellOccupied((x, y)) => write!(f, "illegal move: ({x}, {y}) is occupied"),
            MoveError::IllegalMove((x, y)) => {
                write!(f, "illegal move: ({x}, {y}) is not reachable from the last marker")
            }
            MoveError::GameAlreadyOver => write!(f, "illegal move: game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Where a game sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Phase::NotStarted => "not_started",
            Phase::InProgress => "in_progress",
            Phase::GameOver => "game_over",
        };
        f.write_str(s)
    }
}

/// A snapshot of the puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Cells with their move indices
    pub board: Board,
    /// Highest move index placed so far (0 before the first move)
    pub move_count: u32,
    /// Most recently placed marker
    pub last_position: Option<Point>,
    /// Set by the first placement
    pub started: bool,
    /// Set once no legal move remains
    pub over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state on the default 10×10 board.
    pub fn new() -> Self {
        Self::with_board(Board::default())
    }

    /// Fresh state on a `width`×`height` board.
    ///
    /// # Panics
    /// If either side is outside `1..=MAX_SIDE`.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self::with_board(Board::new(width, height))
    }

    fn with_board(board: Board) -> Self {
        GameState {
            board,
            move_count: 0,
            last_position: None,
            started: false,
            over: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.over {
            Phase::GameOver
        } else if self.started {
            Phase::InProgress
        } else {
            Phase::NotStarted
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.over
    }

    /// Whether a marker may go at `(x, y)`.
    ///
    /// Before the first move every empty cell qualifies. Afterwards the cell
    /// must be empty and a trail jump away from `last_position`.
    pub fn is_legal_move(&self, x: usize, y: usize) -> bool {
        if !self.board.is_empty_cell(x, y) {
            return false;
        }
        match self.last_position {
            None => true,
            Some(last) => is_trail_jump(last, (x, y)),
        }
    }

    /// Every legal cell, in row-major order.
    ///
    /// This scans the whole board, O(W·H) per call.
    pub fn legal_moves(&self) -> Vec<Point> {
        self.board
            .points()
            .filter(|&(x, y)| self.is_legal_move(x, y))
            .collect()
    }

    /// Place the next marker at `(x, y)` and return the resulting state.
    ///
    /// # Errors
    /// - [`MoveError::GameAlreadyOver`] - no legal move remains
    /// - [`MoveError::OutOfBounds`] - `(x, y)` lies off the board
    /// - [`MoveError::CellOccupied`] - the cell already holds a marker
    /// - [`MoveError::IllegalMove`] - not a jump from the last marker
    pub fn place_marker(&self, x: usize, y: usize) -> Result<GameState, MoveError> {
        if self.over {
            return Err(MoveError::GameAlreadyOver);
        }
        if !self.board.in_bounds(x, y) {
            return Err(MoveError::OutOfBounds((x, y)));
        }
        if self.board.get(x, y).is_some() {
            return Err(MoveError::CellOccupied((x, y)));
        }
        if self.started && !self.is_legal_move(x, y) {
            return Err(MoveError::IllegalMove((x, y)));
        }

        let mut next = self.clone();
        next.move_count += 1;
        next.board.set(x, y, next.move_count);
        next.last_position = Some((x, y));
        next.started = true;
        next.check_terminal();
        Ok(next)
    }

    /// Mark the game over when the last marker has no continuation.
    fn check_terminal(&mut self) {
        if self.last_position.is_none() {
            return;
        }
        let has_move = self
            .board
            .points()
            .any(|(x, y)| self.is_legal_move(x, y));
        if !has_move {
            self.over = true;
        }
    }
}

/// Whether `to` is a cardinal jump of 3 or an intercardinal jump of 2 from `from`.
pub fn is_trail_jump(from: Point, to: Point) -> bool {
    let dx = from.0.abs_diff(to.0);
    let dy = from.1.abs_diff(to.1);
    (dx == CARDINAL_STEP && dy == 0)
        || (dy == CARDINAL_STEP && dx == 0)
        || (dx == DIAGONAL_STEP && dy == DIAGONAL_STEP)
}

/// Parse a coordinate of the form `x,y` (whitespace around parts is ignored).
pub fn parse_point(s: &str) -> Option<Point> {
    let (x, y) = s.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Format a point as `x,y`.
pub fn str_point(pt: Point) -> String {
    format!("{},{}", pt.0, pt.1)
}

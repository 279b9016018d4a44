//! The game session: owns the current [`GameState`] and swaps in a new
//! snapshot on each accepted placement.

use log::{debug, info};

use crate::board::{Point, SizeError, check_size};
use crate::constants::{HEIGHT, WIDTH};
use crate::position::{GameState, MoveError, Phase};

/// A running game on a fixed-size board.
pub struct GameEngine {
    state: GameState,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Engine on the default 10×10 board.
    pub fn new() -> Self {
        Self::with_size(WIDTH, HEIGHT)
    }

    /// Engine on a `width`×`height` board.
    ///
    /// # Panics
    /// If either side is outside `1..=MAX_SIDE`; use [`GameEngine::try_with_size`]
    /// for sizes that come from user input.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            state: GameState::with_size(width, height),
        }
    }

    /// Engine on a `width`×`height` board, rejecting sizes outside `1..=MAX_SIDE`.
    pub fn try_with_size(width: usize, height: usize) -> Result<Self, SizeError> {
        check_size(width, height)?;
        Ok(Self::with_size(width, height))
    }

    /// Current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Discard the current game and start over on an empty board of the same size.
    pub fn reset(&mut self) -> &GameState {
        let (width, height) = (self.state.board.width, self.state.board.height);
        debug!("reset {width}x{height} board after {} moves", self.state.move_count);
        self.state = GameState::with_size(width, height);
        &self.state
    }

    pub fn is_legal_move(&self, x: usize, y: usize) -> bool {
        self.state.is_legal_move(x, y)
    }

    pub fn legal_moves(&self) -> Vec<Point> {
        self.state.legal_moves()
    }

    /// Place the next marker. On error the current state is left as it was.
    pub fn place_marker(&mut self, x: usize, y: usize) -> Result<&GameState, MoveError> {
        let next = self.state.place_marker(x, y)?;
        debug!("marker {} at ({x}, {y})", next.move_count);
        if next.is_game_over() {
            info!("game over after {} moves", next.move_count);
        }
        self.state = next;
        Ok(&self.state)
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_anywhere() {
        let mut engine = GameEngine::new();
        assert!(engine.is_legal_move(9, 9));
        let state = engine.place_marker(7, 2).unwrap();
        assert_eq!(state.board.get(7, 2), Some(1));
        assert_eq!(state.last_position, Some((7, 2)));
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let mut engine = GameEngine::new();
        engine.place_marker(0, 0).unwrap();
        let before = engine.state().clone();
        assert_eq!(engine.place_marker(1, 2), Err(MoveError::IllegalMove((1, 2))));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_try_with_size() {
        let engine = GameEngine::try_with_size(4, 6).unwrap();
        assert_eq!(engine.state().board.width, 4);
        assert_eq!(
            GameEngine::try_with_size(usize::MAX, 2).err(),
            Some(SizeError { width: usize::MAX, height: 2 })
        );
        assert!(GameEngine::try_with_size(0, 10).is_err());
    }

    #[test]
    fn test_reset_keeps_board_size() {
        let mut engine = GameEngine::with_size(4, 6);
        engine.place_marker(0, 0).unwrap();
        let state = engine.reset();
        assert_eq!((state.board.width, state.board.height), (4, 6));
        assert_eq!(state.board.occupied_count(), 0);
        assert_eq!(engine.phase(), Phase::NotStarted);
    }
}

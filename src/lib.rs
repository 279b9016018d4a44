//! Knight Trail: a single-player jumping puzzle engine.
//!
//! Markers are placed one at a time on a 10×10 board. After the opening
//! marker, each new marker must land on an empty cell three cells away along
//! a row or column, or two cells away on both axes. The game ends when the
//! last marker has no such continuation.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and trail geometry
//! - [`board`] - 2D grid of move indices
//! - [`position`] - Game state snapshots, legality and terminal detection
//! - [`engine`] - Game session owning the current state
//! - [`playout`] - Random playouts and Warnsdorff hints
//! - [`protocol`] - Text command protocol
//!
//! ## Example
//!
//! ```
//! use knight_trail::engine::GameEngine;
//! use knight_trail::position::MoveError;
//!
//! let mut engine = GameEngine::new();
//! engine.place_marker(0, 0).unwrap();
//! assert!(engine.is_legal_move(3, 0));
//! engine.place_marker(3, 0).unwrap();
//! assert_eq!(engine.place_marker(3, 0), Err(MoveError::CellOccupied((3, 0))));
//! ```

pub mod board;
pub mod constants;
pub mod engine;
pub mod playout;
pub mod position;
pub mod protocol;

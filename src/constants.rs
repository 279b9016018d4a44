//! Constants for board dimensions, trail geometry, and engine defaults.
//!
//! The board is a plain 2D grid; sizes other than the default are accepted
//! by [`crate::board::Board::new`] and the protocol's `boardsize` command.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board width (number of rows, indexed by `x`).
pub const WIDTH: usize = 10;

/// Default board height (number of columns, indexed by `y`).
pub const HEIGHT: usize = 10;

/// Largest board side accepted by the text protocol.
pub const MAX_SIDE: usize = 26;

// =============================================================================
// Trail Moves
// =============================================================================

/// Distance of a cardinal move along a single axis.
pub const CARDINAL_STEP: usize = 3;

/// Distance of an intercardinal move on both axes.
pub const DIAGONAL_STEP: usize = 2;

/// Every offset a marker may be placed at relative to the previous one.
/// Order: N, E, S, W, NE, SE, SW, NW
pub const TRAIL_OFFSETS: [(isize, isize); 8] = [
    (-(CARDINAL_STEP as isize), 0),
    (0, CARDINAL_STEP as isize),
    (CARDINAL_STEP as isize, 0),
    (0, -(CARDINAL_STEP as isize)),
    (-(DIAGONAL_STEP as isize), DIAGONAL_STEP as isize),
    (DIAGONAL_STEP as isize, DIAGONAL_STEP as isize),
    (DIAGONAL_STEP as isize, -(DIAGONAL_STEP as isize)),
    (-(DIAGONAL_STEP as isize), -(DIAGONAL_STEP as isize)),
];

// =============================================================================
// Playouts
// =============================================================================

/// Number of random playouts run by the demo.
pub const N_PLAYOUTS: usize = 1000;

/// Seed used when none is given on the command line.
pub const DEFAULT_SEED: u64 = 42;

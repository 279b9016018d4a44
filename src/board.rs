use std::fmt;

use crate::constants::{HEIGHT, MAX_SIDE, WIDTH};

/// A cell coordinate: `x` selects the row, `y` the column.
pub type Point = (usize, usize);

/// A W×H grid of cells, each either empty or holding the move index of the
/// marker placed there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    cells: Vec<Option<u32>>,
}

/// Board dimensions outside `1..=MAX_SIDE` on either side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeError {
    pub width: usize,
    pub height: usize,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unacceptable size, sides must be 1..={MAX_SIDE} (got {}x{})",
            self.width, self.height
        )
    }
}

impl std::error::Error for SizeError {}

/// Check that both sides lie in `1..=MAX_SIDE`.
pub fn check_size(width: usize, height: usize) -> Result<(), SizeError> {
    if (1..=MAX_SIDE).contains(&width) && (1..=MAX_SIDE).contains(&height) {
        Ok(())
    } else {
        Err(SizeError { width, height })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl Board {
    /// Empty `width`×`height` board.
    ///
    /// # Panics
    /// If either side is outside `1..=MAX_SIDE`; see [`check_size`].
    pub fn new(width: usize, height: usize) -> Self {
        if let Err(e) = check_size(width, height) {
            panic!("{e}");
        }
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Move index stored at `(x, y)`, `None` if empty or out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    pub fn is_empty_cell(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y) && self.cells[self.idx(x, y)].is_none()
    }

    /// Store a move index. Callers check bounds and occupancy first.
    pub(crate) fn set(&mut self, x: usize, y: usize, index: u32) {
        let i = self.idx(x, y);
        debug_assert!(self.cells[i].is_none(), "cell ({x}, {y}) already filled");
        self.cells[i] = Some(index);
    }

    /// All coordinates in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| (x, y)))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Occupied cells with their move indices, row-major.
    pub fn markers(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.points()
            .filter_map(move |(x, y)| self.get(x, y).map(|index| ((x, y), index)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.width * self.height).max(1).to_string().len();
        for x in 0..self.width {
            for y in 0..self.height {
                if y > 0 {
                    write!(f, " ")?;
                }
                match self.get(x, y) {
                    Some(index) => write!(f, "{index:>width$}")?,
                    None => write!(f, "{:>width$}", '.')?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Cell addressing.
//!
//! Every cell on the board is addressed by a `CellCoord` (row, column).
//! Coordinates are plain values; whether one is in range depends on the
//! `BoardConfig` of the board it is used with.
//!
//! ## Usage
//!
//! ```
//! use synergy_board::core::CellCoord;
//!
//! let coord = CellCoord::new(2, 3);
//! assert_eq!(coord.row, 2);
//! assert_eq!(coord.col, 3);
//! assert_eq!(coord.index(5), 13);
//! assert_eq!(CellCoord::from_index(13, 5), coord);
//! ```

use serde::{Deserialize, Serialize};

/// Row/column address of a board cell (both 0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl CellCoord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index into a grid with `cols` columns.
    #[must_use]
    pub const fn index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Inverse of [`CellCoord::index`].
    #[must_use]
    pub const fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }

    /// Iterate over every coordinate of a `rows × cols` grid in row-major order.
    pub fn all(rows: usize, cols: usize) -> impl Iterator<Item = CellCoord> {
        (0..rows).flat_map(move |row| (0..cols).map(move |col| CellCoord::new(row, col)))
    }
}

impl From<(usize, usize)> for CellCoord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

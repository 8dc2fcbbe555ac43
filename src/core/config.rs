//! Board configuration.
//!
//! Boards are configured at construction by a `BoardConfig`:
//! - Grid dimensions (`rows × cols`)
//! - How many leading rows belong to the enemy side
//! - `HexLayout`: pixel geometry for presentation layers
//!
//! The defaults reproduce the standard 8×5 board with a 4-row enemy half.

use serde::{Deserialize, Serialize};

use super::coord::CellCoord;
use super::error::{BoardError, BoardResult};

/// Which half of the board a cell belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Top rows, shown to the player as the opponent's half.
    Enemy,
    /// Remaining rows.
    Ally,
}

/// Pixel geometry of the hex grid.
///
/// Hexes are laid out in offset rows: even rows are pushed right by half a
/// hex, and rows overlap vertically by `row_pitch`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    /// Width of one hex in pixels.
    pub hex_width: f32,
    /// Height of one hex in pixels.
    pub hex_height: f32,
    /// Vertical distance between rows as a fraction of `hex_height`.
    pub row_pitch: f32,
}

impl Default for HexLayout {
    fn default() -> Self {
        Self {
            hex_width: 60.0,
            hex_height: 52.0,
            row_pitch: 0.82,
        }
    }
}

impl HexLayout {
    /// Top-left pixel position of a cell.
    ///
    /// ```
    /// use synergy_board::core::{CellCoord, HexLayout};
    ///
    /// let layout = HexLayout::default();
    /// assert_eq!(layout.origin(CellCoord::new(0, 0)), (30.0, 0.0));
    /// assert_eq!(layout.origin(CellCoord::new(1, 2)).0, 120.0);
    /// ```
    #[must_use]
    pub fn origin(&self, coord: CellCoord) -> (f32, f32) {
        let shift = if coord.row % 2 == 0 {
            self.hex_width / 2.0
        } else {
            0.0
        };
        let x = coord.col as f32 * self.hex_width + shift;
        let y = coord.row as f32 * (self.hex_height * self.row_pitch);
        (x, y)
    }
}

/// Complete board configuration.
///
/// Deserialized configurations are validated like the constructors:
/// non-zero dimensions and no more enemy rows than rows.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardConfigData")]
pub struct BoardConfig {
    /// Number of rows (1+).
    pub rows: usize,

    /// Number of columns (1+).
    pub cols: usize,

    /// Leading rows that belong to the enemy side.
    pub enemy_rows: usize,

    /// Pixel geometry.
    pub layout: HexLayout,
}

/// Unvalidated wire form of `BoardConfig`.
#[derive(Deserialize)]
struct BoardConfigData {
    rows: usize,
    cols: usize,
    enemy_rows: usize,
    #[serde(default)]
    layout: HexLayout,
}

impl TryFrom<BoardConfigData> for BoardConfig {
    type Error = BoardError;

    fn try_from(data: BoardConfigData) -> BoardResult<Self> {
        let config = Self {
            rows: data.rows,
            cols: data.cols,
            enemy_rows: data.enemy_rows,
            layout: data.layout,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(8, 5)
    }
}

impl BoardConfig {
    /// Create a configuration with the given dimensions.
    ///
    /// The enemy side defaults to the top half of the rows.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "Board must have at least 1 row");
        assert!(cols > 0, "Board must have at least 1 column");

        Self {
            rows,
            cols,
            enemy_rows: rows / 2,
            layout: HexLayout::default(),
        }
    }

    /// Set how many leading rows are the enemy side.
    #[must_use]
    pub fn with_enemy_rows(mut self, enemy_rows: usize) -> Self {
        assert!(
            enemy_rows <= self.rows,
            "Enemy rows ({}) exceed board rows ({})",
            enemy_rows,
            self.rows
        );
        self.enemy_rows = enemy_rows;
        self
    }

    /// Set the pixel geometry.
    #[must_use]
    pub fn with_layout(mut self, layout: HexLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Check the dimension invariants the constructors assert.
    pub fn validate(&self) -> BoardResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.enemy_rows > self.rows {
            return Err(BoardError::TooManyEnemyRows {
                enemy_rows: self.enemy_rows,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check if a coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Validate a coordinate, returning `OutOfBounds` if it is off the board.
    pub fn check(&self, coord: CellCoord) -> BoardResult<CellCoord> {
        if self.contains(coord) {
            Ok(coord)
        } else {
            Err(BoardError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Side of the board a cell belongs to.
    #[must_use]
    pub fn side(&self, coord: CellCoord) -> Side {
        if coord.row < self.enemy_rows {
            Side::Enemy
        } else {
            Side::Ally
        }
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = CellCoord> {
        CellCoord::all(self.rows, self.cols)
    }
}

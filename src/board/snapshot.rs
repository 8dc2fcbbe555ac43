//! Read-only views for presentation.
//!
//! A `BoardSnapshot` shares its cell vector with the board it came from
//! (`im::Vector` structural sharing), so taking one after every event is
//! cheap. Renderers draw from the snapshot alone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::tally::TraitCounts;
use crate::cards::Card;
use crate::core::config::{BoardConfig, Side};
use crate::core::coord::CellCoord;

/// Frozen copy of a board's visible state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub config: BoardConfig,
    pub cells: Vector<Cell>,
    pub selection: Option<String>,
    pub trait_counts: TraitCounts,
}

impl BoardSnapshot {
    /// Cell at a coordinate, or `None` if off the board.
    #[must_use]
    pub fn cell(&self, coord: CellCoord) -> Option<&Cell> {
        if !self.config.contains(coord) {
            return None;
        }
        self.cells.get(coord.index(self.config.cols))
    }

    /// Every cell with its coordinate, side and pixel origin, row-major.
    pub fn hexes(&self) -> impl Iterator<Item = HexView<'_>> + '_ {
        self.config.coords().zip(self.cells.iter()).map(move |(coord, cell)| HexView {
            coord,
            side: self.config.side(coord),
            origin: self.config.layout.origin(coord),
            cell,
        })
    }
}

/// One hex as a renderer needs it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexView<'a> {
    pub coord: CellCoord,
    pub side: Side,
    pub origin: (f32, f32),
    pub cell: &'a Cell,
}

/// One card of the pool with its derived highlight state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolEntry<'a> {
    pub card: &'a Card,
    pub selected: bool,
}

//! Board cells.

use serde::{Deserialize, Serialize};

/// Content of one board cell.
///
/// `Occupied` holds the display name of a catalog card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(String),
}

impl Cell {
    /// Check if the cell holds a card.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// Check if the cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Display name of the card in the cell, if any.
    #[must_use]
    pub fn card_name(&self) -> Option<&str> {
        match self {
            Cell::Occupied(name) => Some(name),
            Cell::Empty => None,
        }
    }
}

/// Outcome of a placement.
///
/// `Rejected` means the target cell was already occupied and nothing changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum Placement {
    Placed,
    Rejected,
}

impl Placement {
    /// Check if the card was placed.
    #[must_use]
    pub fn is_placed(self) -> bool {
        self == Placement::Placed
    }
}

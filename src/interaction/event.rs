//! Pointer gestures and their outcomes.
//!
//! Presentation code translates raw DOM-style events into `BoardEvent`s.
//! A drag is two events: a drag start that yields a `DragPayload`, and a
//! drop that hands the payload back.

use serde::{Deserialize, Serialize};

use crate::core::coord::CellCoord;

/// Where a drag started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragSource {
    /// Dragged from the card pool.
    Pool,
    /// Dragged out of a board cell (already removed from it).
    Cell(CellCoord),
}

/// Data carried from a drag start to its drop.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragPayload {
    /// Display name of the dragged card.
    pub card_name: String,
    pub source: DragSource,
}

impl DragPayload {
    /// Payload for a card dragged from the pool.
    pub fn from_pool(card_name: impl Into<String>) -> Self {
        Self {
            card_name: card_name.into(),
            source: DragSource::Pool,
        }
    }

    /// Payload for a card dragged out of a cell.
    pub fn from_cell(card_name: impl Into<String>, coord: CellCoord) -> Self {
        Self {
            card_name: card_name.into(),
            source: DragSource::Cell(coord),
        }
    }
}

/// A user gesture on the board or the pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// Click on a pool card.
    PoolClick(String),
    /// Drag started on a pool card.
    PoolDragStart(String),
    /// Click on a board cell.
    CellClick(CellCoord),
    /// Drag started on a board cell.
    CellDragStart(CellCoord),
    /// Payload dropped onto a board cell.
    Drop(CellCoord, DragPayload),
    /// The clear-board button.
    ClearBoard,
}

/// What an event did to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOutcome {
    /// A pool card became the selection.
    Selected(String),
    /// The selection was cleared.
    Deselected,
    /// A card was placed into a cell.
    Placed { coord: CellCoord, card_name: String },
    /// A card was removed from a cell.
    Removed { coord: CellCoord, card_name: String },
    /// A drag began; hand the payload back with the drop.
    DragStarted(DragPayload),
    /// Drag start on an empty cell; nothing to drag.
    DragCancelled,
    /// Drop onto an occupied cell; the payload is discarded.
    DropRejected(DragPayload),
    /// Every cell was emptied.
    Cleared,
    /// The event had no effect.
    Ignored,
}

impl EventOutcome {
    /// Check if the event changed cells or trait counts.
    #[must_use]
    pub fn changes_board(&self) -> bool {
        matches!(
            self,
            EventOutcome::Placed { .. }
                | EventOutcome::Removed { .. }
                | EventOutcome::Cleared
                | EventOutcome::DragStarted(DragPayload {
                    source: DragSource::Cell(_),
                    ..
                })
        )
    }
}

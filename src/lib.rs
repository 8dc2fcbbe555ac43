//! # synergy-board
//!
//! Board editor model for an auto-battler card pool: place cards on a hex
//! grid and keep a live tally of the trait synergies on the board.
//!
//! ## Design Principles
//!
//! 1. **No Hidden State**: The board is a `BoardState` value the caller owns
//!    and passes around. There is no global game instance.
//!
//! 2. **Logic in the Model**: Trait counting lives only in `BoardState`.
//!    Event handlers in `interaction` route gestures and nothing else.
//!
//! 3. **One Source of Truth**: The selection and the cells are stored once.
//!    Highlighted pool cards and occupied hexes are derived from snapshots.
//!
//! ## Invariant
//!
//! For every trait, the tally equals the number of occupied cells whose
//! card carries that trait, after every operation.
//!
//! ## Modules
//!
//! - `core`: Cell coordinates, board configuration, hex layout, errors
//! - `cards`: Traits, card definitions, the card catalog
//! - `board`: Cells, trait tally, board state, snapshots
//! - `interaction`: Click/drag/drop events dispatched onto the board
//!
//! ## Example
//!
//! ```
//! use synergy_board::{BoardState, CellCoord};
//!
//! let mut board = BoardState::with_builtin_catalog();
//! board.select_card("騎士");
//! assert!(board.place_selected(CellCoord::new(4, 2)).is_placed());
//!
//! assert_eq!(board.current_trait_counts().to_string(), "貴族 x 1\n坦克 x 1");
//! ```

pub mod core;
pub mod cards;
pub mod board;
pub mod interaction;

// Re-export commonly used types
pub use crate::core::{BoardConfig, BoardError, BoardResult, CellCoord, HexLayout, Side};

pub use crate::cards::{Card, CardCatalog, Trait, TraitKey};

pub use crate::board::{
    BoardSnapshot, BoardState, Cell, Placement, PoolEntry, TraitCount, TraitCounts,
};

pub use crate::interaction::{dispatch, BoardEvent, DragPayload, DragSource, EventOutcome};

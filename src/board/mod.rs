//! Board state model.
//!
//! ## Key Types
//!
//! - `Cell`: Empty or holding one card reference
//! - `Placement`: Outcome of a place attempt
//! - `TraitTally` / `TraitCounts`: Running synergy counters and their snapshot
//! - `BoardState`: Cells, selection and tally behind one API
//! - `BoardSnapshot`: Cheap frozen view for rendering

pub mod cell;
pub mod snapshot;
pub mod state;
pub mod tally;

pub use cell::{Cell, Placement};
pub use snapshot::{BoardSnapshot, HexView, PoolEntry};
pub use state::BoardState;
pub use tally::{TraitCount, TraitCounts, TraitTally};

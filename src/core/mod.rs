//! Core types: cell coordinates, board configuration, errors.
//!
//! Everything here is plain data shared by the card catalog, the board
//! model and the interaction layer.

pub mod config;
pub mod coord;
pub mod error;

pub use config::{BoardConfig, HexLayout, Side};
pub use coord::CellCoord;
pub use error::{BoardError, BoardResult};

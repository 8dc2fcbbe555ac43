//! Error types.
//!
//! `BoardError` covers invalid references (a card name that is not in the
//! catalog, a coordinate outside the grid) and invalid input data (a
//! malformed catalog or board configuration). The unchecked operations
//! panic with the error's message; the `try_*` forms and deserialization
//! return it.
//!
//! Rejected actions (placing on an occupied cell, removing from an empty
//! one) are normal outcomes and never produce a `BoardError`.

use thiserror::Error;

/// Invalid reference passed to the catalog or the board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Card name not present in the catalog.
    #[error("unknown card {name:?}: not in catalog")]
    UnknownCard {
        /// The name that failed to resolve.
        name: String,
    },

    /// Coordinate outside the grid.
    #[error("cell ({row}, {col}) out of bounds for {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Two catalog cards share a display name.
    #[error("card {name:?} already in catalog")]
    DuplicateCard { name: String },

    /// Catalog card without traits.
    #[error("card {name:?} has no traits")]
    EmptyTraits { name: String },

    /// Catalog card listing one trait more than once.
    #[error("card {name:?} lists trait {key:?} twice")]
    DuplicateTrait { name: String, key: String },

    /// Board dimensions that cannot hold a cell.
    #[error("board must have at least 1 row and 1 column, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },

    /// More enemy rows than board rows.
    #[error("enemy rows ({enemy_rows}) exceed board rows ({rows})")]
    TooManyEnemyRows { enemy_rows: usize, rows: usize },
}

impl BoardError {
    /// Create an `UnknownCard` error.
    pub fn unknown_card(name: impl Into<String>) -> Self {
        Self::UnknownCard { name: name.into() }
    }
}

/// Result alias for checked board operations.
pub type BoardResult<T> = Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_card_message() {
        let err = BoardError::unknown_card("wizard");
        assert_eq!(err.to_string(), "unknown card \"wizard\": not in catalog");
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = BoardError::OutOfBounds {
            row: 8,
            col: 0,
            rows: 8,
            cols: 5,
        };
        assert_eq!(err.to_string(), "cell (8, 0) out of bounds for 8x5 board");
    }

    #[test]
    fn test_catalog_error_messages() {
        let err = BoardError::DuplicateTrait {
            name: "knight".into(),
            key: "Noble".into(),
        };
        assert_eq!(err.to_string(), "card \"knight\" lists trait \"Noble\" twice");

        let err = BoardError::DuplicateCard { name: "x".into() };
        assert_eq!(err.to_string(), "card \"x\" already in catalog");
    }
}

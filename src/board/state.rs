//! Board state: cells, selection, and the trait tally.
//!
//! `BoardState` is the single owner of everything that changes while the
//! board is edited. Presentation code holds it explicitly and re-derives all
//! visual state (occupied hexes, highlighted pool card, synergy text) from
//! it after each operation.
//!
//! ## Invariant
//!
//! For every trait label `T`, the tally equals the number of occupied cells
//! whose card carries `T`. Every mutation path (`place`, `remove`,
//! `clear_all`, and the selection-driven `place_selected`) preserves it.
//!
//! ## Failure Semantics
//!
//! - Out-of-range coordinates and unknown card names are caller bugs: the
//!   plain operations panic, the `try_*` forms return `BoardError`.
//! - Placing onto an occupied cell or removing from an empty one is a
//!   normal rejection and leaves the state untouched.

use im::Vector;
use log::{debug, trace, warn};
use rustc_hash::{FxHashMap, FxHashSet};

use super::cell::{Cell, Placement};
use super::snapshot::{BoardSnapshot, PoolEntry};
use super::tally::{TraitCounts, TraitTally};
use crate::cards::CardCatalog;
use crate::core::config::BoardConfig;
use crate::core::coord::CellCoord;
use crate::core::error::BoardResult;

/// Editable board model.
///
/// ## Example
///
/// ```
/// use synergy_board::board::BoardState;
/// use synergy_board::cards::{Card, CardCatalog, Trait};
/// use synergy_board::core::{BoardConfig, CellCoord};
///
/// let catalog = CardCatalog::from_cards(vec![Card::new("knight", "knight")
///     .with_trait(Trait::new("Noble", "Noble"))
///     .with_trait(Trait::new("Juggernaut", "Juggernaut"))]);
/// let mut board = BoardState::new(BoardConfig::default(), catalog);
///
/// assert!(board.place(CellCoord::new(0, 0), "knight").is_placed());
/// assert!(!board.place(CellCoord::new(0, 0), "knight").is_placed());
/// assert_eq!(board.current_trait_counts().get("Noble"), 1);
///
/// assert_eq!(board.remove(CellCoord::new(0, 0)).as_deref(), Some("knight"));
/// assert!(board.current_trait_counts().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct BoardState {
    config: BoardConfig,
    catalog: CardCatalog,
    cells: Vector<Cell>,
    tally: TraitTally,
    selection: Option<String>,
}

impl BoardState {
    /// Create an empty board.
    #[must_use]
    pub fn new(config: BoardConfig, catalog: CardCatalog) -> Self {
        Self {
            cells: empty_cells(config.cell_count()),
            config,
            catalog,
            tally: TraitTally::new(),
            selection: None,
        }
    }

    /// Create the standard 8×5 board over the built-in catalog.
    #[must_use]
    pub fn with_builtin_catalog() -> Self {
        Self::new(BoardConfig::default(), CardCatalog::builtin())
    }

    /// Board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Card pool the board draws from.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    fn index_of(&self, coord: CellCoord) -> BoardResult<usize> {
        self.config.check(coord).map(|c| c.index(self.config.cols))
    }

    // === Cells ===

    /// Get a cell, panicking if the coordinate is off the board.
    #[must_use]
    pub fn cell(&self, coord: CellCoord) -> &Cell {
        match self.try_cell(coord) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }

    /// Get a cell.
    pub fn try_cell(&self, coord: CellCoord) -> BoardResult<&Cell> {
        let index = self.index_of(coord)?;
        Ok(&self.cells[index])
    }

    /// Iterate over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (CellCoord, &str)> + '_ {
        let cols = self.config.cols;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.card_name().map(|name| (CellCoord::from_index(i, cols), name))
        })
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Check if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    // === Mutations ===

    /// Place a card into a cell.
    ///
    /// Panics on an unknown card or an off-board coordinate.
    pub fn place(&mut self, coord: CellCoord, name: &str) -> Placement {
        match self.try_place(coord, name) {
            Ok(placement) => placement,
            Err(err) => panic!("{err}"),
        }
    }

    /// Place a card into a cell.
    ///
    /// Returns `Placement::Rejected` without touching any state if the cell
    /// is occupied.
    pub fn try_place(&mut self, coord: CellCoord, name: &str) -> BoardResult<Placement> {
        let index = self.index_of(coord)?;
        let card = self.catalog.try_resolve(name)?;

        if self.cells[index].is_occupied() {
            debug!("place {} at {} rejected: cell occupied", name, coord);
            return Ok(Placement::Rejected);
        }

        for tag in &card.traits {
            self.tally.increment(&tag.label);
        }
        self.cells.set(index, Cell::Occupied(card.display_name.clone()));
        debug!("placed {} at {}", name, coord);

        Ok(Placement::Placed)
    }

    /// Remove the card in a cell.
    ///
    /// Returns the removed card's name, or `None` if the cell was empty.
    /// Panics on an off-board coordinate.
    pub fn remove(&mut self, coord: CellCoord) -> Option<String> {
        match self.try_remove(coord) {
            Ok(removed) => removed,
            Err(err) => panic!("{err}"),
        }
    }

    /// Remove the card in a cell.
    pub fn try_remove(&mut self, coord: CellCoord) -> BoardResult<Option<String>> {
        let index = self.index_of(coord)?;

        let name = match self.cells.set(index, Cell::Empty) {
            Cell::Occupied(name) => name,
            Cell::Empty => {
                debug!("remove at {} rejected: cell empty", coord);
                return Ok(None);
            }
        };

        // Occupied cells only ever hold names resolved on placement.
        let card = self.catalog.resolve(&name);
        for tag in &card.traits {
            if !self.tally.decrement(&tag.label) {
                warn!(
                    "trait {} already at zero while removing {} from {}",
                    tag.label, name, coord
                );
            }
        }
        debug!("removed {} from {}", name, coord);

        Ok(Some(name))
    }

    /// Empty every cell and zero every trait count.
    ///
    /// The selection is left as is.
    pub fn clear_all(&mut self) {
        let cleared = self.occupied_count();
        self.cells = empty_cells(self.config.cell_count());
        self.tally.reset();
        debug!("cleared board ({} cards removed)", cleared);
    }

    // === Selection ===

    /// Pending card, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Select a card, replacing any previous selection.
    ///
    /// Panics if the card is not in the catalog.
    pub fn select_card(&mut self, name: &str) {
        if let Err(err) = self.try_select_card(name) {
            panic!("{err}");
        }
    }

    /// Select a card, replacing any previous selection.
    pub fn try_select_card(&mut self, name: &str) -> BoardResult<()> {
        let card = self.catalog.try_resolve(name)?;
        trace!("selected {} (was {:?})", name, self.selection);
        self.selection = Some(card.display_name.clone());
        Ok(())
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        if let Some(previous) = self.selection.take() {
            trace!("cleared selection {}", previous);
        }
    }

    /// Select a card, or clear the selection if it is already selected.
    ///
    /// Returns `true` if the card is selected afterwards.
    pub fn toggle_selection(&mut self, name: &str) -> bool {
        if self.selection() == Some(name) {
            self.clear_selection();
            false
        } else {
            self.select_card(name);
            true
        }
    }

    /// Place the selected card into a cell.
    ///
    /// On success the selection is consumed. With no selection, or onto an
    /// occupied cell, nothing changes and the selection is kept.
    pub fn place_selected(&mut self, coord: CellCoord) -> Placement {
        let Some(name) = self.selection.clone() else {
            if let Err(err) = self.index_of(coord) {
                panic!("{err}");
            }
            return Placement::Rejected;
        };

        let placement = self.place(coord, &name);
        if placement.is_placed() {
            self.clear_selection();
        }
        placement
    }

    // === Views ===

    /// Active trait counts (count > 0 only).
    #[must_use]
    pub fn current_trait_counts(&self) -> TraitCounts {
        self.tally.active()
    }

    /// Recompute trait counts from the cells, ignoring the running tally.
    ///
    /// Each occupied cell adds one to every distinct trait its card carries.
    ///
    /// Always equal to [`TraitCounts::to_map`] of
    /// [`current_trait_counts`](Self::current_trait_counts).
    #[must_use]
    pub fn recount_traits(&self) -> FxHashMap<String, u32> {
        let mut counts = FxHashMap::default();
        for (_, name) in self.occupied() {
            let labels: FxHashSet<&str> = self.catalog.resolve(name).trait_labels().collect();
            for label in labels {
                *counts.entry(label.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Catalog cards with their selected flag, in pool order.
    pub fn pool_view(&self) -> impl Iterator<Item = PoolEntry<'_>> + '_ {
        let selected = self.selection();
        self.catalog.iter().map(move |card| PoolEntry {
            card,
            selected: selected == Some(card.display_name.as_str()),
        })
    }

    /// Cheap copy of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            config: self.config,
            cells: self.cells.clone(),
            selection: self.selection.clone(),
            trait_counts: self.tally.active(),
        }
    }
}

fn empty_cells(count: usize) -> Vector<Cell> {
    (0..count).map(|_| Cell::Empty).collect()
}

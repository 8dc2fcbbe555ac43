//! Event dispatch.
//!
//! `dispatch` routes each `BoardEvent` to `BoardState` operations. It holds
//! no counting logic of its own; every trait update happens inside the
//! board.
//!
//! ## Gesture Rules
//!
//! - Pool click toggles the selection on that card.
//! - Cell click removes an occupied cell's card, otherwise places the
//!   pending selection (if any).
//! - Dragging a card out of a cell removes it immediately.
//! - A drop places the payload into an empty cell. Onto an occupied cell
//!   it is rejected and the payload is dropped, so a card dragged off the
//!   board that way is gone.

use log::trace;

use super::event::{BoardEvent, DragPayload, EventOutcome};
use crate::board::BoardState;
use crate::core::coord::CellCoord;

/// Apply one event to the board.
///
/// Panics on invalid references (unknown card names, off-board cells), like
/// the board operations it calls.
pub fn dispatch(board: &mut BoardState, event: BoardEvent) -> EventOutcome {
    trace!("dispatch {:?}", event);

    match event {
        BoardEvent::PoolClick(name) => pool_click(board, &name),
        BoardEvent::PoolDragStart(name) => {
            // Resolve up front so a bad name fails at the gesture, not the drop.
            let card = board.catalog().resolve(&name);
            EventOutcome::DragStarted(DragPayload::from_pool(card.display_name.clone()))
        }
        BoardEvent::CellClick(coord) => cell_click(board, coord),
        BoardEvent::CellDragStart(coord) => match board.remove(coord) {
            Some(card_name) => EventOutcome::DragStarted(DragPayload::from_cell(card_name, coord)),
            None => EventOutcome::DragCancelled,
        },
        BoardEvent::Drop(coord, payload) => {
            if board.place(coord, &payload.card_name).is_placed() {
                EventOutcome::Placed {
                    coord,
                    card_name: payload.card_name,
                }
            } else {
                EventOutcome::DropRejected(payload)
            }
        }
        BoardEvent::ClearBoard => {
            board.clear_all();
            EventOutcome::Cleared
        }
    }
}

fn pool_click(board: &mut BoardState, name: &str) -> EventOutcome {
    if board.toggle_selection(name) {
        EventOutcome::Selected(name.to_string())
    } else {
        EventOutcome::Deselected
    }
}

fn cell_click(board: &mut BoardState, coord: CellCoord) -> EventOutcome {
    if let Some(card_name) = board.remove(coord) {
        return EventOutcome::Removed { coord, card_name };
    }

    let Some(card_name) = board.selection().map(str::to_string) else {
        return EventOutcome::Ignored;
    };
    if board.place_selected(coord).is_placed() {
        EventOutcome::Placed { coord, card_name }
    } else {
        EventOutcome::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn at(row: usize, col: usize) -> CellCoord {
        CellCoord::new(row, col)
    }

    #[test]
    fn test_pool_click_toggles() {
        let mut board = BoardState::with_builtin_catalog();

        let outcome = dispatch(&mut board, BoardEvent::PoolClick("弓箭手".into()));
        assert_eq!(outcome, EventOutcome::Selected("弓箭手".into()));
        assert_eq!(board.selection(), Some("弓箭手"));

        let outcome = dispatch(&mut board, BoardEvent::PoolClick("弓箭手".into()));
        assert_eq!(outcome, EventOutcome::Deselected);
        assert_eq!(board.selection(), None);
    }

    #[test]
    fn test_cell_click_without_selection_is_ignored() {
        let mut board = BoardState::with_builtin_catalog();
        let outcome = dispatch(&mut board, BoardEvent::CellClick(at(0, 0)));
        assert_eq!(outcome, EventOutcome::Ignored);
        assert!(board.is_empty());
    }

    #[test]
    fn test_cell_click_places_then_removes() {
        let mut board = BoardState::with_builtin_catalog();
        dispatch(&mut board, BoardEvent::PoolClick("騎士".into()));

        let outcome = dispatch(&mut board, BoardEvent::CellClick(at(2, 3)));
        assert_eq!(
            outcome,
            EventOutcome::Placed {
                coord: at(2, 3),
                card_name: "騎士".into()
            }
        );
        assert_eq!(board.selection(), None);
        assert_eq!(board.current_trait_counts().get("坦克"), 1);

        let outcome = dispatch(&mut board, BoardEvent::CellClick(at(2, 3)));
        assert_eq!(
            outcome,
            EventOutcome::Removed {
                coord: at(2, 3),
                card_name: "騎士".into()
            }
        );
        assert!(board.current_trait_counts().is_empty());
    }

    #[test]
    fn test_cell_click_on_occupied_removes_even_with_selection() {
        let mut board = BoardState::with_builtin_catalog();
        let _ = board.place(at(0, 0), "王子");
        board.select_card("公主");

        let outcome = dispatch(&mut board, BoardEvent::CellClick(at(0, 0)));
        assert!(matches!(outcome, EventOutcome::Removed { .. }));
        assert_eq!(board.selection(), Some("公主"));
        assert_eq!(board.cell(at(0, 0)), &Cell::Empty);
    }

    #[test]
    fn test_drag_from_empty_cell_is_cancelled() {
        let mut board = BoardState::with_builtin_catalog();
        let outcome = dispatch(&mut board, BoardEvent::CellDragStart(at(4, 4)));
        assert_eq!(outcome, EventOutcome::DragCancelled);
    }

    #[test]
    fn test_drop_on_occupied_is_rejected() {
        let mut board = BoardState::with_builtin_catalog();
        let _ = board.place(at(1, 1), "炸彈兵");

        let payload = DragPayload::from_pool("哥布林");
        let outcome = dispatch(&mut board, BoardEvent::Drop(at(1, 1), payload.clone()));
        assert_eq!(outcome, EventOutcome::DropRejected(payload));
        assert_eq!(board.current_trait_counts().get("哥布林"), 0);
    }

    #[test]
    fn test_clear_board() {
        let mut board = BoardState::with_builtin_catalog();
        let _ = board.place(at(1, 1), "炸彈兵");
        assert_eq!(dispatch(&mut board, BoardEvent::ClearBoard), EventOutcome::Cleared);
        assert!(board.is_empty());
    }

    #[test]
    #[should_panic(expected = "unknown card")]
    fn test_pool_drag_unknown_card_panics() {
        let mut board = BoardState::with_builtin_catalog();
        dispatch(&mut board, BoardEvent::PoolDragStart("wizard".into()));
    }
}

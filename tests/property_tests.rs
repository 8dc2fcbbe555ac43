//! Property tests for the trait-count invariant.
//!
//! Random operation sequences over the built-in catalog; after every step
//! the running tally must equal a from-scratch recount of the cells.

use proptest::prelude::*;

use synergy_board::{dispatch, BoardEvent, BoardState, CardCatalog, CellCoord, EventOutcome};

const ROWS: usize = 8;
const COLS: usize = 5;

#[derive(Clone, Debug)]
enum Op {
    Place(CellCoord, usize),
    Remove(CellCoord),
    Select(usize),
    PlaceSelected(CellCoord),
    Drag(CellCoord, CellCoord),
    Clear,
}

fn coord() -> impl Strategy<Value = CellCoord> {
    (0..ROWS, 0..COLS).prop_map(|(r, c)| CellCoord::new(r, c))
}

fn op() -> impl Strategy<Value = Op> {
    let cards = CardCatalog::builtin().len();
    prop_oneof![
        6 => (coord(), 0..cards).prop_map(|(c, i)| Op::Place(c, i)),
        4 => coord().prop_map(Op::Remove),
        2 => (0..cards).prop_map(Op::Select),
        2 => coord().prop_map(Op::PlaceSelected),
        2 => (coord(), coord()).prop_map(|(a, b)| Op::Drag(a, b)),
        1 => Just(Op::Clear),
    ]
}

fn apply(board: &mut BoardState, names: &[String], op: &Op) {
    match op {
        Op::Place(c, i) => {
            let _ = board.place(*c, &names[*i]);
        }
        Op::Remove(c) => {
            let _ = board.remove(*c);
        }
        Op::Select(i) => board.select_card(&names[*i]),
        Op::PlaceSelected(c) => {
            let _ = board.place_selected(*c);
        }
        Op::Drag(from, to) => {
            if let EventOutcome::DragStarted(payload) =
                dispatch(board, BoardEvent::CellDragStart(*from))
            {
                dispatch(board, BoardEvent::Drop(*to, payload));
            }
        }
        Op::Clear => board.clear_all(),
    }
}

fn names() -> Vec<String> {
    CardCatalog::builtin()
        .iter()
        .map(|c| c.display_name.clone())
        .collect()
}

proptest! {
    #[test]
    fn prop_tally_matches_recount(ops in prop::collection::vec(op(), 0..80)) {
        let names = names();
        let mut board = BoardState::with_builtin_catalog();

        for op in &ops {
            apply(&mut board, &names, op);
            prop_assert_eq!(board.recount_traits(), board.current_trait_counts().to_map());
            prop_assert!(board.current_trait_counts().iter().all(|e| e.count > 0));
        }
    }

    #[test]
    fn prop_place_remove_round_trip(
        ops in prop::collection::vec(op(), 0..40),
        target in coord(),
        card in 0..17usize,
    ) {
        let names = names();
        let mut board = BoardState::with_builtin_catalog();
        for op in &ops {
            apply(&mut board, &names, op);
        }
        let _ = board.remove(target);
        let before = board.current_trait_counts();

        prop_assert!(board.place(target, &names[card]).is_placed());
        prop_assert_eq!(board.remove(target), Some(names[card].clone()));
        prop_assert_eq!(board.current_trait_counts(), before);
    }

    #[test]
    fn prop_rejections_are_noops(ops in prop::collection::vec(op(), 1..40), target in coord()) {
        let names = names();
        let mut board = BoardState::with_builtin_catalog();
        for op in &ops {
            apply(&mut board, &names, op);
        }

        let before = board.snapshot();
        if board.cell(target).is_occupied() {
            prop_assert!(!board.place(target, &names[0]).is_placed());
        } else {
            prop_assert_eq!(board.remove(target), None);
        }
        prop_assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn prop_clear_all_empties(ops in prop::collection::vec(op(), 0..60)) {
        let names = names();
        let mut board = BoardState::with_builtin_catalog();
        for op in &ops {
            apply(&mut board, &names, op);
        }

        board.clear_all();
        prop_assert!(board.current_trait_counts().is_empty());
        prop_assert_eq!(board.occupied_count(), 0);
    }
}

use minibattleship::{
    Board, BoardError, CellView, Occupancy, ShipId, BOARD_SIZE, SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn ship_cells(board: &Board, id: ShipId) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if board.occupancy(r, c) == Occupancy::Ship(id) {
                cells.push((r, c));
            }
        }
    }
    cells
}

#[test]
fn test_new_board_is_empty_and_hidden() {
    let board = Board::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            assert_eq!(board.occupancy(r, c), Occupancy::Empty);
            assert_eq!(board.cell_view(r, c), CellView::Hidden);
        }
    }
}

#[test]
fn test_manual_place() {
    let mut board = Board::new();
    board.place(SHIPS[0], 1, 0).unwrap();
    board.place(SHIPS[1], 2, 3).unwrap();
    assert_eq!(ship_cells(&board, ShipId::First), vec![(1, 0), (1, 1)]);
    assert_eq!(ship_cells(&board, ShipId::Second), vec![(2, 3), (3, 3)]);
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(
        board.place(SHIPS[0], 0, 3).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        board.place(SHIPS[1], 3, 0).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
}

#[test]
fn test_place_overlap_rejected() {
    let mut board = Board::new();
    board.place(SHIPS[0], 1, 1).unwrap();
    // vertical ship crossing the horizontal one at (1, 2)
    assert_eq!(
        board.place(SHIPS[1], 0, 2).unwrap_err(),
        BoardError::ShipOverlaps
    );
    // a free column is fine
    board.place(SHIPS[1], 0, 0).unwrap();
}

#[test]
fn test_place_twice_rejected() {
    let mut board = Board::new();
    board.place(SHIPS[0], 0, 0).unwrap();
    assert_eq!(
        board.place(SHIPS[0], 3, 0).unwrap_err(),
        BoardError::ShipAlreadyPlaced
    );
}

#[test]
fn test_can_place_fixed_candidates() {
    let mut board = Board::new();
    assert!(board.can_place(SHIPS[1], 0, 0));
    board.place(SHIPS[0], 0, 0).unwrap();
    // (0,0) and (0,1) now occupied
    assert!(!board.can_place(SHIPS[1], 0, 0));
    assert!(!board.can_place(SHIPS[1], 0, 1));
    assert!(board.can_place(SHIPS[1], 1, 0));
    assert!(board.can_place(SHIPS[1], 0, 2));
    // out of bounds is never placeable
    assert!(!board.can_place(SHIPS[1], 3, 0));
    assert!(!board.can_place(SHIPS[0], 2, 3));
}

#[test]
fn test_place_random_invariants() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.place_random(&mut rng).unwrap();

    let first = ship_cells(&board, ShipId::First);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].0, first[1].0, "first ship lies in one row");
    assert_eq!(first[1].1, first[0].1 + 1, "first ship cells are adjacent");

    let second = ship_cells(&board, ShipId::Second);
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].1, second[1].1, "second ship lies in one column");
    assert_eq!(second[1].0, second[0].0 + 1, "second ship cells are adjacent");
}

#[test]
fn test_uncover_transitions() {
    let mut board = Board::new();
    board.place(SHIPS[0], 0, 0).unwrap();

    assert_eq!(board.uncover(2, 2), Some(CellView::Water));
    assert_eq!(board.cell_view(2, 2), CellView::Water);

    assert_eq!(board.uncover(0, 0), Some(CellView::Hit(ShipId::First)));
    assert_eq!(board.cell_view(0, 0), CellView::Hit(ShipId::First));

    // second uncover of the same cell is a no-op
    assert_eq!(board.uncover(2, 2), None);
    assert_eq!(board.uncover(0, 0), None);
    assert_eq!(board.cell_view(0, 0), CellView::Hit(ShipId::First));
}

#[test]
fn test_uncover_never_leaks_occupancy() {
    let mut board = Board::new();
    board.place(SHIPS[0], 3, 2).unwrap();
    board.place(SHIPS[1], 0, 0).unwrap();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            assert_eq!(board.cell_view(r, c), CellView::Hidden);
        }
    }
}

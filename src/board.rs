//! Game board state: occupancy ground truth and the revealed overlay.

use crate::common::{BoardError, CellView, Occupancy};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, SHIPS, SHIP_LEN};
use crate::ship::ShipSpec;
use rand::Rng;

type Grid<T> = [[T; BOARD_SIZE]; BOARD_SIZE];

/// The board proper: what is where, and what the player has seen.
///
/// Occupancy is written only by the placement methods; `uncover` mutates the
/// revealed overlay one cell at a time and never touches occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    occupancy: Grid<Occupancy>,
    revealed: Grid<CellView>,
}

impl Board {
    /// Create an empty board: no ships placed, every cell hidden.
    pub fn new() -> Self {
        Board {
            occupancy: [[Occupancy::Empty; BOARD_SIZE]; BOARD_SIZE],
            revealed: [[CellView::Hidden; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Whether `spec` anchored at (`row`, `col`) fits on the board without
    /// touching an occupied cell. Pure read over the occupancy grid.
    pub fn can_place(&self, spec: ShipSpec, row: usize, col: usize) -> bool {
        match spec.cells(row, col) {
            Ok(cells) => cells
                .iter()
                .all(|&(r, c)| self.occupancy[r][c] == Occupancy::Empty),
            Err(_) => false,
        }
    }

    /// Place a ship at (`row`, `col`), anchored top-left.
    pub fn place(&mut self, spec: ShipSpec, row: usize, col: usize) -> Result<(), BoardError> {
        let tag = Occupancy::Ship(spec.id());
        if self.occupancy.iter().flatten().any(|&o| o == tag) {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let cells = spec.cells(row, col)?;
        if cells
            .iter()
            .any(|&(r, c)| self.occupancy[r][c] != Occupancy::Empty)
        {
            return Err(BoardError::ShipOverlaps);
        }
        for (r, c) in cells {
            self.occupancy[r][c] = tag;
        }
        Ok(())
    }

    /// Place both ships at random. Must run on an empty board.
    ///
    /// The first ship is drawn once and placed unconditionally: the board is
    /// empty, so any in-bounds horizontal slot is valid. The second ship is
    /// rejection-sampled until a free vertical pair turns up, capped at
    /// `MAX_PLACEMENT_ATTEMPTS`. Orientations are forced per ship, so the
    /// resulting distribution is uniform over (horizontal, vertical) pairs
    /// only; two same-orientation ships can never come up.
    pub fn place_random<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..=BOARD_SIZE - SHIP_LEN);
        self.place(SHIPS[0], row, col)?;

        let mut attempts = 0;
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Err(BoardError::UnableToPlaceShip);
            }
            let row = rng.random_range(0..=BOARD_SIZE - SHIP_LEN);
            let col = rng.random_range(0..BOARD_SIZE);
            if self.can_place(SHIPS[1], row, col) {
                return self.place(SHIPS[1], row, col);
            }
        }
    }

    /// Transition a cell from `Hidden` to its terminal value, taken from the
    /// occupancy ground truth. Returns `None` if the cell is already
    /// revealed, otherwise the new view.
    ///
    /// Panics if (`row`, `col`) is out of bounds; callers supply valid board
    /// coordinates.
    pub fn uncover(&mut self, row: usize, col: usize) -> Option<CellView> {
        if self.revealed[row][col].is_revealed() {
            return None;
        }
        let view = match self.occupancy[row][col] {
            Occupancy::Empty => CellView::Water,
            Occupancy::Ship(id) => CellView::Hit(id),
        };
        self.revealed[row][col] = view;
        Some(view)
    }

    /// Player-visible state of a cell. Never exposes raw occupancy.
    ///
    /// Panics if (`row`, `col`) is out of bounds.
    pub fn cell_view(&self, row: usize, col: usize) -> CellView {
        self.revealed[row][col]
    }

    /// Ground-truth contents of a cell. For placement checks and tests; the
    /// rendering layer must go through `cell_view`.
    pub fn occupancy(&self, row: usize, col: usize) -> Occupancy {
        self.occupancy[row][col]
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

//! Ship definitions: identity, orientation and cell expansion.

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, SHIP_LEN};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Which of the two ships a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipId {
    First,
    Second,
}

/// Static description of a ship: identity and forced orientation. The length
/// is the crate-wide `SHIP_LEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    id: ShipId,
    orientation: Orientation,
}

impl ShipSpec {
    pub const fn new(id: ShipId, orientation: Orientation) -> Self {
        Self { id, orientation }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Expand an origin into the cells the ship would cover, anchored at
    /// (`row`, `col`) and extending right or down per orientation.
    /// Errors if any covered cell falls outside the board.
    pub fn cells(&self, row: usize, col: usize) -> Result<[(usize, usize); SHIP_LEN], BoardError> {
        let fits = match self.orientation {
            Orientation::Horizontal => row < BOARD_SIZE && col + SHIP_LEN <= BOARD_SIZE,
            Orientation::Vertical => col < BOARD_SIZE && row + SHIP_LEN <= BOARD_SIZE,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(core::array::from_fn(|i| match self.orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_cells_extend_right() {
        let spec = ShipSpec::new(ShipId::First, Orientation::Horizontal);
        assert_eq!(spec.cells(2, 1).unwrap(), [(2, 1), (2, 2)]);
    }

    #[test]
    fn vertical_cells_extend_down() {
        let spec = ShipSpec::new(ShipId::Second, Orientation::Vertical);
        assert_eq!(spec.cells(0, 3).unwrap(), [(0, 3), (1, 3)]);
    }

    #[test]
    fn out_of_bounds_rejected() {
        let horizontal = ShipSpec::new(ShipId::First, Orientation::Horizontal);
        assert_eq!(horizontal.cells(0, 3).unwrap_err(), BoardError::ShipOutOfBounds);
        assert_eq!(horizontal.cells(4, 0).unwrap_err(), BoardError::ShipOutOfBounds);
        let vertical = ShipSpec::new(ShipId::Second, Orientation::Vertical);
        assert_eq!(vertical.cells(3, 0).unwrap_err(), BoardError::ShipOutOfBounds);
        assert_eq!(vertical.cells(0, 4).unwrap_err(), BoardError::ShipOutOfBounds);
    }
}

//! Common types for MiniBattleship: cell states, reveal results and board errors.

use crate::ship::ShipId;

/// Ground-truth contents of a cell, fixed at placement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Empty,
    Ship(ShipId),
}

/// Player-visible state of a cell. Each cell moves from `Hidden` to one of
/// the terminal values at most once per game and never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Water,
    Hit(ShipId),
}

impl CellView {
    /// Returns `true` for the terminal values, i.e. anything but `Hidden`.
    pub fn is_revealed(&self) -> bool {
        !matches!(self, CellView::Hidden)
    }
}

/// Outcome of a reveal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    /// Whether any state changed. `false` means the game was already won or
    /// the cell was already revealed.
    pub changed: bool,
    /// The cell's visible state after the call.
    pub cell: CellView,
    /// `true` exactly once, on the reveal that uncovers the last ship cell.
    pub won: bool,
    /// Count of state-changing reveals so far this game.
    pub moves: u32,
}

/// Errors returned by Board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Ship placement does not fit within the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Random placement exhausted its attempt budget without finding a slot.
    UnableToPlaceShip,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

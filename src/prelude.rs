//! Commonly used types and utilities for ease of import.

pub use crate::{Board, BoardError, CellView, GameEngine, GameStatus, Occupancy, Reveal, ShipId};

#[cfg(feature = "std")]
pub use crate::ui::{parse_coord, print_board};

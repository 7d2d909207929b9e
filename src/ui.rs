#![cfg(feature = "std")]

//! Rendering and input parsing for the CLI front end. Holds no game state;
//! everything it draws comes from `GameEngine::cell_view`.

use std::string::String;

use crate::{config::BOARD_SIZE, CellView, GameEngine, ShipId};

/// Glyph for a cell's visible state: hidden, water, or one of the two ships.
fn cell_glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '.',
        CellView::Water => '~',
        CellView::Hit(ShipId::First) => '1',
        CellView::Hit(ShipId::Second) => '2',
    }
}

/// Print the player's view of the board with coordinate headers.
pub fn print_board(engine: &GameEngine) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!();
    for r in 0..BOARD_SIZE {
        print!("{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            print!(" {}", cell_glyph(engine.cell_view(r, c)));
        }
        println!();
    }
}

/// Parse a coordinate like "B3" (column letter, 1-based row) into
/// zero-based (row, col). Returns `None` for anything off the board.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some((row - 1, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_coord_accepts_board_cells() {
        assert_eq!(parse_coord("A1"), Some((0, 0)));
        assert_eq!(parse_coord("d4"), Some((3, 3)));
        assert_eq!(parse_coord(" B3 "), Some((2, 1)));
    }

    #[test]
    fn parse_coord_rejects_off_board() {
        assert_eq!(parse_coord("E1"), None);
        assert_eq!(parse_coord("A5"), None);
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("A"), None);
        assert_eq!(parse_coord("11"), None);
        assert_eq!(parse_coord(""), None);
    }
}

//! Core game logic: session counters, reveal guards and win detection.

use crate::board::Board;
use crate::common::{BoardError, CellView, Reveal};
use crate::config::HITS_TO_WIN;
use rand::Rng;

/// Current status of a game. `Won` is absorbing: once entered, every further
/// reveal is a no-op until the next `new_game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
}

/// The board engine: owns the board and the per-session counters.
pub struct GameEngine {
    board: Board,
    moves: u32,
    hits: usize,
}

impl GameEngine {
    /// Create an engine over an empty board. Callers start a game with
    /// [`GameEngine::new_game`] before revealing anything.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            moves: 0,
            hits: 0,
        }
    }

    /// Wrap a freshly placed board with zeroed counters. Lets tests inject a
    /// known layout instead of a random one.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            moves: 0,
            hits: 0,
        }
    }

    /// Start a new game: fresh board, two random ships, counters zeroed.
    /// There is no partial reset; prior state is discarded wholesale.
    pub fn new_game<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let mut board = Board::new();
        board.place_random(rng)?;
        self.board = board;
        self.moves = 0;
        self.hits = 0;
        Ok(())
    }

    /// Reveal a cell. No-op when the game is already won or the cell was
    /// already revealed; otherwise uncovers the cell, advances `moves`, and
    /// on a ship cell advances `hits`. The returned `won` flag fires exactly
    /// once, on the reveal that finds the last ship cell.
    ///
    /// Panics if (`row`, `col`) is out of bounds; callers supply valid board
    /// coordinates.
    pub fn reveal(&mut self, row: usize, col: usize) -> Reveal {
        if self.hits >= HITS_TO_WIN {
            return self.no_op(row, col);
        }
        let Some(cell) = self.board.uncover(row, col) else {
            return self.no_op(row, col);
        };
        self.moves += 1;
        if matches!(cell, CellView::Hit(_)) {
            self.hits += 1;
        }
        Reveal {
            changed: true,
            cell,
            won: self.hits >= HITS_TO_WIN,
            moves: self.moves,
        }
    }

    fn no_op(&self, row: usize, col: usize) -> Reveal {
        Reveal {
            changed: false,
            cell: self.board.cell_view(row, col),
            won: false,
            moves: self.moves,
        }
    }

    /// Player-visible state of a cell; the sole read channel for rendering.
    pub fn cell_view(&self, row: usize, col: usize) -> CellView {
        self.board.cell_view(row, col)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.hits >= HITS_TO_WIN {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Count of state-changing reveals this game.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Count of ship cells revealed this game.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine::new()
    }
}

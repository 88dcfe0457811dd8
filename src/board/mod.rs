//! Board representation and game-state types.
//!
//! Contains the grid geometry, piece and seat definitions, the rejection
//! taxonomy for illegal actions, and the `Board` state machine itself.

use thiserror::Error;

pub mod geometry;
pub mod piece;
pub mod state;

pub use geometry::{
    exit_cells, Direction, Position, ALL_DIRECTIONS, BOARD_COLS, BOARD_ROWS,
};
pub use piece::{Piece, PieceColor, Seat, ALL_COLORS, ALL_SEATS};
pub use state::{Board, MoveOutcome, CAPTURE_WIN_COUNT};

/// A rejected action.
///
/// Every variant is an expected, recoverable rejection: the caller reports
/// it to the acting player and re-solicits a decision. Nothing here is
/// fatal to the game, and a rejected action never mutates the board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    #[error("no piece at {0}")]
    NoPieceAtPosition(Position),

    #[error("the piece at {0} belongs to the opponent")]
    NotOwner(Position),

    #[error("target cell is off the board")]
    OutOfBounds,

    #[error("cannot capture your own piece at {0}")]
    FriendlyCapture(Position),

    #[error("unknown direction key '{0}'")]
    InvalidDirection(String),

    #[error("the game is already over")]
    GameOver,
}

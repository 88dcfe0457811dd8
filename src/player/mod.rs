//! The player capability seam.
//!
//! A `Player` supplies one decision per prompt; the game loop re-prompts
//! the same player whenever the board rejects the decision. Implementors
//! are external collaborators as far as the rules are concerned: the
//! console reader here, a bot, or anything else that can pick a move.

pub mod console;
pub mod random;

pub use console::ConsolePlayer;
pub use random::RandomPlayer;

use crate::board::{Board, Direction, IllegalMove, Position, Seat};

/// What a player chose to do with their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Move the piece at `from` one cell in `direction`.
    Move { from: Position, direction: Direction },

    /// Abandon the game.
    Quit,
}

/// A seat-holder that can be asked for moves.
pub trait Player {
    /// The seat this player occupies.
    fn seat(&self) -> Seat;

    /// Picks a move given read access to the board. May be called again
    /// for the same turn if the previous decision was rejected.
    fn decide(&mut self, board: &Board) -> Decision;

    /// Informs the player that their last decision was rejected. The
    /// default implementation ignores the report.
    fn notify_illegal(&mut self, rejected: &IllegalMove) {
        let _ = rejected;
    }
}

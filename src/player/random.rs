//! Uniform-random legal-move player.
//!
//! Fills a seat with a bot that picks uniformly among every
//! (piece, direction) pair the board currently allows. Useful for
//! exercising the loop and as the baseline opponent.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Direction, Position, Seat, BOARD_COLS, BOARD_ROWS};

use super::{Decision, Player};

/// A bot choosing uniformly among its legal moves.
pub struct RandomPlayer {
    seat: Seat,
    rng: SmallRng,
}

impl RandomPlayer {
    pub fn new(seat: Seat) -> Self {
        RandomPlayer {
            seat,
            rng: SmallRng::from_entropy(),
        }
    }

    /// A deterministic bot for tests and reproducible games.
    pub fn with_seed(seat: Seat, seed: u64) -> Self {
        RandomPlayer {
            seat,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Collects every legal (origin, direction) pair for this seat.
    fn legal_options(&self, board: &Board) -> Vec<(Position, Direction)> {
        let mut options = Vec::new();
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                let from = Position::new(row, col);
                match board.piece_at(from) {
                    Some(piece) if piece.owner() == self.seat => {
                        for direction in board.legal_moves(from) {
                            options.push((from, direction));
                        }
                    }
                    _ => {}
                }
            }
        }
        options
    }
}

impl Player for RandomPlayer {
    fn seat(&self) -> Seat {
        self.seat
    }

    fn decide(&mut self, board: &Board) -> Decision {
        let options = self.legal_options(board);
        if options.is_empty() {
            // Completely boxed in; nothing left but to resign.
            return Decision::Quit;
        }
        let (from, direction) = options[self.rng.gen_range(0..options.len())];
        Decision::Move { from, direction }
    }
}

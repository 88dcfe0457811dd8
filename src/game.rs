//! Turn sequencing and player dispatch.
//!
//! Alternates seats starting with South, feeds each decision to the
//! board, and re-prompts the same player on rejection without advancing
//! the turn. The loop ends when the board declares a winner or a player
//! quits.

use std::io::Write;

use crate::board::{Board, Seat};
use crate::player::{Decision, Player};

/// One full game: a board and the two seat-holders.
pub struct Game {
    board: Board,
    south: Box<dyn Player>,
    north: Box<dyn Player>,
    turn: u32,
}

impl Game {
    /// Wraps an already set-up board and two players. South acts first.
    pub fn new(board: Board, south: Box<dyn Player>, north: Box<dyn Player>) -> Self {
        debug_assert_eq!(south.seat(), Seat::South);
        debug_assert_eq!(north.seat(), Seat::North);
        Game {
            board,
            south,
            north,
            turn: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Completed turns so far. Rejected decisions do not count.
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// The seat to move: South on even turn counters, North on odd.
    pub const fn active_seat(&self) -> Seat {
        if self.turn % 2 == 0 {
            Seat::South
        } else {
            Seat::North
        }
    }

    /// Runs the game to completion, writing the closing report to `out`.
    ///
    /// Returns the winner, or `None` if a player quit. Illegal decisions
    /// are reported back to the deciding player and the same turn is
    /// retried; they never mutate the board or advance the counter.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Option<Seat> {
        while self.board.winner().is_none() {
            let seat = self.active_seat();
            let player = match seat {
                Seat::South => &mut self.south,
                Seat::North => &mut self.north,
            };

            match player.decide(&self.board) {
                Decision::Quit => {
                    writeln!(out, "\n{} left the game.", seat).unwrap();
                    return None;
                }
                Decision::Move { from, direction } => {
                    match self.board.move_piece(from, direction, seat) {
                        Ok(_) => self.turn += 1,
                        Err(rejected) => player.notify_illegal(&rejected),
                    }
                }
            }
        }

        let winner = self.board.winner();
        writeln!(out, "\n== game over ==").unwrap();
        writeln!(out, "{}", self.board.render(None)).unwrap();
        if let Some(seat) = winner {
            writeln!(out, "Winner: {}", seat).unwrap();
        }
        winner
    }
}

//! Interactive console player.
//!
//! Prints the board from the player's own perspective, prompts for a
//! `row col dir` line, and maps the wasd-style input aliases to the
//! canonical direction keys. Malformed or locally illegal input re-prompts
//! without ever reaching the board; `q`, `quit`, `exit`, and end of input
//! all resign the game.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::board::{Board, Direction, IllegalMove, Position, Seat};

use super::{Decision, Player};

/// Maps a lowercased console token to a canonical direction key.
///
/// wasd steers by screen direction, and the canonical letters n/e are
/// accepted directly. Note that a lowercased `w` always means North, as
/// on the original console.
const INPUT_ALIASES: [(&str, &str); 6] = [
    ("w", "N"),
    ("s", "S"),
    ("a", "W"),
    ("d", "E"),
    ("n", "N"),
    ("e", "E"),
];

/// Looks up a raw direction token in the alias table.
fn canonical_key(token: &str) -> Option<&'static str> {
    let lowered = token.to_lowercase();
    INPUT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, key)| *key)
}

/// A human player reading moves from a line-oriented input.
///
/// Generic over the reader and writer so tests can script a session
/// against in-memory buffers.
pub struct ConsolePlayer<R: BufRead, W: Write> {
    seat: Seat,
    input: R,
    output: W,
}

impl ConsolePlayer<BufReader<Stdin>, Stdout> {
    /// A console player wired to the process stdin and stdout.
    pub fn stdio(seat: Seat) -> Self {
        ConsolePlayer::new(seat, BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(seat: Seat, input: R, output: W) -> Self {
        ConsolePlayer { seat, input, output }
    }

    /// Consumes the player and returns its writer, for test inspection.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line; `None` means end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn seat(&self) -> Seat {
        self.seat
    }

    fn decide(&mut self, board: &Board) -> Decision {
        writeln!(self.output, "\n=== {} view ===", self.seat).unwrap();
        writeln!(self.output, "{}", board.render(Some(self.seat))).unwrap();
        writeln!(self.output, "----------------").unwrap();

        loop {
            write!(self.output, "enter 'row col dir' (e.g. '5 0 w'): ").unwrap();
            self.output.flush().unwrap();

            let raw = match self.read_line() {
                Some(line) => line,
                None => return Decision::Quit,
            };
            let trimmed = raw.trim();
            if matches!(trimmed.to_lowercase().as_str(), "q" | "quit" | "exit") {
                return Decision::Quit;
            }

            let tokens: Vec<&str> = trimmed.split_whitespace().collect();
            let &[row, col, dir_raw] = tokens.as_slice() else {
                writeln!(self.output, "bad format, try again.").unwrap();
                continue;
            };
            let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
            else {
                writeln!(self.output, "bad format, try again.").unwrap();
                continue;
            };

            let direction = match canonical_key(dir_raw)
                .ok_or_else(|| IllegalMove::InvalidDirection(dir_raw.to_string()))
                .and_then(Direction::from_key)
            {
                Ok(direction) => direction,
                Err(_) => {
                    writeln!(self.output, "direction must be w/a/s/d or N/E/S/W")
                        .unwrap();
                    continue;
                }
            };

            let from = Position::new(row, col);
            if !board.legal_moves(from).contains(&direction) {
                writeln!(self.output, "that piece cannot move {}, try again.", direction)
                    .unwrap();
                continue;
            }

            return Decision::Move { from, direction };
        }
    }

    fn notify_illegal(&mut self, rejected: &IllegalMove) {
        writeln!(self.output, "[{}] illegal move: {}, try again.", self.seat, rejected)
            .unwrap();
    }
}

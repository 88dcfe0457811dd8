//! The board state machine.
//!
//! Sole mutator of game state and arbiter of legality and victory. Holds
//! the grid of pieces, the per-seat capture tallies, and the winner once
//! one exists. Validation happens before any mutation, so a rejected
//! action is always a strict no-op, and a terminal board refuses all
//! further mutation.

use super::geometry::{Direction, Position, BOARD_COLS, BOARD_ROWS};
use super::piece::{Piece, PieceColor, Seat, ALL_SEATS};
use super::IllegalMove;

/// Capturing this many pieces of one color triggers a win condition.
pub const CAPTURE_WIN_COUNT: u8 = 4;

/// What a successful move did.
///
/// Captured colors are public information in Geister, so the outcome
/// reports them for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Color of the opposing piece removed by this move, if any.
    pub captured: Option<PieceColor>,
    /// The winner, if this move ended the game.
    pub winner: Option<Seat>,
}

/// The 6x6 Geister board.
///
/// The grid owns its pieces outright; a piece's position field always
/// matches the one cell that holds it. `captured[seat][color]` counts the
/// opposing pieces of `color` that `seat` has taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_COLS]; BOARD_ROWS],
    captured: [[u8; 2]; 2],
    winner: Option<Seat>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Creates an empty board with zeroed capture tallies and no winner.
    pub fn new() -> Self {
        Board {
            grid: [[None; BOARD_COLS]; BOARD_ROWS],
            captured: [[0; 2]; 2],
            winner: None,
        }
    }

    /// The winner, or `None` while the game is undecided.
    pub const fn winner(&self) -> Option<Seat> {
        self.winner
    }

    /// How many opposing pieces of `color` this seat has captured.
    pub const fn captured(&self, attacker: Seat, color: PieceColor) -> u8 {
        self.captured[attacker as usize][color as usize]
    }

    /// Returns the occupant of a cell, or `None` for an empty cell or a
    /// coordinate off the board. Pure query.
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        if !position.in_bounds() {
            return None;
        }
        self.grid[position.row][position.col].as_ref()
    }

    /// Setup-only: puts a piece on its cell.
    ///
    /// No ownership or turn checks apply; the setup collaborator is
    /// trusted to supply a sensible configuration. Fails if the cell is
    /// occupied, the coordinate is off the board, or the game is over.
    pub fn place_piece(&mut self, piece: Piece) -> Result<(), IllegalMove> {
        if self.winner.is_some() {
            return Err(IllegalMove::GameOver);
        }
        let pos = piece.position();
        if !pos.in_bounds() {
            return Err(IllegalMove::OutOfBounds);
        }
        if self.grid[pos.row][pos.col].is_some() {
            return Err(IllegalMove::CellOccupied(pos));
        }
        self.grid[pos.row][pos.col] = Some(piece);
        Ok(())
    }

    /// Returns the directions the piece at `from` may actually move:
    /// within bounds and not landing on a piece of the same owner. Empty
    /// for an empty cell. Does not consult the winner; callers decide
    /// whether moving is still meaningful.
    pub fn legal_moves(&self, from: Position) -> Vec<Direction> {
        let piece = match self.piece_at(from) {
            Some(p) => *p,
            None => return Vec::new(),
        };
        piece
            .legal_directions()
            .into_iter()
            .filter(|&dir| {
                match piece.next_position(dir).and_then(|to| self.piece_at(to)) {
                    Some(target) => target.owner() != piece.owner(),
                    None => true,
                }
            })
            .collect()
    }

    /// Executes one move for `actor`: validates, captures, relocates, and
    /// evaluates the win conditions, in that order.
    ///
    /// Every rejection leaves the board exactly as it was. Once a winner
    /// exists the board is terminal and every further move is rejected
    /// with `GameOver`.
    pub fn move_piece(
        &mut self,
        from: Position,
        direction: Direction,
        actor: Seat,
    ) -> Result<MoveOutcome, IllegalMove> {
        if self.winner.is_some() {
            return Err(IllegalMove::GameOver);
        }

        let piece = *self
            .piece_at(from)
            .ok_or(IllegalMove::NoPieceAtPosition(from))?;
        if piece.owner() != actor {
            return Err(IllegalMove::NotOwner(from));
        }

        let to = piece
            .next_position(direction)
            .ok_or(IllegalMove::OutOfBounds)?;

        let captured = match self.piece_at(to) {
            Some(target) if target.owner() == actor => {
                return Err(IllegalMove::FriendlyCapture(to));
            }
            Some(target) => Some((target.owner(), target.color())),
            None => None,
        };

        // All checks passed; from here on the move commits.
        if let Some((_, color)) = captured {
            self.captured[actor as usize][color as usize] += 1;
        }

        let mut mover = piece;
        mover.set_position(to);
        self.grid[from.row][from.col] = None;
        self.grid[to.row][to.col] = Some(mover);

        // Win conditions, first match final.
        if mover.can_escape() {
            self.winner = Some(actor);
        }

        if self.winner.is_none() {
            if let Some((victim, color)) = captured {
                match color {
                    PieceColor::Blue
                        if self.captured(actor, PieceColor::Blue)
                            >= CAPTURE_WIN_COUNT =>
                    {
                        // All the opponent's good ghosts are gone.
                        self.winner = Some(actor);
                    }
                    PieceColor::Red
                        if self.captured(actor, PieceColor::Red)
                            >= CAPTURE_WIN_COUNT =>
                    {
                        // Losing every bad ghost rewards the victim, not
                        // the attacker. Unusual but part of the rules.
                        self.winner = Some(victim);
                    }
                    _ => {}
                }
            }
        }

        if self.winner.is_none() {
            self.sweep_capture_victory();
        }

        Ok(MoveOutcome {
            captured: captured.map(|(_, color)| color),
            winner: self.winner,
        })
    }

    /// Full-tally safety net: detects capture victories for either seat
    /// regardless of which single capture event crossed the threshold.
    fn sweep_capture_victory(&mut self) {
        for seat in ALL_SEATS {
            if self.winner.is_some() {
                return;
            }
            if self.captured(seat, PieceColor::Blue) >= CAPTURE_WIN_COUNT {
                self.winner = Some(seat);
            } else if self.captured(seat, PieceColor::Red) >= CAPTURE_WIN_COUNT {
                self.winner = Some(seat.opponent());
            }
        }
    }

    /// Renders the board as text, one space-separated row per line.
    ///
    /// With a perspective, the viewer's own pieces show their color glyph
    /// and every opposing piece shows as `?`. Without one, all colors are
    /// disclosed; that form is for end-of-game and spectator views only.
    pub fn render(&self, perspective: Option<Seat>) -> String {
        let mut rows = Vec::with_capacity(BOARD_ROWS);
        for r in 0..BOARD_ROWS {
            let mut line = String::with_capacity(BOARD_COLS * 2);
            for c in 0..BOARD_COLS {
                if c > 0 {
                    line.push(' ');
                }
                line.push(match &self.grid[r][c] {
                    None => '.',
                    Some(piece) => match perspective {
                        Some(viewer) if piece.owner() != viewer => '?',
                        _ => piece.color().glyph(),
                    },
                });
            }
            rows.push(line);
        }
        rows.join("\n")
    }
}

//! Pieces, colors, and seats.
//!
//! A piece knows its hidden color, its owner, and where it stands. The
//! positional geometry here ignores occupancy entirely; the board layer
//! adds the occupancy and capture rules on top.

use std::fmt;

use super::geometry::{exit_cells, Direction, Position, ALL_DIRECTIONS};

/// The hidden color of a piece.
///
/// Blue pieces are the "good" ghosts (escaping with one wins); red pieces
/// are the "bad" ghosts. The `#[repr(u8)]` attribute enables use as an
/// array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceColor {
    Blue = 0,
    Red = 1,
}

/// Both colors in index order.
pub const ALL_COLORS: [PieceColor; 2] = [PieceColor::Blue, PieceColor::Red];

impl PieceColor {
    /// Returns the single-character board glyph.
    pub const fn glyph(self) -> char {
        match self {
            PieceColor::Blue => 'B',
            PieceColor::Red => 'R',
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// One of the two player seats.
///
/// South sits at the bottom of the board (high row numbers) and moves
/// first; turn order alternates South, North, South, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Seat {
    South = 0,
    North = 1,
}

/// Both seats in turn order.
pub const ALL_SEATS: [Seat; 2] = [Seat::South, Seat::North];

impl Seat {
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::South => Seat::North,
            Seat::North => Seat::South,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Seat::South => "SOUTH",
            Seat::North => "NORTH",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ghost piece on the board.
///
/// Color and owner are fixed for the piece's lifetime; only the board may
/// relocate it, which keeps the position field in sync with the grid cell
/// that holds the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: PieceColor,
    owner: Seat,
    position: Position,
}

impl Piece {
    pub const fn new(color: PieceColor, owner: Seat, position: Position) -> Self {
        Piece { color, owner, position }
    }

    pub const fn color(&self) -> PieceColor {
        self.color
    }

    pub const fn owner(&self) -> Seat {
        self.owner
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    /// Board-internal: relocates the piece as part of a grid update.
    pub(super) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Returns the directions that keep the piece on the board from its
    /// current cell, in the fixed N, S, W, E order. Occupancy of the
    /// target cells is not considered.
    pub fn legal_directions(&self) -> Vec<Direction> {
        ALL_DIRECTIONS
            .iter()
            .copied()
            .filter(|&dir| self.position.step(dir).is_some())
            .collect()
    }

    /// Returns the cell one step in `direction`, or `None` if the step
    /// leaves the board.
    pub fn next_position(&self, direction: Direction) -> Option<Position> {
        self.position.step(direction)
    }

    /// Whether this piece may escape right now: it is blue and stands on
    /// one of its owner's two exit cells.
    pub fn can_escape(&self) -> bool {
        self.color == PieceColor::Blue
            && exit_cells(self.owner).contains(&self.position)
    }
}

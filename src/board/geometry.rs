//! Board geometry: positions, directions, and exit cells.
//!
//! The board is a fixed 6x6 grid addressed by (row, col) with row 0 at the
//! top. Directions are the four cardinals, keyed by the single letters
//! N/S/W/E in console notation. All tables here are read-only constants.

use std::fmt;

use super::piece::Seat;
use super::IllegalMove;

/// Number of rows on the board.
pub const BOARD_ROWS: usize = 6;

/// Number of columns on the board.
pub const BOARD_COLS: usize = 6;

/// A cell coordinate, 0-indexed from the top-left corner.
///
/// Construction is unchecked; `in_bounds` tells whether the coordinate
/// names a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Whether this coordinate lies on the board.
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_ROWS && self.col < BOARD_COLS
    }

    /// Returns the neighbouring cell in `direction`, or `None` if the step
    /// leaves the board.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row < 0 || col < 0 {
            return None;
        }
        let next = Position::new(row as usize, col as usize);
        if next.in_bounds() {
            Some(next)
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four cardinal movement directions.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    South = 1,
    West = 2,
    East = 3,
}

/// All direction variants in the fixed iteration order N, S, W, E.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

impl Direction {
    /// Returns the (row, col) delta of a one-cell step in this direction.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }

    /// Returns the canonical single-letter key used in console notation.
    pub const fn key(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::West => 'W',
            Direction::East => 'E',
        }
    }

    /// Parses a canonical direction key.
    ///
    /// Only the exact keys `N`, `S`, `W`, `E` are accepted; anything else
    /// (including lowercase and console aliases such as `w` or `U`) is
    /// rejected with `InvalidDirection`. Alias mapping belongs to the
    /// console layer, not here.
    pub fn from_key(key: &str) -> Result<Direction, IllegalMove> {
        match key {
            "N" => Ok(Direction::North),
            "S" => Ok(Direction::South),
            "W" => Ok(Direction::West),
            "E" => Ok(Direction::East),
            other => Err(IllegalMove::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The two exit cells for a seat, on the opponent's home edge.
///
/// South escapes via the top-row corners, North via the bottom-row corners.
pub const fn exit_cells(seat: Seat) -> [Position; 2] {
    match seat {
        Seat::South => [
            Position::new(0, 0),
            Position::new(0, BOARD_COLS - 1),
        ],
        Seat::North => [
            Position::new(BOARD_ROWS - 1, 0),
            Position::new(BOARD_ROWS - 1, BOARD_COLS - 1),
        ],
    }
}

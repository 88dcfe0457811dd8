//! Starting configurations.
//!
//! The board itself does not enforce piece counts or symmetry; these
//! collaborators produce them. The standard setup deals each seat four
//! blue and four red ghosts across its two home rows, with the color of
//! each cell drawn from a shuffled deck so the opponent cannot infer it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, IllegalMove, Piece, PieceColor, Position, Seat, ALL_SEATS, BOARD_ROWS};

/// Ghosts of each color per seat in the standard game.
pub const PIECES_PER_COLOR: usize = 4;

/// The eight home cells of a seat in row-major order: the seat's two back
/// rows, columns 1 through 4.
pub fn home_cells(seat: Seat) -> [Position; 2 * PIECES_PER_COLOR] {
    let rows = match seat {
        Seat::South => [BOARD_ROWS - 2, BOARD_ROWS - 1],
        Seat::North => [0, 1],
    };
    let mut cells = [Position::new(0, 0); 2 * PIECES_PER_COLOR];
    let mut i = 0;
    for row in rows {
        for col in 1..=PIECES_PER_COLOR {
            cells[i] = Position::new(row, col);
            i += 1;
        }
    }
    cells
}

/// Deals the standard starting position onto an empty board: per seat,
/// four blue and four red ghosts on the home cells, colors shuffled.
pub fn standard_setup(board: &mut Board, rng: &mut impl Rng) -> Result<(), IllegalMove> {
    for seat in ALL_SEATS {
        let mut colors = [PieceColor::Blue; 2 * PIECES_PER_COLOR];
        colors[PIECES_PER_COLOR..].fill(PieceColor::Red);
        colors.shuffle(rng);

        for (cell, color) in home_cells(seat).into_iter().zip(colors) {
            board.place_piece(Piece::new(color, seat, cell))?;
        }
    }
    Ok(())
}

/// Places a fixed list of pieces, for scripted positions and tests.
pub fn place_all(
    board: &mut Board,
    pieces: impl IntoIterator<Item = Piece>,
) -> Result<(), IllegalMove> {
    for piece in pieces {
        board.place_piece(piece)?;
    }
    Ok(())
}

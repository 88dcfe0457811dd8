//! Rules scenarios exercised through the public API.
//!
//! Covers the win conditions, capture bookkeeping, rejection no-ops, and
//! visibility rules end to end, including the asymmetric red-depletion
//! rule.

use geister::board::{
    Board, Direction, IllegalMove, Piece, PieceColor, Position, Seat,
    BOARD_COLS, BOARD_ROWS, CAPTURE_WIN_COUNT,
};
use geister::setup::place_all;

fn piece(color: PieceColor, owner: Seat, row: usize, col: usize) -> Piece {
    Piece::new(color, owner, Position::new(row, col))
}

#[test]
fn capture_scenario_from_design_notes() {
    // Empty board; BLUE/SOUTH at (5,0), RED/NORTH at (4,0); South moves
    // North and captures.
    let mut board = Board::new();
    place_all(
        &mut board,
        [
            piece(PieceColor::Blue, Seat::South, 5, 0),
            piece(PieceColor::Red, Seat::North, 4, 0),
        ],
    )
    .unwrap();

    let outcome = board
        .move_piece(Position::new(5, 0), Direction::North, Seat::South)
        .unwrap();

    assert_eq!(outcome.captured, Some(PieceColor::Red));
    assert_eq!(board.captured(Seat::South, PieceColor::Red), 1);
    assert!(board.piece_at(Position::new(5, 0)).is_none());
    let attacker = board.piece_at(Position::new(4, 0)).unwrap();
    assert_eq!(attacker.owner(), Seat::South);
    assert_eq!(board.winner(), None, "one of four reds is not a win");
}

#[test]
fn escape_wins_regardless_of_tallies() {
    let mut board = Board::new();
    place_all(&mut board, [piece(PieceColor::Blue, Seat::South, 1, 0)]).unwrap();

    let outcome = board
        .move_piece(Position::new(1, 0), Direction::North, Seat::South)
        .unwrap();
    assert_eq!(outcome.winner, Some(Seat::South));
    assert_eq!(board.winner(), Some(Seat::South));
    assert_eq!(board.captured(Seat::South, PieceColor::Blue), 0);
    assert_eq!(board.captured(Seat::South, PieceColor::Red), 0);
}

#[test]
fn north_escape_cells_are_bottom_corners() {
    let mut board = Board::new();
    place_all(
        &mut board,
        [piece(PieceColor::Blue, Seat::North, BOARD_ROWS - 2, BOARD_COLS - 1)],
    )
    .unwrap();

    board
        .move_piece(
            Position::new(BOARD_ROWS - 2, BOARD_COLS - 1),
            Direction::South,
            Seat::North,
        )
        .unwrap();
    assert_eq!(board.winner(), Some(Seat::North));
}

#[test]
fn not_owner_rejection_is_a_no_op() {
    let mut board = Board::new();
    place_all(&mut board, [piece(PieceColor::Blue, Seat::North, 2, 2)]).unwrap();
    let before = board.clone();

    let result = board.move_piece(Position::new(2, 2), Direction::South, Seat::South);
    assert_eq!(result, Err(IllegalMove::NotOwner(Position::new(2, 2))));
    assert_eq!(board, before, "rejected moves must not mutate anything");
}

#[test]
fn every_rejection_kind_is_a_no_op() {
    let mut board = Board::new();
    place_all(
        &mut board,
        [
            piece(PieceColor::Blue, Seat::South, 5, 0),
            piece(PieceColor::Red, Seat::South, 4, 0),
            piece(PieceColor::Blue, Seat::North, 0, 0),
        ],
    )
    .unwrap();
    let before = board.clone();

    let attempts = [
        // Empty origin.
        (Position::new(3, 3), Direction::North, Seat::South),
        // Opponent's piece.
        (Position::new(0, 0), Direction::South, Seat::South),
        // Off the board.
        (Position::new(5, 0), Direction::South, Seat::South),
        // Friendly capture.
        (Position::new(5, 0), Direction::North, Seat::South),
    ];
    for (from, dir, actor) in attempts {
        assert!(board.move_piece(from, dir, actor).is_err());
        assert_eq!(board, before);
    }
}

#[test]
fn capturing_all_blues_wins_the_game_for_the_attacker() {
    // North's four blue ghosts lined up on column 2; South walks a red
    // ghost up the column eating all of them while North shuffles a red
    // piece elsewhere.
    let mut board = Board::new();
    place_all(
        &mut board,
        [
            piece(PieceColor::Red, Seat::South, 5, 2),
            piece(PieceColor::Blue, Seat::North, 4, 2),
            piece(PieceColor::Blue, Seat::North, 3, 2),
            piece(PieceColor::Blue, Seat::North, 2, 2),
            piece(PieceColor::Blue, Seat::North, 1, 2),
            piece(PieceColor::Red, Seat::North, 0, 5),
        ],
    )
    .unwrap();

    // South captures up the column; North shuffles its red piece.
    let south_moves = [(5, 2), (4, 2), (3, 2), (2, 2)];
    let north_moves = [
        ((0, 5), Direction::West),
        ((0, 4), Direction::East),
        ((0, 5), Direction::West),
    ];
    for (step, &(row, col)) in south_moves.iter().enumerate() {
        let outcome = board
            .move_piece(Position::new(row, col), Direction::North, Seat::South)
            .unwrap();
        assert_eq!(outcome.captured, Some(PieceColor::Blue));
        assert_eq!(
            board.captured(Seat::South, PieceColor::Blue),
            step as u8 + 1
        );
        if let Some(&((r, c), dir)) = north_moves.get(step) {
            board.move_piece(Position::new(r, c), dir, Seat::North).unwrap();
        }
    }

    assert_eq!(
        board.captured(Seat::South, PieceColor::Blue),
        CAPTURE_WIN_COUNT
    );
    assert_eq!(board.winner(), Some(Seat::South));
}

#[test]
fn capturing_all_reds_wins_the_game_for_the_victim() {
    // Same walk, but the column holds North's four red ghosts: taking the
    // fourth hands the win to North, not to South.
    let mut board = Board::new();
    place_all(
        &mut board,
        [
            piece(PieceColor::Blue, Seat::South, 5, 2),
            piece(PieceColor::Red, Seat::North, 4, 2),
            piece(PieceColor::Red, Seat::North, 3, 2),
            piece(PieceColor::Red, Seat::North, 2, 2),
            piece(PieceColor::Red, Seat::North, 1, 2),
            piece(PieceColor::Blue, Seat::North, 0, 5),
        ],
    )
    .unwrap();

    let north_moves = [
        ((0, 5), Direction::West),
        ((0, 4), Direction::East),
        ((0, 5), Direction::West),
    ];
    for (&(row, col), &((r, c), dir)) in [(5, 2), (4, 2), (3, 2)].iter().zip(&north_moves) {
        board
            .move_piece(Position::new(row, col), Direction::North, Seat::South)
            .unwrap();
        board.move_piece(Position::new(r, c), dir, Seat::North).unwrap();
    }
    assert_eq!(board.captured(Seat::South, PieceColor::Red), 3);
    assert_eq!(board.winner(), None);

    let outcome = board
        .move_piece(Position::new(2, 2), Direction::North, Seat::South)
        .unwrap();
    assert_eq!(outcome.captured, Some(PieceColor::Red));
    assert_eq!(board.captured(Seat::South, PieceColor::Red), 4);
    assert_eq!(
        board.winner(),
        Some(Seat::North),
        "losing all four reds rewards the victim"
    );
}

#[test]
fn render_never_reveals_opponent_colors() {
    let mut board = Board::new();
    place_all(
        &mut board,
        [
            piece(PieceColor::Blue, Seat::South, 5, 0),
            piece(PieceColor::Red, Seat::South, 5, 5),
            piece(PieceColor::Blue, Seat::North, 0, 0),
            piece(PieceColor::Red, Seat::North, 0, 5),
        ],
    )
    .unwrap();

    let south_view = board.render(Some(Seat::South));
    let top_row = south_view.lines().next().unwrap();
    assert_eq!(top_row, "? . . . . ?");
    let bottom_row = south_view.lines().last().unwrap();
    assert_eq!(bottom_row, "B . . . . R");

    let spectator = board.render(None);
    assert_eq!(spectator.lines().next().unwrap(), "B . . . . R");
    assert!(!spectator.contains('?'));
}

#[test]
fn bounds_are_respected_from_every_edge_cell() {
    // From each boundary cell, the direction pointing off the board is
    // rejected and the rest are accepted.
    for col in 0..BOARD_COLS {
        let mut board = Board::new();
        place_all(&mut board, [piece(PieceColor::Red, Seat::North, 0, col)]).unwrap();
        let result = board.move_piece(Position::new(0, col), Direction::North, Seat::North);
        assert_eq!(result, Err(IllegalMove::OutOfBounds));
    }
    for row in 0..BOARD_ROWS {
        let mut board = Board::new();
        place_all(&mut board, [piece(PieceColor::Red, Seat::North, row, 0)]).unwrap();
        let result = board.move_piece(Position::new(row, 0), Direction::West, Seat::North);
        assert_eq!(result, Err(IllegalMove::OutOfBounds));
    }
}

#[test]
fn winner_is_final() {
    let mut board = Board::new();
    place_all(
        &mut board,
        [
            piece(PieceColor::Blue, Seat::South, 1, 0),
            piece(PieceColor::Blue, Seat::North, 4, 5),
        ],
    )
    .unwrap();

    board
        .move_piece(Position::new(1, 0), Direction::North, Seat::South)
        .unwrap();
    assert_eq!(board.winner(), Some(Seat::South));

    // North's own escape attempt is refused; the first win stands.
    let result = board.move_piece(Position::new(4, 5), Direction::South, Seat::North);
    assert_eq!(result, Err(IllegalMove::GameOver));
    assert_eq!(board.winner(), Some(Seat::South));
}

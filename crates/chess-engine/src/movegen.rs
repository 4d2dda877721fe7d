//! Pseudo-legal move generation.
//!
//! Generated destinations respect each piece's movement pattern and the
//! occupancy of the board, but ignore whether the move would leave the
//! mover's own king attacked. [`crate::MoveValidator`] filters for that.

use chess_core::{Color, Piece, Square};

use crate::{Board, BoardPiece, SquareSet};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Returns the pseudo-legal destinations of a piece on the board.
pub fn pseudo_legal_moves(board: &Board, piece: &BoardPiece) -> SquareSet {
    let from = piece.square();
    match piece.piece {
        Piece::Pawn => pawn_moves(board, from, piece.color, piece.has_moved()),
        Piece::Knight => step_moves(board, from, piece.color, &KNIGHT_OFFSETS),
        Piece::King => step_moves(board, from, piece.color, &KING_OFFSETS),
        Piece::Bishop | Piece::Rook | Piece::Queen => {
            let mut moves = SquareSet::EMPTY;
            if piece.piece.slides_diagonally() {
                moves |= slide_moves(board, from, piece.color, &DIAGONALS);
            }
            if piece.piece.slides_orthogonally() {
                moves |= slide_moves(board, from, piece.color, &ORTHOGONALS);
            }
            moves
        }
    }
}

/// Returns the pseudo-legal destinations of whatever stands on `sq`.
pub fn pseudo_legal_moves_from(board: &Board, sq: Square) -> SquareSet {
    board
        .piece_at(sq)
        .map_or(SquareSet::EMPTY, |p| pseudo_legal_moves(board, p))
}

/// One step forward onto an empty square, two from the start rank when the
/// pawn is unmoved and both squares are empty, and diagonal captures.
///
/// The double step needs the start rank as well as a clear `has_moved` flag.
/// Undo resets the flag, so a pawn taken back to a later rank (e3 after
/// e2e3, e3e4, undo) could otherwise jump two squares from there; the rank
/// check rules that out.
fn pawn_moves(board: &Board, from: Square, color: Color, has_moved: bool) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty(one) {
            moves.insert(one);
            if !has_moved && from.row() == color.pawn_rank() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.is_empty(two) {
                        moves.insert(two);
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        if let Some(target) = from.offset(dir, side) {
            if board.is_enemy(target, color) {
                moves.insert(target);
            }
        }
    }

    moves
}

fn step_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| board.is_empty(to) || board.is_enemy(to, color))
        .collect()
}

fn slide_moves(board: &Board, from: Square, color: Color, directions: &[(i8, i8)]) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            if board.is_empty(next) {
                moves.insert(next);
            } else {
                if board.is_enemy(next, color) {
                    moves.insert(next);
                }
                break;
            }
            current = next;
        }
    }
    moves
}

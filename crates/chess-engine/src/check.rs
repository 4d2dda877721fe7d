//! Check detection.

use chess_core::{Color, Square};

use crate::movegen::pseudo_legal_moves;
use crate::Board;

/// Returns true if the king of `color` is attacked by any opposing piece.
///
/// The king is the first one found in scan order. A board without a king of
/// that color is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_attacked_by(board, king, color.opposite()),
        None => false,
    }
}

/// Returns true if any piece of color `by` has `target` among its
/// pseudo-legal destinations.
pub fn is_attacked_by(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|p| pseudo_legal_moves(board, p).contains(target))
}

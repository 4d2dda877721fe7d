//! Move rejection reasons.

use chess_core::{Color, Square, SquareError};
use thiserror::Error;

/// Why a move between two on-board squares is not allowed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IllegalReason {
    /// No piece stands on the source square.
    #[error("no piece on the source square")]
    EmptySquare,
    /// The piece on the source square belongs to the given (waiting) player.
    #[error("it is not {0}'s turn")]
    WrongTurn(Color),
    /// The destination is not in the piece's movement pattern.
    #[error("the piece cannot reach that square")]
    Unreachable,
    /// The move would leave the mover's own king attacked.
    #[error("the move leaves the king in check")]
    ExposesKing,
}

/// Error type for move requests.
///
/// Every variant means the request was refused with no state change.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate lies outside the 8x8 board.
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] SquareError),

    /// Both squares exist but the move breaks the rules.
    #[error("illegal move {from}{to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: IllegalReason,
    },
}

impl MoveError {
    /// Returns the rule violation, if this was an illegal (rather than
    /// malformed) request.
    pub fn reason(&self) -> Option<IllegalReason> {
        match self {
            MoveError::InvalidPosition(_) => None,
            MoveError::IllegalMove { reason, .. } => Some(*reason),
        }
    }
}

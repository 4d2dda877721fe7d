//! Board placement (FEN) parsing.
//!
//! Only the first two FEN fields carry meaning for this rule set: the piece
//! placement and the active color. Castling, en passant and the move clocks do
//! not exist here, so any further fields are accepted and ignored.

use crate::{Color, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: empty string")]
    Empty,

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed FEN data.
///
/// Holds the validated placement string and the side to move. The engine
/// turns [`FenParser::pieces`] into its board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Piece placement string, Black's back rank first
    /// (e.g., "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").
    pub piece_placement: String,
    /// Side to move.
    pub active_color: Color,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    /// Parses a FEN string. The active color defaults to White when omitted.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let piece_placement = parts.next().ok_or(FenError::Empty)?;
        Self::validate_piece_placement(piece_placement)?;

        let active_color = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(FenParser {
            piece_placement: piece_placement.to_string(),
            active_color,
        })
    }

    fn validate_piece_placement(placement: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        for (i, rank) in ranks.iter().enumerate() {
            let mut squares = 0;
            for c in rank.chars() {
                if let Some(digit) = c.to_digit(10) {
                    squares += digit;
                } else if Piece::from_fen_char(c).is_some() {
                    squares += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - i
                    )));
                }
            }
            if squares != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - i,
                    squares
                )));
            }
        }

        Ok(())
    }

    /// Returns every piece in the placement together with its square.
    ///
    /// FEN lists rank 8 first, which is row 0 of the board.
    pub fn pieces(&self) -> Vec<(Square, Piece, Color)> {
        let mut pieces = Vec::new();
        for (row, rank) in self.piece_placement.split('/').enumerate() {
            let mut col = 0i32;
            for c in rank.chars() {
                if let Some(digit) = c.to_digit(10) {
                    col += digit as i32;
                } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                    if let Ok(sq) = Square::new(row as i32, col) {
                        pieces.push((sq, piece, color));
                    }
                    col += 1;
                }
            }
        }
        pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_startpos() {
        let fen = FenParser::parse(FenParser::STARTPOS).unwrap();
        assert_eq!(fen.active_color, Color::White);
        assert_eq!(fen.pieces().len(), 32);
        assert_eq!(fen.piece_placement, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    }

    #[test]
    fn placement_rows_follow_board_rows() {
        let fen = FenParser::parse("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        let pieces = fen.pieces();
        assert_eq!(fen.active_color, Color::Black);
        assert_eq!(
            pieces,
            vec![
                (Square::new(0, 4).unwrap(), Piece::King, Color::Black),
                (Square::new(7, 4).unwrap(), Piece::King, Color::White),
            ]
        );
    }

    #[test]
    fn trailing_fields_ignored() {
        let fen = FenParser::parse("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .unwrap();
        assert_eq!(fen.active_color, Color::Black);
    }

    #[test]
    fn color_defaults_to_white() {
        let fen = FenParser::parse("8/8/8/8/8/8/8/8").unwrap();
        assert_eq!(fen.active_color, Color::White);
    }

    #[test]
    fn invalid_fen() {
        assert_eq!(FenParser::parse("   "), Err(FenError::Empty));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 x"),
            Err(FenError::InvalidActiveColor(_))
        ));
    }

    #[test]
    fn invalid_piece_placement() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8 w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            FenParser::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            FenParser::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::InvalidActiveColor("x".to_string());
        assert!(format!("{}", err).contains("x"));

        let err = FenError::InvalidPiecePlacement("bad".to_string());
        assert!(format!("{}", err).contains("bad"));
    }
}

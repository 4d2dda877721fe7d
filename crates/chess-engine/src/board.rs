//! The 8x8 board and the pieces it owns.

use chess_core::{Color, FenError, FenParser, Move, Piece, Square};
use std::fmt;

/// A piece standing on the board.
///
/// The board owns every `BoardPiece`. The stored square always matches the
/// cell holding the piece; only [`Board`] moves pieces, so it keeps both in
/// step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPiece {
    pub color: Color,
    pub piece: Piece,
    square: Square,
    has_moved: bool,
}

impl BoardPiece {
    /// The square this piece stands on.
    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    /// Whether this piece has moved. Only pawns care (double step).
    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }
}

/// What [`Board::make`] displaced, so [`Board::unmake`] can put it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    mv: Move,
    captured: Option<BoardPiece>,
    had_moved: bool,
}

impl Undo {
    /// The piece that stood on the destination, if any.
    pub fn captured(&self) -> Option<&BoardPiece> {
        self.captured.as_ref()
    }
}

/// An 8x8 grid where each cell holds at most one piece.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<BoardPiece>; 64],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Creates the standard starting setup. Black occupies rows 0-1, White
    /// rows 6-7.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            for (col, &piece) in Piece::BACK_RANK.iter().enumerate() {
                let back = Square::new(color.back_rank() as i32, col as i32);
                let pawn = Square::new(color.pawn_rank() as i32, col as i32);
                if let (Ok(back), Ok(pawn)) = (back, pawn) {
                    board.put(back, piece, color);
                    board.put(pawn, Piece::Pawn, color);
                }
            }
        }
        board
    }

    /// Builds a board from a FEN placement, returning it with the side to
    /// move.
    ///
    /// Pawns found off their start rank are marked as having moved; every
    /// other piece starts fresh.
    pub fn from_fen(fen: &str) -> Result<(Self, Color), FenError> {
        let parsed = FenParser::parse(fen)?;
        let mut board = Board::empty();
        for (sq, piece, color) in parsed.pieces() {
            board.put(sq, piece, color);
            if piece == Piece::Pawn && sq.row() != color.pawn_rank() {
                if let Some(p) = board.cells[sq.index() as usize].as_mut() {
                    p.has_moved = true;
                }
            }
        }
        Ok((board, parsed.active_color))
    }

    /// Returns the piece placement field of FEN for this board.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..8u8 {
            let mut empty_count = 0;
            for col in 0..8u8 {
                match self.cells[(row * 8 + col) as usize] {
                    Some(p) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(p.piece.to_fen_char(p.color));
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }
        fen
    }

    /// Places a fresh (unmoved) piece, replacing whatever was there.
    pub fn put(&mut self, sq: Square, piece: Piece, color: Color) {
        self.cells[sq.index() as usize] = Some(BoardPiece {
            color,
            piece,
            square: sq,
            has_moved: false,
        });
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&BoardPiece> {
        self.cells[sq.index() as usize].as_ref()
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index() as usize].is_none()
    }

    /// Returns true if a piece of the other color stands on the square.
    #[inline]
    pub fn is_enemy(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.color != color)
    }

    /// Iterates all pieces in scan order (row 0 first).
    pub fn pieces(&self) -> impl Iterator<Item = &BoardPiece> {
        self.cells.iter().flatten()
    }

    /// Iterates the pieces of one color in scan order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &BoardPiece> {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Finds the king of the given color, first match in scan order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.piece == Piece::King)
            .map(|p| p.square)
    }

    /// Moves the piece on `mv.from` to `mv.to`, dropping anything standing
    /// there, and marks it as moved. Returns `None` when `mv.from` is empty.
    ///
    /// The returned [`Undo`] reverts the move exactly through [`Board::unmake`].
    pub fn make(&mut self, mv: Move) -> Option<Undo> {
        let mut piece = self.cells[mv.from.index() as usize].take()?;
        let had_moved = piece.has_moved;
        piece.square = mv.to;
        piece.has_moved = true;
        let captured = self.cells[mv.to.index() as usize].replace(piece);
        Some(Undo {
            mv,
            captured,
            had_moved,
        })
    }

    /// Reverts a move made by [`Board::make`], restoring any captured piece
    /// and the mover's previous `has_moved` flag.
    pub fn unmake(&mut self, undo: Undo) {
        let Undo {
            mv,
            captured,
            had_moved,
        } = undo;
        if let Some(mut piece) = self.cells[mv.to.index() as usize].take() {
            piece.square = mv.from;
            piece.has_moved = had_moved;
            self.cells[mv.from.index() as usize] = Some(piece);
        }
        self.cells[mv.to.index() as usize] = captured;
    }

    /// Moves the piece on `mv.to` back to `mv.from` and clears `mv.to`.
    ///
    /// This is the history-driven take-back: the restored piece is marked
    /// unmoved regardless of its past, and nothing is put back on `mv.to`.
    /// Returns false if `mv.to` held no piece.
    pub fn take_back(&mut self, mv: Move) -> bool {
        let piece = self.cells[mv.to.index() as usize].take();
        let restored = piece.is_some();
        self.cells[mv.from.index() as usize] = piece.map(|mut p| {
            p.square = mv.from;
            p.has_moved = false;
            p
        });
        restored
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn mv(s: &str) -> Move {
        Move::from_coordinates(s).unwrap()
    }

    #[test]
    fn starting_layout() {
        let board = Board::starting();
        assert_eq!(board.to_fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
        let e8 = board.piece_at(sq("e8")).unwrap();
        assert_eq!((e8.color, e8.piece), (Color::Black, Piece::King));
        assert_eq!(e8.square(), sq("e8"));
    }

    #[test]
    fn every_piece_knows_its_square() {
        let board = Board::starting();
        for sq in Square::all() {
            if let Some(p) = board.piece_at(sq) {
                assert_eq!(p.square(), sq);
                assert!(!p.has_moved());
            }
        }
    }

    #[test]
    fn from_fen_marks_advanced_pawns() {
        let (board, side) = Board::from_fen("4k3/8/8/8/4P3/8/3P4/4K3 b").unwrap();
        assert_eq!(side, Color::Black);
        assert!(board.piece_at(sq("e4")).unwrap().has_moved());
        assert!(!board.piece_at(sq("d2")).unwrap().has_moved());
        assert!(!board.piece_at(sq("e1")).unwrap().has_moved());
    }

    #[test]
    fn occupancy_queries() {
        let board = Board::starting();
        assert!(board.is_empty(sq("e4")));
        assert!(!board.is_empty(sq("e2")));
        assert!(board.is_enemy(sq("e7"), Color::White));
        assert!(!board.is_enemy(sq("e2"), Color::White));
        assert!(!board.is_enemy(sq("e4"), Color::White));
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn make_moves_piece_and_updates_its_square() {
        let mut board = Board::starting();
        let undo = board.make(mv("e2e4")).unwrap();
        assert!(board.is_empty(sq("e2")));
        let pawn = board.piece_at(sq("e4")).unwrap();
        assert_eq!(pawn.square(), sq("e4"));
        assert!(pawn.has_moved());
        assert!(undo.captured().is_none());
    }

    #[test]
    fn make_from_empty_square() {
        let mut board = Board::starting();
        assert!(board.make(mv("e4e5")).is_none());
        assert_eq!(board, Board::starting());
    }

    #[test]
    fn unmake_restores_capture() {
        let (mut board, _) = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w").unwrap();
        let before = board.clone();
        let undo = board.make(mv("e4d5")).unwrap();
        assert_eq!(undo.captured().map(|p| p.piece), Some(Piece::Pawn));
        assert_eq!(board.pieces().count(), 3);
        board.unmake(undo);
        assert_eq!(board, before);
    }

    #[test]
    fn take_back_loses_capture_and_resets_flag() {
        let (mut board, _) = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w").unwrap();
        board.make(mv("e4d5")).unwrap();
        assert!(board.take_back(mv("e4d5")));
        assert!(board.is_empty(sq("d5")));
        let pawn = board.piece_at(sq("e4")).unwrap();
        assert_eq!(pawn.square(), sq("e4"));
        assert!(!pawn.has_moved());
    }

    #[test]
    fn take_back_from_empty_square() {
        let mut board = Board::starting();
        assert!(!board.take_back(mv("e2e4")));
        assert!(board.is_empty(sq("e2")));
    }
}

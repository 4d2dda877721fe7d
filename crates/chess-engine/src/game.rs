//! Game state: turn order, move history, undo and check/checkmate tracking.
//!
//! [`GameState`] is the only mutator a presentation layer needs. It owns the
//! board; callers read it through [`GameState::board`] or
//! [`GameState::snapshot`] and change it only through
//! [`GameState::attempt_move`] and [`GameState::undo_move`].

use chess_core::{Color, FenError, Move, Square};
use serde::Serialize;
use tracing::{debug, info};

use crate::check::is_in_check;
use crate::{Board, BoardSnapshot, MoveError, MoveValidator, SquareSet};

/// Status banner derived from the check flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
}

/// A game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Color,
    history: Vec<Move>,
    is_check: bool,
    is_checkmate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game from the standard setup with White to move.
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Color::White)
    }

    /// Creates a game from an arbitrary board, computing the check flags for
    /// the side to move.
    pub fn from_board(board: Board, current_player: Color) -> Self {
        let mut game = GameState {
            board,
            current_player,
            history: Vec::new(),
            is_check: false,
            is_checkmate: false,
        };
        game.refresh_status();
        game
    }

    /// Creates a game from a FEN placement and optional active color.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let (board, side) = Board::from_fen(fen)?;
        Ok(Self::from_board(board, side))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a render-ready copy of the board.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board)
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Returns true if the player to move is in check.
    pub fn is_check(&self) -> bool {
        self.is_check
    }

    /// Returns true if the player to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }

    /// Returns the status banner for the player to move.
    pub fn status(&self) -> GameStatus {
        if self.is_checkmate {
            GameStatus::Checkmate
        } else if self.is_check {
            GameStatus::Check
        } else {
            GameStatus::Normal
        }
    }

    /// Returns the winner once the game ended in checkmate.
    pub fn winner(&self) -> Option<Color> {
        self.is_checkmate.then(|| self.current_player.opposite())
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks whether the current player may move from `from` to `to`.
    pub fn validate(&self, from: Square, to: Square) -> Result<(), MoveError> {
        let mut scratch = self.board.clone();
        MoveValidator::new(&mut scratch, self.current_player)
            .validate(from, to)
            .map_err(|reason| MoveError::IllegalMove { from, to, reason })
    }

    /// Returns true if the current player may move from `from` to `to`.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.validate(from, to).is_ok()
    }

    /// Returns the legal destinations of the piece on `sq`. Empty unless the
    /// square holds a piece of the current player.
    pub fn legal_moves_for(&self, sq: Square) -> SquareSet {
        let mut scratch = self.board.clone();
        MoveValidator::new(&mut scratch, self.current_player).legal_destinations(sq)
    }

    /// Returns the legal destinations from raw `(row, col)` coordinates.
    pub fn legal_moves(&self, pos: (i32, i32)) -> Result<SquareSet, MoveError> {
        let sq = Square::try_from(pos)?;
        Ok(self.legal_moves_for(sq))
    }

    /// Plays a move for the current player.
    ///
    /// On success the move is recorded, any piece on `to` is dropped, the
    /// turn passes and check/checkmate are recomputed for the new player. On
    /// error nothing changes.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        let mut validator = MoveValidator::new(&mut self.board, self.current_player);
        if let Err(reason) = validator.validate(from, to) {
            debug!(%from, %to, %reason, "move rejected");
            return Err(MoveError::IllegalMove { from, to, reason });
        }

        let mv = Move::new(from, to);
        let made = self.board.make(mv);
        debug_assert!(made.is_some(), "validated move {mv} has no piece on its source");
        self.history.push(mv);
        self.current_player = self.current_player.opposite();
        self.refresh_status();

        debug!(%mv, status = ?self.status(), "move played");
        match self.status() {
            GameStatus::Checkmate => info!(winner = %self.current_player.opposite(), "checkmate"),
            GameStatus::Check => info!(side = %self.current_player, "check"),
            GameStatus::Normal => {}
        }
        Ok(())
    }

    /// Plays a move given as raw `(row, col)` coordinates, bounds-checking
    /// both before touching the board.
    pub fn try_move_coords(&mut self, from: (i32, i32), to: (i32, i32)) -> Result<(), MoveError> {
        let from = Square::try_from(from).map_err(|e| {
            debug!(error = %e, "move rejected");
            MoveError::from(e)
        })?;
        let to = Square::try_from(to).map_err(|e| {
            debug!(error = %e, "move rejected");
            MoveError::from(e)
        })?;
        self.try_move(from, to)
    }

    /// Plays a move given as raw `(row, col)` coordinates. Returns false and
    /// leaves the game untouched if either coordinate is off the board or the
    /// move is illegal.
    pub fn attempt_move(&mut self, from: (i32, i32), to: (i32, i32)) -> bool {
        self.try_move_coords(from, to).is_ok()
    }

    /// Takes back the last move. Returns false if there is nothing to undo.
    ///
    /// The move record holds only the two squares, so a captured piece is not
    /// restored, and the restored piece is marked as never having moved.
    /// Checkmate is cleared without re-testing.
    pub fn undo_move(&mut self) -> bool {
        let Some(mv) = self.history.pop() else {
            return false;
        };
        let restored = self.board.take_back(mv);
        debug_assert!(restored, "history move {mv} has no piece on its destination");
        self.current_player = self.current_player.opposite();
        self.is_check = is_in_check(&self.board, self.current_player);
        self.is_checkmate = false;
        info!(%mv, side = %self.current_player, "move taken back");
        true
    }

    /// Returns true if the current player has no legal move at all.
    ///
    /// Only meaningful while in check; the game never asks otherwise, so
    /// positions without a legal move and without check go unnoticed.
    pub fn checkmate_test(&self) -> bool {
        let mut scratch = self.board.clone();
        !MoveValidator::new(&mut scratch, self.current_player).has_legal_move()
    }

    fn refresh_status(&mut self) {
        self.is_check = is_in_check(&self.board, self.current_player);
        self.is_checkmate = self.is_check && self.checkmate_test();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IllegalReason;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn play(game: &mut GameState, moves: &[&str]) {
        for m in moves {
            let mv = Move::from_coordinates(m).unwrap();
            game.try_move(mv.from, mv.to)
                .unwrap_or_else(|e| panic!("{} rejected: {}", m, e));
        }
    }

    #[test]
    fn new_game() {
        let game = GameState::new();
        assert_eq!(game.current_player(), Color::White);
        assert!(game.history().is_empty());
        assert_eq!(game.status(), GameStatus::Normal);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn turn_passes_after_move() {
        let mut game = GameState::new();
        assert!(game.attempt_move((6, 4), (4, 4)));
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.history(), &[Move::new(sq("e2"), sq("e4"))]);
    }

    #[test]
    fn rejected_move_changes_nothing() {
        let mut game = GameState::new();
        let before = game.clone();
        assert!(!game.attempt_move((6, 4), (3, 4)));
        assert!(!game.attempt_move((1, 4), (3, 4)));
        assert!(!game.attempt_move((4, 4), (3, 4)));
        assert_eq!(game, before);
    }

    #[test]
    fn out_of_range_is_invalid_position() {
        let mut game = GameState::new();
        assert!(!game.attempt_move((6, 4), (-1, 4)));
        assert!(!game.attempt_move((8, 0), (7, 0)));
        assert!(matches!(
            game.legal_moves((0, 9)),
            Err(MoveError::InvalidPosition(_))
        ));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn coordinate_errors_are_distinct_from_illegal_moves() {
        let mut game = GameState::new();
        assert!(matches!(
            game.try_move_coords((6, 4), (6, 8)),
            Err(MoveError::InvalidPosition(_))
        ));
        assert!(matches!(
            game.try_move_coords((6, 4), (6, 5)),
            Err(MoveError::IllegalMove { .. })
        ));
    }

    #[test]
    fn reports_reason() {
        let mut game = GameState::new();
        let err = game.try_move(sq("e7"), sq("e5")).unwrap_err();
        assert_eq!(err.reason(), Some(IllegalReason::WrongTurn(Color::Black)));
        let err = game.try_move(sq("e2"), sq("e5")).unwrap_err();
        assert_eq!(err.reason(), Some(IllegalReason::Unreachable));
    }

    #[test]
    fn legal_moves_for_selection() {
        let game = GameState::new();
        let knight = game.legal_moves((7, 6)).unwrap();
        assert_eq!(knight, [sq("f3"), sq("h3")].into_iter().collect());
        assert!(game.legal_moves_for(sq("g8")).is_empty());
        assert!(game.legal_moves_for(sq("e4")).is_empty());
    }

    #[test]
    fn fools_mate() {
        let mut game = GameState::new();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert!(game.is_check());
        assert!(game.is_checkmate());
        assert_eq!(game.status(), GameStatus::Checkmate);
        assert_eq!(game.winner(), Some(Color::Black));
        assert!(!game.attempt_move((6, 0), (5, 0)));
    }

    #[test]
    fn check_without_mate() {
        let mut game = GameState::new();
        play(&mut game, &["e2e4", "f7f6", "d1h5"]);
        assert_eq!(game.status(), GameStatus::Check);
        assert!(!game.is_checkmate());
        assert!(game.is_legal(sq("g7"), sq("g6")));
        assert!(!game.is_legal(sq("a7"), sq("a6")));
    }

    #[test]
    fn undo_on_empty_history() {
        let mut game = GameState::new();
        assert!(!game.undo_move());
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn undo_quiet_move_restores_everything() {
        let mut game = GameState::new();
        let before = game.clone();
        play(&mut game, &["g1f3"]);
        assert!(game.undo_move());
        assert_eq!(game, before);
    }

    #[test]
    fn undo_clears_checkmate() {
        let mut game = GameState::new();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert!(game.undo_move());
        assert_eq!(game.current_player(), Color::Black);
        assert!(!game.is_checkmate());
        assert!(!game.is_check());
    }

    #[test]
    fn undo_drops_captured_piece() {
        let mut game = GameState::new();
        play(&mut game, &["e2e4", "d7d5", "e4d5"]);
        assert_eq!(game.board().pieces().count(), 31);
        assert!(game.undo_move());
        assert!(game.board().piece_at(sq("d5")).is_none());
        assert!(game.board().piece_at(sq("e4")).is_some());
        assert_eq!(game.board().pieces().count(), 31);
    }

    #[test]
    fn undo_resets_has_moved() {
        let mut game = GameState::new();
        play(&mut game, &["e2e3", "a7a6", "e3e4"]);
        assert!(game.undo_move());
        assert!(!game.board().piece_at(sq("e3")).unwrap().has_moved());
        // the double step still needs the start rank
        assert_eq!(game.legal_moves_for(sq("e3")), SquareSet::from_square(sq("e4")));
    }

    #[test]
    fn from_fen_computes_flags() {
        let game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b").unwrap();
        assert_eq!(game.current_player(), Color::Black);
        assert!(game.is_checkmate());
        assert!(GameState::from_fen("not a fen").is_err());
    }

    #[test]
    fn stalemate_goes_unnoticed() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b").unwrap();
        assert_eq!(game.status(), GameStatus::Normal);
        assert!(game.checkmate_test());
    }
}

//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - 8x8 grid owning the pieces, with make/unmake of moves
//! - [`movegen`] - pseudo-legal move generation per piece kind
//! - [`is_in_check`] - check detection
//! - [`MoveValidator`] - legal move filtering by simulating each move
//! - [`GameState`] - turn order, history, undo, check and checkmate flags
//!
//! Castling, en passant, promotion and draw rules are not part of this rule
//! set.
//!
//! # Example
//!
//! ```
//! use chess_engine::{GameState, GameStatus};
//!
//! let mut game = GameState::new();
//! assert!(game.attempt_move((6, 5), (5, 5))); // f3
//! assert!(game.attempt_move((1, 4), (3, 4))); // e5
//! assert!(game.attempt_move((6, 6), (4, 6))); // g4
//! assert!(game.attempt_move((0, 3), (4, 7))); // Qh4#
//! assert_eq!(game.status(), GameStatus::Checkmate);
//! ```

mod board;
pub mod check;
mod error;
mod game;
pub mod movegen;
mod snapshot;
mod square_set;
mod validator;

pub use board::{Board, BoardPiece, Undo};
pub use check::is_in_check;
pub use error::{IllegalReason, MoveError};
pub use game::{GameState, GameStatus};
pub use movegen::pseudo_legal_moves;
pub use snapshot::{BoardSnapshot, PieceView};
pub use square_set::SquareSet;
pub use validator::MoveValidator;

//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates (row 0 is Black's back rank)
//! - [`Move`] for the from/to move record
//! - Board placement (FEN) parsing

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser};
pub use mov::Move;
pub use piece::Piece;
pub use square::{Square, SquareError};

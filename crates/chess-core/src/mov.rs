//! Move representation.

use crate::{Square, SquareError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move record: the square a piece left and the square it landed on.
///
/// The record deliberately carries nothing else. In particular it does not
/// remember a captured piece, so undoing a capture cannot restore it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_coordinates(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from coordinate notation.
    pub fn from_coordinates(s: &str) -> Result<Self, SquareError> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(SquareError::InvalidAlgebraic(s.to_string()));
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        Ok(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coordinates())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinates())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_coordinates() {
        let e2 = Square::new(6, 4).unwrap();
        let e4 = Square::new(4, 4).unwrap();
        let m = Move::new(e2, e4);
        assert_eq!(m.to_coordinates(), "e2e4");
        assert_eq!(Move::from_coordinates("e2e4"), Ok(m));
    }

    #[test]
    fn move_from_coordinates_rejects_garbage() {
        assert!(Move::from_coordinates("e2").is_err());
        assert!(Move::from_coordinates("e2e9").is_err());
        assert!(Move::from_coordinates("e2e4q").is_err());
        assert!(Move::from_coordinates("é2e4").is_err());
    }

    #[test]
    fn move_debug_display() {
        let m = Move::from_coordinates("g1f3").unwrap();
        assert_eq!(format!("{:?}", m), "Move(g1f3)");
        assert_eq!(format!("{}", m), "g1f3");
    }
}

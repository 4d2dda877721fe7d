//! Parsing of the commands typed at the prompt.

use chess_core::{Move, Square};
use thiserror::Error;

/// Errors produced by malformed input lines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("cannot read '{0}' as a square (use e2 or row,col)")]
    BadSquare(String),

    #[error("'{0}' expects {1}")]
    MissingArgument(&'static str, &'static str),
}

/// A raw `(row, col)` pair as typed; bounds are checked by the engine.
pub type Coords = (i32, i32);

/// Commands read from the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move a piece: `e2e4`, `e2 e4` or `6,4 4,4`.
    Move { from: Coords, to: Coords },
    /// Show the legal destinations of a piece.
    Moves(Coords),
    /// Take back the last move.
    Undo,
    /// Print the board.
    Board,
    /// Print the move history.
    History,
    /// Print the board snapshot as JSON.
    Json,
    /// Print the usage summary.
    Help,
    /// Leave the program.
    Quit,
    /// Anything else (empty lines included).
    Unknown(String),
}

impl Command {
    /// Parses one input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        let cmd = parts.next().unwrap_or("");

        match cmd {
            "undo" | "u" => Ok(Command::Undo),
            "board" => Ok(Command::Board),
            "history" => Ok(Command::History),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "moves" => {
                let at = parts
                    .next()
                    .ok_or(CommandError::MissingArgument("moves", "a square"))?;
                Ok(Command::Moves(parse_coords(at)?))
            }
            "" => Ok(Command::Unknown(String::new())),
            first => Self::parse_move(first, parts.next()),
        }
    }

    fn parse_move(first: &str, second: Option<&str>) -> Result<Self, CommandError> {
        match second {
            Some(second) => Ok(Command::Move {
                from: parse_coords(first)?,
                to: parse_coords(second)?,
            }),
            None if first.len() == 4 => {
                let mv = Move::from_coordinates(first)
                    .map_err(|_| CommandError::BadSquare(first.to_string()))?;
                Ok(Command::Move {
                    from: mv.from.into(),
                    to: mv.to.into(),
                })
            }
            None => Ok(Command::Unknown(first.to_string())),
        }
    }
}

/// Reads a square either as algebraic (`e2`) or as `row,col`.
fn parse_coords(s: &str) -> Result<Coords, CommandError> {
    if let Some((row, col)) = s.split_once(',') {
        let bad = || CommandError::BadSquare(s.to_string());
        let row = row.trim().parse::<i32>().map_err(|_| bad())?;
        let col = col.trim().parse::<i32>().map_err(|_| bad())?;
        return Ok((row, col));
    }
    Square::from_algebraic(s)
        .map(Into::into)
        .map_err(|_| CommandError::BadSquare(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_coordinate_move() {
        assert_eq!(
            Command::parse("e2e4"),
            Ok(Command::Move {
                from: (6, 4),
                to: (4, 4)
            })
        );
        assert_eq!(
            Command::parse("  g8 f6 "),
            Ok(Command::Move {
                from: (0, 6),
                to: (2, 5)
            })
        );
    }

    #[test]
    fn parse_row_col_move_keeps_raw_values() {
        assert_eq!(
            Command::parse("6,4 9,4"),
            Ok(Command::Move {
                from: (6, 4),
                to: (9, 4)
            })
        );
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(Command::parse("undo"), Ok(Command::Undo));
        assert_eq!(Command::parse("u"), Ok(Command::Undo));
        assert_eq!(Command::parse("board"), Ok(Command::Board));
        assert_eq!(Command::parse("history"), Ok(Command::History));
        assert_eq!(Command::parse("json"), Ok(Command::Json));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("moves b1"), Ok(Command::Moves((7, 1))));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Command::parse("moves"),
            Err(CommandError::MissingArgument("moves", "a square"))
        );
        assert_eq!(
            Command::parse("e2 z9"),
            Err(CommandError::BadSquare("z9".to_string()))
        );
        assert_eq!(
            Command::parse("x,1 e4"),
            Err(CommandError::BadSquare("x,1".to_string()))
        );
        assert_eq!(
            Command::parse("e2e9"),
            Err(CommandError::BadSquare("e2e9".to_string()))
        );
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(Command::parse(""), Ok(Command::Unknown(String::new())));
        assert_eq!(
            Command::parse("castle"),
            Ok(Command::Unknown("castle".to_string()))
        );
    }
}

//! One interactive game: applies commands to a `GameState` and renders replies.

use anyhow::Result;
use chess_core::{Color, Move};
use chess_engine::{BoardSnapshot, GameState, GameStatus, SquareSet};
use serde::Serialize;
use tracing::debug;

use crate::command::{Command, Coords};
use crate::config::CliConfig;

/// Everything a renderer needs, in one serializable value.
#[derive(Serialize)]
struct View<'a> {
    board: BoardSnapshot,
    current_player: Color,
    status: GameStatus,
    history: &'a [Move],
}

/// A game session driven by text commands.
pub struct Session {
    game: GameState,
    history_len: usize,
    show_legal_moves: bool,
    json: bool,
}

impl Session {
    /// Starts a session from the configured position. With `json` set, the
    /// board is rendered as a JSON view instead of ASCII.
    pub fn new(config: &CliConfig, json: bool) -> Result<Self> {
        let game = match &config.start_fen {
            Some(fen) => GameState::from_fen(fen)?,
            None => GameState::new(),
        };
        Ok(Session {
            game,
            history_len: config.history_len,
            show_legal_moves: config.show_legal_moves,
            json,
        })
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Runs one command. Returns `None` when the session should end.
    pub fn execute(&mut self, cmd: Command) -> Result<Option<String>> {
        let reply = match cmd {
            Command::Quit => return Ok(None),
            Command::Move { from, to } => self.play(from, to)?,
            Command::Moves(at) => self.destinations(at),
            Command::Undo => {
                if self.game.undo_move() {
                    self.render()?
                } else {
                    "Nothing to undo".to_string()
                }
            }
            Command::Board => self.render()?,
            Command::History => self.history(),
            Command::Json => self.json()?,
            Command::Help => HELP.to_string(),
            Command::Unknown(s) if s.is_empty() => String::new(),
            Command::Unknown(s) => format!("Unknown command: {} (try 'help')", s),
        };
        Ok(Some(reply))
    }

    fn render(&self) -> Result<String> {
        if self.json {
            self.json()
        } else {
            Ok(format!("{}\n{}", self.game.snapshot(), self.banner()))
        }
    }

    fn play(&mut self, from: Coords, to: Coords) -> Result<String> {
        let mut reply = match self.game.try_move_coords(from, to) {
            Ok(()) => return self.render(),
            Err(e) => format!("Invalid move: {}", e),
        };
        if self.show_legal_moves {
            if let Ok(set) = self.game.legal_moves(from) {
                if !set.is_empty() {
                    reply.push_str(&format!("\nLegal moves: {}", list(set)));
                }
            }
        }
        Ok(reply)
    }

    fn destinations(&self, at: Coords) -> String {
        match self.game.legal_moves(at) {
            Ok(set) if !self.show_legal_moves => format!("{} legal moves", set.len()),
            Ok(set) if set.is_empty() => "No legal moves".to_string(),
            Ok(set) => format!("Legal moves: {}", list(set)),
            Err(e) => format!("{}", e),
        }
    }

    fn history(&self) -> String {
        let moves = self.game.history();
        if moves.is_empty() {
            return "No moves yet".to_string();
        }
        let skip = moves.len().saturating_sub(self.history_len);
        moves
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(i, m)| format!("{}. {} → {}", i + 1, m.from, m.to))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn json(&self) -> Result<String> {
        let view = View {
            board: self.game.snapshot(),
            current_player: self.game.current_player(),
            status: self.game.status(),
            history: self.game.history(),
        };
        debug!(plies = view.history.len(), "rendering json view");
        Ok(serde_json::to_string(&view)?)
    }

    /// Status line shown under the board.
    pub fn banner(&self) -> String {
        let side = self.game.current_player();
        match self.game.status() {
            GameStatus::Checkmate => format!("Checkmate! {} wins!", side.opposite()),
            GameStatus::Check => {
                format!("{} KING IS IN CHECK!", side.to_string().to_uppercase())
            }
            GameStatus::Normal => format!("{} to move", side),
        }
    }
}

fn list(set: SquareSet) -> String {
    set.into_iter()
        .map(|sq| sq.to_algebraic())
        .collect::<Vec<_>>()
        .join(" ")
}

const HELP: &str = "\
Commands:
  e2e4 | e2 e4 | 6,4 4,4   move a piece
  moves e2                 legal destinations of a piece
  undo                     take back the last move
  board                    print the board
  history                  print the latest moves
  json                     print board, turn and history as JSON
  quit                     leave";

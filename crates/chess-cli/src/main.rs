//! Terminal front end for the chess rules engine.
//!
//! Reads moves and commands from stdin, forwards them to the engine and
//! prints the board with check/checkmate banners.

mod command;
mod config;
mod session;

use clap::Parser;
use command::Command;
use config::CliConfig;
use session::Session;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Play chess in the terminal.
#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Two-player chess in the terminal with full move validation")]
struct Args {
    /// Path to the TOML configuration file (defaults to ./chess.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting position as FEN placement and side to move
    #[arg(long)]
    fen: Option<String>,

    /// Print each reply as a JSON view instead of an ASCII board
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = CliConfig::load(args.config.as_deref())?;
    if let Some(fen) = args.fen {
        config.start_fen = Some(fen);
    }

    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level()?)
        .with_writer(io::stderr)
        .init();
    tracing::info!(?config, "starting chess-cli");

    let mut session = Session::new(&config, args.json)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Some(board) = session.execute(Command::Board)? {
        writeln!(stdout, "{}", board)?;
    }

    for line in stdin.lock().lines() {
        let line = line?;
        let cmd = match Command::parse(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                continue;
            }
        };

        match session.execute(cmd)? {
            None => break,
            Some(reply) if reply.is_empty() => {}
            Some(reply) => writeln!(stdout, "{}", reply)?,
        }
        stdout.flush()?;
    }

    Ok(())
}

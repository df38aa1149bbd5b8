//! chess-rules - play a two-player game in the terminal.
//!
//! Moves are entered as `row,col row,col`. Row 0 is Black's back rank;
//! White moves first, from rows 6 and 7.

mod config;
mod game;

use anyhow::Context;
use clap::Parser;
use config::GameConfig;
use game::{Command, Game, Outcome, Status};
use rules_core::{Color, Layout};
use rules_engine::{Board, BoardSnapshot};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-rules")]
#[command(about = "Two-player chess in the terminal")]
struct Args {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting position in layout notation, overriding the config file
    #[arg(long)]
    layout: Option<String>,

    /// Load the starting position from a JSON snapshot
    #[arg(long)]
    load: Option<PathBuf>,

    /// Write the final position to a JSON snapshot on exit
    #[arg(long)]
    save: Option<PathBuf>,
}

const HELP: &str = "\
commands:
  r,c r,c     move the piece on the first square to the second
  r,c         list the legal moves of the piece on a square (x marks a capture)
  board       print the board
  history     print the moves played so far
  graveyard   print the captured pieces
  quit        end the game";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = GameConfig::load(args.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let board = starting_board(&args, &config)?;
    tracing::info!("Starting game");
    let mut game = Game::new(board);

    run(&mut game, &config)?;

    if let Some(path) = &args.save {
        let json = game.board().snapshot().to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
        tracing::info!("Saved position to {}", path.display());
    }
    Ok(())
}

fn starting_board(args: &Args, config: &GameConfig) -> anyhow::Result<Board> {
    if let Some(path) = &args.load {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        let snapshot = BoardSnapshot::from_json(&json)?;
        tracing::info!("Loaded position from {}", path.display());
        return Ok(Board::from_snapshot(&snapshot)?);
    }
    let text = args.layout.as_deref().unwrap_or(&config.layout);
    let layout = Layout::parse(text).with_context(|| format!("Invalid layout '{}'", text))?;
    Ok(Board::from_layout(&layout))
}

fn run(game: &mut Game, config: &GameConfig) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", game.board());
    println!("{}", HELP);

    loop {
        let status = game.status();
        match status {
            Status::Check => println!("{} is in check.", game.turn()),
            Status::Checkmate => println!("Checkmate. {} wins.", game.turn().opposite()),
            Status::Stalemate => println!("Stalemate."),
            Status::InPlay => {}
        }
        if status.is_over() {
            return Ok(());
        }

        print!("{} to move> ", game.turn());
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match command {
            Command::Move(from, to) => match game.play(from, to) {
                Outcome::Played => println!("{}", game.board()),
                rejected => println!("{}", rejected),
            },
            Command::Show(sq) => {
                if !config.show_legal_moves {
                    println!("legal move hints are disabled");
                    continue;
                }
                match game.legal_moves_from(sq) {
                    Some(moves) if moves.is_empty() => println!("no legal moves"),
                    Some(moves) => println!("{}", game.describe_moves(moves)),
                    None => println!("no piece of yours on {}", sq),
                }
            }
            Command::Board => println!("{}", game.board()),
            Command::History => {
                for (n, line) in game.history().lines().iter().enumerate() {
                    println!("{:>3}. {}", n + 1, line);
                }
            }
            Command::Graveyard => {
                for color in Color::SIDES {
                    let captured: Vec<String> = game
                        .graveyard()
                        .of_color(color)
                        .map(|p| p.kind().to_string())
                        .collect();
                    println!("{}: {}", color, captured.join(", "));
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => return Ok(()),
        }
    }
}

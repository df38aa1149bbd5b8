//! Turn management on top of the rules engine.
//!
//! The engine validates single moves; this module decides whose turn it is,
//! keeps the graveyard and history, and derives check, checkmate and
//! stalemate from the engine's per-piece queries.

use rules_core::{Color, Square, SquareSet};
use rules_engine::{
    has_legal_moves, is_checked, legal_moves, try_move, Board, Graveyard, MoveHistory, MoveLog,
    TracingMoveLog,
};
use std::fmt;
use thiserror::Error;

/// Errors from parsing a line of player input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("invalid square '{0}', expected row,col with both in 0-7")]
    BadSquare(String),
    #[error("unknown command '{0}'")]
    Unknown(String),
}

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move from the first square to the second.
    Move(Square, Square),
    /// List the legal destinations of the piece on a square.
    Show(Square),
    Board,
    History,
    Graveyard,
    Help,
    Quit,
}

impl Command {
    /// Parses `"r,c r,c"`, `"r,c"` or a keyword.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(CommandError::Empty),
            ["board"] => Ok(Command::Board),
            ["history"] => Ok(Command::History),
            ["graveyard"] => Ok(Command::Graveyard),
            ["help"] => Ok(Command::Help),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            [from] if from.contains(',') => Ok(Command::Show(parse_square(from)?)),
            [from, to] => Ok(Command::Move(parse_square(from)?, parse_square(to)?)),
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

/// Parses `"row,col"` into a square.
pub fn parse_square(text: &str) -> Result<Square, CommandError> {
    let bad = || CommandError::BadSquare(text.to_string());
    let (row, col) = text.split_once(',').ok_or_else(bad)?;
    let row: i8 = row.trim().parse().map_err(|_| bad())?;
    let col: i8 = col.trim().parse().map_err(|_| bad())?;
    Square::at(row, col).ok_or_else(bad)
}

/// Where the side to move stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InPlay,
    Check,
    Checkmate,
    Stalemate,
}

impl Status {
    /// Returns true once the side to move cannot move.
    pub fn is_over(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }
}

/// Result of submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Played,
    EmptySquare,
    NotYourPiece,
    Illegal,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Played => write!(f, "move played"),
            Outcome::EmptySquare => write!(f, "there is no piece on that square"),
            Outcome::NotYourPiece => write!(f, "that piece belongs to the other side"),
            Outcome::Illegal => write!(f, "illegal move"),
        }
    }
}

/// Records move lines and echoes them through `tracing`.
#[derive(Debug, Default)]
struct SessionLog {
    history: MoveHistory,
    echo: TracingMoveLog,
}

impl MoveLog for SessionLog {
    fn add_to_log(&mut self, line: &str) {
        self.history.add_to_log(line);
        self.echo.add_to_log(line);
    }
}

/// A game in progress.
#[derive(Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    graveyard: Graveyard,
    log: SessionLog,
}

impl Game {
    /// Starts a game on `board` with White to move.
    pub fn new(board: Board) -> Self {
        Game {
            board,
            turn: Color::White,
            graveyard: Graveyard::new(),
            log: SessionLog::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn graveyard(&self) -> &Graveyard {
        &self.graveyard
    }

    pub fn history(&self) -> &MoveHistory {
        &self.log.history
    }

    /// Returns the legal destinations of the side to move's piece on `sq`.
    pub fn legal_moves_from(&mut self, sq: Square) -> Option<SquareSet> {
        let piece = self.board.piece_at(sq)?;
        if piece.color() != self.turn {
            return None;
        }
        Some(legal_moves(&mut self.board, sq))
    }

    /// Lists destinations, marking captures with a trailing `x`.
    pub fn describe_moves(&self, moves: SquareSet) -> String {
        moves
            .iter()
            .map(|to| {
                if self.board.is_occupied(to) {
                    format!("{}x", to)
                } else {
                    to.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Plays a move for the side to move and passes the turn on success.
    pub fn play(&mut self, from: Square, to: Square) -> Outcome {
        let Some(piece) = self.board.piece_at(from) else {
            return Outcome::EmptySquare;
        };
        if piece.color() != self.turn {
            return Outcome::NotYourPiece;
        }
        if !try_move(&mut self.board, from, to, &mut self.graveyard, &mut self.log) {
            return Outcome::Illegal;
        }
        self.turn = self.turn.opposite();
        Outcome::Played
    }

    /// Derives the side to move's status from check and remaining moves.
    pub fn status(&mut self) -> Status {
        let checked = is_checked(&self.board, self.turn);
        let squares: Vec<Square> = self.board.pieces_of(self.turn).map(|p| p.square()).collect();
        let can_move = squares
            .into_iter()
            .any(|sq| has_legal_moves(&mut self.board, sq));
        match (checked, can_move) {
            (true, true) => Status::Check,
            (true, false) => Status::Checkmate,
            (false, true) => Status::InPlay,
            (false, false) => Status::Stalemate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules_core::{Layout, PieceKind};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn game(layout: &str) -> Game {
        Game::new(Board::from_layout(&Layout::parse(layout).unwrap()))
    }

    #[test]
    fn parse_commands() {
        assert_eq!(
            Command::parse("6,4 4,4"),
            Ok(Command::Move(sq(6, 4), sq(4, 4)))
        );
        assert_eq!(Command::parse(" 7,1 "), Ok(Command::Show(sq(7, 1))));
        assert_eq!(Command::parse("history"), Ok(Command::History));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("8,0 7,0"),
            Err(CommandError::BadSquare("8,0".to_string()))
        );
        assert_eq!(
            Command::parse("castle"),
            Err(CommandError::Unknown("castle".to_string()))
        );
    }

    #[test]
    fn parse_square_rejects_garbage() {
        assert!(parse_square("3;4").is_err());
        assert!(parse_square("a,1").is_err());
        assert!(parse_square("-1,0").is_err());
        assert_eq!(parse_square("0, 7"), Ok(sq(0, 7)));
    }

    #[test]
    fn turns_alternate() {
        let mut game = Game::new(Board::standard());
        assert_eq!(game.play(sq(1, 4), sq(3, 4)), Outcome::NotYourPiece);
        assert_eq!(game.play(sq(6, 4), sq(4, 4)), Outcome::Played);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.play(sq(4, 4), sq(3, 4)), Outcome::NotYourPiece);
        assert_eq!(game.play(sq(4, 0), sq(3, 0)), Outcome::EmptySquare);
        assert_eq!(game.play(sq(1, 4), sq(1, 4)), Outcome::Illegal);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn legal_moves_only_for_side_to_move() {
        let mut game = Game::new(Board::standard());
        assert_eq!(game.legal_moves_from(sq(7, 1)).map(|s| s.len()), Some(2));
        assert_eq!(game.legal_moves_from(sq(0, 1)), None);
        assert_eq!(game.legal_moves_from(sq(4, 4)), None);
    }

    #[test]
    fn capture_destinations_are_marked() {
        let mut game = game("4k3/8/8/8/r7/8/8/R3K3");
        let moves = game.legal_moves_from(sq(7, 0)).unwrap();
        let text = game.describe_moves(moves);
        assert!(text.contains("(4, 0)x"));
        assert!(text.contains("(5, 0) "));
        assert!(!text.contains("(5, 0)x"));
    }

    #[test]
    fn fools_mate() {
        let mut game = Game::new(Board::standard());
        for (from, to) in [
            (sq(6, 5), sq(5, 5)),
            (sq(1, 4), sq(3, 4)),
            (sq(6, 6), sq(4, 6)),
            (sq(0, 3), sq(4, 7)),
        ] {
            assert_eq!(game.play(from, to), Outcome::Played);
        }
        assert_eq!(game.status(), Status::Checkmate);
        assert!(game.status().is_over());
    }

    #[test]
    fn check_with_escape() {
        let mut game = game("4k3/8/8/8/8/8/8/r3K3");
        assert_eq!(game.status(), Status::Check);
    }

    #[test]
    fn stalemate() {
        // White king in the corner, black queen covering every flight square.
        let mut game = game("7k/8/8/8/8/8/5q2/7K");
        assert_eq!(game.status(), Status::Stalemate);
    }

    #[test]
    fn captures_reach_graveyard() {
        let mut game = game("4k3/8/8/8/r7/8/8/R3K3");
        assert_eq!(game.play(sq(7, 0), sq(4, 0)), Outcome::Played);
        assert_eq!(game.graveyard().of_color(Color::Black).count(), 1);
        assert_eq!(game.graveyard().pieces()[0].kind(), PieceKind::Rook);
        assert_eq!(game.history().last(), Some("Rook @ (7, 0) -> (4, 0)"));
    }
}

//! Collaborators notified by committed moves.
//!
//! [`try_move`](crate::try_move) reports captures to a [`CaptureSink`] and
//! each committed move to a [`MoveLog`]. Both are passed in by the caller,
//! so the engine holds no references to its surroundings.

use rules_core::{Color, Piece};

/// Receives pieces removed from the board by captures.
pub trait CaptureSink {
    /// Takes ownership of a captured piece. Called once per capture.
    fn add_piece(&mut self, piece: Piece);
}

/// Receives one line of text per committed move.
pub trait MoveLog {
    /// Records a move line of the form `"<Kind> @ (row, col) -> (row, col)"`.
    fn add_to_log(&mut self, line: &str);
}

impl CaptureSink for Vec<Piece> {
    fn add_piece(&mut self, piece: Piece) {
        self.push(piece);
    }
}

impl MoveLog for Vec<String> {
    fn add_to_log(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Captured pieces, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graveyard {
    pieces: Vec<Piece>,
}

impl Graveyard {
    /// Creates an empty graveyard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every captured piece.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Iterates over captured pieces of one color.
    pub fn of_color(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.color() == color)
    }

    /// Returns the number of captured pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns true if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl CaptureSink for Graveyard {
    fn add_piece(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }
}

/// Move lines, in the order they were committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    lines: Vec<String>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the most recent line.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Returns the number of recorded moves.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no move has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl MoveLog for MoveHistory {
    fn add_to_log(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Forwards move lines to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMoveLog;

impl MoveLog for TracingMoveLog {
    fn add_to_log(&mut self, line: &str) {
        tracing::info!(target: "rules_engine::moves", "{}", line);
    }
}

/// Discards everything it receives.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl CaptureSink for NullSink {
    fn add_piece(&mut self, _piece: Piece) {}
}

impl MoveLog for NullSink {
    fn add_to_log(&mut self, _line: &str) {}
}

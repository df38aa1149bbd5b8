//! Serialisable board snapshots.
//!
//! A snapshot records, for each of the 64 squares in row-major order, the
//! piece standing there and whether it has moved. Cached candidate sets
//! are not stored; they are regenerated when a snapshot is restored.

use crate::Board;
use rules_core::{Color, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from restoring a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot has {0} squares, expected 64")]
    SquareCount(usize),

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareEntry {
    pub kind: PieceKind,
    pub color: Color,
    pub not_moved: bool,
}

/// The full board, square by square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub squares: Vec<Option<SquareEntry>>,
}

impl BoardSnapshot {
    /// Serialises the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot from JSON and checks its square count.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: BoardSnapshot = serde_json::from_str(json)?;
        if snapshot.squares.len() != 64 {
            return Err(SnapshotError::SquareCount(snapshot.squares.len()));
        }
        Ok(snapshot)
    }
}

impl Board {
    /// Captures the current position.
    pub fn snapshot(&self) -> BoardSnapshot {
        let squares = Square::all()
            .map(|sq| {
                self.piece_at(sq).map(|piece| SquareEntry {
                    kind: piece.kind(),
                    color: piece.color(),
                    not_moved: piece.is_unmoved(),
                })
            })
            .collect();
        BoardSnapshot { squares }
    }

    /// Rebuilds a board from a snapshot and regenerates every piece's
    /// cached moves.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, SnapshotError> {
        if snapshot.squares.len() != 64 {
            return Err(SnapshotError::SquareCount(snapshot.squares.len()));
        }
        let mut board = Board::empty();
        for (sq, entry) in Square::all().zip(&snapshot.squares) {
            if let Some(entry) = entry {
                let piece = Piece::new(entry.kind, entry.color, sq).with_unmoved(entry.not_moved);
                board.place(piece, sq);
            }
        }
        board.refresh_all();
        Ok(board)
    }
}

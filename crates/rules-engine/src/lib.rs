//! Chess rules engine over an 8x8 board.
//!
//! This crate provides:
//! - [`Board`] - the grid of cells that owns every piece in play
//! - [`movegen`] - per-piece candidate generation built on eight ray primitives
//! - [`is_square_attacked`], [`attackers_of`], [`is_checked`] - check detection
//! - [`legal_moves`], [`is_legal`] - the king-safety filter over candidates
//! - [`try_move`] - validated, atomic move commit
//! - [`CaptureSink`] and [`MoveLog`] - collaborators notified on commit
//! - [`BoardSnapshot`] - JSON save/load of a position
//!
//! # Orientation
//!
//! Row 0 is the top of the board. White pawns advance toward row 0 and
//! Black pawns toward row 7. "North" is toward row 0.
//!
//! # Example
//!
//! ```
//! use rules_engine::{try_move, Board, Graveyard, MoveHistory};
//! use rules_core::Square;
//!
//! let mut board = Board::standard();
//! let mut graveyard = Graveyard::new();
//! let mut history = MoveHistory::new();
//!
//! let from = Square::new(6, 4).unwrap();
//! let to = Square::new(4, 4).unwrap();
//! assert!(try_move(&mut board, from, to, &mut graveyard, &mut history));
//! assert_eq!(history.last(), Some("Pawn @ (6, 4) -> (4, 4)"));
//! ```

mod board;
mod check;
mod commit;
mod legality;
pub mod movegen;
mod sink;
mod snapshot;

pub use board::{Board, BoardError, Cell};
pub use check::{attackers_of, is_checked, is_king_checked, is_square_attacked};
pub use commit::{try_move, try_move_to};
pub use legality::{exposes_king, has_legal_moves, is_legal, legal_moves, SimulatedMove};
pub use movegen::{candidate_moves, candidate_moves_at};
pub use sink::{CaptureSink, Graveyard, MoveHistory, MoveLog, NullSink, TracingMoveLog};
pub use snapshot::{BoardSnapshot, SnapshotError, SquareEntry};

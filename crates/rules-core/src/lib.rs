//! Core types for the chess rules engine.
//!
//! This crate provides the value types shared by the engine and its callers:
//! - [`Color`] for sides, including the non-playing `Unassigned` sentinel
//! - [`PieceKind`] and [`Piece`] for piece representation
//! - [`Square`] and [`SquareSet`] for board coordinates
//! - [`Layout`] for text piece placement

mod color;
mod layout;
mod piece;
mod square;
mod square_set;

pub use color::Color;
pub use layout::{Layout, LayoutError};
pub use piece::{Piece, PieceKind};
pub use square::{is_on_board, OffBoard, Square};
pub use square_set::{SquareSet, SquareSetIter};

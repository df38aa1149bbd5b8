//! Piece placement notation.
//!
//! A layout lists the eight rows from row 0 to row 7, separated by `/`.
//! Upper-case letters are White pieces, lower-case letters are Black
//! pieces, and digits are runs of empty cells, as in the placement field
//! of FEN.

use crate::{Color, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur when parsing a layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character '{found}' in row {row}")]
    InvalidCharacter { row: usize, found: char },

    #[error("row {row} has {cells} cells, expected 8")]
    InvalidRowWidth { row: usize, cells: u32 },
}

/// A parsed piece placement: an optional kind and color per square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    cells: [Option<(PieceKind, Color)>; 64],
}

impl Layout {
    /// The standard starting placement, White on rows 6 and 7.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// The placement with no pieces.
    pub const EMPTY: &'static str = "8/8/8/8/8/8/8/8";

    /// Creates a layout with no pieces.
    pub const fn empty() -> Self {
        Layout { cells: [None; 64] }
    }

    /// Parses a layout string.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::InvalidRowCount(rows.len()));
        }

        let mut layout = Layout::empty();
        for (row, row_text) in rows.iter().enumerate() {
            let mut width = 0u32;
            for c in row_text.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    width += run;
                } else if let Some(piece) = PieceKind::from_char(c) {
                    if width < 8 {
                        layout.cells[row * 8 + width as usize] = Some(piece);
                    }
                    width += 1;
                } else {
                    return Err(LayoutError::InvalidCharacter { row, found: c });
                }
            }
            if width != 8 {
                return Err(LayoutError::InvalidRowWidth { row, cells: width });
            }
        }

        Ok(layout)
    }

    /// Returns the piece placed on a square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<(PieceKind, Color)> {
        self.cells[sq.index() as usize]
    }

    /// Places (or removes) a piece on a square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<(PieceKind, Color)>) {
        self.cells[sq.index() as usize] = piece;
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, PieceKind, Color)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|(kind, color)| (sq, kind, color)))
    }

    /// Converts the layout back to text.
    ///
    /// Unassigned pieces have no letter and are written as `?`, which
    /// [`Layout::parse`] rejects.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for row in 0..8u8 {
            let mut empty_run = 0;
            for col in 0..8u8 {
                let piece = Square::new(row, col).and_then(|sq| self.get(sq));
                match piece {
                    Some((kind, color)) => {
                        if empty_run > 0 {
                            text.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        text.push(kind.to_char(color));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                text.push_str(&empty_run.to_string());
            }
            if row < 7 {
                text.push('/');
            }
        }
        text
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::parse(Self::STANDARD).expect("STANDARD is valid")
    }
}

impl std::str::FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::parse(s)
    }
}

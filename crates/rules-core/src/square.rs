//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Returns true if `(row, col)` lies on the 8x8 board.
#[inline]
pub const fn is_on_board(row: i8, col: i8) -> bool {
    row >= 0 && row <= 7 && col >= 0 && col <= 7
}

/// A square on the board, addressed by row and column (both 0-7).
///
/// Row 0 is Black's back rank in the standard setup; White pawns advance
/// toward it. Squares are ordered row-major, so index = row * 8 + col.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

/// Error for coordinates outside the board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("square ({row}, {col}) is off the board")]
pub struct OffBoard {
    pub row: u8,
    pub col: u8,
}

#[derive(Deserialize)]
struct RawSquare {
    row: u8,
    col: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = OffBoard;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::new(raw.row, raw.col).ok_or(OffBoard {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Square {
    /// Creates a square, returning `None` if it is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, returning `None` off-board.
    #[inline]
    pub const fn at(row: i8, col: i8) -> Option<Self> {
        if is_on_board(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Creates a square from a row-major index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square {
                row: index / 8,
                col: index % 8,
            })
        } else {
            None
        }
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.row * 8 + self.col
    }

    /// Returns the square `(d_row, d_col)` away, or `None` if that leaves the board.
    ///
    /// Each axis is checked on its own, so a diagonal step off one edge
    /// never wraps onto the other side.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::at(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).filter_map(Square::from_index)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_new() {
        let sq = Square::new(4, 3).unwrap();
        assert_eq!(sq.row(), 4);
        assert_eq!(sq.col(), 3);
        assert_eq!(sq.index(), 35);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn signed_coordinates() {
        assert_eq!(Square::at(-1, 0), None);
        assert_eq!(Square::at(0, -1), None);
        assert_eq!(Square::at(7, 7), Square::new(7, 7));
    }

    #[test]
    fn offsets_do_not_wrap() {
        let corner = Square::new(0, 7).unwrap();
        assert_eq!(corner.offset(-1, 1), None);
        assert_eq!(corner.offset(1, 1), None);
        assert_eq!(corner.offset(1, -1), Square::new(1, 6));
    }

    #[test]
    fn index_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::from_index(sq.index()), Some(sq));
        }
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn display() {
        let sq = Square::new(6, 3).unwrap();
        assert_eq!(format!("{}", sq), "(6, 3)");
        assert_eq!(format!("{:?}", sq), "Square(6, 3)");
    }

    #[test]
    fn deserialize_rejects_off_board() {
        let sq: Square = serde_json::from_str(r#"{"row":6,"col":3}"#).unwrap();
        assert_eq!(sq, Square::new(6, 3).unwrap());
        assert_eq!(serde_json::to_string(&sq).unwrap(), r#"{"row":6,"col":3}"#);
        let err = serde_json::from_str::<Square>(r#"{"row":9,"col":0}"#).unwrap_err();
        assert!(err.to_string().contains("off the board"));
    }

    proptest! {
        #[test]
        fn at_agrees_with_predicate(row in -20i8..20, col in -20i8..20) {
            prop_assert_eq!(Square::at(row, col).is_some(), is_on_board(row, col));
        }
    }
}

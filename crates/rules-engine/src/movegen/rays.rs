//! Directional ray casting shared by the sliding pieces and the king.
//!
//! Each scan walks one square at a time from the origin. Empty squares are
//! collected; the first occupied square ends the scan and is collected only
//! if it holds an enemy piece.

use crate::Board;
use rules_core::{Color, Square};

/// Step limit that lets a ray run until the board edge.
pub const UNLIMITED: u8 = 8;

/// Step limit for the king.
pub const ONE_STEP: u8 = 1;

/// The eight compass directions. North is toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Returns the `(row, col)` step for this direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }
}

/// Scans from `origin` in one direction for a piece of `color`.
///
/// Returns at most `max_steps` squares, nearest first.
pub fn cast(
    board: &Board,
    origin: Square,
    color: Color,
    direction: Direction,
    max_steps: u8,
) -> Vec<Square> {
    let (d_row, d_col) = direction.delta();
    let mut squares = Vec::new();
    let mut current = origin;

    for _ in 0..max_steps {
        let Some(next) = current.offset(d_row, d_col) else {
            break;
        };
        match board.piece_at(next) {
            None => squares.push(next),
            Some(occupant) => {
                if color.is_enemy_of(occupant.color()) {
                    squares.push(next);
                }
                break;
            }
        }
        current = next;
    }

    squares
}

/// A ray primitive: `(board, origin, color, max_steps)` to the squares it reaches.
pub type Ray = fn(&Board, Square, Color, u8) -> Vec<Square>;

/// The four rook rays.
pub const ORTHOGONAL: [Ray; 4] = [north, south, east, west];

/// The four bishop rays.
pub const DIAGONAL: [Ray; 4] = [north_east, north_west, south_east, south_west];

/// All eight rays.
pub const ALL: [Ray; 8] = [
    north, south, east, west, north_east, north_west, south_east, south_west,
];

/// Scans toward row 0.
pub fn north(board: &Board, origin: Square, color: Color, max_steps: u8) -> Vec<Square> {
    cast(board, origin, color, Direction::North, max_steps)
}

/// Scans toward row 7.
pub fn south(board: &Board, origin: Square, color: Color, max_steps: u8) -> Vec<Square> {
    cast(board, origin, color, Direction::South, max_steps)
}

/// Scans toward column 7.
pub fn east(board: &Board, origin: Square, color: Color, max_steps: u8) -> Vec<Square> {
    cast(board, origin, color, Direction::East, max_steps)
}

/// Scans toward column 0.
pub fn west(board: &Board, origin: Square, color: Color, max_steps: u8) -> Vec<Square> {
    cast(board, origin, color, Direction::West, max_steps)
}

/// Scans diagonally toward row 0 and column 7.
pub fn north_east(board: &Board, origin: Square, color: Color, max_steps: u8) -> Vec<Square> {
    cast(board, origin, color, Direction::NorthEast, max_steps)
}

/// Scans diagonally toward row 0 and column 0.
pub fn north_west(board: &Board, origin: Square, color: Color, max_steps: u8) -> Vec<Square> {
    cast(board, origin, color, Direction::NorthWest, max_steps)
}

/// Scans diagonally toward row 7 and column 7.
pub fn south_east(board: &Board, origin: Square, color: Color, max_steps: u8) -> Vec<Square> {
    cast(board, origin, color, Direction::SouthEast, max_steps)
}

/// Scans diagonally toward row 7 and column 0.
pub fn south_west(board: &Board, origin: Square, color: Color, max_steps: u8) -> Vec<Square> {
    cast(board, origin, color, Direction::SouthWest, max_steps)
}

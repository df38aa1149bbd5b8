//! Chess piece representation.

use crate::{Color, Square, SquareSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the layout letter for this kind with the given color.
    ///
    /// White is upper case, Black lower case. Unassigned pieces use `?`.
    pub const fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
            Color::Unassigned => '?',
        }
    }

    /// Parses a layout letter into a kind and color.
    pub const fn from_char(c: char) -> Option<(PieceKind, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, color))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece standing on the board.
///
/// The board owns the piece; the stored square always mirrors the cell
/// holding it. `moves` caches the last generated candidate set and may be
/// stale: move validation always regenerates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    not_moved: bool,
    deferred: bool,
    moves: SquareSet,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            square,
            not_moved: true,
            deferred: false,
            moves: SquareSet::EMPTY,
        }
    }

    /// Creates a piece whose cached moves are not refreshed after it moves.
    ///
    /// The owner refreshes them explicitly when it sees fit.
    pub const fn deferred(kind: PieceKind, color: Color, square: Square) -> Self {
        let mut piece = Self::new(kind, color, square);
        piece.deferred = true;
        piece
    }

    /// Returns the kind of this piece.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns the side this piece plays for.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the square this piece stands on.
    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Returns true until the piece's first committed move.
    ///
    /// Only pawns consult this flag (for the two-square advance).
    #[inline]
    pub const fn is_unmoved(&self) -> bool {
        self.not_moved
    }

    /// Returns true if cached moves are refreshed by the owner, not on commit.
    #[inline]
    pub const fn is_deferred(&self) -> bool {
        self.deferred
    }

    /// Returns the last cached candidate set.
    #[inline]
    pub const fn possible_moves(&self) -> SquareSet {
        self.moves
    }

    /// Returns true if the other piece belongs to the opposing side.
    #[inline]
    pub const fn is_enemy(&self, other: &Piece) -> bool {
        self.color.is_enemy_of(other.color)
    }

    /// Records the square this piece now stands on.
    ///
    /// Only the board should call this, when placing the piece in a cell.
    #[inline]
    pub fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    /// Clears the "not moved" flag.
    #[inline]
    pub fn mark_moved(&mut self) {
        self.not_moved = false;
    }

    /// Restores the "not moved" flag, used when loading saved boards.
    #[inline]
    pub fn with_unmoved(mut self, not_moved: bool) -> Self {
        self.not_moved = not_moved;
        self
    }

    /// Replaces the cached candidate set.
    #[inline]
    pub fn cache_moves(&mut self, moves: SquareSet) {
        self.moves = moves;
    }

    /// Returns the queen that replaces this piece on promotion.
    pub const fn promoted(&self) -> Piece {
        let mut queen = Piece::new(PieceKind::Queen, self.color, self.square);
        queen.not_moved = false;
        queen
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.kind, self.square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn kind_to_char() {
        assert_eq!(PieceKind::Pawn.to_char(Color::White), 'P');
        assert_eq!(PieceKind::Pawn.to_char(Color::Black), 'p');
        assert_eq!(PieceKind::King.to_char(Color::White), 'K');
        assert_eq!(PieceKind::Knight.to_char(Color::Black), 'n');
        assert_eq!(PieceKind::Queen.to_char(Color::Unassigned), '?');
    }

    #[test]
    fn kind_from_char() {
        assert_eq!(
            PieceKind::from_char('P'),
            Some((PieceKind::Pawn, Color::White))
        );
        assert_eq!(
            PieceKind::from_char('p'),
            Some((PieceKind::Pawn, Color::Black))
        );
        assert_eq!(
            PieceKind::from_char('K'),
            Some((PieceKind::King, Color::White))
        );
        assert_eq!(PieceKind::from_char('x'), None);
    }


    #[test]
    fn identity_display() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, sq(6, 3));
        assert_eq!(pawn.to_string(), "Pawn @ (6, 3)");
    }

    #[test]
    fn new_piece_is_unmoved() {
        let mut pawn = Piece::new(PieceKind::Pawn, Color::Black, sq(1, 0));
        assert!(pawn.is_unmoved());
        assert!(!pawn.is_deferred());
        pawn.mark_moved();
        assert!(!pawn.is_unmoved());
    }

    #[test]
    fn enemies_ignore_unassigned() {
        let white = Piece::new(PieceKind::Rook, Color::White, sq(0, 0));
        let black = Piece::new(PieceKind::Rook, Color::Black, sq(0, 1));
        let neutral = Piece::new(PieceKind::Rook, Color::Unassigned, sq(0, 2));
        assert!(white.is_enemy(&black));
        assert!(!white.is_enemy(&neutral));
        assert!(!neutral.is_enemy(&black));
    }

    #[test]
    fn promotion_keeps_color_and_square() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, sq(0, 4));
        let queen = pawn.promoted();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.color(), Color::White);
        assert_eq!(queen.square(), sq(0, 4));
        assert!(!queen.is_unmoved());
    }

    #[test]
    fn deferred_piece() {
        let knight = Piece::deferred(PieceKind::Knight, Color::White, sq(7, 1));
        assert!(knight.is_deferred());
        assert!(knight.possible_moves().is_empty());
    }
}

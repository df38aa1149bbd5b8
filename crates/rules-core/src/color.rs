//! Side (color) representation.

use serde::{Deserialize, Serialize};

/// The side a piece belongs to.
///
/// `Unassigned` marks a piece with no side. Such pieces never move, are
/// never captured, and never count as anyone's enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
    #[default]
    Unassigned = 2,
}

impl Color {
    /// The two playing sides.
    pub const SIDES: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposing side. `Unassigned` has no opponent.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::Unassigned => Color::Unassigned,
        }
    }

    /// Returns true for White and Black.
    #[inline]
    pub const fn is_side(self) -> bool {
        !matches!(self, Color::Unassigned)
    }

    /// Returns true if a piece of this color may capture a piece of `other`.
    #[inline]
    pub const fn is_enemy_of(self, other: Color) -> bool {
        matches!(
            (self, other),
            (Color::White, Color::Black) | (Color::Black, Color::White)
        )
    }

    /// Returns the row step a pawn of this color advances by.
    ///
    /// White advances toward row 0, Black toward row 7.
    #[inline]
    pub const fn pawn_direction(self) -> Option<i8> {
        match self {
            Color::White => Some(-1),
            Color::Black => Some(1),
            Color::Unassigned => None,
        }
    }

    /// Returns the row on which a pawn of this color promotes.
    #[inline]
    pub const fn promotion_row(self) -> Option<u8> {
        match self {
            Color::White => Some(0),
            Color::Black => Some(7),
            Color::Unassigned => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
            Color::Unassigned => write!(f, "Unassigned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_color() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::Unassigned.opposite(), Color::Unassigned);
    }

    #[test]
    fn enemies() {
        assert!(Color::White.is_enemy_of(Color::Black));
        assert!(Color::Black.is_enemy_of(Color::White));
        assert!(!Color::White.is_enemy_of(Color::White));
        assert!(!Color::White.is_enemy_of(Color::Unassigned));
        assert!(!Color::Unassigned.is_enemy_of(Color::Black));
        assert!(!Color::Unassigned.is_enemy_of(Color::Unassigned));
    }

    #[test]
    fn pawn_direction() {
        assert_eq!(Color::White.pawn_direction(), Some(-1));
        assert_eq!(Color::Black.pawn_direction(), Some(1));
        assert_eq!(Color::Unassigned.pawn_direction(), None);
    }

    #[test]
    fn promotion_row() {
        assert_eq!(Color::White.promotion_row(), Some(0));
        assert_eq!(Color::Black.promotion_row(), Some(7));
        assert_eq!(Color::Unassigned.promotion_row(), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "White");
        assert_eq!(format!("{}", Color::Black), "Black");
        assert_eq!(format!("{}", Color::Unassigned), "Unassigned");
    }
}

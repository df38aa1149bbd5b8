//! Check detection.
//!
//! A square is attacked when some enemy piece's candidate set contains it.
//! Only raw candidate generation is consulted here, never the legality
//! filter, so detection cannot recurse back into itself.

use crate::movegen::candidate_moves;
use crate::Board;
use rules_core::{Color, Piece, PieceKind, Square};

/// Returns true if any enemy of `color` has `sq` among its candidate moves.
pub fn is_square_attacked(board: &Board, sq: Square, color: Color) -> bool {
    board
        .pieces()
        .filter(|p| p.color().is_enemy_of(color))
        .any(|p| candidate_moves(board, p).contains(sq))
}

/// Returns every enemy of `color` that has `sq` among its candidate moves.
pub fn attackers_of(board: &Board, sq: Square, color: Color) -> Vec<&Piece> {
    board
        .pieces()
        .filter(|p| p.color().is_enemy_of(color))
        .filter(|p| candidate_moves(board, p).contains(sq))
        .collect()
}

/// Returns true if the king standing on `king_sq` is attacked.
///
/// Returns false when no king stands on that square.
pub fn is_king_checked(board: &Board, king_sq: Square) -> bool {
    match board.piece_at(king_sq) {
        Some(king) if king.kind() == PieceKind::King => {
            !attackers_of(board, king_sq, king.color()).is_empty()
        }
        _ => false,
    }
}

/// Returns true if the king of `color` is in check.
///
/// A board without a king of that color is never in check.
pub fn is_checked(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king_sq) => is_king_checked(board, king_sq),
        None => {
            tracing::trace!(%color, "no king on the board; treating as not in check");
            false
        }
    }
}

//! Candidate move generation.
//!
//! Candidates are the squares a piece's movement geometry reaches on the
//! current board, ignoring whether the move would leave its own king in
//! check. Generation is a pure function of the board and the piece; the
//! legality filter in [`crate::legality`] narrows candidates to legal moves.

pub mod rays;

use crate::Board;
use rays::{Ray, ONE_STEP, UNLIMITED};
use rules_core::{Piece, PieceKind, Square, SquareSet};

/// Knight jump offsets as `(row, col)` deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

/// Generates the candidate moves of a piece on the given board.
///
/// Unassigned pieces take no part in play and have no candidates.
pub fn candidate_moves(board: &Board, piece: &Piece) -> SquareSet {
    if !piece.color().is_side() {
        return SquareSet::EMPTY;
    }

    match piece.kind() {
        PieceKind::Pawn => pawn_moves(board, piece),
        PieceKind::Knight => knight_moves(board, piece),
        PieceKind::Bishop => ray_moves(board, piece, &rays::DIAGONAL, UNLIMITED),
        PieceKind::Rook => ray_moves(board, piece, &rays::ORTHOGONAL, UNLIMITED),
        PieceKind::Queen => ray_moves(board, piece, &rays::ALL, UNLIMITED),
        PieceKind::King => ray_moves(board, piece, &rays::ALL, ONE_STEP),
    }
}

/// Generates the candidate moves of whatever stands on `sq`.
///
/// Returns an empty set for an empty square.
pub fn candidate_moves_at(board: &Board, sq: Square) -> SquareSet {
    board
        .piece_at(sq)
        .map_or(SquareSet::EMPTY, |piece| candidate_moves(board, piece))
}

/// Unions the squares reached by the given rays.
fn ray_moves(board: &Board, piece: &Piece, scans: &[Ray], max_steps: u8) -> SquareSet {
    scans
        .iter()
        .flat_map(|ray| ray(board, piece.square(), piece.color(), max_steps))
        .collect()
}

fn knight_moves(board: &Board, piece: &Piece) -> SquareSet {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| piece.square().offset(d_row, d_col))
        .filter(|&to| board.piece_at(to).map_or(true, |occupant| piece.is_enemy(occupant)))
        .collect()
}

/// Pawns advance straight onto empty squares (two on their first move, and
/// only through an empty square) and capture one square diagonally forward.
fn pawn_moves(board: &Board, piece: &Piece) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    let Some(forward) = piece.color().pawn_direction() else {
        return moves;
    };

    let reach = if piece.is_unmoved() { 2 } else { 1 };
    let mut current = piece.square();
    for _ in 0..reach {
        match current.offset(forward, 0) {
            Some(next) if !board.is_occupied(next) => {
                moves.insert(next);
                current = next;
            }
            _ => break,
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = piece.square().offset(forward, d_col) else {
            continue;
        };
        if board
            .piece_at(target)
            .is_some_and(|occupant| piece.is_enemy(occupant))
        {
            moves.insert(target);
        }
    }

    moves
}

//! Committing moves to the board.

use crate::legality::exposes_king;
use crate::movegen::candidate_moves_at;
use crate::sink::{CaptureSink, MoveLog};
use crate::Board;
use rules_core::{PieceKind, Square};

/// Attempts to move the piece on `from` to `to`.
///
/// Returns false and leaves the board unchanged when `from` is empty, when
/// `to` is not among the piece's freshly generated candidates, or when the
/// move would leave the mover's king in check. Otherwise the move is
/// committed:
/// - any enemy on `to` is handed to `captures`,
/// - the mover is marked as moved and placed on `to`,
/// - a pawn reaching its last row is replaced by a queen of its color,
/// - the piece on `to` re-caches its candidates unless it is deferred,
/// - one line is sent to `log`.
pub fn try_move<C, L>(board: &mut Board, from: Square, to: Square, captures: &mut C, log: &mut L) -> bool
where
    C: CaptureSink + ?Sized,
    L: MoveLog + ?Sized,
{
    if !candidate_moves_at(board, from).contains(to) {
        tracing::debug!(%from, %to, "move rejected: not a candidate");
        return false;
    }
    if exposes_king(board, from, to) {
        tracing::debug!(%from, %to, "move rejected: exposes king");
        return false;
    }

    let Some(mut mover) = board.clear(from) else {
        return false;
    };
    let identity = mover.to_string();

    if let Some(captured) = board.clear(to) {
        debug_assert!(mover.is_enemy(&captured));
        tracing::debug!(%captured, "capture");
        captures.add_piece(captured);
    }

    mover.mark_moved();
    board.place(mover, to);

    if mover.kind() == PieceKind::Pawn && mover.color().promotion_row() == Some(to.row()) {
        tracing::debug!(square = %to, color = %mover.color(), "pawn promoted to queen");
        board.place(mover.promoted(), to);
    }

    if board.piece_at(to).is_some_and(|p| !p.is_deferred()) {
        board.refresh_moves(to);
    }

    log.add_to_log(&format!("{} -> {}", identity, to));
    true
}

/// Attempts a move to raw coordinates.
///
/// Off-board destinations are rejected like any other illegal move.
pub fn try_move_to<C, L>(
    board: &mut Board,
    from: Square,
    row: i8,
    col: i8,
    captures: &mut C,
    log: &mut L,
) -> bool
where
    C: CaptureSink + ?Sized,
    L: MoveLog + ?Sized,
{
    match Square::at(row, col) {
        Some(to) => try_move(board, from, to, captures, log),
        None => {
            tracing::debug!(%from, row, col, "move rejected: destination off the board");
            false
        }
    }
}

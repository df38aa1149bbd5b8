//! The legality filter.
//!
//! A candidate move is legal when playing it would not leave the mover's
//! own king attacked. The test plays the move speculatively through a
//! [`SimulatedMove`] guard, which puts the board back exactly as it was
//! when the guard goes out of scope.

use crate::check::is_checked;
use crate::movegen::candidate_moves_at;
use crate::Board;
use rules_core::{Piece, Square, SquareSet};

/// A speculative move, undone on drop.
///
/// While the guard lives the mover stands on the destination and any
/// previous occupant of the destination is held aside. Dropping the guard
/// returns the mover to its source square and the held occupant (if any)
/// to the destination. Neither piece's flags or cached moves are touched.
pub struct SimulatedMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    displaced: Option<Piece>,
}

impl<'a> SimulatedMove<'a> {
    /// Plays the piece on `from` onto `to`.
    ///
    /// Returns `None`, leaving the board untouched, if `from` is empty.
    pub fn apply(board: &'a mut Board, from: Square, to: Square) -> Option<Self> {
        let mover = board.clear(from)?;
        let displaced = board.place(mover, to);
        Some(SimulatedMove {
            board,
            from,
            to,
            displaced,
        })
    }

    /// Returns the board with the move applied.
    #[inline]
    pub fn board(&self) -> &Board {
        &*self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        if let Some(mover) = self.board.clear(self.to) {
            self.board.place(mover, self.from);
        }
        if let Some(occupant) = self.displaced.take() {
            self.board.place(occupant, self.to);
        }
    }
}

/// Returns true if moving the piece on `from` to `to` would leave its own
/// king in check. An empty `from` exposes nothing.
pub fn exposes_king(board: &mut Board, from: Square, to: Square) -> bool {
    let Some(color) = board.piece_at(from).map(|p| p.color()) else {
        return false;
    };
    match SimulatedMove::apply(board, from, to) {
        Some(simulated) => is_checked(simulated.board(), color),
        None => false,
    }
}

/// Returns true if the piece on `from` may legally move to `to`.
pub fn is_legal(board: &mut Board, from: Square, to: Square) -> bool {
    candidate_moves_at(board, from).contains(to) && !exposes_king(board, from, to)
}

/// Returns the legal destinations of the piece on `from`.
pub fn legal_moves(board: &mut Board, from: Square) -> SquareSet {
    let candidates = candidate_moves_at(board, from);
    let mut legal = SquareSet::EMPTY;
    for to in candidates {
        if exposes_king(board, from, to) {
            tracing::trace!(%from, %to, "candidate rejected: exposes king");
        } else {
            legal.insert(to);
        }
    }
    legal
}

/// Returns true if the piece on `from` has at least one legal move.
pub fn has_legal_moves(board: &mut Board, from: Square) -> bool {
    candidate_moves_at(board, from)
        .iter()
        .any(|to| !exposes_king(board, from, to))
}

//! The 8x8 board and its cells.

use crate::movegen::candidate_moves;
use rules_core::{Color, Layout, Piece, PieceKind, Square, SquareSet};
use std::fmt;
use thiserror::Error;

/// Errors from direct cell access.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },
}

/// A single board cell, holding at most one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    occupant: Option<Piece>,
}

impl Cell {
    /// Returns the piece in this cell, if any.
    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        self.occupant.as_ref()
    }

    /// Returns true if no piece stands here.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// The board: an 8x8 grid of cells that owns every piece in play.
///
/// Pieces are only ever moved through [`Board::clear`] and [`Board::place`],
/// which keep each piece's stored square in step with its cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board::default()
    }

    /// Creates the standard starting position.
    pub fn standard() -> Self {
        Self::from_layout(&Layout::default())
    }

    /// Creates a board from a parsed layout. Every piece starts unmoved.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut board = Board::empty();
        for (sq, kind, color) in layout.pieces() {
            board.place(Piece::new(kind, color, sq), sq);
        }
        board.refresh_all();
        board
    }

    /// Returns the layout of the pieces on this board.
    pub fn to_layout(&self) -> Layout {
        let mut layout = Layout::empty();
        for piece in self.pieces() {
            layout.set(piece.square(), Some((piece.kind(), piece.color())));
        }
        layout
    }

    /// Returns the cell at raw coordinates.
    ///
    /// Fails with [`BoardError::OutOfBounds`] when either coordinate is
    /// outside 0-7.
    pub fn cell_at(&self, row: i8, col: i8) -> Result<&Cell, BoardError> {
        let sq = Square::at(row, col).ok_or(BoardError::OutOfBounds { row, col })?;
        Ok(self.cell(sq))
    }

    /// Returns the cell for a square.
    #[inline]
    pub fn cell(&self, sq: Square) -> &Cell {
        &self.cells[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    fn cell_mut(&mut self, sq: Square) -> &mut Cell {
        &mut self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Returns the piece on a square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.cell(sq).piece()
    }

    /// Returns true if a piece stands on the square.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        !self.cell(sq).is_empty()
    }

    /// Removes and returns whatever occupies the square. Clearing an empty
    /// cell does nothing.
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.cell_mut(sq).occupant.take()
    }

    /// Puts a piece on a square and records that square on the piece.
    ///
    /// Any previous occupant is returned, not destroyed; the caller decides
    /// whether it was captured.
    pub fn place(&mut self, mut piece: Piece, sq: Square) -> Option<Piece> {
        piece.set_square(sq);
        self.cell_mut(sq).occupant.replace(piece)
    }

    /// Creates a piece on an empty or occupied square and caches its moves.
    ///
    /// Returns the displaced occupant, if any.
    pub fn spawn(&mut self, kind: PieceKind, color: Color, sq: Square) -> Option<Piece> {
        let displaced = self.place(Piece::new(kind, color, sq), sq);
        self.refresh_moves(sq);
        displaced
    }

    /// Regenerates and caches the candidate moves of the piece on `sq`.
    ///
    /// Returns the fresh set, or an empty set if the square is empty.
    pub fn refresh_moves(&mut self, sq: Square) -> SquareSet {
        let Some(piece) = self.piece_at(sq) else {
            return SquareSet::EMPTY;
        };
        let moves = candidate_moves(self, piece);
        if let Some(piece) = self.cell_mut(sq).occupant.as_mut() {
            piece.cache_moves(moves);
        }
        moves
    }

    /// Regenerates the cached candidate moves of every piece.
    pub fn refresh_all(&mut self) {
        for sq in Square::all() {
            self.refresh_moves(sq);
        }
    }

    /// Iterates over every piece in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten().filter_map(Cell::piece)
    }

    /// Iterates over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Returns the square of the king of the given color, if it is on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.kind() == PieceKind::King)
            .map(Piece::square)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", row)?;
            for cell in cells {
                match cell.piece() {
                    Some(piece) => write!(f, "{} ", piece.kind().to_char(piece.color()))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! End-to-end rule scenarios on small hand-built positions.

use rules_core::{Color, Layout, PieceKind, Square, SquareSet};
use rules_engine::movegen::rays;
use rules_engine::{
    candidate_moves_at, has_legal_moves, is_checked, is_square_attacked, legal_moves, try_move,
    Board, Graveyard, MoveHistory, NullSink,
};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

fn set(squares: &[(u8, u8)]) -> SquareSet {
    squares.iter().map(|&(r, c)| sq(r, c)).collect()
}

fn board(layout: &str) -> Board {
    Board::from_layout(&Layout::parse(layout).unwrap())
}

#[test]
fn rook_ray_stops_at_enemy() {
    let b = board("R2r4/8/8/8/8/8/8/8");
    let east = rays::east(&b, sq(0, 0), Color::White, rays::UNLIMITED);
    assert_eq!(east, vec![sq(0, 1), sq(0, 2), sq(0, 3)]);
    assert!(!candidate_moves_at(&b, sq(0, 0)).contains(sq(0, 4)));
}

#[test]
fn knight_geometry_on_empty_board() {
    let mut b = Board::empty();
    b.spawn(PieceKind::Knight, Color::White, sq(4, 4));
    assert_eq!(
        candidate_moves_at(&b, sq(4, 4)),
        set(&[(2, 3), (2, 5), (6, 3), (6, 5), (3, 2), (3, 6), (5, 2), (5, 6)])
    );
}

#[test]
fn pawn_double_step_then_single() {
    let mut b = Board::empty();
    b.spawn(PieceKind::Pawn, Color::White, sq(6, 3));
    let first = candidate_moves_at(&b, sq(6, 3));
    assert!(first.contains(sq(5, 3)));
    assert!(first.contains(sq(4, 3)));

    assert!(try_move(&mut b, sq(6, 3), sq(4, 3), &mut NullSink, &mut NullSink));
    let pawn = b.piece_at(sq(4, 3)).unwrap();
    assert!(!pawn.is_unmoved());
    assert_eq!(candidate_moves_at(&b, sq(4, 3)), set(&[(3, 3)]));
}

#[test]
fn pawn_promotes_to_queen() {
    let mut b = Board::empty();
    b.spawn(PieceKind::Pawn, Color::White, sq(1, 6));
    let mut history = MoveHistory::new();
    assert!(try_move(&mut b, sq(1, 6), sq(0, 6), &mut NullSink, &mut history));
    let promoted = b.piece_at(sq(0, 6)).unwrap();
    assert_eq!(promoted.kind(), PieceKind::Queen);
    assert_eq!(promoted.color(), Color::White);
    assert_eq!(history.last(), Some("Pawn @ (1, 6) -> (0, 6)"));
}

#[test]
fn exposing_move_is_rejected_and_reverted() {
    // The white rook on (4, 2) is pinned against its king by the rook on (4, 0).
    let mut b = board("8/8/8/8/r1R1K3/8/8/8");
    let before = b.clone();
    let mut graveyard = Graveyard::new();
    let mut history = MoveHistory::new();
    assert!(!try_move(&mut b, sq(4, 2), sq(2, 2), &mut graveyard, &mut history));
    assert_eq!(b, before);
    assert!(graveyard.is_empty());
    assert!(history.is_empty());
}

#[test]
fn attack_follows_candidates() {
    let b = board("8/8/8/3q4/8/8/8/8");
    for to in candidate_moves_at(&b, sq(3, 3)) {
        assert!(is_square_attacked(&b, to, Color::White));
        assert!(!is_square_attacked(&b, to, Color::Black));
    }
}

#[test]
fn king_escapes_rook_rank() {
    let mut b = Board::empty();
    b.spawn(PieceKind::King, Color::White, sq(4, 4));
    b.spawn(PieceKind::Rook, Color::Black, sq(4, 0));
    b.refresh_all();
    assert!(is_checked(&b, Color::White));

    let legal = legal_moves(&mut b, sq(4, 4));
    assert!(!legal.contains(sq(4, 3)));
    assert!(!legal.contains(sq(4, 5)));
    assert_eq!(
        legal,
        set(&[(3, 3), (3, 4), (3, 5), (5, 3), (5, 4), (5, 5)])
    );
}

#[test]
fn capture_then_check_cleared() {
    let mut b = board("8/8/8/8/r3K3/8/1N6/8");
    let mut graveyard = Graveyard::new();
    let mut history = MoveHistory::new();
    assert!(is_checked(&b, Color::White));
    assert!(try_move(&mut b, sq(6, 1), sq(4, 0), &mut graveyard, &mut history));
    assert!(!is_checked(&b, Color::White));
    assert_eq!(graveyard.of_color(Color::Black).count(), 1);
    assert_eq!(history.lines(), ["Knight @ (6, 1) -> (4, 0)"]);
}

#[test]
fn back_rank_mate_has_no_legal_moves() {
    // White king boxed in by its own pawns, black rook delivering check on row 7.
    let mut b = board("k7/8/8/8/8/8/5PPP/r5K1");
    assert!(is_checked(&b, Color::White));
    let white: Vec<Square> = b.pieces_of(Color::White).map(|p| p.square()).collect();
    assert!(white.iter().all(|&from| !has_legal_moves(&mut b, from)));
}

#[test]
fn short_opening_sequence() {
    let mut b = Board::standard();
    let mut graveyard = Graveyard::new();
    let mut history = MoveHistory::new();
    let moves = [
        ((6, 4), (4, 4)),
        ((1, 3), (3, 3)),
        ((4, 4), (3, 3)),
        ((0, 3), (3, 3)),
    ];
    for ((fr, fc), (tr, tc)) in moves {
        assert!(try_move(&mut b, sq(fr, fc), sq(tr, tc), &mut graveyard, &mut history));
    }
    assert_eq!(graveyard.of_color(Color::Black).count(), 1);
    assert_eq!(graveyard.of_color(Color::White).count(), 1);
    assert_eq!(b.piece_at(sq(3, 3)).unwrap().kind(), PieceKind::Queen);
    assert_eq!(history.len(), 4);
    assert_eq!(history.lines()[2], "Pawn @ (4, 4) -> (3, 3)");
    assert_eq!(b.pieces().count(), 30);
}

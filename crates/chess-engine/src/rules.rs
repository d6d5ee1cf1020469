//! Move legality.
//!
//! Each piece kind has a single geometric rule over the displacement
//! `(dr, dc)` between source and destination. There is deliberately no
//! path-obstruction check (sliders jump over pieces), no check detection,
//! and no castling, en passant, double pawn step or promotion.

use crate::Board;
use chess_core::{Color, Move, PieceKind};

/// Returns true if `side` may play `m` on `board`.
///
/// A move is legal when all of the following hold:
/// - the source square holds a piece of `side`
/// - source and destination differ (a null move is never legal)
/// - the destination does not hold a piece of `side`
/// - the displacement satisfies the piece kind's rule (see [`reaches`])
///
/// Pawns additionally require an empty destination: they never capture.
pub fn is_legal(board: &Board, side: Color, m: Move) -> bool {
    let piece = match board.piece_at(m.from()) {
        Some(p) if p.color == side => p,
        _ => return false,
    };

    if m.is_null() || board.is_occupied_by(m.to(), side) {
        return false;
    }

    let (dr, dc) = m.delta();
    if piece.kind == PieceKind::Pawn && board.piece_at(m.to()).is_some() {
        return false;
    }

    reaches(piece.kind, side, dr, dc)
}

/// Returns true if a piece of `kind` and `color` may travel by `(dr, dc)`.
///
/// This is the bare geometric predicate, ignoring occupancy. The zero
/// displacement is accepted by the rook, queen and king rules; [`is_legal`]
/// rejects it before consulting this function.
pub fn reaches(kind: PieceKind, color: Color, dr: i8, dc: i8) -> bool {
    match kind {
        PieceKind::Pawn => dc == 0 && dr == color.pawn_direction(),
        PieceKind::Knight => (dr as i16 * dc as i16).abs() == 2,
        PieceKind::Bishop => is_diagonal(dr, dc),
        PieceKind::Rook => is_straight(dr, dc),
        PieceKind::Queen => is_straight(dr, dc) || is_diagonal(dr, dc),
        PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
    }
}

#[inline]
fn is_straight(dr: i8, dc: i8) -> bool {
    dr == 0 || dc == 0
}

#[inline]
fn is_diagonal(dr: i8, dc: i8) -> bool {
    dr.abs() == dc.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(sq(from.0, from.1), sq(to.0, to.1))
    }

    fn lone(kind: PieceKind, color: Color, at: (u8, u8)) -> Board {
        let mut board = Board::empty();
        board.set(sq(at.0, at.1), Some(Piece::new(kind, color)));
        board
    }

    /// All destinations a lone piece may reach from `at` on an empty board.
    fn destinations(kind: PieceKind, color: Color, at: (u8, u8)) -> Vec<(i8, i8)> {
        let board = lone(kind, color, at);
        Square::all()
            .map(|to| Move::new(sq(at.0, at.1), to))
            .filter(|&m| is_legal(&board, color, m))
            .map(Move::delta)
            .collect()
    }

    #[test]
    fn white_pawn_single_step() {
        let board = Board::startpos();
        assert!(is_legal(&board, Color::White, mv((6, 4), (5, 4))));
    }

    #[test]
    fn pawn_double_step_rejected() {
        let board = Board::startpos();
        assert!(!is_legal(&board, Color::White, mv((6, 4), (4, 4))));
        assert!(!is_legal(&board, Color::Black, mv((1, 4), (3, 4))));
    }

    #[test]
    fn pawns_move_toward_the_opponent() {
        let board = Board::startpos();
        assert!(is_legal(&board, Color::Black, mv((1, 3), (2, 3))));
        let white = lone(PieceKind::Pawn, Color::White, (4, 4));
        assert!(!is_legal(&white, Color::White, mv((4, 4), (5, 4))));
        let black = lone(PieceKind::Pawn, Color::Black, (4, 4));
        assert!(!is_legal(&black, Color::Black, mv((4, 4), (3, 4))));
    }

    #[test]
    fn pawn_cannot_capture() {
        let mut board = lone(PieceKind::Pawn, Color::White, (4, 4));
        let enemy = Some(Piece::new(PieceKind::Knight, Color::Black));
        board.set(sq(3, 3), enemy);
        board.set(sq(3, 5), enemy);
        board.set(sq(3, 4), enemy);
        assert!(!is_legal(&board, Color::White, mv((4, 4), (3, 3))));
        assert!(!is_legal(&board, Color::White, mv((4, 4), (3, 5))));
        assert!(!is_legal(&board, Color::White, mv((4, 4), (3, 4))));
    }

    #[test]
    fn pawn_on_last_rank_is_stuck() {
        let board = lone(PieceKind::Pawn, Color::White, (0, 2));
        assert!(destinations(PieceKind::Pawn, Color::White, (0, 2)).is_empty());
        assert_eq!(board.piece_at(sq(0, 2)).map(|p| p.kind), Some(PieceKind::Pawn));
    }

    #[test]
    fn knight_geometry() {
        let mut found = destinations(PieceKind::Knight, Color::White, (3, 3));
        found.sort();
        let mut expected = vec![
            (-2, -1),
            (-2, 1),
            (-1, -2),
            (-1, 2),
            (1, -2),
            (1, 2),
            (2, -1),
            (2, 1),
        ];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn knight_jumps_from_back_rank() {
        let board = Board::startpos();
        assert!(is_legal(&board, Color::White, mv((7, 1), (5, 2))));
        assert!(is_legal(&board, Color::White, mv((7, 1), (5, 0))));
        // Own pawn on d2
        assert!(!is_legal(&board, Color::White, mv((7, 1), (6, 3))));
    }

    #[test]
    fn rook_lines_without_obstruction() {
        let board = Board::startpos();
        // Jumps over its own pawn and the empty middle to capture a8
        assert!(is_legal(&board, Color::White, mv((7, 0), (0, 0))));
        assert!(is_legal(&board, Color::White, mv((7, 0), (3, 0))));
        assert!(!is_legal(&board, Color::White, mv((7, 0), (5, 1))));
        assert_eq!(destinations(PieceKind::Rook, Color::Black, (3, 3)).len(), 14);
    }

    #[test]
    fn bishop_diagonals() {
        let found = destinations(PieceKind::Bishop, Color::White, (3, 3));
        assert_eq!(found.len(), 13);
        assert!(found.iter().all(|(dr, dc)| dr.abs() == dc.abs()));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        assert_eq!(destinations(PieceKind::Queen, Color::White, (3, 3)).len(), 27);
        assert_eq!(destinations(PieceKind::Queen, Color::White, (0, 0)).len(), 21);
    }

    #[test]
    fn king_single_step() {
        let found = destinations(PieceKind::King, Color::Black, (4, 4));
        assert_eq!(found.len(), 8);
        assert!(found.iter().all(|(dr, dc)| dr.abs() <= 1 && dc.abs() <= 1));
        assert_eq!(destinations(PieceKind::King, Color::Black, (0, 0)).len(), 3);
    }

    #[test]
    fn null_move_rejected_for_every_kind() {
        for kind in PieceKind::ALL {
            let board = lone(kind, Color::White, (4, 4));
            assert!(!is_legal(&board, Color::White, mv((4, 4), (4, 4))), "{kind}");
        }
        // The raw geometry does accept the zero displacement for these kinds
        assert!(reaches(PieceKind::King, Color::White, 0, 0));
        assert!(reaches(PieceKind::Rook, Color::White, 0, 0));
        assert!(reaches(PieceKind::Queen, Color::White, 0, 0));
    }

    #[test]
    fn source_must_belong_to_side() {
        let board = Board::startpos();
        // Black pawn, but White to move
        assert!(!is_legal(&board, Color::White, mv((1, 4), (2, 4))));
        // Empty source
        assert!(!is_legal(&board, Color::White, mv((4, 4), (3, 4))));
    }

    #[test]
    fn no_self_capture() {
        let board = Board::startpos();
        assert!(!is_legal(&board, Color::White, mv((7, 3), (6, 3))));
        assert!(!is_legal(&board, Color::White, mv((7, 0), (7, 1))));
        assert!(!is_legal(&board, Color::Black, mv((0, 4), (1, 4))));
    }

    #[test]
    fn captures_replace_enemy_pieces() {
        let board = Board::startpos();
        assert!(is_legal(&board, Color::White, mv((7, 3), (1, 3))));
        assert!(is_legal(&board, Color::Black, mv((0, 7), (6, 7))));
    }
}

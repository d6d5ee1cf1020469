//! Move enumeration and execution on a bare board.

pub mod perft;

use crate::rules::is_legal;
use crate::Board;
use chess_core::{Color, Move, Piece, Square};

/// A list of moves.
///
/// Without obstruction checks a single queen can reach 27 squares, and a
/// board set up from FEN may hold any number of queens, so the list is
/// heap-backed rather than fixed-capacity.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns true if the list contains the move.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Enumerates every legal move for `side`.
///
/// Moves are ordered by source square, then destination square, both in
/// row-major order.
pub fn legal_moves(board: &Board, side: Color) -> MoveList {
    let mut list = MoveList::new();
    for from in board.squares_of(side) {
        for to in Square::all() {
            let m = Move::new(from, to);
            if is_legal(board, side, m) {
                list.push(m);
            }
        }
    }
    list
}

/// Moves the piece on `m.from()` to `m.to()`, returning whatever was captured.
///
/// No legality check is made. Moving from an empty square simply empties
/// the destination.
pub fn make_move(board: &mut Board, m: Move) -> Option<Piece> {
    let piece = board.take(m.from());
    board.set(m.to(), piece)
}

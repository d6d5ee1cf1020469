//! Random-move opponent.
//!
//! The opponent has no strategy: it picks uniformly among every legal move
//! of the side to move. Play uses the thread-local RNG and is therefore not
//! reproducible; pass a seeded RNG to [`choose_move`] for deterministic runs.

use crate::movegen::legal_moves;
use crate::Board;
use chess_core::{Color, Move};
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks a uniformly random legal move for `side`, or `None` if it has none.
pub fn choose_move<R: Rng + ?Sized>(board: &Board, side: Color, rng: &mut R) -> Option<Move> {
    let moves = legal_moves(board, side);
    let choice = moves.as_slice().choose(rng).copied();
    tracing::debug!(
        side = %side,
        candidates = moves.len(),
        choice = ?choice,
        "Random move selected"
    );
    choice
}

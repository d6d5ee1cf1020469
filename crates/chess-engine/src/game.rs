//! Game state with undo history.
//!
//! The [`Game`] struct owns the live board, the side to move and a stack of
//! board snapshots, one pushed before every executed move. Undo pops the
//! most recent snapshot and hands the turn back.

use crate::ai;
use crate::movegen::{self, legal_moves};
use crate::rules::is_legal;
use crate::{Board, MoveList};
use chess_core::{Color, FenError, FenParser, Move};
use rand::Rng;
use thiserror::Error;

/// Error type for checked game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// The move string could not be parsed.
    #[error("invalid move notation: {0}")]
    InvalidNotation(String),
}

/// A game in progress: board, side to move and undo history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Current board.
    board: Board,
    /// The side to move.
    side_to_move: Color,
    /// Board snapshots taken before each executed move.
    history: Vec<Board>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::startpos(),
            side_to_move: Color::White,
            history: Vec::new(),
        }
    }

    /// Creates a game from a board and side to move, with empty history.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    /// Creates a game from a FEN string (`"<placement> [w|b]"`).
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Self::from_board(
            Board::from(parsed.placement),
            parsed.active_color,
        ))
    }

    /// Returns the board and side to move as a FEN string.
    pub fn to_fen(&self) -> String {
        format!("{} {}", self.board.to_fen(), self.side_to_move.to_fen_char())
    }

    /// Restores the starting position, White to move, and clears history.
    pub fn reset(&mut self) {
        *self = Game::new();
        tracing::debug!("New game");
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the number of moves that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns the stored snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns true if the side to move may play `m`.
    pub fn is_legal(&self, m: Move) -> bool {
        is_legal(&self.board, self.side_to_move, m)
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        legal_moves(&self.board, self.side_to_move)
    }

    /// Executes a move without checking it.
    ///
    /// Pushes a snapshot of the current board, moves the piece (overwriting
    /// any occupant of the destination) and passes the turn. Callers must
    /// have validated the move with [`Game::is_legal`].
    pub fn apply_move(&mut self, m: Move) {
        self.history.push(self.board.clone());
        let piece = self.board.piece_at(m.from());
        let captured = movegen::make_move(&mut self.board, m);
        tracing::debug!(
            side = %self.side_to_move,
            mv = %m,
            piece = ?piece,
            captured = ?captured,
            "Move executed"
        );
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Executes a move after checking that it is legal.
    ///
    /// On error the game is left untouched.
    pub fn make_move(&mut self, m: Move) -> Result<(), GameError> {
        if !self.is_legal(m) {
            return Err(GameError::IllegalMove(m.to_uci()));
        }
        self.apply_move(m);
        Ok(())
    }

    /// Executes a move given in coordinate notation (e.g., "e2e3").
    pub fn make_move_uci(&mut self, uci: &str) -> Result<(), GameError> {
        let m = Move::from_uci(uci).ok_or_else(|| GameError::InvalidNotation(uci.to_string()))?;
        self.make_move(m)
    }

    /// Takes back the last executed move.
    ///
    /// Returns false, changing nothing, when there is no move to take back.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.board = previous;
                self.side_to_move = self.side_to_move.opposite();
                tracing::debug!(remaining = self.history.len(), "Move undone");
                true
            }
            None => false,
        }
    }

    /// Plays a uniformly random legal move for the side to move.
    ///
    /// Returns the move played, or `None` (changing nothing) when the side
    /// to move has no legal move.
    pub fn ai_move(&mut self) -> Option<Move> {
        self.ai_move_with(&mut rand::thread_rng())
    }

    /// Like [`Game::ai_move`], drawing randomness from `rng`.
    pub fn ai_move_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Move> {
        let m = ai::choose_move(&self.board, self.side_to_move, rng)?;
        self.apply_move(m);
        Some(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, PieceKind, Square};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.board(), &Board::startpos());
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.history_len(), 0);
    }

    #[test]
    fn pawn_step_scenario() {
        let mut game = Game::new();
        game.make_move(Move::new(sq(6, 4), sq(5, 4))).unwrap();
        assert_eq!(
            game.board().piece_at(sq(5, 4)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(game.board().piece_at(sq(6, 4)), None);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn double_step_rejected_without_side_effects() {
        let mut game = Game::new();
        let result = game.make_move(Move::new(sq(6, 4), sq(4, 4)));
        assert_eq!(result, Err(GameError::IllegalMove("e2e4".to_string())));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn knight_scenario() {
        let mut game = Game::new();
        game.make_move_uci("b1c3").unwrap();
        assert_eq!(
            game.board().piece_at(sq(5, 2)),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
        assert_eq!(game.board().piece_at(sq(7, 1)), None);
    }

    #[test]
    fn make_move_uci_rejects_bad_notation() {
        let mut game = Game::new();
        assert!(matches!(
            game.make_move_uci("zz"),
            Err(GameError::InvalidNotation(_))
        ));
    }

    #[test]
    fn undo_restores_fresh_game() {
        let mut game = Game::new();
        game.make_move_uci("e2e3").unwrap();
        assert!(game.undo());
        assert_eq!(game, Game::new());
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut game = Game::new();
        assert!(!game.undo());
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game, Game::new());
    }

    #[test]
    fn undo_walks_back_one_move_at_a_time() {
        let mut game = Game::new();
        game.make_move_uci("e2e3").unwrap();
        let after_first = game.clone();
        game.make_move_uci("d7d6").unwrap();
        game.make_move_uci("g1f3").unwrap();
        assert_eq!(game.history_len(), 3);

        assert!(game.undo());
        assert!(game.undo());
        assert_eq!(game, after_first);
        assert!(game.undo());
        assert!(!game.undo());
        assert_eq!(game, Game::new());
    }

    #[test]
    fn snapshots_are_isolated_from_live_board() {
        let mut game = Game::new();
        game.make_move_uci("e2e3").unwrap();
        let stored = game.history()[0].clone();
        game.make_move_uci("a7a6").unwrap();
        game.make_move_uci("d1d7").unwrap();
        assert_eq!(game.history()[0], stored);
        assert_eq!(stored, Board::startpos());
    }

    #[test]
    fn capture_discards_the_victim() {
        let mut game = Game::new();
        game.make_move_uci("d1d7").unwrap();
        assert_eq!(game.board().pieces().count(), 31);
        assert!(game.undo());
        assert_eq!(game.board().pieces().count(), 32);
    }

    #[test]
    fn ai_move_plays_for_side_to_move() {
        let mut game = Game::new();
        game.make_move_uci("e2e3").unwrap();
        let before = game.clone();
        let mut rng = StdRng::seed_from_u64(3);
        let m = game.ai_move_with(&mut rng).unwrap();
        assert!(before.is_legal(m));
        assert!(before.board().is_occupied_by(m.from(), Color::Black));
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.history_len(), 2);
    }

    #[test]
    fn ai_without_moves_changes_nothing() {
        let mut game = Game::from_fen("8/8/8/8/8/8/8/4K3 b").unwrap();
        let before = game.clone();
        assert_eq!(game.ai_move(), None);
        assert_eq!(game, before);
    }

    #[test]
    fn reset_mid_game() {
        let mut game = Game::new();
        game.make_move_uci("e2e3").unwrap();
        game.make_move_uci("e7e6").unwrap();
        game.reset();
        assert_eq!(game, Game::new());
        game.reset();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn fen_roundtrip() {
        let game = Game::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b").unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(
            game.to_fen(),
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b"
        );
        assert_eq!(Game::new().to_fen(), FenParser::STARTPOS);
    }
}

//! Interactive session driven by board clicks and control buttons.
//!
//! A [`Session`] is the single writer of game state for a presentation
//! layer. It turns cell clicks into selections and moves, and in
//! player-vs-AI mode hands out an [`AiTicket`] whenever the opponent is due
//! to reply. The presentation layer schedules [`Session::play_ai`] after
//! [`SessionConfig::ai_delay_ms`]; any reset, undo or mode switch in the
//! meantime invalidates the ticket, so a late callback is a no-op.

use crate::config::{Mode, SessionConfig};
use crate::{Board, Game};
use chess_core::{Color, Move, Square};
use rand::Rng;

/// The side played by the random-move opponent.
pub const AI_SIDE: Color = Color::Black;

/// Handle for one scheduled opponent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AiTicket(u32);

impl AiTicket {
    /// Rebuilds a ticket from its raw id, as handed back by a timer callback.
    pub const fn from_raw(id: u32) -> Self {
        AiTicket(id)
    }

    /// Returns the raw id.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened: no selection and not an own piece, or not a
    /// human's turn.
    Ignored,
    /// The clicked piece is now selected.
    Selected(Square),
    /// The previous selection was cleared without moving.
    Deselected,
    /// The selected piece moved to the clicked square.
    Moved {
        mv: Move,
        /// Set when the opponent is now due to reply.
        ai_ticket: Option<AiTicket>,
    },
}

/// Read-only view of everything a presentation layer draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub selected: Option<Square>,
    pub side_to_move: Color,
    pub mode: Mode,
    pub ai_pending: bool,
    pub history_len: usize,
}

impl Snapshot {
    /// Returns the turn indicator text, e.g. "White's turn".
    pub fn status(&self) -> String {
        status_text(self.side_to_move)
    }
}

/// Returns the turn indicator text for a side.
pub fn status_text(side: Color) -> String {
    format!("{}'s turn", side)
}

/// One player-facing game: state, selection, mode and pending opponent move.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    selected: Option<Square>,
    mode: Mode,
    config: SessionConfig,
    pending_ai: Option<AiTicket>,
    next_ticket: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    /// Starts a new game in the configured mode.
    pub fn new(config: SessionConfig) -> Self {
        Session {
            game: Game::new(),
            selected: None,
            mode: config.mode,
            config,
            pending_ai: None,
            next_ticket: 0,
        }
    }

    /// Starts a session from an existing game, e.g. one set up from FEN.
    ///
    /// If the opponent is to move, a reply is scheduled immediately.
    pub fn with_game(config: SessionConfig, game: Game) -> Self {
        let mut session = Session::new(config);
        session.game = game;
        session.schedule_ai_if_due();
        session
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the ticket of the opponent move waiting to be played.
    pub fn pending_ai(&self) -> Option<AiTicket> {
        self.pending_ai
    }

    /// Returns true if the side to move is played by the opponent.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == Mode::PlayerVsAi && self.game.side_to_move() == AI_SIDE
    }

    /// Handles a click on a board cell.
    ///
    /// With a selection, the click is a destination: the move is played if
    /// legal, and the selection is cleared either way. Without one, the
    /// click selects a piece of the side to move. Clicks are ignored while
    /// the opponent is to move.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        if self.is_ai_turn() {
            tracing::trace!(square = %sq, "Click ignored on opponent's turn");
            return ClickOutcome::Ignored;
        }

        if let Some(from) = self.selected.take() {
            let mv = Move::new(from, sq);
            if !self.game.is_legal(mv) {
                tracing::trace!(mv = %mv, "Selection cleared");
                return ClickOutcome::Deselected;
            }
            self.game.apply_move(mv);
            let ai_ticket = self.schedule_ai_if_due();
            return ClickOutcome::Moved { mv, ai_ticket };
        }

        if self
            .game
            .board()
            .is_occupied_by(sq, self.game.side_to_move())
        {
            tracing::trace!(square = %sq, "Piece selected");
            self.selected = Some(sq);
            ClickOutcome::Selected(sq)
        } else {
            ClickOutcome::Ignored
        }
    }

    /// Plays the opponent's move for `ticket` using the thread-local RNG.
    pub fn play_ai(&mut self, ticket: AiTicket) -> Option<Move> {
        self.play_ai_with(ticket, &mut rand::thread_rng())
    }

    /// Plays the opponent's move for `ticket`, drawing randomness from `rng`.
    ///
    /// Stale tickets (superseded by a reset, undo or mode switch, or already
    /// played) are ignored. If the opponent has no legal move, nothing
    /// changes and the turn does not pass.
    pub fn play_ai_with<R: Rng + ?Sized>(&mut self, ticket: AiTicket, rng: &mut R) -> Option<Move> {
        if self.pending_ai != Some(ticket) {
            tracing::debug!(ticket = ticket.raw(), "Stale opponent ticket ignored");
            return None;
        }
        self.pending_ai = None;
        if !self.is_ai_turn() {
            return None;
        }
        self.selected = None;
        self.game.ai_move_with(rng)
    }

    /// Starts a new game in the current mode.
    pub fn reset(&mut self) {
        self.cancel_ai();
        self.selected = None;
        self.game.reset();
    }

    /// Takes back the last move.
    ///
    /// Cancels any pending opponent move. If the take-back leaves the
    /// opponent to move, a fresh reply is scheduled (see
    /// [`Session::pending_ai`]). Returns false when there was nothing to
    /// take back.
    pub fn undo(&mut self) -> bool {
        self.cancel_ai();
        self.selected = None;
        let undone = self.game.undo();
        if undone {
            self.schedule_ai_if_due();
        }
        undone
    }

    /// Switches mode and starts a new game.
    pub fn set_mode(&mut self, mode: Mode) {
        tracing::debug!(mode = %mode, "Mode switched");
        self.mode = mode;
        self.reset();
    }

    /// Returns everything needed to redraw the board.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.game.board().clone(),
            selected: self.selected,
            side_to_move: self.game.side_to_move(),
            mode: self.mode,
            ai_pending: self.pending_ai.is_some(),
            history_len: self.game.history_len(),
        }
    }

    fn schedule_ai_if_due(&mut self) -> Option<AiTicket> {
        if !self.is_ai_turn() {
            return None;
        }
        let ticket = AiTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.pending_ai = Some(ticket);
        tracing::debug!(ticket = ticket.raw(), "Opponent reply scheduled");
        Some(ticket)
    }

    fn cancel_ai(&mut self) {
        if let Some(ticket) = self.pending_ai.take() {
            tracing::debug!(ticket = ticket.raw(), "Opponent reply cancelled");
        }
    }
}

//! WebAssembly bindings for the casual chess board.
//!
//! The page owns rendering and timers; this crate owns all game state. Every
//! click and button press is forwarded here, and the page redraws from
//! [`ChessBoard::snapshot`] afterwards.
//!
//! # Usage
//!
//! ```javascript
//! import init, { ChessBoard } from 'chess-wasm';
//!
//! await init();
//!
//! const board = new ChessBoard();
//! board.setMode("ai");
//!
//! function onCellClick(row, col) {
//!   const click = board.clickCell(row, col);
//!   if (click.aiTicket !== undefined) {
//!     setTimeout(() => { board.playAiMove(click.aiTicket); draw(); }, board.aiDelayMs());
//!   }
//!   draw();
//! }
//!
//! function draw() {
//!   const snap = board.snapshot();
//!   status.textContent = snap.status;
//!   // snap.cells: 64 entries of { row, col, glyph, light, selected }
//! }
//! ```

use chess_core::{Color, Square};
use chess_engine::{AiTicket, ClickOutcome, Game, Mode, Session, SessionConfig, Snapshot};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// One board cell as seen by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCell {
    row: u8,
    col: u8,
    /// FEN letter, uppercase for White.
    piece: Option<char>,
    glyph: Option<char>,
    light: bool,
    selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSnapshot {
    cells: Vec<JsCell>,
    selected: Option<[u8; 2]>,
    side_to_move: &'static str,
    status: String,
    mode: &'static str,
    ai_pending: bool,
    history_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsClick {
    outcome: &'static str,
    #[serde(rename = "move", skip_serializing_if = "Option::is_none")]
    mv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ai_ticket: Option<u32>,
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

fn snapshot_view(snap: &Snapshot) -> JsSnapshot {
    let cells = Square::all()
        .map(|sq| {
            let piece = snap.board.piece_at(sq);
            JsCell {
                row: sq.row(),
                col: sq.col(),
                piece: piece.map(|p| p.to_fen_char()),
                glyph: piece.map(|p| p.glyph()),
                light: sq.is_light(),
                selected: snap.selected == Some(sq),
            }
        })
        .collect();

    JsSnapshot {
        cells,
        selected: snap.selected.map(|sq| [sq.row(), sq.col()]),
        side_to_move: side_name(snap.side_to_move),
        status: snap.status(),
        mode: snap.mode.name(),
        ai_pending: snap.ai_pending,
        history_len: snap.history_len,
    }
}

fn click_view(outcome: ClickOutcome) -> JsClick {
    match outcome {
        ClickOutcome::Ignored => JsClick {
            outcome: "ignored",
            mv: None,
            ai_ticket: None,
        },
        ClickOutcome::Selected(_) => JsClick {
            outcome: "selected",
            mv: None,
            ai_ticket: None,
        },
        ClickOutcome::Deselected => JsClick {
            outcome: "deselected",
            mv: None,
            ai_ticket: None,
        },
        ClickOutcome::Moved { mv, ai_ticket } => JsClick {
            outcome: "moved",
            mv: Some(mv.to_uci()),
            ai_ticket: ai_ticket.map(AiTicket::raw),
        },
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// A chess board session that can be driven from JavaScript.
#[wasm_bindgen]
pub struct ChessBoard {
    session: Session,
}

#[wasm_bindgen]
impl ChessBoard {
    /// Creates a player-vs-player board in the starting position.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        ChessBoard {
            session: Session::default(),
        }
    }

    /// Creates a board from a config object such as `{ mode: "ai", aiDelayMs: 300 }`.
    ///
    /// Missing keys take their defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<ChessBoard, JsError> {
        let config: SessionConfig = if config.is_undefined() || config.is_null() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?
        };
        Ok(ChessBoard {
            session: Session::new(config),
        })
    }

    /// Creates a player-vs-player board from a FEN string (`"<placement> [w|b]"`).
    #[wasm_bindgen(js_name = fromFen)]
    pub fn from_fen(fen: &str) -> Result<ChessBoard, JsError> {
        let game = Game::from_fen(fen).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ChessBoard {
            session: Session::with_game(SessionConfig::default(), game),
        })
    }

    /// Returns the board and side to move as a FEN string.
    #[wasm_bindgen(js_name = toFen)]
    pub fn to_fen(&self) -> String {
        self.session.game().to_fen()
    }

    /// Forwards a click on the cell at `row`, `col` (both 0-7).
    ///
    /// Returns `{ outcome, move?, aiTicket? }`. When `aiTicket` is present
    /// the page should call [`playAiMove`](ChessBoard::play_ai_move) with it
    /// after [`aiDelayMs`](ChessBoard::ai_delay_ms).
    #[wasm_bindgen(js_name = clickCell)]
    pub fn click_cell(&mut self, row: u8, col: u8) -> Result<JsValue, JsError> {
        let sq = Square::new(row, col)
            .ok_or_else(|| JsError::new(&format!("Cell out of range: ({}, {})", row, col)))?;
        let outcome = self.session.click(sq);
        to_js(&click_view(outcome))
    }

    /// Plays the scheduled opponent move, returning it in coordinate notation.
    ///
    /// Returns undefined for stale tickets or when the opponent has no move.
    #[wasm_bindgen(js_name = playAiMove)]
    pub fn play_ai_move(&mut self, ticket: u32) -> Option<String> {
        self.session
            .play_ai(AiTicket::from_raw(ticket))
            .map(|m| m.to_uci())
    }

    /// Returns the ticket of the opponent move waiting to be played, if any.
    #[wasm_bindgen(js_name = pendingAiTicket)]
    pub fn pending_ai_ticket(&self) -> Option<u32> {
        self.session.pending_ai().map(AiTicket::raw)
    }

    /// Delay the page should wait before playing the opponent's move.
    #[wasm_bindgen(js_name = aiDelayMs)]
    pub fn ai_delay_ms(&self) -> u32 {
        u32::try_from(self.session.config().ai_delay_ms).unwrap_or(u32::MAX)
    }

    /// Starts a new game in the current mode.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Takes back the last move. Returns false if there was none.
    ///
    /// Check [`pendingAiTicket`](ChessBoard::pending_ai_ticket) afterwards:
    /// undoing the opponent's move schedules a new reply.
    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    /// Switches to `"pvp"` or `"ai"` and starts a new game.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsError> {
        let mode =
            Mode::from_name(mode).ok_or_else(|| JsError::new(&format!("Unknown mode: {}", mode)))?;
        self.session.set_mode(mode);
        Ok(())
    }

    /// Returns the current mode name.
    pub fn mode(&self) -> String {
        self.session.mode().name().to_string()
    }

    /// Returns the turn indicator text, e.g. "White's turn".
    pub fn status(&self) -> String {
        self.session.snapshot().status()
    }

    /// Returns the side to move ("white" or "black").
    #[wasm_bindgen(js_name = sideToMove)]
    pub fn side_to_move(&self) -> String {
        side_name(self.session.game().side_to_move()).to_string()
    }

    /// Returns everything needed to redraw the board.
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(&snapshot_view(&self.session.snapshot()))
    }
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialization function called when WASM module loads.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

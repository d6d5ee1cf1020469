//! Casual chess engine: board state, geometric move rules, undo history and a
//! random-move opponent.
//!
//! This crate provides:
//! - [`Board`] - 8x8 grid of piece tokens
//! - [`is_legal`] - per-piece geometric move legality
//! - [`Game`] - board, side to move and per-move undo snapshots
//! - [`ai`] - uniform random choice among legal moves
//! - [`Session`] - click-driven interaction with selection, modes and a
//!   cancelable deferred opponent reply
//!
//! The rules are intentionally loose: sliders are never blocked, pawns only
//! step straight ahead and never capture, and there is no check, castling,
//! en passant or promotion. Games never end on their own.
//!
//! # Example
//!
//! ```
//! use chess_engine::{Game, Session, SessionConfig, ClickOutcome};
//! use chess_core::Square;
//!
//! let mut game = Game::new();
//! game.make_move_uci("e2e3").unwrap();
//! assert!(game.undo());
//!
//! let mut session = Session::new(SessionConfig::default());
//! let e2 = Square::new(6, 4).unwrap();
//! let e3 = Square::new(5, 4).unwrap();
//! assert_eq!(session.click(e2), ClickOutcome::Selected(e2));
//! assert!(matches!(session.click(e3), ClickOutcome::Moved { .. }));
//! println!("{}", session.snapshot().status());
//! ```

pub mod ai;
mod board;
mod config;
mod game;
pub mod movegen;
pub mod rules;
mod session;

pub use board::Board;
pub use config::{ConfigError, Mode, SessionConfig};
pub use game::{Game, GameError};
pub use movegen::{legal_moves, make_move, MoveList};
pub use rules::is_legal;
pub use session::{status_text, AiTicket, ClickOutcome, Session, Snapshot, AI_SIDE};

//! Core types for a casual chess board.
//!
//! This crate provides the value types shared by the engine and the
//! browser bindings:
//! - [`PieceKind`], [`Piece`] and [`Color`] for piece tokens
//! - [`Square`] for `(row, col)` board cells
//! - [`Move`] for source/destination pairs
//! - FEN piece-placement parsing and serialization

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser, Placement};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;

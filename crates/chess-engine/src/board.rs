//! Board state: an 8x8 grid of cell occupants.

use chess_core::{Color, FenError, FenParser, Piece, PieceKind, Placement, Square};
use std::fmt;

/// An 8x8 grid of cells, each empty or holding a piece token.
///
/// Row 0 is Black's back rank, row 7 is White's. `Board` owns its cells
/// by value, so a clone is always an independent deep copy.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Placement,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting layout.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_rank() as usize;
            let pawns = color.pawn_rank() as usize;
            for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                board.cells[back][col] = Some(Piece::new(kind, color));
                board.cells[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Creates a board from a FEN piece-placement field.
    ///
    /// A full FEN string is accepted too; its side-to-move field is ignored
    /// here (see [`Game::from_fen`](crate::Game::from_fen)).
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Board::from(parsed.placement))
    }

    /// Returns the FEN piece-placement field for this board.
    pub fn to_fen(&self) -> String {
        FenParser::placement_to_fen(&self.cells)
    }

    /// Returns the piece on a square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Returns true if the square holds a piece of the given color.
    #[inline]
    pub fn is_occupied_by(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.color == color)
    }

    /// Places (or clears, with `None`) a cell, returning the previous occupant.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[sq.row() as usize][sq.col() as usize], piece)
    }

    /// Removes and returns the occupant of a square.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.set(sq, None)
    }

    /// Iterates over all occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares holding pieces of one color.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, p)| p.color == color)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

impl From<Placement> for Board {
    fn from(cells: Placement) -> Self {
        Board { cells }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

/// Draws the board with Unicode glyphs, row 0 on top, files along the bottom.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                match cell {
                    Some(piece) => write!(f, " {}", piece.glyph())?,
                    None => write!(f, " ·")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

//! Move representation.

use crate::Square;
use std::fmt;

/// A move of one piece from a source square to a destination square.
///
/// There are no special move kinds: no castling, en passant, or promotion.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the displacement as `(row delta, column delta)`.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        (
            self.to.row() as i8 - self.from.row() as i8,
            self.to.col() as i8 - self.from.col() as i8,
        )
    }

    /// Returns true if source and destination are the same square.
    #[inline]
    pub fn is_null(self) -> bool {
        self.from == self.to
    }

    /// Returns the coordinate notation for this move (e.g., "e2e3").
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from coordinate notation.
    pub fn from_uci(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn move_squares() {
        let m = Move::new(sq(6, 4), sq(5, 4));
        assert_eq!(m.from(), sq(6, 4));
        assert_eq!(m.to(), sq(5, 4));
    }

    #[test]
    fn move_delta() {
        assert_eq!(Move::new(sq(6, 4), sq(5, 4)).delta(), (-1, 0));
        assert_eq!(Move::new(sq(7, 1), sq(5, 2)).delta(), (-2, 1));
        assert_eq!(Move::new(sq(0, 7), sq(7, 0)).delta(), (7, -7));
        assert_eq!(Move::new(sq(3, 3), sq(3, 3)).delta(), (0, 0));
    }

    #[test]
    fn null_move() {
        assert!(Move::new(sq(3, 3), sq(3, 3)).is_null());
        assert!(!Move::new(sq(3, 3), sq(3, 4)).is_null());
    }

    #[test]
    fn move_uci() {
        assert_eq!(Move::new(sq(6, 4), sq(5, 4)).to_uci(), "e2e3");
        assert_eq!(Move::new(sq(7, 1), sq(5, 2)).to_uci(), "b1c3");
    }

    #[test]
    fn move_from_uci() {
        let m = Move::from_uci("b8c6").unwrap();
        assert_eq!(m.from(), sq(0, 1));
        assert_eq!(m.to(), sq(2, 2));

        assert!(Move::from_uci("invalid").is_none());
        assert!(Move::from_uci("e2e9").is_none());
        // Promotion suffixes do not exist here
        assert!(Move::from_uci("e7e8q").is_none());
        assert!(Move::from_uci("e2").is_none());
    }

    #[test]
    fn move_debug_display() {
        let m = Move::new(sq(6, 4), sq(5, 4));
        assert_eq!(format!("{:?}", m), "Move(e2e3)");
        assert_eq!(format!("{}", m), "e2e3");
    }
}

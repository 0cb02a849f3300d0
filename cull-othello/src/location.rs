//! Code for working with [`Position`]s on the Othello board.

use crate::EDGE_LENGTH;
use derive_more::{Add, AddAssign, From, Into, Sub, SubAssign};
use std::fmt::{self, Display, Formatter, Write};

/// A (row, col) pair on the Othello board.
///
/// The same type doubles as a unit direction vector when scanning for
/// captures; see [`DIRECTIONS`].
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Add, AddAssign, Sub, SubAssign, From,
    Into,
)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

/// The eight unit vectors a capture can run along.
pub const DIRECTIONS: [Position; 8] = [
    Position::new(-1, 0),
    Position::new(1, 0),
    Position::new(0, 1),
    Position::new(0, -1),
    Position::new(1, 1),
    Position::new(1, -1),
    Position::new(-1, 1),
    Position::new(-1, -1),
];

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Returns whether this position lies on the board.
    #[inline]
    pub fn in_bounds(self) -> bool {
        (self.row as u8) < EDGE_LENGTH as u8 && (self.col as u8) < EDGE_LENGTH as u8
    }

    /// Convert from a row-major square index.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        assert!(index < EDGE_LENGTH * EDGE_LENGTH);
        Self::new((index / EDGE_LENGTH) as i8, (index % EDGE_LENGTH) as i8)
    }

    /// Convert into a row-major square index. Undefined for off-board positions.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * EDGE_LENGTH + self.col as usize
    }

    /// The positions surrounding this one that lie on the board.
    pub fn neighbours(self) -> impl Iterator<Item = Position> {
        DIRECTIONS
            .iter()
            .map(move |&dir| self + dir)
            .filter(|pos| pos.in_bounds())
    }

    /// Iterate over every square in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..EDGE_LENGTH * EDGE_LENGTH).map(Self::from_index)
    }
}

/// Convert this [`Position`] into string notation ("A4").
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.in_bounds() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let row_str = "12345678".chars().nth(self.row as usize).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(self.col as usize).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq, derive_more::Display, derive_more::Error)]
#[display(fmt = "invalid position string")]
pub struct ParsePositionError;

/// Build a [`Position`] from a 1-indexed string notation ("A4").
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParsePositionError)?;
        let row = chars
            .next()
            .ok_or(ParsePositionError)?
            .to_digit(10)
            .ok_or(ParsePositionError)? as usize;

        if row == 0 || row > 8 || chars.next() != None {
            return Err(ParsePositionError);
        }

        Ok(Self::new((row - 1) as i8, col as i8))
    }
}

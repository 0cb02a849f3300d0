//! Players, cell states and game results.

use std::fmt;

/// The contents of one square.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl Cell {
    /// The single-character tag used when rendering a board.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::White => 'O',
            Cell::Black => 'X',
        }
    }

    /// Parse a single-character tag. `-` and `_` are accepted for empty squares.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '.' | '-' | '_' => Some(Cell::Empty),
            'O' | 'W' => Some(Cell::White),
            'X' | 'B' => Some(Cell::Black),
            _ => None,
        }
    }

    /// The player owning this cell, if any.
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(Player::White),
            Cell::Black => Some(Player::Black),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, derive_more::Display)]
pub enum Player {
    White,
    Black,
}

impl Default for Player {
    /// Gets the starting player (white).
    fn default() -> Self {
        Self::White
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::White => Cell::White,
            Player::Black => Cell::Black,
        }
    }
}

#[derive(Debug, PartialEq, derive_more::Display, derive_more::Error)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" | "o" => Ok(Player::White),
            "black" | "b" | "x" => Ok(Player::Black),
            _ => Err(ParsePlayerError),
        }
    }
}

/// The result of a finished game, scored by material advantage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    WhiteWins(u8),
    BlackWins(u8),
    Tie,
}

impl Outcome {
    /// Interpret a White-minus-Black piece count.
    pub fn from_advantage(advantage: i32) -> Self {
        if advantage > 0 {
            Outcome::WhiteWins(advantage as u8)
        } else if advantage < 0 {
            Outcome::BlackWins((-advantage) as u8)
        } else {
            Outcome::Tie
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::WhiteWins(_) => Some(Player::White),
            Outcome::BlackWins(_) => Some(Player::Black),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::WhiteWins(margin) => write!(f, "White wins by {}", margin),
            Outcome::BlackWins(margin) => write!(f, "Black wins by {}", margin),
            Outcome::Tie => f.write_str("Tie!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_not() {
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(!Player::Black, Player::White);
    }

    #[test]
    fn player_cells() {
        assert_eq!(Cell::from(Player::White), Cell::White);
        assert_eq!(Cell::from(Player::Black), Cell::Black);
        assert_eq!(Cell::White.player(), Some(Player::White));
        assert_eq!(Cell::Empty.player(), None);
    }

    #[test]
    fn cell_tags() {
        for cell in [Cell::Empty, Cell::White, Cell::Black].iter() {
            assert_eq!(Cell::from_char(cell.to_char()), Some(*cell));
        }
        assert_eq!(Cell::from_char('-'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('?'), None);
    }

    #[test]
    fn player_from_str() {
        assert_eq!("White".parse::<Player>(), Ok(Player::White));
        assert_eq!(" x ".parse::<Player>(), Ok(Player::Black));
        assert_eq!("grey".parse::<Player>(), Err(ParsePlayerError));
    }

    #[test]
    fn outcome_from_advantage() {
        assert_eq!(Outcome::from_advantage(4), Outcome::WhiteWins(4));
        assert_eq!(Outcome::from_advantage(-64), Outcome::BlackWins(64));
        assert_eq!(Outcome::from_advantage(0), Outcome::Tie);
        assert_eq!(Outcome::from_advantage(-2).winner(), Some(Player::Black));
    }

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::WhiteWins(3).to_string(), "White wins by 3");
        assert_eq!(Outcome::BlackWins(1).to_string(), "Black wins by 1");
        assert_eq!(Outcome::Tie.to_string(), "Tie!");
    }
}

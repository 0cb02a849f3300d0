//! The 8x8 Othello grid and the directional-flip capture rule.
//!
//! A [`Board`] owns its cells outright, so a clone is a fully independent
//! position. Search code relies on this: every node of a search tree applies
//! its move to a private clone.

use crate::game::{Cell, Outcome, Player};
use crate::location::{Position, DIRECTIONS};
use crate::utils::{self, Grid};
use crate::{EDGE_LENGTH, NUM_SPACES};
use std::fmt;

/// A complete Othello position: one [`Cell`] per square, row-major.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard opening layout: White on D4 and E5, Black on E4 and D5.
    pub fn starting() -> Self {
        let mut board = Self::new();
        board.set(Position::new(3, 3), Cell::White);
        board.set(Position::new(4, 4), Cell::White);
        board.set(Position::new(3, 4), Cell::Black);
        board.set(Position::new(4, 3), Cell::Black);
        board
    }

    /// Build a board from a raw grid.
    pub fn from_cells(grid: Grid) -> Self {
        Self { grid }
    }

    /// Read-only access to the grid, for rendering.
    #[inline]
    pub fn cells(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Cell {
        assert!(pos.in_bounds(), "position {:?} is off the board", pos);
        self.grid[pos.row as usize][pos.col as usize]
    }

    /// Overwrite a single square, bypassing the capture rule.
    #[inline]
    pub fn set(&mut self, pos: Position, cell: Cell) {
        assert!(pos.in_bounds(), "position {:?} is off the board", pos);
        self.grid[pos.row as usize][pos.col as usize] = cell;
    }

    /// Count the squares holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.grid.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Number of White pieces minus number of Black pieces.
    /// Positive favors White, negative favors Black.
    pub fn material_advantage(&self) -> i32 {
        self.grid.iter().flatten().fold(0, |adv, cell| match cell {
            Cell::White => adv + 1,
            Cell::Black => adv - 1,
            Cell::Empty => adv,
        })
    }

    /// Place a piece for `player` at `pos` and flip every captured run.
    ///
    /// Returns false, leaving the board untouched, if the square is occupied
    /// or if the placement captures nothing in any direction.
    pub fn apply_move(&mut self, pos: Position, player: Player) -> bool {
        if self.get(pos) != Cell::Empty {
            log::debug!("rejected move {} for {}: square is occupied", pos, player);
            return false;
        }

        self.set(pos, player.into());
        let flipped: u32 = DIRECTIONS
            .iter()
            .map(|&dir| self.flip_direction(pos, dir, player))
            .sum();

        if flipped == 0 {
            self.set(pos, Cell::Empty);
            return false;
        }
        true
    }

    /// Flip the opponent run starting next to `origin` along `dir`, if it is
    /// closed off by one of `player`'s pieces. Returns the number flipped.
    fn flip_direction(&mut self, origin: Position, dir: Position, player: Player) -> u32 {
        let own = Cell::from(player);
        let other = Cell::from(!player);

        let mut cursor = origin + dir;
        let mut run = 0;
        while cursor.in_bounds() && self.get(cursor) == other {
            run += 1;
            cursor += dir;
        }

        if run == 0 || !cursor.in_bounds() || self.get(cursor) != own {
            return 0;
        }

        for _ in 0..run {
            cursor -= dir;
            self.set(cursor, own);
        }
        run
    }

    /// Whether `player` may legally play at `pos`. Does not modify the board.
    pub fn is_legal_move(&self, pos: Position, player: Player) -> bool {
        self.clone().apply_move(pos, player)
    }

    /// Every legal placement for `player`, in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        Position::all()
            .filter(|&pos| self.get(pos) == Cell::Empty && self.is_legal_move(pos, player))
            .collect()
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        Position::all().any(|pos| self.get(pos) == Cell::Empty && self.is_legal_move(pos, player))
    }

    /// The game is over once neither side has a legal move.
    pub fn is_finished(&self) -> bool {
        !self.has_legal_move(Player::White) && !self.has_legal_move(Player::Black)
    }

    /// Score the position as a game result.
    pub fn outcome(&self) -> Outcome {
        Outcome::from_advantage(self.material_advantage())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(&self.grid, f)
    }
}

#[derive(Debug, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} cells, found {}", NUM_SPACES, found)]
    WrongLength { found: usize },
    #[display(fmt = "unknown cell tag {:?}", tag)]
    UnknownCell { tag: char },
}

/// Parse 64 cell tags in row-major order (`.`, `O`, `X`); whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tags: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if tags.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { found: tags.len() });
        }

        let mut grid = Grid::default();
        for (index, &tag) in tags.iter().enumerate() {
            let cell = Cell::from_char(tag).ok_or(ParseBoardError::UnknownCell { tag })?;
            grid[index / EDGE_LENGTH][index % EDGE_LENGTH] = cell;
        }
        Ok(Self::from_cells(grid))
    }
}

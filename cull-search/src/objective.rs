//! Comparators: how each side reads the raw material advantage.
//!
//! The search never asks "is this White?". Each node carries a pair of
//! comparators, one for the side to move and one for its opponent, and the
//! pair is swapped every ply.

use cull_othello::Player;

/// Maps a raw White-minus-Black advantage to how favorable it is for one side.
pub type Comparator = fn(i32) -> i32;

/// White's view of the advantage.
pub fn favor_white(advantage: i32) -> i32 {
    advantage
}

/// Black's view of the advantage.
pub fn favor_black(advantage: i32) -> i32 {
    -advantage
}

/// The comparators of the side to move and of its opponent.
#[derive(Clone, Copy, Debug)]
pub struct Objective {
    pub mine: Comparator,
    pub theirs: Comparator,
}

impl Objective {
    pub fn new(mine: Comparator, theirs: Comparator) -> Self {
        Self { mine, theirs }
    }

    /// The standard objective for `player`: maximize its own piece lead.
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::White => Self::new(favor_white, favor_black),
            Player::Black => Self::new(favor_black, favor_white),
        }
    }

    /// The objective seen from the other side of the board.
    #[inline]
    pub fn swapped(self) -> Self {
        Self::new(self.theirs, self.mine)
    }

    /// Whether the side to move wants the raw advantage to go up.
    /// Determined by probing the comparator.
    #[inline]
    pub fn is_maximizing(self) -> bool {
        (self.mine)(1) > (self.mine)(0)
    }

    /// How favorable `advantage` is for the side to move.
    #[inline]
    pub fn favorability(self, advantage: i32) -> i32 {
        (self.mine)(advantage)
    }
}

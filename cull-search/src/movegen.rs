//! Candidate move generation for the search.
//!
//! Candidates are legal moves ordered best-first by the material advantage
//! they produce immediately, as read by the mover's own comparator, and
//! truncated to [`MAX_CANDIDATES`].

use crate::objective::Comparator;
use arrayvec::ArrayVec;
use cull_othello::{Board, Cell, Player, Position};
use itertools::Itertools;
use std::cmp::Reverse;

/// Upper bound on the branching factor of the search.
pub const MAX_CANDIDATES: usize = 8;

pub type Candidates = ArrayVec<Position, MAX_CANDIDATES>;

/// Legal moves for `player`, best first by `mine`, at most [`MAX_CANDIDATES`].
/// An empty result means `player` has no legal move.
pub fn generate_candidates(board: &Board, player: Player, mine: Comparator) -> Candidates {
    let opponent = Cell::from(!player);

    Position::all()
        .filter(|&pos| board.get(pos) == Cell::Empty && touches(board, pos, opponent))
        .filter_map(|pos| {
            let mut next = board.clone();
            if next.apply_move(pos, player) {
                Some((mine(next.material_advantage()), pos))
            } else {
                None
            }
        })
        // Stable: equal scores keep row-major order.
        .sorted_by_key(|&(score, _)| Reverse(score))
        .map(|(_, pos)| pos)
        .take(MAX_CANDIDATES)
        .collect()
}

/// Cheap prefilter: a move can only capture next to an opposing piece.
#[inline]
fn touches(board: &Board, pos: Position, opponent: Cell) -> bool {
    pos.neighbours().any(|n| board.get(n) == opponent)
}

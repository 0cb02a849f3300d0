//! Random positions reached by legal play, for property tests.

use crate::{Board, Player};
use rand::seq::SliceRandom;
use rand::Rng;

/// Play up to `plies` uniformly random legal moves from the starting position,
/// passing when a side has no move. Returns the board and the side to move.
pub fn random_position<R: Rng>(rng: &mut R, plies: usize) -> (Board, Player) {
    let mut board = Board::starting();
    let mut player = Player::default();

    for _ in 0..plies {
        if board.is_finished() {
            break;
        }
        if let Some(&mv) = board.legal_moves(player).choose(rng) {
            board.apply_move(mv, player);
        }
        player = !player;
    }

    (board, player)
}

/// Play a full random game, returning every position along the way.
pub fn random_game<R: Rng>(rng: &mut R) -> Vec<Board> {
    let mut board = Board::starting();
    let mut player = Player::default();
    let mut history = vec![board.clone()];

    while !board.is_finished() {
        if let Some(&mv) = board.legal_moves(player).choose(rng) {
            board.apply_move(mv, player);
            history.push(board.clone());
        }
        player = !player;
    }

    history
}

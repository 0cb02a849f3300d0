//! "Perft" move-generation test: count the number of leaves at a given depth.
//! Known counts from the standard start catch mistakes in the capture rule.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Player};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Board::starting(), Player::Black, depth, false)
}

fn leaves_below(board: &Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(player);
    if moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut next = board.clone();
            next.apply_move(mv, player);
            leaves_below(&next, !player, depth - 1, false)
        })
        .sum()
}

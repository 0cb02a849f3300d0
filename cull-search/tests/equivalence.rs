//! Alpha-beta must agree exactly with plain minimax over the same candidates.

use cull_othello::test_utils::random_position;
use cull_othello::{Board, Player, Position};
use cull_search::{generate_candidates, Evaluation, Node, Objective, Searcher};
use indicatif::ProgressIterator;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Unpruned minimax with the same leaf, ordering and tie-breaking rules.
fn minimax(
    board: &Board,
    player: Player,
    objective: Objective,
    depth: u32,
    nodes: &mut u64,
) -> Evaluation {
    *nodes += 1;
    let advantage = board.material_advantage();
    let candidates = generate_candidates(board, player, objective.mine);

    let first = match candidates.first() {
        Some(&mv) => mv,
        None => {
            return Evaluation {
                best_move: None,
                score: advantage,
            }
        }
    };
    if depth == 0 {
        return Evaluation {
            best_move: Some(first),
            score: advantage,
        };
    }

    let mut best: Option<(Position, i32)> = None;
    for &mv in &candidates {
        let mut next = board.clone();
        assert!(next.apply_move(mv, player));
        let score = minimax(&next, !player, objective.swapped(), depth - 1, nodes).score;
        if best.map_or(true, |(_, b)| objective.favorability(score) > objective.favorability(b)) {
            best = Some((mv, score));
        }
    }

    let (mv, score) = best.unwrap_or((first, advantage));
    Evaluation {
        best_move: Some(mv),
        score,
    }
}

fn compare(board: &Board, player: Player, depth: u32) -> (u64, u64) {
    let mut plain_nodes = 0;
    let expected = minimax(
        board,
        player,
        Objective::for_player(player),
        depth,
        &mut plain_nodes,
    );

    let mut searcher = Searcher::new();
    let actual = searcher.evaluate(Node::root(board, player), depth);

    assert_eq!(actual, expected, "depth {} for {} on\n{}", depth, player, board);
    assert!(searcher.nodes() <= plain_nodes);
    (searcher.nodes(), plain_nodes)
}

#[test]
fn starting_position() {
    for depth in 0..5 {
        compare(&Board::starting(), Player::White, depth);
        compare(&Board::starting(), Player::Black, depth);
    }
}

#[test]
fn random_midgames() {
    let mut rng = StdRng::seed_from_u64(0x0ce1_10);
    let positions: Vec<(Board, Player)> = (0..40)
        .map(|i| random_position(&mut rng, 4 + i))
        .collect();

    let mut pruned = 0;
    let mut plain = 0;
    for (board, player) in positions.iter().progress() {
        for depth in 1..4 {
            let (a, b) = compare(board, *player, depth);
            pruned += a;
            plain += b;
        }
    }
    assert!(pruned < plain);
}

#[test]
fn random_endgames() {
    let mut rng = StdRng::seed_from_u64(7);
    let positions: Vec<(Board, Player)> = (0..20)
        .map(|_| random_position(&mut rng, 52))
        .collect();

    for (board, player) in positions.iter().progress() {
        compare(board, *player, 4);
    }
}

#[test]
fn candidates_are_legal_moves() {
    let mut rng = StdRng::seed_from_u64(21);

    for plies in 0..60 {
        let (board, player) = random_position(&mut rng, plies);
        let objective = Objective::for_player(player);
        let candidates = generate_candidates(&board, player, objective.mine);
        let legal = board.legal_moves(player);

        assert!(candidates.iter().all(|mv| legal.contains(mv)));
        assert_eq!(candidates.len(), legal.len().min(8));

        let scores: Vec<i32> = candidates
            .iter()
            .map(|&mv| {
                let mut next = board.clone();
                next.apply_move(mv, player);
                objective.favorability(next.material_advantage())
            })
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}

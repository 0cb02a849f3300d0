//! `cull-search` chooses moves for a computer Othello player.
//!
//! The engine runs a fixed-depth minimax search with alpha-beta pruning over
//! [`cull_othello::Board`] clones, scoring leaves by raw material advantage.
//! Moves are ordered by their immediate gain and the branching factor is
//! capped at [`MAX_CANDIDATES`].
//!
//! ```
//! use cull_othello::{Board, Player};
//! use cull_search::{request_move, SearchConfig};
//!
//! let board = Board::starting();
//! let result = request_move(&board, Player::White, &SearchConfig::with_depth(2)).unwrap();
//! assert!(board.is_legal_move(result.mv, Player::White));
//! ```

pub mod config;
pub mod movegen;
pub mod objective;
pub mod search;
pub mod trace;

pub use config::{SearchConfig, DEFAULT_DEPTH};
pub use movegen::{generate_candidates, MAX_CANDIDATES};
pub use objective::{favor_black, favor_white, Comparator, Objective};
pub use search::{Evaluation, Node, Searcher, Window};
pub use trace::{Trace, TraceEvent};

use cull_othello::{Board, Player, Position};

/// A move chosen by the engine.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveResult {
    pub mv: Position,
    /// The board after `mv` has been played.
    pub board: Board,
    /// Backed-up material advantage (White minus Black).
    pub score: i32,
    /// Nodes visited by the search.
    pub nodes: u64,
}

/// One root move scored on its own, with a full window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RootOption {
    pub mv: Position,
    pub score: i32,
    /// `score` as read by the side to move.
    pub favorability: i32,
}

/// Ask the engine for `player`'s move on `board`.
/// Returns `None` if `player` has no legal move.
pub fn request_move(board: &Board, player: Player, config: &SearchConfig) -> Option<MoveResult> {
    run(board, player, config, Searcher::new())
}

/// Like [`request_move`], recording the explored tree into `trace`.
pub fn request_move_traced(
    board: &Board,
    player: Player,
    config: &SearchConfig,
    trace: &mut Trace,
) -> Option<MoveResult> {
    run(board, player, config, Searcher::with_trace(trace))
}

fn run(
    board: &Board,
    player: Player,
    config: &SearchConfig,
    mut searcher: Searcher<'_>,
) -> Option<MoveResult> {
    let eval = searcher.evaluate(Node::root(board, player), config.depth);

    let mv = match eval.best_move {
        Some(mv) => mv,
        None => {
            log::debug!("{} has no legal move (advantage {})", player, eval.score);
            return None;
        }
    };

    let mut next = board.clone();
    if !next.apply_move(mv, player) {
        log::warn!("search chose illegal move {} for {}", mv, player);
        return None;
    }

    log::debug!(
        "{} plays {} at depth {}: score {}, {} nodes",
        player,
        mv,
        config.depth,
        eval.score,
        searcher.nodes()
    );

    Some(MoveResult {
        mv,
        board: next,
        score: eval.score,
        nodes: searcher.nodes(),
    })
}

/// Score every root candidate independently, in candidate order.
/// Each one is searched `config.depth - 1` plies deep after it is played.
/// Depth 0 is treated as depth 1: every option scores the advantage right
/// after its move.
pub fn analyze(board: &Board, player: Player, config: &SearchConfig) -> Vec<RootOption> {
    let root = Node::root(board, player);
    let mut searcher = Searcher::new();

    generate_candidates(board, player, root.objective.mine)
        .into_iter()
        .filter_map(|mv| {
            let mut next = board.clone();
            if !next.apply_move(mv, player) {
                return None;
            }
            let reply = Node {
                board: &next,
                player: !player,
                objective: root.objective.swapped(),
                window: Window::FULL,
            };
            let score = searcher
                .evaluate(reply, config.depth.saturating_sub(1))
                .score;
            let favorability = root.objective.favorability(score);
            log::debug!("option {} score {} ({})", mv, score, favorability);
            Some(RootOption {
                mv,
                score,
                favorability,
            })
        })
        .collect()
}

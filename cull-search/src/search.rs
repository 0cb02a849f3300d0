//! Depth-limited minimax with alpha-beta pruning.
//!
//! Both sides score positions with the same raw scalar, White's material
//! advantage. Which direction is "good" comes from the node's [`Objective`],
//! which is swapped every ply. Scores passed up the tree are always raw, so
//! each level can read them with its own comparator.

use crate::movegen::generate_candidates;
use crate::objective::Objective;
use crate::trace::Trace;
use cull_othello::{Board, Player, Position};

/// The (alpha, beta) bounds of scores still relevant to the root decision.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Window {
    pub alpha: i32,
    pub beta: i32,
}

impl Window {
    /// The unbounded window used at the root.
    pub const FULL: Window = Window {
        alpha: i32::MIN,
        beta: i32::MAX,
    };

    #[inline]
    pub fn is_closed(self) -> bool {
        self.alpha >= self.beta
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::FULL
    }
}

/// The move chosen at a node and its backed-up raw score.
/// `best_move` is `None` only when the side to move has no legal move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Evaluation {
    pub best_move: Option<Position>,
    pub score: i32,
}

/// One position in the search tree, from the point of view of the side to move.
#[derive(Clone, Copy, Debug)]
pub struct Node<'a> {
    pub board: &'a Board,
    pub player: Player,
    pub objective: Objective,
    pub window: Window,
}

impl<'a> Node<'a> {
    /// A root node with the standard objective for `player` and a full window.
    pub fn root(board: &'a Board, player: Player) -> Self {
        Self {
            board,
            player,
            objective: Objective::for_player(player),
            window: Window::FULL,
        }
    }
}

/// Runs searches and counts the nodes they visit.
#[derive(Debug, Default)]
pub struct Searcher<'t> {
    nodes: u64,
    trace: Option<&'t mut Trace>,
}

impl<'t> Searcher<'t> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A searcher that records every explored option into `trace`.
    pub fn with_trace(trace: &'t mut Trace) -> Self {
        Self {
            nodes: 0,
            trace: Some(trace),
        }
    }

    /// Nodes visited since this searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `depth` plies below `node` and return the best move with its raw score.
    ///
    /// A node with no candidate moves is a leaf at any depth and scores the
    /// current advantage. At depth zero the first candidate is returned with
    /// the current advantage. Otherwise each candidate is searched in order;
    /// a strictly better score by the node's comparator replaces the best so
    /// far, and the loop stops once the window closes.
    pub fn evaluate(&mut self, node: Node<'_>, depth: u32) -> Evaluation {
        self.nodes += 1;

        let Node {
            board,
            player,
            objective,
            mut window,
        } = node;
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

        let maximizing = objective.is_maximizing();
        let mut best: Option<(Position, i32)> = None;

        for &mv in &candidates {
            let mut next = board.clone();
            if !next.apply_move(mv, player) {
                continue;
            }

            if let Some(trace) = &mut self.trace {
                trace.enter(player, mv);
            }
            // Roles and comparators swap; the window carries the bounds found so far.
            let child = Node {
                board: &next,
                player: !player,
                objective: objective.swapped(),
                window,
            };
            let score = self.evaluate(child, depth - 1).score;
            if let Some(trace) = &mut self.trace {
                trace.exit(mv, score, objective.favorability(score));
            }

            let improves = match best {
                Some((_, best_score)) => {
                    objective.favorability(score) > objective.favorability(best_score)
                }
                None => true,
            };
            if improves {
                best = Some((mv, score));
            }

            if maximizing {
                window.alpha = window.alpha.max(score);
            } else {
                window.beta = window.beta.min(score);
            }

            if window.is_closed() {
                if let Some(trace) = &mut self.trace {
                    trace.cutoff(window.alpha, window.beta);
                }
                break;
            }
        }

        let (best_move, score) = best.unwrap_or((first, advantage));
        Evaluation {
            best_move: Some(best_move),
            score,
        }
    }
}

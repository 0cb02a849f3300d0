//! Optional record of how a search walked its tree.
//!
//! A [`Trace`] is handed to the search explicitly. Each explored option and
//! each backed-up score becomes an event, indented by tree depth, and is also
//! mirrored to the `log` facade at trace level under [`LOG_TARGET`].

use cull_othello::{Player, Position};
use std::fmt;

pub const LOG_TARGET: &str = "cull_search::trace";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraceEvent {
    /// `player` is about to try `mv`.
    Option {
        depth: usize,
        player: Player,
        mv: Position,
    },
    /// `mv` came back with raw `score`, worth `favorability` to the mover.
    Score {
        depth: usize,
        mv: Position,
        score: i32,
        favorability: i32,
    },
    /// Remaining options at this depth were skipped.
    Cutoff { depth: usize, alpha: i32, beta: i32 },
}

impl TraceEvent {
    pub fn depth(&self) -> usize {
        match *self {
            TraceEvent::Option { depth, .. }
            | TraceEvent::Score { depth, .. }
            | TraceEvent::Cutoff { depth, .. } => depth,
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.depth() * 4)?;
        match *self {
            TraceEvent::Option { player, mv, .. } => write!(f, "Option {} ({})", mv, player),
            TraceEvent::Score {
                mv,
                score,
                favorability,
                ..
            } => write!(f, "Score {} {} ({})", mv, score, favorability),
            TraceEvent::Cutoff { alpha, beta, .. } => {
                write!(f, "Cutoff alpha={} beta={}", alpha, beta)
            }
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Trace {
    events: Vec<TraceEvent>,
    depth: usize,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.depth = 0;
    }

    pub(crate) fn enter(&mut self, player: Player, mv: Position) {
        self.record(TraceEvent::Option {
            depth: self.depth,
            player,
            mv,
        });
        self.depth += 1;
    }

    pub(crate) fn exit(&mut self, mv: Position, score: i32, favorability: i32) {
        self.depth = self.depth.saturating_sub(1);
        self.record(TraceEvent::Score {
            depth: self.depth,
            mv,
            score,
            favorability,
        });
    }

    pub(crate) fn cutoff(&mut self, alpha: i32, beta: i32) {
        self.record(TraceEvent::Cutoff {
            depth: self.depth,
            alpha,
            beta,
        });
    }

    fn record(&mut self, event: TraceEvent) {
        log::trace!(target: LOG_TARGET, "{}", event);
        self.events.push(event);
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{}", event)?;
        }
        Ok(())
    }
}

//! Search configuration.

/// Plies searched when no depth is configured.
pub const DEFAULT_DEPTH: u32 = 7;

/// Parameters for a move request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchConfig {
    /// Plies to search below the root. Zero picks the best-ordered candidate.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u32) -> Self {
        Self { depth }
    }
}

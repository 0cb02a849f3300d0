//! `cull-othello` is a small, safe Othello board for search engines and UIs.
//!
//! The crate is built around three types:
//!
//!  - [`Board`] owns an 8x8 grid of [`Cell`]s and implements the capture rule:
//!    a move is legal if and only if it flips at least one run of opposing pieces.
//!  - [`Position`] names a square, and doubles as a direction vector when
//!    scanning for captures.
//!  - [`Player`] identifies a side; `!player` is always its opponent.
//!
//! Scoring is by material advantage: White's piece count minus Black's.
//!
//! ```
//! use cull_othello::{Board, Player, Position};
//!
//! let mut board = Board::starting();
//! assert!(board.apply_move("E3".parse().unwrap(), Player::White));
//! assert!(!board.apply_move(Position::new(0, 0), Player::Black));
//! assert_eq!(board.material_advantage(), 3);
//! ```

pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;
pub use utils::Grid;

/// The number of squares on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of squares on an Othello board.
pub const NUM_SPACES: usize = 64;

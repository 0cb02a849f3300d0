//! Miscellaneous project utilities.

use crate::{Cell, EDGE_LENGTH};
use std::fmt::{self, Formatter};

/// The row-major grid of cells backing a board.
pub type Grid = [[Cell; EDGE_LENGTH]; EDGE_LENGTH];

/// Render a grid with column letters A-H across the top and row numbers 1-8 down the side.
pub fn format_grid(grid: &Grid, f: &mut Formatter) -> fmt::Result {
    write!(f, "   A B C D E F G H")?;

    for (row, cells) in grid.iter().enumerate() {
        write!(f, "\n {}", row + 1)?;
        for cell in cells {
            write!(f, " {}", cell.to_char())?;
        }
    }

    Ok(())
}

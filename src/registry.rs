use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::BoardError;
use crate::glyph::Glyph;
use crate::grid::Grid;
use crate::topology::find_head_within;
use crate::types::Position;

/// The most snakes one board can hold, one for every [`crate::types::SnakeId`]
pub const MAX_SNAKES: usize = u16::MAX as usize + 1;

/// The cached endpoints of one snake. The cells between them are only recorded in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Snake {
    #[allow(missing_docs)]
    pub head: Position,
    #[allow(missing_docs)]
    pub tail: Position,
    /// false once the snake has crashed, it never comes back
    pub live: bool,
}

impl Snake {
    #[allow(missing_docs)]
    pub fn new(tail: Position, head: Position) -> Self {
        Snake {
            head,
            tail,
            live: true,
        }
    }
}

/// Finds every snake on a grid by looking for tails in row major order and walking
/// each one to its head. A chain that ends in `x` is registered as already dead.
pub fn scan_snakes(grid: &Grid, max_steps: usize) -> Result<Vec<Snake>, BoardError> {
    let mut snakes = vec![];

    for (tail, glyph) in grid.iter() {
        if !glyph.is_tail() {
            continue;
        }

        if snakes.len() == MAX_SNAKES {
            return Err(BoardError::TooManySnakes { limit: MAX_SNAKES });
        }

        let head = find_head_within(grid, tail, max_steps)?;
        let live = grid.get(head) != Some(Glyph::DeadHead);
        trace!(id = snakes.len(), %tail, %head, live, "found snake");

        snakes.push(Snake { head, tail, live });
    }

    Ok(snakes)
}

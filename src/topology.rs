//! Recovering a snake's shape from nothing but the grid.
//!
//! Every snake cell points at the next cell towards the head, so starting from a tail
//! and following the glyphs must end on a head. A chain that runs into floor, off the
//! board, or around in a circle is reported instead of followed forever.
use crate::error::BoardError;
use crate::glyph::Glyph;
use crate::grid::Grid;
use crate::types::Position;

/// Walk from `tail` to the head of its snake. The walk stops at a live head (`WASD`)
/// or a dead one (`x`). Bounded by the number of cells in the grid, since a chain
/// that doesn't loop can't visit any cell twice.
pub fn find_head(grid: &Grid, tail: Position) -> Result<Position, BoardError> {
    find_head_within(grid, tail, grid.len())
}

/// [`find_head`] with an explicit cap on how many steps may be taken
pub fn find_head_within(
    grid: &Grid,
    tail: Position,
    max_steps: usize,
) -> Result<Position, BoardError> {
    walk(grid, tail, max_steps, |_| ())
}

/// Every cell of the snake whose tail is at `tail`, from tail to head inclusive
pub fn trace_body(
    grid: &Grid,
    tail: Position,
    max_steps: usize,
) -> Result<Vec<Position>, BoardError> {
    let mut body = vec![];
    walk(grid, tail, max_steps, |p| body.push(p))?;
    Ok(body)
}

fn walk(
    grid: &Grid,
    tail: Position,
    max_steps: usize,
    mut visit: impl FnMut(Position),
) -> Result<Position, BoardError> {
    let mut pos = tail;
    let mut steps = 0;

    loop {
        let glyph = grid.get(pos).ok_or(BoardError::OutOfBounds { at: pos })?;
        visit(pos);

        if glyph.is_head() || glyph == Glyph::DeadHead {
            return Ok(pos);
        }

        let direction = glyph.direction().ok_or(BoardError::BrokenChain {
            at: pos,
            found: glyph.to_char(),
        })?;

        if steps >= max_steps {
            return Err(BoardError::UnterminatedChain { tail, steps });
        }

        pos = grid
            .step(pos, direction)
            .ok_or(BoardError::OffGrid {
                from: pos,
                direction,
            })?;
        steps += 1;
    }
}

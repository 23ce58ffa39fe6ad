//! Hooks for putting new food on the board after a snake eats.
//!
//! The tick engine calls [`FoodPlacer::place_food`] exactly once per meal and does not
//! check what the hook did. Any `FnMut(&mut Board) -> bool` closure is a placer.
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::board::Board;
use crate::glyph::Glyph;
use crate::types::EmptyCellGettableGame;

/// Something that can put food on a board
pub trait FoodPlacer {
    /// Place food, returning whether anything was placed
    fn place_food(&mut self, board: &mut Board) -> bool;
}

impl<F> FoodPlacer for F
where
    F: FnMut(&mut Board) -> bool,
{
    fn place_food(&mut self, board: &mut Board) -> bool {
        self(board)
    }
}

/// Places one food on an empty cell chosen uniformly at random
#[derive(Debug, Clone)]
pub struct RandomFoodPlacer<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomFoodPlacer<R> {
    #[allow(missing_docs)]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FoodPlacer for RandomFoodPlacer<R> {
    fn place_food(&mut self, board: &mut Board) -> bool {
        let chosen = board.get_empty_cells().choose(&mut self.rng);
        match chosen {
            Some(pos) => board.set_glyph(pos, Glyph::Food),
            None => false,
        }
    }
}

/// Never places anything, so the board runs out of food
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFood;

impl FoodPlacer for NoFood {
    fn place_food(&mut self, _board: &mut Board) -> bool {
        false
    }
}

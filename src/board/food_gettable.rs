use crate::types::{EmptyCellGettableGame, FoodGettableGame, Position};

use super::Board;

impl FoodGettableGame for Board {
    fn get_all_food_as_positions(&self) -> Vec<Position> {
        self.grid
            .iter()
            .filter(|(_, g)| g.is_food())
            .map(|(p, _)| p)
            .collect()
    }
}

impl EmptyCellGettableGame for Board {
    fn get_empty_cells(&self) -> Box<dyn Iterator<Item = Position> + '_> {
        Box::new(
            self.grid
                .iter()
                .filter(|(_, g)| g.is_empty())
                .map(|(p, _)| p),
        )
    }
}

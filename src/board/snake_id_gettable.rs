use crate::types::{SnakeIDGettableGame, SnakeId};

use super::Board;

impl SnakeIDGettableGame for Board {
    type SnakeIDType = SnakeId;

    fn get_snake_ids(&self) -> Vec<Self::SnakeIDType> {
        // the registry never holds more snakes than there are ids
        (0..self.snakes.len())
            .filter_map(|i| SnakeId::try_from(i).ok())
            .collect()
    }
}

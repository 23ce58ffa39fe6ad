use crate::types::{HeadGettableGame, Position, TailGettableGame};

use super::Board;

impl HeadGettableGame for Board {
    fn get_head_as_position(&self, snake_id: &Self::SnakeIDType) -> Position {
        self.snakes[snake_id.as_usize()].head
    }
}

impl TailGettableGame for Board {
    fn get_tail_as_position(&self, snake_id: &Self::SnakeIDType) -> Position {
        self.snakes[snake_id.as_usize()].tail
    }
}

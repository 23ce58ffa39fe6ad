use crate::{
    error::BoardError,
    topology::trace_body,
    types::{Position, SnakeBodyGettableGame},
};

use super::Board;

impl SnakeBodyGettableGame for Board {
    fn get_snake_body_vec(
        &self,
        snake_id: &Self::SnakeIDType,
    ) -> Result<Vec<Position>, BoardError> {
        let snake = self.snake(*snake_id)?;
        trace_body(&self.grid, snake.tail, self.trace_limit())
    }
}

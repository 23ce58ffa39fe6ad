use crate::{error::BoardError, types::LengthGettableGame, types::SnakeBodyGettableGame};

use super::Board;

impl LengthGettableGame for Board {
    fn get_length(&self, snake_id: &Self::SnakeIDType) -> Result<usize, BoardError> {
        self.get_snake_body_vec(snake_id).map(|body| body.len())
    }
}

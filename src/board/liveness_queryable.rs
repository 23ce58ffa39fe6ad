use crate::types::LivenessQueryableGame;

use super::Board;

impl LivenessQueryableGame for Board {
    fn is_alive(&self, snake_id: &Self::SnakeIDType) -> bool {
        self.snakes
            .get(snake_id.as_usize())
            .map(|s| s.live)
            .unwrap_or(false)
    }

    fn alive_snake_count(&self) -> usize {
        self.snakes.iter().filter(|s| s.live).count()
    }
}

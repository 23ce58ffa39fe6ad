use crate::types::SizeDeterminableGame;

use super::Board;

impl SizeDeterminableGame for Board {
    fn get_width(&self) -> usize {
        self.grid.width()
    }

    fn get_height(&self) -> usize {
        self.grid.height()
    }
}

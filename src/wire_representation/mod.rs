//! A JSON friendly form of a board.
//!
//! The text form only records the grid, so reloading it rediscovers the snakes from
//! scratch. The wire form also carries the registry, which keeps snake ids and dead
//! snakes exactly as they were. Rows are stored without their padding so ragged
//! boards survive the trip unchanged.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::glyph::Glyph;
use crate::grid::Grid;
use crate::registry::Snake;

/// Struct that matches the board object on the wire
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WireBoard {
    /// one string per row, each as long as the line it was read from
    pub rows: Vec<String>,
    /// the registry, in snake id order
    pub snakes: Vec<Snake>,
}

impl WireBoard {
    /// parse a wire board from JSON
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// render this wire board as JSON
    pub fn to_json(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Turn this back into a board, checking that the snakes agree with the grid
    pub fn into_board(self, config: BoardConfig) -> Result<Board, BoardError> {
        let rows = self
            .rows
            .iter()
            .map(|row| row.chars().map(Glyph::from_char).collect_vec())
            .collect_vec();
        Board::from_parts(Grid::from_rows(rows), self.snakes, config)
    }
}

impl Board {
    /// the wire form of this board
    pub fn to_wire(&self) -> WireBoard {
        let grid = self.grid();
        let rows = grid
            .rows()
            .enumerate()
            .map(|(i, row)| {
                row[..grid.row_width(i)]
                    .iter()
                    .map(|g| g.to_char())
                    .collect::<String>()
            })
            .collect_vec();

        WireBoard {
            rows,
            snakes: self.snakes().to_vec(),
        }
    }
}

impl TryFrom<WireBoard> for Board {
    type Error = BoardError;

    fn try_from(wire: WireBoard) -> Result<Self, Self::Error> {
        wire.into_board(BoardConfig::default())
    }
}

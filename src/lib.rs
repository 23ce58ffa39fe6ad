#![deny(missing_debug_implementations, missing_docs)]
//! Types for simulating snakes on a text grid.
//!
//! A board is written as plain text, one character per cell. Walls are `#`, food is
//! `*`, and every snake segment is drawn with a glyph that points one step towards the
//! snake's head:
//!
//! ```plain
//! ####################
//! #                  #
//! # d>D    *         #
//! #                  #
//! ####################
//! ```
//!
//! The grid is the only record of a snake's body. [`Board`] keeps a small registry of
//! where each head and tail is and [`Board::advance`] moves every live snake one step
//! per tick, growing it on food and killing it on anything else that isn't floor.
//!
//! ```
//! use snake_grid::{Board, NoFood};
//!
//! let mut board = Board::default();
//! let report = board.advance(&mut NoFood).unwrap();
//! assert_eq!(report.outcomes.len(), 1);
//! ```

/// The board, its snakes, and the tick engine
pub mod board;
/// Options that control how text becomes a board
pub mod config;
/// Errors raised when a grid does not encode well formed snakes
pub mod error;
pub mod food;
pub mod glyph;
pub mod grid;
/// The registry of snakes found on a grid
pub mod registry;
pub mod topology;
pub mod types;
pub mod wire_representation;

pub use board::{Board, TickOutcome, TickReport};
pub use config::BoardConfig;
pub use error::BoardError;
pub use food::{FoodPlacer, NoFood, RandomFoodPlacer};
pub use glyph::Glyph;
pub use grid::Grid;
pub use registry::Snake;

/// Loads a board fixture from a given string
pub fn board_fixture(board_fixture: &str) -> Board {
    let b: Result<Board, _> = board_fixture.parse();
    b.expect("the board literal is valid")
}

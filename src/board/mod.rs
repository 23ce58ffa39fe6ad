use std::fmt;
use std::str::FromStr;

use fxhash::FxHashSet;

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::glyph::Glyph;
use crate::grid::Grid;
use crate::registry::{scan_snakes, Snake, MAX_SNAKES};
use crate::topology::trace_body;
use crate::types::{Direction, Position, SnakeId};

mod food_gettable;
mod head_gettable;
mod length_gettable;
mod liveness_queryable;
mod size_determinable;
mod snake_body_gettable;
mod snake_id_gettable;
mod tick;

pub use tick::{TickOutcome, TickReport};

/// Height of the starter board
pub const DEFAULT_HEIGHT: usize = 18;
/// Width of the starter board
pub const DEFAULT_WIDTH: usize = 20;

/// A grid plus the snakes living on it.
///
/// The grid is the only record of each snake's body. The registry just remembers
/// where every snake's head and tail are, so the two must be changed together; every
/// mutation in this crate goes through [`Board::advance`] or [`Board::set_glyph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    snakes: Vec<Snake>,
    config: BoardConfig,
}

impl Default for Board {
    /// The 18x20 walled starter board with one snake `d>D` heading right towards a food
    fn default() -> Self {
        let mut grid = Grid::filled(DEFAULT_HEIGHT, DEFAULT_WIDTH, Glyph::Empty);
        for col in 0..DEFAULT_WIDTH {
            grid.set(Position::new(0, col), Glyph::Wall);
            grid.set(Position::new(DEFAULT_HEIGHT - 1, col), Glyph::Wall);
        }
        for row in 0..DEFAULT_HEIGHT {
            grid.set(Position::new(row, 0), Glyph::Wall);
            grid.set(Position::new(row, DEFAULT_WIDTH - 1), Glyph::Wall);
        }

        let tail = Position::new(2, 2);
        let head = Position::new(2, 4);
        grid.set(tail, Glyph::tail(Direction::Right));
        grid.set(Position::new(2, 3), Glyph::body(Direction::Right));
        grid.set(head, Glyph::head(Direction::Right));
        grid.set(Position::new(2, 9), Glyph::Food);

        Board {
            grid,
            snakes: vec![Snake::new(tail, head)],
            config: BoardConfig::default(),
        }
    }
}

impl Board {
    /// Builds a board from a decoded grid using the default config
    pub fn from_grid(grid: Grid) -> Result<Self, BoardError> {
        Self::from_grid_with_config(grid, BoardConfig::default())
    }

    /// Builds a board from a decoded grid, finding every snake on it. Fails if two
    /// tails lead into the same body.
    pub fn from_grid_with_config(grid: Grid, config: BoardConfig) -> Result<Self, BoardError> {
        if config.require_wall_border {
            check_border(&grid)?;
        }
        let snakes = scan_snakes(&grid, config.trace_limit(grid.len()))?;
        let board = Board {
            grid,
            snakes,
            config,
        };
        board.check_consistency()?;
        Ok(board)
    }

    /// Decodes text and builds a board from it
    pub fn from_text_with_config(text: &str, config: BoardConfig) -> Result<Self, BoardError> {
        Self::from_grid_with_config(Grid::decode(text), config)
    }

    /// Assembles a board from parts, verifying that the snakes match the grid
    pub fn from_parts(
        grid: Grid,
        snakes: Vec<Snake>,
        config: BoardConfig,
    ) -> Result<Self, BoardError> {
        if config.require_wall_border {
            check_border(&grid)?;
        }
        if snakes.len() > MAX_SNAKES {
            return Err(BoardError::TooManySnakes { limit: MAX_SNAKES });
        }
        let board = Board {
            grid,
            snakes,
            config,
        };
        board.check_consistency()?;
        Ok(board)
    }

    /// the board as text, one line per row
    pub fn encode(&self) -> String {
        self.grid.encode()
    }

    #[allow(missing_docs)]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// every snake ever found on this board, dead ones included, in registry order
    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// look up a snake by id
    pub fn snake(&self, id: SnakeId) -> Result<&Snake, BoardError> {
        self.snakes
            .get(id.as_usize())
            .ok_or(BoardError::UnknownSnake(id))
    }

    /// the glyph at a position, None when out of bounds
    pub fn glyph_at(&self, pos: Position) -> Option<Glyph> {
        self.grid.get(pos)
    }

    /// Overwrite one cell. Intended for food placement; writing snake glyphs here will
    /// leave the grid disagreeing with the registry. Returns false if `pos` is off the board.
    pub fn set_glyph(&mut self, pos: Position, glyph: Glyph) -> bool {
        self.grid.set(pos, glyph)
    }

    /// checks that the outer edge of the board is all wall
    pub fn check_border(&self) -> Result<(), BoardError> {
        check_border(&self.grid)
    }

    /// Verifies that every snake's tail still traces to its registered head and that
    /// no two snakes share a cell
    pub fn check_consistency(&self) -> Result<(), BoardError> {
        let limit = self.trace_limit();
        let mut claimed = FxHashSet::default();

        for (idx, snake) in self.snakes.iter().enumerate() {
            let id = SnakeId::try_from(idx)?;
            let tail_glyph = self.grid.get(snake.tail).unwrap_or(Glyph::Padding);
            if !tail_glyph.is_tail() {
                return Err(BoardError::NotATail {
                    snake: id,
                    at: snake.tail,
                    found: tail_glyph.to_char(),
                });
            }

            let head_glyph = self.grid.get(snake.head).unwrap_or(Glyph::Padding);
            let head_ok = if snake.live {
                head_glyph.is_head()
            } else {
                head_glyph == Glyph::DeadHead
            };
            if !head_ok {
                return Err(BoardError::NotAHead {
                    snake: id,
                    at: snake.head,
                    found: head_glyph.to_char(),
                });
            }

            let body = trace_body(&self.grid, snake.tail, limit)?;
            let traced = body.last().copied().unwrap_or(snake.tail);
            if traced != snake.head {
                return Err(BoardError::HeadMismatch {
                    snake: id,
                    traced,
                    registered: snake.head,
                });
            }

            for pos in body {
                if !claimed.insert(pos) {
                    return Err(BoardError::SharedCell { at: pos });
                }
            }
        }

        Ok(())
    }

    pub(crate) fn trace_limit(&self) -> usize {
        self.config.trace_limit(self.grid.len())
    }
}

fn check_border(grid: &Grid) -> Result<(), BoardError> {
    let height = grid.height();
    let not_wall = |pos: Position| grid.get(pos) != Some(Glyph::Wall);

    for row in 0..height {
        let width = grid.trimmed_row_width(row);
        if width == 0 {
            return Err(BoardError::MissingWallBorder {
                at: Position::new(row, 0),
            });
        }

        let edge_row = row == 0 || row + 1 == height;
        let mut cols: Box<dyn Iterator<Item = usize>> = if edge_row {
            Box::new(0..width)
        } else {
            Box::new([0, width - 1].into_iter())
        };
        if let Some(col) = cols.find(|col| not_wall(Position::new(row, *col))) {
            return Err(BoardError::MissingWallBorder {
                at: Position::new(row, col),
            });
        }
    }

    Ok(())
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_grid(Grid::decode(s))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_matches_fixture() {
        let board = Board::default();
        assert_eq!(board.encode(), include_str!("../../fixtures/default_board.txt"));
        assert_eq!(board.grid().height(), DEFAULT_HEIGHT);
        assert_eq!(board.grid().width(), DEFAULT_WIDTH);
        assert!(board.check_border().is_ok());
        assert!(board.check_consistency().is_ok());
    }

    #[test]
    fn test_parsing_the_default_board_finds_the_same_snake() {
        let parsed: Board = include_str!("../../fixtures/default_board.txt")
            .parse()
            .unwrap();
        assert_eq!(parsed, Board::default());
    }

    #[test]
    fn test_border_is_required_by_default() {
        let err = "#####\n d>D#\n#####\n".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            BoardError::MissingWallBorder {
                at: Position::new(1, 0)
            }
        );

        let err = "## ##\n#d>D#\n#####\n".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            BoardError::MissingWallBorder {
                at: Position::new(0, 2)
            }
        );

        let lenient =
            Board::from_text_with_config("#####\n d>D#\n#####\n", BoardConfig::lenient());
        assert_eq!(lenient.unwrap().snakes().len(), 1);
    }

    #[test]
    fn test_border_follows_ragged_rows() {
        let board: Board = "#######\n#d>D#\n#######\n".parse().unwrap();
        assert_eq!(board.grid().width(), 7);
        assert_eq!(
            "#######\n#d>D \n#######\n".parse::<Board>().unwrap_err(),
            BoardError::MissingWallBorder {
                at: Position::new(1, 3)
            }
        );
    }

    #[test]
    fn test_saved_ragged_board_loads_again() {
        let board: Board = "#######\n#d>D#\n#######\n".parse().unwrap();
        let saved = board.encode();
        assert_eq!(saved, "#######\n#d>D#  \n#######\n");

        let reloaded: Board = saved.parse().unwrap();
        assert_eq!(reloaded.snakes(), board.snakes());
        assert_eq!(reloaded.encode(), saved);
    }

    #[test]
    fn test_merging_tails_are_rejected_at_load() {
        let err = "#####\n#d>D#\n# w #\n#####\n"
            .parse::<Board>()
            .unwrap_err();
        assert_eq!(
            err,
            BoardError::SharedCell {
                at: Position::new(1, 2)
            }
        );
    }

    #[test]
    fn test_from_parts_caps_the_registry() {
        let grid = Grid::decode("#####\n#d>D#\n#####\n");
        let snake = Snake::new(Position::new(1, 1), Position::new(1, 3));
        assert_eq!(
            Board::from_parts(grid, vec![snake; MAX_SNAKES + 1], BoardConfig::default()),
            Err(BoardError::TooManySnakes { limit: MAX_SNAKES })
        );
    }

    #[test]
    fn test_empty_text_is_an_empty_board() {
        let board: Board = "".parse().unwrap();
        assert!(board.snakes().is_empty());
        assert_eq!(board.encode(), "");
    }

    #[test]
    fn test_consistency_catches_drift() {
        let mut board = Board::default();
        board.set_glyph(Position::new(2, 3), Glyph::Empty);
        assert_eq!(
            board.check_consistency(),
            Err(BoardError::BrokenChain {
                at: Position::new(2, 3),
                found: ' '
            })
        );

        let mut board = Board::default();
        board.set_glyph(Position::new(2, 4), Glyph::Food);
        assert!(matches!(
            board.check_consistency(),
            Err(BoardError::NotAHead { .. })
        ));
    }

    #[test]
    fn test_from_parts_rejects_wrong_head() {
        let grid = Grid::decode(include_str!("../../fixtures/default_board.txt"));
        let snakes = vec![Snake::new(Position::new(2, 2), Position::new(2, 3))];
        assert!(matches!(
            Board::from_parts(grid, snakes, BoardConfig::default()),
            Err(BoardError::NotAHead { .. })
        ));
    }

    #[test]
    fn test_unknown_snake() {
        let board = Board::default();
        assert_eq!(
            board.snake(SnakeId(3)),
            Err(BoardError::UnknownSnake(SnakeId(3)))
        );
    }
}

//! various types that are useful for working with snake boards
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::time::Duration;

/// A cell coordinate on the grid. Rows grow downwards, columns grow to the right.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// zero based row, counted from the top
    pub row: usize,
    /// zero based column, counted from the left
    pub col: usize,
}

impl Position {
    /// makes a new position
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Returns the position one step away in the given direction, or None if that
    /// would underflow row or column zero
    pub fn step(&self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Position { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Represents a direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl Direction {
    /// (row, col) delta for one step in this direction
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// token to represent a snake id, which is the snake's index in the registry
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[repr(transparent)]
pub struct SnakeId(pub u16);

impl SnakeId {
    /// convert this snake ID to a usize
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for SnakeId {
    type Error = crate::BoardError;

    /// the id of the snake at a registry index
    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        u16::try_from(idx)
            .map(SnakeId)
            .map_err(|_| crate::BoardError::TooManySnakes {
                limit: crate::registry::MAX_SNAKES,
            })
    }
}

impl fmt::Display for SnakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "snake {}", self.0)
    }
}

impl Serialize for SnakeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

/// A game for which one can get the snake ids
pub trait SnakeIDGettableGame {
    #[allow(missing_docs)]
    type SnakeIDType: PartialEq + Debug + Serialize + Eq + Hash + Clone;

    #[allow(missing_docs)]
    fn get_snake_ids(&self) -> Vec<Self::SnakeIDType>;
}

/// Instruments to be used while ticking a board
pub trait TickInstruments: std::fmt::Debug {
    #[allow(missing_docs)]
    fn observe_tick(&self, duration: Duration);
}

/// A game for which the head of a snake can be got.
pub trait HeadGettableGame: SnakeIDGettableGame {
    /// get the head position for a given snake id
    fn get_head_as_position(&self, snake_id: &Self::SnakeIDType) -> Position;
}

/// A game for which the tail of a snake can be got.
pub trait TailGettableGame: SnakeIDGettableGame {
    /// get the tail position for a given snake id
    fn get_tail_as_position(&self, snake_id: &Self::SnakeIDType) -> Position;
}

/// A game for which the food on the board can be queried
pub trait FoodGettableGame {
    /// all food cells, in row major order
    fn get_all_food_as_positions(&self) -> Vec<Position>;
}

/// A game for which empty cells can be listed, e.g. for placing food
pub trait EmptyCellGettableGame {
    /// iterate over the empty floor cells in row major order
    fn get_empty_cells(&self) -> Box<dyn Iterator<Item = Position> + '_>;
}

/// A game for which the length of a snake can be got.
pub trait LengthGettableGame: SnakeIDGettableGame {
    /// get the length for a given snake, counting tail and head. Errors if the
    /// snake's body can't be traced through the grid
    fn get_length(&self, snake_id: &Self::SnakeIDType) -> Result<usize, crate::BoardError>;
}

/// A game for which it can be determined whether snakes are still alive
pub trait LivenessQueryableGame: SnakeIDGettableGame {
    /// check whether a given snake is alive
    fn is_alive(&self, snake_id: &Self::SnakeIDType) -> bool;

    /// the number of snakes that are still moving
    fn alive_snake_count(&self) -> usize;
}

/// a game for which the size of the game board can be determined
pub trait SizeDeterminableGame {
    #[allow(missing_docs)]
    fn get_width(&self) -> usize;
    #[allow(missing_docs)]
    fn get_height(&self) -> usize;
}

/// A game where an entire snake body is gettable
pub trait SnakeBodyGettableGame: SnakeIDGettableGame {
    /// return a Vec of the positions for a given snake body, in order from tail to head
    fn get_snake_body_vec(
        &self,
        snake_id: &Self::SnakeIDType,
    ) -> Result<Vec<Position>, crate::BoardError>;
}

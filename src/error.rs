use crate::types::{Direction, Position, SnakeId};

/// Everything that can be wrong with a board. All of these mean the grid does not
/// encode well formed snakes, none of them are recoverable by retrying.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// a snake's chain of direction glyphs ran into a cell that isn't part of a snake
    #[error("snake chain broken at {at}: found {found:?}")]
    BrokenChain {
        #[allow(missing_docs)]
        at: Position,
        #[allow(missing_docs)]
        found: char,
    },

    /// stepping from a cell left the grid, or landed on row padding
    #[error("stepping {direction} from {from} leaves the board")]
    OffGrid {
        #[allow(missing_docs)]
        from: Position,
        #[allow(missing_docs)]
        direction: Direction,
    },

    /// the walk from a tail did not reach a head within the step limit, so the chain loops
    #[error("chain from tail {tail} did not reach a head within {steps} steps")]
    UnterminatedChain {
        #[allow(missing_docs)]
        tail: Position,
        #[allow(missing_docs)]
        steps: usize,
    },

    /// the registry says a head is here but the grid disagrees
    #[error("{snake} should have its head at {at} but found {found:?}")]
    NotAHead {
        #[allow(missing_docs)]
        snake: SnakeId,
        #[allow(missing_docs)]
        at: Position,
        #[allow(missing_docs)]
        found: char,
    },

    /// the registry says a tail is here but the grid disagrees
    #[error("{snake} should have its tail at {at} but found {found:?}")]
    NotATail {
        #[allow(missing_docs)]
        snake: SnakeId,
        #[allow(missing_docs)]
        at: Position,
        #[allow(missing_docs)]
        found: char,
    },

    /// a tail walked to a head other than the one the registry has
    #[error("{snake} traces to a head at {traced} but is registered at {registered}")]
    HeadMismatch {
        #[allow(missing_docs)]
        snake: SnakeId,
        #[allow(missing_docs)]
        traced: Position,
        #[allow(missing_docs)]
        registered: Position,
    },

    /// two snakes claim the same cell
    #[error("cell {at} is claimed by more than one snake")]
    SharedCell {
        #[allow(missing_docs)]
        at: Position,
    },

    /// the board's edge has a hole in it
    #[error("board border is not a wall at {at}")]
    MissingWallBorder {
        #[allow(missing_docs)]
        at: Position,
    },

    /// a walk was started from a cell outside the grid
    #[error("{at} is outside the board")]
    OutOfBounds {
        #[allow(missing_docs)]
        at: Position,
    },

    /// the board holds more snakes than a snake id can number
    #[error("a board can hold at most {limit} snakes")]
    TooManySnakes {
        #[allow(missing_docs)]
        limit: usize,
    },

    #[allow(missing_docs)]
    #[error("{0} is not on this board")]
    UnknownSnake(SnakeId),

    /// a wire board could not be read
    #[error("bad wire board: {0}")]
    Wire(String),
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        BoardError::Wire(e.to_string())
    }
}

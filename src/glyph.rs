//! The closed alphabet of board cells.
//!
//! A snake cell spells its direction differently depending on the segment's role:
//!
//! ```plain
//!          up  left  down  right
//! tail     w   a     s     d
//! body     ^   <     v     >
//! head     W   A     S     D
//! ```
//!
//! Every rule that maps between roles or turns a glyph into a step lives here, so the
//! tick engine and the topology walk can never disagree about what a cell means.
use crate::types::Direction;

/// the role a snake segment plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    #[allow(missing_docs)]
    Tail,
    #[allow(missing_docs)]
    Body,
    #[allow(missing_docs)]
    Head,
}

/// A single cell of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// `#`
    Wall,
    /// ` `
    Empty,
    /// `*`
    Food,
    /// a live snake segment
    Snake(Role, Direction),
    /// `x`, the head of a snake that has died
    DeadHead,
    /// filler used to square off ragged rows, renders as a space but is not floor
    Padding,
    /// any other character, kept verbatim
    Other(char),
}

impl Glyph {
    /// decode a single character
    pub fn from_char(c: char) -> Glyph {
        use Direction::*;
        use Role::*;
        match c {
            '#' => Glyph::Wall,
            ' ' => Glyph::Empty,
            '*' => Glyph::Food,
            'x' => Glyph::DeadHead,
            'w' => Glyph::Snake(Tail, Up),
            'a' => Glyph::Snake(Tail, Left),
            's' => Glyph::Snake(Tail, Down),
            'd' => Glyph::Snake(Tail, Right),
            '^' => Glyph::Snake(Body, Up),
            '<' => Glyph::Snake(Body, Left),
            'v' => Glyph::Snake(Body, Down),
            '>' => Glyph::Snake(Body, Right),
            'W' => Glyph::Snake(Head, Up),
            'A' => Glyph::Snake(Head, Left),
            'S' => Glyph::Snake(Head, Down),
            'D' => Glyph::Snake(Head, Right),
            other => Glyph::Other(other),
        }
    }

    /// the character this glyph renders as
    pub fn to_char(self) -> char {
        use Direction::*;
        use Role::*;
        match self {
            Glyph::Wall => '#',
            Glyph::Empty | Glyph::Padding => ' ',
            Glyph::Food => '*',
            Glyph::DeadHead => 'x',
            Glyph::Snake(Tail, Up) => 'w',
            Glyph::Snake(Tail, Left) => 'a',
            Glyph::Snake(Tail, Down) => 's',
            Glyph::Snake(Tail, Right) => 'd',
            Glyph::Snake(Body, Up) => '^',
            Glyph::Snake(Body, Left) => '<',
            Glyph::Snake(Body, Down) => 'v',
            Glyph::Snake(Body, Right) => '>',
            Glyph::Snake(Head, Up) => 'W',
            Glyph::Snake(Head, Left) => 'A',
            Glyph::Snake(Head, Down) => 'S',
            Glyph::Snake(Head, Right) => 'D',
            Glyph::Other(c) => c,
        }
    }

    /// makes a tail glyph facing the given direction
    pub fn tail(direction: Direction) -> Glyph {
        Glyph::Snake(Role::Tail, direction)
    }

    /// makes a body glyph facing the given direction
    pub fn body(direction: Direction) -> Glyph {
        Glyph::Snake(Role::Body, direction)
    }

    /// makes a head glyph facing the given direction
    pub fn head(direction: Direction) -> Glyph {
        Glyph::Snake(Role::Head, direction)
    }

    /// `wasd`
    pub fn is_tail(self) -> bool {
        matches!(self, Glyph::Snake(Role::Tail, _))
    }

    /// `WASD`, a dead head is not counted
    pub fn is_head(self) -> bool {
        matches!(self, Glyph::Snake(Role::Head, _))
    }

    /// `^<v>`
    pub fn is_body(self) -> bool {
        matches!(self, Glyph::Snake(Role::Body, _))
    }

    /// any glyph that belongs to a snake, living or dead
    pub fn is_snake(self) -> bool {
        matches!(self, Glyph::Snake(..) | Glyph::DeadHead)
    }

    #[allow(missing_docs)]
    pub fn is_wall(self) -> bool {
        self == Glyph::Wall
    }

    #[allow(missing_docs)]
    pub fn is_food(self) -> bool {
        self == Glyph::Food
    }

    #[allow(missing_docs)]
    pub fn is_empty(self) -> bool {
        self == Glyph::Empty
    }

    /// the direction a snake segment faces, None for everything else
    pub fn direction(self) -> Option<Direction> {
        match self {
            Glyph::Snake(_, d) => Some(d),
            _ => None,
        }
    }

    /// `^<v>` to `wasd`. None outside the body glyphs
    pub fn body_to_tail(self) -> Option<Glyph> {
        match self {
            Glyph::Snake(Role::Body, d) => Some(Glyph::tail(d)),
            _ => None,
        }
    }

    /// `WASD` to `^<v>`. None outside the head glyphs
    pub fn head_to_body(self) -> Option<Glyph> {
        match self {
            Glyph::Snake(Role::Head, d) => Some(Glyph::body(d)),
            _ => None,
        }
    }

    /// row offset of one step along this glyph, zero for anything without a direction
    pub fn delta_row(self) -> isize {
        self.direction().map(|d| d.delta().0).unwrap_or(0)
    }

    /// column offset of one step along this glyph, zero for anything without a direction
    pub fn delta_col(self) -> isize {
        self.direction().map(|d| d.delta().1).unwrap_or(0)
    }
}

impl From<char> for Glyph {
    fn from(c: char) -> Self {
        Glyph::from_char(c)
    }
}

impl From<Glyph> for char {
    fn from(g: Glyph) -> Self {
        g.to_char()
    }
}

//! Text to grid and back again.
//!
//! Each line of input is one row and each character one cell. Rows may come in with
//! different lengths; once everything is read they are padded out to the widest row
//! with [`Glyph::Padding`], which renders as a space but is never treated as floor.
use std::fmt;

use itertools::Itertools;

use crate::glyph::Glyph;
use crate::types::{Direction, Position};

/// A rectangular grid of glyphs stored row major in one buffer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Glyph>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Decodes a grid from text. Never fails: unknown characters are kept as
    /// [`Glyph::Other`] and an empty string gives a grid with no rows.
    pub fn decode(text: &str) -> Grid {
        let rows = text
            .lines()
            .map(|line| line.chars().map(Glyph::from_char).collect_vec())
            .collect_vec();
        Grid::from_rows(rows)
    }

    /// Builds a grid from already decoded rows, padding short rows
    pub fn from_rows(rows: Vec<Vec<Glyph>>) -> Grid {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let pad = width - row.len();
            cells.extend(row);
            cells.extend(std::iter::repeat(Glyph::Padding).take(pad));
        }

        Grid {
            cells,
            width,
            height,
        }
    }

    /// makes a grid of the given size filled with one glyph
    pub fn filled(height: usize, width: usize, glyph: Glyph) -> Grid {
        Grid {
            cells: vec![glyph; width * height],
            width,
            height,
        }
    }

    /// Encodes the grid as text, one line per row each ending in `\n`. Padding is
    /// written out as spaces so every line has the same width.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|g| g.to_char()));
            out.push('\n');
        }
        out
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// the number of cells in the grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// true for a grid with no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// iterate over the rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> + '_ {
        // a zero width grid still has `height` rows, each of them empty
        let width = self.width;
        (0..self.height).map(move |r| &self.cells[r * width..(r + 1) * width])
    }

    /// iterate over every cell with its position, in row major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Glyph)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, g)| (Position::new(i / width, i % width), *g))
    }

    /// the number of non padding cells in a row, i.e. the length of the line it was read from
    pub fn row_width(&self, row: usize) -> usize {
        self.rows()
            .nth(row)
            .map(|r| r.len() - r.iter().rev().take_while(|g| **g == Glyph::Padding).count())
            .unwrap_or(0)
    }

    /// The width of a row once trailing padding and trailing floor are dropped. A
    /// ragged row written out by [`Grid::encode`] reads back with its padding turned
    /// into spaces, so this is the same before and after a save.
    pub fn trimmed_row_width(&self, row: usize) -> usize {
        self.rows()
            .nth(row)
            .map(|r| {
                let blanks = r
                    .iter()
                    .rev()
                    .take_while(|g| matches!(g, Glyph::Padding | Glyph::Empty))
                    .count();
                r.len() - blanks
            })
            .unwrap_or(0)
    }

    /// true if the position is inside the rectangle
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// the glyph at a position, None when out of bounds
    pub fn get(&self, pos: Position) -> Option<Glyph> {
        if self.in_bounds(pos) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Overwrite a cell. Writes outside the grid are ignored and return false.
    pub fn set(&mut self, pos: Position, glyph: Glyph) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let idx = self.index(pos);
        self.cells[idx] = glyph;
        true
    }

    /// Returns the neighbouring position in a direction if it is a real cell of the
    /// board. Positions past the edge and padding cells both count as off the board.
    pub fn step(&self, pos: Position, direction: Direction) -> Option<Position> {
        let next = pos.step(direction)?;
        match self.get(next) {
            None | Some(Glyph::Padding) => None,
            Some(_) => Some(next),
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.width + pos.col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

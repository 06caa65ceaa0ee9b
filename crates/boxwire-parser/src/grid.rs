//! Read-only character grid over the diagram text.
//!
//! The [`Grid`] splits the source into rows and answers "what character is
//! at this cell?". Rows keep their own length, so a cell past the end of a
//! short line is simply outside the grid; directional walks treat that as
//! their natural stopping point.

use thiserror::Error;

use boxwire_core::geometry::{Direction, Position};

use crate::{span::Span, symbol::Symbol};

/// Lookup of a cell that is not part of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell {0} is outside the diagram")]
pub(crate) struct OutOfBounds(Position);

/// One line of the diagram.
#[derive(Debug)]
struct Row<'src> {
    /// Byte offset of the line within the source.
    offset: usize,
    text: &'src str,
    chars: Vec<char>,
}

/// Indexed view of a diagram's characters.
#[derive(Debug)]
pub(crate) struct Grid<'src> {
    source: &'src str,
    rows: Vec<Row<'src>>,
}

impl<'src> Grid<'src> {
    /// Build a grid from diagram text, one row per `\n`-separated line.
    ///
    /// A trailing `\r` on a line is not part of the row.
    pub(crate) fn new(source: &'src str) -> Self {
        let mut offset = 0;
        let rows = source
            .split('\n')
            .map(|line| {
                let text = line.strip_suffix('\r').unwrap_or(line);
                let row = Row {
                    offset,
                    text,
                    chars: text.chars().collect(),
                };
                offset += line.len() + 1;
                row
            })
            .collect();

        Self { source, rows }
    }

    /// Character at `pos`.
    pub(crate) fn at(&self, pos: Position) -> Result<char, OutOfBounds> {
        self.rows
            .get(pos.row())
            .and_then(|row| row.chars.get(pos.col()))
            .copied()
            .ok_or(OutOfBounds(pos))
    }

    /// Character at `pos`, or `None` outside the grid.
    pub(crate) fn get(&self, pos: Position) -> Option<char> {
        self.at(pos).ok()
    }

    /// Cell content as a [`Symbol`]; cells outside the grid read as [`Symbol::End`].
    pub(crate) fn symbol(&self, pos: Position) -> Symbol {
        self.get(pos).map_or(Symbol::End, Symbol::Char)
    }

    /// Every cell of the grid in row-major order.
    pub(crate) fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(|(row_index, row)| {
            (0..row.chars.len()).map(move |col| Position::new(row_index, col))
        })
    }

    /// Every cell holding `c`, in row-major order.
    pub(crate) fn positions_of(&self, c: char) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&pos| self.get(pos) == Some(c))
    }

    /// Cells starting one step past `from` in `direction`, up to the edge of the grid.
    pub(crate) fn walk(&self, from: Position, direction: Direction) -> Walk<'_, 'src> {
        Walk {
            grid: self,
            next: from.step(direction),
            direction,
        }
    }

    /// Byte span of the cell at `pos` in the source.
    ///
    /// Cells past the end of a line map to an empty span at the line end,
    /// rows past the end of the text to an empty span at the end of input.
    pub(crate) fn span_of(&self, pos: Position) -> Span {
        let Some(row) = self.rows.get(pos.row()) else {
            return Span::empty(self.source.len());
        };

        match row.text.char_indices().nth(pos.col()) {
            Some((index, c)) => {
                let start = row.offset + index;
                Span::new(start..start + c.len_utf8())
            }
            None => Span::empty(row.offset + row.text.len()),
        }
    }
}

/// Iterator over the cells in one direction from a starting cell.
///
/// Stops at the first cell outside the grid. Cloning a walk restarts it
/// from the same place.
#[derive(Debug, Clone)]
pub(crate) struct Walk<'g, 'src> {
    grid: &'g Grid<'src>,
    next: Option<Position>,
    direction: Direction,
}

impl Iterator for Walk<'_, '_> {
    type Item = (Position, char);

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.next?;
        match self.grid.at(pos) {
            Ok(c) => {
                self.next = pos.step(self.direction);
                Some((pos, c))
            }
            Err(_) => {
                self.next = None;
                None
            }
        }
    }
}

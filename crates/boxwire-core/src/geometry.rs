//! Grid geometry for character diagrams.
//!
//! This module provides the coordinate types shared by the parser and the
//! graph model.
//!
//! # Overview
//!
//! - [`Position`] - A `(row, col)` cell in the diagram text
//! - [`Direction`] - One of the four orthogonal steps between cells
//! - [`Rect`] - An inclusive rectangular block of cells
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► col
//!     │
//!     │
//!     ▼
//!    row
//! ```
//!
//! Rows count lines of the diagram text, columns count characters within a
//! line. Both start at zero, so the cell above row 0 (or left of column 0)
//! does not exist.

use std::fmt;

use serde::Serialize;

/// A single character cell in a diagram.
///
/// Positions order row-major: first by row, then by column.
///
/// # Examples
///
/// ```
/// # use boxwire_core::geometry::Position;
/// let pos = Position::new(2, 5);
///
/// assert_eq!(pos.down(), Some(Position::new(3, 5)));
/// assert_eq!(pos.left(), Some(Position::new(2, 4)));
/// assert_eq!(Position::new(0, 0).up(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position at the given row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (line index) of this position.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the column (character index) of this position.
    pub fn col(self) -> usize {
        self.col
    }

    /// Returns the neighbouring position one step in `direction`.
    ///
    /// Returns `None` when the step would leave the top or left edge of the
    /// diagram.
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
            Direction::Down => Some(Self::new(self.row + 1, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
            Direction::Right => Some(Self::new(self.row, self.col + 1)),
        }
    }

    /// Returns the position above, if any.
    pub fn up(self) -> Option<Self> {
        self.step(Direction::Up)
    }

    /// Returns the position below.
    pub fn down(self) -> Option<Self> {
        self.step(Direction::Down)
    }

    /// Returns the position to the left, if any.
    pub fn left(self) -> Option<Self> {
        self.step(Direction::Left)
    }

    /// Returns the position to the right.
    pub fn right(self) -> Option<Self> {
        self.step(Direction::Right)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Human-facing coordinates are 1-based, like editor line:column.
        write!(f, "{}:{}", self.row + 1, self.col + 1)
    }
}

/// One of the four orthogonal directions on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order up, down, left, right.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns `true` for [`Direction::Up`] and [`Direction::Down`].
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// An inclusive rectangular block of cells.
///
/// A `Rect` is defined by its top-left and bottom-right corners, both of
/// which belong to the rectangle.
///
/// # Examples
///
/// ```
/// # use boxwire_core::geometry::{Position, Rect};
/// let rect = Rect::new(Position::new(0, 0), Position::new(2, 4));
///
/// assert_eq!(rect.width(), 5);
/// assert_eq!(rect.height(), 3);
/// assert_eq!(rect.cells().count(), 15);
/// assert!(rect.contains(Position::new(1, 3)));
///
/// let interior = rect.interior().unwrap();
/// assert_eq!(interior.top_left(), Position::new(1, 1));
/// assert_eq!(interior.bottom_right(), Position::new(1, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    top_left: Position,
    bottom_right: Position,
}

impl Rect {
    /// Creates a rectangle from two opposite corners.
    ///
    /// The corners are normalized, so any two opposite corners may be given.
    pub fn new(a: Position, b: Position) -> Self {
        Self {
            top_left: Position::new(a.row.min(b.row), a.col.min(b.col)),
            bottom_right: Position::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Returns the top-left corner.
    pub fn top_left(&self) -> Position {
        self.top_left
    }

    /// Returns the bottom-right corner.
    pub fn bottom_right(&self) -> Position {
        self.bottom_right
    }

    /// Returns the number of columns covered.
    pub fn width(&self) -> usize {
        self.bottom_right.col - self.top_left.col + 1
    }

    /// Returns the number of rows covered.
    pub fn height(&self) -> usize {
        self.bottom_right.row - self.top_left.row + 1
    }

    /// Returns `true` if `pos` lies inside or on the border of this rectangle.
    pub fn contains(&self, pos: Position) -> bool {
        (self.top_left.row..=self.bottom_right.row).contains(&pos.row)
            && (self.top_left.col..=self.bottom_right.col).contains(&pos.col)
    }

    /// Returns every cell of the rectangle in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + use<> {
        let Rect {
            top_left,
            bottom_right,
        } = *self;
        (top_left.row..=bottom_right.row).flat_map(move |row| {
            (top_left.col..=bottom_right.col).map(move |col| Position::new(row, col))
        })
    }

    /// Returns the rectangle shrunk by one cell on every side.
    ///
    /// Returns `None` when the rectangle is too thin to have an interior.
    pub fn interior(&self) -> Option<Rect> {
        if self.width() < 3 || self.height() < 3 {
            return None;
        }
        Some(Rect {
            top_left: Position::new(self.top_left.row + 1, self.top_left.col + 1),
            bottom_right: Position::new(self.bottom_right.row - 1, self.bottom_right.col - 1),
        })
    }
}

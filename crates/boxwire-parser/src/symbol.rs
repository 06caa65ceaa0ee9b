//! Characters with a meaning in the diagram dialect.
//!
//! Boxes are drawn with [`CORNER`], [`HORIZONTAL`] and [`VERTICAL`]; lines
//! reuse the same three characters plus the four arrowheads. Inside a box,
//! [`SEPARATOR`] splits an attribute name from its value.

use std::fmt;

use boxwire_core::geometry::Direction;

/// Box corner, or a junction where lines meet.
pub const CORNER: char = '+';
/// Horizontal box border or line segment.
pub const HORIZONTAL: char = '-';
/// Vertical box border or line segment.
pub const VERTICAL: char = '|';
/// Separates an attribute name from its value.
pub const SEPARATOR: char = ':';

/// The line character that continues a path running in `direction`.
pub(crate) fn line_for(direction: Direction) -> char {
    if direction.is_vertical() {
        VERTICAL
    } else {
        HORIZONTAL
    }
}

/// The box border character a path running in `direction` runs into.
pub(crate) fn border_for(direction: Direction) -> char {
    if direction.is_vertical() {
        HORIZONTAL
    } else {
        VERTICAL
    }
}

/// The arrowhead pointing in `direction`.
pub(crate) fn arrowhead_for(direction: Direction) -> char {
    match direction {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

/// The direction an arrowhead character points in, if `c` is one.
pub(crate) fn arrowhead_direction(c: char) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&direction| arrowhead_for(direction) == c)
}

/// One input to the parser: a character from the grid, or the end marker.
///
/// [`Symbol::End`] stands for "nothing here": the end of a box interior
/// for the attribute lexer, or a cell outside the diagram for the edge
/// tracer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Char(char),
    End,
}

impl Symbol {
    /// Returns `true` for whitespace characters.
    pub fn is_whitespace(self) -> bool {
        matches!(self, Symbol::Char(c) if c.is_whitespace())
    }

    /// Returns `true` for whitespace and for the end marker.
    pub fn is_blank(self) -> bool {
        self == Symbol::End || self.is_whitespace()
    }

    /// Returns `true` if this symbol is the character `c`.
    pub fn is(self, c: char) -> bool {
        self == Symbol::Char(c)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(' ') => write!(f, "blank space"),
            Symbol::Char(c) if c.is_whitespace() => write!(f, "whitespace {c:?}"),
            Symbol::Char(c) => write!(f, "character `{c}`"),
            Symbol::End => write!(f, "end of input"),
        }
    }
}

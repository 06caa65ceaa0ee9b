//! Lexer for the `name: value` text inside a box.
//!
//! The interior of a box is read in row-major order as one continuous stream
//! of cells and fed through a small state machine:
//!
//! ```text
//!            non-space          ':'            non-space
//!   Start ──────────────► Name ─────► NameDone ──────────► Value
//!     ▲                                                      │
//!     └──────────────────────── whitespace ──────────────────┘
//!                             (commit name/value)
//! ```
//!
//! Row boundaries carry no meaning, so a name or value may wrap onto the next
//! row. A final [`Symbol::End`] commits a value that runs up to the last
//! cell. Anything a state has no transition for is an [`UnexpectedCharacter`].

use std::mem;

use indexmap::IndexMap;
use log::warn;

use boxwire_core::geometry::{Position, Rect};

use crate::{
    error::{Result, UnexpectedCharacter},
    grid::Grid,
    symbol::{SEPARATOR, Symbol},
};

/// Attribute name to value, in the order names first appear.
pub(crate) type Attributes = IndexMap<String, String>;

/// Lexer states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between attributes.
    Start,
    /// Reading a name.
    Name,
    /// After the `:`, before the value.
    NameDone,
    /// Reading a value.
    Value,
    /// Input exhausted.
    End,
}

/// Accumulators shared by the transitions.
#[derive(Debug, Default)]
struct Buffers {
    name: String,
    value: String,
    attributes: Attributes,
}

impl Buffers {
    /// Move the current name/value pair into the result.
    ///
    /// A repeated name overwrites the earlier value but keeps its position.
    fn commit(&mut self) {
        let name = mem::take(&mut self.name);
        let value = mem::take(&mut self.value);
        if let Some(previous) = self.attributes.get(&name) {
            warn!(
                name = name.as_str(),
                previous = previous.as_str(),
                value = value.as_str();
                "Duplicate attribute overwrites earlier value"
            );
        }
        self.attributes.insert(name, value);
    }
}

impl State {
    /// Next state after reading `symbol`, or `None` if `symbol` is not allowed here.
    fn next(self, symbol: Symbol, buffers: &mut Buffers) -> Option<State> {
        match self {
            State::Start => start(symbol, buffers),
            State::Name => name(symbol, buffers),
            State::NameDone => name_done(symbol, buffers),
            State::Value => value(symbol, buffers),
            State::End => None,
        }
    }
}

fn start(symbol: Symbol, buffers: &mut Buffers) -> Option<State> {
    match symbol {
        Symbol::End => Some(State::End),
        s if s.is_whitespace() => Some(State::Start),
        Symbol::Char(SEPARATOR) => None,
        Symbol::Char(c) => {
            buffers.name.push(c);
            Some(State::Name)
        }
    }
}

fn name(symbol: Symbol, buffers: &mut Buffers) -> Option<State> {
    match symbol {
        Symbol::End => None,
        s if s.is_whitespace() => None,
        Symbol::Char(SEPARATOR) => Some(State::NameDone),
        Symbol::Char(c) => {
            buffers.name.push(c);
            Some(State::Name)
        }
    }
}

fn name_done(symbol: Symbol, buffers: &mut Buffers) -> Option<State> {
    match symbol {
        Symbol::End | Symbol::Char(SEPARATOR) => None,
        s if s.is_whitespace() => Some(State::NameDone),
        Symbol::Char(c) => {
            buffers.value.push(c);
            Some(State::Value)
        }
    }
}

fn value(symbol: Symbol, buffers: &mut Buffers) -> Option<State> {
    match symbol {
        Symbol::End => {
            buffers.commit();
            Some(State::End)
        }
        s if s.is_whitespace() => {
            buffers.commit();
            Some(State::Start)
        }
        Symbol::Char(SEPARATOR) => None,
        Symbol::Char(c) => {
            buffers.value.push(c);
            Some(State::Value)
        }
    }
}

/// Lex the attributes written inside the box `bounds`.
///
/// Boxes without an interior have no attributes.
pub(crate) fn lex(grid: &Grid<'_>, bounds: Rect) -> Result<Attributes> {
    let mut buffers = Buffers::default();
    let mut state = State::Start;
    let mut last = bounds.bottom_right();

    let feed = |state: State, symbol: Symbol, pos: Position, buffers: &mut Buffers| {
        state
            .next(symbol, buffers)
            .ok_or_else(|| UnexpectedCharacter::in_attributes(symbol, pos))
    };

    if let Some(interior) = bounds.interior() {
        let (top_left, bottom_right) = (interior.top_left(), interior.bottom_right());
        for row in top_left.row()..=bottom_right.row() {
            for col in top_left.col()..=bottom_right.col() {
                let pos = Position::new(row, col);
                // Interior cells always exist: the right border closes every row.
                let symbol = Symbol::Char(grid.get(pos).unwrap_or(' '));
                state = feed(state, symbol, pos, &mut buffers)?;
                last = pos;
            }
        }
    }

    feed(state, Symbol::End, last, &mut buffers)?;

    Ok(buffers.attributes)
}

//! Detection of boxes anchored at a `+` corner.
//!
//! Starting from a candidate top-left corner, the detector walks clockwise
//! along the border: right, down, left and up. Each walk follows border
//! characters and stops at the last `+` it passes, which becomes the next
//! corner. If the fourth walk lands back on the starting corner the four
//! sides form a closed box.
//!
//! ```text
//!   start ─► +-------+ ◄─ top right
//!            |       |
//!            +-------+ ◄─ bottom right
//! ```

use thiserror::Error;

use boxwire_core::geometry::{Direction, Position, Rect};

use crate::{
    grid::Grid,
    symbol::{CORNER, HORIZONTAL, VERTICAL},
};

/// The `+` at this position does not close into a box.
///
/// Not fatal: the corner may still be part of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("`+` at {0} does not anchor a box")]
pub(crate) struct NotARectangle(pub(crate) Position);

/// Detect the box whose top-left corner is `anchor`.
///
/// Boxes must span at least two rows and two columns; a walk that never
/// leaves its corner (a lone `+`, or one that only bends a line) does not
/// count as closing a box.
pub(crate) fn detect(grid: &Grid<'_>, anchor: Position) -> Result<Rect, NotARectangle> {
    if grid.get(anchor) != Some(CORNER) {
        return Err(NotARectangle(anchor));
    }

    let top_right = next_corner(grid, anchor, Direction::Right);
    let bottom_right = next_corner(grid, top_right, Direction::Down);
    let bottom_left = next_corner(grid, bottom_right, Direction::Left);
    let top_left = next_corner(grid, bottom_left, Direction::Up);

    // A single-row box like `+--+` would also claim the bars of junctions
    // such as `+--+--+`, turning line corners into nodes.
    if top_left != anchor || top_right == anchor || bottom_right == top_right {
        return Err(NotARectangle(anchor));
    }

    Ok(Rect::new(top_left, bottom_right))
}

/// Follow the border from `from` in `direction`; return the last `+` reached.
fn next_corner(grid: &Grid<'_>, from: Position, direction: Direction) -> Position {
    let side = if direction.is_vertical() {
        VERTICAL
    } else {
        HORIZONTAL
    };

    grid.walk(from, direction)
        .take_while(|&(_, c)| c == CORNER || c == side)
        .filter(|&(_, c)| c == CORNER)
        .last()
        .map_or(from, |(pos, _)| pos)
}

//! Tracing of the lines that connect boxes.
//!
//! An [`EdgeTracer`] starts from one line cell and flood-fills along path
//! characters until the whole connected component is known. Along the way
//! it records where the component touches a box:
//!
//! - a plain line end against a border makes that box a **source**;
//! - an arrowhead pointing into a border makes that box a **destination**.
//!
//! ```text
//!   +-----+
//!   |  a  |
//!   +-----+
//!      |      `|` touches `-` above: a is a source
//!      v      `v` points at `-` below: b is a destination
//!   +-----+
//!   |  b  |
//!   +-----+
//! ```
//!
//! The traversal uses an explicit worklist, so long lines never deepen the
//! call stack.

use std::collections::{HashMap, HashSet};

use indexmap::{IndexMap, IndexSet};
use log::trace;

use boxwire_core::{
    geometry::{Direction, Position},
    graph::{Edge, NodeId},
};

use crate::{
    error::{Result, UnexpectedCharacter},
    grid::Grid,
    symbol::{
        CORNER, HORIZONTAL, Symbol, VERTICAL, arrowhead_direction, arrowhead_for, border_for,
        line_for,
    },
};

/// Owner of every cell claimed by a box.
pub(crate) type NodeIndex = HashMap<Position, NodeId>;

/// Which end of an edge a box attachment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attachment {
    Source,
    Destination,
}

/// Discovers one connected path component.
pub(crate) struct EdgeTracer<'a, 'src> {
    grid: &'a Grid<'src>,
    owners: &'a NodeIndex,
    visited: &'a mut HashSet<Position>,
    /// Cells still to explore, with the path cell that discovered them.
    worklist: IndexMap<Position, Option<Position>>,
    path: IndexSet<Position>,
    sources: IndexSet<NodeId>,
    destinations: IndexSet<NodeId>,
}

impl<'a, 'src> EdgeTracer<'a, 'src> {
    /// Create a tracer over `grid`.
    ///
    /// `visited` holds every cell already claimed by a box or an earlier
    /// edge; those cells are never explored again. `owners` maps each box
    /// cell to its node.
    pub(crate) fn new(
        grid: &'a Grid<'src>,
        owners: &'a NodeIndex,
        visited: &'a mut HashSet<Position>,
    ) -> Self {
        Self {
            grid,
            owners,
            visited,
            worklist: IndexMap::new(),
            path: IndexSet::new(),
            sources: IndexSet::new(),
            destinations: IndexSet::new(),
        }
    }

    /// Trace the component containing `seed` and mark its cells visited.
    pub(crate) fn trace(mut self, seed: Position) -> Result<Edge> {
        self.worklist.insert(seed, None);

        while let Some((pos, origin)) = self.worklist.pop() {
            self.path.insert(pos);
            self.visit(pos, origin)?;
        }

        self.visited.extend(self.path.iter().copied());

        trace!(
            seed:?,
            path_cells = self.path.len(),
            sources:? = self.sources,
            destinations:? = self.destinations;
            "Traced edge"
        );

        Ok(Edge::new(
            self.path,
            self.sources.into_iter().collect(),
            self.destinations.into_iter().collect(),
        ))
    }

    fn visit(&mut self, pos: Position, origin: Option<Position>) -> Result<()> {
        let found = self.grid.symbol(pos);
        match found {
            Symbol::Char(HORIZONTAL) => {
                self.follow_line(pos, Direction::Left)?;
                self.follow_line(pos, Direction::Right)
            }
            Symbol::Char(VERTICAL) => {
                self.follow_line(pos, Direction::Up)?;
                self.follow_line(pos, Direction::Down)
            }
            Symbol::Char(CORNER) => Direction::ALL
                .into_iter()
                .try_for_each(|direction| self.follow_arm(pos, direction)),
            Symbol::Char(c) => match arrowhead_direction(c) {
                Some(direction) => {
                    self.point_into(pos, direction)?;
                    self.follow_tail(pos, direction.opposite())
                }
                None => Err(UnexpectedCharacter::on_path(found, pos, origin)),
            },
            Symbol::End => Err(UnexpectedCharacter::on_path(found, pos, origin)),
        }
    }

    /// Continue a line from `from` one step in `direction`.
    ///
    /// Running into a box border attaches the box as a source; blank space
    /// means the line dangles.
    fn follow_line(&mut self, from: Position, direction: Direction) -> Result<()> {
        let Some(next) = from.step(direction) else {
            return Err(UnexpectedCharacter::dangling(Symbol::End, from, from));
        };

        let found = self.grid.symbol(next);
        if found.is(border_for(direction)) {
            return self.attach(next, from, Attachment::Source);
        }
        if found.is_blank() {
            return Err(UnexpectedCharacter::dangling(found, next, from));
        }

        self.enqueue(next, from);
        Ok(())
    }

    /// Continue behind the arrowhead at `from`.
    ///
    /// Like [`follow_line`](Self::follow_line), except that blank space ends
    /// the edge: an arrowhead on its own is a complete edge.
    fn follow_tail(&mut self, from: Position, direction: Direction) -> Result<()> {
        let Some(next) = from.step(direction) else {
            return Ok(());
        };

        if self.grid.symbol(next).is_blank() {
            return Ok(());
        }
        self.follow_line(from, direction)
    }

    /// Inspect one arm of the junction at `from`.
    ///
    /// Unused arms are blank; used arms continue with the matching line,
    /// another junction, or an arrowhead pointing away from the junction.
    fn follow_arm(&mut self, from: Position, direction: Direction) -> Result<()> {
        let Some(next) = from.step(direction) else {
            return Ok(());
        };

        let found = self.grid.symbol(next);
        if found.is_blank() {
            return Ok(());
        }
        if found.is(line_for(direction)) || found.is(CORNER) || found.is(arrowhead_for(direction))
        {
            self.enqueue(next, from);
            return Ok(());
        }

        Err(UnexpectedCharacter::on_path(found, next, Some(from)))
    }

    /// Resolve the box the arrowhead at `from` points into.
    fn point_into(&mut self, from: Position, direction: Direction) -> Result<()> {
        let Some(target) = from.step(direction) else {
            return Err(UnexpectedCharacter::misdirected(Symbol::End, from, from));
        };

        let found = self.grid.symbol(target);
        if !found.is(border_for(direction)) {
            return Err(UnexpectedCharacter::misdirected(found, target, from));
        }

        self.attach(target, from, Attachment::Destination)
    }

    fn attach(&mut self, border: Position, from: Position, attachment: Attachment) -> Result<()> {
        let Some(&node) = self.owners.get(&border) else {
            return Err(UnexpectedCharacter::detached(
                self.grid.symbol(border),
                border,
                from,
            ));
        };

        match attachment {
            Attachment::Source => self.sources.insert(node),
            Attachment::Destination => self.destinations.insert(node),
        };
        Ok(())
    }

    fn enqueue(&mut self, pos: Position, from: Position) {
        if !self.visited.contains(&pos) && !self.path.contains(&pos) {
            self.worklist.entry(pos).or_insert(Some(from));
        }
    }
}

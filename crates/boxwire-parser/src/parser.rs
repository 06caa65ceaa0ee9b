//! Two-pass parser from a [`Grid`] to a [`Graph`].
//!
//! The node pass claims every well-formed box; the edge pass then treats
//! each unclaimed, non-blank cell as the seed of a path. Both passes run in
//! row-major order, so the same text always yields the same graph.

use std::collections::HashSet;

use log::{debug, info, trace};

use boxwire_core::{
    geometry::Position,
    graph::{Edge, Graph, Node, NodeId},
};

use crate::{
    attributes,
    edge::{EdgeTracer, NodeIndex},
    error::Result,
    grid::Grid,
    rectangle,
    symbol::CORNER,
};

/// Parse every box and path drawn in `grid`.
pub(crate) fn parse_grid(grid: &Grid<'_>) -> Result<Graph> {
    let mut visited = HashSet::new();

    let nodes = find_nodes(grid, &mut visited)?;
    let owners = index_owners(&nodes);
    let edges = find_edges(grid, &owners, &mut visited)?;

    info!(nodes = nodes.len(), edges = edges.len(); "Parsed diagram");

    Ok(Graph::new(nodes, edges))
}

fn find_nodes(grid: &Grid<'_>, visited: &mut HashSet<Position>) -> Result<Vec<Node>> {
    debug!("Scanning for boxes");

    let mut nodes = Vec::new();
    for anchor in grid.positions_of(CORNER) {
        if visited.contains(&anchor) {
            continue;
        }

        let bounds = match rectangle::detect(grid, anchor) {
            Ok(bounds) => bounds,
            Err(err) => {
                trace!(err:%; "Corner does not start a box");
                continue;
            }
        };

        if bounds.cells().any(|cell| visited.contains(&cell)) {
            debug!(anchor:%, bounds:?; "Skipping box that overlaps a claimed box");
            continue;
        }

        let attributes = attributes::lex(grid, bounds)?;
        let id = NodeId::new(nodes.len());
        trace!(id:%, bounds:?, attributes:?; "Found box");

        visited.extend(bounds.cells());
        nodes.push(Node::new(id, bounds, attributes));
    }

    Ok(nodes)
}

fn index_owners(nodes: &[Node]) -> NodeIndex {
    nodes
        .iter()
        .flat_map(|node| node.occupied_cells().map(move |cell| (cell, node.id())))
        .collect()
}

fn find_edges(
    grid: &Grid<'_>,
    owners: &NodeIndex,
    visited: &mut HashSet<Position>,
) -> Result<Vec<Edge>> {
    debug!("Tracing edges");

    let mut edges = Vec::new();
    for pos in grid.positions() {
        if visited.contains(&pos) {
            continue;
        }
        if grid.symbol(pos).is_blank() {
            visited.insert(pos);
            continue;
        }

        edges.push(EdgeTracer::new(grid, owners, visited).trace(pos)?);
    }

    Ok(edges)
}

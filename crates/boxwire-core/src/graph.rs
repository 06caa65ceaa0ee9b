//! Graph model produced from a diagram.
//!
//! A parsed diagram is a [`Graph`] of [`Node`]s (boxes) and [`Edge`]s
//! (connected line components). Edges refer to nodes by [`NodeId`], which
//! is the node's index in the graph it was parsed into.
//!
//! Nodes and edges keep the order in which they were discovered, which is
//! stable for a given diagram text.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::geometry::{Position, Rect};

/// Attribute key selecting the kind of resource a node describes.
pub const TYPE_ATTRIBUTE: &str = "type";

/// Identifier of a node within its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates an identifier for the node at `index`.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index of the node in its graph.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A box drawn in the diagram.
///
/// The node owns every cell of its bounding box (border and interior).
/// Attributes keep the order in which they appear in the box, reading
/// left-to-right, top-to-bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    id: NodeId,
    bounds: Rect,
    attributes: IndexMap<String, String>,
}

impl Node {
    /// Creates a node covering `bounds` with the given attributes.
    pub fn new(id: NodeId, bounds: Rect, attributes: IndexMap<String, String>) -> Self {
        Self {
            id,
            bounds,
            attributes,
        }
    }

    /// Returns the node identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the bounding box of the node, border included.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns every cell occupied by the node.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Position> + use<> {
        self.bounds.cells()
    }

    /// Returns `true` if `pos` is one of the node's cells.
    pub fn occupies(&self, pos: Position) -> bool {
        self.bounds.contains(pos)
    }

    /// Returns all attributes in the order they were written.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Returns the value of the attribute `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns the value of the `type` attribute, if present.
    pub fn kind(&self) -> Option<&str> {
        self.attribute(TYPE_ATTRIBUTE)
    }
}

/// A connected line component between nodes.
///
/// `sources` are nodes a plain line end touches; `destinations` are nodes
/// an arrowhead points into. Either list may be empty, and a component that
/// branches at a junction may touch several nodes on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    path: IndexSet<Position>,
    sources: Vec<NodeId>,
    destinations: Vec<NodeId>,
}

impl Edge {
    /// Creates an edge from its path cells and resolved endpoints.
    pub fn new(path: IndexSet<Position>, sources: Vec<NodeId>, destinations: Vec<NodeId>) -> Self {
        Self {
            path,
            sources,
            destinations,
        }
    }

    /// Returns the cells holding this edge's lines, corners and arrowheads,
    /// in discovery order.
    pub fn path_cells(&self) -> &IndexSet<Position> {
        &self.path
    }

    /// Returns the nodes this edge flows out of.
    pub fn sources(&self) -> &[NodeId] {
        &self.sources
    }

    /// Returns the nodes this edge points into.
    pub fn destinations(&self) -> &[NodeId] {
        &self.destinations
    }
}

/// The nodes and edges parsed from one diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph from discovered nodes and edges.
    ///
    /// Every [`NodeId`] referenced by an edge must index into `nodes`.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        debug_assert!(
            edges
                .iter()
                .flat_map(|edge| edge.sources.iter().chain(&edge.destinations))
                .all(|id| id.index() < nodes.len()),
            "edge refers to a node outside the graph"
        );
        Self { nodes, edges }
    }

    /// Returns all nodes in discovery order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns all edges in discovery order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the node with the given identifier.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Returns the edges that have `id` among their sources.
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(move |edge| edge.sources.contains(&id))
    }

    /// Returns the edges that have `id` among their destinations.
    pub fn incoming(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(move |edge| edge.destinations.contains(&id))
    }

    /// Returns `true` if the diagram contained no boxes and no lines.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Splits the graph into its node and edge lists.
    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(index: usize, top: usize, attributes: &[(&str, &str)]) -> Node {
        let bounds = Rect::new(Position::new(top, 0), Position::new(top + 2, 10));
        let attributes = attributes
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Node::new(NodeId::new(index), bounds, attributes)
    }

    fn sample_graph() -> Graph {
        let nodes = vec![
            node(0, 0, &[("name", "web"), ("type", "droplet")]),
            node(1, 5, &[("name", "disk")]),
            node(2, 10, &[]),
        ];
        let path = |row| IndexSet::from([Position::new(row, 4)]);
        let edges = vec![
            Edge::new(path(3), vec![NodeId::new(0)], vec![NodeId::new(1)]),
            Edge::new(path(8), vec![NodeId::new(1)], vec![NodeId::new(2)]),
        ];
        Graph::new(nodes, edges)
    }

    #[test]
    fn test_node_attribute_lookup() {
        let node = node(0, 0, &[("name", "web"), ("type", "droplet")]);

        assert_eq!(node.attribute("name"), Some("web"));
        assert_eq!(node.kind(), Some("droplet"));
        assert_eq!(node.attribute("missing"), None);
        assert_eq!(
            node.attributes().keys().collect::<Vec<_>>(),
            vec!["name", "type"]
        );
    }

    #[test]
    fn test_node_occupied_cells_cover_bounds() {
        let node = node(0, 0, &[]);

        assert_eq!(node.occupied_cells().count(), 3 * 11);
        assert!(node.occupied_cells().all(|cell| node.occupies(cell)));
        assert!(!node.occupies(Position::new(3, 0)));
    }

    #[test]
    fn test_graph_outgoing_and_incoming() {
        let graph = sample_graph();
        let middle = NodeId::new(1);

        assert_eq!(graph.outgoing(middle).count(), 1);
        assert_eq!(graph.incoming(middle).count(), 1);
        assert_eq!(graph.outgoing(NodeId::new(2)).count(), 0);
        assert_eq!(
            graph.node(middle).and_then(|node| node.attribute("name")),
            Some("disk")
        );
    }

    #[test]
    fn test_graph_into_parts_preserves_order() {
        let (nodes, edges) = sample_graph().into_parts();

        let ids: Vec<_> = nodes.iter().map(Node::id).collect();
        assert_eq!(ids, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]);
        assert_eq!(edges[0].sources(), &[NodeId::new(0)]);
        assert_eq!(edges[1].destinations(), &[NodeId::new(2)]);
    }

    #[test]
    fn test_empty_graph() {
        assert!(Graph::default().is_empty());
        assert!(!sample_graph().is_empty());
    }
}

//! Reconciliation of real infrastructure against a parsed diagram.
//!
//! A [`Reconciler`] consumes the `(nodes, edges)` of a parsed graph and
//! drives some external system until it matches the picture. It reads node
//! attributes (typically `type`) to choose what a box stands for, and must
//! tolerate attribute keys it does not know about.
//!
//! The bundled [`DropletAgent`] manages a single cloud droplet.

pub mod droplet;

pub use droplet::{ApiError, Droplet, DropletAgent, DropletApi, InMemoryDropletApi};

use thiserror::Error;

use boxwire_core::graph::{Edge, Graph, Node, NodeId};

/// Consumer of a parsed graph that brings external state in line with it.
pub trait Reconciler {
    /// Make the external system match `nodes` and `edges`.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError`] if the graph describes something this
    /// reconciler cannot build, or if the external system fails.
    fn reconcile(&mut self, nodes: &[Node], edges: &[Edge]) -> Result<(), ReconcileError>;

    /// Reconcile against every node and edge of `graph`.
    fn reconcile_graph(&mut self, graph: &Graph) -> Result<(), ReconcileError> {
        self.reconcile(graph.nodes(), graph.edges())
    }
}

/// Errors raised while reconciling a graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("expected no edges, found {0}")]
    UnexpectedEdges(usize),

    #[error("expected exactly one node, found {0}")]
    NodeCount(usize),

    #[error("node {node} has type {found:?}, expected `{expected}`")]
    UnsupportedKind {
        node: NodeId,
        expected: &'static str,
        found: Option<String>,
    },

    #[error("node {node} is missing the `{attribute}` attribute")]
    MissingAttribute {
        node: NodeId,
        attribute: &'static str,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

//! Export of parsed graphs.
//!
//! The [`Exporter`] trait turns a [`Graph`] into an output string. Two
//! backends are available:
//!
//! - [`TextExporter`] writes a short human-readable summary;
//! - [`JsonExporter`] serializes the whole graph with `serde_json`.
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`BoxwireError::Export`] at the crate boundary.
//!
//! [`BoxwireError::Export`]: crate::BoxwireError::Export

use std::fmt::{self, Write};

use thiserror::Error;

use boxwire_core::graph::{Edge, Graph, Node, NodeId};

use crate::config::{OutputConfig, OutputFormat};

/// Abstraction for graph export backends.
pub trait Exporter {
    /// Exports `graph` to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the graph cannot be converted.
    fn export_graph(&self, graph: &Graph) -> Result<String, Error>;
}

/// Errors that can occur during graph export.
#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Text formatting failed")]
    Format(#[from] fmt::Error),
}

/// Create the exporter selected by `config`.
pub fn exporter_for(config: &OutputConfig) -> Box<dyn Exporter> {
    match config.format() {
        OutputFormat::Text => Box::new(TextExporter),
        OutputFormat::Json => Box::new(JsonExporter::new(config.pretty())),
    }
}

/// Plain-text summary of nodes and edges.
///
/// ```text
/// node #0 at 2:9..4:19
///   foo: bar
/// node #1 at 7:9..9:23
///   hello: world
/// edge #0 from #0 to #1 over 2 cells
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl TextExporter {
    fn write_node(out: &mut String, node: &Node) -> fmt::Result {
        let bounds = node.bounds();
        writeln!(
            out,
            "node {} at {}..{}",
            node.id(),
            bounds.top_left(),
            bounds.bottom_right()
        )?;
        for (name, value) in node.attributes() {
            writeln!(out, "  {name}: {value}")?;
        }
        Ok(())
    }

    fn write_edge(out: &mut String, index: usize, edge: &Edge) -> fmt::Result {
        writeln!(
            out,
            "edge #{index} from {} to {} over {} cells",
            join_ids(edge.sources()),
            join_ids(edge.destinations()),
            edge.path_cells().len()
        )
    }
}

fn join_ids(ids: &[NodeId]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Exporter for TextExporter {
    fn export_graph(&self, graph: &Graph) -> Result<String, Error> {
        let mut out = String::new();
        for node in graph.nodes() {
            Self::write_node(&mut out, node)?;
        }
        for (index, edge) in graph.edges().iter().enumerate() {
            Self::write_edge(&mut out, index, edge)?;
        }
        Ok(out)
    }
}

/// JSON serialization of the full graph, including cell positions.
#[derive(Debug, Clone, Copy)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    /// Creates a JSON exporter; `pretty` selects indented output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Exporter for JsonExporter {
    fn export_graph(&self, graph: &Graph) -> Result<String, Error> {
        let json = if self.pretty {
            serde_json::to_string_pretty(graph)?
        } else {
            serde_json::to_string(graph)?
        };
        Ok(json)
    }
}

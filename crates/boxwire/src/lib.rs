//! Boxwire - turn ASCII box-and-line diagrams into graphs.
//!
//! Boxes drawn with `+`, `-` and `|` become nodes carrying `name: value`
//! attributes; the lines between them become edges. The parsed graph can be
//! exported as text or JSON, or handed to a [`reconcile::Reconciler`] that
//! makes real infrastructure match the picture.

pub mod config;
pub mod export;
pub mod reconcile;

mod error;

pub use boxwire_core::{geometry, graph};

pub use error::BoxwireError;

use log::{debug, info, trace};

use boxwire_core::graph::Graph;

use config::AppConfig;
use export::Exporter;

/// Builder for parsing and exporting boxwire diagrams.
///
/// # Examples
///
/// ```rust
/// use boxwire::{GraphBuilder, config::AppConfig};
///
/// let source = "
/// +----------+
/// | foo: bar |
/// +----------+
/// ";
///
/// let builder = GraphBuilder::new(AppConfig::default());
/// let graph = builder.parse(source).expect("Failed to parse");
/// let summary = builder.export(&graph).expect("Failed to export");
///
/// assert!(summary.contains("foo: bar"));
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    config: AppConfig,
}

impl GraphBuilder {
    /// Create a new graph builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder exports with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse diagram text into a graph.
    ///
    /// # Errors
    ///
    /// Returns [`BoxwireError::Parse`], carrying `source`, if any cell of
    /// the diagram breaks the drawing rules.
    pub fn parse(&self, source: &str) -> Result<Graph, BoxwireError> {
        info!("Parsing diagram");

        let graph = boxwire_parser::parse(source)
            .map_err(|err| BoxwireError::new_parse_error(err, source))?;

        debug!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len();
            "Diagram parsed successfully"
        );
        trace!(graph:?; "Parsed graph");

        Ok(graph)
    }

    /// Export a graph in the configured output format.
    ///
    /// # Errors
    ///
    /// Returns [`BoxwireError::Export`] if the graph cannot be serialized.
    pub fn export(&self, graph: &Graph) -> Result<String, BoxwireError> {
        let output = self.config.output();
        info!(format:% = output.format(), pretty = output.pretty(); "Exporting graph");

        let exported = export::exporter_for(output).export_graph(graph)?;

        debug!(bytes = exported.len(); "Graph exported");
        Ok(exported)
    }
}

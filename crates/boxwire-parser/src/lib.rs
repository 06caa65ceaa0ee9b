//! # Boxwire Parser
//!
//! Turns an ASCII box-and-line diagram into a [`Graph`]. Boxes are drawn
//! with `+`, `-` and `|` and hold `name: value` attributes; lines between
//! them use the same characters, with `^ v < >` marking the box a line
//! points into.
//!
//! ## Usage
//!
//! ```
//! # use boxwire_parser::{parse, ParseError};
//! fn main() -> Result<(), ParseError> {
//!     let diagram = "
//! +----------------+
//! | web: droplet   |
//! +----------------+
//!         |
//!         v
//! +----------------+
//! | db: postgres   |
//! +----------------+
//! ";
//!
//!     let graph = parse(diagram)?;
//!     assert_eq!(graph.nodes().len(), 2);
//!     assert_eq!(graph.edges().len(), 1);
//!     Ok(())
//! }
//! ```

mod attributes;
mod edge;
pub mod error;
mod grid;
mod parser;
mod rectangle;
mod span;
pub mod symbol;

pub use error::{Diagnostic, ErrorCode, ParseError};
pub use span::Span;
pub use symbol::Symbol;

use log::debug;

use boxwire_core::graph::Graph;

use grid::Grid;

/// Parse diagram text into a graph of nodes and edges.
///
/// Parsing is all-or-nothing: the first malformed cell stops it and is
/// reported as a [`ParseError`] carrying its position and byte span in
/// `source`.
///
/// # Example
///
/// ```
/// # use boxwire_parser::{parse, ErrorCode};
/// let err = parse("+---+\n| a |--\n+---+").unwrap_err();
///
/// assert_eq!(err.diagnostic().code(), ErrorCode::E101);
/// ```
pub fn parse(source: &str) -> Result<Graph, ParseError> {
    let grid = Grid::new(source);
    parser::parse_grid(&grid).map_err(|err| {
        debug!(
            code:% = err.code(),
            found:% = err.found(),
            position:% = err.position();
            "Parse failed"
        );
        ParseError::from(err.into_diagnostic(&grid))
    })
}

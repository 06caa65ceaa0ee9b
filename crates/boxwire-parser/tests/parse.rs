//! End-to-end parsing scenarios through the public `parse` entry point.

use std::collections::HashSet;

use boxwire_core::{
    geometry::Position,
    graph::{Graph, NodeId},
};
use boxwire_parser::{ErrorCode, ParseError, Span, Symbol, parse};

fn parse_ok(source: &str) -> Graph {
    parse(source).unwrap_or_else(|err| panic!("expected diagram to parse, got: {err}"))
}

fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(graph) => panic!("expected diagram to fail, got {graph:?}"),
        Err(err) => err,
    }
}

fn attributes(graph: &Graph, id: usize) -> Vec<(&str, &str)> {
    graph.nodes()[id]
        .attributes()
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect()
}

#[test]
fn test_one_node() {
    let graph = parse_ok(
        "
        +-----------------+
        | my_vps: droplet |
        | foo: bar        |
        +-----------------+
    ",
    );

    assert_eq!(graph.nodes().len(), 1);
    assert!(graph.edges().is_empty());
    assert_eq!(
        attributes(&graph, 0),
        vec![("my_vps", "droplet"), ("foo", "bar")]
    );
}

#[test]
fn test_single_attribute_box() {
    let graph = parse_ok(
        "
    +-------------+
    | name: value |
    +-------------+
",
    );

    assert_eq!(attributes(&graph, 0), vec![("name", "value")]);
    assert!(graph.edges().is_empty());
}

#[test]
fn test_two_nodes_and_an_edge() {
    let graph = parse_ok(
        "
        +----------+
        | foo: bar |
        +----------+
             |
             v
        +--------------+
        | hello: world |
        +--------------+
    ",
    );

    assert_eq!(attributes(&graph, 0), vec![("foo", "bar")]);
    assert_eq!(attributes(&graph, 1), vec![("hello", "world")]);

    let [edge] = graph.edges() else {
        panic!("expected one edge, got {:?}", graph.edges());
    };
    assert_eq!(edge.sources(), &[NodeId::new(0)]);
    assert_eq!(edge.destinations(), &[NodeId::new(1)]);
}

#[test]
fn test_droplet_behind_firewall_with_storage() {
    let graph = parse_ok(
        "
        +-----------------+  +------------------------+
        | my_vps: droplet |->| my_disk: block_storage |
        +-----------------+  +------------------------+
                 |
                 v
        +-----------------+
        | my_fw: firewall |
        +-----------------+
    ",
    );

    assert_eq!(attributes(&graph, 0), vec![("my_vps", "droplet")]);
    assert_eq!(attributes(&graph, 1), vec![("my_disk", "block_storage")]);
    assert_eq!(attributes(&graph, 2), vec![("my_fw", "firewall")]);

    let [storage, firewall] = graph.edges() else {
        panic!("expected two edges, got {:?}", graph.edges());
    };
    assert_eq!(storage.sources(), &[NodeId::new(0)]);
    assert_eq!(storage.destinations(), &[NodeId::new(1)]);
    assert_eq!(firewall.sources(), &[NodeId::new(0)]);
    assert_eq!(firewall.destinations(), &[NodeId::new(2)]);

    assert_eq!(graph.outgoing(NodeId::new(0)).count(), 2);
    assert_eq!(graph.incoming(NodeId::new(2)).count(), 1);
}

#[test]
fn test_parse_is_deterministic() {
    let source = "
    +------+   +------+
    | a: 1 |-->| b: 2 |
    +------+   +------+
       |
       v
    +------+
    | c: 3 |
    +------+
";

    assert_eq!(parse(source), parse(source));
}

#[test]
fn test_node_and_edge_cells_are_disjoint() {
    let graph = parse_ok(
        "
  +------+
  | a: 1 |----+
  +------+    |
     |        v
     v     +------+
  +------+ | c: 3 |
  | b: 2 | +------+
  +------+
",
    );

    let mut claimed = HashSet::new();
    for node in graph.nodes() {
        assert!(node.occupied_cells().all(|cell| claimed.insert(cell)));
    }
    for edge in graph.edges() {
        assert!(edge.path_cells().iter().all(|&cell| claimed.insert(cell)));
    }
    assert_eq!(graph.edges().len(), 2);
}

#[test]
fn test_line_corner_is_absorbed_into_edge() {
    let graph = parse_ok(
        "
+------+
| a: 1 |--+
+------+  |
          v
      +------+
      | b: 2 |
      +------+
",
    );

    assert_eq!(graph.nodes().len(), 2);
    let [edge] = graph.edges() else {
        panic!("expected one edge, got {:?}", graph.edges());
    };
    assert!(edge.path_cells().contains(&Position::new(2, 10)));
    assert_eq!(edge.destinations(), &[NodeId::new(1)]);
}

#[test]
fn test_y_junction_merges_into_one_edge() {
    let graph = parse_ok(
        "
+------+     +------+
| a: 1 |     | b: 2 |
+------+     +------+
    |            |
    +-----+------+
          v
      +------+
      | c: 3 |
      +------+
",
    );

    let [edge] = graph.edges() else {
        panic!("expected one edge, got {:?}", graph.edges());
    };
    let mut sources = edge.sources().to_vec();
    sources.sort();
    assert_eq!(sources, vec![NodeId::new(0), NodeId::new(1)]);
    assert_eq!(edge.destinations(), &[NodeId::new(2)]);
}

#[test]
fn test_upward_arrow_is_traced_from_its_head() {
    let graph = parse_ok(
        "
+------+
| a: 1 |
+------+
   ^
   |
+------+
| b: 2 |
+------+
",
    );

    let [edge] = graph.edges() else {
        panic!("expected one edge, got {:?}", graph.edges());
    };
    assert_eq!(edge.sources(), &[NodeId::new(1)]);
    assert_eq!(edge.destinations(), &[NodeId::new(0)]);
}

#[test]
fn test_lone_arrowhead_points_into_box() {
    let graph = parse_ok("  v\n+---+\n|a:b|\n+---+");

    assert_eq!(graph.nodes().len(), 1);
    let [edge] = graph.edges() else {
        panic!("expected one edge");
    };
    assert!(edge.sources().is_empty());
    assert_eq!(edge.destinations(), &[NodeId::new(0)]);
}

#[test]
fn test_attribute_name_wraps_across_rows() {
    let graph = parse_ok("+-----+\n|   na|\n|me:x |\n+-----+");

    assert_eq!(attributes(&graph, 0), vec![("name", "x")]);
}

#[test]
fn test_value_running_into_next_row_fails() {
    let err = parse_err("+---+\n|a:b|\n|c:d|\n+---+");
    let diagnostic = err.diagnostic();

    assert_eq!(diagnostic.code(), ErrorCode::E001);
    assert_eq!(diagnostic.found(), Symbol::Char(':'));
    assert_eq!(diagnostic.position(), Position::new(2, 2));
}

#[test]
fn test_whitespace_in_name_fails() {
    let err = parse_err(
        "
+-------------+
| my vps: foo |
+-------------+
",
    );
    let diagnostic = err.diagnostic();

    assert_eq!(diagnostic.code(), ErrorCode::E001);
    assert_eq!(diagnostic.found(), Symbol::Char(' '));
    assert_eq!(diagnostic.position(), Position::new(2, 4));
}

#[test]
fn test_whitespace_in_value_fails() {
    let err = parse_err(
        "
+-----------------+
| name: two words |
+-----------------+
",
    );

    let diagnostic = err.diagnostic();

    assert_eq!(diagnostic.code(), ErrorCode::E001);
    assert_eq!(diagnostic.found(), Symbol::Char(' '));
    assert_eq!(diagnostic.position(), Position::new(2, 17));
}

#[test]
fn test_arrowhead_into_blank_fails() {
    let err = parse_err(
        "
+------+
| a: 1 |
+------+
   |
   v

",
    );
    let diagnostic = err.diagnostic();

    assert_eq!(diagnostic.code(), ErrorCode::E102);
    assert_eq!(diagnostic.position(), Position::new(6, 3));
    assert!(diagnostic.help().is_some());
}

#[test]
fn test_diagnostic_points_at_offending_cell() {
    let source = "+---+\n| a |--x\n+---+";
    let err = parse_err(source);
    let diagnostic = err.diagnostic();

    assert_eq!(diagnostic.code(), ErrorCode::E100);
    let primary = diagnostic
        .labels()
        .iter()
        .find(|label| label.is_primary())
        .expect("primary label");
    assert_eq!(primary.span(), Span::new(13..14));
    assert_eq!(&source[primary.span().start()..primary.span().end()], "x");
}

#[test]
fn test_error_display_includes_code_and_position() {
    let err = parse_err("+---+\n| a |--\n+---+");

    let message = err.to_string();
    assert!(message.starts_with("error[E101]"), "{message}");
    assert!(message.contains("2:8"), "{message}");
}

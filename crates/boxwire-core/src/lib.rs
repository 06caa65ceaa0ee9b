//! Boxwire Core Types and Definitions
//!
//! This crate provides the foundational types shared by the boxwire parser
//! and its consumers. It includes:
//!
//! - **Geometry**: Character-grid coordinates ([`geometry`] module)
//! - **Graph**: Nodes, edges and the parsed graph ([`graph`] module)

pub mod geometry;
pub mod graph;

//! Entity-relationship graph for an investigation, shaped for vis.js.
//!
//! The graph is rebuilt from persisted findings on every read and never
//! stored itself.

pub mod builder;
pub mod extract;
pub mod stats;
pub mod style;
pub mod types;

pub use builder::{build_network, NetworkGraphBuilder};
pub use stats::GraphStats;
pub use types::{EdgeSmooth, GraphEdge, GraphNode, GraphSummary, NetworkGraph, NodeFont, NodeType};

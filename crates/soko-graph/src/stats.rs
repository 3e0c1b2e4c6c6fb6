use std::collections::HashSet;

use petgraph::graph::{NodeIndex, UnGraph};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Structural statistics of a built graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Edges over the maximum possible for an undirected simple graph.
    pub density: f64,
    /// Mean local clustering coefficient over all nodes.
    pub avg_clustering: f64,
}

/// Compute stats for `graph`, or `None` if it has no nodes.
#[must_use]
pub fn compute<N, E>(graph: &UnGraph<N, E>) -> Option<GraphStats> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return None;
    }
    let edge_count = graph.edge_count();

    if node_count == 1 {
        return Some(GraphStats {
            node_count,
            edge_count,
            density: 0.0,
            avg_clustering: 0.0,
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let density = {
        let n = node_count as f64;
        2.0 * edge_count as f64 / (n * (n - 1.0))
    };

    #[allow(clippy::cast_precision_loss)]
    let avg_clustering = {
        let total: f64 = graph
            .node_indices()
            .map(|node| local_clustering(graph, node))
            .sum();
        total / node_count as f64
    };

    Some(GraphStats {
        node_count,
        edge_count,
        density,
        avg_clustering,
    })
}

/// `serialize_with` helper writing missing stats as an empty object (`{}`).
///
/// # Errors
///
/// Propagates the serializer's error.
#[allow(clippy::ref_option)]
pub fn stats_or_empty<S>(stats: &Option<GraphStats>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match stats {
        Some(stats) => stats.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// Fraction of a node's neighbour pairs that are themselves connected.
#[allow(clippy::cast_precision_loss)]
fn local_clustering<N, E>(graph: &UnGraph<N, E>, node: NodeIndex) -> f64 {
    let neighbours: Vec<NodeIndex> = graph
        .neighbors(node)
        .filter(|n| *n != node)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    let degree = neighbours.len();
    if degree < 2 {
        return 0.0;
    }

    let mut links = 0usize;
    for (i, a) in neighbours.iter().enumerate() {
        for b in &neighbours[i + 1..] {
            if graph.contains_edge(*a, *b) {
                links += 1;
            }
        }
    }

    2.0 * links as f64 / (degree * (degree - 1)) as f64
}

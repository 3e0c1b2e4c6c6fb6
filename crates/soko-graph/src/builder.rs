//! Builds the node/edge graph for one investigation from its findings.

use petgraph::graph::{NodeIndex, UnGraph};
use soko_core::{Finding, Investigation};

use crate::extract::{try_parse_payload, PlatformPayload};
use crate::stats::{self, GraphStats};
use crate::style::style_for;
use crate::types::{EdgeSmooth, GraphEdge, GraphNode, GraphSummary, NetworkGraph, NodeFont, NodeType};

/// Scratch state for building one investigation's graph.
///
/// Each call to [`build_from_investigation`](Self::build_from_investigation)
/// starts from an empty graph, so an instance can be reused sequentially.
/// Concurrent investigations need their own instance.
#[derive(Debug, Default)]
pub struct NetworkGraphBuilder {
    /// Node weights are the public node ids; indices line up with `nodes`.
    graph: UnGraph<String, u32>,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl NetworkGraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything built so far.
    pub fn reset(&mut self) {
        self.graph.clear();
        self.nodes.clear();
        self.edges.clear();
    }

    /// Build the graph for `investigation` from its findings, in order.
    ///
    /// The target username is always `node_0`. The synthetic analysis finding
    /// is skipped. Every found platform gets a node linked from the target,
    /// plus any entities its payload yields. A malformed payload only loses
    /// that finding's extracted entities.
    pub fn build_from_investigation(
        &mut self,
        investigation: &Investigation,
        findings: &[Finding],
    ) -> NetworkGraph {
        self.reset();

        let target = self.add_node(
            format!("@{}", investigation.username),
            NodeType::Target,
            format!("Investigation #{}", investigation.id),
        );

        let mut platforms_found = 0usize;
        for finding in findings {
            if finding.is_analysis() || !finding.found {
                continue;
            }
            platforms_found += 1;

            let platform = self.add_node(
                finding.platform.clone(),
                NodeType::Platform,
                finding.profile_url.clone(),
            );
            self.add_edge(target, platform, "found_on", 1);

            if let Some(payload) = try_parse_payload(finding) {
                self.attach_payload(platform, payload);
            }
        }

        tracing::debug!(
            investigation_id = investigation.id,
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "network graph built"
        );

        NetworkGraph {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            summary: GraphSummary {
                target: investigation.username.clone(),
                platforms_found,
                total_nodes: self.nodes.len(),
                total_connections: self.edges.len(),
            },
        }
    }

    /// Stats for the most recent build, or `None` before any build.
    #[must_use]
    pub fn graph_stats(&self) -> Option<GraphStats> {
        stats::compute(&self.graph)
    }

    fn attach_payload(&mut self, platform: NodeIndex, payload: PlatformPayload) {
        match payload {
            PlatformPayload::GitHub { location, company } => {
                if let Some(location) = location {
                    let node = self.add_node(location, NodeType::Location, "GitHub Location".into());
                    self.add_edge(platform, node, "located_at", 1);
                }
                if let Some(company) = company {
                    let node =
                        self.add_node(company, NodeType::Organization, "GitHub Company".into());
                    self.add_edge(platform, node, "works_at", 1);
                }
            }
            PlatformPayload::Reddit { subreddits } => {
                for subreddit in subreddits {
                    let node = self.add_node(
                        format!("r/{subreddit}"),
                        NodeType::Connection,
                        "Reddit Community".into(),
                    );
                    self.add_edge(platform, node, "active_in", 1);
                }
            }
            PlatformPayload::Nothing => {}
        }
    }

    fn add_node(&mut self, label: String, node_type: NodeType, title: String) -> NodeIndex {
        let id = format!("node_{}", self.nodes.len());
        let style = style_for(node_type);
        self.nodes.push(GraphNode {
            id: id.clone(),
            label,
            title,
            color: style.color.to_string(),
            size: style.size,
            icon: style.icon.to_string(),
            font: NodeFont::default(),
            node_type,
        });
        self.graph.add_node(id)
    }

    fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, label: &str, weight: u32) {
        self.edges.push(GraphEdge {
            from: self.graph[from].clone(),
            to: self.graph[to].clone(),
            label: label.to_string(),
            weight,
            smooth: EdgeSmooth::default(),
        });
        self.graph.update_edge(from, to, weight);
    }
}

/// Build a graph with a fresh builder and return it with its stats.
#[must_use]
pub fn build_network(
    investigation: &Investigation,
    findings: &[Finding],
) -> (NetworkGraph, Option<GraphStats>) {
    let mut builder = NetworkGraphBuilder::new();
    let network = builder.build_from_investigation(investigation, findings);
    let stats = builder.graph_stats();
    (network, stats)
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;

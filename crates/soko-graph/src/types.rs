use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Target,
    Platform,
    Location,
    Organization,
    Connection,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFont {
    pub size: u32,
    pub face: String,
    pub color: String,
}

impl Default for NodeFont {
    fn default() -> Self {
        Self {
            size: 14,
            face: "Sora".to_string(),
            color: "#fff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// `node_{n}`; only stable within one build.
    pub id: String,
    pub label: String,
    pub title: String,
    pub color: String,
    pub size: u32,
    pub icon: String,
    pub font: NodeFont,
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSmooth {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for EdgeSmooth {
    fn default() -> Self {
        Self {
            kind: "continuous".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub label: String,
    pub weight: u32,
    pub smooth: EdgeSmooth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub target: String,
    pub platforms_found: usize,
    pub total_nodes: usize,
    pub total_connections: usize,
}

/// Visualization payload for one investigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub summary: GraphSummary,
}

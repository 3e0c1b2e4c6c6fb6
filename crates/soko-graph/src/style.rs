use crate::types::NodeType;

/// Visual attributes for a node type. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub color: &'static str,
    pub size: u32,
    pub icon: &'static str,
}

const STYLES: &[(NodeType, NodeStyle)] = &[
    (
        NodeType::Target,
        NodeStyle {
            color: "#FF1744",
            size: 45,
            icon: "👤",
        },
    ),
    (
        NodeType::Platform,
        NodeStyle {
            color: "#00BCD4",
            size: 35,
            icon: "📱",
        },
    ),
    (
        NodeType::Location,
        NodeStyle {
            color: "#FFA726",
            size: 25,
            icon: "📍",
        },
    ),
    (
        NodeType::Organization,
        NodeStyle {
            color: "#26C6DA",
            size: 25,
            icon: "🏢",
        },
    ),
    (
        NodeType::Connection,
        NodeStyle {
            color: "#66BB6A",
            size: 25,
            icon: "🔗",
        },
    ),
];

/// Gray fallback for types without an entry in the table.
pub const DEFAULT_STYLE: NodeStyle = NodeStyle {
    color: "#757575",
    size: 30,
    icon: "●",
};

#[must_use]
pub fn style_for(node_type: NodeType) -> NodeStyle {
    STYLES
        .iter()
        .find(|(t, _)| *t == node_type)
        .map_or(DEFAULT_STYLE, |(_, style)| *style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_largest() {
        let target = style_for(NodeType::Target);
        assert_eq!(target.color, "#FF1744");
        assert_eq!(target.size, 45);
    }

    #[test]
    fn default_type_falls_back_to_gray() {
        assert_eq!(style_for(NodeType::Default), DEFAULT_STYLE);
    }

    #[test]
    fn every_named_type_has_a_style() {
        for node_type in [
            NodeType::Target,
            NodeType::Platform,
            NodeType::Location,
            NodeType::Organization,
            NodeType::Connection,
        ] {
            assert_ne!(style_for(node_type), DEFAULT_STYLE, "{node_type:?}");
        }
    }
}

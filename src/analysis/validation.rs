use std::collections::HashSet;
use crate::models::node::{AttackNode, NodeType};
use crate::models::tree::AttackTree;

/// Structural problem found in a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeIssue {
    /// The id appears on more than one node. The diagram exporter merges
    /// such nodes into a single vertex.
    DuplicateId(String),
    LeafWithChildren(String),
    EmptyJunction(String),
    InvalidTime { id: String, hours: f64 },
}

impl std::fmt::Display for TreeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeIssue::DuplicateId(id) => write!(f, "duplicate node id '{}'", id),
            TreeIssue::LeafWithChildren(id) => write!(f, "leaf node '{}' has children", id),
            TreeIssue::EmptyJunction(id) => write!(f, "junction node '{}' has no children", id),
            TreeIssue::InvalidTime { id, hours } => {
                write!(f, "node '{}' has invalid time estimate {}h", id, hours)
            }
        }
    }
}

/// Check the structural invariants of a tree. An empty result means the
/// tree is well formed.
pub fn validate_tree(tree: &AttackTree) -> Vec<TreeIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    check_node(&tree.root, &mut seen, &mut reported, &mut issues);
    issues
}

fn check_node<'a>(
    node: &'a AttackNode,
    seen: &mut HashSet<&'a str>,
    reported: &mut HashSet<&'a str>,
    issues: &mut Vec<TreeIssue>,
) {
    if !seen.insert(node.id.as_str()) && reported.insert(node.id.as_str()) {
        issues.push(TreeIssue::DuplicateId(node.id.clone()));
    }

    match node.node_type {
        NodeType::Leaf if !node.children.is_empty() => {
            issues.push(TreeIssue::LeafWithChildren(node.id.clone()));
        }
        NodeType::Or | NodeType::And if node.children.is_empty() => {
            issues.push(TreeIssue::EmptyJunction(node.id.clone()));
        }
        _ => {}
    }

    let hours = node.attributes.time_hours;
    if !hours.is_finite() || hours < 0.0 {
        issues.push(TreeIssue::InvalidTime { id: node.id.clone(), hours });
    }

    for child in &node.children {
        check_node(child, seen, reported, issues);
    }
}

use std::collections::HashSet;
use crate::analysis::metric::Metric;
use crate::analysis::path::{find_path, AttackPath};
use super::node::AttackNode;

/// An AND/OR tree rooted at a single attacker goal.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackTree {
    pub name: String,
    pub description: String,
    pub root: AttackNode,
    pub version: String,
    /// Free-text severity label, e.g. "CRITICAL" or "HIGH".
    pub severity: String,
}

impl AttackTree {
    pub fn new(name: impl Into<String>, description: impl Into<String>, root: AttackNode) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            root,
            version: "1.0".to_string(),
            severity: "Medium".to_string(),
        }
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = severity.into();
        self
    }

    /// Path with the lowest total difficulty.
    pub fn find_easiest_path(&self) -> Vec<&AttackNode> {
        self.find_path(Metric::Difficulty)
    }

    /// Path with the lowest total cost.
    pub fn find_cheapest_path(&self) -> Vec<&AttackNode> {
        self.find_path(Metric::Cost)
    }

    /// Path with the lowest total detection risk.
    pub fn find_stealthiest_path(&self) -> Vec<&AttackNode> {
        self.find_path(Metric::DetectionRisk)
    }

    pub fn find_path(&self, metric: Metric) -> Vec<&AttackNode> {
        find_path(&self.root, metric)
    }

    pub fn best_path(&self, metric: Metric) -> AttackPath<'_> {
        AttackPath::search(&self.root, metric)
    }

    /// Every leaf node in depth-first pre-order.
    pub fn all_leaf_attacks(&self) -> Vec<&AttackNode> {
        self.nodes().into_iter().filter(|n| n.is_leaf()).collect()
    }

    /// Leaf nodes without any mitigation.
    pub fn unmitigated_attacks(&self) -> Vec<&AttackNode> {
        self.all_leaf_attacks()
            .into_iter()
            .filter(|n| !n.is_mitigated())
            .collect()
    }

    /// Every node in depth-first pre-order, root first.
    pub fn nodes(&self) -> Vec<&AttackNode> {
        let mut nodes = Vec::new();
        collect_nodes(&self.root, &mut nodes);
        nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Ids that occur on more than one node, in order of their second occurrence.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for node in self.nodes() {
            let id = node.id.as_str();
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }
}

fn collect_nodes<'a>(node: &'a AttackNode, nodes: &mut Vec<&'a AttackNode>) {
    nodes.push(node);
    for child in &node.children {
        collect_nodes(child, nodes);
    }
}

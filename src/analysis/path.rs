use serde::Serialize;
use tracing::debug;
use crate::models::node::{AttackNode, NodeType};
use super::metric::Metric;

/// Best path from `node` down to its leaves for `metric`.
///
/// OR nodes keep the child path with the strictly smallest score, so the
/// first child wins ties. AND nodes concatenate the best path of every
/// child in order. Leaves and childless junctions end the path.
pub fn find_path(node: &AttackNode, metric: Metric) -> Vec<&AttackNode> {
    match node.node_type {
        NodeType::Leaf => vec![node],
        _ if node.children.is_empty() => vec![node],
        NodeType::Or => {
            let mut best: Option<(u32, Vec<&AttackNode>)> = None;
            for child in &node.children {
                let candidate = find_path(child, metric);
                let score = path_score(&candidate, metric);
                if best.as_ref().map_or(true, |(best_score, _)| score < *best_score) {
                    best = Some((score, candidate));
                }
            }

            let mut path = vec![node];
            if let Some((score, child_path)) = best {
                debug!(node = %node.id, chosen = %child_path[0].id, score, %metric, "Selected OR branch");
                path.extend(child_path);
            }
            path
        }
        NodeType::And => {
            let mut path = vec![node];
            for child in &node.children {
                path.extend(find_path(child, metric));
            }
            path
        }
    }
}

/// Sum of `metric` over the leaf nodes of `path`. Junction nodes add nothing.
pub fn path_score(path: &[&AttackNode], metric: Metric) -> u32 {
    path.iter()
        .filter(|n| n.is_leaf())
        .map(|n| metric.value_of(&n.attributes))
        .sum()
}

/// Total estimated attacker hours over the leaf nodes of `path`.
pub fn path_time_hours(path: &[&AttackNode]) -> f64 {
    path.iter()
        .filter(|n| n.is_leaf())
        .map(|n| n.attributes.time_hours)
        .sum()
}

/// A scored path through a tree.
#[derive(Debug, Clone)]
pub struct AttackPath<'a> {
    pub metric: Metric,
    pub nodes: Vec<&'a AttackNode>,
}

impl<'a> AttackPath<'a> {
    pub fn search(root: &'a AttackNode, metric: Metric) -> Self {
        Self { metric, nodes: find_path(root, metric) }
    }

    pub fn score(&self) -> u32 {
        path_score(&self.nodes, self.metric)
    }

    pub fn total_hours(&self) -> f64 {
        path_time_hours(&self.nodes)
    }

    /// Leaf steps along the path, in order.
    pub fn leaves(&self) -> impl Iterator<Item = &'a AttackNode> + '_ {
        self.nodes.iter().copied().filter(|n| n.is_leaf())
    }

    pub fn summary(&self) -> PathSummary {
        PathSummary {
            metric: self.metric,
            score: self.score(),
            total_hours: self.total_hours(),
            node_ids: self.nodes.iter().map(|n| n.id.clone()).collect(),
            steps: self.leaves().map(|n| n.name.clone()).collect(),
        }
    }
}

/// Owned, serializable view of an [`AttackPath`].
#[derive(Debug, Clone, Serialize)]
pub struct PathSummary {
    pub metric: Metric,
    pub score: u32,
    pub total_hours: f64,
    pub node_ids: Vec<String>,
    pub steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attributes::{AttackAttributes, Cost, DetectionRisk, Difficulty};

    fn leaf(id: &str, difficulty: Difficulty, cost: Cost, detection: DetectionRisk) -> AttackNode {
        AttackNode::leaf(id, id, "").with_attributes(AttackAttributes::new(difficulty, cost, detection, 1.0))
    }

    fn ids(path: &[&AttackNode]) -> Vec<String> {
        path.iter().map(|n| n.id.clone()).collect()
    }

    #[test]
    fn test_or_picks_minimum() {
        let root = AttackNode::or("root", "root", "")
            .with_child(leaf("A", Difficulty::Trivial, Cost::Medium, DetectionRisk::Medium))
            .with_child(leaf("B", Difficulty::High, Cost::Medium, DetectionRisk::Medium));
        let path = find_path(&root, Metric::Difficulty);
        assert_eq!(ids(&path), vec!["root", "A"]);
        assert_eq!(path_score(&path, Metric::Difficulty), 1);
    }

    #[test]
    fn test_and_sums_all_children() {
        let root = AttackNode::and("root", "root", "")
            .with_child(leaf("A", Difficulty::Medium, Cost::Low, DetectionRisk::Medium))
            .with_child(leaf("B", Difficulty::Medium, Cost::Medium, DetectionRisk::Medium));
        let path = find_path(&root, Metric::Cost);
        assert_eq!(ids(&path), vec!["root", "A", "B"]);
        assert_eq!(path_score(&path, Metric::Cost), 3);
    }

    #[test]
    fn test_or_tie_keeps_first_child() {
        let root = AttackNode::or("root", "root", "")
            .with_child(leaf("first", Difficulty::Low, Cost::Free, DetectionRisk::Low))
            .with_child(leaf("second", Difficulty::Low, Cost::Free, DetectionRisk::Low));
        for metric in Metric::ALL {
            assert_eq!(ids(&find_path(&root, metric)), vec!["root", "first"]);
        }
    }

    #[test]
    fn test_leaf_path_is_itself() {
        let node = leaf("A", Difficulty::Expert, Cost::High, DetectionRisk::Certain);
        let path = find_path(&node, Metric::DetectionRisk);
        assert_eq!(ids(&path), vec!["A"]);
        assert_eq!(path_score(&path, Metric::DetectionRisk), 4);
    }

    #[test]
    fn test_childless_junction_scores_zero() {
        let empty = AttackNode::and("E", "dead end", "");
        let root = AttackNode::or("root", "root", "")
            .with_child(leaf("A", Difficulty::Trivial, Cost::Free, DetectionRisk::None))
            .with_child(empty);
        // The empty AND scores 0 and beats the trivial leaf (score 1).
        let path = find_path(&root, Metric::Difficulty);
        assert_eq!(ids(&path), vec!["root", "E"]);
        assert_eq!(path_score(&path, Metric::Difficulty), 0);
    }

    #[test]
    fn test_nested_and_under_or() {
        let cheap_pair = AttackNode::and("M1", "pair", "")
            .with_child(leaf("A", Difficulty::Trivial, Cost::Free, DetectionRisk::None))
            .with_child(leaf("B", Difficulty::Trivial, Cost::Free, DetectionRisk::Low));
        let single = leaf("C", Difficulty::Low, Cost::Low, DetectionRisk::Medium);
        let root = AttackNode::or("G", "goal", "").with_child(single).with_child(cheap_pair);

        // Difficulty: pair = 2, single = 2 -> tie, first child (C) wins.
        assert_eq!(ids(&find_path(&root, Metric::Difficulty)), vec!["G", "C"]);
        // Cost: pair = 0 < single = 1.
        assert_eq!(ids(&find_path(&root, Metric::Cost)), vec!["G", "M1", "A", "B"]);
        // Detection: pair = 1 < single = 2.
        assert_eq!(path_score(&find_path(&root, Metric::DetectionRisk), Metric::DetectionRisk), 1);
    }

    #[test]
    fn test_attack_path_summary() {
        let root = AttackNode::and("root", "root", "")
            .with_child(leaf("A", Difficulty::Low, Cost::Low, DetectionRisk::Low))
            .with_child(leaf("B", Difficulty::Low, Cost::Low, DetectionRisk::Low));
        let path = AttackPath::search(&root, Metric::Difficulty);
        let summary = path.summary();
        assert_eq!(summary.score, 4);
        assert_eq!(summary.total_hours, 2.0);
        assert_eq!(summary.node_ids, vec!["root", "A", "B"]);
        assert_eq!(summary.steps, vec!["A", "B"]);
    }
}

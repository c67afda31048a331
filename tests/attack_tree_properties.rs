use std::collections::HashSet;
use attacktree::analysis::{path_score, Metric};
use attacktree::catalog;
use attacktree::models::attributes::{AttackAttributes, Cost, DetectionRisk, Difficulty};
use attacktree::models::document::TreeDocument;
use attacktree::models::node::{AttackNode, NodeType};
use attacktree::models::tree::AttackTree;
use attacktree::reporting::MermaidExporter;

fn walk<'a>(node: &'a AttackNode, visit: &mut dyn FnMut(&'a AttackNode)) {
    visit(node);
    for child in &node.children {
        walk(child, visit);
    }
}

fn subtree_score(node: &AttackNode, metric: Metric) -> u32 {
    let tree = AttackTree::new("sub", "", node.clone());
    path_score(&tree.find_path(metric), metric)
}

#[test]
fn test_or_and_scoring_properties_hold_on_builtin_trees() {
    for tree in catalog::builtin_trees() {
        for metric in Metric::ALL {
            walk(&tree.root, &mut |node| {
                if node.children.is_empty() {
                    return;
                }
                let own = subtree_score(node, metric);
                let child_scores: Vec<u32> = node.children.iter().map(|c| subtree_score(c, metric)).collect();
                match node.node_type {
                    NodeType::Or => assert!(child_scores.iter().all(|s| own <= *s), "{} {}", node.id, metric),
                    NodeType::And => assert_eq!(own, child_scores.iter().sum::<u32>(), "{} {}", node.id, metric),
                    NodeType::Leaf => {}
                }
            });
        }
    }
}

#[test]
fn test_leaf_enumeration_partitions_nodes() {
    for tree in catalog::builtin_trees() {
        let leaves = tree.all_leaf_attacks();
        let non_leaves = tree.nodes().into_iter().filter(|n| !n.is_leaf()).count();
        assert_eq!(leaves.len() + non_leaves, tree.node_count());

        let ids: HashSet<&str> = leaves.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), leaves.len());

        for node in tree.unmitigated_attacks() {
            assert!(node.mitigations.is_empty());
            assert!(ids.contains(node.id.as_str()));
        }
    }
}

#[test]
fn test_diagram_line_counts() {
    for tree in catalog::builtin_trees() {
        let diagram = MermaidExporter::new(&tree).export();
        let lines: Vec<&str> = diagram.lines().collect();
        let declarations = lines
            .iter()
            .filter(|l| l.starts_with("    N") && (l.contains("['") || l.contains("(('")))
            .count();
        let edges = lines.iter().filter(|l| l.contains(" --> ") || l.contains(" ==> ")).count();
        assert_eq!(declarations, tree.node_count());
        assert_eq!(edges, tree.node_count() - 1);
        assert_eq!(lines.iter().filter(|l| l.starts_with("    classDef ")).count(), 5);
    }
}

#[test]
fn test_document_rewalk_preserves_order() {
    for tree in catalog::builtin_trees() {
        let json = serde_json::to_string(&TreeDocument::from(&tree)).unwrap();
        let back: TreeDocument = serde_json::from_str(&json).unwrap();
        let rebuilt = AttackTree::from(back);
        let ids = |t: &AttackTree| t.nodes().iter().map(|n| n.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&tree), ids(&rebuilt));
        assert_eq!(tree.all_leaf_attacks().len(), rebuilt.all_leaf_attacks().len());
    }
}

#[test]
fn test_worked_examples() {
    let or_tree = AttackTree::new(
        "or",
        "",
        AttackNode::or("root", "root", "")
            .with_child(AttackNode::leaf("A", "A", "").with_attributes(AttackAttributes::new(
                Difficulty::Trivial, Cost::Medium, DetectionRisk::Medium, 1.0,
            )))
            .with_child(AttackNode::leaf("B", "B", "").with_attributes(AttackAttributes::new(
                Difficulty::High, Cost::Medium, DetectionRisk::Medium, 1.0,
            ))),
    );
    let easiest = or_tree.find_easiest_path();
    assert_eq!(easiest.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(), vec!["root", "A"]);
    assert_eq!(path_score(&easiest, Metric::Difficulty), 1);

    let and_tree = AttackTree::new(
        "and",
        "",
        AttackNode::and("root", "root", "")
            .with_child(AttackNode::leaf("A", "A", "").with_attributes(AttackAttributes::new(
                Difficulty::Medium, Cost::Low, DetectionRisk::Medium, 1.0,
            )))
            .with_child(AttackNode::leaf("B", "B", "").with_attributes(AttackAttributes::new(
                Difficulty::Medium, Cost::Medium, DetectionRisk::Medium, 1.0,
            ))),
    );
    let cheapest = and_tree.find_cheapest_path();
    assert_eq!(cheapest.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(), vec!["root", "A", "B"]);
    assert_eq!(path_score(&cheapest, Metric::Cost), 3);
}

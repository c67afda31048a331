use std::collections::HashMap;
use crate::models::attributes::Difficulty;
use crate::models::node::{AttackNode, NodeType};
use crate::models::tree::AttackTree;

const MITIGATED_STYLE: &str = "fill:#d3f9d8,stroke:#51cf66,stroke-width:3px";

/// Fill and stroke used for an unmitigated leaf of the given difficulty.
pub fn difficulty_style(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Trivial => "fill:#ff6b6b,stroke:#c92a2a,stroke-width:3px",
        Difficulty::Low => "fill:#ffa06b,stroke:#e67700,stroke-width:2px",
        Difficulty::Medium => "fill:#ffd93d,stroke:#fab005,stroke-width:2px",
        Difficulty::High => "fill:#6bcb77,stroke:#2f9e44,stroke-width:2px",
        Difficulty::Expert => "fill:#4d96ff,stroke:#1971c2,stroke-width:2px",
    }
}

/// Inline style of a leaf. Mitigated leaves are always drawn green.
pub fn leaf_style(node: &AttackNode) -> &'static str {
    if node.is_mitigated() {
        MITIGATED_STYLE
    } else {
        difficulty_style(node.attributes.difficulty)
    }
}

/// Renders one attack tree as a Mermaid `flowchart TD`.
///
/// Diagram ids (`N0`, `N1`, ...) are assigned in pre-order and memoized by
/// node id, so nodes sharing an id collapse into one vertex.
pub struct MermaidExporter<'a> {
    tree: &'a AttackTree,
    lines: Vec<String>,
    node_ids: HashMap<&'a str, String>,
}

impl<'a> MermaidExporter<'a> {
    pub fn new(tree: &'a AttackTree) -> Self {
        Self {
            tree,
            lines: Vec::new(),
            node_ids: HashMap::new(),
        }
    }

    pub fn export(mut self) -> String {
        let tree = self.tree;
        self.lines.push("flowchart TD".to_string());
        self.export_node(&tree.root, None);
        self.add_legend();
        self.lines.join("\n")
    }

    /// Edges entering an AND node are drawn thick (`==>`).
    fn export_node(&mut self, node: &'a AttackNode, parent_id: Option<&str>) {
        let (diagram_id, first_visit) = match self.node_ids.get(node.id.as_str()) {
            Some(existing) => (existing.clone(), false),
            None => {
                let assigned = format!("N{}", self.node_ids.len());
                self.node_ids.insert(node.id.as_str(), assigned.clone());
                (assigned, true)
            }
        };

        if first_visit {
            let shape = match node.node_type {
                NodeType::Or => format!("{}(('{}'))", diagram_id, node.name),
                NodeType::And | NodeType::Leaf => format!("{}['{}']", diagram_id, node.name),
            };
            if node.is_leaf() {
                self.lines.push(format!("    style {} {}", diagram_id, leaf_style(node)));
            }
            self.lines.push(format!("    {}", shape));
        }

        if let Some(parent_id) = parent_id {
            let connector = if node.node_type == NodeType::And { "==>" } else { "-->" };
            self.lines.push(format!("    {} {} {}", parent_id, connector, diagram_id));
        }

        for child in &node.children {
            self.export_node(child, Some(diagram_id.as_str()));
        }
    }

    fn add_legend(&mut self) {
        self.lines.push(String::new());
        for difficulty in Difficulty::ALL {
            self.lines.push(format!(
                "    classDef {} {}",
                difficulty.as_str().to_lowercase(),
                difficulty_style(difficulty)
            ));
        }
    }
}

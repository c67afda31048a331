use serde::{Deserialize, Serialize};
use super::attributes::AttackAttributes;

/// How a node combines its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Any single child achieves the goal.
    Or,
    /// Every child must be completed.
    And,
    /// A concrete attack step.
    Leaf,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Or => "or",
            NodeType::And => "and",
            NodeType::Leaf => "leaf",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single vertex of an attack tree.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackNode {
    /// Identifier, unique within one tree.
    pub id: String,
    pub name: String,
    pub description: String,
    pub node_type: NodeType,
    pub attributes: AttackAttributes,
    pub children: Vec<AttackNode>,
    /// Defensive controls for this step. Empty means unmitigated.
    pub mitigations: Vec<String>,
    pub cve_refs: Vec<String>,
    /// Source locations the step relates to (e.g. "src/lib.rs:101-244").
    pub file_refs: Vec<String>,
}

impl AttackNode {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        node_type: NodeType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            node_type,
            attributes: AttackAttributes::default(),
            children: Vec::new(),
            mitigations: Vec::new(),
            cve_refs: Vec::new(),
            file_refs: Vec::new(),
        }
    }

    pub fn or(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(id, name, description, NodeType::Or)
    }

    pub fn and(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(id, name, description, NodeType::And)
    }

    pub fn leaf(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(id, name, description, NodeType::Leaf)
    }

    pub fn with_attributes(mut self, attributes: AttackAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_mitigations<I, S>(mut self, mitigations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mitigations = mitigations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_file_refs<I, S>(mut self, file_refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_refs = file_refs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cve_refs<I, S>(mut self, cve_refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cve_refs = cve_refs.into_iter().map(Into::into).collect();
        self
    }

    /// Append a child. The caller is responsible for not attaching
    /// children to leaf nodes.
    pub fn add_child(&mut self, child: AttackNode) {
        self.children.push(child);
    }

    /// Builder form of [`AttackNode::add_child`].
    pub fn with_child(mut self, child: AttackNode) -> Self {
        self.add_child(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.node_type == NodeType::Leaf
    }

    pub fn is_mitigated(&self) -> bool {
        !self.mitigations.is_empty()
    }
}

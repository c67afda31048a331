//! Serialized form of attack trees, used for the JSON report and for tree
//! definition files.

use serde::{Deserialize, Serialize};
use super::attributes::{AttackAttributes, Cost, DetectionRisk, Difficulty};
use super::node::{AttackNode, NodeType};
use super::tree::AttackTree;

/// The combined report written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackTreeReport {
    pub title: String,
    #[serde(default)]
    pub generated: String,
    pub trees: Vec<TreeDocument>,
}

impl AttackTreeReport {
    pub fn new(title: impl Into<String>, generated: impl Into<String>, trees: &[AttackTree]) -> Self {
        Self {
            title: title.into(),
            generated: generated.into(),
            trees: trees.iter().map(TreeDocument::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeDocument {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_severity")]
    pub severity: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub root: NodeDocument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDocument {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub attributes: AttributesDocument,
    #[serde(default)]
    pub mitigations: Vec<String>,
    #[serde(default)]
    pub file_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cve_refs: Vec<String>,
    #[serde(default)]
    pub children: Vec<NodeDocument>,
}

/// Attribute block. Every node carries one, junction nodes included.
/// Missing fields take the default attribute values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributesDocument {
    pub difficulty: Difficulty,
    pub cost: Cost,
    pub detection_risk: DetectionRisk,
    pub time_hours: f64,
    #[serde(skip_serializing_if = "is_false")]
    pub requires_insider: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub requires_physical: bool,
}

impl Default for AttributesDocument {
    fn default() -> Self {
        AttributesDocument::from(&AttackAttributes::default())
    }
}

fn default_severity() -> String {
    "Medium".to_string()
}

fn default_version() -> String {
    "1.0".to_string()
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<&AttackAttributes> for AttributesDocument {
    fn from(attrs: &AttackAttributes) -> Self {
        Self {
            difficulty: attrs.difficulty,
            cost: attrs.cost,
            detection_risk: attrs.detection_risk,
            time_hours: attrs.time_hours,
            requires_insider: attrs.requires_insider,
            requires_physical: attrs.requires_physical,
        }
    }
}

impl From<AttributesDocument> for AttackAttributes {
    fn from(doc: AttributesDocument) -> Self {
        Self {
            difficulty: doc.difficulty,
            cost: doc.cost,
            detection_risk: doc.detection_risk,
            time_hours: doc.time_hours,
            requires_insider: doc.requires_insider,
            requires_physical: doc.requires_physical,
        }
    }
}

impl From<&AttackNode> for NodeDocument {
    fn from(node: &AttackNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            description: node.description.clone(),
            node_type: node.node_type,
            attributes: AttributesDocument::from(&node.attributes),
            mitigations: node.mitigations.clone(),
            file_refs: node.file_refs.clone(),
            cve_refs: node.cve_refs.clone(),
            children: node.children.iter().map(NodeDocument::from).collect(),
        }
    }
}

impl From<NodeDocument> for AttackNode {
    fn from(doc: NodeDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            description: doc.description,
            node_type: doc.node_type,
            attributes: doc.attributes.into(),
            children: doc.children.into_iter().map(AttackNode::from).collect(),
            mitigations: doc.mitigations,
            cve_refs: doc.cve_refs,
            file_refs: doc.file_refs,
        }
    }
}

impl From<&AttackTree> for TreeDocument {
    fn from(tree: &AttackTree) -> Self {
        Self {
            name: tree.name.clone(),
            description: tree.description.clone(),
            severity: tree.severity.clone(),
            version: tree.version.clone(),
            root: NodeDocument::from(&tree.root),
        }
    }
}

impl From<TreeDocument> for AttackTree {
    fn from(doc: TreeDocument) -> Self {
        Self {
            name: doc.name,
            description: doc.description,
            root: doc.root.into(),
            version: doc.version,
            severity: doc.severity,
        }
    }
}

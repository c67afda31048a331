use crate::models::attributes::{AttackAttributes, Cost, DetectionRisk, Difficulty};
use crate::models::node::AttackNode;
use crate::models::tree::AttackTree;
use super::{strings, Scenario, ScenarioAnalysis};

/// Attacker makes the application unavailable or unresponsive.
pub fn build_tree() -> AttackTree {
    let mut root = AttackNode::or(
        "G3",
        "Denial of Service",
        "Make the application unavailable or unresponsive",
    );

    let mut resource_exhaustion = AttackNode::or(
        "M4",
        "Resource Exhaustion",
        "Exhaust memory or disk space with oversized inputs",
    );
    resource_exhaustion.add_child(
        AttackNode::leaf("A13", "Oversized JSON Deserialization", "Send massive JSON payload to deserialize")
            .with_attributes(AttackAttributes::new(Difficulty::Trivial, Cost::Free, DetectionRisk::High, 0.5))
            .with_mitigations(["JSON size limits", "Streaming parsers", "Memory quotas"])
            .with_file_refs(["src-tauri/src/storage.rs:92"]),
    );
    resource_exhaustion.add_child(
        AttackNode::leaf("A14", "Cache Flooding", "Fill disk with unlimited cache entries")
            .with_attributes(AttackAttributes::new(Difficulty::Trivial, Cost::Free, DetectionRisk::Medium, 1.0))
            .with_mitigations(["Cache size limits", "LRU eviction", "Disk space monitoring"])
            .with_file_refs(["src-tauri/src/unified_cache.rs:159-200"]),
    );
    resource_exhaustion.add_child(
        AttackNode::leaf("A15", "Massive CSV Import", "Import enormous CSV file to exhaust resources")
            .with_attributes(AttackAttributes::new(Difficulty::Trivial, Cost::Free, DetectionRisk::Medium, 1.0))
            .with_mitigations(["Row count limits", "Field size limits", "Streaming CSV parser"])
            .with_file_refs(["src-tauri/src/target_io.rs:175-242"]),
    );

    // No rate limiting on any command.
    let api_abuse = AttackNode::leaf("M5", "API Abuse", "Flood APIs with requests without rate limiting")
        .with_attributes(AttackAttributes::new(Difficulty::Trivial, Cost::Low, DetectionRisk::High, 0.5))
        .with_mitigations([
            "Rate limiting on all Tauri commands",
            "Request throttling",
            "Circuit breakers",
        ])
        .with_file_refs(["src-tauri/src/lib.rs"]);

    root.add_child(resource_exhaustion);
    root.add_child(api_abuse);

    AttackTree::new(
        "Denial of Service",
        "Attack paths for making the application unavailable",
        root,
    )
    .with_severity("HIGH")
}

pub fn analysis() -> ScenarioAnalysis {
    ScenarioAnalysis {
        easiest_path: "Oversized JSON Deserialization".to_string(),
        difficulty: "TRIVIAL".to_string(),
        cost: "FREE".to_string(),
        detection_risk: "HIGH".to_string(),
        time: "~30 minutes".to_string(),
        impact: "Application crash, system unresponsiveness, disk exhaustion".to_string(),
        root_causes: strings(&[
            "No size limits on input data",
            "Unlimited cache growth",
            "No rate limiting on commands",
            "Unbounded CSV parsing",
        ]),
        mitigations: strings(&[
            "Implement size limits on all inputs",
            "Add cache size quotas with LRU eviction",
            "Rate limit all Tauri commands",
            "Use streaming parsers for large data",
            "Add resource monitoring",
        ]),
    }
}

pub fn scenario() -> Scenario {
    Scenario::new(build_tree()).with_analysis(analysis())
}

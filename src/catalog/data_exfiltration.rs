use crate::models::attributes::{AttackAttributes, Cost, DetectionRisk, Difficulty};
use crate::models::node::AttackNode;
use crate::models::tree::AttackTree;
use super::{strings, Scenario, ScenarioAnalysis};

/// Attacker steals sensitive user data from the application.
pub fn build_tree() -> AttackTree {
    let mut root = AttackNode::or(
        "G2",
        "Data Exfiltration",
        "Steal sensitive user data from the application",
    );

    let mut read_files = AttackNode::and(
        "M1",
        "Read Files Directly",
        "Access stored data files through path traversal",
    );
    read_files.add_child(
        AttackNode::leaf("A7", "Find App Data Directory", "Locate application data storage")
            .with_attributes(AttackAttributes::new(Difficulty::Trivial, Cost::Free, DetectionRisk::None, 0.5))
            .with_file_refs(["src-tauri/src/storage.rs"]),
    );
    read_files.add_child(
        AttackNode::leaf("A8", "Read JSON Files", "Read plaintext JSON storage files")
            .with_attributes(AttackAttributes::new(Difficulty::Trivial, Cost::Free, DetectionRisk::Low, 0.5))
            .with_mitigations([
                "Encrypt sensitive data at rest",
                "Use system credential storage",
                "File permissions",
            ])
            .with_file_refs(["src-tauri/src/storage.rs:83-98"]),
    );

    let mut extract_storage = AttackNode::and(
        "M2",
        "Extract from localStorage",
        "Access browser localStorage with sensitive data",
    );
    extract_storage.add_child(
        AttackNode::leaf("A9", "Execute XSS or DevTools", "Gain JavaScript execution context")
            .with_attributes(AttackAttributes::new(Difficulty::Low, Cost::Low, DetectionRisk::Medium, 2.0))
            .with_mitigations([
                "Content Security Policy",
                "XSS prevention",
                "DevTools protection in production",
            ]),
    );
    extract_storage.add_child(
        AttackNode::leaf("A10", "Read localStorage", "Access unencrypted data in localStorage")
            .with_attributes(AttackAttributes::new(Difficulty::Trivial, Cost::Free, DetectionRisk::None, 0.1))
            .with_mitigations([
                "Encrypt data before storage",
                "Use secure credential manager",
                "Minimal data in localStorage",
            ])
            .with_file_refs(["lib/storage/web-storage.ts"]),
    );

    let mut ssrf = AttackNode::and(
        "M3",
        "SSRF to Internal Services",
        "Use application to probe internal network",
    );
    ssrf.add_child(
        AttackNode::leaf("A11", "Inject Internal URLs", "Pass internal URLs to prefetch_url or cache fetch")
            .with_attributes(AttackAttributes::new(Difficulty::Low, Cost::Free, DetectionRisk::Medium, 2.0))
            .with_mitigations([
                "URL whitelist validation",
                "Block internal/private IPs",
                "Network segmentation",
            ])
            .with_file_refs([
                "src-tauri/src/unified_cache.rs:332-366",
                "lib/offline/unified-cache.ts:372-425",
            ]),
    );
    ssrf.add_child(
        AttackNode::leaf("A12", "Exfiltrate Responses", "Capture responses from internal services")
            .with_attributes(AttackAttributes::new(Difficulty::Low, Cost::Free, DetectionRisk::Low, 1.0))
            .with_mitigations([
                "Response validation",
                "Data loss prevention",
                "Network monitoring",
            ]),
    );

    root.add_child(read_files);
    root.add_child(extract_storage);
    root.add_child(ssrf);

    AttackTree::new(
        "Data Exfiltration",
        "Attack paths for stealing sensitive data",
        root,
    )
    .with_severity("CRITICAL")
}

pub fn analysis() -> ScenarioAnalysis {
    ScenarioAnalysis {
        easiest_path: "Read Files Directly".to_string(),
        difficulty: "TRIVIAL".to_string(),
        cost: "FREE".to_string(),
        detection_risk: "LOW".to_string(),
        time: "~1 hour".to_string(),
        impact: "User PII exposure, location history, equipment data, observation logs".to_string(),
        root_causes: strings(&[
            "Plaintext data storage (JSON files, localStorage)",
            "No encryption at rest",
            "Path traversal allows arbitrary file read",
            "XSS vulnerabilities enable localStorage theft",
        ]),
        mitigations: strings(&[
            "Encrypt sensitive data at rest",
            "Use system credential storage for secrets",
            "Implement Content Security Policy",
            "Validate all file paths",
            "Add URL allowlist for SSRF prevention",
        ]),
    }
}

pub fn scenario() -> Scenario {
    Scenario::new(build_tree()).with_analysis(analysis())
}

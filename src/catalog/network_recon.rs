use crate::models::attributes::{AttackAttributes, Cost, DetectionRisk, Difficulty};
use crate::models::node::AttackNode;
use crate::models::tree::AttackTree;
use super::{strings, Scenario, ScenarioAnalysis};

/// Attacker uses the application to scan and map the internal network.
pub fn build_tree() -> AttackTree {
    let mut root = AttackNode::or(
        "G4",
        "Internal Network Reconnaissance",
        "Use application to probe internal network and services",
    );

    let mut ssrf_method = AttackNode::and(
        "M6",
        "SSRF via URL Injection",
        "Inject internal URLs into prefetch_url or cache",
    );
    ssrf_method.add_child(
        AttackNode::leaf("A16", "Enumerate Internal IPs", "Scan internal IP ranges (192.168.x.x, 10.x.x.x)")
            .with_attributes(AttackAttributes::new(Difficulty::Low, Cost::Free, DetectionRisk::Medium, 4.0))
            .with_mitigations([
                "Block private IP ranges",
                "URL allowlist only",
                "Network egress filtering",
            ])
            .with_file_refs([
                "src-tauri/src/unified_cache.rs:332-366",
                "lib/offline/unified-cache.ts:372-425",
            ]),
    );
    ssrf_method.add_child(
        AttackNode::leaf("A17", "Port Scan via URLs", "Try different ports to find open services")
            .with_attributes(AttackAttributes::new(Difficulty::Low, Cost::Free, DetectionRisk::Medium, 4.0))
            .with_mitigations([
                "Port restrictions",
                "Protocol whitelisting (HTTPS only)",
                "URL validation",
            ]),
    );
    ssrf_method.add_child(
        AttackNode::leaf("A18", "Access Cloud Metadata", "Try cloud metadata endpoints (169.254.169.254)")
            .with_attributes(AttackAttributes::new(Difficulty::Low, Cost::Free, DetectionRisk::High, 1.0))
            .with_mitigations([
                "Block link-local addresses",
                "Cloud metadata endpoint blocking",
                "Network isolation",
            ]),
    );

    root.add_child(ssrf_method);

    AttackTree::new(
        "Internal Network Reconnaissance",
        "Attack paths for scanning internal network via SSRF",
        root,
    )
    .with_severity("HIGH")
}

pub fn analysis() -> ScenarioAnalysis {
    ScenarioAnalysis {
        easiest_path: "SSRF via URL Injection".to_string(),
        difficulty: "LOW".to_string(),
        cost: "FREE".to_string(),
        detection_risk: "MEDIUM".to_string(),
        time: "~4-8 hours".to_string(),
        impact: "Internal network mapping, cloud metadata theft, lateral movement".to_string(),
        root_causes: strings(&[
            "Arbitrary URL fetching without validation",
            "No IP address restrictions",
            "Missing network egress filtering",
            "No protocol restrictions",
        ]),
        mitigations: strings(&[
            "Implement URL allowlist validation",
            "Block private IP ranges (RFC 1918)",
            "Restrict to HTTPS only",
            "Add network egress filtering",
            "Block cloud metadata endpoints",
        ]),
    }
}

pub fn scenario() -> Scenario {
    Scenario::new(build_tree()).with_analysis(analysis())
}

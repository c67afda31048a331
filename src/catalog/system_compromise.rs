use crate::models::attributes::{AttackAttributes, Cost, DetectionRisk, Difficulty};
use crate::models::node::AttackNode;
use crate::models::tree::AttackTree;
use super::{strings, Scenario, ScenarioAnalysis};

/// Attacker gains full control over the application and underlying system.
pub fn build_tree() -> AttackTree {
    let mut root = AttackNode::or(
        "G1",
        "Complete System Compromise",
        "Gain full control over the application and underlying system",
    );

    let mut compromise_frontend = AttackNode::or(
        "S1",
        "Compromise Frontend",
        "Execute arbitrary code in the frontend context",
    );
    compromise_frontend.add_child(
        AttackNode::leaf("A1", "XSS via innerHTML", "Inject malicious script through map location marker data")
            .with_attributes(AttackAttributes::new(Difficulty::Low, Cost::Low, DetectionRisk::Medium, 2.0))
            .with_mitigations([
                "Sanitize HTML input",
                "Use React JSX instead of innerHTML",
                "Implement Content Security Policy",
            ])
            .with_file_refs(["components/ui/map-location-picker.tsx:172-178"]),
    );
    compromise_frontend.add_child(
        AttackNode::leaf("A2", "Supply Chain Compromise", "Compromise a dependency to run malicious code in frontend")
            .with_attributes(AttackAttributes::new(Difficulty::High, Cost::High, DetectionRisk::Low, 40.0))
            .with_mitigations([
                "Dependency scanning",
                "Software Bill of Materials (SBOM)",
                "Pinned dependencies",
            ])
            .with_file_refs(["package.json"]),
    );

    let mut backend_access = AttackNode::and(
        "S2",
        "Direct Backend Access",
        "Invoke Tauri commands without authentication",
    );
    backend_access.add_child(
        AttackNode::leaf("A3", "Exploit No Authentication", "Tauri commands have no permission checks (all 120+ exposed)")
            .with_attributes(AttackAttributes::new(Difficulty::Trivial, Cost::Free, DetectionRisk::None, 0.5))
            .with_mitigations([
                "Implement authentication/authorization layer",
                "Add permission checks in Tauri commands",
                "Role-based access control",
            ])
            .with_file_refs(["src-tauri/src/lib.rs:101-244"]),
    );
    backend_access.add_child(
        AttackNode::leaf("A4", "Invoke Sensitive Commands", "Call file system, process, or system commands")
            .with_attributes(AttackAttributes::new(Difficulty::Trivial, Cost::Free, DetectionRisk::Low, 1.0))
            .with_mitigations([
                "Restrict command surface",
                "Sandboxed command execution",
                "Command whitelisting",
            ])
            .with_file_refs(["src-tauri/src/lib.rs"]),
    );

    let mut path_traversal = AttackNode::or(
        "S3",
        "Path Traversal Attack",
        "Access arbitrary files on the system",
    );
    path_traversal.add_child(
        AttackNode::leaf("A5", "Path Traversal via open_path", "Pass arbitrary file paths to open_path command")
            .with_attributes(AttackAttributes::new(Difficulty::Trivial, Cost::Free, DetectionRisk::Low, 1.0))
            .with_mitigations([
                "Path validation and sanitization",
                "Allowlist of permitted directories",
                "Chroot/jail filesystem access",
            ])
            .with_file_refs(["src-tauri/src/app_settings.rs:246-289"]),
    );
    path_traversal.add_child(
        AttackNode::leaf("A6", "Path Traversal via import/export", "User-controlled paths in import_all_data/export_all_data")
            .with_attributes(AttackAttributes::new(Difficulty::Low, Cost::Free, DetectionRisk::Low, 2.0))
            .with_mitigations([
                "Validate file paths",
                "Restrict to app data directory",
                "Use secure file dialogs",
            ])
            .with_file_refs(["src-tauri/src/storage.rs:164-267"]),
    );

    root.add_child(compromise_frontend);
    root.add_child(backend_access);
    root.add_child(path_traversal);

    AttackTree::new(
        "Complete System Compromise",
        "Attack paths for gaining full system control",
        root,
    )
    .with_severity("CRITICAL")
}

pub fn analysis() -> ScenarioAnalysis {
    ScenarioAnalysis {
        easiest_path: "Exploit No Authentication → Invoke Sensitive Commands".to_string(),
        difficulty: "TRIVIAL".to_string(),
        cost: "FREE".to_string(),
        detection_risk: "NONE to LOW".to_string(),
        time: "~1.5 hours".to_string(),
        impact: "Full filesystem access, remote code execution, complete system control".to_string(),
        root_causes: strings(&[
            "All 120+ Tauri commands exposed without permission checks",
            "Path traversal vulnerabilities in file operations",
            "No authentication or authorization layer",
        ]),
        mitigations: strings(&[
            "Implement authentication/authorization layer",
            "Add permission checks to all Tauri commands",
            "Validate and sanitize all file paths",
            "Restrict command surface area",
            "Implement sandboxing for sensitive operations",
        ]),
    }
}

pub fn scenario() -> Scenario {
    Scenario::new(build_tree()).with_analysis(analysis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::path::path_score;
    use crate::analysis::Metric;

    #[test]
    fn test_easiest_path_is_path_traversal() {
        let tree = build_tree();
        let ids: Vec<&str> = tree.find_easiest_path().iter().map(|n| n.id.as_str()).collect();
        // S1 best = 2, S2 = 1 + 1 = 2, S3 best = 1.
        assert_eq!(ids, vec!["G1", "S3", "A5"]);
    }

    #[test]
    fn test_cheapest_path_scores_zero() {
        let tree = build_tree();
        let path = tree.find_cheapest_path();
        assert_eq!(path_score(&path, Metric::Cost), 0);
        assert_eq!(path[1].id, "S2");
    }

    #[test]
    fn test_shape() {
        let tree = build_tree();
        assert_eq!(tree.node_count(), 10);
        assert_eq!(tree.all_leaf_attacks().len(), 6);
        assert!(tree.unmitigated_attacks().is_empty());
    }
}

use super::{strings, Conclusion, RemediationItem, RemediationPhase};

fn item(title: &str, location: Option<&str>, actions: &[&str]) -> RemediationItem {
    RemediationItem {
        title: title.to_string(),
        location: location.map(str::to_string),
        actions: strings(actions),
    }
}

/// Prioritized remediation plan. Items are numbered continuously across phases.
pub fn remediation_plan() -> Vec<RemediationPhase> {
    vec![
        RemediationPhase {
            title: "Phase 1: Critical (Immediate Action Required)".to_string(),
            items: vec![
                item("Add Authentication/Authorization", Some("src-tauri/src/lib.rs"), &[
                    "Implement permission checks on all Tauri commands",
                    "Add role-based access control",
                    "Audit command surface area",
                ]),
                item("Fix Path Traversal", Some("app_settings.rs, storage.rs"), &[
                    "Validate and sanitize all file paths",
                    "Implement directory allowlist",
                    "Use secure file dialogs only",
                ]),
                item("Enable Content Security Policy", Some("tauri.conf.json"), &[
                    "Remove `\"csp\": null`",
                    "Implement strict CSP policy",
                    "Add XSS protections",
                ]),
                item("Encrypt Data at Rest", Some("storage.rs, web-storage.ts"), &[
                    "Use system credential manager",
                    "Encrypt JSON files",
                    "Minimize localStorage usage",
                ]),
            ],
        },
        RemediationPhase {
            title: "Phase 2: High (Within 1 Week)".to_string(),
            items: vec![
                item("URL Validation", Some("unified_cache.rs"), &[
                    "Implement URL allowlist",
                    "Block internal/private IPs",
                    "Restrict to HTTPS only",
                ]),
                item("Input Size Limits", Some("all Tauri commands"), &[
                    "Add maximum size limits",
                    "Implement streaming parsers",
                    "Add resource quotas",
                ]),
                item("Rate Limiting", Some("lib.rs command handlers"), &[
                    "Implement rate limiting on all commands",
                    "Add throttling mechanisms",
                    "Circuit breakers for abuse",
                ]),
            ],
        },
        RemediationPhase {
            title: "Phase 3: Medium (Within 1 Month)".to_string(),
            items: vec![
                item("Logging and Monitoring", None, &[
                    "Add comprehensive audit logs",
                    "Security event monitoring",
                    "Alerting on suspicious activities",
                ]),
                item("XSS Prevention", Some("map-location-picker.tsx"), &[
                    "Remove innerHTML usage",
                    "Use React JSX",
                    "Sanitize all HTML inputs",
                ]),
                item("Dependency Management", None, &[
                    "Implement dependency scanning",
                    "Create SBOM",
                    "Regular security updates",
                ]),
            ],
        },
    ]
}

pub fn conclusion() -> Conclusion {
    Conclusion {
        summary: "The Skymap application has **critical security vulnerabilities** that make system compromise,\n\
            data exfiltration, and denial of service attacks trivial to execute. The primary issues are:"
            .to_string(),
        primary_issues: strings(&[
            "**No security boundary** between frontend and backend",
            "**Missing input validation** across all attack surfaces",
            "**Plaintext data storage** without encryption",
            "**No authentication or authorization** on sensitive operations",
        ]),
        call_to_action: "**Immediate action is required** on Phase 1 items to reduce the attack surface from \"trivial\n\
            exploitation\" to \"secured application.\""
            .to_string(),
    }
}

pub fn references() -> Vec<String> {
    strings(&[
        "Security Vulnerability Report: `llmdoc/agent/security-vulnerability-report.md`",
        "MITRE ATT&CK: https://attack.mitre.org/",
        "OWASP Top 10: https://owasp.org/www-project-top-ten/",
        "Tauri Security: https://tauri.app/v1/guides/security/",
    ])
}

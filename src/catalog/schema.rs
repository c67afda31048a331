use serde_json::{json, Value};
use std::sync::LazyLock;

/// Schema of a tree definition file: one tree, a list of trees, or a full
/// generated report.
pub static TREE_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "oneOf": [
            { "$ref": "#/$defs/report" },
            { "type": "array", "items": { "$ref": "#/$defs/tree" } },
            { "$ref": "#/$defs/tree" }
        ],
        "$defs": {
            "report": {
                "type": "object",
                "required": ["title", "trees"],
                "properties": {
                    "title": { "type": "string" },
                    "generated": { "type": "string" },
                    "trees": { "type": "array", "items": { "$ref": "#/$defs/tree" } }
                }
            },
            "tree": {
                "type": "object",
                "required": ["name", "root"],
                "additionalProperties": false,
                "properties": {
                    "name": { "type": "string" },
                    "description": { "type": "string" },
                    "severity": { "type": "string" },
                    "version": { "type": "string" },
                    "root": { "$ref": "#/$defs/node" }
                }
            },
            "node": {
                "type": "object",
                "required": ["id", "name", "type"],
                "additionalProperties": false,
                "properties": {
                    "id": { "type": "string", "minLength": 1 },
                    "name": { "type": "string" },
                    "description": { "type": "string" },
                    "type": { "type": "string", "enum": ["or", "and", "leaf"] },
                    "attributes": { "$ref": "#/$defs/attributes" },
                    "mitigations": { "type": "array", "items": { "type": "string" } },
                    "file_refs": { "type": "array", "items": { "type": "string" } },
                    "cve_refs": { "type": "array", "items": { "type": "string" } },
                    "children": { "type": "array", "items": { "$ref": "#/$defs/node" } }
                }
            },
            "attributes": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "difficulty": { "type": "string", "enum": ["TRIVIAL", "LOW", "MEDIUM", "HIGH", "EXPERT"] },
                    "cost": { "type": "string", "enum": ["FREE", "LOW", "MEDIUM", "HIGH", "VERY_HIGH"] },
                    "detection_risk": { "type": "string", "enum": ["NONE", "LOW", "MEDIUM", "HIGH", "CERTAIN"] },
                    "time_hours": { "type": "number", "minimum": 0 },
                    "requires_insider": { "type": "boolean" },
                    "requires_physical": { "type": "boolean" }
                }
            }
        }
    })
});

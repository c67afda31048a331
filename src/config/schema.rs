use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "report": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "title": { "type": "string" },
                    "generated": { "type": "string" },
                    "based_on": { "type": "string" }
                }
            },
            "output": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "directory": { "type": "string" },
                    "json_file": { "type": "string", "pattern": "\\.json$" },
                    "markdown_file": { "type": "string", "pattern": "\\.md$" }
                }
            },
            "trees": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "include_builtin": { "type": "boolean" },
                    "paths": { "type": "array", "items": { "type": "string" } }
                }
            }
        }
    })
});

//! Response-schema descriptors for structured generation calls.
//!
//! Each tool declares the shape of the JSON it expects back from the
//! generation service. The descriptor is used twice per submission:
//! serialized into the outbound request (`to_wire`) so the service constrains
//! its output, and re-checked against the returned document (`validate`)
//! before a response is accepted. A response that parses as JSON but does not
//! match its declared shape is reported as a schema violation, not as a
//! transport failure.

use serde_json::{json, Map, Value};
use thiserror::Error;

/// First structural mismatch found while checking a returned document.
/// `path` is a JSON-path-ish locator (`$.departments[0].name`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {reason}")]
pub struct SchemaViolation {
    pub path: String,
    pub reason: String,
}

/// Structural schema descriptor mirroring the generation service's schema
/// language. Object properties are order-preserving; every declared property
/// is required (all tool schemas in this service require every key).
#[derive(Debug, Clone)]
pub enum Schema {
    Object {
        properties: Vec<(&'static str, Schema)>,
    },
    Array {
        items: Box<Schema>,
        description: Option<&'static str>,
    },
    String {
        description: Option<&'static str>,
        allowed: Option<&'static [&'static str]>,
    },
    Number {
        description: Option<&'static str>,
    },
    Boolean {
        description: Option<&'static str>,
    },
}

impl Schema {
    pub fn object(properties: Vec<(&'static str, Schema)>) -> Self {
        Schema::Object { properties }
    }

    pub fn array(items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
            description: None,
        }
    }

    pub fn array_desc(description: &'static str, items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
            description: Some(description),
        }
    }

    pub fn string() -> Self {
        Schema::String {
            description: None,
            allowed: None,
        }
    }

    pub fn string_desc(description: &'static str) -> Self {
        Schema::String {
            description: Some(description),
            allowed: None,
        }
    }

    pub fn string_enum(allowed: &'static [&'static str]) -> Self {
        Schema::String {
            description: None,
            allowed: Some(allowed),
        }
    }

    pub fn number() -> Self {
        Schema::Number { description: None }
    }

    pub fn number_desc(description: &'static str) -> Self {
        Schema::Number {
            description: Some(description),
        }
    }

    pub fn boolean() -> Self {
        Schema::Boolean { description: None }
    }

    /// Shorthand for the ubiquitous `ARRAY of STRING` field.
    pub fn string_array() -> Self {
        Schema::array(Schema::string())
    }

    pub fn string_array_desc(description: &'static str) -> Self {
        Schema::array_desc(description, Schema::string())
    }

    // ────────────────────────────────────────────────────────────────────
    // Wire format
    // ────────────────────────────────────────────────────────────────────

    /// Serializes the descriptor into the JSON form the generation service
    /// accepts as `responseSchema`.
    pub fn to_wire(&self) -> Value {
        match self {
            Schema::Object { properties } => {
                let mut props = Map::new();
                for (name, schema) in properties {
                    props.insert((*name).to_string(), schema.to_wire());
                }
                let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
                json!({
                    "type": "OBJECT",
                    "properties": props,
                    "required": required,
                })
            }
            Schema::Array { items, description } => {
                with_description(json!({ "type": "ARRAY", "items": items.to_wire() }), description)
            }
            Schema::String {
                description,
                allowed,
            } => {
                let mut wire = json!({ "type": "STRING" });
                if let Some(values) = allowed {
                    wire["enum"] = json!(values);
                }
                with_description(wire, description)
            }
            Schema::Number { description } => {
                with_description(json!({ "type": "NUMBER" }), description)
            }
            Schema::Boolean { description } => {
                with_description(json!({ "type": "BOOLEAN" }), description)
            }
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Validation
    // ────────────────────────────────────────────────────────────────────

    /// Structurally checks a returned document against this descriptor,
    /// reporting the first violation. Unknown extra keys are tolerated;
    /// missing required keys, type mismatches, and out-of-enum strings are
    /// violations.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        self.validate_at(value, "$")
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<(), SchemaViolation> {
        match self {
            Schema::Object { properties } => {
                let map = value.as_object().ok_or_else(|| SchemaViolation {
                    path: path.to_string(),
                    reason: format!("expected OBJECT, found {}", json_type_name(value)),
                })?;
                for (name, schema) in properties {
                    let child = map.get(*name).ok_or_else(|| SchemaViolation {
                        path: path.to_string(),
                        reason: format!("missing required key '{name}'"),
                    })?;
                    schema.validate_at(child, &format!("{path}.{name}"))?;
                }
                Ok(())
            }
            Schema::Array { items, .. } => {
                let elements = value.as_array().ok_or_else(|| SchemaViolation {
                    path: path.to_string(),
                    reason: format!("expected ARRAY, found {}", json_type_name(value)),
                })?;
                for (index, element) in elements.iter().enumerate() {
                    items.validate_at(element, &format!("{path}[{index}]"))?;
                }
                Ok(())
            }
            Schema::String { allowed, .. } => {
                let text = value.as_str().ok_or_else(|| SchemaViolation {
                    path: path.to_string(),
                    reason: format!("expected STRING, found {}", json_type_name(value)),
                })?;
                if let Some(values) = allowed {
                    if !values.contains(&text) {
                        return Err(SchemaViolation {
                            path: path.to_string(),
                            reason: format!("'{text}' is not one of {values:?}"),
                        });
                    }
                }
                Ok(())
            }
            Schema::Number { .. } => {
                if value.is_number() {
                    Ok(())
                } else {
                    Err(SchemaViolation {
                        path: path.to_string(),
                        reason: format!("expected NUMBER, found {}", json_type_name(value)),
                    })
                }
            }
            Schema::Boolean { .. } => {
                if value.is_boolean() {
                    Ok(())
                } else {
                    Err(SchemaViolation {
                        path: path.to_string(),
                        reason: format!("expected BOOLEAN, found {}", json_type_name(value)),
                    })
                }
            }
        }
    }
}

fn with_description(mut wire: Value, description: &Option<&'static str>) -> Value {
    if let Some(text) = description {
        wire["description"] = json!(text);
    }
    wire
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NULL",
        Value::Bool(_) => "BOOLEAN",
        Value::Number(_) => "NUMBER",
        Value::String(_) => "STRING",
        Value::Array(_) => "ARRAY",
        Value::Object(_) => "OBJECT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_schema() -> Schema {
        Schema::object(vec![
            ("min", Schema::number()),
            ("average", Schema::number()),
            ("max", Schema::number()),
        ])
    }

    #[test]
    fn test_valid_document_passes() {
        let schema = Schema::object(vec![
            ("role", Schema::string()),
            ("estimated_salary_range", range_schema()),
            ("skills_impacting_salary", Schema::string_array()),
        ]);
        let doc = json!({
            "role": "Senior Software Engineer",
            "estimated_salary_range": { "min": 150000, "average": 180000, "max": 220000 },
            "skills_impacting_salary": ["AWS"]
        });
        assert!(schema.validate(&doc).is_ok());
    }

    #[test]
    fn test_missing_required_key_reports_path() {
        let schema = Schema::object(vec![("estimated_salary_range", range_schema())]);
        let doc = json!({ "estimated_salary_range": { "min": 1, "max": 3 } });
        let violation = schema.validate(&doc).unwrap_err();
        assert_eq!(violation.path, "$.estimated_salary_range");
        assert!(violation.reason.contains("average"));
    }

    #[test]
    fn test_type_mismatch_in_array_reports_index() {
        let schema = Schema::object(vec![("skills", Schema::string_array())]);
        let doc = json!({ "skills": ["React", 42] });
        let violation = schema.validate(&doc).unwrap_err();
        assert_eq!(violation.path, "$.skills[1]");
        assert!(violation.reason.contains("expected STRING"));
    }

    #[test]
    fn test_enum_membership_is_enforced() {
        let schema = Schema::object(vec![(
            "level",
            Schema::string_enum(&["Low", "Medium", "High"]),
        )]);
        assert!(schema.validate(&json!({ "level": "Medium" })).is_ok());
        let violation = schema.validate(&json!({ "level": "Critical" })).unwrap_err();
        assert_eq!(violation.path, "$.level");
    }

    #[test]
    fn test_extra_keys_are_tolerated() {
        let schema = Schema::object(vec![("role", Schema::string())]);
        let doc = json!({ "role": "PM", "unexpected": true });
        assert!(schema.validate(&doc).is_ok());
    }

    #[test]
    fn test_top_level_non_object_is_a_violation() {
        let schema = Schema::object(vec![("role", Schema::string())]);
        let violation = schema.validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(violation.path, "$");
        assert!(violation.reason.contains("expected OBJECT, found ARRAY"));
    }

    #[test]
    fn test_boolean_and_number_checks() {
        let schema = Schema::object(vec![
            ("is_startup", Schema::boolean()),
            ("match_score", Schema::number()),
        ]);
        assert!(schema
            .validate(&json!({ "is_startup": true, "match_score": 87 }))
            .is_ok());
        let violation = schema
            .validate(&json!({ "is_startup": "yes", "match_score": 87 }))
            .unwrap_err();
        assert_eq!(violation.path, "$.is_startup");
    }

    #[test]
    fn test_wire_format_shape() {
        let wire = Schema::object(vec![
            ("role", Schema::string_desc("The target job role.")),
            ("scores", Schema::array(Schema::number())),
        ])
        .to_wire();

        assert_eq!(wire["type"], "OBJECT");
        assert_eq!(wire["properties"]["role"]["type"], "STRING");
        assert_eq!(
            wire["properties"]["role"]["description"],
            "The target job role."
        );
        assert_eq!(wire["properties"]["scores"]["items"]["type"], "NUMBER");
        assert_eq!(wire["required"], json!(["role", "scores"]));
    }

    #[test]
    fn test_wire_format_enum() {
        let wire = Schema::string_enum(&["technical", "behavioral", "domain-specific"]).to_wire();
        assert_eq!(wire["type"], "STRING");
        assert_eq!(
            wire["enum"],
            json!(["technical", "behavioral", "domain-specific"])
        );
    }
}

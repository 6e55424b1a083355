//! Schema validation helpers.
//!
//! Checks dynamic [`AttrValue`]s against [`AttributeType`] descriptors and
//! resource [`Schema`]s, returning diagnostics rather than failing fast so a
//! caller sees every problem at once.
//!
//! # Example
//!
//! ```
//! use redpanda_provider::schema::{Attribute, Schema};
//! use redpanda_provider::validation::validate_json;
//! use serde_json::json;
//!
//! let schema = Schema::v0()
//!     .with_attribute("name", Attribute::required_string())
//!     .with_attribute("zones", Attribute::optional_string_list());
//!
//! let diagnostics = validate_json(&schema, &json!({"name": "prod", "zones": ["a"]}));
//! assert!(diagnostics.is_empty());
//!
//! let diagnostics = validate_json(&schema, &json!({"zones": "a"}));
//! assert_eq!(diagnostics.len(), 2);
//! ```

use std::collections::BTreeMap;

use crate::schema::{Attribute, AttributeType, Diagnostic, ObjectType, Schema};
use crate::value::{join_path, AttrValue, Object};

/// Validate a decoded resource instance against a schema.
///
/// # Validation Rules
///
/// - Required attributes must be present and non-null (unknown is accepted)
/// - Computed-only attributes are skipped (the provider sets these)
/// - Attribute types must match the schema, recursively
pub fn validate(schema: &Schema, value: &Object) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for (name, attr) in &schema.attributes {
        validate_attribute(attr, value.get(name), name, &mut diagnostics);
    }
    for name in value.attributes().keys() {
        if !schema.attributes.contains_key(name) {
            diagnostics.push(unexpected_attribute(name));
        }
    }
    diagnostics
}

/// Validate raw JSON configuration against a schema.
///
/// Attributes that fail to decode are reported and left out of the
/// remaining checks.
pub fn validate_json(schema: &Schema, json: &serde_json::Value) -> Vec<Diagnostic> {
    let Some(entries) = json.as_object() else {
        return vec![Diagnostic::error("Expected object")
            .with_detail(format!("Got {}", json))];
    };
    let mut diagnostics = Vec::new();
    let mut attrs = BTreeMap::new();
    for (name, raw) in entries {
        let Some(attr) = schema.attributes.get(name) else {
            diagnostics.push(unexpected_attribute(name));
            continue;
        };
        match AttrValue::from_json(&attr.attr_type, raw, name) {
            Ok(value) => {
                attrs.insert(name.clone(), value);
            },
            Err(err) => diagnostics.extend(err.into_diagnostics(name)),
        }
    }
    diagnostics.extend(validate(schema, &Object::from_attrs_unchecked(attrs)));
    diagnostics
}

/// Validate a decoded resource instance, returning Ok if valid or Err with diagnostics.
pub fn validate_result(schema: &Schema, value: &Object) -> Result<(), Vec<Diagnostic>> {
    let diagnostics = validate(schema, value);
    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(diagnostics)
    }
}

/// Check if a decoded resource instance is valid against a schema.
pub fn is_valid(schema: &Schema, value: &Object) -> bool {
    validate(schema, value).is_empty()
}

/// Validate the attributes of a nested record against its object type.
///
/// Every declared attribute must be present (possibly null) and no
/// undeclared attribute may appear: a record is either wholly absent or
/// fully populated.
pub fn validate_object(
    object_type: &ObjectType,
    attrs: &BTreeMap<String, AttrValue>,
    path: &str,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    validate_object_into(object_type, attrs, path, &mut diagnostics);
    diagnostics
}

fn validate_object_into(
    object_type: &ObjectType,
    attrs: &BTreeMap<String, AttrValue>,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for (name, attr_type) in object_type.iter() {
        let attr_path = join_path(path, name);
        match attrs.get(name) {
            Some(value) => validate_value(attr_type, value, &attr_path, diagnostics),
            None => diagnostics.push(
                Diagnostic::error(format!("Missing attribute '{}'", attr_path))
                    .with_detail("Objects must set every declared attribute, using null when absent")
                    .with_attribute(&attr_path),
            ),
        }
    }
    for name in attrs.keys() {
        if !object_type.contains(name) {
            diagnostics.push(unexpected_attribute(&join_path(path, name)));
        }
    }
}

fn validate_attribute(
    attr: &Attribute,
    value: Option<&AttrValue>,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    // Skip computed-only attributes (provider sets these)
    if attr.flags.computed && !attr.flags.optional && !attr.flags.required {
        return;
    }

    match value {
        None | Some(AttrValue::Null) => {
            if attr.flags.required {
                diagnostics.push(
                    Diagnostic::error(format!("Missing required attribute '{}'", path))
                        .with_detail("This attribute is required and must be provided")
                        .with_attribute(path),
                );
            }
        },
        Some(v) => validate_value(&attr.attr_type, v, path, diagnostics),
    }
}

/// Validate a single value against a type, appending to `diagnostics`.
pub fn validate_value(
    attr_type: &AttributeType,
    value: &AttrValue,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match (attr_type, value) {
        (_, AttrValue::Null | AttrValue::Unknown) => {},
        (AttributeType::String, AttrValue::String(_)) => {},
        (AttributeType::Int64, AttrValue::Int(_)) => {},
        (AttributeType::Bool, AttrValue::Bool(_)) => {},
        (AttributeType::List(element), AttrValue::List(items)) => {
            for (i, item) in items.iter().enumerate() {
                validate_value(element, item, &format!("{}.{}", path, i), diagnostics);
            }
        },
        (AttributeType::Map(element), AttrValue::Map(entries)) => {
            for (key, item) in entries {
                validate_value(element, item, &format!("{}.{}", path, key), diagnostics);
            }
        },
        (AttributeType::Object(object_type), AttrValue::Object(obj)) => {
            validate_object_into(object_type, obj.attributes(), path, diagnostics);
        },
        (expected, actual) => diagnostics.push(type_error(path, expected, actual)),
    }
}

fn type_error(path: &str, expected: &AttributeType, actual: &AttrValue) -> Diagnostic {
    let diag = Diagnostic::error(format!("Invalid type for '{}'", path)).with_detail(format!(
        "Expected {}, got {}",
        type_label(expected),
        actual.type_name()
    ));
    if path.is_empty() {
        diag
    } else {
        diag.with_attribute(path)
    }
}

fn unexpected_attribute(path: &str) -> Diagnostic {
    Diagnostic::error(format!("Unexpected attribute '{}'", path))
        .with_detail("This attribute is not declared by the schema")
        .with_attribute(path)
}

fn type_label(attr_type: &AttributeType) -> &'static str {
    match attr_type {
        AttributeType::String => "string",
        AttributeType::Int64 => "int64",
        AttributeType::Bool => "bool",
        AttributeType::List(_) => "list",
        AttributeType::Map(_) => "map",
        AttributeType::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Attribute;
    use serde_json::json;

    fn mtls_type() -> ObjectType {
        ObjectType::new()
            .with("enabled", AttributeType::Bool)
            .with("ca_certificates_pem", AttributeType::string_list())
    }

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("id", Attribute::computed_string())
            .with_attribute("mtls", Attribute::optional_object(&mtls_type()))
            .with_attribute("tags", Attribute::optional_string_map())
    }

    #[test]
    fn test_valid_config() {
        let diags = validate_json(
            &schema(),
            &json!({
                "name": "c1",
                "mtls": {"enabled": true, "ca_certificates_pem": ["pem"]},
                "tags": {"env": "prod"}
            }),
        );
        assert!(diags.is_empty(), "{diags:?}");
    }

    #[test]
    fn test_missing_required() {
        let diags = validate_json(&schema(), &json!({"tags": {}}));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].attribute.as_deref(), Some("name"));
        assert!(diags[0].summary.contains("Missing required"));
    }

    #[test]
    fn test_nested_type_error() {
        let diags = validate_json(
            &schema(),
            &json!({"name": "c1", "mtls": {"enabled": "yes"}}),
        );
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].attribute.as_deref(), Some("mtls.enabled"));
    }

    #[test]
    fn test_unexpected_attribute() {
        let diags = validate_json(&schema(), &json!({"name": "c1", "zone": "a"}));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].attribute.as_deref(), Some("zone"));
    }

    #[test]
    fn test_validate_object_requires_every_attribute() {
        let mut attrs = BTreeMap::new();
        attrs.insert("enabled".to_string(), AttrValue::Bool(true));
        let diags = validate_object(&mtls_type(), &attrs, "kafka_api.mtls");
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].attribute.as_deref(),
            Some("kafka_api.mtls.ca_certificates_pem")
        );

        attrs.insert("ca_certificates_pem".to_string(), AttrValue::Null);
        assert!(validate_object(&mtls_type(), &attrs, "kafka_api.mtls").is_empty());
    }

    #[test]
    fn test_unknown_accepted_everywhere() {
        let mut diags = Vec::new();
        validate_value(
            &AttributeType::Object(mtls_type()),
            &AttrValue::Unknown,
            "mtls",
            &mut diags,
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn test_validate_result_and_is_valid() {
        let obj = Object::from_attrs_unchecked(BTreeMap::from([(
            "name".to_string(),
            AttrValue::String("c1".into()),
        )]));
        assert!(is_valid(&schema(), &obj));
        assert!(validate_result(&schema(), &obj).is_ok());

        let empty = Object::default();
        assert!(validate_result(&schema(), &empty).is_err());
    }
}

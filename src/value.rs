//! Tri-state values and the dynamic attribute representation.
//!
//! Every attribute the host hands us is in exactly one of three states:
//! null (not set), unknown (computed later) or known. [`Value`] carries that
//! state for statically-typed Model fields; [`AttrValue`] is the tagged union
//! used for nested records whose shape is described at runtime by an
//! [`ObjectType`](crate::schema::ObjectType).
//!
//! # Example
//!
//! ```
//! use redpanda_provider::value::Value;
//!
//! let zones: Value<Vec<String>> = Value::known(vec!["us-west1-a".to_string()]);
//! assert!(zones.is_known());
//! assert_eq!(zones.value().unwrap().len(), 1);
//!
//! let version: Value<String> = Value::Unknown;
//! assert!(version.value().is_err());
//! ```

use std::collections::BTreeMap;

use serde_json::Value as Json;

use crate::error::ProviderError;
use crate::schema::{AttributeType, ObjectType};
use crate::validation;

/// The string Terraform's legacy shims use to mark an unknown value in JSON.
pub const UNKNOWN_SENTINEL: &str = "74D93920-ED26-11E3-AC10-0800200C9A66";

/// A tri-state value: null, unknown, or known.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value<T> {
    /// Explicitly absent.
    #[default]
    Null,
    /// Not yet known; will be computed during apply.
    Unknown,
    /// A concrete value.
    Known(T),
}

impl<T> Value<T> {
    /// Create a known value.
    pub fn known(value: T) -> Self {
        Self::Known(value)
    }

    /// Whether the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the value is unknown.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Whether the value is known.
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Borrow the concrete value.
    ///
    /// Calling this on a null or unknown value is a programming error and
    /// reported as [`ProviderError::Sdk`].
    pub fn value(&self) -> Result<&T, ProviderError> {
        match self {
            Self::Known(v) => Ok(v),
            Self::Null => Err(ProviderError::Sdk("value() called on a null value".into())),
            Self::Unknown => Err(ProviderError::Sdk(
                "value() called on an unknown value".into(),
            )),
        }
    }

    /// The known value, if any.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Known(v) => Some(v),
            _ => None,
        }
    }

    /// Consume into the known value, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Known(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the payload.
    pub fn as_ref(&self) -> Value<&T> {
        match self {
            Self::Null => Value::Null,
            Self::Unknown => Value::Unknown,
            Self::Known(v) => Value::Known(v),
        }
    }

    /// Map the known payload, keeping null and unknown as they are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Value<U> {
        match self {
            Self::Null => Value::Null,
            Self::Unknown => Value::Unknown,
            Self::Known(v) => Value::Known(f(v)),
        }
    }

    /// Map the known payload with a fallible function.
    pub fn try_map<U, E, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<Value<U>, E> {
        Ok(match self {
            Self::Null => Value::Null,
            Self::Unknown => Value::Unknown,
            Self::Known(v) => Value::Known(f(v)?),
        })
    }

    /// Require a known value, naming `path` in the error otherwise.
    pub fn require(self, path: &str) -> Result<T, ProviderError> {
        match self {
            Self::Known(v) => Ok(v),
            _ => Err(ProviderError::MissingRequired(path.to_string())),
        }
    }
}

impl<T: Default> Value<T> {
    /// The known value, or `T::default()` when null or unknown.
    pub fn unwrap_or_default(self) -> T {
        self.into_option().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Known(v),
            None => Self::Null,
        }
    }
}

/// A record of named attributes, always populated with every attribute its
/// [`ObjectType`] declares (individual attributes may still be null).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    attrs: BTreeMap<String, AttrValue>,
}

impl Object {
    /// Start building an object of the given type.
    pub fn builder(object_type: &ObjectType) -> ObjectBuilder<'_> {
        ObjectBuilder {
            object_type,
            attrs: BTreeMap::new(),
        }
    }

    /// Build an object from raw attributes, checking them against the type.
    pub fn new(
        object_type: &ObjectType,
        attrs: BTreeMap<String, AttrValue>,
    ) -> Result<Self, ProviderError> {
        let diagnostics = validation::validate_object(object_type, &attrs, "");
        if diagnostics.is_empty() {
            Ok(Self { attrs })
        } else {
            Err(ProviderError::Diagnostics(diagnostics))
        }
    }

    /// Build an object without checking it against a type.
    ///
    /// Only used for data decoded by [`AttrValue::from_json`], which is already
    /// shaped by its type.
    pub(crate) fn from_attrs_unchecked(attrs: BTreeMap<String, AttrValue>) -> Self {
        Self { attrs }
    }

    /// Look up an attribute. Missing keys are `None`.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// Iterate over the attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.attrs.iter()
    }

    /// The raw attribute map.
    pub fn attributes(&self) -> &BTreeMap<String, AttrValue> {
        &self.attrs
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Json {
        Json::Object(
            self.attrs
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

/// Builder returned by [`Object::builder`].
pub struct ObjectBuilder<'a> {
    object_type: &'a ObjectType,
    attrs: BTreeMap<String, AttrValue>,
}

impl ObjectBuilder<'_> {
    /// Set an attribute.
    pub fn set(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    /// Finish the object, checking it against its type.
    pub fn build(self) -> Result<Object, ProviderError> {
        Object::new(self.object_type, self.attrs)
    }
}

/// A dynamically-shaped attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Null of any shape.
    Null,
    /// Unknown of any shape.
    Unknown,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A string.
    String(String),
    /// An ordered list.
    List(Vec<AttrValue>),
    /// A string-keyed map with uniform element type.
    Map(BTreeMap<String, AttrValue>),
    /// A nested record.
    Object(Object),
}

impl AttrValue {
    /// A short name for the shape of this value, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Unknown => "unknown",
            Self::Bool(_) => "bool",
            Self::Int(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Object(_) => "object",
        }
    }

    /// Whether this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this value or anything nested in it is unknown.
    pub fn contains_unknown(&self) -> bool {
        match self {
            Self::Unknown => true,
            Self::List(items) => items.iter().any(Self::contains_unknown),
            Self::Map(entries) => entries.values().any(Self::contains_unknown),
            Self::Object(object) => object.iter().any(|(_, value)| value.contains_unknown()),
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::String(_) => false,
        }
    }

    /// Encode as JSON; unknown values become [`UNKNOWN_SENTINEL`].
    pub fn to_json(&self) -> Json {
        match self {
            Self::Null => Json::Null,
            Self::Unknown => Json::String(UNKNOWN_SENTINEL.to_string()),
            Self::Bool(b) => Json::Bool(*b),
            Self::Int(i) => Json::from(*i),
            Self::String(s) => Json::String(s.clone()),
            Self::List(items) => Json::Array(items.iter().map(AttrValue::to_json).collect()),
            Self::Map(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Self::Object(obj) => obj.to_json(),
        }
    }

    /// Decode JSON guided by an attribute type.
    ///
    /// Object attributes missing from the JSON decode as null; extra keys are
    /// rejected.
    pub fn from_json(
        attr_type: &AttributeType,
        json: &Json,
        path: &str,
    ) -> Result<Self, ProviderError> {
        if json.is_null() {
            return Ok(Self::Null);
        }
        if json.as_str() == Some(UNKNOWN_SENTINEL) {
            return Ok(Self::Unknown);
        }
        let mismatch = |expected: &str| {
            ProviderError::type_mismatch(path, expected, json_type_name(json))
        };
        match attr_type {
            AttributeType::String => json
                .as_str()
                .map(|s| Self::String(s.to_string()))
                .ok_or_else(|| mismatch("string")),
            AttributeType::Int64 => json.as_i64().map(Self::Int).ok_or_else(|| mismatch("int64")),
            AttributeType::Bool => json.as_bool().map(Self::Bool).ok_or_else(|| mismatch("bool")),
            AttributeType::List(element) => {
                let items = json.as_array().ok_or_else(|| mismatch("list"))?;
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| Self::from_json(element, item, &format!("{}.{}", path, i)))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Self::List)
            },
            AttributeType::Map(element) => {
                let entries = json.as_object().ok_or_else(|| mismatch("map"))?;
                entries
                    .iter()
                    .map(|(k, v)| {
                        Self::from_json(element, v, &format!("{}.{}", path, k))
                            .map(|v| (k.clone(), v))
                    })
                    .collect::<Result<BTreeMap<_, _>, _>>()
                    .map(Self::Map)
            },
            AttributeType::Object(object_type) => {
                let entries = json.as_object().ok_or_else(|| mismatch("object"))?;
                Self::object_from_json(object_type, entries, path).map(Self::Object)
            },
        }
    }

    pub(crate) fn object_from_json(
        object_type: &ObjectType,
        entries: &serde_json::Map<String, Json>,
        path: &str,
    ) -> Result<Object, ProviderError> {
        if let Some(extra) = entries.keys().find(|k| !object_type.contains(k)) {
            return Err(ProviderError::Validation(format!(
                "unexpected attribute '{}'",
                join_path(path, extra)
            )));
        }
        let mut attrs = BTreeMap::new();
        for (name, attr_type) in object_type.iter() {
            let value = match entries.get(name) {
                Some(json) => Self::from_json(attr_type, json, &join_path(path, name))?,
                None => Self::Null,
            };
            attrs.insert(name.clone(), value);
        }
        Ok(Object::from_attrs_unchecked(attrs))
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Object> for AttrValue {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, String>> for AttrValue {
    fn from(value: BTreeMap<String, String>) -> Self {
        Self::Map(
            value
                .into_iter()
                .map(|(k, v)| (k, AttrValue::String(v)))
                .collect(),
        )
    }
}

impl<T: Into<AttrValue>> From<Value<T>> for AttrValue {
    fn from(value: Value<T>) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Unknown => Self::Unknown,
            Value::Known(v) => v.into(),
        }
    }
}

pub(crate) fn join_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", base, name)
    }
}

pub(crate) fn json_type_name(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn endpoint_type() -> ObjectType {
        ObjectType::new()
            .with("url", AttributeType::String)
            .with("ports", AttributeType::list(AttributeType::Int64))
    }

    #[test]
    fn test_tri_state() {
        let null: Value<bool> = Value::Null;
        assert!(null.is_null());
        assert!(!null.is_known());
        assert!(matches!(null.value(), Err(ProviderError::Sdk(_))));

        let unknown: Value<bool> = Value::Unknown;
        assert!(unknown.is_unknown());
        assert!(unknown.as_option().is_none());

        let known = Value::known(true);
        assert_eq!(known.value().unwrap(), &true);
        assert_eq!(Value::from(Some(3)), Value::known(3));
        assert_eq!(Value::<i32>::from(None), Value::Null);
    }

    #[test]
    fn test_contains_unknown_looks_inside_collections() {
        assert!(AttrValue::Unknown.contains_unknown());
        assert!(!AttrValue::Null.contains_unknown());
        assert!(!AttrValue::List(vec![AttrValue::Int(1)]).contains_unknown());
        assert!(AttrValue::List(vec![AttrValue::Int(1), AttrValue::Unknown]).contains_unknown());
        assert!(AttrValue::Map(BTreeMap::from([("k".to_string(), AttrValue::Unknown)]))
            .contains_unknown());
    }

    #[test]
    fn test_require_names_path() {
        let err = Value::<String>::Unknown.require("name").unwrap_err();
        assert!(matches!(err, ProviderError::MissingRequired(p) if p == "name"));
    }

    #[test]
    fn test_builder_rejects_partial_population() {
        let ty = endpoint_type();
        let err = Object::builder(&ty)
            .set("url", "https://console")
            .build()
            .unwrap_err();
        assert!(matches!(err, ProviderError::Diagnostics(_)));

        let obj = Object::builder(&ty)
            .set("url", "https://console")
            .set("ports", Value::<Vec<i64>>::Null)
            .build()
            .unwrap();
        assert_eq!(obj.get("ports"), Some(&AttrValue::Null));
    }

    #[test]
    fn test_json_round_trip_with_unknown() {
        let ty = AttributeType::Object(endpoint_type());
        let json = json!({"url": UNKNOWN_SENTINEL, "ports": [9092, 9644]});
        let value = AttrValue::from_json(&ty, &json, "").unwrap();

        let AttrValue::Object(obj) = &value else {
            panic!("expected object");
        };
        assert_eq!(obj.get("url"), Some(&AttrValue::Unknown));
        assert_eq!(value.to_json(), json);
    }

    #[test]
    fn test_json_missing_attributes_decode_as_null() {
        let ty = AttributeType::Object(endpoint_type());
        let value = AttrValue::from_json(&ty, &json!({}), "").unwrap();
        let AttrValue::Object(obj) = value else {
            panic!("expected object");
        };
        assert_eq!(obj.get("url"), Some(&AttrValue::Null));
        assert_eq!(obj.get("ports"), Some(&AttrValue::Null));
    }

    #[test]
    fn test_json_type_mismatch_reports_path() {
        let ty = AttributeType::Object(endpoint_type());
        let err = AttrValue::from_json(&ty, &json!({"ports": [1, "two"]}), "prometheus")
            .unwrap_err();
        match err {
            ProviderError::TypeMismatch { path, expected, .. } => {
                assert_eq!(path, "prometheus.ports.1");
                assert_eq!(expected, "int64");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_json_rejects_extra_attributes() {
        let ty = AttributeType::Object(endpoint_type());
        let err = AttrValue::from_json(&ty, &json!({"uri": "x"}), "").unwrap_err();
        assert!(matches!(err, ProviderError::Validation(_)));
    }
}

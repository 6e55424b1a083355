//! Typed getters over dynamic [`Object`]s.
//!
//! An absent key, a null value and an unknown value are all "not set" for
//! the purpose of building a request: optional getters return them as
//! [`Value::Null`] / [`Value::Unknown`] and never fail. A present key holding
//! the wrong shape is malformed input and fails with
//! [`ProviderError::TypeMismatch`]. The `required_*` variants turn "not set"
//! into [`ProviderError::MissingRequired`] naming the full dotted path.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::ProviderError;
use crate::value::{join_path, AttrValue, Object, Value};

/// A read-only view of an [`Object`] that remembers where it sits in the
/// enclosing record, so errors name the full path.
#[derive(Debug, Clone, Copy)]
pub struct Attrs<'a> {
    object: &'a Object,
    path: &'a str,
}

/// Owned-path variant of [`Attrs`] returned when descending into nested
/// objects.
#[derive(Debug, Clone)]
pub struct NestedAttrs<'a> {
    object: &'a Object,
    path: String,
}

impl<'a> Attrs<'a> {
    /// View a top-level object.
    pub fn root(object: &'a Object) -> Self {
        Self { object, path: "" }
    }

    /// View an object that lives at `path`.
    pub fn at(object: &'a Object, path: &'a str) -> Self {
        Self { object, path }
    }
}

impl<'a> NestedAttrs<'a> {
    /// View an object that lives at `path`.
    pub fn new(object: &'a Object, path: impl Into<String>) -> Self {
        Self {
            object,
            path: path.into(),
        }
    }

    /// Borrow as an [`Attrs`].
    pub fn attrs(&self) -> Attrs<'_> {
        Attrs {
            object: self.object,
            path: &self.path,
        }
    }

    /// The dotted path of this object.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<'a> Attrs<'a> {
    /// The dotted path of this object.
    pub fn path(&self) -> &str {
        self.path
    }

    /// The dotted path of an attribute of this object.
    pub fn path_of(&self, key: &str) -> String {
        join_path(self.path, key)
    }

    fn raw(&self, key: &str) -> &'a AttrValue {
        self.object.get(key).unwrap_or(&AttrValue::Null)
    }

    fn mismatch(&self, key: &str, expected: &str, actual: &AttrValue) -> ProviderError {
        ProviderError::type_mismatch(self.path_of(key), expected, actual.type_name())
    }

    /// Get a bool attribute.
    pub fn bool(&self, key: &str) -> Result<Value<bool>, ProviderError> {
        match self.raw(key) {
            AttrValue::Null => Ok(Value::Null),
            AttrValue::Unknown => Ok(Value::Unknown),
            AttrValue::Bool(b) => Ok(Value::Known(*b)),
            other => Err(self.mismatch(key, "bool", other)),
        }
    }

    /// Get a string attribute.
    pub fn string(&self, key: &str) -> Result<Value<String>, ProviderError> {
        match self.raw(key) {
            AttrValue::Null => Ok(Value::Null),
            AttrValue::Unknown => Ok(Value::Unknown),
            AttrValue::String(s) => Ok(Value::Known(s.clone())),
            other => Err(self.mismatch(key, "string", other)),
        }
    }

    /// Get an integer attribute that must fit in an `i32`.
    pub fn int32(&self, key: &str) -> Result<Value<i32>, ProviderError> {
        match self.raw(key) {
            AttrValue::Null => Ok(Value::Null),
            AttrValue::Unknown => Ok(Value::Unknown),
            AttrValue::Int(i) => i32::try_from(*i).map(Value::Known).map_err(|_| {
                ProviderError::Validation(format!(
                    "{} is out of range for a 32-bit integer: {}",
                    self.path_of(key),
                    i
                ))
            }),
            other => Err(self.mismatch(key, "number", other)),
        }
    }

    /// Get a list of strings. An unknown element makes the whole list unknown.
    pub fn string_list(&self, key: &str) -> Result<Value<Vec<String>>, ProviderError> {
        let items = match self.raw(key) {
            AttrValue::Null => return Ok(Value::Null),
            AttrValue::Unknown => return Ok(Value::Unknown),
            AttrValue::List(items) => items,
            other => return Err(self.mismatch(key, "list", other)),
        };
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match item {
                AttrValue::String(s) => out.push(s.clone()),
                AttrValue::Unknown => return Ok(Value::Unknown),
                other => {
                    return Err(ProviderError::type_mismatch(
                        format!("{}.{}", self.path_of(key), i),
                        "string",
                        other.type_name(),
                    ))
                },
            }
        }
        Ok(Value::Known(out))
    }

    /// Get a map of strings.
    pub fn string_map(&self, key: &str) -> Result<Value<BTreeMap<String, String>>, ProviderError> {
        let entries = match self.raw(key) {
            AttrValue::Null => return Ok(Value::Null),
            AttrValue::Unknown => return Ok(Value::Unknown),
            AttrValue::Map(entries) => entries,
            other => return Err(self.mismatch(key, "map", other)),
        };
        let mut out = BTreeMap::new();
        for (k, item) in entries {
            match item {
                AttrValue::String(s) => {
                    out.insert(k.clone(), s.clone());
                },
                AttrValue::Unknown => return Ok(Value::Unknown),
                other => {
                    return Err(ProviderError::type_mismatch(
                        format!("{}.{}", self.path_of(key), k),
                        "string",
                        other.type_name(),
                    ))
                },
            }
        }
        Ok(Value::Known(out))
    }

    /// Get a nested object attribute as an owned value.
    pub fn object(&self, key: &str) -> Result<Value<Object>, ProviderError> {
        match self.raw(key) {
            AttrValue::Null => Ok(Value::Null),
            AttrValue::Unknown => Ok(Value::Unknown),
            AttrValue::Object(obj) => Ok(Value::Known(obj.clone())),
            other => Err(self.mismatch(key, "object", other)),
        }
    }

    /// Descend into a nested object. Null and unknown both yield `None`;
    /// an unknown block is logged since the request will leave it out.
    pub fn nested(&self, key: &str) -> Result<Option<NestedAttrs<'a>>, ProviderError> {
        match self.raw(key) {
            AttrValue::Null => Ok(None),
            AttrValue::Unknown => {
                debug!(path = %self.path_of(key), "Nested block is unknown, leaving it out");
                Ok(None)
            },
            AttrValue::Object(obj) => Ok(Some(NestedAttrs::new(obj, self.path_of(key)))),
            other => Err(self.mismatch(key, "object", other)),
        }
    }

    /// Get a list of nested objects.
    pub fn object_list(&self, key: &str) -> Result<Value<Vec<NestedAttrs<'a>>>, ProviderError> {
        let items = match self.raw(key) {
            AttrValue::Null => return Ok(Value::Null),
            AttrValue::Unknown => return Ok(Value::Unknown),
            AttrValue::List(items) => items,
            other => return Err(self.mismatch(key, "list", other)),
        };
        let base = self.path_of(key);
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match item {
                AttrValue::Object(obj) => out.push(NestedAttrs::new(obj, format!("{}.{}", base, i))),
                AttrValue::Unknown => return Ok(Value::Unknown),
                other => {
                    return Err(ProviderError::type_mismatch(
                        format!("{}.{}", base, i),
                        "object",
                        other.type_name(),
                    ))
                },
            }
        }
        Ok(Value::Known(out))
    }

    /// Follow a chain of nested objects and read a string at the end.
    ///
    /// Absence at any level short-circuits to null.
    pub fn lookup_string(&self, keys: &[&str]) -> Result<Value<String>, ProviderError> {
        match keys {
            [] => Ok(Value::Null),
            [last] => self.string(last),
            [first, rest @ ..] => match self.nested(first)? {
                Some(nested) => nested.attrs().lookup_string(rest),
                None => Ok(Value::Null),
            },
        }
    }

    /// Get a bool, failing if it is not set.
    pub fn required_bool(&self, key: &str) -> Result<bool, ProviderError> {
        self.bool(key)?.require(&self.path_of(key))
    }

    /// Get a string, failing if it is not set.
    pub fn required_string(&self, key: &str) -> Result<String, ProviderError> {
        self.string(key)?.require(&self.path_of(key))
    }

    /// Get an `i32`, failing if it is not set.
    pub fn required_int32(&self, key: &str) -> Result<i32, ProviderError> {
        self.int32(key)?.require(&self.path_of(key))
    }

    /// Descend into a nested object, failing if it is not set.
    pub fn required_nested(&self, key: &str) -> Result<NestedAttrs<'a>, ProviderError> {
        self.nested(key)?
            .ok_or_else(|| ProviderError::MissingRequired(self.path_of(key)))
    }

    /// Follow a chain of nested objects to a string, failing if any level is
    /// not set.
    pub fn required_lookup_string(&self, keys: &[&str]) -> Result<String, ProviderError> {
        match keys {
            [] => Err(ProviderError::Sdk("empty attribute path".into())),
            [last] => self.required_string(last),
            [first, rest @ ..] => self
                .required_nested(first)?
                .attrs()
                .required_lookup_string(rest),
        }
    }
}

//! Schema types for describing resources and their nested records.
//!
//! [`AttributeType`] and [`ObjectType`] describe the shape of a value.
//! [`Schema`] adds per-attribute usage flags (required/optional/computed) for
//! the top level of a resource. Object types for nested blocks are built once
//! and shared; see the `*_TYPE` statics next to each block's converters.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Shape of an attribute value, as stored in a Model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// UTF-8 string; enums are stored as their Model strings.
    String,
    /// Integer, wide enough for every wire `int32`.
    Int64,
    /// Boolean.
    Bool,
    /// Ordered, homogeneous list.
    List(Box<AttributeType>),
    /// String-keyed, homogeneous map.
    Map(Box<AttributeType>),
    /// Nested block.
    Object(ObjectType),
}

impl AttributeType {
    /// `List` of `element_type`.
    pub fn list(element_type: AttributeType) -> Self {
        Self::List(Box::new(element_type))
    }

    /// `Map` of `element_type`.
    pub fn map(element_type: AttributeType) -> Self {
        Self::Map(Box::new(element_type))
    }

    /// A list of strings.
    pub fn string_list() -> Self {
        Self::list(Self::String)
    }

    /// A map of strings.
    pub fn string_map() -> Self {
        Self::map(Self::String)
    }
}

/// The attribute layout of a nested record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectType {
    attributes: BTreeMap<String, AttributeType>,
}

impl ObjectType {
    /// Create an empty object type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute.
    pub fn with(mut self, name: impl Into<String>, attr_type: AttributeType) -> Self {
        self.attributes.insert(name.into(), attr_type);
        self
    }

    /// Add an attribute holding an object of the given type.
    pub fn with_object(self, name: impl Into<String>, object_type: &ObjectType) -> Self {
        self.with(name, AttributeType::Object(object_type.clone()))
    }

    /// Look up the type of an attribute.
    pub fn get(&self, name: &str) -> Option<&AttributeType> {
        self.attributes.get(name)
    }

    /// Whether the type declares `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Iterate over the declared attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeType)> {
        self.attributes.iter()
    }

    /// Number of declared attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the type declares no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Who sets an attribute: the user, the service, or either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AttributeFlags {
    /// Must be set in configuration.
    pub required: bool,
    /// May be set in configuration.
    pub optional: bool,
    /// Filled in from the service's response.
    pub computed: bool,
    /// Redacted in plan output; never logged.
    pub sensitive: bool,
}

impl AttributeFlags {
    /// User-set, mandatory.
    pub fn required() -> Self {
        Self {
            required: true,
            ..Default::default()
        }
    }

    /// User-set, may be omitted.
    pub fn optional() -> Self {
        Self {
            optional: true,
            ..Default::default()
        }
    }

    /// Service-set only.
    pub fn computed() -> Self {
        Self {
            computed: true,
            ..Default::default()
        }
    }

    /// User-set, or echoed by the service when omitted.
    pub fn optional_computed() -> Self {
        Self {
            optional: true,
            computed: true,
            ..Default::default()
        }
    }

    /// Add the sensitive flag.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// One top-level attribute of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Value shape.
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    /// Usage flags.
    #[serde(flatten)]
    pub flags: AttributeFlags,
    /// Documentation shown by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A change replaces the resource instead of updating it in place.
    #[serde(default)]
    pub force_new: bool,
}

impl Attribute {
    /// An attribute with no description that updates in place.
    pub fn new(attr_type: AttributeType, flags: AttributeFlags) -> Self {
        Self {
            attr_type,
            flags,
            description: None,
            force_new: false,
        }
    }

    /// Mandatory string.
    pub fn required_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::required())
    }

    /// Optional string.
    pub fn optional_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::optional())
    }

    /// Service-set string, such as an id or URL.
    pub fn computed_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::computed())
    }

    /// Optional bool.
    pub fn optional_bool() -> Self {
        Self::new(AttributeType::Bool, AttributeFlags::optional())
    }

    /// Optional list of strings.
    pub fn optional_string_list() -> Self {
        Self::new(AttributeType::string_list(), AttributeFlags::optional())
    }

    /// Optional map of strings.
    pub fn optional_string_map() -> Self {
        Self::new(AttributeType::string_map(), AttributeFlags::optional())
    }

    /// Optional nested block.
    pub fn optional_object(object_type: &ObjectType) -> Self {
        Self::new(
            AttributeType::Object(object_type.clone()),
            AttributeFlags::optional(),
        )
    }

    /// Nested block the service fills in when omitted.
    pub fn optional_computed_object(object_type: &ObjectType) -> Self {
        Self::new(
            AttributeType::Object(object_type.clone()),
            AttributeFlags::optional_computed(),
        )
    }

    /// Service-set nested block.
    pub fn computed_object(object_type: &ObjectType) -> Self {
        Self::new(
            AttributeType::Object(object_type.clone()),
            AttributeFlags::computed(),
        )
    }

    /// Attach documentation.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the resource when this attribute changes.
    pub fn with_force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    /// Redact this attribute.
    pub fn sensitive(mut self) -> Self {
        self.flags.sensitive = true;
        self
    }
}

/// Top-level attributes of one resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Schema {
    /// State format version.
    #[serde(default)]
    pub version: u64,
    /// Attributes by name.
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// An empty schema at `version`.
    pub fn new(version: u64) -> Self {
        Self {
            version,
            attributes: BTreeMap::new(),
        }
    }

    /// An empty schema at version 0.
    pub fn v0() -> Self {
        Self::new(0)
    }

    /// Declare an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, attr: Attribute) -> Self {
        self.attributes.insert(name.into(), attr);
        self
    }

    /// The object type of a whole resource instance under this schema.
    pub fn object_type(&self) -> ObjectType {
        self.attributes
            .iter()
            .fold(ObjectType::new(), |ty, (name, attr)| {
                ty.with(name.clone(), attr.attr_type.clone())
            })
    }

    /// Names of attributes that force replacement when changed.
    pub fn force_new_attributes(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|(_, attr)| attr.force_new)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// The provider block plus every resource schema, keyed by type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProviderSchema {
    /// The provider block.
    #[serde(default)]
    pub provider: Schema,
    /// Resource schemas, e.g. `redpanda_cluster`.
    #[serde(default)]
    pub resources: HashMap<String, Schema>,
}

impl ProviderSchema {
    /// No provider block and no resources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider block.
    pub fn with_provider_config(mut self, schema: Schema) -> Self {
        self.provider = schema;
        self
    }

    /// Register a resource type.
    pub fn with_resource(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.resources.insert(name.into(), schema);
        self
    }
}

/// How serious a [`Diagnostic`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// The conversion or request failed.
    Error,
    /// Reported to the user; does not fail the operation.
    Warning,
}

/// A problem found at one attribute path, surfaced to the user by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error or warning.
    pub severity: DiagnosticSeverity,
    /// One-line description.
    pub summary: String,
    /// Longer explanation, e.g. expected vs actual shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Dotted path, e.g. `aws_private_link.status.created_at`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    /// An error with no detail or path.
    pub fn error(summary: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            summary: summary.into(),
            detail: None,
            attribute: None,
        }
    }

    /// Attach a longer explanation.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach the dotted attribute path.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Whether this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

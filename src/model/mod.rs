//! Typed Model records and their state encoding.
//!
//! A Model is the host-facing representation of one resource instance:
//! top-level attributes are statically typed [`Value`](crate::value::Value)s
//! and nested blocks are [`Object`]s shaped by the block's
//! [`ObjectType`]. Models round-trip through [`Object`] and through the JSON
//! state format, where unknown values are written as
//! [`UNKNOWN_SENTINEL`](crate::value::UNKNOWN_SENTINEL).

mod acl;
mod cluster;
mod user;

pub use acl::{acl_schema, AclModel};
pub use cluster::{cluster_schema, ClusterModel};
pub use user::{user_schema, UserModel};

use serde_json::Value as Json;

use crate::error::ProviderError;
use crate::schema::{Diagnostic, ObjectType, Schema};
use crate::validation;
use crate::value::{json_type_name, AttrValue, Object};

/// A resource Model with a fixed schema.
pub trait Model: Sized {
    /// The resource schema.
    fn schema() -> &'static Schema;

    /// The object type of a whole instance, derived from [`Model::schema`].
    fn object_type() -> &'static ObjectType;

    /// Read a Model out of a decoded instance.
    fn from_object(object: &Object) -> Result<Self, ProviderError>;

    /// Encode the Model as an instance object.
    fn to_object(&self) -> Result<Object, ProviderError>;

    /// Decode a Model from JSON state or configuration.
    fn from_json(json: &Json) -> Result<Self, ProviderError> {
        let entries = json.as_object().ok_or_else(|| {
            ProviderError::type_mismatch("", "object", json_type_name(json))
        })?;
        let object = AttrValue::object_from_json(Self::object_type(), entries, "")?;
        Self::from_object(&object)
    }

    /// Encode the Model as JSON state.
    fn to_json(&self) -> Result<Json, ProviderError> {
        Ok(self.to_object()?.to_json())
    }

    /// Check the Model's configuration against its schema.
    fn validate(&self) -> Result<Vec<Diagnostic>, ProviderError> {
        Ok(validation::validate(Self::schema(), &self.to_object()?))
    }
}

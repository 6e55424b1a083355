use std::sync::LazyLock;

use crate::accessor::Attrs;
use crate::error::ProviderError;
use crate::schema::{Attribute, AttributeFlags, AttributeType, ObjectType, Schema};
use crate::value::{Object, Value};

use super::Model;

/// A SASL/SCRAM user on a cluster's data plane.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserModel {
    /// User name; also the resource identifier.
    pub name: Value<String>,
    /// Password. Never returned by the service.
    pub password: Value<String>,
    /// `scram-sha-256` or `scram-sha-512`.
    pub mechanism: Value<String>,
    /// Data-plane API endpoint of the owning cluster.
    pub cluster_api_url: Value<String>,
    /// Whether the provider may delete the user.
    pub allow_deletion: Value<bool>,
}

static USER_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::v0()
        .with_attribute(
            "name",
            Attribute::required_string()
                .with_force_new()
                .with_description("Name of the user"),
        )
        .with_attribute(
            "password",
            Attribute::new(
                AttributeType::String,
                AttributeFlags::required().sensitive(),
            ),
        )
        .with_attribute(
            "mechanism",
            Attribute::new(AttributeType::String, AttributeFlags::optional_computed())
                .with_description("scram-sha-256 or scram-sha-512"),
        )
        .with_attribute(
            "cluster_api_url",
            Attribute::required_string().with_force_new(),
        )
        .with_attribute("allow_deletion", Attribute::optional_bool())
});

static USER_OBJECT_TYPE: LazyLock<ObjectType> = LazyLock::new(|| USER_SCHEMA.object_type());

/// Schema of the `redpanda_user` resource.
pub fn user_schema() -> &'static Schema {
    &USER_SCHEMA
}

impl Model for UserModel {
    fn schema() -> &'static Schema {
        &USER_SCHEMA
    }

    fn object_type() -> &'static ObjectType {
        &USER_OBJECT_TYPE
    }

    fn from_object(object: &Object) -> Result<Self, ProviderError> {
        let a = Attrs::root(object);
        Ok(Self {
            name: a.string("name")?,
            password: a.string("password")?,
            mechanism: a.string("mechanism")?,
            cluster_api_url: a.string("cluster_api_url")?,
            allow_deletion: a.bool("allow_deletion")?,
        })
    }

    fn to_object(&self) -> Result<Object, ProviderError> {
        Object::builder(&USER_OBJECT_TYPE)
            .set("name", self.name.clone())
            .set("password", self.password.clone())
            .set("mechanism", self.mechanism.clone())
            .set("cluster_api_url", self.cluster_api_url.clone())
            .set("allow_deletion", self.allow_deletion.clone())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_password_is_sensitive() {
        let attr = user_schema().attributes.get("password").unwrap();
        assert!(attr.flags.sensitive);
        assert!(attr.flags.required);
    }

    #[test]
    fn test_from_json_missing_attributes_are_null() {
        let model = UserModel::from_json(&json!({
            "name": "alice",
            "cluster_api_url": "https://api.example.com"
        }))
        .unwrap();
        assert_eq!(model.name, Value::Known("alice".into()));
        assert!(model.password.is_null());
        assert!(model.allow_deletion.is_null());
    }

    #[test]
    fn test_validate_requires_password() {
        let model = UserModel {
            name: Value::Known("alice".into()),
            cluster_api_url: Value::Known("https://api.example.com".into()),
            ..Default::default()
        };
        let diags = model.validate().unwrap();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].attribute.as_deref(), Some("password"));
    }
}

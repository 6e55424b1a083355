use std::sync::LazyLock;

use crate::accessor::Attrs;
use crate::error::ProviderError;
use crate::schema::{Attribute, ObjectType, Schema};
use crate::value::{Object, Value};

use super::Model;

/// A single Kafka ACL binding.
///
/// Every attribute forces replacement; ACLs are never updated in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AclModel {
    /// `TOPIC`, `GROUP`, `CLUSTER`, ...
    pub resource_type: Value<String>,
    /// Name of the resource the ACL applies to.
    pub resource_name: Value<String>,
    /// `LITERAL`, `PREFIXED`, ...
    pub resource_pattern_type: Value<String>,
    /// Principal, e.g. `User:alice`.
    pub principal: Value<String>,
    /// Host the principal connects from, `*` for any.
    pub host: Value<String>,
    /// `READ`, `WRITE`, `ALL`, ...
    pub operation: Value<String>,
    /// `ALLOW` or `DENY`.
    pub permission_type: Value<String>,
    /// Data-plane API endpoint of the owning cluster.
    pub cluster_api_url: Value<String>,
}

pub(crate) const ACL_ATTRIBUTES: [&str; 8] = [
    "resource_type",
    "resource_name",
    "resource_pattern_type",
    "principal",
    "host",
    "operation",
    "permission_type",
    "cluster_api_url",
];

static ACL_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    ACL_ATTRIBUTES.iter().fold(Schema::v0(), |schema, name| {
        schema.with_attribute(*name, Attribute::required_string().with_force_new())
    })
});

static ACL_OBJECT_TYPE: LazyLock<ObjectType> = LazyLock::new(|| ACL_SCHEMA.object_type());

/// Schema of the `redpanda_acl` resource.
pub fn acl_schema() -> &'static Schema {
    &ACL_SCHEMA
}

impl Model for AclModel {
    fn schema() -> &'static Schema {
        &ACL_SCHEMA
    }

    fn object_type() -> &'static ObjectType {
        &ACL_OBJECT_TYPE
    }

    fn from_object(object: &Object) -> Result<Self, ProviderError> {
        let a = Attrs::root(object);
        Ok(Self {
            resource_type: a.string("resource_type")?,
            resource_name: a.string("resource_name")?,
            resource_pattern_type: a.string("resource_pattern_type")?,
            principal: a.string("principal")?,
            host: a.string("host")?,
            operation: a.string("operation")?,
            permission_type: a.string("permission_type")?,
            cluster_api_url: a.string("cluster_api_url")?,
        })
    }

    fn to_object(&self) -> Result<Object, ProviderError> {
        Object::builder(&ACL_OBJECT_TYPE)
            .set("resource_type", self.resource_type.clone())
            .set("resource_name", self.resource_name.clone())
            .set("resource_pattern_type", self.resource_pattern_type.clone())
            .set("principal", self.principal.clone())
            .set("host", self.host.clone())
            .set("operation", self.operation.clone())
            .set("permission_type", self.permission_type.clone())
            .set("cluster_api_url", self.cluster_api_url.clone())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_attribute_forces_replacement() {
        let mut force_new = acl_schema().force_new_attributes();
        force_new.sort_unstable();
        let mut expected = ACL_ATTRIBUTES.to_vec();
        expected.sort_unstable();
        assert_eq!(force_new, expected);
    }

    #[test]
    fn test_object_round_trip() {
        let model = AclModel {
            resource_type: Value::Known("TOPIC".into()),
            resource_name: Value::Known("orders".into()),
            resource_pattern_type: Value::Known("LITERAL".into()),
            principal: Value::Known("User:alice".into()),
            host: Value::Known("*".into()),
            operation: Value::Known("READ".into()),
            permission_type: Value::Known("ALLOW".into()),
            cluster_api_url: Value::Unknown,
        };
        let object = model.to_object().unwrap();
        assert_eq!(AclModel::from_object(&object).unwrap(), model);
    }
}

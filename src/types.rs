//! String conversions for wire enums.
//!
//! Models carry enums as the strings users write in configuration
//! (`"aws"`, `"dedicated"`, `"MONDAY"`, `"scram-sha-256"`); the wire carries
//! the generated `i32` enumerations. Each enum lists its accepted strings
//! once in a table and gets both directions from [`ModelEnum`].

use crate::error::ProviderError;
use crate::generated::controlplane::{
    CloudProvider, ClusterState, ClusterType, ConnectionType, DayOfWeek,
};
use crate::generated::dataplane::{
    AclOperation, AclPermissionType, AclResourcePatternType, AclResourceType, SaslMechanism,
};
use crate::value::Value;

/// A wire enumeration with a string form used in Models.
///
/// The `Unspecified` zero value has no string form: it is rejected on the
/// way in and reads back as null.
pub trait ModelEnum: Copy + PartialEq + Into<i32> + TryFrom<i32> + 'static {
    /// Human-readable name used in error messages.
    const KIND: &'static str;

    /// Every variant with a string form, in declaration order.
    const VARIANTS: &'static [(Self, &'static str)];

    /// The Model string for this variant, if it has one.
    fn model_str(self) -> Option<&'static str> {
        Self::VARIANTS
            .iter()
            .find(|(variant, _)| *variant == self)
            .map(|(_, s)| *s)
    }

    /// Parse a Model string.
    fn from_model_str(value: &str) -> Result<Self, ProviderError> {
        Self::VARIANTS
            .iter()
            .find(|(_, s)| *s == value)
            .map(|(variant, _)| *variant)
            .ok_or_else(|| {
                let accepted: Vec<&str> = Self::VARIANTS.iter().map(|(_, s)| *s).collect();
                ProviderError::Validation(format!(
                    "invalid {} '{}': expected one of {}",
                    Self::KIND,
                    value,
                    accepted.join(", ")
                ))
            })
    }
}

macro_rules! model_enum {
    ($ty:ty, $kind:literal, { $($variant:ident => $s:literal),+ $(,)? }) => {
        impl ModelEnum for $ty {
            const KIND: &'static str = $kind;
            const VARIANTS: &'static [(Self, &'static str)] = &[$((<$ty>::$variant, $s)),+];
        }
    };
}

model_enum!(CloudProvider, "cloud provider", {
    Aws => "aws",
    Gcp => "gcp",
    Azure => "azure",
});

model_enum!(ClusterType, "cluster type", {
    Dedicated => "dedicated",
    Byoc => "byoc",
});

model_enum!(ConnectionType, "connection type", {
    Public => "public",
    Private => "private",
});

model_enum!(ClusterState, "cluster state", {
    Creating => "creating",
    Ready => "ready",
    Deleting => "deleting",
    Failed => "failed",
    Upgrading => "upgrading",
});

model_enum!(DayOfWeek, "day of week", {
    Monday => "MONDAY",
    Tuesday => "TUESDAY",
    Wednesday => "WEDNESDAY",
    Thursday => "THURSDAY",
    Friday => "FRIDAY",
    Saturday => "SATURDAY",
    Sunday => "SUNDAY",
});

model_enum!(SaslMechanism, "SASL mechanism", {
    ScramSha256 => "scram-sha-256",
    ScramSha512 => "scram-sha-512",
});

model_enum!(AclResourceType, "ACL resource type", {
    Any => "ANY",
    Topic => "TOPIC",
    Group => "GROUP",
    Cluster => "CLUSTER",
    TransactionalId => "TRANSACTIONAL_ID",
    DelegationToken => "DELEGATION_TOKEN",
    User => "USER",
});

model_enum!(AclResourcePatternType, "ACL resource pattern type", {
    Any => "ANY",
    Match => "MATCH",
    Literal => "LITERAL",
    Prefixed => "PREFIXED",
});

model_enum!(AclOperation, "ACL operation", {
    Any => "ANY",
    All => "ALL",
    Read => "READ",
    Write => "WRITE",
    Create => "CREATE",
    Remove => "REMOVE",
    Alter => "ALTER",
    Describe => "DESCRIBE",
    ClusterAction => "CLUSTER_ACTION",
    DescribeConfigs => "DESCRIBE_CONFIGS",
    AlterConfigs => "ALTER_CONFIGS",
    IdempotentWrite => "IDEMPOTENT_WRITE",
    CreateTokens => "CREATE_TOKENS",
    DescribeTokens => "DESCRIBE_TOKENS",
});

model_enum!(AclPermissionType, "ACL permission type", {
    Any => "ANY",
    Deny => "DENY",
    Allow => "ALLOW",
});

/// Parse a Model string into the wire `i32` for `E`.
pub fn to_wire<E: ModelEnum>(value: &str) -> Result<i32, ProviderError> {
    E::from_model_str(value).map(Into::into)
}

/// Parse an optional Model string; null and unknown leave the wire field unset.
pub fn value_to_wire<E: ModelEnum>(value: &Value<String>) -> Result<i32, ProviderError> {
    match value.as_option() {
        Some(s) => to_wire::<E>(s),
        None => Ok(0),
    }
}

/// Decode a wire `i32` into its Model string.
///
/// The zero value reads as null. A value this build does not know is a
/// validation error naming the field.
pub fn from_wire<E: ModelEnum>(value: i32, path: &str) -> Result<Value<String>, ProviderError> {
    if value == 0 {
        return Ok(Value::Null);
    }
    let variant = E::try_from(value).map_err(|_| {
        ProviderError::Validation(format!("{}: unknown {} value {}", path, E::KIND, value))
    })?;
    Ok(variant
        .model_str()
        .map(|s| Value::Known(s.to_string()))
        .unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_provider_round_trip() {
        assert_eq!(to_wire::<CloudProvider>("gcp").unwrap(), CloudProvider::Gcp as i32);
        assert_eq!(
            from_wire::<CloudProvider>(CloudProvider::Azure as i32, "cloud_provider").unwrap(),
            Value::Known("azure".to_string())
        );
    }

    #[test]
    fn test_unspecified_reads_as_null() {
        assert_eq!(
            from_wire::<ClusterType>(0, "cluster_type").unwrap(),
            Value::Null
        );
        assert!(to_wire::<ClusterType>("unspecified").is_err());
    }

    #[test]
    fn test_unknown_string_lists_accepted_values() {
        let err = to_wire::<ConnectionType>("vpn").unwrap_err();
        match err {
            ProviderError::Validation(msg) => {
                assert!(msg.contains("connection type"));
                assert!(msg.contains("public, private"));
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_wire_value() {
        let err = from_wire::<ClusterState>(42, "state").unwrap_err();
        assert!(matches!(err, ProviderError::Validation(ref m) if m.starts_with("state:")));
    }

    #[test]
    fn test_case_conventions() {
        assert_eq!(DayOfWeek::Friday.model_str(), Some("FRIDAY"));
        assert_eq!(SaslMechanism::ScramSha512.model_str(), Some("scram-sha-512"));
        assert_eq!(
            AclOperation::from_model_str("IDEMPOTENT_WRITE").unwrap(),
            AclOperation::IdempotentWrite
        );
        assert_eq!(AclPermissionType::Unspecified.model_str(), None);
        assert!(AclResourceType::from_model_str("topic").is_err());
    }

    #[test]
    fn test_value_to_wire_skips_null() {
        assert_eq!(value_to_wire::<AclResourcePatternType>(&Value::Null).unwrap(), 0);
        assert_eq!(
            value_to_wire::<AclResourcePatternType>(&Value::Known("PREFIXED".into())).unwrap(),
            AclResourcePatternType::Prefixed as i32
        );
    }
}

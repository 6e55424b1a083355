//! Conversions for data-plane ACLs.
//!
//! An ACL has no server-side identifier. Reads list every binding matching
//! a filter built from the prior Model and pick the exact one back out.

use tracing::debug;

use crate::cluster::Collector;
use crate::error::ProviderError;
use crate::generated::dataplane::{
    AclFilter, AclOperation, AclPermissionType, AclPolicy, AclResource, AclResourcePatternType,
    AclResourceType, CreateAclRequest, ListAclsResponse,
};
use crate::model::AclModel;
use crate::types::{from_wire, to_wire};
use crate::value::Value;

/// Build the create request for an ACL. Every attribute is required.
pub fn build_create_acl_request(model: &AclModel) -> Result<CreateAclRequest, ProviderError> {
    let resource_type = model.resource_type.clone().require("resource_type")?;
    let pattern_type = model
        .resource_pattern_type
        .clone()
        .require("resource_pattern_type")?;
    let operation = model.operation.clone().require("operation")?;
    let permission_type = model.permission_type.clone().require("permission_type")?;

    Ok(CreateAclRequest {
        resource_type: to_wire::<AclResourceType>(&resource_type)?,
        resource_name: model.resource_name.clone().require("resource_name")?,
        resource_pattern_type: to_wire::<AclResourcePatternType>(&pattern_type)?,
        principal: model.principal.clone().require("principal")?,
        host: model.host.clone().require("host")?,
        operation: to_wire::<AclOperation>(&operation)?,
        permission_type: to_wire::<AclPermissionType>(&permission_type)?,
    })
}

/// Build a filter selecting exactly the binding described by `model`.
///
/// Used for both reads and deletes.
pub fn build_acl_filter(model: &AclModel) -> Result<AclFilter, ProviderError> {
    let req = build_create_acl_request(model)?;
    Ok(AclFilter {
        resource_type: req.resource_type,
        resource_name: Some(req.resource_name),
        resource_pattern_type: req.resource_pattern_type,
        principal: Some(req.principal),
        host: Some(req.host),
        operation: req.operation,
        permission_type: req.permission_type,
    })
}

fn resource_matches(resource: &AclResource, want: &CreateAclRequest) -> bool {
    resource.resource_type == want.resource_type
        && resource.resource_name == want.resource_name
        && resource.resource_pattern_type == want.resource_pattern_type
}

fn policy_matches(policy: &AclPolicy, want: &CreateAclRequest) -> bool {
    policy.principal == want.principal
        && policy.host == want.host
        && policy.operation == want.operation
        && policy.permission_type == want.permission_type
}

/// Find the binding described by `prior` in a list response and map it
/// into a Model.
///
/// Returns [`ProviderError::NotFound`] when nothing matches, which the
/// resource layer treats as the ACL having been removed out of band.
pub fn acl_model_from_list(
    prior: &AclModel,
    response: &ListAclsResponse,
) -> Result<AclModel, ProviderError> {
    let want = build_create_acl_request(prior)?;
    let found = response
        .resources
        .iter()
        .filter(|resource| resource_matches(resource, &want))
        .find_map(|resource| {
            resource
                .acls
                .iter()
                .find(|policy| policy_matches(policy, &want))
                .map(|policy| (resource, policy))
        });
    let Some((resource, policy)) = found else {
        debug!(
            principal = %want.principal,
            resource_name = %want.resource_name,
            "No matching ACL in list response"
        );
        return Err(ProviderError::NotFound(format!(
            "ACL for principal '{}' on resource '{}'",
            want.principal, want.resource_name
        )));
    };

    let mut c = Collector::default();
    let model = AclModel {
        resource_type: c.value(
            "resource_type",
            from_wire::<AclResourceType>(resource.resource_type, "resource_type"),
        ),
        resource_name: Value::Known(resource.resource_name.clone()),
        resource_pattern_type: c.value(
            "resource_pattern_type",
            from_wire::<AclResourcePatternType>(
                resource.resource_pattern_type,
                "resource_pattern_type",
            ),
        ),
        principal: Value::Known(policy.principal.clone()),
        host: Value::Known(policy.host.clone()),
        operation: c.value(
            "operation",
            from_wire::<AclOperation>(policy.operation, "operation"),
        ),
        permission_type: c.value(
            "permission_type",
            from_wire::<AclPermissionType>(policy.permission_type, "permission_type"),
        ),
        cluster_api_url: prior.cluster_api_url.clone(),
    };
    c.finish(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_orders() -> AclModel {
        AclModel {
            resource_type: Value::Known("TOPIC".into()),
            resource_name: Value::Known("orders".into()),
            resource_pattern_type: Value::Known("LITERAL".into()),
            principal: Value::Known("User:alice".into()),
            host: Value::Known("*".into()),
            operation: Value::Known("READ".into()),
            permission_type: Value::Known("ALLOW".into()),
            cluster_api_url: Value::Known("https://api.example.com".into()),
        }
    }

    fn policy(principal: &str, operation: AclOperation) -> AclPolicy {
        AclPolicy {
            principal: principal.into(),
            host: "*".into(),
            operation: operation as i32,
            permission_type: AclPermissionType::Allow as i32,
        }
    }

    fn orders(acls: Vec<AclPolicy>) -> AclResource {
        AclResource {
            resource_type: AclResourceType::Topic as i32,
            resource_name: "orders".into(),
            resource_pattern_type: AclResourcePatternType::Literal as i32,
            acls,
        }
    }

    #[test]
    fn test_create_request() {
        let req = build_create_acl_request(&read_orders()).unwrap();
        assert_eq!(req.resource_type, AclResourceType::Topic as i32);
        assert_eq!(req.operation, AclOperation::Read as i32);
        assert_eq!(req.permission_type, AclPermissionType::Allow as i32);
    }

    #[test]
    fn test_create_requires_host() {
        let model = AclModel {
            host: Value::Null,
            ..read_orders()
        };
        let err = build_create_acl_request(&model).unwrap_err();
        assert!(matches!(err, ProviderError::MissingRequired(ref p) if p == "host"));
    }

    #[test]
    fn test_filter_is_exact() {
        let filter = build_acl_filter(&read_orders()).unwrap();
        assert_eq!(filter.resource_name.as_deref(), Some("orders"));
        assert_eq!(filter.principal.as_deref(), Some("User:alice"));
        assert_eq!(filter.host.as_deref(), Some("*"));
    }

    #[test]
    fn test_from_list_picks_matching_policy() {
        let response = ListAclsResponse {
            resources: vec![orders(vec![
                policy("User:bob", AclOperation::Read),
                policy("User:alice", AclOperation::Write),
                policy("User:alice", AclOperation::Read),
            ])],
        };
        let model = acl_model_from_list(&read_orders(), &response).unwrap();
        assert_eq!(model, read_orders());
    }

    #[test]
    fn test_from_list_not_found() {
        let response = ListAclsResponse {
            resources: vec![orders(vec![policy("User:alice", AclOperation::Write)])],
        };
        let err = acl_model_from_list(&read_orders(), &response).unwrap_err();
        assert!(err.is_not_found());

        let empty = ListAclsResponse::default();
        assert!(acl_model_from_list(&read_orders(), &empty)
            .unwrap_err()
            .is_not_found());
    }
}

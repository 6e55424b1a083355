//! Customer-managed resources for bring-your-own-VPC clusters.
//!
//! The Model block holds one sub-block per cloud (`aws`, `gcp`); the wire
//! holds a oneof. Which sub-block is allowed follows the cluster's
//! `cloud_provider`.

use std::sync::LazyLock;

use tracing::warn;

use crate::accessor::Attrs;
use crate::error::ProviderError;
use crate::generated::controlplane::{
    customer_managed_resources::CloudProvider as CmrProvider, AwsArn, CloudProvider,
    CustomerManagedAws, CustomerManagedGcp, CustomerManagedResources, GcpName, GcpServiceAccount,
    GcpSubnet,
};
use crate::schema::{AttributeType, ObjectType};
use crate::value::{Object, Value};

/// Attribute names of the AWS sub-block, in wire order. Each holds `{arn}`.
pub const AWS_ARN_ATTRIBUTES: [&str; 13] = [
    "agent_instance_profile",
    "connectors_node_group_instance_profile",
    "utility_node_group_instance_profile",
    "redpanda_node_group_instance_profile",
    "k8s_cluster_role",
    "redpanda_agent_security_group",
    "connectors_security_group",
    "redpanda_node_group_security_group",
    "utility_security_group",
    "cluster_security_group",
    "node_security_group",
    "cloud_storage_bucket",
    "permissions_boundary_policy",
];

const GCP_SERVICE_ACCOUNT_ATTRIBUTES: [&str; 5] = [
    "agent_service_account",
    "console_service_account",
    "connector_service_account",
    "redpanda_cluster_service_account",
    "gke_service_account",
];

static ARN_TYPE: LazyLock<ObjectType> =
    LazyLock::new(|| ObjectType::new().with("arn", AttributeType::String));

static GCP_NAME_TYPE: LazyLock<ObjectType> =
    LazyLock::new(|| ObjectType::new().with("name", AttributeType::String));

static GCP_SERVICE_ACCOUNT_TYPE: LazyLock<ObjectType> =
    LazyLock::new(|| ObjectType::new().with("email", AttributeType::String));

static GCP_SUBNET_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with("name", AttributeType::String)
        .with_object("secondary_ipv4_range_pods", &GCP_NAME_TYPE)
        .with_object("secondary_ipv4_range_services", &GCP_NAME_TYPE)
        .with("k8s_master_ipv4_range", AttributeType::String)
});

/// The `customer_managed_resources.aws` sub-block.
pub static CMR_AWS_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    AWS_ARN_ATTRIBUTES
        .iter()
        .fold(ObjectType::new(), |ty, name| ty.with_object(*name, &ARN_TYPE))
});

/// The `customer_managed_resources.gcp` sub-block.
pub static CMR_GCP_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    GCP_SERVICE_ACCOUNT_ATTRIBUTES
        .iter()
        .fold(ObjectType::new(), |ty, name| {
            ty.with_object(*name, &GCP_SERVICE_ACCOUNT_TYPE)
        })
        .with_object("subnet", &GCP_SUBNET_TYPE)
        .with_object("tiered_storage_bucket", &GCP_NAME_TYPE)
        .with("psc_nat_subnet_name", AttributeType::String)
});

/// The `customer_managed_resources` block.
pub static CMR_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with_object("aws", &CMR_AWS_TYPE)
        .with_object("gcp", &CMR_GCP_TYPE)
});

/// Build customer-managed resources for a cluster on `provider`.
///
/// A null block yields `None`, as does a block with neither sub-block set.
/// A sub-block for a cloud other than `provider` is a validation error, and
/// Azure clusters do not support customer-managed resources at all.
pub fn customer_managed_resources_spec(
    provider: CloudProvider,
    block: &Value<Object>,
) -> Result<Option<CustomerManagedResources>, ProviderError> {
    let Some(object) = block.as_option() else {
        return Ok(None);
    };
    if provider == CloudProvider::Azure {
        return Err(ProviderError::Unsupported(
            "customer_managed_resources on azure clusters".into(),
        ));
    }
    let attrs = Attrs::at(object, "customer_managed_resources");
    let aws = attrs.nested("aws")?;
    let gcp = attrs.nested("gcp")?;

    let cloud_provider = match (provider, aws, gcp) {
        (CloudProvider::Aws, Some(aws), None) => Some(CmrProvider::Aws(aws_spec(aws.attrs())?)),
        (CloudProvider::Gcp, None, Some(gcp)) => Some(CmrProvider::Gcp(gcp_spec(gcp.attrs())?)),
        (_, None, None) => None,
        (provider, aws, gcp) => {
            let mut set = Vec::new();
            if aws.is_some() {
                set.push("aws");
            }
            if gcp.is_some() {
                set.push("gcp");
            }
            return Err(ProviderError::Validation(format!(
                "customer_managed_resources: cluster cloud provider is {} but {} set",
                provider_label(provider),
                set.join(" and ")
            )));
        },
    };
    Ok(cloud_provider.map(|cloud_provider| CustomerManagedResources {
        cloud_provider: Some(cloud_provider),
    }))
}

fn provider_label(provider: CloudProvider) -> &'static str {
    match provider {
        CloudProvider::Aws => "aws",
        CloudProvider::Gcp => "gcp",
        CloudProvider::Azure => "azure",
        CloudProvider::Unspecified => "not set",
    }
}

fn aws_spec(attrs: Attrs<'_>) -> Result<CustomerManagedAws, ProviderError> {
    let arn = |name: &str| -> Result<Option<AwsArn>, ProviderError> {
        Ok(Some(AwsArn {
            arn: attrs.required_lookup_string(&[name, "arn"])?,
        }))
    };
    Ok(CustomerManagedAws {
        agent_instance_profile: arn("agent_instance_profile")?,
        connectors_node_group_instance_profile: arn("connectors_node_group_instance_profile")?,
        utility_node_group_instance_profile: arn("utility_node_group_instance_profile")?,
        redpanda_node_group_instance_profile: arn("redpanda_node_group_instance_profile")?,
        k8s_cluster_role: arn("k8s_cluster_role")?,
        redpanda_agent_security_group: arn("redpanda_agent_security_group")?,
        connectors_security_group: arn("connectors_security_group")?,
        redpanda_node_group_security_group: arn("redpanda_node_group_security_group")?,
        utility_security_group: arn("utility_security_group")?,
        cluster_security_group: arn("cluster_security_group")?,
        node_security_group: arn("node_security_group")?,
        cloud_storage_bucket: arn("cloud_storage_bucket")?,
        permissions_boundary_policy: arn("permissions_boundary_policy")?,
    })
}

fn gcp_spec(attrs: Attrs<'_>) -> Result<CustomerManagedGcp, ProviderError> {
    let subnet = attrs.required_nested("subnet")?;
    let subnet = subnet.attrs();
    let service_account = |name: &str| -> Result<Option<GcpServiceAccount>, ProviderError> {
        Ok(Some(GcpServiceAccount {
            email: attrs.required_lookup_string(&[name, "email"])?,
        }))
    };
    Ok(CustomerManagedGcp {
        subnet: Some(GcpSubnet {
            name: subnet.required_string("name")?,
            secondary_ipv4_range_pods: Some(GcpName {
                name: subnet.required_lookup_string(&["secondary_ipv4_range_pods", "name"])?,
            }),
            secondary_ipv4_range_services: Some(GcpName {
                name: subnet
                    .required_lookup_string(&["secondary_ipv4_range_services", "name"])?,
            }),
            k8s_master_ipv4_range: subnet.required_string("k8s_master_ipv4_range")?,
        }),
        agent_service_account: service_account("agent_service_account")?,
        console_service_account: service_account("console_service_account")?,
        connector_service_account: service_account("connector_service_account")?,
        redpanda_cluster_service_account: service_account("redpanda_cluster_service_account")?,
        gke_service_account: service_account("gke_service_account")?,
        tiered_storage_bucket: Some(GcpName {
            name: attrs.required_lookup_string(&["tiered_storage_bucket", "name"])?,
        }),
        psc_nat_subnet_name: attrs.string("psc_nat_subnet_name")?.unwrap_or_default(),
    })
}

/// Map wire customer-managed resources to a Model block.
pub fn customer_managed_resources_object(
    cmr: Option<&CustomerManagedResources>,
) -> Result<Value<Object>, ProviderError> {
    let Some(provider) = cmr.and_then(|cmr| cmr.cloud_provider.as_ref()) else {
        return Ok(Value::Null);
    };
    let (aws, gcp) = match provider {
        CmrProvider::Aws(aws) => (Value::Known(aws_object(aws)?), Value::Null),
        CmrProvider::Gcp(gcp) => (Value::Null, Value::Known(gcp_object(gcp)?)),
    };
    Object::builder(&CMR_TYPE)
        .set("aws", aws)
        .set("gcp", gcp)
        .build()
        .map(Value::Known)
}

fn named(object_type: &ObjectType, key: &str, value: Option<&str>) -> Result<Value<Object>, ProviderError> {
    match value {
        Some(value) => Object::builder(object_type)
            .set(key, value)
            .build()
            .map(Value::Known),
        None => Ok(Value::Null),
    }
}

fn aws_object(aws: &CustomerManagedAws) -> Result<Object, ProviderError> {
    let arns = [
        &aws.agent_instance_profile,
        &aws.connectors_node_group_instance_profile,
        &aws.utility_node_group_instance_profile,
        &aws.redpanda_node_group_instance_profile,
        &aws.k8s_cluster_role,
        &aws.redpanda_agent_security_group,
        &aws.connectors_security_group,
        &aws.redpanda_node_group_security_group,
        &aws.utility_security_group,
        &aws.cluster_security_group,
        &aws.node_security_group,
        &aws.cloud_storage_bucket,
        &aws.permissions_boundary_policy,
    ];
    let mut builder = Object::builder(&CMR_AWS_TYPE);
    for (name, arn) in AWS_ARN_ATTRIBUTES.iter().zip(arns) {
        builder = builder.set(name, named(&ARN_TYPE, "arn", arn.as_ref().map(|a| a.arn.as_str()))?);
    }
    builder.build()
}

fn gcp_object(gcp: &CustomerManagedGcp) -> Result<Object, ProviderError> {
    let subnet = match &gcp.subnet {
        Some(subnet) => Value::Known(
            Object::builder(&GCP_SUBNET_TYPE)
                .set("name", subnet.name.as_str())
                .set(
                    "secondary_ipv4_range_pods",
                    named(
                        &GCP_NAME_TYPE,
                        "name",
                        subnet.secondary_ipv4_range_pods.as_ref().map(|n| n.name.as_str()),
                    )?,
                )
                .set(
                    "secondary_ipv4_range_services",
                    named(
                        &GCP_NAME_TYPE,
                        "name",
                        subnet
                            .secondary_ipv4_range_services
                            .as_ref()
                            .map(|n| n.name.as_str()),
                    )?,
                )
                .set("k8s_master_ipv4_range", subnet.k8s_master_ipv4_range.as_str())
                .build()?,
        ),
        None => Value::Null,
    };
    let accounts = [
        &gcp.agent_service_account,
        &gcp.console_service_account,
        &gcp.connector_service_account,
        &gcp.redpanda_cluster_service_account,
        &gcp.gke_service_account,
    ];
    let mut builder = Object::builder(&CMR_GCP_TYPE).set("subnet", subnet);
    for (name, account) in GCP_SERVICE_ACCOUNT_ATTRIBUTES.iter().zip(accounts) {
        builder = builder.set(
            name,
            named(
                &GCP_SERVICE_ACCOUNT_TYPE,
                "email",
                account.as_ref().map(|a| a.email.as_str()),
            )?,
        );
    }
    let psc_nat_subnet_name = if gcp.psc_nat_subnet_name.is_empty() {
        Value::Null
    } else {
        Value::Known(gcp.psc_nat_subnet_name.clone())
    };
    if gcp.subnet.is_none() {
        warn!("customer_managed_resources.gcp returned without a subnet");
    }
    builder
        .set(
            "tiered_storage_bucket",
            named(
                &GCP_NAME_TYPE,
                "name",
                gcp.tiered_storage_bucket.as_ref().map(|n| n.name.as_str()),
            )?,
        )
        .set("psc_nat_subnet_name", psc_nat_subnet_name)
        .build()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A fully populated AWS sub-block.
    pub(crate) fn aws_block(agent_arn: &str) -> Object {
        let mut builder = Object::builder(&CMR_AWS_TYPE);
        for name in AWS_ARN_ATTRIBUTES {
            let arn = if name == "agent_instance_profile" {
                agent_arn.to_string()
            } else {
                format!("arn:aws:iam::123456789012:{}", name)
            };
            builder = builder.set(
                name,
                Object::builder(&ARN_TYPE).set("arn", arn).build().unwrap(),
            );
        }
        builder.build().unwrap()
    }

    fn gcp_block() -> Object {
        let name = |n: &str| Object::builder(&GCP_NAME_TYPE).set("name", n).build().unwrap();
        let subnet = Object::builder(&GCP_SUBNET_TYPE)
            .set("name", "byoc-subnet")
            .set("secondary_ipv4_range_pods", name("pods"))
            .set("secondary_ipv4_range_services", name("services"))
            .set("k8s_master_ipv4_range", "10.0.7.240/28")
            .build()
            .unwrap();
        let mut builder = Object::builder(&CMR_GCP_TYPE)
            .set("subnet", subnet)
            .set("tiered_storage_bucket", name("tiered"))
            .set("psc_nat_subnet_name", Value::<String>::Null);
        for account in GCP_SERVICE_ACCOUNT_ATTRIBUTES {
            builder = builder.set(
                account,
                Object::builder(&GCP_SERVICE_ACCOUNT_TYPE)
                    .set("email", format!("{}@acme.iam.gserviceaccount.com", account))
                    .build()
                    .unwrap(),
            );
        }
        builder.build().unwrap()
    }

    pub(crate) fn cmr_block(aws: Value<Object>, gcp: Value<Object>) -> Value<Object> {
        Value::Known(
            Object::builder(&CMR_TYPE)
                .set("aws", aws)
                .set("gcp", gcp)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_aws_block() {
        let block = cmr_block(Value::Known(aws_block("arn:agent")), Value::Null);
        let cmr = customer_managed_resources_spec(CloudProvider::Aws, &block)
            .unwrap()
            .unwrap();
        let Some(CmrProvider::Aws(aws)) = cmr.cloud_provider else {
            panic!("expected aws");
        };
        assert_eq!(aws.agent_instance_profile.unwrap().arn, "arn:agent");
        assert_eq!(
            aws.permissions_boundary_policy.unwrap().arn,
            "arn:aws:iam::123456789012:permissions_boundary_policy"
        );
    }

    #[test]
    fn test_provider_mismatch_is_rejected() {
        let block = cmr_block(Value::Null, Value::Known(gcp_block()));
        let err = customer_managed_resources_spec(CloudProvider::Aws, &block).unwrap_err();
        match err {
            ProviderError::Validation(msg) => {
                assert!(msg.contains("aws"), "{msg}");
                assert!(msg.contains("gcp set"), "{msg}");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_azure_is_unsupported() {
        let block = cmr_block(Value::Null, Value::Null);
        let err = customer_managed_resources_spec(CloudProvider::Azure, &block).unwrap_err();
        assert!(matches!(err, ProviderError::Unsupported(_)));
    }

    #[test]
    fn test_empty_block_yields_nothing() {
        let block = cmr_block(Value::Null, Value::Null);
        assert_eq!(
            customer_managed_resources_spec(CloudProvider::Gcp, &block).unwrap(),
            None
        );
        assert_eq!(
            customer_managed_resources_spec(CloudProvider::Gcp, &Value::Null).unwrap(),
            None
        );
    }

    #[test]
    fn test_missing_arn_names_path() {
        let mut attrs = aws_block("arn:agent").attributes().clone();
        attrs.insert("k8s_cluster_role".into(), crate::value::AttrValue::Null);
        let aws = Object::new(&CMR_AWS_TYPE, attrs).unwrap();
        let block = cmr_block(Value::Known(aws), Value::Null);
        let err = customer_managed_resources_spec(CloudProvider::Aws, &block).unwrap_err();
        assert!(
            matches!(err, ProviderError::MissingRequired(ref p)
                if p == "customer_managed_resources.aws.k8s_cluster_role"),
            "{err:?}"
        );
    }

    #[test]
    fn test_gcp_round_trip() {
        let block = cmr_block(Value::Null, Value::Known(gcp_block()));
        let wire = customer_managed_resources_spec(CloudProvider::Gcp, &block).unwrap();
        let object = customer_managed_resources_object(wire.as_ref()).unwrap();
        assert_eq!(object, block);
    }

    #[test]
    fn test_aws_round_trip() {
        let block = cmr_block(Value::Known(aws_block("arn:agent")), Value::Null);
        let wire = customer_managed_resources_spec(CloudProvider::Aws, &block).unwrap();
        assert_eq!(customer_managed_resources_object(wire.as_ref()).unwrap(), block);
    }
}

//! End-to-end cluster conversions: Model to wire, wire to Model, and the
//! update masks computed between them.

use redpanda_provider::accessor::Attrs;
use redpanda_provider::cluster::{
    build_create_request, build_model, build_update_request, AWS_ARN_ATTRIBUTES,
};
use redpanda_provider::diff::{generate_update, MaskConvention};
use redpanda_provider::generated::controlplane::{
    customer_managed_resources::CloudProvider as CmrProvider, AwsArn, AwsPrivateLink,
    AwsPrivateLinkStatus, AzurePrivateLink, CloudProvider, Cluster, ClusterCreate, ClusterType,
    CustomerManagedAws, CustomerManagedResources, GcpPrivateServiceConnect, KafkaApiStatus,
    MtlsSpec,
};
use redpanda_provider::testing::{
    assert_diagnostic_at, assert_mask_eq, assert_null_block, FakeControlPlane,
};
use redpanda_provider::{ClusterModel, ClusterResource, Model, ProviderError, Value};
use serde_json::{json, Map, Value as Json};
use tokio_test::{assert_err, assert_ok};

fn aws_cmr(agent_arn: &str) -> Json {
    let mut aws = Map::new();
    for name in AWS_ARN_ATTRIBUTES {
        let arn = if name == "agent_instance_profile" {
            agent_arn.to_string()
        } else {
            format!("arn:aws:iam::123456789012:{}", name)
        };
        aws.insert(name.to_string(), json!({ "arn": arn }));
    }
    json!({ "aws": aws })
}

fn byoc_aws_cluster(agent_arn: &str) -> ClusterModel {
    ClusterModel::from_json(&json!({
        "id": "c-1",
        "name": "orders",
        "cloud_provider": "aws",
        "cluster_type": "byoc",
        "connection_type": "private",
        "region": "us-east-2",
        "zones": ["use2-az1", "use2-az2", "use2-az3"],
        "throughput_tier": "tier-2-aws-v2-arm",
        "redpanda_version": "v24.2.1",
        "allow_deletion": true,
        "tags": { "team": "streaming" },
        "kafka_api": {
            "mtls": {
                "enabled": true,
                "ca_certificates_pem": ["-----BEGIN CERTIFICATE-----"],
                "principal_mapping_rules": []
            }
        },
        "aws_private_link": {
            "enabled": true,
            "connect_console": false,
            "allowed_principals": ["arn:aws:iam::123456789012:root"]
        },
        "maintenance_window_config": {
            "day_hour": { "hour_of_day": 3, "day_of_week": "TUESDAY" }
        },
        "customer_managed_resources": aws_cmr(agent_arn),
        "read_replica_cluster_ids": ["c-2"],
        "kafka_connect": { "enabled": true }
    }))
    .unwrap()
}

#[test]
fn test_gcp_dedicated_create_sets_only_configured_fields() {
    let model = ClusterModel {
        cloud_provider: Value::Known("gcp".into()),
        cluster_type: Value::Known("dedicated".into()),
        zones: Value::Known(vec!["us-west1-a".into(), "us-west1-b".into()]),
        ..Default::default()
    };
    let create = build_create_request(&model).unwrap();
    assert_eq!(
        create,
        ClusterCreate {
            cloud_provider: CloudProvider::Gcp as i32,
            r#type: ClusterType::Dedicated as i32,
            zones: vec!["us-west1-a".into(), "us-west1-b".into()],
            ..Default::default()
        }
    );
}

#[test]
fn test_enabled_private_link_without_status_maps_to_block() {
    let cluster = Cluster {
        id: "c-1".into(),
        cloud_provider: CloudProvider::Aws as i32,
        aws_private_link: Some(AwsPrivateLink {
            enabled: true,
            allowed_principals: vec!["arn:aws:iam::123456789012:root".into()],
            ..Default::default()
        }),
        ..Default::default()
    };
    let model = build_model(&ClusterModel::default(), &cluster).unwrap();
    let link = model.aws_private_link.as_option().expect("block should be set");
    let attrs = Attrs::at(link, "aws_private_link");
    assert_eq!(attrs.bool("enabled").unwrap(), Value::Known(true));
    assert_eq!(attrs.bool("connect_console").unwrap(), Value::Known(false));
    assert_eq!(
        attrs.string_list("allowed_principals").unwrap(),
        Value::Known(vec!["arn:aws:iam::123456789012:root".to_string()])
    );
    assert!(attrs.object("status").unwrap().is_null());
}

#[test]
fn test_single_arn_change_yields_single_leaf() {
    let prior = build_update_request(&byoc_aws_cluster("arn:aws:iam::1:instance-profile/old")).unwrap();
    let planned = build_update_request(&byoc_aws_cluster("arn:aws:iam::1:instance-profile/new")).unwrap();

    let update = generate_update(&planned, &prior, MaskConvention::Leaf);
    assert_mask_eq(
        &update.mask,
        &["customer_managed_resources.aws.agent_instance_profile.arn"],
    );
    assert_eq!(update.changed.id, "c-1");
    assert_eq!(
        update.changed.customer_managed_resources,
        Some(CustomerManagedResources {
            cloud_provider: Some(CmrProvider::Aws(CustomerManagedAws {
                agent_instance_profile: Some(AwsArn {
                    arn: "arn:aws:iam::1:instance-profile/new".into()
                }),
                ..Default::default()
            })),
        })
    );
    assert!(update.changed.kafka_api.is_none());
    assert!(update.changed.name.is_empty());
}

#[test]
fn test_update_projection_diff_is_empty_against_itself() {
    let update = build_update_request(&byoc_aws_cluster("arn")).unwrap();
    for convention in [MaskConvention::Leaf, MaskConvention::Subtree] {
        assert!(generate_update(&update, &update, convention).is_empty());
    }
}

#[test]
fn test_disabled_features_collapse_to_null() {
    let cluster = Cluster {
        id: "c-1".into(),
        kafka_api: Some(KafkaApiStatus {
            mtls: Some(MtlsSpec::default()),
            seed_brokers: vec!["seed:9092".into()],
        }),
        aws_private_link: Some(AwsPrivateLink::default()),
        gcp_private_service_connect: Some(GcpPrivateServiceConnect::default()),
        azure_private_link: Some(AzurePrivateLink::default()),
        ..Default::default()
    };
    let model = build_model(&ClusterModel::default(), &cluster).unwrap();
    assert_null_block(&model.aws_private_link, "aws_private_link");
    assert_null_block(&model.gcp_private_service_connect, "gcp_private_service_connect");
    assert_null_block(&model.azure_private_link, "azure_private_link");

    let kafka_api = model.kafka_api.as_option().expect("seed brokers keep the block");
    let mtls = Attrs::at(kafka_api, "kafka_api").object("mtls").unwrap();
    assert_null_block(&mtls, "kafka_api.mtls");
}

#[test]
fn test_cmr_for_other_cloud_is_rejected() {
    let mut model = byoc_aws_cluster("arn");
    model.customer_managed_resources = ClusterModel::from_json(&json!({
        "customer_managed_resources": {
            "gcp": {
                "subnet": {
                    "name": "subnet",
                    "secondary_ipv4_range_pods": { "name": "pods" },
                    "secondary_ipv4_range_services": { "name": "services" },
                    "k8s_master_ipv4_range": "10.0.7.240/28"
                }
            }
        }
    }))
    .unwrap()
    .customer_managed_resources;
    model.aws_private_link = Value::Null;

    let err = assert_err!(build_create_request(&model));
    assert!(matches!(err, ProviderError::Validation(_)), "{err:?}");
}

#[test]
fn test_response_failures_are_collected() {
    let cluster = Cluster {
        id: "c-1".into(),
        r#type: 77,
        aws_private_link: Some(AwsPrivateLink {
            enabled: true,
            status: Some(AwsPrivateLinkStatus {
                created_at: Some(prost_types::Timestamp {
                    seconds: i64::MAX,
                    nanos: 0,
                }),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    };
    let err = build_model(&ClusterModel::default(), &cluster).unwrap_err();
    assert_diagnostic_at(&err, "cluster_type");
    assert_diagnostic_at(&err, "aws_private_link.status.created_at");
}

#[tokio::test]
async fn test_create_then_read_round_trips_settable_fields() {
    let planned = ClusterModel {
        id: Value::Unknown,
        ..byoc_aws_cluster("arn:aws:iam::1:instance-profile/agent")
    };
    let clusters = ClusterResource::new(FakeControlPlane::new());
    let state = assert_ok!(clusters.create(&planned).await);

    assert!(state.id.is_known());
    assert_eq!(state.name, planned.name);
    assert_eq!(state.cloud_provider, planned.cloud_provider);
    assert_eq!(state.cluster_type, planned.cluster_type);
    assert_eq!(state.connection_type, planned.connection_type);
    assert_eq!(state.region, planned.region);
    assert_eq!(state.zones, planned.zones);
    assert_eq!(state.throughput_tier, planned.throughput_tier);
    assert_eq!(state.redpanda_version, planned.redpanda_version);
    assert_eq!(state.allow_deletion, planned.allow_deletion);
    assert_eq!(state.tags, planned.tags);
    assert_eq!(state.aws_private_link, planned.aws_private_link);
    assert_eq!(state.maintenance_window_config, planned.maintenance_window_config);
    assert_eq!(state.customer_managed_resources, planned.customer_managed_resources);
    assert_eq!(state.read_replica_cluster_ids, planned.read_replica_cluster_ids);
    assert_eq!(state.kafka_connect, planned.kafka_connect);

    let planned_mtls = Attrs::at(planned.kafka_api.as_option().unwrap(), "kafka_api").object("mtls");
    let state_mtls = Attrs::at(state.kafka_api.as_option().unwrap(), "kafka_api").object("mtls");
    assert_eq!(planned_mtls.unwrap(), state_mtls.unwrap());

    let read = assert_ok!(clusters.read(&state).await);
    assert_eq!(read, Some(state.clone()));

    let id = state.id.as_option().unwrap();
    assert!(clusters.control_plane().remove(id).await);
    assert_eq!(assert_ok!(clusters.read(&state).await), None);
}

#[tokio::test]
async fn test_subtree_masks_reach_the_service() {
    let clusters =
        ClusterResource::new(FakeControlPlane::new()).with_mask_convention(MaskConvention::Subtree);
    let state = clusters
        .create(&byoc_aws_cluster("arn:aws:iam::1:instance-profile/old"))
        .await
        .unwrap();

    let planned = ClusterModel {
        customer_managed_resources: byoc_aws_cluster("arn:aws:iam::1:instance-profile/new")
            .customer_managed_resources,
        ..state.clone()
    };
    let updated = clusters.update(&state, &planned).await.unwrap();
    assert_eq!(
        updated.customer_managed_resources,
        planned.customer_managed_resources
    );

    let sent = clusters.control_plane().update_requests().await;
    assert_eq!(sent.len(), 1);
    assert_mask_eq(
        sent[0].update_mask.as_ref().unwrap(),
        &["customer_managed_resources"],
    );
}

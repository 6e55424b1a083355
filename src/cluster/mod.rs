//! Conversions between [`ClusterModel`] and the control-plane cluster messages.
//!
//! [`build_create_request`] and [`build_update_request`] turn a Model into
//! the create and update shapes; [`build_model`] maps a full `Cluster`
//! returned by the service back into a Model. Each nested block lives in its
//! own submodule next to its object-type descriptor.
//!
//! Builders fail fast on the first error. The response mapper collects every
//! problem it finds as a diagnostic and then fails as a whole, so a partially
//! mapped Model is never returned.

mod cmr;
mod maintenance;
mod mtls;
mod private_link;

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat};
use prost_types::Timestamp;
use tracing::debug;

pub use cmr::{
    customer_managed_resources_object, customer_managed_resources_spec, AWS_ARN_ATTRIBUTES,
    CMR_AWS_TYPE, CMR_GCP_TYPE, CMR_TYPE,
};
pub use maintenance::{
    maintenance_window_object, maintenance_window_spec, MaintenanceWindow,
    MAINTENANCE_WINDOW_TYPE,
};
pub use mtls::{
    http_proxy_object, http_proxy_spec, kafka_api_object, kafka_api_spec, mtls_object,
    schema_registry_object, schema_registry_spec, HTTP_PROXY_TYPE, KAFKA_API_TYPE, MTLS_TYPE,
    SCHEMA_REGISTRY_TYPE,
};
pub use private_link::{
    aws_private_link_spec, azure_private_link_spec, gcp_private_service_connect_spec,
    AWS_PRIVATE_LINK_STATUS_TYPE, AWS_PRIVATE_LINK_TYPE, AZURE_PRIVATE_LINK_STATUS_TYPE,
    AZURE_PRIVATE_LINK_TYPE, GCP_PSC_STATUS_TYPE, GCP_PSC_TYPE,
};

use crate::accessor::Attrs;
use crate::error::ProviderError;
use crate::generated::controlplane::{
    CloudProvider, Cluster, ClusterCreate, ClusterState, ClusterType, ClusterUpdate,
    ConnectionType, EndpointStatus, KafkaConnect,
};
use crate::model::ClusterModel;
use crate::schema::{AttributeType, Diagnostic, ObjectType};
use crate::types::{from_wire, to_wire, value_to_wire, ModelEnum};
use crate::value::{Object, Value};

/// `{url}` blocks for Prometheus and Redpanda Console.
pub static ENDPOINT_TYPE: LazyLock<ObjectType> =
    LazyLock::new(|| ObjectType::new().with("url", AttributeType::String));

/// The `kafka_connect` block.
pub static KAFKA_CONNECT_TYPE: LazyLock<ObjectType> =
    LazyLock::new(|| ObjectType::new().with("enabled", AttributeType::Bool));

/// Format a protobuf timestamp as RFC 3339 with second precision in UTC.
pub fn format_timestamp(ts: &Timestamp) -> Result<String, ProviderError> {
    let nanos = u32::try_from(ts.nanos)
        .map_err(|_| ProviderError::Validation(format!("negative nanos in timestamp: {}", ts.nanos)))?;
    DateTime::from_timestamp(ts.seconds, nanos)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .ok_or_else(|| {
            ProviderError::Validation(format!("timestamp out of range: {}s", ts.seconds))
        })
}

/// Collects diagnostics while mapping a response.
#[derive(Debug, Default)]
pub(crate) struct Collector {
    diagnostics: Vec<Diagnostic>,
}

impl Collector {
    /// Keep the value, or record the error against `path`.
    pub(crate) fn take<T>(&mut self, path: &str, result: Result<T, ProviderError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.diagnostics.extend(err.into_diagnostics(path));
                None
            },
        }
    }

    pub(crate) fn known(&mut self, path: &str, result: Result<Object, ProviderError>) -> Value<Object> {
        self.take(path, result).map_or(Value::Null, Value::Known)
    }

    pub(crate) fn value<T>(
        &mut self,
        path: &str,
        result: Result<Value<T>, ProviderError>,
    ) -> Value<T> {
        self.take(path, result).unwrap_or(Value::Null)
    }

    /// Format a timestamp; an absent one is null.
    pub(crate) fn timestamp(&mut self, path: &str, ts: Option<&Timestamp>) -> Value<String> {
        match ts {
            Some(ts) => self
                .take(path, format_timestamp(ts))
                .map_or(Value::Null, Value::Known),
            None => Value::Null,
        }
    }

    /// Fail with every collected diagnostic, or return `value`.
    pub(crate) fn finish<T>(self, value: T) -> Result<T, ProviderError> {
        if self.diagnostics.is_empty() {
            Ok(value)
        } else {
            Err(ProviderError::Diagnostics(self.diagnostics))
        }
    }
}

fn cloud_provider(model: &ClusterModel) -> Result<CloudProvider, ProviderError> {
    match model.cloud_provider.as_option() {
        Some(provider) => CloudProvider::from_model_str(provider),
        None => Ok(CloudProvider::Unspecified),
    }
}

/// Reject private-link blocks that belong to a cloud other than the
/// cluster's own.
fn check_private_link_blocks(
    provider: CloudProvider,
    model: &ClusterModel,
) -> Result<(), ProviderError> {
    let blocks = [
        ("aws_private_link", CloudProvider::Aws, &model.aws_private_link),
        (
            "gcp_private_service_connect",
            CloudProvider::Gcp,
            &model.gcp_private_service_connect,
        ),
        ("azure_private_link", CloudProvider::Azure, &model.azure_private_link),
    ];
    for (name, owner, block) in blocks {
        if block.is_known() && owner != provider {
            return Err(ProviderError::Validation(format!(
                "{} is only valid for {} clusters, but cloud_provider is {}",
                name,
                owner.model_str().unwrap_or_default(),
                provider.model_str().unwrap_or("not set")
            )));
        }
    }
    Ok(())
}

fn kafka_connect_spec(block: &Value<Object>) -> Result<Option<KafkaConnect>, ProviderError> {
    let Some(object) = block.as_option() else {
        return Ok(None);
    };
    let attrs = Attrs::at(object, "kafka_connect");
    Ok(Some(KafkaConnect {
        enabled: attrs.bool("enabled")?.unwrap_or_default(),
    }))
}

fn tags_to_wire(tags: &Value<BTreeMap<String, String>>) -> HashMap<String, String> {
    tags.as_option()
        .map(|tags| tags.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default()
}

fn string_or_empty(value: &Value<String>) -> String {
    value.as_option().cloned().unwrap_or_default()
}

/// Build the create shape of a cluster.
///
/// `cloud_provider` and `cluster_type` are required; everything else is
/// sent only when set.
pub fn build_create_request(model: &ClusterModel) -> Result<ClusterCreate, ProviderError> {
    let provider = model.cloud_provider.clone().require("cloud_provider")?;
    let cluster_type = model.cluster_type.clone().require("cluster_type")?;
    let provider = CloudProvider::from_model_str(&provider)?;
    check_private_link_blocks(provider, model)?;

    Ok(ClusterCreate {
        name: string_or_empty(&model.name),
        resource_group_id: string_or_empty(&model.resource_group_id),
        network_id: string_or_empty(&model.network_id),
        cloud_provider: provider.into(),
        r#type: to_wire::<ClusterType>(&cluster_type)?,
        connection_type: value_to_wire::<ConnectionType>(&model.connection_type)?,
        throughput_tier: string_or_empty(&model.throughput_tier),
        region: string_or_empty(&model.region),
        zones: model.zones.clone().unwrap_or_default(),
        redpanda_version: string_or_empty(&model.redpanda_version),
        kafka_api: kafka_api_spec(&model.kafka_api)?,
        http_proxy: http_proxy_spec(&model.http_proxy)?,
        schema_registry: schema_registry_spec(&model.schema_registry)?,
        aws_private_link: aws_private_link_spec(&model.aws_private_link)?,
        gcp_private_service_connect: gcp_private_service_connect_spec(
            &model.gcp_private_service_connect,
        )?,
        azure_private_link: azure_private_link_spec(&model.azure_private_link)?,
        cloud_provider_tags: tags_to_wire(&model.tags),
        customer_managed_resources: customer_managed_resources_spec(
            provider,
            &model.customer_managed_resources,
        )?,
        maintenance_window_config: maintenance_window_spec(&model.maintenance_window_config)?,
        read_replica_cluster_ids: model.read_replica_cluster_ids.clone().unwrap_or_default(),
        kafka_connect: kafka_connect_spec(&model.kafka_connect)?,
        gcp_global_access_enabled: model.gcp_global_access_enabled.clone().unwrap_or_default(),
    })
}

/// Build the update shape of a cluster. `id` is required.
///
/// Both the planned and the prior Model go through this function before
/// being diffed, so it must be deterministic in its input.
pub fn build_update_request(model: &ClusterModel) -> Result<ClusterUpdate, ProviderError> {
    let id = model.id.clone().require("id")?;
    let provider = cloud_provider(model)?;
    check_private_link_blocks(provider, model)?;

    Ok(ClusterUpdate {
        id,
        name: string_or_empty(&model.name),
        read_replica_cluster_ids: model.read_replica_cluster_ids.clone().unwrap_or_default(),
        kafka_api: kafka_api_spec(&model.kafka_api)?,
        http_proxy: http_proxy_spec(&model.http_proxy)?,
        schema_registry: schema_registry_spec(&model.schema_registry)?,
        aws_private_link: aws_private_link_spec(&model.aws_private_link)?,
        gcp_private_service_connect: gcp_private_service_connect_spec(
            &model.gcp_private_service_connect,
        )?,
        azure_private_link: azure_private_link_spec(&model.azure_private_link)?,
        cloud_provider_tags: tags_to_wire(&model.tags),
        maintenance_window_config: maintenance_window_spec(&model.maintenance_window_config)?,
        customer_managed_resources: customer_managed_resources_spec(
            provider,
            &model.customer_managed_resources,
        )?,
        kafka_connect: kafka_connect_spec(&model.kafka_connect)?,
        gcp_global_access_enabled: model.gcp_global_access_enabled.clone().unwrap_or_default(),
    })
}

/// An optional string: empty on the wire is null unless the prior Model
/// held a known value.
fn string_value(wire: &str, prior: &Value<String>) -> Value<String> {
    if wire.is_empty() && !prior.is_known() {
        Value::Null
    } else {
        Value::Known(wire.to_string())
    }
}

/// A server-computed string: empty on the wire is null.
pub(crate) fn non_empty(wire: &str) -> Value<String> {
    if wire.is_empty() {
        Value::Null
    } else {
        Value::Known(wire.to_string())
    }
}

/// Top-level lists keep an explicitly configured empty list and otherwise
/// read an empty wire list as null.
fn list_value(wire: &[String], prior: &Value<Vec<String>>) -> Value<Vec<String>> {
    if wire.is_empty() && !prior.is_known() {
        Value::Null
    } else {
        Value::Known(wire.to_vec())
    }
}

fn tags_value(
    wire: &HashMap<String, String>,
    prior: &Value<BTreeMap<String, String>>,
) -> Value<BTreeMap<String, String>> {
    if wire.is_empty() && !prior.is_known() {
        Value::Null
    } else {
        Value::Known(wire.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

fn endpoint_object(endpoint: Option<&EndpointStatus>) -> Result<Value<Object>, ProviderError> {
    match endpoint {
        Some(endpoint) if !endpoint.url.is_empty() => Object::builder(&ENDPOINT_TYPE)
            .set("url", endpoint.url.as_str())
            .build()
            .map(Value::Known),
        _ => Ok(Value::Null),
    }
}

fn kafka_connect_object(kafka_connect: Option<&KafkaConnect>) -> Result<Value<Object>, ProviderError> {
    match kafka_connect {
        Some(kc) => Object::builder(&KAFKA_CONNECT_TYPE)
            .set("enabled", kc.enabled)
            .build()
            .map(Value::Known),
        None => Ok(Value::Null),
    }
}

/// Map a cluster returned by the service into a Model.
///
/// Fields the service does not echo (`redpanda_version`, `allow_deletion`)
/// are taken from `prior`. Every conversion failure is collected and
/// reported together as [`ProviderError::Diagnostics`].
pub fn build_model(prior: &ClusterModel, cluster: &Cluster) -> Result<ClusterModel, ProviderError> {
    let mut c = Collector::default();

    let gcp_global_access_enabled = if cluster.gcp_global_access_enabled || prior.gcp_global_access_enabled.is_known() {
        Value::Known(cluster.gcp_global_access_enabled)
    } else {
        Value::Null
    };

    let model = ClusterModel {
        id: Value::Known(cluster.id.clone()),
        name: string_value(&cluster.name, &prior.name),
        resource_group_id: string_value(&cluster.resource_group_id, &prior.resource_group_id),
        network_id: string_value(&cluster.network_id, &prior.network_id),
        cloud_provider: c.value(
            "cloud_provider",
            from_wire::<CloudProvider>(cluster.cloud_provider, "cloud_provider"),
        ),
        cluster_type: c.value(
            "cluster_type",
            from_wire::<ClusterType>(cluster.r#type, "cluster_type"),
        ),
        connection_type: c.value(
            "connection_type",
            from_wire::<ConnectionType>(cluster.connection_type, "connection_type"),
        ),
        throughput_tier: string_value(&cluster.throughput_tier, &prior.throughput_tier),
        region: string_value(&cluster.region, &prior.region),
        zones: list_value(&cluster.zones, &prior.zones),
        allow_deletion: prior.allow_deletion.clone(),
        redpanda_version: prior.redpanda_version.clone(),
        current_redpanda_version: non_empty(&cluster.current_redpanda_version),
        state: c.value("state", from_wire::<ClusterState>(cluster.state, "state")),
        created_at: c.timestamp("created_at", cluster.created_at.as_ref()),
        cluster_api_url: non_empty(&cluster.cluster_api_url),
        kafka_api: c.value("kafka_api", kafka_api_object(cluster.kafka_api.as_ref())),
        http_proxy: c.value("http_proxy", http_proxy_object(cluster.http_proxy.as_ref())),
        schema_registry: c.value(
            "schema_registry",
            schema_registry_object(cluster.schema_registry.as_ref()),
        ),
        prometheus: c.value("prometheus", endpoint_object(cluster.prometheus.as_ref())),
        redpanda_console: c.value(
            "redpanda_console",
            endpoint_object(cluster.redpanda_console.as_ref()),
        ),
        aws_private_link: private_link::aws_private_link_object(
            cluster.aws_private_link.as_ref(),
            &mut c,
        ),
        gcp_private_service_connect: private_link::gcp_private_service_connect_object(
            cluster.gcp_private_service_connect.as_ref(),
            &mut c,
        ),
        azure_private_link: private_link::azure_private_link_object(
            cluster.azure_private_link.as_ref(),
            &mut c,
        ),
        tags: tags_value(&cluster.cloud_provider_tags, &prior.tags),
        customer_managed_resources: c.value(
            "customer_managed_resources",
            customer_managed_resources_object(cluster.customer_managed_resources.as_ref()),
        ),
        maintenance_window_config: c.value(
            "maintenance_window_config",
            maintenance_window_object(cluster.maintenance_window_config.as_ref()),
        ),
        read_replica_cluster_ids: list_value(
            &cluster.read_replica_cluster_ids,
            &prior.read_replica_cluster_ids,
        ),
        kafka_connect: c.value(
            "kafka_connect",
            kafka_connect_object(cluster.kafka_connect.as_ref()),
        ),
        gcp_global_access_enabled,
    };

    if let Some(err) = c.diagnostics.first() {
        debug!(
            cluster_id = %cluster.id,
            diagnostics = c.diagnostics.len(),
            first = %err.summary,
            "Cluster response mapping failed"
        );
    }
    c.finish(model)
}

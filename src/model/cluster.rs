use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::accessor::Attrs;
use crate::cluster::{
    AWS_PRIVATE_LINK_TYPE, AZURE_PRIVATE_LINK_TYPE, CMR_TYPE, ENDPOINT_TYPE, GCP_PSC_TYPE,
    HTTP_PROXY_TYPE, KAFKA_API_TYPE, KAFKA_CONNECT_TYPE, MAINTENANCE_WINDOW_TYPE,
    SCHEMA_REGISTRY_TYPE,
};
use crate::error::ProviderError;
use crate::schema::{Attribute, AttributeFlags, AttributeType, ObjectType, Schema};
use crate::value::{Object, Value};

use super::Model;

/// Configuration and state of a Redpanda cluster.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterModel {
    /// Service-assigned identifier.
    pub id: Value<String>,
    /// Display name.
    pub name: Value<String>,
    /// Resource group the cluster belongs to.
    pub resource_group_id: Value<String>,
    /// Network the cluster is deployed into.
    pub network_id: Value<String>,
    /// `aws`, `gcp` or `azure`.
    pub cloud_provider: Value<String>,
    /// `dedicated` or `byoc`.
    pub cluster_type: Value<String>,
    /// `public` or `private`.
    pub connection_type: Value<String>,
    /// Throughput tier name.
    pub throughput_tier: Value<String>,
    /// Cloud region.
    pub region: Value<String>,
    /// Availability zones.
    pub zones: Value<Vec<String>>,
    /// Whether the provider may delete the cluster. Never sent to the service.
    pub allow_deletion: Value<bool>,
    /// Version pinned at creation. Not echoed by the service.
    pub redpanda_version: Value<String>,
    /// Version currently running.
    pub current_redpanda_version: Value<String>,
    /// Lifecycle state.
    pub state: Value<String>,
    /// Creation time, RFC 3339.
    pub created_at: Value<String>,
    /// Data-plane API endpoint.
    pub cluster_api_url: Value<String>,
    /// Kafka API settings and seed brokers.
    pub kafka_api: Value<Object>,
    /// HTTP proxy settings and URL.
    pub http_proxy: Value<Object>,
    /// Schema registry settings and URL.
    pub schema_registry: Value<Object>,
    /// Prometheus endpoint.
    pub prometheus: Value<Object>,
    /// Redpanda Console endpoint.
    pub redpanda_console: Value<Object>,
    /// AWS PrivateLink.
    pub aws_private_link: Value<Object>,
    /// GCP Private Service Connect.
    pub gcp_private_service_connect: Value<Object>,
    /// Azure Private Link.
    pub azure_private_link: Value<Object>,
    /// Tags applied to cloud resources.
    pub tags: Value<BTreeMap<String, String>>,
    /// Bring-your-own-VPC resources.
    pub customer_managed_resources: Value<Object>,
    /// Maintenance window.
    pub maintenance_window_config: Value<Object>,
    /// Clusters allowed to read from this one.
    pub read_replica_cluster_ids: Value<Vec<String>>,
    /// Kafka Connect.
    pub kafka_connect: Value<Object>,
    /// Global access for GCP clusters.
    pub gcp_global_access_enabled: Value<bool>,
}

static CLUSTER_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    let immutable_string = || Attribute::optional_string().with_force_new();
    Schema::v0()
        .with_attribute(
            "id",
            Attribute::computed_string().with_description("The ID of the cluster"),
        )
        .with_attribute("name", Attribute::optional_string())
        .with_attribute("resource_group_id", immutable_string())
        .with_attribute("network_id", immutable_string())
        .with_attribute(
            "cloud_provider",
            Attribute::required_string()
                .with_force_new()
                .with_description("Cloud provider: aws, gcp or azure"),
        )
        .with_attribute(
            "cluster_type",
            Attribute::required_string()
                .with_force_new()
                .with_description("Cluster type: dedicated or byoc"),
        )
        .with_attribute("connection_type", immutable_string())
        .with_attribute("throughput_tier", immutable_string())
        .with_attribute("region", immutable_string())
        .with_attribute(
            "zones",
            Attribute::optional_string_list().with_force_new(),
        )
        .with_attribute(
            "allow_deletion",
            Attribute::optional_bool()
                .with_description("Allows deletion of the cluster. Defaults to false."),
        )
        .with_attribute(
            "redpanda_version",
            immutable_string().with_description("Version to deploy at creation"),
        )
        .with_attribute("current_redpanda_version", Attribute::computed_string())
        .with_attribute("state", Attribute::computed_string())
        .with_attribute("created_at", Attribute::computed_string())
        .with_attribute("cluster_api_url", Attribute::computed_string())
        .with_attribute("kafka_api", Attribute::optional_computed_object(&KAFKA_API_TYPE))
        .with_attribute("http_proxy", Attribute::optional_computed_object(&HTTP_PROXY_TYPE))
        .with_attribute(
            "schema_registry",
            Attribute::optional_computed_object(&SCHEMA_REGISTRY_TYPE),
        )
        .with_attribute("prometheus", Attribute::computed_object(&ENDPOINT_TYPE))
        .with_attribute("redpanda_console", Attribute::computed_object(&ENDPOINT_TYPE))
        .with_attribute(
            "aws_private_link",
            Attribute::optional_object(&AWS_PRIVATE_LINK_TYPE),
        )
        .with_attribute(
            "gcp_private_service_connect",
            Attribute::optional_object(&GCP_PSC_TYPE),
        )
        .with_attribute(
            "azure_private_link",
            Attribute::optional_object(&AZURE_PRIVATE_LINK_TYPE),
        )
        .with_attribute("tags", Attribute::optional_string_map())
        .with_attribute(
            "customer_managed_resources",
            Attribute::optional_object(&CMR_TYPE),
        )
        .with_attribute(
            "maintenance_window_config",
            Attribute::optional_computed_object(&MAINTENANCE_WINDOW_TYPE),
        )
        .with_attribute(
            "read_replica_cluster_ids",
            Attribute::optional_string_list(),
        )
        .with_attribute(
            "kafka_connect",
            Attribute::optional_computed_object(&KAFKA_CONNECT_TYPE),
        )
        .with_attribute(
            "gcp_global_access_enabled",
            Attribute::new(AttributeType::Bool, AttributeFlags::optional_computed()),
        )
});

static CLUSTER_OBJECT_TYPE: LazyLock<ObjectType> = LazyLock::new(|| CLUSTER_SCHEMA.object_type());

/// Schema of the `redpanda_cluster` resource.
pub fn cluster_schema() -> &'static Schema {
    &CLUSTER_SCHEMA
}

impl Model for ClusterModel {
    fn schema() -> &'static Schema {
        &CLUSTER_SCHEMA
    }

    fn object_type() -> &'static ObjectType {
        &CLUSTER_OBJECT_TYPE
    }

    fn from_object(object: &Object) -> Result<Self, ProviderError> {
        let a = Attrs::root(object);
        Ok(Self {
            id: a.string("id")?,
            name: a.string("name")?,
            resource_group_id: a.string("resource_group_id")?,
            network_id: a.string("network_id")?,
            cloud_provider: a.string("cloud_provider")?,
            cluster_type: a.string("cluster_type")?,
            connection_type: a.string("connection_type")?,
            throughput_tier: a.string("throughput_tier")?,
            region: a.string("region")?,
            zones: a.string_list("zones")?,
            allow_deletion: a.bool("allow_deletion")?,
            redpanda_version: a.string("redpanda_version")?,
            current_redpanda_version: a.string("current_redpanda_version")?,
            state: a.string("state")?,
            created_at: a.string("created_at")?,
            cluster_api_url: a.string("cluster_api_url")?,
            kafka_api: a.object("kafka_api")?,
            http_proxy: a.object("http_proxy")?,
            schema_registry: a.object("schema_registry")?,
            prometheus: a.object("prometheus")?,
            redpanda_console: a.object("redpanda_console")?,
            aws_private_link: a.object("aws_private_link")?,
            gcp_private_service_connect: a.object("gcp_private_service_connect")?,
            azure_private_link: a.object("azure_private_link")?,
            tags: a.string_map("tags")?,
            customer_managed_resources: a.object("customer_managed_resources")?,
            maintenance_window_config: a.object("maintenance_window_config")?,
            read_replica_cluster_ids: a.string_list("read_replica_cluster_ids")?,
            kafka_connect: a.object("kafka_connect")?,
            gcp_global_access_enabled: a.bool("gcp_global_access_enabled")?,
        })
    }

    fn to_object(&self) -> Result<Object, ProviderError> {
        Object::builder(&CLUSTER_OBJECT_TYPE)
            .set("id", self.id.clone())
            .set("name", self.name.clone())
            .set("resource_group_id", self.resource_group_id.clone())
            .set("network_id", self.network_id.clone())
            .set("cloud_provider", self.cloud_provider.clone())
            .set("cluster_type", self.cluster_type.clone())
            .set("connection_type", self.connection_type.clone())
            .set("throughput_tier", self.throughput_tier.clone())
            .set("region", self.region.clone())
            .set("zones", self.zones.clone())
            .set("allow_deletion", self.allow_deletion.clone())
            .set("redpanda_version", self.redpanda_version.clone())
            .set("current_redpanda_version", self.current_redpanda_version.clone())
            .set("state", self.state.clone())
            .set("created_at", self.created_at.clone())
            .set("cluster_api_url", self.cluster_api_url.clone())
            .set("kafka_api", self.kafka_api.clone())
            .set("http_proxy", self.http_proxy.clone())
            .set("schema_registry", self.schema_registry.clone())
            .set("prometheus", self.prometheus.clone())
            .set("redpanda_console", self.redpanda_console.clone())
            .set("aws_private_link", self.aws_private_link.clone())
            .set("gcp_private_service_connect", self.gcp_private_service_connect.clone())
            .set("azure_private_link", self.azure_private_link.clone())
            .set("tags", self.tags.clone())
            .set("customer_managed_resources", self.customer_managed_resources.clone())
            .set("maintenance_window_config", self.maintenance_window_config.clone())
            .set("read_replica_cluster_ids", self.read_replica_cluster_ids.clone())
            .set("kafka_connect", self.kafka_connect.clone())
            .set("gcp_global_access_enabled", self.gcp_global_access_enabled.clone())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::UNKNOWN_SENTINEL;
    use serde_json::json;

    #[test]
    fn test_json_state_round_trip() {
        let state = json!({
            "id": "cluster-1",
            "name": "prod",
            "cloud_provider": "gcp",
            "cluster_type": "dedicated",
            "zones": ["us-west1-a", "us-west1-b"],
            "current_redpanda_version": UNKNOWN_SENTINEL,
            "tags": {"env": "prod"},
            "kafka_connect": {"enabled": true}
        });
        let model = ClusterModel::from_json(&state).unwrap();
        assert_eq!(model.cloud_provider, Value::Known("gcp".to_string()));
        assert_eq!(model.current_redpanda_version, Value::Unknown);
        assert_eq!(model.region, Value::Null);
        assert!(model.kafka_connect.is_known());

        let encoded = model.to_json().unwrap();
        assert_eq!(encoded["current_redpanda_version"], json!(UNKNOWN_SENTINEL));
        assert_eq!(encoded["region"], json!(null));
        assert_eq!(ClusterModel::from_json(&encoded).unwrap(), model);
    }

    #[test]
    fn test_from_json_rejects_bad_shapes() {
        let err = ClusterModel::from_json(&json!({"zones": "us-west1-a"})).unwrap_err();
        assert!(matches!(err, ProviderError::TypeMismatch { ref path, .. } if path == "zones"));

        let err = ClusterModel::from_json(&json!({"kafka_connect": {"enabled": true, "x": 1}}))
            .unwrap_err();
        assert!(matches!(err, ProviderError::Validation(_)));

        assert!(ClusterModel::from_json(&json!([])).is_err());
    }

    #[test]
    fn test_validate_requires_provider_and_type() {
        let model = ClusterModel {
            name: Value::Known("prod".into()),
            ..Default::default()
        };
        let diags = model.validate().unwrap();
        let attrs: Vec<_> = diags.iter().filter_map(|d| d.attribute.as_deref()).collect();
        assert_eq!(attrs, vec!["cloud_provider", "cluster_type"]);
    }

    #[test]
    fn test_schema_force_new() {
        let force_new = cluster_schema().force_new_attributes();
        assert!(force_new.contains(&"cloud_provider"));
        assert!(force_new.contains(&"zones"));
        assert!(!force_new.contains(&"name"));
    }
}

//! In-memory services and assertions for testing resources.
//!
//! [`FakeControlPlane`] and [`FakeDataPlane`] implement the service traits
//! against local state, so resource orchestration can be exercised without
//! a network.
//!
//! # Example
//!
//! ```ignore
//! use redpanda_provider::resource::ClusterResource;
//! use redpanda_provider::testing::{assert_mask_eq, FakeControlPlane};
//!
//! #[tokio::test]
//! async fn test_rename() {
//!     let clusters = ClusterResource::new(FakeControlPlane::new());
//!     let state = clusters.create(&planned).await.unwrap();
//!     clusters.update(&state, &renamed).await.unwrap();
//!
//!     let sent = clusters.control_plane().update_requests().await;
//!     assert_mask_eq(sent[0].update_mask.as_ref().unwrap(), &["name"]);
//! }
//! ```

use std::collections::BTreeMap;

use async_trait::async_trait;
use prost_types::{FieldMask, Timestamp};
use tokio::sync::Mutex;

use crate::diff::apply_mask;
use crate::error::ProviderError;
use crate::generated::controlplane::{
    AwsPrivateLink, AzurePrivateLink, Cluster, ClusterCreate, ClusterState, ClusterUpdate,
    CreateClusterRequest, DeleteClusterRequest, EndpointStatus, GcpPrivateServiceConnect,
    GetClusterRequest, HttpProxyStatus, KafkaApiStatus, SchemaRegistryStatus,
    UpdateClusterRequest,
};
use crate::generated::dataplane::{
    create_user_request, AclFilter, AclPolicy, AclResource, CreateAclRequest, CreateUserRequest,
    ListAclsResponse, ListUsersResponse, UpdateUserRequest, User,
};
use crate::resource::{ControlPlane, DataPlane};
use crate::schema::{Diagnostic, DiagnosticSeverity};
use crate::value::{Object, Value};

/// Version reported for clusters created without a pinned version.
pub const FAKE_REDPANDA_VERSION: &str = "v24.3.1";

/// Creation time reported for every fake cluster.
pub const FAKE_CREATED_AT: i64 = 1_700_000_000;

#[derive(Debug, Default)]
struct ControlPlaneState {
    clusters: BTreeMap<String, ClusterCreate>,
    next_id: u64,
    update_requests: Vec<UpdateClusterRequest>,
}

/// An in-memory control plane.
///
/// Stores each cluster in its create shape and reports it back the way the
/// service would: ready, with endpoints filled in. Updates are applied
/// through the request's field mask.
#[derive(Debug, Default)]
pub struct FakeControlPlane {
    state: Mutex<ControlPlaneState>,
}

impl FakeControlPlane {
    /// An empty control plane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every update request received, oldest first.
    pub async fn update_requests(&self) -> Vec<UpdateClusterRequest> {
        self.state.lock().await.update_requests.clone()
    }

    /// The stored create shape of a cluster.
    pub async fn stored(&self, id: &str) -> Option<ClusterCreate> {
        self.state.lock().await.clusters.get(id).cloned()
    }

    /// Drop a cluster behind the provider's back.
    pub async fn remove(&self, id: &str) -> bool {
        self.state.lock().await.clusters.remove(id).is_some()
    }
}

fn not_found(id: &str) -> ProviderError {
    ProviderError::NotFound(format!("cluster '{}'", id))
}

/// The updatable part of a stored cluster.
fn update_projection(id: &str, create: &ClusterCreate) -> ClusterUpdate {
    ClusterUpdate {
        id: id.to_string(),
        name: create.name.clone(),
        read_replica_cluster_ids: create.read_replica_cluster_ids.clone(),
        kafka_api: create.kafka_api.clone(),
        http_proxy: create.http_proxy.clone(),
        schema_registry: create.schema_registry.clone(),
        aws_private_link: create.aws_private_link.clone(),
        gcp_private_service_connect: create.gcp_private_service_connect.clone(),
        azure_private_link: create.azure_private_link.clone(),
        cloud_provider_tags: create.cloud_provider_tags.clone(),
        maintenance_window_config: create.maintenance_window_config.clone(),
        customer_managed_resources: create.customer_managed_resources.clone(),
        kafka_connect: create.kafka_connect.clone(),
        gcp_global_access_enabled: create.gcp_global_access_enabled,
    }
}

fn write_back(create: &mut ClusterCreate, update: ClusterUpdate) {
    create.name = update.name;
    create.read_replica_cluster_ids = update.read_replica_cluster_ids;
    create.kafka_api = update.kafka_api;
    create.http_proxy = update.http_proxy;
    create.schema_registry = update.schema_registry;
    create.aws_private_link = update.aws_private_link;
    create.gcp_private_service_connect = update.gcp_private_service_connect;
    create.azure_private_link = update.azure_private_link;
    create.cloud_provider_tags = update.cloud_provider_tags;
    create.maintenance_window_config = update.maintenance_window_config;
    create.customer_managed_resources = update.customer_managed_resources;
    create.kafka_connect = update.kafka_connect;
    create.gcp_global_access_enabled = update.gcp_global_access_enabled;
}

/// Report a stored cluster the way a read would.
fn materialize(id: &str, create: &ClusterCreate) -> Cluster {
    let host = format!("{}.fake.redpanda.example.com", id);
    let current_version = if create.redpanda_version.is_empty() {
        FAKE_REDPANDA_VERSION.to_string()
    } else {
        create.redpanda_version.clone()
    };
    Cluster {
        id: id.to_string(),
        name: create.name.clone(),
        resource_group_id: create.resource_group_id.clone(),
        network_id: create.network_id.clone(),
        cloud_provider: create.cloud_provider,
        r#type: create.r#type,
        connection_type: create.connection_type,
        throughput_tier: create.throughput_tier.clone(),
        region: create.region.clone(),
        zones: create.zones.clone(),
        current_redpanda_version: current_version,
        state: ClusterState::Ready as i32,
        created_at: Some(Timestamp {
            seconds: FAKE_CREATED_AT,
            nanos: 0,
        }),
        kafka_api: Some(KafkaApiStatus {
            mtls: create.kafka_api.as_ref().and_then(|k| k.mtls.clone()),
            seed_brokers: vec![format!("seed.{}:9092", host)],
        }),
        http_proxy: Some(HttpProxyStatus {
            mtls: create.http_proxy.as_ref().and_then(|h| h.mtls.clone()),
            url: format!("https://pandaproxy.{}:30082", host),
        }),
        schema_registry: Some(SchemaRegistryStatus {
            mtls: create.schema_registry.as_ref().and_then(|s| s.mtls.clone()),
            url: format!("https://schema-registry.{}:30081", host),
        }),
        prometheus: Some(EndpointStatus {
            url: format!("https://prometheus.{}/metrics", host),
        }),
        redpanda_console: Some(EndpointStatus {
            url: format!("https://console.{}", host),
        }),
        aws_private_link: create.aws_private_link.as_ref().map(|spec| AwsPrivateLink {
            enabled: spec.enabled,
            connect_console: spec.connect_console,
            allowed_principals: spec.allowed_principals.clone(),
            status: None,
        }),
        gcp_private_service_connect: create.gcp_private_service_connect.as_ref().map(|spec| {
            GcpPrivateServiceConnect {
                enabled: spec.enabled,
                global_access_enabled: spec.global_access_enabled,
                consumer_accept_list: spec.consumer_accept_list.clone(),
                status: None,
            }
        }),
        azure_private_link: create.azure_private_link.as_ref().map(|spec| AzurePrivateLink {
            enabled: spec.enabled,
            connect_console: spec.connect_console,
            allowed_subscriptions: spec.allowed_subscriptions.clone(),
            status: None,
        }),
        cloud_provider_tags: create.cloud_provider_tags.clone(),
        customer_managed_resources: create.customer_managed_resources.clone(),
        maintenance_window_config: create.maintenance_window_config.clone(),
        read_replica_cluster_ids: create.read_replica_cluster_ids.clone(),
        kafka_connect: create.kafka_connect.clone(),
        gcp_global_access_enabled: create.gcp_global_access_enabled,
        cluster_api_url: format!("https://api.{}", host),
    }
}

#[async_trait]
impl ControlPlane for FakeControlPlane {
    async fn create_cluster(&self, request: CreateClusterRequest) -> Result<Cluster, ProviderError> {
        let create = request
            .cluster
            .ok_or_else(|| ProviderError::InvalidRequest("cluster is required".into()))?;
        let mut state = self.state.lock().await;
        state.next_id += 1;
        let id = format!("fake-cluster-{}", state.next_id);
        let cluster = materialize(&id, &create);
        state.clusters.insert(id, create);
        Ok(cluster)
    }

    async fn get_cluster(&self, request: GetClusterRequest) -> Result<Cluster, ProviderError> {
        let state = self.state.lock().await;
        state
            .clusters
            .get(&request.id)
            .map(|create| materialize(&request.id, create))
            .ok_or_else(|| not_found(&request.id))
    }

    async fn update_cluster(&self, request: UpdateClusterRequest) -> Result<Cluster, ProviderError> {
        let mut state = self.state.lock().await;
        state.update_requests.push(request.clone());
        let changed = request
            .cluster
            .ok_or_else(|| ProviderError::InvalidRequest("cluster is required".into()))?;
        let mask = request.update_mask.unwrap_or_default();
        let create = state
            .clusters
            .get_mut(&changed.id)
            .ok_or_else(|| not_found(&changed.id))?;
        let mut projected = update_projection(&changed.id, create);
        apply_mask(&mut projected, &changed, &mask)
            .map_err(|e| ProviderError::InvalidRequest(e.to_string()))?;
        write_back(create, projected);
        Ok(materialize(&changed.id, create))
    }

    async fn delete_cluster(&self, request: DeleteClusterRequest) -> Result<(), ProviderError> {
        let mut state = self.state.lock().await;
        state
            .clusters
            .remove(&request.id)
            .map(|_| ())
            .ok_or_else(|| not_found(&request.id))
    }
}

#[derive(Debug, Default)]
struct DataPlaneState {
    users: BTreeMap<(String, String), create_user_request::User>,
    acls: Vec<(String, CreateAclRequest)>,
}

/// An in-memory data plane shared by every cluster URL.
#[derive(Debug, Default)]
pub struct FakeDataPlane {
    state: Mutex<DataPlaneState>,
}

impl FakeDataPlane {
    /// An empty data plane.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored password of a user.
    pub async fn password(&self, cluster_api_url: &str, name: &str) -> Option<String> {
        let key = (cluster_api_url.to_string(), name.to_string());
        self.state
            .lock()
            .await
            .users
            .get(&key)
            .map(|user| user.password.clone())
    }
}

fn wire_user(user: &create_user_request::User) -> User {
    User {
        name: user.name.clone(),
        mechanism: (user.mechanism != 0).then_some(user.mechanism),
    }
}

/// Zero leaves a filter field open and 1 is `ANY` in every ACL enum.
fn enum_matches(filter: i32, value: i32) -> bool {
    filter == 0 || filter == 1 || filter == value
}

fn string_matches(filter: &Option<String>, value: &str) -> bool {
    filter.as_deref().map_or(true, |f| f == value)
}

fn acl_matches(filter: &AclFilter, acl: &CreateAclRequest) -> bool {
    enum_matches(filter.resource_type, acl.resource_type)
        && string_matches(&filter.resource_name, &acl.resource_name)
        && enum_matches(filter.resource_pattern_type, acl.resource_pattern_type)
        && string_matches(&filter.principal, &acl.principal)
        && string_matches(&filter.host, &acl.host)
        && enum_matches(filter.operation, acl.operation)
        && enum_matches(filter.permission_type, acl.permission_type)
}

#[async_trait]
impl DataPlane for FakeDataPlane {
    async fn create_user(
        &self,
        cluster_api_url: &str,
        request: CreateUserRequest,
    ) -> Result<User, ProviderError> {
        let user = request
            .user
            .ok_or_else(|| ProviderError::InvalidRequest("user is required".into()))?;
        let key = (cluster_api_url.to_string(), user.name.clone());
        let mut state = self.state.lock().await;
        if state.users.contains_key(&key) {
            return Err(ProviderError::AlreadyExists(format!("user '{}'", user.name)));
        }
        let wire = wire_user(&user);
        state.users.insert(key, user);
        Ok(wire)
    }

    async fn update_user(
        &self,
        cluster_api_url: &str,
        request: UpdateUserRequest,
    ) -> Result<User, ProviderError> {
        let user = request
            .user
            .ok_or_else(|| ProviderError::InvalidRequest("user is required".into()))?;
        let key = (cluster_api_url.to_string(), user.name.clone());
        let mut state = self.state.lock().await;
        let stored = state
            .users
            .get_mut(&key)
            .ok_or_else(|| ProviderError::NotFound(format!("user '{}'", user.name)))?;
        stored.password = user.password;
        stored.mechanism = user.mechanism;
        Ok(wire_user(stored))
    }

    async fn list_users(&self, cluster_api_url: &str) -> Result<ListUsersResponse, ProviderError> {
        let state = self.state.lock().await;
        Ok(ListUsersResponse {
            users: state
                .users
                .iter()
                .filter(|((url, _), _)| url == cluster_api_url)
                .map(|(_, user)| wire_user(user))
                .collect(),
        })
    }

    async fn delete_user(&self, cluster_api_url: &str, name: &str) -> Result<(), ProviderError> {
        let key = (cluster_api_url.to_string(), name.to_string());
        let mut state = self.state.lock().await;
        state
            .users
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| ProviderError::NotFound(format!("user '{}'", name)))
    }

    async fn create_acl(
        &self,
        cluster_api_url: &str,
        request: CreateAclRequest,
    ) -> Result<(), ProviderError> {
        let mut state = self.state.lock().await;
        let entry = (cluster_api_url.to_string(), request);
        if !state.acls.contains(&entry) {
            state.acls.push(entry);
        }
        Ok(())
    }

    async fn list_acls(
        &self,
        cluster_api_url: &str,
        filter: AclFilter,
    ) -> Result<ListAclsResponse, ProviderError> {
        let state = self.state.lock().await;
        let mut resources: Vec<AclResource> = Vec::new();
        for (_, acl) in state
            .acls
            .iter()
            .filter(|(url, acl)| url == cluster_api_url && acl_matches(&filter, acl))
        {
            let policy = AclPolicy {
                principal: acl.principal.clone(),
                host: acl.host.clone(),
                operation: acl.operation,
                permission_type: acl.permission_type,
            };
            match resources.iter_mut().find(|r| {
                r.resource_type == acl.resource_type
                    && r.resource_name == acl.resource_name
                    && r.resource_pattern_type == acl.resource_pattern_type
            }) {
                Some(resource) => resource.acls.push(policy),
                None => resources.push(AclResource {
                    resource_type: acl.resource_type,
                    resource_name: acl.resource_name.clone(),
                    resource_pattern_type: acl.resource_pattern_type,
                    acls: vec![policy],
                }),
            }
        }
        Ok(ListAclsResponse { resources })
    }

    async fn delete_acls(&self, cluster_api_url: &str, filter: AclFilter) -> Result<(), ProviderError> {
        let mut state = self.state.lock().await;
        state
            .acls
            .retain(|(url, acl)| url != cluster_api_url || !acl_matches(&filter, acl));
        Ok(())
    }
}

// =========================================================================
// Assertion Helpers
// =========================================================================

/// Assert that a mask holds exactly `expected`, in any order.
///
/// # Panics
///
/// Panics if the path sets differ.
pub fn assert_mask_eq(mask: &FieldMask, expected: &[&str]) {
    let mut actual: Vec<&str> = mask.paths.iter().map(String::as_str).collect();
    actual.sort_unstable();
    let mut expected = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(actual, expected, "update mask mismatch");
}

/// Assert that a Model block is null.
///
/// # Panics
///
/// Panics if the block is known or unknown.
pub fn assert_null_block(block: &Value<Object>, name: &str) {
    assert!(
        block.is_null(),
        "Expected block '{}' to be null, got {:?}",
        name,
        block
    );
}

/// Assert that diagnostics contain no errors.
///
/// # Panics
///
/// Panics if there are any error diagnostics.
pub fn assert_no_errors(diagnostics: &[Diagnostic]) {
    let errors: Vec<_> = diagnostics
        .iter()
        .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
        .collect();

    assert!(
        errors.is_empty(),
        "Expected no errors, but got {} error(s): {:?}",
        errors.len(),
        errors.iter().map(|d| &d.summary).collect::<Vec<_>>()
    );
}

/// Assert that diagnostics contain at least one error.
///
/// # Panics
///
/// Panics if there are no error diagnostics.
pub fn assert_has_errors(diagnostics: &[Diagnostic]) {
    let has_errors = diagnostics
        .iter()
        .any(|d| matches!(d.severity, DiagnosticSeverity::Error));

    assert!(has_errors, "Expected at least one error, but got none");
}

/// Assert that an error carries a diagnostic attached to `path`.
///
/// # Panics
///
/// Panics if the error is not [`ProviderError::Diagnostics`] or no
/// diagnostic names `path`.
pub fn assert_diagnostic_at(err: &ProviderError, path: &str) {
    let ProviderError::Diagnostics(diagnostics) = err else {
        panic!("Expected diagnostics, got {:?}", err);
    };
    assert!(
        diagnostics
            .iter()
            .any(|d| d.attribute.as_deref() == Some(path)),
        "Expected a diagnostic at '{}', got {:?}",
        path,
        diagnostics
            .iter()
            .map(|d| d.attribute.as_deref())
            .collect::<Vec<_>>()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generated::controlplane::KafkaConnect;

    fn create(name: &str) -> CreateClusterRequest {
        CreateClusterRequest {
            cluster: Some(ClusterCreate {
                name: name.into(),
                ..Default::default()
            }),
        }
    }

    #[tokio::test]
    async fn test_update_applies_only_masked_fields() {
        let fake = FakeControlPlane::new();
        let cluster = fake.create_cluster(create("a")).await.unwrap();

        let request = UpdateClusterRequest {
            cluster: Some(ClusterUpdate {
                id: cluster.id.clone(),
                name: "ignored".into(),
                kafka_connect: Some(KafkaConnect { enabled: true }),
                ..Default::default()
            }),
            update_mask: Some(FieldMask {
                paths: vec!["kafka_connect".into()],
            }),
        };
        let updated = fake.update_cluster(request).await.unwrap();
        assert_eq!(updated.name, "a");
        assert_eq!(updated.kafka_connect, Some(KafkaConnect { enabled: true }));
        assert_eq!(fake.update_requests().await.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_cluster() {
        let fake = FakeControlPlane::new();
        let err = fake
            .get_cluster(GetClusterRequest { id: "nope".into() })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_users_are_scoped_by_url() {
        let fake = FakeDataPlane::new();
        let request = CreateUserRequest {
            user: Some(create_user_request::User {
                name: "alice".into(),
                password: "pw".into(),
                mechanism: 0,
            }),
        };
        let user = fake.create_user("https://a", request.clone()).await.unwrap();
        assert_eq!(user.mechanism, None);
        assert!(fake.create_user("https://a", request.clone()).await.is_err());
        fake.create_user("https://b", request).await.unwrap();
        assert_eq!(fake.list_users("https://a").await.unwrap().users.len(), 1);
        assert_eq!(fake.password("https://b", "alice").await.as_deref(), Some("pw"));
    }

    #[test]
    fn test_open_filter_matches_everything() {
        let acl = CreateAclRequest {
            resource_type: 2,
            resource_name: "orders".into(),
            resource_pattern_type: 3,
            principal: "User:alice".into(),
            host: "*".into(),
            operation: 3,
            permission_type: 3,
        };
        assert!(acl_matches(&AclFilter::default(), &acl));
        let filter = AclFilter {
            principal: Some("User:bob".into()),
            ..Default::default()
        };
        assert!(!acl_matches(&filter, &acl));
    }

    #[test]
    fn test_assert_mask_eq_ignores_order() {
        let mask = FieldMask {
            paths: vec!["name".into(), "kafka_connect.enabled".into()],
        };
        assert_mask_eq(&mask, &["kafka_connect.enabled", "name"]);
    }
}

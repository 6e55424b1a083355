//! CRUD orchestration for the cluster, user and ACL resources.
//!
//! Each resource wraps a service client behind [`ControlPlane`] or
//! [`DataPlane`] and runs the conversions around the network call:
//! build the request, send it, map the response back into a Model. The
//! clients own transport, authentication and long-running operation
//! polling; a call returns once the operation has finished.
//!
//! `read` returns `Ok(None)` when the service no longer knows the
//! resource, so the host can drop it from state.

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::acl::{acl_model_from_list, build_acl_filter, build_create_acl_request};
use crate::cluster::{build_create_request, build_model, build_update_request};
use crate::config::ProviderConfig;
use crate::diff::{generate_update, MaskConvention};
use crate::error::ProviderError;
use crate::generated::controlplane::{
    Cluster, CreateClusterRequest, DeleteClusterRequest, GetClusterRequest, UpdateClusterRequest,
};
use crate::generated::dataplane::{
    AclFilter, CreateAclRequest, CreateUserRequest, ListAclsResponse, ListUsersResponse,
    SaslMechanism, UpdateUserRequest, User,
};
use crate::model::{AclModel, ClusterModel, Model, UserModel};
use crate::schema::Diagnostic;
use crate::types::to_wire;
use crate::user::{
    build_create_user_request, build_update_user_request, find_user, user_model_from_response,
};
use crate::value::{AttrValue, Object, Value};

/// The cluster control plane.
#[async_trait]
pub trait ControlPlane: Send + Sync {
    /// Create a cluster and wait for it to become ready.
    async fn create_cluster(&self, request: CreateClusterRequest) -> Result<Cluster, ProviderError>;

    /// Fetch a cluster by ID.
    async fn get_cluster(&self, request: GetClusterRequest) -> Result<Cluster, ProviderError>;

    /// Apply the masked fields of an update and wait for it to finish.
    async fn update_cluster(&self, request: UpdateClusterRequest) -> Result<Cluster, ProviderError>;

    /// Delete a cluster and wait for it to be gone.
    async fn delete_cluster(&self, request: DeleteClusterRequest) -> Result<(), ProviderError>;
}

/// A cluster's data plane, addressed by its `cluster_api_url`.
#[async_trait]
pub trait DataPlane: Send + Sync {
    /// Create a user.
    async fn create_user(
        &self,
        cluster_api_url: &str,
        request: CreateUserRequest,
    ) -> Result<User, ProviderError>;

    /// Replace a user's credentials.
    async fn update_user(
        &self,
        cluster_api_url: &str,
        request: UpdateUserRequest,
    ) -> Result<User, ProviderError>;

    /// List every user.
    async fn list_users(&self, cluster_api_url: &str) -> Result<ListUsersResponse, ProviderError>;

    /// Delete a user by name.
    async fn delete_user(&self, cluster_api_url: &str, name: &str) -> Result<(), ProviderError>;

    /// Create an ACL binding.
    async fn create_acl(
        &self,
        cluster_api_url: &str,
        request: CreateAclRequest,
    ) -> Result<(), ProviderError>;

    /// List ACL bindings matching a filter.
    async fn list_acls(
        &self,
        cluster_api_url: &str,
        filter: AclFilter,
    ) -> Result<ListAclsResponse, ProviderError>;

    /// Delete every ACL binding matching a filter.
    async fn delete_acls(&self, cluster_api_url: &str, filter: AclFilter) -> Result<(), ProviderError>;
}

/// Refuse to delete unless the Model opts in with `allow_deletion = true`.
fn check_allow_deletion(kind: &str, name: &str, allow_deletion: &Value<bool>) -> Result<(), ProviderError> {
    if allow_deletion.as_option() == Some(&true) {
        Ok(())
    } else {
        Err(ProviderError::FailedPrecondition(format!(
            "{} '{}' has allow_deletion unset or false; set allow_deletion = true to delete it",
            kind, name
        )))
    }
}

/// Whether a user-settable attribute is still unknown, e.g. fed from
/// another resource's output. Request checks wait until it is resolved.
fn has_unknown_inputs<M: Model>(object: &Object) -> bool {
    M::schema()
        .attributes
        .iter()
        .filter(|(_, attr)| attr.flags.required || attr.flags.optional)
        .any(|(name, _)| object.get(name).is_some_and(AttrValue::contains_unknown))
}

/// Map a lookup result so that a missing resource reads as `None`.
fn found<T>(result: Result<T, ProviderError>, kind: &str, name: &str) -> Result<Option<T>, ProviderError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => {
            warn!(kind, name, "Resource not found, removing from state");
            Ok(None)
        },
        Err(err) => Err(err),
    }
}

/// The `redpanda_cluster` resource.
pub struct ClusterResource<C> {
    control_plane: C,
    mask_convention: MaskConvention,
}

impl<C: ControlPlane> ClusterResource<C> {
    /// Wrap a control-plane client.
    pub fn new(control_plane: C) -> Self {
        Self {
            control_plane,
            mask_convention: MaskConvention::default(),
        }
    }

    /// Wrap a control-plane client using the provider configuration.
    pub fn from_config(control_plane: C, config: &ProviderConfig) -> Self {
        Self::new(control_plane).with_mask_convention(config.mask_convention)
    }

    /// Set how update masks are written.
    pub fn with_mask_convention(mut self, convention: MaskConvention) -> Self {
        self.mask_convention = convention;
        self
    }

    /// The wrapped client.
    pub fn control_plane(&self) -> &C {
        &self.control_plane
    }

    /// Check a configuration against the schema and the cross-field rules
    /// the request builder enforces. The cross-field rules are skipped while
    /// any configured value is unknown.
    pub fn validate_config(&self, config: &ClusterModel) -> Result<Vec<Diagnostic>, ProviderError> {
        let mut diagnostics = config.validate()?;
        if diagnostics.iter().all(|d| !d.is_error()) {
            if has_unknown_inputs::<ClusterModel>(&config.to_object()?) {
                debug!("Cluster configuration has unknown values, deferring request checks");
            } else if let Err(err) = build_create_request(config) {
                diagnostics.extend(err.into_diagnostics(""));
            }
        }
        Ok(diagnostics)
    }

    /// Create the planned cluster.
    #[instrument(skip(self, planned), fields(name = ?planned.name))]
    pub async fn create(&self, planned: &ClusterModel) -> Result<ClusterModel, ProviderError> {
        let request = CreateClusterRequest {
            cluster: Some(build_create_request(planned)?),
        };
        let cluster = self.control_plane.create_cluster(request).await?;
        info!(id = %cluster.id, "Created cluster");
        build_model(planned, &cluster)
    }

    /// Refresh a cluster from the service.
    #[instrument(skip(self, prior), fields(id = ?prior.id))]
    pub async fn read(&self, prior: &ClusterModel) -> Result<Option<ClusterModel>, ProviderError> {
        let id = prior.id.clone().require("id")?;
        let result = self
            .control_plane
            .get_cluster(GetClusterRequest { id: id.clone() })
            .await;
        match found(result, "cluster", &id)? {
            Some(cluster) => build_model(prior, &cluster).map(Some),
            None => Ok(None),
        }
    }

    /// Update a cluster in place.
    ///
    /// Both Models are projected onto the update shape and diffed; only the
    /// changed fields are sent. With nothing changed no update is sent and
    /// the cluster is re-read instead.
    #[instrument(skip(self, prior, planned), fields(id = ?prior.id))]
    pub async fn update(
        &self,
        prior: &ClusterModel,
        planned: &ClusterModel,
    ) -> Result<ClusterModel, ProviderError> {
        let mut planned = planned.clone();
        if !planned.id.is_known() {
            planned.id = prior.id.clone();
        }
        let planned_update = build_update_request(&planned)?;
        let prior_update = build_update_request(prior)?;
        let diff = generate_update(&planned_update, &prior_update, self.mask_convention);

        let cluster = if diff.is_empty() {
            debug!("No updatable fields changed, skipping update call");
            self.control_plane
                .get_cluster(GetClusterRequest {
                    id: planned_update.id,
                })
                .await?
        } else {
            debug!(paths = ?diff.mask.paths, "Sending cluster update");
            self.control_plane
                .update_cluster(UpdateClusterRequest {
                    cluster: Some(diff.changed),
                    update_mask: Some(diff.mask),
                })
                .await?
        };
        build_model(&planned, &cluster)
    }

    /// Delete a cluster. Refused unless `allow_deletion` is true.
    #[instrument(skip(self, prior), fields(id = ?prior.id))]
    pub async fn delete(&self, prior: &ClusterModel) -> Result<(), ProviderError> {
        let id = prior.id.clone().require("id")?;
        check_allow_deletion("cluster", &id, &prior.allow_deletion)?;
        match self
            .control_plane
            .delete_cluster(DeleteClusterRequest { id: id.clone() })
            .await
        {
            Err(err) if err.is_not_found() => {
                warn!(%id, "Cluster already deleted");
                Ok(())
            },
            other => other,
        }
    }
}

/// The `redpanda_user` resource.
pub struct UserResource<D> {
    data_plane: D,
}

impl<D: DataPlane> UserResource<D> {
    /// Wrap a data-plane client.
    pub fn new(data_plane: D) -> Self {
        Self { data_plane }
    }

    /// Check a configuration against the schema.
    pub fn validate_config(&self, config: &UserModel) -> Result<Vec<Diagnostic>, ProviderError> {
        let mut diagnostics = config.validate()?;
        if let Some(mechanism) = config.mechanism.as_option() {
            if let Err(err) = to_wire::<SaslMechanism>(mechanism) {
                diagnostics.extend(err.into_diagnostics("mechanism"));
            }
        }
        Ok(diagnostics)
    }

    /// Create the planned user.
    #[instrument(skip(self, planned), fields(name = ?planned.name))]
    pub async fn create(&self, planned: &UserModel) -> Result<UserModel, ProviderError> {
        let url = planned.cluster_api_url.clone().require("cluster_api_url")?;
        let request = build_create_user_request(planned)?;
        let user = self.data_plane.create_user(&url, request).await?;
        info!(name = %user.name, "Created user");
        user_model_from_response(planned, &user)
    }

    /// Refresh a user from the service.
    #[instrument(skip(self, prior), fields(name = ?prior.name))]
    pub async fn read(&self, prior: &UserModel) -> Result<Option<UserModel>, ProviderError> {
        let url = prior.cluster_api_url.clone().require("cluster_api_url")?;
        let name = prior.name.clone().require("name")?;
        let users = self.data_plane.list_users(&url).await?;
        match found(find_user(&users, &name), "user", &name)? {
            Some(user) => user_model_from_response(prior, user).map(Some),
            None => Ok(None),
        }
    }

    /// Replace the user's credentials.
    #[instrument(skip(self, prior, planned), fields(name = ?planned.name))]
    pub async fn update(&self, prior: &UserModel, planned: &UserModel) -> Result<UserModel, ProviderError> {
        if prior.password == planned.password && prior.mechanism == planned.mechanism {
            debug!("Credentials unchanged, skipping update call");
            return Ok(UserModel {
                mechanism: prior.mechanism.clone(),
                ..planned.clone()
            });
        }
        let url = planned.cluster_api_url.clone().require("cluster_api_url")?;
        let request = build_update_user_request(planned)?;
        let user = self.data_plane.update_user(&url, request).await?;
        user_model_from_response(planned, &user)
    }

    /// Delete a user. Refused unless `allow_deletion` is true.
    #[instrument(skip(self, prior), fields(name = ?prior.name))]
    pub async fn delete(&self, prior: &UserModel) -> Result<(), ProviderError> {
        let url = prior.cluster_api_url.clone().require("cluster_api_url")?;
        let name = prior.name.clone().require("name")?;
        check_allow_deletion("user", &name, &prior.allow_deletion)?;
        match self.data_plane.delete_user(&url, &name).await {
            Err(err) if err.is_not_found() => {
                warn!(%name, "User already deleted");
                Ok(())
            },
            other => other,
        }
    }
}

/// The `redpanda_acl` resource.
///
/// ACLs are replaced rather than updated, so there is no `update`.
pub struct AclResource<D> {
    data_plane: D,
}

impl<D: DataPlane> AclResource<D> {
    /// Wrap a data-plane client.
    pub fn new(data_plane: D) -> Self {
        Self { data_plane }
    }

    /// Check a configuration against the schema and the enum values.
    pub fn validate_config(&self, config: &AclModel) -> Result<Vec<Diagnostic>, ProviderError> {
        let mut diagnostics = config.validate()?;
        if diagnostics.iter().all(|d| !d.is_error()) {
            if has_unknown_inputs::<AclModel>(&config.to_object()?) {
                debug!("ACL configuration has unknown values, deferring request checks");
            } else if let Err(err) = build_create_acl_request(config) {
                diagnostics.extend(err.into_diagnostics(""));
            }
        }
        Ok(diagnostics)
    }

    /// Create the planned ACL and read it back.
    #[instrument(skip(self, planned), fields(principal = ?planned.principal))]
    pub async fn create(&self, planned: &AclModel) -> Result<AclModel, ProviderError> {
        let url = planned.cluster_api_url.clone().require("cluster_api_url")?;
        let request = build_create_acl_request(planned)?;
        self.data_plane.create_acl(&url, request).await?;
        let listed = self
            .data_plane
            .list_acls(&url, build_acl_filter(planned)?)
            .await?;
        acl_model_from_list(planned, &listed)
    }

    /// Refresh an ACL from the service.
    #[instrument(skip(self, prior), fields(principal = ?prior.principal))]
    pub async fn read(&self, prior: &AclModel) -> Result<Option<AclModel>, ProviderError> {
        let url = prior.cluster_api_url.clone().require("cluster_api_url")?;
        let listed = self
            .data_plane
            .list_acls(&url, build_acl_filter(prior)?)
            .await?;
        let principal = prior.principal.as_option().cloned().unwrap_or_default();
        found(acl_model_from_list(prior, &listed), "acl", &principal)
    }

    /// Delete an ACL.
    #[instrument(skip(self, prior), fields(principal = ?prior.principal))]
    pub async fn delete(&self, prior: &AclModel) -> Result<(), ProviderError> {
        let url = prior.cluster_api_url.clone().require("cluster_api_url")?;
        self.data_plane
            .delete_acls(&url, build_acl_filter(prior)?)
            .await
    }
}

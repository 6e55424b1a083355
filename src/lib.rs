//! Redpanda provider
//!
//! Conversions between a declarative infrastructure provider's typed
//! configuration records (Models) and the protobuf messages of the Redpanda
//! Cloud control plane and cluster data plane.
//!
//! # Overview
//!
//! - **Typed values** ([`value`]): tri-state [`Value`] (null, unknown,
//!   known) and the dynamic [`Object`] used for nested blocks
//! - **Schemas** ([`schema`], [`validation`]): attribute-type descriptors and
//!   validation against them
//! - **Request builders** ([`cluster`], [`user`], [`acl`]): Model to wire
//! - **Response mappers** (same modules): wire to Model, collecting every
//!   failure as a diagnostic
//! - **Update masks** ([`diff`]): structural diff of two update messages
//! - **Resources** ([`resource`]): CRUD orchestration over async service
//!   traits
//!
//! # Quick Start
//!
//! ```ignore
//! use redpanda_provider::{
//!     cluster::build_create_request, diff::generate_update, ClusterModel, Value,
//! };
//!
//! let planned = ClusterModel {
//!     cloud_provider: Value::Known("gcp".into()),
//!     cluster_type: Value::Known("dedicated".into()),
//!     zones: Value::Known(vec!["us-west1-a".into()]),
//!     ..Default::default()
//! };
//! let create = build_create_request(&planned)?;
//! ```
//!
//! # State encoding
//!
//! Models are persisted as JSON objects. `null` is a null value, the string
//! [`UNKNOWN_SENTINEL`] is an unknown value, and everything else is known.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accessor;
pub mod acl;
pub mod cluster;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod model;
pub mod resource;
pub mod schema;
pub mod testing;
pub mod types;
pub mod user;
pub mod validation;
pub mod value;

pub mod generated;

// Re-export main types at crate root
pub use config::ProviderConfig;
pub use diff::{apply_mask, generate_update, Diffable, MaskConvention, UpdateDiff};
pub use error::ProviderError;
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use model::{AclModel, ClusterModel, Model, UserModel};
pub use resource::{AclResource, ClusterResource, ControlPlane, DataPlane, UserResource};
pub use schema::{Diagnostic, ProviderSchema, Schema};
pub use validation::{is_valid, validate, validate_result};
pub use value::{AttrValue, Object, Value, UNKNOWN_SENTINEL};

// Re-export async_trait for service implementations
pub use async_trait::async_trait;

/// Schemas of every resource, plus the provider block.
pub fn provider_schema() -> ProviderSchema {
    ProviderSchema::new()
        .with_provider_config(ProviderConfig::schema())
        .with_resource("redpanda_cluster", model::cluster_schema().clone())
        .with_resource("redpanda_user", model::user_schema().clone())
        .with_resource("redpanda_acl", model::acl_schema().clone())
}

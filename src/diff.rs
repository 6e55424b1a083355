//! Structural diff and update-mask generation for wire update messages.
//!
//! [`generate_update`] walks two messages of the same type field by field and
//! returns a message holding only the planned values of fields that changed,
//! together with the dotted paths of those fields as a
//! [`FieldMask`](prost_types::FieldMask). [`apply_mask`] is the service-side
//! inverse: it copies the masked fields of a changed-fields message onto a
//! stored one.
//!
//! Messages opt in through the [`Diffable`] trait, implemented here for the
//! whole `ClusterUpdate` tree by the `impl_diffable!` macro. No reflection is
//! involved: each implementation visits the message's fields in declaration
//! order.
//!
//! # Mask conventions
//!
//! With [`MaskConvention::Leaf`] a nested message present on both sides is
//! descended into and only its changed leaves are reported
//! (`kafka_api.mtls.enabled`). With [`MaskConvention::Subtree`] the whole
//! nested message is replaced and only its own path is reported
//! (`kafka_api`). Either way a nested message that appears or disappears is
//! reported at its own path, and the identifier field is always carried into
//! the output without entering the mask.
//!
//! # Example
//!
//! ```
//! use redpanda_provider::diff::{generate_update, MaskConvention};
//! use redpanda_provider::generated::controlplane::ClusterUpdate;
//!
//! let prior = ClusterUpdate { id: "c1".into(), name: "old".into(), ..Default::default() };
//! let planned = ClusterUpdate { id: "c1".into(), name: "new".into(), ..Default::default() };
//!
//! let update = generate_update(&planned, &prior, MaskConvention::Leaf);
//! assert_eq!(update.mask.paths, vec!["name".to_string()]);
//! assert_eq!(update.changed.id, "c1");
//! ```

use prost_types::FieldMask;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProviderError;
use crate::generated::controlplane::{
    customer_managed_resources, maintenance_window_config, Anytime, AwsArn, AwsPrivateLinkSpec,
    AzurePrivateLinkSpec, ClusterUpdate, CustomerManagedAws, CustomerManagedGcp,
    CustomerManagedResources, DayHour, GcpName, GcpPrivateServiceConnectSpec, GcpServiceAccount,
    GcpSubnet, HttpProxySpec, KafkaApiSpec, KafkaConnect, MaintenanceWindowConfig, MtlsSpec,
    SchemaRegistrySpec, Unspecified,
};

/// How changes inside nested messages are reported in the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskConvention {
    /// Report each changed leaf field.
    #[default]
    Leaf,
    /// Report the outermost nested message containing a change.
    Subtree,
}

/// Accumulates mask paths while a diff descends through nested messages.
#[derive(Debug)]
pub struct MaskBuilder {
    convention: MaskConvention,
    prefix: Vec<&'static str>,
    paths: Vec<String>,
}

impl MaskBuilder {
    /// Create an empty builder.
    pub fn new(convention: MaskConvention) -> Self {
        Self {
            convention,
            prefix: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// The convention this builder follows.
    pub fn convention(&self) -> MaskConvention {
        self.convention
    }

    /// Record a changed field of the message currently being visited.
    pub fn push(&mut self, name: &'static str) {
        let mut path = self.prefix.join(".");
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(name);
        self.paths.push(path);
    }

    /// Visit the fields of a nested message.
    pub fn nested(&mut self, name: &'static str, visit: impl FnOnce(&mut Self)) {
        self.prefix.push(name);
        visit(self);
        self.prefix.pop();
    }

    /// Finish, returning the recorded paths in visit order.
    pub fn into_paths(self) -> Vec<String> {
        self.paths
    }
}

/// A wire message that can be diffed field by field.
pub trait Diffable: Clone + Default + PartialEq {
    /// Copy into `out` every field of `planned` that differs from `prior`,
    /// recording its path in `mask`.
    fn diff_fields(planned: &Self, prior: &Self, out: &mut Self, mask: &mut MaskBuilder);

    /// Copy the field at `path` (relative to this message) from `source`.
    fn merge_path(&mut self, source: &Self, path: &[&str]) -> Result<(), ProviderError>;
}

/// A protobuf oneof whose variants each hold a [`Diffable`] message.
///
/// Variants are addressed in masks by their own field names, as members of
/// the enclosing message.
pub trait DiffableOneof: Clone + PartialEq + Sized {
    /// The field name of this variant.
    fn variant_name(&self) -> &'static str;

    /// Diff an optional oneof field.
    fn diff_oneof(
        planned: &Option<Self>,
        prior: &Option<Self>,
        out: &mut Option<Self>,
        mask: &mut MaskBuilder,
    );

    /// Copy the variant at `path` from `source`. Returns `None` when the
    /// first path segment names none of this oneof's variants.
    fn merge_oneof(
        target: &mut Option<Self>,
        source: &Option<Self>,
        path: &[&str],
    ) -> Option<Result<(), ProviderError>>;
}

/// The result of diffing two update messages.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDiff<M> {
    /// The planned values of the changed fields; every other field is left
    /// at its default, except the identifier.
    pub changed: M,
    /// Dotted paths of the changed fields.
    pub mask: FieldMask,
}

impl<M> UpdateDiff<M> {
    /// Whether nothing changed.
    pub fn is_empty(&self) -> bool {
        self.mask.paths.is_empty()
    }
}

/// Diff `planned` against `prior`.
pub fn generate_update<M: Diffable>(
    planned: &M,
    prior: &M,
    convention: MaskConvention,
) -> UpdateDiff<M> {
    let mut changed = M::default();
    let mut mask = MaskBuilder::new(convention);
    M::diff_fields(planned, prior, &mut changed, &mut mask);
    let paths = mask.into_paths();
    debug!(paths = paths.len(), ?convention, "Computed update mask");
    UpdateDiff {
        changed,
        mask: FieldMask { paths },
    }
}

/// Apply the masked fields of `changed` onto `target`.
pub fn apply_mask<M: Diffable>(
    target: &mut M,
    changed: &M,
    mask: &FieldMask,
) -> Result<(), ProviderError> {
    for path in &mask.paths {
        let segments: Vec<&str> = path.split('.').collect();
        target.merge_path(changed, &segments)?;
    }
    Ok(())
}

/// Diff a scalar, repeated or map field by value.
pub fn diff_scalar<T: Clone + PartialEq>(
    name: &'static str,
    planned: &T,
    prior: &T,
    out: &mut T,
    mask: &mut MaskBuilder,
) {
    if planned != prior {
        *out = planned.clone();
        mask.push(name);
    }
}

/// Diff an optional nested message.
pub fn diff_message<M: Diffable>(
    name: &'static str,
    planned: &Option<M>,
    prior: &Option<M>,
    out: &mut Option<M>,
    mask: &mut MaskBuilder,
) {
    if planned == prior {
        return;
    }
    match (planned, prior) {
        (Some(p), Some(q)) if mask.convention() == MaskConvention::Leaf => {
            *out = Some(diff_nested(name, p, q, mask));
        },
        _ => {
            *out = planned.clone();
            mask.push(name);
        },
    }
}

fn diff_nested<M: Diffable>(
    name: &'static str,
    planned: &M,
    prior: &M,
    mask: &mut MaskBuilder,
) -> M {
    let mut child = M::default();
    mask.nested(name, |mask| M::diff_fields(planned, prior, &mut child, mask));
    child
}

/// Copy a scalar field from `source`. Scalars have no sub-paths.
pub fn merge_scalar<T: Clone>(
    name: &str,
    target: &mut T,
    source: &T,
    rest: &[&str],
) -> Result<(), ProviderError> {
    if !rest.is_empty() {
        return Err(ProviderError::Validation(format!(
            "field mask path descends into scalar field '{}'",
            name
        )));
    }
    *target = source.clone();
    Ok(())
}

/// Copy a nested message, or a path inside it, from `source`.
pub fn merge_message<M: Diffable>(
    name: &str,
    target: &mut Option<M>,
    source: &Option<M>,
    rest: &[&str],
) -> Result<(), ProviderError> {
    if rest.is_empty() {
        *target = source.clone();
        return Ok(());
    }
    let Some(source) = source else {
        return Err(ProviderError::Validation(format!(
            "field mask path descends into '{}' but the update does not set it",
            name
        )));
    };
    target.get_or_insert_with(M::default).merge_path(source, rest)
}

fn unknown_path(path: &[&str]) -> ProviderError {
    ProviderError::Validation(format!("unknown field mask path '{}'", path.join(".")))
}

macro_rules! diff_field {
    (scalar, $f:ident, $planned:ident, $prior:ident, $out:ident, $mask:ident) => {
        diff_scalar(stringify!($f), &$planned.$f, &$prior.$f, &mut $out.$f, $mask)
    };
    (id, $f:ident, $planned:ident, $prior:ident, $out:ident, $mask:ident) => {
        $out.$f = $planned.$f.clone()
    };
    (message, $f:ident, $planned:ident, $prior:ident, $out:ident, $mask:ident) => {
        diff_message(stringify!($f), &$planned.$f, &$prior.$f, &mut $out.$f, $mask)
    };
    (oneof, $f:ident, $planned:ident, $prior:ident, $out:ident, $mask:ident) => {
        DiffableOneof::diff_oneof(&$planned.$f, &$prior.$f, &mut $out.$f, $mask)
    };
}

macro_rules! merge_field {
    (scalar, $f:ident, $target:ident, $source:ident, $head:ident, $rest:ident) => {
        ($head == stringify!($f))
            .then(|| merge_scalar($head, &mut $target.$f, &$source.$f, $rest))
    };
    (id, $f:ident, $target:ident, $source:ident, $head:ident, $rest:ident) => {
        merge_field!(scalar, $f, $target, $source, $head, $rest)
    };
    (message, $f:ident, $target:ident, $source:ident, $head:ident, $rest:ident) => {
        ($head == stringify!($f))
            .then(|| merge_message($head, &mut $target.$f, &$source.$f, $rest))
    };
    (oneof, $f:ident, $target:ident, $source:ident, $head:ident, $rest:ident) => {
        DiffableOneof::merge_oneof(&mut $target.$f, &$source.$f, &[&[$head][..], $rest].concat())
    };
}

macro_rules! impl_diffable {
    ($ty:ty { $($f:ident: $kind:ident),* $(,)? }) => {
        impl Diffable for $ty {
            #[allow(unused_variables)]
            fn diff_fields(planned: &Self, prior: &Self, out: &mut Self, mask: &mut MaskBuilder) {
                $( diff_field!($kind, $f, planned, prior, out, mask); )*
            }

            #[allow(unused_variables)]
            fn merge_path(&mut self, source: &Self, path: &[&str]) -> Result<(), ProviderError> {
                let Some((&head, rest)) = path.split_first() else {
                    return Err(ProviderError::Validation("empty field mask path".into()));
                };
                let target = self;
                $(
                    if let Some(result) = merge_field!($kind, $f, target, source, head, rest) {
                        return result;
                    }
                )*
                Err(unknown_path(path))
            }
        }
    };
}

macro_rules! impl_diffable_oneof {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl DiffableOneof for $ty {
            fn variant_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $name, )+
                }
            }

            fn diff_oneof(
                planned: &Option<Self>,
                prior: &Option<Self>,
                out: &mut Option<Self>,
                mask: &mut MaskBuilder,
            ) {
                if planned == prior {
                    return;
                }
                match (planned, prior) {
                    $(
                        (Some(Self::$variant(p)), Some(Self::$variant(q)))
                            if mask.convention() == MaskConvention::Leaf =>
                        {
                            *out = Some(Self::$variant(diff_nested($name, p, q, mask)));
                        },
                    )+
                    (Some(p), _) => {
                        *out = planned.clone();
                        mask.push(p.variant_name());
                    },
                    (None, Some(q)) => mask.push(q.variant_name()),
                    (None, None) => {},
                }
            }

            fn merge_oneof(
                target: &mut Option<Self>,
                source: &Option<Self>,
                path: &[&str],
            ) -> Option<Result<(), ProviderError>> {
                let (&head, rest) = path.split_first()?;
                match head {
                    $(
                        $name => Some(if rest.is_empty() {
                            let selected = matches!(target, Some(Self::$variant(_)));
                            match source {
                                Some(Self::$variant(_)) => *target = source.clone(),
                                _ if selected => *target = None,
                                _ => {},
                            }
                            Ok(())
                        } else {
                            match source {
                                Some(Self::$variant(src)) => {
                                    if !matches!(target, Some(Self::$variant(_))) {
                                        *target = Some(Self::$variant(Default::default()));
                                    }
                                    match target {
                                        Some(Self::$variant(dst)) => dst.merge_path(src, rest),
                                        _ => Err(ProviderError::Sdk(format!(
                                            "oneof variant '{}' was not selected",
                                            $name
                                        ))),
                                    }
                                },
                                _ => Err(ProviderError::Validation(format!(
                                    "field mask path descends into '{}' but the update does not set it",
                                    $name
                                ))),
                            }
                        }),
                    )+
                    _ => None,
                }
            }
        }
    };
}

impl_diffable!(ClusterUpdate {
    id: id,
    name: scalar,
    read_replica_cluster_ids: scalar,
    kafka_api: message,
    http_proxy: message,
    schema_registry: message,
    aws_private_link: message,
    gcp_private_service_connect: message,
    azure_private_link: message,
    cloud_provider_tags: scalar,
    maintenance_window_config: message,
    customer_managed_resources: message,
    kafka_connect: message,
    gcp_global_access_enabled: scalar,
});

impl_diffable!(MtlsSpec {
    enabled: scalar,
    ca_certificates_pem: scalar,
    principal_mapping_rules: scalar,
});

impl_diffable!(KafkaApiSpec { mtls: message });
impl_diffable!(HttpProxySpec { mtls: message });
impl_diffable!(SchemaRegistrySpec { mtls: message });
impl_diffable!(KafkaConnect { enabled: scalar });

impl_diffable!(AwsPrivateLinkSpec {
    enabled: scalar,
    connect_console: scalar,
    allowed_principals: scalar,
});

impl_diffable!(GcpPrivateServiceConnectSpec {
    enabled: scalar,
    global_access_enabled: scalar,
    consumer_accept_list: scalar,
});

impl_diffable!(AzurePrivateLinkSpec {
    enabled: scalar,
    connect_console: scalar,
    allowed_subscriptions: scalar,
});

impl_diffable!(MaintenanceWindowConfig { window: oneof });
impl_diffable!(DayHour {
    hour_of_day: scalar,
    day_of_week: scalar,
});
impl_diffable!(Anytime {});
impl_diffable!(Unspecified {});

impl_diffable_oneof!(maintenance_window_config::Window {
    DayHour => "day_hour",
    Anytime => "anytime",
    Unspecified => "unspecified",
});

impl_diffable!(CustomerManagedResources { cloud_provider: oneof });

impl_diffable_oneof!(customer_managed_resources::CloudProvider {
    Aws => "aws",
    Gcp => "gcp",
});

impl_diffable!(AwsArn { arn: scalar });

impl_diffable!(CustomerManagedAws {
    agent_instance_profile: message,
    connectors_node_group_instance_profile: message,
    utility_node_group_instance_profile: message,
    redpanda_node_group_instance_profile: message,
    k8s_cluster_role: message,
    redpanda_agent_security_group: message,
    connectors_security_group: message,
    redpanda_node_group_security_group: message,
    utility_security_group: message,
    cluster_security_group: message,
    node_security_group: message,
    cloud_storage_bucket: message,
    permissions_boundary_policy: message,
});

impl_diffable!(GcpName { name: scalar });
impl_diffable!(GcpServiceAccount { email: scalar });

impl_diffable!(GcpSubnet {
    name: scalar,
    secondary_ipv4_range_pods: message,
    secondary_ipv4_range_services: message,
    k8s_master_ipv4_range: scalar,
});

impl_diffable!(CustomerManagedGcp {
    subnet: message,
    agent_service_account: message,
    console_service_account: message,
    connector_service_account: message,
    redpanda_cluster_service_account: message,
    gke_service_account: message,
    tiered_storage_bucket: message,
    psc_nat_subnet_name: scalar,
});

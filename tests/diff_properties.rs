//! Property-based tests for update-mask generation.
//!
//! Values are drawn from small domains so that generated pairs often share
//! fields, which exercises the partially-changed paths as well as the
//! fully-different ones.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use redpanda_provider::diff::{apply_mask, generate_update, MaskConvention};
use redpanda_provider::generated::controlplane::{
    customer_managed_resources::CloudProvider as CmrProvider,
    maintenance_window_config::Window, Anytime, AwsArn, AwsPrivateLinkSpec, ClusterUpdate,
    CustomerManagedAws, CustomerManagedGcp, CustomerManagedResources, DayHour, GcpName, GcpSubnet,
    KafkaApiSpec, KafkaConnect, MaintenanceWindowConfig, MtlsSpec, Unspecified,
};

fn arb_word() -> impl Strategy<Value = String> {
    "[ab]{0,2}"
}

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_word(), 0..3)
}

fn arb_mtls() -> impl Strategy<Value = MtlsSpec> {
    (any::<bool>(), arb_words(), arb_words()).prop_map(
        |(enabled, ca_certificates_pem, principal_mapping_rules)| MtlsSpec {
            enabled,
            ca_certificates_pem,
            principal_mapping_rules,
        },
    )
}

fn arb_kafka_api() -> impl Strategy<Value = Option<KafkaApiSpec>> {
    prop::option::of(prop::option::of(arb_mtls()).prop_map(|mtls| KafkaApiSpec { mtls }))
}

fn arb_private_link() -> impl Strategy<Value = Option<AwsPrivateLinkSpec>> {
    prop::option::of((any::<bool>(), any::<bool>(), arb_words()).prop_map(
        |(enabled, connect_console, allowed_principals)| AwsPrivateLinkSpec {
            enabled,
            connect_console,
            allowed_principals,
        },
    ))
}

fn arb_window() -> impl Strategy<Value = Window> {
    prop_oneof![
        (0..3i32, 0..3i32).prop_map(|(hour_of_day, day_of_week)| Window::DayHour(DayHour {
            hour_of_day,
            day_of_week,
        })),
        Just(Window::Anytime(Anytime {})),
        Just(Window::Unspecified(Unspecified {})),
    ]
}

fn arb_maintenance() -> impl Strategy<Value = Option<MaintenanceWindowConfig>> {
    prop::option::of(
        prop::option::of(arb_window()).prop_map(|window| MaintenanceWindowConfig { window }),
    )
}

fn arb_arn() -> impl Strategy<Value = Option<AwsArn>> {
    prop::option::of(arb_word().prop_map(|arn| AwsArn { arn }))
}

fn arb_cmr() -> impl Strategy<Value = Option<CustomerManagedResources>> {
    let aws = (arb_arn(), arb_arn()).prop_map(|(agent, bucket)| {
        CmrProvider::Aws(CustomerManagedAws {
            agent_instance_profile: agent,
            cloud_storage_bucket: bucket,
            ..Default::default()
        })
    });
    let gcp = (arb_word(), arb_word()).prop_map(|(subnet, pods)| {
        CmrProvider::Gcp(CustomerManagedGcp {
            subnet: Some(GcpSubnet {
                name: subnet,
                secondary_ipv4_range_pods: Some(GcpName { name: pods }),
                ..Default::default()
            }),
            ..Default::default()
        })
    });
    prop::option::of(
        prop::option::of(prop_oneof![aws, gcp])
            .prop_map(|cloud_provider| CustomerManagedResources { cloud_provider }),
    )
}

fn arb_tags() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map("[ab]", arb_word(), 0..3)
}

fn arb_update() -> impl Strategy<Value = ClusterUpdate> {
    (
        arb_word(),
        arb_words(),
        arb_kafka_api(),
        arb_private_link(),
        arb_tags(),
        arb_maintenance(),
        arb_cmr(),
        prop::option::of(any::<bool>().prop_map(|enabled| KafkaConnect { enabled })),
        any::<bool>(),
    )
        .prop_map(
            |(
                name,
                read_replica_cluster_ids,
                kafka_api,
                aws_private_link,
                cloud_provider_tags,
                maintenance_window_config,
                customer_managed_resources,
                kafka_connect,
                gcp_global_access_enabled,
            )| ClusterUpdate {
                id: "c-1".into(),
                name,
                read_replica_cluster_ids,
                kafka_api,
                aws_private_link,
                cloud_provider_tags,
                maintenance_window_config,
                customer_managed_resources,
                kafka_connect,
                gcp_global_access_enabled,
                ..Default::default()
            },
        )
}

fn arb_convention() -> impl Strategy<Value = MaskConvention> {
    prop_oneof![Just(MaskConvention::Leaf), Just(MaskConvention::Subtree)]
}

fn top_level(paths: &[String]) -> BTreeSet<String> {
    paths
        .iter()
        .map(|path| path.split('.').next().unwrap_or_default().to_string())
        .collect()
}

proptest! {
    /// A message diffed against itself changes nothing
    #[test]
    fn diff_against_self_is_empty(update in arb_update(), convention in arb_convention()) {
        let diff = generate_update(&update, &update, convention);
        prop_assert!(diff.is_empty());
        prop_assert_eq!(diff.changed.id, update.id);
    }

    /// Applying the diff to the prior message reproduces the planned one
    #[test]
    fn apply_reproduces_planned(
        planned in arb_update(),
        prior in arb_update(),
        convention in arb_convention()
    ) {
        let diff = generate_update(&planned, &prior, convention);
        let mut stored = prior.clone();
        prop_assert!(apply_mask(&mut stored, &diff.changed, &diff.mask).is_ok());
        prop_assert_eq!(stored, planned);
    }

    /// The mask is empty exactly when the messages are equal
    #[test]
    fn mask_is_empty_iff_equal(
        planned in arb_update(),
        prior in arb_update(),
        convention in arb_convention()
    ) {
        let diff = generate_update(&planned, &prior, convention);
        prop_assert_eq!(diff.is_empty(), planned == prior);
    }

    /// Subtree masks name exactly the top-level fields a leaf mask touches
    #[test]
    fn subtree_mask_is_leaf_mask_truncated(planned in arb_update(), prior in arb_update()) {
        let leaf = generate_update(&planned, &prior, MaskConvention::Leaf);
        let subtree = generate_update(&planned, &prior, MaskConvention::Subtree);

        prop_assert!(subtree.mask.paths.iter().all(|path| !path.contains('.')));
        prop_assert_eq!(top_level(&leaf.mask.paths), top_level(&subtree.mask.paths));
    }

    /// Mask paths never repeat
    #[test]
    fn mask_paths_are_unique(
        planned in arb_update(),
        prior in arb_update(),
        convention in arb_convention()
    ) {
        let diff = generate_update(&planned, &prior, convention);
        let unique: BTreeSet<_> = diff.mask.paths.iter().collect();
        prop_assert_eq!(unique.len(), diff.mask.paths.len());
    }

    /// Changing only the name yields a single top-level path
    #[test]
    fn single_field_change_yields_single_path(
        prior in arb_update(),
        name in "[cd]{1,3}",
        convention in arb_convention()
    ) {
        let planned = ClusterUpdate { name: name.clone(), ..prior.clone() };
        let diff = generate_update(&planned, &prior, convention);
        prop_assert_eq!(diff.mask.paths, vec!["name".to_string()]);
        prop_assert_eq!(diff.changed.name, name);
        prop_assert!(diff.changed.kafka_api.is_none());
    }

    /// Moving the maintenance window between variants masks the variant names
    #[test]
    fn window_variant_switch_masks_variant(hour in 0..24i32) {
        let prior = ClusterUpdate {
            id: "c-1".into(),
            maintenance_window_config: Some(MaintenanceWindowConfig {
                window: Some(Window::Anytime(Anytime {})),
            }),
            ..Default::default()
        };
        let planned = ClusterUpdate {
            maintenance_window_config: Some(MaintenanceWindowConfig {
                window: Some(Window::DayHour(DayHour { hour_of_day: hour, day_of_week: 1 })),
            }),
            ..prior.clone()
        };
        let diff = generate_update(&planned, &prior, MaskConvention::Leaf);
        prop_assert_eq!(
            diff.mask.paths,
            vec!["maintenance_window_config.day_hour".to_string()]
        );
    }
}

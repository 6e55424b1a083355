//! AWS PrivateLink, GCP Private Service Connect and Azure Private Link.
//!
//! Each block is settable on create and update, and comes back from the
//! service with a server-computed `status` that is only materialized while
//! the feature is enabled.

use std::sync::LazyLock;

use crate::accessor::Attrs;
use crate::error::ProviderError;
use crate::generated::controlplane::{
    AwsDnsEntry, AwsPrivateLink, AwsPrivateLinkSpec, AwsPrivateLinkStatus,
    AwsVpcEndpointConnection, AzureEndpointConnection, AzurePrivateLink, AzurePrivateLinkSpec,
    AzurePrivateLinkStatus, GcpConnectedEndpoint, GcpPrivateServiceConnect,
    GcpPrivateServiceConnectSpec, GcpPrivateServiceConnectStatus, GcpPscConsumer,
};
use crate::schema::{AttributeType, ObjectType};
use crate::value::{join_path, AttrValue, Object, Value};

use super::{non_empty, Collector};

const PORT_ATTRIBUTES: [&str; 5] = [
    "kafka_api_seed_port",
    "schema_registry_seed_port",
    "redpanda_proxy_seed_port",
    "kafka_api_node_base_port",
    "redpanda_proxy_node_base_port",
];

fn with_ports(ty: ObjectType) -> ObjectType {
    PORT_ATTRIBUTES
        .iter()
        .fold(ty, |ty, name| ty.with(*name, AttributeType::Int64))
}

fn object_list(object_type: &ObjectType) -> AttributeType {
    AttributeType::list(AttributeType::Object(object_type.clone()))
}

static AWS_DNS_ENTRY_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with("dns_name", AttributeType::String)
        .with("hosted_zone_id", AttributeType::String)
});

static AWS_VPC_ENDPOINT_CONNECTION_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with("id", AttributeType::String)
        .with("owner", AttributeType::String)
        .with("state", AttributeType::String)
        .with("created_at", AttributeType::String)
        .with("connection_id", AttributeType::String)
        .with("load_balancer_arns", AttributeType::string_list())
        .with("dns_entries", object_list(&AWS_DNS_ENTRY_TYPE))
});

/// Status of an AWS PrivateLink endpoint service.
pub static AWS_PRIVATE_LINK_STATUS_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    with_ports(
        ObjectType::new()
            .with("service_id", AttributeType::String)
            .with("service_name", AttributeType::String)
            .with("service_state", AttributeType::String)
            .with("created_at", AttributeType::String)
            .with("deleted_at", AttributeType::String)
            .with(
                "vpc_endpoint_connections",
                object_list(&AWS_VPC_ENDPOINT_CONNECTION_TYPE),
            )
            .with("console_port", AttributeType::Int64),
    )
});

/// The `aws_private_link` block.
pub static AWS_PRIVATE_LINK_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with("enabled", AttributeType::Bool)
        .with("connect_console", AttributeType::Bool)
        .with("allowed_principals", AttributeType::string_list())
        .with_object("status", &AWS_PRIVATE_LINK_STATUS_TYPE)
});

static GCP_PSC_CONSUMER_TYPE: LazyLock<ObjectType> =
    LazyLock::new(|| ObjectType::new().with("source", AttributeType::String));

static GCP_CONNECTED_ENDPOINT_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with("connection_id", AttributeType::String)
        .with("consumer_network", AttributeType::String)
        .with("endpoint", AttributeType::String)
        .with("status", AttributeType::String)
});

/// Status of a GCP Private Service Connect service attachment.
pub static GCP_PSC_STATUS_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    with_ports(
        ObjectType::new()
            .with("service_attachment", AttributeType::String)
            .with("created_at", AttributeType::String)
            .with("deleted_at", AttributeType::String)
            .with(
                "connected_endpoints",
                object_list(&GCP_CONNECTED_ENDPOINT_TYPE),
            )
            .with("dns_a_records", AttributeType::string_list())
            .with("seed_hostname", AttributeType::String),
    )
});

/// The `gcp_private_service_connect` block.
pub static GCP_PSC_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with("enabled", AttributeType::Bool)
        .with("global_access_enabled", AttributeType::Bool)
        .with("consumer_accept_list", object_list(&GCP_PSC_CONSUMER_TYPE))
        .with_object("status", &GCP_PSC_STATUS_TYPE)
});

static AZURE_ENDPOINT_CONNECTION_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with("private_endpoint_name", AttributeType::String)
        .with("private_endpoint_id", AttributeType::String)
        .with("connection_name", AttributeType::String)
        .with("connection_id", AttributeType::String)
        .with("status", AttributeType::String)
        .with("created_at", AttributeType::String)
});

/// Status of an Azure Private Link service.
pub static AZURE_PRIVATE_LINK_STATUS_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    with_ports(
        ObjectType::new()
            .with("service_id", AttributeType::String)
            .with("service_name", AttributeType::String)
            .with("created_at", AttributeType::String)
            .with("deleted_at", AttributeType::String)
            .with("approved_subscriptions", AttributeType::string_list())
            .with(
                "private_endpoint_connections",
                object_list(&AZURE_ENDPOINT_CONNECTION_TYPE),
            )
            .with("dns_a_record", AttributeType::String)
            .with("console_port", AttributeType::Int64),
    )
});

/// The `azure_private_link` block.
pub static AZURE_PRIVATE_LINK_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with("enabled", AttributeType::Bool)
        .with("connect_console", AttributeType::Bool)
        .with("allowed_subscriptions", AttributeType::string_list())
        .with_object("status", &AZURE_PRIVATE_LINK_STATUS_TYPE)
});

// Request side.

/// Build the AWS PrivateLink spec. A null block is omitted.
pub fn aws_private_link_spec(
    block: &Value<Object>,
) -> Result<Option<AwsPrivateLinkSpec>, ProviderError> {
    let Some(object) = block.as_option() else {
        return Ok(None);
    };
    let attrs = Attrs::at(object, "aws_private_link");
    Ok(Some(AwsPrivateLinkSpec {
        enabled: attrs.required_bool("enabled")?,
        connect_console: attrs.bool("connect_console")?.unwrap_or_default(),
        allowed_principals: attrs.string_list("allowed_principals")?.unwrap_or_default(),
    }))
}

/// Build the GCP Private Service Connect spec. A null block is omitted.
pub fn gcp_private_service_connect_spec(
    block: &Value<Object>,
) -> Result<Option<GcpPrivateServiceConnectSpec>, ProviderError> {
    let Some(object) = block.as_option() else {
        return Ok(None);
    };
    let attrs = Attrs::at(object, "gcp_private_service_connect");
    let consumer_accept_list = match attrs.object_list("consumer_accept_list")?.into_option() {
        Some(consumers) => consumers
            .iter()
            .map(|consumer| {
                Ok(GcpPscConsumer {
                    source: consumer.attrs().required_string("source")?,
                })
            })
            .collect::<Result<Vec<_>, ProviderError>>()?,
        None => Vec::new(),
    };
    Ok(Some(GcpPrivateServiceConnectSpec {
        enabled: attrs.required_bool("enabled")?,
        global_access_enabled: attrs.bool("global_access_enabled")?.unwrap_or_default(),
        consumer_accept_list,
    }))
}

/// Build the Azure Private Link spec. A null block is omitted.
pub fn azure_private_link_spec(
    block: &Value<Object>,
) -> Result<Option<AzurePrivateLinkSpec>, ProviderError> {
    let Some(object) = block.as_option() else {
        return Ok(None);
    };
    let attrs = Attrs::at(object, "azure_private_link");
    Ok(Some(AzurePrivateLinkSpec {
        enabled: attrs.required_bool("enabled")?,
        connect_console: attrs.bool("connect_console")?.unwrap_or_default(),
        allowed_subscriptions: attrs
            .string_list("allowed_subscriptions")?
            .unwrap_or_default(),
    }))
}

// Response side.

fn build_list<T>(
    items: &[T],
    path: &str,
    collector: &mut Collector,
    build: impl Fn(&T, &str, &mut Collector) -> Result<Object, ProviderError>,
) -> AttrValue {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let item_path = format!("{}.{}", path, i);
        let result = build(item, &item_path, collector);
        if let Some(object) = collector.take(&item_path, result) {
            out.push(AttrValue::Object(object));
        }
    }
    AttrValue::List(out)
}

/// Map the AWS PrivateLink block.
///
/// Absent, or disabled with console access off and no principals, reads as
/// null.
pub(crate) fn aws_private_link_object(
    link: Option<&AwsPrivateLink>,
    collector: &mut Collector,
) -> Value<Object> {
    let Some(link) = link else {
        return Value::Null;
    };
    if !link.enabled && !link.connect_console && link.allowed_principals.is_empty() {
        return Value::Null;
    }
    let status = match (&link.status, link.enabled) {
        (Some(status), true) => aws_status_object(status, collector),
        _ => Value::Null,
    };
    let result = Object::builder(&AWS_PRIVATE_LINK_TYPE)
        .set("enabled", link.enabled)
        .set("connect_console", link.connect_console)
        .set("allowed_principals", link.allowed_principals.clone())
        .set("status", status)
        .build();
    collector.known("aws_private_link", result)
}

fn aws_status_object(status: &AwsPrivateLinkStatus, collector: &mut Collector) -> Value<Object> {
    const PATH: &str = "aws_private_link.status";
    let connections = build_list(
        &status.vpc_endpoint_connections,
        &join_path(PATH, "vpc_endpoint_connections"),
        collector,
        vpc_endpoint_connection_object,
    );
    let result = Object::builder(&AWS_PRIVATE_LINK_STATUS_TYPE)
        .set("service_id", non_empty(&status.service_id))
        .set("service_name", non_empty(&status.service_name))
        .set("service_state", non_empty(&status.service_state))
        .set(
            "created_at",
            collector.timestamp(&join_path(PATH, "created_at"), status.created_at.as_ref()),
        )
        .set(
            "deleted_at",
            collector.timestamp(&join_path(PATH, "deleted_at"), status.deleted_at.as_ref()),
        )
        .set("vpc_endpoint_connections", connections)
        .set("kafka_api_seed_port", status.kafka_api_seed_port)
        .set("schema_registry_seed_port", status.schema_registry_seed_port)
        .set("redpanda_proxy_seed_port", status.redpanda_proxy_seed_port)
        .set("kafka_api_node_base_port", status.kafka_api_node_base_port)
        .set(
            "redpanda_proxy_node_base_port",
            status.redpanda_proxy_node_base_port,
        )
        .set("console_port", status.console_port)
        .build();
    collector.known(PATH, result)
}

fn vpc_endpoint_connection_object(
    conn: &AwsVpcEndpointConnection,
    path: &str,
    collector: &mut Collector,
) -> Result<Object, ProviderError> {
    let dns_entries: Vec<AttrValue> = conn
        .dns_entries
        .iter()
        .map(dns_entry_object)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(AttrValue::Object)
        .collect();
    Object::builder(&AWS_VPC_ENDPOINT_CONNECTION_TYPE)
        .set("id", non_empty(&conn.id))
        .set("owner", non_empty(&conn.owner))
        .set("state", non_empty(&conn.state))
        .set(
            "created_at",
            collector.timestamp(&join_path(path, "created_at"), conn.created_at.as_ref()),
        )
        .set("connection_id", non_empty(&conn.connection_id))
        .set("load_balancer_arns", conn.load_balancer_arns.clone())
        .set("dns_entries", AttrValue::List(dns_entries))
        .build()
}

fn dns_entry_object(entry: &AwsDnsEntry) -> Result<Object, ProviderError> {
    Object::builder(&AWS_DNS_ENTRY_TYPE)
        .set("dns_name", non_empty(&entry.dns_name))
        .set("hosted_zone_id", non_empty(&entry.hosted_zone_id))
        .build()
}

/// Map the GCP Private Service Connect block.
///
/// Absent, or disabled without global access and with an empty accept list,
/// reads as null.
pub(crate) fn gcp_private_service_connect_object(
    psc: Option<&GcpPrivateServiceConnect>,
    collector: &mut Collector,
) -> Value<Object> {
    let Some(psc) = psc else {
        return Value::Null;
    };
    if !psc.enabled && !psc.global_access_enabled && psc.consumer_accept_list.is_empty() {
        return Value::Null;
    }
    let consumers = build_list(
        &psc.consumer_accept_list,
        "gcp_private_service_connect.consumer_accept_list",
        collector,
        |consumer, _, _| {
            Object::builder(&GCP_PSC_CONSUMER_TYPE)
                .set("source", consumer.source.as_str())
                .build()
        },
    );
    let status = match (&psc.status, psc.enabled) {
        (Some(status), true) => gcp_status_object(status, collector),
        _ => Value::Null,
    };
    let result = Object::builder(&GCP_PSC_TYPE)
        .set("enabled", psc.enabled)
        .set("global_access_enabled", psc.global_access_enabled)
        .set("consumer_accept_list", consumers)
        .set("status", status)
        .build();
    collector.known("gcp_private_service_connect", result)
}

fn gcp_status_object(
    status: &GcpPrivateServiceConnectStatus,
    collector: &mut Collector,
) -> Value<Object> {
    const PATH: &str = "gcp_private_service_connect.status";
    let endpoints = build_list(
        &status.connected_endpoints,
        &join_path(PATH, "connected_endpoints"),
        collector,
        |endpoint: &GcpConnectedEndpoint, _, _| {
            Object::builder(&GCP_CONNECTED_ENDPOINT_TYPE)
                .set("connection_id", non_empty(&endpoint.connection_id))
                .set("consumer_network", non_empty(&endpoint.consumer_network))
                .set("endpoint", non_empty(&endpoint.endpoint))
                .set("status", non_empty(&endpoint.status))
                .build()
        },
    );
    let result = Object::builder(&GCP_PSC_STATUS_TYPE)
        .set("service_attachment", non_empty(&status.service_attachment))
        .set(
            "created_at",
            collector.timestamp(&join_path(PATH, "created_at"), status.created_at.as_ref()),
        )
        .set(
            "deleted_at",
            collector.timestamp(&join_path(PATH, "deleted_at"), status.deleted_at.as_ref()),
        )
        .set("kafka_api_seed_port", status.kafka_api_seed_port)
        .set("schema_registry_seed_port", status.schema_registry_seed_port)
        .set("redpanda_proxy_seed_port", status.redpanda_proxy_seed_port)
        .set("kafka_api_node_base_port", status.kafka_api_node_base_port)
        .set(
            "redpanda_proxy_node_base_port",
            status.redpanda_proxy_node_base_port,
        )
        .set("connected_endpoints", endpoints)
        .set("dns_a_records", status.dns_a_records.clone())
        .set("seed_hostname", non_empty(&status.seed_hostname))
        .build();
    collector.known(PATH, result)
}

/// Map the Azure Private Link block.
///
/// Absent, or disabled with console access off and no subscriptions, reads
/// as null.
pub(crate) fn azure_private_link_object(
    link: Option<&AzurePrivateLink>,
    collector: &mut Collector,
) -> Value<Object> {
    let Some(link) = link else {
        return Value::Null;
    };
    if !link.enabled && !link.connect_console && link.allowed_subscriptions.is_empty() {
        return Value::Null;
    }
    let status = match (&link.status, link.enabled) {
        (Some(status), true) => azure_status_object(status, collector),
        _ => Value::Null,
    };
    let result = Object::builder(&AZURE_PRIVATE_LINK_TYPE)
        .set("enabled", link.enabled)
        .set("connect_console", link.connect_console)
        .set("allowed_subscriptions", link.allowed_subscriptions.clone())
        .set("status", status)
        .build();
    collector.known("azure_private_link", result)
}

fn azure_status_object(status: &AzurePrivateLinkStatus, collector: &mut Collector) -> Value<Object> {
    const PATH: &str = "azure_private_link.status";
    let connections = build_list(
        &status.private_endpoint_connections,
        &join_path(PATH, "private_endpoint_connections"),
        collector,
        |conn: &AzureEndpointConnection, path, collector| {
            Object::builder(&AZURE_ENDPOINT_CONNECTION_TYPE)
                .set("private_endpoint_name", non_empty(&conn.private_endpoint_name))
                .set("private_endpoint_id", non_empty(&conn.private_endpoint_id))
                .set("connection_name", non_empty(&conn.connection_name))
                .set("connection_id", non_empty(&conn.connection_id))
                .set("status", non_empty(&conn.status))
                .set(
                    "created_at",
                    collector.timestamp(&join_path(path, "created_at"), conn.created_at.as_ref()),
                )
                .build()
        },
    );
    let result = Object::builder(&AZURE_PRIVATE_LINK_STATUS_TYPE)
        .set("service_id", non_empty(&status.service_id))
        .set("service_name", non_empty(&status.service_name))
        .set(
            "created_at",
            collector.timestamp(&join_path(PATH, "created_at"), status.created_at.as_ref()),
        )
        .set(
            "deleted_at",
            collector.timestamp(&join_path(PATH, "deleted_at"), status.deleted_at.as_ref()),
        )
        .set("approved_subscriptions", status.approved_subscriptions.clone())
        .set("private_endpoint_connections", connections)
        .set("dns_a_record", non_empty(&status.dns_a_record))
        .set("kafka_api_seed_port", status.kafka_api_seed_port)
        .set("schema_registry_seed_port", status.schema_registry_seed_port)
        .set("redpanda_proxy_seed_port", status.redpanda_proxy_seed_port)
        .set("kafka_api_node_base_port", status.kafka_api_node_base_port)
        .set(
            "redpanda_proxy_node_base_port",
            status.redpanda_proxy_node_base_port,
        )
        .set("console_port", status.console_port)
        .build();
    collector.known(PATH, result)
}

//! mTLS settings of the Kafka API, HTTP proxy and schema registry blocks.

use std::sync::LazyLock;

use crate::accessor::Attrs;
use crate::error::ProviderError;
use crate::generated::controlplane::{
    HttpProxySpec, HttpProxyStatus, KafkaApiSpec, KafkaApiStatus, MtlsSpec, SchemaRegistrySpec,
    SchemaRegistryStatus,
};
use crate::schema::{AttributeType, ObjectType};
use crate::value::{Object, Value};

/// `{enabled, ca_certificates_pem, principal_mapping_rules}`
pub static MTLS_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with("enabled", AttributeType::Bool)
        .with("ca_certificates_pem", AttributeType::string_list())
        .with("principal_mapping_rules", AttributeType::string_list())
});

/// The `kafka_api` block; `seed_brokers` is computed.
pub static KAFKA_API_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with_object("mtls", &MTLS_TYPE)
        .with("seed_brokers", AttributeType::string_list())
});

/// The `http_proxy` block; `url` is computed.
pub static HTTP_PROXY_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with_object("mtls", &MTLS_TYPE)
        .with("url", AttributeType::String)
});

/// The `schema_registry` block; `url` is computed.
pub static SCHEMA_REGISTRY_TYPE: LazyLock<ObjectType> = LazyLock::new(|| HTTP_PROXY_TYPE.clone());

fn mtls_spec(block: Attrs<'_>) -> Result<Option<MtlsSpec>, ProviderError> {
    let Some(mtls) = block.nested("mtls")? else {
        return Ok(None);
    };
    let mtls = mtls.attrs();
    Ok(Some(MtlsSpec {
        enabled: mtls.bool("enabled")?.unwrap_or_default(),
        ca_certificates_pem: mtls.string_list("ca_certificates_pem")?.unwrap_or_default(),
        principal_mapping_rules: mtls
            .string_list("principal_mapping_rules")?
            .unwrap_or_default(),
    }))
}

fn block_mtls(block: &Value<Object>, path: &str) -> Result<Option<Option<MtlsSpec>>, ProviderError> {
    match block.as_option() {
        Some(object) => mtls_spec(Attrs::at(object, path)).map(Some),
        None => Ok(None),
    }
}

/// Build the `kafka_api` spec. A null block is omitted.
pub fn kafka_api_spec(block: &Value<Object>) -> Result<Option<KafkaApiSpec>, ProviderError> {
    Ok(block_mtls(block, "kafka_api")?.map(|mtls| KafkaApiSpec { mtls }))
}

/// Build the `http_proxy` spec. A null block is omitted.
pub fn http_proxy_spec(block: &Value<Object>) -> Result<Option<HttpProxySpec>, ProviderError> {
    Ok(block_mtls(block, "http_proxy")?.map(|mtls| HttpProxySpec { mtls }))
}

/// Build the `schema_registry` spec. A null block is omitted.
pub fn schema_registry_spec(
    block: &Value<Object>,
) -> Result<Option<SchemaRegistrySpec>, ProviderError> {
    Ok(block_mtls(block, "schema_registry")?.map(|mtls| SchemaRegistrySpec { mtls }))
}

/// Map wire mTLS settings to a Model object.
///
/// Disabled settings with no certificates and no mapping rules are the
/// wire's default state and read back as null.
pub fn mtls_object(mtls: Option<&MtlsSpec>) -> Result<Value<Object>, ProviderError> {
    let Some(mtls) = mtls else {
        return Ok(Value::Null);
    };
    if !mtls.enabled && mtls.ca_certificates_pem.is_empty() && mtls.principal_mapping_rules.is_empty()
    {
        return Ok(Value::Null);
    }
    Object::builder(&MTLS_TYPE)
        .set("enabled", mtls.enabled)
        .set("ca_certificates_pem", mtls.ca_certificates_pem.clone())
        .set("principal_mapping_rules", mtls.principal_mapping_rules.clone())
        .build()
        .map(Value::Known)
}

/// Map the `kafka_api` status.
pub fn kafka_api_object(status: Option<&KafkaApiStatus>) -> Result<Value<Object>, ProviderError> {
    let Some(status) = status else {
        return Ok(Value::Null);
    };
    Object::builder(&KAFKA_API_TYPE)
        .set("mtls", mtls_object(status.mtls.as_ref())?)
        .set("seed_brokers", status.seed_brokers.clone())
        .build()
        .map(Value::Known)
}

fn endpoint_object(
    object_type: &ObjectType,
    mtls: Option<&MtlsSpec>,
    url: &str,
) -> Result<Value<Object>, ProviderError> {
    let url = if url.is_empty() {
        Value::Null
    } else {
        Value::Known(url.to_string())
    };
    Object::builder(object_type)
        .set("mtls", mtls_object(mtls)?)
        .set("url", url)
        .build()
        .map(Value::Known)
}

/// Map the `http_proxy` status.
pub fn http_proxy_object(status: Option<&HttpProxyStatus>) -> Result<Value<Object>, ProviderError> {
    match status {
        Some(status) => endpoint_object(&HTTP_PROXY_TYPE, status.mtls.as_ref(), &status.url),
        None => Ok(Value::Null),
    }
}

/// Map the `schema_registry` status.
pub fn schema_registry_object(
    status: Option<&SchemaRegistryStatus>,
) -> Result<Value<Object>, ProviderError> {
    match status {
        Some(status) => endpoint_object(&SCHEMA_REGISTRY_TYPE, status.mtls.as_ref(), &status.url),
        None => Ok(Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kafka_api(mtls: Value<Object>) -> Value<Object> {
        Value::Known(
            Object::builder(&KAFKA_API_TYPE)
                .set("mtls", mtls)
                .set("seed_brokers", Value::<Vec<String>>::Unknown)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_null_block_is_omitted() {
        assert_eq!(kafka_api_spec(&Value::Null).unwrap(), None);
        assert_eq!(kafka_api_spec(&Value::Unknown).unwrap(), None);
    }

    #[test]
    fn test_explicit_disabled_mtls_is_sent() {
        let mtls = Object::builder(&MTLS_TYPE)
            .set("enabled", false)
            .set("ca_certificates_pem", Value::<Vec<String>>::Null)
            .set("principal_mapping_rules", Vec::<String>::new())
            .build()
            .unwrap();
        let spec = kafka_api_spec(&kafka_api(Value::Known(mtls))).unwrap().unwrap();
        assert_eq!(
            spec.mtls,
            Some(MtlsSpec {
                enabled: false,
                ca_certificates_pem: vec![],
                principal_mapping_rules: vec![],
            })
        );

        let spec = kafka_api_spec(&kafka_api(Value::Null)).unwrap().unwrap();
        assert_eq!(spec.mtls, None);
    }

    #[test]
    fn test_malformed_mtls_names_path() {
        let ty = ObjectType::new().with("mtls", AttributeType::String);
        let block = Object::builder(&ty).set("mtls", "on").build().unwrap();
        let err = http_proxy_spec(&Value::Known(block)).unwrap_err();
        assert!(
            matches!(err, ProviderError::TypeMismatch { ref path, .. } if path == "http_proxy.mtls")
        );
    }

    #[test]
    fn test_disabled_mtls_collapses_to_null() {
        assert!(mtls_object(Some(&MtlsSpec::default())).unwrap().is_null());
        assert!(mtls_object(None).unwrap().is_null());

        let kept = mtls_object(Some(&MtlsSpec {
            enabled: false,
            ca_certificates_pem: vec!["pem".into()],
            principal_mapping_rules: vec![],
        }))
        .unwrap();
        assert!(kept.is_known());
    }

    #[test]
    fn test_enabled_mtls_with_empty_lists_is_kept() {
        let obj = mtls_object(Some(&MtlsSpec {
            enabled: true,
            ..Default::default()
        }))
        .unwrap()
        .into_option()
        .unwrap();
        assert_eq!(
            obj.get("ca_certificates_pem"),
            Some(&crate::value::AttrValue::List(vec![]))
        );
    }

    #[test]
    fn test_status_urls() {
        let obj = http_proxy_object(Some(&HttpProxyStatus {
            mtls: None,
            url: "https://proxy.example.com".into(),
        }))
        .unwrap()
        .into_option()
        .unwrap();
        assert_eq!(
            obj.get("url"),
            Some(&crate::value::AttrValue::String("https://proxy.example.com".into()))
        );
        assert_eq!(obj.get("mtls"), Some(&crate::value::AttrValue::Null));

        let obj = kafka_api_object(Some(&KafkaApiStatus {
            mtls: None,
            seed_brokers: vec!["seed:9092".into()],
        }))
        .unwrap();
        assert!(obj.is_known());
    }
}

//! Provider configuration.
//!
//! Decoded from the provider block the host passes at configure time.
//! Credentials left out of the block are read from the environment.
//!
//! ```ignore
//! use redpanda_provider::config::ProviderConfig;
//! use serde_json::json;
//!
//! let config = ProviderConfig::from_value(json!({
//!     "cloud_environment": "pre",
//!     "mask_convention": "subtree"
//! }))?;
//! ```

use serde::{Deserialize, Deserializer};

use crate::diff::MaskConvention;
use crate::error::ProviderError;
use crate::schema::{Attribute, AttributeFlags, AttributeType, Schema};

/// Environment variable holding the client ID.
pub const CLIENT_ID_ENV: &str = "REDPANDA_CLIENT_ID";

/// Environment variable holding the client secret.
pub const CLIENT_SECRET_ENV: &str = "REDPANDA_CLIENT_SECRET";

/// Which Redpanda Cloud deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudEnvironment {
    /// Pre-production.
    Pre,
    /// Production.
    #[default]
    Prod,
}

/// Configuration shared by every resource.
#[derive(Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// OAuth client ID.
    pub client_id: Option<String>,
    /// OAuth client secret.
    pub client_secret: Option<String>,
    /// Target environment.
    #[serde(deserialize_with = "null_as_default")]
    pub cloud_environment: CloudEnvironment,
    /// How cluster update masks are written.
    #[serde(deserialize_with = "null_as_default")]
    pub mask_convention: MaskConvention,
}

/// The host sends unset optional attributes as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field("cloud_environment", &self.cloud_environment)
            .field("mask_convention", &self.mask_convention)
            .finish()
    }
}

impl ProviderConfig {
    /// Decode configuration from the host, filling credentials from the
    /// environment when the block leaves them out.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ProviderError> {
        let config: Self = serde_json::from_value(value)
            .map_err(|e| ProviderError::Configuration(e.to_string()))?;
        Ok(config.with_env_fallback(|key| std::env::var(key).ok()))
    }

    /// Fill missing credentials through `lookup`.
    pub fn with_env_fallback(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.client_id.is_none() {
            self.client_id = lookup(CLIENT_ID_ENV).filter(|v| !v.is_empty());
        }
        if self.client_secret.is_none() {
            self.client_secret = lookup(CLIENT_SECRET_ENV).filter(|v| !v.is_empty());
        }
        self
    }

    /// Set the client credentials.
    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set the target environment.
    pub fn with_cloud_environment(mut self, environment: CloudEnvironment) -> Self {
        self.cloud_environment = environment;
        self
    }

    /// Set the update mask convention.
    pub fn with_mask_convention(mut self, convention: MaskConvention) -> Self {
        self.mask_convention = convention;
        self
    }

    /// Fail unless both credentials are present.
    pub fn require_credentials(&self) -> Result<(&str, &str), ProviderError> {
        match (self.client_id.as_deref(), self.client_secret.as_deref()) {
            (Some(id), Some(secret)) => Ok((id, secret)),
            _ => Err(ProviderError::Configuration(format!(
                "client_id and client_secret must be set in the provider block or via {} and {}",
                CLIENT_ID_ENV, CLIENT_SECRET_ENV
            ))),
        }
    }

    /// Schema of the provider block.
    pub fn schema() -> Schema {
        Schema::v0()
            .with_attribute("client_id", Attribute::optional_string())
            .with_attribute(
                "client_secret",
                Attribute::new(AttributeType::String, AttributeFlags::optional().sensitive()),
            )
            .with_attribute(
                "cloud_environment",
                Attribute::optional_string().with_description("pre or prod"),
            )
            .with_attribute(
                "mask_convention",
                Attribute::optional_string().with_description("leaf or subtree"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config: ProviderConfig = serde_json::from_value(json!({})).unwrap();
        let config = config.with_env_fallback(no_env);
        assert_eq!(config.cloud_environment, CloudEnvironment::Prod);
        assert_eq!(config.mask_convention, MaskConvention::Leaf);
        assert!(config.require_credentials().is_err());
    }

    #[test]
    fn test_env_fallback_only_fills_gaps() {
        let config = ProviderConfig::default()
            .with_credentials("from-block", "secret")
            .with_env_fallback(|_| Some("from-env".to_string()));
        assert_eq!(config.client_id.as_deref(), Some("from-block"));

        let config = ProviderConfig::default().with_env_fallback(|key| match key {
            CLIENT_ID_ENV => Some("id".to_string()),
            CLIENT_SECRET_ENV => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.client_id.as_deref(), Some("id"));
        assert_eq!(config.client_secret, None);
    }

    #[test]
    fn test_from_value_rejects_bad_input() {
        let err = ProviderConfig::from_value(json!({"cloud_environment": "staging"})).unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(_)));

        let err = ProviderConfig::from_value(json!({"region": "us"})).unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(_)));
    }

    #[test]
    fn test_null_attributes_take_defaults() {
        let config = ProviderConfig::from_value(json!({
            "client_id": null,
            "client_secret": null,
            "cloud_environment": null,
            "mask_convention": null
        }))
        .unwrap()
        .with_env_fallback(no_env);
        assert_eq!(config.cloud_environment, CloudEnvironment::Prod);
        assert_eq!(config.mask_convention, MaskConvention::Leaf);
    }

    #[test]
    fn test_subtree_convention() {
        let config = ProviderConfig::from_value(json!({
            "cloud_environment": "pre",
            "mask_convention": "subtree"
        }))
        .unwrap();
        assert_eq!(config.cloud_environment, CloudEnvironment::Pre);
        assert_eq!(config.mask_convention, MaskConvention::Subtree);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ProviderConfig::default().with_credentials("id", "hunter22");
        assert!(!format!("{:?}", config).contains("hunter22"));
    }
}

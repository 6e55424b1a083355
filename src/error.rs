//! Error types for the Redpanda provider.

use thiserror::Error;

use crate::schema::Diagnostic;

/// Errors produced while converting between Models and wire messages, or
/// while talking to the control-plane and data-plane services.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A field the caller's contract requires is null, unknown or absent.
    #[error("Missing required field: {0}")]
    MissingRequired(String),

    /// A present field holds a value of the wrong shape.
    #[error("Type mismatch at {path}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Dotted path of the offending field.
        path: String,
        /// The shape the caller asked for.
        expected: String,
        /// The shape actually found.
        actual: String,
    },

    /// The requested combination of features is not supported.
    #[error("Not supported: {0}")]
    Unsupported(String),

    /// The configuration is inconsistent, e.g. a block for another cloud.
    #[error("Validation error: {0}")]
    Validation(String),

    /// One or more diagnostics were collected and the conversion was aborted.
    #[error("Conversion failed with {} diagnostic(s)", .0.len())]
    Diagnostics(Vec<Diagnostic>),

    /// The cluster, user or ACL no longer exists.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A bug in the provider, such as reading the value of an unknown.
    #[error("SDK error: {0}")]
    Sdk(String),

    /// The provider block could not be decoded or lacks credentials.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Model state is not valid JSON for its schema.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Create conflicted with an existing cluster, user or ACL.
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    /// The credentials were rejected or lack a permission.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// A Redpanda Cloud quota or rate limit was hit.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// The control or data plane is temporarily unreachable.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The call did not finish before its deadline.
    #[error("Deadline exceeded: {0}")]
    DeadlineExceeded(String),

    /// Refused in the current state, e.g. deleting a protected cluster.
    #[error("Failed precondition: {0}")]
    FailedPrecondition(String),

    /// The service does not offer this call.
    #[error("Unimplemented: {0}")]
    Unimplemented(String),

    /// The service rejected the request's arguments.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ProviderError {
    /// The variant's payload message, without the `Display` prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::MissingRequired(msg) => msg,
            Self::TypeMismatch { path, .. } => path,
            Self::Unsupported(msg) => msg,
            Self::Validation(msg) => msg,
            Self::Diagnostics(diags) => diags
                .first()
                .map(|d| d.summary.as_str())
                .unwrap_or("no diagnostics"),
            Self::NotFound(msg) => msg,
            Self::Sdk(msg) => msg,
            Self::Configuration(msg) => msg,
            Self::Serialization(_err) => "serialization error (see Debug output)",
            Self::AlreadyExists(msg) => msg,
            Self::PermissionDenied(msg) => msg,
            Self::ResourceExhausted(msg) => msg,
            Self::Unavailable(msg) => msg,
            Self::DeadlineExceeded(msg) => msg,
            Self::FailedPrecondition(msg) => msg,
            Self::Unimplemented(msg) => msg,
            Self::InvalidRequest(msg) => msg,
        }
    }

    /// Build a [`ProviderError::TypeMismatch`].
    pub fn type_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Whether this error reports a resource that no longer exists.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Flatten this error into diagnostics, attaching `path` when the error
    /// does not already carry one.
    pub fn into_diagnostics(self, path: &str) -> Vec<Diagnostic> {
        match self {
            Self::Diagnostics(diags) => diags,
            Self::MissingRequired(field) => {
                vec![Diagnostic::error(format!("Missing required field '{}'", field))
                    .with_attribute(field)]
            },
            Self::TypeMismatch {
                path: field,
                expected,
                actual,
            } => vec![Diagnostic::error(format!("Unexpected type at '{}'", field))
                .with_detail(format!("Expected {}, got {}", expected, actual))
                .with_attribute(field)],
            other => {
                let diag = Diagnostic::error(other.to_string());
                if path.is_empty() {
                    vec![diag]
                } else {
                    vec![diag.with_attribute(path)]
                }
            },
        }
    }
}

impl From<ProviderError> for tonic::Status {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingRequired(msg) => {
                tonic::Status::invalid_argument(format!("Missing required field: {}", msg))
            },
            err @ ProviderError::TypeMismatch { .. } => {
                tonic::Status::invalid_argument(err.to_string())
            },
            ProviderError::Unsupported(msg) => tonic::Status::unimplemented(msg),
            ProviderError::Validation(msg) => tonic::Status::invalid_argument(msg),
            err @ ProviderError::Diagnostics(_) => tonic::Status::internal(err.to_string()),
            ProviderError::NotFound(msg) => tonic::Status::not_found(msg),
            ProviderError::Sdk(msg) => tonic::Status::internal(msg),
            ProviderError::Configuration(msg) => tonic::Status::failed_precondition(msg),
            ProviderError::Serialization(err) => {
                tonic::Status::invalid_argument(format!("Serialization error: {}", err))
            },
            ProviderError::AlreadyExists(msg) => tonic::Status::already_exists(msg),
            ProviderError::PermissionDenied(msg) => tonic::Status::permission_denied(msg),
            ProviderError::ResourceExhausted(msg) => tonic::Status::resource_exhausted(msg),
            ProviderError::Unavailable(msg) => tonic::Status::unavailable(msg),
            ProviderError::DeadlineExceeded(msg) => tonic::Status::deadline_exceeded(msg),
            ProviderError::FailedPrecondition(msg) => tonic::Status::failed_precondition(msg),
            ProviderError::Unimplemented(msg) => tonic::Status::unimplemented(msg),
            ProviderError::InvalidRequest(msg) => tonic::Status::invalid_argument(msg),
        }
    }
}

impl From<tonic::Status> for ProviderError {
    fn from(status: tonic::Status) -> Self {
        let msg = status.message().to_string();
        match status.code() {
            tonic::Code::NotFound => Self::NotFound(msg),
            tonic::Code::AlreadyExists => Self::AlreadyExists(msg),
            tonic::Code::PermissionDenied | tonic::Code::Unauthenticated => {
                Self::PermissionDenied(msg)
            },
            tonic::Code::ResourceExhausted => Self::ResourceExhausted(msg),
            tonic::Code::Unavailable => Self::Unavailable(msg),
            tonic::Code::DeadlineExceeded => Self::DeadlineExceeded(msg),
            tonic::Code::FailedPrecondition => Self::FailedPrecondition(msg),
            tonic::Code::Unimplemented => Self::Unimplemented(msg),
            tonic::Code::InvalidArgument | tonic::Code::OutOfRange => Self::InvalidRequest(msg),
            code => Self::Sdk(format!("{:?}: {}", code, msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::MissingRequired("cloud_provider".to_string());
        assert_eq!(format!("{}", err), "Missing required field: cloud_provider");

        let err = ProviderError::type_mismatch("zones", "list", "string");
        assert_eq!(
            format!("{}", err),
            "Type mismatch at zones: expected list, got string"
        );

        let err = ProviderError::Unsupported("azure customer managed resources".to_string());
        assert_eq!(
            format!("{}", err),
            "Not supported: azure customer managed resources"
        );

        let err = ProviderError::Diagnostics(vec![
            Diagnostic::error("a"),
            Diagnostic::error("b"),
        ]);
        assert_eq!(format!("{}", err), "Conversion failed with 2 diagnostic(s)");
    }

    #[test]
    fn test_error_to_status() {
        let err = ProviderError::NotFound("test".to_string());
        let status: tonic::Status = err.into();
        assert_eq!(status.code(), tonic::Code::NotFound);

        let err = ProviderError::Validation("test".to_string());
        let status: tonic::Status = err.into();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);

        let err = ProviderError::Unsupported("test".to_string());
        let status: tonic::Status = err.into();
        assert_eq!(status.code(), tonic::Code::Unimplemented);

        let err = ProviderError::MissingRequired("name".to_string());
        let status: tonic::Status = err.into();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert!(status.message().contains("name"));
    }

    #[test]
    fn test_status_to_error() {
        let err: ProviderError = tonic::Status::not_found("cluster abc").into();
        assert!(err.is_not_found());
        assert_eq!(err.message(), "cluster abc");

        let err: ProviderError = tonic::Status::unauthenticated("token expired").into();
        assert!(matches!(err, ProviderError::PermissionDenied(_)));

        let err: ProviderError = tonic::Status::invalid_argument("bad zone").into();
        assert!(matches!(err, ProviderError::InvalidRequest(_)));

        let err: ProviderError = tonic::Status::internal("boom").into();
        assert!(matches!(err, ProviderError::Sdk(_)));
    }

    #[test]
    fn test_into_diagnostics_keeps_paths() {
        let diags = ProviderError::MissingRequired("kafka_api.mtls.enabled".to_string())
            .into_diagnostics("");
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].attribute.as_deref(),
            Some("kafka_api.mtls.enabled")
        );

        let diags =
            ProviderError::Validation("bad".to_string()).into_diagnostics("aws_private_link");
        assert_eq!(diags[0].attribute.as_deref(), Some("aws_private_link"));
    }

    #[test]
    fn test_message_method() {
        let err = ProviderError::NotFound("resource-123".to_string());
        assert_eq!(err.message(), "resource-123");

        let err = ProviderError::type_mismatch("tags", "map", "list");
        assert_eq!(err.message(), "tags");
    }
}

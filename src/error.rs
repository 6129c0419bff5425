//! Error types for collection resource handling.
//!
//! This module covers every failure the dispatcher can surface. The 404
//! case is rendered as a JSON body by [`crate::CollectionResource::run`];
//! everything else is returned to the embedding transport layer, which
//! decides how to translate it.

/// Main error type for collection resource operations.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    /// The inbound request carried no resolvable URL path
    #[error("URL not found")]
    UrlNotFound,

    /// Dispatch selected an operation with no configured hook
    #[error("unsupported operation '{operation}': no matching hook configured")]
    UnsupportedOperation { operation: String },

    /// The (route, method) pair maps to no operation
    #[error("method '{method}' not allowed on the {route} route")]
    MethodNotAllowed { method: http::Method, route: String },

    /// Errors from a caller-provided hook
    #[error("hook error: {0}")]
    Hook(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Convenience methods for creating common errors
impl CollectionError {
    /// Create an unsupported operation error
    pub fn unsupported_operation(operation: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
        }
    }

    /// Create a method not allowed error
    pub fn method_not_allowed(method: http::Method, route: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            method,
            route: route.into(),
        }
    }

    /// Wrap a hook error
    pub fn hook(source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Hook(source)
    }
}

/// Result type alias for collection resource operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_operation_message() {
        let error = CollectionError::unsupported_operation("create");
        assert!(error.to_string().contains("create"));
        assert!(error.to_string().contains("no matching hook"));
    }

    #[test]
    fn test_method_not_allowed_message() {
        let error = CollectionError::method_not_allowed(http::Method::DELETE, "collection");
        assert!(error.to_string().contains("DELETE"));
        assert!(error.to_string().contains("collection"));
    }

    #[test]
    fn test_hook_error_preserves_source() {
        let error = CollectionError::hook("backend unavailable".into());
        assert!(error.to_string().contains("backend unavailable"));
        assert!(std::error::Error::source(&error).is_some());
    }
}

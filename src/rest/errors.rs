//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for REST resource operations, extending
//! the HTTP-level taxonomy with resource semantics: `NotFound` for 404s,
//! `ValidationFailed` for 422s, and `PathResolutionFailed` for operations
//! whose required IDs (typically a nested resource's parent ID) were not
//! supplied - the latter fails before any request is issued.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::rest::{ResourceError, RestResource};
//!
//! match PriceRule::find(&client, 123, None).await {
//!     Ok(rule) => println!("Found: {:?}", rule.title),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{}: {:?}", field, messages);
//!         }
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// Rate-limited and transient failures are handled inside the HTTP layer and
/// only appear here once retries are exhausted (wrapped in `Rest`/`Http`).
/// Every other variant is permanent: retrying without changing the request
/// cannot help.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "PriceRule").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// Validation failed for the resource (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// A map of field names to error messages.
        errors: HashMap<String, Vec<String>>,
        /// The request ID for debugging (from the X-Request-Id header).
        request_id: Option<String>,
    },

    /// No valid path matches the provided IDs and operation.
    ///
    /// Returned when attempting an operation without the required parent
    /// resource ID, before any network call is made.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "all", "delete").
        operation: &'static str,
    },

    /// The response body did not carry the expected envelope key.
    #[error("Missing key '{key}' in response body")]
    UnexpectedPayload {
        /// The envelope key that was expected.
        key: String,
        /// The request ID for debugging, if available.
        request_id: Option<String>,
    },

    /// A payload or response failed (de)serialization.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Attaches resource context to a failed REST call.
    ///
    /// Maps permanent HTTP response errors to semantic variants:
    /// 404 becomes [`NotFound`](Self::NotFound), 422 becomes
    /// [`ValidationFailed`](Self::ValidationFailed) with the field errors
    /// parsed out of the serialized body. Everything else passes through.
    #[must_use]
    pub fn for_resource(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(e)) if e.code == 404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            RestError::Http(HttpError::Response(e)) if e.code == 422 => {
                let body =
                    serde_json::from_str(&e.message).unwrap_or(serde_json::Value::Null);
                Self::ValidationFailed {
                    errors: parse_validation_errors(&body),
                    request_id: e.error_reference,
                }
            }
            other => Self::Rest(other),
        }
    }

    /// Returns the request ID if available.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. }
            | Self::UnexpectedPayload { request_id, .. } => request_id.as_deref(),
            Self::Http(error) | Self::Rest(RestError::Http(error)) => match error {
                HttpError::Response(e) => e.error_reference.as_deref(),
                HttpError::RetriesExhausted(e) => e.error_reference.as_deref(),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Parses validation errors from an API error body.
///
/// The API returns validation errors either as a field map:
/// ```json
/// {"errors": {"title": ["can't be blank"]}}
/// ```
/// or as a flat array or string, which land under the `"base"` key.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    if let Some(errors) = body.get("errors") {
        match errors {
            serde_json::Value::Object(map) => {
                for (field, messages) in map {
                    let msgs: Vec<String> = match messages {
                        serde_json::Value::Array(arr) => arr
                            .iter()
                            .filter_map(|v| v.as_str().map(ToString::to_string))
                            .collect(),
                        serde_json::Value::String(s) => vec![s.clone()],
                        _ => vec![messages.to_string()],
                    };
                    result.insert(field.clone(), msgs);
                }
            }
            serde_json::Value::Array(arr) => {
                let msgs: Vec<String> = arr
                    .iter()
                    .filter_map(|v| v.as_str().map(ToString::to_string))
                    .collect();
                if !msgs.is_empty() {
                    result.insert("base".to_string(), msgs);
                }
            }
            serde_json::Value::String(s) => {
                result.insert("base".to_string(), vec![s.clone()]);
            }
            _ => {}
        }
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use serde_json::json;

    fn response_error(code: u16, message: &str) -> RestError {
        RestError::Http(HttpError::Response(HttpResponseError {
            code,
            message: message.to_string(),
            error_reference: Some("req-123".to_string()),
        }))
    }

    #[test]
    fn test_not_found_error_formats_message_with_resource_and_id() {
        let error = ResourceError::NotFound {
            resource: "PriceRule",
            id: "123456".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("PriceRule"));
        assert!(message.contains("123456"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_for_resource_maps_404_to_not_found() {
        let error = ResourceError::for_resource(
            response_error(404, r#"{"errors":"Not Found"}"#),
            "PriceRule",
            Some("123"),
        );

        assert!(matches!(
            error,
            ResourceError::NotFound { resource: "PriceRule", id } if id == "123"
        ));
    }

    #[test]
    fn test_for_resource_maps_422_to_validation_failed() {
        let message = r#"{"errors":{"title":["can't be blank"],"value":["must be a number","must be negative"]}}"#;
        let error =
            ResourceError::for_resource(response_error(422, message), "PriceRule", None);

        if let ResourceError::ValidationFailed { errors, request_id } = error {
            assert_eq!(
                errors.get("title"),
                Some(&vec!["can't be blank".to_string()])
            );
            assert_eq!(errors.get("value").map(Vec::len), Some(2));
            assert_eq!(request_id, Some("req-123".to_string()));
        } else {
            panic!("Expected ValidationFailed variant");
        }
    }

    #[test]
    fn test_for_resource_passes_other_errors_through() {
        let error = ResourceError::for_resource(
            response_error(400, r#"{"error":"bad request"}"#),
            "PriceRule",
            None,
        );
        assert!(matches!(error, ResourceError::Rest(_)));
    }

    #[test]
    fn test_path_resolution_failed_includes_operation_context() {
        let error = ResourceError::PathResolutionFailed {
            resource: "DiscountCode",
            operation: "create",
        };
        let message = error.to_string();

        assert!(message.contains("DiscountCode"));
        assert!(message.contains("create"));
        assert!(message.contains("path"));
    }

    #[test]
    fn test_parse_validation_errors_object_format() {
        let body = json!({
            "errors": {
                "title": ["can't be blank"],
                "code": ["is invalid", "is too long"]
            }
        });

        let errors = parse_validation_errors(&body);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("title"),
            Some(&vec!["can't be blank".to_string()])
        );
        assert_eq!(errors.get("code").map(Vec::len), Some(2));
    }

    #[test]
    fn test_parse_validation_errors_array_and_string_formats() {
        let body = json!({ "errors": ["Error 1", "Error 2"] });
        let errors = parse_validation_errors(&body);
        assert_eq!(errors.get("base").map(Vec::len), Some(2));

        let body = json!({ "errors": "single error" });
        let errors = parse_validation_errors(&body);
        assert_eq!(
            errors.get("base"),
            Some(&vec!["single error".to_string()])
        );
    }

    #[test]
    fn test_request_id_extraction() {
        let error = ResourceError::ValidationFailed {
            errors: HashMap::new(),
            request_id: Some("req-abc".to_string()),
        };
        assert_eq!(error.request_id(), Some("req-abc"));

        let error = ResourceError::NotFound {
            resource: "PriceRule",
            id: "123".to_string(),
        };
        assert_eq!(error.request_id(), None);
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let errors: Vec<ResourceError> = vec![
            ResourceError::NotFound {
                resource: "PriceRule",
                id: "123".to_string(),
            },
            ResourceError::ValidationFailed {
                errors: HashMap::new(),
                request_id: None,
            },
            ResourceError::PathResolutionFailed {
                resource: "DiscountCode",
                operation: "all",
            },
            ResourceError::UnexpectedPayload {
                key: "price_rule".to_string(),
                request_id: None,
            },
        ];

        for error in &errors {
            let _: &dyn std::error::Error = error;
        }
    }
}

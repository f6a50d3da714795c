//! Error types for the REST client.

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for REST client operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The request path is invalid (e.g., empty after normalization).
    #[error("Invalid REST path: '{path}'")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_error_message() {
        let error = RestError::InvalidPath {
            path: "/".to_string(),
        };
        assert!(error.to_string().contains("Invalid REST path"));
    }

    #[test]
    fn test_http_error_wraps_transparently() {
        let http_error = HttpError::Response(crate::clients::HttpResponseError {
            code: 400,
            message: r#"{"error":"bad request"}"#.to_string(),
            error_reference: None,
        });
        let error: RestError = http_error.into();
        assert!(error.to_string().contains("bad request"));
    }
}

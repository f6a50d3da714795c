//! REST client implementation for the Admin API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with automatic path normalization, rate-limit gating, and retry handling.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{AdminConfig, ApiVersion, Credentials};
use crate::throttle::RateLimiter;

/// REST API client for the Admin API.
///
/// Provides convenient methods (`get`, `post`, `put`, `delete`) for making
/// REST API requests. Every call is gated through the shared rate limiter
/// and retried per the configured policy.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync` and cheap to clone. Clones share one rate
/// limiter, which is required when issuing concurrent requests for the same
/// credentials.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_admin::{Credentials, RestClient};
///
/// let credentials = Credentials::from_parts("my-store", "shpat_token")?;
/// let client = RestClient::new(&credentials, None);
///
/// // GET request
/// let response = client.get("price_rules", None).await?;
///
/// // POST request with body
/// let body = serde_json::json!({"price_rule": {"title": "Base"}});
/// let response = client.post("price_rules", body, None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version being used.
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given credentials.
    ///
    /// Uses the API version from the configuration, or the latest stable
    /// version if not specified. A fresh rate limiter is created; use
    /// [`with_limiter`](Self::with_limiter) (or clone this client) when other
    /// clients already track the same credentials' budget.
    #[must_use]
    pub fn new(credentials: &Credentials, config: Option<&AdminConfig>) -> Self {
        let api_version = config.map_or_else(ApiVersion::latest, |c| c.api_version().clone());
        let base_path = format!("/admin/api/{api_version}");

        Self {
            http_client: HttpClient::new(base_path, credentials, config),
            api_version,
        }
    }

    /// Creates a new REST client sharing an existing rate limiter.
    ///
    /// All clients for one (shop domain, access token) pair must share one
    /// limiter so the remote call budget is not overspent.
    #[must_use]
    pub fn with_limiter(
        credentials: &Credentials,
        config: Option<&AdminConfig>,
        limiter: Arc<RateLimiter>,
    ) -> Self {
        let api_version = config.map_or_else(ApiVersion::latest, |c| c.api_version().clone());
        let base_path = format!("/admin/api/{api_version}");

        Self {
            http_client: HttpClient::with_limiter(base_path, credentials, config, limiter),
            api_version,
        }
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the shared rate limiter.
    #[must_use]
    pub fn limiter(&self) -> Arc<RateLimiter> {
        self.http_client.limiter()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query, None)
            .await
    }

    /// Sends a GET request with a deadline spanning all retry attempts.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors, including
    /// deadline expiry.
    pub async fn get_with_deadline(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
        deadline: Duration,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query, Some(deadline))
            .await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query, None)
            .await
    }

    /// Sends a POST request with a deadline spanning all retry attempts.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors, including
    /// deadline expiry.
    pub async fn post_with_deadline(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
        deadline: Duration,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query, Some(deadline))
            .await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query, None)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query, None)
            .await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
        deadline: Option<Duration>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, &normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        if let Some(deadline) = deadline {
            builder = builder.deadline(deadline);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// This function:
/// 1. Strips leading `/` characters
/// 2. Strips any trailing `.json` suffix
/// 3. Appends the `.json` suffix
/// 4. Returns an error for empty paths
fn normalize_path(path: &str) -> Result<String, RestError> {
    let path = path.trim_start_matches('/');
    let path = path.strip_suffix(".json").unwrap_or(path);

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(format!("{path}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_credentials() -> Credentials {
        Credentials::from_parts("test-shop", "test-access-token").unwrap()
    }

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/price_rules").unwrap(), "price_rules.json");
    }

    #[test]
    fn test_normalize_path_is_idempotent_on_json_suffix() {
        assert_eq!(
            normalize_path("price_rules.json").unwrap(),
            "price_rules.json"
        );
        assert_eq!(
            normalize_path("/price_rules.json").unwrap(),
            "price_rules.json"
        );
    }

    #[test]
    fn test_normalize_path_adds_json_suffix() {
        assert_eq!(normalize_path("price_rules").unwrap(), "price_rules.json");
    }

    #[test]
    fn test_normalize_path_handles_nested_paths() {
        assert_eq!(
            normalize_path("price_rules/123/discount_codes").unwrap(),
            "price_rules/123/discount_codes.json"
        );
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        for path in ["", "/", "/.json"] {
            let result = normalize_path(path);
            assert!(matches!(result, Err(RestError::InvalidPath { path }) if path.is_empty()));
        }
    }

    // === RestClient Construction Tests ===

    #[test]
    fn test_rest_client_new_uses_latest_version() {
        let credentials = create_test_credentials();
        let client = RestClient::new(&credentials, None);

        assert_eq!(client.api_version(), &ApiVersion::latest());
    }

    #[test]
    fn test_rest_client_uses_configured_version() {
        let credentials = create_test_credentials();
        let config = AdminConfig::builder()
            .api_version(ApiVersion::V2025_07)
            .build();
        let client = RestClient::new(&credentials, Some(&config));

        assert_eq!(client.api_version(), &ApiVersion::V2025_07);
    }

    #[test]
    fn test_cloned_clients_share_limiter() {
        let credentials = create_test_credentials();
        let client = RestClient::new(&credentials, None);
        let clone = client.clone();

        assert!(Arc::ptr_eq(&client.limiter(), &clone.limiter()));
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}

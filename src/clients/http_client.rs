//! HTTP client for Admin API communication.
//!
//! This module provides the [`HttpClient`] type: the request executor that
//! issues a single authenticated request per attempt, classifies the
//! response, and drives the rate-limiter/retry-policy loop around it.

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::errors::{
    DeadlineExceededError, HttpError, HttpResponseError, RetriesExhaustedError,
};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{AdminConfig, Credentials};
use crate::throttle::{Outcome, RateLimiter, RetryDecision, RetryPolicy, TransientCause};

/// Client version from Cargo.toml, reported in the User-Agent header.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Admin API.
///
/// The client handles:
/// - Base URI construction from the shop domain or a configured host override
/// - Default headers including User-Agent and the access token
/// - Admission through the shared [`RateLimiter`] before every attempt
/// - Classification of each attempt and retries per the [`RetryPolicy`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone; clones share the rate
/// limiter, so all requests issued through them draw from one call budget.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_admin::clients::{HttpClient, HttpMethod, HttpRequest};
/// use shopify_admin::Credentials;
///
/// let credentials = Credentials::from_parts("my-store", "shpat_token")?;
/// let client = HttpClient::new("/admin/api/2025-10", &credentials, None);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Base path (e.g., "/admin/api/2025-10").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Shared call-budget gate for these credentials.
    limiter: Arc<RateLimiter>,
    /// Policy deciding retries and their delays.
    retry_policy: RetryPolicy,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client with its own rate limiter.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., "/admin/api/2025-10")
    /// * `credentials` - The shop domain and access token
    /// * `config` - Optional configuration for host override, User-Agent prefix,
    ///   and retry policy
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(
        base_path: impl Into<String>,
        credentials: &Credentials,
        config: Option<&AdminConfig>,
    ) -> Self {
        Self::with_limiter(base_path, credentials, config, Arc::new(RateLimiter::new()))
    }

    /// Creates a new HTTP client sharing an existing rate limiter.
    ///
    /// The remote call budget is scoped to the (shop domain, access token)
    /// pair, so every client built for the same credentials must share one
    /// limiter; otherwise concurrent clients under-throttle each other.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn with_limiter(
        base_path: impl Into<String>,
        credentials: &Credentials,
        config: Option<&AdminConfig>,
        limiter: Arc<RateLimiter>,
    ) -> Self {
        let base_path = base_path.into();

        // Determine base URI - use the configured host verbatim when present
        // (proxy or test-double scenario), otherwise the shop domain
        let api_host = config.and_then(AdminConfig::host);
        let base_uri = api_host.map_or_else(
            || format!("https://{}", credentials.shop.as_ref()),
            |host| host.as_ref().trim_end_matches('/').to_string(),
        );

        // Build User-Agent header
        let user_agent_prefix = config
            .and_then(AdminConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopify Admin Client v{CLIENT_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Add Host header when using a host override (proxy scenario)
        if api_host.is_some() {
            default_headers.insert("Host".to_string(), credentials.shop.as_ref().to_string());
        }

        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            credentials.access_token.as_ref().to_string(),
        );

        let retry_policy = config.map_or_else(RetryPolicy::default, |c| c.retry_policy().clone());

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path,
            default_headers,
            limiter,
            retry_policy,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the shared rate limiter, for building further clients against
    /// the same call budget.
    #[must_use]
    pub fn limiter(&self) -> Arc<RateLimiter> {
        Arc::clone(&self.limiter)
    }

    /// Sends an HTTP request to the Admin API.
    ///
    /// Every attempt is admitted through the rate limiter first, executed,
    /// classified, and recorded back into the call budget. Rate-limited and
    /// transient outcomes are retried per the configured [`RetryPolicy`];
    /// permanent failures surface immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A non-retryable 4xx response is received (`Response`)
    /// - Transient failures persist past the retry ceiling (`RetriesExhausted`)
    /// - The request's deadline elapses mid-retry (`DeadlineExceeded`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL
        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        // Merge headers
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let started = tokio::time::Instant::now();
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let permit = self.limiter.admit().await;
            let outcome = Outcome::classify(self.send_once(&request, &url, &headers).await);
            permit.record(outcome.call_limit(), outcome.retry_after());

            if let Some(response) = outcome.response() {
                if let Some(reason) = response.deprecation_reason() {
                    tracing::warn!(
                        "Deprecated request to Admin API at {}, received reason: {}",
                        request.path,
                        reason
                    );
                }
            }

            match self.retry_policy.decide(&outcome, attempt) {
                RetryDecision::Stop => return Self::finish(outcome, attempt),
                RetryDecision::RetryAfter(delay) => {
                    let elapsed = started.elapsed();
                    if let Some(deadline) = request.deadline {
                        if elapsed + delay > deadline {
                            // The pending retry is abandoned; surface a timeout
                            return Err(HttpError::DeadlineExceeded(DeadlineExceededError {
                                attempts: attempt,
                                elapsed,
                                message: Self::describe(&outcome),
                            }));
                        }
                    }

                    tracing::debug!(
                        attempt,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        "retrying request to {}",
                        request.path
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Issues a single attempt through the transport.
    async fn send_once(
        &self,
        request: &HttpRequest,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, reqwest::Error> {
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        // Parse body as JSON
        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                // For 5xx errors, keep the raw body for diagnostics
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Maps a final (non-retried) outcome to the caller-facing result.
    fn finish(outcome: Outcome, attempts: u32) -> Result<HttpResponse, HttpError> {
        match outcome {
            Outcome::Success(response) => Ok(response),
            Outcome::Permanent(response) => {
                let message = Self::serialize_error(&response);
                Err(HttpError::Response(HttpResponseError {
                    code: response.code,
                    message,
                    error_reference: response.request_id().map(String::from),
                }))
            }
            Outcome::Transient(TransientCause::Status(response)) => {
                let message = Self::serialize_error(&response);
                Err(HttpError::RetriesExhausted(RetriesExhaustedError {
                    code: Some(response.code),
                    tries: attempts,
                    message,
                    error_reference: response.request_id().map(String::from),
                }))
            }
            Outcome::Transient(TransientCause::Network(error)) => {
                Err(HttpError::RetriesExhausted(RetriesExhaustedError {
                    code: None,
                    tries: attempts,
                    message: error.to_string(),
                    error_reference: None,
                }))
            }
            // The policy never stops on a rate-limited outcome; only the
            // deadline check above ends that loop
            Outcome::RateLimited(response) => {
                Err(HttpError::RetriesExhausted(RetriesExhaustedError {
                    code: Some(response.code),
                    tries: attempts,
                    message: Self::serialize_error(&response),
                    error_reference: response.request_id().map(String::from),
                }))
            }
        }
    }

    /// One-line description of an outcome, for timeout errors.
    fn describe(outcome: &Outcome) -> String {
        match outcome {
            Outcome::Success(_) => "success".to_string(),
            Outcome::RateLimited(response) => format!(
                "rate limited (retry-after {:?})",
                response.retry_request_after
            ),
            Outcome::Transient(TransientCause::Status(response)) => {
                format!("server error {}", response.code)
            }
            Outcome::Transient(TransientCause::Network(error)) => format!("network error: {error}"),
            Outcome::Permanent(response) => format!("client error {}", response.code),
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response body to a JSON string.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = response.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
            if let Some(desc) = response.body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdminConfig, Credentials};

    fn create_test_credentials() -> Credentials {
        Credentials::from_parts("test-shop", "test-access-token").unwrap()
    }

    #[test]
    fn test_client_construction_with_credentials() {
        let credentials = create_test_credentials();
        let client = HttpClient::new("/admin/api/2025-10", &credentials, None);

        assert_eq!(client.base_uri(), "https://test-shop.myshopify.com");
        assert_eq!(client.base_path(), "/admin/api/2025-10");
    }

    #[test]
    fn test_user_agent_header_format() {
        let credentials = create_test_credentials();
        let client = HttpClient::new("/admin/api/2025-10", &credentials, None);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Shopify Admin Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_access_token_header_injection() {
        let credentials = create_test_credentials();
        let client = HttpClient::new("/admin/api/2025-10", &credentials, None);

        assert_eq!(
            client.default_headers().get("X-Shopify-Access-Token"),
            Some(&"test-access-token".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let credentials = create_test_credentials();
        let client = HttpClient::new("/admin/api/2025-10", &credentials, None);

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let credentials = create_test_credentials();
        let config = AdminConfig::builder().user_agent_prefix("MyApp/1.0").build();

        let client = HttpClient::new("/admin/api/2025-10", &credentials, Some(&config));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Shopify Admin Client"));
    }

    #[test]
    fn test_host_override_is_used_verbatim() {
        let credentials = create_test_credentials();
        let config = AdminConfig::builder()
            .host(crate::config::HostUrl::new("http://127.0.0.1:9999").unwrap())
            .build();

        let client = HttpClient::new("/admin/api/2025-10", &credentials, Some(&config));

        assert_eq!(client.base_uri(), "http://127.0.0.1:9999");
        // The shop still rides along in the Host header
        assert_eq!(
            client.default_headers().get("Host"),
            Some(&"test-shop.myshopify.com".to_string())
        );
    }

    #[test]
    fn test_clients_share_limiter() {
        let credentials = create_test_credentials();
        let first = HttpClient::new("/admin/api/2025-10", &credentials, None);
        let second = HttpClient::with_limiter(
            "/admin/api/2025-10",
            &credentials,
            None,
            first.limiter(),
        );

        assert!(Arc::ptr_eq(&first.limiter(), &second.limiter()));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}

//! HTTP response types for the Admin API client.
//!
//! This module provides the [`HttpResponse`] type and the parsers for the
//! metadata headers the client depends on: the call-limit header feeding the
//! rate limiter, the `Link` header feeding pagination, and `Retry-After`
//! feeding the retry policy.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-Shopify-Shop-Api-Call-Limit`
/// header.
///
/// The header format is "X/Y" where X is the number of calls made in the
/// current window and Y is the bucket size.
///
/// # Example
///
/// ```rust
/// use shopify_admin::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("32/40").unwrap();
/// assert_eq!(limit.request_count, 32);
/// assert_eq!(limit.bucket_size, 40);
/// assert_eq!(limit.remaining(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// The number of calls made in the current bucket.
    pub request_count: u32,
    /// The maximum number of calls allowed in the bucket.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses the rate limit header value.
    ///
    /// Returns `Some(ApiCallLimit)` if the value matches the "X/Y" format,
    /// `None` otherwise.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (request_count, bucket_size) = header_value.split_once('/')?;

        Some(Self {
            request_count: request_count.parse().ok()?,
            bucket_size: bucket_size.parse().ok()?,
        })
    }

    /// Calls left before the bucket is drained.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// Pagination information parsed from the `Link` header.
///
/// The Admin API uses cursor-based pagination with `page_info` parameters in
/// the Link header URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// The `page_info` value for the previous page, if available.
    pub prev_page_info: Option<String>,
    /// The `page_info` value for the next page, if available.
    pub next_page_info: Option<String>,
}

impl PaginationInfo {
    /// Parses pagination info from a Link header value.
    ///
    /// The Link header format is:
    /// `<url>; rel="next", <url>; rel="previous"`
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let link = link.trim();

            // Extract rel type
            let rel = link.split(';').find_map(|part| {
                let part = part.trim();
                part.strip_prefix("rel=").map(|rel| rel.trim_matches('"'))
            });

            // Extract URL
            let url = link
                .split(';')
                .next()
                .map(|s| s.trim().trim_start_matches('<').trim_end_matches('>'));

            if let (Some(rel), Some(url)) = (rel, url) {
                // Extract page_info from URL query params
                if let Some(page_info) = Self::extract_page_info(url) {
                    match rel {
                        "previous" => result.prev_page_info = Some(page_info),
                        "next" => result.next_page_info = Some(page_info),
                        _ => {}
                    }
                }
            }
        }

        result
    }

    /// Extracts the `page_info` parameter from a URL.
    fn extract_page_info(url: &str) -> Option<String> {
        let (_, query) = url.split_once('?')?;

        for param in query.split('&') {
            let mut parts = param.splitn(2, '=');
            if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
                if key == "page_info" {
                    return Some(value.to_string());
                }
            }
        }

        None
    }
}

/// An HTTP response from the Admin API.
///
/// Contains the response status code, headers, body, and the parsed metadata
/// headers: rate limit, pagination cursors, and retry hint.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Page info for the previous page (from the Link header).
    pub prev_page_info: Option<String>,
    /// Page info for the next page (from the Link header).
    pub next_page_info: Option<String>,
    /// Rate limit information (from the `X-Shopify-Shop-Api-Call-Limit` header).
    pub api_call_limit: Option<ApiCallLimit>,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    ///
    /// The metadata headers are parsed eagerly:
    /// - `X-Shopify-Shop-Api-Call-Limit` -> `api_call_limit`
    /// - `Link` -> `prev_page_info`, `next_page_info`
    /// - `Retry-After` -> `retry_request_after`
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let (prev_page_info, next_page_info) = headers
            .get("link")
            .and_then(|values| values.first())
            .map_or((None, None), |link| {
                let info = PaginationInfo::parse_link_header(link);
                (info.prev_page_info, info.next_page_info)
            });

        let api_call_limit = headers
            .get("x-shopify-shop-api-call-limit")
            .and_then(|values| values.first())
            .and_then(|value| ApiCallLimit::parse(value));

        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            prev_page_info,
            next_page_info,
            api_call_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    ///
    /// When present, the endpoint is deprecated and should be updated.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.headers
            .get("x-shopify-api-deprecated-reason")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

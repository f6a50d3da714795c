//! Response wrapper for REST resource operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines the
//! unwrapped resource data with the response metadata that matters to
//! callers: pagination cursors, rate-limit state, and the request ID. The
//! wrapper implements `Deref` for ergonomic access to the inner data.
//!
//! # Example
//!
//! ```rust,ignore
//! let response: ResourceResponse<Vec<PriceRule>> = PriceRule::all(&client, None).await?;
//!
//! // Iterate directly (Vec method via Deref)
//! for rule in response.iter() {
//!     println!("{:?}", rule.title);
//! }
//!
//! // Check pagination
//! if response.has_next_page() {
//!     let page_info = response.next_page_info().unwrap();
//!     // Fetch next page using page_info...
//! }
//!
//! // Take ownership of the inner data
//! let rules: Vec<PriceRule> = response.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{ApiCallLimit, HttpResponse, PaginationInfo};
use crate::rest::ResourceError;

/// A response from a REST resource operation.
///
/// Combines the resource data (already unwrapped from its envelope key)
/// with metadata from the HTTP response. Implements `Deref<Target = T>` so
/// the inner data's methods are callable directly on the wrapper.
///
/// # Type Parameters
///
/// * `T` - The payload type: the resource itself for single-resource
///   operations, `Vec<Resource>` for collection operations.
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    /// The resource data.
    data: T,
    /// Pagination information from the Link header.
    pagination: Option<PaginationInfo>,
    /// Rate limit information from the call-limit header.
    rate_limit: Option<ApiCallLimit>,
    /// Request ID from the X-Request-Id header.
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Option<PaginationInfo>,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    ///
    /// In most cases Deref coercion makes this call unnecessary.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pagination
            .as_ref()
            .is_some_and(|p| p.next_page_info.is_some())
    }

    /// Returns `true` if there is a previous page of results.
    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.pagination
            .as_ref()
            .is_some_and(|p| p.prev_page_info.is_some())
    }

    /// Returns the page info token for the next page, if available.
    ///
    /// Use this token with the `page_info` query parameter to fetch the
    /// next page of results.
    #[must_use]
    pub fn next_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.next_page_info.as_deref())
    }

    /// Returns the page info token for the previous page, if available.
    #[must_use]
    pub fn prev_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.prev_page_info.as_deref())
    }

    /// Returns the pagination info, if available.
    #[must_use]
    pub const fn pagination(&self) -> Option<&PaginationInfo> {
        self.pagination.as_ref()
    }

    /// Returns the rate limit information, if available.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the request ID from the response headers.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, preserving the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Creates a `ResourceResponse` from an HTTP response.
    ///
    /// Extracts the data from the response body under the given envelope
    /// key, along with pagination and rate limit metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedPayload`] if the envelope key is
    /// missing, or [`ResourceError::Serialization`] if the data under it
    /// cannot be deserialized. Both are permanent failures.
    pub fn from_http_response(response: HttpResponse, key: &str) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);

        let data_value =
            response
                .body
                .get(key)
                .ok_or_else(|| ResourceError::UnexpectedPayload {
                    key: key.to_string(),
                    request_id: request_id.clone(),
                })?;

        let data: T = serde_json::from_value(data_value.clone())?;

        let pagination = if response.prev_page_info.is_some() || response.next_page_info.is_some() {
            Some(PaginationInfo {
                prev_page_info: response.prev_page_info,
                next_page_info: response.next_page_info,
            })
        } else {
            None
        };

        Ok(Self {
            data,
            pagination,
            rate_limit: response.api_call_limit,
            request_id,
        })
    }
}

/// Provides transparent access to the inner data.
impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Provides mutable access to the inner data.
impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};

//! Configuration types for the Admin API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Credentials`]: The shop domain / access token pair identifying a store
//! - [`AdminConfig`]: Optional client settings (API version, retry policy, proxy host)
//! - [`AdminConfigBuilder`]: A builder for constructing [`AdminConfig`] instances
//! - [`ShopDomain`]: A validated shop domain
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`ApiVersion`]: The Admin API version to use
//!
//! # Example
//!
//! ```rust
//! use shopify_admin::{AdminConfig, ApiVersion, Credentials};
//!
//! let credentials = Credentials::from_parts("my-store", "shpat_token").unwrap();
//!
//! let config = AdminConfig::builder()
//!     .api_version(ApiVersion::latest())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//! # let _ = (credentials, config);
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;
use crate::throttle::RetryPolicy;

/// The credential pair identifying a store: shop domain plus access token.
///
/// How the token is obtained (OAuth, custom app install, etc.) is outside
/// this crate's scope; the client only needs the two resulting strings.
///
/// All clients built from the same `Credentials` value should share one rate
/// limiter, since the remote call budget is scoped to this pair. Cloning a
/// [`RestClient`](crate::RestClient) preserves that sharing.
///
/// # Example
///
/// ```rust
/// use shopify_admin::{AccessToken, Credentials, ShopDomain};
///
/// let credentials = Credentials::new(
///     ShopDomain::new("my-store").unwrap(),
///     AccessToken::new("shpat_token").unwrap(),
/// );
/// assert_eq!(credentials.shop.as_ref(), "my-store.myshopify.com");
/// ```
#[derive(Clone, Debug)]
pub struct Credentials {
    /// The shop domain requests are issued against.
    pub shop: ShopDomain,
    /// The Admin API access token attached to every request.
    pub access_token: AccessToken,
}

impl Credentials {
    /// Creates credentials from already-validated parts.
    #[must_use]
    pub const fn new(shop: ShopDomain, access_token: AccessToken) -> Self {
        Self { shop, access_token }
    }

    /// Creates credentials from raw strings, validating both.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the domain or token is invalid.
    pub fn from_parts(
        shop: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            shop: ShopDomain::new(shop)?,
            access_token: AccessToken::new(access_token)?,
        })
    }
}

/// Configuration for the Admin API client.
///
/// Everything here is optional; [`AdminConfig::default()`] uses the latest
/// stable API version and the default retry policy.
///
/// # Thread Safety
///
/// `AdminConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use shopify_admin::{AdminConfig, ApiVersion, RetryPolicy};
///
/// let config = AdminConfig::builder()
///     .api_version(ApiVersion::V2025_10)
///     .retry_policy(RetryPolicy::default().max_attempts(5))
///     .build();
///
/// assert_eq!(config.api_version(), &ApiVersion::V2025_10);
/// ```
#[derive(Clone, Debug)]
pub struct AdminConfig {
    api_version: ApiVersion,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    retry_policy: RetryPolicy,
}

impl AdminConfig {
    /// Creates a new builder for constructing an `AdminConfig`.
    #[must_use]
    pub fn builder() -> AdminConfigBuilder {
        AdminConfigBuilder::new()
    }

    /// Returns the API version requests are issued against.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the host override, if configured.
    ///
    /// When set, requests go to this host instead of the shop domain
    /// (proxy scenario); the shop domain is carried in the `Host` header.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the User-Agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the retry policy applied to every request.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`AdminConfig`] instances.
#[derive(Debug, Default)]
pub struct AdminConfigBuilder {
    api_version: Option<ApiVersion>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    retry_policy: Option<RetryPolicy>,
}

impl AdminConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets a host override for proxied requests.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets a prefix prepended to the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Builds the [`AdminConfig`], filling unset fields with defaults.
    #[must_use]
    pub fn build(self) -> AdminConfig {
        AdminConfig {
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
            retry_policy: self.retry_policy.unwrap_or_default(),
        }
    }
}

// Verify config types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
    assert_send_sync::<AdminConfig>();
};

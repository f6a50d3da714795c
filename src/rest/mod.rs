//! REST resource infrastructure.
//!
//! This module provides the generic resource service every typed resource is
//! built on:
//!
//! - **[`RestResource`] trait**: CRUD + count operations, including nested
//!   sub-resource variants, fully delegated through the rate-limited HTTP
//!   layer
//! - **[`ResourceResponse<T>`]**: a Deref-based wrapper combining unwrapped
//!   data with pagination and rate-limit metadata
//! - **[`Pages`]**: lazy, restartable page sequences for listings
//! - **Path building**: declarative path templates with parent placeholders
//!   for nested resources
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! Individual resources (PriceRule, Order, etc.) are implemented in the
//! [`resources`] submodule.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::{Credentials, RestClient};
//! use shopify_admin::rest::RestResource;
//! use shopify_admin::rest::resources::v2025_10::{DiscountCode, PriceRule};
//!
//! let credentials = Credentials::from_parts("my-store", "shpat_token")?;
//! let client = RestClient::new(&credentials, None);
//!
//! // Create a price rule
//! let rule = PriceRule {
//!     title: Some("Base".to_string()),
//!     value: Some("-10.0".to_string()),
//!     ..Default::default()
//! };
//! let rule = rule.save(&client).await?;
//!
//! // Create a discount code under it
//! let code = DiscountCode {
//!     price_rule_id: rule.id,
//!     code: Some("ABC123".to_string()),
//!     ..Default::default()
//! };
//! let code = code.save(&client).await?;
//!
//! // Walk the full listing page by page
//! let mut pages = PriceRule::pages(&client, None)?;
//! while let Some(page) = pages.next_page().await {
//!     for rule in page?.iter() {
//!         println!("{:?}", rule.title);
//!     }
//! }
//! ```

mod errors;
mod pages;
mod path;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use pages::{next_query, Pages, PaginationKind};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::RestResource;
pub use response::ResourceResponse;

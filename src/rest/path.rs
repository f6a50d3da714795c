//! Path building infrastructure for REST resources.
//!
//! This module provides the path resolution system that lets one generic
//! resource service address both flat and nested resources. A resource
//! declares a table of [`ResourcePath`] templates; the most specific
//! template whose placeholder IDs are all available wins.
//!
//! # Path Resolution
//!
//! A nested resource like a discount code is reachable through its parent:
//! - `price_rules/{price_rule_id}/discount_codes/{id}` (nested)
//!
//! while a flat resource needs only its own ID:
//! - `price_rules/{id}`
//!
//! The resolution system selects the most specific path that matches the
//! available IDs, so a resource can declare both nested and standalone
//! templates and callers get the right one for the IDs they supply.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use shopify_admin::clients::HttpMethod;
//! use shopify_admin::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Find,
//!         &["price_rule_id", "id"],
//!         "price_rules/{price_rule_id}/discount_codes/{id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["price_rule_id", "id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("price_rule_id", "507");
//! ids.insert("id", "1054");
//! let url = build_path(path.template, &ids);
//! assert_eq!(url, "price_rules/507/discount_codes/1054");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID (GET /resources/{id}).
    Find,
    /// List resources (GET /resources).
    All,
    /// Create a new resource (POST /resources).
    Create,
    /// Update an existing resource (PUT /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
    /// Count resources (GET /resources/count).
    Count,
}

impl ResourceOperation {
    /// Returns the operation name as a string, for error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Count => "count",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Each `ResourcePath` defines how to reach a resource for one operation:
/// the HTTP method, the placeholder IDs the template requires, and the URL
/// template itself. Templates use `{id_name}` placeholders; a nested
/// resource's templates carry the parent placeholder
/// (e.g. `price_rules/{price_rule_id}/discount_codes`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["price_rule_id", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` so resources can declare their paths as
    /// constants, resolved at descriptor-construction time.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Filters the table by operation, keeps the paths whose required IDs are
/// all available, and picks the most specific one (most required IDs).
/// Returns `None` when nothing matches - for a nested resource that means a
/// required parent ID is missing, and the caller must fail without issuing
/// a request.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating IDs.
///
/// Replaces `{id_name}` placeholders in the template with values from the
/// provided map. Placeholders without a matching entry are left unchanged.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const CODE_PATHS: &[ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["price_rule_id", "id"],
            "price_rules/{price_rule_id}/discount_codes/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "discount_codes/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["price_rule_id"],
            "price_rules/{price_rule_id}/discount_codes",
        ),
    ];

    #[test]
    fn test_resource_path_stores_fields_correctly() {
        let path = CODE_PATHS[0];

        assert_eq!(path.http_method, HttpMethod::Get);
        assert_eq!(path.operation, ResourceOperation::Find);
        assert_eq!(path.ids, &["price_rule_id", "id"]);
        assert_eq!(
            path.template,
            "price_rules/{price_rule_id}/discount_codes/{id}"
        );
        assert_eq!(path.id_count(), 2);
    }

    #[test]
    fn test_path_template_interpolation() {
        let mut ids = HashMap::new();
        ids.insert("id", "123");
        assert_eq!(build_path("price_rules/{id}", &ids), "price_rules/123");

        let mut ids = HashMap::new();
        ids.insert("price_rule_id", "507");
        ids.insert("id", "1054");
        assert_eq!(
            build_path("price_rules/{price_rule_id}/discount_codes/{id}", &ids),
            "price_rules/507/discount_codes/1054"
        );
    }

    #[test]
    fn test_build_path_handles_numeric_ids() {
        let mut ids: HashMap<&str, u64> = HashMap::new();
        ids.insert("id", 123_u64);

        assert_eq!(build_path("price_rules/{id}", &ids), "price_rules/123");
    }

    #[test]
    fn test_build_path_leaves_missing_placeholders() {
        let ids: HashMap<&str, &str> = HashMap::new();
        assert_eq!(build_path("price_rules/{id}", &ids), "price_rules/{id}");
    }

    #[test]
    fn test_get_path_selects_most_specific_path() {
        // With both IDs available, the nested path wins
        let path = get_path(
            CODE_PATHS,
            ResourceOperation::Find,
            &["price_rule_id", "id"],
        );
        assert_eq!(
            path.unwrap().template,
            "price_rules/{price_rule_id}/discount_codes/{id}"
        );
    }

    #[test]
    fn test_get_path_falls_back_to_less_specific() {
        // With only the resource's own ID, the standalone path is used
        let path = get_path(CODE_PATHS, ResourceOperation::Find, &["id"]);
        assert_eq!(path.unwrap().template, "discount_codes/{id}");
    }

    #[test]
    fn test_get_path_returns_none_when_no_match() {
        // Wrong operation
        assert!(get_path(CODE_PATHS, ResourceOperation::Delete, &["id"]).is_none());

        // Missing required parent ID
        assert!(get_path(CODE_PATHS, ResourceOperation::All, &[]).is_none());
    }

    #[test]
    fn test_resource_path_matches_ids() {
        let path = CODE_PATHS[0];

        assert!(path.matches_ids(&["price_rule_id", "id"]));
        assert!(path.matches_ids(&["price_rule_id", "id", "extra"]));
        assert!(!path.matches_ids(&["id"]));
        assert!(!path.matches_ids(&["price_rule_id"]));
        assert!(!path.matches_ids(&[]));
    }

    #[test]
    fn test_operation_as_str() {
        assert_eq!(ResourceOperation::Find.as_str(), "find");
        assert_eq!(ResourceOperation::All.as_str(), "all");
        assert_eq!(ResourceOperation::Create.as_str(), "create");
        assert_eq!(ResourceOperation::Update.as_str(), "update");
        assert_eq!(ResourceOperation::Delete.as_str(), "delete");
        assert_eq!(ResourceOperation::Count.as_str(), "count");
    }
}

//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait, the generic resource
//! service behind every typed resource. A resource declares its descriptor -
//! envelope keys, path templates, optional parent placeholder, pagination
//! convention - and the trait provides `find()`, `all()`, `pages()`,
//! `save()`, `delete()`, and `count()` built on the gated HTTP layer.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives; read-only fields use
//!    `#[serde(skip_serializing)]`, optional fields use
//!    `#[serde(skip_serializing_if = "Option::is_none")]`.
//! 2. Implement `RestResource` with the associated types and constants.
//! 3. The trait provides default implementations for all operations.
//!
//! # Nested resources
//!
//! A resource owned by a parent (e.g. a discount code under a price rule)
//! sets [`PARENT`](RestResource::PARENT) to the parent placeholder name and
//! declares nested path templates. The `_with_parent` operation variants
//! substitute the parent ID into the template; `save()` and `delete()` read
//! it from the payload via [`parent_id`](RestResource::parent_id). Creating
//! a nested resource without its parent ID fails with
//! [`ResourceError::PathResolutionFailed`] before any request is issued.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::rest::{ResourceOperation, ResourcePath, RestResource};
//! use shopify_admin::clients::HttpMethod;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Page {
//!     #[serde(skip_serializing)]
//!     pub id: Option<u64>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub title: Option<String>,
//! }
//!
//! impl RestResource for Page {
//!     type Id = u64;
//!     type FindParams = ();
//!     type AllParams = ();
//!     type CountParams = ();
//!
//!     const NAME: &'static str = "Page";
//!     const KEY: &'static str = "page";
//!     const PLURAL: &'static str = "pages";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "pages/{id}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "pages"),
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "pages"),
//!     ];
//!
//!     fn get_id(&self) -> Option<Self::Id> {
//!         self.id
//!     }
//! }
//!
//! // Usage:
//! let page = Page::find(&client, 123, None).await?;
//! let pages = Page::all(&client, None).await?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::{
    build_path, get_path, Pages, PaginationKind, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse,
};

/// A REST resource that can be fetched, listed, created, updated, deleted,
/// and counted.
///
/// Implementors describe the resource; the trait's default methods are the
/// generic service. Every operation is fully delegated through the rate
/// limiter, retry policy, and request executor - resources never touch the
/// transport directly.
///
/// # Associated Constants
///
/// - `NAME`: the type name used in error messages (e.g., "PriceRule")
/// - `KEY`: the singular envelope key payloads are wrapped under on the wire
///   (e.g., "price_rule") - a descriptor constant, never inferred from the
///   response shape
/// - `PLURAL`: the plural envelope key and URL segment (e.g., "price_rules")
/// - `PATHS`: the operation/template table
/// - `PARENT`: the parent placeholder name for nested resources
/// - `PAGINATION`: which continuation convention listings use
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// Parameters for `find()` operations. Use `()` if none are needed.
    type FindParams: Serialize + Default + Send + Sync;

    /// Parameters for `all()`/`pages()` operations (filtering, pagination).
    type AllParams: Serialize + Default + Send + Sync;

    /// Parameters for `count()` operations.
    type CountParams: Serialize + Default + Send + Sync;

    /// The singular type name, used in error messages.
    const NAME: &'static str;

    /// The singular envelope key for request and response bodies.
    const KEY: &'static str;

    /// The plural envelope key, used for collection responses.
    const PLURAL: &'static str;

    /// Available paths for this resource.
    ///
    /// Path selection picks the most specific template matching the
    /// available IDs, so nested and standalone templates can coexist.
    const PATHS: &'static [ResourcePath];

    /// The parent placeholder name for nested resources
    /// (e.g. `"price_rule_id"`). `None` for flat resources.
    const PARENT: Option<&'static str> = None;

    /// The continuation convention used by listing operations.
    const PAGINATION: PaginationKind = PaginationKind::Cursor;

    /// Returns the resource's ID if it exists.
    ///
    /// Returns `None` for new resources that haven't been saved yet.
    fn get_id(&self) -> Option<Self::Id>;

    /// Returns the parent resource's ID carried in the payload, if any.
    ///
    /// Nested resources override this to read the parent field (e.g.
    /// `price_rule_id`), which `save()` and `delete()` substitute into the
    /// path template.
    fn parent_id(&self) -> Option<String> {
        None
    }

    /// Finds a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the remote reports 404.
    /// Returns [`ResourceError::PathResolutionFailed`] if no find path
    /// matches (e.g. the resource is only reachable through its parent).
    async fn find(
        client: &RestClient,
        id: Self::Id,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert("id", id.to_string());

        let url = Self::resolve(ResourceOperation::Find, &ids)?;
        let query = Self::query_from(params)?;

        let response = client
            .get(&url, query)
            .await
            .map_err(|e| ResourceError::for_resource(e, Self::NAME, Some(&id.to_string())))?;

        ResourceResponse::from_http_response(response, Self::KEY)
    }

    /// Finds a single nested resource by parent and own ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the remote reports 404.
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource
    /// declares no parent placeholder.
    async fn find_with_parent<ParentId: Display + Send + Sync>(
        client: &RestClient,
        parent_id: ParentId,
        id: Self::Id,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let mut ids = Self::parent_ids(parent_id)?;
        ids.insert("id", id.to_string());

        let url = Self::resolve(ResourceOperation::Find, &ids)?;
        let query = Self::query_from(params)?;

        let response = client
            .get(&url, query)
            .await
            .map_err(|e| ResourceError::for_resource(e, Self::NAME, Some(&id.to_string())))?;

        ResourceResponse::from_http_response(response, Self::KEY)
    }

    /// Fetches a single page of resources matching the given parameters.
    ///
    /// Use [`pages`](Self::pages) to walk the whole listing; this returns
    /// only the first page for the given options, with the continuation
    /// token available on the response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no listing path
    /// matches.
    async fn all(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let url = Self::resolve(ResourceOperation::All, &HashMap::new())?;
        let query = Self::query_from(params)?;

        let response = client
            .get(&url, query)
            .await
            .map_err(|e| ResourceError::for_resource(e, Self::NAME, None))?;

        ResourceResponse::from_http_response(response, Self::PLURAL)
    }

    /// Fetches a single page of nested resources under the given parent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource
    /// declares no parent placeholder or no nested listing path.
    async fn all_with_parent<ParentId: Display + Send + Sync>(
        client: &RestClient,
        parent_id: ParentId,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let ids = Self::parent_ids(parent_id)?;
        let url = Self::resolve(ResourceOperation::All, &ids)?;
        let query = Self::query_from(params)?;

        let response = client
            .get(&url, query)
            .await
            .map_err(|e| ResourceError::for_resource(e, Self::NAME, None))?;

        ResourceResponse::from_http_response(response, Self::PLURAL)
    }

    /// Returns the lazy page sequence for this listing.
    ///
    /// The sequence is finite and restartable: calling `pages` again with
    /// the same options replays the listing from the beginning. The
    /// caller-supplied parameters are copied into the sequence and never
    /// mutated.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no listing path
    /// matches.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut pages = PriceRule::pages(&client, None)?;
    /// while let Some(page) = pages.next_page().await {
    ///     for rule in page?.iter() {
    ///         println!("{:?}", rule.title);
    ///     }
    /// }
    /// ```
    fn pages(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<Pages<'_, Self>, ResourceError> {
        let url = Self::resolve(ResourceOperation::All, &HashMap::new())?;
        let query = Self::query_from(params)?.unwrap_or_default();
        Ok(Pages::new(client, url, query))
    }

    /// Returns the lazy page sequence for a nested listing.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource
    /// declares no parent placeholder or no nested listing path.
    fn pages_with_parent<ParentId: Display>(
        client: &RestClient,
        parent_id: ParentId,
        params: Option<Self::AllParams>,
    ) -> Result<Pages<'_, Self>, ResourceError> {
        let ids = Self::parent_ids(parent_id)?;
        let url = Self::resolve(ResourceOperation::All, &ids)?;
        let query = Self::query_from(params)?.unwrap_or_default();
        Ok(Pages::new(client, url, query))
    }

    /// Counts resources matching the given parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no count path
    /// exists, or [`ResourceError::UnexpectedPayload`] if the response is
    /// missing the numeric count envelope.
    async fn count(
        client: &RestClient,
        params: Option<Self::CountParams>,
    ) -> Result<u64, ResourceError> {
        let url = Self::resolve(ResourceOperation::Count, &HashMap::new())?;
        Self::fetch_count(client, &url, params).await
    }

    /// Counts nested resources under the given parent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource
    /// declares no parent placeholder or no nested count path.
    async fn count_with_parent<ParentId: Display + Send + Sync>(
        client: &RestClient,
        parent_id: ParentId,
        params: Option<Self::CountParams>,
    ) -> Result<u64, ResourceError> {
        let ids = Self::parent_ids(parent_id)?;
        let url = Self::resolve(ResourceOperation::Count, &ids)?;
        Self::fetch_count(client, &url, params).await
    }

    /// Saves the resource: create when it has no ID, update otherwise.
    ///
    /// The payload is wrapped under [`KEY`](Self::KEY) before sending. Only
    /// fields present in the payload are sent, so partial updates work by
    /// leaving the rest unset. Required fields are not validated locally;
    /// the remote's verdict comes back as
    /// [`ResourceError::ValidationFailed`].
    ///
    /// For nested resources, the parent ID is read from the payload; a
    /// create without it fails with
    /// [`ResourceError::PathResolutionFailed`] before any request is made.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] when the remote rejects
    /// the payload (422), [`ResourceError::NotFound`] when updating a
    /// resource that doesn't exist.
    async fn save(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let mut ids: HashMap<&str, String> = HashMap::new();
        if let Some(parent_key) = Self::PARENT {
            if let Some(parent) = self.parent_id() {
                ids.insert(parent_key, parent);
            }
        }

        let mut body_map = serde_json::Map::new();
        body_map.insert(Self::KEY.to_string(), serde_json::to_value(self)?);
        let body = Value::Object(body_map);

        match self.get_id() {
            None => {
                let url = Self::resolve(ResourceOperation::Create, &ids)?;
                let response = client
                    .post(&url, body, None)
                    .await
                    .map_err(|e| ResourceError::for_resource(e, Self::NAME, None))?;

                let result: ResourceResponse<Self> =
                    ResourceResponse::from_http_response(response, Self::KEY)?;
                Ok(result.into_inner())
            }
            Some(id) => {
                ids.insert("id", id.to_string());
                let url = Self::resolve(ResourceOperation::Update, &ids)?;
                let response = client
                    .put(&url, body, None)
                    .await
                    .map_err(|e| ResourceError::for_resource(e, Self::NAME, Some(&id.to_string())))?;

                let result: ResourceResponse<Self> =
                    ResourceResponse::from_http_response(response, Self::KEY)?;
                Ok(result.into_inner())
            }
        }
    }

    /// Deletes the resource.
    ///
    /// Deletion is not absorbed on repeat: deleting an already-deleted
    /// resource surfaces the remote's [`ResourceError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has
    /// no ID or no delete path matches.
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        let id = self.get_id().ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation: ResourceOperation::Delete.as_str(),
        })?;

        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert("id", id.to_string());
        if let Some(parent_key) = Self::PARENT {
            if let Some(parent) = self.parent_id() {
                ids.insert(parent_key, parent);
            }
        }

        let url = Self::resolve(ResourceOperation::Delete, &ids)?;
        client
            .delete(&url, None)
            .await
            .map_err(|e| ResourceError::for_resource(e, Self::NAME, Some(&id.to_string())))?;

        Ok(())
    }

    /// Resolves the path template for `operation` against the available IDs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] when no template
    /// matches - the misconfiguration is reported without any network call.
    fn resolve(
        operation: ResourceOperation,
        ids: &HashMap<&str, String>,
    ) -> Result<String, ResourceError> {
        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, operation, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            },
        )?;

        Ok(build_path(path.template, ids))
    }

    /// Builds the ID map holding only the parent placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource
    /// declares no parent placeholder.
    fn parent_ids<ParentId: Display>(
        parent_id: ParentId,
    ) -> Result<HashMap<&'static str, String>, ResourceError> {
        let parent_key = Self::PARENT.ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation: "parent",
        })?;

        let mut ids = HashMap::new();
        ids.insert(parent_key, parent_id.to_string());
        Ok(ids)
    }

    /// Serializes optional params into a query map.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the params cannot be
    /// serialized.
    fn query_from<P: Serialize>(
        params: Option<P>,
    ) -> Result<Option<HashMap<String, String>>, ResourceError> {
        Ok(params
            .map(|p| serialize_to_query(&p))
            .transpose()?
            .filter(|q| !q.is_empty()))
    }

    /// Fetches and unwraps a numeric count envelope.
    async fn fetch_count<P: Serialize + Send + Sync>(
        client: &RestClient,
        url: &str,
        params: Option<P>,
    ) -> Result<u64, ResourceError> {
        let query = Self::query_from(params)?;

        let response = client
            .get(url, query)
            .await
            .map_err(|e| ResourceError::for_resource(e, Self::NAME, None))?;

        let request_id = response.request_id().map(ToString::to_string);
        response
            .body
            .get("count")
            .and_then(serde_json::Value::as_u64)
            .ok_or(ResourceError::UnexpectedPayload {
                key: "count".to_string(),
                request_id,
            })
    }
}

/// Serializes a params struct to a query parameter map.
///
/// Null fields are skipped, scalars stringify, arrays become
/// comma-separated values, and nested objects are carried as JSON strings.
fn serialize_to_query<T: Serialize>(params: &T) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

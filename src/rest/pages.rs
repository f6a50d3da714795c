//! Lazy page sequences for listing operations.
//!
//! A listing is a finite, restartable sequence of pages. [`Pages`] fetches
//! one page per [`next_page`](Pages::next_page) call - each fetch is a
//! normal gated, retried request - and derives the next page's query from
//! the previous response's metadata. The sequence ends (returns `None`)
//! exactly when the response stops indicating a continuation.
//!
//! Two continuation conventions exist, selected per resource via
//! [`PaginationKind`]:
//!
//! - `Cursor`: the `page_info` token from the `Link` response header.
//! - `SinceId`: the classic `since_id` convention, continuing from the last
//!   item's ID and stopping on a short or empty page.
//!
//! The caller's original options are never mutated; every derived query is
//! a fresh copy with the continuation parameter merged in. A cursor is only
//! meaningful for the resource/options combination that produced it, which
//! holds by construction here: the sequence owns its base options.

use std::collections::HashMap;
use std::marker::PhantomData;

use crate::clients::RestClient;
use crate::rest::{ResourceError, ResourceResponse, RestResource};

/// The continuation convention a resource's listing uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationKind {
    /// Cursor-based continuation via the `Link` header's `page_info` token.
    Cursor,
    /// ID-based continuation via the `since_id` query parameter.
    SinceId,
}

/// Derives the query for the page after `page`, or `None` when the sequence
/// is exhausted.
///
/// `base` is the original option set; it is copied, never mutated.
#[must_use]
pub fn next_query<R: RestResource>(
    page: &ResourceResponse<Vec<R>>,
    base: &HashMap<String, String>,
) -> Option<HashMap<String, String>> {
    match R::PAGINATION {
        PaginationKind::Cursor => page.next_page_info().map(|info| {
            let mut query = base.clone();
            query.insert("page_info".to_string(), info.to_string());
            query
        }),
        PaginationKind::SinceId => {
            if page.is_empty() {
                return None;
            }

            // A page shorter than the requested limit is the last one
            if let Some(limit) = base.get("limit").and_then(|l| l.parse::<usize>().ok()) {
                if page.len() < limit {
                    return None;
                }
            }

            let last_id = page.iter().rev().find_map(RestResource::get_id)?;
            let mut query = base.clone();
            query.insert("since_id".to_string(), last_id.to_string());
            Some(query)
        }
    }
}

/// A lazy, finite, restartable sequence of listing pages.
///
/// Obtained from [`RestResource::pages`] or
/// [`RestResource::pages_with_parent`]. Restarting means calling the
/// constructor again: a fresh `Pages` always begins from the original
/// options.
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
#[derive(Debug)]
pub struct Pages<'a, R: RestResource> {
    client: &'a RestClient,
    path: String,
    base_query: HashMap<String, String>,
    next_query: Option<HashMap<String, String>>,
    _resource: PhantomData<R>,
}

impl<'a, R: RestResource> Pages<'a, R> {
    pub(crate) fn new(
        client: &'a RestClient,
        path: String,
        query: HashMap<String, String>,
    ) -> Self {
        Self {
            client,
            path,
            next_query: Some(query.clone()),
            base_query: query,
            _resource: PhantomData,
        }
    }

    /// Fetches the next page, or returns `None` when the sequence is done.
    ///
    /// Each call is one gated request through the rate limiter and retry
    /// policy. After an error the sequence terminates; restart by
    /// constructing a new `Pages`.
    pub async fn next_page(&mut self) -> Option<Result<ResourceResponse<Vec<R>>, ResourceError>> {
        let query = self.next_query.take()?;

        let query_opt = if query.is_empty() { None } else { Some(query) };
        let response = match self.client.get(&self.path, query_opt).await {
            Ok(response) => response,
            Err(error) => {
                return Some(Err(ResourceError::for_resource(error, R::NAME, None)));
            }
        };

        let page = match ResourceResponse::from_http_response(response, R::PLURAL) {
            Ok(page) => page,
            Err(error) => return Some(Err(error)),
        };

        self.next_query = next_query(&page, &self.base_query);
        if self.next_query.is_some() {
            tracing::debug!(resource = R::NAME, "listing continues on a further page");
        }

        Some(Ok(page))
    }
}

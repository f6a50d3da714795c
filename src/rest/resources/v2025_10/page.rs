//! Page resource implementation.
//!
//! Pages are the store's static content (about, contact, policies), holding
//! HTML in `body_html` and rendered through an optional Liquid template
//! suffix.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A content page in the online store.
///
/// A hidden page has a null `published_at`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Page {
    /// The unique identifier of the page.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The page's title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The text content of the page, complete with HTML markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The name of the person who created the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// A unique, human-friendly string generated from the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// The suffix of the Liquid template used to render the page.
    /// An empty string means the default `page.liquid` template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// When the page was published. Null when the page is hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// The ID of the shop the page belongs to.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub shop_id: Option<u64>,

    /// When the page was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the page was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The admin GraphQL API ID for this page.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Page {
    type Id = u64;
    type FindParams = ();
    type AllParams = PageListParams;
    type CountParams = PageCountParams;

    const NAME: &'static str = "Page";
    const KEY: &'static str = "page";
    const PLURAL: &'static str = "pages";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "pages/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "pages"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Count, &[], "pages/count"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "pages"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "pages/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "pages/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing pages.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PageListParams {
    /// Maximum number of results to return (default: 50, max: 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return pages after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Filter by page title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Filter by page handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Show pages created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show pages created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Show pages last updated after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show pages last updated before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Filter by published status: "published", "unpublished", or "any".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Cursor for pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

/// Parameters for counting pages.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PageCountParams {
    /// Filter by page title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Show pages created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show pages created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Filter by published status: "published", "unpublished", or "any".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,
}

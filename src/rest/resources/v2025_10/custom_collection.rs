//! CustomCollection resource implementation.
//!
//! Custom collections are manually curated groupings of products, as
//! opposed to smart collections whose membership is rule-driven.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// The image attached to a collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectionImage {
    /// The source URL of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Alternative text for the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// The width of the image in pixels.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub width: Option<u32>,

    /// The height of the image in pixels.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub height: Option<u32>,

    /// When the image was added to the collection.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A manually curated collection of products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomCollection {
    /// The unique identifier of the collection.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The title of the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// A unique, human-friendly string generated from the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// The description of the collection, complete with HTML markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The order in which products appear: "alpha-asc", "alpha-desc",
    /// "best-selling", "created", "created-desc", "manual", "price-asc",
    /// or "price-desc".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,

    /// The suffix of the Liquid template used to render the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// Whether the collection is published to the online store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    /// Where the collection is published: "web" or "global".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// The image attached to the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<CollectionImage>,

    /// When the collection was published. Null when unpublished.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub published_at: Option<DateTime<Utc>>,

    /// When the collection was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The admin GraphQL API ID for this collection.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for CustomCollection {
    type Id = u64;
    type FindParams = ();
    type AllParams = CustomCollectionListParams;
    type CountParams = CustomCollectionCountParams;

    const NAME: &'static str = "CustomCollection";
    const KEY: &'static str = "custom_collection";
    const PLURAL: &'static str = "custom_collections";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "custom_collections/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "custom_collections",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &[],
            "custom_collections/count",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "custom_collections",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "custom_collections/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "custom_collections/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing custom collections.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomCollectionListParams {
    /// Comma-separated list of collection IDs to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,

    /// Filter by collection title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Show only collections containing this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Filter by collection handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Maximum number of results to return (default: 50, max: 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return collections after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Show collections last updated after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show collections last updated before this date.
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

/// Parameters for counting custom collections.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomCollectionCountParams {
    /// Filter by collection title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Count only collections containing this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Show collections last updated after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show collections last updated before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Filter by published status: "published", "unpublished", or "any".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;

    #[test]
    fn test_collection_serialization_omits_read_only_fields() {
        let collection = CustomCollection {
            id: Some(841_564_295),
            title: Some("IPods".to_string()),
            handle: Some("ipods".to_string()),
            body_html: Some("<p>The best selling iPods ever</p>".to_string()),
            sort_order: Some("manual".to_string()),
            published: Some(true),
            image: Some(CollectionImage {
                src: Some("https://example.com/ipod.png".to_string()),
                alt: Some("iPod".to_string()),
                width: Some(600),
                ..Default::default()
            }),
            published_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
            ..Default::default()
        };

        let json = serde_json::to_value(&collection).unwrap();

        assert_eq!(json["title"], "IPods");
        assert_eq!(json["sort_order"], "manual");
        assert_eq!(json["image"]["src"], "https://example.com/ipod.png");

        assert!(json.get("id").is_none());
        assert!(json.get("published_at").is_none());
        assert!(json.get("updated_at").is_none());
        // Image dimensions are server-computed
        assert!(json["image"].get("width").is_none());
    }

    #[test]
    fn test_collection_deserialization() {
        let json = r#"{
            "id": 841564295,
            "title": "IPods",
            "handle": "ipods",
            "body_html": "<p>The best selling iPods ever</p>",
            "sort_order": "best-selling",
            "published_at": "2025-03-01T00:00:00Z",
            "published_scope": "web",
            "updated_at": "2025-06-20T15:45:00Z",
            "image": {
                "src": "https://cdn.shopify.com/collections/ipods.jpg",
                "width": 123,
                "height": 456,
                "created_at": "2025-03-01T00:00:00Z"
            }
        }"#;

        let collection: CustomCollection = serde_json::from_str(json).unwrap();

        assert_eq!(collection.id, Some(841_564_295));
        assert_eq!(collection.handle, Some("ipods".to_string()));
        assert_eq!(collection.published_scope, Some("web".to_string()));

        let image = collection.image.unwrap();
        assert_eq!(image.width, Some(123));
        assert_eq!(image.height, Some(456));
    }

    #[test]
    fn test_collection_paths_and_keys() {
        assert_eq!(CustomCollection::KEY, "custom_collection");
        assert_eq!(CustomCollection::PLURAL, "custom_collections");

        let count = get_path(CustomCollection::PATHS, ResourceOperation::Count, &[]).unwrap();
        assert_eq!(count.template, "custom_collections/count");
    }
}

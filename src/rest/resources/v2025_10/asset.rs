//! Asset resource implementation.
//!
//! Assets are the files making up a theme: Liquid templates, stylesheets,
//! scripts, and images. Unlike other resources they are addressed by a
//! string `key` (the file's path within the theme, e.g.
//! `templates/index.liquid`) instead of a numeric ID, and the API uses PUT
//! for both create and update:
//!
//! ```text
//! GET    /themes/{theme_id}/assets.json
//! GET    /themes/{theme_id}/assets.json?asset[key]={key}
//! PUT    /themes/{theme_id}/assets.json
//! DELETE /themes/{theme_id}/assets.json?asset[key]={key}
//! ```
//!
//! Listing goes through the generic service
//! ([`Asset::all_with_parent`](crate::rest::RestResource::all_with_parent));
//! the key-addressed operations have their own methods here.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::rest::RestResource;
//! use shopify_admin::rest::resources::v2025_10::Asset;
//!
//! // List a theme's assets
//! let assets = Asset::all_with_parent(&client, 828155753, None).await?;
//!
//! // Write a template
//! let asset = Asset {
//!     key: "snippets/promo.liquid".to_string(),
//!     value: Some("<div>{{ promo }}</div>".to_string()),
//!     ..Default::default()
//! };
//! Asset::save_to_theme(&client, 828155753, &asset).await?;
//!
//! // Read it back and delete it
//! let found = Asset::find_by_key(&client, 828155753, "snippets/promo.liquid").await?;
//! Asset::delete_by_key(&client, 828155753, "snippets/promo.liquid").await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource,
};

/// A theme asset, addressed by its path within the theme.
///
/// Text assets carry their content in `value`; binary assets carry it
/// base64-encoded in `attachment`. On create, `src` uploads from a URL and
/// `source_key` duplicates an existing asset.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Asset {
    /// The path to the asset within the theme
    /// (e.g., `assets/bg-body-green.gif` or `templates/index.liquid`).
    pub key: String,

    /// The text content of the asset, such as HTML and Liquid markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// A base64-encoded image, for binary assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,

    /// The source URL of an image to upload. Only meaningful on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// The path of an existing asset to duplicate. Only meaningful on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_key: Option<String>,

    /// The public CDN URL for the asset.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub public_url: Option<String>,

    /// The MIME type of the asset.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub content_type: Option<String>,

    /// The size of the asset in bytes.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub size: Option<u64>,

    /// The checksum of the asset content.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub checksum: Option<String>,

    /// The ID of the theme the asset belongs to.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub theme_id: Option<u64>,

    /// When the asset was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the asset was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Asset {
    /// Finds a single asset by its key within a theme.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no asset with that key exists.
    pub async fn find_by_key(
        client: &RestClient,
        theme_id: u64,
        key: &str,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let url = format!("themes/{theme_id}/assets");
        let mut query = HashMap::new();
        query.insert("asset[key]".to_string(), key.to_string());

        let response = client
            .get(&url, Some(query))
            .await
            .map_err(|e| ResourceError::for_resource(e, Self::NAME, Some(key)))?;

        ResourceResponse::from_http_response(response, Self::KEY)
    }

    /// Creates or updates an asset within a theme.
    ///
    /// The API uses PUT for both; an asset is overwritten if its key
    /// already exists.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] when the remote rejects
    /// the payload (e.g. malformed Liquid in a template).
    pub async fn save_to_theme(
        client: &RestClient,
        theme_id: u64,
        asset: &Self,
    ) -> Result<Self, ResourceError> {
        let url = format!("themes/{theme_id}/assets");

        let mut body_map = serde_json::Map::new();
        body_map.insert(Self::KEY.to_string(), serde_json::to_value(asset)?);
        let body = serde_json::Value::Object(body_map);

        let response = client
            .put(&url, body, None)
            .await
            .map_err(|e| ResourceError::for_resource(e, Self::NAME, Some(&asset.key)))?;

        let result: ResourceResponse<Self> =
            ResourceResponse::from_http_response(response, Self::KEY)?;
        Ok(result.into_inner())
    }

    /// Deletes an asset by its key within a theme.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no asset with that key exists.
    pub async fn delete_by_key(
        client: &RestClient,
        theme_id: u64,
        key: &str,
    ) -> Result<(), ResourceError> {
        let url = format!("themes/{theme_id}/assets");
        let mut query = HashMap::new();
        query.insert("asset[key]".to_string(), key.to_string());

        client
            .delete(&url, Some(query))
            .await
            .map_err(|e| ResourceError::for_resource(e, Self::NAME, Some(key)))?;

        Ok(())
    }
}

impl RestResource for Asset {
    type Id = String;
    type FindParams = ();
    type AllParams = ();
    type CountParams = ();

    const NAME: &'static str = "Asset";
    const KEY: &'static str = "asset";
    const PLURAL: &'static str = "assets";
    const PARENT: Option<&'static str> = Some("theme_id");

    // Only listing goes through the generic path table; the key-addressed
    // operations (find/save/delete by key) use the methods above
    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::All,
        &["theme_id"],
        "themes/{theme_id}/assets",
    )];

    fn get_id(&self) -> Option<Self::Id> {
        if self.key.is_empty() {
            None
        } else {
            Some(self.key.clone())
        }
    }

    fn parent_id(&self) -> Option<String> {
        self.theme_id.map(|id| id.to_string())
    }
}

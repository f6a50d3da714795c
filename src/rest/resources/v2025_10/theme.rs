//! Theme resource implementation.
//!
//! Themes are the store's frontend packages. At most one theme has the
//! `main` role (the published one); the rest are `unpublished` or `demo`.
//! A new theme is created from a `src` URL pointing at a theme archive, and
//! its files are exposed as [`Asset`](super::Asset)s nested under it.
//!
//! Themes support find, list, create, update, and delete, but no count.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// The role a theme plays in the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThemeRole {
    /// The published theme served to customers.
    Main,
    /// An installed but unpublished theme.
    Unpublished,
    /// A demo theme that cannot be published.
    Demo,
}

/// A theme installed in the store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Theme {
    /// The unique identifier of the theme.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The name of the theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The theme's role: main, unpublished, or demo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ThemeRole>,

    /// A URL pointing at a theme archive to install from.
    /// Only meaningful on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Whether the theme can currently be previewed.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub previewable: Option<bool>,

    /// Whether the theme's files are still being processed.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub processing: Option<bool>,

    /// The ID of the theme in the theme store, if it came from there.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub theme_store_id: Option<u64>,

    /// When the theme was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the theme was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The admin GraphQL API ID for this theme.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Theme {
    type Id = u64;
    type FindParams = ();
    type AllParams = ThemeListParams;
    type CountParams = ();

    const NAME: &'static str = "Theme";
    const KEY: &'static str = "theme";
    const PLURAL: &'static str = "themes";

    // No count path: the API does not expose one for themes
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "themes/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "themes"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "themes"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "themes/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "themes/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing themes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ThemeListParams {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

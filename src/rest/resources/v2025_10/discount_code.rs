//! DiscountCode resource implementation.
//!
//! Discount codes are the customer-facing strings entered at checkout to
//! redeem a price rule. They are a nested resource: every CRUD path runs
//! through the owning price rule.
//!
//! ```text
//! GET    /price_rules/{price_rule_id}/discount_codes.json
//! POST   /price_rules/{price_rule_id}/discount_codes.json
//! GET    /price_rules/{price_rule_id}/discount_codes/{id}.json
//! PUT    /price_rules/{price_rule_id}/discount_codes/{id}.json
//! DELETE /price_rules/{price_rule_id}/discount_codes/{id}.json
//! ```
//!
//! The one exception is [`DiscountCode::lookup`], which finds a code by its
//! string through the standalone `discount_codes/lookup` path.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::rest::RestResource;
//! use shopify_admin::rest::resources::v2025_10::DiscountCode;
//!
//! // Create a code under a price rule; the parent ID comes from the payload
//! let code = DiscountCode {
//!     price_rule_id: Some(507328175),
//!     code: Some("SUMMER20".to_string()),
//!     ..Default::default()
//! };
//! let saved = code.save(&client).await?;
//!
//! // List the rule's codes
//! let codes = DiscountCode::all_with_parent(&client, 507328175, None).await?;
//!
//! // Find a code knowing only its string
//! let found = DiscountCode::lookup(&client, "SUMMER20").await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource,
};

/// A discount code associated with a price rule.
///
/// Creating a code requires `price_rule_id` in the payload; without it the
/// operation fails before any request is issued.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountCode {
    /// The unique identifier of the discount code.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The ID of the parent price rule.
    /// Required for creating new discount codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_rule_id: Option<u64>,

    /// The code that customers enter at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The number of times this discount code has been used.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub usage_count: Option<i32>,

    /// When the discount code was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the discount code was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl DiscountCode {
    /// Looks up a discount code by its code string.
    ///
    /// Uses the standalone lookup path, so the owning price rule does not
    /// need to be known; the returned payload carries its `price_rule_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no discount code with that
    /// string exists.
    pub async fn lookup(
        client: &RestClient,
        code: &str,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let mut query = HashMap::new();
        query.insert("code".to_string(), code.to_string());

        let response = client
            .get("discount_codes/lookup", Some(query))
            .await
            .map_err(|e| ResourceError::for_resource(e, Self::NAME, Some(code)))?;

        ResourceResponse::from_http_response(response, Self::KEY)
    }
}

impl RestResource for DiscountCode {
    type Id = u64;
    type FindParams = ();
    type AllParams = DiscountCodeListParams;
    type CountParams = ();

    const NAME: &'static str = "DiscountCode";
    const KEY: &'static str = "discount_code";
    const PLURAL: &'static str = "discount_codes";
    const PARENT: Option<&'static str> = Some("price_rule_id");

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["price_rule_id", "id"],
            "price_rules/{price_rule_id}/discount_codes/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["price_rule_id"],
            "price_rules/{price_rule_id}/discount_codes",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &["price_rule_id"],
            "price_rules/{price_rule_id}/discount_codes/count",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["price_rule_id"],
            "price_rules/{price_rule_id}/discount_codes",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["price_rule_id", "id"],
            "price_rules/{price_rule_id}/discount_codes/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["price_rule_id", "id"],
            "price_rules/{price_rule_id}/discount_codes/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }

    fn parent_id(&self) -> Option<String> {
        self.price_rule_id.map(|id| id.to_string())
    }
}

/// Parameters for listing discount codes under a price rule.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountCodeListParams {
    /// Maximum number of results to return (default: 50, max: 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return codes after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Cursor for pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;

    #[test]
    fn test_discount_code_serialization_omits_read_only_fields() {
        let code = DiscountCode {
            id: Some(1_054_381_139),
            price_rule_id: Some(507_328_175),
            code: Some("SUMMER20".to_string()),
            usage_count: Some(42),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        };

        let json = serde_json::to_value(&code).unwrap();

        assert_eq!(json["price_rule_id"], 507_328_175);
        assert_eq!(json["code"], "SUMMER20");
        assert!(json.get("id").is_none());
        assert!(json.get("usage_count").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_discount_code_deserialization() {
        let json = r#"{
            "id": 1054381139,
            "price_rule_id": 507328175,
            "code": "SUMMERSALE20OFF",
            "usage_count": 25,
            "created_at": "2025-01-15T10:30:00Z",
            "updated_at": "2025-06-20T15:45:00Z"
        }"#;

        let code: DiscountCode = serde_json::from_str(json).unwrap();

        assert_eq!(code.id, Some(1_054_381_139));
        assert_eq!(code.price_rule_id, Some(507_328_175));
        assert_eq!(code.code, Some("SUMMERSALE20OFF".to_string()));
        assert_eq!(code.usage_count, Some(25));
    }

    #[test]
    fn test_every_path_requires_the_parent() {
        // No standalone paths exist: without price_rule_id nothing resolves
        for operation in [
            ResourceOperation::Find,
            ResourceOperation::All,
            ResourceOperation::Count,
            ResourceOperation::Create,
            ResourceOperation::Update,
            ResourceOperation::Delete,
        ] {
            assert!(
                get_path(DiscountCode::PATHS, operation, &["id"]).is_none(),
                "{operation:?} must require price_rule_id"
            );
        }

        let create = get_path(
            DiscountCode::PATHS,
            ResourceOperation::Create,
            &["price_rule_id"],
        )
        .unwrap();
        assert_eq!(create.template, "price_rules/{price_rule_id}/discount_codes");
    }

    #[test]
    fn test_parent_id_comes_from_payload() {
        let code = DiscountCode {
            price_rule_id: Some(507),
            ..Default::default()
        };
        assert_eq!(code.parent_id(), Some("507".to_string()));

        assert_eq!(DiscountCode::default().parent_id(), None);
        assert_eq!(DiscountCode::PARENT, Some("price_rule_id"));
    }

    #[test]
    fn test_discount_code_envelope_keys() {
        assert_eq!(DiscountCode::KEY, "discount_code");
        assert_eq!(DiscountCode::PLURAL, "discount_codes");
    }
}

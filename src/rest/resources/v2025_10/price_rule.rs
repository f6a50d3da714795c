//! PriceRule resource implementation.
//!
//! Price rules define discount logic that customers redeem through discount
//! codes. A rule describes what is discounted (`target_type`,
//! `target_selection`), by how much (`value_type`, `value` - negative for
//! discounts), how the amount is spread (`allocation_method`), and who
//! qualifies (`customer_selection`, prerequisite fields).
//!
//! Discount codes are a nested resource under price rules; see
//! [`DiscountCode`](super::DiscountCode).
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::Utc;
//! use shopify_admin::rest::RestResource;
//! use shopify_admin::rest::resources::v2025_10::{PriceRule, PriceRuleValueType};
//!
//! let rule = PriceRule {
//!     title: Some("Base".to_string()),
//!     value_type: Some(PriceRuleValueType::Percentage),
//!     value: Some("-10.0".to_string()),
//!     starts_at: Some(Utc::now()),
//!     ..Default::default()
//! };
//! let saved = rule.save(&client).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// Whether the discount is a fixed amount or a percentage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleValueType {
    /// A fixed monetary amount discount.
    FixedAmount,
    /// A percentage discount.
    Percentage,
}

/// How the discount is allocated to qualifying items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleAllocationMethod {
    /// The discount is applied to each qualifying item individually.
    Each,
    /// The discount is spread across all qualifying items.
    Across,
}

/// Which customers are eligible for the price rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleCustomerSelection {
    /// All customers are eligible.
    All,
    /// Only customers meeting prerequisite conditions are eligible.
    Prerequisite,
}

/// What the price rule applies to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleTargetType {
    /// The discount applies to line items.
    LineItem,
    /// The discount applies to shipping.
    ShippingLine,
}

/// Which items the price rule targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleTargetSelection {
    /// The discount applies to all items.
    All,
    /// The discount applies to specific entitled items.
    Entitled,
}

/// A minimum-value prerequisite (subtotal, quantity, or shipping price).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PriceRulePrerequisiteRange {
    /// The minimum value for "greater than or equal to" comparisons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greater_than_or_equal_to: Option<String>,
}

/// A price rule that defines discount logic.
///
/// `id`, `times_used`, `created_at`, `updated_at`, and
/// `admin_graphql_api_id` are read-only and never sent back to the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PriceRule {
    /// The unique identifier of the price rule.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The internal title of the price rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The type of value: fixed_amount or percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<PriceRuleValueType>,

    /// The discount value. Negative for discounts (e.g., "-10.0").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// The customer selection method: all or prerequisite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_selection: Option<PriceRuleCustomerSelection>,

    /// The target type: line_item or shipping_line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<PriceRuleTargetType>,

    /// The target selection: all or entitled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_selection: Option<PriceRuleTargetSelection>,

    /// How the discount is allocated: each or across.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_method: Option<PriceRuleAllocationMethod>,

    /// How many times the discount can be allocated per order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_limit: Option<i32>,

    /// Whether a customer can use the rule only once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub once_per_customer: Option<bool>,

    /// Maximum number of uses across all customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i32>,

    /// When the price rule becomes active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,

    /// When the price rule expires. Null means no expiration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,

    /// Minimum subtotal required for the discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_subtotal_range: Option<PriceRulePrerequisiteRange>,

    /// Minimum quantity of items required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_quantity_range: Option<PriceRulePrerequisiteRange>,

    /// Minimum shipping price required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_shipping_price_range: Option<PriceRulePrerequisiteRange>,

    /// IDs of customers who qualify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_customer_ids: Option<Vec<u64>>,

    /// IDs of collections the discount applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitled_collection_ids: Option<Vec<u64>>,

    /// IDs of products the discount applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitled_product_ids: Option<Vec<u64>>,

    /// IDs of product variants the discount applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitled_variant_ids: Option<Vec<u64>>,

    /// IDs of countries the discount applies to (shipping discounts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitled_country_ids: Option<Vec<u64>>,

    /// How many times the price rule has been used.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub times_used: Option<i32>,

    /// When the price rule was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the price rule was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The admin GraphQL API ID for this price rule.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for PriceRule {
    type Id = u64;
    type FindParams = ();
    type AllParams = PriceRuleListParams;
    type CountParams = PriceRuleCountParams;

    const NAME: &'static str = "PriceRule";
    const KEY: &'static str = "price_rule";
    const PLURAL: &'static str = "price_rules";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "price_rules/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "price_rules"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &[],
            "price_rules/count",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "price_rules",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "price_rules/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "price_rules/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing price rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PriceRuleListParams {
    /// Maximum number of results to return (default: 50, max: 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return price rules after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Show price rules created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show price rules created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Show price rules starting after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at_min: Option<DateTime<Utc>>,

    /// Show price rules starting before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at_max: Option<DateTime<Utc>>,

    /// Show price rules ending after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at_min: Option<DateTime<Utc>>,

    /// Show price rules ending before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at_max: Option<DateTime<Utc>>,

    /// Filter by times used count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times_used: Option<i32>,

    /// Cursor for pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

/// Parameters for counting price rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PriceRuleCountParams {
    /// Show price rules created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show price rules created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Filter by times used count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times_used: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{get_path, ResourceOperation};

    #[test]
    fn test_price_rule_serialization_omits_read_only_fields() {
        let rule = PriceRule {
            id: Some(507_328_175),
            title: Some("Base".to_string()),
            value_type: Some(PriceRuleValueType::Percentage),
            value: Some("-10.0".to_string()),
            customer_selection: Some(PriceRuleCustomerSelection::All),
            target_type: Some(PriceRuleTargetType::LineItem),
            target_selection: Some(PriceRuleTargetSelection::All),
            allocation_method: Some(PriceRuleAllocationMethod::Across),
            once_per_customer: Some(false),
            prerequisite_subtotal_range: Some(PriceRulePrerequisiteRange {
                greater_than_or_equal_to: Some("40.0".to_string()),
            }),
            times_used: Some(25),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
            admin_graphql_api_id: Some("gid://shopify/PriceRule/507328175".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&rule).unwrap();

        // Writable fields are present
        assert_eq!(json["title"], "Base");
        assert_eq!(json["value_type"], "percentage");
        assert_eq!(json["value"], "-10.0");
        assert_eq!(json["customer_selection"], "all");
        assert_eq!(json["target_type"], "line_item");
        assert_eq!(json["allocation_method"], "across");
        assert_eq!(
            json["prerequisite_subtotal_range"]["greater_than_or_equal_to"],
            "40.0"
        );

        // Read-only fields are omitted
        assert!(json.get("id").is_none());
        assert!(json.get("times_used").is_none());
        assert!(json.get("created_at").is_none());
        assert!(json.get("updated_at").is_none());
        assert!(json.get("admin_graphql_api_id").is_none());
    }

    #[test]
    fn test_price_rule_deserialization() {
        let json = r#"{
            "id": 507328175,
            "title": "Base",
            "value_type": "fixed_amount",
            "value": "-10.0",
            "customer_selection": "all",
            "target_type": "line_item",
            "target_selection": "all",
            "allocation_method": "across",
            "once_per_customer": false,
            "usage_limit": null,
            "starts_at": "2025-06-01T00:00:00Z",
            "ends_at": null,
            "times_used": 25,
            "created_at": "2025-05-15T10:30:00Z",
            "updated_at": "2025-06-20T15:45:00Z"
        }"#;

        let rule: PriceRule = serde_json::from_str(json).unwrap();

        assert_eq!(rule.id, Some(507_328_175));
        assert_eq!(rule.title, Some("Base".to_string()));
        assert_eq!(rule.value_type, Some(PriceRuleValueType::FixedAmount));
        assert_eq!(rule.value, Some("-10.0".to_string()));
        assert_eq!(rule.once_per_customer, Some(false));
        assert_eq!(rule.usage_limit, None);
        assert_eq!(rule.times_used, Some(25));
        assert!(rule.starts_at.is_some());
        assert!(rule.ends_at.is_none());
    }

    #[test]
    fn test_price_rule_full_crud_paths() {
        let find = get_path(PriceRule::PATHS, ResourceOperation::Find, &["id"]).unwrap();
        assert_eq!(find.template, "price_rules/{id}");

        let all = get_path(PriceRule::PATHS, ResourceOperation::All, &[]).unwrap();
        assert_eq!(all.template, "price_rules");

        let count = get_path(PriceRule::PATHS, ResourceOperation::Count, &[]).unwrap();
        assert_eq!(count.template, "price_rules/count");

        let create = get_path(PriceRule::PATHS, ResourceOperation::Create, &[]).unwrap();
        assert_eq!(create.http_method, HttpMethod::Post);

        let update = get_path(PriceRule::PATHS, ResourceOperation::Update, &["id"]).unwrap();
        assert_eq!(update.http_method, HttpMethod::Put);

        let delete = get_path(PriceRule::PATHS, ResourceOperation::Delete, &["id"]).unwrap();
        assert_eq!(delete.http_method, HttpMethod::Delete);
    }

    #[test]
    fn test_price_rule_envelope_keys() {
        assert_eq!(PriceRule::KEY, "price_rule");
        assert_eq!(PriceRule::PLURAL, "price_rules");
        assert!(PriceRule::PARENT.is_none());
    }

    #[test]
    fn test_value_type_enum_round_trip() {
        let json = serde_json::to_value(PriceRuleValueType::FixedAmount).unwrap();
        assert_eq!(json, "fixed_amount");

        let parsed: PriceRuleValueType = serde_json::from_str("\"percentage\"").unwrap();
        assert_eq!(parsed, PriceRuleValueType::Percentage);
    }
}

//! Order resource implementation.
//!
//! Orders are the store's completed checkouts. Beyond plain CRUD the API
//! exposes three action endpoints, surfaced here as [`Order::close`],
//! [`Order::open`], and [`Order::cancel`].
//!
//! Money amounts are decimal strings (e.g. `"199.65"`), matching the wire
//! format; the client moves them without interpretation.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::rest::RestResource;
//! use shopify_admin::rest::resources::v2025_10::{Order, OrderListParams};
//!
//! // Archived orders are only visible with status "any"
//! let params = OrderListParams {
//!     status: Some(OrderStatus::Any),
//!     ..Default::default()
//! };
//! let orders = Order::all(&client, Some(params)).await?;
//!
//! let closed = Order::close(&client, 450789469).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource,
};

/// The order's lifecycle status, used for filtering listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Open orders (the default filter).
    Open,
    /// Closed (archived) orders.
    Closed,
    /// Cancelled orders.
    Cancelled,
    /// All orders regardless of status.
    Any,
}

/// The order's payment state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderFinancialStatus {
    /// Payment is pending.
    Pending,
    /// Payment is authorized but not captured.
    Authorized,
    /// Part of the payment has been captured.
    PartiallyPaid,
    /// The full payment has been captured.
    Paid,
    /// Part of the payment has been refunded.
    PartiallyRefunded,
    /// The full payment has been refunded.
    Refunded,
    /// The payment was voided.
    Voided,
}

/// Why an order was cancelled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderCancelReason {
    /// The customer asked for the cancellation.
    Customer,
    /// The order was fraudulent.
    Fraud,
    /// Items were out of stock.
    Inventory,
    /// The payment was declined.
    Declined,
    /// Some other reason.
    Other,
}

/// A line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderLineItem {
    /// The unique identifier of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The title of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The number of units ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    /// The price per unit, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The product's SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The ID of the product variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    /// The ID of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Whether the item requires shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    /// Whether the item is taxable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
}

/// A shipping rate applied to an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderShippingLine {
    /// The unique identifier of the shipping line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The title of the shipping method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The price of the shipping method, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// A reference to the shipping method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The source of the shipping method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A billing or shipping address on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderAddress {
    /// The first line of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// The second line of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// The city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// The two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// The postal or zip code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// The province or state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    /// The recipient's first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The recipient's last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The recipient's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// An order placed in the store.
///
/// Identifiers, timestamps, and totals are read-only; they come back from
/// the API but are never sent in payloads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    /// The unique identifier of the order.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The customer's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The order name, formatted from `order_number` (e.g. "#1001").
    /// Read-only field.
    #[serde(skip_serializing)]
    pub name: Option<String>,

    /// The position of the order in the shop's count of orders.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub order_number: Option<u64>,

    /// A note attached to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Comma-separated tags on the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// The shop currency code (e.g. "USD").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The order's payment state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<OrderFinancialStatus>,

    /// The fulfillment state: "fulfilled", "partial", or null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    /// The items being purchased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<OrderLineItem>>,

    /// The shipping rates applied to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<OrderShippingLine>>,

    /// The billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<OrderAddress>,

    /// The shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<OrderAddress>,

    /// Whether the customer accepts email marketing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_accepts_marketing: Option<bool>,

    /// The sum of line item prices, as a decimal string.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub subtotal_price: Option<String>,

    /// The sum of all taxes, as a decimal string.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub total_tax: Option<String>,

    /// The sum of all discounts, as a decimal string.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub total_discounts: Option<String>,

    /// The total price including taxes and shipping, as a decimal string.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub total_price: Option<String>,

    /// Whether this is a test order.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub test: Option<bool>,

    /// Why the order was cancelled. Null unless cancelled.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub cancel_reason: Option<OrderCancelReason>,

    /// When the order was cancelled. Null unless cancelled.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub cancelled_at: Option<DateTime<Utc>>,

    /// When the order was closed. Null while open.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub closed_at: Option<DateTime<Utc>>,

    /// When the order was processed (may predate the import).
    /// Read-only field.
    #[serde(skip_serializing)]
    pub processed_at: Option<DateTime<Utc>>,

    /// When the order was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the order was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The admin GraphQL API ID for this order.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl Order {
    /// Closes (archives) an order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the order doesn't exist.
    pub async fn close(client: &RestClient, id: u64) -> Result<Self, ResourceError> {
        Self::action(client, id, "close").await
    }

    /// Re-opens a closed order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the order doesn't exist.
    pub async fn open(client: &RestClient, id: u64) -> Result<Self, ResourceError> {
        Self::action(client, id, "open").await
    }

    /// Cancels an order.
    ///
    /// Orders with fulfillments cannot be cancelled; the remote reports
    /// that as a validation failure.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the order doesn't exist, or
    /// [`ResourceError::ValidationFailed`] if it cannot be cancelled.
    pub async fn cancel(client: &RestClient, id: u64) -> Result<Self, ResourceError> {
        Self::action(client, id, "cancel").await
    }

    /// Issues one of the order action endpoints (close/open/cancel).
    async fn action(client: &RestClient, id: u64, action: &str) -> Result<Self, ResourceError> {
        let url = format!("orders/{id}/{action}");
        let body = serde_json::json!({});

        let response = client
            .post(&url, body, None)
            .await
            .map_err(|e| ResourceError::for_resource(e, Self::NAME, Some(&id.to_string())))?;

        let result: ResourceResponse<Self> =
            ResourceResponse::from_http_response(response, Self::KEY)?;
        Ok(result.into_inner())
    }
}

impl RestResource for Order {
    type Id = u64;
    type FindParams = ();
    type AllParams = OrderListParams;
    type CountParams = OrderCountParams;

    const NAME: &'static str = "Order";
    const KEY: &'static str = "order";
    const PLURAL: &'static str = "orders";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "orders/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "orders"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &[],
            "orders/count",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "orders"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "orders/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "orders/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderListParams {
    /// Filter by order status. Without `Any`, archived orders are not
    /// returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    /// Filter by payment state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<OrderFinancialStatus>,

    /// Filter by fulfillment state: "shipped", "partial", "unshipped",
    /// "any", or "unfulfilled".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    /// Comma-separated list of order IDs to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,

    /// Maximum number of results to return (default: 50, max: 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return orders after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Show orders created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show orders created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Show orders last updated after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show orders last updated before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Show orders processed after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_min: Option<DateTime<Utc>>,

    /// Show orders processed before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_max: Option<DateTime<Utc>>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Cursor for pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

/// Parameters for counting orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderCountParams {
    /// Filter by order status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    /// Filter by payment state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<OrderFinancialStatus>,

    /// Filter by fulfillment state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    /// Show orders created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show orders created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;

    #[test]
    fn test_order_deserialization() {
        let json = r##"{
            "id": 450789469,
            "email": "bob.norman@mail.example.com",
            "name": "#1001",
            "order_number": 1001,
            "currency": "USD",
            "financial_status": "paid",
            "fulfillment_status": null,
            "subtotal_price": "398.00",
            "total_tax": "11.94",
            "total_discounts": "10.00",
            "total_price": "409.94",
            "test": false,
            "cancel_reason": null,
            "cancelled_at": null,
            "closed_at": null,
            "processed_at": "2025-07-01T12:00:00Z",
            "line_items": [
                {
                    "id": 669751112,
                    "title": "IPod Nano - 8GB",
                    "quantity": 1,
                    "price": "199.00",
                    "sku": "IPOD2008PINK",
                    "variant_id": 457924702,
                    "product_id": 632910392
                }
            ],
            "shipping_lines": [
                {
                    "id": 369256396,
                    "title": "Free Shipping",
                    "price": "0.00",
                    "code": "Free Shipping",
                    "source": "shopify"
                }
            ]
        }"##;

        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.id, Some(450_789_469));
        assert_eq!(order.name, Some("#1001".to_string()));
        assert_eq!(
            order.financial_status,
            Some(OrderFinancialStatus::Paid)
        );
        assert!(order.fulfillment_status.is_none());
        assert_eq!(order.total_price, Some("409.94".to_string()));
        assert!(!order.test.unwrap());

        let items = order.line_items.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].sku, Some("IPOD2008PINK".to_string()));
        assert_eq!(items[0].quantity, Some(1));

        let shipping = order.shipping_lines.unwrap();
        assert_eq!(shipping[0].source, Some("shopify".to_string()));
    }

    #[test]
    fn test_order_serialization_omits_totals_and_ids() {
        let order = Order {
            id: Some(450_789_469),
            email: Some("bob@example.com".to_string()),
            note: Some("rush delivery".to_string()),
            total_price: Some("409.94".to_string()),
            order_number: Some(1001),
            ..Default::default()
        };

        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["email"], "bob@example.com");
        assert_eq!(json["note"], "rush delivery");

        assert!(json.get("id").is_none());
        assert!(json.get("total_price").is_none());
        assert!(json.get("order_number").is_none());
    }

    #[test]
    fn test_status_enums_serialize_snake_case() {
        assert_eq!(serde_json::to_value(OrderStatus::Any).unwrap(), "any");
        assert_eq!(
            serde_json::to_value(OrderFinancialStatus::PartiallyRefunded).unwrap(),
            "partially_refunded"
        );
        assert_eq!(
            serde_json::to_value(OrderCancelReason::Inventory).unwrap(),
            "inventory"
        );
    }

    #[test]
    fn test_order_paths() {
        assert_eq!(Order::KEY, "order");
        assert_eq!(Order::PLURAL, "orders");

        let count = get_path(Order::PATHS, ResourceOperation::Count, &[]).unwrap();
        assert_eq!(count.template, "orders/count");

        let find = get_path(Order::PATHS, ResourceOperation::Find, &["id"]).unwrap();
        assert_eq!(find.template, "orders/{id}");
        assert_eq!(find.http_method, HttpMethod::Get);
    }

    #[test]
    fn test_list_params_serialize_filters() {
        let params = OrderListParams {
            status: Some(OrderStatus::Any),
            financial_status: Some(OrderFinancialStatus::Paid),
            limit: Some(250),
            ..Default::default()
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["status"], "any");
        assert_eq!(json["financial_status"], "paid");
        assert_eq!(json["limit"], 250);
        assert!(json.get("since_id").is_none());
    }
}

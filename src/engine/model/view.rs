use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::model::{LineItem, Money, Order};

/// Denormalized `{id, name}` pair standing in for a foreign reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefSummary {
    pub id: String,
    pub name: String,
}

/// Current catalog detail attached to a line item on explicit request.
/// Distinct from the snapshot fields, which never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItemView {
    #[serde(flatten)]
    pub item: LineItem,
    /// Populated only when raw product detail was requested and the
    /// product still exists in the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<ProductDetail>,
}

/// An order with its foreign references resolved for display.
///
/// `purchaser` and `client` are `None` when the referenced record no
/// longer exists; the order itself is always returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: String,
    pub purchaser: Option<RefSummary>,
    pub client: Option<RefSummary>,
    pub line_items: Vec<LineItemView>,
    pub items_total: Money,
    pub tax_total: Money,
    pub grand_total: Money,
    pub is_paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
    pub is_delivered: bool,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl OrderView {
    pub fn from_order(
        order: Order,
        purchaser: Option<RefSummary>,
        client: Option<RefSummary>,
    ) -> Self {
        Self {
            id: order.id,
            purchaser,
            client,
            line_items: order
                .line_items
                .into_iter()
                .map(|item| LineItemView { item, detail: None })
                .collect(),
            items_total: order.items_total,
            tax_total: order.tax_total,
            grand_total: order.grand_total,
            is_paid: order.is_paid,
            paid_at: order.paid_at,
            is_delivered: order.is_delivered,
            delivered_at: order.delivered_at,
            created_at: order.created_at,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::errors::StoreError;
use crate::engine::model::Money;

/// A purchase record as stored. Line items are snapshotted at creation
/// time; later catalog edits never change them. `created_at` is the
/// default sort key and the bucketing key for every aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub purchaser: String,
    #[serde(default)]
    pub client: Option<String>,
    pub line_items: Vec<LineItem>,
    pub items_total: Money,
    pub tax_total: Money,
    pub grand_total: Money,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_delivered: bool,
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// One snapshotted `(product, name, quantity, unit price)` tuple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
}

impl Order {
    pub fn from_document(doc: Value) -> Result<Order, StoreError> {
        serde_json::from_value(doc).map_err(|e| StoreError::BadDocument(format!("order: {e}")))
    }
}

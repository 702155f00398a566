use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::analytics::range;
use crate::engine::errors::{LedgerError, StoreError};
use crate::engine::store::{
    DocumentStore, Filter, Fold, GroupKey, SortKey, Stage, collections,
};
use crate::shared::response::AggregateList;

/// Units of one product purchased in one calendar month.
///
/// `name` and `brand` are the product's *current* catalog values, not the
/// line-item snapshot — this is a catalog-centric report. Groups whose
/// product was deleted are dropped entirely (inner-join semantics).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPurchases {
    pub product_id: String,
    pub name: String,
    pub brand: String,
    pub month: u32,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    product_id: String,
    month: u32,
    quantity: i64,
    product: JoinedProduct,
}

#[derive(Debug, Deserialize)]
struct JoinedProduct {
    name: String,
    brand: String,
}

pub fn counts_pipeline(from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<Stage> {
    vec![
        Stage::Match(Filter::CreatedBetween {
            field: "created_at".to_string(),
            from,
            to,
        }),
        // one purchase event per line item
        Stage::Unwind {
            path: "line_items".to_string(),
        },
        Stage::Group {
            keys: vec![
                GroupKey::field("product_id", "line_items.product"),
                GroupKey::month("month", "created_at"),
            ],
            folds: vec![Fold::sum_int("quantity", "line_items.quantity")],
        },
        Stage::Lookup {
            from: collections::PRODUCTS.to_string(),
            local_field: "product_id".to_string(),
            foreign_field: "id".to_string(),
            as_field: "product".to_string(),
        },
        // drops groups whose product no longer exists
        Stage::Unwind {
            path: "product".to_string(),
        },
        Stage::Sort(vec![SortKey::desc("month"), SortKey::desc("quantity")]),
    ]
}

/// Purchase counts per `(product, month)` for the year, optionally
/// narrowed to one month, joined to the current catalog.
pub async fn product_purchase_counts(
    store: &dyn DocumentStore,
    year: i32,
    month: Option<u32>,
) -> Result<AggregateList<ProductPurchases>, LedgerError> {
    let (from, to) = range::bounds(year, month)?;
    let rows = store
        .aggregate(collections::ORDERS, &counts_pipeline(from, to))
        .await?;
    debug!(target: "orderlens::analytics", year, ?month, groups = rows.len(),
        "product purchase counts computed");

    let results = rows
        .into_iter()
        .map(|row| {
            let row: CountRow = serde_json::from_value(row)
                .map_err(|e| StoreError::BadDocument(format!("purchase count row: {e}")))?;
            Ok(ProductPurchases {
                product_id: row.product_id,
                name: row.product.name,
                brand: row.product.brand,
                month: row.month,
                quantity: row.quantity,
            })
        })
        .collect::<Result<Vec<_>, LedgerError>>()?;
    Ok(results.into())
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::analytics::range;
use crate::engine::errors::{LedgerError, StoreError};
use crate::engine::model::Money;
use crate::engine::store::{
    DocumentStore, Filter, Fold, GroupKey, SortKey, Stage, collections,
};
use crate::shared::response::AggregateList;

/// Revenue of one calendar month. The monthly series is sparse: months
/// without orders are simply absent, and callers needing a dense
/// 12-entry series fill the gaps themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: u32,
    pub total: Money,
}

/// Whole-range revenue. Zero is a valid answer for an empty range,
/// distinct from "not found".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueTotal {
    pub total: Money,
}

fn in_range(from: DateTime<Utc>, to: DateTime<Utc>) -> Stage {
    Stage::Match(Filter::CreatedBetween {
        field: "created_at".to_string(),
        from,
        to,
    })
}

pub fn monthly_pipeline(from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<Stage> {
    vec![
        in_range(from, to),
        Stage::Group {
            keys: vec![GroupKey::month("month", "created_at")],
            folds: vec![Fold::sum_money("total", "grand_total")],
        },
        Stage::Sort(vec![SortKey::asc("month")]),
    ]
}

pub fn yearly_pipeline(from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<Stage> {
    vec![
        in_range(from, to),
        Stage::Group {
            keys: vec![],
            folds: vec![Fold::sum_money("total", "grand_total")],
        },
    ]
}

/// Per-month `grand_total` sums for the year, months ascending.
pub async fn monthly_revenue(
    store: &dyn DocumentStore,
    year: i32,
) -> Result<AggregateList<MonthlyRevenue>, LedgerError> {
    let (from, to) = range::year_bounds(year)?;
    let rows = store
        .aggregate(collections::ORDERS, &monthly_pipeline(from, to))
        .await?;
    debug!(target: "orderlens::analytics", year, months = rows.len(), "monthly revenue computed");

    let results = rows
        .into_iter()
        .map(|row| {
            serde_json::from_value(row)
                .map_err(|e| StoreError::BadDocument(format!("monthly revenue row: {e}")))
        })
        .collect::<Result<Vec<MonthlyRevenue>, _>>()?;
    Ok(results.into())
}

/// Single `grand_total` sum over the whole year; exactly one record,
/// `total: 0` when the year has no orders.
pub async fn yearly_revenue(
    store: &dyn DocumentStore,
    year: i32,
) -> Result<AggregateList<RevenueTotal>, LedgerError> {
    let (from, to) = range::year_bounds(year)?;
    let rows = store
        .aggregate(collections::ORDERS, &yearly_pipeline(from, to))
        .await?;

    let total = match rows.into_iter().next() {
        Some(row) => serde_json::from_value(row)
            .map_err(|e| StoreError::BadDocument(format!("yearly revenue row: {e}")))?,
        None => RevenueTotal { total: Money::ZERO },
    };
    debug!(target: "orderlens::analytics", year, total = %total.total, "yearly revenue computed");
    Ok(vec![total].into())
}

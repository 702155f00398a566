use std::sync::Arc;

use crate::engine::analytics::{
    self, MonthlyRevenue, ProductPurchases, RevenueTotal,
};
use crate::engine::errors::LedgerError;
use crate::engine::model::OrderView;
use crate::engine::query::{self, ListParams, Scope};
use crate::engine::store::DocumentStore;
use crate::shared::response::{AggregateList, Paged};

/// Facade over the read/analytics operations of the order ledger.
///
/// Every operation is a stateless, request-scoped computation over the
/// store; dropping the returned future cancels the in-flight store call.
/// Results always come back in one of the two envelope shapes.
pub struct OrderReader {
    store: Arc<dyn DocumentStore>,
}

impl OrderReader {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Paginated, keyword-filtered, sorted listing within a scope.
    pub async fn list_orders(
        &self,
        scope: &Scope,
        params: &ListParams,
    ) -> Result<Paged<OrderView>, LedgerError> {
        query::list_orders(self.store.as_ref(), scope, params).await
    }

    /// Single order with references denormalized; `NotFound` when absent.
    pub async fn get_order(
        &self,
        id: &str,
        expand_products: bool,
    ) -> Result<OrderView, LedgerError> {
        query::get_order(self.store.as_ref(), id, expand_products).await
    }

    /// Per-month revenue for the year (sparse, months ascending).
    pub async fn monthly_revenue(
        &self,
        year: i32,
    ) -> Result<AggregateList<MonthlyRevenue>, LedgerError> {
        analytics::monthly_revenue(self.store.as_ref(), year).await
    }

    /// Whole-year revenue; exactly one record, zero for an empty year.
    pub async fn yearly_revenue(
        &self,
        year: i32,
    ) -> Result<AggregateList<RevenueTotal>, LedgerError> {
        analytics::yearly_revenue(self.store.as_ref(), year).await
    }

    /// Purchase counts per product and month, joined to the current
    /// catalog (deleted products drop out).
    pub async fn product_purchase_counts(
        &self,
        year: i32,
        month: Option<u32>,
    ) -> Result<AggregateList<ProductPurchases>, LedgerError> {
        analytics::product_purchase_counts(self.store.as_ref(), year, month).await
    }
}

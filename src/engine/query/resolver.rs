use std::collections::HashMap;

use tracing::debug;

use crate::engine::errors::LedgerError;
use crate::engine::model::{Order, OrderView, ProductDetail, RefSummary};
use crate::engine::store::{DocumentStore, collections};

/// Request-scoped resolver turning stored reference ids into display
/// summaries.
///
/// A dangling reference is a policy, not a failure: historical orders must
/// stay listable after the referenced user/client/product is deleted, so a
/// miss resolves to `None` and only store failures propagate. Lookups are
/// memoized for the life of the resolver.
pub struct RefResolver<'a> {
    store: &'a dyn DocumentStore,
    summaries: HashMap<(&'static str, String), Option<RefSummary>>,
    details: HashMap<String, Option<ProductDetail>>,
}

impl<'a> RefResolver<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self {
            store,
            summaries: HashMap::new(),
            details: HashMap::new(),
        }
    }

    /// `{id, name}` for a referenced record, `None` when it no longer
    /// exists or does not decode to a summary.
    pub async fn summary(
        &mut self,
        collection: &'static str,
        id: &str,
    ) -> Result<Option<RefSummary>, LedgerError> {
        if let Some(hit) = self.summaries.get(&(collection, id.to_string())) {
            return Ok(hit.clone());
        }

        let summary = match self.store.find_one(collection, id).await? {
            Some(doc) => match serde_json::from_value::<RefSummary>(doc) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    debug!(target: "orderlens::resolve", collection, id, error = %e,
                        "referenced record does not decode, leaving unresolved");
                    None
                }
            },
            None => {
                debug!(target: "orderlens::resolve", collection, id, "dangling reference");
                None
            }
        };

        self.summaries
            .insert((collection, id.to_string()), summary.clone());
        Ok(summary)
    }

    /// Denormalizes purchaser and client onto the order.
    pub async fn resolve_order(&mut self, order: Order) -> Result<OrderView, LedgerError> {
        let purchaser = self.summary(collections::USERS, &order.purchaser).await?;
        let client = match &order.client {
            Some(id) => self.summary(collections::CLIENTS, id).await?,
            None => None,
        };
        Ok(OrderView::from_order(order, purchaser, client))
    }

    /// Current catalog detail for a line item's product reference, `None`
    /// for a since-deleted product. The snapshot fields are left alone.
    pub async fn product_detail(
        &mut self,
        id: &str,
    ) -> Result<Option<ProductDetail>, LedgerError> {
        if let Some(hit) = self.details.get(id) {
            return Ok(hit.clone());
        }

        let detail = match self.store.find_one(collections::PRODUCTS, id).await? {
            Some(doc) => match serde_json::from_value::<ProductDetail>(doc) {
                Ok(detail) => Some(detail),
                Err(e) => {
                    debug!(target: "orderlens::resolve", id, error = %e,
                        "product record does not decode, leaving unresolved");
                    None
                }
            },
            None => {
                debug!(target: "orderlens::resolve", id, "dangling product reference");
                None
            }
        };

        self.details.insert(id.to_string(), detail.clone());
        Ok(detail)
    }
}

use tracing::debug;

use crate::engine::errors::LedgerError;
use crate::engine::model::{Order, OrderView};
use crate::engine::query::params::{ListParams, Scope};
use crate::engine::query::resolver::RefResolver;
use crate::engine::store::{DocumentStore, collections};
use crate::shared::response::Paged;

/// Runs a paginated, filtered, sorted listing over the order ledger.
///
/// An empty match set and an out-of-range page both come back as an empty
/// page with the correct totals, never as an error.
pub async fn list_orders(
    store: &dyn DocumentStore,
    scope: &Scope,
    params: &ListParams,
) -> Result<Paged<OrderView>, LedgerError> {
    let filter = params.filter(scope);

    let total = store.count(collections::ORDERS, &filter).await?;
    debug!(target: "orderlens::query",
        page = params.page(), page_size = params.page_size(), total,
        keyword = params.keyword().unwrap_or(""), "listing orders");

    if total == 0 {
        return Ok(Paged::assemble(Vec::new(), 0, params.page_size()));
    }

    let docs = store
        .find(
            collections::ORDERS,
            &filter,
            &params.sort_keys(),
            params.skip(),
            params.page_size(),
        )
        .await?;

    let mut resolver = RefResolver::new(store);
    let mut items = Vec::with_capacity(docs.len());
    for doc in docs {
        let order = Order::from_document(doc)?;
        items.push(resolver.resolve_order(order).await?);
    }

    Ok(Paged::assemble(items, total, params.page_size()))
}

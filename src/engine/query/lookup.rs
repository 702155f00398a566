use tracing::debug;

use crate::engine::errors::LedgerError;
use crate::engine::model::{Order, OrderView};
use crate::engine::query::resolver::RefResolver;
use crate::engine::store::{DocumentStore, collections};

/// Fetches a single order with purchaser and client denormalized.
///
/// `expand_products` additionally attaches current catalog detail to each
/// line item; deleted products stay `None` while the snapshot fields are
/// always returned.
pub async fn get_order(
    store: &dyn DocumentStore,
    id: &str,
    expand_products: bool,
) -> Result<OrderView, LedgerError> {
    let doc = store
        .find_one(collections::ORDERS, id)
        .await?
        .ok_or_else(|| LedgerError::NotFound { id: id.to_string() })?;
    let order = Order::from_document(doc)?;

    let mut resolver = RefResolver::new(store);
    let mut view = resolver.resolve_order(order).await?;

    if expand_products {
        debug!(target: "orderlens::query", id, "expanding line item product detail");
        for line in &mut view.line_items {
            line.detail = resolver.product_detail(&line.item.product).await?;
        }
    }

    Ok(view)
}

use async_trait::async_trait;
use serde_json::Value;

use crate::engine::errors::StoreError;
use crate::engine::store::filter::{Filter, SortKey};
use crate::engine::store::pipeline::Stage;

/// Seam to the backing document store.
///
/// Every call is async and may block on IO; callers propagate cancellation
/// by dropping the future. Implementations decide their own read
/// consistency and retry policy — the engines above never retry.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Predicate + sort + skip/limit query over one collection
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        sort: &[SortKey],
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Value>, StoreError>;

    /// Number of documents matching the predicate
    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError>;

    /// Single-document lookup by `id` field
    async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Runs a declarative, ordered aggregation pipeline. A single
    /// execution observes one consistent snapshot of the collection.
    async fn aggregate(&self, collection: &str, pipeline: &[Stage])
    -> Result<Vec<Value>, StoreError>;
}

use serde::Serialize;

/// Paged-list envelope shared by every listing operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_count: u64,
}

impl<T> Paged<T> {
    /// Packages one page of results with the total match count.
    /// `page_count` is `ceil(total_count / page_size)`; an empty match set
    /// yields zero pages, never an error.
    pub fn assemble(items: Vec<T>, total_count: u64, page_size: u64) -> Self {
        let page_count = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(page_size)
        };
        Self {
            items,
            total_count,
            page_count,
        }
    }
}

/// Aggregate-list envelope shared by every analytics operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateList<T> {
    pub results: Vec<T>,
}

impl<T> AggregateList<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self { results }
    }
}

impl<T> From<Vec<T>> for AggregateList<T> {
    fn from(results: Vec<T>) -> Self {
        Self::new(results)
    }
}

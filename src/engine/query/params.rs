use serde_json::json;

use crate::engine::errors::LedgerError;
use crate::engine::store::filter::{Direction, Filter, SortKey};
use crate::shared::config::CONFIG;

const CREATED_AT: &str = "created_at";

/// Which slice of the ledger a listing covers
#[derive(Debug, Clone, PartialEq)]
pub enum Scope {
    /// Admin-wide, unscoped listing
    All,
    Purchaser(String),
    Client(String),
}

impl Scope {
    pub fn filter(&self) -> Filter {
        match self {
            Scope::All => Filter::All,
            Scope::Purchaser(id) => Filter::Eq {
                field: "purchaser".to_string(),
                value: json!(id),
            },
            Scope::Client(id) => Filter::Eq {
                field: "client".to_string(),
                value: json!(id),
            },
        }
    }
}

/// Caller-supplied sort override
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub field: String,
    pub direction: Direction,
}

/// Validated listing parameters. Construction is the only path, so the
/// engine never sees a zero page, a zero or oversized page size, or a
/// blank sort field.
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    page: u64,
    page_size: u64,
    keyword: Option<String>,
    sort: Option<SortSpec>,
}

impl ListParams {
    /// Applies defaults (page 1, configured page size) and rejects
    /// malformed input as `InvalidQuery` naming the parameter.
    pub fn new(
        page: Option<u64>,
        page_size: Option<u64>,
        keyword: Option<String>,
        sort: Option<SortSpec>,
    ) -> Result<Self, LedgerError> {
        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(LedgerError::invalid_query("page", "must be at least 1"));
        }

        let page_size = page_size.unwrap_or(CONFIG.query.default_page_size);
        if page_size == 0 {
            return Err(LedgerError::invalid_query("pageSize", "must be at least 1"));
        }
        if page_size > CONFIG.query.max_page_size {
            return Err(LedgerError::invalid_query(
                "pageSize",
                format!("must be at most {}", CONFIG.query.max_page_size),
            ));
        }

        let keyword = keyword
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if let Some(spec) = &sort {
            if spec.field.trim().is_empty() {
                return Err(LedgerError::invalid_query(
                    "sort.field",
                    "must not be empty",
                ));
            }
        }

        Ok(Self {
            page,
            page_size,
            keyword,
            sort,
        })
    }

    pub fn defaults() -> Self {
        Self {
            page: 1,
            page_size: CONFIG.query.default_page_size,
            keyword: None,
            sort: None,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Records to skip: pages are 1-based, so page 1 skips nothing.
    /// Saturates on huge pages, which then behave like any other
    /// out-of-range page.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Scope AND keyword combined into one store predicate.
    pub fn filter(&self, scope: &Scope) -> Filter {
        let mut parts = vec![scope.filter()];
        if let Some(keyword) = &self.keyword {
            parts.push(Filter::AnyElemContains {
                array_field: "line_items".to_string(),
                elem_field: "name".to_string(),
                needle: keyword.clone(),
            });
        }
        Filter::and(parts)
    }

    /// Explicit sort first, `created_at` descending as the deterministic
    /// tie-break for equal sort keys.
    pub fn sort_keys(&self) -> Vec<SortKey> {
        let mut keys = Vec::with_capacity(2);
        if let Some(spec) = &self.sort {
            keys.push(SortKey {
                field: spec.field.clone(),
                direction: spec.direction,
            });
        }
        if self.sort.as_ref().map(|s| s.field.as_str()) != Some(CREATED_AT) {
            keys.push(SortKey::desc(CREATED_AT));
        }
        keys
    }
}

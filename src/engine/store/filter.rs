use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::engine::store::docs::field_at;

/// Declarative predicate tree evaluated by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every document
    All,
    And(Vec<Filter>),
    Eq {
        field: String,
        value: Value,
    },
    /// Inclusive UTC instant range over an RFC 3339 timestamp field
    CreatedBetween {
        field: String,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
    /// True when any element of the array field has `elem_field`
    /// containing `needle`, case-insensitively
    AnyElemContains {
        array_field: String,
        elem_field: String,
        needle: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub field: String,
    pub direction: Direction,
}

impl SortKey {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

impl Filter {
    pub fn and(filters: Vec<Filter>) -> Filter {
        let mut kept: Vec<Filter> = filters.into_iter().filter(|f| *f != Filter::All).collect();
        match kept.len() {
            0 => Filter::All,
            1 => kept.remove(0),
            _ => Filter::And(kept),
        }
    }

    pub fn matches(&self, doc: &Value) -> bool {
        match self {
            Filter::All => true,
            Filter::And(parts) => parts.iter().all(|f| f.matches(doc)),
            Filter::Eq { field, value } => field_at(doc, field) == Some(value),
            Filter::CreatedBetween { field, from, to } => field_at(doc, field)
                .and_then(Value::as_str)
                .and_then(|s| s.parse::<DateTime<Utc>>().ok())
                .is_some_and(|at| at >= *from && at <= *to),
            Filter::AnyElemContains {
                array_field,
                elem_field,
                needle,
            } => {
                let needle = needle.to_lowercase();
                field_at(doc, array_field)
                    .and_then(Value::as_array)
                    .is_some_and(|elems| {
                        elems.iter().any(|elem| {
                            field_at(elem, elem_field)
                                .and_then(Value::as_str)
                                .is_some_and(|s| s.to_lowercase().contains(&needle))
                        })
                    })
            }
        }
    }
}

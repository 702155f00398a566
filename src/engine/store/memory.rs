use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use indexmap::IndexMap;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::engine::errors::StoreError;
use crate::engine::model::Money;
use crate::engine::store::adapter::DocumentStore;
use crate::engine::store::docs::{compare_values, field_at, set_field_at};
use crate::engine::store::filter::{Direction, Filter, SortKey};
use crate::engine::store::pipeline::{Fold, FoldOp, GroupKey, KeyExpr, Stage};
use crate::shared::config::CONFIG;

/// In-process document store with a full pipeline executor.
///
/// Reference implementation of the `DocumentStore` seam: tests and
/// embedders run against it, and its stage semantics define what the
/// engines may assume of any real backend. A single `aggregate` call runs
/// under one read guard, so a pipeline execution observes a consistent
/// snapshot.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, collection: &str, doc: Value) {
        let mut guard = self.collections.write().await;
        guard.entry(collection.to_string()).or_default().push(doc);
    }

    pub async fn insert_many(&self, collection: &str, docs: impl IntoIterator<Item = Value>) {
        let mut guard = self.collections.write().await;
        guard
            .entry(collection.to_string())
            .or_default()
            .extend(docs);
    }

    /// Removes a document by `id` field; returns whether one was removed.
    pub async fn remove(&self, collection: &str, id: &str) -> bool {
        let mut guard = self.collections.write().await;
        let Some(docs) = guard.get_mut(collection) else {
            return false;
        };
        let before = docs.len();
        docs.retain(|doc| field_at(doc, "id").and_then(Value::as_str) != Some(id));
        docs.len() < before
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        sort: &[SortKey],
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Value>, StoreError> {
        let guard = self.collections.read().await;
        let mut matched: Vec<Value> = guard
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default();
        sort_docs(&mut matched, sort);
        Ok(matched
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).count() as u64)
            .unwrap_or(0))
    }

    async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard.get(collection).and_then(|docs| {
            docs.iter()
                .find(|doc| field_at(doc, "id").and_then(Value::as_str) == Some(id))
                .cloned()
        }))
    }

    async fn aggregate(
        &self,
        collection: &str,
        pipeline: &[Stage],
    ) -> Result<Vec<Value>, StoreError> {
        let guard = self.collections.read().await;
        let mut docs: Vec<Value> = guard.get(collection).cloned().unwrap_or_default();

        for stage in pipeline {
            docs = match stage {
                Stage::Match(filter) => docs.into_iter().filter(|d| filter.matches(d)).collect(),
                Stage::Unwind { path } => unwind(docs, path),
                Stage::Group { keys, folds } => group(docs, keys, folds)?,
                Stage::Lookup {
                    from,
                    local_field,
                    foreign_field,
                    as_field,
                } => {
                    let foreign = guard.get(from.as_str()).map(Vec::as_slice).unwrap_or(&[]);
                    lookup(docs, foreign, local_field, foreign_field, as_field)
                }
                Stage::Sort(keys) => {
                    sort_docs(&mut docs, keys);
                    docs
                }
            };
        }

        debug!(target: "orderlens::store", collection, rows = docs.len(), "pipeline executed");
        Ok(docs)
    }
}

fn sort_docs(docs: &mut [Value], keys: &[SortKey]) {
    if keys.is_empty() {
        return;
    }
    docs.sort_by(|a, b| {
        for key in keys {
            let null = Value::Null;
            let va = field_at(a, &key.field).unwrap_or(&null);
            let vb = field_at(b, &key.field).unwrap_or(&null);
            let ord = match key.direction {
                Direction::Asc => compare_values(va, vb),
                Direction::Desc => compare_values(vb, va),
            };
            if !ord.is_eq() {
                return ord;
            }
        }
        std::cmp::Ordering::Equal
    });
}

fn unwind(docs: Vec<Value>, path: &str) -> Vec<Value> {
    let mut out = Vec::new();
    for doc in docs {
        let Some(Value::Array(elems)) = field_at(&doc, path).cloned() else {
            continue;
        };
        for elem in elems {
            let mut copy = doc.clone();
            set_field_at(&mut copy, path, elem);
            out.push(copy);
        }
    }
    out
}

fn lookup(
    docs: Vec<Value>,
    foreign: &[Value],
    local_field: &str,
    foreign_field: &str,
    as_field: &str,
) -> Vec<Value> {
    docs.into_iter()
        .map(|mut doc| {
            let matches: Vec<Value> = match field_at(&doc, local_field) {
                Some(local) => foreign
                    .iter()
                    .filter(|f| field_at(f, foreign_field) == Some(local))
                    .cloned()
                    .collect(),
                None => Vec::new(),
            };
            set_field_at(&mut doc, as_field, Value::Array(matches));
            doc
        })
        .collect()
}

enum FoldAcc {
    SumMoney(Money),
    SumInt(i64),
    First(Option<Value>),
}

impl FoldAcc {
    fn new(op: &FoldOp) -> Self {
        match op {
            FoldOp::SumMoney { .. } => Self::SumMoney(Money::ZERO),
            FoldOp::SumInt { .. } => Self::SumInt(0),
            FoldOp::First { .. } => Self::First(None),
        }
    }

    fn apply(&mut self, op: &FoldOp, doc: &Value) -> Result<(), StoreError> {
        match (self, op) {
            (Self::SumMoney(acc), FoldOp::SumMoney { field }) => {
                // Missing fields contribute nothing; present fields must parse
                let Some(raw) = field_at(doc, field) else {
                    return Ok(());
                };
                let amount = Money::from_json(raw)
                    .map_err(|e| StoreError::BadDocument(format!("field `{field}`: {e}")))?;
                *acc = acc.checked_add(amount).ok_or_else(|| {
                    StoreError::BadDocument(format!("field `{field}`: sum overflow"))
                })?;
            }
            (Self::SumInt(acc), FoldOp::SumInt { field }) => {
                if let Some(v) = field_at(doc, field).and_then(Value::as_i64) {
                    *acc += v;
                }
            }
            (Self::First(slot), FoldOp::First { field }) => {
                if slot.is_none() {
                    slot.replace(field_at(doc, field).cloned().unwrap_or(Value::Null));
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn finalize(self) -> Value {
        match self {
            Self::SumMoney(m) => Value::String(m.to_string()),
            Self::SumInt(n) => Value::from(n),
            Self::First(v) => v.unwrap_or(Value::Null),
        }
    }
}

fn key_value(doc: &Value, expr: &KeyExpr) -> Value {
    match expr {
        KeyExpr::Field(path) => field_at(doc, path).cloned().unwrap_or(Value::Null),
        KeyExpr::Month(path) => field_at(doc, path)
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<DateTime<Utc>>().ok())
            .map(|at| Value::from(at.with_timezone(&CONFIG.time.zone()).month()))
            .unwrap_or(Value::Null),
    }
}

fn group(docs: Vec<Value>, keys: &[GroupKey], folds: &[Fold]) -> Result<Vec<Value>, StoreError> {
    // IndexMap keeps groups in first-seen order; any required ordering is
    // applied by a later Sort stage
    let mut groups: IndexMap<String, (Vec<Value>, Vec<FoldAcc>)> = IndexMap::new();

    for doc in &docs {
        let key_values: Vec<Value> = keys.iter().map(|k| key_value(doc, &k.expr)).collect();
        let key = serde_json::to_string(&key_values)
            .map_err(|e| StoreError::BadDocument(format!("group key: {e}")))?;
        let (_, accs) = groups.entry(key).or_insert_with(|| {
            (
                key_values,
                folds.iter().map(|f| FoldAcc::new(&f.op)).collect(),
            )
        });
        for (acc, fold) in accs.iter_mut().zip(folds) {
            acc.apply(&fold.op, doc)?;
        }
    }

    Ok(groups
        .into_values()
        .map(|(key_values, accs)| {
            let mut row = serde_json::Map::new();
            for (key, value) in keys.iter().zip(key_values) {
                row.insert(key.name.clone(), value);
            }
            for (fold, acc) in folds.iter().zip(accs) {
                row.insert(fold.name.clone(), acc.finalize());
            }
            Value::Object(row)
        })
        .collect())
}

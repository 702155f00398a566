use crate::engine::store::filter::{Filter, SortKey};

/// One declarative aggregation stage. A pipeline is an ordered `Vec<Stage>`
/// executed by the store; composing the same tagged variants everywhere
/// keeps the aggregate operations mutually consistent and testable without
/// a live store.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    /// Keep documents matching the predicate
    Match(Filter),
    /// Emit one document per element of the array at `path`, with the
    /// array replaced by the element. Documents whose array is missing or
    /// empty are dropped (this is what makes Lookup + Unwind an inner join).
    Unwind { path: String },
    /// Group by the key expressions, applying every fold per group.
    /// Output documents carry each key under its name plus each fold
    /// result under its name; groups appear in first-seen order.
    Group { keys: Vec<GroupKey>, folds: Vec<Fold> },
    /// Left-join against another collection: sets `as_field` to the array
    /// of foreign documents whose `foreign_field` equals `local_field`.
    Lookup {
        from: String,
        local_field: String,
        foreign_field: String,
        as_field: String,
    },
    /// Stable multi-key sort
    Sort(Vec<SortKey>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupKey {
    pub name: String,
    pub expr: KeyExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyExpr {
    /// The raw field value
    Field(String),
    /// Calendar month (1-12) of an RFC 3339 timestamp field, taken in the
    /// configured store time zone
    Month(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fold {
    pub name: String,
    pub op: FoldOp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FoldOp {
    /// Exact minor-unit sum of a money field, emitted as a decimal string
    SumMoney { field: String },
    /// Integer sum of a numeric field
    SumInt { field: String },
    /// Value of the field in the group's first document
    First { field: String },
}

impl GroupKey {
    pub fn field(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expr: KeyExpr::Field(path.into()),
        }
    }

    pub fn month(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expr: KeyExpr::Month(path.into()),
        }
    }
}

impl Fold {
    pub fn sum_money(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            op: FoldOp::SumMoney {
                field: field.into(),
            },
        }
    }

    pub fn sum_int(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            op: FoldOp::SumInt {
                field: field.into(),
            },
        }
    }

    pub fn first(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            op: FoldOp::First {
                field: field.into(),
            },
        }
    }
}

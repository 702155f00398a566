pub mod adapter;
pub mod docs;
pub mod filter;
pub mod memory;
pub mod pipeline;

pub use adapter::DocumentStore;
pub use filter::{Direction, Filter, SortKey};
pub use memory::MemoryStore;
pub use pipeline::{Fold, FoldOp, GroupKey, KeyExpr, Stage};

/// Collection names this core reads
pub mod collections {
    pub const ORDERS: &str = "orders";
    pub const USERS: &str = "users";
    pub const CLIENTS: &str = "clients";
    pub const PRODUCTS: &str = "products";
}

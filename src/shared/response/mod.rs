pub mod envelope;

pub use envelope::{AggregateList, Paged};

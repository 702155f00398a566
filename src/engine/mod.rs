pub mod analytics;
pub mod errors;
pub mod model;
pub mod query;
pub mod reader;
pub mod store;

pub use errors::*;
pub use reader::OrderReader;

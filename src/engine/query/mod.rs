pub mod listing;
pub mod lookup;
pub mod params;
pub mod resolver;

pub use listing::list_orders;
pub use lookup::get_order;
pub use params::{ListParams, Scope, SortSpec};
pub use resolver::RefResolver;

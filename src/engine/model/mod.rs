pub mod money;
pub mod order;
pub mod view;

pub use money::Money;
pub use order::{LineItem, Order};
pub use view::{LineItemView, OrderView, ProductDetail, RefSummary};

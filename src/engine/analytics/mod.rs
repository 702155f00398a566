pub mod products;
pub mod range;
pub mod revenue;

pub use products::{ProductPurchases, product_purchase_counts};
pub use revenue::{MonthlyRevenue, RevenueTotal, monthly_revenue, yearly_revenue};

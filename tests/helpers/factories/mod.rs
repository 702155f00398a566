pub mod client_factory;
pub mod order_factory;
pub mod product_factory;
pub mod user_factory;

pub use client_factory::ClientFactory;
pub use order_factory::OrderFactory;
pub use product_factory::ProductFactory;
pub use user_factory::UserFactory;

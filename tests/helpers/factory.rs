pub use super::factories::{ClientFactory, OrderFactory, ProductFactory, UserFactory};

pub struct Factory;

impl Factory {
    pub fn order() -> OrderFactory {
        OrderFactory::new()
    }

    pub fn client() -> ClientFactory {
        ClientFactory::new()
    }

    pub fn product() -> ProductFactory {
        ProductFactory::new()
    }

    pub fn user() -> UserFactory {
        UserFactory::new()
    }
}

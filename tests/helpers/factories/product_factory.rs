use std::collections::HashMap;

use serde_json::{Value, json};

pub struct ProductFactory {
    params: HashMap<String, Value>,
}

impl ProductFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("id".into(), json!("p-1"));
        params.insert("name".into(), json!("Widget"));
        params.insert("brand".into(), json!("Acme"));
        params.insert("price".into(), json!("10.00"));
        params.insert("stock_count".into(), json!(5));
        Self { params }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn create(self) -> Value {
        Value::Object(self.params.into_iter().collect())
    }
}

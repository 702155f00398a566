use std::collections::HashMap;

use serde_json::{Value, json};

pub struct ClientFactory {
    params: HashMap<String, Value>,
}

impl ClientFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("id".into(), json!("c-1"));
        params.insert("name".into(), json!("Initech"));
        params.insert("address".into(), json!("1 Main St"));
        params.insert("phone".into(), json!("555-0100"));
        params.insert("owning_user".into(), json!("u-1"));
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

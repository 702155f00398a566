use std::collections::HashMap;

use serde_json::{Value, json};

pub struct UserFactory {
    params: HashMap<String, Value>,
}

impl UserFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("id".into(), json!("u-1"));
        params.insert("name".into(), json!("Ada Lovelace"));
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

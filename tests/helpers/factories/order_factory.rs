use std::collections::HashMap;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::{Value, json};

/// Builds order documents in the stored shape.
pub struct OrderFactory {
    params: HashMap<String, Value>,
}

impl OrderFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("id".into(), json!("o-1"));
        params.insert("purchaser".into(), json!("u-1"));
        params.insert(
            "line_items".into(),
            json!([
                { "product": "p-1", "name": "Widget", "quantity": 1, "unit_price": "10.00" }
            ]),
        );
        params.insert("items_total".into(), json!("10.00"));
        params.insert("tax_total".into(), json!("1.00"));
        params.insert("grand_total".into(), json!("11.00"));
        params.insert("is_paid".into(), json!(false));
        params.insert("is_delivered".into(), json!(false));
        params.insert("created_at".into(), json!("2024-03-05T10:00:00Z"));
        Self { params }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn create(self) -> Value {
        Value::Object(self.params.into_iter().collect())
    }

    /// `count` documents sharing these params, with ids `o-001..` and
    /// `created_at` staggered one minute apart (so `created_at`
    /// descending is the reverse of the id order).
    pub fn create_list(self, count: usize) -> Vec<Value> {
        let base: DateTime<Utc> = "2024-03-01T00:00:00Z".parse().unwrap();
        (0..count)
            .map(|i| {
                let mut params = self.params.clone();
                params.insert("id".into(), json!(format!("o-{:03}", i + 1)));
                params.insert(
                    "created_at".into(),
                    json!(
                        (base + Duration::minutes(i as i64))
                            .to_rfc3339_opts(SecondsFormat::Secs, true)
                    ),
                );
                Value::Object(params.into_iter().collect())
            })
            .collect()
    }
}

use serde_json::json;

use orderlens::engine::model::Money;
use orderlens::engine::store::collections;

use super::support::{order_doc, seeded_reader, widget_item};

#[tokio::test]
async fn revenue_scenario_march_and_april_2024() {
    let (reader, store) = seeded_reader().await;
    store
        .insert_many(
            collections::ORDERS,
            [
                order_doc("o-1", "2024-03-05T10:00:00Z", "100.00", widget_item(1)),
                order_doc("o-2", "2024-03-20T10:00:00Z", "250.50", widget_item(2)),
                order_doc("o-3", "2024-04-02T10:00:00Z", "50.00", widget_item(1)),
            ],
        )
        .await;

    let monthly = reader.monthly_revenue(2024).await.unwrap();
    assert_eq!(monthly.results.len(), 2);
    assert_eq!(monthly.results[0].month, 3);
    assert_eq!(monthly.results[0].total, "350.50".parse::<Money>().unwrap());
    assert_eq!(monthly.results[1].month, 4);
    assert_eq!(monthly.results[1].total, "50.00".parse::<Money>().unwrap());

    let yearly = reader.yearly_revenue(2024).await.unwrap();
    assert_eq!(yearly.results.len(), 1);
    assert_eq!(yearly.results[0].total, "400.50".parse::<Money>().unwrap());

    // envelope shape on the wire
    let wire = serde_json::to_value(&monthly).unwrap();
    assert_eq!(wire["results"][0], json!({ "month": 3, "total": "350.50" }));
}

#[tokio::test]
async fn yearly_revenue_of_an_untouched_year_is_zero() {
    let (reader, _) = seeded_reader().await;
    let yearly = reader.yearly_revenue(2019).await.unwrap();
    assert_eq!(yearly.results.len(), 1);
    assert_eq!(yearly.results[0].total, Money::ZERO);
}

#[tokio::test]
async fn product_counts_follow_catalog_deletions() {
    let (reader, store) = seeded_reader().await;
    store
        .insert(
            collections::PRODUCTS,
            json!({ "id": "p-2", "name": "Gear", "brand": "Bolt", "price": "3.00" }),
        )
        .await;
    store
        .insert_many(
            collections::ORDERS,
            [
                order_doc("o-1", "2024-03-05T10:00:00Z", "20.00", widget_item(2)),
                order_doc(
                    "o-2",
                    "2024-03-10T10:00:00Z",
                    "9.00",
                    json!([{ "product": "p-2", "name": "Gear", "quantity": 3, "unit_price": "3.00" }]),
                ),
            ],
        )
        .await;

    let before = reader.product_purchase_counts(2024, None).await.unwrap();
    assert_eq!(before.results.len(), 2);

    store.remove(collections::PRODUCTS, "p-1").await;
    let after = reader.product_purchase_counts(2024, None).await.unwrap();
    assert_eq!(after.results.len(), 1);
    assert_eq!(after.results[0].product_id, "p-2");
    assert_eq!(after.results[0].quantity, 3);
    // the joined name is the current catalog one
    assert_eq!(after.results[0].name, "Gear");
}

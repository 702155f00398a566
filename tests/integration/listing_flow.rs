use serde_json::json;

use orderlens::engine::query::{ListParams, Scope};
use orderlens::engine::store::collections;

use super::support::{order_doc, seeded_reader, widget_item};

fn params(page: u64, page_size: u64, keyword: Option<&str>) -> ListParams {
    ListParams::new(
        Some(page),
        Some(page_size),
        keyword.map(str::to_string),
        None,
    )
    .unwrap()
}

#[tokio::test]
async fn client_scoped_keyword_listing_pages_correctly() {
    let (reader, store) = seeded_reader().await;

    // 25 matching orders, newest last by id
    for i in 1..=25 {
        store
            .insert(
                collections::ORDERS,
                order_doc(
                    &format!("o-{i:03}"),
                    &format!("2024-03-01T00:{:02}:00Z", i - 1),
                    "11.00",
                    widget_item(1),
                ),
            )
            .await;
    }
    // non-matching: different client
    let mut foreign = order_doc("o-other", "2024-03-02T00:00:00Z", "11.00", widget_item(1));
    foreign["client"] = json!("c-2");
    store.insert(collections::ORDERS, foreign).await;
    // non-matching: no widget in the line items
    store
        .insert(
            collections::ORDERS,
            order_doc(
                "o-gears",
                "2024-03-03T00:00:00Z",
                "6.00",
                json!([{ "product": "p-2", "name": "Gear", "quantity": 2, "unit_price": "3.00" }]),
            ),
        )
        .await;

    let page = reader
        .list_orders(&Scope::Client("c-1".into()), &params(2, 10, Some("widget")))
        .await
        .unwrap();

    assert_eq!(page.total_count, 25);
    assert_eq!(page.page_count, 3);
    assert_eq!(page.items.len(), 10);
    // created_at descending: page 2 holds records 11-20, i.e. o-015..o-006
    assert_eq!(page.items[0].id, "o-015");
    assert_eq!(page.items[9].id, "o-006");
}

#[tokio::test]
async fn first_page_never_skips_the_newest_record() {
    let (reader, store) = seeded_reader().await;
    for i in 1..=3 {
        store
            .insert(
                collections::ORDERS,
                order_doc(
                    &format!("o-{i}"),
                    &format!("2024-06-0{i}T00:00:00Z"),
                    "11.00",
                    widget_item(1),
                ),
            )
            .await;
    }

    let page = reader
        .list_orders(&Scope::All, &params(1, 2, None))
        .await
        .unwrap();
    assert_eq!(page.items[0].id, "o-3");
    assert_eq!(page.total_count, 3);
    assert_eq!(page.page_count, 2);
}

#[tokio::test]
async fn listing_resolves_references_on_every_item() {
    let (reader, store) = seeded_reader().await;
    store
        .insert(
            collections::ORDERS,
            order_doc("o-1", "2024-06-01T00:00:00Z", "11.00", widget_item(1)),
        )
        .await;

    let page = reader
        .list_orders(&Scope::All, &ListParams::defaults())
        .await
        .unwrap();
    let item = &page.items[0];
    assert_eq!(item.purchaser.as_ref().unwrap().name, "Ada Lovelace");
    assert_eq!(item.client.as_ref().unwrap().name, "Initech");
}

#[tokio::test]
async fn empty_ledger_lists_cleanly() {
    let (reader, _) = seeded_reader().await;
    let page = reader
        .list_orders(&Scope::All, &ListParams::defaults())
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 0);
    assert_eq!(page.page_count, 0);
}

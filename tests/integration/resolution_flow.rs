use orderlens::engine::errors::LedgerError;
use orderlens::engine::store::collections;

use super::support::{order_doc, seeded_reader, widget_item};

#[tokio::test]
async fn deleted_client_does_not_break_order_lookup() {
    let (reader, store) = seeded_reader().await;
    store
        .insert(
            collections::ORDERS,
            order_doc("o-1", "2024-03-05T10:00:00Z", "11.00", widget_item(1)),
        )
        .await;
    store.remove(collections::CLIENTS, "c-1").await;

    let view = reader.get_order("o-1", false).await.unwrap();
    assert!(view.client.is_none());
    assert_eq!(view.purchaser.unwrap().name, "Ada Lovelace");
    assert_eq!(view.line_items[0].item.name, "Widget");
}

#[tokio::test]
async fn missing_order_is_not_found() {
    let (reader, _) = seeded_reader().await;
    match reader.get_order("o-404", false).await.unwrap_err() {
        LedgerError::NotFound { id } => assert_eq!(id, "o-404"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn product_expansion_is_opt_in_and_snapshot_preserving() {
    let (reader, store) = seeded_reader().await;
    store
        .insert(
            collections::ORDERS,
            order_doc("o-1", "2024-03-05T10:00:00Z", "11.00", widget_item(1)),
        )
        .await;

    let plain = reader.get_order("o-1", false).await.unwrap();
    assert!(plain.line_items[0].detail.is_none());

    let expanded = reader.get_order("o-1", true).await.unwrap();
    let detail = expanded.line_items[0].detail.as_ref().unwrap();
    // catalog has the renamed product; the snapshot keeps the old name
    assert_eq!(detail.name, "Widget Mk2");
    assert_eq!(expanded.line_items[0].item.name, "Widget");
}

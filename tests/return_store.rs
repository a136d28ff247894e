use returns_gateway::repo::memory::MemoryReturnStore;
use returns_gateway::repo::{ReturnRecord, ReturnStore};
use uuid::Uuid;

fn record_for(user_id: &str, order_id: &str) -> ReturnRecord {
    let value = serde_json::json!({
        "user_id": user_id,
        "order_id": order_id,
        "product_name": "Noise Cancelling Headphones",
        "return_reason": "defective",
    });
    match value {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn save_then_get_returns_every_field_plus_timestamp() {
    let store = MemoryReturnStore::new();

    let id = store.save_return(record_for("user-1", "ord-1")).await.unwrap();
    let stored = store.get_return(id).await.unwrap().expect("record should exist");

    assert_eq!(stored["user_id"], "user-1");
    assert_eq!(stored["order_id"], "ord-1");
    assert_eq!(stored["product_name"], "Noise Cancelling Headphones");
    assert_eq!(stored["return_reason"], "defective");
    assert!(stored["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn get_return_for_unknown_id_is_none() {
    let store = MemoryReturnStore::new();

    assert!(store.get_return(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn history_for_unknown_user_is_empty_not_an_error() {
    let store = MemoryReturnStore::new();

    let history = store.get_user_history("nobody").await.unwrap();

    assert_eq!(history.user_id, "nobody");
    assert!(history.returns.is_empty());
}

#[tokio::test]
async fn history_filters_by_user() {
    let store = MemoryReturnStore::new();
    store.save_return(record_for("user-1", "ord-1")).await.unwrap();
    store.save_return(record_for("user-2", "ord-2")).await.unwrap();
    store.save_return(record_for("user-1", "ord-3")).await.unwrap();

    let history = store.get_user_history("user-1").await.unwrap();

    assert_eq!(history.returns.len(), 2);
    for entry in &history.returns {
        assert_eq!(entry["user_id"], "user-1");
    }
}

#[tokio::test]
async fn update_merges_fields_and_keeps_the_rest() {
    let store = MemoryReturnStore::new();
    let id = store.save_return(record_for("user-1", "ord-1")).await.unwrap();

    let fields = match serde_json::json!({"status": "refunded", "refund_amount": 129.0}) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };
    let updated = store.update_return_status(id, fields).await.unwrap();
    assert!(updated);

    let stored = store.get_return(id).await.unwrap().unwrap();
    assert_eq!(stored["status"], "refunded");
    assert_eq!(stored["refund_amount"], 129.0);
    assert_eq!(stored["order_id"], "ord-1");
}

#[tokio::test]
async fn update_for_unknown_id_reports_not_found() {
    let store = MemoryReturnStore::new();

    let fields = match serde_json::json!({"status": "refunded"}) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };
    let updated = store.update_return_status(Uuid::new_v4(), fields).await.unwrap();

    assert!(!updated);
}

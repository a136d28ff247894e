use axum::http::StatusCode;
use chrono::TimeZone;
use returns_gateway::analysis::condition::ConditionAnalysisService;
use returns_gateway::analysis::decision::DecisionService;
use returns_gateway::analysis::fraud::FraudAnalysisService;
use returns_gateway::config::default_policy_rules;
use returns_gateway::domain::return_request::ReturnSubmission;
use returns_gateway::model::mock::MockModel;
use returns_gateway::model::ImageAttachment;
use returns_gateway::repo::memory::MemoryReturnStore;
use returns_gateway::repo::ReturnStore;
use returns_gateway::service::return_service::{ReturnService, UploadedImage};
use std::sync::Arc;

const CATEGORY_REPLY: &str = r#"{"product_category": "Electronics"}"#;
const GRADING_REPLY: &str = r#"Here is my analysis:
{"product_category": "Electronics", "condition_grade": "Like New", "defects": [],
 "confidence_score": 0.93, "condition_details": ["no visible wear"],
 "estimated_value_retention": 88, "recommended_action": "Restock"}"#;
const FRAUD_REPLY: &str = r#"{"risk_category": "High", "risk_score": 82,
 "flags": ["frequent returns"], "fraud_reason": "five returns inside thirty days",
 "previous_returns_count": 5,
 "return_pattern_analysis": {"frequent_returns": true, "expensive_items_only": false,
  "wardrobing_suspected": true, "receipt_fraud_suspected": false,
  "counterfeit_substitution_suspected": false, "reselling_exploits_suspected": false}}"#;
const DECISION_REPLY: &str = r#"{"final_outcome": "Denied",
 "denial_reason": "suspected wardrobing",
 "product_description": "Lightly used smartwatch in working order."}"#;

fn service_with(model: Arc<MockModel>, store: Arc<MemoryReturnStore>) -> ReturnService {
    ReturnService {
        store,
        condition_service: ConditionAnalysisService { model: model.clone() },
        fraud_service: FraudAnalysisService {
            model: model.clone(),
            return_frequency_threshold: 5,
        },
        decision_service: DecisionService {
            model,
            policy_rules: default_policy_rules(),
        },
    }
}

fn submission() -> ReturnSubmission {
    ReturnSubmission {
        order_id: "ord-current".to_string(),
        user_id: "user-42".to_string(),
        product_id: "prod-9".to_string(),
        product_name: "Smartwatch".to_string(),
        product_details: match serde_json::json!({"colour": "black", "price": 249.99}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        },
        customer_name: "Jordan Fisher".to_string(),
        customer_contact: "jordan@example.com".to_string(),
        date_of_purchase: chrono::Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        date_of_return: chrono::Utc.with_ymd_and_hms(2025, 6, 5, 9, 30, 0).unwrap(),
        return_reason: "defective".to_string(),
        photos: vec![],
        user_submitted_notes: Some("stopped charging after two days".to_string()),
    }
}

fn one_image() -> Vec<UploadedImage> {
    vec![UploadedImage {
        file_name: "front.png".to_string(),
        attachment: ImageAttachment {
            mime_type: "image/png".to_string(),
            data: vec![0u8; 16],
        },
    }]
}

async fn seed_history(store: &MemoryReturnStore, user_id: &str, count: usize) {
    for i in 0..count {
        let record = match serde_json::json!({
            "user_id": user_id,
            "order_id": format!("prior-{}", i),
            "product_name": "Electronics",
            "return_reason": "changed mind",
        }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        store.save_return(record).await.unwrap();
    }
}

#[tokio::test]
async fn full_flow_persists_merged_record() {
    let model = Arc::new(MockModel::scripted(&[
        CATEGORY_REPLY,
        GRADING_REPLY,
        FRAUD_REPLY,
        DECISION_REPLY,
    ]));
    let store = Arc::new(MemoryReturnStore::new());
    seed_history(&store, "user-42", 5).await;
    let service = service_with(model.clone(), store.clone());

    let resp = service.process(submission(), one_image()).await.unwrap();

    // Every submitted field survives the merge.
    assert_eq!(resp.record["order_id"], "ord-current");
    assert_eq!(resp.record["user_id"], "user-42");
    assert_eq!(resp.record["product_name"], "Smartwatch");
    assert_eq!(resp.record["return_reason"], "defective");
    assert_eq!(resp.record["user_submitted_notes"], "stopped charging after two days");
    assert_eq!(resp.record["images"][0], "front.png");

    assert_eq!(resp.record["condition_assessment"]["condition_grade"], "Like New");
    assert_eq!(resp.record["condition_assessment"]["product_category"], "Electronics");
    assert_eq!(resp.record["fraud_assessment"]["risk_category"], "High");
    assert_eq!(resp.record["decision"]["final_outcome"], "Denied");
    assert_eq!(resp.record["status"], "denied");

    let stored = store.get_return(resp.return_id).await.unwrap().expect("persisted record");
    assert_eq!(stored["order_id"], "ord-current");
    assert!(stored["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn fraud_instruction_carries_all_prior_returns() {
    let model = Arc::new(MockModel::scripted(&[
        CATEGORY_REPLY,
        GRADING_REPLY,
        FRAUD_REPLY,
        DECISION_REPLY,
    ]));
    let store = Arc::new(MemoryReturnStore::new());
    seed_history(&store, "user-42", 5).await;
    let service = service_with(model.clone(), store.clone());

    service.process(submission(), one_image()).await.unwrap();

    let calls = model.seen();
    assert_eq!(calls.len(), 4);
    assert!(calls[0].had_image, "category call should carry the image");
    assert!(calls[1].had_image, "grading call should carry the image");
    assert!(!calls[2].had_image, "fraud call is text only");

    let fraud_instruction = &calls[2].instruction;
    for i in 0..5 {
        let marker = format!("prior-{}", i);
        assert!(
            fraud_instruction.contains(&marker),
            "fraud instruction missing history entry {}",
            marker
        );
    }
    assert!(fraud_instruction.contains("more than 5 returns per month"));
}

#[tokio::test]
async fn grading_instruction_reuses_detected_category() {
    let model = Arc::new(MockModel::scripted(&[
        CATEGORY_REPLY,
        GRADING_REPLY,
        FRAUD_REPLY,
        DECISION_REPLY,
    ]));
    let store = Arc::new(MemoryReturnStore::new());
    let service = service_with(model.clone(), store.clone());

    service.process(submission(), one_image()).await.unwrap();

    let calls = model.seen();
    assert!(calls[1].instruction.contains("image of a Electronics product"));
}

#[tokio::test]
async fn schema_garbage_fails_request_and_persists_nothing() {
    let model = Arc::new(MockModel::scripted(&[
        CATEGORY_REPLY,
        GRADING_REPLY,
        r#"{"totally": "unrelated"}"#,
    ]));
    let store = Arc::new(MemoryReturnStore::new());
    let service = service_with(model, store.clone());

    let (status, envelope) = service.process(submission(), one_image()).await.unwrap_err();

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(envelope.error.code, "INVALID_MODEL_RESPONSE");
    assert!(store.is_empty(), "nothing may be persisted on failure");
}

#[tokio::test]
async fn missing_image_is_rejected_before_any_model_call() {
    let model = Arc::new(MockModel::scripted(&[]));
    let store = Arc::new(MemoryReturnStore::new());
    let service = service_with(model.clone(), store);

    let (status, envelope) = service.process(submission(), vec![]).await.unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(envelope.error.code, "MISSING_IMAGE");
    assert!(model.seen().is_empty());
}

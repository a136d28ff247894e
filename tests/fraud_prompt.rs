use returns_gateway::analysis::prompts;
use returns_gateway::repo::UserHistory;

#[test]
fn fraud_instruction_embeds_full_history_verbatim() {
    let returns: Vec<serde_json::Value> = (0..5)
        .map(|i| {
            serde_json::json!({
                "order_id": format!("ord-{}", i),
                "product": "Electronics",
                "price": 499.99,
                "condition": "Like New",
                "days_until_return": 3 + i,
            })
        })
        .collect();
    let history = UserHistory {
        user_id: "user-42".to_string(),
        returns: returns.clone(),
    };
    let return_data = serde_json::json!({
        "user_id": "user-42",
        "order_id": "ord-current",
        "return_reason": "defective",
    });

    let instruction = prompts::fraud_pattern_instruction(&return_data, &history, 5);

    for entry in &returns {
        let serialized = serde_json::to_string(entry).unwrap();
        assert!(
            instruction.contains(&serialized),
            "history entry missing from instruction: {}",
            serialized
        );
    }
    assert!(instruction.contains(&serde_json::to_string(&return_data).unwrap()));
    assert!(instruction.contains("more than 5 returns per month"));
}

#[test]
fn fraud_instruction_reflects_configured_threshold() {
    let history = UserHistory {
        user_id: "user-1".to_string(),
        returns: vec![],
    };
    let return_data = serde_json::json!({"user_id": "user-1"});

    let instruction = prompts::fraud_pattern_instruction(&return_data, &history, 12);

    assert!(instruction.contains("more than 12 returns per month"));
}

#[test]
fn grading_instruction_embeds_detected_category() {
    let instruction = prompts::condition_grading_instruction("Home Appliances");

    assert!(instruction.contains("image of a Home Appliances product"));
    assert!(instruction.contains(r#""product_category": "Home Appliances""#));
    assert!(instruction.contains("Restock|Repair|Liquidate|Recycle"));
}

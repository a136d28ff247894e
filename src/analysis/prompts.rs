use crate::domain::assessment::{ConditionAssessment, FraudAssessment};
use crate::repo::UserHistory;
use serde_json::Value;

pub fn product_category_instruction() -> String {
    r#"Identify the product category from this image. Examples include:
- Electronics (Laptop, Smartphone, Headphones)
- Apparel (Shirt, Shoes, Jacket)
- Furniture (Chair, Table, Sofa)
- Accessories (Watch, Bag, Sunglasses)
- Home Appliances (Microwave, Blender, Vacuum)

Return the result in JSON format:
{
    "product_category": "identified_category"
}"#
    .to_string()
}

pub fn condition_grading_instruction(product_category: &str) -> String {
    format!(
        r#"Analyze this image of a {product_category} product and:
1. Identify any visible defects (scratches, tears, missing parts).
2. Assess its overall condition, considering:
    - Wear and tear
    - Functionality
    - Cosmetic condition
    - Market value impact
3. Grade the condition as one of the following: Like New, Used - Good, Salvage.
4. Provide a confidence score for the condition grade.
5. Estimate the percentage of value retention (0-100).
6. Recommend a course of action: Restock, Repair, Liquidate, Recycle.

Return the results in JSON format:
{{
    "product_category": "{product_category}",
    "defects": ["list of defects found"],
    "condition_grade": "Like New|Used - Good|Salvage",
    "confidence_score": 0.0,
    "condition_details": ["list of condition observations"],
    "estimated_value_retention": 0,
    "recommended_action": "Restock|Repair|Liquidate|Recycle"
}}"#
    )
}

pub fn fraud_pattern_instruction(
    return_data: &Value,
    user_history: &UserHistory,
    return_frequency_threshold: u32,
) -> String {
    let history_json = serde_json::to_string(user_history).unwrap_or_default();
    let return_json = serde_json::to_string(return_data).unwrap_or_default();

    format!(
        r#"Analyze the return request for potential fraudulent patterns by assessing the following key factors:

Fraud Detection Criteria:
1. Fraud Score (0-100): Evaluate the likelihood of fraud based on historical return data, behavioral patterns, and anomaly detection.
2. Customer Return History: Identify excessive returns (more than {return_frequency_threshold} returns per month).
3. Return Timing & Usage Pattern:
    - Compare time between purchase and return (flag short usage periods indicating potential wardrobing).
    - Detect patterns of purchasing, using, and returning items.
4. High-Value Item Flag:
    - Identify returns involving items priced at $100, $200, $500+, where fraud attempts are more common.
5. Condition & Discrepancies:
    - Compare the returned item's condition to original listing photos, descriptions, and user-submitted return notes.
    - Detect mismatches (e.g., counterfeit swap, missing parts, different serial numbers).
6. Common Fraud Types:
    - Wardrobing (Temporary use and return)
    - Counterfeit Swap (Replacing a genuine item with a fake)
    - Fake Receipt (Fraudulent return with an altered or fake receipt)
    - Other Suspicious Behaviors (User-defined anomaly patterns)
7. Previous Fraudulent Behavior:
    - Check for any historical fraud flags in past transactions.
    - Identify reselling exploits (e.g., buying discounted items and returning duplicates).

User & Return Data for Evaluation
User History: {history_json}
Current Return Data: {return_json}

Expected JSON Response Format:
{{
    "risk_category": "Low|Medium|High",
    "risk_score": 0,
    "flags": ["list of detected fraud patterns"],
    "fraud_reason": "explanation of why the return is flagged",
    "previous_returns_count": 0,
    "return_pattern_analysis": {{
        "frequent_returns": false,
        "expensive_items_only": false,
        "wardrobing_suspected": false,
        "receipt_fraud_suspected": false,
        "counterfeit_substitution_suspected": false,
        "reselling_exploits_suspected": false
    }}
}}"#
    )
}

pub fn final_outcome_instruction(
    policy_rules: &Value,
    condition: &ConditionAssessment,
    fraud: &FraudAssessment,
) -> String {
    let rules_json = serde_json::to_string(policy_rules).unwrap_or_default();
    let condition_json = serde_json::to_string(condition).unwrap_or_default();
    let fraud_json = serde_json::to_string(fraud).unwrap_or_default();

    format!(
        r#"Based on the condition analysis, fraud analysis, and return policy rules, determine the final outcome of the return request.

1. If the item is in 'Like New' condition with no fraud detected, approve for Resale.
2. If minor defects are present but repairable, approve for Refurbishment and estimate refurb cost.
3. If the item is severely damaged or not resale-worthy, consider Recycling/Donation.
4. If fraud is suspected, deny the return with a reason.
5. If the analyses are inconclusive or contradictory, mark the return Pending with a pending reason.
6. Apply the return policy rules to refine the decision.
7. Generate a product description based on its current condition and any defects.

Return Policy Rules: {rules_json}
Condition Analysis: {condition_json}
Fraud Analysis: {fraud_json}

Provide a JSON response in the following format:
{{
    "final_outcome": "Resold|Refurbished|Recycled/Donated|Denied|Pending",
    "resale_details": {{"platform": "platform_name", "price": 0.0}},
    "refurbish_details": {{"condition": "condition_description", "cost": 0.0}},
    "recycle_donation_details": {{"destination": "charity or recycling facility"}},
    "denial_reason": "reason for denial if applicable",
    "pending_reason": "reason the decision is deferred if applicable",
    "product_description": "detailed description of the product based on its condition and any defects"
}}
Include at most one of resale_details, refurbish_details and recycle_donation_details; omit the others."#
    )
}

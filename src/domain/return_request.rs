use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnSubmission {
    pub order_id: String,
    pub user_id: String,
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_details: serde_json::Map<String, Value>,
    pub customer_name: String,
    pub customer_contact: String,
    pub date_of_purchase: DateTime<Utc>,
    pub date_of_return: DateTime<Utc>,
    pub return_reason: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub user_submitted_notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeReturnResponse {
    pub return_id: Uuid,
    #[serde(flatten)]
    pub record: serde_json::Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

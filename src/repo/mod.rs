use anyhow::Result;
use uuid::Uuid;

pub mod memory;
pub mod pg;

pub type ReturnRecord = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, serde::Serialize)]
pub struct UserHistory {
    pub user_id: String,
    pub returns: Vec<serde_json::Value>,
}

#[async_trait::async_trait]
pub trait ReturnStore: Send + Sync {
    async fn save_return(&self, record: ReturnRecord) -> Result<Uuid>;

    async fn get_return(&self, return_id: Uuid) -> Result<Option<ReturnRecord>>;

    async fn get_user_history(&self, user_id: &str) -> Result<UserHistory>;

    async fn update_return_status(&self, return_id: Uuid, fields: ReturnRecord) -> Result<bool>;
}

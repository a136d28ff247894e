use crate::repo::{ReturnRecord, ReturnStore, UserHistory};
use anyhow::Result;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct PgReturnStore {
    pub pool: PgPool,
}

#[async_trait::async_trait]
impl ReturnStore for PgReturnStore {
    async fn save_return(&self, mut record: ReturnRecord) -> Result<Uuid> {
        let return_id = Uuid::new_v4();
        let now = chrono::Utc::now();
        record.insert(
            "timestamp".to_string(),
            serde_json::Value::String(now.to_rfc3339()),
        );

        let user_id = record
            .get("user_id")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        sqlx::query(
            "INSERT INTO returns (return_id, user_id, record, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(return_id)
        .bind(user_id)
        .bind(serde_json::Value::Object(record))
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(return_id)
    }

    async fn get_return(&self, return_id: Uuid) -> Result<Option<ReturnRecord>> {
        let row = sqlx::query("SELECT record FROM returns WHERE return_id = $1")
            .bind(return_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.and_then(|r| match r.get::<serde_json::Value, _>("record") {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        }))
    }

    async fn get_user_history(&self, user_id: &str) -> Result<UserHistory> {
        let rows = sqlx::query("SELECT record FROM returns WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(UserHistory {
            user_id: user_id.to_string(),
            returns: rows
                .into_iter()
                .map(|r| r.get::<serde_json::Value, _>("record"))
                .collect(),
        })
    }

    async fn update_return_status(&self, return_id: Uuid, fields: ReturnRecord) -> Result<bool> {
        let res = sqlx::query("UPDATE returns SET record = record || $2 WHERE return_id = $1")
            .bind(return_id)
            .bind(serde_json::Value::Object(fields))
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected() > 0)
    }
}

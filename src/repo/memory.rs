use crate::repo::{ReturnRecord, ReturnStore, UserHistory};
use anyhow::Result;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryReturnStore {
    records: Mutex<Vec<(Uuid, ReturnRecord)>>,
}

impl MemoryReturnStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl ReturnStore for MemoryReturnStore {
    async fn save_return(&self, mut record: ReturnRecord) -> Result<Uuid> {
        let return_id = Uuid::new_v4();
        record.insert(
            "timestamp".to_string(),
            serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
        );
        self.records.lock().unwrap().push((return_id, record));
        Ok(return_id)
    }

    async fn get_return(&self, return_id: Uuid) -> Result<Option<ReturnRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| *id == return_id)
            .map(|(_, record)| record.clone()))
    }

    async fn get_user_history(&self, user_id: &str) -> Result<UserHistory> {
        let returns = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, record)| record.get("user_id").and_then(|v| v.as_str()) == Some(user_id))
            .map(|(_, record)| serde_json::Value::Object(record.clone()))
            .collect();

        Ok(UserHistory {
            user_id: user_id.to_string(),
            returns,
        })
    }

    async fn update_return_status(&self, return_id: Uuid, fields: ReturnRecord) -> Result<bool> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|(id, _)| *id == return_id) {
            Some((_, record)) => {
                for (key, value) in fields {
                    record.insert(key, value);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

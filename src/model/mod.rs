use serde_json::{Map, Value};

pub mod extract;
pub mod gemini;
pub mod mock;

pub type JsonMap = Map<String, Value>;

#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub mime_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("model returned HTTP {status}: {detail}")]
    Http { status: u16, detail: String },
    #[error("model response did not match the {entity} schema: {reason}")]
    InvalidResponse { entity: &'static str, reason: String },
}

#[async_trait::async_trait]
pub trait GenerativeModel: Send + Sync {
    fn name(&self) -> &'static str;

    async fn analyze(
        &self,
        instruction: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<JsonMap, ModelError>;
}

pub fn parse_response<T: serde::de::DeserializeOwned>(
    entity: &'static str,
    reply: JsonMap,
) -> Result<T, ModelError> {
    serde_json::from_value(Value::Object(reply)).map_err(|e| ModelError::InvalidResponse {
        entity,
        reason: e.to_string(),
    })
}

use crate::model::extract::extract_json;
use crate::model::{GenerativeModel, ImageAttachment, JsonMap, ModelError};
use base64::Engine;
use serde_json::json;

pub struct GeminiModel {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub client: reqwest::Client,
}

#[async_trait::async_trait]
impl GenerativeModel for GeminiModel {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn analyze(
        &self,
        instruction: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<JsonMap, ModelError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);

        let mut parts = vec![json!({ "text": instruction })];
        if let Some(img) = image {
            parts.push(json!({
                "inline_data": {
                    "mime_type": img.mime_type,
                    "data": base64::engine::general_purpose::STANDARD.encode(&img.data),
                }
            }));
        }
        let body = json!({
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "temperature": self.temperature,
                "topP": self.top_p,
                "topK": self.top_k,
                "maxOutputTokens": self.max_output_tokens,
            }
        });

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let detail: String = resp.text().await.unwrap_or_default().chars().take(200).collect();
            return Err(ModelError::Http { status, detail });
        }

        let reply: serde_json::Value = resp.json().await?;
        let text = reply_text(&reply);
        if text.is_empty() {
            tracing::warn!("model returned no text parts");
            return Ok(JsonMap::new());
        }

        Ok(extract_json(&text))
    }
}

fn reply_text(reply: &serde_json::Value) -> String {
    let mut out = String::new();
    if let Some(parts) = reply
        .pointer("/candidates/0/content/parts")
        .and_then(|p| p.as_array())
    {
        for part in parts {
            if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                out.push_str(text);
            }
        }
    }
    out
}

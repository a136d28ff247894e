use crate::model::extract::extract_json;
use crate::model::{GenerativeModel, ImageAttachment, JsonMap, ModelError};
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct SeenCall {
    pub instruction: String,
    pub had_image: bool,
}

#[derive(Default)]
pub struct MockModel {
    pub replies: Mutex<VecDeque<String>>,
    pub calls: Mutex<Vec<SeenCall>>,
}

impl MockModel {
    pub fn scripted(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<SeenCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl GenerativeModel for MockModel {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn analyze(
        &self,
        instruction: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<JsonMap, ModelError> {
        self.calls.lock().unwrap().push(SeenCall {
            instruction: instruction.to_string(),
            had_image: image.is_some(),
        });

        match self.replies.lock().unwrap().pop_front() {
            Some(raw) => Ok(extract_json(&raw)),
            None => Ok(JsonMap::new()),
        }
    }
}

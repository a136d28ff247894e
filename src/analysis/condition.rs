use crate::analysis::prompts;
use crate::domain::assessment::ConditionAssessment;
use crate::model::{parse_response, GenerativeModel, ImageAttachment, ModelError};
use std::sync::Arc;

#[derive(Clone)]
pub struct ConditionAnalysisService {
    pub model: Arc<dyn GenerativeModel>,
}

impl ConditionAnalysisService {
    pub async fn identify_product_category(
        &self,
        image: &ImageAttachment,
    ) -> Result<String, ModelError> {
        let reply = self
            .model
            .analyze(&prompts::product_category_instruction(), Some(image))
            .await?;

        Ok(reply
            .get("product_category")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown")
            .to_string())
    }

    pub async fn analyze_product_image(
        &self,
        image: &ImageAttachment,
    ) -> Result<ConditionAssessment, ModelError> {
        let category = self.identify_product_category(image).await?;

        let reply = self
            .model
            .analyze(&prompts::condition_grading_instruction(&category), Some(image))
            .await?;

        let assessment: ConditionAssessment = parse_response("condition assessment", reply)?;
        assessment
            .check_ranges()
            .map_err(|reason| ModelError::InvalidResponse {
                entity: "condition assessment",
                reason,
            })?;

        Ok(assessment)
    }
}

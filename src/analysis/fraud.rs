use crate::analysis::prompts;
use crate::domain::assessment::FraudAssessment;
use crate::model::{parse_response, GenerativeModel, ModelError};
use crate::repo::UserHistory;
use std::sync::Arc;

#[derive(Clone)]
pub struct FraudAnalysisService {
    pub model: Arc<dyn GenerativeModel>,
    pub return_frequency_threshold: u32,
}

impl FraudAnalysisService {
    pub async fn analyze_return_pattern(
        &self,
        return_data: &serde_json::Value,
        user_history: &UserHistory,
    ) -> Result<FraudAssessment, ModelError> {
        let instruction = prompts::fraud_pattern_instruction(
            return_data,
            user_history,
            self.return_frequency_threshold,
        );

        let reply = self.model.analyze(&instruction, None).await?;

        let assessment: FraudAssessment = parse_response("fraud assessment", reply)?;
        assessment
            .check_ranges()
            .map_err(|reason| ModelError::InvalidResponse {
                entity: "fraud assessment",
                reason,
            })?;

        Ok(assessment)
    }
}

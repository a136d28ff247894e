use crate::analysis::prompts;
use crate::domain::assessment::{ConditionAssessment, FraudAssessment, ReturnDecision};
use crate::model::{parse_response, GenerativeModel, ModelError};
use std::sync::Arc;

#[derive(Clone)]
pub struct DecisionService {
    pub model: Arc<dyn GenerativeModel>,
    pub policy_rules: serde_json::Value,
}

impl DecisionService {
    pub async fn determine_final_outcome(
        &self,
        condition: &ConditionAssessment,
        fraud: &FraudAssessment,
    ) -> Result<ReturnDecision, ModelError> {
        let instruction =
            prompts::final_outcome_instruction(&self.policy_rules, condition, fraud);

        let reply = self.model.analyze(&instruction, None).await?;

        parse_response("return decision", reply)
    }
}

use crate::analysis::condition::ConditionAnalysisService;
use crate::analysis::decision::DecisionService;
use crate::analysis::fraud::FraudAnalysisService;
use crate::domain::assessment::{ConditionAssessment, FraudAssessment, ReturnDecision, ReturnOutcome};
use crate::domain::return_request::{AnalyzeReturnResponse, ErrorEnvelope, ErrorPayload, ReturnSubmission};
use crate::model::{ImageAttachment, ModelError};
use crate::repo::{ReturnRecord, ReturnStore};
use axum::http::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReturnService {
    pub store: Arc<dyn ReturnStore>,
    pub condition_service: ConditionAnalysisService,
    pub fraud_service: FraudAnalysisService,
    pub decision_service: DecisionService,
}

pub struct UploadedImage {
    pub file_name: String,
    pub attachment: ImageAttachment,
}

impl ReturnService {
    pub async fn process(
        &self,
        submission: ReturnSubmission,
        images: Vec<UploadedImage>,
    ) -> Result<AnalyzeReturnResponse, (StatusCode, ErrorEnvelope)> {
        validate_submission(&submission, &images)?;

        // Only the first image is analyzed; the rest are stored by reference.
        let first_image = &images[0].attachment;
        let condition = self
            .condition_service
            .analyze_product_image(first_image)
            .await
            .map_err(model_failure)?;

        let history = self
            .store
            .get_user_history(&submission.user_id)
            .await
            .map_err(internal)?;

        let return_data = serde_json::to_value(&submission).map_err(|e| internal(e.into()))?;
        let fraud = self
            .fraud_service
            .analyze_return_pattern(&return_data, &history)
            .await
            .map_err(model_failure)?;

        let decision = self
            .decision_service
            .determine_final_outcome(&condition, &fraud)
            .await
            .map_err(model_failure)?;

        let record =
            merge_record(&submission, &images, &condition, &fraud, &decision).map_err(internal)?;
        let return_id = self
            .store
            .save_return(record.clone())
            .await
            .map_err(internal)?;

        Ok(AnalyzeReturnResponse { return_id, record })
    }
}

fn merge_record(
    submission: &ReturnSubmission,
    images: &[UploadedImage],
    condition: &ConditionAssessment,
    fraud: &FraudAssessment,
    decision: &ReturnDecision,
) -> anyhow::Result<ReturnRecord> {
    let mut record = match serde_json::to_value(submission)? {
        serde_json::Value::Object(map) => map,
        _ => anyhow::bail!("return submission did not serialize to an object"),
    };

    let image_names: Vec<String> = images.iter().map(|i| i.file_name.clone()).collect();
    record.insert("images".to_string(), serde_json::to_value(image_names)?);
    record.insert("condition_assessment".to_string(), serde_json::to_value(condition)?);
    record.insert("fraud_assessment".to_string(), serde_json::to_value(fraud)?);
    record.insert("decision".to_string(), serde_json::to_value(decision)?);
    record.insert(
        "status".to_string(),
        serde_json::Value::String(initial_status(&decision.final_outcome).to_string()),
    );

    Ok(record)
}

pub fn initial_status(outcome: &ReturnOutcome) -> &'static str {
    match outcome {
        ReturnOutcome::Denied => "denied",
        ReturnOutcome::Pending => "pending_review",
        _ => "approved",
    }
}

fn validate_submission(
    submission: &ReturnSubmission,
    images: &[UploadedImage],
) -> Result<(), (StatusCode, ErrorEnvelope)> {
    if submission.user_id.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            err("MISSING_USER_ID", "user_id must not be empty"),
        ));
    }
    if images.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            err("MISSING_IMAGE", "at least one product image is required"),
        ));
    }
    Ok(())
}

fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}

fn internal(e: anyhow::Error) -> (StatusCode, ErrorEnvelope) {
    (StatusCode::INTERNAL_SERVER_ERROR, err("INTERNAL_ERROR", &e.to_string()))
}

fn model_failure(e: ModelError) -> (StatusCode, ErrorEnvelope) {
    match e {
        ModelError::InvalidResponse { .. } => (
            StatusCode::BAD_GATEWAY,
            err("INVALID_MODEL_RESPONSE", &e.to_string()),
        ),
        _ => (
            StatusCode::BAD_GATEWAY,
            err("MODEL_REQUEST_FAILED", &e.to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_outcome() {
        assert_eq!(initial_status(&ReturnOutcome::Denied), "denied");
        assert_eq!(initial_status(&ReturnOutcome::Pending), "pending_review");
        assert_eq!(initial_status(&ReturnOutcome::Resold), "approved");
        assert_eq!(initial_status(&ReturnOutcome::RecycledDonated), "approved");
    }
}

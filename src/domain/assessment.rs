use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConditionGrade {
    #[serde(rename = "Like New")]
    LikeNew,
    #[serde(rename = "Used - Good")]
    UsedGood,
    Salvage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecommendedAction {
    Restock,
    Repair,
    Liquidate,
    Recycle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionAssessment {
    pub product_category: String,
    pub condition_grade: ConditionGrade,
    #[serde(default)]
    pub defects: Vec<String>,
    pub confidence_score: f64,
    #[serde(default)]
    pub condition_details: Vec<String>,
    pub estimated_value_retention: f64,
    pub recommended_action: RecommendedAction,
}

impl ConditionAssessment {
    pub fn check_ranges(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.confidence_score) {
            return Err(format!("confidence_score {} outside [0,1]", self.confidence_score));
        }
        if !(0.0..=100.0).contains(&self.estimated_value_retention) {
            return Err(format!(
                "estimated_value_retention {} outside [0,100]",
                self.estimated_value_retention
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReturnPatternFlags {
    #[serde(default)]
    pub frequent_returns: bool,
    #[serde(default)]
    pub expensive_items_only: bool,
    #[serde(default)]
    pub wardrobing_suspected: bool,
    #[serde(default)]
    pub receipt_fraud_suspected: bool,
    #[serde(default)]
    pub counterfeit_substitution_suspected: bool,
    #[serde(default)]
    pub reselling_exploits_suspected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudAssessment {
    pub risk_category: RiskCategory,
    pub risk_score: f64,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub fraud_reason: Option<String>,
    #[serde(default)]
    pub previous_returns_count: i64,
    #[serde(default)]
    pub return_pattern_analysis: ReturnPatternFlags,
}

impl FraudAssessment {
    pub fn check_ranges(&self) -> Result<(), String> {
        if !(0.0..=100.0).contains(&self.risk_score) {
            return Err(format!("risk_score {} outside [0,100]", self.risk_score));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReturnOutcome {
    Resold,
    Refurbished,
    #[serde(rename = "Recycled/Donated")]
    RecycledDonated,
    Denied,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResaleDetails {
    pub platform: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefurbishDetails {
    pub condition: String,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecycleDonationDetails {
    pub destination: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnDecision {
    pub final_outcome: ReturnOutcome,
    #[serde(default)]
    pub resale_details: Option<ResaleDetails>,
    #[serde(default)]
    pub refurbish_details: Option<RefurbishDetails>,
    #[serde(default)]
    pub recycle_donation_details: Option<RecycleDonationDetails>,
    #[serde(default)]
    pub denial_reason: Option<String>,
    #[serde(default)]
    pub pending_reason: Option<String>,
    pub product_description: String,
}

//! Content risk assessment types — one dimension per compliance axis, plus
//! an overall grade and improvement suggestions.

use serde::{Deserialize, Serialize};

/// Risk grade for one dimension or for the content overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "低")]
    Low,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "高")]
    High,
}

impl RiskLevel {
    /// 低=0, 中=1, 高=2 — the frontend's risk score is derived from this.
    pub fn rank(self) -> u32 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
        }
    }

    /// Maps a parsed label to a level; anything unrecognized reads as 低.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "高" => RiskLevel::High,
            "中" => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

/// One assessed compliance axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskDimension {
    pub level: RiskLevel,
    pub reason: String,
}

impl Default for RiskDimension {
    fn default() -> Self {
        RiskDimension {
            level: RiskLevel::Low,
            reason: String::new(),
        }
    }
}

/// Full risk verdict for a piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub political_sensitivity: RiskDimension,
    pub legal_compliance: RiskDimension,
    pub ethical_concerns: RiskDimension,
    pub overall_risk: RiskLevel,
    pub suggestions: Vec<String>,
}

impl Default for RiskAssessment {
    fn default() -> Self {
        RiskAssessment {
            political_sensitivity: RiskDimension::default(),
            legal_compliance: RiskDimension::default(),
            ethical_concerns: RiskDimension::default(),
            overall_risk: RiskLevel::Low,
            suggestions: Vec::new(),
        }
    }
}

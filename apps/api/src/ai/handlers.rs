//! Axum route handlers for the AI endpoints: content generation,
//! brand-creator matching, risk checking, and gateway status.
//!
//! Validation lives here, before any model call — an empty topic or an
//! unidentifiable brand is a precondition error, distinct from model
//! failures downstream.

use axum::extract::State;
use axum::Json;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ai::{generator, matching};
use crate::catalog;
use crate::errors::AppError;
use crate::models::content::{ContentRequest, GeneratedContent};
use crate::models::matching::{
    merge_overrides, BrandOverrides, BrandProfile, MatchResult,
};
use crate::models::risk::RiskLevel;
use crate::models::ApiResponse;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct EstimatedPerformance {
    pub predicted_views: u64,
    pub predicted_engagement: f64,
}

#[derive(Debug, Serialize)]
pub struct ContentData {
    #[serde(flatten)]
    pub content: GeneratedContent,
    pub platform: String,
    pub estimated_performance: EstimatedPerformance,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub brand_id: Option<u32>,
    pub brand_requirements: Option<BrandOverrides>,
    pub platform: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchData {
    pub brand: BrandProfile,
    pub matched_creators: Vec<MatchResult>,
    pub total_matches: usize,
}

#[derive(Debug, Deserialize)]
pub struct RiskRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct RiskData {
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AiStatusData {
    pub model_status: String,
    pub api_key_configured: bool,
    pub available_features: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/content/generate
pub async fn handle_generate_content(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> Result<Json<ApiResponse<ContentData>>, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("主题不能为空".to_string()));
    }

    let content =
        generator::generate_content(&state.gateway, &request.topic, &request.content_type).await?;

    let mut rng = rand::thread_rng();
    let estimated_performance = EstimatedPerformance {
        predicted_views: rng.gen_range(10_000..=100_000),
        predicted_engagement: (rng.gen_range(3.0..=12.0_f64) * 100.0).round() / 100.0,
    };

    Ok(Json(ApiResponse::ok(ContentData {
        content,
        platform: request.platform,
        estimated_performance,
    })))
}

/// POST /api/v1/matching/brand-creator
pub async fn handle_match_brand_creators(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<ApiResponse<MatchData>>, AppError> {
    let brand = resolve_brand(&request)?;

    let creators = match request
        .platform
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        Some(platform) => {
            let filtered = catalog::creators_on_platform(platform);
            if filtered.is_empty() {
                return Err(AppError::NotFound(format!(
                    "没有找到在 '{platform}' 平台活跃的创作者。"
                )));
            }
            filtered
        }
        None => catalog::mock_creators(),
    };

    let matched_creators =
        matching::match_brand_to_creators(&state.gateway, &brand, &creators).await;
    let total_matches = matched_creators.len();

    Ok(Json(ApiResponse::ok(MatchData {
        brand,
        matched_creators,
        total_matches,
    })))
}

/// Brand resolution: a full override block (needs at least a name) wins over
/// a catalog lookup by id; an id lookup still applies any overrides on top.
fn resolve_brand(request: &MatchRequest) -> Result<BrandProfile, AppError> {
    if let Some(overrides) = request.brand_requirements.clone() {
        let has_name = overrides
            .name
            .as_deref()
            .map(str::trim)
            .is_some_and(|n| !n.is_empty());
        if has_name {
            return Ok(BrandProfile::from_overrides(overrides));
        }
        if let Some(base) = request.brand_id.and_then(catalog::find_brand) {
            return Ok(merge_overrides(base, overrides));
        }
    } else if let Some(base) = request.brand_id.and_then(catalog::find_brand) {
        return Ok(base);
    }

    Err(AppError::Validation("无法找到或接收到品牌信息".to_string()))
}

/// POST /api/v1/risk/content-check
pub async fn handle_check_risk(
    State(state): State<AppState>,
    Json(request): Json<RiskRequest>,
) -> Result<Json<ApiResponse<RiskData>>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("内容不能为空".to_string()));
    }

    let assessment = generator::check_risk(&state.gateway, &request.content).await?;

    let mut rng = rand::thread_rng();
    let risk_score = assessment.overall_risk.rank() * 30 + rng.gen_range(0..=30);

    let issues = vec![
        format!("政治敏感性: {}", assessment.political_sensitivity.reason),
        format!("法律合规性: {}", assessment.legal_compliance.reason),
        format!("道德伦理: {}", assessment.ethical_concerns.reason),
    ];

    Ok(Json(ApiResponse::ok(RiskData {
        risk_level: assessment.overall_risk,
        risk_score,
        issues,
        suggestions: assessment.suggestions,
    })))
}

/// GET /api/v1/ai/status
pub async fn handle_ai_status(State(state): State<AppState>) -> Json<ApiResponse<AiStatusData>> {
    let model_status = match state.gateway.model_name() {
        Some(_) => "运行中".to_string(),
        None => "使用模拟数据".to_string(),
    };

    Json(ApiResponse::ok(AiStatusData {
        model_status,
        api_key_configured: state.config.gemini_api_key.is_some(),
        available_features: vec![
            "内容生成".to_string(),
            "智能匹配".to_string(),
            "风险检测".to_string(),
        ],
    }))
}

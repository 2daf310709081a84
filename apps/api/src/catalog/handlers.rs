//! Axum route handlers for the catalog endpoints: creator listing, demo
//! analytics series, and the dashboard overview.

use axum::extract::{Path, Query};
use axum::Json;
use chrono::{Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::catalog;
use crate::models::matching::CreatorProfile;
use crate::models::ApiResponse;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreatorQuery {
    pub category: Option<String>,
    pub min_followers: Option<u64>,
}

/// Creator listing keeps its historical envelope: the list under `data` with
/// the count alongside it.
#[derive(Debug, Serialize)]
pub struct CreatorListResponse {
    pub success: bool,
    pub data: Vec<CreatorProfile>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct DailyStats {
    pub date: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub followers_growth: i64,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub total_views: u64,
    pub avg_engagement_rate: f64,
    pub follower_growth: i64,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsData {
    pub creator_id: u32,
    pub analytics: Vec<DailyStats>,
    pub summary: AnalyticsSummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/creators
///
/// Lists catalog creators, optionally filtered by category and minimum
/// follower count.
pub async fn handle_list_creators(Query(params): Query<CreatorQuery>) -> Json<CreatorListResponse> {
    let category = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    let creators = catalog::filter_creators(category, params.min_followers);
    let total = creators.len();

    Json(CreatorListResponse {
        success: true,
        data: creators,
        total,
    })
}

/// GET /api/v1/creators/:id/analytics
///
/// 30 days of randomized demo metrics plus a summary block.
pub async fn handle_creator_analytics(
    Path(creator_id): Path<u32>,
) -> Json<ApiResponse<AnalyticsData>> {
    Json(ApiResponse::ok(build_analytics(creator_id)))
}

fn build_analytics(creator_id: u32) -> AnalyticsData {
    let mut rng = rand::thread_rng();
    let base_date = Utc::now() - Duration::days(30);

    let analytics: Vec<DailyStats> = (0..30)
        .map(|i| DailyStats {
            date: (base_date + Duration::days(i)).format("%Y-%m-%d").to_string(),
            views: rng.gen_range(20_000..=80_000),
            likes: rng.gen_range(1_000..=8_000),
            comments: rng.gen_range(100..=800),
            shares: rng.gen_range(50..=500),
            followers_growth: rng.gen_range(-100..=500),
        })
        .collect();

    let total_views = analytics.iter().map(|d| d.views).sum();
    let follower_growth = analytics.iter().map(|d| d.followers_growth).sum();
    let avg_engagement_rate = (rng.gen_range(5.0..=15.0_f64) * 100.0).round() / 100.0;

    AnalyticsData {
        creator_id,
        analytics,
        summary: AnalyticsSummary {
            total_views,
            avg_engagement_rate,
            follower_growth,
        },
    }
}

/// GET /api/v1/dashboard/overview
///
/// Pure static JSON construction — demo numbers for the landing dashboard.
pub async fn handle_dashboard_overview() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "total_creators": catalog::mock_creators().len(),
            "active_campaigns": 12,
            "total_revenue": 2_580_000,
            "avg_roi": 4.2,
            "platform_distribution": {
                "抖音": 45,
                "小红书": 25,
                "B站": 20,
                "快手": 10
            },
            "category_distribution": {
                "美妆": 30,
                "科技": 25,
                "美食": 20,
                "时尚": 15,
                "其他": 10
            },
            "recent_activities": [
                {"time": "2小时前", "action": "新增创作者", "detail": "小美美妆"},
                {"time": "4小时前", "action": "完成匹配", "detail": "时尚品牌A × 3位创作者"},
                {"time": "6小时前", "action": "内容审核", "detail": "通过15条内容"},
                {"time": "8小时前", "action": "数据分析", "detail": "生成月度报告"}
            ]
        }
    }))
}

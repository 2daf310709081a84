//! Brand / creator profiles and the match result types they combine into.

use serde::{Deserialize, Serialize};

/// Match grade returned by the model (or drawn at random in mock mode).
/// Total order: 高 > 中 > 低 > 未知. Serialized with the Chinese labels the
/// frontend and the model prompt both use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchScore {
    #[serde(rename = "高")]
    High,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "低")]
    Low,
    #[serde(rename = "未知")]
    Unknown,
}

impl MatchScore {
    /// Sort key — higher is better. 高=3, 中=2, 低=1, 未知=0.
    pub fn rank(self) -> u8 {
        match self {
            MatchScore::High => 3,
            MatchScore::Medium => 2,
            MatchScore::Low => 1,
            MatchScore::Unknown => 0,
        }
    }

    /// Maps a parsed label to a grade. Anything but an exact 高/中/低 match
    /// (a hedged answer like "高度匹配", or garbage) counts as 未知.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "高" => MatchScore::High,
            "中" => MatchScore::Medium,
            "低" => MatchScore::Low,
            _ => MatchScore::Unknown,
        }
    }
}

/// The model's (or mock's) verdict on one (brand, creator) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub match_score: MatchScore,
    pub reason: String,
    pub suggestions: String,
}

/// A creator joined with its match verdict. The creator fields are flattened
/// so the wire shape is the creator object plus a `match_details` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub creator: CreatorProfile,
    pub match_details: MatchDetails,
}

/// A brand looked up from the catalog or assembled from request overrides.
/// Read-only during matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandProfile {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub budget: u64,
    pub target_audience: String,
    pub campaign_type: String,
    pub products_services: String,
    pub requirements: String,
}

/// Partial brand fields sent in a match request. Applied over a catalog base
/// via [`merge_overrides`], or used alone when no `brand_id` is given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandOverrides {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub budget: Option<u64>,
    pub target_audience: Option<String>,
    pub campaign_type: Option<String>,
    pub products_services: Option<String>,
    pub requirements: Option<String>,
}

/// Field-by-field merge of request overrides onto a catalog brand.
/// `None` keeps the base value; `Some` replaces it. The id always stays.
pub fn merge_overrides(base: BrandProfile, overrides: BrandOverrides) -> BrandProfile {
    BrandProfile {
        id: base.id,
        name: overrides.name.unwrap_or(base.name),
        category: overrides.category.unwrap_or(base.category),
        description: overrides.description.unwrap_or(base.description),
        budget: overrides.budget.unwrap_or(base.budget),
        target_audience: overrides.target_audience.unwrap_or(base.target_audience),
        campaign_type: overrides.campaign_type.unwrap_or(base.campaign_type),
        products_services: overrides
            .products_services
            .unwrap_or(base.products_services),
        requirements: overrides.requirements.unwrap_or(base.requirements),
    }
}

impl BrandProfile {
    /// Builds an ad-hoc brand from overrides alone (no catalog base).
    /// Missing fields become empty; the prompt builder substitutes its own
    /// fallback literals when rendering them.
    pub fn from_overrides(overrides: BrandOverrides) -> Self {
        BrandProfile {
            id: 0,
            name: overrides.name.unwrap_or_default(),
            category: overrides.category.unwrap_or_default(),
            description: overrides.description.unwrap_or_default(),
            budget: overrides.budget.unwrap_or_default(),
            target_audience: overrides.target_audience.unwrap_or_default(),
            campaign_type: overrides.campaign_type.unwrap_or_default(),
            products_services: overrides.products_services.unwrap_or_default(),
            requirements: overrides.requirements.unwrap_or_default(),
        }
    }
}

/// A creator from the catalog. Read-only during matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorProfile {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub followers: u64,
    pub engagement_rate: f64,
    pub avg_views: u64,
    pub potential_score: u32,
    pub growth_trend: String,
    pub platforms: Vec<String>,
    pub style: String,
    pub tags: Vec<String>,
    pub past_collaborations: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_brand() -> BrandProfile {
        BrandProfile {
            id: 1,
            name: "时尚品牌A".to_string(),
            category: "时尚".to_string(),
            description: "专注于年轻潮流服饰。".to_string(),
            budget: 500_000,
            target_audience: "18-35岁女性".to_string(),
            campaign_type: "品牌推广".to_string(),
            products_services: "时尚服饰、潮流配饰".to_string(),
            requirements: "粉丝量10万+".to_string(),
        }
    }

    #[test]
    fn test_match_score_serializes_to_chinese_labels() {
        assert_eq!(serde_json::to_string(&MatchScore::High).unwrap(), r#""高""#);
        assert_eq!(serde_json::to_string(&MatchScore::Medium).unwrap(), r#""中""#);
        assert_eq!(serde_json::to_string(&MatchScore::Low).unwrap(), r#""低""#);
        assert_eq!(
            serde_json::to_string(&MatchScore::Unknown).unwrap(),
            r#""未知""#
        );
    }

    #[test]
    fn test_match_score_total_order() {
        assert!(MatchScore::High.rank() > MatchScore::Medium.rank());
        assert!(MatchScore::Medium.rank() > MatchScore::Low.rank());
        assert!(MatchScore::Low.rank() > MatchScore::Unknown.rank());
    }

    #[test]
    fn test_from_label_exact_matches_only() {
        assert_eq!(MatchScore::from_label("高"), MatchScore::High);
        assert_eq!(MatchScore::from_label(" 中 "), MatchScore::Medium);
        assert_eq!(MatchScore::from_label("低"), MatchScore::Low);
        // A hedged answer does not count as a grade.
        assert_eq!(MatchScore::from_label("高度匹配"), MatchScore::Unknown);
        assert_eq!(MatchScore::from_label(""), MatchScore::Unknown);
    }

    #[test]
    fn test_merge_overrides_replaces_only_given_fields() {
        let base = sample_brand();
        let merged = merge_overrides(
            base.clone(),
            BrandOverrides {
                name: Some("新品牌".to_string()),
                budget: Some(100_000),
                ..Default::default()
            },
        );
        assert_eq!(merged.id, base.id);
        assert_eq!(merged.name, "新品牌");
        assert_eq!(merged.budget, 100_000);
        assert_eq!(merged.category, base.category);
        assert_eq!(merged.requirements, base.requirements);
    }

    #[test]
    fn test_merge_overrides_with_empty_overrides_is_identity() {
        let base = sample_brand();
        let merged = merge_overrides(base.clone(), BrandOverrides::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_match_result_flattens_creator_fields() {
        let result = MatchResult {
            creator: CreatorProfile {
                id: 1,
                name: "小美美妆".to_string(),
                category: "美妆".to_string(),
                followers: 125_000,
                engagement_rate: 8.5,
                avg_views: 45_000,
                potential_score: 92,
                growth_trend: "上升".to_string(),
                platforms: vec!["抖音".to_string()],
                style: "活泼、时尚".to_string(),
                tags: vec!["美妆".to_string()],
                past_collaborations: "品牌A".to_string(),
            },
            match_details: MatchDetails {
                match_score: MatchScore::High,
                reason: "契合".to_string(),
                suggestions: "无".to_string(),
            },
        };
        let value = serde_json::to_value(&result).unwrap();
        // Creator fields sit at the top level, next to match_details.
        assert_eq!(value["name"], "小美美妆");
        assert_eq!(value["followers"], 125_000);
        assert_eq!(value["match_details"]["match_score"], "高");
    }
}

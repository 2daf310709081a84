//! Mock Generator — the fallback path when the model gateway is Unavailable.
//!
//! Output schema is identical to the live path so callers cannot tell which
//! mode served them. Match grades are drawn uniformly at random from
//! 高/中/低 per creator — intentional demo behavior, not a fixed value.

use rand::seq::SliceRandom;

use crate::models::content::GeneratedContent;
use crate::models::matching::{
    BrandProfile, CreatorProfile, MatchDetails, MatchResult, MatchScore,
};
use crate::models::risk::{RiskAssessment, RiskDimension, RiskLevel};

const MOCK_GRADES: &[MatchScore] = &[MatchScore::High, MatchScore::Medium, MatchScore::Low];

pub fn mock_content(topic: &str, content_type: &str) -> GeneratedContent {
    if content_type == "title" {
        GeneratedContent {
            title: format!("【模拟】{topic} 的精彩标题"),
            description: String::new(),
            script: String::new(),
            tags: vec![topic.to_string(), "模拟标题".to_string()],
        }
    } else {
        GeneratedContent {
            title: format!("【模拟】{topic} 的爆款内容"),
            description: format!("【模拟】关于 {topic} 的模拟描述内容，这是一段很吸引人的简介。"),
            script: format!(
                "【模拟】这里是关于 {topic} 的模拟脚本，适合 {content_type} 内容展示。\n这是一个非常详细的脚本内容，可以包括开场白、主体内容和结束语，例如：大家好，今天我们来聊聊{topic}..."
            ),
            tags: vec![
                topic.to_string(),
                "模拟".to_string(),
                "内容".to_string(),
                "AI".to_string(),
            ],
        }
    }
}

pub fn mock_match(brand: &BrandProfile, creators: &[CreatorProfile]) -> Vec<MatchResult> {
    let mut rng = rand::thread_rng();
    creators
        .iter()
        .map(|creator| {
            let grade = MOCK_GRADES
                .choose(&mut rng)
                .copied()
                .unwrap_or(MatchScore::Medium);
            MatchResult {
                creator: creator.clone(),
                match_details: MatchDetails {
                    match_score: grade,
                    reason: format!(
                        "【模拟】创作者 {} 在 {} 领域与品牌 {} 有潜在契合点。",
                        creator.name, creator.category, brand.name
                    ),
                    suggestions: format!(
                        "【模拟】建议进行小规模试用合作，评估 {} 的实际效果。",
                        creator.name
                    ),
                },
            }
        })
        .collect()
}

pub fn mock_risk() -> RiskAssessment {
    RiskAssessment {
        political_sensitivity: RiskDimension {
            level: RiskLevel::Low,
            reason: "【模拟】未发现政治敏感内容。".to_string(),
        },
        legal_compliance: RiskDimension {
            level: RiskLevel::Low,
            reason: "【模拟】未发现法律合规问题。".to_string(),
        },
        ethical_concerns: RiskDimension {
            level: RiskLevel::Low,
            reason: "【模拟】未发现道德伦理风险。".to_string(),
        },
        overall_risk: RiskLevel::Low,
        suggestions: vec!["【模拟】建议发布前再次人工复核内容。".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand() -> BrandProfile {
        BrandProfile {
            id: 1,
            name: "品牌X".to_string(),
            category: "科技".to_string(),
            description: String::new(),
            budget: 0,
            target_audience: String::new(),
            campaign_type: String::new(),
            products_services: String::new(),
            requirements: String::new(),
        }
    }

    fn creator(id: u32, name: &str) -> CreatorProfile {
        CreatorProfile {
            id,
            name: name.to_string(),
            category: "科技".to_string(),
            followers: 10_000,
            engagement_rate: 5.0,
            avg_views: 1_000,
            potential_score: 80,
            growth_trend: "稳定".to_string(),
            platforms: vec!["B站".to_string()],
            style: "专业".to_string(),
            tags: vec![],
            past_collaborations: String::new(),
        }
    }

    #[test]
    fn test_mock_title_content_has_empty_body_fields() {
        let content = mock_content("秋季新品", "title");
        assert_eq!(content.title, "【模拟】秋季新品 的精彩标题");
        assert_eq!(content.description, "");
        assert_eq!(content.script, "");
        assert_eq!(
            content.tags,
            vec!["秋季新品".to_string(), "模拟标题".to_string()]
        );
    }

    #[test]
    fn test_mock_post_content_fills_every_field() {
        let content = mock_content("秋季新品", "post");
        assert!(content.title.contains("秋季新品"));
        assert!(!content.description.is_empty());
        assert!(content.script.contains("post"));
        assert_eq!(content.tags.len(), 4);
    }

    #[test]
    fn test_mock_content_schema_is_stable_across_calls() {
        let first = mock_content("主题", "title");
        let second = mock_content("主题", "title");
        // No randomness in content generation — identical inputs, identical output.
        assert_eq!(first, second);
    }

    #[test]
    fn test_mock_match_yields_one_result_per_creator() {
        let creators = vec![creator(1, "甲"), creator(2, "乙"), creator(3, "丙")];
        let results = mock_match(&brand(), &creators);
        assert_eq!(results.len(), 3);
        for result in &results {
            assert!(matches!(
                result.match_details.match_score,
                MatchScore::High | MatchScore::Medium | MatchScore::Low
            ));
            assert!(result.match_details.reason.contains("【模拟】"));
        }
    }

    #[test]
    fn test_mock_match_empty_creator_list() {
        assert!(mock_match(&brand(), &[]).is_empty());
    }

    #[test]
    fn test_mock_risk_is_all_low() {
        let assessment = mock_risk();
        assert_eq!(assessment.overall_risk, RiskLevel::Low);
        assert_eq!(assessment.suggestions.len(), 1);
        assert!(assessment.political_sensitivity.reason.contains("【模拟】"));
    }
}

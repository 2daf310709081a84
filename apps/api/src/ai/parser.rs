//! Response Parser — turns free-form model output into structured fields.
//!
//! Generative output is unreliable: labels drift, ordering changes, extra
//! prose appears. Every parser here degrades to fixed per-field defaults
//! instead of failing; nothing in this module returns an error.
//!
//! Field values are the trailing segment after the first full-width colon
//! on a labeled line, falling back to the first half-width colon. Labels are
//! matched as substrings, Chinese or English.

use crate::models::content::GeneratedContent;
use crate::models::matching::{MatchDetails, MatchScore};
use crate::models::risk::{RiskAssessment, RiskLevel};

const TITLE_LABELS: &[&str] = &["标题", "Title"];
const DESCRIPTION_LABELS: &[&str] = &["描述", "Description"];
const SCRIPT_LABELS: &[&str] = &["脚本", "Script"];
const TAG_LABELS: &[&str] = &["标签", "Tags"];

const DEFAULT_TITLE: &str = "AI生成标题";
const DEFAULT_DESCRIPTION: &str = "AI生成描述";
const DEFAULT_SCRIPT: &str = "AI生成脚本";
const DEFAULT_MATCH_REASON: &str = "AI未能解析匹配理由。";

fn default_tags() -> Vec<String> {
    vec!["AI".to_string(), "生成".to_string(), "标签".to_string()]
}

/// Trailing segment after the first full-width colon, falling back to the
/// first half-width colon. None when the line has no colon at all.
fn label_value(line: &str) -> Option<&str> {
    line.split_once('：')
        .or_else(|| line.split_once(':'))
        .map(|(_, value)| value.trim())
}

fn has_label(line: &str, labels: &[&str]) -> bool {
    labels.iter().any(|label| line.contains(label))
}

fn split_tags(value: &str) -> Vec<String> {
    value
        .split([',', '，'])
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts title/description/script/tags from model text.
///
/// Script is the one multi-line field: once its label line is seen, every
/// following line is collected verbatim (trimmed) until a line carrying any
/// other field's label, which both ends collection and is still parsed for
/// its own field. Missing fields get fixed placeholders.
pub fn parse_content(text: &str) -> GeneratedContent {
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut tags: Option<Vec<String>> = None;
    let mut script_lines: Vec<String> = Vec::new();
    let mut collecting_script = false;
    let mut script_done = false;

    for line in text.lines() {
        if collecting_script {
            if has_label(line, TITLE_LABELS)
                || has_label(line, DESCRIPTION_LABELS)
                || has_label(line, TAG_LABELS)
            {
                collecting_script = false;
                script_done = true;
                // fall through — the stop line still carries its own field
            } else {
                script_lines.push(line.trim().to_string());
                continue;
            }
        }

        if !script_done && !collecting_script && has_label(line, SCRIPT_LABELS) {
            if let Some(value) = label_value(line) {
                script_lines.push(value.to_string());
            }
            collecting_script = true;
            continue;
        }

        if title.is_none() && has_label(line, TITLE_LABELS) {
            if let Some(value) = label_value(line) {
                title = Some(value.to_string());
            }
        }
        if description.is_none() && has_label(line, DESCRIPTION_LABELS) {
            if let Some(value) = label_value(line) {
                description = Some(value.to_string());
            }
        }
        if tags.is_none() && has_label(line, TAG_LABELS) {
            if let Some(value) = label_value(line) {
                tags = Some(split_tags(value));
            }
        }
    }

    let script = script_lines.join("\n").trim().to_string();

    GeneratedContent {
        title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        script: if script.is_empty() {
            DEFAULT_SCRIPT.to_string()
        } else {
            script
        },
        tags: tags.unwrap_or_else(default_tags),
    }
}

/// Extracts the match grade, reason, and suggestions. Repeated labels keep
/// the last occurrence; anything missing keeps its default.
pub fn parse_match(text: &str) -> MatchDetails {
    let mut details = MatchDetails {
        match_score: MatchScore::Unknown,
        reason: DEFAULT_MATCH_REASON.to_string(),
        suggestions: "无".to_string(),
    };

    for line in text.lines() {
        let Some(value) = label_value(line) else {
            continue;
        };
        if line.contains("匹配度") {
            details.match_score = MatchScore::from_label(value);
        } else if line.contains("匹配理由") {
            details.reason = value.to_string();
        } else if line.contains("合作建议") {
            details.suggestions = value.to_string();
        }
    }

    details
}

/// Extracts the three dimension grades plus reasons, the overall grade, and
/// the suggestion list. The 理由 labels contain their bare-level labels as
/// substrings, so they must be checked first.
pub fn parse_risk(text: &str) -> RiskAssessment {
    let mut assessment = RiskAssessment::default();

    for line in text.lines() {
        let Some(value) = label_value(line) else {
            continue;
        };
        if line.contains("政治敏感性理由") {
            assessment.political_sensitivity.reason = value.to_string();
        } else if line.contains("政治敏感性") {
            assessment.political_sensitivity.level = RiskLevel::from_label(value);
        } else if line.contains("法律合规性理由") {
            assessment.legal_compliance.reason = value.to_string();
        } else if line.contains("法律合规性") {
            assessment.legal_compliance.level = RiskLevel::from_label(value);
        } else if line.contains("道德伦理理由") {
            assessment.ethical_concerns.reason = value.to_string();
        } else if line.contains("道德伦理") {
            assessment.ethical_concerns.level = RiskLevel::from_label(value);
        } else if line.contains("整体风险") {
            assessment.overall_risk = RiskLevel::from_label(value);
        } else if line.contains("改进建议") {
            assessment.suggestions = value
                .split(['；', ';'])
                .map(str::trim)
                .filter(|s| !s.is_empty() && *s != "无")
                .map(str::to_string)
                .collect();
        }
    }

    assessment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_full_width_colons() {
        let text = "标题：秋季新品上市\n描述：一段简介\n标签：美妆,护肤,秋季";
        let content = parse_content(text);
        assert_eq!(content.title, "秋季新品上市");
        assert_eq!(content.description, "一段简介");
        assert_eq!(
            content.tags,
            vec!["美妆".to_string(), "护肤".to_string(), "秋季".to_string()]
        );
    }

    #[test]
    fn test_parse_content_half_width_colon_fallback() {
        let content = parse_content("标题: 测试标题");
        assert_eq!(content.title, "测试标题");
    }

    #[test]
    fn test_parse_content_english_labels() {
        let text = "Title: Autumn Launch\nDescription: short intro\nTags: beauty, skincare";
        let content = parse_content(text);
        assert_eq!(content.title, "Autumn Launch");
        assert_eq!(content.description, "short intro");
        assert_eq!(content.tags, vec!["beauty".to_string(), "skincare".to_string()]);
    }

    #[test]
    fn test_parse_content_trims_surrounding_whitespace() {
        let content = parse_content("标题：   留白标题   ");
        assert_eq!(content.title, "留白标题");
    }

    #[test]
    fn test_parse_content_multiline_script_stops_at_next_label() {
        let text = "标题：开箱视频\n脚本：大家好\n今天我们来开箱\n记得点赞关注\n标签：开箱,测评";
        let content = parse_content(text);
        assert_eq!(content.script, "大家好\n今天我们来开箱\n记得点赞关注");
        assert_eq!(content.tags, vec!["开箱".to_string(), "测评".to_string()]);
    }

    #[test]
    fn test_parse_content_script_stop_line_still_parsed() {
        // The 描述 line ends script collection and still fills description.
        let text = "脚本：第一幕\n第二幕\n描述：收尾描述";
        let content = parse_content(text);
        assert_eq!(content.script, "第一幕\n第二幕");
        assert_eq!(content.description, "收尾描述");
    }

    #[test]
    fn test_parse_content_script_collects_blank_interior_lines() {
        let text = "脚本：开场\n\n结尾\n标签：a";
        let content = parse_content(text);
        assert_eq!(content.script, "开场\n\n结尾");
    }

    #[test]
    fn test_parse_content_missing_fields_get_placeholders() {
        let content = parse_content("完全无关的一段话");
        assert_eq!(content.title, "AI生成标题");
        assert_eq!(content.description, "AI生成描述");
        assert_eq!(content.script, "AI生成脚本");
        assert_eq!(
            content.tags,
            vec!["AI".to_string(), "生成".to_string(), "标签".to_string()]
        );
    }

    #[test]
    fn test_parse_content_tags_drop_empty_segments() {
        let content = parse_content("标签：美妆,, 护肤 ,");
        assert_eq!(content.tags, vec!["美妆".to_string(), "护肤".to_string()]);
    }

    #[test]
    fn test_parse_content_tags_split_on_full_width_comma() {
        let content = parse_content("标签：美妆，护肤");
        assert_eq!(content.tags, vec!["美妆".to_string(), "护肤".to_string()]);
    }

    #[test]
    fn test_parse_content_first_label_occurrence_wins() {
        let content = parse_content("标题：第一个\n标题：第二个");
        assert_eq!(content.title, "第一个");
    }

    #[test]
    fn test_parse_content_colonless_label_line_is_skipped() {
        let content = parse_content("这里提到标题但没有冒号\n标题：真正的标题");
        assert_eq!(content.title, "真正的标题");
    }

    #[test]
    fn test_parse_match_extracts_all_fields() {
        let text = "匹配度：高\n匹配理由：领域高度重合\n合作建议：先做一期联合直播";
        let details = parse_match(text);
        assert_eq!(details.match_score, MatchScore::High);
        assert_eq!(details.reason, "领域高度重合");
        assert_eq!(details.suggestions, "先做一期联合直播");
    }

    #[test]
    fn test_parse_match_half_width_colons() {
        let details = parse_match("匹配度: 中\n匹配理由: 部分重合");
        assert_eq!(details.match_score, MatchScore::Medium);
        assert_eq!(details.reason, "部分重合");
    }

    #[test]
    fn test_parse_match_defaults_when_nothing_matches() {
        let details = parse_match("模型输出了一段自由文本");
        assert_eq!(details.match_score, MatchScore::Unknown);
        assert_eq!(details.reason, "AI未能解析匹配理由。");
        assert_eq!(details.suggestions, "无");
    }

    #[test]
    fn test_parse_match_unrecognized_grade_reads_unknown() {
        let details = parse_match("匹配度：非常高");
        assert_eq!(details.match_score, MatchScore::Unknown);
    }

    #[test]
    fn test_parse_risk_full_response() {
        let text = "政治敏感性：低\n政治敏感性理由：无涉政内容\n法律合规性：中\n法律合规性理由：广告用语需留意\n道德伦理：低\n道德伦理理由：无不当导向\n整体风险：中\n改进建议：调整绝对化用语；补充免责声明";
        let assessment = parse_risk(text);
        assert_eq!(assessment.political_sensitivity.level, RiskLevel::Low);
        assert_eq!(assessment.political_sensitivity.reason, "无涉政内容");
        assert_eq!(assessment.legal_compliance.level, RiskLevel::Medium);
        assert_eq!(assessment.ethical_concerns.reason, "无不当导向");
        assert_eq!(assessment.overall_risk, RiskLevel::Medium);
        assert_eq!(
            assessment.suggestions,
            vec!["调整绝对化用语".to_string(), "补充免责声明".to_string()]
        );
    }

    #[test]
    fn test_parse_risk_reason_label_checked_before_level() {
        // 政治敏感性理由 contains 政治敏感性 — must not be read as a level line.
        let assessment = parse_risk("政治敏感性理由：某个理由");
        assert_eq!(assessment.political_sensitivity.reason, "某个理由");
        assert_eq!(assessment.political_sensitivity.level, RiskLevel::Low);
    }

    #[test]
    fn test_parse_risk_suggestions_drop_none_literal() {
        let assessment = parse_risk("改进建议：无");
        assert!(assessment.suggestions.is_empty());
    }

    #[test]
    fn test_parse_risk_defaults() {
        let assessment = parse_risk("离题的回答");
        assert_eq!(assessment, RiskAssessment::default());
    }
}

// All model prompt templates. The labeled-line return formats are the
// parsing contract with the upstream model: label text, field order, and
// value constraints must stay in lockstep with `parser.rs`.

use crate::models::matching::{BrandProfile, CreatorProfile};

/// Title-only generation: one labeled line, no body fields.
const CONTENT_PROMPT_TITLE: &str = "请为以下主题生成一个吸引人的标题：{topic}

请按以下格式返回：
标题：[生成一个吸引人的标题]

要求：
1. 标题要简洁有力，具有吸引力
2. 10-30字
3. 符合社交媒体传播特点";

/// Full post generation: four labeled lines.
const CONTENT_PROMPT_POST: &str = "请为以下主题生成社交媒体帖子内容：{topic}

请按以下格式返回：
标题：[生成一个吸引人的标题]
描述：[生成一个简洁的描述，50-100字]
脚本：[生成详细的内容脚本，200-500字]
标签：[生成3-5个相关标签，用逗号分隔]

要求：
1. 内容要有创意且吸引人
2. 符合社交媒体传播特点
3. 语言生动有趣
4. 适合目标受众";

/// Any other content kind: the four-field format with the kind substituted
/// into the instruction line.
const CONTENT_PROMPT_GENERIC: &str = "请为以下主题生成{content_type}内容：{topic}

请按以下格式返回：
标题：[生成一个吸引人的标题]
描述：[生成一个简洁的描述，50-100字]
脚本：[生成详细的内容脚本，200-500字]
标签：[生成3-5个相关标签，用逗号分隔]

要求：
1. 内容要有创意且吸引人
2. 符合社交媒体传播特点
3. 语言生动有趣
4. 适合目标受众";

const MATCH_PROMPT_TEMPLATE: &str = "请根据以下品牌信息和创作者信息，评估该创作者与品牌的匹配度，并给出匹配理由。
要求：
1. 匹配度：高/中/低
2. 匹配理由：详细说明匹配或不匹配的原因。
3. 如果匹配度为中或高，请给出1-2点合作建议。

品牌信息：
品牌名称：{brand_name}
品牌描述：{brand_description}
目标受众：{target_audience}
主要产品/服务：{products_services}

创作者信息：
创作者名称：{creator_name}
创作者领域/标签：{creator_tags}
创作者风格：{creator_style}
粉丝数量：{followers}
过往合作案例：{past_collaborations}

请按以下格式返回：
匹配度：[高/中/低]
匹配理由：[详细说明匹配原因]
合作建议：[如果匹配度为中或高，请给出1-2点建议，否则写无]";

const RISK_PROMPT_TEMPLATE: &str = "请对以下内容进行合规风险评估：{content}

请从政治敏感性、法律合规性、道德伦理三个维度分别评估风险等级并说明理由，最后给出整体风险等级和改进建议。

请按以下格式返回：
政治敏感性：[低/中/高]
政治敏感性理由：[说明原因]
法律合规性：[低/中/高]
法律合规性理由：[说明原因]
道德伦理：[低/中/高]
道德伦理理由：[说明原因]
整体风险：[低/中/高]
改进建议：[给出1-3点改进建议，用分号分隔，若无风险写无]";

/// Renders the content-generation prompt for a topic. "title" gets the
/// single-line format, "post" the full four-field format, anything else the
/// four-field format with the kind name spliced in.
pub fn build_content_prompt(topic: &str, content_type: &str) -> String {
    match content_type {
        "title" => CONTENT_PROMPT_TITLE.replace("{topic}", topic),
        "post" => CONTENT_PROMPT_POST.replace("{topic}", topic),
        other => CONTENT_PROMPT_GENERIC
            .replace("{content_type}", other)
            .replace("{topic}", topic),
    }
}

/// Renders the match-evaluation prompt for one (brand, creator) pair.
/// Blank profile fields fall back to the fixed literals the model was tuned
/// against (未知品牌, 不明确, 无标签, ...).
pub fn build_match_prompt(brand: &BrandProfile, creator: &CreatorProfile) -> String {
    let creator_tags = if creator.tags.is_empty() {
        "无标签".to_string()
    } else {
        creator.tags.join(", ")
    };

    MATCH_PROMPT_TEMPLATE
        .replace("{brand_name}", or_literal(&brand.name, "未知品牌"))
        .replace("{brand_description}", or_literal(&brand.description, "无描述"))
        .replace("{target_audience}", or_literal(&brand.target_audience, "不明确"))
        .replace(
            "{products_services}",
            or_literal(&brand.products_services, "不明确"),
        )
        .replace("{creator_name}", or_literal(&creator.name, "未知创作者"))
        .replace("{creator_tags}", &creator_tags)
        .replace("{creator_style}", or_literal(&creator.style, "不明确"))
        .replace("{followers}", &creator.followers.to_string())
        .replace(
            "{past_collaborations}",
            or_literal(&creator.past_collaborations, "无"),
        )
}

/// Renders the risk-assessment prompt for a piece of content.
pub fn build_risk_prompt(content: &str) -> String {
    RISK_PROMPT_TEMPLATE.replace("{content}", content)
}

fn or_literal<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

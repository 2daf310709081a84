//! Static demo catalog — the creator and brand tables served while no real
//! data source is wired up, plus the filters the list and match endpoints
//! apply over them.

pub mod handlers;

use crate::models::matching::{BrandProfile, CreatorProfile};

#[allow(clippy::too_many_arguments)]
fn creator(
    id: u32,
    name: &str,
    category: &str,
    followers: u64,
    engagement_rate: f64,
    avg_views: u64,
    potential_score: u32,
    growth_trend: &str,
    platforms: &[&str],
    style: &str,
    tags: &[&str],
    past_collaborations: &str,
) -> CreatorProfile {
    CreatorProfile {
        id,
        name: name.to_string(),
        category: category.to_string(),
        followers,
        engagement_rate,
        avg_views,
        potential_score,
        growth_trend: growth_trend.to_string(),
        platforms: platforms.iter().map(|p| p.to_string()).collect(),
        style: style.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        past_collaborations: past_collaborations.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn brand(
    id: u32,
    name: &str,
    category: &str,
    description: &str,
    budget: u64,
    target_audience: &str,
    campaign_type: &str,
    products_services: &str,
    requirements: &str,
) -> BrandProfile {
    BrandProfile {
        id,
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        budget,
        target_audience: target_audience.to_string(),
        campaign_type: campaign_type.to_string(),
        products_services: products_services.to_string(),
        requirements: requirements.to_string(),
    }
}

pub fn mock_creators() -> Vec<CreatorProfile> {
    vec![
        creator(
            1,
            "小美美妆",
            "美妆",
            125_000,
            8.5,
            45_000,
            92,
            "上升",
            &["抖音", "小红书", "B站"],
            "活泼、时尚",
            &["美妆", "护肤", "时尚穿搭"],
            "品牌A、品牌B",
        ),
        creator(
            2,
            "科技小王",
            "科技",
            89_000,
            12.3,
            78_000,
            88,
            "稳定",
            &["B站", "抖音"],
            "专业、深度",
            &["科技", "数码", "测评"],
            "品牌C、品牌D",
        ),
        creator(
            3,
            "美食达人",
            "美食",
            156_000,
            6.8,
            32_000,
            75,
            "下降",
            &["抖音", "快手", "小红书"],
            "亲和、实用",
            &["美食", "探店", "家常菜"],
            "品牌E、品牌F",
        ),
        creator(
            4,
            "旅行家张",
            "旅行",
            230_000,
            9.1,
            60_000,
            95,
            "上升",
            &["小红书", "B站", "微博"],
            "治愈、风景",
            &["旅行", "户外", "vlog", "攻略"],
            "航空公司X、酒店集团Y",
        ),
        creator(
            5,
            "健康生活家",
            "健康",
            75_000,
            10.5,
            38_000,
            80,
            "稳定",
            &["抖音", "小红书"],
            "专业、实用",
            &["健身", "营养", "瑜伽", "健康饮食"],
            "健身房A、保健品B",
        ),
        creator(
            6,
            "时尚穿搭姐",
            "时尚",
            180_000,
            7.2,
            55_000,
            90,
            "上升",
            &["抖音", "小红书"],
            "高级、简约",
            &["穿搭", "时尚", "ootd", "奢侈品"],
            "品牌D、品牌E",
        ),
        creator(
            7,
            "萌宠乐园",
            "萌宠",
            95_000,
            15.0,
            85_000,
            85,
            "稳定",
            &["抖音", "快手"],
            "可爱、有趣",
            &["萌宠", "猫咪", "狗狗", "宠物用品"],
            "宠物粮品牌F、宠物玩具G",
        ),
        creator(
            8,
            "二次元动漫宅",
            "动漫",
            60_000,
            11.0,
            40_000,
            70,
            "稳定",
            &["B站", "微博"],
            "幽默、热血",
            &["动漫", "游戏", "二次元", "手办"],
            "游戏公司H、动漫周边I",
        ),
    ]
}

pub fn mock_brands() -> Vec<BrandProfile> {
    vec![
        brand(
            1,
            "时尚品牌A",
            "时尚",
            "专注于年轻潮流服饰。",
            500_000,
            "18-35岁女性，追求时尚与个性",
            "品牌推广",
            "时尚服饰、潮流配饰",
            "粉丝量10万+，互动率5%+，时尚穿搭类创作者",
        ),
        brand(
            2,
            "科技公司B",
            "科技",
            "领先的智能硬件和软件解决方案提供商。",
            800_000,
            "25-40岁男性，关注前沿科技",
            "产品发布",
            "智能手机、笔记本电脑、智能家居",
            "科技垂直领域，粉丝量5万+，能进行专业评测和深度解读",
        ),
        brand(
            3,
            "美妆品牌C",
            "美妆",
            "提供高端护肤品和彩妆产品。",
            600_000,
            "20-45岁女性，注重护肤和彩妆品质",
            "新品上市",
            "精华液、口红、粉底",
            "美妆垂类，粉丝量8万+，内容精致，有产品深度评测能力",
        ),
        brand(
            4,
            "旅游服务商D",
            "旅行",
            "专注于全球特色旅行线路和定制服务。",
            400_000,
            "25-50岁，热爱旅行，追求独特体验的人群",
            "目的地推广",
            "欧洲游、海岛度假、定制小团",
            "旅行博主，粉丝量15万+，vlog制作精良，善于分享旅行体验",
        ),
        brand(
            5,
            "宠物用品E",
            "萌宠",
            "生产高品质宠物食品和玩具。",
            300_000,
            "养猫狗的年轻家庭，关注宠物健康和生活品质",
            "品牌曝光",
            "猫粮、狗粮、智能喂食器、宠物玩具",
            "萌宠博主，粉丝量5万+，内容有趣，善于与宠物互动",
        ),
        brand(
            6,
            "健康食品F",
            "健康",
            "提供天然有机健康食品。",
            350_000,
            "关注健康、健身、有机生活的人群",
            "产品试用",
            "蛋白粉、坚果、燕麦片",
            "健康/健身博主，粉丝量6万+，分享健康食谱或健身日常",
        ),
    ]
}

pub fn find_brand(id: u32) -> Option<BrandProfile> {
    mock_brands().into_iter().find(|b| b.id == id)
}

/// Creator list filtered by exact category and minimum follower count.
pub fn filter_creators(category: Option<&str>, min_followers: Option<u64>) -> Vec<CreatorProfile> {
    mock_creators()
        .into_iter()
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .filter(|c| min_followers.map_or(true, |min| c.followers >= min))
        .collect()
}

/// Creators active on the given platform, compared case-insensitively.
pub fn creators_on_platform(platform: &str) -> Vec<CreatorProfile> {
    let wanted = platform.to_lowercase();
    mock_creators()
        .into_iter()
        .filter(|c| c.platforms.iter().any(|p| p.to_lowercase() == wanted))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(mock_creators().len(), 8);
        assert_eq!(mock_brands().len(), 6);
    }

    #[test]
    fn test_find_brand_by_id() {
        let found = find_brand(3).unwrap();
        assert_eq!(found.name, "美妆品牌C");
        assert!(find_brand(99).is_none());
    }

    #[test]
    fn test_filter_creators_by_category() {
        let creators = filter_creators(Some("美妆"), None);
        assert_eq!(creators.len(), 1);
        assert_eq!(creators[0].name, "小美美妆");
    }

    #[test]
    fn test_filter_creators_by_min_followers() {
        let creators = filter_creators(None, Some(150_000));
        assert_eq!(creators.len(), 3);
        assert!(creators.iter().all(|c| c.followers >= 150_000));
    }

    #[test]
    fn test_filter_creators_without_filters_returns_all() {
        assert_eq!(filter_creators(None, None).len(), 8);
    }

    #[test]
    fn test_creators_on_platform_is_case_insensitive() {
        let on_bilibili = creators_on_platform("b站");
        assert_eq!(on_bilibili.len(), 4);
        assert!(on_bilibili
            .iter()
            .all(|c| c.platforms.iter().any(|p| p == "B站")));
    }

    #[test]
    fn test_creators_on_unknown_platform_is_empty() {
        assert!(creators_on_platform("YouTube").is_empty());
    }
}

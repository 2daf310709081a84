use serde::{Deserialize, Serialize};

/// Request body for POST /api/v1/content/generate.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentRequest {
    pub topic: String,
    /// "title", "post", or any free-form content kind.
    #[serde(rename = "type", default = "default_content_type")]
    pub content_type: String,
    #[serde(default = "default_platform")]
    pub platform: String,
}

fn default_content_type() -> String {
    "post".to_string()
}

fn default_platform() -> String {
    "抖音".to_string()
}

/// Structured content extracted from model output, or produced by the mock
/// path. Same shape in both modes — callers cannot tell which one served them.
/// Built once per request, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub title: String,
    pub description: String,
    pub script: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_request_defaults_type_and_platform() {
        let req: ContentRequest = serde_json::from_str(r#"{"topic": "秋季新品"}"#).unwrap();
        assert_eq!(req.topic, "秋季新品");
        assert_eq!(req.content_type, "post");
        assert_eq!(req.platform, "抖音");
    }

    #[test]
    fn test_content_request_reads_type_field() {
        let req: ContentRequest =
            serde_json::from_str(r#"{"topic": "新品", "type": "title", "platform": "小红书"}"#)
                .unwrap();
        assert_eq!(req.content_type, "title");
        assert_eq!(req.platform, "小红书");
    }

    #[test]
    fn test_generated_content_round_trips() {
        let content = GeneratedContent {
            title: "标题".to_string(),
            description: "描述".to_string(),
            script: "第一行\n第二行".to_string(),
            tags: vec!["美妆".to_string(), "护肤".to_string()],
        };
        let json = serde_json::to_string(&content).unwrap();
        let recovered: GeneratedContent = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, content);
    }
}

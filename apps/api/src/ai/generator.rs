//! Content generation and risk assessment services.
//!
//! Both follow the same two-mode contract: a Ready gateway drives
//! prompt → invoke → parse; an Unavailable gateway serves mock data with the
//! identical schema. Transport and semantic model failures surface as
//! `AppError::Llm` with a human-readable message — validation happens in the
//! handlers before any model call.

use tracing::info;

use crate::ai::{mock, parser, prompts};
use crate::errors::AppError;
use crate::llm_client::ModelGateway;
use crate::models::content::GeneratedContent;
use crate::models::risk::RiskAssessment;

pub async fn generate_content(
    gateway: &ModelGateway,
    topic: &str,
    content_type: &str,
) -> Result<GeneratedContent, AppError> {
    if !gateway.is_ready() {
        info!("model gateway unavailable — serving mock content");
        return Ok(mock::mock_content(topic, content_type));
    }

    let prompt = prompts::build_content_prompt(topic, content_type);
    let text = gateway
        .invoke(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("内容生成失败: {e}")))?;

    let mut content = parser::parse_content(&text);
    if content_type == "title" {
        // Title requests carry no body fields, whatever the model returned.
        content.description.clear();
        content.script.clear();
    }
    Ok(content)
}

pub async fn check_risk(gateway: &ModelGateway, content: &str) -> Result<RiskAssessment, AppError> {
    if !gateway.is_ready() {
        info!("model gateway unavailable — serving mock risk assessment");
        return Ok(mock::mock_risk());
    }

    let prompt = prompts::build_risk_prompt(content);
    let text = gateway
        .invoke(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("风险检测失败: {e}")))?;

    Ok(parser::parse_risk(&text))
}

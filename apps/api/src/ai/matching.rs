//! Match Orchestrator — scores a creator list against one brand.
//!
//! Every submitted creator yields exactly one result. A per-creator gateway
//! failure (transport, filtered, empty) degrades that creator's details to
//! an 未知 grade with the failure description — it never aborts the batch.
//! Results always come back sorted descending by grade; ties keep their
//! input order (stable sort, no secondary key).

use std::cmp::Reverse;

use tracing::{info, warn};

use crate::ai::{mock, parser, prompts};
use crate::llm_client::ModelGateway;
use crate::models::matching::{
    BrandProfile, CreatorProfile, MatchDetails, MatchResult, MatchScore,
};

pub async fn match_brand_to_creators(
    gateway: &ModelGateway,
    brand: &BrandProfile,
    creators: &[CreatorProfile],
) -> Vec<MatchResult> {
    if !gateway.is_ready() {
        info!("model gateway unavailable — serving mock match results");
        let mut results = mock::mock_match(brand, creators);
        sort_by_score(&mut results);
        return results;
    }

    let mut results = Vec::with_capacity(creators.len());
    for creator in creators {
        let prompt = prompts::build_match_prompt(brand, creator);
        let details = match gateway.invoke(&prompt).await {
            Ok(text) => parser::parse_match(&text),
            Err(e) => {
                warn!(creator = %creator.name, "match evaluation failed: {e}");
                MatchDetails {
                    match_score: MatchScore::Unknown,
                    reason: format!("AI评估失败: {e}"),
                    suggestions: "无".to_string(),
                }
            }
        };
        results.push(MatchResult {
            creator: creator.clone(),
            match_details: details,
        });
    }

    sort_by_score(&mut results);
    results
}

fn sort_by_score(results: &mut [MatchResult]) {
    results.sort_by_key(|r| Reverse(r.match_details.match_score.rank()));
}

//! LLM Client — the single point of entry for all generative-model calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the Gemini API directly.
//! All model interactions MUST go through [`ModelGateway`].
//!
//! The gateway has exactly two states, fixed at startup for the process
//! lifetime: Ready (a usable model variant was selected) or Unavailable
//! (no API key, or initialization failed). Unavailable is never retried —
//! callers fall back to mock data and stay there.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const GENERATE_CONTENT_METHOD: &str = "generateContent";

/// Bounded per-call timeout so one slow upstream call cannot stall a whole
/// match batch. Expiry surfaces as `LlmError::Http` and takes the same
/// degraded path as any other per-call failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Model variants preferred in order when the upstream catalog offers them.
/// The order decides which variant serves when the catalog changes upstream;
/// do not reshuffle it.
const PREFERRED_MODELS: &[&str] = &["gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro"];

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("response blocked by upstream content filter: {0}")]
    Filtered(String),

    #[error("model returned no usable text")]
    EmptyContent,

    #[error("model gateway is unavailable")]
    Unavailable,
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ModelListResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelInfo {
    /// Fully-qualified variant name, e.g. "models/gemini-1.5-flash".
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Text generation seam
// ────────────────────────────────────────────────────────────────────────────

/// Single-turn text generation. `GeminiModel` is the production
/// implementation; tests inject scripted fakes through the same seam.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// A selected Gemini model variant bound to an API key.
pub struct GeminiModel {
    http: Client,
    api_key: String,
    model: String,
}

impl GeminiModel {
    fn new(http: Client, api_key: String, model: String) -> Self {
        Self {
            http,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{GEMINI_API_BASE}/models/{}:generateContent", self.model);
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GoogleError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        debug!(model = %self.model, "generateContent call succeeded");
        extract_text(parsed)
    }
}

/// Pulls the candidate text out of a 2xx response. A block reason or an
/// empty candidate list is a semantic failure — the call succeeded at the
/// transport level but carried nothing usable.
fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            return Err(LlmError::Filtered(reason.clone()));
        }
    }

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| {
            c.parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(LlmError::EmptyContent);
    }
    Ok(text)
}

/// Picks the model variant to bind, over the variants that support
/// generateContent: each preferred name in order (with or without the
/// "models/" prefix), then the first listed variant.
fn select_model(models: &[ModelInfo]) -> Option<String> {
    let available: Vec<&str> = models
        .iter()
        .filter(|m| {
            m.supported_generation_methods
                .iter()
                .any(|method| method == GENERATE_CONTENT_METHOD)
        })
        .map(|m| m.name.as_str())
        .collect();

    for preferred in PREFERRED_MODELS {
        let qualified = format!("models/{preferred}");
        if available
            .iter()
            .any(|name| *name == qualified || *name == *preferred)
        {
            return Some(preferred.to_string());
        }
    }

    available
        .first()
        .map(|name| name.rsplit('/').next().unwrap_or(name).to_string())
}

async fn list_models(http: &Client, api_key: &str) -> Result<Vec<ModelInfo>, LlmError> {
    let url = format!("{GEMINI_API_BASE}/models");
    let response = http.get(&url).query(&[("key", api_key)]).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<GoogleError>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        return Err(LlmError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let list: ModelListResponse = response.json().await?;
    Ok(list.models)
}

// ────────────────────────────────────────────────────────────────────────────
// Model Gateway
// ────────────────────────────────────────────────────────────────────────────

/// Process-wide handle to the generative model. Initialized once in `main`,
/// shared read-only via `Arc` — never re-initialized, never locked.
pub struct ModelGateway {
    model: Option<Arc<dyn TextGenerator>>,
    model_name: Option<String>,
}

impl ModelGateway {
    /// Binds a model variant, or enters the permanent Unavailable state when
    /// no key is configured or any step of initialization fails.
    pub async fn initialize(api_key: Option<String>) -> Self {
        let Some(key) = api_key.filter(|k| !k.trim().is_empty()) else {
            info!("no API key configured — serving mock data for the process lifetime");
            return Self::unavailable();
        };

        let http = match Client::builder().timeout(REQUEST_TIMEOUT).build() {
            Ok(client) => client,
            Err(e) => {
                warn!("failed to build HTTP client: {e} — falling back to mock data");
                return Self::unavailable();
            }
        };

        let models = match list_models(&http, &key).await {
            Ok(models) => models,
            Err(e) => {
                warn!("model listing failed: {e} — falling back to mock data");
                return Self::unavailable();
            }
        };

        match select_model(&models) {
            Some(name) => {
                info!("model gateway ready (model: {name})");
                Self {
                    model: Some(Arc::new(GeminiModel::new(http, key, name.clone()))),
                    model_name: Some(name),
                }
            }
            None => {
                warn!("no model variant supports generateContent — falling back to mock data");
                Self::unavailable()
            }
        }
    }

    pub fn unavailable() -> Self {
        Self {
            model: None,
            model_name: None,
        }
    }

    /// Wraps an arbitrary generator — the injection point for scripted
    /// generators in tests.
    #[cfg(test)]
    pub fn with_generator(model_name: &str, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            model: Some(generator),
            model_name: Some(model_name.to_string()),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.model.is_some()
    }

    pub fn model_name(&self) -> Option<&str> {
        self.model_name.as_deref()
    }

    /// Single-turn generation through the bound model.
    pub async fn invoke(&self, prompt: &str) -> Result<String, LlmError> {
        match &self.model {
            Some(model) => model.generate(prompt).await,
            None => Err(LlmError::Unavailable),
        }
    }
}

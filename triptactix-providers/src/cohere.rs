use crate::request::{HttpRequest, join_url};
use serde_json::json;

pub const COHERE_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, PartialEq, Eq)]
pub struct CohereConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl std::fmt::Debug for CohereConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CohereConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

pub fn build_generate_request(
    cfg: &CohereConfig,
    prompt: &str,
    temperature: f32,
    max_tokens: u32,
) -> HttpRequest {
    let payload = json!({
        "model": cfg.model,
        "prompt": prompt,
        "temperature": temperature,
        "max_tokens": max_tokens,
    });

    HttpRequest::post_json(join_url(&cfg.base_url, "/v1/generate"), &payload)
        .with_header("Accept", "application/json")
        .with_header("Authorization", format!("Bearer {}", cfg.api_key))
        .with_timeout_secs(COHERE_TIMEOUT_SECS)
}

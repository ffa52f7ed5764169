use crate::request::{HttpRequest, join_url};
use serde_json::json;

pub const HF_TIMEOUT_SECS: u64 = 60;

/// Gradio-style predict call on a hosted Space.
pub fn build_space_request(space_url: &str, token: &str, prompt: &str) -> HttpRequest {
    HttpRequest::post_json(
        join_url(space_url, "/run/predict"),
        &json!({ "data": [prompt] }),
    )
    .with_header("Authorization", format!("Bearer {token}"))
    .with_timeout_secs(HF_TIMEOUT_SECS)
}

/// Text-to-image call against a single model on the inference API.
pub fn build_model_request(
    base_url: &str,
    token: &str,
    model_id: &str,
    prompt: &str,
) -> HttpRequest {
    let model_path = format!("/models/{}", model_id.trim_matches('/'));
    HttpRequest::post_json(join_url(base_url, &model_path), &json!({ "inputs": prompt }))
        .with_header("Accept", "image/png")
        .with_header("Authorization", format!("Bearer {token}"))
        .with_timeout_secs(HF_TIMEOUT_SECS)
}

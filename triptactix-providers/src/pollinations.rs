use crate::request::HttpRequest;
use anyhow::{Context, anyhow};
use url::Url;

pub const POLLINATIONS_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicImageConfig {
    pub base_url: String,
    pub width: u32,
    pub height: u32,

    // Fixed so the same prompt yields the same picture.
    pub seed: u64,
}

/// No-auth image URL: the prompt travels percent-encoded as a single path segment.
pub fn build_public_image_url(cfg: &PublicImageConfig, prompt: &str) -> anyhow::Result<Url> {
    let mut url = Url::parse(&cfg.base_url)
        .with_context(|| format!("invalid public image base url: {}", cfg.base_url))?;

    url.path_segments_mut()
        .map_err(|_| anyhow!("public image base url cannot have a path: {}", cfg.base_url))?
        .pop_if_empty()
        .push("prompt")
        .push(prompt);

    url.query_pairs_mut()
        .append_pair("width", &cfg.width.to_string())
        .append_pair("height", &cfg.height.to_string())
        .append_pair("seed", &cfg.seed.to_string())
        .append_pair("nologo", "true");

    Ok(url)
}

pub fn build_public_image_request(
    cfg: &PublicImageConfig,
    prompt: &str,
) -> anyhow::Result<HttpRequest> {
    let url = build_public_image_url(cfg, prompt)?;
    Ok(HttpRequest::get(url.as_str())
        .with_header("Accept", "image/*")
        .with_timeout_secs(POLLINATIONS_TIMEOUT_SECS))
}

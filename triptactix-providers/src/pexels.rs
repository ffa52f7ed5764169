use crate::request::{HttpRequest, join_url};
use anyhow::Context;
use url::Url;

pub const PEXELS_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, PartialEq, Eq)]
pub struct PexelsConfig {
    pub base_url: String,
    pub api_key: String,
}

impl std::fmt::Debug for PexelsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PexelsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// One landscape photo for a free-text query. Pexels takes the raw key, no `Bearer`.
pub fn build_photo_search_request(cfg: &PexelsConfig, query: &str) -> anyhow::Result<HttpRequest> {
    let endpoint = join_url(&cfg.base_url, "/v1/search");
    let url = Url::parse_with_params(
        &endpoint,
        &[
            ("query", query),
            ("per_page", "1"),
            ("orientation", "landscape"),
        ],
    )
    .with_context(|| format!("invalid photo search url: {endpoint}"))?;

    Ok(HttpRequest::get(url.as_str())
        .with_header("Authorization", cfg.api_key.clone())
        .with_timeout_secs(PEXELS_TIMEOUT_SECS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_search_with_raw_key() {
        let cfg = PexelsConfig {
            base_url: "https://api.pexels.com".into(),
            api_key: "px".into(),
        };
        let req = build_photo_search_request(&cfg, "Louvre Museum").unwrap();
        assert_eq!(
            req.url,
            "https://api.pexels.com/v1/search?query=Louvre+Museum&per_page=1&orientation=landscape"
        );
        assert_eq!(req.header("authorization"), Some("px"));
        assert_eq!(req.timeout_secs, PEXELS_TIMEOUT_SECS);
    }
}

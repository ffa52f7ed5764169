use anyhow::{Context, anyhow};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::Value;
use triptactix_core::{GeneratedImage, StockPhoto};

#[derive(Debug, Deserialize)]
struct CohereGenerateResponse {
    #[serde(default)]
    generations: Vec<CohereGeneration>,
}

#[derive(Debug, Deserialize)]
struct CohereGeneration {
    text: String,
}

/// Text of the first generation.
pub fn parse_cohere_generation(body: &[u8]) -> anyhow::Result<String> {
    let resp: CohereGenerateResponse =
        serde_json::from_slice(body).context("decode Cohere JSON")?;
    resp.generations
        .into_iter()
        .next()
        .map(|g| g.text)
        .ok_or_else(|| anyhow!("no generations in Cohere response"))
}

fn decode_data_url(value: &str) -> anyhow::Result<GeneratedImage> {
    let (meta, payload) = value
        .split_once(',')
        .ok_or_else(|| anyhow!("invalid data URL image payload"))?;
    let content_type = meta
        .trim()
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .unwrap_or("image/png")
        .to_string();
    let bytes = BASE64
        .decode(payload.trim().as_bytes())
        .context("data URL base64 decode failed")?;
    Ok(GeneratedImage::Bytes {
        content_type,
        bytes,
    })
}

fn looks_http(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Reads `data[0]` of a Space predict response.
///
/// Spaces answer with a data URL, a plain URL, or a file object carrying `url` or a
/// server-local `path` (served under `{space_url}/file=`).
pub fn parse_space_image(body: &[u8], space_url: &str) -> anyhow::Result<GeneratedImage> {
    let resp: Value = serde_json::from_slice(body).context("decode Space JSON")?;
    let first = resp
        .get("data")
        .and_then(Value::as_array)
        .and_then(|data| data.first())
        .ok_or_else(|| anyhow!("missing data[0] in Space response"))?;

    match first {
        Value::String(s) if s.trim().starts_with("data:image/") => decode_data_url(s.trim()),
        Value::String(s) if looks_http(s.trim()) => Ok(GeneratedImage::Url(s.trim().to_string())),
        Value::Object(obj) => {
            if let Some(url) = obj.get("url").and_then(Value::as_str).filter(|u| looks_http(u)) {
                return Ok(GeneratedImage::Url(url.to_string()));
            }
            if let Some(path) = obj.get("path").and_then(Value::as_str) {
                let base = space_url.trim_end_matches('/');
                return Ok(GeneratedImage::Url(format!("{base}/file={path}")));
            }
            Err(anyhow!("Space file object has neither url nor path"))
        }
        _ => Err(anyhow!("unrecognized data[0] payload in Space response")),
    }
}

#[derive(Debug, Deserialize)]
struct PexelsSearchResponse {
    #[serde(default)]
    photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
struct PexelsPhoto {
    photographer: String,
    photographer_url: String,
    src: PexelsSrc,
}

#[derive(Debug, Deserialize)]
struct PexelsSrc {
    large: String,
}

/// First search hit, or `None` when the search came back empty.
pub fn parse_pexels_photo(body: &[u8]) -> anyhow::Result<Option<StockPhoto>> {
    let resp: PexelsSearchResponse = serde_json::from_slice(body).context("decode Pexels JSON")?;
    Ok(resp.photos.into_iter().next().map(|p| StockPhoto {
        image_url: p.src.large,
        photographer: p.photographer,
        profile_url: p.photographer_url,
    }))
}

use crate::image::{FALLBACK_PHOTO_URL, PLACEHOLDER_IMAGE_URL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItinerarySettings {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,

    // Prefix for transport errors shown to the user, e.g. "Cohere API error: ...".
    pub provider_label: String,
}

impl Default for ItinerarySettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.cohere.ai".into(),
            model: "command-r-plus".into(),
            temperature: 0.7,
            max_tokens: 1500,
            provider_label: "Cohere API".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSettings {
    pub enabled: bool,
    pub space_url: String,
    pub inference_base_url: String,

    // Tried in order by the direct-model strategy.
    pub direct_models: Vec<String>,

    pub public_base_url: String,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub placeholder_url: String,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            space_url: "https://stabilityai-stable-diffusion-3-5-large.hf.space".into(),
            inference_base_url: "https://api-inference.huggingface.co".into(),
            direct_models: vec![
                "stabilityai/stable-diffusion-xl-base-1.0".into(),
                "runwayml/stable-diffusion-v1-5".into(),
                "CompVis/stable-diffusion-v1-4".into(),
            ],
            public_base_url: "https://image.pollinations.ai".into(),
            width: 768,
            height: 512,
            seed: 42,
            placeholder_url: PLACEHOLDER_IMAGE_URL.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSettings {
    pub enabled: bool,
    pub base_url: String,
    pub fallback_url: String,
}

impl Default for PhotoSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.pexels.com".into(),
            fallback_url: FALLBACK_PHOTO_URL.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub itinerary: ItinerarySettings,
    #[serde(default)]
    pub images: ImageSettings,
    #[serde(default)]
    pub photos: PhotoSettings,
}

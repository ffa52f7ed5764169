use serde::{Deserialize, Serialize};

/// Shown when every image strategy failed.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://placehold.co/768x512/png?text=TripTactix";

/// Used when a stock photo cannot be found for an activity.
pub const FALLBACK_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=300&fit=crop";

/// An image produced by one of the generation strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedImage {
    Bytes { content_type: String, bytes: Vec<u8> },
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageResult {
    Bytes {
        content_type: String,
        #[serde(skip)]
        bytes: Vec<u8>,
    },
    Url { url: String },
    Placeholder { url: String },
}

impl ImageResult {
    pub fn placeholder(url: impl Into<String>) -> Self {
        ImageResult::Placeholder { url: url.into() }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageResult::Placeholder { .. })
    }
}

impl From<GeneratedImage> for ImageResult {
    fn from(image: GeneratedImage) -> Self {
        match image {
            GeneratedImage::Bytes {
                content_type,
                bytes,
            } => ImageResult::Bytes {
                content_type,
                bytes,
            },
            GeneratedImage::Url(url) => ImageResult::Url { url },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPhoto {
    pub image_url: String,
    pub photographer: String,
    pub profile_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhotoResult {
    Attributed(StockPhoto),
    Fallback { url: String },
}

impl PhotoResult {
    pub fn url(&self) -> &str {
        match self {
            PhotoResult::Attributed(p) => &p.image_url,
            PhotoResult::Fallback { url } => url,
        }
    }
}

pub fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
        .unwrap_or(false)
}

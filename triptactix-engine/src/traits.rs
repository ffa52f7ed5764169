use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use triptactix_core::{GeneratedImage, StockPhoto};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub text: String,
    pub provider: String,
    pub model: String,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> anyhow::Result<Generation>;
}

/// The three image back ends. Each call is independent and may fail; ordering and fallback
/// live in `images::ImageFallbackChain`, not here.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate_via_hosted_space(&self, prompt: &str) -> anyhow::Result<GeneratedImage>;

    async fn generate_via_direct_model(
        &self,
        prompt: &str,
        model_id: &str,
    ) -> anyhow::Result<GeneratedImage>;

    async fn generate_via_public_endpoint(&self, prompt: &str) -> anyhow::Result<GeneratedImage>;
}

#[async_trait]
pub trait PhotoLookup: Send + Sync {
    /// `Ok(None)` means the search ran and found nothing.
    async fn lookup(&self, query: &str) -> anyhow::Result<Option<StockPhoto>>;
}

use triptactix_core::{GeneratedImage, ImageSettings};
use triptactix_engine::StrategyFailure;
use triptactix_engine::traits::ImageProvider;
use triptactix_providers::huggingface::{build_model_request, build_space_request};
use triptactix_providers::parse::parse_space_image;
use triptactix_providers::pollinations::{PublicImageConfig, build_public_image_request};
use triptactix_providers::runtime::{HttpResponse, execute};

use crate::secrets::SecretKey;

/// Image back ends over HTTP: Hugging Face Space, Hugging Face inference, Pollinations.
#[derive(Clone)]
pub struct HttpImageProvider {
    settings: ImageSettings,
    hf_token: Option<String>,
}

impl std::fmt::Debug for HttpImageProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageProvider")
            .field("settings", &self.settings)
            .field("hf_token", &self.hf_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpImageProvider {
    pub fn new(settings: ImageSettings, hf_token: Option<String>) -> Self {
        Self { settings, hf_token }
    }

    fn hf_token(&self) -> Result<&str, StrategyFailure> {
        self.hf_token
            .as_deref()
            .ok_or(StrategyFailure::MissingCredential(
                SecretKey::HuggingFaceToken.env_var(),
            ))
    }
}

fn ensure_success(resp: &HttpResponse) -> Result<(), StrategyFailure> {
    if resp.is_success() {
        Ok(())
    } else {
        Err(StrategyFailure::BadStatus {
            status: resp.status,
            body: resp.body_preview(),
        })
    }
}

fn image_bytes(resp: HttpResponse) -> Result<GeneratedImage, StrategyFailure> {
    ensure_success(&resp)?;
    if !resp.is_image() {
        return Err(StrategyFailure::NotAnImage(resp.content_type));
    }
    Ok(GeneratedImage::Bytes {
        content_type: resp.content_type.unwrap_or_else(|| "image/png".into()),
        bytes: resp.body,
    })
}

#[async_trait::async_trait]
impl ImageProvider for HttpImageProvider {
    async fn generate_via_hosted_space(&self, prompt: &str) -> anyhow::Result<GeneratedImage> {
        let token = self.hf_token()?;
        let req = build_space_request(&self.settings.space_url, token, prompt);
        log::debug!("space request: {req:?}");
        let resp = execute(&req).await?;
        ensure_success(&resp)?;

        parse_space_image(&resp.body, &self.settings.space_url)
            .map_err(|e| StrategyFailure::MissingPayload(format!("{e:#}")).into())
    }

    async fn generate_via_direct_model(
        &self,
        prompt: &str,
        model_id: &str,
    ) -> anyhow::Result<GeneratedImage> {
        let token = self.hf_token()?;
        let req = build_model_request(&self.settings.inference_base_url, token, model_id, prompt);
        log::debug!("direct model request: {req:?}");
        Ok(image_bytes(execute(&req).await?)?)
    }

    async fn generate_via_public_endpoint(&self, prompt: &str) -> anyhow::Result<GeneratedImage> {
        let cfg = PublicImageConfig {
            base_url: self.settings.public_base_url.clone(),
            width: self.settings.width,
            height: self.settings.height,
            seed: self.settings.seed,
        };
        let req = build_public_image_request(&cfg, prompt)?;
        log::debug!("public image request: {req:?}");
        Ok(image_bytes(execute(&req).await?)?)
    }
}

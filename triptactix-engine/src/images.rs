use crate::error::StrategyFailure;
use crate::traits::ImageProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use triptactix_core::{GeneratedImage, ImageResult, ImageSettings, TripPreferences, build_image_prompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageStrategy {
    HostedSpace,
    DirectModel,
    PublicEndpoint,
}

impl ImageStrategy {
    /// Priority order; the first strategy to produce an image wins.
    pub const ORDER: [ImageStrategy; 3] = [
        ImageStrategy::HostedSpace,
        ImageStrategy::DirectModel,
        ImageStrategy::PublicEndpoint,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImageStrategy::HostedSpace => "hosted-space",
            ImageStrategy::DirectModel => "direct-model",
            ImageStrategy::PublicEndpoint => "public-endpoint",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyAttempt {
    pub strategy: ImageStrategy,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReport {
    pub result: ImageResult,

    // `None` when the placeholder was used.
    pub strategy: Option<ImageStrategy>,
    pub failures: Vec<StrategyAttempt>,
}

pub struct ImageFallbackChain {
    provider: Arc<dyn ImageProvider>,
    direct_models: Vec<String>,
    placeholder_url: String,
}

impl ImageFallbackChain {
    pub fn new(provider: Arc<dyn ImageProvider>, settings: &ImageSettings) -> Self {
        Self {
            provider,
            direct_models: settings.direct_models.clone(),
            placeholder_url: settings.placeholder_url.clone(),
        }
    }

    pub async fn generate_trip_image(&self, prefs: &TripPreferences) -> ImageResult {
        self.generate_with_report(prefs).await.result
    }

    /// Tries each strategy in order and stops at the first image.
    ///
    /// Cannot fail: every strategy error is logged and recorded, and exhausting the list
    /// yields the placeholder.
    pub async fn generate_with_report(&self, prefs: &TripPreferences) -> ImageReport {
        let prompt = build_image_prompt(prefs);
        let mut failures = vec![];

        for strategy in ImageStrategy::ORDER {
            match self.attempt(strategy, &prompt).await {
                Ok(image) => {
                    log::info!("trip image generated via {}", strategy.as_str());
                    return ImageReport {
                        result: image.into(),
                        strategy: Some(strategy),
                        failures,
                    };
                }
                Err(e) => {
                    log::warn!("image strategy {} failed: {e:#}", strategy.as_str());
                    failures.push(StrategyAttempt {
                        strategy,
                        error: format!("{e:#}"),
                    });
                }
            }
        }

        log::warn!("all image strategies failed; using placeholder");
        ImageReport {
            result: ImageResult::placeholder(self.placeholder_url.clone()),
            strategy: None,
            failures,
        }
    }

    async fn attempt(
        &self,
        strategy: ImageStrategy,
        prompt: &str,
    ) -> anyhow::Result<GeneratedImage> {
        match strategy {
            ImageStrategy::HostedSpace => self.provider.generate_via_hosted_space(prompt).await,
            ImageStrategy::DirectModel => self.try_direct_models(prompt).await,
            ImageStrategy::PublicEndpoint => {
                self.provider.generate_via_public_endpoint(prompt).await
            }
        }
    }

    async fn try_direct_models(&self, prompt: &str) -> anyhow::Result<GeneratedImage> {
        if self.direct_models.is_empty() {
            return Err(StrategyFailure::NoCandidates.into());
        }

        for model_id in &self.direct_models {
            match self.provider.generate_via_direct_model(prompt, model_id).await {
                Ok(image) => {
                    log::info!("direct model {model_id} produced an image");
                    return Ok(image);
                }
                // Another model id won't fix a missing token.
                Err(e) if StrategyFailure::is_missing_credential(&e) => return Err(e),
                Err(e) => log::debug!("direct model {model_id} failed, trying next: {e:#}"),
            }
        }

        Err(StrategyFailure::CandidatesExhausted(self.direct_models.len()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use triptactix_core::PLACEHOLDER_IMAGE_URL;

    #[derive(Default)]
    struct ScriptedProvider {
        space: Option<GeneratedImage>,
        // Model ids that succeed.
        good_models: Vec<String>,
        public: Option<GeneratedImage>,
        missing_token: bool,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait::async_trait]
    impl ImageProvider for ScriptedProvider {
        async fn generate_via_hosted_space(&self, _prompt: &str) -> anyhow::Result<GeneratedImage> {
            self.record("space".into());
            if self.missing_token {
                return Err(StrategyFailure::MissingCredential("HUGGINGFACE_API_TOKEN").into());
            }
            self.space
                .clone()
                .ok_or_else(|| StrategyFailure::MissingPayload("data[0]".into()).into())
        }

        async fn generate_via_direct_model(
            &self,
            _prompt: &str,
            model_id: &str,
        ) -> anyhow::Result<GeneratedImage> {
            self.record(format!("model:{model_id}"));
            if self.missing_token {
                return Err(StrategyFailure::MissingCredential("HUGGINGFACE_API_TOKEN").into());
            }
            if self.good_models.iter().any(|m| m == model_id) {
                Ok(GeneratedImage::Bytes {
                    content_type: "image/png".into(),
                    bytes: model_id.as_bytes().to_vec(),
                })
            } else {
                Err(StrategyFailure::NotAnImage(Some("application/json".into())).into())
            }
        }

        async fn generate_via_public_endpoint(
            &self,
            _prompt: &str,
        ) -> anyhow::Result<GeneratedImage> {
            self.record("public".into());
            self.public
                .clone()
                .ok_or_else(|| StrategyFailure::BadStatus { status: 502, body: "bad gateway".into() }.into())
        }
    }

    fn settings() -> ImageSettings {
        ImageSettings {
            direct_models: vec!["m1".into(), "m2".into(), "m3".into()],
            ..ImageSettings::default()
        }
    }

    fn prefs() -> TripPreferences {
        TripPreferences::new("Lisbon", 3).unwrap()
    }

    #[tokio::test]
    async fn all_strategies_failing_yields_placeholder() {
        let provider = Arc::new(ScriptedProvider::default());
        let chain = ImageFallbackChain::new(provider.clone(), &settings());

        let report = chain.generate_with_report(&prefs()).await;
        assert_eq!(report.result, ImageResult::placeholder(PLACEHOLDER_IMAGE_URL));
        assert_eq!(report.strategy, None);
        assert_eq!(
            report.failures.iter().map(|f| f.strategy).collect::<Vec<_>>(),
            ImageStrategy::ORDER.to_vec()
        );
        assert_eq!(report.failures[1].error, "all 3 model candidates failed");

        assert_eq!(
            *provider.calls.lock().unwrap(),
            vec!["space", "model:m1", "model:m2", "model:m3", "public"]
        );
    }

    #[tokio::test]
    async fn first_success_stops_the_chain() {
        let provider = Arc::new(ScriptedProvider {
            space: Some(GeneratedImage::Url("https://space/img.png".into())),
            public: Some(GeneratedImage::Url("https://public/img.png".into())),
            ..Default::default()
        });
        let chain = ImageFallbackChain::new(provider.clone(), &settings());

        let report = chain.generate_with_report(&prefs()).await;
        assert_eq!(
            report.result,
            ImageResult::Url {
                url: "https://space/img.png".into()
            }
        );
        assert_eq!(report.strategy, Some(ImageStrategy::HostedSpace));
        assert!(report.failures.is_empty());
        assert_eq!(*provider.calls.lock().unwrap(), vec!["space"]);
    }

    #[tokio::test]
    async fn direct_model_tries_candidates_in_order() {
        let provider = Arc::new(ScriptedProvider {
            good_models: vec!["m2".into(), "m3".into()],
            ..Default::default()
        });
        let chain = ImageFallbackChain::new(provider.clone(), &settings());

        let report = chain.generate_with_report(&prefs()).await;
        assert_eq!(report.strategy, Some(ImageStrategy::DirectModel));
        assert_eq!(
            report.result,
            ImageResult::Bytes {
                content_type: "image/png".into(),
                bytes: b"m2".to_vec()
            }
        );
        assert_eq!(
            *provider.calls.lock().unwrap(),
            vec!["space", "model:m1", "model:m2"]
        );
    }

    #[tokio::test]
    async fn missing_token_skips_remaining_models() {
        let provider = Arc::new(ScriptedProvider {
            missing_token: true,
            public: Some(GeneratedImage::Url("https://public/img.png".into())),
            ..Default::default()
        });
        let chain = ImageFallbackChain::new(provider.clone(), &settings());

        let result = chain.generate_trip_image(&prefs()).await;
        assert_eq!(
            result,
            ImageResult::Url {
                url: "https://public/img.png".into()
            }
        );
        assert_eq!(
            *provider.calls.lock().unwrap(),
            vec!["space", "model:m1", "public"]
        );
    }

    #[tokio::test]
    async fn empty_model_list_fails_direct_strategy() {
        let provider = Arc::new(ScriptedProvider::default());
        let cfg = ImageSettings {
            direct_models: vec![],
            ..ImageSettings::default()
        };
        let chain = ImageFallbackChain::new(provider, &cfg);

        let report = chain.generate_with_report(&prefs()).await;
        assert!(report.result.is_placeholder());
        assert_eq!(report.failures[1].error, "no model candidates configured");
    }
}

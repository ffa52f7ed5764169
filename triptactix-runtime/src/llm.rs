use triptactix_engine::traits::{Generation, TextGenerator};
use triptactix_providers::cohere::{CohereConfig, build_generate_request};

#[derive(Clone)]
pub struct CohereTextGenerator {
    cfg: CohereConfig,
}

impl std::fmt::Debug for CohereTextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CohereTextGenerator")
            .field("cfg", &self.cfg)
            .finish()
    }
}

impl CohereTextGenerator {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            cfg: CohereConfig {
                base_url: base_url.into(),
                api_key: api_key.into(),
                model: model.into(),
            },
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for CohereTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> anyhow::Result<Generation> {
        let req = build_generate_request(&self.cfg, prompt, temperature, max_tokens);
        log::debug!("cohere request: {req:?}");
        let resp = triptactix_providers::runtime::execute(&req).await?;

        if !resp.is_success() {
            return Err(anyhow::anyhow!(
                "status={} body={}",
                resp.status,
                resp.body_preview()
            ));
        }

        let text = triptactix_providers::parse::parse_cohere_generation(&resp.body)?;
        Ok(Generation {
            text,
            provider: "cohere".into(),
            model: self.cfg.model.clone(),
        })
    }
}

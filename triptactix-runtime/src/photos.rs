use triptactix_core::StockPhoto;
use triptactix_engine::traits::PhotoLookup;
use triptactix_providers::parse::parse_pexels_photo;
use triptactix_providers::pexels::{PexelsConfig, build_photo_search_request};

#[derive(Debug, Clone)]
pub struct PexelsPhotoLookup {
    cfg: PexelsConfig,
}

impl PexelsPhotoLookup {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            cfg: PexelsConfig {
                base_url: base_url.into(),
                api_key: api_key.into(),
            },
        }
    }
}

#[async_trait::async_trait]
impl PhotoLookup for PexelsPhotoLookup {
    async fn lookup(&self, query: &str) -> anyhow::Result<Option<StockPhoto>> {
        let req = build_photo_search_request(&self.cfg, query)?;
        log::debug!("pexels request: {req:?}");
        let resp = triptactix_providers::runtime::execute(&req).await?;

        if !resp.is_success() {
            return Err(anyhow::anyhow!(
                "Pexels search failed: status={} body={}",
                resp.status,
                resp.body_preview()
            ));
        }

        parse_pexels_photo(&resp.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_attributed_photo() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("query", "Eiffel Tower"))
            .and(query_param("per_page", "1"))
            .and(query_param("orientation", "landscape"))
            .and(header("authorization", "px"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "photos": [{
                    "photographer": "Ana",
                    "photographer_url": "https://pexels.com/@ana",
                    "src": {"large": "https://images.pexels.com/1.jpg"}
                }]
            })))
            .mount(&server)
            .await;

        let lookup = PexelsPhotoLookup::new(server.uri(), "px");
        let photo = lookup.lookup("Eiffel Tower").await.unwrap().unwrap();
        assert_eq!(photo.photographer, "Ana");
        assert_eq!(photo.image_url, "https://images.pexels.com/1.jpg");
    }

    #[tokio::test]
    async fn unauthorized_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let lookup = PexelsPhotoLookup::new(server.uri(), "px");
        let err = lookup.lookup("x").await.unwrap_err();
        assert!(err.to_string().contains("status=401"));
    }
}

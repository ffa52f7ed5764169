use std::sync::Arc;

use triptactix_core::config::AppConfig;
use triptactix_engine::images::ImageFallbackChain;
use triptactix_engine::itinerary::ItineraryRequester;
use triptactix_engine::photos::ActivityPhotos;
use triptactix_engine::planner::{PlannerConfig, TripPlanner};
use triptactix_engine::traits::{ImageProvider, PhotoLookup, TextGenerator};

use crate::credentials::Credentials;
use crate::images::HttpImageProvider;
use crate::llm::CohereTextGenerator;
use crate::photos::PexelsPhotoLookup;

/// Build a runnable planner from config + resolved credentials.
///
/// This keeps the CLI thin.
pub fn build_planner_from_config(cfg: &AppConfig, creds: &Credentials) -> TripPlanner {
    let generator: Arc<dyn TextGenerator> = Arc::new(CohereTextGenerator::new(
        cfg.itinerary.base_url.clone(),
        creds.cohere_api_key.clone(),
        cfg.itinerary.model.clone(),
    ));

    // No key: skip the lookup entirely rather than sending unauthenticated searches.
    let lookup: Option<Arc<dyn PhotoLookup>> = creds.pexels_api_key.as_ref().map(|key| {
        Arc::new(PexelsPhotoLookup::new(cfg.photos.base_url.clone(), key.clone()))
            as Arc<dyn PhotoLookup>
    });

    let images: Arc<dyn ImageProvider> = Arc::new(HttpImageProvider::new(
        cfg.images.clone(),
        creds.huggingface_token.clone(),
    ));

    TripPlanner::new(
        PlannerConfig {
            photos_enabled: cfg.photos.enabled,
            images_enabled: cfg.images.enabled,
        },
        ItineraryRequester::new(generator, &cfg.itinerary),
        ActivityPhotos::new(lookup, cfg.photos.fallback_url.clone()),
        ImageFallbackChain::new(images, &cfg.images),
    )
}

use crate::images::ImageFallbackChain;
use crate::itinerary::ItineraryRequester;
use crate::photos::ActivityPhotos;
use crate::plan::{PlanStage, TripPlan, ms};
use std::future::Future;
use std::time::Instant;
use triptactix_core::TripPreferences;

const STAGE_ITINERARY: &str = "itinerary";
const STAGE_PHOTOS: &str = "photos";
const STAGE_IMAGE: &str = "image";
const STAGE_DONE: &str = "done";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    pub photos_enabled: bool,
    pub images_enabled: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            photos_enabled: true,
            images_enabled: true,
        }
    }
}

pub struct TripPlanner {
    cfg: PlannerConfig,
    requester: ItineraryRequester,
    photos: ActivityPhotos,
    images: ImageFallbackChain,
}

impl TripPlanner {
    pub fn new(
        cfg: PlannerConfig,
        requester: ItineraryRequester,
        photos: ActivityPhotos,
        images: ImageFallbackChain,
    ) -> Self {
        Self {
            cfg,
            requester,
            photos,
            images,
        }
    }

    /// Runs itinerary -> photos -> image, one after another.
    pub async fn plan(&self, prefs: &TripPreferences) -> TripPlan {
        self.plan_with_hook(prefs, |_stage| async {}).await
    }

    /// Same as `plan`, but emits a stage hook as the pipeline progresses.
    ///
    /// The hook is intended for progress display and must be fast.
    pub async fn plan_with_hook<F, Fut>(&self, prefs: &TripPreferences, on_stage: F) -> TripPlan
    where
        F: Fn(&'static str) -> Fut,
        Fut: Future<Output = ()>,
    {
        // 1) Itinerary
        on_stage(STAGE_ITINERARY).await;
        let t0 = Instant::now();
        let itinerary = self.requester.request_itinerary(prefs).await;
        let mut plan = TripPlan::new(prefs.clone(), itinerary);
        plan.stage_label = Some(STAGE_ITINERARY.into());
        plan.timings.itinerary_ms = Some(ms(t0.elapsed()));
        log::info!("plan {}: itinerary stage finished", plan.id);

        // 2) Photos, only when there are days to decorate
        let renderable = plan
            .itinerary
            .itinerary()
            .filter(|it| it.is_renderable())
            .cloned();
        if let Some(it) = renderable.filter(|_| self.cfg.photos_enabled) {
            plan.stage = PlanStage::Photos;
            plan.stage_label = Some(STAGE_PHOTOS.into());
            on_stage(STAGE_PHOTOS).await;

            let p0 = Instant::now();
            plan.photos = self.photos.photos_for(&it).await;
            plan.timings.photos_ms = Some(ms(p0.elapsed()));
        }

        // 3) Image
        if self.cfg.images_enabled {
            plan.stage = PlanStage::Image;
            plan.stage_label = Some(STAGE_IMAGE.into());
            on_stage(STAGE_IMAGE).await;

            let i0 = Instant::now();
            plan.image = Some(self.images.generate_with_report(prefs).await);
            plan.timings.image_ms = Some(ms(i0.elapsed()));
        }

        plan.stage = PlanStage::Done;
        plan.stage_label = Some(STAGE_DONE.into());
        on_stage(STAGE_DONE).await;
        log::info!(
            "plan {} done: itinerary={:?}ms photos={:?}ms image={:?}ms",
            plan.id,
            plan.timings.itinerary_ms,
            plan.timings.photos_ms,
            plan.timings.image_ms
        );

        plan
    }
}

use crate::images::ImageReport;
use crate::photos::ActivityPhoto;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use triptactix_core::{ItineraryResult, PlanId, TripPreferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStage {
    Itinerary,
    Photos,
    Image,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanTimings {
    pub itinerary_ms: Option<u64>,
    pub photos_ms: Option<u64>,
    pub image_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub id: PlanId,
    pub stage: PlanStage,

    // A stable string label for display; not derived from `Debug`.
    pub stage_label: Option<String>,

    pub preferences: TripPreferences,
    pub itinerary: ItineraryResult,
    pub photos: Vec<ActivityPhoto>,
    pub image: Option<ImageReport>,
    pub timings: PlanTimings,
}

impl TripPlan {
    pub fn new(preferences: TripPreferences, itinerary: ItineraryResult) -> Self {
        Self {
            id: PlanId::new(),
            stage: PlanStage::Itinerary,
            stage_label: None,
            preferences,
            itinerary,
            photos: vec![],
            image: None,
            timings: PlanTimings::default(),
        }
    }
}

pub fn ms(d: Duration) -> u64 {
    d.as_millis().try_into().unwrap_or(u64::MAX)
}

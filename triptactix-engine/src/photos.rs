use crate::traits::PhotoLookup;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use triptactix_core::{DayNumber, Itinerary, PhotoResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPhoto {
    pub day: DayNumber,
    pub activity: String,
    pub photo: PhotoResult,
}

/// Stock photos per activity. Without a lookup (no API key) everything gets the fallback.
pub struct ActivityPhotos {
    lookup: Option<Arc<dyn PhotoLookup>>,
    fallback_url: String,
}

impl ActivityPhotos {
    pub fn new(lookup: Option<Arc<dyn PhotoLookup>>, fallback_url: impl Into<String>) -> Self {
        Self {
            lookup,
            fallback_url: fallback_url.into(),
        }
    }

    fn fallback(&self) -> PhotoResult {
        PhotoResult::Fallback {
            url: self.fallback_url.clone(),
        }
    }

    pub async fn photo_for(&self, activity: &str) -> PhotoResult {
        let query = activity.trim();
        if query.is_empty() {
            return self.fallback();
        }
        let Some(lookup) = &self.lookup else {
            return self.fallback();
        };

        match lookup.lookup(query).await {
            Ok(Some(photo)) => PhotoResult::Attributed(photo),
            Ok(None) => {
                log::debug!("no stock photo for {query:?}");
                self.fallback()
            }
            Err(e) => {
                log::warn!("stock photo lookup for {query:?} failed: {e:#}");
                self.fallback()
            }
        }
    }

    /// One lookup per activity, in itinerary order.
    pub async fn photos_for(&self, itinerary: &Itinerary) -> Vec<ActivityPhoto> {
        let mut out = vec![];
        for day in itinerary.days() {
            for activity in &day.activities {
                out.push(ActivityPhoto {
                    day: day.day,
                    activity: activity.clone(),
                    photo: self.photo_for(activity).await,
                });
            }
        }
        out
    }
}

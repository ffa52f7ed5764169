use std::fmt::Write as _;
use std::path::Path;
use triptactix_core::{ImageResult, ItineraryResult, PhotoResult};
use triptactix_engine::plan::TripPlan;

/// Plain-text rendering of a plan: itinerary first, then the trip image line.
pub fn render_plan(plan: &TripPlan, saved_image: Option<&Path>) -> String {
    let mut out = String::new();

    match &plan.itinerary {
        ItineraryResult::Error(err) => {
            let _ = writeln!(out, "Error: {}", err.message);
            if let Some(raw) = &err.raw_output {
                let _ = writeln!(out, "\nRaw AI Output\n{raw}");
            }
        }
        ItineraryResult::Itinerary(it) if !it.is_renderable() => {
            let _ = writeln!(
                out,
                "No valid itinerary generated. Please check your API key, try again, or rerun with --json."
            );
        }
        ItineraryResult::Itinerary(it) => {
            let title = it.title.as_deref().unwrap_or("Itinerary");
            let _ = writeln!(out, "{title}\n{}", "=".repeat(title.chars().count()));

            let mut photos = plan.photos.iter();
            for day in it.days() {
                let _ = writeln!(out, "\nDay {}:", day.day);
                for activity in &day.activities {
                    let _ = writeln!(out, "- {activity}");
                    // Photos were collected in the same day/activity order.
                    match photos.next().map(|p| &p.photo) {
                        Some(PhotoResult::Attributed(p)) => {
                            let _ = writeln!(out, "    {}", p.image_url);
                            let _ = writeln!(
                                out,
                                "    Photo by {} ({}) on Pexels",
                                p.photographer, p.profile_url
                            );
                        }
                        Some(PhotoResult::Fallback { url }) => {
                            let _ = writeln!(out, "    {url}");
                        }
                        None => {}
                    }
                }
                if !day.description.is_empty() {
                    let _ = writeln!(out, "{}", day.description);
                }
            }
        }
    }

    if let Some(report) = &plan.image {
        let line = match &report.result {
            ImageResult::Bytes {
                content_type,
                bytes,
            } => match saved_image {
                Some(path) => format!("{} bytes ({content_type}) saved to {}", bytes.len(), path.display()),
                None => format!("{} bytes ({content_type}); use --image-out to save", bytes.len()),
            },
            ImageResult::Url { url } => url.clone(),
            ImageResult::Placeholder { url } => format!("{url} (placeholder)"),
        };
        let _ = writeln!(out, "\nTrip image: {line}");
    }

    out
}

use crate::traits::TextGenerator;
use serde_json::Value;
use std::sync::Arc;
use triptactix_core::{
    Itinerary, ItineraryError, ItineraryResult, ItinerarySettings, TripPreferences,
    build_itinerary_prompt, extract_json, truncate_to_last_brace,
};

/// Turns raw model output into an itinerary, or a structured error carrying what was tried.
///
/// One repair attempt only: if cutting back to the last `}` doesn't parse either, the
/// repaired text is returned as `raw_output` for diagnostics.
pub fn recover_itinerary(text: &str) -> ItineraryResult {
    let content = text.trim();
    let candidate = extract_json(content);

    let first_err = match serde_json::from_str::<Value>(candidate) {
        Ok(value) => return ItineraryResult::Itinerary(Itinerary::from_value(value)),
        Err(e) => e,
    };
    log::debug!("itinerary JSON did not parse ({first_err}); trying truncation repair");

    let repaired = truncate_to_last_brace(candidate);
    match serde_json::from_str::<Value>(repaired) {
        Ok(value) => ItineraryResult::Itinerary(Itinerary::from_value(value)),
        Err(e) => ItineraryResult::Error(ItineraryError {
            message: format!("Failed to parse JSON: {e}"),
            raw_output: Some(repaired.to_string()),
        }),
    }
}

pub struct ItineraryRequester {
    generator: Arc<dyn TextGenerator>,
    temperature: f32,
    max_tokens: u32,
    provider_label: String,
}

impl ItineraryRequester {
    pub fn new(generator: Arc<dyn TextGenerator>, settings: &ItinerarySettings) -> Self {
        Self {
            generator,
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            provider_label: settings.provider_label.clone(),
        }
    }

    /// Never fails: transport and parse problems come back as `ItineraryResult::Error`.
    pub async fn request_itinerary(&self, prefs: &TripPreferences) -> ItineraryResult {
        let prompt = build_itinerary_prompt(prefs);

        let generation = match self
            .generator
            .generate(&prompt, self.temperature, self.max_tokens)
            .await
        {
            Ok(g) => g,
            Err(e) => {
                log::warn!("{} request failed: {e:#}", self.provider_label);
                return ItineraryResult::Error(ItineraryError {
                    message: format!("{} error: {e:#}", self.provider_label),
                    raw_output: None,
                });
            }
        };

        log::debug!(
            "generation from {}/{}: {} chars",
            generation.provider,
            generation.model,
            generation.text.len()
        );
        recover_itinerary(&generation.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Generation;
    use std::sync::Mutex;
    use triptactix_core::DayNumber;

    struct FixedGenerator {
        reply: anyhow::Result<String>,
        seen: Mutex<Vec<(String, f32, u32)>>,
    }

    impl FixedGenerator {
        fn ok(text: &str) -> Self {
            Self {
                reply: Ok(text.into()),
                seen: Mutex::new(vec![]),
            }
        }

        fn failing(msg: &str) -> Self {
            Self {
                reply: Err(anyhow::anyhow!(msg.to_string())),
                seen: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait::async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(
            &self,
            prompt: &str,
            temperature: f32,
            max_tokens: u32,
        ) -> anyhow::Result<Generation> {
            self.seen
                .lock()
                .unwrap()
                .push((prompt.to_string(), temperature, max_tokens));
            match &self.reply {
                Ok(text) => Ok(Generation {
                    text: text.clone(),
                    provider: "fake".into(),
                    model: "fake-1".into(),
                }),
                Err(e) => Err(anyhow::anyhow!(e.to_string())),
            }
        }
    }

    fn prefs() -> TripPreferences {
        TripPreferences::new("Paris", 1).unwrap()
    }

    fn requester(generator: Arc<FixedGenerator>) -> ItineraryRequester {
        ItineraryRequester::new(generator, &ItinerarySettings::default())
    }

    #[tokio::test]
    async fn well_formed_response_becomes_itinerary() {
        let generator = Arc::new(FixedGenerator::ok(
            r#"{"title":"Paris Trip","days":[{"day":1,"activities":["Louvre"],"description":"Art day"}]}"#,
        ));
        let res = requester(generator.clone()).request_itinerary(&prefs()).await;

        let it = res.itinerary().expect("itinerary");
        assert_eq!(it.title.as_deref(), Some("Paris Trip"));
        assert_eq!(it.days().len(), 1);
        assert_eq!(it.days()[0].day, DayNumber::Known(1));

        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1, 0.7);
        assert_eq!(seen[0].2, 1500);
        assert!(seen[0].0.contains("Destination: Paris\n"));
    }

    #[tokio::test]
    async fn truncated_response_without_closing_brace_is_error_with_raw_output() {
        let text = r#"{"title":"Paris Trip","days":[{"day":1,"activities":["Louvre"],"description":"Art"#;
        let res = requester(Arc::new(FixedGenerator::ok(text)))
            .request_itinerary(&prefs())
            .await;

        let err = res.error().expect("error");
        assert!(err.message.starts_with("Failed to parse JSON: "));
        assert_eq!(err.raw_output.as_deref(), Some(text));
    }

    #[tokio::test]
    async fn transport_failure_has_no_raw_output() {
        let res = requester(Arc::new(FixedGenerator::failing("connection refused")))
            .request_itinerary(&prefs())
            .await;

        let err = res.error().expect("error");
        assert_eq!(err.message, "Cohere API error: connection refused");
        assert_eq!(err.raw_output, None);
    }

    #[test]
    fn trailing_garbage_is_trimmed() {
        let res = recover_itinerary(r#"{"title":"Paris Trip","days":[{"day":1}]}EXTRA"#);
        let it = res.itinerary().expect("itinerary");
        assert_eq!(it.title.as_deref(), Some("Paris Trip"));
        assert_eq!(it.days()[0].day, DayNumber::Known(1));
    }

    #[test]
    fn prose_wrapped_response_is_extracted() {
        let res = recover_itinerary(
            "  Here is your plan:\n{\"title\":\"Rome\",\"days\":[]}\nHave fun!  ",
        );
        assert_eq!(res.itinerary().unwrap().title.as_deref(), Some("Rome"));
    }

    #[test]
    fn text_without_opening_brace_is_parsed_as_is() {
        // No `{` at all: extraction is a no-op and the repairer only trims the tail.
        let res = recover_itinerary("42}}} trailing");
        assert!(res.error().is_some());

        let res = recover_itinerary("\"just a string\"");
        assert!(res.itinerary().is_some());
    }

    #[test]
    fn unbalanced_nesting_still_fails_with_prefix_of_response() {
        let text = r#"{"title":"Paris","days":[{"day":1},{"day":2"#;
        let res = recover_itinerary(text);
        let err = res.error().expect("error");
        let raw = err.raw_output.as_deref().unwrap();
        assert_eq!(raw, r#"{"title":"Paris","days":[{"day":1}"#);
        assert!(text.starts_with(raw));
    }

    #[test]
    fn valid_json_missing_days_passes_through() {
        let res = recover_itinerary(r#"{"title":"Only a title"}"#);
        let it = res.itinerary().unwrap();
        assert!(!it.is_renderable());
    }
}

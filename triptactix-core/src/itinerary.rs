use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayNumber {
    Known(i64),
    Unknown,
}

impl DayNumber {
    fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => n.as_i64().map_or(DayNumber::Unknown, DayNumber::Known),
            Some(Value::String(s)) => s
                .trim()
                .parse()
                .map_or(DayNumber::Unknown, DayNumber::Known),
            _ => DayNumber::Unknown,
        }
    }
}

impl std::fmt::Display for DayNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayNumber::Known(n) => write!(f, "{n}"),
            DayNumber::Unknown => f.write_str("?"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: DayNumber,
    pub activities: Vec<String>,
    pub description: String,
}

impl DayPlan {
    fn from_value(value: &Value) -> Self {
        let activities = match value.get("activities") {
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            _ => vec![],
        };

        Self {
            day: DayNumber::from_value(value.get("day")),
            activities,
            description: value
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// A parsed itinerary.
///
/// Nothing is validated beyond "it was JSON": a response missing `days` still lands here, and
/// the parsed value is kept in `raw` for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub title: Option<String>,
    pub days: Option<Vec<DayPlan>>,
    pub raw: Value,
}

impl Itinerary {
    pub fn from_value(raw: Value) -> Self {
        let title = raw.get("title").and_then(Value::as_str).map(str::to_string);
        let days = raw
            .get("days")
            .and_then(Value::as_array)
            .map(|days| days.iter().map(DayPlan::from_value).collect());

        Self { title, days, raw }
    }

    /// True when both a title and a day list came back, i.e. there is something to show.
    pub fn is_renderable(&self) -> bool {
        self.title.is_some() && self.days.is_some()
    }

    pub fn days(&self) -> &[DayPlan] {
        self.days.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryError {
    pub message: String,

    // Always a prefix of the provider response; absent when the call itself failed.
    pub raw_output: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItineraryResult {
    Itinerary(Itinerary),
    Error(ItineraryError),
}

impl ItineraryResult {
    pub fn itinerary(&self) -> Option<&Itinerary> {
        match self {
            ItineraryResult::Itinerary(it) => Some(it),
            ItineraryResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ItineraryError> {
        match self {
            ItineraryResult::Itinerary(_) => None,
            ItineraryResult::Error(e) => Some(e),
        }
    }
}

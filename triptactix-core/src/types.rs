use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const MIN_TRIP_DAYS: u32 = 1;
pub const MAX_TRIP_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(pub Uuid);

impl PlanId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferencesError {
    #[error("number of days must be between 1 and 30, got {0}")]
    DaysOutOfRange(u32),
}

/// What the traveler asked for. Built once from the form and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPreferences {
    destination: String,
    num_days: u32,
    season_or_dates: String,
    people: String,
    interests: String,
}

impl TripPreferences {
    pub fn new(destination: impl Into<String>, num_days: u32) -> Result<Self, PreferencesError> {
        if !(MIN_TRIP_DAYS..=MAX_TRIP_DAYS).contains(&num_days) {
            return Err(PreferencesError::DaysOutOfRange(num_days));
        }

        Ok(Self {
            destination: destination.into(),
            num_days,
            season_or_dates: String::new(),
            people: String::new(),
            interests: String::new(),
        })
    }

    pub fn with_season_or_dates(mut self, value: impl Into<String>) -> Self {
        self.season_or_dates = value.into();
        self
    }

    pub fn with_people(mut self, value: impl Into<String>) -> Self {
        self.people = value.into();
        self
    }

    pub fn with_interests(mut self, value: impl Into<String>) -> Self {
        self.interests = value.into();
        self
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn num_days(&self) -> u32 {
        self.num_days
    }

    pub fn season_or_dates(&self) -> &str {
        &self.season_or_dates
    }

    pub fn people(&self) -> &str {
        &self.people
    }

    pub fn interests(&self) -> &str {
        &self.interests
    }

    /// Prompt labels paired with their values, in the order the provider sees them.
    pub fn labeled_fields(&self) -> [(&'static str, String); 5] {
        [
            ("Destination", self.destination.clone()),
            ("Number of days", self.num_days.to_string()),
            ("Season or dates", self.season_or_dates.clone()),
            ("Group info", self.people.clone()),
            ("Interests", self.interests.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_days() {
        assert_eq!(
            TripPreferences::new("Paris", 0),
            Err(PreferencesError::DaysOutOfRange(0))
        );
        assert_eq!(
            TripPreferences::new("Paris", 31),
            Err(PreferencesError::DaysOutOfRange(31))
        );
        assert!(TripPreferences::new("Paris", 1).is_ok());
        assert!(TripPreferences::new("Paris", 30).is_ok());
    }

    #[test]
    fn labeled_fields_keep_fixed_order() {
        let prefs = TripPreferences::new("Lisbon", 4)
            .unwrap()
            .with_season_or_dates("Spring")
            .with_people("2 adults")
            .with_interests("food");

        let labels: Vec<&str> = prefs.labeled_fields().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                "Destination",
                "Number of days",
                "Season or dates",
                "Group info",
                "Interests"
            ]
        );
        assert_eq!(prefs.labeled_fields()[1].1, "4");
    }
}

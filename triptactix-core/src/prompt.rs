use crate::types::TripPreferences;

const ITINERARY_INSTRUCTIONS: &str = "You are a helpful travel planner that creates a multi-day itinerary based on user preferences. \
Respond in JSON format as a single itinerary. The itinerary should have a 'title' and a 'days' list. \
Each day should include: day number, activity name(s), and a short description. \
Keep descriptions concise and ensure the entire response fits within the token limit. \
Do not include any text outside the JSON.\n\
Please create one unique, concise travel itinerary based on these preferences:\n";

pub fn build_itinerary_prompt(prefs: &TripPreferences) -> String {
    let mut prompt = ITINERARY_INSTRUCTIONS.to_string();

    // Empty fields are left out entirely; the provider never sees a bare label.
    for (label, value) in prefs.labeled_fields() {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        prompt.push_str(label);
        prompt.push_str(": ");
        prompt.push_str(value);
        prompt.push('\n');
    }

    prompt
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() { fallback } else { value }
}

/// One descriptive sentence shared by every image strategy.
pub fn build_image_prompt(prefs: &TripPreferences) -> String {
    let people = or_default(prefs.people(), "travelers");
    let interests = or_default(prefs.interests(), "sightseeing");
    let destination = or_default(prefs.destination(), "a beautiful destination");

    let when = match prefs.season_or_dates().trim() {
        "" => String::new(),
        season => format!(" during {season}"),
    };

    format!(
        "A vibrant, photorealistic travel scene of {people} enjoying {interests} in {destination}{when}, highly detailed."
    )
}

use regex::Regex;
use std::sync::OnceLock;

fn json_span_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Greedy on purpose: first `{` through last `}`. This is not brace-balanced, so two
        // sibling objects or stray braces in trailing prose widen the span.
        Regex::new(r"(?s)\{.*\}").expect("valid json span regex")
    })
}

/// Pulls the JSON-looking span out of model output that may be wrapped in prose.
///
/// Returns the input unchanged when there is no `{` followed somewhere by a `}`.
pub fn extract_json(text: &str) -> &str {
    match json_span_re().find(text) {
        Some(m) => m.as_str(),
        None => text,
    }
}

/// Cuts a JSON candidate back to its last `}`.
///
/// Providers stop at their token limit, often mid-object. The last closing brace is the
/// best guess at a parseable prefix; nested structure before it is not checked.
pub fn truncate_to_last_brace(candidate: &str) -> &str {
    match candidate.rfind('}') {
        Some(idx) => &candidate[..=idx],
        None => candidate,
    }
}

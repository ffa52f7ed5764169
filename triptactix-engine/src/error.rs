use thiserror::Error;

/// Why one image strategy (or one direct-model candidate) gave up.
///
/// Never reaches the caller of the fallback chain; it is logged and the next strategy runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyFailure {
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("unexpected status {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("response is not an image (content type: {})", .0.as_deref().unwrap_or("none"))]
    NotAnImage(Option<String>),

    #[error("missing image payload: {0}")]
    MissingPayload(String),

    #[error("no model candidates configured")]
    NoCandidates,

    #[error("all {0} model candidates failed")]
    CandidatesExhausted(usize),
}

impl StrategyFailure {
    /// True when retrying with another model id cannot help.
    pub fn is_missing_credential(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<StrategyFailure>(),
            Some(StrategyFailure::MissingCredential(_))
        )
    }
}

pub mod cohere;
pub mod huggingface;
pub mod parse;
pub mod pexels;
pub mod pollinations;
pub mod request;
pub mod runtime;

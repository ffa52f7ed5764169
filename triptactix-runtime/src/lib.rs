pub mod config_store;
pub mod credentials;
pub mod images;
pub mod llm;
pub mod photos;
pub mod runtime_engine;
pub mod secrets;

pub use credentials::{ConfigError, Credentials};

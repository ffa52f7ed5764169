pub mod config;
pub mod image;
pub mod itinerary;
pub mod prompt;
pub mod text;
pub mod types;

// Keep the public surface small and intentional.
pub use config::*;
pub use image::*;
pub use itinerary::*;
pub use prompt::*;
pub use text::*;
pub use types::*;

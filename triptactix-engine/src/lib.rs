pub mod error;
pub mod images;
pub mod itinerary;
pub mod photos;
pub mod plan;
pub mod planner;
pub mod traits;

pub use error::StrategyFailure;

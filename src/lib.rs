pub mod assistant;
pub mod config;
pub mod garage;

// Re-export commonly used types
pub use assistant::{match_query, AnswerMatch};
pub use config::Config;
pub use garage::{GarageStore, SavedItem};

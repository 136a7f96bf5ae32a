//! Configuration module for the budget tracker
//!
//! - Path resolution for the data directory and its files
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;

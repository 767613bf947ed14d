//! FitTrack - Fitness Tracker Statistics
//!
//! Turns raw tracker readings for running, race walking and swimming sessions
//! into distance, mean speed and calorie figures, and renders a one-line
//! summary for each session.

pub mod driver;
pub mod metrics;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use metrics::summary::TrainingInfo;
pub use storage::config::AppConfig;
pub use workouts::dispatch::{build_workout, Package, Workout};
pub use workouts::types::{WorkoutError, WorkoutKind};

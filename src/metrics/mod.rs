//! Metrics module for workout summaries.

pub mod summary;

pub use summary::TrainingInfo;

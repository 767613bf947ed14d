//! Workout module: kinds, formulas and tag-based construction.

pub mod dispatch;
pub mod training;
pub mod types;

pub use dispatch::{build_workout, Package, Workout};
pub use training::{RaceWalking, Running, Swimming, Training};
pub use types::{Session, WorkoutError, WorkoutKind};

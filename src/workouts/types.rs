//! Workout kinds, shared session readings and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of workout a tracker session describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    /// Running, counted in steps
    Running,
    /// Race walking, counted in steps
    RaceWalking,
    /// Pool swimming, counted in strokes
    Swimming,
}

impl WorkoutKind {
    /// All supported kinds, in tag lookup order.
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::RaceWalking,
    ];

    /// Short sensor tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::RaceWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name printed in the training summary.
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::RaceWalking => "RaceWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional readings the kind is built from.
    pub fn reading_count(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::RaceWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for WorkoutKind {
    type Err = WorkoutError;

    /// Tags are matched exactly: no trimming, no case folding.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| WorkoutError::UnknownType(tag.to_string()))
    }
}

/// Readings every workout kind shares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps or strokes registered by the tracker
    pub action_count: u32,
    /// Session length in hours
    pub duration: f64,
    /// Athlete weight in kilograms
    pub weight: f64,
}

impl Session {
    /// Create session readings.
    pub fn new(action_count: u32, duration: f64, weight: f64) -> Self {
        Self {
            action_count,
            duration,
            weight,
        }
    }
}

/// Errors raised while turning raw readings into a workout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// Tag does not name a supported workout kind
    #[error("Unknown workout type: {0}")]
    UnknownType(String),

    /// Wrong number of positional readings for the kind
    #[error("{kind} expects {expected} readings, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// A counter reading is not a whole, non-negative number
    #[error("Invalid value for {field}: {value}")]
    InvalidReading { field: &'static str, value: f64 },
}

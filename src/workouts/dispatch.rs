//! Tag-based workout construction.

use crate::metrics::summary::TrainingInfo;
use crate::workouts::training::{RaceWalking, Running, Swimming, Training};
use crate::workouts::types::{Session, WorkoutError, WorkoutKind};
use serde::{Deserialize, Serialize};

/// A workout built from tracker readings.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    RaceWalking(RaceWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Kind of workout.
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(w) => w.kind(),
            Workout::RaceWalking(w) => w.kind(),
            Workout::Swimming(w) => w.kind(),
        }
    }

    /// Shared session readings.
    pub fn session(&self) -> &Session {
        match self {
            Workout::Running(w) => w.session(),
            Workout::RaceWalking(w) => w.session(),
            Workout::Swimming(w) => w.session(),
        }
    }

    /// Distance covered in km.
    pub fn distance(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance(),
            Workout::RaceWalking(w) => w.distance(),
            Workout::Swimming(w) => w.distance(),
        }
    }

    /// Mean speed in km/h.
    pub fn mean_speed(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed(),
            Workout::RaceWalking(w) => w.mean_speed(),
            Workout::Swimming(w) => w.mean_speed(),
        }
    }

    /// Calories spent over the session.
    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::RaceWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }

    /// Summary record with all derived metrics.
    pub fn summary(&self) -> TrainingInfo {
        match self {
            Workout::Running(w) => w.summary(),
            Workout::RaceWalking(w) => w.summary(),
            Workout::Swimming(w) => w.summary(),
        }
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<RaceWalking> for Workout {
    fn from(w: RaceWalking) -> Self {
        Workout::RaceWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}

/// Raw tracker package: a workout tag and its positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Workout tag (`RUN`, `WLK` or `SWM`)
    pub tag: String,
    /// Readings in the order the tag expects
    pub readings: Vec<f64>,
}

impl Package {
    /// Create a package.
    pub fn new(tag: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            tag: tag.into(),
            readings,
        }
    }

    /// Build the workout this package describes.
    pub fn build(&self) -> Result<Workout, WorkoutError> {
        build_workout(&self.tag, &self.readings)
    }
}

/// Build a workout from a tag and its positional readings.
///
/// Readings are laid out as:
/// - `RUN`: action count, duration (h), weight (kg)
/// - `WLK`: action count, duration (h), weight (kg), height (cm)
/// - `SWM`: action count, duration (h), weight (kg), pool length (m), pool laps
///
/// An unrecognised tag returns [`WorkoutError::UnknownType`]; a reading count
/// that does not match the tag returns [`WorkoutError::ArityMismatch`].
pub fn build_workout(tag: &str, readings: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = tag.parse::<WorkoutKind>().inspect_err(|_| {
        tracing::warn!("Unknown workout type: {}", tag);
    })?;

    let expected = kind.reading_count();
    if readings.len() != expected {
        return Err(WorkoutError::ArityMismatch {
            kind,
            expected,
            actual: readings.len(),
        });
    }

    tracing::debug!("Building {} workout from {:?}", kind, readings);

    let action_count = whole_count("action_count", readings[0])?;
    let (duration, weight) = (readings[1], readings[2]);

    let workout: Workout = match kind {
        WorkoutKind::Running => Running::new(action_count, duration, weight).into(),
        WorkoutKind::RaceWalking => {
            RaceWalking::new(action_count, duration, weight, readings[3]).into()
        }
        WorkoutKind::Swimming => {
            let pool_laps = whole_count("pool_laps", readings[4])?;
            Swimming::new(action_count, duration, weight, readings[3], pool_laps).into()
        }
    };

    Ok(workout)
}

/// Convert a counter reading to an integer without losing information.
fn whole_count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidReading { field, value })
    }
}

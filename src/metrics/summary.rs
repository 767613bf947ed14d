//! Training summary record and its text rendering.

use serde::{Deserialize, Serialize};

/// Metrics derived from a single workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingInfo {
    /// Workout name (e.g. "Running")
    training_type: String,
    /// Duration in hours
    duration: f64,
    /// Distance in km
    distance: f64,
    /// Mean speed in km/h
    speed: f64,
    /// Calories spent
    calories: f64,
}

impl TrainingInfo {
    /// Create a summary record.
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    pub fn training_type(&self) -> &str {
        &self.training_type
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    /// Whether every metric is a finite number.
    ///
    /// Zero duration or zero height leave infinite or NaN metrics behind.
    pub fn is_finite(&self) -> bool {
        [self.duration, self.distance, self.speed, self.calories]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Render the one-line tracker message.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for TrainingInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

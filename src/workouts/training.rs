//! Distance, speed and calorie formulas for each workout kind.
//!
//! Shared formulas are default methods on [`Training`]. Each kind overrides
//! only what differs and supplies its own calorie formula, so there is no
//! base calorie formula to call by mistake.

use crate::metrics::summary::TrainingInfo;
use crate::workouts::types::{Session, WorkoutKind};

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Step length for land workouts, in meters.
pub const LEN_STEP_M: f64 = 0.65;

/// Stroke length for swimming, in meters.
pub const LEN_STROKE_M: f64 = 1.38;

/// Metric formulas for a single workout kind.
pub trait Training {
    /// Meters covered per step or stroke.
    const LEN_ACTION_M: f64 = LEN_STEP_M;

    /// Kind of workout.
    fn kind(&self) -> WorkoutKind;

    /// Shared session readings.
    fn session(&self) -> &Session;

    /// Distance covered in km.
    fn distance(&self) -> f64 {
        self.session().action_count as f64 * Self::LEN_ACTION_M / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration
    }

    /// Calories spent over the session.
    fn spent_calories(&self) -> f64;

    /// Collect the derived metrics into a summary record.
    fn summary(&self) -> TrainingInfo {
        TrainingInfo::new(
            self.kind().name(),
            self.session().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

/// Running session.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    /// Create a running session.
    pub fn new(action_count: u32, duration: f64, weight: f64) -> Self {
        Self {
            session: Session::new(action_count, duration, weight),
        }
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let s = &self.session;
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * s.weight
            / M_IN_KM
            * s.duration
            * MIN_IN_H
    }
}

/// Race walking session.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceWalking {
    session: Session,
    /// Athlete height in centimeters
    height: f64,
}

impl RaceWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    /// Create a race walking session.
    pub fn new(action_count: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            session: Session::new(action_count, duration, weight),
            height,
        }
    }

    /// Athlete height in centimeters.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for RaceWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::RaceWalking
    }

    fn session(&self) -> &Session {
        &self.session
    }

    // Squared speed is floor-divided by height in centimeters. For typical
    // walking speeds this term truncates to zero.
    fn spent_calories(&self) -> f64 {
        let s = &self.session;
        let speed_term = floor_div(self.mean_speed().powi(2), self.height);
        (Self::CALORIES_WEIGHT_MULTIPLIER * s.weight
            + speed_term * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * s.weight)
            * s.duration
            * MIN_IN_H
    }
}

/// Pool swimming session.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: Session,
    /// Pool length in meters
    pool_length: f64,
    /// Number of pool lengths swum
    pool_laps: u32,
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    /// Create a swimming session.
    pub fn new(
        action_count: u32,
        duration: f64,
        weight: f64,
        pool_length: f64,
        pool_laps: u32,
    ) -> Self {
        Self {
            session: Session::new(action_count, duration, weight),
            pool_length,
            pool_laps,
        }
    }

    /// Pool length in meters.
    pub fn pool_length(&self) -> f64 {
        self.pool_length
    }

    /// Number of pool lengths swum.
    pub fn pool_laps(&self) -> u32 {
        self.pool_laps
    }
}

impl Training for Swimming {
    const LEN_ACTION_M: f64 = LEN_STROKE_M;

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn session(&self) -> &Session {
        &self.session
    }

    /// Speed comes from pool laps, not from the stroke distance.
    fn mean_speed(&self) -> f64 {
        self.pool_length * self.pool_laps as f64 / M_IN_KM / self.session.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight
    }
}

/// Floor division of floats.
///
/// The quotient is rounded toward negative infinity after removing the
/// remainder, and the remainder takes the sign of the divisor. A zero divisor
/// yields NaN.
pub fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let rem = dividend % divisor;
    let mut div = (dividend - rem) / divisor;
    if rem != 0.0 && ((divisor < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(dividend / divisor);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

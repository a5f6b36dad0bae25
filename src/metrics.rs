//! Metrics engine
//!
//! Derives distance, mean speed and calorie expenditure from a session:
//! - Step-based distance for running and walking
//! - Pool-geometry distance for swimming
//! - Kind-specific calorie formulas
//!
//! Every operation is total. A zero denominator (duration, height, pool
//! geometry) yields zero instead of infinity or NaN.

use std::time::Duration;

use crate::constants::FormulaConstants;
use crate::types::{DerivedMetrics, RunningSession, Session, SwimmingSession, WalkingSession};

const SECS_IN_MIN: f64 = 60.0;

/// Stateless metrics engine over the standard constants table
#[derive(Debug, Clone, Copy)]
pub struct MetricsEngine {
    constants: &'static FormulaConstants,
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsEngine {
    pub fn new() -> Self {
        Self {
            constants: &FormulaConstants::STANDARD,
        }
    }

    pub fn constants(&self) -> &'static FormulaConstants {
        self.constants
    }

    /// Derive all metrics for a session
    pub fn derive(&self, session: &Session) -> DerivedMetrics {
        DerivedMetrics {
            training_type: session.kind().label().to_string(),
            duration_minutes: self.minutes(session.duration()),
            distance_km: self.distance_km(session),
            mean_speed_kmh: self.mean_speed_kmh(session),
            calories_kcal: self.calories_kcal(session),
        }
    }

    /// Distance covered by `action` steps or strokes of `action_length_m` meters, in km
    pub fn action_distance_km(&self, action: u32, action_length_m: f64) -> f64 {
        f64::from(action) * action_length_m / self.constants.m_in_km
    }

    /// Mean speed in km/h, zero when no time has elapsed
    pub fn speed_kmh(&self, distance_km: f64, duration: Duration) -> f64 {
        let hours = self.hours(duration);
        if hours <= 0.0 {
            return 0.0;
        }
        distance_km / hours
    }

    /// Distance covered in km
    pub fn distance_km(&self, session: &Session) -> f64 {
        finite_or_zero(match session {
            Session::Running(s) => self.action_distance_km(s.action, self.constants.step_length_m),
            Session::Walking(s) => self.action_distance_km(s.action, self.constants.step_length_m),
            Session::Swimming(s) => self.pool_distance_km(s),
        })
    }

    /// Mean speed over the whole session in km/h
    pub fn mean_speed_kmh(&self, session: &Session) -> f64 {
        finite_or_zero(match session {
            Session::Swimming(s) if s.pool_length_m == 0 || s.pool_count == 0 => 0.0,
            _ => self.speed_kmh(self.distance_km(session), session.duration()),
        })
    }

    /// Calories burned in kcal
    pub fn calories_kcal(&self, session: &Session) -> f64 {
        finite_or_zero(match session {
            Session::Running(s) => self.running_calories(s),
            Session::Walking(s) => self.walking_calories(s),
            Session::Swimming(s) => self.swimming_calories(s),
        })
    }

    fn pool_distance_km(&self, session: &SwimmingSession) -> f64 {
        f64::from(session.pool_length_m) * f64::from(session.pool_count) / self.constants.m_in_km
    }

    fn running_calories(&self, session: &RunningSession) -> f64 {
        let minutes = self.minutes(session.duration);
        if minutes <= 0.0 {
            return 0.0;
        }
        let k = &self.constants.running;
        let speed = self.mean_speed_kmh(&Session::Running(*session));

        (k.speed_multiplier * speed + k.speed_shift) * session.weight_kg / self.constants.m_in_km
            * minutes
    }

    fn walking_calories(&self, session: &WalkingSession) -> f64 {
        let minutes = self.minutes(session.duration);
        if session.height_cm <= 0.0 || minutes <= 0.0 {
            return 0.0;
        }
        let k = &self.constants.walking;
        let speed = self.mean_speed_kmh(&Session::Walking(*session));
        let height_m = session.height_cm / self.constants.cm_in_m;

        (k.weight_multiplier * session.weight_kg
            + (speed.powi(2) / height_m) * k.speed_height_multiplier * session.weight_kg)
            * minutes
    }

    fn swimming_calories(&self, session: &SwimmingSession) -> f64 {
        if self.minutes(session.duration) <= 0.0 {
            return 0.0;
        }
        let k = &self.constants.swimming;
        let speed = self.mean_speed_kmh(&Session::Swimming(*session));

        (speed + k.speed_shift) * k.weight_multiplier * session.weight_kg
            * self.hours(session.duration)
    }

    fn minutes(&self, duration: Duration) -> f64 {
        duration.as_secs_f64() / SECS_IN_MIN
    }

    fn hours(&self, duration: Duration) -> f64 {
        self.minutes(duration) / self.constants.min_in_hour
    }
}

/// Overflowed or undefined results (subnormal denominators, extreme weights) read as zero
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

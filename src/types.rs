//! Core types for Synheart Workout
//!
//! A training session is a closed sum type over exercise kind. Each variant
//! carries only the fields its formulas read, so every metric is a single
//! exhaustive `match` over [`Session`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Exercise kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingKind {
    Running,
    Walking,
    Swimming,
}

impl TrainingKind {
    /// All supported kinds
    pub const ALL: [TrainingKind; 3] = [
        TrainingKind::Running,
        TrainingKind::Walking,
        TrainingKind::Swimming,
    ];

    /// Label used in the rendered report
    pub fn label(&self) -> &'static str {
        match self {
            TrainingKind::Running => "Running",
            TrainingKind::Walking => "Walking",
            TrainingKind::Swimming => "Swimming",
        }
    }

    /// Resolve a training type label (case-insensitive).
    ///
    /// Returns `None` for anything outside the supported set; callers decide
    /// whether that is an error or a sentinel.
    pub fn from_label(label: &str) -> Option<TrainingKind> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for TrainingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Running session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningSession {
    /// Number of steps
    pub action: u32,
    /// Elapsed time
    pub duration: Duration,
    /// Body weight (kg)
    pub weight_kg: f64,
}

/// Walking session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingSession {
    /// Number of steps
    pub action: u32,
    /// Elapsed time
    pub duration: Duration,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Body height (cm)
    pub height_cm: f64,
}

/// Swimming session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingSession {
    /// Number of strokes
    pub action: u32,
    /// Elapsed time
    pub duration: Duration,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Pool length (meters)
    pub pool_length_m: u32,
    /// Number of pool lengths swum
    pub pool_count: u32,
}

/// One exercise activity with kind-specific inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Session {
    Running(RunningSession),
    Walking(WalkingSession),
    Swimming(SwimmingSession),
}

impl Session {
    pub fn kind(&self) -> TrainingKind {
        match self {
            Session::Running(_) => TrainingKind::Running,
            Session::Walking(_) => TrainingKind::Walking,
            Session::Swimming(_) => TrainingKind::Swimming,
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            Session::Running(s) => s.duration,
            Session::Walking(s) => s.duration,
            Session::Swimming(s) => s.duration,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        match self {
            Session::Running(s) => s.weight_kg,
            Session::Walking(s) => s.weight_kg,
            Session::Swimming(s) => s.weight_kg,
        }
    }
}

impl From<RunningSession> for Session {
    fn from(session: RunningSession) -> Self {
        Session::Running(session)
    }
}

impl From<WalkingSession> for Session {
    fn from(session: WalkingSession) -> Self {
        Session::Walking(session)
    }
}

impl From<SwimmingSession> for Session {
    fn from(session: SwimmingSession) -> Self {
        Session::Swimming(session)
    }
}

/// Metrics derived from a single session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Training type label
    pub training_type: String,
    /// Elapsed time (minutes)
    pub duration_minutes: f64,
    /// Distance covered (km)
    pub distance_km: f64,
    /// Mean speed over the whole session (km/h)
    pub mean_speed_kmh: f64,
    /// Energy expenditure (kcal)
    pub calories_kcal: f64,
}

//! Training record schema
//!
//! The JSON shape of one training session as it arrives from callers
//! (CLI input files, FFI). Kind-specific fields are optional; when absent
//! they default to zero and the metric guards take over.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::error::ComputeError;
use crate::types::{RunningSession, Session, SwimmingSession, TrainingKind, WalkingSession};

const SECS_IN_MIN: f64 = 60.0;

/// One training session in wire form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Training type label ("Running", "Walking", "Swimming")
    pub training_type: String,
    /// Steps or strokes
    #[serde(default)]
    pub action: u32,
    /// Elapsed time (minutes)
    pub duration_minutes: f64,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Body height (cm), walking only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Pool length (meters), swimming only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_length_m: Option<u32>,
    /// Number of pool lengths swum, swimming only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_count: Option<u32>,
}

impl TrainingRecord {
    /// Resolve the training type label
    pub fn kind(&self) -> Option<TrainingKind> {
        TrainingKind::from_label(&self.training_type)
    }

    /// Check that every numeric field is finite and non-negative, and that
    /// the duration fits in a [`Duration`]
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_non_negative("duration_minutes", self.duration_minutes)?;
        if Duration::try_from_secs_f64(self.duration_minutes * SECS_IN_MIN).is_err() {
            return Err(ValidationError::OutOfRange {
                field: "duration_minutes",
            });
        }
        check_non_negative("weight_kg", self.weight_kg)?;
        if let Some(height_cm) = self.height_cm {
            check_non_negative("height_cm", height_cm)?;
        }
        Ok(())
    }

    /// Strict conversion: unknown training types and invalid numbers are errors
    pub fn to_session(&self) -> Result<Session, ComputeError> {
        let kind = self
            .kind()
            .ok_or_else(|| ComputeError::UnknownTrainingType(self.training_type.clone()))?;

        if let Err(e) = self.validate() {
            warn!(training_type = %self.training_type, error = %e, "rejected training record");
            return Err(e.into());
        }

        Ok(self.session_for(kind))
    }

    /// Lenient conversion for an already resolved kind.
    ///
    /// Missing kind-specific fields become zero and a duration that cannot be
    /// represented (negative, NaN) becomes zero.
    pub fn session_for(&self, kind: TrainingKind) -> Session {
        let duration = Duration::try_from_secs_f64(self.duration_minutes * SECS_IN_MIN)
            .unwrap_or(Duration::ZERO);

        match kind {
            TrainingKind::Running => RunningSession {
                action: self.action,
                duration,
                weight_kg: self.weight_kg,
            }
            .into(),
            TrainingKind::Walking => WalkingSession {
                action: self.action,
                duration,
                weight_kg: self.weight_kg,
                height_cm: self.height_cm.unwrap_or(0.0),
            }
            .into(),
            TrainingKind::Swimming => SwimmingSession {
                action: self.action,
                duration,
                weight_kg: self.weight_kg,
                pool_length_m: self.pool_length_m.unwrap_or(0),
                pool_count: self.pool_count.unwrap_or(0),
            }
            .into(),
        }
    }
}

impl From<&Session> for TrainingRecord {
    fn from(session: &Session) -> Self {
        let mut record = TrainingRecord {
            training_type: session.kind().label().to_string(),
            action: 0,
            duration_minutes: session.duration().as_secs_f64() / SECS_IN_MIN,
            weight_kg: session.weight_kg(),
            height_cm: None,
            pool_length_m: None,
            pool_count: None,
        };

        match session {
            Session::Running(s) => record.action = s.action,
            Session::Walking(s) => {
                record.action = s.action;
                record.height_cm = Some(s.height_cm);
            }
            Session::Swimming(s) => {
                record.action = s.action;
                record.pool_length_m = Some(s.pool_length_m);
                record.pool_count = Some(s.pool_count);
            }
        }

        record
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

/// Record validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field {field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("Field {field} is out of range")]
    OutOfRange { field: &'static str },

    #[error("Field {field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

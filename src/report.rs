//! Report rendering
//!
//! Renders derived metrics into the fixed text report. Training types outside
//! the supported set render as [`UNKNOWN_TRAINING_TYPE`] without computing
//! anything.

use std::fmt;

use tracing::debug;

use crate::metrics::MetricsEngine;
use crate::schema::TrainingRecord;
use crate::types::{DerivedMetrics, Session};

/// Report emitted for an unrecognized training type
pub const UNKNOWN_TRAINING_TYPE: &str = "unknown training type\n";

impl fmt::Display for DerivedMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training type: {}", self.training_type)?;
        writeln!(f, "Duration: {:.2} min", self.duration_minutes)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Mean speed: {:.2} km/h", self.mean_speed_kmh)?;
        writeln!(f, "Calories burned: {:.2}", self.calories_kcal)
    }
}

/// Report formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    engine: MetricsEngine,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the report for a training record.
    ///
    /// Never fails: an unknown training type yields the sentinel report.
    pub fn format(&self, record: &TrainingRecord) -> String {
        match record.kind() {
            Some(kind) => self.format_session(&record.session_for(kind)),
            None => {
                debug!(training_type = %record.training_type, "unknown training type");
                UNKNOWN_TRAINING_TYPE.to_string()
            }
        }
    }

    /// Render the report for a typed session
    pub fn format_session(&self, session: &Session) -> String {
        self.engine.derive(session).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RunningSession, SwimmingSession, WalkingSession};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn record(training_type: &str, action: u32, duration_minutes: f64) -> TrainingRecord {
        TrainingRecord {
            training_type: training_type.to_string(),
            action,
            duration_minutes,
            weight_kg: 85.0,
            height_cm: Some(185.0),
            pool_length_m: Some(50),
            pool_count: Some(2),
        }
    }

    #[test]
    fn test_running_report() {
        let report = ReportFormatter::new().format(&record("Running", 4000, 9.0));

        assert_eq!(
            report,
            "Training type: Running\n\
             Duration: 9.00 min\n\
             Distance: 2.60 km.\n\
             Mean speed: 17.33 km/h\n\
             Calories burned: 240.05\n"
        );
    }

    #[test]
    fn test_walking_report() {
        let report = ReportFormatter::new().format(&record("Walking", 4000, 60.0));

        assert_eq!(
            report,
            "Training type: Walking\n\
             Duration: 60.00 min\n\
             Distance: 2.60 km.\n\
             Mean speed: 2.60 km/h\n\
             Calories burned: 718.93\n"
        );
    }

    #[test]
    fn test_swimming_report() {
        let mut swim = record("Swimming", 1000, 15.0);
        swim.pool_length_m = Some(100);
        swim.pool_count = Some(4);

        assert_eq!(
            ReportFormatter::new().format(&swim),
            "Training type: Swimming\n\
             Duration: 15.00 min\n\
             Distance: 0.40 km.\n\
             Mean speed: 1.60 km/h\n\
             Calories burned: 114.75\n"
        );
    }

    #[test]
    fn test_unknown_training_type() {
        let report = ReportFormatter::new().format(&record("Curling", 1000, 300.0));
        assert_eq!(report, UNKNOWN_TRAINING_TYPE);
        assert_eq!(report, "unknown training type\n");
    }

    #[test]
    fn test_format_is_idempotent() {
        let formatter = ReportFormatter::new();
        let walk = record("Walking", 20000, 225.0);

        assert_eq!(formatter.format(&walk), formatter.format(&walk));
    }

    #[test]
    fn test_format_session_matches_record() {
        let formatter = ReportFormatter::new();
        let sessions: [Session; 3] = [
            RunningSession {
                action: 5000,
                duration: Duration::from_secs(30 * 60),
                weight_kg: 85.0,
            }
            .into(),
            WalkingSession {
                action: 20000,
                duration: Duration::from_secs(225 * 60),
                weight_kg: 85.0,
                height_cm: 185.0,
            }
            .into(),
            SwimmingSession {
                action: 2000,
                duration: Duration::from_secs(90 * 60),
                weight_kg: 85.0,
                pool_length_m: 50,
                pool_count: 5,
            }
            .into(),
        ];

        for session in sessions {
            let from_record = formatter.format(&TrainingRecord::from(&session));
            assert_eq!(formatter.format_session(&session), from_record);
        }
    }

    #[test]
    fn test_degenerate_session_renders_zeros() {
        let report = ReportFormatter::new().format(&record("Walking", 0, 0.0));

        assert_eq!(
            report,
            "Training type: Walking\n\
             Duration: 0.00 min\n\
             Distance: 0.00 km.\n\
             Mean speed: 0.00 km/h\n\
             Calories burned: 0.00\n"
        );
    }
}

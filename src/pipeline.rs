//! Pipeline orchestration
//!
//! Public entry points from raw JSON records to rendered reports, plus the
//! fixed demo sessions.

use std::time::Duration;

use tracing::debug;

use crate::error::ComputeError;
use crate::metrics::MetricsEngine;
use crate::report::ReportFormatter;
use crate::schema::TrainingRecord;
use crate::types::{RunningSession, Session, SwimmingSession, WalkingSession};

/// Raw packet fed to the ingestion stub by the demo
pub const DEMO_PACKET: &str = "20250628 12:28:00,5000";

/// Render the text report for a JSON training record.
///
/// # Arguments
/// * `raw_json` - One `TrainingRecord` as JSON
///
/// # Returns
/// The report text, or the unknown-type sentinel when `training_type` is not
/// supported. Malformed JSON and negative or non-finite numbers are errors.
///
/// # Example
/// ```ignore
/// let report = training_report(
///     r#"{"training_type":"Running","action":5000,"duration_minutes":30,"weight_kg":85}"#
///         .to_string(),
/// )?;
/// ```
pub fn training_report(raw_json: String) -> Result<String, ComputeError> {
    let record = parse_record(&raw_json)?;
    Ok(ReportFormatter::new().format(&record))
}

/// Compute metrics for a JSON training record and return them as JSON.
///
/// Unlike [`training_report`], an unknown training type is an error here:
/// there are no metrics to return.
pub fn training_metrics(raw_json: String) -> Result<String, ComputeError> {
    let record = parse_record(&raw_json)?;
    let session = record.to_session()?;
    let metrics = MetricsEngine::new().derive(&session);
    Ok(serde_json::to_string(&metrics)?)
}

/// The three fixed demo sessions, in report order
pub fn demo_sessions() -> [Session; 3] {
    [
        SwimmingSession {
            action: 2000,
            duration: Duration::from_secs(90 * 60),
            weight_kg: 85.0,
            pool_length_m: 50,
            pool_count: 5,
        }
        .into(),
        WalkingSession {
            action: 20000,
            duration: Duration::from_secs((3 * 60 + 45) * 60),
            weight_kg: 85.0,
            height_cm: 185.0,
        }
        .into(),
        RunningSession {
            action: 5000,
            duration: Duration::from_secs(30 * 60),
            weight_kg: 85.0,
        }
        .into(),
    ]
}

/// Reports for the demo sessions, each followed by a blank line
pub fn demo_report() -> String {
    let formatter = ReportFormatter::new();
    demo_sessions()
        .iter()
        .map(|session| formatter.format_session(session) + "\n")
        .collect()
}

fn parse_record(raw_json: &str) -> Result<TrainingRecord, ComputeError> {
    let record: TrainingRecord = serde_json::from_str(raw_json)?;
    record.validate()?;
    debug!(training_type = %record.training_type, "parsed training record");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::UNKNOWN_TRAINING_TYPE;
    use crate::types::DerivedMetrics;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_training_report() {
        let report = training_report(
            r#"{
                "training_type": "Running",
                "action": 5000,
                "duration_minutes": 30,
                "weight_kg": 85
            }"#
            .to_string(),
        )
        .unwrap();

        assert_eq!(
            report,
            "Training type: Running\n\
             Duration: 30.00 min\n\
             Distance: 3.25 km.\n\
             Mean speed: 6.50 km/h\n\
             Calories burned: 302.91\n"
        );
    }

    #[test]
    fn test_training_report_unknown_type() {
        let report = training_report(
            r#"{"training_type": "Curling", "action": 1000, "duration_minutes": 300, "weight_kg": 85}"#
                .to_string(),
        )
        .unwrap();

        assert_eq!(report, UNKNOWN_TRAINING_TYPE);
    }

    #[test]
    fn test_training_report_invalid_json() {
        let result = training_report("not valid json".to_string());
        assert!(matches!(result, Err(ComputeError::JsonError(_))));
    }

    #[test]
    fn test_training_report_negative_weight() {
        let result = training_report(
            r#"{"training_type": "Running", "duration_minutes": 30, "weight_kg": -1}"#.to_string(),
        );
        assert!(matches!(result, Err(ComputeError::InvalidRecord(_))));
    }

    #[test]
    fn test_training_report_duration_out_of_range() {
        let result = training_report(
            r#"{"training_type": "Running", "action": 5000, "duration_minutes": 1e18, "weight_kg": 85}"#
                .to_string(),
        );
        assert!(matches!(result, Err(ComputeError::InvalidRecord(_))));
    }

    #[test]
    fn test_training_report_subnormal_height() {
        let report = training_report(
            r#"{
                "training_type": "Walking",
                "action": 4000,
                "duration_minutes": 60,
                "weight_kg": 85,
                "height_cm": 1e-320
            }"#
            .to_string(),
        )
        .unwrap();

        assert!(report.ends_with("Calories burned: 0.00\n"));
    }

    #[test]
    fn test_training_metrics_extreme_weight_reads_back() {
        let json = training_metrics(
            r#"{"training_type": "Running", "action": 4000, "duration_minutes": 9, "weight_kg": 1e308}"#
                .to_string(),
        )
        .unwrap();

        let metrics: DerivedMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(metrics.calories_kcal, 0.0);
        assert!((metrics.distance_km - 2.6).abs() < 1e-9);
    }

    #[test]
    fn test_training_metrics() {
        let json = training_metrics(
            r#"{
                "training_type": "Swimming",
                "action": 1000,
                "duration_minutes": 15,
                "weight_kg": 85,
                "pool_length_m": 100,
                "pool_count": 4
            }"#
            .to_string(),
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["training_type"], "Swimming");
        assert!((value["distance_km"].as_f64().unwrap() - 0.4).abs() < 1e-9);
        assert!((value["mean_speed_kmh"].as_f64().unwrap() - 1.6).abs() < 1e-9);
        assert!((value["calories_kcal"].as_f64().unwrap() - 114.75).abs() < 1e-9);
    }

    #[test]
    fn test_training_metrics_unknown_type() {
        let result = training_metrics(
            r#"{"training_type": "Curling", "duration_minutes": 10, "weight_kg": 85}"#.to_string(),
        );
        assert!(matches!(result, Err(ComputeError::UnknownTrainingType(_))));
    }

    #[test]
    fn test_demo_report() {
        let expected = "\
Training type: Swimming
Duration: 90.00 min
Distance: 0.25 km.
Mean speed: 0.17 km/h
Calories burned: 323.00

Training type: Walking
Duration: 225.00 min
Distance: 13.00 km.
Mean speed: 3.47 km/h
Calories burned: 4272.27

Training type: Running
Duration: 30.00 min
Distance: 3.25 km.
Mean speed: 6.50 km/h
Calories burned: 302.91

";
        assert_eq!(demo_report(), expected);
    }
}

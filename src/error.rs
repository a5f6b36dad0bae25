//! Error types for Synheart Workout

use thiserror::Error;

use crate::schema::ValidationError;

/// Errors raised at the input boundary (records, packets, FFI).
///
/// Metric computation and report rendering never fail; degenerate inputs
/// resolve to zero and unknown training types to the sentinel report.
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown training type: {0}")]
    UnknownTrainingType(String),

    #[error("Invalid training record: {0}")]
    InvalidRecord(#[from] ValidationError),

    #[error("Failed to decode packet: {0}")]
    PacketError(String),

    #[error("Date parse error: {0}")]
    DateParseError(String),
}

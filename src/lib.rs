//! Synheart Workout - On-device training metrics
//!
//! Workout turns raw training counters (steps or strokes, duration, body
//! weight, height, pool geometry) into derived metrics and a fixed-template
//! text report: session → metrics engine → derived metrics → report.
//!
//! ## Modules
//!
//! - **Metrics**: distance, mean speed and calories per training kind
//! - **Report**: fixed-template text rendering with an unknown-type sentinel
//! - **Schema**: JSON training records and tracker packet ingestion

pub mod constants;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod schema;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use constants::FormulaConstants;
pub use error::ComputeError;
pub use metrics::MetricsEngine;
pub use pipeline::{demo_report, demo_sessions, training_metrics, training_report};
pub use report::{ReportFormatter, UNKNOWN_TRAINING_TYPE};
pub use types::{
    DerivedMetrics, RunningSession, Session, SwimmingSession, TrainingKind, WalkingSession,
};

// Schema exports
pub use schema::{process_packet, Packet, PacketDecoder, PlaceholderDecoder, TrainingRecord};

/// Workout version
pub const WORKOUT_VERSION: &str = env!("CARGO_PKG_VERSION");

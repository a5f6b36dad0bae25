//! Formula constants
//!
//! Unit conversions and empirical coefficients used by the metrics engine.
//! The table is a compile-time constant; the engine closes over a `'static`
//! reference to it and nothing mutates it at runtime.

/// Running calorie coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningCoefficients {
    /// Multiplier applied to mean speed (km/h)
    pub speed_multiplier: f64,
    /// Shift added after the speed term
    pub speed_shift: f64,
}

/// Walking calorie coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingCoefficients {
    /// Baseline burn per kilogram of body weight
    pub weight_multiplier: f64,
    /// Multiplier for the speed²/height term
    pub speed_height_multiplier: f64,
}

/// Swimming calorie coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingCoefficients {
    /// Shift added to mean speed (km/h)
    pub speed_shift: f64,
    /// Multiplier applied to body weight
    pub weight_multiplier: f64,
}

/// Immutable constants table for all training formulas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaConstants {
    /// Meters in a kilometer
    pub m_in_km: f64,
    /// Minutes in an hour
    pub min_in_hour: f64,
    /// Centimeters in a meter
    pub cm_in_m: f64,
    /// Average step length for running and walking (meters)
    pub step_length_m: f64,
    /// Average stroke length for swimming (meters).
    ///
    /// Swimming distance is computed from pool geometry, so this value is
    /// only reachable through [`crate::metrics::MetricsEngine::action_distance_km`].
    pub stroke_length_m: f64,
    pub running: RunningCoefficients,
    pub walking: WalkingCoefficients,
    pub swimming: SwimmingCoefficients,
}

impl FormulaConstants {
    /// The standard constants table
    pub const STANDARD: FormulaConstants = FormulaConstants {
        m_in_km: 1000.0,
        min_in_hour: 60.0,
        cm_in_m: 100.0,
        step_length_m: 0.65,
        stroke_length_m: 1.38,
        running: RunningCoefficients {
            speed_multiplier: 18.0,
            speed_shift: 1.79,
        },
        walking: WalkingCoefficients {
            weight_multiplier: 0.035,
            speed_height_multiplier: 0.029,
        },
        swimming: SwimmingCoefficients {
            speed_shift: 1.1,
            weight_multiplier: 2.0,
        },
    };
}

impl Default for FormulaConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}

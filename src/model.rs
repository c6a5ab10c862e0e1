/// Core data types for the San Joaquin Valley PM2.5 prediction engines.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies — only types.

// ---------------------------------------------------------------------------
// Pollutant parameter codes
// ---------------------------------------------------------------------------

/// EPA AQS parameter code for PM2.5 (local conditions), in µg/m³.
pub const PARAM_PM25: &str = "88101";

// ---------------------------------------------------------------------------
// Observation types
// ---------------------------------------------------------------------------

/// One monitor's reading for a single calendar day: where the monitor sits
/// and what daily AQI it reported. An observation set (all monitors for one
/// date) is the complete input to a kriging fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorObservation {
    /// WGS84 longitude of the monitor.
    pub longitude: f64,
    /// WGS84 latitude of the monitor.
    pub latitude: f64,
    /// Daily PM2.5 AQI reported by the monitor.
    pub aqi: f64,
}

/// A location at which an interpolated value is requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryPoint {
    pub longitude: f64,
    pub latitude: f64,
}

// ---------------------------------------------------------------------------
// Variogram parameters
// ---------------------------------------------------------------------------

/// Spherical variogram parameters for the ordinary-kriging fit.
///
/// These are constants of the deployed system, fitted once against the
/// valley's monitor network — they are not re-estimated per observation set.
/// Distances for the variogram are measured in (longitude, latitude) degree
/// space, the metric the parameters were fitted in; `range` is therefore in
/// degrees, not kilometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariogramParams {
    /// Asymptotic variance reached beyond the decorrelation range.
    pub sill: f64,
    /// Separation distance at which observations decorrelate.
    pub range: f64,
    /// Discontinuity at zero separation (measurement noise).
    pub nugget: f64,
}

// ---------------------------------------------------------------------------
// Prediction types
// ---------------------------------------------------------------------------

/// Result of a single kriging point prediction.
///
/// `variance` is the kriging variance of the estimator. Numerical
/// ill-conditioning can legitimately produce a NaN or negative variance;
/// that is a meaningful output state (confidence unknown), not a failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub value: f64,
    pub variance: f64,
}

/// One predicted cell of an interpolated surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub latitude: f64,
    pub longitude: f64,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise during a spatial (kriging) prediction.
#[derive(Debug, Clone, PartialEq)]
pub enum KrigingError {
    /// The observation set was empty after snapshot filtering.
    NoObservations,
    /// The query point is farther than the admission radius from every
    /// monitor. Expected for points outside the network's coverage —
    /// callers present this as a message, not a failure.
    Rejected { threshold_km: f64 },
    /// The kriging system could not be solved (singular matrix, typically
    /// from duplicate monitor coordinates or too few distinct points).
    FitFailed(String),
}

impl std::fmt::Display for KrigingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KrigingError::NoObservations => {
                write!(f, "No monitor observations available for this date")
            }
            KrigingError::Rejected { threshold_km } => write!(
                f,
                "Selected point is too far from available monitors ({} km limit)",
                threshold_km
            ),
            KrigingError::FitFailed(msg) => write!(f, "Prediction failed: {}", msg),
        }
    }
}

impl std::error::Error for KrigingError {}

/// Errors that can arise during a recursive forecast rollout.
///
/// A rollout failure is fatal to the whole invocation: every later step's
/// input depends on the failed step's output, so there is no usable
/// successful prefix.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The model rejected the window or failed internally.
    ModelFailure { step: usize, message: String },
    /// The model produced a NaN or infinite scaled prediction.
    NonFiniteOutput { step: usize, value: f64 },
    /// A feature row or seed window does not match the fitted feature count.
    WindowMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for ForecastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastError::ModelFailure { step, message } => {
                write!(f, "Model invocation failed at step {}: {}", step, message)
            }
            ForecastError::NonFiniteOutput { step, value } => {
                write!(f, "Model produced non-finite output {} at step {}", value, step)
            }
            ForecastError::WindowMismatch { expected, actual } => write!(
                f,
                "Feature width mismatch: expected {}, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for ForecastError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

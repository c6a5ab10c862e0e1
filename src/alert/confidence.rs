/// Confidence classification of kriging predictions.
///
/// The kriging variance is classified into display bands so the rendering
/// layer can color a point estimate by how much to trust it. This is a pure
/// function of the returned variance — no refitting, no rendering.
///
/// # Boundary rule
/// A standard deviation exactly equal to the threshold classifies as high
/// confidence: only strictly greater reads as low. An undefined (NaN) or
/// negative variance — which numerical ill-conditioning can legitimately
/// produce — classifies as unknown, never as an error.

use crate::model::Prediction;

/// Default standard-deviation threshold separating high from low
/// confidence, in AQI units.
pub const DEFAULT_STD_DEV_THRESHOLD: f64 = 20.0;

/// How much to trust a kriging point estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// Variance was NaN or negative; the uncertainty is unquantifiable.
    Unknown,
    /// Standard deviation exceeds the threshold.
    Low,
    /// Standard deviation is at or below the threshold.
    High,
}

impl Confidence {
    /// Legend label used when presenting the estimate.
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Unknown => "unknown confidence",
            Confidence::Low => "low confidence",
            Confidence::High => "high confidence",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies a kriging variance against a standard-deviation threshold.
pub fn classify_variance(variance: f64, std_dev_threshold: f64) -> Confidence {
    if variance.is_nan() || variance < 0.0 {
        return Confidence::Unknown;
    }
    if variance.sqrt() > std_dev_threshold {
        Confidence::Low
    } else {
        Confidence::High
    }
}

/// Classifies a prediction's variance with the default threshold.
pub fn classify(prediction: &Prediction) -> Confidence {
    classify_variance(prediction.variance, DEFAULT_STD_DEV_THRESHOLD)
}

/// The uncertainty half-width (± one standard deviation) to display next to
/// a point estimate, or `None` when the variance is unusable.
pub fn display_margin(variance: f64) -> Option<f64> {
    if variance.is_nan() || variance < 0.0 {
        None
    } else {
        Some(variance.sqrt())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Recursive multi-step AQI forecaster.
//!
//! Wraps a pretrained sequence-to-one regressor (an opaque
//! [`SequenceModel`]) and extrapolates a daily AQI series arbitrarily far
//! forward by feeding the model's own predictions back into its input
//! window. Each step predicts one scaled value, advances the calendar date
//! and time index, re-derives the calendar features for the new date,
//! scales the reconstructed row with the training scaler, overwrites the
//! scaled target slot with the prediction, and slides the window forward.
//!
//! The step loop is strictly sequential — step i+1's window contains step
//! i's output — and a failure at any step poisons everything after it, so
//! the rollout is all-or-nothing: callers get the full horizon or a typed
//! error, never a prefix.

pub mod features;
pub mod scaler;
pub mod window;

use chrono::{Duration, NaiveDate};

use crate::logging::{self, Component};
use crate::model::ForecastError;

use self::features::COL_TARGET;
use self::scaler::FittedScaler;
use self::window::FeatureWindow;

// ---------------------------------------------------------------------------
// Deployed Fresno artifact constants
// ---------------------------------------------------------------------------

/// Sequence length the deployed Fresno model was trained with.
pub const DEPLOYED_WINDOW_SIZE: usize = 60;

/// Integer step counter of the last training day (2025-03-31).
pub const DEPLOYED_LAST_TIME_INDEX: i64 = 9586;

/// Last calendar day of the deployed model's training data.
pub fn deployed_last_train_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 31).expect("fixed deployment date")
}

// ---------------------------------------------------------------------------
// Model seam
// ---------------------------------------------------------------------------

/// A pretrained sequence-to-one regressor.
///
/// Implementations wrap whatever runtime actually executes the trained
/// artifact; the engine treats them as black boxes mapping a (W, F) window
/// of scaled features to one scaled target prediction for the next step.
/// No retraining, no introspection.
pub trait SequenceModel {
    /// Predicts the next step's scaled target from the current window.
    fn predict_next(&self, window: &FeatureWindow) -> Result<f64, String>;
}

/// One step of a completed forecast, in native AQI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub aqi: f64,
}

// ---------------------------------------------------------------------------
// Rollout
// ---------------------------------------------------------------------------

/// Rolls the model forward `horizon_days` steps past `start_date`.
///
/// `initial_window` holds the last W scaled feature rows ending at
/// `start_date` (time index `start_time_index`); both come from the
/// training pipeline alongside the model and scaler. Returns one point per
/// day, dates strictly ascending from the day after `start_date`, values
/// inverse-transformed to native AQI in a single batch after the loop.
///
/// A zero horizon is valid and returns an empty sequence. The calendar and
/// index state are explicit parameters rather than ambient clock reads, so
/// two identical invocations produce identical output.
pub fn forecast(
    model: &dyn SequenceModel,
    initial_window: FeatureWindow,
    horizon_days: usize,
    scaler: &FittedScaler,
    start_date: NaiveDate,
    start_time_index: i64,
) -> Result<Vec<ForecastPoint>, ForecastError> {
    if initial_window.width() != scaler.n_features() {
        return Err(ForecastError::WindowMismatch {
            expected: scaler.n_features(),
            actual: initial_window.width(),
        });
    }

    let mut current_window = initial_window;
    let mut time_index = start_time_index;
    let mut date = start_date;
    let mut scaled_predictions = Vec::with_capacity(horizon_days);
    let mut dates = Vec::with_capacity(horizon_days);

    for step in 1..=horizon_days {
        let predicted_scaled = model
            .predict_next(&current_window)
            .map_err(|message| ForecastError::ModelFailure { step, message })?;
        if !predicted_scaled.is_finite() {
            return Err(ForecastError::NonFiniteOutput { step, value: predicted_scaled });
        }

        time_index += 1;
        date = date + Duration::days(1);
        dates.push(date);

        // Reconstruct the new step's row exactly as training engineered it:
        // placeholder target, then scale, then overwrite the scaled target
        // slot with the model's prediction.
        let raw_row = features::feature_row(0.0, time_index, date);
        let mut scaled_row = scaler.transform(&raw_row)?;
        scaled_row[COL_TARGET] = predicted_scaled;

        current_window = current_window.advance(scaled_row)?;
        scaled_predictions.push(predicted_scaled);
    }

    let values = scaler.inverse_transform_target(&scaled_predictions);
    let points: Vec<ForecastPoint> = dates
        .into_iter()
        .zip(values)
        .map(|(date, aqi)| ForecastPoint { date, aqi })
        .collect();

    logging::info(
        Component::Forecast,
        None,
        &format!(
            "Rollout complete: {} steps from {}",
            points.len(),
            start_date
        ),
    );
    Ok(points)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

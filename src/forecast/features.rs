/// Calendar feature engineering for the recursive rollout.
///
/// The sequence model was trained with cyclical encodings of day-of-year,
/// month, and weekday alongside the AQI target and a monotone time index.
/// Each rollout step re-derives these features for the newly advanced date,
/// and the reconstruction must match training exactly — same periods, same
/// column order, same placeholder-then-overwrite sequencing — because every
/// step's input window contains the previous steps' reconstructed rows.
///
/// Cyclical encoding maps a periodic integer onto the unit circle,
/// `sin(2π·v/period)` and `cos(2π·v/period)`, so December and January (or
/// Sunday and Monday) are adjacent rather than a full period apart.

use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;

/// Fixed feature width the model was trained with.
pub const FEATURE_COUNT: usize = 8;

/// Column layout of a feature row. `COL_TARGET` is re-exported from the
/// scaler so the overwrite step and the inverse transform agree on it.
pub use super::scaler::TARGET_COLUMN as COL_TARGET;
pub const COL_TIME_INDEX: usize = 1;
pub const COL_DOY_SIN: usize = 2;
pub const COL_DOY_COS: usize = 3;
pub const COL_MONTH_SIN: usize = 4;
pub const COL_MONTH_COS: usize = 5;
pub const COL_DOW_SIN: usize = 6;
pub const COL_DOW_COS: usize = 7;

/// Encoding periods, as trained: 365-day year, 12-month year, 7-day week.
const DAYS_PER_YEAR: f64 = 365.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const DAYS_PER_WEEK: f64 = 7.0;

/// One value's position on the unit circle for the given period.
pub fn cyclical_pair(value: f64, period: f64) -> (f64, f64) {
    let angle = 2.0 * PI * value / period;
    (angle.sin(), angle.cos())
}

/// Assembles the raw (unscaled) feature row for one forecast date.
///
/// `target` is a placeholder — the rollout scales the row first and then
/// overwrites the scaled target slot with the model's prediction. Day of
/// year is 1-based, month is 1–12, and the weekday index starts at
/// Monday = 0, all as in training.
pub fn feature_row(target: f64, time_index: i64, date: NaiveDate) -> Vec<f64> {
    let (doy_sin, doy_cos) = cyclical_pair(date.ordinal() as f64, DAYS_PER_YEAR);
    let (month_sin, month_cos) = cyclical_pair(date.month() as f64, MONTHS_PER_YEAR);
    let weekday = date.weekday().num_days_from_monday();
    let (dow_sin, dow_cos) = cyclical_pair(weekday as f64, DAYS_PER_WEEK);

    vec![
        target,
        time_index as f64,
        doy_sin,
        doy_cos,
        month_sin,
        month_cos,
        dow_sin,
        dow_cos,
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Integration tests for the temporal (recursive rollout) predictor.
///
/// These tests verify:
/// 1. The end-to-end rollout contract: dates, horizon, inverse transform
/// 2. Determinism of repeated invocations
/// 3. The all-or-nothing failure policy
/// 4. Scaler artifacts loading from JSON the way a caller would
///
/// Models are trivial stubs — the engine treats the trained artifact as an
/// opaque callable, so a constant-output stub exercises every code path
/// the real network would.

use aqmon_engine::forecast::{
    self, deployed_last_train_date, features, scaler::FittedScaler, window::FeatureWindow,
    SequenceModel, DEPLOYED_LAST_TIME_INDEX, DEPLOYED_WINDOW_SIZE,
};
use aqmon_engine::model::ForecastError;

use chrono::Duration;

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// Always predicts the same scaled value, like a flat-line trained model.
struct ConstantModel(f64);

impl SequenceModel for ConstantModel {
    fn predict_next(&self, _window: &FeatureWindow) -> Result<f64, String> {
        Ok(self.0)
    }
}

/// A scaler shaped like the deployed artifact: AQI mapped from [0, 500]
/// onto [0, 1], the time index shrunk by 1e-4, cyclical encodings mapped
/// from [-1, 1] onto [0, 1].
fn deployed_style_scaler() -> FittedScaler {
    let mut scale = vec![0.5; features::FEATURE_COUNT];
    let mut min = vec![0.5; features::FEATURE_COUNT];
    scale[features::COL_TARGET] = 1.0 / 500.0;
    min[features::COL_TARGET] = 0.0;
    scale[features::COL_TIME_INDEX] = 1e-4;
    min[features::COL_TIME_INDEX] = 0.0;
    FittedScaler::new(scale, min).expect("deployed-style constants are valid")
}

/// A full-size seed window: W rows of scaled features ending at the
/// deployed model's last training day.
fn deployed_seed_window(scaler: &FittedScaler) -> FeatureWindow {
    let start = deployed_last_train_date();
    let rows: Vec<Vec<f64>> = (0..DEPLOYED_WINDOW_SIZE)
        .map(|i| {
            let offset = (DEPLOYED_WINDOW_SIZE - 1 - i) as i64;
            let date = start - Duration::days(offset);
            let time_index = DEPLOYED_LAST_TIME_INDEX - offset;
            let raw = features::feature_row(75.0, time_index, date);
            scaler.transform(&raw).expect("seed row matches scaler width")
        })
        .collect();
    FeatureWindow::from_rows(rows).expect("uniform seed rows")
}

// ---------------------------------------------------------------------------
// Rollout contract
// ---------------------------------------------------------------------------

#[test]
fn test_three_day_rollout_with_constant_model() {
    let scaler = deployed_style_scaler();
    let window = deployed_seed_window(&scaler);
    let model = ConstantModel(0.5);
    let start = deployed_last_train_date();

    let points = forecast::forecast(&model, window, 3, &scaler, start, DEPLOYED_LAST_TIME_INDEX)
        .expect("three-day rollout");

    assert_eq!(points.len(), 3);

    // Dates advance strictly by one day starting the day after training.
    for (i, point) in points.iter().enumerate() {
        assert_eq!(point.date, start + Duration::days(i as i64 + 1));
    }

    // A constant scaled prediction inverse-transforms to a constant AQI:
    // 0.5 on the [0, 500] → [0, 1] target scale is 250.
    for point in &points {
        assert!(
            (point.aqi - 250.0).abs() < 1e-9,
            "expected 250.0 from constant scaled 0.5, got {}",
            point.aqi
        );
    }
}

#[test]
fn test_zero_horizon_returns_empty_sequence() {
    let scaler = deployed_style_scaler();
    let window = deployed_seed_window(&scaler);

    let points = forecast::forecast(
        &ConstantModel(0.5),
        window,
        0,
        &scaler,
        deployed_last_train_date(),
        DEPLOYED_LAST_TIME_INDEX,
    )
    .expect("zero horizon is valid");
    assert!(points.is_empty());
}

#[test]
fn test_rollout_is_deterministic_across_invocations() {
    let scaler = deployed_style_scaler();
    let model = ConstantModel(0.37);
    let start = deployed_last_train_date();

    let first = forecast::forecast(
        &model,
        deployed_seed_window(&scaler),
        30,
        &scaler,
        start,
        DEPLOYED_LAST_TIME_INDEX,
    )
    .expect("first rollout");
    let second = forecast::forecast(
        &model,
        deployed_seed_window(&scaler),
        30,
        &scaler,
        start,
        DEPLOYED_LAST_TIME_INDEX,
    )
    .expect("second rollout");

    assert_eq!(
        first, second,
        "identical model, window, scaler, and start state must reproduce \
         the sequence bit-for-bit"
    );
}

#[test]
fn test_long_horizon_keeps_dates_contiguous_across_year_boundaries() {
    let scaler = deployed_style_scaler();
    let window = deployed_seed_window(&scaler);
    let start = deployed_last_train_date();

    // Three years, far past several Dec→Jan wraps.
    let points = forecast::forecast(
        &ConstantModel(0.2),
        window,
        1095,
        &scaler,
        start,
        DEPLOYED_LAST_TIME_INDEX,
    )
    .expect("three-year rollout");

    assert_eq!(points.len(), 1095);
    for pair in points.windows(2) {
        assert_eq!(
            pair[1].date - pair[0].date,
            Duration::days(1),
            "consecutive forecast dates must be exactly one day apart"
        );
    }
}

// ---------------------------------------------------------------------------
// Failure policy
// ---------------------------------------------------------------------------

#[test]
fn test_mid_horizon_model_failure_yields_no_partial_result() {
    /// Fails once the window's latest time index passes a cutoff, the way
    /// a runtime might reject drifted inputs.
    struct FailsAfter {
        cutoff: f64,
    }
    impl SequenceModel for FailsAfter {
        fn predict_next(&self, window: &FeatureWindow) -> Result<f64, String> {
            if window.latest()[features::COL_TIME_INDEX] > self.cutoff {
                Err("input drifted outside the trained range".to_string())
            } else {
                Ok(0.4)
            }
        }
    }

    let scaler = deployed_style_scaler();
    let window = deployed_seed_window(&scaler);
    // Scaled time index passes the cutoff after a few steps.
    let cutoff = (DEPLOYED_LAST_TIME_INDEX + 3) as f64 * 1e-4;
    let result = forecast::forecast(
        &FailsAfter { cutoff },
        window,
        30,
        &scaler,
        deployed_last_train_date(),
        DEPLOYED_LAST_TIME_INDEX,
    );

    match result {
        Err(ForecastError::ModelFailure { step, .. }) => {
            assert!(step > 1, "the stub succeeds for the first steps");
        }
        other => panic!(
            "a mid-horizon failure must fail the whole forecast, got {:?}",
            other
        ),
    }
}

#[test]
fn test_non_finite_model_output_fails_the_forecast() {
    let scaler = deployed_style_scaler();
    let window = deployed_seed_window(&scaler);

    let result = forecast::forecast(
        &ConstantModel(f64::INFINITY),
        window,
        5,
        &scaler,
        deployed_last_train_date(),
        DEPLOYED_LAST_TIME_INDEX,
    );
    assert!(matches!(result, Err(ForecastError::NonFiniteOutput { step: 1, .. })));
}

// ---------------------------------------------------------------------------
// Scaler artifact loading
// ---------------------------------------------------------------------------

#[test]
fn test_scaler_artifact_loads_from_json_and_drives_a_rollout() {
    // The caller deserializes the fitted scaler exported by the training
    // pipeline; the engine only sees the validated value.
    let json = r#"{
        "scale": [0.002, 0.0001, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5],
        "min":   [0.0,   0.0,    0.5, 0.5, 0.5, 0.5, 0.5, 0.5]
    }"#;
    let scaler = FittedScaler::from_json(json).expect("valid exported artifact");
    assert_eq!(scaler.n_features(), features::FEATURE_COUNT);

    let window = deployed_seed_window(&scaler);
    let points = forecast::forecast(
        &ConstantModel(0.5),
        window,
        2,
        &scaler,
        deployed_last_train_date(),
        DEPLOYED_LAST_TIME_INDEX,
    )
    .expect("rollout with loaded artifact");
    assert_eq!(points.len(), 2);
    assert!((points[0].aqi - 250.0).abs() < 1e-9);
}

/// Fitted feature scaler for the sequence model.
///
/// The model was trained on min-max-scaled features; this type holds the
/// fitted per-feature affine constants so the rollout can scale
/// reconstructed rows exactly as training did, and recover native AQI from
/// scaled predictions. The transform is
///
/// ```text
/// scaled[i] = raw[i] * scale[i] + min[i]
/// raw[i]    = (scaled[i] - min[i]) / scale[i]
/// ```
///
/// matching the parameterization the training pipeline exports. The scaler
/// is immutable once constructed; deserialization is the caller's concern,
/// with `from_json` provided for the exported-artifact format.

use serde::{Deserialize, Serialize};

use crate::model::ForecastError;

/// Column index of the prediction target (daily AQI) in every feature row.
pub const TARGET_COLUMN: usize = 0;

/// A fitted, immutable min-max scaler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedScaler {
    scale: Vec<f64>,
    min: Vec<f64>,
}

impl FittedScaler {
    /// Builds a scaler from fitted constants. The two vectors must be the
    /// same non-zero length, every entry finite, and every scale non-zero
    /// (a zero scale would make the inverse transform undefined).
    pub fn new(scale: Vec<f64>, min: Vec<f64>) -> Result<Self, String> {
        if scale.is_empty() {
            return Err("scaler must have at least one feature".to_string());
        }
        if scale.len() != min.len() {
            return Err(format!(
                "scale has {} entries but min has {}",
                scale.len(),
                min.len()
            ));
        }
        if scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err("every scale entry must be finite and non-zero".to_string());
        }
        if min.iter().any(|m| !m.is_finite()) {
            return Err("every min entry must be finite".to_string());
        }
        Ok(FittedScaler { scale, min })
    }

    /// Parses a scaler artifact exported as JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let parsed: FittedScaler =
            serde_json::from_str(json).map_err(|e| format!("Invalid scaler artifact: {}", e))?;
        FittedScaler::new(parsed.scale, parsed.min)
    }

    /// Number of features the scaler was fitted with.
    pub fn n_features(&self) -> usize {
        self.scale.len()
    }

    /// Forward transform of one raw feature row into scaled space.
    pub fn transform(&self, raw: &[f64]) -> Result<Vec<f64>, ForecastError> {
        if raw.len() != self.n_features() {
            return Err(ForecastError::WindowMismatch {
                expected: self.n_features(),
                actual: raw.len(),
            });
        }
        Ok(raw
            .iter()
            .zip(self.scale.iter().zip(self.min.iter()))
            .map(|(value, (scale, min))| value * scale + min)
            .collect())
    }

    /// Inverse transform of a scaled prediction series, restricted to the
    /// target column. The other feature columns never participate — only
    /// the target's fitted constants apply.
    pub fn inverse_transform_target(&self, scaled: &[f64]) -> Vec<f64> {
        let scale = self.scale[TARGET_COLUMN];
        let min = self.min[TARGET_COLUMN];
        scaled.iter().map(|value| (value - min) / scale).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A two-feature scaler with distinct constants per column, so a test
    /// that accidentally applies the wrong column's constants fails loudly.
    fn two_feature_scaler() -> FittedScaler {
        FittedScaler::new(vec![0.002, 0.1], vec![0.0, -0.5]).expect("valid constants")
    }

    #[test]
    fn test_transform_applies_per_column_constants() {
        let scaler = two_feature_scaler();
        let scaled = scaler.transform(&[500.0, 10.0]).expect("matching width");
        assert!((scaled[0] - 1.0).abs() < 1e-12);
        assert!((scaled[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_target_round_trips_the_forward_transform() {
        let scaler = two_feature_scaler();
        let scaled = scaler.transform(&[123.0, 0.0]).expect("matching width");
        let raw = scaler.inverse_transform_target(&[scaled[0]]);
        assert!(
            (raw[0] - 123.0).abs() < 1e-9,
            "inverse(transform(x)) should recover x, got {}",
            raw[0]
        );
    }

    #[test]
    fn test_inverse_target_ignores_other_columns_constants() {
        // Target constants are column 0; scaling 0.5 back must use 0.002/0.0,
        // not the second column's 0.1/-0.5.
        let scaler = two_feature_scaler();
        let raw = scaler.inverse_transform_target(&[0.5]);
        assert!((raw[0] - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_width_mismatch_is_a_typed_error() {
        let scaler = two_feature_scaler();
        let result = scaler.transform(&[1.0, 2.0, 3.0]);
        assert_eq!(
            result,
            Err(ForecastError::WindowMismatch { expected: 2, actual: 3 })
        );
    }

    #[test]
    fn test_constructor_rejects_mismatched_lengths() {
        assert!(FittedScaler::new(vec![1.0, 2.0], vec![0.0]).is_err());
    }

    #[test]
    fn test_constructor_rejects_zero_and_non_finite_scales() {
        assert!(FittedScaler::new(vec![0.0], vec![0.0]).is_err());
        assert!(FittedScaler::new(vec![f64::NAN], vec![0.0]).is_err());
        assert!(FittedScaler::new(vec![1.0], vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn test_json_artifact_round_trip() {
        let scaler = two_feature_scaler();
        let json = serde_json::to_string(&scaler).expect("serializable");
        let restored = FittedScaler::from_json(&json).expect("parsable artifact");
        assert_eq!(restored, scaler);
    }

    #[test]
    fn test_json_artifact_is_validated_after_parsing() {
        // Structurally valid JSON with an unusable zero scale must be
        // rejected at load time, not at first inverse transform.
        let json = r#"{"scale": [0.0], "min": [0.0]}"#;
        assert!(FittedScaler::from_json(json).is_err());
    }
}

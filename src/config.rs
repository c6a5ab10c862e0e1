/// Engine configuration.
///
/// Every tunable of the two engines — variogram constants, the admission
/// radius, grid resolution, the confidence threshold, and the forecast
/// window geometry — lives here with a default equal to the deployed
/// system's constants. An optional TOML file overrides any subset of
/// fields; a missing file means "run with the deployed defaults", while a
/// file that exists but fails to parse is an error (a half-applied config
/// is worse than none).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::alert::confidence::DEFAULT_STD_DEV_THRESHOLD;
use crate::forecast::DEPLOYED_WINDOW_SIZE;
use crate::forecast::features::FEATURE_COUNT;
use crate::kriging::geo::DEFAULT_DISTANCE_THRESHOLD_KM;
use crate::kriging::grid::DEFAULT_GRID_RESOLUTION_DEG;
use crate::kriging::variogram::{DEFAULT_NUGGET, DEFAULT_RANGE, DEFAULT_SILL};
use crate::model::VariogramParams;

// ---------------------------------------------------------------------------
// Settings types
// ---------------------------------------------------------------------------

/// Spatial predictor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KrigingSettings {
    /// Spherical variogram sill.
    pub sill: f64,
    /// Spherical variogram range, in degree-space units.
    pub range: f64,
    /// Spherical variogram nugget.
    pub nugget: f64,
    /// Admission radius: a query must be within this many km of a monitor.
    pub distance_threshold_km: f64,
    /// Surface lattice resolution, in degrees.
    pub grid_resolution_deg: f64,
    /// Standard deviation above which a prediction reads as low confidence.
    pub std_dev_threshold: f64,
}

impl Default for KrigingSettings {
    fn default() -> Self {
        KrigingSettings {
            sill: DEFAULT_SILL,
            range: DEFAULT_RANGE,
            nugget: DEFAULT_NUGGET,
            distance_threshold_km: DEFAULT_DISTANCE_THRESHOLD_KM,
            grid_resolution_deg: DEFAULT_GRID_RESOLUTION_DEG,
            std_dev_threshold: DEFAULT_STD_DEV_THRESHOLD,
        }
    }
}

impl KrigingSettings {
    /// The variogram parameters these settings describe.
    pub fn variogram_params(&self) -> VariogramParams {
        VariogramParams { sill: self.sill, range: self.range, nugget: self.nugget }
    }
}

/// Temporal predictor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastSettings {
    /// Sequence length W the model consumes.
    pub window_size: usize,
    /// Feature width F each window row carries.
    pub feature_count: usize,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        ForecastSettings {
            window_size: DEPLOYED_WINDOW_SIZE,
            feature_count: FEATURE_COUNT,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub kriging: KrigingSettings,
    pub forecast: ForecastSettings,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl EngineConfig {
    /// Parses a TOML document, filling unspecified fields with defaults.
    pub fn from_toml(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| format!("Invalid engine config: {}", e))
    }

    /// Loads configuration from `path`. A missing file yields the deployed
    /// defaults; an unreadable or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(EngineConfig::default());
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        EngineConfig::from_toml(&text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! San Joaquin Valley PM2.5 prediction engines.
//!
//! Two independent, pure-computation engines behind one crate:
//!
//! - [`kriging`] — ordinary-kriging spatial interpolation of daily PM2.5
//!   AQI at unsampled locations, from one date's monitor snapshot.
//! - [`forecast`] — recursive multi-step rollout of a pretrained sequence
//!   model over a sliding feature window.
//!
//! Plus the shared classification utilities ([`alert`]) that keep severity
//! and confidence semantics identical between the two, and the supporting
//! modules: the monitor registry, daily-table snapshot selection, engine
//! configuration, and structured logging.
//!
//! The crate performs no I/O of its own. Observation tables, trained model
//! artifacts, and fitted scalers are loaded by the caller and passed in as
//! values; rendering of surfaces and forecast series is likewise the
//! caller's concern.

pub mod alert;
pub mod config;
pub mod dataset;
pub mod forecast;
pub mod kriging;
pub mod logging;
pub mod model;
pub mod monitors;

pub use crate::alert::bands::{classify as classify_aqi, AqiSeverity};
pub use crate::alert::confidence::{classify_variance, Confidence};
pub use crate::config::EngineConfig;
pub use crate::forecast::{forecast, ForecastPoint, SequenceModel};
pub use crate::kriging::{predict_grid, predict_point};
pub use crate::model::{
    ForecastError, GridCell, KrigingError, MonitorObservation, Prediction, QueryPoint,
    VariogramParams,
};

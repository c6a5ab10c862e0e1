/// Daily observation table handling.
///
/// The caller loads the valley's daily PM2.5 table (one row per monitor per
/// day) from wherever it lives; this module organizes that flat table into
/// the single-date snapshots the spatial predictor consumes. Rows with a
/// missing coordinate or missing AQI are dropped during selection, the same
/// filtering the curated table received upstream.

use chrono::NaiveDate;

use crate::kriging::grid::BoundingBox;
use crate::model::{KrigingError, MonitorObservation};

/// One row of the daily PM2.5 table. Coordinates and AQI are optional
/// because the upstream table carries gaps for monitor outages.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub site_id: String,
    pub date: NaiveDate,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub aqi: Option<f64>,
}

/// Selects one calendar date's observation snapshot.
///
/// Rows from other dates are ignored; rows with any missing or non-finite
/// field are dropped. An empty result is a typed error — it means the
/// requested date has no usable data, which callers present as a message.
pub fn snapshot_for_date(
    records: &[DailyRecord],
    date: NaiveDate,
) -> Result<Vec<MonitorObservation>, KrigingError> {
    let observations: Vec<MonitorObservation> = records
        .iter()
        .filter(|r| r.date == date)
        .filter_map(|r| match (r.longitude, r.latitude, r.aqi) {
            (Some(longitude), Some(latitude), Some(aqi))
                if longitude.is_finite() && latitude.is_finite() && aqi.is_finite() =>
            {
                Some(MonitorObservation { longitude, latitude, aqi })
            }
            _ => None,
        })
        .collect();

    if observations.is_empty() {
        return Err(KrigingError::NoObservations);
    }
    Ok(observations)
}

/// Bounding box of an observation snapshot, the extent a surface build
/// spans. `None` for an empty set.
pub fn bounding_box(observations: &[MonitorObservation]) -> Option<BoundingBox> {
    let first = observations.first()?;
    let mut bbox = BoundingBox {
        min_latitude: first.latitude,
        max_latitude: first.latitude,
        min_longitude: first.longitude,
        max_longitude: first.longitude,
    };
    for obs in &observations[1..] {
        bbox.min_latitude = bbox.min_latitude.min(obs.latitude);
        bbox.max_latitude = bbox.max_latitude.max(obs.latitude);
        bbox.min_longitude = bbox.min_longitude.min(obs.longitude);
        bbox.max_longitude = bbox.max_longitude.max(obs.longitude);
    }
    Some(bbox)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

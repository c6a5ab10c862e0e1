/// Query lattice generation for interpolated surfaces.
///
/// The surface is rendered over a rectangular lattice spanning the bounding
/// box of the current observation set at a fixed angular resolution. Axis
/// generation is start-inclusive and stop-exclusive with
/// `ceil((stop − start) / step)` points, matching the behavior the surface
/// renderer was built against.

use crate::model::QueryPoint;

/// Default lattice resolution in degrees (~5.5 km of latitude per cell).
pub const DEFAULT_GRID_RESOLUTION_DEG: f64 = 0.05;

/// Geographic bounding box of an observation set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

/// Evenly spaced axis values: `start`, `start + step`, ... up to but never
/// including `stop`. Returns an empty axis when `stop <= start` or the step
/// is not a positive finite number.
pub fn axis_steps(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !step.is_finite() || stop <= start {
        return Vec::new();
    }
    let count = ((stop - start) / step).ceil() as usize;
    (0..count).map(|i| start + (i as f64) * step).collect()
}

/// The full cross product of latitude and longitude steps over `bbox`,
/// latitude as the outer axis. Every generated point still passes through
/// the same admission gate and fit as a single-point query — the lattice
/// carries no precomputed state.
pub fn generate(bbox: &BoundingBox, resolution_deg: f64) -> Vec<QueryPoint> {
    let latitudes = axis_steps(bbox.min_latitude, bbox.max_latitude, resolution_deg);
    let longitudes = axis_steps(bbox.min_longitude, bbox.max_longitude, resolution_deg);

    let mut points = Vec::with_capacity(latitudes.len() * longitudes.len());
    for &latitude in &latitudes {
        for &longitude in &longitudes {
            points.push(QueryPoint { longitude, latitude });
        }
    }
    points
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

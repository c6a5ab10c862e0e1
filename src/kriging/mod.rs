//! Ordinary-kriging spatial predictor.
//!
//! Interpolates PM2.5 AQI at unsampled points from one day's monitor
//! observations. Every prediction fits a fresh ordinary-kriging system over
//! ALL observations in the snapshot — there is no neighbor-count limiting
//! beyond the admission gate — and evaluates it at the query point.
//!
//! Two call sites share the same core fit with different failure
//! visibility:
//!
//! - `predict_point` — a user-requested location; rejection and fit
//!   failures are surfaced to the caller as typed errors.
//! - `predict_grid` — a surface build; ineligible or failed cells are
//!   omitted and only a completion summary is logged.
//!
//! Kriging math: with semivariance γ over degree-space distance, solve
//!
//! ```text
//! | γ(d11) … γ(d1n)  1 | |λ1|   |γ(d1q)|
//! |   …         …    … | | …| = |  …   |
//! | γ(dn1) … γ(dnn)  1 | |λn|   |γ(dnq)|
//! |   1    …    1    0 | | μ|   |  1   |
//! ```
//!
//! prediction `Σ λᵢ·zᵢ`, kriging variance `Σ λᵢ·γ(dᵢq) + μ`. The diagonal
//! is zero and a zero query distance snaps its right-hand-side entry to
//! zero, which makes the interpolator exact at monitor locations.

pub mod geo;
pub mod grid;
pub mod variogram;

use nalgebra::{DMatrix, DVector};

use crate::logging::{self, Component};
use crate::model::{
    GridCell, KrigingError, MonitorObservation, Prediction, QueryPoint, VariogramParams,
};

use self::grid::BoundingBox;

/// Distances at or below this are treated as coincident with a monitor.
const ZERO_DIST_EPS: f64 = 1e-10;

/// Planar separation in (longitude, latitude) degree space — the metric the
/// variogram parameters were fitted in. Not to be confused with the geodesic
/// admission gate in `geo`.
fn degree_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let dx = lon1 - lon2;
    let dy = lat1 - lat2;
    (dx * dx + dy * dy).sqrt()
}

/// Fits an ordinary-kriging system over `observations` and evaluates it at
/// `query`. No admission gate here — callers gate first.
pub fn fit_and_predict(
    observations: &[MonitorObservation],
    query: &QueryPoint,
    params: &VariogramParams,
) -> Result<Prediction, KrigingError> {
    let n = observations.len();
    if n == 0 {
        return Err(KrigingError::NoObservations);
    }

    // Kriging matrix: semivariances between observation pairs, bordered by
    // the unbiasedness constraint row/column of ones.
    let mut a = DMatrix::<f64>::zeros(n + 1, n + 1);
    for i in 0..n {
        for j in (i + 1)..n {
            let d = degree_distance(
                observations[i].longitude,
                observations[i].latitude,
                observations[j].longitude,
                observations[j].latitude,
            );
            let gamma = variogram::spherical(params, d);
            a[(i, j)] = gamma;
            a[(j, i)] = gamma;
        }
        a[(i, n)] = 1.0;
        a[(n, i)] = 1.0;
    }

    // Right-hand side: semivariances from each observation to the query.
    // A coincident monitor snaps its entry to zero so the solution collapses
    // onto that monitor's value (exact interpolation).
    let mut b = DVector::<f64>::zeros(n + 1);
    for i in 0..n {
        let d = degree_distance(
            observations[i].longitude,
            observations[i].latitude,
            query.longitude,
            query.latitude,
        );
        b[i] = if d <= ZERO_DIST_EPS {
            0.0
        } else {
            variogram::spherical(params, d)
        };
    }
    b[n] = 1.0;

    let solution = a
        .lu()
        .solve(&b)
        .ok_or_else(|| KrigingError::FitFailed("singular kriging matrix".to_string()))?;

    if solution.iter().any(|w| !w.is_finite()) {
        return Err(KrigingError::FitFailed(
            "kriging system is numerically degenerate".to_string(),
        ));
    }

    let value = (0..n).map(|i| solution[i] * observations[i].aqi).sum();
    // Kriging variance; ill-conditioning may push this negative or NaN,
    // which downstream classification treats as unknown confidence.
    let variance = (0..n).map(|i| solution[i] * b[i]).sum::<f64>() + solution[n];

    Ok(Prediction { value, variance })
}

/// Predicts at a single user-requested location.
///
/// The admission gate runs before any fitting: a point farther than
/// `distance_threshold_km` from every monitor returns `Rejected` without
/// touching the kriging system. Fit failures are surfaced, not swallowed.
pub fn predict_point(
    observations: &[MonitorObservation],
    query: &QueryPoint,
    params: &VariogramParams,
    distance_threshold_km: f64,
) -> Result<Prediction, KrigingError> {
    if observations.is_empty() {
        return Err(KrigingError::NoObservations);
    }
    if !geo::within_distance(query, observations, distance_threshold_km) {
        logging::debug(
            Component::Kriging,
            None,
            &format!(
                "query ({:.4}, {:.4}) rejected: beyond {} km of all monitors",
                query.latitude, query.longitude, distance_threshold_km
            ),
        );
        return Err(KrigingError::Rejected { threshold_km: distance_threshold_km });
    }
    fit_and_predict(observations, query, params)
}

/// Builds an interpolated surface over the lattice spanning `bbox`.
///
/// Each cell is an independent point prediction against the same
/// observation set. Cells outside the admission radius are omitted, and a
/// cell whose fit fails is skipped rather than failing the surface. A
/// summary of predicted/gated/failed counts is logged on completion.
pub fn predict_grid(
    observations: &[MonitorObservation],
    bbox: &BoundingBox,
    resolution_deg: f64,
    params: &VariogramParams,
    distance_threshold_km: f64,
) -> Vec<GridCell> {
    let points = grid::generate(bbox, resolution_deg);
    let total = points.len();

    let mut cells = Vec::new();
    let mut gated = 0usize;
    let mut failed = 0usize;

    for point in &points {
        if !geo::within_distance(point, observations, distance_threshold_km) {
            gated += 1;
            continue;
        }
        match fit_and_predict(observations, point, params) {
            Ok(prediction) => cells.push(GridCell {
                latitude: point.latitude,
                longitude: point.longitude,
                value: prediction.value,
            }),
            Err(_) => failed += 1,
        }
    }

    logging::log_grid_summary(total, cells.len(), gated, failed);
    cells
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

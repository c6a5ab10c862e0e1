/// Spherical variogram model for the ordinary-kriging fit.
///
/// The deployed system uses a single fixed spherical model; the parameters
/// live in `model::VariogramParams` and are never re-estimated from an
/// observation set. Semivariance is evaluated in the same coordinate space
/// the parameters were fitted in: planar Euclidean distance over
/// (longitude, latitude) degrees.

use crate::model::VariogramParams;

/// Default parameters of the deployed valley-wide model.
pub const DEFAULT_SILL: f64 = 60.0;
pub const DEFAULT_RANGE: f64 = 3500.0;
pub const DEFAULT_NUGGET: f64 = 5.0;

impl VariogramParams {
    /// The deployed spherical model: sill 60, range 3500, nugget 5.
    pub fn deployed() -> Self {
        VariogramParams {
            sill: DEFAULT_SILL,
            range: DEFAULT_RANGE,
            nugget: DEFAULT_NUGGET,
        }
    }

    /// Partial sill: the variance contributed by spatial structure alone,
    /// i.e. sill minus the nugget discontinuity.
    pub fn partial_sill(&self) -> f64 {
        self.sill - self.nugget
    }
}

/// Spherical semivariance at separation distance `h`.
///
/// With partial sill `p = sill − nugget` and range `r`:
///
/// ```text
/// γ(h) = p · (1.5·h/r − 0.5·(h/r)³) + nugget   for h ≤ r
/// γ(h) = sill                                   for h > r
/// ```
///
/// `γ(0)` evaluates to the nugget. The zero-separation discontinuity is
/// handled by the system assembly (zero diagonal, exact-interpolator snap),
/// not here.
pub fn spherical(params: &VariogramParams, h: f64) -> f64 {
    if h <= params.range {
        let ratio = h / params.range;
        params.partial_sill() * (1.5 * ratio - 0.5 * ratio.powi(3)) + params.nugget
    } else {
        params.sill
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

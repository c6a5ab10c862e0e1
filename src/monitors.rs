/// Monitor registry for the San Joaquin Valley PM2.5 prediction service.
///
/// Defines the canonical list of EPA AQS monitoring sites whose daily PM2.5
/// readings feed the spatial predictor, along with their metadata. This is
/// the single source of truth for site ids — other modules should reference
/// monitors from here rather than hardcoding ids or coordinates.

// ---------------------------------------------------------------------------
// Monitor metadata
// ---------------------------------------------------------------------------

/// Metadata for a single AQS PM2.5 monitoring site.
pub struct Monitor {
    /// AQS id in state-county-site form, e.g. "06-019-0011".
    pub site_id: &'static str,
    /// Common site name.
    pub name: &'static str,
    /// County the monitor serves.
    pub county: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Whether a trained sequence-model artifact exists for this site.
    /// The deployed system ships one LSTM, trained on the Fresno monitor's
    /// daily series.
    pub has_forecast_model: bool,
}

/// All monitors feeding the valley-wide kriging surface, ordered roughly
/// north to south along the valley floor.
///
/// Sources:
///   - Site ids and coordinates: EPA AQS / AirNow site metadata
///   - Forecast artifact coverage: the deployed model inventory
pub static MONITOR_REGISTRY: &[Monitor] = &[
    Monitor {
        site_id: "06-077-1002",
        name: "Stockton - Hazelton Street",
        county: "San Joaquin",
        latitude: 37.9517,
        longitude: -121.2691,
        has_forecast_model: false,
    },
    Monitor {
        site_id: "06-099-0005",
        name: "Modesto - 14th Street",
        county: "Stanislaus",
        latitude: 37.6424,
        longitude: -120.9942,
        has_forecast_model: false,
    },
    Monitor {
        site_id: "06-047-0003",
        name: "Merced - S Coffee Avenue",
        county: "Merced",
        latitude: 37.2816,
        longitude: -120.4337,
        has_forecast_model: false,
    },
    Monitor {
        site_id: "06-039-0004",
        name: "Madera - Pump Yard",
        county: "Madera",
        latitude: 36.9531,
        longitude: -120.0343,
        has_forecast_model: false,
    },
    Monitor {
        site_id: "06-019-0011",
        name: "Fresno - Garland",
        county: "Fresno",
        latitude: 36.7853,
        longitude: -119.7732,
        has_forecast_model: true,
    },
    Monitor {
        site_id: "06-019-5001",
        name: "Clovis - N Villa Avenue",
        county: "Fresno",
        latitude: 36.8193,
        longitude: -119.7164,
        has_forecast_model: false,
    },
    Monitor {
        site_id: "06-031-1004",
        name: "Hanford - S Irwin Street",
        county: "Kings",
        latitude: 36.3194,
        longitude: -119.6432,
        has_forecast_model: false,
    },
    Monitor {
        site_id: "06-107-2002",
        name: "Visalia - N Church Street",
        county: "Tulare",
        latitude: 36.3325,
        longitude: -119.2908,
        has_forecast_model: false,
    },
    Monitor {
        site_id: "06-029-0014",
        name: "Bakersfield - California Avenue",
        county: "Kern",
        latitude: 35.3566,
        longitude: -119.0628,
        has_forecast_model: false,
    },
];

/// Returns the site ids for all registered monitors.
pub fn all_site_ids() -> Vec<&'static str> {
    MONITOR_REGISTRY.iter().map(|m| m.site_id).collect()
}

/// Looks up a monitor by site id. Returns `None` if not found.
pub fn find_monitor(site_id: &str) -> Option<&'static Monitor> {
    MONITOR_REGISTRY.iter().find(|m| m.site_id == site_id)
}

/// Monitors with a trained forecast artifact, i.e. the sites the temporal
/// predictor can roll forward.
pub fn sites_with_forecast_model() -> Vec<&'static Monitor> {
    MONITOR_REGISTRY
        .iter()
        .filter(|m| m.has_forecast_model)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

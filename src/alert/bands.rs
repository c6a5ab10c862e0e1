/// AQI severity band classification.
///
/// Maps a non-negative AQI value onto the EPA breakpoint ladder. The rule
/// is lower-bound inclusive, upper-bound exclusive — an AQI of exactly 50
/// is Moderate — and values at or above the last boundary saturate into the
/// top band. Negative AQI is not a defined input; classification clamps it
/// into the first band rather than panicking.

// ---------------------------------------------------------------------------
// Severity levels
// ---------------------------------------------------------------------------

/// EPA AQI severity categories, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AqiSeverity {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiSeverity {
    /// Human-readable category label, as printed in chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            AqiSeverity::Good => "Good",
            AqiSeverity::Moderate => "Moderate",
            AqiSeverity::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiSeverity::Unhealthy => "Unhealthy",
            AqiSeverity::VeryUnhealthy => "Very Unhealthy",
            AqiSeverity::Hazardous => "Hazardous",
        }
    }

    /// EPA display color for the band, as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            AqiSeverity::Good => "#00E400",
            AqiSeverity::Moderate => "#FFFF00",
            AqiSeverity::UnhealthyForSensitiveGroups => "#FF7E00",
            AqiSeverity::Unhealthy => "#FF0000",
            AqiSeverity::VeryUnhealthy => "#8F3F97",
            AqiSeverity::Hazardous => "#7E0023",
        }
    }
}

impl std::fmt::Display for AqiSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Breakpoint ladder
// ---------------------------------------------------------------------------

/// EPA AQI breakpoints. Band i spans `[BOUNDS[i], BOUNDS[i+1])`; values at
/// or above the final boundary belong to the last band.
pub const BOUNDS: [f64; 7] = [0.0, 50.0, 100.0, 150.0, 200.0, 300.0, 500.0];

/// One severity per band, aligned with `BOUNDS` windows.
const SEVERITIES: [AqiSeverity; 6] = [
    AqiSeverity::Good,
    AqiSeverity::Moderate,
    AqiSeverity::UnhealthyForSensitiveGroups,
    AqiSeverity::Unhealthy,
    AqiSeverity::VeryUnhealthy,
    AqiSeverity::Hazardous,
];

/// Classifies an AQI value into its severity band.
pub fn classify(aqi: f64) -> AqiSeverity {
    for i in 0..SEVERITIES.len() {
        if aqi >= BOUNDS[i] && aqi < BOUNDS[i + 1] {
            return SEVERITIES[i];
        }
    }
    if aqi < BOUNDS[0] {
        return SEVERITIES[0];
    }
    // At or above the last boundary (and NaN, which fails every window).
    SEVERITIES[SEVERITIES.len() - 1]
}

/// Display color for an AQI value; shorthand for `classify(aqi).color()`.
pub fn color_for(aqi: f64) -> &'static str {
    classify(aqi).color()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

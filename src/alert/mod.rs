//! Severity and confidence classification for predicted AQI values.
//!
//! Pure classification shared by consumers of both engines, so a kriging
//! surface and a forecast chart color the same value identically.
//!
//! Submodules:
//! - `bands` — EPA AQI breakpoint ladder with category names and colors.
//! - `confidence` — kriging-variance confidence classification.

pub mod bands;
pub mod confidence;

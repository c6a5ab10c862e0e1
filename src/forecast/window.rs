/// Fixed-geometry sliding window of scaled feature rows.
///
/// The sequence model consumes the last W feature rows at every step. The
/// window is a value, not a shared buffer: `advance` consumes the previous
/// window and returns the next one with the oldest row dropped and the new
/// row appended, so no two rollout steps can alias the same storage.

use std::collections::VecDeque;

use crate::model::ForecastError;

/// An ordered, fixed-size buffer of equal-width feature rows.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureWindow {
    rows: VecDeque<Vec<f64>>,
    width: usize,
}

impl FeatureWindow {
    /// Builds a window from seed rows (oldest first). All rows must share
    /// one width and there must be at least one row; the row count becomes
    /// the window's fixed length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, String> {
        let width = match rows.first() {
            Some(first) => first.len(),
            None => return Err("window requires at least one seed row".to_string()),
        };
        if width == 0 {
            return Err("window rows must have at least one feature".to_string());
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(format!(
                    "window row {} has width {}, expected {}",
                    i,
                    row.len(),
                    width
                ));
            }
        }
        Ok(FeatureWindow { rows: rows.into(), width })
    }

    /// Number of rows (the model's fixed sequence length W).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Feature count per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows in order, oldest first.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// The most recently appended row.
    pub fn latest(&self) -> &[f64] {
        // from_rows guarantees at least one row and advance preserves that.
        self.rows.back().expect("window is never empty").as_slice()
    }

    /// The state transition of the rollout: drop the oldest row, append the
    /// new one. Consumes the window — the previous state is not reusable.
    pub fn advance(mut self, row: Vec<f64>) -> Result<Self, ForecastError> {
        if row.len() != self.width {
            return Err(ForecastError::WindowMismatch {
                expected: self.width,
                actual: row.len(),
            });
        }
        self.rows.pop_front();
        self.rows.push_back(row);
        Ok(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use rayon::prelude::*;

use super::ValueRange;
use crate::utils::PARALLEL_THRESHOLD;

/// Running min/max of the finite samples seen by an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DataExtent {
    bounds: Option<ValueRange>,
}

impl DataExtent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans a batch of samples, skipping NaN and infinities.
    pub fn from_values(values: &[f64]) -> Self {
        let fold = |(lo, hi): (f64, f64), v: f64| (lo.min(v), hi.max(v));
        let (lo, hi) = if values.len() >= PARALLEL_THRESHOLD {
            values
                .par_iter()
                .copied()
                .filter(|v| v.is_finite())
                .fold(|| (f64::INFINITY, f64::NEG_INFINITY), fold)
                .reduce(
                    || (f64::INFINITY, f64::NEG_INFINITY),
                    |a, b| (a.0.min(b.0), a.1.max(b.1)),
                )
        } else {
            values
                .iter()
                .copied()
                .filter(|v| v.is_finite())
                .fold((f64::INFINITY, f64::NEG_INFINITY), fold)
        };

        if lo > hi {
            return Self::default();
        }
        Self {
            bounds: Some(ValueRange::new(lo, hi)),
        }
    }

    /// Adds one sample. Returns `true` when the extent grew.
    pub fn observe(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        if let Some(b) = self.bounds.as_mut() {
            if value < b.min {
                b.min = value;
                return true;
            }
            if value > b.max {
                b.max = value;
                return true;
            }
            return false;
        }
        self.bounds = Some(ValueRange::new(value, value));
        true
    }

    pub fn merge(&mut self, other: &DataExtent) {
        if let Some(o) = other.bounds {
            self.observe(o.min);
            self.observe(o.max);
        }
    }

    pub fn bounds(&self) -> Option<ValueRange> {
        self.bounds
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }
}

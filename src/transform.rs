//! Value <-> pixel mapping for a vertical axis

use rayon::prelude::*;
use tracing::warn;

use crate::data_types::{AxisMode, PixelRange, ValueRange};
use crate::scales::AxisScale;
use crate::utils::{sorted_pair, PARALLEL_THRESHOLD};

/// Immutable mapping between a value range and the rows of a viewport.
///
/// Built once per (range, pixel range, mode) and replaced, never mutated,
/// when any of them changes. Larger values land on smaller rows.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisMapping {
    mode: AxisMode,
    range: Option<ValueRange>,
    pixels: PixelRange,
    scale: AxisScale,
}

impl AxisMapping {
    pub fn new(range: ValueRange, pixels: PixelRange, mode: AxisMode) -> Self {
        if !range.is_finite() {
            warn!(min = range.min, max = range.max, "non-finite axis range, using identity mapping");
            return Self::identity(pixels, mode);
        }

        let (min, max) = if range.is_inverted() {
            warn!(min = range.min, max = range.max, "inverted axis range, mapping sorted bounds");
            sorted_pair(range.min, range.max)
        } else {
            (range.min, range.max)
        };

        let scale = AxisScale::for_mode(
            mode,
            (min, max),
            (f64::from(pixels.max_px), f64::from(pixels.min_px)),
        );
        Self {
            mode,
            range: Some(range),
            pixels,
            scale,
        }
    }

    /// Mapping for an axis that has nothing to show yet.
    pub fn identity(pixels: PixelRange, mode: AxisMode) -> Self {
        Self {
            mode,
            range: None,
            pixels,
            scale: AxisScale::Identity,
        }
    }

    pub fn mode(&self) -> AxisMode {
        self.mode
    }

    /// The value range this mapping was built for, `None` for the identity
    /// mapping.
    pub fn range(&self) -> Option<ValueRange> {
        self.range
    }

    pub fn pixel_range(&self) -> PixelRange {
        self.pixels
    }

    pub fn scale(&self) -> &AxisScale {
        &self.scale
    }

    pub fn is_identity(&self) -> bool {
        matches!(self.scale, AxisScale::Identity)
    }

    pub fn value_to_pixel(&self, value: f64) -> i32 {
        // `as` saturates and sends NaN to 0.
        self.value_to_pixel_f64(value).round() as i32
    }

    /// Unrounded row, for sub-pixel drawing.
    pub fn value_to_pixel_f64(&self, value: f64) -> f64 {
        self.scale.map(value)
    }

    pub fn pixel_to_value(&self, pixel: i32) -> f64 {
        self.pixel_to_value_f64(f64::from(pixel))
    }

    pub fn pixel_to_value_f64(&self, pixel: f64) -> f64 {
        self.scale.invert(pixel)
    }

    /// Maps a batch of samples, in order.
    pub fn values_to_pixels(&self, values: &[f64]) -> Vec<i32> {
        if values.len() >= PARALLEL_THRESHOLD {
            values.par_iter().map(|&v| self.value_to_pixel(v)).collect()
        } else {
            values.iter().map(|&v| self.value_to_pixel(v)).collect()
        }
    }

    /// Display-space distance covered by one pixel (`symlog` units in log
    /// mode). This is the round-trip tolerance of the mapping.
    pub fn pixel_size(&self) -> f64 {
        self.scale.units_per_pixel()
    }
}

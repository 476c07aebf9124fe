use crate::data_types::{AxisMode, DataExtent, ValueRange, YAxisConfig};
use crate::math::{antisymlog, symlog};

/// Layout decisions for an axis (displayed range, tick density), kept apart
/// from the axis state so they can be tested on their own.
pub struct ViewController;

impl ViewController {
    pub const MIN_TICK_COUNT: usize = 2;
    pub const MAX_TICK_COUNT: usize = 20;

    /// Pads `[min, max]` by `padding_pct` of its span on each side. A
    /// zero-width extent is padded by one unit. `None` for non-finite bounds.
    ///
    /// The result saturates at `±f64::MAX`, so a finite extent always gives a
    /// finite range.
    pub fn compute_auto_fit(min: f64, max: f64, padding_pct: f64) -> Option<(f64, f64)> {
        if !(min.is_finite() && max.is_finite()) {
            return None;
        }

        // Half span, so `max - min` cannot overflow.
        let half_span = (max / 2.0 - min / 2.0).abs();
        let padding = if half_span == 0.0 {
            1.0
        } else {
            half_span * padding_pct * 2.0
        };

        Some(((min - padding).max(f64::MIN), (max + padding).min(f64::MAX)))
    }

    /// Range shown for a data extent. Padding is applied in display space, so
    /// a log axis pads by a fraction of its `symlog` span.
    pub fn display_range(extent: ValueRange, mode: AxisMode, padding_pct: f64) -> Option<ValueRange> {
        match mode {
            AxisMode::Linear => {
                let (lo, hi) = Self::compute_auto_fit(extent.min, extent.max, padding_pct)?;
                Some(ValueRange::new(lo, hi))
            }
            AxisMode::Log => {
                let (lo, hi) =
                    Self::compute_auto_fit(symlog(extent.min), symlog(extent.max), padding_pct)?;
                Some(ValueRange::new(
                    antisymlog(lo).max(f64::MIN),
                    antisymlog(hi).min(f64::MAX),
                ))
            }
        }
    }

    /// Range an axis should show: the padded data extent when autoscaling,
    /// otherwise the configured manual range.
    pub fn resolve_range(config: &YAxisConfig, extent: &DataExtent) -> Option<ValueRange> {
        if config.autoscale {
            let bounds = extent.bounds()?;
            Self::display_range(bounds, config.mode(), config.autoscale_padding)
        } else {
            config.range.filter(|r| r.is_finite())
        }
    }

    /// Main tick count that keeps ticks about `spacing_px` apart.
    pub fn tick_count_for(pixels: i32, spacing_px: f32) -> usize {
        if pixels <= 0 || spacing_px.is_nan() || spacing_px <= 0.0 {
            return Self::MIN_TICK_COUNT;
        }
        let count = (pixels as f32 / spacing_px).floor() as usize;
        count.clamp(Self::MIN_TICK_COUNT, Self::MAX_TICK_COUNT)
    }
}

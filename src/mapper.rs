//! Tick sets and mappings for linear and log axes.

use std::sync::Arc;

use tracing::trace;

use crate::data_types::{AxisMode, PixelRange, Tick, ValueRange};
use crate::formats::{NumberFormat, TickFormat};
use crate::math::antisymlog;
use crate::ticks::{linear_tick_values, log_tick_positions, DEFAULT_TICK_COUNT, SECONDARY_TICK_COUNT};
use crate::transform::AxisMapping;
use crate::utils::labels::strip_common_affixes;

/// Computes labelled ticks and value/pixel mappings for an axis.
///
/// Output is a pure function of the inputs: the same range, pixel range and
/// mode always give the same ticks, down to the label text.
#[derive(Clone, Debug)]
pub struct LogAxisMapper {
    format: Arc<dyn TickFormat>,
    secondary_count: usize,
}

impl Default for LogAxisMapper {
    fn default() -> Self {
        Self::new(Arc::new(NumberFormat))
    }
}

impl LogAxisMapper {
    pub fn new(format: Arc<dyn TickFormat>) -> Self {
        Self {
            format,
            secondary_count: SECONDARY_TICK_COUNT,
        }
    }

    pub fn with_secondary_count(mut self, secondary_count: usize) -> Self {
        self.secondary_count = secondary_count;
        self
    }

    pub fn format(&self) -> &Arc<dyn TickFormat> {
        &self.format
    }

    /// Evenly spaced ticks. Pixel offsets are left at zero.
    pub fn compute_linear_ticks(&self, range: ValueRange, desired_count: usize) -> Vec<Tick> {
        self.label(linear_tick_values(range, desired_count))
    }

    /// Log ticks with [`DEFAULT_TICK_COUNT`] main ticks. Pixel offsets are
    /// left at zero.
    pub fn compute_log_ticks(&self, range: ValueRange) -> Vec<Tick> {
        self.compute_log_ticks_with_count(range, DEFAULT_TICK_COUNT)
    }

    pub fn compute_log_ticks_with_count(&self, range: ValueRange, main_count: usize) -> Vec<Tick> {
        let mut values: Vec<f64> = log_tick_positions(range, main_count, self.secondary_count)
            .into_iter()
            .map(|p| antisymlog(p).clamp(range.min, range.max))
            .collect();
        // Distinct positions can land on the same value far from zero.
        values.dedup_by(|later, kept| *later <= *kept);
        self.label(values)
    }

    pub fn mapping(&self, range: ValueRange, pixels: PixelRange, mode: AxisMode) -> AxisMapping {
        AxisMapping::new(range, pixels, mode)
    }

    /// Ticks for the mapping's range and mode, placed on its pixel rows.
    /// Empty for an identity mapping.
    pub fn ticks(&self, mapping: &AxisMapping, desired_count: usize) -> Vec<Tick> {
        let Some(range) = mapping.range() else {
            return Vec::new();
        };
        let mut ticks = match mapping.mode() {
            AxisMode::Linear => self.compute_linear_ticks(range, desired_count),
            AxisMode::Log => self.compute_log_ticks_with_count(range, desired_count),
        };
        for tick in &mut ticks {
            tick.pixel_offset = mapping.value_to_pixel(tick.value);
        }
        trace!(mode = ?mapping.mode(), count = ticks.len(), "computed axis ticks");
        ticks
    }

    fn label(&self, values: Vec<f64>) -> Vec<Tick> {
        let mut labels = self.format.format_ticks(&values);
        strip_common_affixes(&mut labels);
        values
            .into_iter()
            .zip(labels)
            .map(|(value, label)| Tick {
                value,
                label,
                pixel_offset: 0,
            })
            .collect()
    }
}

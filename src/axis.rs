//! Y Axis Model
//!
//! `YAxis` owns everything one plot needs to draw its vertical axis: the
//! persisted settings, the data extent seen so far, the current mapping and
//! the tick set derived from it. Any input change rebuilds mapping and ticks
//! synchronously; nothing is shared with other axes except the formatter.

use eyre::Result;
use tracing::debug;

use crate::data_types::{AxisMode, DataExtent, PixelRange, Tick, ValueRange, YAxisConfig};
use crate::formats::FormatRegistry;
use crate::mapper::LogAxisMapper;
use crate::transform::AxisMapping;
use crate::view_controller::ViewController;

#[derive(Debug)]
pub struct YAxis {
    config: YAxisConfig,
    mapper: LogAxisMapper,
    pixels: PixelRange,
    extent: DataExtent,
    mapping: AxisMapping,
    ticks: Vec<Tick>,
}

impl YAxis {
    pub fn new(config: YAxisConfig, pixels: PixelRange, registry: &FormatRegistry) -> Result<Self> {
        config.validate()?;
        let mapper = LogAxisMapper::new(registry.resolve(&config.format));
        let mut axis = Self {
            mapping: AxisMapping::identity(pixels, config.mode()),
            config,
            mapper,
            pixels,
            extent: DataExtent::new(),
            ticks: Vec::new(),
        };
        axis.rebuild();
        Ok(axis)
    }

    pub fn config(&self) -> &YAxisConfig {
        &self.config
    }

    pub fn mode(&self) -> AxisMode {
        self.config.mode()
    }

    pub fn extent(&self) -> &DataExtent {
        &self.extent
    }

    pub fn mapping(&self) -> &AxisMapping {
        &self.mapping
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }

    /// Range currently displayed, `None` while there is nothing to show.
    pub fn display_range(&self) -> Option<ValueRange> {
        self.mapping.range()
    }

    /// Switches between linear and log display. Returns `false` when the axis
    /// already was in the requested mode.
    pub fn set_log_mode(&mut self, log_mode: bool) -> bool {
        if self.config.log_mode == log_mode {
            return false;
        }
        debug!(
            from = ?self.config.mode(),
            to = ?AxisMode::from_log_flag(log_mode),
            "axis mode change"
        );
        self.config.log_mode = log_mode;
        self.rebuild();
        true
    }

    pub fn set_pixel_range(&mut self, pixels: PixelRange) {
        if self.pixels == pixels {
            return;
        }
        self.pixels = pixels;
        self.rebuild();
    }

    pub fn set_data_extent(&mut self, extent: DataExtent) {
        self.extent = extent;
        self.rebuild();
    }

    /// Feeds one telemetry sample. Ticks are only recomputed when the sample
    /// widens the extent of an autoscaled axis.
    pub fn observe(&mut self, value: f64) {
        if self.extent.observe(value) && self.config.autoscale {
            self.rebuild();
        }
    }

    pub fn observe_all(&mut self, values: &[f64]) {
        let before = self.extent;
        self.extent.merge(&DataExtent::from_values(values));
        if self.extent != before && self.config.autoscale {
            self.rebuild();
        }
    }

    /// Pins the axis to `range`, or returns to autoscaling with `None`.
    pub fn set_manual_range(&mut self, range: Option<ValueRange>) {
        self.config.autoscale = range.is_none();
        self.config.range = range;
        self.rebuild();
    }

    /// Replaces the settings, e.g. after loading a saved plot.
    pub fn apply_config(&mut self, config: YAxisConfig, registry: &FormatRegistry) -> Result<()> {
        config.validate()?;
        if config.format != self.config.format {
            self.mapper = LogAxisMapper::new(registry.resolve(&config.format));
        }
        self.config = config;
        self.rebuild();
        Ok(())
    }

    pub fn value_to_pixel(&self, value: f64) -> i32 {
        self.mapping.value_to_pixel(value)
    }

    pub fn pixel_to_value(&self, pixel: i32) -> f64 {
        self.mapping.pixel_to_value(pixel)
    }

    fn rebuild(&mut self) {
        let mode = self.config.mode();
        self.mapping = match ViewController::resolve_range(&self.config, &self.extent) {
            Some(range) => self.mapper.mapping(range, self.pixels, mode),
            None => AxisMapping::identity(self.pixels, mode),
        };

        let count = ViewController::tick_count_for(self.pixels.extent(), self.config.tick_spacing_px);
        self.ticks = self.mapper.ticks(&self.mapping, count);

        debug!(
            ?mode,
            range = ?self.mapping.range(),
            ticks = self.ticks.len(),
            "rebuilt axis mapping"
        );
    }
}

use std::path::Path;

use eyre::{ensure, Result, WrapErr};
use serde::{Deserialize, Serialize};

use super::{AxisMode, ValueRange};

/// Persisted y-axis settings of a plot.
///
/// Serialised with camelCase keys (`logMode`, `autoscalePadding`, ...) so that
/// exported plot configurations stay readable by other tools.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YAxisConfig {
    pub log_mode: bool,
    pub autoscale: bool,
    /// Fraction of the data span added above and below the data when
    /// autoscaling. Applied in display space.
    pub autoscale_padding: f64,
    /// Range used when `autoscale` is off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<ValueRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Key of the tick formatter, see [`crate::formats::FormatRegistry`].
    pub format: String,
    /// Minimum vertical distance between main ticks.
    pub tick_spacing_px: f32,
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self {
            log_mode: false,
            autoscale: true,
            autoscale_padding: 0.1,
            range: None,
            label: None,
            format: "number".to_string(),
            tick_spacing_px: 50.0,
        }
    }
}

impl YAxisConfig {
    pub fn mode(&self) -> AxisMode {
        AxisMode::from_log_flag(self.log_mode)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.autoscale_padding.is_finite() && self.autoscale_padding >= 0.0,
            "autoscale padding must be a finite, non-negative fraction (got {})",
            self.autoscale_padding
        );
        ensure!(
            self.tick_spacing_px.is_finite() && self.tick_spacing_px > 0.0,
            "tick spacing must be a positive number of pixels (got {})",
            self.tick_spacing_px
        );
        if let Some(range) = self.range {
            ensure!(
                range.is_finite(),
                "manual range bounds must be finite (got {} .. {})",
                range.min,
                range.max
            );
        }
        ensure!(!self.format.is_empty(), "format key must not be empty");
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("invalid y-axis configuration JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize y-axis configuration")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read axis configuration {}", path.display()))?;
        Self::from_json(&json).wrap_err_with(|| format!("in {}", path.display()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)
            .wrap_err_with(|| format!("failed to write axis configuration {}", path.display()))
    }
}

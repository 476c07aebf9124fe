use serde::{Deserialize, Serialize};

/// Data-space extent shown on an axis. May straddle zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Zero-width range (`min == max`).
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Canvas rows covered by a vertical axis.
///
/// `min_px` is the top row and shows the largest value, `max_px` is the bottom
/// row and shows the smallest one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRange {
    pub min_px: i32,
    pub max_px: i32,
}

impl PixelRange {
    pub fn new(min_px: i32, max_px: i32) -> Self {
        Self { min_px, max_px }
    }

    pub fn extent(&self) -> i32 {
        self.max_px.saturating_sub(self.min_px)
    }
}

/// A labelled mark on the axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    /// Row of the tick inside the owning [`PixelRange`]. Zero until the tick
    /// is placed by a mapping.
    pub pixel_offset: i32,
}

/// Display mode of an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisMode {
    #[default]
    Linear,
    /// Symmetric base-10 logarithm, see [`crate::math::symlog`].
    Log,
}

impl AxisMode {
    pub fn from_log_flag(log_mode: bool) -> Self {
        if log_mode {
            Self::Log
        } else {
            Self::Linear
        }
    }

    pub fn is_log(self) -> bool {
        self == Self::Log
    }
}
